#![cfg_attr(not(feature = "std"), no_std)]

//! A generic singly linked list with O(1) insertion at both ends, O(1) removal
//! from the front, indexed access, and a self auditing health check.

extern crate alloc;

#[macro_use]
mod macros;

pub mod health;
pub mod list;
mod node;
pub mod shared;

#[cfg(feature = "with_serde")]
mod serde_impl;

pub use health::{HealthConfig, HealthError, DEFAULT_HEALTH_CEILING};
pub use list::LinkedList;
pub use shared::{new_shared, SharedList};
