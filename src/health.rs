//! Structural self audit of a `LinkedList`.
//!
//! The audit is read only and bounded by a node ceiling so it is safe to run
//! against any list, including one whose bookkeeping has been corrupted.

use crate::list::LinkedList;
use crate::node::Node;
use core::fmt;

/// The default maximum number of nodes `check_health` will walk.
pub const DEFAULT_HEALTH_CEILING: usize = 10_000;

/// Settings for `LinkedList::check_health_with`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthConfig {
    /// A walk that reaches this many nodes is reported as `CeilingReached`.
    pub ceiling: usize,
}

impl Default for HealthConfig {
    fn default() -> Self {
        HealthConfig {
            ceiling: DEFAULT_HEALTH_CEILING,
        }
    }
}

/// Why a list failed its health check.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HealthError {
    /// The chain is at least `ceiling` nodes long, too large to check.
    CeilingReached { ceiling: usize },
    /// The number of nodes reachable from the head disagrees with the recorded size.
    SizeMismatch { counted: usize, recorded: usize },
    /// The size is zero but a head or tail is still set.
    BadEmpty,
    /// The size is non zero but the head or tail is missing.
    MissingEnds,
    /// The tail node links to another node.
    TailLinksFurther,
    /// The tail is not the final node of the chain.
    TailNotLast,
}

impl fmt::Display for HealthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthError::CeilingReached { ceiling } => write!(
                f,
                "list too large to check (at least {} elements)",
                ceiling
            ),
            HealthError::SizeMismatch { counted, recorded } => write!(
                f,
                "incorrect size: counted {} elements, recorded {}",
                counted, recorded
            ),
            HealthError::BadEmpty => write!(f, "bad empty list: head or tail still set"),
            HealthError::MissingEnds => write!(f, "non empty list is missing its head or tail"),
            HealthError::TailLinksFurther => write!(f, "tail points to another element"),
            HealthError::TailNotLast => write!(f, "tail is not the last element of the chain"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HealthError {}

/// Walk `list` and compare what is reachable against its bookkeeping.
pub(crate) fn audit<T>(list: &LinkedList<T>, config: &HealthConfig) -> Result<(), HealthError> {
    let mut end: Option<*const Node<T>> = None;
    if let Some(head) = list.head() {
        let mut tally = 1;
        let mut node = head;
        //a ceiling of 0 or 1 still flags any non empty chain
        if tally >= config.ceiling {
            return Err(HealthError::CeilingReached {
                ceiling: config.ceiling,
            });
        }
        while let Some(next) = node.next_node() {
            tally += 1;
            if tally >= config.ceiling {
                return Err(HealthError::CeilingReached {
                    ceiling: config.ceiling,
                });
            }
            node = next;
        }
        if tally != list.size {
            return Err(HealthError::SizeMismatch {
                counted: tally,
                recorded: list.size,
            });
        }
        end = Some(node as *const Node<T>);
    }

    if list.size == 0 {
        if list.first.is_some() || list.last.is_some() {
            return Err(HealthError::BadEmpty);
        }
        return Ok(());
    }

    let last = match (list.first, list.last) {
        (Some(_), Some(last)) => last,
        _ => return Err(HealthError::MissingEnds),
    };
    let tail = unsafe { &*last.as_ptr() };
    if tail.next.is_some() {
        return Err(HealthError::TailLinksFurther);
    }
    if end != Some(last.as_ptr() as *const Node<T>) {
        return Err(HealthError::TailNotLast);
    }
    Ok(())
}
