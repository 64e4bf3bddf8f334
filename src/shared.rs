//! A lock guarded list handle for callers that share one list across threads.

use crate::list::LinkedList;
use alloc::sync::Arc;
use spin::Mutex;

/// A sync/send shared list, every operation holds the one lock around the whole list.
pub type SharedList<T> = Arc<Mutex<LinkedList<T>>>;

/// Create an empty `SharedList`.
pub fn new_shared<T>() -> SharedList<T> {
    Arc::new(Mutex::new(LinkedList::new()))
}
