use crate::health::{self, HealthConfig, HealthError};
use crate::node::{Link, Links, Node};
use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::fmt;
use core::iter::FromIterator;
use core::marker::PhantomData;
use num::PrimInt;

/// A singly linked list of values of type `T`.
///
/// Each node is owned by its predecessor, the head by the list. The list also
/// keeps a link to the tail so `add_last` is O(1).
pub struct LinkedList<T> {
    pub(crate) first: Link<T>,
    pub(crate) last: Link<T>,
    pub(crate) size: usize,
    marker: PhantomData<Box<Node<T>>>,
}

unsafe impl<T: Send> Send for LinkedList<T> {}
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> LinkedList<T> {
    /// Create a new empty list.
    pub fn new() -> Self {
        LinkedList {
            first: None,
            last: None,
            size: 0,
            marker: PhantomData,
        }
    }

    /// Insert `value` at the beginning of the list.
    pub fn add_first(&mut self, value: T) {
        let node = Node::new(value, self.first).into_link();
        if self.first.is_none() {
            self.last = Some(node);
        }
        self.first = Some(node);
        self.size += 1;
    }

    /// Insert `value` at the end of the list.
    pub fn add_last(&mut self, value: T) {
        match self.last {
            None => self.add_first(value),
            Some(last) => {
                let node = Node::new(value, None).into_link();
                //no reference into the chain outlives a &mut self call
                unsafe { (*last.as_ptr()).next = Some(node) };
                self.last = Some(node);
                self.size += 1;
            }
        }
    }

    /// The first value, `None` if the list is empty.
    pub fn get_first(&self) -> Option<&T> {
        self.head().map(|n| &n.value)
    }

    /// The last value, `None` if the list is empty.
    pub fn get_last(&self) -> Option<&T> {
        self.last.map(|n| unsafe { &(*n.as_ptr()).value })
    }

    /// The value at zero based position `index`.
    ///
    /// `None` if the list is empty, `index` is negative or `index` is past the end.
    /// Only integer indices are accepted:
    ///
    /// ```compile_fail
    /// let l = sllist::llist![10, 11, 12];
    /// l.get(-0.5f64);
    /// ```
    pub fn get<I: PrimInt>(&self, index: I) -> Option<&T> {
        let depth = index.to_isize()?;
        if depth < 0 {
            return None;
        }
        self.head()?.retrieve(depth)
    }

    /// Remove and return the first value, `None` if the list is empty.
    pub fn remove_first(&mut self) -> Option<T> {
        let head = self.first?;
        let Node { value, next } = unsafe { Node::free(head) };
        self.first = next;
        if self.first.is_none() {
            self.last = None;
        }
        self.size -= 1;
        Some(value)
    }

    /// Remove every value.
    pub fn clear(&mut self) {
        if self.size > 0 {
            log::trace!("clearing list of {} elements", self.size);
        }
        let mut cur = self.first.take();
        self.last = None;
        self.size = 0;
        while let Some(link) = cur {
            cur = unsafe { Node::free(link) }.next;
        }
    }

    /// The number of values in the list.
    pub fn size(&self) -> usize {
        self.size
    }

    /// `true` if the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Render the list as `[v1, v2, ..., vn]`, `[]` when empty.
    pub fn render(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }

    /// Audit the list structure with the default `HealthConfig`.
    pub fn check_health(&self) -> Result<(), HealthError> {
        self.check_health_with(&HealthConfig::default())
    }

    /// Audit the list structure, logging the reason of any failure.
    pub fn check_health_with(&self, config: &HealthConfig) -> Result<(), HealthError> {
        let r = health::audit(self, config);
        if let Err(e) = &r {
            log::warn!("unhealthy list: {}", e);
        }
        r
    }

    /// `true` if `check_health` finds nothing wrong.
    pub fn is_healthy(&self) -> bool {
        self.check_health().is_ok()
    }

    pub(crate) fn head(&self) -> Option<&Node<T>> {
        self.first.map(|n| unsafe { &*n.as_ptr() })
    }

    pub(crate) fn links(&self) -> Links<'_, T> {
        Links::new(self.head())
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Display for LinkedList<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.links().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}

impl<T> fmt::Debug for LinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.links()).finish()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.links().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.links().eq(other.links())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.add_last(v);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut l = Self::new();
        l.extend(iter);
        l
    }
}
