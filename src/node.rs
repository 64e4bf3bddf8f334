use alloc::boxed::Box;
use core::fmt;
use core::ptr::NonNull;

/// A link to a heap node created by `Node::into_link` and freed with `Node::free`.
pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

/// One element of the chain, owned by its predecessor or by the list for the head.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

/// A traversal was asked to walk a negative number of hops.
///
/// This is a bug in the caller, so `Node::retrieve` panics with this message
/// instead of returning it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct NegativeDepth(pub isize);

impl fmt::Display for NegativeDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "retrieve called with negative depth {}", self.0)
    }
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, next: Link<T>) -> Self {
        Node { value, next }
    }

    /// Move the node to the heap, the caller now owns the returned pointer.
    pub(crate) fn into_link(self) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(self)))
    }

    /// Take back ownership of a node created by `into_link`.
    ///
    /// # Safety
    ///
    /// `link` must come from `into_link`, must not be freed already and no
    /// reference into the node may outlive this call.
    pub(crate) unsafe fn free(link: NonNull<Node<T>>) -> Self {
        *Box::from_raw(link.as_ptr())
    }

    /// The following node, borrowed for as long as this one.
    pub(crate) fn next_node(&self) -> Option<&Node<T>> {
        //a live node's next is either None or a live node of the same chain
        self.next.map(|n| unsafe { &*n.as_ptr() })
    }

    /// The value `depth` hops forward of this node, `None` if the chain ends first.
    ///
    /// # Panics
    ///
    /// If `depth` is negative.
    pub(crate) fn retrieve(&self, depth: isize) -> Option<&T> {
        match self.try_retrieve(depth) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }

    pub(crate) fn try_retrieve(&self, depth: isize) -> Result<Option<&T>, NegativeDepth> {
        if depth < 0 {
            return Err(NegativeDepth(depth));
        }
        let mut node = self;
        for _ in 0..depth {
            match node.next_node() {
                Some(n) => node = n,
                None => return Ok(None),
            }
        }
        Ok(Some(&node.value))
    }
}

/// Walks the values of a chain by shared reference, head to tail.
pub(crate) struct Links<'a, T> {
    cur: Option<&'a Node<T>>,
}

impl<'a, T> Links<'a, T> {
    pub(crate) fn new(head: Option<&'a Node<T>>) -> Self {
        Links { cur: head }
    }
}

impl<'a, T> Iterator for Links<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.cur.map(|n| {
            self.cur = n.next_node();
            &n.value
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LinkedList;

    #[test]
    fn retrieve_walks_forward() {
        let l: LinkedList<i32> = (10..13).collect();
        let head = l.head().unwrap();
        assert_eq!(Some(&10), head.retrieve(0));
        assert_eq!(Some(&11), head.retrieve(1));
        assert_eq!(Some(&12), head.retrieve(2));
        assert_eq!(None, head.retrieve(3));
        assert_eq!(None, head.retrieve(isize::MAX));
    }

    #[test]
    fn try_retrieve_negative() {
        let l: LinkedList<i32> = (1..2).collect();
        let head = l.head().unwrap();
        assert_eq!(Err(NegativeDepth(-1)), head.try_retrieve(-1));
        assert_eq!(Ok(Some(&1)), head.try_retrieve(0));
    }

    #[test]
    #[should_panic(expected = "negative depth")]
    fn retrieve_negative_panics() {
        let l: LinkedList<i32> = (1..3).collect();
        l.head().unwrap().retrieve(-3);
    }

    #[test]
    fn into_link_and_free() {
        let b = Node::new(2, None).into_link();
        let a = Node::new(1, Some(b)).into_link();
        let head = unsafe { a.as_ref() };
        let v: Vec<i32> = Links::new(Some(head)).copied().collect();
        assert_eq!(vec![1, 2], v);
        assert_eq!(0, Links::<i32>::new(None).count());

        let a = unsafe { Node::free(a) };
        assert_eq!(1, a.value);
        assert_eq!(Some(b), a.next);
        let b = unsafe { Node::free(b) };
        assert_eq!(2, b.value);
        assert_eq!(None, b.next);
    }
}
