#![macro_use]

/// Build a `LinkedList` from its values, first to last, like `vec!`.
#[macro_export]
macro_rules! llist {
    () => {
        $crate::LinkedList::new()
    };
    ( $( $x:expr ),+ $(,)? ) => {{
        let mut l = $crate::LinkedList::new();
        $( l.add_last($x); )+
        l
    }};
}

#[cfg(test)]
mod tests {
    use crate::LinkedList;

    #[test]
    fn llist() {
        let l: LinkedList<i32> = llist![];
        assert_eq!("[]", l.render());
        let l = llist![1, 2, 3,];
        assert_eq!("[1, 2, 3]", l.render());
        assert_eq!(3, l.size());
    }
}
