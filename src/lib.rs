//! Binary search trees with pluggable ordering.
//!
//! This crate provides two ordered containers of unique values:
//!
//! * [`AvlTree`]: a self-balancing binary search tree, rotating nodes after
//!   every insert and delete to keep the height of the tree `O(log n)`.
//! * [`BinarySearchTree`]: a plain, unbalanced binary search tree with the
//!   classic in-order, pre-order and post-order traversals.
//!
//! Both trees order their values with a [`Comparator`], defaulting to the
//! natural [`Ord`] ordering of the value type ([`NaturalOrder`]). Any
//! `Fn(&T, &T) -> Ordering` closure may be used to provide a custom ordering.
//!
//! ```
//! use avlbst::{AvlTree, BinarySearchTree};
//!
//! let mut avl = AvlTree::new();
//! let mut bst = BinarySearchTree::new();
//!
//! for v in 1..=5 {
//!     avl.insert(v);
//!     bst.insert(v);
//! }
//!
//! // The same values, in very different shapes.
//! assert_eq!(avl.height(), 3);
//! assert_eq!(bst.height(), 5);
//! assert_eq!(avl.in_order(), bst.in_order());
//! ```
//!
//! Neither tree performs any internal synchronisation - concurrent mutation
//! requires the caller to wrap the tree in a lock.

#![deny(rust_2018_idioms)]
#![warn(missing_debug_implementations, missing_copy_implementations)]

pub mod avl;
pub mod bst;
mod comparator;
mod iter;

#[cfg(test)]
mod test_utils;

pub use avl::AvlTree;
pub use bst::BinarySearchTree;
pub use comparator::{Comparator, NaturalOrder};

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn require_send<T: Send>() {}
    fn require_sync<T: Sync>() {}

    #[test]
    fn test_send_sync() {
        require_send::<AvlTree<u32>>();
        require_sync::<AvlTree<u32>>();
        require_send::<BinarySearchTree<String>>();
        require_sync::<BinarySearchTree<String>>();

        require_send::<AvlTree<Cell<u32>>>();
        require_send::<avl::Iter<'static, u32>>();
        require_send::<bst::IntoIter<u32>>();
    }
}
