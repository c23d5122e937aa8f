//! An unbalanced binary search tree.

mod node;

use std::fmt::Debug;

use crate::{
    comparator::{Comparator, NaturalOrder},
    iter::{self, OwnedIter, RefIter},
};

use node::Node;

/// A plain binary search tree of unique values, ordered by a [`Comparator`].
///
/// No rebalancing is performed, so the height of the tree is bounded only by
/// the number of values it holds: inserting values in ascending order
/// degenerates the tree into a chain. See [`AvlTree`] for a height-balanced
/// alternative.
///
/// ```
/// use avlbst::BinarySearchTree;
///
/// let mut t = BinarySearchTree::new();
/// for v in [50, 30, 70] {
///     t.insert(v);
/// }
///
/// assert_eq!(t.search(&30), Some(&30));
/// assert_eq!(t.pre_order(), [&50, &30, &70]);
/// ```
///
/// [`AvlTree`]: crate::AvlTree
pub struct BinarySearchTree<T, C = NaturalOrder> {
    root: Option<Box<Node<T>>>,
    len: usize,
    cmp: C,
}

impl<T, C> Debug for BinarySearchTree<T, C>
where
    T: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C> Clone for BinarySearchTree<T, C>
where
    T: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: node::clone_subtree(self.root.as_deref()),
            len: self.len,
            cmp: self.cmp.clone(),
        }
    }
}

impl<T, C> Drop for BinarySearchTree<T, C> {
    fn drop(&mut self) {
        node::drop_subtree(&mut self.root);
    }
}

impl<T, C> Default for BinarySearchTree<T, C>
where
    C: Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T> BinarySearchTree<T>
where
    T: Ord,
{
    /// Construct an empty tree ordered by the natural [`Ord`] of `T`.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C> BinarySearchTree<T, C> {
    /// Construct an empty tree ordered by `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: None,
            len: 0,
            cmp,
        }
    }

    /// The number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        debug_assert!(self.len != 0 || self.root.is_none());
        self.len == 0
    }

    /// The height of the tree, where an empty tree has a height of 0 and a
    /// single value a height of 1.
    ///
    /// Time complexity: `O(n)`
    pub fn height(&self) -> usize {
        node::height(self.root.as_deref())
    }

    /// Remove all values from the tree.
    pub fn clear(&mut self) {
        node::drop_subtree(&mut self.root);
        self.len = 0;
    }

    /// Iterate over the values in ascending comparator order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(RefIter::new(self.root.as_deref()))
    }

    /// Collect the values visited by an in-order (left, self, right) walk,
    /// yielding them in ascending comparator order.
    pub fn in_order(&self) -> Vec<&T> {
        iter::in_order(self.root.as_deref())
    }

    /// Collect the values visited by a pre-order (self, left, right) walk.
    pub fn pre_order(&self) -> Vec<&T> {
        iter::pre_order(self.root.as_deref())
    }

    /// Collect the values visited by a post-order (left, right, self) walk.
    pub fn post_order(&self) -> Vec<&T> {
        iter::post_order(self.root.as_deref())
    }
}

impl<T, C> BinarySearchTree<T, C>
where
    C: Comparator<T>,
{
    /// Insert `value` into the tree.
    ///
    /// Returns false, leaving the tree unchanged, if an equal value is
    /// already present.
    ///
    /// Time complexity: `O(h)`
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = node::insert(&mut self.root, value, &self.cmp);
        if inserted {
            self.len += 1;
        }

        inserted
    }

    /// Return the stored value equal to `value`, if any.
    ///
    /// Time complexity: `O(h)`
    pub fn search(&self, value: &T) -> Option<&T> {
        self.root.as_ref().and_then(|v| v.get(value, &self.cmp))
    }

    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Remove the value equal to `value` from the tree, returning it.
    ///
    /// Returns [`None`], leaving the tree unchanged, if no such value exists.
    ///
    /// Time complexity: `O(h)`
    pub fn delete(&mut self, value: &T) -> Option<T> {
        let v = node::remove(&mut self.root, value, &self.cmp)?;
        self.len -= 1;
        Some(v)
    }
}

impl<T, C> FromIterator<T> for BinarySearchTree<T, C>
where
    C: Comparator<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}

impl<T, C> Extend<T> for BinarySearchTree<T, C>
where
    C: Comparator<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<T, C> IntoIterator for BinarySearchTree<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter(OwnedIter::new(self.root.take()))
    }
}

impl<'a, T, C> IntoIterator for &'a BinarySearchTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An in-order iterator over references to the values of a
/// [`BinarySearchTree`].
pub struct Iter<'a, T>(RefIter<'a, Node<T>>);

impl<T> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Iter").finish_non_exhaustive()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

/// An in-order iterator over the owned values of a [`BinarySearchTree`].
pub struct IntoIter<T>(OwnedIter<Node<T>>);

impl<T> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntoIter").finish_non_exhaustive()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Each yielded node is detached from its right subtree first.
        for _ in self.0.by_ref() {}
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}
