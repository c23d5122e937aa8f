//! A height-balanced (AVL) binary search tree.

mod node;

use crate::{
    comparator::{Comparator, NaturalOrder},
    iter::{self, OwnedIter, RefIter},
};

use node::{remove_recurse, Node};

/// A self-balancing binary search tree of unique values, ordered by a
/// [`Comparator`].
///
/// After every insert and delete the tree is rebalanced with rotations, such
/// that for every node the heights of its two subtrees differ by at most one.
/// This bounds the height of a tree holding `n` values to roughly
/// `1.44 * log2(n + 2)`.
///
/// ```
/// use avlbst::AvlTree;
///
/// let mut t = AvlTree::new();
/// for v in 1..=7 {
///     t.insert(v);
/// }
///
/// // Ascending inserts still produce a balanced tree.
/// assert_eq!(t.height(), 3);
/// assert_eq!(t.pre_order(), [&4, &2, &1, &3, &6, &5, &7]);
///
/// assert_eq!(t.delete(&4), Some(4));
/// assert_eq!(t.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 5, 6, 7]);
/// ```
#[derive(Debug, Clone)]
pub struct AvlTree<T, C = NaturalOrder> {
    root: Option<Box<Node<T>>>,
    len: usize,
    cmp: C,
}

impl<T, C> Default for AvlTree<T, C>
where
    C: Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Construct an empty tree ordered by the natural [`Ord`] of `T`.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C> AvlTree<T, C> {
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
    /// Time complexity: `O(1)`
    pub fn height(&self) -> usize {
        node::height(self.root.as_deref()) as usize
    }

    /// Remove all values from the tree.
    pub fn clear(&mut self) {
        self.root = None;
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
    ///
    /// The first value is the root of the tree.
    pub fn pre_order(&self) -> Vec<&T> {
        iter::pre_order(self.root.as_deref())
    }

    /// Collect the values visited by a post-order (left, right, self) walk.
    pub fn post_order(&self) -> Vec<&T> {
        iter::post_order(self.root.as_deref())
    }
}

impl<T, C> AvlTree<T, C>
where
    C: Comparator<T>,
{
    /// Insert `value` into the tree, rebalancing it as necessary.
    ///
    /// Returns false, leaving the tree unchanged, if an equal value is
    /// already present.
    ///
    /// Time complexity: `O(log n)`
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = match self.root {
            Some(ref mut v) => v.insert(value, &self.cmp).is_some(),
            None => {
                self.root = Some(Box::new(Node::new(value)));
                true
            }
        };

        if inserted {
            self.len += 1;
        }

        inserted
    }

    /// Return the stored value equal to `value`, if any.
    ///
    /// Time complexity: `O(log n)`
    pub fn search(&self, value: &T) -> Option<&T> {
        self.root.as_ref().and_then(|v| v.get(value, &self.cmp))
    }

    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Remove the value equal to `value` from the tree, returning it, and
    /// rebalance the tree.
    ///
    /// Returns [`None`], leaving the tree unchanged, if no such value exists.
    ///
    /// Time complexity: `O(log n)`
    pub fn delete(&mut self, value: &T) -> Option<T> {
        let v = remove_recurse(&mut self.root, value, &self.cmp)?;
        self.len -= 1;
        Some(v)
    }
}

impl<T, C> FromIterator<T> for AvlTree<T, C>
where
    C: Comparator<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}

impl<T, C> Extend<T> for AvlTree<T, C>
where
    C: Comparator<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<T, C> IntoIterator for AvlTree<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(OwnedIter::new(self.root))
    }
}

impl<'a, T, C> IntoIterator for &'a AvlTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An in-order iterator over references to the values of an [`AvlTree`].
#[derive(Debug)]
pub struct Iter<'a, T>(RefIter<'a, Node<T>>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

/// An in-order iterator over the owned values of an [`AvlTree`].
#[derive(Debug)]
pub struct IntoIter<T>(OwnedIter<Node<T>>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}
