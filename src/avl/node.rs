use std::cmp::Ordering;

use crate::{comparator::Comparator, iter::TreeNode};

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    /// Child nodes pointers.
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 1, and an empty subtree a height of 0.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ entries.
    height: u8,

    value: T,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Insert `value` into the subtree rooted at `self`, rebalancing it on
    /// the way back up.
    ///
    /// Returns [`None`] if an equal value already exists, leaving the subtree
    /// unchanged. Otherwise returns the ordering of `value` relative to the
    /// value held in `self` (the direction the insert descended in from this
    /// node), which is never [`Ordering::Equal`].
    pub(crate) fn insert<C>(self: &mut Box<Self>, value: T, cmp: &C) -> Option<Ordering>
    where
        C: Comparator<T>,
    {
        let ord = cmp.compare(&value, &self.value);
        let child = match ord {
            Ordering::Less => &mut self.left,
            Ordering::Equal => return None,
            Ordering::Greater => &mut self.right,
        };

        // The ordering of "value" relative to the value of "child".
        let child_ord = match child {
            Some(v) => v.insert(value, cmp)?,
            None => {
                // Insert the value as a new immediate descendent of self.
                *child = Some(Box::new(Self::new(value)));

                // Inserting this new child node cannot skew the tree in the
                // direction of the new addition such that it requires the tree
                // be rebalanced as, at most, it creates an absolute difference
                // of 1 in this direction (from balanced, or slightly skewed in
                // the opposite direction).
                //
                // Update this node and skip the rebalancing checks.
                update_height(self);
                return Some(ord);
            }
        };

        update_height(self);

        // Only the path to the new value changed height, so the position of
        // the new value relative to the heavy child selects the rotation.
        match balance(self) {
            // Left-left
            2.. if child_ord == Ordering::Less => {
                rotate_right(self);
            }
            // Left-right
            2.. => {
                if let Some(left) = self.left.as_mut() {
                    rotate_left(left);
                }
                rotate_right(self);
            }
            // Right-right
            ..=-2 if child_ord == Ordering::Greater => {
                rotate_left(self);
            }
            // Right-left
            ..=-2 => {
                if let Some(right) = self.right.as_mut() {
                    rotate_right(right);
                }
                rotate_left(self);
            }
            -1..=1 => { /* The tree is well balanced */ }
        };

        // Invariant: the absolute difference between tree heights ("balance
        // factor") cannot exceed 1.
        debug_assert!(balance(self).abs() <= 1);

        Some(ord)
    }

    pub(crate) fn get<C>(&self, value: &T, cmp: &C) -> Option<&T>
    where
        C: Comparator<T>,
    {
        let node = match cmp.compare(value, &self.value) {
            Ordering::Less => self.left(),
            Ordering::Equal => return Some(&self.value),
            Ordering::Greater => self.right(),
        }?;

        node.get(value, cmp)
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }
}

impl<T> TreeNode for Node<T> {
    type Value = T;

    fn value(&self) -> &T {
        &self.value
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    fn into_value(self) -> T {
        self.value
    }
}

pub(crate) fn height<T>(n: Option<&Node<T>>) -> u8 {
    n.map(|v| v.height()).unwrap_or_default()
}

fn update_height<T>(n: &mut Node<T>) {
    n.height = 1 + height(n.left()).max(height(n.right()));
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
pub(crate) fn balance<T>(n: &Node<T>) -> i8 {
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    (height(n.left()) as i16 - height(n.right()) as i16) as i8
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// Only the links between `x`, `P` and subtree `2` change, and the heights of
/// `x` then `P` are recomputed. Values never move between nodes.
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
fn rotate_left<T>(x: &mut Box<Node<T>>) {
    let mut p = x.right.take().unwrap();
    std::mem::swap(x, &mut p);

    p.right = x.left.take();
    update_height(&mut p);

    x.left = Some(p);
    update_height(x);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// Only the links between `y`, `P` and subtree `3` change, and the heights of
/// `y` then `P` are recomputed. Values never move between nodes.
///
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
fn rotate_right<T>(y: &mut Box<Node<T>>) {
    let mut p = y.left.take().unwrap();
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update_height(&mut p);

    y.right = Some(p);
    update_height(y);
}

/// Recurse into `node`, removing the provided `value` from the subtree rooted
/// at `node` if it exists, and rebalancing every node on the path back up.
///
/// Returns [`None`] if the value is not found, leaving the subtree unchanged.
///
/// A node with at most one child is replaced by that child (or unlinked). A
/// node with two children stays in place and takes the value of its in-order
/// successor, which is unlinked from the right subtree instead.
pub(crate) fn remove_recurse<T, C>(node: &mut Option<Box<Node<T>>>, value: &T, cmp: &C) -> Option<T>
where
    C: Comparator<T>,
{
    let n = node.as_mut()?;

    let removed = match cmp.compare(value, &n.value) {
        Ordering::Less => remove_recurse(&mut n.left, value, cmp)?,
        Ordering::Greater => remove_recurse(&mut n.right, value, cmp)?,
        Ordering::Equal if n.left.is_some() && n.right.is_some() => {
            // Extract the minimum node in the right subtree, rebalancing
            // each node on the right subtree's left edge.
            let successor = extract_subtree_min(&mut n.right)?;

            // Invariant: the successor has no left child as it is the
            // left-most node of the subtree.
            debug_assert!(successor.left.is_none());

            std::mem::replace(&mut n.value, successor.value)
        }
        Ordering::Equal => {
            // "n" has at most one child, which replaces it. The child subtree
            // is unchanged and remains balanced.
            let mut old = node.take()?;
            *node = old.left.take().or_else(|| old.right.take());

            return Some(old.value);
        }
    };

    // Removing the value may have shortened either subtree of "n", so the
    // balance is checked at every ancestor of the removed node.
    rebalance_after_remove(n);

    Some(removed)
}

/// Unlink and return the node holding the minimum value in the subtree linked
/// at `root`, linking its right subtree (if any) in its place and rebalancing
/// each node along the left edge that was descended.
fn extract_subtree_min<T>(root: &mut Option<Box<Node<T>>>) -> Option<Box<Node<T>>> {
    let n = root.as_mut()?;

    if n.left.is_some() {
        let min = extract_subtree_min(&mut n.left);
        rebalance_after_remove(n);
        return min;
    }

    // "n" is the end of the left edge.
    //
    // ```text
    //                 6
    //                / \
    //    here ->   <4>   7
    //                \
    //                 5
    // ```
    //
    // Unlink it, and link its right node (if any) in its place.
    let mut min = root.take()?;
    *root = min.right.take();

    Some(min)
}

/// Recompute the height of `v` and restore its balance factor to within ±1.
///
/// The removed value is no longer in the tree, so the balance of the heavy
/// child (rather than the position of the value) selects the rotation.
fn rebalance_after_remove<T>(v: &mut Box<Node<T>>) {
    update_height(v);

    match balance(v) {
        // Left-left
        2.. if v.left().map(balance).unwrap_or_default() >= 0 => {
            rotate_right(v);
        }
        // Left-right
        2.. => {
            if let Some(left) = v.left.as_mut() {
                rotate_left(left);
            }
            rotate_right(v);
        }
        // Right-right
        ..=-2 if v.right().map(balance).unwrap_or_default() <= 0 => {
            rotate_left(v);
        }
        // Right-left
        ..=-2 => {
            if let Some(right) = v.right.as_mut() {
                rotate_right(right);
            }
            rotate_left(v);
        }

        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => { /* balanced */ }
    }

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1 after removing a value.
    debug_assert!(balance(v).abs() <= 1);
}
