use std::cmp::Ordering;

use crate::{
    comparator::Comparator,
    iter::{post_order_nodes, TreeNode},
};

/// A link to a (possibly empty) subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

// The plain BST has no height bound, so a subtree may be a chain as long as
// the number of values in the tree. Every walk in this module loops over a
// link or an explicit stack, never recursing per node.

#[derive(Debug)]
pub(crate) struct Node<T> {
    /// Child nodes pointers.
    left: Link<T>,
    right: Link<T>,

    value: T,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub(crate) fn get<C>(&self, value: &T, cmp: &C) -> Option<&T>
    where
        C: Comparator<T>,
    {
        let mut ptr = Some(self);
        while let Some(n) = ptr {
            ptr = match cmp.compare(value, &n.value) {
                Ordering::Less => n.left(),
                Ordering::Equal => return Some(&n.value),
                Ordering::Greater => n.right(),
            };
        }

        None
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

/// Compute the height of the subtree rooted at `root`, where an empty subtree
/// has a height of 0 and a leaf a height of 1.
///
/// The plain BST does not cache heights, so this walks every node.
pub(crate) fn height<T>(root: Option<&Node<T>>) -> usize {
    let mut max = 0;

    let mut stack = root.map(|v| (v, 1)).into_iter().collect::<Vec<_>>();
    while let Some((n, depth)) = stack.pop() {
        max = max.max(depth);
        stack.extend(n.left().map(|v| (v, depth + 1)));
        stack.extend(n.right().map(|v| (v, depth + 1)));
    }

    max
}

/// Descend from `link` to the link holding the node equal to `value`, or the
/// empty link it would be inserted at.
fn find_link<'a, T, C>(mut link: &'a mut Link<T>, value: &T, cmp: &C) -> &'a mut Link<T>
where
    C: Comparator<T>,
{
    loop {
        let Some(ord) = link.as_deref().map(|n| cmp.compare(value, &n.value)) else {
            return link;
        };

        link = match (ord, link) {
            (Ordering::Less, Some(n)) => &mut n.left,
            (Ordering::Greater, Some(n)) => &mut n.right,
            (_, link) => return link,
        };
    }
}

/// Insert `value` into the subtree linked at `root`, returning false if an
/// equal value already exists (in which case the tree is unchanged).
pub(crate) fn insert<T, C>(root: &mut Link<T>, value: T, cmp: &C) -> bool
where
    C: Comparator<T>,
{
    let link = find_link(root, &value, cmp);
    if link.is_some() {
        return false;
    }

    *link = Some(Box::new(Node::new(value)));
    true
}

/// Remove the node holding `value` from the subtree linked at `root`,
/// returning the removed value, or [`None`] if it does not exist.
///
/// A node with at most one child is replaced by that child. A node with two
/// children keeps its position in the tree and takes the value of its
/// in-order successor, which is unlinked from the right subtree instead.
pub(crate) fn remove<T, C>(root: &mut Link<T>, value: &T, cmp: &C) -> Option<T>
where
    C: Comparator<T>,
{
    let link = find_link(root, value, cmp);
    let n = link.as_mut()?;

    if n.left.is_some() && n.right.is_some() {
        let successor = extract_subtree_min(&mut n.right)?;

        // Invariant: the successor is the left-most node of the right subtree
        // and therefore has no left child.
        debug_assert!(successor.left.is_none());

        return Some(std::mem::replace(&mut n.value, successor.value));
    }

    let mut old = link.take()?;
    *link = old.left.take().or_else(|| old.right.take());

    Some(old.value)
}

/// Unlink and return the node holding the minimum value in the subtree linked
/// at `root`, linking its right subtree (if any) in its place.
fn extract_subtree_min<T>(mut root: &mut Link<T>) -> Option<Box<Node<T>>> {
    // Descend the left edge.
    while root.as_ref()?.left.is_some() {
        root = &mut root.as_mut()?.left;
    }

    let mut min = root.take()?;
    *root = min.right.take();
    Some(min)
}

/// Deep-copy the subtree rooted at `root`, preserving its shape.
pub(crate) fn clone_subtree<T>(root: Option<&Node<T>>) -> Link<T>
where
    T: Clone,
{
    // Both children of a node are visited (and built) before it, the right
    // child's copy ending on top of the left child's.
    let mut built = Vec::new();
    for n in post_order_nodes(root) {
        let right = n.right.as_ref().and_then(|_| built.pop());
        let left = n.left.as_ref().and_then(|_| built.pop());

        built.push(Box::new(Node {
            value: n.value.clone(),
            left,
            right,
        }));
    }

    debug_assert!(built.len() <= 1);
    built.pop()
}

/// Drop the subtree linked at `root` one node at a time.
pub(crate) fn drop_subtree<T>(root: &mut Link<T>) {
    let mut stack = root.take().into_iter().collect::<Vec<_>>();
    while let Some(mut n) = stack.pop() {
        stack.extend(n.left.take());
        stack.extend(n.right.take());
    }
}

#[cfg(test)]
pub(crate) fn right_chain<T>(values: impl DoubleEndedIterator<Item = T>) -> Link<T> {
    values.rev().fold(None, |right, value| {
        Some(Box::new(Node {
            value,
            left: None,
            right,
        }))
    })
}
