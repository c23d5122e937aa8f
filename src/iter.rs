/// Structural access to a node of a Box-linked binary tree, shared by the
/// [`BinarySearchTree`] and [`AvlTree`] node types so both can be walked by
/// the same iterators.
///
/// [`BinarySearchTree`]: crate::BinarySearchTree
/// [`AvlTree`]: crate::AvlTree
pub(crate) trait TreeNode: Sized {
    type Value;

    fn value(&self) -> &Self::Value;
    fn left(&self) -> Option<&Self>;
    fn right(&self) -> Option<&Self>;

    /// Remove the left child, if any.
    fn take_left(&mut self) -> Option<Box<Self>>;

    /// Remove the right child, if any.
    fn take_right(&mut self) -> Option<Box<Self>>;

    /// Explode this node into the value it contains.
    fn into_value(self) -> Self::Value;
}

/// A depth-first, in-order iterator of node references.
#[derive(Debug)]
pub(crate) struct RefIter<'a, N> {
    stack: Vec<&'a N>,
}

impl<'a, N> RefIter<'a, N>
where
    N: TreeNode,
{
    pub(crate) fn new(root: Option<&'a N>) -> Self {
        let mut this = Self { stack: vec![] };

        // Descend down the left side of the tree.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: &'a N) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            self.stack.push(v);
            ptr = v.left();
        }
    }
}

impl<'a, N> Iterator for RefIter<'a, N>
where
    N: TreeNode,
{
    type Item = &'a N::Value;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        if let Some(right) = v.right() {
            self.push_subtree(right);
        }

        Some(v.value())
    }
}

/// An in-order iterator of owned values, consuming the tree it was built
/// from.
#[derive(Debug)]
pub(crate) struct OwnedIter<N> {
    stack: Vec<Box<N>>,
}

impl<N> OwnedIter<N>
where
    N: TreeNode,
{
    pub(crate) fn new(root: Option<Box<N>>) -> Self {
        let mut this = Self { stack: vec![] };

        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: Box<N>) {
        let mut ptr = Some(subtree_root);

        while let Some(mut v) = ptr {
            ptr = v.take_left();
            self.stack.push(v);
        }
    }
}

impl<N> Iterator for OwnedIter<N>
where
    N: TreeNode,
{
    type Item = N::Value;

    fn next(&mut self) -> Option<Self::Item> {
        let mut v = self.stack.pop()?;

        if let Some(right) = v.take_right() {
            self.push_subtree(right);
        }

        Some(v.into_value())
    }
}

/// Materialise the in-order (left, self, right) sequence of the subtree
/// rooted at `root`.
pub(crate) fn in_order<N>(root: Option<&N>) -> Vec<&N::Value>
where
    N: TreeNode,
{
    RefIter::new(root).collect()
}

/// Materialise the pre-order (self, left, right) sequence of the subtree
/// rooted at `root`.
pub(crate) fn pre_order<N>(root: Option<&N>) -> Vec<&N::Value>
where
    N: TreeNode,
{
    let mut out = Vec::new();

    // Visit the right child after the entire left subtree by pushing it onto
    // the stack first.
    let mut stack = root.into_iter().collect::<Vec<_>>();
    while let Some(n) = stack.pop() {
        out.push(n.value());
        stack.extend(n.right());
        stack.extend(n.left());
    }

    out
}

/// Materialise the post-order (left, right, self) sequence of the subtree
/// rooted at `root`.
pub(crate) fn post_order<N>(root: Option<&N>) -> Vec<&N::Value>
where
    N: TreeNode,
{
    post_order_nodes(root).into_iter().map(|v| v.value()).collect()
}

/// Collect the nodes of the subtree rooted at `root` in post-order, such that
/// both children of a node appear before it.
pub(crate) fn post_order_nodes<N>(root: Option<&N>) -> Vec<&N>
where
    N: TreeNode,
{
    // A (self, right, left) walk is the exact reverse of a post-order walk.
    let mut out = Vec::new();
    let mut stack = root.into_iter().collect::<Vec<_>>();
    while let Some(n) = stack.pop() {
        out.push(n);
        stack.extend(n.left());
        stack.extend(n.right());
    }

    out.reverse();
    out
}
