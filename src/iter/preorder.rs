use std::iter::FusedIterator;

use crate::node::Node;

/// A lazy, pre-order walk of a subtree, yielding each node's key before the
/// keys of its left and then right subtrees.
#[derive(Debug, Clone)]
pub struct PreOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> PreOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Push the right child first so the left subtree is visited before it.
        self.stack.extend(v.right().into_iter().chain(v.left()));

        Some(v.key())
    }
}

impl<K> FusedIterator for PreOrder<'_, K> {}

/// Walk the subtree rooted at `root` in pre-order (node, left, right).
pub fn preorder<K>(root: Option<&Node<K>>) -> PreOrder<'_, K> {
    PreOrder::new(root)
}
