use std::iter::FusedIterator;

use crate::node::Node;

/// A lazy, in-order walk of a subtree, yielding keys in ascending order.
///
/// Holds at most one stack entry per level of the tree.
#[derive(Debug, Clone)]
pub struct InOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> InOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut this = Self { stack: vec![] };

        // Descend down the left side of the tree.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: &'a Node<K>) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            self.stack.push(v);
            ptr = v.left();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        if let Some(right) = v.right() {
            self.push_subtree(right);
        }

        Some(v.key())
    }
}

impl<K> FusedIterator for InOrder<'_, K> {}

/// Walk the subtree rooted at `root` in order, yielding each key in ascending
/// order.
pub fn inorder<K>(root: Option<&Node<K>>) -> InOrder<'_, K> {
    InOrder::new(root)
}
