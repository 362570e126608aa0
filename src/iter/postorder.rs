use std::iter::FusedIterator;

use crate::node::Node;

#[derive(Debug, Clone, Copy)]
enum Visit {
    /// The children of this node have not been pushed yet.
    Descend,
    /// Both subtrees have been yielded, the node itself is next.
    Yield,
}

/// A lazy, post-order walk of a subtree, yielding the keys of the left and
/// then right subtrees before each node's own key.
#[derive(Debug, Clone)]
pub struct PostOrder<'a, K> {
    stack: Vec<(&'a Node<K>, Visit)>,
}

impl<'a, K> PostOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.map(|v| (v, Visit::Descend)).into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (v, state) = self.stack.pop()?;

            match state {
                Visit::Yield => return Some(v.key()),
                Visit::Descend => {
                    // Revisit this node once both children have been walked,
                    // pushing the right child first so the left pops first.
                    self.stack.push((v, Visit::Yield));
                    self.stack.extend(
                        v.right()
                            .into_iter()
                            .chain(v.left())
                            .map(|c| (c, Visit::Descend)),
                    );
                }
            }
        }
    }
}

impl<K> FusedIterator for PostOrder<'_, K> {}

/// Walk the subtree rooted at `root` in post-order (left, right, node).
pub fn postorder<K>(root: Option<&Node<K>>) -> PostOrder<'_, K> {
    PostOrder::new(root)
}
