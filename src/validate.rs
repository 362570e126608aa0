use std::fmt::Debug;

use tracing::{debug, warn};

use crate::{error::Error, iter::inorder, node::Node};

/// Shape statistics of a tree, gathered by [`AvlSet::validate()`].
///
/// [`AvlSet::validate()`]: crate::AvlSet::validate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    entries: usize,
    height: u8,
    leaves: usize,
    min_leaf_depth: usize,
    max_leaf_depth: usize,
}

impl Stats {
    fn sample_leaf(&mut self, depth: usize) {
        self.leaves += 1;
        if self.min_leaf_depth == 0 || depth < self.min_leaf_depth {
            self.min_leaf_depth = depth;
        }
        self.max_leaf_depth = self.max_leaf_depth.max(depth);
    }

    /// Return the number of keys in the tree.
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Return the height of the tree (0 when empty).
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Return the number of leaf nodes.
    pub fn leaves(&self) -> usize {
        self.leaves
    }

    /// Return the depth of the shallowest leaf, with the root at depth 1.
    pub fn min_leaf_depth(&self) -> usize {
        self.min_leaf_depth
    }

    /// Return the depth of the deepest leaf, which is equal to the tree
    /// height.
    pub fn max_leaf_depth(&self) -> usize {
        self.max_leaf_depth
    }
}

/// Walk the tree rooted at `root`, checking the BST, AVL and height
/// invariants of every node and that it holds exactly `tracked` keys.
pub(crate) fn validate<K>(root: Option<&Node<K>>, tracked: usize) -> Result<Stats, Error<K>>
where
    K: Ord + Clone + Debug,
{
    let ret = validate_inner(root, tracked);

    match &ret {
        Ok(stats) => debug!(
            entries = stats.entries,
            height = stats.height,
            leaves = stats.leaves,
            min_leaf_depth = stats.min_leaf_depth,
            "validated tree"
        ),
        Err(e) => warn!(error = %e, "tree invariant violated"),
    }

    ret
}

fn validate_inner<K>(root: Option<&Node<K>>, tracked: usize) -> Result<Stats, Error<K>>
where
    K: Ord + Clone,
{
    let mut stats = Stats::default();
    let height = check_node(root, 1, &mut stats)?;
    stats.height = height;

    // The in-order walk must be strictly ascending, which covers the BST
    // property of every node against all of its descendants.
    let mut iter = inorder(root);
    if let Some(mut prev) = iter.next() {
        for next in iter {
            if next <= prev {
                return Err(Error::SortError {
                    prev: prev.clone(),
                    next: next.clone(),
                });
            }
            prev = next;
        }
    }

    if stats.entries != tracked {
        return Err(Error::LengthMismatch {
            counted: stats.entries,
            tracked,
        });
    }

    Ok(stats)
}

/// Check the subtree rooted at `n`, returning its height as derived from its
/// children.
fn check_node<K>(n: Option<&Node<K>>, depth: usize, stats: &mut Stats) -> Result<u8, Error<K>>
where
    K: Clone,
{
    let n = match n {
        Some(v) => v,
        None => return Ok(0),
    };

    stats.entries += 1;
    if n.left().is_none() && n.right().is_none() {
        stats.sample_leaf(depth);
    }

    let left = check_node(n.left(), depth + 1, stats)?;
    let right = check_node(n.right(), depth + 1, stats)?;

    let computed = 1 + left.max(right);
    if n.height() != computed {
        return Err(Error::HeightMismatch {
            key: n.key().clone(),
            stored: n.height(),
            computed,
        });
    }

    let balance = (left as i16 - right as i16) as i8;
    if balance.abs() > 1 {
        return Err(Error::Unbalanced {
            key: n.key().clone(),
            balance,
        });
    }

    Ok(computed)
}
