use std::{borrow::Borrow, cmp::Ordering};

use tracing::trace;

#[derive(Debug)]
pub(crate) enum RemoveResult<K> {
    /// The key was removed from the tree.
    Removed(K),

    /// The direct descendent node contains the key, but contains no children
    /// and must be unlinked by the parent.
    ParentUnlink,
}

/// A single node of an AVL tree, exclusively owning the subtrees rooted at
/// its children.
///
/// Nodes are read-only outside of this crate; the tree shape is only ever
/// changed by [`insert()`] and [`remove()`], which keep the AVL invariants
/// intact.
#[derive(Debug, Clone)]
pub struct Node<K> {
    /// Child nodes pointers.
    left: Option<Box<Node<K>>>,
    right: Option<Box<Node<K>>>,

    /// The height of the subtree rooted at this node.
    ///
    /// A leaf has a height of 1, an absent subtree a height of 0.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of far more entries than can be addressed.
    height: u8,

    key: K,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            left: None,
            right: None,
            height: 1,
            key,
        }
    }

    pub(crate) fn insert(self: &mut Box<Self>, key: K) -> bool
    where
        K: Ord,
    {
        let child = match key.cmp(&self.key) {
            Ordering::Less => &mut self.left,
            Ordering::Equal => {
                // Duplicates are rejected, leaving the stored key untouched.
                return false;
            }
            Ordering::Greater => &mut self.right,
        };

        match child {
            Some(v) => {
                if !v.insert(key) {
                    // The tree structure has not been modified, so it does
                    // not require rebalancing.
                    return false;
                }
            }
            None => {
                // Insert the key as a new immediate descendent of self.
                *child = Some(Box::new(Self::new(key)));

                // A new leaf can skew this node by at most 1 in the direction
                // of the addition, so only the height needs updating.
                update_height(self);
                return true;
            }
        };

        update_height(self);
        rebalance_after_insert(self);

        true
    }

    pub(crate) fn remove<Q>(self: &mut Box<Self>, key: &Q) -> Option<RemoveResult<K>>
    where
        K: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        // Recurse down the subtree rooted at `self`.
        //
        // If the key is not found, or successfully removed, the result is
        // returned. If the direct descendent node contains the key and no
        // children, it returns [`RemoveResult::ParentUnlink`] and the node is
        // unlinked in the parent before returning the result to the caller.
        match key.cmp(self.key.borrow()) {
            Ordering::Less => {
                return remove_recurse(&mut self.left, key).map(RemoveResult::Removed)
            }
            Ordering::Greater => {
                return remove_recurse(&mut self.right, key).map(RemoveResult::Removed)
            }
            Ordering::Equal => {}
        };

        // This node holds the key to be removed, and may have 0, 1 or 2
        // children.
        let old = match (self.left.take(), self.right.take()) {
            (None, None) => {
                // Parent will unlink this "self" node.
                debug_assert_eq!(self.height, 1);
                return Some(RemoveResult::ParentUnlink);
            }
            (Some(child), None) | (None, Some(child)) => {
                // The sole child replaces "self" and is already balanced.
                std::mem::replace(self, child).key
            }
            (Some(left), Some(right)) => {
                // Remove the in-order successor (the minimum key of the right
                // subtree) from the right subtree, rebalancing the path it was
                // removed from, and move its key into this node.
                //
                // The successor has no left child, so removing it never
                // recurses back into this two-child case.
                let mut right = Some(right);
                let successor = remove_min(&mut right);

                self.left = Some(left);
                self.right = right;

                std::mem::replace(&mut self.key, successor?)
            }
        };

        Some(RemoveResult::Removed(old))
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut ptr = Some(self);

        while let Some(v) = ptr {
            ptr = match key.cmp(v.key.borrow()) {
                Ordering::Less => v.left(),
                Ordering::Equal => return Some(&v.key),
                Ordering::Greater => v.right(),
            };
        }

        None
    }

    /// Return the minimum key in the subtree rooted at this node.
    pub(crate) fn first(&self) -> &K {
        let mut v = self;
        while let Some(left) = v.left() {
            v = left;
        }
        &v.key
    }

    /// Return the maximum key in the subtree rooted at this node.
    pub(crate) fn last(&self) -> &K {
        let mut v = self;
        while let Some(right) = v.right() {
            v = right;
        }
        &v.key
    }

    /// The key held by this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The cached height of the subtree rooted at this node (a leaf is 1).
    pub fn height(&self) -> u8 {
        self.height
    }

    /// The height of the left subtree minus the height of the right subtree.
    pub fn balance_factor(&self) -> i8 {
        balance(self)
    }

    /// The root of the left subtree, holding keys strictly less than
    /// [`Node::key()`].
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, holding keys strictly greater than
    /// [`Node::key()`].
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn left_mut(&mut self) -> Option<&mut Box<Self>> {
        self.left.as_mut()
    }

    pub(crate) fn right_mut(&mut self) -> Option<&mut Box<Self>> {
        self.right.as_mut()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    /// Consume this [`Node`], returning the key it holds.
    pub(crate) fn into_key(self) -> K {
        self.key
    }
}

/// Insert `key` into the tree rooted at `root`, rebalancing as needed.
///
/// The node held in `root` may be replaced by a rotation; `root` always holds
/// the new tree root when this call returns.
///
/// Returns `false` if an equal key is already present, in which case the tree
/// is left unchanged and `key` is dropped.
pub fn insert<K>(root: &mut Option<Box<Node<K>>>, key: K) -> bool
where
    K: Ord,
{
    match root {
        Some(v) => v.insert(key),
        None => {
            *root = Some(Box::new(Node::new(key)));
            true
        }
    }
}

/// Remove the key equal to `key` from the tree rooted at `root`, rebalancing
/// every node on the path back to the root.
///
/// Returns the removed key, or [`None`] if no such key exists (the tree is
/// left unchanged).
pub fn remove<K, Q>(root: &mut Option<Box<Node<K>>>, key: &Q) -> Option<K>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    remove_recurse(root, key)
}

/// Return the height of the subtree rooted at `n`, or 0 for an empty
/// subtree.
pub fn height<K>(n: Option<&Node<K>>) -> u8 {
    n.map(|v| v.height()).unwrap_or_default()
}

/// Return the balance factor of the subtree rooted at `n`, or 0 for an empty
/// subtree.
///
/// Positive when left heavy, negative when right heavy.
pub fn balance_factor<K>(n: Option<&Node<K>>) -> i8 {
    n.map(balance).unwrap_or_default()
}

/// Recurse into `node`, calling [`Node::remove()`] to remove the provided
/// `key` from the subtree rooted at `node`, if it exists.
///
/// Returns [`None`] if the key is not found.
///
/// Clears the `node` pointer if the [`Node::remove()`] call returns
/// [`RemoveResult::ParentUnlink`], returning the extracted key.
pub(crate) fn remove_recurse<K, Q>(node: &mut Option<Box<Node<K>>>, key: &Q) -> Option<K>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    // Remove the key (if any) and rebalance the tree.
    let remove_ret = node.as_mut().and_then(|v| {
        let ret = v.remove(key)?;
        if matches!(ret, RemoveResult::Removed(_)) {
            rebalance_after_remove(v);
        }
        Some(ret)
    })?;

    match remove_ret {
        RemoveResult::Removed(k) => Some(k),
        RemoveResult::ParentUnlink => node.take().map(|v| v.into_key()),
    }
}

/// Unlink the node holding the minimum key in the subtree rooted at `node`,
/// linking its right subtree (if any) in its place.
///
/// Every node on the path to the minimum is rebalanced on the way back up.
pub(crate) fn remove_min<K>(node: &mut Option<Box<Node<K>>>) -> Option<K> {
    let v = node.as_mut()?;

    if v.left.is_some() {
        let min = remove_min(&mut v.left);
        rebalance_after_remove(v);
        return min;
    }

    // "v" is the end of the left edge.
    let Node { right, key, .. } = *node.take()?;
    *node = right;
    Some(key)
}

/// Unlink the node holding the maximum key in the subtree rooted at `node`,
/// linking its left subtree (if any) in its place.
pub(crate) fn remove_max<K>(node: &mut Option<Box<Node<K>>>) -> Option<K> {
    let v = node.as_mut()?;

    if v.right.is_some() {
        let max = remove_max(&mut v.right);
        rebalance_after_remove(v);
        return max;
    }

    let Node { left, key, .. } = *node.take()?;
    *node = left;
    Some(key)
}

fn update_height<K>(n: &mut Node<K>) {
    n.height = 1 + height(n.left()).max(height(n.right()));
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
fn balance<K>(n: &Node<K>) -> i8 {
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    (height(n.left()) as i16 - height(n.right()) as i16) as i8
}

/// Restore the AVL property of `n` after a key was added to one of its
/// subtrees.
///
/// A freshly inserted key always leaves the taller child skewed towards it, so
/// the child's balance factor is never zero here.
fn rebalance_after_insert<K>(n: &mut Box<Node<K>>) {
    match (balance(n), n.left(), n.right()) {
        // Left-heavy
        (2, Some(l), _) if balance(l) > 0 => {
            trace!(case = "left-left", height = n.height, "rebalance after insert");
            rotate_right(n);
        }
        (2, Some(_l), _) => {
            trace!(case = "left-right", height = n.height, "rebalance after insert");
            if let Some(l) = n.left_mut() {
                rotate_left(l);
            }
            rotate_right(n);
        }
        // Right-heavy
        (-2, _, Some(r)) if balance(r) < 0 => {
            trace!(case = "right-right", height = n.height, "rebalance after insert");
            rotate_left(n);
        }
        (-2, _, Some(_r)) => {
            trace!(case = "right-left", height = n.height, "rebalance after insert");
            if let Some(r) = n.right_mut() {
                rotate_right(r);
            }
            rotate_left(n);
        }
        (-1..=1, _, _) => { /* The tree is well balanced */ }
        _ => unreachable!(),
    };

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1.
    debug_assert!(balance(n).abs() <= 1);
}

/// Restore the AVL property of `v` after a key was removed from the subtree
/// rooted at it.
///
/// Unlike insertion, removal can leave the taller child perfectly balanced, in
/// which case a single rotation suffices.
fn rebalance_after_remove<K>(v: &mut Box<Node<K>>) {
    // Recompute the height of the (possibly relocated) node.
    update_height(v);

    // And rebalance the subtree.
    match balance(v) {
        (2..) if balance_factor(v.left()) >= 0 => {
            trace!(case = "left-left", height = v.height, "rebalance after remove");
            rotate_right(v);
        }
        (2..) => {
            trace!(case = "left-right", height = v.height, "rebalance after remove");
            if let Some(l) = v.left_mut() {
                rotate_left(l);
            }
            rotate_right(v);
        }
        (..=-2) if balance_factor(v.right()) <= 0 => {
            trace!(case = "right-right", height = v.height, "rebalance after remove");
            rotate_left(v);
        }
        (..=-2) => {
            trace!(case = "right-left", height = v.height, "rebalance after remove");
            if let Some(r) = v.right_mut() {
                rotate_right(r);
            }
            rotate_left(v);
        }

        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => { /* balanced */ }
    }

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1 after removing a key.
    debug_assert!(balance(v).abs() <= 1);
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
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
fn rotate_left<K>(x: &mut Box<Node<K>>) {
    let mut p = x.right.take().expect("left rotation requires a right child");
    std::mem::swap(x, &mut p);

    p.right = x.left.take();
    update_height(&mut p);

    x.left = Some(p);
    update_height(x);

    trace!(new_height = x.height, "rotated left");
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
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
fn rotate_right<K>(y: &mut Box<Node<K>>) {
    let mut p = y.left.take().expect("right rotation requires a left child");
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update_height(&mut p);

    y.right = Some(p);
    update_height(y);

    trace!(new_height = y.height, "rotated right");
}
