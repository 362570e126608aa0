use std::{borrow::Borrow, fmt::Debug};

use crate::{
    error::Error,
    iter::{InOrder, IntoIter, PostOrder, PreOrder},
    node::{self, remove_max, remove_min, remove_recurse, Node},
    validate::{validate, Stats},
};

/// An ordered set of keys stored in a self-balancing AVL tree.
///
/// Keys are ordered by their [`Ord`] implementation. Insertion, removal and
/// lookup run in `O(log n)` time; the tree height never exceeds
/// `1.44 log2(n + 2)`.
///
/// ```
/// use avlset::AvlSet;
///
/// let mut set = AvlSet::new();
///
/// for v in [10, 20, 30] {
///     set.insert(v);
/// }
///
/// // Inserting in ascending order rotates 20 to the root.
/// assert_eq!(set.preorder().copied().collect::<Vec<_>>(), [20, 10, 30]);
///
/// assert!(set.contains(&10));
/// assert_eq!(set.remove(&10), Some(10));
/// assert!(!set.contains(&10));
/// ```
#[derive(Clone)]
pub struct AvlSet<K> {
    root: Option<Box<Node<K>>>,
    len: usize,
}

impl<K> Default for AvlSet<K> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<K> AvlSet<K> {
    /// Construct an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the number of keys in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return `true` if the set holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove all keys from the set.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Return the root node of the tree, if any.
    ///
    /// The root may change after every call to [`AvlSet::insert()`] or
    /// [`AvlSet::remove()`].
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Return the height of the tree, or 0 when empty.
    pub fn height(&self) -> u8 {
        node::height(self.root())
    }

    /// Return the balance factor of the root node, or 0 when empty.
    pub fn balance_factor(&self) -> i8 {
        node::balance_factor(self.root())
    }

    /// Return the smallest key in the set.
    pub fn first(&self) -> Option<&K> {
        self.root().map(|v| v.first())
    }

    /// Return the largest key in the set.
    pub fn last(&self) -> Option<&K> {
        self.root().map(|v| v.last())
    }

    /// Remove and return the smallest key in the set.
    pub fn pop_first(&mut self) -> Option<K> {
        let ret = remove_min(&mut self.root)?;
        self.len -= 1;
        Some(ret)
    }

    /// Remove and return the largest key in the set.
    pub fn pop_last(&mut self) -> Option<K> {
        let ret = remove_max(&mut self.root)?;
        self.len -= 1;
        Some(ret)
    }

    /// Iterate over the keys in ascending order.
    pub fn iter(&self) -> InOrder<'_, K> {
        self.inorder()
    }

    /// Iterate over the keys in ascending order.
    pub fn inorder(&self) -> InOrder<'_, K> {
        InOrder::new(self.root())
    }

    /// Iterate over the keys in pre-order (node, left, right).
    pub fn preorder(&self) -> PreOrder<'_, K> {
        PreOrder::new(self.root())
    }

    /// Iterate over the keys in post-order (left, right, node).
    pub fn postorder(&self) -> PostOrder<'_, K> {
        PostOrder::new(self.root())
    }
}

impl<K> AvlSet<K>
where
    K: Ord,
{
    /// Add `key` to the set.
    ///
    /// Returns `false` and leaves the set unchanged if an equal key is
    /// already present.
    pub fn insert(&mut self, key: K) -> bool {
        let inserted = node::insert(&mut self.root, key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Remove the key equal to `key` from the set, returning it.
    ///
    /// Returns [`None`] and leaves the set unchanged if no such key exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let ret = remove_recurse(&mut self.root, key)?;
        self.len -= 1;
        Some(ret)
    }

    /// Return a reference to the stored key equal to `key`, if any.
    pub fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root().and_then(|v| v.get(key))
    }

    /// Return `true` if the set holds a key equal to `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Check the ordering, balance and height invariants of every node in
    /// the tree, returning statistics describing its shape.
    ///
    /// An error indicates the [`Ord`] implementation of `K` is not a total
    /// order, or a key's ordering changed while it was held in the set.
    pub fn validate(&self) -> Result<Stats, Error<K>>
    where
        K: Clone + Debug,
    {
        validate(self.root(), self.len)
    }
}

impl<K> Debug for AvlSet<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> PartialEq for AvlSet<K>
where
    K: PartialEq,
{
    /// Two sets are equal if they hold the same keys, regardless of the shape
    /// of their trees.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K> Eq for AvlSet<K> where K: Eq {}

impl<K> FromIterator<K> for AvlSet<K>
where
    K: Ord,
{
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<K> Extend<K> for AvlSet<K>
where
    K: Ord,
{
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<K> IntoIterator for AvlSet<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root, self.len)
    }
}

impl<'a, K> IntoIterator for &'a AvlSet<K> {
    type Item = &'a K;
    type IntoIter = InOrder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
