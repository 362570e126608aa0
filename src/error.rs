use thiserror::Error;

/// Invariant violations reported by [`AvlSet::validate()`].
///
/// None of these can be produced by a tree built solely through this crate;
/// they exist to diagnose a broken [`Ord`] implementation on the key type.
///
/// [`AvlSet::validate()`]: crate::AvlSet::validate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error<K> {
    /// An in-order walk yielded `next` directly after `prev`, but `next` is
    /// not strictly greater.
    #[error("keys out of order: {prev:?} is followed by {next:?}")]
    SortError {
        /// The earlier key in the walk.
        prev: K,
        /// The key yielded immediately after `prev`.
        next: K,
    },

    /// The subtrees of the node holding `key` differ in height by more than
    /// one.
    #[error("node {key:?} is unbalanced (balance factor {balance})")]
    Unbalanced {
        /// The key of the unbalanced node.
        key: K,
        /// The node's balance factor.
        balance: i8,
    },

    /// The cached height of the node holding `key` does not match the height
    /// of its subtrees.
    #[error("node {key:?} has height {stored}, expected {computed}")]
    HeightMismatch {
        /// The key of the node.
        key: K,
        /// The height cached in the node.
        stored: u8,
        /// The height derived from the node's children.
        computed: u8,
    },

    /// The tracked number of entries differs from the number of nodes.
    #[error("tree holds {counted} nodes but tracks a length of {tracked}")]
    LengthMismatch {
        /// Nodes found by walking the tree.
        counted: usize,
        /// The length tracked by the set.
        tracked: usize,
    },
}
