//! An ordered key set backed by a self-balancing [AVL tree].
//!
//! Every node caches the height of the subtree rooted at it, and every
//! mutation restores the AVL property (the heights of the two subtrees of any
//! node differ by at most one) with `O(1)` rotations on the way back up the
//! search path. Insertion, removal and lookup therefore run in `O(log n)`
//! time.
//!
//! Most users want [`AvlSet`], which owns the tree root and tracks the number
//! of keys. The underlying engine is also exposed as free functions operating
//! on a caller-owned root slot (`Option<Box<Node<K>>>`), for embedding the tree
//! in other structures:
//!
//! ```
//! use avlset::{insert, inorder, preorder, remove, Node};
//!
//! let mut root: Option<Box<Node<u32>>> = None;
//!
//! for v in [30, 20, 10] {
//!     insert(&mut root, v);
//! }
//!
//! // The root changed from 30 to 20 when the tree was rebalanced.
//! assert_eq!(root.as_deref().map(|v| *v.key()), Some(20));
//! assert_eq!(preorder(root.as_deref()).copied().collect::<Vec<_>>(), [20, 10, 30]);
//!
//! assert_eq!(remove(&mut root, &20), Some(20));
//! assert_eq!(remove(&mut root, &999), None);
//! assert_eq!(inorder(root.as_deref()).copied().collect::<Vec<_>>(), [10, 30]);
//! ```
//!
//! Rebalancing decisions are emitted as `trace` level [`tracing`] events.
//!
//! [AVL tree]: https://en.wikipedia.org/wiki/AVL_tree

#![deny(rustdoc::broken_intra_doc_links, rust_2018_idioms)]
#![warn(
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::explicit_iter_loop,
    clippy::future_not_send,
    clippy::todo,
    clippy::use_self,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_crate_dependencies,
    unreachable_pub
)]

// Only used by the benches.
#[cfg(test)]
use criterion as _;
#[cfg(test)]
use paste as _;

mod error;
mod iter;
mod node;
mod tree;
mod validate;

#[cfg(test)]
mod test_utils;

pub use error::*;
pub use iter::*;
pub use node::{balance_factor, height, insert, remove, Node};
pub use tree::*;
pub use validate::Stats;
