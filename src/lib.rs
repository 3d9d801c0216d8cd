//! An unbalanced Binary Search Tree (BST) built from individually owned nodes,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The invariants of this BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key strictly less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than or equal to its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). Nothing here
//! rebalances, so inserting keys in sorted order gives a tree of height `N`.
//! BSTs also naturally support sorted iteration by visiting the left subtree,
//! then the subtree root, then the right subtree.
//!
//! ## Layout
//!
//! - [`engine`] is a set of free functions over a root [`Link`]. Mutating
//!   operations consume the root and return the new one, which the caller
//!   stores back.
//! - [`Tree`] owns a root and delegates to the engine.
//!
//! The engine emits [`tracing`] events on structural changes but never installs
//! a subscriber.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod engine;
mod inorder;
mod tree;

pub use engine::{Link, Node};
pub use inorder::Inorder;
pub use tree::Tree;
