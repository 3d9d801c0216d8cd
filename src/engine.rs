//! The stateless BST engine. Every operation takes the root [`Link`] of a tree
//! (possibly empty) and either reads from it or consumes it and hands back the
//! new root. Nothing here owns a tree: the caller holds the root and stores the
//! returned link back into it.
//!
//! # Examples
//!
//! ```
//! use bst_engine::engine::{self, Link};
//!
//! let mut root: Link<i32> = None;
//! for key in [20, 12, 4, 500, 68, 497] {
//!     root = engine::insert(root, key);
//! }
//!
//! assert_eq!(engine::count(&root), 6);
//! assert_eq!(
//!     engine::traverse(&root).copied().collect::<Vec<_>>(),
//!     [4, 12, 20, 68, 497, 500]
//! );
//!
//! // Removing the root changes which node the link points at.
//! root = engine::remove(root, &20);
//! assert_eq!(root.as_ref().map(|n| *n.key()), Some(68));
//! assert!(engine::search(&root, &20).is_none());
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::inorder::Inorder;

/// An owned, possibly empty, subtree. The root of a whole tree is also a `Link`.
pub type Link<K> = Option<Box<Node<K>>>;

/// A single key in the tree along with the subtrees hanging off of it. Each
/// child slot owns its subtree outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    /// Construct a leaf holding `key`.
    pub(crate) fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    /// The key stored at this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<K> fmt::Display for Node<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.key.fmt(f)
    }
}

/// Finds the node holding `key`, or `None` if no node does.
pub fn search<'a, K>(root: &'a Link<K>, key: &K) -> Option<&'a Node<K>>
where
    K: Ord,
{
    let node = root.as_deref()?;
    match key.cmp(&node.key) {
        Ordering::Equal => Some(node),
        Ordering::Less => search(&node.left, key),
        Ordering::Greater => search(&node.right, key),
    }
}

/// Inserts `key` and returns the root of the resulting tree. An empty root is
/// replaced by a new leaf; otherwise the same root comes back.
///
/// A key that is already present leaves the tree untouched, so every key is
/// stored at most once.
pub fn insert<K>(root: Link<K>, key: K) -> Link<K>
where
    K: Ord,
{
    let mut node = match root {
        None => {
            trace!("insert: created node");
            return Some(Node::new_boxed(key));
        }
        Some(node) => node,
    };

    match key.cmp(&node.key) {
        Ordering::Less => node.left = insert(node.left.take(), key),
        Ordering::Greater => node.right = insert(node.right.take(), key),
        Ordering::Equal => debug!("insert: key already present, tree unchanged"),
    }

    Some(node)
}

/// Removes the node holding `key` and returns the root of the resulting tree.
/// Removing a key that isn't present hands back `root` unchanged.
///
/// A node with two children is replaced by its in-order successor: the leftmost
/// node of its right subtree is spliced out and its key moves up into the
/// removed node's place.
pub fn remove<K>(root: Link<K>, key: &K) -> Link<K>
where
    K: Ord,
{
    let mut node = match root {
        None => {
            debug!("remove: key not found, tree unchanged");
            return None;
        }
        Some(node) => node,
    };

    match key.cmp(&node.key) {
        Ordering::Less => {
            node.left = remove(node.left.take(), key);
            Some(node)
        }
        Ordering::Greater => {
            node.right = remove(node.right.take(), key);
            Some(node)
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => {
                trace!("remove: released node, promoted right child");
                right
            }
            (left, None) => {
                trace!("remove: released node, promoted left child");
                left
            }
            (left, Some(right)) => {
                let (successor, new_right) = detach_leftmost(right);
                trace!("remove: promoted in-order successor");
                node.key = successor;
                node.left = left;
                node.right = new_right;
                Some(node)
            }
        },
    }
}

/// Splices the leftmost node out of the subtree rooted at `node`, returning
/// its key and the subtree without it. The leftmost node has no left child so
/// its right child takes its place under its parent.
fn detach_leftmost<K>(mut node: Box<Node<K>>) -> (K, Link<K>) {
    match node.left.take() {
        None => {
            let Node { key, right, .. } = *node;
            (key, right)
        }
        Some(left) => {
            let (key, new_left) = detach_leftmost(left);
            node.left = new_left;
            (key, Some(node))
        }
    }
}

/// The node holding the smallest key, or `None` for an empty tree.
pub fn find_minimum<K>(root: &Link<K>) -> Option<&Node<K>> {
    let mut min = root.as_deref()?;
    while let Some(left) = min.left() {
        min = left;
    }
    Some(min)
}

/// The node holding the largest key, or `None` for an empty tree.
pub fn find_maximum<K>(root: &Link<K>) -> Option<&Node<K>> {
    let mut max = root.as_deref()?;
    while let Some(right) = max.right() {
        max = right;
    }
    Some(max)
}

/// How many nodes are in the tree.
pub fn count<K>(root: &Link<K>) -> usize {
    match root {
        None => 0,
        Some(node) => 1 + count(&node.left) + count(&node.right),
    }
}

/// How many levels are in the tree. An empty tree has a height of 0 and a
/// single leaf has a height of 1.
pub fn height<K>(root: &Link<K>) -> usize {
    match root {
        None => 0,
        Some(node) => 1 + height(&node.left).max(height(&node.right)),
    }
}

/// Lazily yields every key in ascending order. Calling this again on the same
/// root starts a fresh walk.
pub fn traverse<K>(root: &Link<K>) -> Inorder<'_, K> {
    Inorder::new(root.as_deref())
}

/// Checks that every key in each left subtree is strictly less than its
/// ancestor and every key in each right subtree is greater than or equal to it.
pub fn is_valid_bst<K>(root: &Link<K>) -> bool
where
    K: Ord,
{
    fn within<K: Ord>(link: &Link<K>, lower: Option<&K>, upper: Option<&K>) -> bool {
        match link {
            None => true,
            Some(node) => {
                lower.map_or(true, |lower| node.key >= *lower)
                    && upper.map_or(true, |upper| node.key < *upper)
                    && within(&node.left, lower, Some(&node.key))
                    && within(&node.right, Some(&node.key), upper)
            }
        }
    }

    within(root, None, None)
}
