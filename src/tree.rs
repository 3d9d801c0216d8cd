//! An owning handle around the [`engine`][crate::engine]. `Tree` keeps the
//! root link so callers don't have to thread it through every call.
//!
//! # Examples
//!
//! ```
//! use bst_engine::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Each key is stored at most once.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.count(), 1);
//!
//! // Removing reports whether anything was there.
//! assert!(tree.remove(&1));
//! assert!(!tree.remove(&1));
//! assert!(tree.is_empty());
//! ```

use tracing::trace;

use crate::engine::{self, Link, Node};
use crate::inorder::Inorder;

/// An unbalanced Binary Search Tree of unique keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<K> {
    root: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// The root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Potentially finds the node holding the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1).map(|n| *n.key()), Some(1));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        engine::search(&self.root, key)
    }

    /// Whether the tree holds the given key.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.search(key).is_some()
    }

    /// Inserts the key, returning `true` if it wasn't already present.
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let inserted = !self.contains(&key);
        if inserted {
            self.root = engine::insert(self.root.take(), key);
        }
        trace!(inserted, "tree insert");
        inserted
    }

    /// Removes the key, returning `true` if it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [20, 10, 30, 25, 40] {
    ///     tree.insert(key);
    /// }
    ///
    /// assert!(tree.remove(&30));
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [10, 20, 25, 40]);
    /// ```
    pub fn remove(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let present = self.contains(key);
        if present {
            self.root = engine::remove(self.root.take(), key);
        }
        trace!(removed = present, "tree remove");
        present
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        engine::find_minimum(&self.root).map(Node::key)
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        engine::find_maximum(&self.root).map(Node::key)
    }

    /// How many keys are in the tree.
    pub fn count(&self) -> usize {
        engine::count(&self.root)
    }

    /// How many levels are in the tree.
    pub fn height(&self) -> usize {
        engine::height(&self.root)
    }

    /// Iterates over the keys in ascending order.
    pub fn iter(&self) -> Inorder<'_, K> {
        engine::traverse(&self.root)
    }

    /// Whether the tree satisfies the BST property.
    pub fn is_valid(&self) -> bool
    where
        K: Ord,
    {
        engine::is_valid_bst(&self.root)
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Inorder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
