use std::iter::FusedIterator;

use crate::engine::Node;

/// Lazily walks a tree left, node, right, yielding keys in ascending order.
///
/// Created by [`engine::traverse`][crate::engine::traverse] and
/// [`Tree::iter`][crate::Tree::iter].
#[derive(Debug, Clone)]
pub struct Inorder<'a, K> {
    /// Nodes whose left subtree has been queued but who haven't been yielded yet.
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Inorder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node<K>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left();
        }
    }
}

impl<'a, K> Iterator for Inorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.key())
    }
}

impl<'a, K> FusedIterator for Inorder<'a, K> {}
