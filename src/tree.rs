use std::cmp::Ordering;
use std::fmt;
use std::ptr;

use tracing::{debug, trace};

use crate::node::{self, Link, Node};

/// A Binary Search Tree of unique values, built balanced and kept balanced on request.
///
/// Inserts and deletes never reshape the tree beyond the nodes they touch, so a run of them can
/// skew it. [`Tree::rebalance`] rebuilds it with minimal height.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root())
            .finish()
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    /// Deduplicates and sorts the values, then builds a minimal-height tree from them.
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut values: Vec<T> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();
        Self::from_sorted(values)
    }
}

impl<T> From<Vec<T>> for Tree<T>
where
    T: Ord,
{
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a tree from values that are already sorted and free of duplicates.
    fn from_sorted(values: Vec<T>) -> Self {
        let len = values.len();
        trace!(len, "building tree");
        Self {
            root: node::build(&mut values.into_iter(), len),
            len,
        }
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The values in ascending order.
    pub fn values(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        self.in_order(|n| values.push(n.value()));
        values
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node.value())
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node.value())
    }

    /// The height of the whole tree: -1 when empty, 0 for a lone root.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.height(), 0);
    /// ```
    pub fn height(&self) -> isize {
        node::height(self.root())
    }

    /// The number of edges between the root and `target`. Nodes are matched by identity, not by
    /// value, so a node borrowed from another tree is never found here.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree: Tree<_> = (1..=7).collect();
    /// let other: Tree<_> = (1..=7).collect();
    ///
    /// let three = tree.find(&3).unwrap();
    /// assert_eq!(tree.depth(three), Some(2));
    /// assert_eq!(other.depth(three), None);
    /// ```
    pub fn depth(&self, target: &Node<T>) -> Option<usize> {
        fn search<T>(node: Option<&Node<T>>, target: &Node<T>, depth: usize) -> Option<usize> {
            let node = node?;
            if ptr::eq(node, target) {
                return Some(depth);
            }
            search(node.left(), target, depth + 1)
                .or_else(|| search(node.right(), target, depth + 1))
        }

        search(self.root(), target, 0)
    }

    /// Whether every node's subtrees differ in height by at most one. An empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        node::balanced_height(self.root()).is_some()
    }

    /// Rebuilds the tree with minimal height, keeping the same values.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in 0..8 {
    ///     tree.insert(x);
    /// }
    /// assert_eq!(tree.height(), 7);
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 3);
    /// assert!(tree.is_balanced());
    /// ```
    pub fn rebalance(&mut self) {
        let before = self.height();
        let values = self.drain_in_order();
        *self = Self::from_sorted(values);
        debug!(before, after = self.height(), "rebalanced tree");
    }

    /// Takes the tree apart, yielding its values in ascending order and leaving it empty.
    fn drain_in_order(&mut self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut current = self.root.take();
        self.len = 0;

        loop {
            while let Some(mut node) = current {
                current = node.left.take();
                stack.push(node);
            }
            let Some(mut node) = stack.pop() else {
                return values;
            };
            current = node.right.take();
            values.push(node.value);
        }
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Finds the node holding `value`, or `None` if no node does.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from(vec![3, 1, 2]);
    ///
    /// assert_eq!(tree.find(&2).map(|n| *n.value()), Some(2));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut current = self.root();
        let mut depth = 0;
        while let Some(node) = current {
            current = match value.cmp(node.value()) {
                Ordering::Less => node.left(),
                Ordering::Equal => {
                    debug!(depth, "value found in the tree");
                    return Some(node);
                }
                Ordering::Greater => node.right(),
            };
            depth += 1;
        }

        debug!(depth, "value not found in the tree");
        None
    }

    /// Whether some node holds `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Adds `value` as a new leaf. Returns `false`, leaving the tree unchanged, if the value is
    /// already present. No rebalancing happens here.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let mut inserted = false;
        self.root = Some(node::insert(self.root.take(), value, &mut inserted));

        if inserted {
            self.len += 1;
        } else {
            debug!("duplicate value ignored");
        }
        inserted
    }

    /// Removes `value` from the tree. Returns `false`, leaving the tree unchanged, if the value
    /// is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree: Tree<_> = (1..=3).collect();
    ///
    /// assert!(tree.delete(&2));
    /// assert!(!tree.delete(&2));
    /// assert_eq!(tree.values(), [&1, &3]);
    /// ```
    pub fn delete(&mut self, value: &T) -> bool {
        let mut removed = false;
        self.root = node::delete(self.root.take(), value, &mut removed);

        if removed {
            self.len -= 1;
        } else {
            debug!("absent value not deleted");
        }
        removed
    }
}
