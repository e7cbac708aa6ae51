//! Depth-first and breadth-first walks over a [`Tree`]. Every walk is iterative, so a skewed tree
//! doesn't grow the call stack, and visits each node exactly once.

use std::collections::VecDeque;
use std::fmt;

use crate::{Node, Tree, TreeError};

/// The order in which a traversal visits nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Breadth first, top to bottom and left to right within a level.
    Level,
    /// Node, then left subtree, then right subtree.
    Pre,
    /// Left subtree, then node, then right subtree. This yields values in ascending order.
    In,
    /// Left subtree, then right subtree, then node.
    Post,
}

impl Order {
    /// All four orders, in the order the driver prints them.
    pub const ALL: [Order; 4] = [Order::Level, Order::Pre, Order::Post, Order::In];
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Level => "level-order",
            Self::Pre => "pre-order",
            Self::In => "in-order",
            Self::Post => "post-order",
        };
        f.write_str(name)
    }
}

impl<T> Tree<T> {
    /// Visits every node in the given `order`. Unlike the order-specific methods the visitor is
    /// optional here: passing `None` fails with [`TreeError::MissingVisitor`] before any node is
    /// visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Order, Tree, TreeError};
    ///
    /// let tree: Tree<_> = (1..=3).collect();
    ///
    /// let mut seen = Vec::new();
    /// tree.traverse(Order::Pre, Some(&mut |n: &balanced_bst::Node<i32>| seen.push(*n.value())))
    ///     .unwrap();
    /// assert_eq!(seen, [2, 1, 3]);
    ///
    /// assert_eq!(
    ///     tree.traverse(Order::Level, None),
    ///     Err(TreeError::MissingVisitor(Order::Level))
    /// );
    /// ```
    pub fn traverse(
        &self,
        order: Order,
        visit: Option<&mut dyn FnMut(&Node<T>)>,
    ) -> Result<(), TreeError> {
        let visit = visit.ok_or(TreeError::MissingVisitor(order))?;
        match order {
            Order::Level => self.level_order(visit),
            Order::Pre => self.pre_order(visit),
            Order::In => self.in_order(visit),
            Order::Post => self.post_order(visit),
        }
        Ok(())
    }

    /// Visits nodes breadth first.
    ///
    /// The visitor borrows each node for as long as the tree is borrowed, so the nodes can be
    /// kept and handed back to the tree later (to [`Tree::depth`], for instance).
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree: Tree<_> = (1..=7).collect();
    /// let mut seen = Vec::new();
    /// tree.level_order(|n| seen.push(*n.value()));
    ///
    /// assert_eq!(seen, [4, 2, 6, 1, 3, 5, 7]);
    /// ```
    pub fn level_order<'a>(&'a self, mut visit: impl FnMut(&'a Node<T>)) {
        let mut queue: VecDeque<&Node<T>> = self.root().into_iter().collect();

        while let Some(node) = queue.pop_front() {
            visit(node);
            queue.extend(node.left());
            queue.extend(node.right());
        }
    }

    /// Visits each node before either of its subtrees.
    pub fn pre_order<'a>(&'a self, mut visit: impl FnMut(&'a Node<T>)) {
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();

        while let Some(node) = stack.pop() {
            visit(node);
            // Right goes on first so the left subtree pops first.
            stack.extend(node.right());
            stack.extend(node.left());
        }
    }

    /// Visits nodes in ascending order of their values.
    pub fn in_order<'a>(&'a self, mut visit: impl FnMut(&'a Node<T>)) {
        let mut stack = Vec::new();
        let mut current = self.root();

        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            let Some(node) = stack.pop() else {
                return;
            };
            visit(node);
            current = node.right();
        }
    }

    /// Visits each node after both of its subtrees.
    pub fn post_order<'a>(&'a self, mut visit: impl FnMut(&'a Node<T>)) {
        let mut pending: Vec<&Node<T>> = self.root().into_iter().collect();
        // Filled node-right-left, so draining it from the top gives left-right-node.
        let mut reversed = Vec::new();

        while let Some(node) = pending.pop() {
            reversed.push(node);
            pending.extend(node.left());
            pending.extend(node.right());
        }

        while let Some(node) = reversed.pop() {
            visit(node);
        }
    }
}
