use std::cmp::Ordering;

/// An owning edge to a child subtree. `None` marks the empty link below a leaf.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` stores one value and owns its (possibly empty) left and right subtrees. Nodes never
/// point back at their parent so every walk through the tree starts at the root.
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The number of edges on the longest path from this node down to a leaf. A leaf has a
    /// height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree: Tree<_> = (1..=7).collect();
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.height(), 2);
    /// assert_eq!(root.left().unwrap().height(), 1);
    /// ```
    pub fn height(&self) -> isize {
        height(self.left()).max(height(self.right())) + 1
    }

    /// Whether, for this node and every node below it, the heights of the left and right
    /// subtrees differ by at most one.
    pub fn is_balanced(&self) -> bool {
        balanced_height(Some(self)).is_some()
    }
}

/// Height of an optional subtree: -1 when empty.
pub(crate) fn height<T>(node: Option<&Node<T>>) -> isize {
    node.map_or(-1, Node::height)
}

/// Returns the height of the subtree if every node in it is balanced, `None` otherwise. This
/// folds the per-node height comparison into a single post-order pass.
pub(crate) fn balanced_height<T>(node: Option<&Node<T>>) -> Option<isize> {
    let Some(node) = node else {
        return Some(-1);
    };
    let left = balanced_height(node.left())?;
    let right = balanced_height(node.right())?;

    if (left - right).abs() <= 1 {
        Some(left.max(right) + 1)
    } else {
        None
    }
}

/// Builds a minimal-height subtree from the next `len` values of a sorted iterator.
///
/// The subtree root is the floor-midpoint of the range so for an even number of values the extra
/// one lands in the right subtree. Values are consumed in order: the `mid` values before the
/// midpoint become the left subtree, the midpoint becomes the root and the rest become the right
/// subtree.
pub(crate) fn build<T, I>(values: &mut I, len: usize) -> Link<T>
where
    I: Iterator<Item = T>,
{
    if len == 0 {
        return None;
    }
    let mid = (len - 1) / 2;

    let left = build(values, mid);
    let value = values.next()?;
    let right = build(values, len - mid - 1);

    Some(Box::new(Node { value, left, right }))
}

/// Inserts `value` below `node` and returns the subtree root for the caller to reattach. An exact
/// match leaves the subtree untouched and `inserted` unset.
pub(crate) fn insert<T>(node: Link<T>, value: T, inserted: &mut bool) -> Box<Node<T>>
where
    T: Ord,
{
    let Some(mut node) = node else {
        *inserted = true;
        return Node::new_boxed(value);
    };

    match value.cmp(&node.value) {
        Ordering::Less => node.left = Some(insert(node.left.take(), value, inserted)),
        Ordering::Equal => {}
        Ordering::Greater => node.right = Some(insert(node.right.take(), value, inserted)),
    }

    node
}

/// Deletes `value` from below `node` and returns the (possibly restructured) subtree root.
pub(crate) fn delete<T>(node: Link<T>, value: &T, removed: &mut bool) -> Link<T>
where
    T: Ord,
{
    let mut node = node?;

    match value.cmp(&node.value) {
        Ordering::Less => node.left = delete(node.left.take(), value, removed),
        Ordering::Greater => node.right = delete(node.right.take(), value, removed),
        Ordering::Equal => {
            *removed = true;
            match (node.left.take(), node.right.take()) {
                (None, None) => return None,
                (Some(child), None) | (None, Some(child)) => return Some(child),

                // With two children the in-order successor (the smallest value on the right)
                // moves up into this node.
                (Some(left), Some(right)) => {
                    let (successor, right) = take_min(right);
                    node.value = successor;
                    node.left = Some(left);
                    node.right = right;
                }
            }
        }
    }

    Some(node)
}

/// Unlinks the leftmost node of a subtree. Returns its value and what remains of the subtree.
fn take_min<T>(mut node: Box<Node<T>>) -> (T, Link<T>) {
    match node.left.take() {
        None => {
            let right = node.right.take();
            (node.value, right)
        }
        Some(left) => {
            let (min, left) = take_min(left);
            node.left = left;
            (min, Some(node))
        }
    }
}
