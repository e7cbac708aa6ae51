use std::fmt;

use crate::{Node, Tree};

/// Draws the tree sideways: the right subtree above each node and the left subtree below it, so
/// the root sits at the left margin and larger values are higher up.
///
/// # Examples
///
/// ```
/// use balanced_bst::Tree;
///
/// let tree: Tree<_> = (1..=3).collect();
///
/// assert_eq!(
///     tree.to_string(),
///     "│   ┌── 3\n\
///      └── 2\n    \
///          └── 1\n"
/// );
/// ```
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => write_branch(f, root, "", true),
            None => Ok(()),
        }
    }
}

/// Writes the subtree at `node`. `is_left` is how the node hangs off its parent and decides both
/// its glyph and which side of it keeps drawing the parent's vertical rule.
fn write_branch<T>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<T>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result
where
    T: fmt::Display,
{
    if let Some(right) = node.right() {
        let rule = if is_left { "│   " } else { "    " };
        write_branch(f, right, &format!("{prefix}{rule}"), false)?;
    }

    let glyph = if is_left { "└── " } else { "┌── " };
    writeln!(f, "{prefix}{glyph}{}", node.value())?;

    if let Some(left) = node.left() {
        let rule = if is_left { "    " } else { "│   " };
        write_branch(f, left, &format!("{prefix}{rule}"), true)?;
    }

    Ok(())
}
