use thiserror::Error;

use crate::Order;

/// Errors raised by [`Tree`][crate::Tree] operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// A traversal was requested through [`Tree::traverse`][crate::Tree::traverse] without a
    /// visitor to call for each node.
    #[error("a callback function is required for {0} traversal")]
    MissingVisitor(Order),
}

/// Errors raised while generating sample data.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleError {
    /// There aren't `count` distinct values in `0..max`.
    #[error("cannot draw {count} unique values below {max}")]
    RangeTooSmall {
        /// How many values were requested.
        count: usize,
        /// Exclusive upper bound of the values.
        max: u32,
    },
}
