#![forbid(unsafe_code)]

use std::fmt;

use crate::stack::StackId;

/// Errors from [`StackBoard`](crate::StackBoard) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// No stack with this id exists on the board.
    UnknownStack(StackId),
    /// Source and target of a transfer are the same stack.
    SameStack(StackId),
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStack(id) => write!(f, "unknown stack {}", id.index()),
            Self::SameStack(id) => {
                write!(f, "cannot transfer stack {} onto itself", id.index())
            }
        }
    }
}

impl std::error::Error for StackError {}
