use crate::types::ChildId;

/// Errors reported by the split container.
#[derive(Debug, Clone, PartialEq)]
pub enum SplitError {
    /// A layout pass ran without exactly two attached children.
    ChildCount { found: usize },
    /// The child is already attached to this container.
    DuplicateChild(ChildId),
    /// The child is not attached to this container.
    UnknownChild(ChildId),
    /// Percentage positions must be finite and within `0.0..=1.0`.
    InvalidPercentage(f32),
}

impl std::fmt::Display for SplitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplitError::ChildCount { found } => {
                write!(f, "Split container must have two children, found {}", found)
            }
            SplitError::DuplicateChild(id) => write!(f, "Child {:?} is already attached", id),
            SplitError::UnknownChild(id) => write!(f, "Child {:?} is not attached", id),
            SplitError::InvalidPercentage(ratio) => {
                write!(f, "Splitter percentage {} is outside 0.0..=1.0", ratio)
            }
        }
    }
}

impl std::error::Error for SplitError {}

/// Result type for split container operations.
pub type SplitResult<T> = Result<T, SplitError>;
