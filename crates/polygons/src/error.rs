use std::fmt;

/// Errors surfaced by polygon and sequence operations.
#[derive(Clone, Debug, PartialEq)]
pub enum PolygonError {
    /// Constructor input rejected (too few vertices, non-positive radius).
    InvalidArgument { reason: String },
    /// Indexed access outside `0..len`.
    IndexOutOfRange { index: isize, len: usize },
    /// End of sequence reached by a cursor. A signal, not a fault.
    StopIteration,
}

impl PolygonError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for sequence of length {len}")
            }
            Self::StopIteration => write!(f, "cursor exhausted"),
        }
    }
}

impl std::error::Error for PolygonError {}
