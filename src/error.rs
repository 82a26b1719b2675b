//! Errors shared by the samplers.

/// Errors returned before any sampling work starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimplexError {
    /// Dimension, sample count, or bound is out of range.
    InvalidArgument(String),
    /// The integer cut range cannot supply `dim - 1` distinct cut points.
    DimensionTooLarge {
        /// Requested simplex dimension `n`.
        dim: usize,
        /// Integer bound `M` of the cut range.
        bound: u64,
    },
}

impl std::fmt::Display for SimplexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::DimensionTooLarge { dim, bound } => write!(
                f,
                "dimension {dim} is too large for integer bound {bound}"
            ),
        }
    }
}

impl std::error::Error for SimplexError {}

/// Check the request shape common to every sampler: `n >= 2`, `count >= 1`.
pub(crate) fn check_request(n: usize, count: usize) -> Result<(), SimplexError> {
    if n < 2 {
        return Err(SimplexError::InvalidArgument(format!(
            "dimension must be >= 2 (got {n})"
        )));
    }
    if count < 1 {
        return Err(SimplexError::InvalidArgument(format!(
            "sample count must be >= 1 (got {count})"
        )));
    }
    Ok(())
}
