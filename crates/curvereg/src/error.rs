//! Failure taxonomy for the classification and regularization stages.
//!
//! None of these ever escapes a pipeline stage: every stage maps an `Err` to
//! "leave this path as-is". The variants exist so internal steps can use `?`
//! and so callers of the lower-level functions can see why a path was skipped.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum GeomError {
    /// Zero-length vectors, too few points, wrong point count for a shape.
    DegenerateInput { reason: &'static str },
    /// The circle fit hit its iteration budget or a singular normal system.
    FitNonConvergence { iterations: usize },
    /// The path cannot form a valid simple curve.
    InvalidGeometry { reason: &'static str },
}

impl GeomError {
    #[inline]
    pub(crate) fn degenerate(reason: &'static str) -> Self {
        GeomError::DegenerateInput { reason }
    }
    #[inline]
    pub(crate) fn invalid(reason: &'static str) -> Self {
        GeomError::InvalidGeometry { reason }
    }
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::DegenerateInput { reason } => write!(f, "degenerate input: {reason}"),
            GeomError::FitNonConvergence { iterations } => {
                write!(f, "circle fit did not converge after {iterations} iterations")
            }
            GeomError::InvalidGeometry { reason } => write!(f, "invalid geometry: {reason}"),
        }
    }
}

impl std::error::Error for GeomError {}

pub type GeomResult<T> = Result<T, GeomError>;
