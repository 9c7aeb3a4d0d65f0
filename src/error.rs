//! Error types for affinity operations.

use thiserror::Error;

/// Errors that can occur when a transform must be strictly well-formed.
///
/// Most operations never fail: they follow IEEE floating-point rules and let
/// infinities or NaN flow into the result. This type is only produced by the
/// opt-in checked variants such as [`Matrix::try_inverse`](crate::Matrix::try_inverse).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AffineError {
    /// The linear part has no inverse.
    #[error("singular matrix: determinant is {determinant}")]
    Singular {
        /// Determinant of the rejected matrix, widened to `f64`.
        determinant: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular_message() {
        let err = AffineError::Singular { determinant: 0.0 };
        assert_eq!(err.to_string(), "singular matrix: determinant is 0");
    }
}
