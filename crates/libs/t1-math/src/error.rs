//! Error type for the fallible vector operations.
//!
//! The operator set never fails; indexing and list construction panic on
//! contract violations. Only the `try_*` twins report [`VectorError`].

use thiserror::Error;

/// Reasons a checked vector operation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum VectorError {
    /// More initialiser values were supplied than the vector can hold.
    #[error("cannot build a {dim}-dimensional vector from {got} elements")]
    TooManyElements {
        /// Dimension of the vector being built.
        dim: usize,
        /// Number of values supplied.
        got: usize,
    },
    /// An element index outside `[0, dim)` was requested.
    #[error("index {index} is out of range for a {dim}-dimensional vector")]
    IndexOutOfRange {
        /// Dimension of the vector being accessed.
        dim: usize,
        /// The offending index.
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            VectorError::TooManyElements { dim: 3, got: 5 }.to_string(),
            "cannot build a 3-dimensional vector from 5 elements"
        );
        assert_eq!(
            VectorError::IndexOutOfRange { dim: 2, index: 2 }.to_string(),
            "index 2 is out of range for a 2-dimensional vector"
        );
    }
}
