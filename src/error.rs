//! Error types for reserving calculations
//!
//! Two kinds of failure exist: the caller handed us something malformed
//! (validation), or a calculation produced a value we cannot stand behind
//! (computation). Boundaries use [`ReservingError::kind`] to map the former
//! to a client-error status and the latter to a server-error status.
//!
//! A development column with zero observed pairs is *not* an error; it
//! degrades to a factor of 0 (see `development`).

use thiserror::Error;

/// Classification of a [`ReservingError`] for calling boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller input violates a precondition; surface as a client error.
    Validation,
    /// Internal numeric fault; surface as a server error.
    Computation,
}

/// Error type for all fallible reserving operations.
#[derive(Debug, Clone, Error)]
pub enum ReservingError {
    /// Returned when a triangle has no origin rows.
    #[error("triangle has no origin rows")]
    EmptyTriangle,

    /// Returned when an origin row is shorter or longer than the first row.
    #[error("triangle is not rectangular: origin row {row} has {got} cells, expected {expected}")]
    NotRectangular {
        /// Index of the offending origin row.
        row: usize,
        /// Cell count of the first row.
        expected: usize,
        /// Cell count of the offending row.
        got: usize,
    },

    /// Returned when an observed cell is NaN or infinite.
    #[error("non-finite value {value} at origin row {row}, development age {col}")]
    NonFiniteCell {
        /// Origin row index.
        row: usize,
        /// Development age (column) index.
        col: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when a triangle has fewer than two development columns.
    #[error("triangle needs at least 2 development columns, got {got}")]
    TooFewColumns {
        /// Number of columns in the triangle.
        got: usize,
    },

    /// Returned when an origin row contains no observed cells at all.
    #[error("origin row {row} has no observed cells")]
    EmptyOriginRow {
        /// Origin row index.
        row: usize,
    },

    /// Returned when a cumulative LDF of zero is passed to the
    /// Bornhuetter-Ferguson estimator.
    #[error("cumulative LDF must be non-zero")]
    ZeroLdf,

    /// Returned when a required configuration value is absent.
    #[error("missing configuration value {name}")]
    MissingConfig {
        /// Name of the absent value.
        name: &'static str,
    },

    /// Returned when a calculation produces NaN or an infinity.
    #[error("computation produced a non-finite value in {context}")]
    NonFiniteResult {
        /// Short description of where the value appeared.
        context: &'static str,
    },
}

impl ReservingError {
    /// Classify this error for status mapping at a request boundary.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReservingError::NonFiniteResult { .. } => ErrorKind::Computation,
            _ => ErrorKind::Validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_not_rectangular_message() {
        let e = ReservingError::NotRectangular {
            row: 2,
            expected: 4,
            got: 3,
        };
        assert_eq!(
            e.to_string(),
            "triangle is not rectangular: origin row 2 has 3 cells, expected 4"
        );
    }

    #[test]
    fn error_zero_ldf_message() {
        let e = ReservingError::ZeroLdf;
        assert_eq!(e.to_string(), "cumulative LDF must be non-zero");
    }

    #[test]
    fn validation_errors_classify_as_validation() {
        assert_eq!(ReservingError::EmptyTriangle.kind(), ErrorKind::Validation);
        assert_eq!(ReservingError::ZeroLdf.kind(), ErrorKind::Validation);
        assert_eq!(
            ReservingError::TooFewColumns { got: 1 }.kind(),
            ErrorKind::Validation
        );
    }

    #[test]
    fn non_finite_result_classifies_as_computation() {
        let e = ReservingError::NonFiniteResult {
            context: "ultimate projection",
        };
        assert_eq!(e.kind(), ErrorKind::Computation);
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<ReservingError>();
    }
}
