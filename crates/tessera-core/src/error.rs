//! Error types for the validated integration entry points.
//!
//! The adaptive engine itself never fails: inverted limits or a misbehaving
//! integrand simply produce a meaningless estimate. These errors are reported
//! only by callers that opt into checking.

use thiserror::Error;

/// Result type for checked integration.
pub type IntegrateResult<T> = Result<T, IntegrateError>;

/// Errors reported by the checked integration entry points.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum IntegrateError {
    /// Interval bounds are not finite or are inverted.
    #[error("invalid interval [{min}, {max}]: bounds must be finite with min <= max")]
    InvalidInterval {
        /// Lower bound as given.
        min: f64,
        /// Upper bound as given.
        max: f64,
    },

    /// A box has non-finite or inverted bounds along some axis.
    #[error("invalid box on axis {axis}: [{lower}, {upper}] must be finite with lower <= upper")]
    InvalidBox {
        /// First offending axis.
        axis: usize,
        /// Lower coordinate on that axis.
        lower: f64,
        /// Upper coordinate on that axis.
        upper: f64,
    },

    /// Tolerances are negative, NaN, or leave nothing to converge to.
    #[error("invalid tolerance: {0}")]
    InvalidTolerance(String),

    /// The integrand produced NaN or infinity somewhere in the domain.
    #[error("integration produced a non-finite estimate after {subdivisions} subdivisions")]
    NonFiniteResult {
        /// Refine steps performed before the check.
        subdivisions: usize,
    },

    /// The subdivision budget ran out before the tolerance was met.
    #[error("did not converge within {max_subdivisions} subdivisions (error estimate {error:.3e})")]
    DidNotConverge {
        /// The budget that was exhausted.
        max_subdivisions: usize,
        /// Largest component of the final error estimate.
        error: f64,
    },
}
