//! Error types for scanstats.
//!
//! The kernels have exactly one recoverable failure mode: being handed an
//! empty slice. Everything else that could be considered "abnormal" (all-NaN
//! input, a degrees-of-freedom correction at least as large as the input) is
//! expressed as a NaN-valued result instead, matching the convention that an
//! undefined statistic is NaN rather than a thrown failure.

use thiserror::Error;

/// The error type for scanstats operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The input slice is empty.
    ///
    /// Both kernels require at least one element; callers are expected to
    /// check or handle this before interpreting results.
    #[error("empty input: no data provided")]
    EmptyInput,
}

/// Convenience type alias for Results using the scanstats [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
