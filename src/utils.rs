//! Utility functions for scanstats.
//!
//! Tolerance-based floating-point comparison and NaN counting, used by the
//! test suites and exposed for user convenience.

use crate::traits::{Element, StatFloat};

/// Standard epsilon for high-precision floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons involving accumulated operations.
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Approximate equality check for floating-point values.
///
/// Returns `true` if `a` and `b` are within `tolerance` of each other, or if
/// both are NaN (for testing convenience).
///
/// # Example
///
/// ```
/// use scanstats::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
/// assert!(!approx_eq(1.0, 2.0, EPSILON));
/// assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: StatFloat>(a: T, b: T, tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < tolerance
}

/// Relative approximate equality check for floating-point values.
///
/// More appropriate than absolute tolerance when comparing values of varying
/// magnitudes.
#[inline]
#[must_use]
pub fn approx_eq_relative<T: StatFloat>(a: T, b: T, rel_tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }

    let diff = (a - b).abs();
    let max_abs = a.abs().max(b.abs());

    if max_abs == T::zero() {
        return diff == T::zero();
    }

    diff / max_abs < rel_tolerance
}

/// Count the number of NaN values in a slice.
///
/// Always zero for integer element types.
#[inline]
#[must_use]
pub fn count_nans<T: Element>(data: &[T]) -> usize {
    data.iter().filter(|x| x.is_nan()).count()
}

/// Count the number of NaN values at the beginning of a slice.
///
/// This is the length of the prefix the extremum scanner skips when seeding.
///
/// # Example
///
/// ```
/// use scanstats::utils::count_nan_prefix;
///
/// let data = vec![f64::NAN, f64::NAN, 1.0, 2.0, f64::NAN];
/// assert_eq!(count_nan_prefix(&data), 2);
/// ```
#[inline]
#[must_use]
pub fn count_nan_prefix<T: Element>(data: &[T]) -> usize {
    data.iter().take_while(|x| x.is_nan()).count()
}
