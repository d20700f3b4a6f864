//! Minimum/maximum scan with first-occurrence indices.
//!
//! This kernel computes the minimum, the maximum, the index of the first
//! occurrence of each, and optionally the smallest strictly-positive value
//! with its index, in a single traversal of the input.
//!
//! # NaN policy
//!
//! For floating-point element types, NaN values are excluded from the
//! comparison: the scan first advances past any leading run of NaNs to find
//! the seed element, and interior NaNs fall through both strict comparisons
//! in the main loop without an explicit check. The one exception is an input
//! consisting entirely of NaN, which reports NaN for both extremes with
//! `argmin == argmax == 0` rather than raising, for parity with the reduction
//! semantics callers expect from `nanmin`/`nanmax`.
//!
//! This differs from [`moments`](crate::kernels::moments), which lets NaN
//! propagate. The asymmetry is intentional.
//!
//! # Complexity
//!
//! O(n) time, O(1) additional space, exactly one traversal. The
//! positive-minimum scan adds one comparison per element and is only paid for
//! when requested.
//!
//! # Example
//!
//! ```
//! use scanstats::kernels::extrema::extrema;
//!
//! let data = vec![3.0_f64, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
//! let result = extrema(&data, false).unwrap();
//!
//! assert_eq!(result.minimum, 1.0);
//! assert_eq!(result.argmin, 1); // first of the two 1.0 values
//! assert_eq!(result.maximum, 9.0);
//! assert_eq!(result.argmax, 5);
//! ```

use crate::error::{Error, Result};
use crate::traits::Element;

/// Result of an extremum scan.
///
/// `argmin` and `argmax` always reference the *first* index at which the
/// reported extreme value occurs; later equal values never overwrite them.
///
/// `min_positive` and `argmin_positive` are `Some` only when the
/// positive-minimum scan was requested and at least one element is strictly
/// greater than zero. They are always both `Some` or both `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtremaResult<T> {
    /// The minimum value (NaN if the whole input is NaN).
    pub minimum: T,
    /// The maximum value (NaN if the whole input is NaN).
    pub maximum: T,
    /// Index of the first occurrence of the minimum.
    pub argmin: usize,
    /// Index of the first occurrence of the maximum.
    pub argmax: usize,
    /// The smallest strictly-positive value, if requested and present.
    pub min_positive: Option<T>,
    /// Index of the first occurrence of `min_positive`.
    pub argmin_positive: Option<usize>,
}

/// Computes minimum, maximum, and their first-occurrence indices in one pass.
///
/// When `min_positive` is `true`, the smallest strictly-positive value and
/// its index are tracked in the same traversal, interleaved with the general
/// scan rather than as a second pass.
///
/// # Arguments
///
/// * `data` - The input slice; read-only, never retained
/// * `min_positive` - Whether to also track the strictly-positive minimum
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `data` is empty. All-NaN input is *not*
/// an error; it yields NaN extremes (see the module docs).
///
/// # Example
///
/// ```
/// use scanstats::kernels::extrema::extrema;
///
/// let data = vec![-2_i32, -1, 0, 3, 1];
/// let result = extrema(&data, true).unwrap();
///
/// assert_eq!(result.minimum, -2);
/// assert_eq!(result.maximum, 3);
/// assert_eq!(result.min_positive, Some(1));
/// assert_eq!(result.argmin_positive, Some(4));
/// ```
pub fn extrema<T: Element>(data: &[T], min_positive: bool) -> Result<ExtremaResult<T>> {
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }

    // Seed from the first non-NaN element. For integer types the predicate is
    // a constant `false` and this finds index 0.
    let Some(first) = data.iter().position(|v| !v.is_nan()) else {
        // Whole input is NaN: propagate NaN, leave indices at 0.
        return Ok(ExtremaResult {
            minimum: data[0],
            maximum: data[0],
            argmin: 0,
            argmax: 0,
            min_positive: None,
            argmin_positive: None,
        });
    };

    if min_positive {
        Ok(scan_with_positive(data, first))
    } else {
        Ok(scan(data, first))
    }
}

/// General extremum scan, seeded at `first`.
///
/// The two branches are mutually exclusive: once at least one element has
/// been seen, a new maximum cannot also be below the current minimum. Interior
/// NaNs fail both strict comparisons and fall through.
fn scan<T: Element>(data: &[T], first: usize) -> ExtremaResult<T> {
    let mut minimum = data[first];
    let mut maximum = data[first];
    let mut argmin = first;
    let mut argmax = first;

    for (index, &value) in data.iter().enumerate().skip(first + 1) {
        if value > maximum {
            maximum = value;
            argmax = index;
        } else if value < minimum {
            minimum = value;
            argmin = index;
        }
    }

    ExtremaResult {
        minimum,
        maximum,
        argmin,
        argmax,
        min_positive: None,
        argmin_positive: None,
    }
}

/// Extremum scan that also tracks the strictly-positive minimum.
///
/// Same single traversal as [`scan`], with one extra comparison per element.
fn scan_with_positive<T: Element>(data: &[T], first: usize) -> ExtremaResult<T> {
    let mut minimum = data[first];
    let mut maximum = data[first];
    let mut argmin = first;
    let mut argmax = first;

    let seed = data[first];
    let (mut min_pos, mut argmin_pos) = if seed > T::zero() {
        (Some(seed), Some(first))
    } else {
        (None, None)
    };

    for (index, &value) in data.iter().enumerate().skip(first + 1) {
        if value > maximum {
            maximum = value;
            argmax = index;
        } else if value < minimum {
            minimum = value;
            argmin = index;
        }

        // Strict comparisons keep the first occurrence and skip NaN.
        if value > T::zero() && min_pos.map_or(true, |current| value < current) {
            min_pos = Some(value);
            argmin_pos = Some(index);
        }
    }

    ExtremaResult {
        minimum,
        maximum,
        argmin,
        argmax,
        min_positive: min_pos,
        argmin_positive: argmin_pos,
    }
}
