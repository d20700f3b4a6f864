//! Streaming mean, variance, and standard deviation via Welford's algorithm.
//!
//! # Algorithm
//!
//! Welford's online algorithm maintains a running mean and a running sum of
//! squared deviations (`m2`) in one pass:
//!
//! ```text
//! For the i-th value x (1-indexed):
//!   delta = x - mean
//!   mean += delta / i
//!   m2   += delta * (x - mean)   # updated mean; ordering is essential
//!
//! variance = m2 / (n - ddof)     when n > ddof, else NaN
//! ```
//!
//! It is numerically stable where a naive sum-of-squares formula suffers
//! catastrophic cancellation; results are not bit-identical to a two-pass
//! reference, only close.
//!
//! # NaN policy
//!
//! NaN values are **not** filtered: any NaN in the input propagates through
//! `delta`/`mean`/`m2` and poisons the final mean and variance. This diverges
//! from [`extrema`](crate::kernels::extrema), which skips NaN, and the
//! divergence is intentional — do not "fix" it by filtering here.
//!
//! # Precision
//!
//! Accumulation happens in `f32` or `f64`. [`moments`] applies the automatic
//! policy ([`Element::Auto`]): `f32` only when the element storage is already
//! `f32`, `f64` otherwise, including for all integer inputs. [`moments_in`]
//! selects the accumulator explicitly.
//!
//! # References
//!
//! - Welford, B. P. (1962). "Note on a method for calculating corrected sums
//!   of squares and products". Technometrics. 4 (3): 419-420.
//! - Knuth, D. E. (1997). The Art of Computer Programming, volume 2:
//!   Seminumerical Algorithms (3rd ed.). Section 4.2.2, page 232.

use crate::error::{Error, Result};
use crate::traits::{Element, StatFloat};

/// Result of a streaming moment estimation.
///
/// The accumulation precision is visible in the type parameter `A`; the
/// degrees-of-freedom correction is echoed back in [`ddof`](Self::ddof).
///
/// Invariant: `variance = m2 / (length - ddof)` when `length > ddof`;
/// otherwise both `variance` and `standard_deviation` are NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentResult<A> {
    /// The arithmetic mean.
    pub mean: A,
    /// The variance, `NaN` when `length <= ddof`.
    pub variance: A,
    /// The standard deviation, `NaN` when `length <= ddof`.
    pub standard_deviation: A,
    /// Number of elements processed.
    pub length: usize,
    /// The caller-supplied degrees-of-freedom correction, echoed back.
    pub ddof: usize,
}

/// Computes mean, variance, and standard deviation in one pass, accumulating
/// in the precision chosen by the automatic policy.
///
/// `ddof` is the degrees-of-freedom correction: `0` gives the population
/// variance, `1` the unbiased sample variance (Bessel's correction).
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `data` is empty. An input shorter than or
/// equal to `ddof` is *not* an error; variance and standard deviation are NaN
/// while the mean is still reported.
///
/// # Example
///
/// ```
/// use scanstats::kernels::moments::moments;
///
/// let data: Vec<i64> = (0..100).collect();
/// let result = moments(&data, 0).unwrap();
///
/// assert!((result.mean - 49.5).abs() < 1e-10);
/// assert!((result.variance - 833.25).abs() < 1e-10);
/// assert_eq!(result.length, 100);
/// ```
pub fn moments<T: Element>(data: &[T], ddof: usize) -> Result<MomentResult<T::Auto>> {
    moments_in::<T, T::Auto>(data, ddof)
}

/// Computes mean, variance, and standard deviation in one pass, accumulating
/// in the explicitly chosen precision `A`.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `data` is empty.
///
/// # Example
///
/// ```
/// use scanstats::kernels::moments::moments_in;
///
/// // Force f64 accumulation over f32 storage.
/// let data = vec![1.0_f32, 2.0, 3.0, 4.0];
/// let result = moments_in::<f32, f64>(&data, 1).unwrap();
///
/// assert!((result.mean - 2.5).abs() < 1e-10);
/// assert!((result.variance - 5.0 / 3.0).abs() < 1e-10);
/// ```
pub fn moments_in<T: Element, A: StatFloat>(data: &[T], ddof: usize) -> Result<MomentResult<A>> {
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut mean = A::zero();
    let mut m2 = A::zero();
    let mut count = A::zero();

    for &value in data {
        let x: A = value.to_accum();
        count = count + A::one();
        let delta = x - mean;
        mean = mean + delta / count;
        // The second factor must use the updated mean.
        m2 = m2 + delta * (x - mean);
    }

    let length = data.len();
    let (variance, standard_deviation) = if length <= ddof {
        // Divisor would be non-positive: undefined statistic, not an error.
        (A::nan(), A::nan())
    } else {
        let divisor = <A as num_traits::NumCast>::from(length - ddof).unwrap_or_else(A::nan);
        let variance = m2 / divisor;
        (variance, variance.sqrt())
    };

    Ok(MomentResult {
        mean,
        variance,
        standard_deviation,
        length,
        ddof,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{approx_eq, EPSILON};

    #[test]
    fn test_moments_empty_input() {
        let data: Vec<f64> = vec![];
        assert!(matches!(moments(&data, 0), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_moments_single_value() {
        let result = moments(&[5.0_f64], 0).unwrap();
        assert!(approx_eq(result.mean, 5.0, EPSILON));
        assert!(approx_eq(result.variance, 0.0, EPSILON));
        assert!(approx_eq(result.standard_deviation, 0.0, EPSILON));
        assert_eq!(result.length, 1);
        assert_eq!(result.ddof, 0);
    }

    #[test]
    fn test_moments_known_values() {
        let data = vec![2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let result = moments(&data, 0).unwrap();

        assert!(approx_eq(result.mean, 5.0, EPSILON));
        assert!(approx_eq(result.variance, 4.0, EPSILON));
        assert!(approx_eq(result.standard_deviation, 2.0, EPSILON));
    }

    #[test]
    fn test_moments_integer_range() {
        let data: Vec<u32> = (0..100).collect();
        let result = moments(&data, 0).unwrap();

        assert!(approx_eq(result.mean, 49.5, EPSILON));
        assert!(approx_eq(result.variance, 833.25, EPSILON));
    }

    #[test]
    fn test_moments_ddof_bessel() {
        let data = vec![1.0_f64, 2.0, 3.0];
        let population = moments(&data, 0).unwrap();
        let sample = moments(&data, 1).unwrap();

        assert!(approx_eq(population.variance, 2.0 / 3.0, EPSILON));
        assert!(approx_eq(sample.variance, 1.0, EPSILON));
        assert_eq!(sample.ddof, 1);
    }

    #[test]
    fn test_moments_ddof_exhausts_length() {
        let result = moments(&[42.0_f64], 1).unwrap();
        assert!(approx_eq(result.mean, 42.0, EPSILON));
        assert!(result.variance.is_nan());
        assert!(result.standard_deviation.is_nan());

        let result = moments(&[1.0_f64, 2.0], 5).unwrap();
        assert!(result.variance.is_nan());
    }

    #[test]
    fn test_moments_nan_poisons() {
        let data = vec![1.0_f64, f64::NAN, 3.0];
        let result = moments(&data, 0).unwrap();

        assert!(result.mean.is_nan());
        assert!(result.variance.is_nan());
        assert!(result.standard_deviation.is_nan());
        // Length still counts every element, NaN included.
        assert_eq!(result.length, 3);
    }

    #[test]
    fn test_moments_infinity_propagates() {
        let data = vec![1.0_f64, 2.0, f64::INFINITY];
        let result = moments(&data, 0).unwrap();

        // inf - inf in the m2 update yields NaN; the mean stays infinite.
        assert!(result.mean.is_infinite());
        assert!(result.variance.is_nan());
    }

    #[test]
    fn test_moments_auto_precision_f32() {
        let data = vec![1.0_f32, 2.0, 3.0];
        let result = moments(&data, 0).unwrap();
        // T::Auto is f32 here; exercise the f32 path end to end.
        let mean: f32 = result.mean;
        assert!(approx_eq(mean, 2.0_f32, 1e-6));
    }

    #[test]
    fn test_moments_explicit_precision_over_integers() {
        let data = vec![1_u8, 2, 3, 4];
        let result = moments_in::<u8, f32>(&data, 0).unwrap();
        assert!(approx_eq(result.mean, 2.5_f32, 1e-6));
    }

    #[test]
    fn test_moments_numerical_stability_large_offset() {
        // A naive sum-of-squares loses all precision here; Welford must not.
        let base = 1e9_f64;
        let data: Vec<f64> = (0..1000).map(|i| base + f64::from(i)).collect();
        let result = moments(&data, 0).unwrap();

        assert!(approx_eq(result.mean, base + 499.5, 1e-4));
        // Variance of 0..999 offset by a constant: (1000^2 - 1) / 12.
        let expected = (1000.0_f64 * 1000.0 - 1.0) / 12.0;
        assert!((result.variance - expected).abs() / expected < 1e-7);
    }

    #[test]
    fn test_moments_idempotent() {
        let data = vec![0.1_f64, -2.3, 7.7, 0.1];
        let a = moments(&data, 1).unwrap();
        let b = moments(&data, 1).unwrap();
        assert_eq!(a, b);
    }
}
