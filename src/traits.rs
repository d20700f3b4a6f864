//! Core traits for scanstats numeric dispatch.
//!
//! This module defines the element abstraction both kernels are generic over.
//! Dispatch is fully monomorphized: the per-element loops contain no runtime
//! branching on the element kind, and NaN checks compile to constant `false`
//! for integer instantiations.

use num_traits::{Float, NumCast, ToPrimitive, Zero};

/// A floating-point type usable as a moment accumulator.
///
/// This abstracts over `f32` and `f64` for the Welford accumulation in
/// [`moments_in`](crate::kernels::moments::moments_in). It mirrors the bounds
/// needed by the hot loop: arithmetic, NaN construction, and casting of loop
/// counts.
pub trait StatFloat: Float + NumCast + Copy + Default + Send + Sync + 'static {}

// Blanket implementation for all types that satisfy the bounds
impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> StatFloat for T {}

/// A trait for types that can be scanned by the statistics kernels.
///
/// Implemented for all fixed-width signed and unsigned integers and for both
/// IEEE floating-point precisions. The same generic kernel code handles every
/// element kind; the only per-kind differences are the NaN predicate (always
/// `false` for integers) and the accumulation precision chosen by the
/// automatic policy.
///
/// # Automatic precision
///
/// [`Element::Auto`] is the accumulator type selected when the caller does not
/// request one explicitly: `f32` only when the element storage is already
/// `f32`, and `f64` for `f64` and for every integer type. This asymmetric
/// default is deliberate and preserved from the original reduction semantics;
/// callers that want `f64` accumulation over `f32` data use
/// [`moments_in`](crate::kernels::moments::moments_in).
///
/// # Example
///
/// ```
/// use scanstats::traits::Element;
///
/// fn first_valid<T: Element>(data: &[T]) -> Option<usize> {
///     data.iter().position(|v| !v.is_nan())
/// }
///
/// assert_eq!(first_valid(&[f64::NAN, 1.0, 2.0]), Some(1));
/// assert_eq!(first_valid(&[1_u32, 2, 3]), Some(0));
/// ```
pub trait Element: Copy + PartialOrd + Zero + ToPrimitive + Send + Sync + 'static {
    /// Accumulator precision selected by the automatic policy.
    type Auto: StatFloat;

    /// Returns `true` if the value is a floating-point NaN.
    ///
    /// Integer types are never NaN, so the default implementation returns a
    /// constant `false` that monomorphization removes from the scan loops.
    #[inline]
    fn is_nan(self) -> bool {
        false
    }

    /// Converts the value to the accumulator type `A`.
    ///
    /// Conversion between the supported primitives and `f32`/`f64` follows
    /// `as`-cast semantics and cannot fail; the NaN fallback exists only to
    /// satisfy the `NumCast` contract without panicking.
    #[inline]
    fn to_accum<A: StatFloat>(self) -> A {
        <A as NumCast>::from(self).unwrap_or_else(A::nan)
    }
}

macro_rules! impl_int_element {
    ($($t:ty),* $(,)?) => {$(
        impl Element for $t {
            type Auto = f64;
        }
    )*};
}

impl_int_element!(i8, i16, i32, i64, u8, u16, u32, u64);

impl Element for f32 {
    type Auto = f32;

    #[inline]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
}

impl Element for f64 {
    type Auto = f64;

    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
}
