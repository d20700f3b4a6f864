//! Single-pass statistics kernels.
//!
//! Each kernel traverses the input slice exactly once:
//!
//! - [`extrema`](extrema::extrema): minimum/maximum with first-occurrence
//!   indices and an optional strictly-positive minimum.
//! - [`moments`](moments::moments): mean, variance, and standard deviation via
//!   Welford's online algorithm.
//!
//! The two kernels deliberately disagree on NaN handling: `extrema` skips NaN
//! values, `moments` lets them propagate. See the module docs for details.

pub mod extrema;
pub mod moments;

pub use extrema::{extrema, ExtremaResult};
pub use moments::{moments, moments_in, MomentResult};
