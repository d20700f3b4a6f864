//! scanstats: single-pass descriptive statistics kernels
//!
//! This crate computes two families of descriptive statistics over a
//! one-dimensional numeric slice, each in exactly one traversal:
//!
//! - [`extrema`]: minimum, maximum, the index of first occurrence of each,
//!   and optionally the strictly-positive minimum with its index.
//! - [`moments`]: mean, variance, and standard deviation using Welford's
//!   numerically stable online algorithm, with a configurable
//!   degrees-of-freedom correction.
//!
//! Both kernels are pure functions over an immutable `&[T]`: no I/O, no
//! logging, no shared state, and bitwise-identical results on repeated calls.
//! They are generic over all fixed-width integers and both floating-point
//! precisions through the [`Element`](traits::Element) trait; dispatch is
//! monomorphized so the hot loops carry no runtime type branches.
//!
//! # Quick Start
//!
//! ```
//! use scanstats::prelude::*;
//!
//! let data = vec![3_i32, 1, 4, 1, 5, 9, 2, 6];
//!
//! let ext = extrema(&data, false).unwrap();
//! assert_eq!(ext.minimum, 1);
//! assert_eq!(ext.argmin, 1);
//! assert_eq!(ext.maximum, 9);
//! assert_eq!(ext.argmax, 5);
//!
//! let mom = moments(&data, 0).unwrap();
//! assert!((mom.mean - 3.875).abs() < 1e-10);
//! ```
//!
//! # NaN handling
//!
//! The two kernels deliberately disagree on NaN:
//!
//! - `extrema` skips NaN values and only reports NaN when the *entire* input
//!   is NaN;
//! - `moments` does not filter, so a single NaN poisons mean and variance.
//!
//! This asymmetry is part of the contract, not a bug. See the kernel module
//! docs for details.
//!
//! # Error Handling
//!
//! Both kernels return [`Result<T, Error>`] with a single error kind:
//!
//! ```
//! use scanstats::prelude::*;
//!
//! let empty: Vec<f64> = vec![];
//! assert!(matches!(extrema(&empty, false), Err(Error::EmptyInput)));
//! assert!(matches!(moments(&empty, 0), Err(Error::EmptyInput)));
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod kernels;
pub mod prelude;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use kernels::extrema::{extrema, ExtremaResult};
pub use kernels::moments::{moments, moments_in, MomentResult};
pub use traits::{Element, StatFloat};
pub use utils::{approx_eq, approx_eq_relative, count_nan_prefix, count_nans, EPSILON, LOOSE_EPSILON};
