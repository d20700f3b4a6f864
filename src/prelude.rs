//! Commonly used types and functions for convenient importing.
//!
//! # Usage
//!
//! ```
//! use scanstats::prelude::*;
//!
//! let data = vec![3.0_f64, 1.0, 4.0, 1.0, 5.0];
//!
//! let ext = extrema(&data, false).unwrap();
//! let mom = moments(&data, 0).unwrap();
//!
//! assert_eq!(ext.argmin, 1);
//! assert!((mom.mean - 2.8).abs() < 1e-10);
//! ```

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::{Element, StatFloat};

// Kernels and their result types
pub use crate::kernels::extrema::{extrema, ExtremaResult};
pub use crate::kernels::moments::{moments, moments_in, MomentResult};

// Comparison helpers
pub use crate::utils::{approx_eq, approx_eq_relative, EPSILON, LOOSE_EPSILON};
