//! swing-ta: Pivot and swing detection for financial time series
//!
//! This crate implements the zigzag indicator: it reduces a dense high/low
//! series to the sparse sequence of trend reversals whose percentage move
//! exceeds a minimum deviation, then maps that sequence back onto the
//! original time axis with NaN marking every non-pivot bar.
//!
//! # Features
//!
//! - **Bounded passes**: a centered-window scan followed by a single
//!   reverse reduction; no unbounded lookback
//! - **Generics**: works with both `f32` and `f64` data types
//! - **Safety**: comprehensive error handling for edge cases
//! - **Buffer reuse**: `_into` variants write into caller-owned output
//!
//! # Quick Start
//!
//! ```
//! use swing_ta::prelude::*;
//!
//! let high = vec![1.0_f64, 3.0, 2.0, 5.0, 1.0, 6.0, 2.0];
//! let low = vec![0.0_f64, 2.0, 1.0, 3.0, 0.0, 4.0, 1.0];
//!
//! // Window of 3 bars, 10% minimum reversal.
//! let out = zigzag(&high, &low, 3, 10.0).unwrap().unwrap();
//!
//! // Pivots carry a direction code, the pivot price and the percentage
//! // move from the previous pivot; every other bar is NaN.
//! assert_eq!(out.swing[1], 1.0);
//! assert_eq!(out.value[1], 3.0);
//! assert!(out.swing[0].is_nan());
//! ```
//!
//! # No-result conditions
//!
//! A series shorter than `legs + 1` returns `Ok(None)`; series that fit
//! but contain no qualifying reversal return an all-NaN output. Malformed
//! input (empty arrays, mismatched lengths, zero window, non-positive
//! deviation) returns [`Err`]:
//!
//! ```
//! use swing_ta::prelude::*;
//!
//! let short = vec![1.0_f64, 2.0];
//! assert!(zigzag(&short, &short, 10, 5.0).unwrap().is_none());
//!
//! let empty: Vec<f64> = vec![];
//! assert!(zigzag(&empty, &empty, 10, 5.0).is_err());
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod category;
pub mod error;
pub mod indicators;
pub mod kernels;
pub mod prelude;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use indicators::{zigzag, zigzag_into, ZigZag, ZigZagOutput};
pub use traits::{SeriesElement, ValidatedInput};
pub use utils::{
    approx_eq, approx_eq_relative, count_nan_prefix, count_nans, EPSILON, LOOSE_EPSILON,
};
