//! Commonly used types and traits for convenient importing.
//!
//! # Usage
//!
//! ```
//! use swing_ta::prelude::*;
//!
//! let high = vec![1.0_f64, 3.0, 2.0, 5.0, 1.0, 6.0, 2.0];
//! let low = vec![0.0_f64, 2.0, 1.0, 3.0, 0.0, 4.0, 1.0];
//!
//! let out = zigzag(&high, &low, 3, 10.0).unwrap().unwrap();
//! assert_eq!(out.swing_count(), 4);
//! ```
//!
//! # Contents
//!
//! This prelude re-exports:
//!
//! ## Error Handling
//! - [`Error`]: The main error type for indicator computation failures
//! - [`Result`]: Type alias for `std::result::Result<T, Error>`
//!
//! ## Traits
//! - [`SeriesElement`]: Trait for numeric types usable in indicators
//! - [`ValidatedInput`]: Extension trait for input validation
//!
//! ## Indicator Surface
//! - [`zigzag`] / [`zigzag_into`]: allocating and buffer-reuse entry points
//! - [`ZigZag`]: configuration struct with offset/fillna/naming support
//! - [`ZigZagOutput`]: the three densified output arrays
//! - [`zigzag_min_len`]: minimum input length for a result
//!
//! ## Kernel Types
//! - [`scan_extrema`], [`Extremum`], [`SwingDirection`]

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::{SeriesElement, ValidatedInput};

// Indicator functions and configuration
pub use crate::indicators::{zigzag, zigzag_into, zigzag_min_len, Swing, ZigZag, ZigZagOutput};

// Category metadata
pub use crate::category::{category_of, Category};

// Scan kernel
pub use crate::kernels::{scan_extrema, Extremum, SwingDirection};
