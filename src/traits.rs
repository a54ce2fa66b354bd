//! Core traits for swing-ta numeric operations.
//!
//! The primary trait is [`SeriesElement`], a common interface for numeric
//! operations on time series data that abstracts over `f32` and `f64`.
//! [`ValidatedInput`] provides the length checks every public entry point
//! performs before touching the data.
//!
//! # Example
//!
//! ```
//! use swing_ta::traits::{SeriesElement, ValidatedInput};
//!
//! fn pct_move<T: SeriesElement>(from: T, to: T) -> T {
//!     T::hundred() * (to - from) / from
//! }
//!
//! let data = vec![1.0_f64, 2.0, 3.0];
//! assert!(data.validate_min_length(2, "example").is_ok());
//! assert!((pct_move(2.0_f64, 3.0) - 50.0).abs() < 1e-10);
//! ```

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A trait for types that can be used as elements in a data series.
///
/// Extends `num_traits::Float` with fallible constructors for the parameter
/// conversions the indicators need.
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented
    /// in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented
    /// in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// Returns the constant 100 as this type.
    ///
    /// Used for percentage scaling of deviation values.
    #[inline]
    #[must_use]
    fn hundred() -> Self {
        // Safe unwrap: 100 is always representable in Float types
        <Self as NumCast>::from(100).unwrap()
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Trait for validating input series before computation.
pub trait ValidatedInput {
    /// The element type of the series.
    type Element: SeriesElement;

    /// Returns the length of the series.
    fn len(&self) -> usize;

    /// Returns true if the series is empty.
    #[inline]
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates that the series has at least `min_length` elements.
    ///
    /// # Errors
    ///
    /// Returns `Error::InsufficientData` if the series is shorter than
    /// `min_length`.
    #[inline]
    fn validate_min_length(&self, min_length: usize, indicator: &'static str) -> Result<()> {
        if self.len() < min_length {
            Err(Error::InsufficientData {
                indicator,
                required: min_length,
                actual: self.len(),
            })
        } else {
            Ok(())
        }
    }

    /// Validates that the series is not empty.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyInput` if the series is empty.
    #[inline]
    fn validate_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(Error::EmptyInput)
        } else {
            Ok(())
        }
    }
}

impl<T: SeriesElement> ValidatedInput for [T] {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: SeriesElement> ValidatedInput for Vec<T> {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

/// Validates that two parallel series have the same length.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` naming both series if they differ.
#[inline]
pub fn validate_same_length<T: SeriesElement>(
    a: &[T],
    a_name: &'static str,
    b: &[T],
    b_name: &'static str,
) -> Result<()> {
    if a.len() == b.len() {
        Ok(())
    } else {
        Err(Error::LengthMismatch {
            description: format!(
                "{a_name} has {} elements, {b_name} has {}",
                a.len(),
                b.len()
            ),
        })
    }
}
