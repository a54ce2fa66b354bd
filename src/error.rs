//! Error types for swing-ta.
//!
//! This module defines the error types used throughout the library for
//! handling invalid parameters and malformed input series.

use thiserror::Error;

/// The main error type for swing-ta operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input data series is empty.
    #[error("empty input: no data provided")]
    EmptyInput,

    /// The input data series is too short for the requested operation.
    ///
    /// Note that the zigzag pipeline itself treats a series shorter than
    /// `legs + 1` as a recognized no-result condition rather than an error;
    /// this variant is reserved for lower-level buffer contracts.
    #[error("insufficient data for {indicator}: required {required} elements, got {actual}")]
    InsufficientData {
        /// Name of the operation that needed more data.
        indicator: &'static str,
        /// The number of data points required.
        required: usize,
        /// The number of data points provided.
        actual: usize,
    },

    /// Two parallel input series have different lengths.
    #[error("length mismatch: {description}")]
    LengthMismatch {
        /// Description of the mismatched arrays.
        description: String,
    },

    /// The window/period parameter is invalid.
    #[error("invalid period {period}: {reason}")]
    InvalidPeriod {
        /// The invalid period value that was provided.
        period: usize,
        /// Description of why the period is invalid.
        reason: &'static str,
    },

    /// The deviation threshold parameter is invalid.
    #[error("invalid deviation threshold: {reason}")]
    InvalidDeviation {
        /// Description of why the threshold is invalid.
        reason: &'static str,
    },

    /// A pre-allocated output buffer is too small for the result.
    #[error("output buffer too small for {indicator}: required {required} elements, got {actual}")]
    BufferTooSmall {
        /// Name of the operation writing the buffer.
        indicator: &'static str,
        /// The number of elements required.
        required: usize,
        /// The number of elements available.
        actual: usize,
    },

    /// Failed to convert a numeric value to the target element type.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },
}

/// Convenience type alias for Results using the swing-ta Error type.
pub type Result<T> = std::result::Result<T, Error>;
