//! ZIGZAG indicator: deviation-filtered pivot/swing detection.
//!
//! Zigzag reduces a dense high/low series to the sparse sequence of trend
//! reversals that moved price by at least a minimum percentage, then maps
//! that sequence back onto the original time axis. It runs in three
//! pipelined stages:
//!
//! 1. **Scan** — [`scan_extrema`](crate::kernels::scan_extrema) emits every
//!    centered-window local high/low candidate.
//! 2. **Reduce** — [`reduce_swings`] walks the candidates newest-to-oldest,
//!    keeping one mutable pending swing. A same-direction candidate that is
//!    more extreme amends the pending swing in place; an opposite-direction
//!    candidate whose percentage move exceeds the threshold finalizes the
//!    pending swing and becomes the new pending one; everything else is
//!    noise and is dropped.
//! 3. **Densify** — [`densify_swings`] expands the confirmed swings into
//!    three full-length arrays (direction code, pivot value, deviation
//!    percent) with NaN at every non-pivot position.
//!
//! Zigzag confirms pivots only in hindsight, so its output must never be
//! shifted backward in time; [`ZigZag`] therefore only accepts non-negative
//! offsets (see [`crate::utils::clamped_offset`]).
//!
//! # Deviation stamping
//!
//! A swing's `deviation_pct` is the percentage move from its chronological
//! predecessor to it, relative to the predecessor's value. The oldest swing
//! has no predecessor and carries `0`.
//!
//! # No-result conditions
//!
//! A series shorter than `legs + 1` yields `Ok(None)`. A series that fits
//! but produces no confirmed reversal (flat data, or every move below the
//! threshold) yields an all-NaN output. Neither condition is an error.
//!
//! # Example
//!
//! ```
//! use swing_ta::indicators::zigzag;
//!
//! let high = vec![1.0_f64, 3.0, 2.0, 5.0, 1.0, 6.0, 2.0];
//! let low = vec![0.0_f64, 2.0, 1.0, 3.0, 0.0, 4.0, 1.0];
//!
//! let out = zigzag(&high, &low, 3, 10.0).unwrap().unwrap();
//!
//! // Confirmed pivots at 1 (high 3), 2 (low 1), 3 (high 5), 4 (low 0).
//! assert!(out.swing[0].is_nan());
//! assert_eq!(out.swing[1], 1.0);
//! assert_eq!(out.swing[2], -1.0);
//! assert_eq!(out.value[3], 5.0);
//! assert_eq!(out.value[4], 0.0);
//! // The oldest pivot carries deviation 0; the move 1 -> 5 is +400%.
//! assert_eq!(out.deviation[1], 0.0);
//! assert!((out.deviation[3] - 400.0).abs() < 1e-10);
//! ```

use crate::category::Category;
use crate::error::{Error, Result};
use crate::kernels::centered_extrema::{scan_extrema, Extremum, SwingDirection};
use crate::traits::{validate_same_length, SeriesElement, ValidatedInput};
use crate::utils::{fill_nan, is_constant, shift_forward};

/// A confirmed trend-reversal point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swing<T> {
    /// Index of the pivot in the input series.
    pub position: usize,
    /// Whether the pivot is a high or a low.
    pub direction: SwingDirection,
    /// The pivot price.
    pub value: T,
    /// Percentage move from the previous swing to this one, relative to the
    /// previous swing's value. `0` for the chronologically oldest swing.
    pub deviation_pct: T,
}

/// Densified zigzag output: three arrays aligned to the input series.
///
/// Non-pivot positions hold NaN in all three arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct ZigZagOutput<T> {
    /// Swing direction code: `+1` high, `-1` low.
    pub swing: Vec<T>,
    /// Pivot price at each swing position.
    pub value: Vec<T>,
    /// Deviation percent stamped on each swing position.
    pub deviation: Vec<T>,
}

impl<T: SeriesElement> ZigZagOutput<T> {
    /// Creates an all-NaN output of length `n`.
    #[must_use]
    pub fn filled_nan(n: usize) -> Self {
        Self {
            swing: vec![T::nan(); n],
            value: vec![T::nan(); n],
            deviation: vec![T::nan(); n],
        }
    }

    /// Length of the output arrays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.swing.len()
    }

    /// Returns true if the output arrays are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.swing.is_empty()
    }

    /// Number of confirmed pivots in the output.
    #[must_use]
    pub fn swing_count(&self) -> usize {
        self.swing.iter().filter(|v| !v.is_nan()).count()
    }
}

/// Minimum input length for the zigzag pipeline to produce a result.
#[inline]
#[must_use]
pub const fn zigzag_min_len(legs: usize) -> usize {
    legs + 1
}

fn validate_params(legs: usize, deviation: f64) -> Result<()> {
    if legs == 0 {
        return Err(Error::InvalidPeriod {
            period: legs,
            reason: "legs must be at least 1",
        });
    }
    if deviation.is_nan() || deviation <= 0.0 {
        return Err(Error::InvalidDeviation {
            reason: "deviation must be positive",
        });
    }
    Ok(())
}

/// Reduces scanner candidates to the chronological list of confirmed swings.
///
/// Candidates are processed from newest to oldest against a single mutable
/// pending swing (the tail of the accumulator):
///
/// - Same direction, strictly more extreme, and more than one swing already
///   finalized: the pending swing is amended in place and the deviation of
///   the swing after it is recomputed against the new value. With one or
///   fewer finalized swings the candidate is ignored.
/// - Opposite direction with a percentage move above the threshold: the
///   pending swing is finalized with that move stamped on it, and the
///   candidate becomes the new pending swing. A candidate sharing the
///   pending swing's position is skipped.
/// - Anything else is discarded as noise.
///
/// The returned list is oldest-first; its directions strictly alternate and
/// its positions strictly increase. The oldest swing keeps deviation `0`.
///
/// # Errors
///
/// Returns `Error::InvalidDeviation` if `deviation` is not positive.
pub fn reduce_swings<T: SeriesElement>(
    extrema: &[Extremum<T>],
    deviation: T,
) -> Result<Vec<Swing<T>>> {
    if deviation.is_nan() || deviation <= T::zero() {
        return Err(Error::InvalidDeviation {
            reason: "deviation must be positive",
        });
    }

    let Some(newest) = extrema.last() else {
        return Ok(Vec::new());
    };

    let threshold = T::from_f64(0.01)? * deviation;
    let hundred = T::hundred();

    let mut swings: Vec<Swing<T>> = Vec::with_capacity(extrema.len());
    swings.push(Swing {
        position: newest.position,
        direction: newest.direction,
        value: newest.value,
        deviation_pct: T::zero(),
    });

    for candidate in extrema[..extrema.len() - 1].iter().rev() {
        let pending = swings.len() - 1;

        if candidate.direction == swings[pending].direction {
            let more_extreme = match candidate.direction {
                SwingDirection::Low => swings[pending].value > candidate.value,
                SwingDirection::High => swings[pending].value < candidate.value,
            };
            if more_extreme && pending > 1 {
                let finalized_value = swings[pending - 1].value;
                let current_dev = match candidate.direction {
                    SwingDirection::Low => {
                        (finalized_value - candidate.value) / candidate.value
                    }
                    SwingDirection::High => {
                        (candidate.value - finalized_value) / candidate.value
                    }
                };
                swings[pending].position = candidate.position;
                swings[pending].value = candidate.value;
                swings[pending - 1].deviation_pct = hundred * current_dev;
            }
        } else {
            let current_dev = match swings[pending].direction {
                SwingDirection::Low => {
                    (candidate.value - swings[pending].value) / candidate.value
                }
                SwingDirection::High => {
                    (swings[pending].value - candidate.value) / candidate.value
                }
            };
            if current_dev > threshold {
                if swings[pending].position == candidate.position {
                    continue;
                }
                swings[pending].deviation_pct = hundred * current_dev;
                swings.push(Swing {
                    position: candidate.position,
                    direction: candidate.direction,
                    value: candidate.value,
                    deviation_pct: T::zero(),
                });
            }
        }
    }

    swings.reverse();
    Ok(swings)
}

/// Expands a confirmed swing list onto a dense time axis of length `n`.
///
/// All three arrays start as NaN; each swing writes its direction code,
/// value and deviation at its position. Deterministic and idempotent.
///
/// # Errors
///
/// Returns `Error::BufferTooSmall` if any swing position is outside `0..n`.
pub fn densify_swings<T: SeriesElement>(swings: &[Swing<T>], n: usize) -> Result<ZigZagOutput<T>> {
    let mut output = ZigZagOutput::filled_nan(n);
    densify_swings_into(swings, &mut output)?;
    Ok(output)
}

/// Writes a confirmed swing list into pre-allocated output arrays.
///
/// Only the swing positions are touched; the caller is responsible for
/// resetting the arrays to NaN beforehand.
///
/// # Errors
///
/// Returns `Error::BufferTooSmall` if any swing position is outside the
/// output arrays, or `Error::LengthMismatch` if the arrays disagree in
/// length.
pub fn densify_swings_into<T: SeriesElement>(
    swings: &[Swing<T>],
    output: &mut ZigZagOutput<T>,
) -> Result<()> {
    validate_same_length(&output.swing, "swing", &output.value, "value")?;
    validate_same_length(&output.swing, "swing", &output.deviation, "deviation")?;

    let n = output.swing.len();
    for swing in swings {
        if swing.position >= n {
            return Err(Error::BufferTooSmall {
                indicator: "zigzag",
                required: swing.position + 1,
                actual: n,
            });
        }
        output.swing[swing.position] = swing.direction.code()?;
        output.value[swing.position] = swing.value;
        output.deviation[swing.position] = swing.deviation_pct;
    }
    Ok(())
}

/// Computes the zigzag indicator into a pre-allocated output struct.
///
/// Returns `Ok(None)` when the series is shorter than `legs + 1` (the
/// recognized no-result condition; the output buffers are left untouched),
/// otherwise `Ok(Some(count))` where `count` is the number of confirmed
/// swings written. A `count` of zero means the output is all-NaN: the
/// series was constant, no candidate extremum existed, or no move ever
/// exceeded the threshold.
///
/// # Errors
///
/// Returns an error if:
/// - `legs` is zero (`Error::InvalidPeriod`)
/// - `deviation` is not positive (`Error::InvalidDeviation`)
/// - Either input array is empty (`Error::EmptyInput`)
/// - The input arrays have different lengths (`Error::LengthMismatch`)
/// - Any output buffer is shorter than the input (`Error::BufferTooSmall`)
pub fn zigzag_into<T: SeriesElement>(
    high: &[T],
    low: &[T],
    legs: usize,
    deviation: f64,
    output: &mut ZigZagOutput<T>,
) -> Result<Option<usize>> {
    validate_params(legs, deviation)?;
    high.validate_not_empty()?;
    validate_same_length(high, "high", low, "low")?;

    let n = high.len();
    for buffer in [&output.swing, &output.value, &output.deviation] {
        if buffer.len() < n {
            return Err(Error::BufferTooSmall {
                indicator: "zigzag",
                required: n,
                actual: buffer.len(),
            });
        }
    }

    if n < zigzag_min_len(legs) {
        return Ok(None);
    }

    for i in 0..n {
        output.swing[i] = T::nan();
        output.value[i] = T::nan();
        output.deviation[i] = T::nan();
    }

    // Zero-variance series: every scannable bar ties in both directions,
    // and when the intra-bar high/low spread exceeds the threshold those
    // ties would commit as pivots despite the price never moving. A
    // constant series has no swings by definition, so the scan is skipped.
    if is_constant(high) && is_constant(low) {
        return Ok(Some(0));
    }

    let extrema = scan_extrema(high, low, legs)?;
    let swings = reduce_swings(&extrema, T::from_f64(deviation)?)?;

    // A lone pending swing was never confirmed by any deviation event;
    // reporting it would turn flat or threshold-quiet data into a pivot.
    if swings.len() < 2 {
        return Ok(Some(0));
    }

    densify_swings_into(&swings, output)?;
    Ok(Some(swings.len()))
}

/// Computes the zigzag indicator.
///
/// Runs the scan → reduce → densify pipeline and returns the three
/// densified arrays, or `Ok(None)` when the series is shorter than
/// `legs + 1`.
///
/// # Arguments
///
/// * `high` - High prices
/// * `low` - Low prices
/// * `legs` - Centered scan window (typically 10)
/// * `deviation` - Minimum percentage move confirming a reversal (typically 5.0)
///
/// # Errors
///
/// Returns an error if:
/// - `legs` is zero (`Error::InvalidPeriod`)
/// - `deviation` is not positive (`Error::InvalidDeviation`)
/// - Either input array is empty (`Error::EmptyInput`)
/// - The input arrays have different lengths (`Error::LengthMismatch`)
pub fn zigzag<T: SeriesElement>(
    high: &[T],
    low: &[T],
    legs: usize,
    deviation: f64,
) -> Result<Option<ZigZagOutput<T>>> {
    let mut output = ZigZagOutput::filled_nan(high.len());
    match zigzag_into(high, low, legs, deviation, &mut output)? {
        Some(_) => Ok(Some(output)),
        None => Ok(None),
    }
}

/// Zigzag configuration with the full parameter surface.
///
/// Covers the optional parameters the plain [`zigzag`] function omits: an
/// unused-but-validated `close` series, a non-negative output offset and a
/// missing-marker fill value, plus the deterministic output naming derived
/// from `(deviation, legs)`.
///
/// # Example
///
/// ```
/// use swing_ta::indicators::ZigZag;
///
/// let config = ZigZag::new().legs(3).deviation(10.0);
/// assert_eq!(config.name(), "ZIGZAG_10%_3");
///
/// let high = vec![1.0_f64, 3.0, 2.0, 5.0, 1.0, 6.0, 2.0];
/// let low = vec![0.0_f64, 2.0, 1.0, 3.0, 0.0, 4.0, 1.0];
/// let out = config.compute(&high, &low, None).unwrap().unwrap();
/// assert_eq!(out.swing_count(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZigZag {
    legs: usize,
    deviation: f64,
    offset: usize,
    fillna: Option<f64>,
}

impl Default for ZigZag {
    /// Creates a zigzag configuration with standard parameters (10, 5.0).
    fn default() -> Self {
        Self {
            legs: 10,
            deviation: 5.0,
            offset: 0,
            fillna: None,
        }
    }
}

impl ZigZag {
    /// Creates a new zigzag configuration with standard parameters (10, 5.0).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the centered scan window.
    ///
    /// Default: 10
    #[must_use]
    pub const fn legs(mut self, legs: usize) -> Self {
        self.legs = legs;
        self
    }

    /// Sets the minimum percentage move confirming a reversal.
    ///
    /// Default: 5.0
    #[must_use]
    pub const fn deviation(mut self, deviation: f64) -> Self {
        self.deviation = deviation;
        self
    }

    /// Sets the forward shift applied to the output arrays.
    ///
    /// Only non-negative shifts are representable; see
    /// [`crate::utils::clamped_offset`] for callers holding signed values.
    ///
    /// Default: 0
    #[must_use]
    pub const fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Sets a substitute value for the missing markers, applied after the
    /// offset shift.
    ///
    /// Default: none (markers stay NaN)
    #[must_use]
    pub const fn fillna(mut self, fill: f64) -> Self {
        self.fillna = Some(fill);
        self
    }

    /// Returns the configured window.
    #[must_use]
    pub const fn get_legs(&self) -> usize {
        self.legs
    }

    /// Returns the configured deviation threshold.
    #[must_use]
    pub const fn get_deviation(&self) -> f64 {
        self.deviation
    }

    /// Returns the configured offset.
    #[must_use]
    pub const fn get_offset(&self) -> usize {
        self.offset
    }

    /// Minimum input length for this configuration.
    #[must_use]
    pub const fn min_len(&self) -> usize {
        zigzag_min_len(self.legs)
    }

    /// Parameter suffix shared by all output names.
    #[must_use]
    pub fn props(&self) -> String {
        format!("_{}%_{}", self.deviation, self.legs)
    }

    /// Name of the indicator output frame.
    #[must_use]
    pub fn name(&self) -> String {
        format!("ZIGZAG{}", self.props())
    }

    /// Name of the swing-direction column.
    #[must_use]
    pub fn swing_column(&self) -> String {
        format!("ZIGZAGs{}", self.props())
    }

    /// Name of the swing-value column.
    #[must_use]
    pub fn value_column(&self) -> String {
        format!("ZIGZAGv{}", self.props())
    }

    /// Name of the swing-deviation column.
    #[must_use]
    pub fn deviation_column(&self) -> String {
        format!("ZIGZAGd{}", self.props())
    }

    /// Category tag of the indicator output.
    #[must_use]
    pub const fn category(&self) -> Category {
        Category::Trend
    }

    /// Computes zigzag with the configured parameters and post-processing.
    ///
    /// `close` is not used by the algorithm but, when supplied, is validated
    /// against the other series. Returns `Ok(None)` when any series is
    /// shorter than `legs + 1`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `legs` is zero (`Error::InvalidPeriod`)
    /// - `deviation` is not positive (`Error::InvalidDeviation`)
    /// - Any input array is empty (`Error::EmptyInput`)
    /// - The input arrays have different lengths (`Error::LengthMismatch`)
    pub fn compute<T: SeriesElement>(
        &self,
        high: &[T],
        low: &[T],
        close: Option<&[T]>,
    ) -> Result<Option<ZigZagOutput<T>>> {
        validate_params(self.legs, self.deviation)?;
        high.validate_not_empty()?;
        validate_same_length(high, "high", low, "low")?;
        if let Some(close) = close {
            close.validate_not_empty()?;
            validate_same_length(high, "high", close, "close")?;
        }

        let Some(mut output) = zigzag(high, low, self.legs, self.deviation)? else {
            return Ok(None);
        };

        if self.offset > 0 {
            shift_forward(&mut output.swing, self.offset);
            shift_forward(&mut output.value, self.offset);
            shift_forward(&mut output.deviation, self.offset);
        }

        if let Some(fill) = self.fillna {
            let fill = T::from_f64(fill)?;
            fill_nan(&mut output.swing, fill);
            fill_nan(&mut output.value, fill);
            fill_nan(&mut output.deviation, fill);
        }

        Ok(Some(output))
    }
}
