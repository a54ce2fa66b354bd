//! Centered-window local extremum scanner.
//!
//! This kernel scans a high/low pair with a fixed window centered on each
//! bar and emits every position whose low is the minimum of its window, or
//! whose high is the maximum of its window. It is the candidate-generation
//! stage of the zigzag pipeline; the deviation filter that turns candidates
//! into confirmed swings lives in [`crate::indicators::zigzag`].
//!
//! # Window geometry
//!
//! For a window parameter `w`, each center `i` looks at `left = w / 2` bars
//! before it and `right = left + 1` bars from it onward, i.e. the half-open
//! slice `[i - left, i + right)`. Only centers with a full window qualify,
//! so the scannable range is `[left, n - right)`.
//!
//! # Ties
//!
//! The comparisons are `<=` / `>=`, so a plateau produces an extremum at
//! every qualifying center. Downstream, the reducer's duplicate guard and
//! deviation threshold keep tied candidates from producing zero-move swings.
//!
//! # Complexity
//!
//! O(n x w) bounded loops over the owned input slices. The window sizes in
//! practical use are small (default 10); no deque machinery is warranted.
//!
//! # Example
//!
//! ```
//! use swing_ta::kernels::centered_extrema::{scan_extrema, SwingDirection};
//!
//! let high = vec![1.0_f64, 3.0, 2.0, 5.0, 1.0, 6.0, 2.0];
//! let low = vec![0.0_f64, 2.0, 1.0, 3.0, 0.0, 4.0, 1.0];
//!
//! let extrema = scan_extrema(&high, &low, 3).unwrap();
//! let positions: Vec<usize> = extrema.iter().map(|e| e.position).collect();
//! assert_eq!(positions, vec![1, 2, 3, 4]);
//! assert_eq!(extrema[0].direction, SwingDirection::High);
//! assert_eq!(extrema[1].direction, SwingDirection::Low);
//! ```

use crate::error::{Error, Result};
use crate::traits::{SeriesElement, ValidatedInput};

/// Direction of a local extremum or confirmed swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwingDirection {
    /// A local maximum of the high series.
    High,
    /// A local minimum of the low series.
    Low,
}

impl SwingDirection {
    /// Returns the numeric direction code used in densified output:
    /// `+1` for a high, `-1` for a low.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the code cannot be represented
    /// in `T` (never for float types).
    #[inline]
    pub fn code<T: SeriesElement>(self) -> Result<T> {
        match self {
            Self::High => T::from_f64(1.0),
            Self::Low => T::from_f64(-1.0),
        }
    }
}

/// A raw local extremum candidate produced by the scanner.
///
/// Immutable once produced. A single position may yield both a `Low` and a
/// `High` extremum when the bar is a local extreme in both senses; the
/// scanner emits the `Low` first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum<T> {
    /// Index of the extremum in the input series.
    pub position: usize,
    /// Whether this is a local high or a local low.
    pub direction: SwingDirection,
    /// The high (or low) price at `position`.
    pub value: T,
}

/// Number of bars the scanner looks at before each center.
#[inline]
#[must_use]
pub const fn window_left(window: usize) -> usize {
    window / 2
}

/// Number of bars the scanner looks at from each center onward.
#[inline]
#[must_use]
pub const fn window_right(window: usize) -> usize {
    window_left(window) + 1
}

/// Minimum input length for the scanner to emit any candidate.
#[inline]
#[must_use]
pub const fn scan_min_len(window: usize) -> usize {
    window_left(window) + window_right(window) + 1
}

/// Scans `high`/`low` for centered-window local extrema.
///
/// Returns the candidates ordered by position; for a position that is an
/// extremum in both senses, the low entry precedes the high entry.
///
/// A series too short to fit a single full window is a recognized
/// empty-result condition: the scanner returns `Ok` with an empty list
/// rather than an error.
///
/// # Errors
///
/// Returns an error if:
/// - Either input array is empty (`Error::EmptyInput`)
/// - The input arrays have different lengths (`Error::LengthMismatch`)
/// - The window is zero (`Error::InvalidPeriod`)
pub fn scan_extrema<T: SeriesElement>(
    high: &[T],
    low: &[T],
    window: usize,
) -> Result<Vec<Extremum<T>>> {
    if window == 0 {
        return Err(Error::InvalidPeriod {
            period: window,
            reason: "window must be at least 1",
        });
    }

    high.validate_not_empty()?;
    crate::traits::validate_same_length(high, "high", low, "low")?;

    let n = high.len();
    let left = window_left(window);
    let right = window_right(window);

    if n < scan_min_len(window) {
        return Ok(Vec::new());
    }

    let mut extrema = Vec::with_capacity(n);

    for i in left..(n - right) {
        let window_start = i - left;
        let window_end = i + right;

        let low_center = low[i];
        if low[window_start..window_end]
            .iter()
            .all(|&v| low_center <= v)
        {
            extrema.push(Extremum {
                position: i,
                direction: SwingDirection::Low,
                value: low_center,
            });
        }

        let high_center = high[i];
        if high[window_start..window_end]
            .iter()
            .all(|&v| high_center >= v)
        {
            extrema.push(Extremum {
                position: i,
                direction: SwingDirection::High,
                value: high_center,
            });
        }
    }

    Ok(extrema)
}
