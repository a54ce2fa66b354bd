//! Utility functions for swing-ta.
//!
//! Besides the floating-point comparison helpers shared with the test
//! suites, this module hosts the small post-processing collaborators the
//! zigzag pipeline applies to its output arrays: a forward-only offset
//! shift, a missing-marker fill, and the non-negative offset clamp.
//!
//! # Example
//!
//! ```
//! use swing_ta::utils::{approx_eq, shift_forward, EPSILON};
//!
//! let mut data = vec![1.0_f64, 2.0, 3.0];
//! shift_forward(&mut data, 1);
//! assert!(data[0].is_nan());
//! assert!(approx_eq(data[1], 1.0, EPSILON));
//! assert!(approx_eq(data[2], 2.0, EPSILON));
//! ```

use crate::traits::SeriesElement;

/// Standard epsilon for high-precision floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons involving accumulated floating-point
/// operations.
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Approximate equality check for floating-point values.
///
/// Returns `true` if `a` and `b` are within `tolerance` of each other,
/// or if both are NaN (for testing convenience).
///
/// # Example
///
/// ```
/// use swing_ta::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
/// assert!(!approx_eq(1.0, 2.0, EPSILON));
/// assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < tolerance
}

/// Relative approximate equality check for floating-point values.
///
/// More appropriate than absolute tolerance when comparing values of
/// varying magnitudes. Two infinities of the same sign compare equal.
#[inline]
#[must_use]
pub fn approx_eq_relative<T: SeriesElement>(a: T, b: T, rel_tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }

    let diff = (a - b).abs();
    let max_abs = a.abs().max(b.abs());

    if max_abs == T::zero() {
        return diff == T::zero();
    }

    diff / max_abs < rel_tolerance
}

/// Count the number of NaN values in a slice.
#[inline]
#[must_use]
pub fn count_nans<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().filter(|x| x.is_nan()).count()
}

/// Count the number of NaN values at the beginning of a slice.
///
/// Useful for verifying the leading missing-value run of shifted outputs.
#[inline]
#[must_use]
pub fn count_nan_prefix<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().take_while(|x| x.is_nan()).count()
}

/// Returns true if every element of the series equals the first.
///
/// Empty and single-element series are constant. A series containing NaN is
/// never constant (NaN compares unequal to itself).
#[inline]
#[must_use]
pub fn is_constant<T: SeriesElement>(data: &[T]) -> bool {
    match data.first() {
        Some(&first) => data.iter().all(|&v| v == first),
        None => true,
    }
}

/// Clamps a signed offset request to the non-negative domain.
///
/// The swing outputs confirm pivots only in hindsight, so shifting them
/// backward would reference information unavailable at computation time.
/// Callers holding signed offsets go through this clamp before reaching
/// the pipeline, which only accepts `usize`.
///
/// # Example
///
/// ```
/// use swing_ta::utils::clamped_offset;
///
/// assert_eq!(clamped_offset(3), 3);
/// assert_eq!(clamped_offset(0), 0);
/// assert_eq!(clamped_offset(-5), 0);
/// ```
#[inline]
#[must_use]
pub fn clamped_offset(offset: isize) -> usize {
    offset.max(0) as usize
}

/// Shifts a series forward in time by `offset` positions, in place.
///
/// The first `offset` elements become NaN and the last `offset` elements
/// fall off the end. An `offset` of zero leaves the data untouched; an
/// `offset` of `data.len()` or more yields an all-NaN series.
pub fn shift_forward<T: SeriesElement>(data: &mut [T], offset: usize) {
    if offset == 0 {
        return;
    }
    let n = data.len();
    if offset >= n {
        for value in data.iter_mut() {
            *value = T::nan();
        }
        return;
    }
    for i in (offset..n).rev() {
        data[i] = data[i - offset];
    }
    for value in data.iter_mut().take(offset) {
        *value = T::nan();
    }
}

/// Replaces every NaN in the series with `fill`, in place.
///
/// Applied after shifting, so both the non-pivot markers and any leading
/// offset gap receive the same substitute value.
pub fn fill_nan<T: SeriesElement>(data: &mut [T], fill: T) {
    for value in data.iter_mut() {
        if value.is_nan() {
            *value = fill;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_basic() {
        assert!(approx_eq(1.0_f64, 1.0, EPSILON));
        assert!(approx_eq(1.0_f64, 1.0 + 1e-11, EPSILON));
        assert!(!approx_eq(1.0_f64, 2.0, EPSILON));
    }

    #[test]
    fn test_approx_eq_nan() {
        assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
        assert!(!approx_eq(f64::NAN, 1.0, EPSILON));
        assert!(!approx_eq(1.0, f64::NAN, EPSILON));
    }

    #[test]
    fn test_approx_eq_relative() {
        assert!(approx_eq_relative(1e10_f64, 1e10 + 1.0, 1e-9));
        assert!(!approx_eq_relative(1.0_f64, 2.0, 1e-10));
        assert!(approx_eq_relative(0.0_f64, 0.0, 1e-10));
        assert!(approx_eq_relative(f64::INFINITY, f64::INFINITY, 1e-10));
        assert!(!approx_eq_relative(f64::INFINITY, 1.0, 1e-10));
    }

    #[test]
    fn test_count_nans() {
        let data = vec![f64::NAN, 1.0, f64::NAN, 2.0, f64::NAN];
        assert_eq!(count_nans(&data), 3);
        assert_eq!(count_nans(&[1.0_f64, 2.0]), 0);
    }

    #[test]
    fn test_count_nan_prefix() {
        let data = vec![f64::NAN, f64::NAN, 1.0, 2.0, f64::NAN];
        assert_eq!(count_nan_prefix(&data), 2);
        assert_eq!(count_nan_prefix(&[1.0_f64, f64::NAN]), 0);
    }

    #[test]
    fn test_is_constant() {
        assert!(is_constant(&[5.0_f64; 4]));
        assert!(is_constant(&[] as &[f64]));
        assert!(is_constant(&[3.0_f64]));
        assert!(!is_constant(&[5.0_f64, 5.0, 4.0]));
        assert!(!is_constant(&[f64::NAN, f64::NAN]));
    }

    #[test]
    fn test_clamped_offset() {
        assert_eq!(clamped_offset(7), 7);
        assert_eq!(clamped_offset(0), 0);
        assert_eq!(clamped_offset(-1), 0);
        assert_eq!(clamped_offset(isize::MIN), 0);
    }

    #[test]
    fn test_shift_forward_basic() {
        let mut data = vec![1.0_f64, 2.0, 3.0, 4.0];
        shift_forward(&mut data, 2);
        assert!(data[0].is_nan());
        assert!(data[1].is_nan());
        assert!(approx_eq(data[2], 1.0, EPSILON));
        assert!(approx_eq(data[3], 2.0, EPSILON));
    }

    #[test]
    fn test_shift_forward_zero_is_noop() {
        let mut data = vec![1.0_f64, 2.0, 3.0];
        shift_forward(&mut data, 0);
        assert_eq!(data, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_shift_forward_past_end() {
        let mut data = vec![1.0_f64, 2.0, 3.0];
        shift_forward(&mut data, 5);
        assert_eq!(count_nans(&data), 3);
    }

    #[test]
    fn test_shift_forward_preserves_nan_markers() {
        let mut data = vec![f64::NAN, 1.0, f64::NAN];
        shift_forward(&mut data, 1);
        assert!(data[0].is_nan());
        assert!(data[1].is_nan());
        assert!(approx_eq(data[2], 1.0, EPSILON));
    }

    #[test]
    fn test_fill_nan() {
        let mut data = vec![f64::NAN, 1.0, f64::NAN];
        fill_nan(&mut data, 0.0);
        assert_eq!(data, vec![0.0, 1.0, 0.0]);
    }
}
