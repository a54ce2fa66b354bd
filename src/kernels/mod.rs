//! Low-level scan kernels shared by the indicator layer.

pub mod centered_extrema;

pub use centered_extrema::{scan_extrema, Extremum, SwingDirection};
