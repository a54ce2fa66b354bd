//! Indicator implementations.
//!
//! Each indicator offers a plain function returning freshly allocated
//! output, an `_into` variant writing into caller-owned buffers, and a
//! configuration struct covering the optional parameter surface.

pub mod zigzag;

pub use zigzag::{
    densify_swings, densify_swings_into, reduce_swings, zigzag, zigzag_into, zigzag_min_len,
    Swing, ZigZag, ZigZagOutput,
};
