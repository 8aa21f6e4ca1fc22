//! GameMath camera probe
//!
//! Configuration loading and the probe that projects configured points
//! through a camera built from [`gamemath_math`] transforms.

pub mod config;
pub mod probe;
