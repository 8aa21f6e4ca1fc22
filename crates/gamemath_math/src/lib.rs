//! Game Mathematics Library
//!
//! Small linear algebra kit for games and renderers: generic vectors,
//! column-major matrices and an infinite plane.
//!
//! ## Core Types
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`] - vectors over any [`Scalar`]
//! - [`Mat3`], [`Mat4`] - square matrices (element `(row, column)` at
//!   `row + column * N`)
//! - [`Plane`] - infinite plane with line and segment intersection
//!
//! ## Scalars
//!
//! - [`Scalar`] - every primitive integer and float
//! - [`Real`] - `f32` and `f64`, needed for lengths, rotations and
//!   projections
//!
//! Angles are in degrees for vector rotation and [`Mat4::perspective_fov`],
//! and in radians for the `Mat4::euler_rotation_*` builders.

#[macro_use]
mod macros;

pub mod scalar;
pub mod text;
pub mod vec2;
pub mod vec3;
pub mod vec4;
pub mod mat3;
pub mod mat4;
pub mod plane;

pub use scalar::{
    deg_to_rad, ftoi, is_power_of_two, is_power_of_two_or_null, log2, log2_from_power_of_two,
    next_power_of_two, rad_to_deg, Real, Scalar,
};
pub use text::{ParseVectorError, DEFAULT_SEPARATOR};
pub use vec2::{Vec2, Vec2d, Vec2f, Vec2i, Vec2u};
pub use vec3::{Vec3, Vec3d, Vec3f, Vec3i, Vec3u};
pub use vec4::{Vec4, Vec4d, Vec4f, Vec4i, Vec4u};
pub use mat3::{Mat3, Mat3d, Mat3f};
pub use mat4::{Mat4, Mat4d, Mat4f};
pub use plane::Plane;
