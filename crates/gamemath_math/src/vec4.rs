//! 4D Vector type
//!
//! Mostly used as a homogeneous coordinate: `w = 1` for points and `w = 0`
//! for directions.

use serde::{Deserialize, Serialize};

use crate::scalar::{Real, Scalar};
use crate::vec3::Vec3;

/// 4D Vector with x, y, z, w components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

pub type Vec4i = Vec4<i32>;
pub type Vec4u = Vec4<u32>;
pub type Vec4f = Vec4<f32>;
pub type Vec4d = Vec4<f64>;

impl_vector!(Vec4, 4 { x, y, z, w });
impl_scalar_lhs_mul!(Vec4; u8 u16 u32 u64 usize i8 i16 i32 i64 isize f32 f64);

impl<T> Vec4<T> {
    /// Create a new Vec4
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }
}

impl<T: Scalar> Vec4<T> {
    /// Promote a Vec3 with the given `w`
    #[inline]
    pub fn from_vec3(v: Vec3<T>, w: T) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Extract the xyz components
    #[inline]
    pub fn xyz(self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }
}
