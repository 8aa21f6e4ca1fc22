//! 3D Vector type used for positions, directions and rotations

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::scalar::{Real, Scalar};
use crate::text::{self, ParseVectorError, DEFAULT_SEPARATOR};
use crate::vec2::Vec2;

/// 3D Vector with x, y, z components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

pub type Vec3i = Vec3<i32>;
pub type Vec3u = Vec3<u32>;
pub type Vec3f = Vec3<f32>;
pub type Vec3d = Vec3<f64>;

impl_vector!(Vec3, 3 { x, y, z });
impl_component_mul!(Vec3 { x, y, z });
impl_scalar_lhs_mul!(Vec3; u8 u16 u32 u64 usize i8 i16 i32 i64 isize f32 f64);

impl<T> Vec3<T> {
    /// Create a new Vec3
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Scalar> Vec3<T> {
    /// Cross product (right-handed)
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Read the vector from `"x<separator>y<separator>z"`.
    ///
    /// If either separator is missing the vector is set to zero. Fields are
    /// read like C `atof`.
    pub fn set(&mut self, s: &str, separator: &str) {
        match text::read_lenient::<3>(s, separator) {
            Some([x, y, z]) => {
                self.x = T::narrow_from(x);
                self.y = T::narrow_from(y);
                self.z = T::narrow_from(z);
            }
            None => {
                log::debug!("{:?} lacks two {:?} separators, using zero vector", s, separator);
                *self = Self::zero();
            }
        }
    }

    /// Lenient constructor, see [`Self::set`]
    pub fn from_delimited(s: &str, separator: &str) -> Self {
        let mut v = Self::zero();
        v.set(s, separator);
        v
    }
}

impl<T: Scalar + FromStr> Vec3<T> {
    /// Strict parse of `"x<separator>y<separator>z"`
    pub fn try_from_delimited(s: &str, separator: &str) -> Result<Self, ParseVectorError> {
        let [x, y, z] = text::read_strict::<T, 3>(s, separator)?;
        Ok(Self { x, y, z })
    }
}

impl<T: Scalar + FromStr> FromStr for Vec3<T> {
    type Err = ParseVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_delimited(s, DEFAULT_SEPARATOR)
    }
}

/// Wrap an angle in degrees into [0, 360) for inputs within one turn
fn wrap_degrees<T: Real>(mut angle: T) -> T {
    let full = T::narrow_from(360.0);
    if angle < T::zero() {
        angle = angle + full;
    }
    if angle >= full {
        angle = angle - full;
    }
    angle
}

impl<T: Real> Vec3<T> {
    /// Rotate around the Z axis by `angle` degrees
    pub fn rotate_xy(&mut self, angle: T) {
        let (s, c) = angle.deg_to_rad().sin_cos();
        *self = Self::new(c * self.x - s * self.y, s * self.x + c * self.y, self.z);
    }

    /// Rotate around the Y axis by `angle` degrees.
    ///
    /// Positive angles turn +X toward +Z, the opposite of a right-handed
    /// turn about +Y.
    pub fn rotate_xz(&mut self, angle: T) {
        let (s, c) = angle.deg_to_rad().sin_cos();
        *self = Self::new(c * self.x - s * self.z, self.y, s * self.x + c * self.z);
    }

    /// Rotate around the X axis by `angle` degrees
    pub fn rotate_yz(&mut self, angle: T) {
        let (s, c) = angle.deg_to_rad().sin_cos();
        *self = Self::new(self.x, c * self.y - s * self.z, s * self.y + c * self.z);
    }

    /// Rotate by per-axis angles in degrees.
    ///
    /// Applied in this order: Z (`angles.z`), then X (`angles.x`), then Y
    /// (`angles.y`).
    pub fn rotate(&mut self, angles: Self) {
        self.rotate_xy(angles.z);
        self.rotate_yz(angles.x);
        self.rotate_xz(angles.y);
    }

    /// Pitch (`x`) and yaw (`y`) of this direction in degrees, relative to
    /// (0, 0, 1), both in [0, 360)
    pub fn angle(self) -> Vec2<T> {
        let yaw = self.x.atan2(self.z).rad_to_deg();
        let horizontal = (self.x * self.x + self.z * self.z).sqrt();
        let pitch = horizontal.atan2(self.y).rad_to_deg() - T::narrow_from(90.0);
        Vec2::new(wrap_degrees(pitch), wrap_degrees(yaw))
    }
}
