//! 2D Vector type

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::scalar::{Real, Scalar};
use crate::text::{self, ParseVectorError, DEFAULT_SEPARATOR};

/// 2D Vector with x, y components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

pub type Vec2i = Vec2<i32>;
pub type Vec2u = Vec2<u32>;
pub type Vec2f = Vec2<f32>;
pub type Vec2d = Vec2<f64>;

impl_vector!(Vec2, 2 { x, y });
impl_component_mul!(Vec2 { x, y });

impl<T> Vec2<T> {
    /// Create a new Vec2
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> Vec2<T> {
    /// Read the vector from `"x<separator>y"`.
    ///
    /// Without a separator the vector is set to zero. Fields are read like
    /// C `atof`, so `"1.5abc/2"` gives `(1.5, 2)`.
    pub fn set(&mut self, s: &str, separator: &str) {
        match text::read_lenient::<2>(s, separator) {
            Some([x, y]) => {
                self.x = T::narrow_from(x);
                self.y = T::narrow_from(y);
            }
            None => {
                log::debug!("{:?} has no {:?} separator, using zero vector", s, separator);
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

impl<T: Scalar + FromStr> Vec2<T> {
    /// Strict parse of `"x<separator>y"`
    pub fn try_from_delimited(s: &str, separator: &str) -> Result<Self, ParseVectorError> {
        let [x, y] = text::read_strict::<T, 2>(s, separator)?;
        Ok(Self { x, y })
    }
}

impl<T: Scalar + FromStr> FromStr for Vec2<T> {
    type Err = ParseVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_delimited(s, DEFAULT_SEPARATOR)
    }
}

impl<T: Real> Vec2<T> {
    /// Rotate counter-clockwise by `angle` degrees
    pub fn rotate(&mut self, angle: T) {
        let (s, c) = angle.deg_to_rad().sin_cos();
        *self = Self::new(c * self.x - s * self.y, s * self.x + c * self.y);
    }

    /// Angle of the vector in degrees, computed as `atan2(x, y)`
    #[inline]
    pub fn angle(self) -> T {
        self.x.atan2(self.y).rad_to_deg()
    }
}
