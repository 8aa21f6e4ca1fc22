//! Infinite plane in 3D space
//!
//! The plane is the set of points `p` with `p · normal = d`. The normal is
//! not kept at unit length: [`Plane::distance`] is measured in multiples of
//! `|normal|`, which is still enough to tell the two sides apart. Call
//! [`Plane::normalize`] to get real distances.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::vec3::Vec3f;

/// Plane with (unnormalized) normal and offset `d`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Plane {
    pub normal: Vec3f,
    pub d: f32,
}

impl Default for Plane {
    /// The XZ plane through the origin, facing +Y
    fn default() -> Self {
        Self::new(Vec3f::new(0.0, 1.0, 0.0), 0.0)
    }
}

impl Plane {
    /// Create a plane from its normal and offset
    #[inline]
    pub const fn new(normal: Vec3f, d: f32) -> Self {
        Self { normal, d }
    }

    /// Create the plane `a*x + b*y + c*z = d`
    #[inline]
    pub const fn from_coefficients(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self::new(Vec3f::new(a, b, c), d)
    }

    /// Plane through three points.
    ///
    /// The normal is `(p2 - p1) × (p3 - p1)`, so the winding of the points
    /// picks the side it faces. Collinear points give a zero normal.
    pub fn from_points(p1: Vec3f, p2: Vec3f, p3: Vec3f) -> Self {
        let normal = (p2 - p1).cross(p3 - p1);
        Self::new(normal, p1.dot(normal))
    }

    /// Scale the normal to unit length and `d` with it.
    ///
    /// A zero normal produces NaN.
    pub fn normalize(&mut self) {
        let length = self.normal.length();
        self.d /= length;
        self.normal /= length;
    }

    /// Signed distance of `point`, in units of `|normal|`
    #[inline]
    pub fn distance(&self, point: Vec3f) -> f32 {
        point.dot(self.normal) - self.d
    }

    /// Intersection with the infinite line `origin + s * direction`.
    ///
    /// A line parallel to the plane yields `origin` if it lies in the plane
    /// and `None` otherwise.
    pub fn intersect_with_line(&self, origin: Vec3f, direction: Vec3f) -> Option<Vec3f> {
        let n_dot_dir = self.normal.dot(direction);
        if n_dot_dir == 0.0 {
            return (self.distance(origin) == 0.0).then_some(origin);
        }

        let s = (self.d - self.normal.dot(origin)) / n_dot_dir;
        Some(origin + direction * s)
    }

    /// Intersection with the segment from `p1` to `p2`, endpoints included.
    ///
    /// A segment parallel to the plane yields `p1` if `p1` lies in the plane
    /// and `None` otherwise.
    pub fn intersect_with_line_segment(&self, p1: Vec3f, p2: Vec3f) -> Option<Vec3f> {
        let n_dot_dir = self.normal.dot(p2 - p1);
        if n_dot_dir == 0.0 {
            return (self.distance(p1) == 0.0).then_some(p1);
        }

        let s = (self.d - self.normal.dot(p1)) / n_dot_dir;
        if !(0.0..=1.0).contains(&s) {
            return None;
        }
        Some((1.0 - s) * p1 + s * p2)
    }
}
