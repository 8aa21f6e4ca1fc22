//! 4x4 Matrix for affine transforms and projections
//!
//! Storage is column-major: element `(row, column)` lives at
//! `m[row + column * 4]`, so the translation of an affine transform sits at
//! flat indices 12, 13 and 14. Constructors still take their arguments in
//! reading order (row 0 first), which keeps literal matrices in source code
//! looking the way they are written on paper.
//!
//! Vectors are columns and are multiplied on the right: `m * v`. In a
//! product `a * b`, `b` is applied first.

use serde::{Deserialize, Serialize};

use crate::mat3::Mat3;
use crate::scalar::{Real, Scalar};
use crate::vec3::Vec3;
use crate::vec4::Vec4;

/// 4x4 matrix (column-major storage)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Mat4<T> {
    pub m: [T; 16],
}

pub type Mat4f = Mat4<f32>;
pub type Mat4d = Mat4<f64>;

// SAFETY: repr(C) wrapper around `[T; 16]`, no padding.
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Mat4<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Mat4<T> {}

impl<T> Mat4<T> {
    /// Flat index of element `(row, column)`
    #[inline]
    pub const fn index(row: usize, column: usize) -> usize {
        row + column * 4
    }

    /// Wrap a flat column-major array
    #[inline]
    pub const fn from_cols_array(m: [T; 16]) -> Self {
        Self { m }
    }

    /// The 16 elements in storage order
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.m
    }
}

impl<T: Scalar> Mat4<T> {
    /// Create a matrix from its elements, row by row
    #[rustfmt::skip]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        m00: T, m01: T, m02: T, m03: T,
        m10: T, m11: T, m12: T, m13: T,
        m20: T, m21: T, m22: T, m23: T,
        m30: T, m31: T, m32: T, m33: T,
    ) -> Self {
        Self {
            m: [
                m00, m10, m20, m30,
                m01, m11, m21, m31,
                m02, m12, m22, m32,
                m03, m13, m23, m33,
            ],
        }
    }

    /// All elements zero
    pub fn zero() -> Self {
        Self { m: [T::zero(); 16] }
    }

    /// Identity matrix
    #[rustfmt::skip]
    pub fn identity() -> Self {
        let (o, z) = (T::one(), T::zero());
        Self::new(
            o, z, z, z,
            z, o, z, z,
            z, z, o, z,
            z, z, z, o,
        )
    }

    /// Translation by `v`
    #[rustfmt::skip]
    pub fn translation(v: Vec3<T>) -> Self {
        let (o, z) = (T::one(), T::zero());
        Self::new(
            o, z, z, v.x,
            z, o, z, v.y,
            z, z, o, v.z,
            z, z, z, o,
        )
    }

    /// Non-uniform scale by `v`
    #[rustfmt::skip]
    pub fn scaling(v: Vec3<T>) -> Self {
        let (o, z) = (T::one(), T::zero());
        Self::new(
            v.x, z,   z,   z,
            z,   v.y, z,   z,
            z,   z,   v.z, z,
            z,   z,   z,   o,
        )
    }

    /// Determinant, expanded over the 2x2 minors of rows 0-1 and 2-3
    pub fn determinant(&self) -> T {
        let m = |r: usize, c: usize| self[(r, c)];
        (m(0, 0) * m(1, 1) - m(0, 1) * m(1, 0)) * (m(2, 2) * m(3, 3) - m(2, 3) * m(3, 2))
            - (m(0, 0) * m(1, 2) - m(0, 2) * m(1, 0)) * (m(2, 1) * m(3, 3) - m(2, 3) * m(3, 1))
            + (m(0, 0) * m(1, 3) - m(0, 3) * m(1, 0)) * (m(2, 1) * m(3, 2) - m(2, 2) * m(3, 1))
            + (m(0, 1) * m(1, 2) - m(0, 2) * m(1, 1)) * (m(2, 0) * m(3, 3) - m(2, 3) * m(3, 0))
            - (m(0, 1) * m(1, 3) - m(0, 3) * m(1, 1)) * (m(2, 0) * m(3, 2) - m(2, 2) * m(3, 0))
            + (m(0, 2) * m(1, 3) - m(0, 3) * m(1, 2)) * (m(2, 0) * m(3, 1) - m(2, 1) * m(3, 0))
    }

    /// Matrix with rows and columns swapped
    pub fn transposed(&self) -> Self {
        let mut out = *self;
        for row in 0..4 {
            for column in 0..4 {
                out[(row, column)] = self[(column, row)];
            }
        }
        out
    }

    /// `self * Mat4::translation(v)`, without the full product.
    ///
    /// Only column 3 changes.
    pub fn translate(&self, v: Vec3<T>) -> Self {
        let m = &self.m;
        let mut out = *self;
        for row in 0..4 {
            out.m[12 + row] = m[row] * v.x + m[4 + row] * v.y + m[8 + row] * v.z + m[12 + row];
        }
        out
    }

    /// `self * Mat4::scaling(v)`, without the full product.
    ///
    /// Columns 0, 1 and 2 are multiplied by `v.x`, `v.y` and `v.z`.
    pub fn scale(&self, v: Vec3<T>) -> Self {
        let mut out = *self;
        for row in 0..4 {
            out.m[row] = out.m[row] * v.x;
            out.m[4 + row] = out.m[4 + row] * v.y;
            out.m[8 + row] = out.m[8 + row] * v.z;
        }
        out
    }

    /// Transform `point` as `(x, y, z, 1)` and divide by the resulting `w`
    pub fn transform_point(&self, point: Vec3<T>) -> Vec3<T> {
        let v = *self * Vec4::from_vec3(point, T::one());
        Vec3::new(v.x / v.w, v.y / v.w, v.z / v.w)
    }
}

impl<T: Real> Mat4<T> {
    /// Rotation around the X axis by `angle` radians
    #[rustfmt::skip]
    pub fn euler_rotation_x(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, z) = (T::one(), T::zero());
        Self::new(
            o, z, z,  z,
            z, c, -s, z,
            z, s, c,  z,
            z, z, z,  o,
        )
    }

    /// Rotation around the Y axis by `angle` radians
    #[rustfmt::skip]
    pub fn euler_rotation_y(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, z) = (T::one(), T::zero());
        Self::new(
            c,  z, s, z,
            z,  o, z, z,
            -s, z, c, z,
            z,  z, z, o,
        )
    }

    /// Rotation around the Z axis by `angle` radians
    #[rustfmt::skip]
    pub fn euler_rotation_z(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, z) = (T::one(), T::zero());
        Self::new(
            c, -s, z, z,
            s, c,  z, z,
            z, z,  o, z,
            z, z,  z, o,
        )
    }

    /// Perspective projection from a vertical field of view.
    ///
    /// `fov` is in degrees, `aspect` is width / height.
    pub fn perspective_fov(fov: T, aspect: T, near: T, far: T) -> Self {
        let two = T::one() + T::one();
        let t = (fov.deg_to_rad() / two).tan();
        Self::perspective(two * t * near * aspect, two * t * near, near, far)
    }

    /// Symmetric perspective projection with the given near plane size
    pub fn perspective(width: T, height: T, near: T, far: T) -> Self {
        let two = T::one() + T::one();
        let (hw, hh) = (width / two, height / two);
        Self::perspective_off_center(-hw, hw, -hh, hh, near, far)
    }

    /// OpenGL style frustum projection
    #[rustfmt::skip]
    pub fn perspective_off_center(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let (o, z) = (T::one(), T::zero());
        let two = o + o;
        let (l, r, b, t, n, f) = (left, right, bottom, top, near, far);
        let (w, h) = (r - l, t - b);
        Self::new(
            two * n / w, z,           (r + l) / w,        z,
            z,           two * n / h, (t + b) / h,        z,
            z,           z,           -(f + n) / (f - n), -two * f * n / (f - n),
            z,           z,           -o,                 z,
        )
    }

    /// Symmetric orthographic projection
    pub fn ortho(width: T, height: T, near: T, far: T) -> Self {
        let two = T::one() + T::one();
        let (hw, hh) = (width / two, height / two);
        Self::ortho_off_center(-hw, hw, -hh, hh, near, far)
    }

    /// OpenGL style orthographic projection
    #[rustfmt::skip]
    pub fn ortho_off_center(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let (o, z) = (T::one(), T::zero());
        let two = o + o;
        let (l, r, b, t, n, f) = (left, right, bottom, top, near, far);
        let (w, h) = (r - l, t - b);
        Self::new(
            two / w, z,       z,            -(r + l) / w,
            z,       two / h, z,            -(t + b) / h,
            z,       z,       -two / (f - n), -(f + n) / (f - n),
            z,       z,       z,            o,
        )
    }

    /// Inverse via the adjugate.
    ///
    /// Returns the zero matrix when the determinant is exactly zero; nearly
    /// singular matrices are inverted as-is.
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if det == T::zero() {
            log::trace!("Mat4::inverse of a singular matrix, returning zero");
            return Self::zero();
        }
        let d = T::one() / det;

        let m = |r: usize, c: usize| self[(r, c)];
        let mut out = Self::zero();
        out[(0, 0)] = d * (m(1, 1) * (m(2, 2) * m(3, 3) - m(2, 3) * m(3, 2))
            + m(1, 2) * (m(2, 3) * m(3, 1) - m(2, 1) * m(3, 3))
            + m(1, 3) * (m(2, 1) * m(3, 2) - m(2, 2) * m(3, 1)));
        out[(0, 1)] = d * (m(2, 1) * (m(0, 2) * m(3, 3) - m(0, 3) * m(3, 2))
            + m(2, 2) * (m(0, 3) * m(3, 1) - m(0, 1) * m(3, 3))
            + m(2, 3) * (m(0, 1) * m(3, 2) - m(0, 2) * m(3, 1)));
        out[(0, 2)] = d * (m(3, 1) * (m(0, 2) * m(1, 3) - m(0, 3) * m(1, 2))
            + m(3, 2) * (m(0, 3) * m(1, 1) - m(0, 1) * m(1, 3))
            + m(3, 3) * (m(0, 1) * m(1, 2) - m(0, 2) * m(1, 1)));
        out[(0, 3)] = d * (m(0, 1) * (m(1, 3) * m(2, 2) - m(1, 2) * m(2, 3))
            + m(0, 2) * (m(1, 1) * m(2, 3) - m(1, 3) * m(2, 1))
            + m(0, 3) * (m(1, 2) * m(2, 1) - m(1, 1) * m(2, 2)));
        out[(1, 0)] = d * (m(1, 2) * (m(2, 0) * m(3, 3) - m(2, 3) * m(3, 0))
            + m(1, 3) * (m(2, 2) * m(3, 0) - m(2, 0) * m(3, 2))
            + m(1, 0) * (m(2, 3) * m(3, 2) - m(2, 2) * m(3, 3)));
        out[(1, 1)] = d * (m(2, 2) * (m(0, 0) * m(3, 3) - m(0, 3) * m(3, 0))
            + m(2, 3) * (m(0, 2) * m(3, 0) - m(0, 0) * m(3, 2))
            + m(2, 0) * (m(0, 3) * m(3, 2) - m(0, 2) * m(3, 3)));
        out[(1, 2)] = d * (m(3, 2) * (m(0, 0) * m(1, 3) - m(0, 3) * m(1, 0))
            + m(3, 3) * (m(0, 2) * m(1, 0) - m(0, 0) * m(1, 2))
            + m(3, 0) * (m(0, 3) * m(1, 2) - m(0, 2) * m(1, 3)));
        out[(1, 3)] = d * (m(0, 2) * (m(1, 3) * m(2, 0) - m(1, 0) * m(2, 3))
            + m(0, 3) * (m(1, 0) * m(2, 2) - m(1, 2) * m(2, 0))
            + m(0, 0) * (m(1, 2) * m(2, 3) - m(1, 3) * m(2, 2)));
        out[(2, 0)] = d * (m(1, 3) * (m(2, 0) * m(3, 1) - m(2, 1) * m(3, 0))
            + m(1, 0) * (m(2, 1) * m(3, 3) - m(2, 3) * m(3, 1))
            + m(1, 1) * (m(2, 3) * m(3, 0) - m(2, 0) * m(3, 3)));
        out[(2, 1)] = d * (m(2, 3) * (m(0, 0) * m(3, 1) - m(0, 1) * m(3, 0))
            + m(2, 0) * (m(0, 1) * m(3, 3) - m(0, 3) * m(3, 1))
            + m(2, 1) * (m(0, 3) * m(3, 0) - m(0, 0) * m(3, 3)));
        out[(2, 2)] = d * (m(3, 3) * (m(0, 0) * m(1, 1) - m(0, 1) * m(1, 0))
            + m(3, 0) * (m(0, 1) * m(1, 3) - m(0, 3) * m(1, 1))
            + m(3, 1) * (m(0, 3) * m(1, 0) - m(0, 0) * m(1, 3)));
        out[(2, 3)] = d * (m(0, 3) * (m(1, 1) * m(2, 0) - m(1, 0) * m(2, 1))
            + m(0, 0) * (m(1, 3) * m(2, 1) - m(1, 1) * m(2, 3))
            + m(0, 1) * (m(1, 0) * m(2, 3) - m(1, 3) * m(2, 0)));
        out[(3, 0)] = d * (m(1, 0) * (m(2, 2) * m(3, 1) - m(2, 1) * m(3, 2))
            + m(1, 1) * (m(2, 0) * m(3, 2) - m(2, 2) * m(3, 0))
            + m(1, 2) * (m(2, 1) * m(3, 0) - m(2, 0) * m(3, 1)));
        out[(3, 1)] = d * (m(2, 0) * (m(0, 2) * m(3, 1) - m(0, 1) * m(3, 2))
            + m(2, 1) * (m(0, 0) * m(3, 2) - m(0, 2) * m(3, 0))
            + m(2, 2) * (m(0, 1) * m(3, 0) - m(0, 0) * m(3, 1)));
        out[(3, 2)] = d * (m(3, 0) * (m(0, 2) * m(1, 1) - m(0, 1) * m(1, 2))
            + m(3, 1) * (m(0, 0) * m(1, 2) - m(0, 2) * m(1, 0))
            + m(3, 2) * (m(0, 1) * m(1, 0) - m(0, 0) * m(1, 1)));
        out[(3, 3)] = d * (m(0, 0) * (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1))
            + m(0, 1) * (m(1, 2) * m(2, 0) - m(1, 0) * m(2, 2))
            + m(0, 2) * (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0)));
        out
    }
}

impl<T> std::ops::Index<(usize, usize)> for Mat4<T> {
    type Output = T;
    #[inline]
    fn index(&self, (row, column): (usize, usize)) -> &T {
        &self.m[Self::index(row, column)]
    }
}

impl<T> std::ops::IndexMut<(usize, usize)> for Mat4<T> {
    #[inline]
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        &mut self.m[Self::index(row, column)]
    }
}

/// Embed a 3x3 matrix in the upper-left block, `(3, 3) = 1`
impl<T: Scalar> From<Mat3<T>> for Mat4<T> {
    fn from(other: Mat3<T>) -> Self {
        let mut out = Self::identity();
        for row in 0..3 {
            for column in 0..3 {
                out[(row, column)] = other[(row, column)];
            }
        }
        out
    }
}

impl<T: Scalar> std::ops::Mul for Mat4<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let mut out = Self::zero();
        for row in 0..4 {
            for column in 0..4 {
                let mut sum = self[(row, 0)] * other[(0, column)];
                for k in 1..4 {
                    sum = sum + self[(row, k)] * other[(k, column)];
                }
                out[(row, column)] = sum;
            }
        }
        out
    }
}

impl<T: Scalar> std::ops::MulAssign for Mat4<T> {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl<T: Scalar> std::ops::Mul<Vec4<T>> for Mat4<T> {
    type Output = Vec4<T>;

    fn mul(self, v: Vec4<T>) -> Vec4<T> {
        let m = |r: usize, c: usize| self[(r, c)];
        Vec4::new(
            v.x * m(0, 0) + v.y * m(0, 1) + v.z * m(0, 2) + v.w * m(0, 3),
            v.x * m(1, 0) + v.y * m(1, 1) + v.z * m(1, 2) + v.w * m(1, 3),
            v.x * m(2, 0) + v.y * m(2, 1) + v.z * m(2, 2) + v.w * m(2, 3),
            v.x * m(3, 0) + v.y * m(3, 1) + v.z * m(3, 2) + v.w * m(3, 3),
        )
    }
}

#[cfg(test)]
#[rustfmt::skip]
mod tests {
    use super::*;
    use crate::vec4::Vec4f;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec4f, b: Vec4f) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z) && approx_eq(a.w, b.w)
    }

    fn mat_approx_eq(a: Mat4f, b: Mat4f) -> bool {
        a.m.iter().zip(b.m.iter()).all(|(x, y)| approx_eq(*x, *y))
    }

    fn sample() -> Mat4f {
        Mat4::new(
            1.0, 2.0, 3.0, 4.0,
            5.0, 6.0, 7.0, 8.0,
            9.0, 1.0, 2.0, 3.0,
            4.0, 5.0, 6.0, 7.0,
        )
    }

    #[test]
    fn test_storage_is_column_major() {
        let m = sample();
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m.m[Mat4f::index(0, 1)], 2.0);
        assert_eq!(m.m[4], 2.0);
        assert_eq!(&m.as_slice()[0..4], &[1.0, 5.0, 9.0, 4.0]);

        let t = Mat4f::translation(Vec3::new(7.0, 8.0, 9.0));
        assert_eq!(&t.m[12..15], &[7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_from_cols_array() {
        let m = Mat4::from_cols_array([
            1, 5, 9, 4,
            2, 6, 1, 5,
            3, 7, 2, 6,
            4, 8, 3, 7,
        ]);
        assert_eq!(m, Mat4::new(
            1, 2, 3, 4,
            5, 6, 7, 8,
            9, 1, 2, 3,
            4, 5, 6, 7,
        ));
    }

    #[test]
    fn test_mul_vec4_permutation() {
        let m = Mat4f::new(
            0.0, 0.0, 0.0, 1.0,
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
        );
        assert_eq!(m * Vec4::new(1.0, 2.0, 3.0, 4.0), Vec4::new(4.0, 1.0, 2.0, 3.0));
    }

    #[test]
    fn test_identity() {
        let v = Vec4f::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Mat4::identity() * v, v);
        assert_eq!(sample() * Mat4::identity(), sample());
        assert_eq!(Mat4::identity() * sample(), sample());
    }

    #[test]
    fn test_mul_known_product() {
        let m2 = Mat4f::new(
            3.0, 1.0, 4.0, 2.0,
            9.0, 8.0, 6.0, 7.0,
            1.0, 3.0, 5.0, 7.0,
            2.0, 4.0, 6.0, 8.0,
        );
        let expected = Mat4f::new(
            32.0, 42.0, 55.0, 69.0,
            92.0, 106.0, 139.0, 165.0,
            44.0, 35.0, 70.0, 63.0,
            77.0, 90.0, 118.0, 141.0,
        );
        assert_eq!(sample() * m2, expected);

        let mut m = sample();
        m *= m2;
        assert_eq!(m, expected);
    }

    #[test]
    fn test_determinant() {
        let m = Mat4f::new(
            1.0, 2.0, 3.0, 4.0,
            5.0, 6.0, 7.0, 8.0,
            1.0, 2.0, 0.0, 7.0,
            9.0, 1.0, 3.0, 1.0,
        );
        assert_eq!(m.determinant(), 312.0);
        assert_eq!(Mat4f::identity().determinant(), 1.0);
    }

    #[test]
    fn test_determinant_integer() {
        let m = Mat4::new(
            1, 2, 3, 4,
            5, 6, 7, 8,
            1, 2, 0, 7,
            9, 1, 3, 1,
        );
        assert_eq!(m.determinant(), 312);
    }

    #[test]
    fn test_transposed() {
        let expected = Mat4f::new(
            1.0, 5.0, 9.0, 4.0,
            2.0, 6.0, 1.0, 5.0,
            3.0, 7.0, 2.0, 6.0,
            4.0, 8.0, 3.0, 7.0,
        );
        assert_eq!(sample().transposed(), expected);
        assert_eq!(sample().transposed().transposed(), sample());
    }

    #[test]
    fn test_translation() {
        let m = Mat4f::translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m * Vec4::new(1.0, 2.0, 3.0, 1.0), Vec4::new(2.0, 4.0, 6.0, 1.0));
        // w scales the translation
        assert_eq!(m * Vec4::new(3.0, 1.0, 3.0, 2.0), Vec4::new(5.0, 5.0, 9.0, 2.0));
        // Directions are unaffected
        assert_eq!(m * Vec4::new(3.0, 1.0, 3.0, 0.0), Vec4::new(3.0, 1.0, 3.0, 0.0));
    }

    #[test]
    fn test_scaling() {
        let m = Mat4f::scaling(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m * Vec4::new(3.0, 1.0, 3.0, 2.0), Vec4::new(3.0, 2.0, 9.0, 2.0));
    }

    #[test]
    fn test_inverse_known() {
        let m = Mat4f::new(
            0.0, 0.0, 0.0, 1.0,
            2.0, 0.0, 1.0, 0.0,
            0.0, 1.0, 1.0, 0.0,
            1.0, 0.0, 0.0, 3.0,
        );
        let expected = Mat4f::new(
            -3.0, 0.0, 0.0, 1.0,
            -6.0, -1.0, 1.0, 2.0,
            6.0, 1.0, 0.0, -2.0,
            1.0, 0.0, 0.0, 0.0,
        );
        assert_eq!(m.inverse(), expected);
        assert_eq!(m * m.inverse(), Mat4::identity());
    }

    #[test]
    fn test_inverse_of_rigid_transform() {
        let m = Mat4f::translation(Vec3::new(1.0, -2.0, 5.0)) * Mat4::euler_rotation_y(0.7);
        let product = m * m.inverse();
        assert!(mat_approx_eq(product, Mat4::identity()), "got {:?}", product);
    }

    #[test]
    fn test_inverse_singular_is_zero() {
        // Rows 0 and 2 are equal
        let m = Mat4f::new(
            1.0, 2.0, 3.0, 4.0,
            5.0, 6.0, 7.0, 8.0,
            1.0, 2.0, 3.0, 4.0,
            9.0, 1.0, 3.0, 1.0,
        );
        assert_eq!(m.determinant(), 0.0);
        assert_eq!(m.inverse(), Mat4::zero());
    }

    #[test]
    fn test_translate_matches_product() {
        let v = Vec3::new(-1.5, 2.0, 0.25);
        assert_eq!(sample().translate(v), sample() * Mat4::translation(v));
        assert_eq!(Mat4f::identity().translate(v), Mat4::translation(v));
    }

    #[test]
    fn test_translate_composes() {
        let m = Mat4f::identity()
            .translate(Vec3::new(1.0, 0.0, 0.0))
            .translate(Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(m, Mat4::translation(Vec3::new(1.0, 2.0, 0.0)));
    }

    #[test]
    fn test_scale_matches_product() {
        let v = Vec3::new(2.0, -0.5, 3.0);
        assert_eq!(sample().scale(v), sample() * Mat4::scaling(v));
        assert_eq!(Mat4f::identity().scale(v), Mat4::scaling(v));
    }

    #[test]
    fn test_euler_rotation_x() {
        let m = Mat4f::euler_rotation_x(FRAC_PI_2);
        let result = m * Vec4::new(0.0, 1.0, 0.0, 0.0);
        assert!(vec_approx_eq(result, Vec4::new(0.0, 0.0, 1.0, 0.0)),
            "Y should become Z, got {:?}", result);
    }

    #[test]
    fn test_euler_rotation_y() {
        let m = Mat4f::euler_rotation_y(FRAC_PI_2);
        let result = m * Vec4::new(0.0, 0.0, 1.0, 0.0);
        assert!(vec_approx_eq(result, Vec4::new(1.0, 0.0, 0.0, 0.0)),
            "Z should become X, got {:?}", result);
    }

    #[test]
    fn test_euler_rotation_z() {
        let m = Mat4f::euler_rotation_z(FRAC_PI_2);
        let result = m * Vec4::new(1.0, 0.0, 0.0, 0.0);
        assert!(vec_approx_eq(result, Vec4::new(0.0, 1.0, 0.0, 0.0)),
            "X should become Y, got {:?}", result);

        // Points keep w
        let result = m * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert_eq!(result.w, 1.0);
    }

    #[test]
    fn test_euler_composition() {
        // Two 45° rotations equal one 90° rotation
        let r45 = Mat4f::euler_rotation_z(FRAC_PI_2 / 2.0);
        let r90 = Mat4f::euler_rotation_z(FRAC_PI_2);
        let v = Vec4::new(1.0, 0.0, 0.0, 0.0);
        let composed = (r45 * r45) * v;
        let direct = r90 * v;
        assert!(vec_approx_eq(composed, direct),
            "Composed: {:?}, Direct: {:?}", composed, direct);
    }

    #[test]
    fn test_perspective_off_center() {
        let m = Mat4f::perspective_off_center(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0);
        assert_eq!(m[(3, 2)], -1.0);
        assert_eq!(m[(3, 3)], 0.0);

        // Near plane maps to z = -1, far plane to z = 1
        let near = m.transform_point(Vec3::new(0.0, 0.0, -1.0));
        let far = m.transform_point(Vec3::new(0.0, 0.0, -10.0));
        assert!(approx_eq(near.z, -1.0), "got {:?}", near);
        assert!(approx_eq(far.z, 1.0), "got {:?}", far);

        // Corner of the near plane maps to the corner of clip space
        let corner = m.transform_point(Vec3::new(1.0, 1.0, -1.0));
        assert!(approx_eq(corner.x, 1.0) && approx_eq(corner.y, 1.0), "got {:?}", corner);
    }

    #[test]
    fn test_perspective_off_center_asymmetric() {
        let m = Mat4f::perspective_off_center(0.0, 2.0, -1.0, 3.0, 1.0, 3.0);
        assert_eq!(m, Mat4::new(
            1.0, 0.0, 1.0, 0.0,
            0.0, 0.5, 0.5, 0.0,
            0.0, 0.0, -2.0, -3.0,
            0.0, 0.0, -1.0, 0.0,
        ));
    }

    #[test]
    fn test_perspective_is_centered() {
        let m = Mat4f::perspective(4.0, 2.0, 1.0, 10.0);
        assert_eq!(m, Mat4::perspective_off_center(-2.0, 2.0, -1.0, 1.0, 1.0, 10.0));
        assert_eq!(m[(0, 2)], 0.0);
        assert_eq!(m[(1, 2)], 0.0);
    }

    #[test]
    fn test_perspective_fov() {
        // 90 degrees: the near plane is twice as wide as it is far away
        let m = Mat4f::perspective_fov(90.0, 2.0, 1.0, 100.0);
        assert!(approx_eq(m[(0, 0)], 0.5), "got {:?}", m);
        assert!(approx_eq(m[(1, 1)], 1.0), "got {:?}", m);
        assert_eq!(m[(3, 2)], -1.0);
    }

    #[test]
    fn test_ortho() {
        let m = Mat4f::ortho(2.0, 2.0, 0.0, 10.0);
        assert_eq!(m, Mat4::ortho_off_center(-1.0, 1.0, -1.0, 1.0, 0.0, 10.0));

        let p = m.transform_point(Vec3::new(0.5, -0.5, -5.0));
        assert!(approx_eq(p.x, 0.5) && approx_eq(p.y, -0.5) && approx_eq(p.z, 0.0), "got {:?}", p);
    }

    #[test]
    fn test_ortho_off_center() {
        let m = Mat4f::ortho_off_center(0.0, 4.0, 0.0, 2.0, 1.0, 5.0);
        assert_eq!(m, Mat4::new(
            0.5, 0.0, 0.0, -1.0,
            0.0, 1.0, 0.0, -1.0,
            0.0, 0.0, -0.5, -1.5,
            0.0, 0.0, 0.0, 1.0,
        ));
    }

    #[test]
    fn test_transform_point_divides_by_w() {
        let m = Mat4f::translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.transform_point(Vec3::new(1.0, 1.0, 1.0)), Vec3::new(2.0, 3.0, 4.0));

        let mut halve = Mat4f::identity();
        halve[(3, 3)] = 2.0;
        assert_eq!(halve.transform_point(Vec3::new(2.0, 4.0, 6.0)), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_from_mat3() {
        let m3 = Mat3::new(
            1.0, 2.0, 3.0,
            4.0, 5.0, 6.0,
            7.0, 8.0, 9.0,
        );
        let m4 = Mat4f::from(m3);
        assert_eq!(m4, Mat4::new(
            1.0, 2.0, 3.0, 0.0,
            4.0, 5.0, 6.0, 0.0,
            7.0, 8.0, 9.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ));
    }

    #[test]
    fn test_pod_upload() {
        let m = Mat4f::translation(Vec3::new(1.0, 2.0, 3.0));
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&m));
        assert_eq!(floats.len(), 16);
        assert_eq!(floats[12], 1.0);
        assert_eq!(bytemuck::bytes_of(&m).len(), 64);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Mat4f::default(), Mat4::zero());
    }
}
