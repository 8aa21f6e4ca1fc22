//! 3x3 Matrix

use serde::{Deserialize, Serialize};

use crate::scalar::{Real, Scalar};
use crate::vec3::Vec3;

/// 3x3 matrix.
///
/// Element `(row, column)` is stored at `m[row + column * 3]`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Mat3<T> {
    pub m: [T; 9],
}

pub type Mat3f = Mat3<f32>;
pub type Mat3d = Mat3<f64>;

// SAFETY: repr(C) wrapper around `[T; 9]`, no padding.
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Mat3<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Mat3<T> {}

impl<T> Mat3<T> {
    /// Flat index of element `(row, column)`
    #[inline]
    pub const fn index(row: usize, column: usize) -> usize {
        row + column * 3
    }
}

impl<T: Scalar> Mat3<T> {
    /// Create a matrix from its elements, row by row
    #[rustfmt::skip]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        m00: T, m01: T, m02: T,
        m10: T, m11: T, m12: T,
        m20: T, m21: T, m22: T,
    ) -> Self {
        Self {
            m: [
                m00, m10, m20,
                m01, m11, m21,
                m02, m12, m22,
            ],
        }
    }

    /// All elements zero
    pub fn zero() -> Self {
        Self { m: [T::zero(); 9] }
    }

    /// Identity matrix
    #[rustfmt::skip]
    pub fn identity() -> Self {
        let (o, z) = (T::one(), T::zero());
        Self::new(
            o, z, z,
            z, o, z,
            z, z, o,
        )
    }

    /// Matrix with rows and columns swapped
    pub fn transposed(&self) -> Self {
        let mut out = *self;
        for row in 0..3 {
            for column in 0..3 {
                out[(row, column)] = self[(column, row)];
            }
        }
        out
    }

    /// Determinant by cofactor expansion along row 0
    pub fn determinant(&self) -> T {
        let m = |r: usize, c: usize| self[(r, c)];
        m(0, 0) * (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1))
            - m(0, 1) * (m(1, 0) * m(2, 2) - m(1, 2) * m(2, 0))
            + m(0, 2) * (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0))
    }
}

impl<T: Real> Mat3<T> {
    /// Inverse via the adjugate.
    ///
    /// Returns the zero matrix when the determinant is exactly zero.
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if det == T::zero() {
            log::trace!("Mat3::inverse of a singular matrix, returning zero");
            return Self::zero();
        }
        let d = T::one() / det;

        let m = |r: usize, c: usize| self[(r, c)];
        let mut out = Self::zero();
        out[(0, 0)] = d * (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1));
        out[(0, 1)] = d * (m(0, 2) * m(2, 1) - m(0, 1) * m(2, 2));
        out[(0, 2)] = d * (m(0, 1) * m(1, 2) - m(0, 2) * m(1, 1));
        out[(1, 0)] = d * (m(1, 2) * m(2, 0) - m(1, 0) * m(2, 2));
        out[(1, 1)] = d * (m(0, 0) * m(2, 2) - m(0, 2) * m(2, 0));
        out[(1, 2)] = d * (m(0, 2) * m(1, 0) - m(0, 0) * m(1, 2));
        out[(2, 0)] = d * (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0));
        out[(2, 1)] = d * (m(0, 1) * m(2, 0) - m(0, 0) * m(2, 1));
        out[(2, 2)] = d * (m(0, 0) * m(1, 1) - m(0, 1) * m(1, 0));
        out
    }
}

impl<T> std::ops::Index<(usize, usize)> for Mat3<T> {
    type Output = T;
    #[inline]
    fn index(&self, (row, column): (usize, usize)) -> &T {
        &self.m[Self::index(row, column)]
    }
}

impl<T> std::ops::IndexMut<(usize, usize)> for Mat3<T> {
    #[inline]
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        &mut self.m[Self::index(row, column)]
    }
}

impl<T: Scalar> std::ops::Mul for Mat3<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let mut out = Self::zero();
        for row in 0..3 {
            for column in 0..3 {
                let mut sum = T::zero();
                for k in 0..3 {
                    sum = sum + self[(row, k)] * other[(k, column)];
                }
                out[(row, column)] = sum;
            }
        }
        out
    }
}

impl<T: Scalar> std::ops::Mul<Vec3<T>> for Mat3<T> {
    type Output = Vec3<T>;

    fn mul(self, v: Vec3<T>) -> Vec3<T> {
        let m = |r: usize, c: usize| self[(r, c)];
        Vec3::new(
            v.x * m(0, 0) + v.y * m(0, 1) + v.z * m(0, 2),
            v.x * m(1, 0) + v.y * m(1, 1) + v.z * m(1, 2),
            v.x * m(2, 0) + v.y * m(2, 1) + v.z * m(2, 2),
        )
    }
}
