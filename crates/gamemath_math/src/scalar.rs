//! Scalar traits and bit-twiddling helpers
//!
//! [`Scalar`] is the bound every vector and matrix component satisfies,
//! [`Real`] adds the floating point operations needed for lengths, angles
//! and projections. The free functions cover unit conversion, fast
//! float-to-int rounding and power-of-two arithmetic on `u32`.

use num_traits::{Float, FloatConst, Num};
use std::fmt;

/// Numeric component type of vectors and matrices.
///
/// Conversions between scalar types always go through `f64`:
/// [`Scalar::widen`] promotes, [`Scalar::narrow_from`] converts back with
/// Rust `as` semantics (truncation toward zero, saturation at the bounds of
/// integer types, NaN becomes 0).
pub trait Scalar:
    Copy + PartialEq + PartialOrd + fmt::Debug + fmt::Display + Num + 'static
{
    /// Promote to `f64`
    fn widen(self) -> f64;

    /// Narrow an `f64` to this type
    fn narrow_from(value: f64) -> Self;
}

macro_rules! impl_scalar {
    ( $( $num:ty )+ ) => {
        $(
            impl Scalar for $num {
                #[inline]
                fn widen(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn narrow_from(value: f64) -> Self {
                    value as $num
                }
            }
        )+
    };
}

impl_scalar! { u8 u16 u32 u64 usize }
impl_scalar! { i8 i16 i32 i64 isize }
impl_scalar! { f32 f64 }

/// Floating point scalar with angle conversions.
pub trait Real: Scalar + Float + FloatConst {
    /// Degrees to radians
    fn deg_to_rad(self) -> Self;

    /// Radians to degrees
    fn rad_to_deg(self) -> Self;
}

macro_rules! impl_real {
    ( $( $num:ident )+ ) => {
        $(
            impl Real for $num {
                #[inline]
                fn deg_to_rad(self) -> Self {
                    self * (std::$num::consts::PI / 180.0)
                }

                #[inline]
                fn rad_to_deg(self) -> Self {
                    self * (180.0 / std::$num::consts::PI)
                }
            }
        )+
    };
}

impl_real! { f32 f64 }

/// Convert an angle from degrees to radians
#[inline]
pub fn deg_to_rad<T: Real>(degrees: T) -> T {
    degrees.deg_to_rad()
}

/// Convert an angle from radians to degrees
#[inline]
pub fn rad_to_deg<T: Real>(radians: T) -> T {
    radians.rad_to_deg()
}

/// 1.5 * 2^52: adding it pushes the integer part into the low mantissa bits.
const DOUBLE_MAGIC: f64 = 6_755_399_441_055_744.0;

/// Fast float to int conversion, rounding half to even.
///
/// Only meaningful for inputs whose magnitude fits in 31 bits; anything
/// larger comes back wrapped.
#[inline]
pub fn ftoi(value: f32) -> i32 {
    (value as f64 + DOUBLE_MAGIC).to_bits() as i32
}

/// `true` for 1, 2, 4, ... and `false` for 0
#[inline]
pub fn is_power_of_two(n: u32) -> bool {
    n != 0 && n & (n - 1) == 0
}

/// Like [`is_power_of_two`] but also accepts 0
#[inline]
pub fn is_power_of_two_or_null(n: u32) -> bool {
    n & n.wrapping_sub(1) == 0
}

const DE_BRUIJN_POW2: [u32; 32] = [
    0, 1, 28, 2, 29, 14, 24, 3, 30, 22, 20, 15, 25, 17, 4, 8,
    31, 27, 13, 23, 21, 19, 16, 7, 26, 12, 18, 6, 11, 5, 10, 9,
];

const DE_BRUIJN_FLOOR: [u32; 32] = [
    0, 9, 1, 10, 13, 21, 2, 29, 11, 14, 16, 18, 22, 25, 3, 30,
    8, 12, 20, 28, 15, 17, 24, 7, 19, 27, 23, 6, 26, 5, 4, 31,
];

/// Base-2 logarithm of a power of two.
///
/// `n` must be a power of two. Other inputs are not detected and give a
/// meaningless result.
#[inline]
pub fn log2_from_power_of_two(n: u32) -> u32 {
    DE_BRUIJN_POW2[(n.wrapping_mul(0x077C_B531) >> 27) as usize]
}

/// Sets every bit below the highest set bit
#[inline]
fn smear_right(mut v: u32) -> u32 {
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    v
}

/// Smallest power of two that is `>= n`.
///
/// Returns 0 for 0 and for anything above 2^31.
#[inline]
pub fn next_power_of_two(n: u32) -> u32 {
    smear_right(n.wrapping_sub(1)).wrapping_add(1)
}

/// Floor of the base-2 logarithm. `log2(0)` is 0.
#[inline]
pub fn log2(n: u32) -> u32 {
    DE_BRUIJN_FLOOR[(smear_right(n).wrapping_mul(0x07C4_ACDD) >> 27) as usize]
}
