//! Component-wise boilerplate shared by Vec2, Vec3 and Vec4

/// Operators, conversions and the shared geometry of a vector type.
///
/// The struct must be `#[repr(C)]` with one field of type `T` per listed
/// component.
macro_rules! impl_vector {
    ($Vec:ident, $n:literal { $( $field:ident ),+ }) => {
        impl<T: Scalar> $Vec<T> {
            /// All components zero
            #[inline]
            pub fn zero() -> Self {
                Self { $( $field: T::zero() ),+ }
            }

            /// Convert to another component type (through `f64`, narrowed
            /// with `as` semantics)
            #[inline]
            pub fn cast<U: Scalar>(self) -> $Vec<U> {
                $Vec { $( $field: U::narrow_from(self.$field.widen()) ),+ }
            }

            /// Component-wise sum with a vector of another component type,
            /// computed in `f64` and narrowed to `T`
            #[inline]
            pub fn add_mixed<U: Scalar>(self, other: $Vec<U>) -> Self {
                Self { $( $field: T::narrow_from(self.$field.widen() + other.$field.widen()) ),+ }
            }

            /// Component-wise difference with a vector of another component
            /// type, computed in `f64` and narrowed to `T`
            #[inline]
            pub fn sub_mixed<U: Scalar>(self, other: $Vec<U>) -> Self {
                Self { $( $field: T::narrow_from(self.$field.widen() - other.$field.widen()) ),+ }
            }

            /// Scale by a scalar of another type, computed in `f64` and
            /// narrowed to `T`
            #[inline]
            pub fn scale_mixed<U: Scalar>(self, factor: U) -> Self {
                let factor = factor.widen();
                Self { $( $field: T::narrow_from(self.$field.widen() * factor) ),+ }
            }

            /// Dot product
            #[inline]
            pub fn dot(self, other: Self) -> T {
                T::zero() $( + self.$field * other.$field )+
            }

            /// Squared length. Cheaper than [`Self::length`] and enough for
            /// comparing lengths.
            #[inline]
            pub fn length_squared(self) -> T {
                self.dot(self)
            }

            /// Set `self` to the linear interpolation `a + (b - a) * d` and
            /// return the result
            #[inline]
            pub fn interpolate(&mut self, a: Self, b: Self, d: T) -> Self {
                *self = a + (b - a) * d;
                *self
            }
        }

        impl<T: Real> $Vec<T> {
            /// Length (magnitude)
            #[inline]
            pub fn length(self) -> T {
                self.length_squared().sqrt()
            }

            /// Scale to unit length in place.
            ///
            /// A zero vector divides by zero and ends up NaN.
            #[inline]
            pub fn normalize(&mut self) -> &mut Self {
                *self /= self.length();
                self
            }

            /// Unit length copy, see [`Self::normalize`]
            #[inline]
            pub fn normalized(mut self) -> Self {
                self.normalize();
                self
            }
        }

        impl<T: Scalar> std::ops::Add for $Vec<T> {
            type Output = Self;
            #[inline]
            fn add(self, other: Self) -> Self {
                Self { $( $field: self.$field + other.$field ),+ }
            }
        }

        impl<T: Scalar> std::ops::AddAssign for $Vec<T> {
            #[inline]
            fn add_assign(&mut self, other: Self) {
                $( self.$field = self.$field + other.$field; )+
            }
        }

        impl<T: Scalar> std::ops::Sub for $Vec<T> {
            type Output = Self;
            #[inline]
            fn sub(self, other: Self) -> Self {
                Self { $( $field: self.$field - other.$field ),+ }
            }
        }

        impl<T: Scalar> std::ops::SubAssign for $Vec<T> {
            #[inline]
            fn sub_assign(&mut self, other: Self) {
                $( self.$field = self.$field - other.$field; )+
            }
        }

        impl<T: Scalar> std::ops::Mul<T> for $Vec<T> {
            type Output = Self;
            #[inline]
            fn mul(self, scalar: T) -> Self {
                Self { $( $field: self.$field * scalar ),+ }
            }
        }

        impl<T: Scalar> std::ops::MulAssign<T> for $Vec<T> {
            #[inline]
            fn mul_assign(&mut self, scalar: T) {
                $( self.$field = self.$field * scalar; )+
            }
        }

        impl<T: Scalar> std::ops::Div<T> for $Vec<T> {
            type Output = Self;
            #[inline]
            fn div(self, scalar: T) -> Self {
                Self { $( $field: self.$field / scalar ),+ }
            }
        }

        impl<T: Scalar> std::ops::DivAssign<T> for $Vec<T> {
            #[inline]
            fn div_assign(&mut self, scalar: T) {
                $( self.$field = self.$field / scalar; )+
            }
        }

        impl<T: Scalar + std::ops::Neg<Output = T>> std::ops::Neg for $Vec<T> {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $( $field: -self.$field ),+ }
            }
        }

        impl<T: Scalar> From<[T; $n]> for $Vec<T> {
            #[inline]
            fn from(components: [T; $n]) -> Self {
                let [$( $field ),+] = components;
                Self { $( $field ),+ }
            }
        }

        impl<T: Scalar> From<$Vec<T>> for [T; $n] {
            #[inline]
            fn from(v: $Vec<T>) -> Self {
                [$( v.$field ),+]
            }
        }

        impl<T: Scalar> std::fmt::Display for $Vec<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let parts = [$( self.$field.to_string() ),+];
                write!(f, "{}", parts.join($crate::text::DEFAULT_SEPARATOR))
            }
        }

        // SAFETY: repr(C) struct made only of `T` fields, so no padding.
        unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for $Vec<T> {}
        unsafe impl<T: bytemuck::Pod> bytemuck::Pod for $Vec<T> {}
    };
}

/// Component-wise (Hadamard) product as `*` and `component_mul`
macro_rules! impl_component_mul {
    ($Vec:ident { $( $field:ident ),+ }) => {
        impl<T: Scalar> $Vec<T> {
            /// Component-wise multiplication (Hadamard product)
            #[inline]
            pub fn component_mul(self, other: Self) -> Self {
                Self { $( $field: self.$field * other.$field ),+ }
            }
        }

        impl<T: Scalar> std::ops::Mul for $Vec<T> {
            type Output = Self;
            #[inline]
            fn mul(self, other: Self) -> Self {
                self.component_mul(other)
            }
        }
    };
}

/// `scalar * vector` for concrete scalar types
macro_rules! impl_scalar_lhs_mul {
    ($Vec:ident; $( $num:ty )+) => {
        $(
            impl std::ops::Mul<$Vec<$num>> for $num {
                type Output = $Vec<$num>;
                #[inline]
                fn mul(self, v: $Vec<$num>) -> $Vec<$num> {
                    v * self
                }
            }
        )+
    };
}
