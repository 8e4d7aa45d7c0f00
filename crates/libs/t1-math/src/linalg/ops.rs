//! Arithmetic operators of [`Vector`].
//!
//! Every operator is written once over `N` against element-wise access and
//! therefore applies identically to all dimensions. Vector-vector
//! multiplication and division are element-wise (Hadamard), not dot or
//! cross products. Arithmetic follows the element type: integer division
//! truncates, floating point division by zero yields infinities or NaN.

use crate::linalg::Vector;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

/// Implements `vector op vector`, `vector op scalar` and their assigning
/// forms for the given operators.
macro_rules! impl_elementwise_ops {
    ($($op:ident, $op_assign:ident);+ $(;)?) => {
        paste::paste! {
            $(
                impl<T, const N: usize> $op for Vector<T, N>
                where
                    T: Copy + $op<Output = T>,
                {
                    type Output = Self;

                    #[inline]
                    fn [<$op:lower>](self, rhs: Self) -> Self::Output {
                        self.zip_map(rhs, |a, b| a.[<$op:lower>](b))
                    }
                }

                impl<T, const N: usize> $op<T> for Vector<T, N>
                where
                    T: Copy + $op<Output = T>,
                {
                    type Output = Self;

                    #[inline]
                    fn [<$op:lower>](self, rhs: T) -> Self::Output { self.map(|a| a.[<$op:lower>](rhs)) }
                }

                impl<T, const N: usize> $op_assign for Vector<T, N>
                where
                    T: Copy + $op_assign,
                {
                    #[inline]
                    fn [<$op_assign:snake>](&mut self, rhs: Self) {
                        for (a, b) in self.iter_mut().zip(rhs) {
                            a.[<$op_assign:snake>](b);
                        }
                    }
                }

                impl<T, const N: usize> $op_assign<T> for Vector<T, N>
                where
                    T: Copy + $op_assign,
                {
                    #[inline]
                    fn [<$op_assign:snake>](&mut self, rhs: T) {
                        for a in self.iter_mut() {
                            a.[<$op_assign:snake>](rhs);
                        }
                    }
                }
            )+
        }
    };
}

impl_elementwise_ops!(
    Add, AddAssign;
    Sub, SubAssign;
    Mul, MulAssign;
    Div, DivAssign;
    Rem, RemAssign;
);

/// Implements the scalar-on-the-left operators for primitive element types.
///
/// `s + v` and `s * v` broadcast `s`; `s / v` divides `s` by every element.
/// There is deliberately no `s - v`.
macro_rules! impl_scalar_lhs_ops {
    ($($t:ty),+ $(,)?) => {
        $(
            impl<const N: usize> Add<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn add(self, rhs: Vector<$t, N>) -> Self::Output { rhs.map(|e| e + self) }
            }

            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn mul(self, rhs: Vector<$t, N>) -> Self::Output { rhs.map(|e| e * self) }
            }

            impl<const N: usize> Div<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn div(self, rhs: Vector<$t, N>) -> Self::Output { rhs.map(|e| self / e) }
            }
        )+
    };
}

impl_scalar_lhs_ops!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output { self.map(|e| -e) }
}

impl<T: Copy + MulAssign, const N: usize> Vector<T, N> {
    /// Scales the vector in place and returns it for chaining.
    ///
    /// ```
    /// # use t1_math::vec3;
    /// let mut v = vec3(1.0, 2.0, 3.0);
    /// v.scale(2.0).scale(0.5);
    /// assert_eq!(v, vec3(1.0, 2.0, 3.0));
    /// ```
    #[inline]
    pub fn scale(&mut self, scalar: T) -> &mut Self {
        *self *= scalar;
        self
    }
}

impl<T, const N: usize> std::iter::Sum for Vector<T, N>
where
    T: Copy + num_traits::Zero + Add<Output = T>,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self { iter.fold(Self::zeros(), |acc, v| acc + v) }
}
