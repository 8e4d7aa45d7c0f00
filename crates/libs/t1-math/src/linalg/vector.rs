use crate::{
    error::VectorError,
    linalg::storage::{print_slice, FixedSized},
};
use num_traits::{Float, One, Zero};
use serde::{
    de::{self, SeqAccess, Visitor},
    ser::SerializeTuple,
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::{
    fmt::{Debug, Display, Formatter},
    marker::PhantomData,
    ops::{Add, Index, IndexMut, Mul, Neg, Sub},
};

/// A fixed-size vector of `N` elements of type `T`.
///
/// The vector is a plain value: it lives wherever it is declared, is copied
/// on assignment when `T: Copy`, and never allocates. It may represent a
/// point, a direction, a colour or a texture coordinate; the type itself
/// doesn't care.
///
/// Elements are accessed by position with `v[i]` (panicking outside
/// `[0, N)`) or, for `N` in 2..=4, through the named views (`x`, `r`, `s`,
/// ...) which all read and write the very same slots.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize>(pub(crate) FixedSized<T, N>);

/// Two-dimensional vector of any element type.
pub type Vector2<T> = Vector<T, 2>;
/// Three-dimensional vector of any element type.
pub type Vector3<T> = Vector<T, 3>;
/// Four-dimensional vector of any element type.
pub type Vector4<T> = Vector<T, 4>;

/// 2D single precision vector.
pub type Vec2 = Vector<f32, 2>;
/// 3D single precision vector.
pub type Vec3 = Vector<f32, 3>;
/// 4D single precision vector.
pub type Vec4 = Vector<f32, 4>;
/// 2D double precision vector.
pub type DVec2 = Vector<f64, 2>;
/// 3D double precision vector.
pub type DVec3 = Vector<f64, 3>;
/// 4D double precision vector.
pub type DVec4 = Vector<f64, 4>;
/// 2D integer vector.
pub type IVec2 = Vector<i32, 2>;
/// 3D integer vector.
pub type IVec3 = Vector<i32, 3>;
/// 4D integer vector.
pub type IVec4 = Vector<i32, 4>;

static_assertions::assert_eq_size!(Vec2, [f32; 2]);
static_assertions::assert_eq_size!(Vec3, [f32; 3]);
static_assertions::assert_eq_size!(DVec4, [f64; 4]);
static_assertions::assert_eq_size!(Vector<u8, 7>, [u8; 7]);

impl<T, const N: usize> Vector<T, N> {
    /// Number of elements.
    pub const DIM: usize = N;

    /// Creates a vector from an array holding every element.
    #[inline]
    pub const fn new(array: [T; N]) -> Self { Self(FixedSized::new(array)) }

    /// Creates a vector whose element `i` is `f(i)`.
    #[inline]
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self { Self::new(std::array::from_fn(f)) }

    /// Number of elements, always `N`.
    #[inline]
    pub const fn dim(&self) -> usize { N }

    /// Returns the element at `index`, or `None` outside `[0, N)`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> { self.0.as_slice().get(index) }

    /// Returns the element at `index` mutably, or `None` outside `[0, N)`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.as_mut_slice().get_mut(index)
    }

    /// Returns a slice of the elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] { self.0.as_slice() }

    /// Returns a mutable slice of the elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] { self.0.as_mut_slice() }

    /// Returns a reference to the underlying array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] { self.0.as_array() }

    /// Consumes the vector and returns its elements.
    #[inline]
    pub fn into_array(self) -> [T; N] { self.0.into_array() }

    /// Iterates over the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.0.as_slice().iter() }

    /// Iterates mutably over the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> { self.0.as_mut_slice().iter_mut() }

    /// Applies `f` to every element.
    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Vector<U, N> {
        Vector::new(self.into_array().map(f))
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Creates a vector with every element set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self { Self::new([value; N]) }

    /// Returns a copy of the element at `index`.
    pub fn try_get(&self, index: usize) -> Result<T, VectorError> {
        self.get(index)
            .copied()
            .ok_or(VectorError::IndexOutOfRange { dim: N, index })
    }

    /// Combines two vectors element by element.
    #[inline]
    pub fn zip_map<U, F>(self, rhs: Self, mut f: F) -> Vector<U, N>
    where
        F: FnMut(T, T) -> U,
    {
        let (lhs, rhs) = (self.0 .0, rhs.0 .0);
        Vector::from_fn(|i| f(lhs[i], rhs[i]))
    }
}

impl<T: Copy + Zero, const N: usize> Vector<T, N> {
    /// Creates a vector with all elements set to zero.
    #[inline]
    pub fn zeros() -> Self { Self::splat(T::zero()) }

    /// Creates a vector from an initialiser list of at most `N` values.
    ///
    /// Values fill the vector from index 0; slots past the end of the list
    /// are zero.
    ///
    /// # Panics
    ///
    /// Panics if `values` holds more than `N` elements. See
    /// [`Vector::try_from_slice`] for the checked version.
    #[track_caller]
    pub fn from_slice(values: &[T]) -> Self {
        match Self::try_from_slice(values) {
            Ok(v) => v,
            Err(err) => panic!("{}", err),
        }
    }

    /// Creates a vector from an initialiser list, reporting an over-long
    /// list instead of panicking.
    pub fn try_from_slice(values: &[T]) -> Result<Self, VectorError> {
        if values.len() > N {
            return Err(VectorError::TooManyElements {
                dim: N,
                got: values.len(),
            });
        }
        let mut v = Self::zeros();
        v.as_mut_slice()[..values.len()].copy_from_slice(values);
        Ok(v)
    }
}

impl<T: Copy + One, const N: usize> Vector<T, N> {
    /// Creates a vector with all elements set to one.
    #[inline]
    pub fn ones() -> Self { Self::splat(T::one()) }
}

impl<T, const N: usize> Vector<T, N>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    /// Dot product.
    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        self.iter()
            .zip(rhs.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Squared euclidean length.
    #[inline]
    pub fn length_squared(self) -> T { self.dot(self) }

    /// Sum of all elements.
    #[inline]
    pub fn sum(self) -> T { self.iter().fold(T::zero(), |acc, &e| acc + e) }
}

impl<T: Copy + PartialOrd, const N: usize> Vector<T, N> {
    /// Element-wise minimum.
    pub fn min(self, rhs: Self) -> Self { self.zip_map(rhs, |a, b| if b < a { b } else { a }) }

    /// Element-wise maximum.
    pub fn max(self, rhs: Self) -> Self { self.zip_map(rhs, |a, b| if b > a { b } else { a }) }
}

impl<T: Float, const N: usize> Vector<T, N> {
    /// Euclidean length.
    ///
    /// Accumulated with `hypot`, so the squares of large or tiny elements
    /// neither overflow nor flush to zero.
    #[inline]
    pub fn length(self) -> T { self.iter().fold(T::zero(), |acc, &e| acc.hypot(e)) }

    /// Returns the vector scaled to unit length.
    ///
    /// The zero vector yields NaN elements, as the division would.
    #[inline]
    pub fn normalize(self) -> Self { self / self.length() }

    /// Returns the vector scaled to unit length, or `None` if its length is
    /// zero or not finite.
    pub fn try_normalize(self) -> Option<Self> {
        let len = self.length();
        (len.is_finite() && len > T::zero()).then(|| self / len)
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(self, rhs: Self) -> T { (self - rhs).length() }

    /// Linear interpolation: `self` at `t == 0`, `rhs` at `t == 1`.
    #[inline]
    pub fn lerp(self, rhs: Self, t: T) -> Self { self + (rhs - self) * t }

    /// Returns true if every element is finite.
    pub fn is_finite(&self) -> bool { self.iter().all(|e| e.is_finite()) }

    /// Returns true if any element is NaN.
    pub fn is_nan(&self) -> bool { self.iter().any(|e| e.is_nan()) }
}

impl<T> Vector<T, 3>
where
    T: Copy + Mul<Output = T> + Sub<Output = T>,
{
    /// Cross product, right-handed.
    pub fn cross(self, rhs: Self) -> Self {
        let [ax, ay, az] = self.0 .0;
        let [bx, by, bz] = rhs.0 .0;
        Self::new([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }
}

impl<T: Copy + Neg<Output = T>> Vector<T, 2> {
    /// The vector rotated by 90 degrees counter-clockwise.
    pub fn perp(self) -> Self {
        let [x, y] = self.0 .0;
        Self::new([-y, x])
    }
}

impl<T: Copy + Zero, const N: usize> Default for Vector<T, N> {
    fn default() -> Self { Self::zeros() }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output { self.0.slot(index) }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output { self.0.slot_mut(index) }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(array: [T; N]) -> Self { Self::new(array) }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self { v.into_array() }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    fn as_ref(&self) -> &[T] { self.as_slice() }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    fn as_mut(&mut self) -> &mut [T] { self.as_mut_slice() }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter { self.into_array().into_iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Vector<T, N> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<T: Debug, const N: usize> Debug for Vector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("Vector({:?})", self.as_array()))
    }
}

impl<T: Display, const N: usize> Display for Vector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { print_slice(f, self.as_slice()) }
}

impl<T, const N: usize> approx::AbsDiffEq for Vector<T, N>
where
    T: approx::AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon { T::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> approx::RelativeEq for Vector<T, N>
where
    T: approx::RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon { T::default_max_relative() }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> approx::UlpsEq for Vector<T, N>
where
    T: approx::UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 { T::default_max_ulps() }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

/// Vectors serialise as a fixed-length tuple of their elements.
impl<T: Serialize, const N: usize> Serialize for Vector<T, N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(N)?;
        for elem in self.iter() {
            tuple.serialize_element(elem)?;
        }
        tuple.end()
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for Vector<T, N>
where
    T: Deserialize<'de> + Copy + Zero,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct VectorVisitor<T, const N: usize>(PhantomData<T>);

        impl<'de, T, const N: usize> Visitor<'de> for VectorVisitor<T, N>
        where
            T: Deserialize<'de> + Copy + Zero,
        {
            type Value = Vector<T, N>;

            fn expecting(&self, f: &mut Formatter) -> std::fmt::Result {
                write!(f, "a sequence of {} elements", N)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut v = Vector::zeros();
                for i in 0..N {
                    v[i] = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                }
                Ok(v)
            }
        }

        deserializer.deserialize_tuple(N, VectorVisitor::<T, N>(PhantomData))
    }
}

macro_rules! impl_glam_conversions {
    ($($glam:ty => [$t:ty; $n:literal]),* $(,)?) => {
        $(
            impl From<$glam> for Vector<$t, $n> {
                #[inline]
                fn from(v: $glam) -> Self { Self::new(v.to_array()) }
            }

            impl From<Vector<$t, $n>> for $glam {
                #[inline]
                fn from(v: Vector<$t, $n>) -> Self { <$glam>::from_array(v.into_array()) }
            }
        )*
    };
}

impl_glam_conversions!(
    glam::Vec2 => [f32; 2],
    glam::Vec3 => [f32; 3],
    glam::Vec4 => [f32; 4],
    glam::DVec2 => [f64; 2],
    glam::DVec3 => [f64; 3],
    glam::DVec4 => [f64; 4],
    glam::IVec2 => [i32; 2],
    glam::IVec3 => [i32; 3],
    glam::IVec4 => [i32; 4],
);
