use core::fmt::Write;
use std::ops::{Deref, DerefMut};

/// A fixed-sized buffer of exactly `N` elements stored inline.
///
/// This is the storage behind every [`Vector`](crate::Vector): no heap
/// allocation and no metadata, the buffer has the size of `[T; N]`.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedSized<T, const N: usize>(pub(crate) [T; N]);

impl<T, const N: usize> FixedSized<T, N> {
    /// Wraps an array.
    #[inline]
    pub const fn new(array: [T; N]) -> Self { Self(array) }

    /// Number of elements, always `N`.
    #[inline]
    pub const fn len(&self) -> usize { N }

    /// Returns true if the buffer holds no element (`N == 0`).
    #[inline]
    pub const fn is_empty(&self) -> bool { N == 0 }

    /// Returns a slice of the data.
    #[inline]
    pub fn as_slice(&self) -> &[T] { &self.0 }

    /// Returns a mutable slice of the data.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.0 }

    /// Returns a reference to the underlying array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] { &self.0 }

    /// Consumes the buffer and returns the underlying array.
    #[inline]
    pub fn into_array(self) -> [T; N] { self.0 }

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[inline]
    #[track_caller]
    pub fn slot(&self, index: usize) -> &T {
        assert!(
            index < N,
            "index {} is out of range for a {}-dimensional vector",
            index,
            N
        );
        &self.0[index]
    }

    /// Returns the element at `index` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[inline]
    #[track_caller]
    pub fn slot_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < N,
            "index {} is out of range for a {}-dimensional vector",
            index,
            N
        );
        &mut self.0[index]
    }
}

impl<T, const N: usize> Deref for FixedSized<T, N> {
    type Target = [T; N];

    fn deref(&self) -> &Self::Target { &self.0 }
}

impl<T, const N: usize> DerefMut for FixedSized<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
}

impl<T, const N: usize> From<[T; N]> for FixedSized<T, N> {
    fn from(array: [T; N]) -> Self { Self(array) }
}

impl<T: std::fmt::Debug, const N: usize> std::fmt::Debug for FixedSized<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("FixedSized({:?})", &self.0))
    }
}

impl<T: std::fmt::Display, const N: usize> std::fmt::Display for FixedSized<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { print_slice(f, &self.0) }
}

pub(crate) fn print_slice<A>(f: &mut std::fmt::Formatter<'_>, seq: &[A]) -> std::fmt::Result
where
    A: std::fmt::Display,
{
    f.write_char('[')?;
    for (i, x) in seq.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", x)?;
    }
    f.write_char(']')
}

static_assertions::assert_eq_size!(FixedSized<f32, 3>, [f32; 3]);
static_assertions::assert_eq_size!(FixedSized<f64, 4>, [f64; 4]);
