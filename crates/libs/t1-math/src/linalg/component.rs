//! Named slots of a vector.
use crate::{error::VectorError, linalg::Vector};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A helper enum used to index a vector by slot name rather than position.
///
/// Each slot carries several names: position (`x y z w`), colour
/// (`r g b a`), texture coordinate (`s t p q`) and, for two dimensional
/// vectors, `u v`. All names of a slot refer to the same element.
///
/// # Examples
/// ```
/// # use t1_math::{vec3, Component};
/// let mut colour = vec3(0.1, 0.4, 0.6);
/// colour[Component::R] -= 0.1;
///
/// assert_eq!(colour[Component::X], 0.0);
/// assert_eq!(colour.x(), colour[0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    /// First slot.
    X = 0,
    /// Second slot.
    Y = 1,
    /// Third slot.
    Z = 2,
    /// Fourth slot.
    W = 3,
}

impl Component {
    /// Red channel, same slot as [`Component::X`].
    pub const R: Self = Self::X;
    /// Green channel, same slot as [`Component::Y`].
    pub const G: Self = Self::Y;
    /// Blue channel, same slot as [`Component::Z`].
    pub const B: Self = Self::Z;
    /// Alpha channel, same slot as [`Component::W`].
    pub const A: Self = Self::W;
    /// First texture coordinate, same slot as [`Component::X`].
    pub const S: Self = Self::X;
    /// Second texture coordinate, same slot as [`Component::Y`].
    pub const T: Self = Self::Y;
    /// Third texture coordinate, same slot as [`Component::Z`].
    pub const P: Self = Self::Z;
    /// Fourth texture coordinate, same slot as [`Component::W`].
    pub const Q: Self = Self::W;
    /// Horizontal texture coordinate, same slot as [`Component::X`].
    pub const U: Self = Self::X;
    /// Vertical texture coordinate, same slot as [`Component::Y`].
    pub const V: Self = Self::Y;

    /// All slots in storage order.
    pub const ALL: [Self; 4] = [Self::X, Self::Y, Self::Z, Self::W];

    /// Position of the slot in the vector storage.
    #[inline]
    pub const fn index(self) -> usize { self as usize }

    /// Every name the slot answers to.
    pub const fn names(self) -> &'static [&'static str] {
        match self {
            Self::X => &["x", "r", "s", "u"],
            Self::Y => &["y", "g", "t", "v"],
            Self::Z => &["z", "b", "p"],
            Self::W => &["w", "a", "q"],
        }
    }

    /// Looks a slot up by one of its names.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.names().contains(&name))
    }
}

impl TryFrom<usize> for Component {
    type Error = VectorError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(VectorError::IndexOutOfRange { dim: 4, index })
    }
}

impl<T, const N: usize> Index<Component> for Vector<T, N> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: Component) -> &Self::Output { &self[index.index()] }
}

impl<T, const N: usize> IndexMut<Component> for Vector<T, N> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: Component) -> &mut Self::Output { &mut self[index.index()] }
}
