//! Fixed-size vector algebra for the t1 engine.
//!
//! The crate is built around a single generic type, [`Vector<T, N>`], a
//! value type holding exactly `N` elements inline. Two, three and four
//! dimensional vectors additionally expose named views over the same slots
//! (`x`/`r`/`s`, `y`/`g`/`t`, ...), combinator constructors, and, in three
//! dimensions, the canonical direction constants.
//!
//! ```
//! use t1_math::{vec2, vec3, Vec3};
//!
//! let a = vec3(1.0f32, 2.0, 3.0);
//! let b = Vec3::from_xy_z(vec2(4.0, 5.0), 6.0);
//!
//! assert_eq!(a + b, vec3(5.0, 7.0, 9.0));
//! assert_eq!(a * b, vec3(4.0, 10.0, 18.0));
//! assert_eq!(a.r(), a[0]);
//! assert_eq!(Vec3::FORWARD, vec3(0.0, 0.0, -1.0));
//! ```
//!
//! Polar and spherical coordinates live in [`trig`] and convert to and from
//! two and three dimensional vectors.

pub mod error;
pub mod linalg;
pub mod trig;

pub use error::VectorError;
pub use linalg::*;
pub use trig::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "use_f64")] {
        /// Default scalar type of the coordinate converters.
        pub type Real = f64;
    } else {
        /// Default scalar type of the coordinate converters.
        pub type Real = f32;
    }
}
