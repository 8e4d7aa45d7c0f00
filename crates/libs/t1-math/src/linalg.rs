//! Linear algebra: fixed-size vectors and their operator set.

mod component;
mod consts;
mod ops;
mod storage;
mod swizzle;
mod vector;

pub use component::Component;
pub use storage::FixedSized;
pub use swizzle::{vec2, vec3, vec4};
pub use vector::*;
