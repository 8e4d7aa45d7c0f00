//! Angle-and-radius coordinate systems convertible to and from cartesian
//! vectors.

mod polar;
mod spherical;

pub use polar::*;
pub use spherical::*;

use num_traits::{Float, FloatConst};

/// Wraps an angle coming out of `atan2`, i.e. in `(-pi, pi]`, into
/// `[0, 2pi)`.
#[inline]
pub(crate) fn wrap_two_pi<F: Float + FloatConst>(angle: F) -> F {
    let two_pi = F::PI() + F::PI();
    if angle >= F::zero() {
        return angle;
    }
    let wrapped = angle + two_pi;
    // Tiny negative angles round up to exactly 2pi.
    if wrapped >= two_pi {
        F::zero()
    } else {
        wrapped
    }
}
