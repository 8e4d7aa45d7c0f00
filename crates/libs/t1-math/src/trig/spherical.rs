use crate::{
    linalg::{vec3, Vector},
    trig::wrap_two_pi,
    Real,
};
use num_traits::{Float, FloatConst};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};

/// Spherical coordinate in radians, with `+z` as the up axis.
#[derive(Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spherical<F = Real> {
    /// Distance from the origin.
    pub rho: F,
    /// Elevation: angle from the xy-plane towards `+z`, in `[-pi/2, pi/2]`
    /// when converted from cartesian.
    pub phi: F,
    /// Azimuth: counter-clockwise angle from the positive x-axis within the
    /// xy-plane, in `[0, 2pi)` when converted from cartesian.
    pub theta: F,
}

impl<F: Float + FloatConst> Spherical<F> {
    /// Creates a new spherical coordinate.
    pub fn new(rho: F, phi: F, theta: F) -> Self { Self { rho, phi, theta } }

    /// Creates a new spherical coordinate with radius 1.
    pub fn unit(phi: F, theta: F) -> Self { Self::new(F::one(), phi, theta) }

    /// Converts from a cartesian coordinate.
    ///
    /// Both angles are undefined at the origin and the azimuth is undefined
    /// on the z-axis; undefined angles are reported as 0.
    pub fn from_cartesian(cartesian: Vector<F, 3>) -> Self {
        let planar = cartesian.x().hypot(cartesian.y());
        let rho = planar.hypot(cartesian.z());
        if rho == F::zero() {
            log::trace!("spherical angles are undefined at the origin, using 0");
            return Self::new(rho, F::zero(), F::zero());
        }
        let phi = cartesian.z().atan2(planar);
        if planar == F::zero() {
            log::trace!("azimuth is undefined at the poles, using 0");
            return Self::new(rho, phi, F::zero());
        }
        let theta = wrap_two_pi(cartesian.y().atan2(cartesian.x()));
        Self::new(rho, phi, theta)
    }

    /// Converts to a cartesian coordinate.
    pub fn to_cartesian(&self) -> Vector<F, 3> {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        vec3(
            self.rho * cos_phi * cos_theta,
            self.rho * cos_phi * sin_theta,
            self.rho * sin_phi,
        )
    }
}

impl<F: Float + FloatConst> From<Vector<F, 3>> for Spherical<F> {
    fn from(v: Vector<F, 3>) -> Self { Self::from_cartesian(v) }
}

impl<F: Float + FloatConst> From<Spherical<F>> for Vector<F, 3> {
    fn from(s: Spherical<F>) -> Self { s.to_cartesian() }
}

impl<F: Debug> Debug for Spherical<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ ρ: {:?}, φ: {:?}, θ: {:?} }}",
            self.rho, self.phi, self.theta
        )
    }
}

impl<F: Float + Display> Display for Spherical<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ ρ: {}, φ: {}°, θ: {}° }}",
            self.rho,
            self.phi.to_degrees(),
            self.theta.to_degrees()
        )
    }
}

impl<F: approx::AbsDiffEq<Epsilon = F> + Copy> approx::AbsDiffEq for Spherical<F> {
    type Epsilon = F;

    fn default_epsilon() -> F { F::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
        self.rho.abs_diff_eq(&other.rho, epsilon)
            && self.phi.abs_diff_eq(&other.phi, epsilon)
            && self.theta.abs_diff_eq(&other.theta, epsilon)
    }
}

impl<F: approx::RelativeEq<Epsilon = F> + Copy> approx::RelativeEq for Spherical<F> {
    fn default_max_relative() -> F { F::default_max_relative() }

    fn relative_eq(&self, other: &Self, epsilon: F, max_relative: F) -> bool {
        self.rho.relative_eq(&other.rho, epsilon, max_relative)
            && self.phi.relative_eq(&other.phi, epsilon, max_relative)
            && self.theta.relative_eq(&other.theta, epsilon, max_relative)
    }
}
