use crate::{
    linalg::{vec2, Vector},
    trig::wrap_two_pi,
    Real,
};
use num_traits::{Float, FloatConst};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};

/// Polar coordinate in radians.
#[derive(Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polar<F = Real> {
    /// Distance from the origin.
    pub r: F,
    /// Counter-clockwise angle from the positive x-axis. Conversions from
    /// cartesian produce values in `[0, 2pi)`.
    pub theta: F,
}

impl<F: Float + FloatConst> Polar<F> {
    /// Creates a new polar coordinate.
    pub fn new(r: F, theta: F) -> Self { Self { r, theta } }

    /// Creates a new polar coordinate with radius 1.
    pub fn unit(theta: F) -> Self { Self { r: F::one(), theta } }

    /// Converts from a cartesian coordinate.
    ///
    /// The angle is undefined at the origin; it is reported as 0 there.
    pub fn from_cartesian(cartesian: Vector<F, 2>) -> Self {
        let r = cartesian.x().hypot(cartesian.y());
        if r == F::zero() {
            log::trace!("polar angle is undefined at the origin, using 0");
            return Self::new(r, F::zero());
        }
        Self::new(r, wrap_two_pi(cartesian.y().atan2(cartesian.x())))
    }

    /// Converts to a cartesian coordinate.
    pub fn to_cartesian(&self) -> Vector<F, 2> {
        let (sin, cos) = self.theta.sin_cos();
        vec2(self.r * cos, self.r * sin)
    }
}

impl<F: Float + FloatConst> From<Vector<F, 2>> for Polar<F> {
    fn from(v: Vector<F, 2>) -> Self { Self::from_cartesian(v) }
}

impl<F: Float + FloatConst> From<Polar<F>> for Vector<F, 2> {
    fn from(p: Polar<F>) -> Self { p.to_cartesian() }
}

impl<F: Debug> Debug for Polar<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ r: {:?}, θ: {:?} }}", self.r, self.theta)
    }
}

impl<F: Float + Display> Display for Polar<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ r: {}, θ: {}° }}", self.r, self.theta.to_degrees())
    }
}

impl<F: approx::AbsDiffEq<Epsilon = F> + Copy> approx::AbsDiffEq for Polar<F> {
    type Epsilon = F;

    fn default_epsilon() -> F { F::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
        self.r.abs_diff_eq(&other.r, epsilon) && self.theta.abs_diff_eq(&other.theta, epsilon)
    }
}

impl<F: approx::RelativeEq<Epsilon = F> + Copy> approx::RelativeEq for Polar<F> {
    fn default_max_relative() -> F { F::default_max_relative() }

    fn relative_eq(&self, other: &Self, epsilon: F, max_relative: F) -> bool {
        self.r.relative_eq(&other.r, epsilon, max_relative)
            && self.theta.relative_eq(&other.theta, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI, TAU};

    #[test]
    fn roundtrip_through_cartesian() {
        let p = Polar::<f64>::new(5.0, FRAC_PI_3);
        let back = Polar::from_cartesian(p.to_cartesian());
        assert_relative_eq!(back.r, 5.0, epsilon = 1.0e-12);
        assert_relative_eq!(back.theta, FRAC_PI_3, epsilon = 1.0e-12);

        let p = Polar::<f32>::new(5.0, std::f32::consts::FRAC_PI_3);
        let back = Polar::from(Vector::from(p));
        assert_relative_eq!(back, p, epsilon = 1.0e-5);
    }

    #[test]
    fn from_cartesian_axes() {
        assert_relative_eq!(Polar::<f64>::from_cartesian(vec2(2.0, 0.0)), Polar::new(2.0, 0.0));
        assert_relative_eq!(
            Polar::<f64>::from_cartesian(vec2(0.0, 3.0)),
            Polar::new(3.0, FRAC_PI_2)
        );
        assert_relative_eq!(Polar::<f64>::from_cartesian(vec2(-1.0, 0.0)), Polar::new(1.0, PI));
        assert_relative_eq!(
            Polar::<f64>::from_cartesian(vec2(0.0, -1.0)),
            Polar::new(1.0, 1.5 * PI),
            epsilon = 1.0e-12
        );
    }

    #[test]
    fn origin_has_zero_angle() {
        let _ = env_logger::try_init();
        let p = Polar::from_cartesian(vec2(0.0f32, 0.0));
        assert_eq!(p.r, 0.0);
        assert_eq!(p.theta, 0.0);
        assert_eq!(p.to_cartesian(), vec2(0.0, 0.0));
    }

    #[test]
    fn angles_wrap_to_full_turn() {
        let p = Polar::<f64>::new(1.0, -FRAC_PI_2 + 4.0 * PI);
        let back = Polar::from_cartesian(p.to_cartesian());
        assert_relative_eq!(back.theta, 1.5 * PI, epsilon = 1.0e-9);
    }

    #[test]
    fn formatting() {
        let p = Polar::<f32>::new(2.0, 0.0);
        assert_eq!(format!("{}", p), "{ r: 2, θ: 0° }");
        assert_eq!(format!("{:?}", Polar::<f64>::unit(0.5)), "{ r: 1.0, θ: 0.5 }");
    }

    proptest! {
        #[test]
        fn cartesian_roundtrip(r in 1.0e-3..1.0e3f64, theta in 0.0..TAU) {
            let v = Polar::new(r, theta).to_cartesian();
            let p = Polar::from_cartesian(v);
            prop_assert!(p.theta >= 0.0 && p.theta < TAU);
            assert_relative_eq!(p.r, r, max_relative = 1.0e-12);
            assert_abs_diff_eq!(p.to_cartesian(), v, epsilon = 1.0e-9);
        }
    }
}
