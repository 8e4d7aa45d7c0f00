//! Compile-time constant vectors.
//!
//! Direction constants follow a right-handed convention with `-Z` pointing
//! forward. Being `const`s they are fully formed before any code runs and
//! cannot be mutated.

use crate::linalg::Vector;

macro_rules! impl_basis_consts {
    ($($t:ty: $zero:literal, $one:literal);+ $(;)?) => {
        $(
            impl Vector<$t, 2> {
                /// All zeros.
                pub const ZERO: Self = Self::new([$zero; 2]);
                /// All ones.
                pub const ONE: Self = Self::new([$one; 2]);
                /// Unit vector along the first axis.
                pub const X: Self = Self::new([$one, $zero]);
                /// Unit vector along the second axis.
                pub const Y: Self = Self::new([$zero, $one]);
            }

            impl Vector<$t, 3> {
                /// All zeros.
                pub const ZERO: Self = Self::new([$zero; 3]);
                /// All ones.
                pub const ONE: Self = Self::new([$one; 3]);
                /// Unit vector along the first axis.
                pub const X: Self = Self::new([$one, $zero, $zero]);
                /// Unit vector along the second axis.
                pub const Y: Self = Self::new([$zero, $one, $zero]);
                /// Unit vector along the third axis.
                pub const Z: Self = Self::new([$zero, $zero, $one]);
            }

            impl Vector<$t, 4> {
                /// All zeros.
                pub const ZERO: Self = Self::new([$zero; 4]);
                /// All ones.
                pub const ONE: Self = Self::new([$one; 4]);
                /// Unit vector along the first axis.
                pub const X: Self = Self::new([$one, $zero, $zero, $zero]);
                /// Unit vector along the second axis.
                pub const Y: Self = Self::new([$zero, $one, $zero, $zero]);
                /// Unit vector along the third axis.
                pub const Z: Self = Self::new([$zero, $zero, $one, $zero]);
                /// Unit vector along the fourth axis.
                pub const W: Self = Self::new([$zero, $zero, $zero, $one]);
            }
        )+
    };
}

macro_rules! impl_direction_consts {
    ($($t:ty: $zero:literal, $one:literal);+ $(;)?) => {
        $(
            impl Vector<$t, 3> {
                /// `(0, 1, 0)`
                pub const UP: Self = Self::new([$zero, $one, $zero]);
                /// `(0, -1, 0)`
                pub const DOWN: Self = Self::new([$zero, -$one, $zero]);
                /// `(-1, 0, 0)`
                pub const LEFT: Self = Self::new([-$one, $zero, $zero]);
                /// `(1, 0, 0)`
                pub const RIGHT: Self = Self::new([$one, $zero, $zero]);
                /// `(0, 0, -1)`
                pub const FORWARD: Self = Self::new([$zero, $zero, -$one]);
                /// `(0, 0, 1)`
                pub const BACK: Self = Self::new([$zero, $zero, $one]);

                /// The six directions: up, down, left, right, forward, back.
                pub const DIRECTIONS: [Self; 6] = [
                    Self::UP,
                    Self::DOWN,
                    Self::LEFT,
                    Self::RIGHT,
                    Self::FORWARD,
                    Self::BACK,
                ];
            }
        )+
    };
}

impl_basis_consts!(
    f32: 0.0, 1.0;
    f64: 0.0, 1.0;
    i8: 0, 1;
    i16: 0, 1;
    i32: 0, 1;
    i64: 0, 1;
    isize: 0, 1;
    u8: 0, 1;
    u16: 0, 1;
    u32: 0, 1;
    u64: 0, 1;
    usize: 0, 1;
);

impl_direction_consts!(
    f32: 0.0, 1.0;
    f64: 0.0, 1.0;
    i8: 0, 1;
    i16: 0, 1;
    i32: 0, 1;
    i64: 0, 1;
);

#[cfg(test)]
mod tests {
    use crate::linalg::{vec3, DVec3, IVec3, Vec3, Vector};

    #[test]
    fn direction_literals() {
        assert_eq!(Vec3::UP, vec3(0.0, 1.0, 0.0));
        assert_eq!(Vec3::DOWN, vec3(0.0, -1.0, 0.0));
        assert_eq!(Vec3::LEFT, vec3(-1.0, 0.0, 0.0));
        assert_eq!(Vec3::RIGHT, vec3(1.0, 0.0, 0.0));
        assert_eq!(Vec3::FORWARD, vec3(0.0, 0.0, -1.0));
        assert_eq!(Vec3::BACK, vec3(0.0, 0.0, 1.0));
        assert_eq!(IVec3::FORWARD, vec3(0, 0, -1));
        assert_eq!(Vector::<i8, 3>::LEFT, vec3(-1, 0, 0));
    }

    #[test]
    fn directions_are_unit_and_opposed() {
        for d in DVec3::DIRECTIONS {
            assert_eq!(d.length(), 1.0);
        }
        assert_eq!(-DVec3::UP, DVec3::DOWN);
        assert_eq!(-DVec3::LEFT, DVec3::RIGHT);
        assert_eq!(-DVec3::FORWARD, DVec3::BACK);
        assert_eq!(DVec3::RIGHT.cross(DVec3::UP), DVec3::BACK);
    }

    #[test]
    fn directions_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| Vec3::DIRECTIONS))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Vec3::DIRECTIONS);
        }
    }

    #[test]
    fn basis() {
        assert_eq!(Vector::<u8, 4>::W.into_array(), [0, 0, 0, 1]);
        assert_eq!(Vector::<f32, 2>::ONE, Vector::splat(1.0));
        assert_eq!(Vector::<usize, 3>::ZERO, Vector::default());
        assert_eq!(Vec3::X + Vec3::Y + Vec3::Z, Vec3::ONE);
    }
}
