//! Named views and combinator constructors of 2, 3 and 4 dimensional
//! vectors.
//!
//! Every name maps to one storage slot; getters read it, `*_mut` borrows it
//! and `set_*` writes it, so writing through any name is visible through
//! every other name of the slot and through positional indexing.

use crate::linalg::Vector;

macro_rules! named_slots {
    ($n:literal: $($name:ident => $idx:literal),+ $(,)?) => {
        impl<T: Copy> Vector<T, $n> {
            paste::paste! {
                $(
                    #[doc = "Returns the `" $name "` component (slot " $idx ")."]
                    #[inline]
                    pub fn $name(&self) -> T { self.0 .0[$idx] }

                    #[doc = "Borrows the `" $name "` component (slot " $idx ") mutably."]
                    #[inline]
                    pub fn [<$name _mut>](&mut self) -> &mut T { &mut self.0 .0[$idx] }

                    #[doc = "Writes the `" $name "` component (slot " $idx ")."]
                    #[inline]
                    pub fn [<set_ $name>](&mut self, value: T) { self.0 .0[$idx] = value; }
                )+
            }
        }
    };
}

named_slots!(2: x => 0, y => 1, r => 0, g => 1, s => 0, t => 1, u => 0, v => 1);
named_slots!(3: x => 0, y => 1, z => 2, r => 0, g => 1, b => 2, s => 0, t => 1, p => 2);
named_slots!(4:
    x => 0, y => 1, z => 2, w => 3,
    r => 0, g => 1, b => 2, a => 3,
    s => 0, t => 1, p => 2, q => 3,
);

/// Contiguous multi-slot views. Readers return a copy, writers store into
/// the same slots the single-component names use.
macro_rules! sub_views {
    ($n:literal: $($name:ident: $m:literal => [$($idx:literal),+]),+ $(,)?) => {
        impl<T: Copy> Vector<T, $n> {
            paste::paste! {
                $(
                    #[doc = "Returns the `" $name "` part as a new vector."]
                    #[inline]
                    pub fn $name(&self) -> Vector<T, $m> { Vector::new([$(self.0 .0[$idx]),+]) }

                    #[doc = "Overwrites the `" $name "` part."]
                    #[inline]
                    pub fn [<set_ $name>](&mut self, value: Vector<T, $m>) {
                        for (&i, e) in [$($idx),+].iter().zip(value) {
                            self.0 .0[i] = e;
                        }
                    }
                )+
            }
        }
    };
}

sub_views!(3: xy: 2 => [0, 1], yz: 2 => [1, 2]);
sub_views!(4:
    xy: 2 => [0, 1],
    zw: 2 => [2, 3],
    xyz: 3 => [0, 1, 2],
    rgb: 3 => [0, 1, 2],
    stp: 3 => [0, 1, 2],
);

impl<T> Vector<T, 2> {
    /// Creates a vector from its two components.
    #[inline]
    pub const fn from_xy(x: T, y: T) -> Self { Self::new([x, y]) }
}

impl<T> Vector<T, 3> {
    /// Creates a vector from its three components.
    #[inline]
    pub const fn from_xyz(x: T, y: T, z: T) -> Self { Self::new([x, y, z]) }
}

impl<T> Vector<T, 4> {
    /// Creates a vector from its four components.
    #[inline]
    pub const fn from_xyzw(x: T, y: T, z: T, w: T) -> Self { Self::new([x, y, z, w]) }
}

impl<T: Copy> Vector<T, 2> {
    /// Appends `z`, producing `(x, y, z)`.
    #[inline]
    pub fn extend(self, z: T) -> Vector<T, 3> { Vector::<T, 3>::from_xy_z(self, z) }
}

impl<T: Copy> Vector<T, 3> {
    /// Builds `(xy.x, xy.y, z)`.
    #[inline]
    pub fn from_xy_z(xy: Vector<T, 2>, z: T) -> Self { Self::new([xy.x(), xy.y(), z]) }

    /// Builds `(x, yz.x, yz.y)`.
    #[inline]
    pub fn from_x_yz(x: T, yz: Vector<T, 2>) -> Self { Self::new([x, yz.x(), yz.y()]) }

    /// Appends `w`, producing `(x, y, z, w)`.
    #[inline]
    pub fn extend(self, w: T) -> Vector<T, 4> { Vector::<T, 4>::from_xyz_w(self, w) }

    /// Drops `z`.
    #[inline]
    pub fn truncate(self) -> Vector<T, 2> { self.xy() }
}

impl<T: Copy> Vector<T, 4> {
    /// Builds `(xyz.x, xyz.y, xyz.z, w)`.
    #[inline]
    pub fn from_xyz_w(xyz: Vector<T, 3>, w: T) -> Self {
        Self::new([xyz.x(), xyz.y(), xyz.z(), w])
    }

    /// Builds `(xy.x, xy.y, zw.x, zw.y)`: the first vector supplies slots 0
    /// and 1, the second slots 2 and 3.
    #[inline]
    pub fn from_xy_zw(xy: Vector<T, 2>, zw: Vector<T, 2>) -> Self {
        Self::new([xy.x(), xy.y(), zw.x(), zw.y()])
    }

    /// Drops `w`.
    #[inline]
    pub fn truncate(self) -> Vector<T, 3> { self.xyz() }
}

/// Creates a 2D vector.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vector<T, 2> { Vector::from_xy(x, y) }

/// Creates a 3D vector.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vector<T, 3> { Vector::from_xyz(x, y, z) }

/// Creates a 4D vector.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vector<T, 4> { Vector::from_xyzw(x, y, z, w) }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::Component;
    use proptest::prelude::*;

    /// Checks that every name in the slot table reads the positional element.
    macro_rules! assert_slot_names {
        ($v:expr; $($name:ident => $idx:literal),+) => {
            $(
                assert_eq!($v.$name(), $v[$idx], "{} != [{}]", stringify!($name), $idx);
                assert_eq!(
                    Component::from_name(stringify!($name)).map(|c| c.index()),
                    Some($idx)
                );
            )+
        };
    }

    proptest! {
        #[test]
        fn vec2_names_alias_positions(a: i32, b: i32) {
            let v = vec2(a, b);
            assert_slot_names!(v; x => 0, y => 1, r => 0, g => 1, s => 0, t => 1, u => 0, v => 1);
        }

        #[test]
        fn vec3_names_alias_positions(a: i32, b: i32, c: i32) {
            let v = vec3(a, b, c);
            assert_slot_names!(v; x => 0, y => 1, z => 2, r => 0, g => 1, b => 2, s => 0, t => 1, p => 2);
        }

        #[test]
        fn vec4_names_alias_positions(a: i32, b: i32, c: i32, d: i32) {
            let v = vec4(a, b, c, d);
            assert_slot_names!(v; x => 0, y => 1, z => 2, w => 3, r => 0, g => 1, b => 2, a => 3, s => 0, t => 1, p => 2, q => 3);
        }

        #[test]
        fn writes_are_visible_through_every_name(a: i16, b: i16) {
            let mut v = vec4(0i16, 0, 0, 0);
            v.set_r(a);
            *v.a_mut() = b;
            prop_assert_eq!(v.x(), a);
            prop_assert_eq!(v.s(), a);
            prop_assert_eq!(v[Component::X], a);
            prop_assert_eq!(v.w(), b);
            prop_assert_eq!(v.q(), b);
            prop_assert_eq!(v[3], b);
        }
    }

    #[test]
    fn setters_and_mut_views() {
        let mut v = vec3(1.0f32, 2.0, 3.0);
        *v.g_mut() += 1.0;
        v.set_p(-3.0);
        assert_eq!(v, vec3(1.0, 3.0, -3.0));
        v[0] = 7.0;
        assert_eq!(v.r(), 7.0);
        assert_eq!(v.s(), 7.0);

        let mut uv = vec2(0.25f32, 0.75);
        uv.set_u(0.5);
        assert_eq!(uv.x(), 0.5);
        assert_eq!(uv.t(), 0.75);
    }

    #[test]
    fn combinators() {
        let a = vec2(1, 2);
        assert_eq!(Vector::<i32, 3>::from_xy_z(a, 3), vec3(1, 2, 3));
        assert_eq!(Vector::<i32, 3>::from_x_yz(3, a), vec3(3, 1, 2));
        assert_eq!(
            Vector::<i32, 4>::from_xyz_w(vec3(1, 2, 3), 4),
            vec4(1, 2, 3, 4)
        );
        assert_eq!(
            Vector::<i32, 4>::from_xy_zw(vec2(1, 2), vec2(3, 4)),
            vec4(1, 2, 3, 4)
        );
        assert_eq!(a.extend(3).extend(4), vec4(1, 2, 3, 4));
        assert_eq!(vec4(1, 2, 3, 4).truncate().truncate(), a);
    }

    #[test]
    fn sub_views() {
        let v3 = vec3(1, 2, 3);
        assert_eq!(v3.xy(), vec2(1, 2));
        assert_eq!(v3.yz(), vec2(2, 3));

        let mut v4 = vec4(1, 2, 3, 4);
        assert_eq!(v4.xy(), vec2(1, 2));
        assert_eq!(v4.zw(), vec2(3, 4));
        assert_eq!(v4.xyz(), vec3(1, 2, 3));
        assert_eq!(v4.rgb(), v4.xyz());
        assert_eq!(v4.stp(), v4.xyz());

        v4.set_rgb(vec3(7, 8, 9));
        assert_eq!(v4, vec4(7, 8, 9, 4));
        v4.set_zw(vec2(0, 0));
        assert_eq!(v4.b(), 0);
        assert_eq!(v4.a(), 0);

        let mut v3 = v3;
        v3.set_yz(vec2(5, 6));
        assert_eq!(v3, vec3(1, 5, 6));
    }
}
