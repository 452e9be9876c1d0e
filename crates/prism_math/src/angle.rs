use core::{
    f32::consts::{PI, TAU},
    fmt::Display,
    ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Div, DivAssign, Neg},
};
use crate::ApproxEq;

const DEG_TO_RAD : f32 = PI / 180f32;
const RAD_TO_DEG : f32 = 180f32 / PI;

// Angle newtype: `$full_turn` is the size of a full turn in the unit, `$to_rad` converts a value in the unit to radians
macro_rules! impl_angle {
    {$(#[$doc:meta])* $name:ident, $suffix:literal, $full_turn:expr, $to_rad:expr} => {
        $(#[$doc])*
        #[derive(Clone, Copy, PartialEq, PartialOrd, Default, Debug)]
        pub struct $name(pub f32);

        impl $name {
            #[inline]
            #[must_use]
            pub const fn new(val: f32) -> Self {
                Self(val)
            }

            /// Wrap the angle into a single turn in either direction, keeping its sign
            #[inline]
            #[must_use]
            pub fn wrap(self) -> Self {
                Self(self.0 % $full_turn)
            }

            #[inline] pub fn sin(self) -> f32 { (self.0 * $to_rad).sin() }
            #[inline] pub fn cos(self) -> f32 { (self.0 * $to_rad).cos() }
            #[inline] pub fn tan(self) -> f32 { (self.0 * $to_rad).tan() }

            /// `(sin, cos)` of the angle
            #[inline]
            pub fn sin_cos(self) -> (f32, f32) {
                (self.0 * $to_rad).sin_cos()
            }
        }

        impl_angle!{@op $name, Add, add, AddAssign, add_assign, $name, rhs => rhs.0, +}
        impl_angle!{@op $name, Sub, sub, SubAssign, sub_assign, $name, rhs => rhs.0, -}
        impl_angle!{@op $name, Mul, mul, MulAssign, mul_assign, f32, rhs => rhs, *}
        impl_angle!{@op $name, Div, div, DivAssign, div_assign, f32, rhs => rhs, /}

        impl Mul<$name> for f32 {
            type Output = $name;

            fn mul(self, rhs: $name) -> $name {
                $name(self * rhs.0)
            }
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl ApproxEq for $name {
            type Epsilon = f32;

            fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
                self.0.is_close_to(rhs.0, epsilon)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_fmt(format_args!(concat!("{}", $suffix), self.0))
            }
        }
    };
    {@op $name:ident, $trait:ident, $fun:ident, $assign_trait:ident, $assign_fun:ident, $rhs:ty, $arg:ident => $val:expr, $op:tt} => {
        impl $trait<$rhs> for $name {
            type Output = Self;

            #[inline]
            fn $fun(self, $arg: $rhs) -> Self {
                Self(self.0 $op $val)
            }
        }

        impl $assign_trait<$rhs> for $name {
            #[inline]
            fn $assign_fun(&mut self, $arg: $rhs) {
                self.0 = self.0 $op $val;
            }
        }
    };
}

impl_angle!{
    /// An angle in degrees
    Degrees, "\u{b0}", 360f32, DEG_TO_RAD
}

impl_angle!{
    /// An angle in radians, the unit all matrix constructors work with
    Radians, "rad", TAU, 1f32
}

impl Degrees {
    #[inline]
    #[must_use]
    pub fn to_radians(self) -> Radians {
        Radians(self.0 * DEG_TO_RAD)
    }
}

impl Radians {
    #[inline]
    #[must_use]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0 * RAD_TO_DEG)
    }
}

impl From<Radians> for Degrees {
    fn from(rads: Radians) -> Self {
        rads.to_degrees()
    }
}

impl From<Degrees> for Radians {
    fn from(degs: Degrees) -> Self {
        degs.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn conversion() {
        assert!(Degrees(180f32).to_radians().is_close_to(Radians(core::f32::consts::PI), 1e-6));
        assert!(Radians(core::f32::consts::FRAC_PI_2).to_degrees().is_close_to(Degrees(90f32), 1e-4));
        assert!(Radians::from(Degrees(45f32)).is_close_to(Radians(core::f32::consts::FRAC_PI_4), 1e-6));
    }

    #[test]
    fn arithmetic() {
        let mut angle = Degrees(30f32) + Degrees(15f32);
        assert_eq!(angle, Degrees(45f32));
        angle *= 2f32;
        assert_eq!(angle, Degrees(90f32));
        assert_eq!(0.5f32 * angle, Degrees(45f32));
        assert_eq!(-(angle / 3f32), Degrees(-30f32));
    }

    #[test]
    fn wrap() {
        assert_eq!(Degrees(400f32).wrap(), Degrees(40f32));
        assert_eq!(Degrees(-400f32).wrap(), Degrees(-40f32));
    }

    #[test]
    fn trig() {
        assert!(Degrees(90f32).sin().is_close_to(1f32, 1e-6));
        assert!(Degrees(60f32).cos().is_close_to(0.5f32, 1e-6));
        assert!(Radians(core::f32::consts::FRAC_PI_4).tan().is_close_to(1f32, 1e-6));
    }
}
