use prism_simd::{Lane, LaneBackend};

/// Machine epsilon of a floating point type
pub trait MachineEpsilon : Copy {
    const EPSILON: Self;
}

impl MachineEpsilon for f32 {
    const EPSILON: Self = f32::EPSILON;
}

impl MachineEpsilon for f64 {
    const EPSILON: Self = f64::EPSILON;
}

/// Defines a type that can check if it's approximately equal to another value
pub trait ApproxEq : Sized {
    type Epsilon : MachineEpsilon;

    /// Check if `self` is approximately equal to another value, given an `epsilon`
    fn is_close_to(self, rhs: Self, epsilon: Self::Epsilon) -> bool;

    /// Check if `self` is approximately equal to another, using the machine epsilon
    fn is_approx_eq(self, rhs: Self) -> bool {
        self.is_close_to(rhs, <Self::Epsilon as MachineEpsilon>::EPSILON)
    }
}

macro_rules! impl_approx_eq {
    {$($ty:ty),*} => {
        $(
            impl ApproxEq for $ty {
                type Epsilon = $ty;

                fn is_close_to(self, rhs: Self, epsilon: Self::Epsilon) -> bool {
                    (self - rhs).abs() <= epsilon
                }
            }
        )*
    };
}
impl_approx_eq!{f32, f64}

impl<B: LaneBackend> ApproxEq for Lane<B> {
    type Epsilon = f32;

    /// Every element needs to be within `epsilon` of the corresponding element in `rhs`
    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        let delta = self - rhs;
        delta.max(-delta).cmp_le(Lane::splat(epsilon))
    }
}
