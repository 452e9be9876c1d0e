use core::{
    fmt::{Debug, Display},
    ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Div, DivAssign, Neg},
};

use prism_logging::log_debug;

use crate::{
    backend::LaneBackend,
    Component, DefaultBackend, LOG_CAT,
};

/// Four-lane single precision value `(x, y, z, w)`
///
/// A lane is an immutable value, every operation returns a new lane.
/// All operations are implemented on top of the [`LaneBackend`] `B`, which is the backend selected at compile time by default.
#[repr(transparent)]
pub struct Lane<B: LaneBackend = DefaultBackend>(B::Reg);

impl<B: LaneBackend> Clone for Lane<B> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: LaneBackend> Copy for Lane<B> {}

impl<B: LaneBackend> Lane<B> {
    /// Create a lane from 4 values
    #[inline]
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self(B::init(x, y, z, w))
    }

    /// Create a lane with all elements set to 0
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self(B::zero())
    }

    /// Create a lane with all elements set to `val`
    #[inline]
    #[must_use]
    pub fn splat(val: f32) -> Self {
        Self(B::splat(val))
    }

    #[inline]
    #[must_use]
    pub fn from_array(arr: [f32; 4]) -> Self {
        Self(B::load(&arr))
    }

    /// Create a lane from up to 4 values, missing elements are set to 0.
    ///
    /// Any value past the 4th is ignored.
    #[inline]
    #[must_use]
    pub fn from_slice(vals: &[f32]) -> Self {
        debug_assert!(vals.len() <= 4, "A lane can only be created from at most 4 values");
        let mut arr = [0f32; 4];
        let len = vals.len().min(4);
        arr[..len].copy_from_slice(&vals[..len]);
        Self::from_array(arr)
    }

    /// Wrap a raw backend register
    #[inline]
    pub fn from_reg(reg: B::Reg) -> Self {
        Self(reg)
    }

    /// Get the raw backend register
    #[inline]
    pub fn reg(self) -> B::Reg {
        self.0
    }

    #[inline]
    #[must_use]
    pub fn to_array(self) -> [f32; 4] {
        B::store(self.0)
    }

    /// Copy up to 4 elements into `dst`, elements past the length of `dst` are skipped
    #[inline]
    pub fn write_to_slice(self, dst: &mut [f32]) {
        let arr = self.to_array();
        let len = dst.len().min(4);
        dst[..len].copy_from_slice(&arr[..len]);
    }

    #[inline] pub fn x(self) -> f32 { B::get_x(self.0) }
    #[inline] pub fn y(self) -> f32 { B::get_y(self.0) }
    #[inline] pub fn z(self) -> f32 { B::get_z(self.0) }
    #[inline] pub fn w(self) -> f32 { B::get_w(self.0) }

    /// Get a single element
    #[inline]
    pub fn get(self, comp: Component) -> f32 {
        match comp {
            Component::X => self.x(),
            Component::Y => self.y(),
            Component::Z => self.z(),
            Component::W => self.w(),
        }
    }

    /// Broadcast a single element to all elements
    #[inline]
    #[must_use]
    pub fn splat_component(self, comp: Component) -> Self {
        match comp {
            Component::X => self.splat_x(),
            Component::Y => self.splat_y(),
            Component::Z => self.splat_z(),
            Component::W => self.splat_w(),
        }
    }

    #[inline] #[must_use] pub fn splat_x(self) -> Self { Self(B::splat_x(self.0)) }
    #[inline] #[must_use] pub fn splat_y(self) -> Self { Self(B::splat_y(self.0)) }
    #[inline] #[must_use] pub fn splat_z(self) -> Self { Self(B::splat_z(self.0)) }
    #[inline] #[must_use] pub fn splat_w(self) -> Self { Self(B::splat_w(self.0)) }

    /// Approximate reciprocal, `1 / x` for each element
    #[inline]
    #[must_use]
    pub fn reciprocal(self) -> Self {
        Self(B::reciprocal(self.0))
    }

    #[inline]
    #[must_use]
    pub fn sqrt(self) -> Self {
        Self(B::sqrt(self.0))
    }

    /// Approximate reciprocal square root, `1 / sqrt(x)` for each element
    #[inline]
    #[must_use]
    pub fn rsqrt(self) -> Self {
        Self(B::rsqrt(self.0))
    }

    /// `self * mul + add`, without fusing the operations
    #[inline]
    #[must_use]
    pub fn madd(self, mul: Self, add: Self) -> Self {
        self * mul + add
    }

    /// Sum of all elements, broadcast to all elements
    #[inline]
    #[must_use]
    pub fn sum(self) -> Self {
        self.splat_x() + self.splat_y() + self.splat_z() + self.splat_w()
    }

    /// Dot product of the first 2 elements, broadcast to all elements
    #[inline]
    #[must_use]
    pub fn dot2(self, other: Self) -> Self {
        let prod = self * other;
        prod.splat_x() + prod.splat_y()
    }

    /// Dot product of the first 3 elements, broadcast to all elements
    #[inline]
    #[must_use]
    pub fn dot3(self, other: Self) -> Self {
        let prod = self * other;
        prod.splat_x() + prod.splat_y() + prod.splat_z()
    }

    /// Dot product of all elements, broadcast to all elements
    #[inline]
    #[must_use]
    pub fn dot4(self, other: Self) -> Self {
        (self * other).sum()
    }

    #[inline] #[must_use] pub fn length2(self) -> Self { self.dot2(self).sqrt() }
    #[inline] #[must_use] pub fn length3(self) -> Self { self.dot3(self).sqrt() }
    #[inline] #[must_use] pub fn length4(self) -> Self { self.dot4(self).sqrt() }

    /// Normalize the first 2 elements, the remaining elements are scaled by the same factor.
    ///
    /// A vector with a length of 0 results in a zero lane.
    #[inline]
    #[must_use]
    pub fn normalize2(self) -> Self {
        Self::scale_by_rsqrt(self, self.dot2(self))
    }

    /// Normalize the first 3 elements, the `w` element is scaled by the same factor.
    ///
    /// A vector with a length of 0 results in a zero lane.
    #[inline]
    #[must_use]
    pub fn normalize3(self) -> Self {
        Self::scale_by_rsqrt(self, self.dot3(self))
    }

    /// Normalize all elements.
    ///
    /// A vector with a length of 0 results in a zero lane.
    #[inline]
    #[must_use]
    pub fn normalize4(self) -> Self {
        Self::scale_by_rsqrt(self, self.dot4(self))
    }

    #[inline]
    fn scale_by_rsqrt(self, dot: Self) -> Self {
        if dot.x() == 0f32 {
            Self::zero()
        } else {
            self * dot.rsqrt()
        }
    }

    #[inline] pub fn is_zero2(self) -> bool { self.zero_zw().cmp_eq(Self::zero()) }
    #[inline] pub fn is_zero3(self) -> bool { self.zero_w().cmp_eq(Self::zero()) }
    #[inline] pub fn is_zero4(self) -> bool { self.cmp_eq(Self::zero()) }

    /// Per element minimum, ties and NaNs return the element of `other`
    #[inline]
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self(B::min(self.0, other.0))
    }

    /// Per element maximum, ties and NaNs return the element of `other`
    #[inline]
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self(B::max(self.0, other.0))
    }

    /// Smallest element, broadcast to all elements
    #[inline]
    #[must_use]
    pub fn min_component(self) -> Self {
        let min = self.min(self.shuffle_zwxy());
        min.min(min.shuffle_yzwx())
    }

    /// Largest element, broadcast to all elements
    #[inline]
    #[must_use]
    pub fn max_component(self) -> Self {
        let max = self.max(self.shuffle_zwxy());
        max.max(max.shuffle_yzwx())
    }

    /// 3D cross product, `w` is set to 0
    #[inline]
    #[must_use]
    pub fn cross3(self, other: Self) -> Self {
        Self(B::cross3(self.0, other.0))
    }

    #[inline] #[must_use] pub fn shuffle_wxyz(self) -> Self { Self(B::shuffle_wxyz(self.0)) }
    #[inline] #[must_use] pub fn shuffle_zwxy(self) -> Self { Self(B::shuffle_zwxy(self.0)) }
    #[inline] #[must_use] pub fn shuffle_yzwx(self) -> Self { Self(B::shuffle_yzwx(self.0)) }

    #[inline] #[must_use] pub fn zero_w(self) -> Self { Self(B::zero_w(self.0)) }
    #[inline] #[must_use] pub fn zero_zw(self) -> Self { Self(B::zero_zw(self.0)) }

    /// `(self.z, self.w, other.z, other.w)`
    #[inline] #[must_use] pub fn merge_high(self, other: Self) -> Self { Self(B::merge_high(self.0, other.0)) }
    /// `(self.x, self.y, other.x, other.y)`
    #[inline] #[must_use] pub fn merge_low(self, other: Self) -> Self { Self(B::merge_low(self.0, other.0)) }
    /// `(self.x, other.x, self.y, other.y)`
    #[inline] #[must_use] pub fn interleave_low(self, other: Self) -> Self { Self(B::interleave_low(self.0, other.0)) }
    /// `(self.z, other.z, self.w, other.w)`
    #[inline] #[must_use] pub fn interleave_high(self, other: Self) -> Self { Self(B::interleave_high(self.0, other.0)) }

    /// `(x, -y, z, -w)`
    #[inline] #[must_use] pub fn flip_sign_0101(self) -> Self { Self(B::flip_sign_0101(self.0)) }
    /// `(-x, y, -z, w)`
    #[inline] #[must_use] pub fn flip_sign_1010(self) -> Self { Self(B::flip_sign_1010(self.0)) }

    // Comparisons are only `true` when they hold for all 4 elements
    #[inline] pub fn cmp_eq(self, other: Self) -> bool { B::cmp_eq(self.0, other.0) }
    #[inline] pub fn cmp_neq(self, other: Self) -> bool { B::cmp_neq(self.0, other.0) }
    #[inline] pub fn cmp_lt(self, other: Self) -> bool { B::cmp_lt(self.0, other.0) }
    #[inline] pub fn cmp_le(self, other: Self) -> bool { B::cmp_le(self.0, other.0) }
    #[inline] pub fn cmp_gt(self, other: Self) -> bool { B::cmp_gt(self.0, other.0) }
    #[inline] pub fn cmp_ge(self, other: Self) -> bool { B::cmp_ge(self.0, other.0) }

    /// Linear interpolation, `self + (other - self) * t`, `t` is not clamped
    #[inline]
    #[must_use]
    pub fn interpolate(self, other: Self, t: f64) -> Self {
        self + (other - self) * Self::splat(t as f32)
    }

    /// Log the lane at debug level
    pub fn log_debug(self) {
        let [x, y, z, w] = self.to_array();
        log_debug!(LOG_CAT, Self::log_debug, "simd4({:.6}, {:.6}, {:.6}, {:.6})", x, y, z, w);
    }
}

impl<B: LaneBackend> Default for Lane<B> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<B: LaneBackend> From<[f32; 4]> for Lane<B> {
    fn from(arr: [f32; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl<B: LaneBackend> From<Lane<B>> for [f32; 4] {
    fn from(lane: Lane<B>) -> Self {
        lane.to_array()
    }
}

macro_rules! impl_arith_op {
    {$([$trait:ident, $fun:ident, $assign_trait:ident, $assign_fun:ident, $backend_fun:ident])*} => {
        $(
            impl<B: LaneBackend> $trait for Lane<B> {
                type Output = Self;

                #[inline]
                fn $fun(self, rhs: Self) -> Self {
                    Self(B::$backend_fun(self.0, rhs.0))
                }
            }

            impl<B: LaneBackend> $assign_trait for Lane<B> {
                #[inline]
                fn $assign_fun(&mut self, rhs: Self) {
                    *self = Self(B::$backend_fun(self.0, rhs.0));
                }
            }
        )*
    };
}
impl_arith_op!{
    [Add, add, AddAssign, add_assign, add]
    [Sub, sub, SubAssign, sub_assign, sub]
    [Mul, mul, MulAssign, mul_assign, mul]
    [Div, div, DivAssign, div_assign, div]
}

impl<B: LaneBackend> Neg for Lane<B> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::zero() - self
    }
}

impl<B: LaneBackend> PartialEq for Lane<B> {
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl<B: LaneBackend> Display for Lane<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [x, y, z, w] = self.to_array();
        f.write_fmt(format_args!("({x}, {y}, {z}, {w})"))
    }
}

impl<B: LaneBackend> Debug for Lane<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [x, y, z, w] = self.to_array();
        f.debug_struct("Lane")
            .field("x", &x)
            .field("y", &y)
            .field("z", &z)
            .field("w", &w)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lane, Scalar, Component};

    type L = Lane<Scalar>;

    #[test]
    fn from_slice_pads_with_zero() {
        assert_eq!(L::from_slice(&[1f32, 2f32]).to_array(), [1f32, 2f32, 0f32, 0f32]);
        assert_eq!(L::from_slice(&[]).to_array(), [0f32; 4]);
        assert_eq!(L::from_slice(&[1f32, 2f32, 3f32, 4f32]).to_array(), [1f32, 2f32, 3f32, 4f32]);
    }

    #[test]
    fn write_to_short_slice() {
        let mut dst = [9f32; 3];
        L::new(1f32, 2f32, 3f32, 4f32).write_to_slice(&mut dst);
        assert_eq!(dst, [1f32, 2f32, 3f32]);

        let mut dst = [9f32; 6];
        L::new(1f32, 2f32, 3f32, 4f32).write_to_slice(&mut dst);
        assert_eq!(dst, [1f32, 2f32, 3f32, 4f32, 9f32, 9f32]);
    }

    #[test]
    fn component_access() {
        let lane = L::new(1f32, 2f32, 3f32, 4f32);
        for (idx, comp) in Component::ALL.into_iter().enumerate() {
            assert_eq!(lane.get(comp), (idx + 1) as f32);
            assert_eq!(lane.splat_component(comp), L::splat((idx + 1) as f32));
            assert_eq!(Component::from_index(idx), Some(comp));
        }
        assert_eq!(Component::from_index(4), None);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", L::new(1f32, -2.5f32, 0f32, 4f32)), "(1, -2.5, 0, 4)");
    }

    #[test]
    fn neg_and_assign_ops() {
        let mut lane = L::new(1f32, -2f32, 3f32, -4f32);
        assert_eq!((-lane).to_array(), [-1f32, 2f32, -3f32, 4f32]);

        lane += L::splat(1f32);
        lane *= L::splat(2f32);
        lane -= L::splat(4f32);
        lane /= L::splat(2f32);
        assert_eq!(lane.to_array(), [0f32, -3f32, 2f32, -5f32]);
    }

    #[test]
    fn logging_without_logger_is_silent() {
        L::new(1f32, 2f32, 3f32, 4f32).log_debug();
    }
}
