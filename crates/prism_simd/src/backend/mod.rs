/// Instruction set a [`LaneBackend`] is built on
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BackendType {
    Scalar,

    // x86-64
    SSE2,

    // AArch64
    NEON,
}

/// Contract every four-lane backend implements.
///
/// All functions are pure: inputs are taken by value and a new register is returned.
///
/// Elementwise arithmetic, comparisons, min/max and all shuffles must produce bit-identical results on every backend.
/// `reciprocal`, `rsqrt` and `sqrt` may use hardware estimates, but need to agree with the exact results to within a relative error of 1e-5,
/// and need to return the exact values for ±0 and ±infinity (`reciprocal(±0) == ±inf`, `reciprocal(±inf) == ±0`, `rsqrt(+0) == +inf`, `rsqrt(+inf) == +0`).
pub trait LaneBackend : Copy + Send + Sync + core::fmt::Debug + 'static {
    /// Register holding 4 `f32`s
    type Reg : Copy + Send + Sync + 'static;

    /// Type of the backend
    const BACKEND_TYPE : BackendType;

    /// Create a register from 4 values
    fn init(x: f32, y: f32, z: f32, w: f32) -> Self::Reg;

    /// Set all elements to 0
    fn zero() -> Self::Reg {
        Self::splat(0f32)
    }

    /// Set all elements of the register to `val`
    fn splat(val: f32) -> Self::Reg;

    /// Load all elements from an array
    fn load(arr: &[f32; 4]) -> Self::Reg {
        Self::init(arr[0], arr[1], arr[2], arr[3])
    }

    /// Store all elements into an array
    fn store(reg: Self::Reg) -> [f32; 4];

    fn get_x(reg: Self::Reg) -> f32 { Self::store(reg)[0] }
    fn get_y(reg: Self::Reg) -> f32 { Self::store(reg)[1] }
    fn get_z(reg: Self::Reg) -> f32 { Self::store(reg)[2] }
    fn get_w(reg: Self::Reg) -> f32 { Self::store(reg)[3] }

    /// Broadcast a single element to all elements
    fn splat_x(reg: Self::Reg) -> Self::Reg;
    fn splat_y(reg: Self::Reg) -> Self::Reg;
    fn splat_z(reg: Self::Reg) -> Self::Reg;
    fn splat_w(reg: Self::Reg) -> Self::Reg;

    /// Per element add
    fn add(a: Self::Reg, b: Self::Reg) -> Self::Reg;
    /// Per element subtract
    fn sub(a: Self::Reg, b: Self::Reg) -> Self::Reg;
    /// Per element multiplication
    fn mul(a: Self::Reg, b: Self::Reg) -> Self::Reg;
    /// Per element division
    fn div(a: Self::Reg, b: Self::Reg) -> Self::Reg;

    /// Per element reciprocal
    fn reciprocal(reg: Self::Reg) -> Self::Reg;
    /// Per element square root
    fn sqrt(reg: Self::Reg) -> Self::Reg;
    /// Per element reciprocal square root
    fn rsqrt(reg: Self::Reg) -> Self::Reg;

    /// Per element minimum, `a < b ? a : b`
    fn min(a: Self::Reg, b: Self::Reg) -> Self::Reg;
    /// Per element maximum, `a > b ? a : b`
    fn max(a: Self::Reg, b: Self::Reg) -> Self::Reg;

    /// 3D cross product of the first 3 elements, the 4th element is 0
    fn cross3(a: Self::Reg, b: Self::Reg) -> Self::Reg;

    /// `(w, x, y, z)`
    fn shuffle_wxyz(reg: Self::Reg) -> Self::Reg;
    /// `(z, w, x, y)`
    fn shuffle_zwxy(reg: Self::Reg) -> Self::Reg;
    /// `(y, z, w, x)`
    fn shuffle_yzwx(reg: Self::Reg) -> Self::Reg;

    /// `(x, y, z, 0)`
    fn zero_w(reg: Self::Reg) -> Self::Reg;
    /// `(x, y, 0, 0)`
    fn zero_zw(reg: Self::Reg) -> Self::Reg;

    /// `(a.z, a.w, b.z, b.w)`
    fn merge_high(a: Self::Reg, b: Self::Reg) -> Self::Reg;
    /// `(a.x, a.y, b.x, b.y)`
    fn merge_low(a: Self::Reg, b: Self::Reg) -> Self::Reg;
    /// `(a.x, b.x, a.y, b.y)`
    fn interleave_low(a: Self::Reg, b: Self::Reg) -> Self::Reg;
    /// `(a.z, b.z, a.w, b.w)`
    fn interleave_high(a: Self::Reg, b: Self::Reg) -> Self::Reg;

    /// `(x, -y, z, -w)`
    fn flip_sign_0101(reg: Self::Reg) -> Self::Reg;
    /// `(-x, y, -z, w)`
    fn flip_sign_1010(reg: Self::Reg) -> Self::Reg;

    // Comparisons only return `true` when the relation holds for all 4 elements
    fn cmp_eq(a: Self::Reg, b: Self::Reg) -> bool;
    fn cmp_neq(a: Self::Reg, b: Self::Reg) -> bool;
    fn cmp_lt(a: Self::Reg, b: Self::Reg) -> bool;
    fn cmp_le(a: Self::Reg, b: Self::Reg) -> bool;
    fn cmp_gt(a: Self::Reg, b: Self::Reg) -> bool;
    fn cmp_ge(a: Self::Reg, b: Self::Reg) -> bool;
}

mod scalar;
pub use scalar::*;

#[cfg(target_arch = "x86_64")]
mod x86_64;
#[cfg(target_arch = "x86_64")]
pub use self::x86_64::*;

#[cfg(target_arch = "aarch64")]
mod aarch64;
#[cfg(target_arch = "aarch64")]
pub use self::aarch64::*;
