use core::arch::aarch64::*;

use crate::backend::{LaneBackend, BackendType};

/// NEON backend, always available on AArch64
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Neon;

/// Mask of all elements with a magnitude outside of `[min; max)`, NaNs are never part of the mask
#[inline]
unsafe fn outside_range_mask(reg: float32x4_t, min: f32, max: f32) -> uint32x4_t {
    let magnitude = vabsq_f32(reg);
    vorrq_u32(vcltq_f32(magnitude, vdupq_n_f32(min)), vcgeq_f32(magnitude, vdupq_n_f32(max)))
}

#[inline]
unsafe fn all_set(mask: uint32x4_t) -> bool {
    vminvq_u32(mask) == u32::MAX
}

#[inline]
unsafe fn xor_sign(reg: float32x4_t, signs: [u32; 4]) -> float32x4_t {
    vreinterpretq_f32_u32(veorq_u32(vreinterpretq_u32_f32(reg), vld1q_u32(signs.as_ptr())))
}

const SIGN : u32 = 0x8000_0000;
/// Elements with a larger magnitude have a subnormal reciprocal
const RCP_MAX : f32 = 4.2535296e37; // 2^125

macro_rules! impl_binary_op {
    {$($name:ident => $intrin:ident),*} => {
        $(
            #[inline]
            fn $name(a: float32x4_t, b: float32x4_t) -> float32x4_t {
                unsafe{ $intrin(a, b) }
            }
        )*
    };
}

macro_rules! impl_cmp {
    {$($name:ident => $intrin:ident),*} => {
        $(
            #[inline]
            fn $name(a: float32x4_t, b: float32x4_t) -> bool {
                unsafe{ all_set($intrin(a, b)) }
            }
        )*
    };
}

impl LaneBackend for Neon {
    type Reg = float32x4_t;

    const BACKEND_TYPE : BackendType = BackendType::NEON;

    #[inline]
    fn init(x: f32, y: f32, z: f32, w: f32) -> float32x4_t {
        let arr = [x, y, z, w];
        unsafe{ vld1q_f32(arr.as_ptr()) }
    }

    #[inline]
    fn splat(val: f32) -> float32x4_t {
        unsafe{ vdupq_n_f32(val) }
    }

    #[inline]
    fn load(arr: &[f32; 4]) -> float32x4_t {
        unsafe{ vld1q_f32(arr.as_ptr()) }
    }

    #[inline]
    fn store(reg: float32x4_t) -> [f32; 4] {
        let mut arr = [0f32; 4];
        unsafe{ vst1q_f32(arr.as_mut_ptr(), reg) };
        arr
    }

    #[inline] fn get_x(reg: float32x4_t) -> f32 { unsafe{ vgetq_lane_f32::<0>(reg) } }
    #[inline] fn get_y(reg: float32x4_t) -> f32 { unsafe{ vgetq_lane_f32::<1>(reg) } }
    #[inline] fn get_z(reg: float32x4_t) -> f32 { unsafe{ vgetq_lane_f32::<2>(reg) } }
    #[inline] fn get_w(reg: float32x4_t) -> f32 { unsafe{ vgetq_lane_f32::<3>(reg) } }

    #[inline] fn splat_x(reg: float32x4_t) -> float32x4_t { unsafe{ vdupq_laneq_f32::<0>(reg) } }
    #[inline] fn splat_y(reg: float32x4_t) -> float32x4_t { unsafe{ vdupq_laneq_f32::<1>(reg) } }
    #[inline] fn splat_z(reg: float32x4_t) -> float32x4_t { unsafe{ vdupq_laneq_f32::<2>(reg) } }
    #[inline] fn splat_w(reg: float32x4_t) -> float32x4_t { unsafe{ vdupq_laneq_f32::<3>(reg) } }

    impl_binary_op!{
        add => vaddq_f32,
        sub => vsubq_f32,
        mul => vmulq_f32,
        div => vdivq_f32
    }

    // Hardware estimate refined with 2 Newton-Raphson steps
    //
    // The refinement breaks down once the estimate saturates, so zero, subnormal, infinite and huge elements take an exact division
    #[inline]
    fn reciprocal(reg: float32x4_t) -> float32x4_t {
        unsafe {
            let est = vrecpeq_f32(reg);
            let mut refined = vmulq_f32(vrecpsq_f32(reg, est), est);
            refined = vmulq_f32(vrecpsq_f32(reg, refined), refined);
            let exact = vdivq_f32(vdupq_n_f32(1f32), reg);
            vbslq_f32(outside_range_mask(reg, f32::MIN_POSITIVE, RCP_MAX), exact, refined)
        }
    }

    #[inline]
    fn sqrt(reg: float32x4_t) -> float32x4_t {
        unsafe{ vsqrtq_f32(reg) }
    }

    // Hardware estimate refined with 2 Newton-Raphson steps
    //
    // Zero, subnormal and infinite elements take an exact `1 / sqrt(x)`
    #[inline]
    fn rsqrt(reg: float32x4_t) -> float32x4_t {
        unsafe {
            let est = vrsqrteq_f32(reg);
            let mut refined = vmulq_f32(vrsqrtsq_f32(vmulq_f32(reg, est), est), est);
            refined = vmulq_f32(vrsqrtsq_f32(vmulq_f32(reg, refined), refined), refined);
            let exact = vdivq_f32(vdupq_n_f32(1f32), vsqrtq_f32(reg));
            vbslq_f32(outside_range_mask(reg, f32::MIN_POSITIVE, f32::INFINITY), exact, refined)
        }
    }

    #[inline]
    fn min(a: float32x4_t, b: float32x4_t) -> float32x4_t {
        unsafe{ vbslq_f32(vcltq_f32(a, b), a, b) }
    }

    #[inline]
    fn max(a: float32x4_t, b: float32x4_t) -> float32x4_t {
        unsafe{ vbslq_f32(vcgtq_f32(a, b), a, b) }
    }

    #[inline]
    fn cross3(a: float32x4_t, b: float32x4_t) -> float32x4_t {
        unsafe {
            // (y, z, x, _) and (z, x, y, _)
            let a_yzx = vsetq_lane_f32::<2>(vgetq_lane_f32::<0>(a), vextq_f32::<1>(a, a));
            let a_zxy = vsetq_lane_f32::<0>(vgetq_lane_f32::<2>(a), vextq_f32::<3>(a, a));
            let b_yzx = vsetq_lane_f32::<2>(vgetq_lane_f32::<0>(b), vextq_f32::<1>(b, b));
            let b_zxy = vsetq_lane_f32::<0>(vgetq_lane_f32::<2>(b), vextq_f32::<3>(b, b));
            let res = vsubq_f32(vmulq_f32(a_yzx, b_zxy), vmulq_f32(a_zxy, b_yzx));
            Self::zero_w(res)
        }
    }

    #[inline] fn shuffle_wxyz(reg: float32x4_t) -> float32x4_t { unsafe{ vextq_f32::<3>(reg, reg) } }
    #[inline] fn shuffle_zwxy(reg: float32x4_t) -> float32x4_t { unsafe{ vextq_f32::<2>(reg, reg) } }
    #[inline] fn shuffle_yzwx(reg: float32x4_t) -> float32x4_t { unsafe{ vextq_f32::<1>(reg, reg) } }

    #[inline]
    fn zero_w(reg: float32x4_t) -> float32x4_t {
        unsafe{ vsetq_lane_f32::<3>(0f32, reg) }
    }

    #[inline]
    fn zero_zw(reg: float32x4_t) -> float32x4_t {
        unsafe{ vcombine_f32(vget_low_f32(reg), vdup_n_f32(0f32)) }
    }

    #[inline] fn merge_high(a: float32x4_t, b: float32x4_t) -> float32x4_t { unsafe{ vcombine_f32(vget_high_f32(a), vget_high_f32(b)) } }
    #[inline] fn merge_low(a: float32x4_t, b: float32x4_t) -> float32x4_t { unsafe{ vcombine_f32(vget_low_f32(a), vget_low_f32(b)) } }
    #[inline] fn interleave_low(a: float32x4_t, b: float32x4_t) -> float32x4_t { unsafe{ vzip1q_f32(a, b) } }
    #[inline] fn interleave_high(a: float32x4_t, b: float32x4_t) -> float32x4_t { unsafe{ vzip2q_f32(a, b) } }

    #[inline]
    fn flip_sign_0101(reg: float32x4_t) -> float32x4_t {
        unsafe{ xor_sign(reg, [0, SIGN, 0, SIGN]) }
    }

    #[inline]
    fn flip_sign_1010(reg: float32x4_t) -> float32x4_t {
        unsafe{ xor_sign(reg, [SIGN, 0, SIGN, 0]) }
    }

    impl_cmp!{
        cmp_eq => vceqq_f32,
        cmp_lt => vcltq_f32,
        cmp_le => vcleq_f32,
        cmp_gt => vcgtq_f32,
        cmp_ge => vcgeq_f32
    }

    #[inline]
    fn cmp_neq(a: float32x4_t, b: float32x4_t) -> bool {
        unsafe{ all_set(vmvnq_u32(vceqq_f32(a, b))) }
    }
}
