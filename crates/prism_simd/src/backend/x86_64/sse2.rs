use core::arch::x86_64::*;

use crate::backend::{LaneBackend, BackendType};

/// SSE2 backend, always available on x86-64
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Sse2;

/// Select `a` where `mask` is set, otherwise `b`
#[inline]
unsafe fn select(mask: __m128, a: __m128, b: __m128) -> __m128 {
    _mm_or_ps(_mm_and_ps(mask, a), _mm_andnot_ps(mask, b))
}

const SIGN : i32 = i32::MIN;
const ABS : i32 = i32::MAX;
/// Elements with a larger magnitude have a subnormal reciprocal
const RCP_MAX : f32 = 4.2535296e37; // 2^125

// Immediates for `_mm_shuffle_ps`, 2 bits per destination element, x in the low bits
const XXXX : i32 = 0x00;
const YYYY : i32 = 0x55;
const ZZZZ : i32 = 0xAA;
const WWWW : i32 = 0xFF;
const YZXW : i32 = 0xC9;
const ZXYW : i32 = 0xD2;
const WXYZ : i32 = 0x93;
const ZWXY : i32 = 0x4E;
const YZWX : i32 = 0x39;

/// Bit mask built from 4 integer elements, in `x, y, z, w` order
#[inline]
unsafe fn bit_mask(x: i32, y: i32, z: i32, w: i32) -> __m128 {
    _mm_castsi128_ps(_mm_setr_epi32(x, y, z, w))
}

#[inline]
unsafe fn abs(reg: __m128) -> __m128 {
    _mm_and_ps(reg, bit_mask(ABS, ABS, ABS, ABS))
}

/// Mask of all elements with a magnitude outside of `[min; max)`, NaNs are never part of the mask
#[inline]
unsafe fn outside_range_mask(reg: __m128, min: f32, max: f32) -> __m128 {
    let magnitude = abs(reg);
    _mm_or_ps(_mm_cmplt_ps(magnitude, _mm_set1_ps(min)), _mm_cmpge_ps(magnitude, _mm_set1_ps(max)))
}

macro_rules! impl_binary_op {
    {$($name:ident => $intrin:ident),*} => {
        $(
            #[inline]
            fn $name(a: __m128, b: __m128) -> __m128 {
                unsafe{ $intrin(a, b) }
            }
        )*
    };
}

macro_rules! impl_cmp {
    {$($name:ident => $intrin:ident),*} => {
        $(
            #[inline]
            fn $name(a: __m128, b: __m128) -> bool {
                unsafe{ _mm_movemask_ps($intrin(a, b)) == 0b1111 }
            }
        )*
    };
}

impl LaneBackend for Sse2 {
    type Reg = __m128;

    const BACKEND_TYPE : BackendType = BackendType::SSE2;

    #[inline]
    fn init(x: f32, y: f32, z: f32, w: f32) -> __m128 {
        unsafe{ _mm_setr_ps(x, y, z, w) }
    }

    #[inline]
    fn zero() -> __m128 {
        unsafe{ _mm_setzero_ps() }
    }

    #[inline]
    fn splat(val: f32) -> __m128 {
        unsafe{ _mm_set1_ps(val) }
    }

    #[inline]
    fn load(arr: &[f32; 4]) -> __m128 {
        unsafe{ _mm_loadu_ps(arr.as_ptr()) }
    }

    #[inline]
    fn store(reg: __m128) -> [f32; 4] {
        let mut arr = [0f32; 4];
        unsafe{ _mm_storeu_ps(arr.as_mut_ptr(), reg) };
        arr
    }

    #[inline]
    fn get_x(reg: __m128) -> f32 {
        unsafe{ _mm_cvtss_f32(reg) }
    }

    #[inline] fn splat_x(reg: __m128) -> __m128 { unsafe{ _mm_shuffle_ps::<XXXX>(reg, reg) } }
    #[inline] fn splat_y(reg: __m128) -> __m128 { unsafe{ _mm_shuffle_ps::<YYYY>(reg, reg) } }
    #[inline] fn splat_z(reg: __m128) -> __m128 { unsafe{ _mm_shuffle_ps::<ZZZZ>(reg, reg) } }
    #[inline] fn splat_w(reg: __m128) -> __m128 { unsafe{ _mm_shuffle_ps::<WWWW>(reg, reg) } }

    impl_binary_op!{
        add => _mm_add_ps,
        sub => _mm_sub_ps,
        mul => _mm_mul_ps,
        div => _mm_div_ps,
        min => _mm_min_ps,
        max => _mm_max_ps
    }

    // One Newton-Raphson step on top of the hardware estimate: n * (2 - x * n)
    //
    // `rcpps` flushes subnormal inputs and outputs, so zero, subnormal, infinite and huge elements take an exact division
    #[inline]
    fn reciprocal(reg: __m128) -> __m128 {
        unsafe {
            let est = _mm_rcp_ps(reg);
            let two = _mm_set1_ps(2f32);
            let refined = _mm_mul_ps(est, _mm_sub_ps(two, _mm_mul_ps(reg, est)));
            let exact = _mm_div_ps(_mm_set1_ps(1f32), reg);
            select(outside_range_mask(reg, f32::MIN_POSITIVE, RCP_MAX), exact, refined)
        }
    }

    #[inline]
    fn sqrt(reg: __m128) -> __m128 {
        unsafe{ _mm_sqrt_ps(reg) }
    }

    // One Newton-Raphson step on top of the hardware estimate: 0.5 * n * (3 - (x * n) * n)
    //
    // Zero, subnormal and infinite elements take an exact `1 / sqrt(x)`
    #[inline]
    fn rsqrt(reg: __m128) -> __m128 {
        unsafe {
            let est = _mm_rsqrt_ps(reg);
            let half = _mm_set1_ps(0.5f32);
            let three = _mm_set1_ps(3f32);
            let muls = _mm_mul_ps(_mm_mul_ps(reg, est), est);
            let refined = _mm_mul_ps(_mm_mul_ps(half, est), _mm_sub_ps(three, muls));
            let exact = _mm_div_ps(_mm_set1_ps(1f32), _mm_sqrt_ps(reg));
            select(outside_range_mask(reg, f32::MIN_POSITIVE, f32::INFINITY), exact, refined)
        }
    }

    #[inline]
    fn cross3(a: __m128, b: __m128) -> __m128 {
        unsafe {
            let a_yzx = _mm_shuffle_ps::<YZXW>(a, a);
            let a_zxy = _mm_shuffle_ps::<ZXYW>(a, a);
            let b_yzx = _mm_shuffle_ps::<YZXW>(b, b);
            let b_zxy = _mm_shuffle_ps::<ZXYW>(b, b);
            let res = _mm_sub_ps(_mm_mul_ps(a_yzx, b_zxy), _mm_mul_ps(a_zxy, b_yzx));
            Self::zero_w(res)
        }
    }

    #[inline] fn shuffle_wxyz(reg: __m128) -> __m128 { unsafe{ _mm_shuffle_ps::<WXYZ>(reg, reg) } }
    #[inline] fn shuffle_zwxy(reg: __m128) -> __m128 { unsafe{ _mm_shuffle_ps::<ZWXY>(reg, reg) } }
    #[inline] fn shuffle_yzwx(reg: __m128) -> __m128 { unsafe{ _mm_shuffle_ps::<YZWX>(reg, reg) } }

    #[inline]
    fn zero_w(reg: __m128) -> __m128 {
        unsafe{ _mm_and_ps(reg, bit_mask(-1, -1, -1, 0)) }
    }

    #[inline]
    fn zero_zw(reg: __m128) -> __m128 {
        unsafe{ _mm_movelh_ps(reg, _mm_setzero_ps()) }
    }

    #[inline] fn merge_high(a: __m128, b: __m128) -> __m128 { unsafe{ _mm_movehl_ps(b, a) } }
    #[inline] fn merge_low(a: __m128, b: __m128) -> __m128 { unsafe{ _mm_movelh_ps(a, b) } }
    #[inline] fn interleave_low(a: __m128, b: __m128) -> __m128 { unsafe{ _mm_unpacklo_ps(a, b) } }
    #[inline] fn interleave_high(a: __m128, b: __m128) -> __m128 { unsafe{ _mm_unpackhi_ps(a, b) } }

    #[inline]
    fn flip_sign_0101(reg: __m128) -> __m128 {
        unsafe{ _mm_xor_ps(reg, bit_mask(0, SIGN, 0, SIGN)) }
    }

    #[inline]
    fn flip_sign_1010(reg: __m128) -> __m128 {
        unsafe{ _mm_xor_ps(reg, bit_mask(SIGN, 0, SIGN, 0)) }
    }

    impl_cmp!{
        cmp_eq  => _mm_cmpeq_ps,
        cmp_neq => _mm_cmpneq_ps,
        cmp_lt  => _mm_cmplt_ps,
        cmp_le  => _mm_cmple_ps,
        cmp_gt  => _mm_cmpgt_ps,
        cmp_ge  => _mm_cmpge_ps
    }
}
