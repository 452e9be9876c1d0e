use super::{LaneBackend, BackendType};

/// Portable backend, all operations are done per element with exact IEEE-754 math
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Scalar;

/// Register of the scalar backend, aligned like a hardware register
#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C, align(16))]
pub struct F32x4(pub [f32; 4]);

macro_rules! impl_binary_op {
    {$($name:ident => $op:tt),*} => {
        $(
            #[inline]
            fn $name(a: F32x4, b: F32x4) -> F32x4 {
                let (a, b) = (a.0, b.0);
                F32x4([a[0] $op b[0], a[1] $op b[1], a[2] $op b[2], a[3] $op b[3]])
            }
        )*
    };
}

macro_rules! impl_cmp {
    {$($name:ident => $op:tt),*} => {
        $(
            #[inline]
            fn $name(a: F32x4, b: F32x4) -> bool {
                let (a, b) = (a.0, b.0);
                a[0] $op b[0] && a[1] $op b[1] && a[2] $op b[2] && a[3] $op b[3]
            }
        )*
    };
}

impl LaneBackend for Scalar {
    type Reg = F32x4;

    const BACKEND_TYPE : BackendType = BackendType::Scalar;

    #[inline]
    fn init(x: f32, y: f32, z: f32, w: f32) -> F32x4 {
        F32x4([x, y, z, w])
    }

    #[inline]
    fn splat(val: f32) -> F32x4 {
        F32x4([val; 4])
    }

    #[inline]
    fn load(arr: &[f32; 4]) -> F32x4 {
        F32x4(*arr)
    }

    #[inline]
    fn store(reg: F32x4) -> [f32; 4] {
        reg.0
    }

    #[inline] fn splat_x(reg: F32x4) -> F32x4 { F32x4([reg.0[0]; 4]) }
    #[inline] fn splat_y(reg: F32x4) -> F32x4 { F32x4([reg.0[1]; 4]) }
    #[inline] fn splat_z(reg: F32x4) -> F32x4 { F32x4([reg.0[2]; 4]) }
    #[inline] fn splat_w(reg: F32x4) -> F32x4 { F32x4([reg.0[3]; 4]) }

    impl_binary_op!{
        add => +,
        sub => -,
        mul => *,
        div => /
    }

    #[inline]
    fn reciprocal(reg: F32x4) -> F32x4 {
        F32x4(reg.0.map(|val| 1f32 / val))
    }

    #[inline]
    fn sqrt(reg: F32x4) -> F32x4 {
        F32x4(reg.0.map(f32::sqrt))
    }

    #[inline]
    fn rsqrt(reg: F32x4) -> F32x4 {
        F32x4(reg.0.map(|val| 1f32 / val.sqrt()))
    }

    #[inline]
    fn min(a: F32x4, b: F32x4) -> F32x4 {
        let (a, b) = (a.0, b.0);
        F32x4([
            if a[0] < b[0] { a[0] } else { b[0] },
            if a[1] < b[1] { a[1] } else { b[1] },
            if a[2] < b[2] { a[2] } else { b[2] },
            if a[3] < b[3] { a[3] } else { b[3] },
        ])
    }

    #[inline]
    fn max(a: F32x4, b: F32x4) -> F32x4 {
        let (a, b) = (a.0, b.0);
        F32x4([
            if a[0] > b[0] { a[0] } else { b[0] },
            if a[1] > b[1] { a[1] } else { b[1] },
            if a[2] > b[2] { a[2] } else { b[2] },
            if a[3] > b[3] { a[3] } else { b[3] },
        ])
    }

    #[inline]
    fn cross3(a: F32x4, b: F32x4) -> F32x4 {
        let (a, b) = (a.0, b.0);
        F32x4([
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
            0f32
        ])
    }

    #[inline] fn shuffle_wxyz(reg: F32x4) -> F32x4 { let [x, y, z, w] = reg.0; F32x4([w, x, y, z]) }
    #[inline] fn shuffle_zwxy(reg: F32x4) -> F32x4 { let [x, y, z, w] = reg.0; F32x4([z, w, x, y]) }
    #[inline] fn shuffle_yzwx(reg: F32x4) -> F32x4 { let [x, y, z, w] = reg.0; F32x4([y, z, w, x]) }

    #[inline] fn zero_w(reg: F32x4) -> F32x4 { let [x, y, z, _] = reg.0; F32x4([x, y, z, 0f32]) }
    #[inline] fn zero_zw(reg: F32x4) -> F32x4 { let [x, y, _, _] = reg.0; F32x4([x, y, 0f32, 0f32]) }

    #[inline] fn merge_high(a: F32x4, b: F32x4) -> F32x4 { F32x4([a.0[2], a.0[3], b.0[2], b.0[3]]) }
    #[inline] fn merge_low(a: F32x4, b: F32x4) -> F32x4 { F32x4([a.0[0], a.0[1], b.0[0], b.0[1]]) }
    #[inline] fn interleave_low(a: F32x4, b: F32x4) -> F32x4 { F32x4([a.0[0], b.0[0], a.0[1], b.0[1]]) }
    #[inline] fn interleave_high(a: F32x4, b: F32x4) -> F32x4 { F32x4([a.0[2], b.0[2], a.0[3], b.0[3]]) }

    #[inline] fn flip_sign_0101(reg: F32x4) -> F32x4 { let [x, y, z, w] = reg.0; F32x4([x, -y, z, -w]) }
    #[inline] fn flip_sign_1010(reg: F32x4) -> F32x4 { let [x, y, z, w] = reg.0; F32x4([-x, y, -z, w]) }

    impl_cmp!{
        cmp_eq  => ==,
        cmp_neq => !=,
        cmp_lt  => <,
        cmp_le  => <=,
        cmp_gt  => >,
        cmp_ge  => >=
    }
}
