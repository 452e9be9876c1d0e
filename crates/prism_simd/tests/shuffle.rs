use prism_simd::*;
use prism_simd_macros::for_each_backend;

fn lane<B: LaneBackend>() -> Lane<B> {
    Lane::new(1f32, 2f32, 3f32, 4f32)
}

fn other<B: LaneBackend>() -> Lane<B> {
    Lane::new(5f32, 6f32, 7f32, 8f32)
}

#[for_each_backend]
fn rotations<B: LaneBackend>() {
    assert_eq!(lane::<B>().shuffle_wxyz().to_array(), [4f32, 1f32, 2f32, 3f32]);
    assert_eq!(lane::<B>().shuffle_zwxy().to_array(), [3f32, 4f32, 1f32, 2f32]);
    assert_eq!(lane::<B>().shuffle_yzwx().to_array(), [2f32, 3f32, 4f32, 1f32]);
}

#[for_each_backend]
fn splats<B: LaneBackend>() {
    let v = lane::<B>();
    assert_eq!(v.splat_x().to_array(), [1f32; 4]);
    assert_eq!(v.splat_y().to_array(), [2f32; 4]);
    assert_eq!(v.splat_z().to_array(), [3f32; 4]);
    assert_eq!(v.splat_w().to_array(), [4f32; 4]);
}

#[for_each_backend]
fn zeroing<B: LaneBackend>() {
    assert_eq!(lane::<B>().zero_w().to_array(), [1f32, 2f32, 3f32, 0f32]);
    assert_eq!(lane::<B>().zero_zw().to_array(), [1f32, 2f32, 0f32, 0f32]);
}

#[for_each_backend]
fn merges<B: LaneBackend>() {
    assert_eq!(lane::<B>().merge_high(other()).to_array(), [3f32, 4f32, 7f32, 8f32]);
    assert_eq!(lane::<B>().merge_low(other()).to_array(), [1f32, 2f32, 5f32, 6f32]);
    assert_eq!(lane::<B>().interleave_low(other()).to_array(), [1f32, 5f32, 2f32, 6f32]);
    assert_eq!(lane::<B>().interleave_high(other()).to_array(), [3f32, 7f32, 4f32, 8f32]);
}

#[for_each_backend]
fn flip_signs<B: LaneBackend>() {
    assert_eq!(lane::<B>().flip_sign_0101().to_array(), [1f32, -2f32, 3f32, -4f32]);
    assert_eq!(lane::<B>().flip_sign_1010().to_array(), [-1f32, 2f32, -3f32, 4f32]);

    let zeros = Lane::<B>::zero().flip_sign_0101().to_array();
    assert!(zeros[0].is_sign_positive() && zeros[1].is_sign_negative());
}

#[for_each_backend]
fn cross<B: LaneBackend>() {
    let x = Lane::<B>::new(1f32, 0f32, 0f32, 7f32);
    let y = Lane::<B>::new(0f32, 1f32, 0f32, 9f32);
    assert_eq!(x.cross3(y).to_array(), [0f32, 0f32, 1f32, 0f32]);
    assert_eq!(y.cross3(x).to_array(), [0f32, 0f32, -1f32, 0f32]);

    let a = Lane::<B>::new(1f32, 2f32, 3f32, f32::NAN);
    let b = Lane::<B>::new(4f32, 5f32, 6f32, f32::INFINITY);
    assert_eq!(a.cross3(b).to_array(), [-3f32, 6f32, -3f32, 0f32]);
}
