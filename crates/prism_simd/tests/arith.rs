use prism_simd::*;
use prism_simd_macros::for_each_backend;

macro_rules! impl_op {
    ($backend:ty, $op:tt, $expr:expr) => {
        let arr0 : [f32; 4] = [2f32, 5f32, -8f32, 11f32];
        let arr1 : [f32; 4] = [1f32, 2f32, 3f32, -4f32];
        let mut expected_arr = [0f32; 4];
        let arr_it = expected_arr.iter_mut().zip(arr0.iter().zip(arr1.iter()));
        arr_it.for_each(|(res, (a, b))| *res = $expr(*a, *b));

        let val0 = Lane::<$backend>::from_array(arr0);
        let val1 = Lane::<$backend>::from_array(arr1);
        let expected = Lane::<$backend>::from_array(expected_arr);

        assert_eq!(val0 $op val1, expected);
    };
}

fn assert_rel_close(actual: [f32; 4], expected: [f32; 4], tolerance: f32) {
    for (a, e) in actual.iter().zip(expected.iter()) {
        let err = if *e == 0f32 { a.abs() } else { ((a - e) / e).abs() };
        assert!(err <= tolerance, "{actual:?} is not close to {expected:?}");
    }
}

#[for_each_backend]
fn add<B: LaneBackend>() {
    impl_op!(B, +, |a: f32, b: f32| a + b);
}

#[for_each_backend]
fn sub<B: LaneBackend>() {
    impl_op!(B, -, |a: f32, b: f32| a - b);
}

#[for_each_backend]
fn mul<B: LaneBackend>() {
    impl_op!(B, *, |a: f32, b: f32| a * b);
}

#[for_each_backend]
fn div<B: LaneBackend>() {
    impl_op!(B, /, |a: f32, b: f32| a / b);
}

#[for_each_backend]
fn div_by_zero_is_signed_inf<B: LaneBackend>() {
    let res = Lane::<B>::new(1f32, -1f32, 2f32, -2f32) / Lane::new(0f32, 0f32, -0f32, -0f32);
    assert_eq!(res.to_array(), [f32::INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY, f32::INFINITY]);
}

#[for_each_backend]
fn construction<B: LaneBackend>() {
    assert_eq!(Lane::<B>::zero().to_array(), [0f32; 4]);
    assert_eq!(Lane::<B>::splat(3.5f32).to_array(), [3.5f32; 4]);
    assert_eq!(Lane::<B>::new(1f32, 2f32, 3f32, 4f32).to_array(), [1f32, 2f32, 3f32, 4f32]);
    assert_eq!(Lane::<B>::from_slice(&[1f32, 2f32, 3f32]).to_array(), [1f32, 2f32, 3f32, 0f32]);

    let lane = Lane::<B>::new(1f32, 2f32, 3f32, 4f32);
    assert_eq!((lane.x(), lane.y(), lane.z(), lane.w()), (1f32, 2f32, 3f32, 4f32));
    assert_eq!(lane.get(Component::Z), 3f32);
    assert_eq!(lane.splat_w(), Lane::splat(4f32));
}

#[for_each_backend]
fn reciprocal<B: LaneBackend>() {
    let arr = [1f32, -3f32, 0.125f32, 1234.5f32];
    assert_rel_close(Lane::<B>::from_array(arr).reciprocal().to_array(), arr.map(|val| 1f32 / val), 1e-5);

    let special = Lane::<B>::new(0f32, -0f32, f32::INFINITY, f32::NEG_INFINITY).reciprocal().to_array();
    assert_eq!(special[0], f32::INFINITY);
    assert_eq!(special[1], f32::NEG_INFINITY);
    assert!(special[2] == 0f32 && special[2].is_sign_positive());
    assert!(special[3] == 0f32 && special[3].is_sign_negative());
}

#[for_each_backend]
fn sqrt_and_rsqrt<B: LaneBackend>() {
    let arr = [1f32, 4f32, 0.5f32, 12345f32];
    assert_rel_close(Lane::<B>::from_array(arr).sqrt().to_array(), arr.map(f32::sqrt), 1e-5);
    assert_rel_close(Lane::<B>::from_array(arr).rsqrt().to_array(), arr.map(|val| 1f32 / val.sqrt()), 1e-5);

    let special = Lane::<B>::new(0f32, f32::INFINITY, 0f32, f32::INFINITY).rsqrt().to_array();
    assert_eq!(special, [f32::INFINITY, 0f32, f32::INFINITY, 0f32]);
}

#[for_each_backend]
fn reductions<B: LaneBackend>() {
    let a = Lane::<B>::new(1f32, 2f32, 3f32, 4f32);
    let b = Lane::<B>::new(5f32, 6f32, 7f32, 8f32);

    assert_eq!(a.sum(), Lane::splat(10f32));
    assert_eq!(a.dot2(b), Lane::splat(17f32));
    assert_eq!(a.dot3(b), Lane::splat(38f32));
    assert_eq!(a.dot4(b), Lane::splat(70f32));

    let v = Lane::<B>::new(3f32, 4f32, 12f32, 84f32);
    assert_eq!(v.length2(), Lane::splat(5f32));
    assert_eq!(v.length3(), Lane::splat(13f32));
    assert_eq!(v.length4(), Lane::splat(85f32));
}

#[for_each_backend]
fn normalize<B: LaneBackend>() {
    let v = Lane::<B>::new(3f32, -4f32, 12f32, 1f32);

    let n3 = v.normalize3();
    assert!((n3.length3().x() - 1f32).abs() < 1e-4);
    assert_rel_close(n3.to_array(), (v * v.dot3(v).rsqrt()).to_array(), 1e-6);

    let n2 = v.normalize2();
    assert!((n2.length2().x() - 1f32).abs() < 1e-4);

    let n4 = v.normalize4();
    assert!((n4.length4().x() - 1f32).abs() < 1e-4);

    assert_eq!(Lane::<B>::zero().normalize4(), Lane::zero());
    assert_eq!(Lane::<B>::new(0f32, 0f32, 0f32, 5f32).normalize3(), Lane::zero());
}

#[for_each_backend]
fn min_max<B: LaneBackend>() {
    let a = Lane::<B>::new(1f32, 6f32, -3f32, 4f32);
    let b = Lane::<B>::new(2f32, 5f32, -4f32, 4f32);

    assert_eq!(a.min(b).to_array(), [1f32, 5f32, -4f32, 4f32]);
    assert_eq!(a.max(b).to_array(), [2f32, 6f32, -3f32, 4f32]);
    assert_eq!(a.min_component(), Lane::splat(-3f32));
    assert_eq!(a.max_component(), Lane::splat(6f32));

    // Ties pick the second operand, which shows for signed zeros
    let zeros = Lane::<B>::splat(0f32).min(Lane::splat(-0f32)).to_array();
    assert!(zeros.iter().all(|val| val.is_sign_negative()));
}

#[for_each_backend]
fn madd_and_interpolate<B: LaneBackend>() {
    let a = Lane::<B>::new(1f32, 2f32, 3f32, 4f32);
    let b = Lane::<B>::new(5f32, 10f32, -3f32, 4f32);

    assert_eq!(a.madd(Lane::splat(2f32), Lane::splat(1f32)).to_array(), [3f32, 5f32, 7f32, 9f32]);
    assert_eq!(a.interpolate(b, 0.0), a);
    assert_eq!(a.interpolate(b, 1.0), b);
    assert_eq!(a.interpolate(b, 0.5).to_array(), [3f32, 6f32, 0f32, 4f32]);
    // Not clamped
    assert_eq!(a.interpolate(b, 2.0).to_array(), [9f32, 18f32, -9f32, 4f32]);
}

#[for_each_backend]
fn zero_tests<B: LaneBackend>() {
    let v = Lane::<B>::new(0f32, 0f32, 1f32, 2f32);
    assert!(v.is_zero2());
    assert!(!v.is_zero3());
    assert!(!v.is_zero4());
    assert!(Lane::<B>::new(0f32, -0f32, 0f32, 7f32).is_zero3());
    assert!(Lane::<B>::zero().is_zero4());
}

#[for_each_backend]
fn neg<B: LaneBackend>() {
    let v = Lane::<B>::new(1f32, -2f32, 0.5f32, 0f32);
    assert_eq!((-v).to_array(), [-1f32, 2f32, -0.5f32, 0f32]);
}
