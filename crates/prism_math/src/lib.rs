//! 4x4 matrix engine built on top of the lane kernel in `prism_simd`.
//!
//! Matrices follow the row-vector convention (`v' = v * M`), with the translation stored in the 4th row.
//! Every matrix is generic over the [`LaneBackend`](prism_simd::LaneBackend) it runs on and uses the default backend when none is given.

use prism_logging::LogCategory;
use prism_simd::Scalar;
use static_assertions::{assert_eq_size, const_assert_eq};

mod numeric;
pub use numeric::*;

mod angle;
pub use angle::*;

mod mat4;
pub use mat4::*;

mod affine2d;
pub use affine2d::*;

pub(crate) const LOG_CAT : LogCategory = LogCategory::new("Math");

assert_eq_size!(Matrix4<Scalar>, [f32; 16]);
assert_eq_size!(Matrix4, [f32; 16]);
const_assert_eq!(core::mem::align_of::<Matrix4>(), 16);
