//! Graphics math kernel: a 4-lane single precision vector with interchangeable backends, and a 4x4 matrix engine built on it.
//!
//! ```
//! use prism::{Degrees, Lane, Matrix4};
//!
//! let model : Matrix4 = Matrix4::init_translation(0.0, 0.0, -5.0).rotate_y(Degrees(45.0));
//! let point = model.transform_point3(Lane::new(1.0, 0.0, 0.0, 0.0));
//! assert!((point.w() - 1.0).abs() < 1e-6);
//! ```

pub use prism_logging as logging;

pub use prism_simd::*;
pub use prism_math::*;

