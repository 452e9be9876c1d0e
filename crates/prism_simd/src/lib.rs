//! Four-lane single precision vector kernel
//!
//! The kernel is defined by the [`LaneBackend`] trait, which is implemented by multiple backends:
//! - [`Scalar`]: portable and exact, available everywhere
//! - [`Sse2`]: x86-64 only
//! - [`Neon`]: AArch64 only
//!
//! No runtime dynamic dispatch is supported, the default backend is decided at compile time and can be overridden with the `force-scalar` feature.
//! All backends expose the same observable behavior, except for `reciprocal`, `rsqrt` and `sqrt`, which are allowed to differ within a relative error of 1e-5.

// Allows the `for_each_backend` test macro to refer to this crate by name in unit tests
extern crate self as prism_simd;

use cfg_if::cfg_if;
use prism_logging::{LogCategory, log_info};
use static_assertions::{assert_eq_size, const_assert_eq};

mod backend;
mod component;
mod lane;

pub use backend::*;
pub use component::*;
pub use lane::*;

pub(crate) const LOG_CAT : LogCategory = LogCategory::new("SIMD");

cfg_if! {
    if #[cfg(feature = "force-scalar")] {
        /// Backend used when no backend is named explicitly
        pub type DefaultBackend = Scalar;
    } else if #[cfg(target_arch = "x86_64")] {
        /// Backend used when no backend is named explicitly
        pub type DefaultBackend = Sse2;
    } else if #[cfg(target_arch = "aarch64")] {
        /// Backend used when no backend is named explicitly
        pub type DefaultBackend = Neon;
    } else {
        /// Backend used when no backend is named explicitly
        pub type DefaultBackend = Scalar;
    }
}

pub const DEFAULT_BACKEND_TYPE : BackendType = <DefaultBackend as LaneBackend>::BACKEND_TYPE;

/// Check if a backend can be used on the current machine
///
/// #Note
///
/// No dynamic detection is done, so values returned depend on the architecture the binary was compiled for
pub fn has_backend(backend: BackendType) -> bool {
    match backend {
        BackendType::Scalar => true,
        BackendType::SSE2 => cfg!(target_arch = "x86_64"),
        BackendType::NEON => cfg!(target_arch = "aarch64"),
    }
}

/// Log which backend was selected at compile time
pub fn log_backend_info() {
    log_info!(LOG_CAT, "Lane backend: {:?} (force-scalar: {})", DEFAULT_BACKEND_TYPE, cfg!(feature = "force-scalar"));
}

assert_eq_size!(Lane<Scalar>, [f32; 4]);
assert_eq_size!(Lane, [f32; 4]);
const_assert_eq!(core::mem::align_of::<Lane<Scalar>>(), 16);
const_assert_eq!(core::mem::align_of::<Lane>(), 16);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_backend_is_available() {
        assert!(has_backend(DEFAULT_BACKEND_TYPE));
        assert!(has_backend(BackendType::Scalar));
        assert!(!(has_backend(BackendType::SSE2) && has_backend(BackendType::NEON)));
    }

    #[test]
    fn forced_scalar() {
        if cfg!(feature = "force-scalar") {
            assert_eq!(DEFAULT_BACKEND_TYPE, BackendType::Scalar);
        }
    }
}
