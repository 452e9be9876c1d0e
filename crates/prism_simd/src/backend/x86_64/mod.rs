mod sse2;
pub use sse2::*;
