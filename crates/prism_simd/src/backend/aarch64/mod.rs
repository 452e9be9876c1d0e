mod neon;
pub use neon::*;
