pub mod sample;
pub mod types;

pub use sample::{canonical_to_u8, pack_s24, u8_to_canonical, unpack_s24, U8_BIAS};
pub use types::*;
