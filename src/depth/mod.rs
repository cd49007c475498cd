//! bit-depth conversion for raw interleaved pcm
//!
//! Any source depth is widened to a canonical signed 32-bit form and then
//! narrowed to the target depth. Converting directly between each depth
//! pair would skip the intermediate pass at the cost of one branch per
//! pair; revisit if the canonical hop ever shows up in a profile.

pub mod narrow;
pub mod widen;

pub use narrow::narrow_from_canonical;
pub use widen::widen_to_canonical;

use crate::core::BitDepth;

/// Convert `num_samples` samples from `in_bit_depth` to `out_bit_depth`.
///
/// `input` must hold at least `num_samples * in_bit_depth / 8` bytes and
/// `output` at least `num_samples * out_bit_depth / 8`. A 32-bit source is
/// quantized straight from `input` with no scratch allocation; every other
/// source depth goes through a transient canonical buffer that is freed
/// before returning.
///
/// # Panics
/// Panics if either depth is not one of 8, 16, 24 or 32, or if a buffer is
/// smaller than its contract requires.
pub fn convert_bit_depth(
    input: &[u8],
    in_bit_depth: u8,
    output: &mut [u8],
    out_bit_depth: u8,
    num_samples: usize,
) {
    let in_depth = expect_depth(in_bit_depth);
    let out_depth = expect_depth(out_bit_depth);

    if in_depth == BitDepth::B32 {
        let needed = num_samples * in_depth.bytes_per_sample();
        assert!(
            input.len() >= needed,
            "input buffer too small: {} bytes, need {}",
            input.len(),
            needed
        );
        let samples = input[..needed]
            .chunks_exact(4)
            .map(|b| i32::from_le_bytes([b[0], b[1], b[2], b[3]]));
        narrow_from_canonical(samples, out_depth, output, num_samples);
    } else {
        let mut canonical = vec![0i32; num_samples];
        widen_to_canonical(input, in_depth, &mut canonical);
        narrow_from_canonical(canonical.iter().copied(), out_depth, output, num_samples);
    }
}

/// depth lookup that fails fast on anything unsupported
pub(crate) fn expect_depth(bits: u8) -> BitDepth {
    match BitDepth::from_bits(bits) {
        Some(depth) => depth,
        None => panic!("unsupported bit depth: {}", bits),
    }
}
