//! channel mixdown: average interleaved multi-channel pcm into mono
//!
//! Works directly at the source bit depth, never through the canonical
//! form. The average uses truncating integer division with no rounding or
//! dithering; downstream tooling depends on bit-exact output, so keep it
//! that way.

use crate::core::{pack_s24, unpack_s24, BitDepth};
use crate::depth::expect_depth;

/// Mix `num_samples` interleaved frames of `num_channels` samples down to
/// mono by averaging each frame.
///
/// `input` must hold at least `num_samples * num_channels * bit_depth / 8`
/// bytes and `output` at least `num_samples * bit_depth / 8`.
///
/// # Panics
/// Panics if `bit_depth` is not one of 8, 16, 24 or 32, if `num_channels`
/// is zero, or if a buffer is smaller than its contract requires.
pub fn convert_to_mono(
    input: &[u8],
    output: &mut [u8],
    bit_depth: u8,
    num_samples: usize,
    num_channels: usize,
) {
    let depth = expect_depth(bit_depth);
    assert!(num_channels > 0, "channel count must be at least 1");

    let stride = depth.bytes_per_sample();
    let in_needed = num_samples * num_channels * stride;
    let out_needed = num_samples * stride;
    assert!(
        input.len() >= in_needed,
        "input buffer too small: {} bytes, need {}",
        input.len(),
        in_needed
    );
    assert!(
        output.len() >= out_needed,
        "output buffer too small: {} bytes, need {}",
        output.len(),
        out_needed
    );

    match depth {
        BitDepth::B8 => mix_u8(input, output, num_samples, num_channels),
        BitDepth::B16 => mix_i16(input, output, num_samples, num_channels),
        BitDepth::B24 => mix_s24(input, output, num_samples, num_channels),
        BitDepth::B32 => mix_i32(input, output, num_samples, num_channels),
    }
}

fn mix_u8(input: &[u8], output: &mut [u8], num_samples: usize, num_channels: usize) {
    for (out, frame) in output[..num_samples]
        .iter_mut()
        .zip(input.chunks_exact(num_channels))
    {
        let sum: u32 = frame.iter().map(|&v| v as u32).sum();
        *out = (sum / num_channels as u32) as u8;
    }
}

fn mix_i16(input: &[u8], output: &mut [u8], num_samples: usize, num_channels: usize) {
    for (out, frame) in output[..num_samples * 2]
        .chunks_exact_mut(2)
        .zip(input.chunks_exact(num_channels * 2))
    {
        let sum: i32 = frame
            .chunks_exact(2)
            .map(|b| i16::from_le_bytes([b[0], b[1]]) as i32)
            .sum();
        let avg = (sum / num_channels as i32) as i16;
        out.copy_from_slice(&avg.to_le_bytes());
    }
}

fn mix_s24(input: &[u8], output: &mut [u8], num_samples: usize, num_channels: usize) {
    for (out, frame) in output[..num_samples * 3]
        .chunks_exact_mut(3)
        .zip(input.chunks_exact(num_channels * 3))
    {
        let sum: i32 = frame.chunks_exact(3).map(unpack_s24).sum();
        pack_s24(sum / num_channels as i32, out);
    }
}

fn mix_i32(input: &[u8], output: &mut [u8], num_samples: usize, num_channels: usize) {
    for (out, frame) in output[..num_samples * 4]
        .chunks_exact_mut(4)
        .zip(input.chunks_exact(num_channels * 4))
    {
        // 64-bit accumulator so high channel counts at full amplitude
        // cannot overflow
        let sum: i64 = frame
            .chunks_exact(4)
            .map(|b| i32::from_le_bytes([b[0], b[1], b[2], b[3]]) as i64)
            .sum();
        let avg = (sum / num_channels as i64) as i32;
        out.copy_from_slice(&avg.to_le_bytes());
    }
}
