//! bit-depth normalizer: widen samples of any supported depth to the
//! canonical signed 32-bit form
//!
//! 8 and 16-bit values are left-justified by shifting into the high bits.
//! 24-bit values are sign-extended in place and carry their 24 significant
//! bits in the low bytes; the quantizer's 24-bit branch mirrors that
//! placement, keeping 24 <-> 32 conversion lossless.

use crate::core::{u8_to_canonical, unpack_s24, BitDepth};

/// Widen `output.len()` samples read from `input` at `depth` into canonical
/// 32-bit form.
///
/// `input` must hold at least `output.len() * depth.bytes_per_sample()` bytes.
pub fn widen_to_canonical(input: &[u8], depth: BitDepth, output: &mut [i32]) {
    let needed = output.len() * depth.bytes_per_sample();
    assert!(
        input.len() >= needed,
        "input buffer too small: {} bytes, need {}",
        input.len(),
        needed
    );

    match depth {
        BitDepth::B8 => widen_u8(input, output),
        BitDepth::B16 => widen_i16(input, output),
        BitDepth::B24 => widen_s24(input, output),
        BitDepth::B32 => widen_i32(input, output),
    }
}

fn widen_u8(input: &[u8], output: &mut [i32]) {
    for (out, &v) in output.iter_mut().zip(input) {
        *out = u8_to_canonical(v);
    }
}

fn widen_i16(input: &[u8], output: &mut [i32]) {
    for (out, bytes) in output.iter_mut().zip(input.chunks_exact(2)) {
        *out = (i16::from_le_bytes([bytes[0], bytes[1]]) as i32) << 16;
    }
}

fn widen_s24(input: &[u8], output: &mut [i32]) {
    for (out, bytes) in output.iter_mut().zip(input.chunks_exact(3)) {
        *out = unpack_s24(bytes);
    }
}

fn widen_i32(input: &[u8], output: &mut [i32]) {
    for (out, bytes) in output.iter_mut().zip(input.chunks_exact(4)) {
        *out = i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
}
