//! bit-depth quantizer: narrow canonical 32-bit samples to a target depth
//!
//! Branches take the samples as an iterator so the orchestrator can feed
//! them straight from a 32-bit input buffer without an intermediate
//! allocation.

use crate::core::{canonical_to_u8, pack_s24, BitDepth};

/// Narrow canonical samples into `output` at `depth`. The iterator must
/// yield at least `num_samples` values and `output` must hold
/// `num_samples * depth.bytes_per_sample()` bytes.
pub fn narrow_from_canonical<I>(samples: I, depth: BitDepth, output: &mut [u8], num_samples: usize)
where
    I: Iterator<Item = i32>,
{
    let needed = num_samples * depth.bytes_per_sample();
    assert!(
        output.len() >= needed,
        "output buffer too small: {} bytes, need {}",
        output.len(),
        needed
    );

    match depth {
        BitDepth::B8 => narrow_u8(samples, output, num_samples),
        BitDepth::B16 => narrow_i16(samples, output, num_samples),
        BitDepth::B24 => narrow_s24(samples, output, num_samples),
        BitDepth::B32 => narrow_i32(samples, output, num_samples),
    }
}

fn narrow_u8<I: Iterator<Item = i32>>(samples: I, output: &mut [u8], num_samples: usize) {
    for (out, v) in output[..num_samples].iter_mut().zip(samples) {
        *out = canonical_to_u8(v);
    }
}

fn narrow_i16<I: Iterator<Item = i32>>(samples: I, output: &mut [u8], num_samples: usize) {
    for (out, v) in output[..num_samples * 2].chunks_exact_mut(2).zip(samples) {
        out.copy_from_slice(&((v >> 16) as i16).to_le_bytes());
    }
}

fn narrow_s24<I: Iterator<Item = i32>>(samples: I, output: &mut [u8], num_samples: usize) {
    for (out, v) in output[..num_samples * 3].chunks_exact_mut(3).zip(samples) {
        pack_s24(v, out);
    }
}

fn narrow_i32<I: Iterator<Item = i32>>(samples: I, output: &mut [u8], num_samples: usize) {
    for (out, v) in output[..num_samples * 4].chunks_exact_mut(4).zip(samples) {
        out.copy_from_slice(&v.to_le_bytes());
    }
}
