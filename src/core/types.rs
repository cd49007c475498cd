//! common types for pcm conversion

use serde::{Deserialize, Serialize};

// types

/// sample width in bits
///
/// | Value | Storage                                  |
/// |-------|------------------------------------------|
/// | 8     | unsigned, offset by +128                 |
/// | 16    | signed two's-complement, little-endian   |
/// | 24    | signed two's-complement, 3 bytes packed  |
/// | 32    | signed two's-complement, little-endian   |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BitDepth {
    B8 = 8,
    B16 = 16,
    B24 = 24,
    B32 = 32,
}

impl BitDepth {
    /// parse a raw bits-per-sample value, None if unsupported
    pub fn from_bits(bits: u8) -> Option<BitDepth> {
        match bits {
            8 => Some(BitDepth::B8),
            16 => Some(BitDepth::B16),
            24 => Some(BitDepth::B24),
            32 => Some(BitDepth::B32),
            _ => None,
        }
    }

    /// bytes occupied by one sample at this depth
    pub fn bytes_per_sample(self) -> usize {
        self as usize / 8
    }
}

/// layout of an interleaved pcm buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleFormat {
    /// bits per sample (8, 16, 24 or 32)
    pub bit_depth: u8,
    /// interleaved channel count, at least 1
    pub channels: u16,
}

impl SampleFormat {
    /// new format descriptor
    pub fn new(bit_depth: u8, channels: u16) -> Self {
        SampleFormat {
            bit_depth,
            channels,
        }
    }

    /// validated depth
    pub fn depth(&self) -> PcmResult<BitDepth> {
        BitDepth::from_bits(self.bit_depth)
            .ok_or_else(|| format!("unsupported bit depth: {}", self.bit_depth))
    }

    /// bytes for one time index across all channels
    pub fn bytes_per_frame(&self) -> PcmResult<usize> {
        if self.channels == 0 {
            return Err("channel count must be at least 1".to_string());
        }
        Ok(self.depth()?.bytes_per_sample() * self.channels as usize)
    }

    /// total byte size of a buffer holding `num_samples` interleaved frames
    pub fn buffer_size(&self, num_samples: usize) -> PcmResult<usize> {
        Ok(self.bytes_per_frame()? * num_samples)
    }
}

/// result type for pcm stuff
pub type PcmResult<T> = Result<T, String>;
