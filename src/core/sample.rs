//! single-sample packing helpers shared by the depth and mixdown paths

/// Rebias applied to 8-bit unsigned samples (0..=255 maps to -128..=127)
pub const U8_BIAS: i32 = 128;

/// Decode one 8-bit unsigned sample to its canonical 32-bit form
#[inline]
pub fn u8_to_canonical(v: u8) -> i32 {
    (v as i32 - U8_BIAS) << 24
}

/// Encode a canonical 32-bit sample as 8-bit unsigned
#[inline]
pub fn canonical_to_u8(v: i32) -> u8 {
    ((v >> 24) + U8_BIAS) as u8
}

/// Decode a packed little-endian 24-bit two's-complement sample,
/// sign-extending bit 23 into the high byte
#[inline]
pub fn unpack_s24(bytes: &[u8]) -> i32 {
    let raw = bytes[0] as u32 | ((bytes[1] as u32) << 8) | ((bytes[2] as u32) << 16);
    if bytes[2] & 0x80 != 0 {
        (raw | 0xFF00_0000) as i32
    } else {
        raw as i32
    }
}

/// Pack the low 24 bits of a sample as 3 little-endian bytes
#[inline]
pub fn pack_s24(value: i32, out: &mut [u8]) {
    let v = value as u32;
    out[0] = (v & 0xFF) as u8;
    out[1] = ((v >> 8) & 0xFF) as u8;
    out[2] = ((v >> 16) & 0xFF) as u8;
}
