//! Channel mixdown tests across all supported depths
use libpcm_audio::convert_to_mono;

fn mixdown(input: &[u8], bit_depth: u8, num_samples: usize, num_channels: usize) -> Vec<u8> {
    let mut output = vec![0u8; num_samples * bit_depth as usize / 8];
    convert_to_mono(input, &mut output, bit_depth, num_samples, num_channels);
    output
}

fn i16_bytes(values: &[i16]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

fn i32_bytes(values: &[i32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

// ============================================================================
// Single channel is identity
// ============================================================================

#[test]
fn test_mono_of_one_channel_is_identity_8() {
    let input = [0u8, 127, 128, 255, 42];
    assert_eq!(mixdown(&input, 8, 5, 1), input);
}

#[test]
fn test_mono_of_one_channel_is_identity_16() {
    let input = i16_bytes(&[i16::MIN, -1, 0, 1, i16::MAX]);
    assert_eq!(mixdown(&input, 16, 5, 1), input);
}

#[test]
fn test_mono_of_one_channel_is_identity_24() {
    let input = [
        0x00, 0x00, 0x80, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0x7F,
    ];
    assert_eq!(mixdown(&input, 24, 4, 1), input);
}

#[test]
fn test_mono_of_one_channel_is_identity_32() {
    let input = i32_bytes(&[i32::MIN, -1, 0, 1, i32::MAX]);
    assert_eq!(mixdown(&input, 32, 5, 1), input);
}

// ============================================================================
// Averaging
// ============================================================================

#[test]
fn test_mixdown_8_averages_three_channels() {
    assert_eq!(mixdown(&[100, 150, 200], 8, 1, 3), [150]);
}

#[test]
fn test_mixdown_8_truncates() {
    // (10 + 11) / 2 = 10 with integer division
    assert_eq!(mixdown(&[10, 11], 8, 1, 2), [10]);
}

#[test]
fn test_mixdown_16_signed_average() {
    let input = i16_bytes(&[-100, 300]);
    assert_eq!(mixdown(&input, 16, 1, 2), i16_bytes(&[100]));
}

#[test]
fn test_mixdown_16_truncates_toward_zero() {
    // -3 / 2 is -1, not -2: division truncates toward zero
    let input = i16_bytes(&[-3, 0]);
    assert_eq!(mixdown(&input, 16, 1, 2), i16_bytes(&[-1]));
}

#[test]
fn test_mixdown_16_multiple_frames() {
    let input = i16_bytes(&[1000, 2000, -500, -700, 0, 0]);
    assert_eq!(mixdown(&input, 16, 3, 2), i16_bytes(&[1500, -600, 0]));
}

#[test]
fn test_mixdown_24_sign_extended_average() {
    // (-2) and (4) -> 1
    let input = [
        0xFE, 0xFF, 0xFF, // -2
        0x04, 0x00, 0x00, // 4
    ];
    assert_eq!(mixdown(&input, 24, 1, 2), [0x01, 0x00, 0x00]);
}

#[test]
fn test_mixdown_24_negative_result() {
    // (-8388608) and (0) -> -4194304 = 0xFFC00000
    let input = [0x00, 0x00, 0x80, 0x00, 0x00, 0x00];
    assert_eq!(mixdown(&input, 24, 1, 2), [0x00, 0x00, 0xC0]);
}

#[test]
fn test_mixdown_32_wide_accumulator() {
    // both channels at full scale: an i32 accumulator would overflow
    let input = i32_bytes(&[i32::MAX, i32::MAX]);
    assert_eq!(mixdown(&input, 32, 1, 2), i32_bytes(&[i32::MAX]));

    let input = i32_bytes(&[i32::MIN, i32::MIN, i32::MIN]);
    assert_eq!(mixdown(&input, 32, 1, 3), i32_bytes(&[i32::MIN]));
}

#[test]
fn test_mixdown_32_mixed_signs() {
    let input = i32_bytes(&[-1_000_000, 3_000_000]);
    assert_eq!(mixdown(&input, 32, 1, 2), i32_bytes(&[1_000_000]));
}

// ============================================================================
// High channel counts
// ============================================================================

#[test]
fn test_mixdown_8_many_channels_no_overflow() {
    // 300 channels of 255 would overflow a 16-bit accumulator
    let input = vec![255u8; 300];
    assert_eq!(mixdown(&input, 8, 1, 300), [255]);
}

#[test]
fn test_mixdown_16_many_channels() {
    let input = i16_bytes(&vec![i16::MAX; 64]);
    assert_eq!(mixdown(&input, 16, 1, 64), i16_bytes(&[i16::MAX]));
}
