#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod core;
pub mod depth;
pub mod mixdown;

pub use crate::core::{
    canonical_to_u8, pack_s24, u8_to_canonical, unpack_s24, BitDepth, PcmResult, SampleFormat,
    U8_BIAS,
};
pub use crate::depth::{convert_bit_depth, narrow_from_canonical, widen_to_canonical};
pub use crate::mixdown::convert_to_mono;

// result helpers

/// turn an error into js
#[cfg(target_arch = "wasm32")]
fn to_js_err(e: String) -> JsValue {
    JsValue::from_str(&e)
}

/// validated depth for the js boundary (native callers fail fast instead)
#[cfg(target_arch = "wasm32")]
fn checked_depth(bits: u8) -> Result<BitDepth, JsValue> {
    BitDepth::from_bits(bits)
        .ok_or_else(|| to_js_err(format!("unsupported bit depth: {}", bits)))
}

// api functions

/// install the panic hook so wasm panics surface in the console
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_wasm() {
    console_error_panic_hook::set_once();
}

/// Convert samples to a new bit depth
///
/// # Arguments
/// * `input` - Raw little-endian samples at `in_bit_depth`
/// * `in_bit_depth` - Bits per input sample (8, 16, 24 or 32)
/// * `out_bit_depth` - Bits per output sample (8, 16, 24 or 32)
/// * `num_samples` - Number of samples in `input`
///
/// # Returns
/// Converted samples as a byte array
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn convert_bit_depth_wasm(
    input: &[u8],
    in_bit_depth: u8,
    out_bit_depth: u8,
    num_samples: u32,
) -> Result<Vec<u8>, JsValue> {
    let in_depth = checked_depth(in_bit_depth)?;
    let out_depth = checked_depth(out_bit_depth)?;

    let num_samples = num_samples as usize;
    if input.len() < num_samples * in_depth.bytes_per_sample() {
        return Err(to_js_err(format!(
            "input buffer too small for {} samples at {} bits",
            num_samples, in_bit_depth
        )));
    }

    let mut output = vec![0u8; num_samples * out_depth.bytes_per_sample()];
    convert_bit_depth(input, in_bit_depth, &mut output, out_bit_depth, num_samples);
    Ok(output)
}

/// Mix interleaved multi-channel samples down to mono
///
/// # Arguments
/// * `input` - Raw interleaved little-endian samples
/// * `format_js` - SampleFormat object `{ bit_depth, channels }`
/// * `num_samples` - Number of samples per channel
///
/// # Returns
/// Mono samples at the input bit depth as a byte array
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn convert_to_mono_wasm(
    input: &[u8],
    format_js: JsValue,
    num_samples: u32,
) -> Result<Vec<u8>, JsValue> {
    let format: SampleFormat = serde_wasm_bindgen::from_value(format_js)
        .map_err(|e| to_js_err(format!("invalid sample format: {}", e)))?;
    let depth = format.depth().map_err(to_js_err)?;

    let num_samples = num_samples as usize;
    let needed = format.buffer_size(num_samples).map_err(to_js_err)?;
    if input.len() < needed {
        return Err(to_js_err(format!(
            "input buffer too small: {} bytes, need {}",
            input.len(),
            needed
        )));
    }

    let mut output = vec![0u8; num_samples * depth.bytes_per_sample()];
    convert_to_mono(
        input,
        &mut output,
        format.bit_depth,
        num_samples,
        format.channels as usize,
    );
    Ok(output)
}

/// Widen samples to the canonical signed 32-bit form
///
/// # Arguments
/// * `input` - Raw little-endian samples at `bit_depth`
/// * `bit_depth` - Bits per input sample (8, 16, 24 or 32)
///
/// # Returns
/// Canonical samples as an Int32Array
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn widen_to_canonical_wasm(input: &[u8], bit_depth: u8) -> Result<js_sys::Int32Array, JsValue> {
    let depth = checked_depth(bit_depth)?;

    let num_samples = input.len() / depth.bytes_per_sample();
    let mut canonical = vec![0i32; num_samples];
    widen_to_canonical(input, depth, &mut canonical);
    Ok(js_sys::Int32Array::from(&canonical[..]))
}

/// Byte size of a buffer holding `num_samples` interleaved frames
///
/// # Arguments
/// * `format_js` - SampleFormat object `{ bit_depth, channels }`
/// * `num_samples` - Number of samples per channel
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn buffer_size_wasm(format_js: JsValue, num_samples: u32) -> Result<u32, JsValue> {
    let format: SampleFormat = serde_wasm_bindgen::from_value(format_js)
        .map_err(|e| to_js_err(format!("invalid sample format: {}", e)))?;
    let size = format
        .buffer_size(num_samples as usize)
        .map_err(to_js_err)?;
    Ok(size as u32)
}
