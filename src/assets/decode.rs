use image::RgbaImage;

use crate::foundation::error::{FramepressError, FramepressResult};

/// Decode frame artwork bytes, preserving the alpha channel.
///
/// Artwork alpha matters: decorative cut-outs must let the white canvas base show through
/// when composited.
pub fn decode_artwork(bytes: &[u8]) -> FramepressResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| FramepressError::asset_read(format!("decode frame artwork: {e}")))?;
    Ok(dyn_img.to_rgba8())
}

/// Decode a visitor photo destined for slot `index`, normalized to opaque.
///
/// Any alpha in the source is discarded (forced to 255), matching the fully-opaque paste the
/// compositor performs. Decode failures name the offending slot index.
pub fn decode_photo(bytes: &[u8], index: usize) -> FramepressResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| FramepressError::photo_decode(index, e.to_string()))?;
    let mut rgba = dyn_img.to_rgba8();
    for px in rgba.pixels_mut() {
        px.0[3] = 255;
    }
    Ok(rgba)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
