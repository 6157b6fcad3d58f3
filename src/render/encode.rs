use std::io::Cursor;

use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;

use crate::foundation::error::{FramepressError, FramepressResult};

/// JPEG quality used for every encoded composite.
pub const JPEG_QUALITY: u8 = 95;

/// Density tag stamped on encoded composites, in dots per inch.
pub const PRINT_DPI: u16 = 300;

/// Encode an opaque RGB canvas as a JPEG with a printer density tag.
pub fn encode_jpeg(rgb: &RgbImage, quality: u8, dpi: u16) -> FramepressResult<Vec<u8>> {
    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut bytes), quality);
    rgb.write_with_encoder(encoder)
        .map_err(|e| FramepressError::encode(format!("encode jpeg: {e}")))?;
    set_jfif_density(&mut bytes, dpi)?;
    Ok(bytes)
}

/// Stamp a JPEG stream's JFIF density field with `dpi` x `dpi` dots per inch.
///
/// JFIF APP0 layout after SOI: marker `FFE0`, segment length, `"JFIF\0"`, version, density
/// units, X density, Y density (big-endian). If the encoder wrote an APP0 directly after SOI
/// it is patched in place; otherwise a minimal 16-byte APP0 is spliced in.
pub fn set_jfif_density(jpeg: &mut Vec<u8>, dpi: u16) -> FramepressResult<()> {
    if jpeg.len() < 4 || jpeg[0..2] != [0xFF, 0xD8] {
        return Err(FramepressError::encode("not a JPEG stream"));
    }

    let [hi, lo] = dpi.to_be_bytes();

    if jpeg.len() >= 18 && jpeg[2] == 0xFF && jpeg[3] == 0xE0 && &jpeg[6..11] == b"JFIF\0" {
        jpeg[13] = 0x01; // dots per inch
        jpeg[14] = hi;
        jpeg[15] = lo;
        jpeg[16] = hi;
        jpeg[17] = lo;
        return Ok(());
    }

    let app0: [u8; 18] = [
        0xFF, 0xE0, // APP0
        0x00, 0x10, // segment length 16
        b'J', b'F', b'I', b'F', 0x00, // identifier
        0x01, 0x02, // JFIF version 1.2
        0x01, // density units: dots per inch
        hi, lo, // X density
        hi, lo, // Y density
        0x00, 0x00, // no thumbnail
    ];
    jpeg.splice(2..2, app0);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/encode.rs"]
mod tests;
