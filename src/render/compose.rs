use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};

use crate::foundation::error::FramepressResult;
use crate::layout::model::FrameLayout;
use crate::render::encode::{JPEG_QUALITY, PRINT_DPI, encode_jpeg};
use crate::render::fit::fit_region;

/// Composite photos and frame artwork onto a fresh canvas.
///
/// Layering, bottom to top:
/// 1. opaque white background at exactly `(layout.width, layout.height)`
/// 2. frame artwork, resized (Lanczos) to the canvas iff its dimensions differ, blended with
///    its own alpha so decorative cut-outs show the white base
/// 3. one photo per slot in slot order, each center-cropped to the slot's aspect ratio
///    ([`fit_region`]), resized to the exact slot size, and pasted fully opaque above the
///    artwork; on overlapping slots the later slot wins
///
/// Photos beyond `layout.slots.len()` are ignored; slots beyond `photos.len()` stay
/// artwork-only. Inputs are borrowed immutably and never modified.
///
/// Fails with a layout error before any pixel work if the layout is degenerate.
pub fn compose_canvas(
    layout: &FrameLayout,
    artwork: &RgbaImage,
    photos: &[RgbaImage],
) -> FramepressResult<RgbaImage> {
    layout.validate()?;

    let mut canvas =
        RgbaImage::from_pixel(layout.width, layout.height, Rgba([255, 255, 255, 255]));

    if artwork.dimensions() == (layout.width, layout.height) {
        imageops::overlay(&mut canvas, artwork, 0, 0);
    } else {
        let resized = imageops::resize(artwork, layout.width, layout.height, FilterType::Lanczos3);
        imageops::overlay(&mut canvas, &resized, 0, 0);
    }

    for (slot, photo) in layout.slots.iter().zip(photos) {
        let region = fit_region(photo.width(), photo.height(), slot.w, slot.h);
        let cropped = imageops::crop_imm(photo, region.x, region.y, region.w, region.h);
        let fitted = imageops::resize(&cropped.to_image(), slot.w, slot.h, FilterType::Lanczos3);
        imageops::replace(&mut canvas, &fitted, i64::from(slot.x), i64::from(slot.y));
    }

    Ok(canvas)
}

/// Compose a frame and encode it for print.
///
/// This is the one-shot entry point the finalize step calls once every slot is assigned:
/// [`compose_canvas`], then flatten to opaque RGB and encode as JPEG at quality
/// [`JPEG_QUALITY`] with a [`PRINT_DPI`] density tag. The returned bytes are handed opaquely
/// to storage and QR collaborators.
///
/// Deterministic: identical inputs yield byte-identical output.
#[tracing::instrument(skip_all, fields(slots = layout.slots.len(), photos = photos.len()))]
pub fn compose(
    layout: &FrameLayout,
    artwork: &RgbaImage,
    photos: &[RgbaImage],
) -> FramepressResult<Vec<u8>> {
    let canvas = compose_canvas(layout, artwork, photos)?;
    let rgb = DynamicImage::ImageRgba8(canvas).to_rgb8();
    encode_jpeg(&rgb, JPEG_QUALITY, PRINT_DPI)
}

#[cfg(test)]
#[path = "../../tests/unit/render/compose.rs"]
mod tests;
