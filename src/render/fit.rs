#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Center-crop region in photo pixel coordinates.
pub struct CropRegion {
    /// Left edge of the crop.
    pub x: u32,
    /// Top edge of the crop.
    pub y: u32,
    /// Crop width; equals the slot's aspect ratio within 1px of rounding.
    pub w: u32,
    /// Crop height.
    pub h: u32,
}

/// Compute the centered crop of a `photo_w`x`photo_h` photo whose aspect ratio matches a
/// `slot_w`x`slot_h` slot.
///
/// All arithmetic is integral. The ratio comparison `photo_w/photo_h > slot_w/slot_h` is done
/// by cross-multiplication, so equal ratios and near-equal ratios behave deterministically
/// with no float rounding:
///
/// - photo relatively wider than the slot: keep full height, trim width to
///   `photo_h * slot_w / slot_h`, centered horizontally;
/// - otherwise: keep full width, trim height to `photo_w * slot_h / slot_w`, centered
///   vertically. Equal ratios land here and the crop covers the whole photo.
///
/// Dimensions must all be non-zero; the trimmed side is clamped to at least one pixel.
pub fn fit_region(photo_w: u32, photo_h: u32, slot_w: u32, slot_h: u32) -> CropRegion {
    debug_assert!(photo_w > 0 && photo_h > 0 && slot_w > 0 && slot_h > 0);

    let photo_wide = u64::from(photo_w) * u64::from(slot_h);
    let slot_wide = u64::from(photo_h) * u64::from(slot_w);

    if photo_wide > slot_wide {
        let w = ((slot_wide / u64::from(slot_h)) as u32).max(1);
        CropRegion {
            x: (photo_w - w) / 2,
            y: 0,
            w,
            h: photo_h,
        }
    } else {
        let h = ((photo_wide / u64::from(slot_w)) as u32).max(1);
        CropRegion {
            x: 0,
            y: (photo_h - h) / 2,
            w: photo_w,
            h,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/fit.rs"]
mod tests;
