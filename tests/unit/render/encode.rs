use super::*;

#[test]
fn encode_roundtrips_through_decoder() {
    let rgb = RgbImage::from_pixel(12, 8, image::Rgb([200, 40, 40]));
    let jpeg = encode_jpeg(&rgb, JPEG_QUALITY, PRINT_DPI).unwrap();

    let decoded = image::load_from_memory(&jpeg).unwrap();
    assert_eq!(decoded.width(), 12);
    assert_eq!(decoded.height(), 8);
}

#[test]
fn density_is_stamped_in_dots_per_inch() {
    let rgb = RgbImage::from_pixel(4, 4, image::Rgb([0, 0, 0]));
    let jpeg = encode_jpeg(&rgb, JPEG_QUALITY, 300).unwrap();

    assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    assert_eq!(&jpeg[2..4], &[0xFF, 0xE0]);
    assert_eq!(&jpeg[6..11], b"JFIF\0");
    assert_eq!(jpeg[13], 0x01);
    assert_eq!(u16::from_be_bytes([jpeg[14], jpeg[15]]), 300);
    assert_eq!(u16::from_be_bytes([jpeg[16], jpeg[17]]), 300);
}

#[test]
fn density_patch_rejects_non_jpeg() {
    let mut bytes = vec![0x89, 0x50, 0x4E, 0x47];
    let err = set_jfif_density(&mut bytes, 300).unwrap_err();
    assert!(matches!(err, FramepressError::Encode(_)));
}

#[test]
fn density_patch_splices_app0_when_missing() {
    // SOI followed directly by a quantization table marker: no APP0 present.
    let mut bytes = vec![0xFF, 0xD8, 0xFF, 0xDB, 0x00, 0x02];
    set_jfif_density(&mut bytes, 72).unwrap();

    assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
    assert_eq!(&bytes[2..4], &[0xFF, 0xE0]);
    assert_eq!(&bytes[6..11], b"JFIF\0");
    assert_eq!(jfif_density(&bytes), (0x01, 72, 72));
    // The original marker follows the spliced segment.
    assert_eq!(&bytes[20..22], &[0xFF, 0xDB]);
}

#[test]
fn density_patch_is_idempotent_on_existing_app0() {
    let rgb = RgbImage::from_pixel(2, 2, image::Rgb([9, 9, 9]));
    let mut jpeg = encode_jpeg(&rgb, JPEG_QUALITY, 300).unwrap();
    let len = jpeg.len();

    set_jfif_density(&mut jpeg, 150).unwrap();
    assert_eq!(jpeg.len(), len);
    assert_eq!(jfif_density(&jpeg), (0x01, 150, 150));
}

fn jfif_density(jpeg: &[u8]) -> (u8, u16, u16) {
    (
        jpeg[13],
        u16::from_be_bytes([jpeg[14], jpeg[15]]),
        u16::from_be_bytes([jpeg[16], jpeg[17]]),
    )
}
