//! The upload form's data path, end to end: uploaded bytes are decoded,
//! padded to a preset, previewed, and encoded for download.

use framepad::{
    AspectRatio, BorderColor, Error, OutputFormat, Preset, Size, pad_bytes,
};
use image::{GenericImageView, ImageFormat, Rgba, RgbaImage};

fn upload_png(w: u32, h: u32, pixel: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(w, h, Rgba(pixel));
    let mut data = std::io::Cursor::new(Vec::new());
    img.write_to(&mut data, ImageFormat::Png).unwrap();
    data.into_inner()
}

#[test]
fn preset_selection_to_download() {
    let upload = upload_png(600, 600, [10, 200, 30, 255]);
    let preset = Preset::parse("4:5 (Portrait)").unwrap();
    let color = BorderColor::parse_or_white("#112233");

    let out = pad_bytes(&upload, preset.ratio(), color).unwrap();
    assert_eq!(out.plan.canvas, Size::new(600, 750));
    assert_eq!(out.plan.placement, (0, 75));
    assert_eq!(out.plan.margins(), (75, 0, 75, 0));

    // Download round-trip: the encoded PNG reopens at canvas dimensions
    // with the border and source pixels intact.
    let download = out.encode(OutputFormat::Png).unwrap();
    let reopened = image::load_from_memory(&download).unwrap().to_rgba8();
    assert_eq!(reopened.dimensions(), (600, 750));
    assert_eq!(reopened.get_pixel(0, 0), &Rgba([0x11, 0x22, 0x33, 255]));
    assert_eq!(reopened.get_pixel(300, 375), &Rgba([10, 200, 30, 255]));
}

#[test]
fn jpeg_download_flattens_alpha() {
    let upload = upload_png(100, 50, [255, 0, 0, 255]);
    let out = pad_bytes(&upload, AspectRatio::SQUARE, BorderColor::BLACK).unwrap();

    let download = out.encode(OutputFormat::jpeg_full_quality()).unwrap();
    assert_eq!(image::guess_format(&download).unwrap(), ImageFormat::Jpeg);
    let reopened = image::load_from_memory(&download).unwrap();
    assert_eq!((reopened.width(), reopened.height()), (100, 100));
}

#[test]
fn preview_shrinks_large_canvases_only() {
    let large = pad_bytes(
        &upload_png(1200, 600, [1, 2, 3, 255]),
        AspectRatio::SQUARE,
        BorderColor::WHITE,
    )
    .unwrap();
    let preview = large.preview();
    assert_eq!((preview.width(), preview.height()), (800, 800));

    let small = pad_bytes(
        &upload_png(400, 200, [1, 2, 3, 255]),
        AspectRatio::SQUARE,
        BorderColor::WHITE,
    )
    .unwrap();
    let preview = small.preview();
    assert_eq!((preview.width(), preview.height()), (400, 400));
}

#[test]
fn repeated_processing_is_identical() {
    let upload = upload_png(321, 123, [7, 8, 9, 255]);
    let a = pad_bytes(&upload, AspectRatio::WIDESCREEN, BorderColor::BLACK).unwrap();
    let b = pad_bytes(&upload, AspectRatio::WIDESCREEN, BorderColor::BLACK).unwrap();
    assert_eq!(a.plan, b.plan);
    assert_eq!(a.image, b.image);
}

#[test]
fn garbage_upload_reports_unsupported_format() {
    let err = pad_bytes(&[0u8; 64], AspectRatio::SQUARE, BorderColor::WHITE);
    assert!(matches!(err, Err(Error::UnsupportedFormat(_))));
}
