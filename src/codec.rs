//! Image byte decoding and output encoding.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GenericImageView, ImageFormat, RgbaImage};
use log::debug;

use crate::error::Error;

/// Output encoding for the download action.
///
/// PNG is the lossless default. JPEG is offered for full-quality
/// downloads; it has no alpha channel, so the canvas is flattened to
/// RGB when encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Lossless PNG.
    Png,
    /// JPEG at the given quality (1–100).
    Jpeg {
        /// Encoder quality, 1–100.
        quality: u8,
    },
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Png
    }
}

impl OutputFormat {
    /// JPEG at quality 100.
    pub const fn jpeg_full_quality() -> Self {
        Self::Jpeg { quality: 100 }
    }

    /// MIME type of the encoded bytes.
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg { .. } => "image/jpeg",
        }
    }

    /// File extension, without the dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg { .. } => "jpg",
        }
    }
}

/// Decode uploaded bytes into pixels.
///
/// The format is sniffed from the bytes; anything the `image` crate can
/// read is accepted. Fails with [`Error::UnsupportedFormat`] otherwise.
pub fn decode(data: &[u8]) -> Result<DynamicImage, Error> {
    let image = image::load_from_memory(data).map_err(Error::UnsupportedFormat)?;
    debug!(
        "decoded {}x{} from {} bytes",
        image.width(),
        image.height(),
        data.len()
    );
    Ok(image)
}

/// Encode a padded canvas for download.
pub fn encode(image: &RgbaImage, format: OutputFormat) -> Result<Vec<u8>, Error> {
    let mut data = Vec::new();
    match format {
        OutputFormat::Png => {
            image
                .write_to(&mut Cursor::new(&mut data), ImageFormat::Png)
                .map_err(Error::Encode)?;
        }
        OutputFormat::Jpeg { quality } => {
            let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
            rgb.write_with_encoder(JpegEncoder::new_with_quality(
                &mut Cursor::new(&mut data),
                quality,
            ))
            .map_err(Error::Encode)?;
        }
    }
    debug!("encoded {} as {}", data.len(), format.content_type());
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn canvas() -> RgbaImage {
        RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255]))
    }

    #[test]
    fn png_bytes_decode_back() {
        let data = encode(&canvas(), OutputFormat::Png).unwrap();
        assert_eq!(image::guess_format(&data).unwrap(), ImageFormat::Png);
        let back = decode(&data).unwrap();
        assert_eq!((back.width(), back.height()), (3, 2));
        assert_eq!(back.to_rgba8().get_pixel(0, 0), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn jpeg_bytes_are_jpeg() {
        let data = encode(&canvas(), OutputFormat::jpeg_full_quality()).unwrap();
        assert_eq!(image::guess_format(&data).unwrap(), ImageFormat::Jpeg);
        let back = decode(&data).unwrap();
        assert_eq!((back.width(), back.height()), (3, 2));
    }

    #[test]
    fn undecodable_bytes_are_rejected() {
        let err = decode(b"definitely not an image");
        assert!(matches!(err, Err(Error::UnsupportedFormat(_))));
        assert!(matches!(decode(&[]), Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn format_metadata() {
        assert_eq!(OutputFormat::default(), OutputFormat::Png);
        assert_eq!(OutputFormat::Png.content_type(), "image/png");
        assert_eq!(OutputFormat::Png.extension(), "png");
        assert_eq!(OutputFormat::jpeg_full_quality().content_type(), "image/jpeg");
        assert_eq!(OutputFormat::jpeg_full_quality().extension(), "jpg");
    }
}
