//! Thin transport-format wrappers around the finished pixel buffer.
//!
//! The render pipeline produces an abstract buffer; these helpers turn it
//! into bytes a caller can ship. They guarantee nothing beyond what the
//! codec guarantees; format negotiation belongs to the caller.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, RgbImage};

use crate::error::Result;

/// Encode the buffer as JPEG at the given quality (0..=100).
pub fn to_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality).encode_image(image)?;
    Ok(bytes)
}

/// Encode the buffer as PNG.
pub fn to_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    image.write_to(&mut cursor, ImageFormat::Png)?;
    Ok(cursor.into_inner())
}

/// Encode the buffer as an inline `data:image/jpeg;base64,…` URI.
pub fn to_data_uri(image: &RgbImage, quality: u8) -> Result<String> {
    use base64::Engine;

    let bytes = to_jpeg(image, quality)?;
    Ok(format!(
        "data:image/jpeg;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_buffer() -> RgbImage {
        RgbImage::from_fn(32, 16, |x, y| image::Rgb([x as u8 * 8, y as u8 * 16, 128]))
    }

    #[test]
    fn test_jpeg_output_carries_magic_prefix() {
        let bytes = to_jpeg(&sample_buffer(), 90).unwrap();
        assert!(bytes.len() > 2);
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_png_output_carries_magic_prefix() {
        let bytes = to_png(&sample_buffer()).unwrap();
        assert!(bytes.len() > 8);
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_data_uri_prefix_and_payload() {
        let uri = to_data_uri(&sample_buffer(), 100).unwrap();
        assert!(uri.starts_with("data:image/jpeg;base64,"));
        assert!(uri.len() > "data:image/jpeg;base64,".len());
    }

    #[test]
    fn test_jpeg_quality_changes_payload_size() {
        let buffer = sample_buffer();
        let high = to_jpeg(&buffer, 100).unwrap();
        let low = to_jpeg(&buffer, 10).unwrap();
        assert!(low.len() < high.len());
    }
}
