// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Photo decoding and print preparation using the `image` crate.

use image::{DynamicImage, RgbImage};
use memorybook_core::error::MemoryBookError;
use tracing::{debug, info, instrument};

/// A decoded photo ready for placement in an album.
///
/// Exposes the intrinsic pixel dimensions the page geometry is computed from,
/// and converts to the RGB buffer embedded in the PDF.
#[derive(Debug, Clone)]
pub struct Photo {
    image: DynamicImage,
}

impl Photo {
    // -- Construction ---------------------------------------------------------

    /// Load a photo from a file path.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, MemoryBookError> {
        let img = image::open(path.as_ref()).map_err(|err| {
            MemoryBookError::ImageError(format!(
                "failed to open {}: {}",
                path.as_ref().display(),
                err
            ))
        })?;
        info!(width = img.width(), height = img.height(), "Photo loaded");
        Ok(Self { image: img })
    }

    /// Decode a photo from raw encoded bytes (JPEG, PNG).
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self, MemoryBookError> {
        let img = image::load_from_memory(data).map_err(|err| {
            MemoryBookError::ImageError(format!("failed to decode photo: {}", err))
        })?;
        debug!(
            width = img.width(),
            height = img.height(),
            "Photo decoded from bytes"
        );
        Ok(Self { image: img })
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    /// Intrinsic width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Intrinsic height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    // -- Output ---------------------------------------------------------------

    /// RGB pixels for embedding, downscaled with Lanczos3 so the long edge is
    /// at most `max_edge` pixels. Smaller photos keep their size.
    pub fn to_rgb8_within(&self, max_edge: u32) -> RgbImage {
        let long_edge = self.width().max(self.height());
        if max_edge == 0 || long_edge <= max_edge {
            return self.image.to_rgb8();
        }

        info!(
            from_w = self.width(),
            from_h = self.height(),
            max_edge,
            "Downscaling photo for embedding"
        );
        self.image
            .resize(max_edge, max_edge, image::imageops::FilterType::Lanczos3)
            .to_rgb8()
    }
}

#[cfg(test)]
mod tests {
    use image::{ImageFormat, Rgb};

    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([200, 40, 80]));
        let mut buffer = std::io::Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut buffer, ImageFormat::Png)
            .unwrap();
        buffer.into_inner()
    }

    #[test]
    fn decodes_png_dimensions() {
        let photo = Photo::from_bytes(&png_bytes(40, 30)).unwrap();
        assert_eq!(photo.dimensions(), (40, 30));
    }

    #[test]
    fn garbage_bytes_are_image_error() {
        let err = Photo::from_bytes(b"definitely not a photo").unwrap_err();
        assert!(matches!(err, MemoryBookError::ImageError(_)));
    }

    #[test]
    fn missing_file_is_image_error() {
        let err = Photo::open("/nonexistent/photo.jpg").unwrap_err();
        assert!(matches!(err, MemoryBookError::ImageError(_)));
    }

    #[test]
    fn large_photos_are_downscaled_preserving_aspect() {
        let photo = Photo::from_dynamic(DynamicImage::ImageRgb8(RgbImage::new(400, 200)));
        let rgb = photo.to_rgb8_within(100);
        assert_eq!(rgb.dimensions(), (100, 50));
    }

    #[test]
    fn small_photos_keep_their_size() {
        let photo = Photo::from_dynamic(DynamicImage::ImageRgb8(RgbImage::new(80, 60)));
        assert_eq!(photo.to_rgb8_within(100).dimensions(), (80, 60));
        assert_eq!(photo.to_rgb8_within(0).dimensions(), (80, 60));
    }
}
