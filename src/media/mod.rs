// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding into Iced handles.

use crate::error::{Error, Result};
use iced::widget::image;
use iced::Size;
use image_rs::GenericImageView;
use std::path::{Path, PathBuf};

/// File extensions accepted by the open dialog and the drop handler.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "tiff", "tif", "webp", "bmp", "ico",
];

/// Returns whether the path has a supported image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// A decoded image: a renderer handle plus its natural dimensions.
///
/// The natural dimensions are known exactly from the decoder, so
/// cached geometry never sees a zero-sized hidden element.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// Natural size of the image in pixels, as float geometry.
    #[must_use]
    pub fn natural_size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

/// Loads and decodes an image from disk.
pub fn load_image(path: &Path) -> Result<ImageData> {
    if !path.exists() {
        return Err(Error::Io(format!("file not found: {}", path.display())));
    }

    let img = image_rs::open(path)?;
    let (width, height) = img.dimensions();
    let rgba = img.to_rgba8();

    Ok(ImageData::from_rgba(width, height, rgba.into_vec()))
}

/// Loads an image on the blocking thread pool, keeping the UI loop
/// responsive while large files decode.
pub async fn load_image_async(path: PathBuf) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || load_image(&path))
        .await
        .map_err(|e| Error::Io(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn supported_extensions_are_case_insensitive() {
        assert!(is_supported_image(Path::new("photo.PNG")));
        assert!(is_supported_image(Path::new("photo.jpeg")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }

    #[test]
    fn from_rgba_keeps_dimensions() {
        let data = ImageData::from_rgba(4, 2, vec![255; 4 * 2 * 4]);
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
        assert_eq!(data.natural_size(), Size::new(4.0, 2.0));
    }

    #[test]
    fn load_image_decodes_a_png() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("sample.png");
        let buffer = image_rs::RgbaImage::from_pixel(8, 6, image_rs::Rgba([10, 20, 30, 255]));
        buffer.save(&path).expect("failed to write test png");

        let data = load_image(&path).expect("failed to load png");
        assert_eq!(data.width, 8);
        assert_eq!(data.height, 6);
    }

    #[test]
    fn load_image_reports_missing_file() {
        let err = load_image(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
