//! Header image loading with an in-place fallback.

use std::path::Path;

use eframe::egui::ColorImage;

use crate::error::{AppError, Result};

/// What the header area draws.
pub enum Header {
    /// Decoded image, scaled to fill the header area.
    Image(ColorImage),
    /// Text drawn instead of the image.
    Fallback(String),
}

impl Header {
    /// Load the header image. Any failure turns into fallback text.
    pub fn load(path: &Path, display_name: &str) -> Self {
        match load_image(path) {
            Ok(image) => {
                tracing::info!("Header image loaded: {:?} ({}x{})", path, image.size[0], image.size[1]);
                Header::Image(image)
            }
            Err(e) => {
                tracing::warn!("Header image unavailable: {}", e);
                Header::Fallback(fallback_message(display_name))
            }
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Header::Fallback(_))
    }
}

/// Text shown when the header image cannot be loaded.
pub fn fallback_message(display_name: &str) -> String {
    format!("Error: Image '{}' not found.", display_name)
}

/// Read and decode an image file into RGBA pixels.
pub fn load_image(path: &Path) -> Result<ColorImage> {
    let bytes = std::fs::read(path).map_err(|source| AppError::ImageRead {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = image::load_from_memory(&bytes).map_err(|source| AppError::ImageDecode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
