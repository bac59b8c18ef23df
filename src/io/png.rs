use std::path::Path;

use image::{ImageError, RgbaImage};

use crate::render::PixelBuffer;

/// Enregistre un tampon RGBA au format PNG.
///
/// Avec image 0.25, save() détecte automatiquement le format depuis
/// l'extension.
pub fn save_png(buffer: PixelBuffer, output: &Path) -> Result<(), ImageError> {
    let width = buffer.width();
    let height = buffer.height();

    let img = RgbaImage::from_raw(width, height, buffer.into_bytes()).ok_or_else(|| {
        ImageError::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "Impossible de créer l'image depuis le tampon",
        ))
    })?;

    img.save(output)
}
