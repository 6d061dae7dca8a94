//! Image loading and export

use crate::io::error::{AbstractionError, Result};
use image::RgbImage;
use std::path::Path;

/// Load an image file and convert it to an 8-bit RGB buffer
///
/// Any format the `image` crate recognizes is accepted; alpha channels are
/// dropped during conversion since the engine works on 3-channel pixels.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded.
pub fn load_rgb_image<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| AbstractionError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    Ok(img.to_rgb8())
}

/// Save an RGB buffer to disk, creating parent directories as needed
///
/// The output format follows the path extension.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_rgb_image(buffer: &RgbImage, output_path: &str) -> Result<()> {
    if let Some(parent) = Path::new(output_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| AbstractionError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    buffer
        .save(output_path)
        .map_err(|e| AbstractionError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
