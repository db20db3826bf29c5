use std::path::Path;

use image::{ImageFormat, RgbImage};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{ColoringError, Result},
    types::ColoringPage,
};

/// Output encodings a page can be saved as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SaveFormat {
    Png,
    Jpeg,
}

impl From<SaveFormat> for ImageFormat {
    fn from(format: SaveFormat) -> Self {
        match format {
            SaveFormat::Png => ImageFormat::Png,
            SaveFormat::Jpeg => ImageFormat::Jpeg,
        }
    }
}

/// Load a source photo from file. Decode problems surface as `LoadFailed`.
pub fn load_photo<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let img = image::open(path).map_err(ColoringError::LoadFailed)?;
    Ok(img.to_rgb8())
}

/// Load a source photo from in-memory encoded bytes.
pub fn load_photo_from_bytes(bytes: &[u8]) -> Result<RgbImage> {
    let img = image::load_from_memory(bytes).map_err(ColoringError::LoadFailed)?;
    Ok(img.to_rgb8())
}

/// Save a page to file in the given format. Encode or IO problems surface as
/// `WriteFailed`; the page itself is untouched either way.
pub fn save_page<P: AsRef<Path>>(page: &ColoringPage, path: P, format: SaveFormat) -> Result<()> {
    page.image()
        .save_with_format(path.as_ref(), format.into())
        .map_err(|source| ColoringError::WriteFailed {
            path: path.as_ref().to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_bytes_roundtrip() {
        let page = ColoringPage::blank(8, 6);
        let mut bytes = Vec::new();
        page.image()
            .write_to(&mut std::io::Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();

        let loaded = load_photo_from_bytes(&bytes).unwrap();
        assert_eq!(&loaded, page.image());
    }

    #[test]
    fn test_load_garbage_is_load_failed() {
        let err = load_photo_from_bytes(b"not an image");
        assert!(matches!(err, Err(ColoringError::LoadFailed(_))));
    }

    #[test]
    fn test_save_to_unwritable_path_is_write_failed() {
        let page = ColoringPage::blank(4, 4);
        let err = save_page(&page, "/nonexistent-dir/page.png", SaveFormat::Png);
        assert!(matches!(err, Err(ColoringError::WriteFailed { .. })));
    }
}
