//! Lookup of numbered JPEG assets on disk.
//!
//! The asset directory is pre-seeded and read-only at runtime; an image id
//! maps to `<id>.jpg` by naming convention.

use std::path::{Path, PathBuf};

use crate::error::CaptionError;

/// Read-only store of source images, addressed as `<id>.jpg`
#[derive(Clone, Debug)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        AssetStore { root: root.into() }
    }

    /// File name an image id maps to, whether or not it exists
    pub fn file_name(image_id: i64) -> String {
        format!("{}.jpg", image_id)
    }

    /// Resolve an image id to an existing asset path
    pub fn resolve(&self, image_id: i64) -> Result<PathBuf, CaptionError> {
        let file_name = Self::file_name(image_id);
        let path = self.root.join(&file_name);
        if path.is_file() {
            Ok(path)
        } else {
            Err(CaptionError::AssetNotFound(file_name))
        }
    }

    /// Probe the pixel dimensions of an asset without fully decoding it
    pub fn dimensions(&self, path: &Path) -> Result<(u32, u32), CaptionError> {
        Ok(image::image_dimensions(path)?)
    }
}
