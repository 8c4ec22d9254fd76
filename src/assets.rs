//! Card image assets: manifest and batch loader.
//!
//! The manifest is an ordered mapping of logical names to image paths. Order
//! matters: texture assignment cycles through the loaded set by card index.
//! Loading is all-or-nothing — any failure abandons the whole batch, so the
//! engine either starts with every texture present or not at all.

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::WhorlError;

/// Number of images in the stock manifest.
pub const STOCK_COUNT: usize = 8;

/// A decoded card image ready for GPU upload.
pub struct CardImage {
    /// Logical name from the manifest.
    pub name: String,
    /// Decoded RGBA pixels.
    pub pixels: RgbaImage,
}

impl CardImage {
    /// Native aspect ratio (width / height) of the image.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.pixels.width() as f32 / self.pixels.height() as f32
    }
}

/// Ordered mapping of logical asset names to image file paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetManifest {
    entries: Vec<(String, PathBuf)>,
}

impl AssetManifest {
    /// Manifest of the eight stock card images inside `dir`
    /// (`card1` → `unsplash_1.jpg`, … `card8` → `unsplash_8.jpg`).
    #[must_use]
    pub fn stock(dir: &Path) -> Self {
        let entries = (1..=STOCK_COUNT)
            .map(|i| {
                (format!("card{i}"), dir.join(format!("unsplash_{i}.jpg")))
            })
            .collect();
        Self { entries }
    }

    /// Build a manifest from explicit name/path pairs.
    #[must_use]
    pub fn from_entries(entries: Vec<(String, PathBuf)>) -> Self {
        Self { entries }
    }

    /// The name/path pairs in manifest order.
    #[must_use]
    pub fn entries(&self) -> &[(String, PathBuf)] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decode every image in manifest order.
    ///
    /// # Errors
    ///
    /// Returns [`WhorlError::AssetLoad`] naming the first asset that fails;
    /// no partial result is produced.
    pub fn load(&self) -> Result<Vec<CardImage>, WhorlError> {
        self.entries
            .iter()
            .map(|(name, path)| {
                let decoded = image::open(path).map_err(|e| {
                    WhorlError::AssetLoad {
                        name: name.clone(),
                        message: e.to_string(),
                    }
                })?;
                let pixels = decoded.to_rgba8();
                log::debug!(
                    "loaded asset '{}' ({}x{})",
                    name,
                    pixels.width(),
                    pixels.height()
                );
                Ok(CardImage {
                    name: name.clone(),
                    pixels,
                })
            })
            .collect()
    }
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self::stock(Path::new("assets/images"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_manifest_has_eight_named_entries() {
        let manifest = AssetManifest::default();
        assert_eq!(manifest.len(), 8);
        for (i, (name, path)) in manifest.entries().iter().enumerate() {
            assert_eq!(name, &format!("card{}", i + 1));
            assert!(path.ends_with(format!("unsplash_{}.jpg", i + 1)));
        }
    }

    #[test]
    fn missing_file_fails_the_whole_batch() {
        let manifest = AssetManifest::from_entries(vec![(
            "card1".to_owned(),
            PathBuf::from("/nonexistent/nowhere.jpg"),
        )]);
        match manifest.load() {
            Err(WhorlError::AssetLoad { name, .. }) => {
                assert_eq!(name, "card1");
            }
            other => {
                assert!(other.is_err(), "expected an asset-load error");
            }
        }
    }

    #[test]
    fn loads_and_reports_aspect() {
        let dir = std::env::temp_dir();
        let path = dir.join("whorl_asset_test_4x2.png");
        let pixels = RgbaImage::from_pixel(4, 2, image::Rgba([9, 8, 7, 255]));
        pixels.save(&path).unwrap();

        let manifest = AssetManifest::from_entries(vec![(
            "tiny".to_owned(),
            path.clone(),
        )]);
        let loaded = manifest.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "tiny");
        assert_eq!(loaded[0].aspect(), 2.0);

        let _ = std::fs::remove_file(path);
    }
}
