// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Album manifest — the JSON description of an album's text and photos.

use std::path::{Path, PathBuf};

use memorybook_core::AlbumDetails;
use memorybook_core::error::{MemoryBookError, Result};
use memorybook_document::{Album, Photo};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One photo and its caption. Relative paths are resolved against the
/// manifest's directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoSpec {
    pub path: PathBuf,
    #[serde(default)]
    pub caption: String,
}

/// ```json
/// {
///   "title": "Our Story",
///   "from": "Sam",
///   "to": "Alex",
///   "closing": "Here's to many more",
///   "photos": [{ "path": "beach.jpg", "caption": "Day one" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub closing: Option<String>,
    pub photos: Vec<PhotoSpec>,
    /// Directory relative photo paths are resolved against.
    #[serde(skip)]
    base_dir: PathBuf,
}

impl Manifest {
    /// Read and validate a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let mut manifest = Self::parse(&raw)?;
        manifest.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        debug!(photos = manifest.photos.len(), "Manifest loaded");
        Ok(manifest)
    }

    /// Parse a manifest from JSON text. Relative paths resolve against the
    /// current directory.
    pub fn parse(raw: &str) -> Result<Self> {
        let manifest: Self = serde_json::from_str(raw)?;
        if manifest.photos.is_empty() {
            return Err(MemoryBookError::EmptyAlbum);
        }
        if let Some(index) = manifest
            .photos
            .iter()
            .position(|photo| photo.path.as_os_str().is_empty())
        {
            return Err(MemoryBookError::Manifest(format!(
                "photo {} has an empty path",
                index + 1
            )));
        }
        Ok(manifest)
    }

    pub fn details(&self) -> AlbumDetails {
        AlbumDetails {
            title: self.title.clone(),
            from_name: self.from.clone(),
            to_name: self.to.clone(),
            closing_message: self.closing.clone(),
        }
    }

    /// Full path of each photo, in album order.
    pub fn photo_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.photos.iter().map(|photo| self.base_dir.join(&photo.path))
    }

    /// Decode every photo, one after another, into an album.
    pub fn load_album(&self) -> Result<Album> {
        let mut album = Album::new(self.details());
        for (entry, path) in self.photos.iter().zip(self.photo_paths()) {
            album.push(Photo::open(&path)?, entry.caption.clone());
        }
        info!(photos = album.len(), "Album photos loaded");
        Ok(album)
    }

    /// Intrinsic pixel size and caption of each photo, read from the image
    /// headers without decoding the pixels.
    pub fn photo_dimensions(&self) -> Result<Vec<((u32, u32), &str)>> {
        self.photos
            .iter()
            .zip(self.photo_paths())
            .map(|(entry, path)| {
                let dimensions = image::image_dimensions(&path).map_err(|err| {
                    MemoryBookError::ImageError(format!("failed to read {}: {}", path.display(), err))
                })?;
                Ok((dimensions, entry.caption.as_str()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

    use super::*;

    fn write_png(path: &Path, width: u32, height: u32) {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([10, 20, 30])))
            .save_with_format(path, ImageFormat::Png)
            .unwrap();
    }

    #[test]
    fn parses_minimal_manifest() {
        let manifest = Manifest::parse(r#"{ "photos": [{ "path": "a.jpg" }] }"#).unwrap();
        assert_eq!(manifest.title, "");
        assert_eq!(manifest.photos[0].caption, "");
        assert_eq!(manifest.details().closing_message, None);
    }

    #[test]
    fn no_photos_is_empty_album() {
        let err = Manifest::parse(r#"{ "title": "x", "photos": [] }"#).unwrap_err();
        assert!(matches!(err, MemoryBookError::EmptyAlbum));
    }

    #[test]
    fn empty_photo_path_is_rejected() {
        let err = Manifest::parse(r#"{ "photos": [{ "path": "a.png" }, { "path": "" }] }"#)
            .unwrap_err();
        assert!(matches!(err, MemoryBookError::Manifest(msg) if msg.contains("photo 2")));
    }

    #[test]
    fn relative_paths_resolve_against_manifest_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("album.json");
        std::fs::write(&path, r#"{ "photos": [{ "path": "pics/one.png" }] }"#).unwrap();

        let manifest = Manifest::load(&path).unwrap();
        let paths: Vec<PathBuf> = manifest.photo_paths().collect();
        assert_eq!(paths, vec![dir.path().join("pics/one.png")]);
    }

    #[test]
    fn loads_photos_in_order() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("wide.png"), 40, 30);
        write_png(&dir.path().join("tall.png"), 30, 40);
        let path = dir.path().join("album.json");
        std::fs::write(
            &path,
            r#"{
                "title": "Trip",
                "from": "Sam",
                "to": "Alex",
                "photos": [
                    { "path": "wide.png", "caption": "first" },
                    { "path": "tall.png", "caption": "second" }
                ]
            }"#,
        )
        .unwrap();

        let manifest = Manifest::load(&path).unwrap();
        let album = manifest.load_album().unwrap();
        assert_eq!(album.entries[0].photo.dimensions(), (40, 30));
        assert_eq!(album.entries[1].caption, "second");

        let dims = manifest.photo_dimensions().unwrap();
        assert_eq!(dims, vec![((40, 30), "first"), ((30, 40), "second")]);
    }

    #[test]
    fn missing_photo_is_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("album.json");
        std::fs::write(&path, r#"{ "photos": [{ "path": "nope.png" }] }"#).unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert!(matches!(manifest.load_album(), Err(MemoryBookError::ImageError(_))));
        assert!(matches!(manifest.photo_dimensions(), Err(MemoryBookError::ImageError(_))));
    }
}
