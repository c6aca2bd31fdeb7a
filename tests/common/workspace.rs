//! Scratch directory with input photos, config and a gallery.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use notan_tone::Image;
use notanizer::models::{NotanConfig, OutputFormat};
use notanizer::services::{image_io, Session};

use super::fixtures;

/// Temporary workspace; everything is removed on drop
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn gallery(&self) -> PathBuf {
        self.dir.path().join("gallery")
    }

    /// Write `image` as a PNG named `name` and return its path
    pub fn write_png(&self, name: &str, image: &Image) -> PathBuf {
        let path = self.dir.path().join(name);
        image_io::encode(image, OutputFormat::Png, 100, &path).expect("Failed to write fixture");
        path
    }

    /// The standard 600x400 gradient photo
    pub fn photo(&self) -> PathBuf {
        self.write_png(
            "photo.png",
            &fixtures::gradient(fixtures::PHOTO_WIDTH, fixtures::PHOTO_HEIGHT),
        )
    }

    /// Default config saving PNGs into this workspace's gallery
    pub fn config(&self) -> NotanConfig {
        let mut config = NotanConfig::default();
        config.output.directory = self.gallery();
        config.output.format = OutputFormat::Png;
        config
    }

    pub fn session(&self) -> Session {
        Session::new(self.config())
    }

    /// Files currently in the gallery, sorted
    pub fn gallery_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = match std::fs::read_dir(self.gallery()) {
            Ok(entries) => entries.filter_map(|e| e.ok().map(|e| e.path())).collect(),
            Err(_) => Vec::new(),
        };
        files.sort();
        files
    }
}
