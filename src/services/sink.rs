use crate::error::AppError;
use crate::models::{OutputConfig, OutputFormat};
use crate::services::image_io;
use notan_tone::{Image, ImageSink};
use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Prefix of every file written by [`GallerySink`]
pub const GALLERY_PREFIX: &str = "edited_image_";

/// Saves into a directory as `edited_image_<unix millis>.<ext>`
#[derive(Debug, Clone)]
pub struct GallerySink {
    directory: PathBuf,
    format: OutputFormat,
    quality: u8,
}

impl GallerySink {
    pub fn new(directory: impl Into<PathBuf>, format: OutputFormat, quality: u8) -> Self {
        Self {
            directory: directory.into(),
            format,
            quality,
        }
    }

    pub fn from_config(output: &OutputConfig) -> Self {
        Self::new(&output.directory, output.format, output.quality)
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn file_name(&self, millis: i64) -> String {
        format!("{GALLERY_PREFIX}{millis}.{}", self.format.extension())
    }

    /// Create the first free file at or after `millis`. The name is claimed
    /// with `create_new`, so concurrent writers never share a file.
    fn create_unique(&self, mut millis: i64) -> std::io::Result<(File, PathBuf)> {
        loop {
            let path = self.directory.join(self.file_name(millis));
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((file, path)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => millis += 1,
                Err(e) => return Err(e),
            }
        }
    }
}

impl ImageSink for GallerySink {
    type Receipt = PathBuf;
    type Error = AppError;

    fn write(&self, image: &Image) -> Result<PathBuf, AppError> {
        std::fs::create_dir_all(&self.directory)?;
        let (file, path) = self.create_unique(chrono::Utc::now().timestamp_millis())?;
        if let Err(e) = image_io::encode_to_file(image, self.format, self.quality, file, &path) {
            // leave no half-written entry behind in the gallery
            let _ = std::fs::remove_file(&path);
            return Err(e);
        }
        tracing::info!(path = %path.display(), "Saved image to gallery");
        Ok(path)
    }
}

/// Saves to one fixed path, format taken from its extension when possible
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
    format: OutputFormat,
    quality: u8,
}

impl FileSink {
    /// `fallback` is used when the extension names no known format.
    pub fn new(path: impl Into<PathBuf>, fallback: OutputFormat, quality: u8) -> Self {
        let path = path.into();
        let format = OutputFormat::from_path(&path).unwrap_or(fallback);
        Self {
            path,
            format,
            quality,
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

impl ImageSink for FileSink {
    type Receipt = PathBuf;
    type Error = AppError;

    fn write(&self, image: &Image) -> Result<PathBuf, AppError> {
        image_io::encode(image, self.format, self.quality, &self.path)?;
        tracing::info!(path = %self.path.display(), "Saved image");
        Ok(self.path.clone())
    }
}
