use crate::error::AppError;
use notan_tone::{Contrast, CurveKind, GridSpec, ToneError, ToneQuantizer, DEFAULT_GAIN};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Config file used when `CONFIG_FILE` is not set
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Level counts offered to the user
pub const SUPPORTED_LEVELS: [usize; 3] = [2, 3, 4];

/// Application configuration loaded from config.yaml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NotanConfig {
    #[serde(default)]
    pub grid: GridConfig,

    #[serde(default)]
    pub tone: ToneConfig,

    #[serde(default)]
    pub processing: ProcessingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Composition grid drawn over the image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_divisions")]
    pub rows: u32,

    #[serde(default = "default_divisions")]
    pub cols: u32,
}

fn default_divisions() -> u32 {
    3
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: default_divisions(),
            cols: default_divisions(),
        }
    }
}

/// Tone reduction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneConfig {
    /// Number of output tones: 2, 3 or 4
    #[serde(default = "default_levels")]
    pub levels: usize,

    /// Contrast slider, 0.0..=1.0, 0.5 is neutral
    #[serde(default = "default_contrast")]
    pub contrast: f32,

    /// "linear" or "sigmoid"
    #[serde(default = "default_curve")]
    pub curve: String,

    /// How hard the curve pulls band boundaries at full contrast
    #[serde(default = "default_gain")]
    pub gain: f32,
}

fn default_levels() -> usize {
    2
}

fn default_contrast() -> f32 {
    0.5
}

fn default_curve() -> String {
    CurveKind::default().to_string()
}

fn default_gain() -> f32 {
    DEFAULT_GAIN
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            levels: default_levels(),
            contrast: default_contrast(),
            curve: default_curve(),
            gain: default_gain(),
        }
    }
}

/// Pre-quantization downscale bound
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    #[serde(default = "default_max_side")]
    pub max_width: u32,

    #[serde(default = "default_max_side")]
    pub max_height: u32,
}

fn default_max_side() -> u32 {
    300
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            max_width: default_max_side(),
            max_height: default_max_side(),
        }
    }
}

/// Encoded file format for saved images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Png,
    #[default]
    #[serde(alias = "jpg")]
    Jpeg,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
        }
    }

    /// Guess from a file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(OutputFormat::Png),
            "jpg" | "jpeg" => Some(OutputFormat::Jpeg),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpeg",
        })
    }
}

/// Where and how saved images are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    #[serde(default)]
    pub format: OutputFormat,

    /// JPEG quality, 1..=100 (ignored for PNG)
    #[serde(default = "default_quality")]
    pub quality: u8,
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_quality() -> u8 {
    90
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            format: OutputFormat::default(),
            quality: default_quality(),
        }
    }
}

impl NotanConfig {
    /// Path named by `CONFIG_FILE`, or `config.yaml` in the working directory
    pub fn path_from_env() -> PathBuf {
        std::env::var("CONFIG_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.display(),
            levels = config.tone.levels,
            contrast = config.tone.contrast,
            rows = config.grid.rows,
            cols = config.grid.cols,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Like [`load`](Self::load), but never fails: a missing file silently
    /// yields defaults, an unreadable or invalid one logs a warning first.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, AppError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        GridSpec::new(self.grid.rows, self.grid.cols)
            .map_err(|e| AppError::Config(e.to_string()))?;
        if !SUPPORTED_LEVELS.contains(&self.tone.levels) {
            return Err(AppError::Config(format!(
                "levels must be 2, 3 or 4, got {}",
                self.tone.levels
            )));
        }
        Contrast::new(self.tone.contrast).map_err(|e| AppError::Config(e.to_string()))?;
        self.curve_kind()?;
        if !self.tone.gain.is_finite() || self.tone.gain < 0.0 {
            return Err(AppError::Config(format!(
                "gain must be a non-negative number, got {}",
                self.tone.gain
            )));
        }
        if self.processing.max_width == 0 || self.processing.max_height == 0 {
            return Err(AppError::Config(
                "processing bounds must be positive".to_string(),
            ));
        }
        if !(1..=100).contains(&self.output.quality) {
            return Err(AppError::Config(format!(
                "quality must be 1..=100, got {}",
                self.output.quality
            )));
        }
        Ok(())
    }

    pub fn curve_kind(&self) -> Result<CurveKind, AppError> {
        self.tone
            .curve
            .parse()
            .map_err(|e: ToneError| AppError::Config(e.to_string()))
    }

    pub fn grid_spec(&self) -> Result<GridSpec, AppError> {
        Ok(GridSpec::new(self.grid.rows, self.grid.cols)?)
    }

    /// Quantizer for the configured levels, contrast and curve.
    pub fn quantizer(&self) -> Result<ToneQuantizer, AppError> {
        let curve = self.curve_kind()?.build(self.tone.gain);
        Ok(ToneQuantizer::new(self.tone.levels)?
            .boxed_curve(curve)
            .contrast(Contrast::new(self.tone.contrast)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = NotanConfig::default();

        assert_eq!(config.grid.rows, 3);
        assert_eq!(config.grid.cols, 3);
        assert_eq!(config.tone.levels, 2);
        assert_eq!(config.tone.contrast, 0.5);
        assert_eq!(config.tone.curve, "linear");
        assert_eq!(config.processing.max_width, 300);
        assert_eq!(config.output.format, OutputFormat::Jpeg);
        assert_eq!(config.output.quality, 90);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
grid:
  rows: 4
  cols: 6
tone:
  levels: 3
  contrast: 0.8
  curve: sigmoid
output:
  directory: /tmp/notan
  format: png
"#;

        let config = NotanConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.grid, GridConfig { rows: 4, cols: 6 });
        assert_eq!(config.tone.levels, 3);
        assert_eq!(config.tone.contrast, 0.8);
        assert_eq!(config.curve_kind().unwrap(), CurveKind::Sigmoid);
        assert_eq!(config.tone.gain, DEFAULT_GAIN);
        assert_eq!(config.processing, ProcessingConfig::default());
        assert_eq!(config.output.directory, PathBuf::from("/tmp/notan"));
        assert_eq!(config.output.format, OutputFormat::Png);
        assert_eq!(config.output.quality, 90);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(NotanConfig::from_yaml("{}").unwrap(), NotanConfig::default());
    }

    #[test]
    fn test_jpg_alias() {
        let config = NotanConfig::from_yaml("output:\n  format: jpg\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Jpeg);
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut config = NotanConfig::default();
        config.grid.rows = 60;
        config.tone.levels = 4;
        config.tone.contrast = 0.0;
        config.output.format = OutputFormat::Png;

        let yaml = config.to_yaml().unwrap();
        assert_eq!(NotanConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let cases = [
            "grid: {rows: 0}",
            "grid: {cols: 61}",
            "tone: {levels: 5}",
            "tone: {levels: 1}",
            "tone: {contrast: 1.5}",
            "tone: {contrast: -0.1}",
            "tone: {curve: cubic}",
            "tone: {gain: -1.0}",
            "processing: {max_width: 0}",
            "output: {quality: 0}",
            "output: {quality: 101}",
        ];
        for yaml in cases {
            match NotanConfig::from_yaml(yaml) {
                Err(AppError::Config(_)) => {}
                other => panic!("{yaml}: expected Config error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_grid_bounds_accepted() {
        assert!(NotanConfig::from_yaml("grid: {rows: 1, cols: 60}").is_ok());
    }

    #[test]
    fn test_quantizer_follows_config() {
        let config = NotanConfig::from_yaml("tone: {levels: 4, contrast: 0.5}").unwrap();
        let q = config.quantizer().unwrap();
        assert_eq!(q.levels(), 4);
        assert_eq!(q.thresholds().as_slice(), &[0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_output_format_from_path() {
        assert_eq!(
            OutputFormat::from_path(Path::new("a/b.PNG")),
            Some(OutputFormat::Png)
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("x.jpeg")),
            Some(OutputFormat::Jpeg)
        );
        assert_eq!(OutputFormat::from_path(Path::new("x.gif")), None);
        assert_eq!(OutputFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = NotanConfig::load_or_default(Path::new("/nonexistent/notan/config.yaml"));
        assert_eq!(config, NotanConfig::default());
    }

    #[test]
    fn test_load_reports_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "tone:\n  levels: 9\n").unwrap();

        assert!(matches!(NotanConfig::load(&path), Err(AppError::Config(_))));
        assert_eq!(NotanConfig::load_or_default(&path), NotanConfig::default());
    }
}
