use crate::error::AppError;
use crate::models::NotanConfig;
use crate::services::image_io;
use crate::services::sink::{FileSink, GallerySink};
use notan_tone::{
    grid_lines, GridLines, Image, ImageSink, PipelineState, Region, Stage, ToneError,
    ToneQuantizer,
};
use std::path::{Path, PathBuf};

/// One editing session: a [`PipelineState`] plus the settings that drive it.
///
/// Decoding and encoding run on tokio's blocking pool. Each transition
/// awaits its work to completion before touching the state, so dropping a
/// pending `select` or `save` future leaves the session as it was.
pub struct Session {
    state: PipelineState,
    config: NotanConfig,
}

impl Session {
    pub fn new(config: NotanConfig) -> Self {
        Self {
            state: PipelineState::new(),
            config,
        }
    }

    pub fn config(&self) -> &NotanConfig {
        &self.config
    }

    /// Replace the settings. Invalid settings are rejected and the old ones
    /// kept.
    pub fn set_config(&mut self, config: NotanConfig) -> Result<(), AppError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    pub fn stage(&self) -> Option<Stage> {
        self.state.stage()
    }

    pub fn current(&self) -> Option<&Image> {
        self.state.current()
    }

    /// Decode `path`, downscale it to the processing bound and make it
    /// current.
    pub async fn select(&mut self, path: impl AsRef<Path>) -> Result<(), AppError> {
        let path = path.as_ref().to_path_buf();
        let (max_width, max_height) = (
            self.config.processing.max_width,
            self.config.processing.max_height,
        );

        let image = tokio::task::spawn_blocking(move || {
            let decoded = image_io::decode(&path)?;
            image_io::resize(&decoded, max_width, max_height)
        })
        .await??;

        self.select_image(image);
        Ok(())
    }

    /// Make an already-decoded image current, as is.
    pub fn select_image(&mut self, image: Image) {
        tracing::info!(
            width = image.width(),
            height = image.height(),
            "Selected image"
        );
        self.state.select(image);
    }

    pub fn crop(&mut self, region: Region) -> Result<(), AppError> {
        self.state.crop(region)?;
        tracing::info!(
            x = region.x,
            y = region.y,
            width = region.width,
            height = region.height,
            "Cropped image"
        );
        Ok(())
    }

    /// Crop to the largest centered square.
    pub fn crop_square(&mut self) -> Result<(), AppError> {
        let current = self.state.current().ok_or(ToneError::NoImage)?;
        let region = Region::centered_square(current.width(), current.height());
        self.crop(region)
    }

    /// Quantize with the configured levels, contrast and curve.
    pub fn quantize(&mut self) -> Result<(), AppError> {
        let quantizer = self.config.quantizer()?;
        self.quantize_with(&quantizer)
    }

    pub fn quantize_with(&mut self, quantizer: &ToneQuantizer) -> Result<(), AppError> {
        self.state.apply(quantizer)?;
        tracing::info!(levels = quantizer.levels(), "Quantized image");
        Ok(())
    }

    /// Grid overlay for the current image shown `viewport_width` wide.
    pub fn grid(&self, viewport_width: f64) -> Result<GridLines, AppError> {
        let geometry = self.state.display_geometry(viewport_width)?;
        Ok(grid_lines(self.config.grid_spec()?, geometry))
    }

    /// Save the current image into the configured gallery directory.
    pub async fn save(&self) -> Result<PathBuf, AppError> {
        self.save_into(GallerySink::from_config(&self.config.output))
            .await
    }

    /// Save the current image to `path`, format from its extension.
    pub async fn save_to(&self, path: impl AsRef<Path>) -> Result<PathBuf, AppError> {
        let output = &self.config.output;
        self.save_into(FileSink::new(path.as_ref(), output.format, output.quality))
            .await
    }

    /// Current image with the configured grid burned in.
    pub fn preview(&self) -> Result<Image, AppError> {
        let current = self.state.current().ok_or(ToneError::NoImage)?;
        image_io::burn_grid(current, self.config.grid_spec()?)
    }

    /// Save [`preview`](Self::preview) into the gallery, named and placed
    /// like [`save`](Self::save). The session's current image is not touched.
    pub async fn save_preview(&self) -> Result<PathBuf, AppError> {
        let preview = self.preview()?;
        write_blocking(GallerySink::from_config(&self.config.output), preview).await
    }

    /// Save [`preview`](Self::preview) to `path`. The session's current
    /// image is not touched.
    pub async fn save_preview_to(&self, path: impl AsRef<Path>) -> Result<PathBuf, AppError> {
        let preview = self.preview()?;
        let output = &self.config.output;
        write_blocking(FileSink::new(path.as_ref(), output.format, output.quality), preview).await
    }

    async fn save_into<S>(&self, sink: S) -> Result<S::Receipt, AppError>
    where
        S: ImageSink<Error = AppError> + Send + 'static,
        S::Receipt: Send + 'static,
    {
        // The blocking task needs its own copy of the current image.
        let image = self.state.current().ok_or(ToneError::NoImage)?.clone();
        write_blocking(sink, image).await
    }

    pub fn reset(&mut self) {
        self.state.reset();
        tracing::debug!("Session reset");
    }
}

/// Run `sink.write` on the blocking pool, keeping the sink's own error.
async fn write_blocking<S>(sink: S, image: Image) -> Result<S::Receipt, AppError>
where
    S: ImageSink<Error = AppError> + Send + 'static,
    S::Receipt: Send + 'static,
{
    tokio::task::spawn_blocking(move || sink.write(&image)).await?
}

impl Default for Session {
    fn default() -> Self {
        Self::new(NotanConfig::default())
    }
}
