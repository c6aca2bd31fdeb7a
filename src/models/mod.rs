pub mod config;

pub use config::{
    GridConfig, NotanConfig, OutputConfig, OutputFormat, ProcessingConfig, ToneConfig,
    DEFAULT_CONFIG_FILE, SUPPORTED_LEVELS,
};
