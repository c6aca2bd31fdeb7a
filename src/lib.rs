//! Notanizer
//!
//! Turns photos into Notan value studies with a composition grid.
//! The tone and grid algorithms live in the `notan-tone` crate; this crate
//! adds file I/O, configuration and the async editing session, and exposes
//! its modules for integration testing.

pub mod error;
pub mod models;
pub mod services;

pub use error::AppError;
pub use models::NotanConfig;
pub use services::Session;
