//! Configuration loading and layering.
//!
//! Handles `.retouch.toml` loading, an explicit `--config` file, and
//! environment variable overrides with proper priority ordering.

pub mod loader;

pub use loader::{Config, ConfigError, PreviewConfig, SuggestConfig, TransformConfig};
