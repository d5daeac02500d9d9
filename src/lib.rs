//! retouch — interactive file rewrite CLI (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod cancel;
pub mod config;
pub mod constants;
pub mod env;
pub mod files;
pub mod logging;
pub mod models;
pub mod naming;
pub mod output;
pub mod sample;
pub mod session;
pub mod suggest;
pub mod transform;
