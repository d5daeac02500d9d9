//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and the fixed wording of the rewrite so a rename only requires
//! changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "retouch";

/// Crate version, as reported by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename (e.g. `.retouch.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".retouch.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "retouch";

/// Input that ends the session (compared case-insensitively).
pub const SENTINEL: &str = "quit";

/// Infix placed between the base name and the counter of an output file.
pub const MODIFIED_INFIX: &str = "_modified_";

/// Extension used when the input filename has none.
pub const DEFAULT_EXTENSION: &str = ".txt";

/// How many raw bytes are read when a file turns out not to be text.
pub const BINARY_PEEK_BYTES: usize = 100;

/// How many of the peeked bytes are shown to the user.
pub const BINARY_SHOWN_BYTES: usize = 10;

/// Marker appended to preview lines that were cut short.
pub const ELLIPSIS: &str = "...";

/// Name of the demo file offered at startup.
pub const SAMPLE_FILENAME: &str = "sample.txt";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_LOG: &str = "RETOUCH_LOG";
pub const ENV_PREVIEW_LINES: &str = "RETOUCH_PREVIEW_LINES";
pub const ENV_PREVIEW_WIDTH: &str = "RETOUCH_PREVIEW_WIDTH";
pub const ENV_SUGGEST_CUTOFF: &str = "RETOUCH_SUGGEST_CUTOFF";
