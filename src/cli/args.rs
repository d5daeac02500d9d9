//! Clap argument types.

use clap::Parser;
use std::path::PathBuf;

use retouch::session::SampleMode;

/// Read a file, rewrite it, and save the result under a fresh name.
#[derive(Parser, Debug)]
#[command(
    name = retouch::constants::APP_NAME,
    version = retouch::constants::VERSION,
    about = super::BANNER_STYLED,
)]
pub struct Cli {
    /// Working directory: filenames, outputs and suggestions are resolved here.
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Extra config file, applied over `.retouch.toml` and the global config.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Create `sample.txt` before the first prompt without asking.
    #[arg(long, default_value_t = false, conflicts_with = "no_sample_prompt")]
    pub sample: bool,

    /// Do not offer to create `sample.txt` at startup.
    #[arg(long, default_value_t = false)]
    pub no_sample_prompt: bool,

    /// Disable colored output (also honoured via `NO_COLOR`).
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Suppress the startup banner.
    #[arg(long, short = 'q', default_value_t = false)]
    pub quiet: bool,
}

impl Cli {
    /// How the demo file should be handled at startup.
    pub fn sample_mode(&self) -> SampleMode {
        if self.sample {
            SampleMode::Create
        } else if self.no_sample_prompt {
            SampleMode::Skip
        } else {
            SampleMode::Ask
        }
    }
}
