//! Demo input file offered when a session starts.

use std::path::Path;

use crate::files::{self, FileError};

/// Text of the demo file. It hits several of the default rules.
pub const SAMPLE_CONTENT: &str = "Hello world!
This is a sample text file for testing.
The quick brown fox jumps over the lazy dog.
Python is a great programming language.
File handling is an important skill.
Good luck with your programming journey!";

/// Write the demo file as `name` inside `root`, replacing any existing one.
pub async fn create_sample(root: &Path, name: &str) -> Result<(), FileError> {
    files::write_text(&root.join(name), SAMPLE_CONTENT).await?;
    tracing::info!(name, "sample file created");
    Ok(())
}

/// Whether a startup answer means "yes".
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
