//! Terminal renderer: styled one-line messages for each step of a session.
//!
//! Every method returns the full text (including trailing newline) so the
//! session decides where it goes and tests can inspect it.

use colored::Colorize;

use crate::files::FileError;
use crate::models::{Access, Rule};
use crate::output::preview::Preview;

/// Sizes reported after a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub output: String,
    pub original_chars: usize,
    pub original_bytes: usize,
    pub modified_chars: usize,
    pub modified_bytes: usize,
}

impl WriteReport {
    pub fn new(output: impl Into<String>, original: &str, modified: &str) -> Self {
        Self {
            output: output.into(),
            original_chars: original.chars().count(),
            original_bytes: original.len(),
            modified_chars: modified.chars().count(),
            modified_bytes: modified.len(),
        }
    }
}

/// Terminal output renderer with colored, flowing text.
pub struct TerminalRenderer;

impl TerminalRenderer {
    pub fn prompt(&self) -> String {
        format!(
            "\n{} ",
            "Enter the input filename (or 'quit' to exit):".bold()
        )
    }

    pub fn sample_question(&self) -> String {
        "Would you like to create a sample file for testing? (y/n): ".to_string()
    }

    pub fn sample_created(&self, name: &str) -> String {
        format!(
            "  {} Created {name} for testing.\n  You can now use '{name}' as input filename.\n",
            "✔".green().bold()
        )
    }

    pub fn sample_failed(&self, name: &str, reason: &str) -> String {
        format!(
            "  {} {}\n",
            "✖".red().bold(),
            format!("Could not create {name}: {reason}").red()
        )
    }

    pub fn empty_input(&self) -> String {
        format!("  {} Please enter a valid filename.\n", "✖".red().bold())
    }

    pub fn goodbye(&self) -> String {
        format!("{}\n", "Goodbye!".bold())
    }

    pub fn cancelled(&self) -> String {
        format!("\n\n{}\n", "Operation cancelled by user.".yellow())
    }

    pub fn read_ok(&self, name: &str) -> String {
        format!("  {} Successfully read: {}\n", "✔".green().bold(), name.bold())
    }

    pub fn modifying(&self) -> String {
        format!("\n  {} Modifying content...\n", "→".cyan())
    }

    pub fn substitution(&self, rule: &Rule) -> String {
        format!("     Replaced '{}' with '{}'\n", rule.find, rule.replace)
    }

    pub fn written(&self, report: &WriteReport) -> String {
        let mut out = format!(
            "  {} Successfully wrote modified content to: {}\n",
            "✔".green().bold(),
            report.output.bold()
        );
        out.push_str(&format!(
            "  {} Original file size: {} characters ({} bytes)\n",
            "ℹ".blue().bold(),
            report.original_chars,
            report.original_bytes
        ));
        out.push_str(&format!(
            "  {} Modified file size: {} characters ({} bytes)\n",
            "ℹ".blue().bold(),
            report.modified_chars,
            report.modified_bytes
        ));
        out
    }

    pub fn preview(&self, preview: &Preview) -> String {
        let divider = "──────────────────────────────".dimmed();
        let mut out = format!("\n  {}\n{divider}\n", "Preview of changes:".bold());

        out.push_str(&format!("Original (first {} lines):\n", preview.lines));
        for (i, line) in preview.original.iter().enumerate() {
            out.push_str(&format!("{}: {line}\n", i + 1));
        }

        out.push_str(&format!("\nModified (first {} lines):\n", preview.lines));
        for (i, line) in preview.modified.iter().enumerate() {
            out.push_str(&format!("{}: {line}\n", i + 1));
        }

        out.push_str(&format!("{divider}\n"));
        out
    }

    /// Explain a failed read of `input` or write of `output`.
    ///
    /// The names are the ones the user sees, not the resolved paths.
    pub fn file_error(&self, err: &FileError, input: &str, output: &str) -> String {
        let message = match err {
            FileError::NotFound { .. } => format!("File not found: {input}"),
            FileError::PermissionDenied { access: Access::Read, .. } => {
                format!("Permission denied: Cannot read {input}")
            }
            FileError::PermissionDenied { access: Access::Write, .. } => {
                format!("Permission denied: Cannot write to {output}")
            }
            FileError::Decode { offset, .. } => format!(
                "Encoding error: Could not read {input} as text file (invalid UTF-8 at byte {offset})"
            ),
            FileError::Io { access: Access::Read, source, .. } => {
                format!("Input/Output error: {source}")
            }
            FileError::Io { access: Access::Write, source, .. } => {
                format!("Error writing to file: {source}")
            }
        };
        format!("  {} {}\n", "✖".red().bold(), message.red())
    }

    pub fn suggestions(&self, names: &[String]) -> String {
        if names.is_empty() {
            return String::new();
        }
        let mut out = format!("  {} Did you mean one of these files?\n", "ℹ".blue().bold());
        for name in names {
            out.push_str(&format!("     - {}\n", name.cyan()));
        }
        out
    }

    pub fn binary_hint(&self) -> String {
        format!(
            "  {} This might be a binary file. Trying binary mode...\n",
            "ℹ".blue().bold()
        )
    }

    /// Show the leading bytes of a file that failed to decode.
    pub fn binary_peek(&self, shown: &[u8]) -> String {
        format!(
            "  {} File appears to be binary (first bytes: b\"{}\"...)\n  {} Binary files cannot be modified as text.\n",
            "ℹ".blue().bold(),
            escape_bytes(shown),
            "ℹ".blue().bold()
        )
    }

    pub fn binary_peek_failed(&self, reason: &str) -> String {
        format!(
            "  {} {}\n",
            "✖".red().bold(),
            format!("Error reading binary file: {reason}").red()
        )
    }

    pub fn unexpected(&self, reason: &str) -> String {
        format!(
            "  {} {}\n",
            "✖".red().bold(),
            format!("Unexpected error: {reason}").red()
        )
    }
}

/// Render bytes as an ASCII-escaped literal body (`\x89PNG\r\n`).
pub fn escape_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .flat_map(|b| std::ascii::escape_default(*b))
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PreviewConfig;
    use std::path::PathBuf;

    #[test]
    fn escape_png_signature() {
        let sig = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];
        assert_eq!(escape_bytes(&sig), "\\x89PNG\\r\\n\\x1a\\n");
    }

    #[test]
    fn write_report_counts_chars_and_bytes() {
        let report = WriteReport::new("out.txt", "héllo", "HÉLLO!");
        assert_eq!(report.original_chars, 5);
        assert_eq!(report.original_bytes, 6);
        assert_eq!(report.modified_chars, 6);
        assert_eq!(report.modified_bytes, 7);
    }

    #[test]
    fn render_written_sizes() {
        let output = TerminalRenderer.written(&WriteReport::new("a_modified_1.txt", "ab", "abcd"));
        assert!(output.contains("a_modified_1.txt"));
        assert!(output.contains("Original file size: 2 characters (2 bytes)"));
        assert!(output.contains("Modified file size: 4 characters (4 bytes)"));
    }

    #[test]
    fn render_preview_numbers_lines() {
        let preview = Preview::build("first\nsecond", "HEADER\n\nfirst", &PreviewConfig::default());
        let output = TerminalRenderer.preview(&preview);
        assert!(output.contains("Original (first 3 lines):"));
        assert!(output.contains("1: first\n2: second\n"));
        assert!(output.contains("Modified (first 3 lines):"));
        assert!(output.contains("1: HEADER\n2: \n3: first\n"));
    }

    #[test]
    fn render_preview_heading_uses_configured_count() {
        let config = PreviewConfig { lines: 5, width: 50 };
        let output = TerminalRenderer.preview(&Preview::build("only", "only", &config));
        assert!(output.contains("Original (first 5 lines):\n1: only\n"));
        assert!(output.contains("Modified (first 5 lines):\n1: only\n"));
    }

    #[test]
    fn render_not_found_uses_typed_name() {
        let err = FileError::NotFound {
            path: PathBuf::from("/abs/work/foo.txt"),
        };
        let output = TerminalRenderer.file_error(&err, "foo.txt", "");
        assert!(output.contains("File not found: foo.txt"));
        assert!(!output.contains("/abs/work"));
    }

    #[test]
    fn render_write_permission_names_output() {
        let err = FileError::PermissionDenied {
            path: PathBuf::from("x_modified_1.txt"),
            access: Access::Write,
        };
        let output = TerminalRenderer.file_error(&err, "x.txt", "x_modified_1.txt");
        assert!(output.contains("Cannot write to x_modified_1.txt"));
    }

    #[test]
    fn render_suggestions() {
        assert!(TerminalRenderer.suggestions(&[]).is_empty());
        let output = TerminalRenderer.suggestions(&["food.txt".to_string()]);
        assert!(output.contains("Did you mean"));
        assert!(output.contains("food.txt"));
    }
}
