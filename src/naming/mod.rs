//! Output filename generation.
//!
//! `report.txt` becomes `report_modified_1.txt`, or the first
//! `report_modified_N.txt` that does not exist yet. The name is only
//! checked, never reserved, so a file created between this check and the
//! later write will be overwritten.

use std::io;
use std::path::Path;

use crate::constants::{DEFAULT_EXTENSION, MODIFIED_INFIX};

/// Split a filename into base and extension.
///
/// The extension is everything from the last `.` of the final path
/// component, unless that component consists only of leading dots up to
/// that point (`.bashrc` has no extension). The base keeps any directory
/// prefix.
pub fn split_extension(filename: &str) -> (&str, &str) {
    let name_start = filename
        .rfind(['/', std::path::MAIN_SEPARATOR])
        .map(|i| i + 1)
        .unwrap_or(0);
    let name = &filename[name_start..];

    match name.rfind('.') {
        Some(dot) if name[..dot].chars().any(|c| c != '.') => {
            let at = name_start + dot;
            (&filename[..at], &filename[at..])
        }
        _ => (filename, ""),
    }
}

/// Build the candidate name for a given counter.
pub fn candidate_name(filename: &str, counter: u32) -> String {
    let (base, extension) = split_extension(filename);
    let extension = if extension.is_empty() {
        DEFAULT_EXTENSION
    } else {
        extension
    };
    format!("{base}{MODIFIED_INFIX}{counter}{extension}")
}

/// Return the first `{base}_modified_{n}{ext}` (n ≥ 1) that does not exist
/// relative to `root`.
///
/// Fails only when existence itself cannot be determined.
pub async fn output_filename(root: &Path, input: &str) -> io::Result<String> {
    let mut counter = 1;
    loop {
        let candidate = candidate_name(input, counter);
        if !tokio::fs::try_exists(root.join(&candidate)).await? {
            tracing::debug!(%candidate, "output name chosen");
            return Ok(candidate);
        }
        counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_simple() {
        assert_eq!(split_extension("report.txt"), ("report", ".txt"));
    }

    #[test]
    fn split_keeps_last_extension_only() {
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", ".gz"));
    }

    #[test]
    fn split_without_extension() {
        assert_eq!(split_extension("README"), ("README", ""));
    }

    #[test]
    fn split_hidden_file_has_no_extension() {
        assert_eq!(split_extension(".bashrc"), (".bashrc", ""));
        assert_eq!(split_extension("..hidden"), ("..hidden", ""));
    }

    #[test]
    fn split_hidden_file_with_extension() {
        assert_eq!(split_extension(".env.local"), (".env", ".local"));
    }

    #[test]
    fn split_ignores_dots_in_directories() {
        assert_eq!(split_extension("v1.2/notes"), ("v1.2/notes", ""));
        assert_eq!(split_extension("v1.2/notes.md"), ("v1.2/notes", ".md"));
    }

    #[test]
    fn split_trailing_dot() {
        assert_eq!(split_extension("draft."), ("draft", "."));
    }

    #[test]
    fn candidate_defaults_to_txt() {
        assert_eq!(candidate_name("README", 1), "README_modified_1.txt");
        assert_eq!(candidate_name("data.csv", 3), "data_modified_3.csv");
    }

    #[tokio::test]
    async fn first_candidate_when_nothing_exists() {
        let dir = tempfile::tempdir().unwrap();
        let name = output_filename(dir.path(), "report.txt").await.unwrap();
        assert_eq!(name, "report_modified_1.txt");
    }

    #[tokio::test]
    async fn skips_existing_candidates() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("report_modified_1.txt"), "").unwrap();
        let name = output_filename(dir.path(), "report.txt").await.unwrap();
        assert_eq!(name, "report_modified_2.txt");
    }

    #[tokio::test]
    async fn fills_first_gap() {
        let dir = tempfile::tempdir().unwrap();
        for n in [1, 2, 4] {
            std::fs::write(dir.path().join(format!("log_modified_{n}.txt")), "").unwrap();
        }
        let name = output_filename(dir.path(), "log.txt").await.unwrap();
        assert_eq!(name, "log_modified_3.txt");
    }

    #[tokio::test]
    async fn directories_count_as_taken() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("notes_modified_1.txt")).unwrap();
        let name = output_filename(dir.path(), "notes").await.unwrap();
        assert_eq!(name, "notes_modified_2.txt");
    }

    #[tokio::test]
    async fn keeps_subdirectory_prefix() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub/a_modified_1.md"), "").unwrap();
        let name = output_filename(dir.path(), "sub/a.md").await.unwrap();
        assert_eq!(name, "sub/a_modified_2.md");
    }
}
