//! Classified file access: text read, text write, binary peek and listing.
//!
//! Every failure is mapped onto [`FileError`] so the session can pick the
//! right explanation (and follow-up) for the user.

use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::io::AsyncReadExt;

use crate::models::Access;

/// Why a file could not be read or written.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied: cannot {access} {}", path.display())]
    PermissionDenied { path: PathBuf, access: Access },

    #[error("{} is not valid UTF-8 text (first bad byte at offset {offset})", path.display())]
    Decode { path: PathBuf, offset: usize },

    #[error("input/output error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        access: Access,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    /// Map an I/O error from a read or write of `path` onto the taxonomy.
    ///
    /// `NotFound` is reserved for reads; a missing parent directory on
    /// write is an ordinary I/O fault.
    pub fn classify(path: &Path, access: Access, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            ErrorKind::NotFound if access == Access::Read => FileError::NotFound { path },
            ErrorKind::PermissionDenied => FileError::PermissionDenied { path, access },
            _ => FileError::Io {
                path,
                access,
                source,
            },
        }
    }
}

/// Read `path` and decode it as UTF-8.
///
/// Line endings are normalised to `\n` (`\r\n` and lone `\r` alike).
pub async fn read_text(path: &Path) -> Result<String, FileError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| FileError::classify(path, Access::Read, e))?;

    let text = String::from_utf8(bytes).map_err(|e| FileError::Decode {
        path: path.to_path_buf(),
        offset: e.utf8_error().valid_up_to(),
    })?;
    Ok(normalize_newlines(text))
}

/// Turn `\r\n` and bare `\r` into `\n`.
pub fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Create or truncate `path` and write `text` to it.
///
/// Not atomic: a failure part-way may leave a partial file behind.
pub async fn write_text(path: &Path, text: &str) -> Result<(), FileError> {
    tokio::fs::write(path, text.as_bytes())
        .await
        .map_err(|e| FileError::classify(path, Access::Write, e))
}

/// Read at most `limit` bytes from the start of `path`.
pub async fn peek_bytes(path: &Path, limit: usize) -> io::Result<Vec<u8>> {
    let file = tokio::fs::File::open(path).await?;
    let mut buf = Vec::with_capacity(limit);
    file.take(limit as u64).read_to_end(&mut buf).await?;
    Ok(buf)
}

/// Names of the regular files directly inside `dir`, sorted.
///
/// Symlinks count when they point at a regular file. Subdirectories and
/// unreadable entries are skipped.
pub async fn list_files(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    let mut read_dir = tokio::fs::read_dir(dir).await?;

    while let Some(entry) = read_dir.next_entry().await? {
        let is_file = match tokio::fs::metadata(entry.path()).await {
            Ok(meta) => meta.is_file(),
            Err(_) => false,
        };
        if is_file {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
    }

    names.sort();
    Ok(names)
}
