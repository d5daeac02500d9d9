//! The interactive read → rewrite → write loop.
//!
//! One iteration per filename:
//!
//! ```text
//! AwaitingFilename → Reading → Transforming → NamingOutput → Writing → ShowingPreview
//!        ↑______________|__________________________________________|_________|
//! ```
//!
//! Every failure is explained to the user and lands back in
//! `AwaitingFilename`. Only the `quit` sentinel, end of input, or a
//! cancellation reach `Done`. Errors writing to the user's terminal are the
//! one thing that ends [`Session::run`] early, since nothing could be
//! reported anyway.

use std::io::{self, ErrorKind, Write};
use std::path::PathBuf;

use chrono::Local;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::cancel::Cancellation;
use crate::config::Config;
use crate::constants::{BINARY_PEEK_BYTES, BINARY_SHOWN_BYTES, SAMPLE_FILENAME, SENTINEL};
use crate::files::{self, FileError};
use crate::models::SessionState;
use crate::naming;
use crate::output::{Preview, TerminalRenderer, WriteReport};
use crate::sample;
use crate::suggest;
use crate::transform;

/// What to do about the demo file before the first prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SampleMode {
    /// Never create it.
    #[default]
    Skip,
    /// Ask the user first.
    Ask,
    /// Create it without asking.
    Create,
}

/// Failure of a single iteration.
#[derive(Debug, Error)]
enum IterationError {
    #[error(transparent)]
    Read(FileError),

    #[error("could not choose an output name for {input}: {source}")]
    Naming { input: String, source: io::Error },

    #[error("{source}")]
    Write { output: String, source: FileError },

    #[error(transparent)]
    Terminal(#[from] io::Error),
}

/// Result of prompting the user for a line.
enum Prompted {
    Line(String),
    EndOfInput,
    Cancelled,
    Unreadable(io::Error),
}

/// An interactive session over some input and output.
///
/// `root` is the working directory: filenames typed by the user, output
/// names and the suggestion listing are all resolved against it.
pub struct Session<R, W> {
    root: PathBuf,
    config: Config,
    input: R,
    out: W,
    cancel: Cancellation,
    state: SessionState,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(
        root: impl Into<PathBuf>,
        config: Config,
        input: R,
        out: W,
        cancel: Cancellation,
    ) -> Self {
        Self {
            root: root.into(),
            config,
            input,
            out,
            cancel,
            state: SessionState::AwaitingFilename,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Consume the session and hand back its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Create the demo file according to `mode`. Never fails the session
    /// except on terminal errors.
    pub async fn offer_sample(&mut self, mode: SampleMode) -> io::Result<()> {
        let create = match mode {
            SampleMode::Skip => false,
            SampleMode::Create => true,
            SampleMode::Ask => match self.ask(&TerminalRenderer.sample_question()).await? {
                Prompted::Line(answer) => sample::is_affirmative(&answer),
                _ => false,
            },
        };
        if !create {
            return Ok(());
        }

        match sample::create_sample(&self.root, SAMPLE_FILENAME).await {
            Ok(()) => self.emit(&TerminalRenderer.sample_created(SAMPLE_FILENAME)),
            Err(e) => self.emit(&TerminalRenderer.sample_failed(SAMPLE_FILENAME, &e.to_string())),
        }
    }

    /// Prompt for filenames until the sentinel, end of input, or
    /// cancellation.
    pub async fn run(&mut self) -> io::Result<()> {
        while !self.state.is_terminal() {
            if self.cancel.is_cancelled() {
                self.finish_cancelled()?;
                break;
            }

            match self.ask(&TerminalRenderer.prompt()).await? {
                Prompted::Cancelled => self.finish_cancelled()?,
                Prompted::EndOfInput => {
                    self.emit(&TerminalRenderer.goodbye())?;
                    self.transition(SessionState::Done);
                }
                Prompted::Unreadable(e) => {
                    self.emit(&TerminalRenderer.unexpected(&e.to_string()))?;
                }
                Prompted::Line(line) => {
                    let filename = line.trim();
                    if filename.eq_ignore_ascii_case(SENTINEL) {
                        self.emit(&TerminalRenderer.goodbye())?;
                        self.transition(SessionState::Done);
                    } else if filename.is_empty() {
                        self.emit(&TerminalRenderer.empty_input())?;
                    } else {
                        self.handle(filename).await?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Run one iteration for `filename` and report the outcome.
    ///
    /// Always returns to `AwaitingFilename`.
    pub async fn handle(&mut self, filename: &str) -> io::Result<()> {
        match self.process(filename).await {
            Ok(()) => {}
            Err(IterationError::Terminal(e)) => return Err(e),
            Err(IterationError::Read(err)) => {
                tracing::info!(input = filename, error = %err, "read failed");
                self.report_read_failure(filename, err).await?;
            }
            Err(IterationError::Write { output, source }) => {
                tracing::info!(output = %output, error = %source, "write failed");
                self.emit(&TerminalRenderer.file_error(&source, filename, &output))?;
            }
            Err(err @ IterationError::Naming { .. }) => {
                tracing::warn!(error = %err, "unexpected failure");
                self.emit(&TerminalRenderer.unexpected(&err.to_string()))?;
            }
        }
        self.transition(SessionState::AwaitingFilename);
        Ok(())
    }

    async fn process(&mut self, filename: &str) -> Result<(), IterationError> {
        self.transition(SessionState::Reading);
        let content = files::read_text(&self.root.join(filename))
            .await
            .map_err(IterationError::Read)?;
        self.emit(&TerminalRenderer.read_ok(filename))?;

        self.transition(SessionState::Transforming);
        self.emit(&TerminalRenderer.modifying())?;
        let transformed =
            transform::transform(&content, &self.config.transform.rules, &Local::now());
        for rule in &transformed.applied {
            self.emit(&TerminalRenderer.substitution(rule))?;
        }

        self.transition(SessionState::NamingOutput);
        let output = naming::output_filename(&self.root, filename)
            .await
            .map_err(|source| IterationError::Naming {
                input: filename.to_string(),
                source,
            })?;

        self.transition(SessionState::Writing);
        files::write_text(&self.root.join(&output), &transformed.text)
            .await
            .map_err(|source| IterationError::Write {
                output: output.clone(),
                source,
            })?;
        tracing::info!(input = filename, output = %output, "rewrite written");
        self.emit(&TerminalRenderer.written(&WriteReport::new(
            &output,
            &content,
            &transformed.text,
        )))?;

        self.transition(SessionState::ShowingPreview);
        let preview = Preview::build(&content, &transformed.text, &self.config.preview);
        self.emit(&TerminalRenderer.preview(&preview))?;

        Ok(())
    }

    /// Explain a read failure, with suggestions or a binary peek where
    /// they help.
    async fn report_read_failure(&mut self, filename: &str, err: FileError) -> io::Result<()> {
        self.emit(&TerminalRenderer.file_error(&err, filename, ""))?;

        match err {
            FileError::NotFound { .. } => {
                let names = suggest::suggest_similar(&self.root, filename, &self.config.suggest).await;
                self.emit(&TerminalRenderer.suggestions(&names))?;
            }
            FileError::Decode { path, .. } => {
                self.emit(&TerminalRenderer.binary_hint())?;
                match files::peek_bytes(&path, BINARY_PEEK_BYTES).await {
                    Ok(bytes) => {
                        let shown = &bytes[..bytes.len().min(BINARY_SHOWN_BYTES)];
                        self.emit(&TerminalRenderer.binary_peek(shown))?;
                    }
                    Err(e) => self.emit(&TerminalRenderer.binary_peek_failed(&e.to_string()))?,
                }
            }
            FileError::PermissionDenied { .. } | FileError::Io { .. } => {}
        }
        Ok(())
    }

    /// Show `prompt` and wait for a line or a cancellation.
    async fn ask(&mut self, prompt: &str) -> io::Result<Prompted> {
        self.emit(prompt)?;

        let mut line = String::new();
        let read = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => None,
            read = self.input.read_line(&mut line) => Some(read),
        };

        match read {
            None => Ok(Prompted::Cancelled),
            Some(Ok(0)) => Ok(Prompted::EndOfInput),
            Some(Ok(_)) => Ok(Prompted::Line(line)),
            Some(Err(e)) if e.kind() == ErrorKind::InvalidData => Ok(Prompted::Unreadable(e)),
            Some(Err(e)) => Err(e),
        }
    }

    fn finish_cancelled(&mut self) -> io::Result<()> {
        self.emit(&TerminalRenderer.cancelled())?;
        self.transition(SessionState::Done);
        Ok(())
    }

    fn transition(&mut self, next: SessionState) {
        tracing::debug!(from = %self.state, to = %next, "session state");
        self.state = next;
    }

    fn emit(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn session<'a>(root: &Path, input: &'a [u8]) -> Session<&'a [u8], Vec<u8>> {
        colored::control::set_override(false);
        Session::new(root, Config::default(), input, Vec::new(), Cancellation::new())
    }

    fn text(session: Session<&[u8], Vec<u8>>) -> String {
        String::from_utf8(session.into_output()).unwrap()
    }

    #[tokio::test]
    async fn starts_awaiting_filename() {
        let dir = tempfile::tempdir().unwrap();
        let s = session(dir.path(), b"");
        assert_eq!(s.state(), SessionState::AwaitingFilename);
    }

    #[tokio::test]
    async fn handle_success_returns_to_awaiting() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("in.txt"), "hello").unwrap();
        let mut s = session(dir.path(), b"");

        s.handle("in.txt").await.unwrap();

        assert_eq!(s.state(), SessionState::AwaitingFilename);
        let written = std::fs::read_to_string(dir.path().join("in_modified_1.txt")).unwrap();
        assert!(written.ends_with("\n\nHELLO"));
        let out = text(s);
        assert!(out.contains("Successfully read: in.txt"));
        assert!(out.contains("Replaced 'hello' with 'HELLO'"));
        assert!(out.contains("in_modified_1.txt"));
    }

    #[tokio::test]
    async fn handle_failure_returns_to_awaiting() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session(dir.path(), b"");

        s.handle("ghost.txt").await.unwrap();

        assert_eq!(s.state(), SessionState::AwaitingFilename);
        assert!(text(s).contains("File not found: ghost.txt"));
    }

    #[tokio::test]
    async fn failed_read_leaves_no_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session(dir.path(), b"");
        s.handle("ghost.txt").await.unwrap();
        assert!(!dir.path().join("ghost_modified_1.txt").exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn write_failure_is_reported_with_output_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("in.txt"), "x").unwrap();
        // A dangling symlink looks free to the namer but cannot be written
        // through, since its target directory does not exist.
        std::os::unix::fs::symlink(
            dir.path().join("missing/target.txt"),
            dir.path().join("in_modified_1.txt"),
        )
        .unwrap();
        let mut s = session(dir.path(), b"");

        s.handle("in.txt").await.unwrap();

        assert_eq!(s.state(), SessionState::AwaitingFilename);
        let out = text(s);
        assert!(out.contains("Successfully read: in.txt"));
        assert!(out.contains("Error writing to file"), "got: {out}");
        assert!(!out.contains("Preview of changes"));
    }

    #[tokio::test]
    async fn empty_input_reprompts() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session(dir.path(), b"   \nquit\n");
        s.run().await.unwrap();
        let out = text(s);
        assert!(out.contains("Please enter a valid filename."));
        assert!(out.contains("Goodbye!"));
    }

    #[tokio::test]
    async fn offer_sample_ask_yes_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session(dir.path(), b"y\n");
        s.offer_sample(SampleMode::Ask).await.unwrap();
        assert!(dir.path().join(SAMPLE_FILENAME).exists());
        assert!(text(s).contains("Created sample.txt"));
    }

    #[tokio::test]
    async fn offer_sample_ask_no_skips() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session(dir.path(), b"n\n");
        s.offer_sample(SampleMode::Ask).await.unwrap();
        assert!(!dir.path().join(SAMPLE_FILENAME).exists());
    }

    #[tokio::test]
    async fn offer_sample_skip_reads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session(dir.path(), b"quit\n");
        s.offer_sample(SampleMode::Skip).await.unwrap();
        s.run().await.unwrap();
        assert!(text(s).contains("Goodbye!"));
    }
}
