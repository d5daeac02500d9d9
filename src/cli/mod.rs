//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

/// Banner with ANSI styling for clap help output.
/// Bold "retouch", dimmed rest. (Static — used for --help only.)
pub const BANNER_STYLED: &str =
    "\x1b[1mretouch\x1b[0m \x1b[2m· Read a file, rewrite it, save it under a new name.\x1b[0m";

/// Print the welcome banner to stderr.
pub fn print_banner() {
    use colored::Colorize;
    use std::io::Write;
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = writeln!(handle);
    let _ = writeln!(
        handle,
        "  {} {}",
        retouch::constants::APP_NAME.bold(),
        format!("{} · file read & write with friendly errors", retouch::constants::VERSION)
            .dimmed(),
    );
    let _ = writeln!(handle, "  {}", "═".repeat(40).dimmed());
    let _ = handle.flush();
}
