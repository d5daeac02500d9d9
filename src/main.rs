//! retouch — interactive file rewrite CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use retouch::cancel::Cancellation;
use retouch::config::Config;
use retouch::env::Env;
use retouch::logging;
use retouch::session::Session;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let code = match run().await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("Error: {err:#}");
            1
        }
    };
    // The stdin reader may still be parked in a blocking read after a
    // Ctrl-C; exit here rather than wait for it on runtime shutdown.
    process::exit(code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let env = Env::real();

    logging::init(&env);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let root = std::fs::canonicalize(&cli.dir)
        .with_context(|| format!("--dir directory not found: {}", cli.dir.display()))?;

    let config = Config::load(&root, cli.config.as_deref(), &env)
        .context("failed to load configuration")?;

    if !cli.quiet {
        cli::print_banner();
    }

    let cancel = Cancellation::new();
    cancel.listen_for_interrupt();

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut session = Session::new(root, config, stdin, std::io::stdout(), cancel);

    session
        .offer_sample(cli.sample_mode())
        .await
        .context("interactive session failed")?;
    session
        .run()
        .await
        .context("interactive session failed")?;

    Ok(())
}
