//! # Briefing Pages
//!
//! Turns daily AI-news briefings written in markdown into styled standalone
//! HTML pages, and keeps a dated index page of every briefing in the output
//! directory.
//!
//! ## Usage
//!
//! ```sh
//! briefing_pages convert briefings/2025-05-06.md site/2025-05-06.html
//! briefing_pages generate-index site
//! ```
//!
//! ## Architecture
//!
//! Both subcommands are single-shot and stateless:
//! 1. **convert**: read markdown, run the conversion passes, embed the result
//!    in the page template, write the page
//! 2. **generate-index**: list the pages in a directory, newest first, and
//!    write `index.html` (plus `index.json` with `--manifest`)
//!
//! Logs go to stderr (`RUST_LOG`, default `info`); stdout only carries the
//! confirmation line.

use clap::Parser;
use std::error::Error;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod markdown;
mod models;
mod outputs;
mod utils;

use cli::{Cli, Command};
use outputs::{indexes, page};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    // Usage errors exit 1; --help and --version exit 0.
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if let Err(io) = e.print() {
                debug!(error = %io, "Failed to print usage");
            }
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    debug!(?args.command, "Parsed CLI arguments");

    let start_time = std::time::Instant::now();
    match run(args.command).await {
        Ok(()) => {
            let elapsed = start_time.elapsed();
            info!(?elapsed, "Execution complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(error = %e, "Execution failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Convert { input, output } => {
            page::convert_file(&input, &output).await?;
            println!("Converted: {} -> {}", input.display(), output.display());
        }
        Command::GenerateIndex {
            output_dir,
            manifest,
        } => {
            let index_path = indexes::generate_index(&output_dir, manifest).await?;
            println!("Generated: {}", index_path.display());
        }
    }
    Ok(())
}
