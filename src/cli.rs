//! Command-line interface definitions for Briefing Pages.
//!
//! The binary exposes one subcommand per component: `convert` turns a single
//! markdown briefing into a page, `generate-index` rebuilds the listing page
//! for a directory of generated pages.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the Briefing Pages application.
///
/// # Examples
///
/// ```sh
/// # Convert one briefing
/// briefing_pages convert briefings/2025-05-06.md site/2025-05-06.html
///
/// # Rebuild the index, also writing index.json
/// briefing_pages generate-index site --manifest
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a markdown briefing into a styled HTML page
    Convert {
        /// Markdown briefing to read
        input: PathBuf,
        /// HTML page to write (overwritten if present)
        output: PathBuf,
    },
    /// Write index.html listing every briefing page in a directory
    GenerateIndex {
        /// Directory holding the generated briefing pages
        output_dir: PathBuf,
        /// Also write index.json with the same entries
        #[arg(long)]
        manifest: bool,
    },
}
