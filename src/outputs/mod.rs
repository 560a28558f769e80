//! Output generation: briefing pages, the index page and its JSON manifest.
//!
//! # Submodules
//!
//! - [`page`]: Wraps a converted briefing in the standalone page template
//! - [`indexes`]: Scans the output directory and writes `index.html`
//! - [`json`]: Writes `index.json` alongside the index
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── 2025-05-05.html   # convert
//! ├── 2025-05-06.html   # convert
//! ├── index.html        # generate-index
//! └── index.json        # generate-index --manifest
//! ```

pub mod indexes;
pub mod json;
pub mod page;
