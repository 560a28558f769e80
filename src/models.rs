//! Data models shared by the converter and the index builder.
//!
//! - [`Briefing`]: result of converting one markdown briefing
//! - [`BriefingEntry`]: one generated page discovered in the output directory
//! - [`IndexManifest`]: serializable form of a rendered index

use serde::{Deserialize, Serialize};

/// A converted briefing: the extracted title and the HTML body fragment.
///
/// The body is a fragment, not a document. It is embedded verbatim into the
/// page template by [`crate::outputs::page::render_page`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Briefing {
    /// First top-level header of the source, or the fallback title.
    pub title: String,
    /// HTML produced by the conversion pipeline.
    pub body: String,
}

/// A generated briefing page found while building the index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BriefingEntry {
    /// Date label, taken from the file stem (e.g. `2025-05-06`).
    pub date: String,
    /// File name of the page, relative to the index.
    pub href: String,
}

/// The listing written next to `index.html` when a manifest is requested.
#[derive(Debug, Deserialize, Serialize)]
pub struct IndexManifest {
    pub count: usize,
    /// Render time in `YYYY-MM-DD HH:MM`, local time.
    pub generated_at: String,
    /// Newest first.
    pub entries: Vec<BriefingEntry>,
}

impl IndexManifest {
    pub fn new(entries: Vec<BriefingEntry>, generated_at: String) -> Self {
        Self {
            count: entries.len(),
            generated_at,
            entries,
        }
    }
}
