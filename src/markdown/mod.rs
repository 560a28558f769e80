//! Markdown to HTML conversion for briefings.
//!
//! This is not a CommonMark parser. It recognizes the subset of markdown the
//! daily briefings are written in and rewrites it with a fixed sequence of
//! whole-text passes:
//!
//! | # | Pass | Produces |
//! |---|------|----------|
//! | 1 | headers | `<h1>`..`<h3>` |
//! | 2 | emphasis | `<strong><em>`, `<strong>`, `<em>` |
//! | 3 | blockquotes | `<blockquote><p>` per line |
//! | 4 | links | `<a href>` |
//! | 5 | code spans | `<code>` |
//! | 6-8 | structure | `<table>`, `<hr>`, `<ul><li>` |
//! | 9 | paragraphs | `<p>` |
//!
//! Later passes never see markdown that an earlier pass already turned into
//! HTML, so the order matters. Inline passes run before table detection, so a
//! `|` produced by a link or code span also counts as a table delimiter.
//!
//! Nothing is escaped: the input is trusted and the output is embedded
//! verbatim into the page template.

mod blocks;
mod inline;

use crate::models::Briefing;
use tracing::{debug, instrument, trace};

/// Title used when the briefing has no `# ` header.
pub const FALLBACK_TITLE: &str = "AI Briefing";

type Pass = fn(&str) -> String;

const PASSES: &[(&str, Pass)] = &[
    ("headers", inline::headers),
    ("emphasis", inline::emphasis),
    ("blockquotes", inline::blockquotes),
    ("links", inline::links),
    ("code_spans", inline::code_spans),
    ("structure", blocks::structure),
    ("paragraphs", blocks::paragraphs),
];

/// Extract the title: the first `# ` header, or [`FALLBACK_TITLE`].
pub fn extract_title(text: &str) -> String {
    inline::first_title(text).unwrap_or_else(|| FALLBACK_TITLE.to_string())
}

/// Convert a markdown briefing into its title and HTML body fragment.
#[instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn markdown_to_html(source: &str) -> Briefing {
    let text = source.replace("\r\n", "\n");
    let title = extract_title(&text);
    debug!(%title, "Extracted title");

    let body = PASSES.iter().fold(text, |html, (name, pass)| {
        let next = pass(&html);
        trace!(pass = %name, bytes = next.len(), "Applied pass");
        next
    });

    Briefing { title, body }
}
