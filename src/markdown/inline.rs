//! Line-anchored and inline substitutions.
//!
//! Every pass takes the whole document and returns a new one. Patterns that
//! start with `(?m)^` only ever match within a single line.

use once_cell::sync::Lazy;
use regex::Regex;

static H3: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^###[ \t]+(\S.*)$").unwrap());
static H2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^##[ \t]+(\S.*)$").unwrap());
static H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#[ \t]+(\S.*)$").unwrap());

static BOLD_ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());

static QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^>[ \t]+(.+)$").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.+?)\]\((.+?)\)").unwrap());
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.+?)`").unwrap());

/// Text of the first `# ` header, scanning top-down.
pub fn first_title(text: &str) -> Option<String> {
    H1.captures(text).map(|caps| caps[1].trim_end().to_string())
}

/// `###`, `##` and `#` lines to heading elements, deepest first.
pub fn headers(text: &str) -> String {
    let text = H3.replace_all(text, "<h3>${1}</h3>");
    let text = H2.replace_all(&text, "<h2>${1}</h2>");
    H1.replace_all(&text, "<h1>${1}</h1>").into_owned()
}

/// Triple, double, then single asterisks.
pub fn emphasis(text: &str) -> String {
    let text = BOLD_ITALIC.replace_all(text, "<strong><em>${1}</em></strong>");
    let text = BOLD.replace_all(&text, "<strong>${1}</strong>");
    ITALIC.replace_all(&text, "<em>${1}</em>").into_owned()
}

/// One blockquote element per `> ` line; adjacent lines are not merged.
pub fn blockquotes(text: &str) -> String {
    QUOTE
        .replace_all(text, "<blockquote><p>${1}</p></blockquote>")
        .into_owned()
}

pub fn links(text: &str) -> String {
    LINK.replace_all(text, r#"<a href="${2}">${1}</a>"#).into_owned()
}

pub fn code_spans(text: &str) -> String {
    CODE.replace_all(text, "<code>${1}</code>").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_title_skips_deeper_headers() {
        let text = "## Section\n### Sub\n# 今日 AI 动态  \n# Second";
        assert_eq!(first_title(text).as_deref(), Some("今日 AI 动态"));
    }

    #[test]
    fn test_first_title_needs_space_after_hash() {
        assert_eq!(first_title("#hashtag\nbody"), None);
        assert_eq!(first_title("#\n\nNext line"), None);
    }

    #[test]
    fn test_first_title_skips_blank_headers() {
        assert_eq!(first_title("#   \n# Real Title\n").as_deref(), Some("Real Title"));
        assert_eq!(first_title("# \t\n"), None);
    }

    #[test]
    fn test_headers_need_text() {
        assert_eq!(headers("#   \n##  \n### \n# Kept"), "#   \n##  \n### \n<h1>Kept</h1>");
    }

    #[test]
    fn test_headers_deepest_first() {
        let out = headers("# One\n## Two\n### Three\n#### Four");
        assert_eq!(
            out,
            "<h1>One</h1>\n<h2>Two</h2>\n<h3>Three</h3>\n#### Four"
        );
    }

    #[test]
    fn test_emphasis_order() {
        assert_eq!(emphasis("***both***"), "<strong><em>both</em></strong>");
        assert_eq!(
            emphasis("**bold** and *it*"),
            "<strong>bold</strong> and <em>it</em>"
        );
    }

    #[test]
    fn test_emphasis_is_non_greedy() {
        assert_eq!(
            emphasis("**a** then **b**"),
            "<strong>a</strong> then <strong>b</strong>"
        );
    }

    #[test]
    fn test_emphasis_stays_on_its_line() {
        assert_eq!(emphasis("*open\nclose*"), "*open\nclose*");
    }

    #[test]
    fn test_blockquotes_per_line() {
        assert_eq!(
            blockquotes("> first\n> second"),
            "<blockquote><p>first</p></blockquote>\n<blockquote><p>second</p></blockquote>"
        );
    }

    #[test]
    fn test_links_non_greedy() {
        assert_eq!(
            links("[a](https://a.dev) and [b](https://b.dev)"),
            r#"<a href="https://a.dev">a</a> and <a href="https://b.dev">b</a>"#
        );
    }

    #[test]
    fn test_code_spans() {
        assert_eq!(
            code_spans("run `cargo doc` now"),
            "run <code>cargo doc</code> now"
        );
    }
}
