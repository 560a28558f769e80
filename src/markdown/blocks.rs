//! Block structure: tables, rules, bullet lists and paragraphs.
//!
//! Tables, rules and lists are recognized by a single pass over the lines,
//! tracked with [`State`]. Paragraph wrapping runs afterwards on the result.

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

static RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-{3,}$").unwrap());
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-[ \t]+(.+)$").unwrap());

enum State<'a> {
    Outside,
    InTable(Vec<&'a str>),
    InList(Vec<&'a str>),
}

impl State<'_> {
    /// Emit whatever the state has accumulated.
    fn flush(self, out: &mut Vec<String>) {
        match self {
            State::Outside => {}
            State::InTable(lines) => {
                if let Some(table) = render_table(&lines) {
                    out.push(table);
                }
            }
            State::InList(items) => out.push(render_list(&items)),
        }
    }
}

/// Run the table, rule and list state machine over every line.
pub fn structure(text: &str) -> String {
    let mut out = Vec::new();
    let mut state = State::Outside;

    for line in text.split('\n') {
        if line.contains('|') {
            state = match state {
                State::InTable(mut lines) => {
                    lines.push(line);
                    State::InTable(lines)
                }
                other => {
                    other.flush(&mut out);
                    State::InTable(vec![line])
                }
            };
            continue;
        }

        if !RULE.is_match(line) {
            if let Some(caps) = LIST_ITEM.captures(line) {
                let item = caps.get(1).map_or("", |m| m.as_str());
                state = match state {
                    State::InList(mut items) => {
                        items.push(item);
                        State::InList(items)
                    }
                    other => {
                        other.flush(&mut out);
                        State::InList(vec![item])
                    }
                };
                continue;
            }
        }

        std::mem::replace(&mut state, State::Outside).flush(&mut out);
        if RULE.is_match(line) {
            out.push("<hr>".to_string());
        } else {
            out.push(line.to_string());
        }
    }
    state.flush(&mut out);

    out.join("\n")
}

/// Wrap every plain block in `<p>`.
///
/// Blocks are separated by a blank line. Empty blocks, blocks that already
/// start with an element tag and blocks that start with `---` pass through.
pub fn paragraphs(text: &str) -> String {
    text.split("\n\n")
        .map(|block| {
            let block = block.trim();
            if block.is_empty() || block.starts_with("---") || block.starts_with('<') {
                block.to_string()
            } else {
                format!("<p>{block}</p>")
            }
        })
        .join("\n\n")
}

fn is_separator(line: &str) -> bool {
    let line = line.trim();
    line.contains('-')
        && line
            .chars()
            .all(|c| matches!(c, '-' | '|' | ':') || c.is_whitespace())
}

fn split_cells(line: &str) -> Option<Vec<&str>> {
    let line = line.trim();
    let line = line.strip_prefix('|').unwrap_or(line);
    let line = line.strip_suffix('|').unwrap_or(line);
    let cells: Vec<&str> = line.split('|').map(str::trim).collect();
    if cells.iter().all(|c| c.is_empty()) {
        None
    } else {
        Some(cells)
    }
}

fn render_table(lines: &[&str]) -> Option<String> {
    let rows: Vec<Vec<&str>> = lines
        .iter()
        .filter(|line| !is_separator(line))
        .filter_map(|line| split_cells(line))
        .collect();
    let (header, body) = rows.split_first()?;

    let mut html = String::from("<table>\n");
    html.push_str(&format!(
        "  <tr>{}</tr>\n",
        header.iter().map(|c| format!("<th>{c}</th>")).join("")
    ));
    for row in body {
        html.push_str(&format!(
            "  <tr>{}</tr>\n",
            row.iter().map(|c| format!("<td>{c}</td>")).join("")
        ));
    }
    html.push_str("</table>");
    Some(html)
}

fn render_list(items: &[&str]) -> String {
    format!(
        "<ul>\n{}\n</ul>",
        items.iter().map(|item| format!("<li>{item}</li>")).join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_with_separator() {
        let out = structure("| Model | Score |\n|---|:---:|\n| GPT | 90 |");
        assert_eq!(
            out,
            "<table>\n  <tr><th>Model</th><th>Score</th></tr>\n  <tr><td>GPT</td><td>90</td></tr>\n</table>"
        );
    }

    #[test]
    fn test_table_keeps_terminating_line() {
        let out = structure("| A |\n| 1 |\n\nafter");
        assert_eq!(
            out,
            "<table>\n  <tr><th>A</th></tr>\n  <tr><td>1</td></tr>\n</table>\n\nafter"
        );
    }

    #[test]
    fn test_table_without_outer_pipes() {
        let out = structure("a | b\n1 | 2");
        assert!(out.contains("<th>a</th><th>b</th>"));
        assert!(out.contains("<td>1</td><td>2</td>"));
    }

    #[test]
    fn test_separator_only_run_emits_nothing() {
        assert_eq!(structure("|---|---|\ntext"), "text");
    }

    #[test]
    fn test_dashes_inside_cells_are_kept() {
        let out = structure("| Item | Note |\n| gpt-4 | up --- down |");
        assert!(out.contains("<td>gpt-4</td><td>up --- down</td>"));
    }

    #[test]
    fn test_rule() {
        assert_eq!(structure("a\n---\nb\n-----"), "a\n<hr>\nb\n<hr>");
        assert_eq!(structure("--"), "--");
    }

    #[test]
    fn test_list_run_wrapped_once() {
        assert_eq!(
            structure("- one\n- two\ntext"),
            "<ul>\n<li>one</li>\n<li>two</li>\n</ul>\ntext"
        );
    }

    #[test]
    fn test_list_at_end_of_input_is_wrapped() {
        assert_eq!(structure("intro\n- last"), "intro\n<ul>\n<li>last</li>\n</ul>");
    }

    #[test]
    fn test_list_then_table_then_list() {
        let out = structure("- a\n| x | y |\n- b");
        assert_eq!(
            out,
            "<ul>\n<li>a</li>\n</ul>\n<table>\n  <tr><th>x</th><th>y</th></tr>\n</table>\n<ul>\n<li>b</li>\n</ul>"
        );
    }

    #[test]
    fn test_paragraph_wrapping() {
        let out = paragraphs("<h1>Title</h1>\n\nplain text\n\n<strong>Lead</strong> in\n\n<hr>\n\n");
        assert_eq!(
            out,
            "<h1>Title</h1>\n\n<p>plain text</p>\n\n<strong>Lead</strong> in\n\n<hr>\n\n"
        );
    }

    #[test]
    fn test_paragraph_skips_rules_and_blank_blocks() {
        assert_eq!(paragraphs("---\n\n   \n\nx"), "---\n\n\n\n<p>x</p>");
    }

    #[test]
    fn test_paragraph_leaves_tag_led_blocks_alone() {
        let out = paragraphs(
            "<strong>Note:</strong> model shipped\n\n<a href=\"https://x.dev\">Link</a> details\n\n<code>x</code> y",
        );
        assert_eq!(
            out,
            "<strong>Note:</strong> model shipped\n\n<a href=\"https://x.dev\">Link</a> details\n\n<code>x</code> y"
        );
    }
}
