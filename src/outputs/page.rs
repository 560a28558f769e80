//! Standalone briefing pages.
//!
//! A page is the converted body dropped into a fixed skeleton with an inline
//! stylesheet and a back link to `index.html`, so each file can be opened on
//! its own.

use crate::markdown::markdown_to_html;
use crate::models::Briefing;
use crate::utils::{ensure_parent_dir, truncate_for_log};
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument};

const PAGE_LANG: &str = "zh-CN";

const PAGE_STYLE: &str = r#"        @charset "UTF-8";
        :root {
            --primary: #0066cc;
            --primary-dark: #0052a3;
            --bg: #f8f9fa;
            --card-bg: #ffffff;
            --text: #333333;
            --text-secondary: #666666;
            --border: #e1e4e8;
            --code-bg: #f6f8fa;
            --warning: #f59e0b;
        }

        * { box-sizing: border-box; }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            margin: 0;
            padding: 40px 20px;
            color: var(--text);
            line-height: 1.7;
        }

        .container { max-width: 800px; margin: 0 auto; }

        .back-link {
            display: inline-flex;
            align-items: center;
            gap: 8px;
            color: rgba(255,255,255,0.9);
            text-decoration: none;
            margin-bottom: 24px;
            font-size: 0.95em;
            transition: all 0.2s;
        }

        .back-link:hover { color: white; transform: translateX(-4px); }

        .content {
            background: var(--card-bg);
            border-radius: 16px;
            padding: 40px;
            box-shadow: 0 4px 20px rgba(0,0,0,0.1);
        }

        h1 {
            font-size: 1.8em;
            margin: 0 0 16px 0;
            color: var(--primary);
            border-bottom: 3px solid var(--primary);
            padding-bottom: 12px;
        }

        h2 {
            font-size: 1.4em;
            margin: 32px 0 16px 0;
            color: var(--primary-dark);
            display: flex;
            align-items: center;
            gap: 10px;
        }

        h3 {
            font-size: 1.15em;
            margin: 24px 0 12px 0;
            color: var(--text);
            padding-left: 12px;
            border-left: 4px solid var(--primary);
        }

        blockquote {
            margin: 16px 0;
            padding: 16px 20px;
            background: linear-gradient(135deg, #f0f7ff 0%, #e8f4ff 100%);
            border-radius: 8px;
            border-left: 4px solid var(--primary);
        }

        blockquote p { margin: 0; color: var(--text-secondary); font-size: 0.95em; }

        table { width: 100%; border-collapse: collapse; margin: 20px 0; font-size: 0.95em; }

        th, td { padding: 12px 16px; text-align: left; border-bottom: 1px solid var(--border); }

        th { background: #f6f8fa; font-weight: 600; color: var(--text); }

        tr:hover { background: #f9fafb; }

        ul { padding-left: 24px; }

        li { margin: 8px 0; }

        a { color: var(--primary); text-decoration: none; }

        a:hover { text-decoration: underline; }

        code {
            background: var(--code-bg);
            padding: 2px 6px;
            border-radius: 4px;
            font-family: 'SF Mono', Monaco, monospace;
            font-size: 0.9em;
        }

        hr {
            border: none;
            height: 1px;
            background: linear-gradient(90deg, transparent, var(--border), transparent);
            margin: 32px 0;
        }

        .tag {
            display: inline-block;
            padding: 2px 8px;
            background: var(--primary);
            color: white;
            border-radius: 4px;
            font-size: 0.85em;
            font-weight: 500;
        }

        @media (max-width: 600px) {
            body { padding: 20px 16px; }
            .content { padding: 24px; }
            h1 { font-size: 1.5em; }
            h2 { font-size: 1.2em; }
            table { font-size: 0.9em; }
            th, td { padding: 10px; }
        }"#;

/// Embed a converted briefing into the page skeleton.
///
/// Title and body are inserted verbatim.
pub fn render_page(briefing: &Briefing) -> String {
    let Briefing { title, body } = briefing;
    format!(
        r#"<!DOCTYPE html>
<html lang="{PAGE_LANG}">
<head>
    <meta charset="UTF-8">
    <meta http-equiv="Content-Type" content="text/html; charset=UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta http-equiv="X-UA-Compatible" content="IE=edge">
    <title>{title}</title>
    <style>
{PAGE_STYLE}
    </style>
</head>
<body>
    <div class="container">
        <a href="./index.html" class="back-link">← 返回首页</a>
        <div class="content">
{body}
        </div>
    </div>
</body>
</html>"#
    )
}

/// Convert the markdown briefing at `input` and write the page to `output`.
///
/// # Errors
///
/// Returns `"<input> not found"` when the input does not exist, and any I/O
/// error raised while reading the input or writing the page.
#[instrument(level = "info", skip_all, fields(input = %input.display(), output = %output.display()))]
pub async fn convert_file(input: &Path, output: &Path) -> Result<Briefing, Box<dyn Error>> {
    if !fs::try_exists(input).await? {
        return Err(format!("{} not found", input.display()).into());
    }

    let source = fs::read_to_string(input).await?;
    let briefing = markdown_to_html(&source);
    debug!(
        title = %briefing.title,
        body_preview = %truncate_for_log(&briefing.body, 200),
        "Converted briefing"
    );

    ensure_parent_dir(output).await?;
    fs::write(output, render_page(&briefing)).await?;
    info!(title = %briefing.title, "Wrote briefing page");

    Ok(briefing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn briefing() -> Briefing {
        Briefing {
            title: "AI Daily 2025-05-06".into(),
            body: "<h1>AI Daily 2025-05-06</h1>\n\n<p>Hello</p>".into(),
        }
    }

    #[test]
    fn test_render_page_is_standalone() {
        let page = render_page(&briefing());
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r#"<html lang="zh-CN">"#));
        assert!(page.contains(r#"<meta charset="UTF-8">"#));
        assert!(page.contains("<style>"));
        assert!(!page.contains("<link"));
        assert!(!page.contains("<script"));
        assert!(page.ends_with("</html>"));
    }

    #[test]
    fn test_render_page_embeds_title_and_body() {
        let page = render_page(&briefing());
        let doc = Html::parse_document(&page);

        let title = Selector::parse("title").unwrap();
        let title: String = doc.select(&title).next().unwrap().text().collect();
        assert_eq!(title, "AI Daily 2025-05-06");

        let heading = Selector::parse(".content > h1").unwrap();
        assert_eq!(doc.select(&heading).count(), 1);

        let back = Selector::parse("a.back-link").unwrap();
        let back = doc.select(&back).next().unwrap();
        assert_eq!(back.value().attr("href"), Some("./index.html"));
    }

    #[tokio::test]
    async fn test_convert_file_missing_input() {
        let tmp = tempfile::tempdir().unwrap();
        let err = convert_file(&tmp.path().join("nope.md"), &tmp.path().join("out.html"))
            .await
            .unwrap_err();
        assert!(err.to_string().ends_with("nope.md not found"));
        assert!(!tmp.path().join("out.html").exists());
    }

    #[tokio::test]
    async fn test_convert_file_writes_page() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("2025-05-06.md");
        let output = tmp.path().join("site/2025-05-06.html");
        std::fs::write(&input, "# 今日简报\n\n**要点**").unwrap();

        let briefing = convert_file(&input, &output).await.unwrap();
        assert_eq!(briefing.title, "今日简报");

        let page = std::fs::read_to_string(&output).unwrap();
        assert!(page.contains("<title>今日简报</title>"));
        assert!(page.contains("\n\n<strong>要点</strong>\n"));
    }

    #[tokio::test]
    async fn test_convert_file_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("in.md");
        let output = tmp.path().join("out.html");
        std::fs::write(&input, "plain").unwrap();
        std::fs::write(&output, "stale contents").unwrap();

        convert_file(&input, &output).await.unwrap();
        let page = std::fs::read_to_string(&output).unwrap();
        assert!(!page.contains("stale contents"));
        assert!(page.contains("<title>AI Briefing</title>"));
    }
}
