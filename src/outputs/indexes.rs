//! Index page listing every generated briefing.
//!
//! The index is rebuilt from scratch on every run: the output directory is
//! scanned for `*.html` pages (except `index.html` itself), the file names
//! are sorted, and the listing is rendered newest first. File stems are
//! expected to be `YYYY-MM-DD` dates, for which lexicographic order is
//! chronological order.
//!
//! ```text
//! site/
//! ├── 2025-05-04.html
//! ├── 2025-05-05.html
//! ├── 2025-05-06.html
//! ├── index.html   # written here
//! └── index.json   # with --manifest
//! ```

use crate::models::{BriefingEntry, IndexManifest};
use crate::outputs::json;
use crate::utils::update_stamp;
use std::error::Error;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, instrument};

/// File name of the generated index page.
pub const INDEX_FILE: &str = "index.html";

const PAGE_EXTENSION: &str = "html";

const EMPTY_PLACEHOLDER: &str =
    r#"<div style="padding: 24px; text-align: center; color: #666;">暂无简报</div>"#;

const INDEX_STYLE: &str = r#"        @charset "UTF-8";
        :root {
            --primary: #0066cc;
            --primary-dark: #0052a3;
            --bg: #f8f9fa;
            --card-bg: #ffffff;
            --text: #333333;
            --text-secondary: #666666;
            --border: #e1e4e8;
            --shadow: 0 2px 8px rgba(0,0,0,0.08);
        }

        * { box-sizing: border-box; }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            margin: 0;
            padding: 40px 20px;
            color: var(--text);
        }

        .container { max-width: 900px; margin: 0 auto; }

        .header { text-align: center; margin-bottom: 40px; color: white; }

        .header h1 {
            font-size: 2.5em;
            margin: 0 0 10px 0;
            text-shadow: 0 2px 4px rgba(0,0,0,0.2);
        }

        .header p { font-size: 1.1em; opacity: 0.9; margin: 0; }

        .stats-card {
            background: var(--card-bg);
            border-radius: 16px;
            padding: 24px;
            margin-bottom: 30px;
            box-shadow: var(--shadow);
            display: flex;
            align-items: center;
            justify-content: center;
            gap: 12px;
            font-size: 1.2em;
        }

        .stats-card .emoji { font-size: 1.5em; }
        .stats-card .number { font-weight: bold; color: var(--primary); font-size: 1.3em; }

        .briefing-list {
            background: var(--card-bg);
            border-radius: 16px;
            overflow: hidden;
            box-shadow: var(--shadow);
        }

        .briefing-list h2 {
            margin: 0;
            padding: 24px;
            background: linear-gradient(135deg, var(--primary) 0%, var(--primary-dark) 100%);
            color: white;
            font-size: 1.3em;
        }

        .briefing-item {
            display: flex;
            align-items: center;
            padding: 18px 24px;
            border-bottom: 1px solid var(--border);
            transition: all 0.2s ease;
            text-decoration: none;
            color: var(--text);
        }

        .briefing-item:last-child { border-bottom: none; }

        .briefing-item:hover { background: #f6f8fa; transform: translateX(4px); }

        .briefing-item .date {
            font-weight: 600;
            color: var(--primary);
            min-width: 110px;
            font-size: 1.1em;
        }

        .briefing-item .arrow { margin-left: auto; color: var(--text-secondary); font-size: 1.2em; }

        .briefing-item:hover .arrow { color: var(--primary); }

        .footer { text-align: center; margin-top: 40px; color: rgba(255,255,255,0.7); font-size: 0.9em; }

        @media (max-width: 600px) {
            body { padding: 20px 16px; }
            .header h1 { font-size: 2em; }
            .briefing-item { padding: 16px 20px; }
            .briefing-item .date { min-width: 90px; }
        }"#;

/// List the briefing pages in `dir`, newest first.
///
/// Only files with an `.html` extension count, symlinks to files included;
/// `index.html` is skipped.
#[instrument(level = "info", skip_all, fields(dir = %dir.display()))]
pub async fn discover_entries(dir: &Path) -> Result<Vec<BriefingEntry>, Box<dyn Error>> {
    let mut names = Vec::new();
    let mut read_dir = fs::read_dir(dir).await?;
    while let Some(entry) = read_dir.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(PAGE_EXTENSION) {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name == INDEX_FILE {
            continue;
        }
        // metadata() follows symlinks; a dangling link is skipped.
        match fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => names.push(name.to_string()),
            Ok(_) => {}
            Err(e) => debug!(path = %path.display(), error = %e, "Skipping unreadable page"),
        }
    }

    names.sort();
    let entries: Vec<BriefingEntry> = names.into_iter().rev().map(entry_for).collect();
    debug!(count = entries.len(), "Discovered briefing pages");
    Ok(entries)
}

fn entry_for(file_name: String) -> BriefingEntry {
    let date = Path::new(&file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(&file_name)
        .to_string();
    BriefingEntry {
        date,
        href: file_name,
    }
}

/// Render the index page for `entries`, in the order given.
pub fn render_index(entries: &[BriefingEntry], updated_at: &str) -> String {
    let count = entries.len();
    let mut items = String::new();
    for entry in entries {
        writeln!(
            items,
            r#"            <a href="{href}" class="briefing-item">
                <span class="date">{date}</span>
                <span class="arrow">→</span>
            </a>"#,
            href = entry.href,
            date = entry.date,
        )
        .unwrap();
    }
    if items.is_empty() {
        items.push_str(EMPTY_PLACEHOLDER);
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
    <meta charset="UTF-8">
    <meta http-equiv="Content-Type" content="text/html; charset=UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>AI Daily Briefing - AI 动态简报</title>
    <style>
{INDEX_STYLE}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>🤖 AI Daily Briefing</h1>
            <p>每日 AI 动态简报归档</p>
        </div>

        <div class="stats-card">
            <span class="emoji">📊</span>
            <span>共收录</span>
            <span class="number">{count}</span>
            <span>篇简报</span>
        </div>

        <div class="briefing-list">
            <h2>📅 简报列表</h2>
{items}
        </div>

        <div class="footer">
            <p>最后更新: {updated_at} · 由 ai-daily-briefing skill 自动生成</p>
        </div>
    </div>
</body>
</html>"#
    )
}

/// Rebuild `index.html` in `dir`, and `index.json` when `manifest` is set.
///
/// The index is always overwritten. Returns the path of the written page.
///
/// # Errors
///
/// Returns `"<dir> not found"` when `dir` is not an existing directory, and
/// any I/O error raised while scanning or writing.
#[instrument(level = "info", skip_all, fields(dir = %dir.display(), manifest = manifest))]
pub async fn generate_index(dir: &Path, manifest: bool) -> Result<PathBuf, Box<dyn Error>> {
    let is_dir = match fs::metadata(dir).await {
        Ok(meta) => meta.is_dir(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
        Err(e) => return Err(e.into()),
    };
    if !is_dir {
        return Err(format!("{} not found", dir.display()).into());
    }

    let entries = discover_entries(dir).await?;
    let updated_at = update_stamp();

    let index_path = dir.join(INDEX_FILE);
    fs::write(&index_path, render_index(&entries, &updated_at)).await?;
    info!(path = %index_path.display(), count = entries.len(), "Wrote index page");

    if manifest {
        json::write_manifest(&IndexManifest::new(entries, updated_at), dir).await?;
    }

    Ok(index_path)
}
