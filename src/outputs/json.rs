//! JSON manifest of the index.
//!
//! Written next to `index.html` as `index.json` when requested, so other
//! tools can read the listing without parsing HTML.

use crate::models::IndexManifest;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

/// File name of the manifest inside the output directory.
pub const MANIFEST_FILE: &str = "index.json";

/// Serialize `manifest` to `{dir}/index.json`, replacing any previous one.
#[instrument(level = "info", skip_all, fields(dir = %dir.display(), count = manifest.count))]
pub async fn write_manifest(manifest: &IndexManifest, dir: &Path) -> Result<PathBuf, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(manifest)?;
    let path = dir.join(MANIFEST_FILE);
    fs::write(&path, json).await?;
    info!(path = %path.display(), "Wrote index manifest");
    Ok(path)
}
