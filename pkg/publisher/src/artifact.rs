use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Write the embed snippet to `path`, replacing whatever was there.
pub fn write_embed_artifact(snippet: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }
    std::fs::write(path, snippet)
        .with_context(|| format!("Failed to write embed snippet to {}", path.display()))?;
    debug!("Wrote {} bytes of embed snippet to {}", snippet.len(), path.display());
    Ok(())
}
