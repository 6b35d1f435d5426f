use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

/// Text of one input file, handed out as numbered lines.
pub struct LineSource {
    content: String,
}

impl LineSource {
    pub async fn open(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read input file {}", path.display()))?;
        info!("Loaded {} bytes from {}", bytes.len(), path.display());
        Ok(Self::from_bytes(&bytes))
    }

    /// Invalid UTF-8 only affects the rows it appears in: each bad sequence
    /// becomes U+FFFD and the row goes through validation as usual.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let content = String::from_utf8_lossy(bytes);
        if let std::borrow::Cow::Owned(_) = content {
            warn!("Input contains invalid UTF-8; affected bytes were replaced");
        }
        Self::from_text(content.into_owned())
    }

    pub fn from_text(content: String) -> Self {
        Self { content }
    }

    /// 1-based `(line_number, text)` pairs. Blank lines at the end are skipped.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        let keep = self
            .content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, _)| i + 1)
            .last()
            .unwrap_or(0);

        self.content
            .lines()
            .take(keep)
            .enumerate()
            .map(|(i, line)| (i + 1, line))
    }
}
