//! Download command.

use anyhow::{Context, Result};
use ytbs_core::{Session, YtDlp};

/// Download every URL; returns yt-dlp's return code.
pub fn run_download(session: &mut Session<YtDlp>, urls: &[String]) -> Result<i32> {
    let code = session
        .download(urls)
        .with_context(|| format!("downloading {} url(s)", urls.len()))?;
    tracing::info!(code, count = urls.len(), "download finished");
    Ok(code)
}
