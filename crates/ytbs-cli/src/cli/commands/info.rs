//! Info command: extract metadata and print it.

use anyhow::{Context, Result};
use ytbs_core::{Session, YtDlp};

/// Extract info for `url` and print it as pretty JSON.
pub fn run_info(session: &mut Session<YtDlp>, url: &str, download: bool) -> Result<()> {
    let info = session
        .extract_info(url, download)
        .with_context(|| format!("extracting info for {}", url))?;
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
