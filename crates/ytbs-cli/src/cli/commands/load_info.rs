//! Load-info command: download from an info JSON file.

use anyhow::{Context, Result};
use std::path::Path;
use ytbs_core::{Session, YtDlp};

pub fn run_load_info(session: &mut Session<YtDlp>, path: &Path) -> Result<i32> {
    if !path.exists() {
        anyhow::bail!("info file {} does not exist", path.display());
    }
    let code = session
        .download_with_info_file(path)
        .with_context(|| format!("downloading from {}", path.display()))?;
    Ok(code)
}
