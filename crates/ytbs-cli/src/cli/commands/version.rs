//! Version command: asks yt-dlp directly, outside the retry policy.

use anyhow::Result;
use ytbs_core::{Session, YtDlp};

pub fn run_version(session: &Session<YtDlp>) -> Result<()> {
    let engine = session.engine();
    println!("{} {}", engine.binary().display(), engine.version()?);
    Ok(())
}
