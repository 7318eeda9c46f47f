//! CLI for the ytbs proxied yt-dlp session.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use ytbs_core::config::{self, YtbsConfig};
use ytbs_core::{EngineOptions, Session, YtDlp, YtDlpParams};

use commands::{run_download, run_info, run_load_info, run_version};

/// Top-level CLI for ytbs.
#[derive(Debug, Parser)]
#[command(name = "ytbs")]
#[command(about = "yt-dlp through a local proxy, retrying sign-in walls", long_about = None)]
pub struct Cli {
    /// yt-dlp executable to use instead of the configured one.
    #[arg(long = "yt-dlp", global = true, value_name = "PATH")]
    pub yt_dlp: Option<PathBuf>,

    /// Override the retry ceiling (attempts per call, including the first).
    #[arg(long, global = true, value_name = "N")]
    pub max_attempts: Option<u32>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print metadata for a URL as JSON.
    Info {
        /// Video or playlist URL.
        url: String,
        /// Download the media as well.
        #[arg(long)]
        download: bool,
    },

    /// Download one or more URLs.
    Download {
        /// Video or playlist URLs.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Download from a previously written .info.json file.
    LoadInfo {
        /// Path to the info JSON file.
        path: PathBuf,
    },

    /// Print the yt-dlp version.
    Version,
}

impl Cli {
    /// Build the session from config plus command-line overrides.
    fn session(&self, cfg: &YtbsConfig) -> Result<Session<YtDlp>> {
        let mut settings = cfg.session_settings();
        if let Some(n) = self.max_attempts {
            settings.retry.max_attempts = n.max(1);
        }
        let params = YtDlpParams {
            binary: self
                .yt_dlp
                .clone()
                .unwrap_or_else(|| PathBuf::from(&cfg.yt_dlp_binary)),
            extra_args: Vec::new(),
        };
        Ok(Session::with_settings(EngineOptions::new(), params, settings)?)
    }
}

impl CliCommand {
    /// Parse arguments, run the command, and return the process exit code.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let mut session = cli.session(&cfg)?;

        let code = match &cli.command {
            CliCommand::Info { url, download } => {
                run_info(&mut session, url, *download)?;
                0
            }
            CliCommand::Download { urls } => run_download(&mut session, urls)?,
            CliCommand::LoadInfo { path } => run_load_info(&mut session, path)?,
            CliCommand::Version => {
                run_version(&session)?;
                0
            }
        };

        Ok(code)
    }
}

#[cfg(test)]
mod tests;
