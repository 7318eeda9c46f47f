//! yt-dlp process backend.
//!
//! Each call spawns the `yt-dlp` executable with flags derived from the engine
//! options. stderr goes to the installed sink line by line; a non-zero exit
//! becomes [`EngineError::Download`] with the last `ERROR:` line as message.
//! Runs in the current thread and blocks until the child exits.

mod args;
mod stderr;

pub use args::option_args;

use crate::engine::{Engine, EngineError, EngineLogger, EngineOptions, SilentLogger};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::Arc;

/// Construction parameters for [`YtDlp`].
#[derive(Debug, Clone)]
pub struct YtDlpParams {
    /// Executable to run (looked up in `PATH` when not absolute).
    pub binary: PathBuf,
    /// Extra flags appended after the option-derived ones.
    pub extra_args: Vec<String>,
}

impl Default for YtDlpParams {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("yt-dlp"),
            extra_args: Vec::new(),
        }
    }
}

/// Engine that drives the `yt-dlp` executable.
pub struct YtDlp {
    binary: PathBuf,
    base_args: Vec<String>,
    logger: Arc<dyn EngineLogger>,
}

impl YtDlp {
    /// Executable this engine runs.
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Flags passed on every invocation.
    pub fn base_args(&self) -> &[String] {
        &self.base_args
    }

    /// `yt-dlp --version`, trimmed.
    pub fn version(&self) -> Result<String, EngineError> {
        let out = self.spawn(&["--version".to_string()], false)?;
        if !out.status.success() {
            return Err(EngineError::Other(format!(
                "{} --version exited with {}",
                self.binary.display(),
                out.status
            )));
        }
        Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
    }

    fn spawn(&self, args: &[String], with_base: bool) -> Result<Output, EngineError> {
        let mut cmd = Command::new(&self.binary);
        if with_base {
            cmd.args(&self.base_args);
        }
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        tracing::debug!(binary = %self.binary.display(), ?args, "spawning yt-dlp");
        cmd.output().map_err(|source| EngineError::Spawn {
            binary: self.binary.display().to_string(),
            source,
        })
    }

    /// Run with base flags, route stderr to the sink, fail on non-zero exit.
    fn run(&self, args: &[String]) -> Result<Output, EngineError> {
        let out = self.spawn(args, true)?;
        let err_text = String::from_utf8_lossy(&out.stderr);
        stderr::route_lines(self.logger.as_ref(), &err_text);
        if !out.status.success() {
            let fallback = format!("yt-dlp exited with {}", out.status);
            return Err(EngineError::Download(stderr::error_message(
                &err_text, &fallback,
            )));
        }
        Ok(out)
    }

    fn return_code(out: &Output) -> i32 {
        out.status.code().unwrap_or(0)
    }
}

impl Engine for YtDlp {
    type Params = YtDlpParams;

    fn build(options: &EngineOptions, params: &YtDlpParams) -> Result<Self, EngineError> {
        let mut base_args = option_args(options)?;
        base_args.extend(params.extra_args.iter().cloned());
        let logger = options
            .logger()
            .cloned()
            .unwrap_or_else(|| Arc::new(SilentLogger) as Arc<dyn EngineLogger>);
        Ok(Self {
            binary: params.binary.clone(),
            base_args,
            logger,
        })
    }

    fn extract_info(&mut self, url: &str, download: bool) -> Result<Value, EngineError> {
        let mut args = vec!["-J".to_string()];
        if download {
            args.push("--no-simulate".to_string());
        }
        args.push("--".to_string());
        args.push(url.to_string());
        let out = self.run(&args)?;
        Ok(serde_json::from_slice(&out.stdout)?)
    }

    fn download(&mut self, urls: &[String]) -> Result<i32, EngineError> {
        let mut args = vec!["--".to_string()];
        args.extend(urls.iter().cloned());
        let out = self.run(&args)?;
        stderr::route_lines(self.logger.as_ref(), &String::from_utf8_lossy(&out.stdout));
        Ok(Self::return_code(&out))
    }

    fn download_with_info_file(&mut self, path: &Path) -> Result<i32, EngineError> {
        let args = vec![
            "--load-info-json".to_string(),
            path.display().to_string(),
        ];
        let out = self.run(&args)?;
        stderr::route_lines(self.logger.as_ref(), &String::from_utf8_lossy(&out.stdout));
        Ok(Self::return_code(&out))
    }
}
