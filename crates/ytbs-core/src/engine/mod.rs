//! Engine abstraction: the media-extraction capability the session wraps.
//!
//! The session only depends on this trait; the yt-dlp process backend in
//! [`crate::ytdlp`] is one implementation, test doubles are another.

mod error;
mod options;
mod sink;

pub use error::EngineError;
pub use options::{EngineOptions, LOGGER_KEY, PROXY_KEY};
pub use sink::{EngineLogger, SilentLogger};

use serde_json::Value;
use std::path::Path;

/// Operations the session routes through its retry policy.
///
/// Anything else a backend offers is reached through
/// [`Session::engine_mut`](crate::session::Session::engine_mut).
pub trait Engine: Sized {
    /// Auxiliary construction parameters (binary path, extra arguments, ...).
    type Params: Clone + Default;

    /// Build an engine from options and parameters.
    fn build(options: &EngineOptions, params: &Self::Params) -> Result<Self, EngineError>;

    /// Extract metadata for `url`; when `download` is true the media is fetched too.
    fn extract_info(&mut self, url: &str, download: bool) -> Result<Value, EngineError>;

    /// Download every URL; returns the engine's return code.
    fn download(&mut self, urls: &[String]) -> Result<i32, EngineError>;

    /// Download from a previously written info JSON file; returns the engine's return code.
    fn download_with_info_file(&mut self, path: &Path) -> Result<i32, EngineError>;
}

/// Name of a dispatched operation, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ExtractInfo,
    Download,
    DownloadWithInfoFile,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::ExtractInfo => "extract_info",
            Operation::Download => "download",
            Operation::DownloadWithInfoFile => "download_with_info_file",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
