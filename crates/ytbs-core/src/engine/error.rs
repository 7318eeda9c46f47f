//! Engine error type shared by every backend.

use thiserror::Error;

/// Failure reported by an engine call or engine construction.
///
/// Only [`EngineError::Download`] is the engine's own download/extraction
/// failure; the retry layer never looks at the other variants.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine reported a download or extraction problem.
    #[error("download error: {0}")]
    Download(String),
    /// The engine executable could not be started.
    #[error("failed to start {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },
    /// Engine output was not the JSON we asked for.
    #[error("invalid engine output: {0}")]
    Parse(#[from] serde_json::Error),
    /// Anything else (invalid options, unexpected engine state).
    #[error("{0}")]
    Other(String),
}

impl EngineError {
    /// True for the engine's download-class failure.
    pub fn is_download(&self) -> bool {
        matches!(self, EngineError::Download(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_display() {
        let e = EngineError::Download("Sign in to confirm you're not a bot".into());
        assert_eq!(
            e.to_string(),
            "download error: Sign in to confirm you're not a bot"
        );
        assert!(e.is_download());
    }

    #[test]
    fn spawn_is_not_download_class() {
        let e = EngineError::Spawn {
            binary: "yt-dlp".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(!e.is_download());
        assert!(e.to_string().starts_with("failed to start yt-dlp"));
    }
}
