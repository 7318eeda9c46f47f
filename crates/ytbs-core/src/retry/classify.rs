//! Classify engine errors into retry policy error kinds.

use crate::engine::EngineError;
use crate::retry::policy::ErrorKind;

/// Lowercase fragments that mark a download error as a transient auth wall.
pub const TRANSIENT_MARKERS: [&str; 2] = ["sign in", "failed to extract any player response"];

/// True if the message contains one of [`TRANSIENT_MARKERS`], ignoring case.
pub fn is_transient_message(msg: &str) -> bool {
    let lower = msg.to_lowercase();
    TRANSIENT_MARKERS.iter().any(|m| lower.contains(m))
}

/// Classify an engine error. Only download-class failures can be transient.
pub fn classify(e: &EngineError) -> ErrorKind {
    match e {
        EngineError::Download(msg) if is_transient_message(msg) => ErrorKind::TransientAuth,
        _ => ErrorKind::Other,
    }
}
