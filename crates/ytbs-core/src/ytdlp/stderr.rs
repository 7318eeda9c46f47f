//! yt-dlp stderr handling: forward lines to the sink, pick out the error.

use crate::engine::EngineLogger;

const ERROR_PREFIX: &str = "ERROR:";
const WARNING_PREFIX: &str = "WARNING:";
const DEBUG_PREFIX: &str = "[debug]";

/// Send each non-empty line to the sink at the severity its prefix implies.
pub fn route_lines(logger: &dyn EngineLogger, text: &str) {
    for line in text.lines().map(str::trim_end).filter(|l| !l.is_empty()) {
        if line.starts_with(ERROR_PREFIX) {
            logger.error(line);
        } else if line.starts_with(WARNING_PREFIX) {
            logger.warning(line);
        } else if line.starts_with(DEBUG_PREFIX) {
            logger.debug(line);
        } else {
            logger.info(line);
        }
    }
}

/// Message for a failed run: the last `ERROR:` line without its prefix,
/// else the whole trimmed stderr, else `fallback`.
pub fn error_message(stderr: &str, fallback: &str) -> String {
    if let Some(line) = stderr
        .lines()
        .rev()
        .find_map(|l| l.trim().strip_prefix(ERROR_PREFIX))
    {
        return line.trim().to_string();
    }
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
