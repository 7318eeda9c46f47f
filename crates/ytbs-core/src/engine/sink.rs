//! Diagnostic sink handed to the engine in place of its own logger.

/// Receiver for the engine's internal messages, one method per severity.
pub trait EngineLogger: Send + Sync {
    fn debug(&self, msg: &str);
    fn info(&self, msg: &str);
    fn warning(&self, msg: &str);
    fn error(&self, msg: &str);
}

/// Sink that drops every message. Installed by the session so the engine's
/// chatter neither reaches the terminal nor accumulates in memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentLogger;

impl EngineLogger for SilentLogger {
    fn debug(&self, _msg: &str) {}
    fn info(&self, _msg: &str) {}
    fn warning(&self, _msg: &str) {}
    fn error(&self, _msg: &str) {}
}
