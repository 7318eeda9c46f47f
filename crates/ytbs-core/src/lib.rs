pub mod config;
pub mod engine;
pub mod logging;
pub mod retry;
pub mod session;
pub mod ytdlp;

pub use engine::{Engine, EngineError, EngineLogger, EngineOptions, Operation, SilentLogger};
pub use session::{Session, SessionSettings, DEFAULT_PROXY};
pub use ytdlp::{YtDlp, YtDlpParams};
