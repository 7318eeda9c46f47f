//! Session: the engine wrapped with a fixed proxy, a silent sink and a retry
//! policy for transient sign-in walls.

use crate::engine::{Engine, EngineError, EngineOptions, Operation};
use crate::retry::{run_with_retry, RetryPolicy};
use serde_json::Value;
use std::path::Path;

/// Local proxy every engine is pointed at unless configured otherwise.
pub const DEFAULT_PROXY: &str = "127.0.0.1:3128";

/// Knobs that shape a session (not the engine).
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    /// Proxy address forced into the engine options.
    pub proxy: String,
    /// Retry ceiling and backoff for transient failures.
    pub retry: RetryPolicy,
    /// Discard and rebuild the engine before each retry.
    pub reinitialize_on_retry: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            proxy: DEFAULT_PROXY.to_string(),
            retry: RetryPolicy::default(),
            reinitialize_on_retry: true,
        }
    }
}

/// Engine wrapper that retries `extract_info`, `download` and
/// `download_with_info_file` when the engine hits a transient sign-in wall.
///
/// Everything else the engine offers is reached through [`Session::engine_mut`]
/// and is called as-is, with no retry.
pub struct Session<E: Engine> {
    options: EngineOptions,
    params: E::Params,
    settings: SessionSettings,
    engine: E,
}

impl<E: Engine> Session<E> {
    /// Build a session with default settings.
    pub fn new(options: EngineOptions, params: E::Params) -> Result<Self, EngineError> {
        Self::with_settings(options, params, SessionSettings::default())
    }

    /// Build a session with empty options and default parameters.
    pub fn with_defaults() -> Result<Self, EngineError> {
        Self::new(EngineOptions::default(), E::Params::default())
    }

    /// Build a session. The `logger` and `proxy` options are always
    /// overwritten; engine construction errors are returned as-is.
    pub fn with_settings(
        mut options: EngineOptions,
        params: E::Params,
        settings: SessionSettings,
    ) -> Result<Self, EngineError> {
        options.force_session_entries(&settings.proxy);
        let engine = E::build(&options, &params)?;
        tracing::debug!(proxy = %settings.proxy, "engine ready");
        Ok(Self {
            options,
            params,
            settings,
            engine,
        })
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Raw engine, for calls outside the retried surface.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Replace the engine with a fresh one built from the stored options.
    pub fn reinitialize(&mut self) -> Result<(), EngineError> {
        self.engine = E::build(&self.options, &self.params)?;
        tracing::debug!(proxy = %self.settings.proxy, "engine rebuilt");
        Ok(())
    }

    pub fn extract_info(&mut self, url: &str, download: bool) -> Result<Value, EngineError> {
        self.dispatch(Operation::ExtractInfo, |engine| {
            engine.extract_info(url, download)
        })
    }

    pub fn download(&mut self, urls: &[String]) -> Result<i32, EngineError> {
        self.dispatch(Operation::Download, |engine| engine.download(urls))
    }

    pub fn download_with_info_file(&mut self, path: &Path) -> Result<i32, EngineError> {
        self.dispatch(Operation::DownloadWithInfoFile, |engine| {
            engine.download_with_info_file(path)
        })
    }

    fn dispatch<T, F>(&mut self, op: Operation, mut call: F) -> Result<T, EngineError>
    where
        F: FnMut(&mut E) -> Result<T, EngineError>,
    {
        let policy = self.settings.retry;
        let rebuild = self.settings.reinitialize_on_retry;
        run_with_retry(&policy, op, |attempt| {
            if attempt > 1 && rebuild {
                self.reinitialize()?;
            }
            call(&mut self.engine)
        })
    }
}
