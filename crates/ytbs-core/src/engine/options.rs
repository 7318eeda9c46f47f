//! Engine option mapping.

use super::sink::{EngineLogger, SilentLogger};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Option key holding the diagnostic sink.
pub const LOGGER_KEY: &str = "logger";
/// Option key holding the proxy address.
pub const PROXY_KEY: &str = "proxy";

/// Key/value options passed to [`Engine::build`](super::Engine::build).
///
/// Plain options are JSON values keyed by the engine's option names. The
/// `logger` entry is not representable as JSON, so it lives in its own typed
/// slot; a plain `"logger"` value is dropped by
/// [`EngineOptions::force_session_entries`].
#[derive(Clone, Default)]
pub struct EngineOptions {
    params: Map<String, Value>,
    logger: Option<Arc<dyn EngineLogger>>,
}

impl EngineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.params.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(Value::as_str)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.params.get(key).and_then(Value::as_bool)
    }

    pub fn set_logger(&mut self, logger: Arc<dyn EngineLogger>) {
        self.logger = Some(logger);
    }

    /// Proxy address, if one is configured.
    pub fn proxy(&self) -> Option<&str> {
        self.get_str(PROXY_KEY)
    }

    /// Installed sink, if any.
    pub fn logger(&self) -> Option<&Arc<dyn EngineLogger>> {
        self.logger.as_ref()
    }

    /// Iterate plain options in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.params.iter()
    }

    /// Overwrite the two entries every session owns: a silent sink and the
    /// proxy address. Caller-provided values for either key are replaced.
    pub fn force_session_entries(&mut self, proxy: &str) {
        self.params.remove(LOGGER_KEY);
        self.set_logger(Arc::new(SilentLogger));
        self.params
            .insert(PROXY_KEY.to_string(), Value::String(proxy.to_string()));
    }
}

impl fmt::Debug for EngineOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineOptions")
            .field("params", &self.params)
            .field("logger", &self.logger.as_ref().map(|_| "<sink>"))
            .finish()
    }
}

impl From<Map<String, Value>> for EngineOptions {
    fn from(params: Map<String, Value>) -> Self {
        Self {
            params,
            logger: None,
        }
    }
}
