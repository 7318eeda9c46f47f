//! Scripted engine: replies are popped from a shared queue so the script
//! survives engine rebuilds.

use serde_json::{json, Value};
use std::collections::VecDeque;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use ytbs_core::{Engine, EngineError, EngineOptions};

pub enum Reply {
    Value(Value),
    Download(&'static str),
    Other(&'static str),
}

/// One recorded engine call: operation, arguments, engine generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub op: &'static str,
    pub args: String,
    pub generation: usize,
}

#[derive(Default)]
pub struct Script {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<Call>>,
    builds: AtomicUsize,
    closed: AtomicUsize,
    fail_build: Option<String>,
}

impl Script {
    pub fn new(replies: Vec<Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            ..Self::default()
        })
    }

    pub fn failing_build(msg: &str) -> Arc<Self> {
        Arc::new(Self {
            fail_build: Some(msg.to_string()),
            ..Self::default()
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }

    fn next(&self) -> Reply {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Reply::Value(json!({})))
    }
}

pub struct MockEngine {
    script: Arc<Script>,
    generation: usize,
    pub proxy: Option<String>,
    pub has_logger: bool,
}

impl MockEngine {
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Not part of the retried surface.
    pub fn close(&mut self) {
        self.script.closed.fetch_add(1, Ordering::SeqCst);
    }

    fn answer(&self, op: &'static str, args: String) -> Result<Value, EngineError> {
        self.script.calls.lock().unwrap().push(Call {
            op,
            args,
            generation: self.generation,
        });
        match self.script.next() {
            Reply::Value(v) => Ok(v),
            Reply::Download(msg) => Err(EngineError::Download(msg.to_string())),
            Reply::Other(msg) => Err(EngineError::Other(msg.to_string())),
        }
    }
}

impl Engine for MockEngine {
    type Params = Arc<Script>;

    fn build(options: &EngineOptions, script: &Arc<Script>) -> Result<Self, EngineError> {
        if let Some(msg) = &script.fail_build {
            return Err(EngineError::Other(msg.clone()));
        }
        let generation = script.builds.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(Self {
            script: Arc::clone(script),
            generation,
            proxy: options.proxy().map(str::to_string),
            has_logger: options.logger().is_some(),
        })
    }

    fn extract_info(&mut self, url: &str, download: bool) -> Result<Value, EngineError> {
        self.answer("extract_info", format!("{} download={}", url, download))
    }

    fn download(&mut self, urls: &[String]) -> Result<i32, EngineError> {
        let v = self.answer("download", urls.join(" "))?;
        Ok(v.as_i64().unwrap_or(0) as i32)
    }

    fn download_with_info_file(&mut self, path: &Path) -> Result<i32, EngineError> {
        let v = self.answer("download_with_info_file", path.display().to_string())?;
        Ok(v.as_i64().unwrap_or(0) as i32)
    }
}
