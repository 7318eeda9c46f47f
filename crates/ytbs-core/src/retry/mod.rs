//! Retry and backoff policy.
//!
//! This module decides which engine failures are transient (the engine was
//! asked to sign in, or found no player response) and how long to wait before
//! trying again, so the session does not have to.

mod classify;
mod policy;
mod run;

pub use classify::{classify, is_transient_message, TRANSIENT_MARKERS};
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
