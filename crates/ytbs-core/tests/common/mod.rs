#![allow(dead_code)]

#[cfg(unix)]
pub mod fake_ytdlp;
pub mod mock_engine;
pub mod warn_counter;
