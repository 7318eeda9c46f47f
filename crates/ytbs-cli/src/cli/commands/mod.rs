//! CLI command handlers, one per file.

mod download;
mod info;
mod load_info;
mod version;

pub use download::run_download;
pub use info::run_info;
pub use load_info::run_load_info;
pub use version::run_version;
