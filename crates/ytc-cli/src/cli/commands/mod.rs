//! CLI mode handlers.

mod configure;
mod download;

pub use configure::run_configure;
pub use download::run_download;
