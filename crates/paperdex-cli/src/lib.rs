//! CLI library components for the paper metadata export.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod summary;
