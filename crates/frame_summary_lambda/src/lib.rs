//! Lambda runtime integration for the frame summary handler.
//!
//! This crate owns the response envelope, invocation-mode configuration and
//! structured logging. The aggregation itself lives in `frame_summary_core`.

pub mod config;
pub mod handlers;
