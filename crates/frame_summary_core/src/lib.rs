//! Deterministic table summary primitives.
//!
//! This crate owns the fixed sample sequence, its single-column Arrow table,
//! and the response body contract. It intentionally excludes Lambda runtime
//! concerns, which live in `frame_summary_lambda`.

pub mod contract;
pub mod frame;
