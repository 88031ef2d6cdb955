//! Lightweight in-process metrics.
//!
//! Gate outcomes are counted per route and exposed on `/metrics` without a
//! metrics crate.

pub mod metrics;

pub use metrics::{GateMetrics, Outcome};
