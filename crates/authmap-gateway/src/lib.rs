//! AuthMap gateway library entry.
//!
//! This crate wires config, the compiled route table, the claims context, and
//! the enforcement middleware into an axum router. It is consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod context;
pub mod graph;
pub mod obs;
pub mod policy;
pub mod router;
pub mod services;
pub mod transport;
