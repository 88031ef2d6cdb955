//! HTTP transport layer: claims attachment and policy enforcement.

pub mod enforce;

pub use enforce::enforce;
