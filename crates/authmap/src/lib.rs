//! Top-level facade crate for AuthMap.
//!
//! Re-exports the role gate and the gateway library so users can depend on a single crate.

pub mod core {
    pub use authmap_core::*;
}

pub mod gateway {
    pub use authmap_gateway::*;
}
