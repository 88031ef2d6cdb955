//! AuthMap core: identity claims, access policies, and the role gate.
//!
//! This crate holds the authorization decision and its error surface. It has
//! no transport or runtime dependencies so route handlers in any framework can
//! call [`gate::evaluate`] directly.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. A malformed policy
//! surfaces as [`AuthMapError::InvalidPolicy`], never as a crash.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod claims;
pub mod decision;
pub mod error;
pub mod gate;
pub mod policy;

pub use claims::IdentityClaims;
pub use decision::{AccessDecision, DenialReason};
/// Shared result type.
pub use error::{AuthMapError, Result};
pub use gate::evaluate;
pub use policy::AccessPolicy;
