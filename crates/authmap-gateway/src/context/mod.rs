//! Request identity context.
//!
//! Claims are resolved by a pluggable [`ClaimsResolver`] before routing and
//! read back by the enforcement layer through the [`Claims`] extractor.

pub mod claims;

pub use claims::{attach_claims, Claims, ClaimsResolver, HeaderClaimsResolver};
