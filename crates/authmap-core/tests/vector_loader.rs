//! JSON scenario loader shared by gate tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::fs;

use authmap_core::IdentityClaims;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GateVector {
    pub description: String,
    pub claims: IdentityClaims,
    pub required_role: String,
    #[serde(default)]
    pub expect: Option<String>,
    #[serde(default)]
    pub expect_error: Option<ExpectError>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectError {
    pub code: String,
}

pub fn load(name: &str) -> Vec<GateVector> {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).expect("invalid test vector file")
}
