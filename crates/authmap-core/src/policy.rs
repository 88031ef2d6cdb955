use serde::{Deserialize, Serialize};

use crate::error::{AuthMapError, Result};

/// Required role for one protected operation.
///
/// Construction never fails so a policy can be declared in a `static` table or
/// deserialized as-is; [`AccessPolicy::validate`] (called by route table
/// compilation) rejects an empty role before any request is served.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessPolicy {
    required_role: String,
}

impl AccessPolicy {
    pub fn new(required_role: impl Into<String>) -> Self {
        Self {
            required_role: required_role.into(),
        }
    }

    pub fn required_role(&self) -> &str {
        &self.required_role
    }

    /// Fails with `InvalidPolicy` when the required role is blank.
    pub fn validate(&self) -> Result<()> {
        if self.required_role.trim().is_empty() {
            return Err(AuthMapError::InvalidPolicy(
                "required_role must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Build and validate in one step.
    pub fn required(required_role: impl Into<String>) -> Result<Self> {
        let p = Self::new(required_role);
        p.validate()?;
        Ok(p)
    }
}
