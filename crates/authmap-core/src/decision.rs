//! Gate output.

use serde::Serialize;

/// Why a request was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DenialReason {
    /// Claims carry no role.
    NoRole,
    /// Claims carry a role other than the required one.
    RoleMismatch,
}

impl DenialReason {
    pub fn as_str(self) -> &'static str {
        match self {
            DenialReason::NoRole => "NO_ROLE",
            DenialReason::RoleMismatch => "ROLE_MISMATCH",
        }
    }
}

/// Result of one gate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "reason")]
pub enum AccessDecision {
    Allowed,
    Denied(DenialReason),
}

impl AccessDecision {
    pub fn is_allowed(self) -> bool {
        matches!(self, AccessDecision::Allowed)
    }

    pub fn denial_reason(self) -> Option<DenialReason> {
        match self {
            AccessDecision::Allowed => None,
            AccessDecision::Denied(r) => Some(r),
        }
    }
}
