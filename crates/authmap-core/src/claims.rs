//! Identity claims for one request.
//!
//! Claims are built by an authentication step outside this crate and handed
//! to the gate read-only. Fields are private so nothing downstream can
//! rewrite the role after it has been established.

use serde::{Deserialize, Serialize};

/// The calling principal as established by authentication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subject: Option<String>,
}

impl IdentityClaims {
    /// Claims for a principal without any role.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Claims carrying `role`. An empty role is the same as no role.
    pub fn with_role(role: impl Into<String>) -> Self {
        let role = role.into();
        Self {
            role: (!role.is_empty()).then_some(role),
            subject: None,
        }
    }

    /// Attach a subject identifier (user id, token `sub`, ...).
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref().filter(|r| !r.is_empty())
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.role().is_none()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_role_is_anonymous() {
        assert!(IdentityClaims::with_role("").is_anonymous());
        assert_eq!(IdentityClaims::with_role("admin").role(), Some("admin"));
    }

    #[test]
    fn empty_role_without_constructor_reads_as_none() {
        // serde fills fields directly and skips `with_role`.
        let c = IdentityClaims {
            role: Some(String::new()),
            subject: None,
        };
        assert_eq!(c.role(), None);
        assert!(c.is_anonymous());
    }
}
