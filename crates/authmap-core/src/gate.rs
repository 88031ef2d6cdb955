//! The access gate.
//!
//! Every protected operation calls [`evaluate`] before doing any work. The
//! function is pure: it keeps no state between calls, does not log, and never
//! touches the claims it is given. Callers branch on the returned
//! [`AccessDecision`] and are responsible for rejecting denied requests.

use crate::claims::IdentityClaims;
use crate::decision::{AccessDecision, DenialReason};
use crate::error::Result;
use crate::policy::AccessPolicy;

/// Decide whether `claims` satisfy `policy`.
///
/// Role comparison is exact and case-sensitive. A blank required role is a
/// configuration defect and is reported as `Err(InvalidPolicy)` before the
/// claims are looked at.
pub fn evaluate(claims: &IdentityClaims, policy: &AccessPolicy) -> Result<AccessDecision> {
    policy.validate()?;

    let decision = match claims.role() {
        None => AccessDecision::Denied(DenialReason::NoRole),
        Some(role) if role == policy.required_role() => AccessDecision::Allowed,
        Some(_) => AccessDecision::Denied(DenialReason::RoleMismatch),
    };
    Ok(decision)
}
