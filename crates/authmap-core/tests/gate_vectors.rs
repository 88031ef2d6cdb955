//! Gate scenario vectors and decision properties.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod vector_loader;

use authmap_core::{evaluate, AccessDecision, AccessPolicy, DenialReason, IdentityClaims};

fn outcome(d: AccessDecision) -> &'static str {
    match d {
        AccessDecision::Allowed => "ALLOWED",
        AccessDecision::Denied(r) => r.as_str(),
    }
}

#[test]
fn scenario_vectors() {
    let vectors = vector_loader::load("gate_scenarios.json");
    assert!(!vectors.is_empty());

    for v in vectors {
        let policy = AccessPolicy::new(v.required_role.clone());
        let res = evaluate(&v.claims, &policy);
        match (&v.expect, &v.expect_error) {
            (Some(want), None) => {
                let got = res.unwrap_or_else(|e| panic!("{}: unexpected error {e}", v.description));
                assert_eq!(outcome(got), want, "{}", v.description);
            }
            (None, Some(err)) => {
                let got = res.expect_err(&v.description);
                assert_eq!(got.code().as_str(), err.code, "{}", v.description);
            }
            _ => panic!("{}: vector needs exactly one of expect/expect_error", v.description),
        }
    }
}

const ROLES: [&str; 5] = ["admin", "user", "Admin", "auditor", "x"];

#[test]
fn allowed_iff_role_equals_required() {
    let mut claims: Vec<IdentityClaims> = ROLES.iter().map(|r| IdentityClaims::with_role(*r)).collect();
    claims.push(IdentityClaims::anonymous());

    for c in &claims {
        for required in ROLES {
            let d = evaluate(c, &AccessPolicy::new(required)).unwrap();
            let expected = c.role() == Some(required);
            assert_eq!(d.is_allowed(), expected, "claims={c:?} required={required}");
        }
    }
}

#[test]
fn anonymous_always_no_role() {
    for required in ROLES {
        let d = evaluate(&IdentityClaims::anonymous(), &AccessPolicy::new(required)).unwrap();
        assert_eq!(d, AccessDecision::Denied(DenialReason::NoRole));
    }
}

#[test]
fn mismatch_is_never_no_role() {
    for held in ROLES {
        for required in ROLES.iter().filter(|r| **r != held) {
            let d = evaluate(&IdentityClaims::with_role(held), &AccessPolicy::new(*required)).unwrap();
            assert_eq!(d.denial_reason(), Some(DenialReason::RoleMismatch));
        }
    }
}

#[test]
fn evaluation_is_deterministic() {
    let c = IdentityClaims::with_role("user").with_subject("u-1");
    let p = AccessPolicy::new("admin");
    let first = evaluate(&c, &p);
    for _ in 0..16 {
        assert_eq!(evaluate(&c, &p), first);
    }
    assert_eq!(c.role(), Some("user"));
}

#[test]
fn empty_policy_invalid_for_every_claim() {
    let p = AccessPolicy::new("");
    for c in [IdentityClaims::anonymous(), IdentityClaims::with_role("admin")] {
        let err = evaluate(&c, &p).unwrap_err();
        assert_eq!(err.code().as_str(), "INVALID_POLICY");
    }
}

#[test]
fn gate_is_usable_across_threads() {
    let p = std::sync::Arc::new(AccessPolicy::new("admin"));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let p = p.clone();
            std::thread::spawn(move || {
                let c = if i % 2 == 0 {
                    IdentityClaims::with_role("admin")
                } else {
                    IdentityClaims::with_role("user")
                };
                evaluate(&c, &p).unwrap().is_allowed()
            })
        })
        .collect();
    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![true, false, true, false]);
}
