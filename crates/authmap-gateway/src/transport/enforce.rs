//! Route enforcement middleware.
//!
//! Runs after routing so the matched route pattern is known, asks the gate
//! for a decision, and either forwards the request or answers it directly:
//! - `NoRole` -> 401
//! - `RoleMismatch` -> 403
//! - `InvalidPolicy` -> 500 (cannot happen with a compiled table, but the
//!   gate still reports it)
//!
//! Routes without a policy are public and pass through untouched.

use axum::{
    extract::{MatchedPath, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use authmap_core::error::AuthMapError;
use authmap_core::{gate, AccessDecision, DenialReason};

use crate::app_state::AppState;
use crate::context::Claims;
use crate::obs::Outcome;

pub async fn enforce(
    State(state): State<AppState>,
    Claims(claims): Claims,
    matched: Option<MatchedPath>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let path = matched
        .as_ref()
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let Some(policy) = state.routes().policy_for(&method, &path) else {
        return next.run(req).await;
    };

    let route = format!("{method} {path}");
    match gate::evaluate(&claims, policy) {
        Ok(AccessDecision::Allowed) => {
            state.metrics().record(Outcome::Allowed, &route);
            tracing::debug!(%route, role = ?claims.role(), subject = ?claims.subject(), "access allowed");
            next.run(req).await
        }
        Ok(decision @ AccessDecision::Denied(reason)) => {
            state.metrics().record(Outcome::from(decision), &route);
            tracing::info!(
                %route,
                reason = reason.as_str(),
                role = ?claims.role(),
                subject = ?claims.subject(),
                required = policy.required_role(),
                "access denied"
            );
            deny_response(reason)
        }
        Err(e) => {
            state.metrics().record(Outcome::InvalidPolicy, &route);
            tracing::error!(%route, error = %e, "gate rejected route policy");
            error_response(&e)
        }
    }
}

fn deny_response(reason: DenialReason) -> Response {
    let (status, msg) = match reason {
        DenialReason::NoRole => (StatusCode::UNAUTHORIZED, "authentication required"),
        DenialReason::RoleMismatch => (StatusCode::FORBIDDEN, "role not permitted"),
    };
    (status, Json(json!({ "error": reason.as_str(), "msg": msg }))).into_response()
}

fn error_response(e: &AuthMapError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": e.code().as_str(), "msg": e.to_string() })),
    )
        .into_response()
}
