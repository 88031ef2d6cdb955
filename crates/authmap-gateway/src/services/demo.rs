//! Demo application routes.
//!
//! Plain handlers with no authorization logic of their own: by the time one
//! runs, the enforcement layer has already let the request through.

use axum::Json;
use serde_json::{json, Value};

use crate::context::Claims;

pub async fn admin_panel() -> &'static str {
    "Admin panel"
}

pub async fn admin_delete(Claims(claims): Claims) -> Json<Value> {
    Json(json!({
        "deleted": true,
        "by": claims.subject(),
    }))
}

pub async fn profile(Claims(claims): Claims) -> Json<Value> {
    Json(json!({
        "subject": claims.subject(),
        "role": claims.role(),
    }))
}
