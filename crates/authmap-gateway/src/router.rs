//! Axum router wiring.
//!
//! Layer order matters: `attach_claims` wraps the whole router so claims are
//! in place before `enforce`, which runs as a route layer and therefore sees
//! the matched route pattern.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::services::{demo, permissions};
use crate::{app_state::AppState, context, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/admin", get(demo::admin_panel))
        .route("/admin/delete", post(demo::admin_delete))
        .route("/profile", get(demo::profile))
        .route("/api/permissions", get(permissions::list_permissions))
        .route("/api/permissions.csv", get(permissions::download_permissions))
        .route("/api/graph", get(permissions::permission_graph))
        .route("/metrics", get(permissions::metrics))
        .route_layer(middleware::from_fn_with_state(state.clone(), transport::enforce))
        .layer(middleware::from_fn_with_state(state.clone(), context::attach_claims))
        .with_state(state)
}
