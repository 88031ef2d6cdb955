use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::app_state::AppState;
use crate::graph::{self, Permission, PermissionGraph};

/// `GET /api/permissions`
pub async fn list_permissions(State(state): State<AppState>) -> Json<Vec<Permission>> {
    Json(graph::permissions(state.routes()))
}

/// `GET /api/permissions.csv`
pub async fn download_permissions(State(state): State<AppState>) -> Response {
    match graph::permissions_csv(state.routes()) {
        Ok(body) => (
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (header::CONTENT_DISPOSITION, "attachment; filename=\"permissions.csv\""),
            ],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "permissions export failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.code().as_str(), "msg": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// `GET /api/graph`
pub async fn permission_graph(State(state): State<AppState>) -> Json<PermissionGraph> {
    Json(graph::permission_graph(state.routes()))
}

/// `GET /metrics`
pub async fn metrics(State(state): State<AppState>) -> String {
    let routes = state.routes().len() as u64;
    state.metrics().render(&[("authmap_routes", routes)])
}
