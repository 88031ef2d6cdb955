//! Built-in route handlers.
//!
//! - `demo`: sample protected application routes
//! - `permissions`: permission map (JSON and CSV), graph payload, and metrics

pub mod demo;
pub mod permissions;

use crate::policy::RouteMethod;

/// Every `(method, path)` the router serves; checked against config at boot.
pub const SERVED_ROUTES: &[(RouteMethod, &str)] = &[
    (RouteMethod::Get, "/admin"),
    (RouteMethod::Post, "/admin/delete"),
    (RouteMethod::Get, "/profile"),
    (RouteMethod::Get, "/api/permissions"),
    (RouteMethod::Get, "/api/permissions.csv"),
    (RouteMethod::Get, "/api/graph"),
    (RouteMethod::Get, "/metrics"),
];
