//! Shared application state for the AuthMap gateway.
//!
//! Compiles the route table once, wires the claims resolver, and checks that
//! every protected route in config is actually served by the router.

use std::sync::Arc;

use authmap_core::error::{AuthMapError, Result};

use crate::config::AuthMapConfig;
use crate::context::{ClaimsResolver, HeaderClaimsResolver};
use crate::obs::GateMetrics;
use crate::policy::{RouteMethod, RouteTable};
use crate::services;

const FAIL_FAST_ON_UNSERVED: bool = false; // if changed to true, boot fails.

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: AuthMapConfig,
    routes: RouteTable,
    resolver: Arc<dyn ClaimsResolver>,
    metrics: GateMetrics,
}

impl AppState {
    /// Build state with the header-based claims resolver from `cfg.server`.
    pub fn new(cfg: AuthMapConfig) -> Result<Self> {
        let resolver =
            HeaderClaimsResolver::new(&cfg.server.role_header, &cfg.server.subject_header)?;
        Self::with_resolver(cfg, Arc::new(resolver))
    }

    /// Build state with a caller-supplied authentication collaborator.
    pub fn with_resolver(cfg: AuthMapConfig, resolver: Arc<dyn ClaimsResolver>) -> Result<Self> {
        let routes = RouteTable::compile(&cfg)?;

        // config <-> router sanity check
        for e in routes.entries() {
            let served = services::SERVED_ROUTES.iter().any(|(m, p)| {
                *p == e.path && (e.method == RouteMethod::All || *m == e.method)
            });
            if !served {
                tracing::warn!(method = %e.method, path = %e.path, "policy declared for a route the router does not serve");
                if FAIL_FAST_ON_UNSERVED {
                    return Err(AuthMapError::BadRequest(format!(
                        "policy declared for unserved route: {} {}",
                        e.method, e.path
                    )));
                }
            }
        }

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                routes,
                resolver,
                metrics: GateMetrics::default(),
            }),
        })
    }

    pub fn cfg(&self) -> &AuthMapConfig {
        &self.inner.cfg
    }

    pub fn routes(&self) -> &RouteTable {
        &self.inner.routes
    }

    pub fn claims_resolver(&self) -> &dyn ClaimsResolver {
        self.inner.resolver.as_ref()
    }

    pub fn metrics(&self) -> &GateMetrics {
        &self.inner.metrics
    }
}
