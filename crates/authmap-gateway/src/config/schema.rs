use std::net::SocketAddr;

use axum::http::HeaderName;
use serde::Deserialize;
use authmap_core::error::{AuthMapError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthMapConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    /// Routes declared at the application root.
    #[serde(default)]
    pub routes: Vec<RouteConfig>,

    /// Route groups mounted under a base path.
    #[serde(default)]
    pub mounts: Vec<MountConfig>,
}

impl AuthMapConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(AuthMapError::UnsupportedVersion);
        }
        if self.route_count() == 0 {
            return Err(AuthMapError::BadRequest(
                "at least one route must be declared (routes or mounts)".into(),
            ));
        }

        self.server.validate()?;

        for m in &self.mounts {
            if m.routes.is_empty() {
                return Err(AuthMapError::BadRequest(format!(
                    "mount {} declares no routes",
                    m.base
                )));
            }
        }
        Ok(())
    }

    pub fn route_count(&self) -> usize {
        self.routes.len() + self.mounts.iter().map(|m| m.routes.len()).sum::<usize>()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Header the demo claims resolver trusts for the caller's role.
    #[serde(default = "default_role_header")]
    pub role_header: String,

    #[serde(default = "default_subject_header")]
    pub subject_header: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            role_header: default_role_header(),
            subject_header: default_subject_header(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen.parse::<SocketAddr>().map_err(|_| {
            AuthMapError::BadRequest(format!(
                "server.listen must be a valid socket address: {}",
                self.listen
            ))
        })?;
        for (field, value) in [
            ("server.role_header", &self.role_header),
            ("server.subject_header", &self.subject_header),
        ] {
            HeaderName::try_from(value.as_str()).map_err(|_| {
                AuthMapError::BadRequest(format!("{field} is not a valid header name: {value}"))
            })?;
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:3000".into()
}
fn default_role_header() -> String {
    "x-authmap-role".into()
}
fn default_subject_header() -> String {
    "x-authmap-subject".into()
}

/// One protected route: `method path` requires `role`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteConfig {
    pub method: String,
    pub path: String,
    pub role: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MountConfig {
    pub base: String,
    pub routes: Vec<RouteConfig>,
}
