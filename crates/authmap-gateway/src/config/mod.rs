//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;

use authmap_core::error::{AuthMapError, Result};

pub use schema::{AuthMapConfig, MountConfig, RouteConfig, ServerSection};

/// Env var naming the config file; falls back to [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "AUTHMAP_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "authmap.yaml";

pub fn config_path_from_env() -> String {
    std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

pub fn load_from_file(path: &str) -> Result<AuthMapConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| AuthMapError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<AuthMapConfig> {
    let cfg: AuthMapConfig = serde_yaml::from_str(s)
        .map_err(|e| AuthMapError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
