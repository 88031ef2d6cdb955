//! Route table compilation and lookup.
//!
//! Route declarations from config are normalized (uppercase method, joined
//! mount paths) and every policy is validated here, so an unusable policy
//! stops the process at boot instead of failing individual requests.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use axum::http::Method;
use authmap_core::error::{AuthMapError, Result};
use authmap_core::AccessPolicy;

use crate::config::{AuthMapConfig, RouteConfig};

/// HTTP method as declared in config. `All` matches any method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RouteMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
    All,
}

impl RouteMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            RouteMethod::Get => "GET",
            RouteMethod::Post => "POST",
            RouteMethod::Put => "PUT",
            RouteMethod::Delete => "DELETE",
            RouteMethod::Patch => "PATCH",
            RouteMethod::Options => "OPTIONS",
            RouteMethod::Head => "HEAD",
            RouteMethod::All => "ALL",
        }
    }

    /// Map a request method; `None` for methods config cannot name (TRACE, ...).
    pub fn from_http(m: &Method) -> Option<Self> {
        match *m {
            Method::GET => Some(RouteMethod::Get),
            Method::POST => Some(RouteMethod::Post),
            Method::PUT => Some(RouteMethod::Put),
            Method::DELETE => Some(RouteMethod::Delete),
            Method::PATCH => Some(RouteMethod::Patch),
            Method::OPTIONS => Some(RouteMethod::Options),
            Method::HEAD => Some(RouteMethod::Head),
            _ => None,
        }
    }
}

impl FromStr for RouteMethod {
    type Err = AuthMapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(RouteMethod::Get),
            "POST" => Ok(RouteMethod::Post),
            "PUT" => Ok(RouteMethod::Put),
            "DELETE" => Ok(RouteMethod::Delete),
            "PATCH" => Ok(RouteMethod::Patch),
            "OPTIONS" => Ok(RouteMethod::Options),
            "HEAD" => Ok(RouteMethod::Head),
            "ALL" => Ok(RouteMethod::All),
            _ => Err(AuthMapError::BadRequest(format!("unsupported route method: {s}"))),
        }
    }
}

impl fmt::Display for RouteMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compiled route entry.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub method: RouteMethod,
    pub path: String,
    pub policy: AccessPolicy,
}

/// `(path, method) -> policy`, built once at startup and shared read-only.
#[derive(Debug, Default)]
pub struct RouteTable {
    entries: BTreeMap<(String, RouteMethod), AccessPolicy>,
}

impl RouteTable {
    pub fn compile(cfg: &AuthMapConfig) -> Result<Self> {
        let mut table = Self::default();
        for r in &cfg.routes {
            table.insert("", r)?;
        }
        for m in &cfg.mounts {
            for r in &m.routes {
                table.insert(&m.base, r)?;
            }
        }
        Ok(table)
    }

    fn insert(&mut self, base: &str, r: &RouteConfig) -> Result<()> {
        let method: RouteMethod = r.method.parse()?;
        let path = normalize_path(&combine_paths(base.trim(), r.path.trim()))?;

        let policy = AccessPolicy::new(r.role.clone());
        policy.validate().map_err(|e| {
            AuthMapError::InvalidPolicy(format!("{method} {path}: {e}"))
        })?;

        let key = (path, method);
        if self.entries.contains_key(&key) {
            return Err(AuthMapError::BadRequest(format!(
                "duplicate route declaration: {} {}",
                key.1, key.0
            )));
        }
        self.entries.insert(key, policy);
        Ok(())
    }

    /// Policy guarding `method path`; exact method first, then `ALL`.
    /// HEAD is served by GET handlers, so it falls back to the GET entry
    /// before `ALL`. `None` means the route is public.
    pub fn policy_for(&self, method: &Method, path: &str) -> Option<&AccessPolicy> {
        let lookup = |m: RouteMethod| self.entries.get(&(path.to_string(), m));

        let exact = RouteMethod::from_http(method).and_then(lookup);
        let head_as_get = match *method {
            Method::HEAD => lookup(RouteMethod::Get),
            _ => None,
        };
        exact
            .or(head_as_get)
            .or_else(|| lookup(RouteMethod::All))
    }

    /// Entries ordered by `(path, method)`.
    pub fn entries(&self) -> impl Iterator<Item = RouteEntry> + '_ {
        self.entries.iter().map(|((path, method), policy)| RouteEntry {
            method: *method,
            path: path.clone(),
            policy: policy.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Join a mount base and a route path with exactly one `/` between them.
pub fn combine_paths(base: &str, path: &str) -> String {
    if base.is_empty() {
        return path.to_string();
    }
    if path.is_empty() {
        return base.to_string();
    }
    match (base.ends_with('/'), path.starts_with('/')) {
        (true, true) => format!("{}{}", base.trim_end_matches('/'), path),
        (false, false) => format!("{base}/{path}"),
        _ => format!("{base}{path}"),
    }
}

fn normalize_path(p: &str) -> Result<String> {
    if p.is_empty() {
        return Err(AuthMapError::BadRequest("route path must not be empty".into()));
    }
    if p.chars().any(char::is_whitespace) {
        return Err(AuthMapError::BadRequest(format!(
            "route path must not contain whitespace: {p:?}"
        )));
    }
    // Router patterns never end in `/` (except the root), so neither may ours.
    let trimmed = p.trim_matches('/');
    Ok(format!("/{trimmed}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_paths_single_slash() {
        assert_eq!(combine_paths("/api/", "/users"), "/api/users");
        assert_eq!(combine_paths("/api", "users"), "/api/users");
        assert_eq!(combine_paths("/api", "/users"), "/api/users");
        assert_eq!(combine_paths("/api/", "users"), "/api/users");
        assert_eq!(combine_paths("", "/x"), "/x");
        assert_eq!(combine_paths("/base", ""), "/base");
    }

    #[test]
    fn method_parse_is_case_insensitive() {
        assert_eq!("get".parse::<RouteMethod>().ok(), Some(RouteMethod::Get));
        assert_eq!(" All ".parse::<RouteMethod>().ok(), Some(RouteMethod::All));
        assert!("TRACE".parse::<RouteMethod>().is_err());
    }

    #[test]
    fn normalize_adds_leading_slash_and_strips_trailing() {
        assert_eq!(normalize_path("profile").ok().as_deref(), Some("/profile"));
        assert_eq!(normalize_path("/api/users/").ok().as_deref(), Some("/api/users"));
        assert_eq!(normalize_path("/").ok().as_deref(), Some("/"));
        assert_eq!(normalize_path("//").ok().as_deref(), Some("/"));
        assert!(normalize_path("").is_err());
        assert!(normalize_path("/a b").is_err());
    }
}
