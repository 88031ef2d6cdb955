use std::convert::Infallible;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, HeaderMap, HeaderName},
    middleware::Next,
    response::Response,
};
use authmap_core::error::{AuthMapError, Result};
use authmap_core::IdentityClaims;

use crate::app_state::AppState;

/// Authentication seam: turns request headers into identity claims.
///
/// Real deployments plug in token or session verification here. The gate only
/// ever sees the claims this produces.
pub trait ClaimsResolver: Send + Sync {
    fn resolve(&self, headers: &HeaderMap) -> IdentityClaims;
}

/// Trusts plain request headers for the role and subject.
///
/// Only suitable behind a proxy that strips and re-sets these headers, or for
/// local demos.
#[derive(Debug, Clone)]
pub struct HeaderClaimsResolver {
    role_header: HeaderName,
    subject_header: HeaderName,
}

impl HeaderClaimsResolver {
    pub fn new(role_header: &str, subject_header: &str) -> Result<Self> {
        let parse = |h: &str| {
            HeaderName::try_from(h)
                .map_err(|_| AuthMapError::BadRequest(format!("invalid header name: {h}")))
        };
        Ok(Self {
            role_header: parse(role_header)?,
            subject_header: parse(subject_header)?,
        })
    }
}

impl ClaimsResolver for HeaderClaimsResolver {
    fn resolve(&self, headers: &HeaderMap) -> IdentityClaims {
        let read = |name: &HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };

        let mut claims = match read(&self.role_header) {
            Some(role) => IdentityClaims::with_role(role),
            None => IdentityClaims::anonymous(),
        };
        if let Some(sub) = read(&self.subject_header) {
            claims = claims.with_subject(sub);
        }
        claims
    }
}

/// Middleware: resolve claims once and store them in request extensions.
pub async fn attach_claims(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let claims = state.claims_resolver().resolve(req.headers());
    req.extensions_mut().insert(claims);
    next.run(req).await
}

/// Extractor for the claims attached by [`attach_claims`]; anonymous if none.
#[derive(Debug, Clone)]
pub struct Claims(pub IdentityClaims);

#[async_trait]
impl<S> FromRequestParts<S> for Claims
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> std::result::Result<Self, Self::Rejection> {
        let claims = parts
            .extensions
            .get::<IdentityClaims>()
            .cloned()
            .unwrap_or_default();
        Ok(Claims(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn resolver() -> HeaderClaimsResolver {
        HeaderClaimsResolver::new("x-authmap-role", "x-authmap-subject").unwrap()
    }

    #[test]
    fn missing_header_is_anonymous() {
        let c = resolver().resolve(&HeaderMap::new());
        assert!(c.is_anonymous());
    }

    #[test]
    fn reads_role_and_subject() {
        let mut h = HeaderMap::new();
        h.insert("x-authmap-role", HeaderValue::from_static("admin"));
        h.insert("x-authmap-subject", HeaderValue::from_static("alice"));
        let c = resolver().resolve(&h);
        assert_eq!(c.role(), Some("admin"));
        assert_eq!(c.subject(), Some("alice"));
    }

    #[test]
    fn non_utf8_role_is_anonymous() {
        let mut h = HeaderMap::new();
        h.insert("x-authmap-role", HeaderValue::from_bytes(&[0xff, 0xfe]).unwrap());
        assert!(resolver().resolve(&h).is_anonymous());
    }
}
