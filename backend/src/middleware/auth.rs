use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderValue},
};

use crate::types::AppError;

/// Raw `Authorization` header of the request
///
/// Only presence is enforced: the value is never decoded or checked against an
/// identity provider, token verification is expected to happen upstream. Any
/// byte content counts, only a missing or blank header is rejected.
#[derive(Debug, Clone)]
pub struct AuthorizationHeader(pub HeaderValue);

impl<S> FromRequestParts<S> for AuthorizationHeader
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(AUTHORIZATION)
            .filter(|header| !header.as_bytes().trim_ascii().is_empty())
            .map(|header| Self(header.clone()))
            .ok_or(AppError::Unauthenticated)
    }
}
