//! The `{id}` path segment as the client sent it.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Percent-decoded id segment. A segment that does not decode to UTF-8 is kept
/// in its encoded form, so it still reaches the handler and reads as not found.
#[derive(Clone, Debug)]
pub struct RawId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for RawId
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(RawId(id)),
            Err(_) => {
                let raw = parts.uri.path().rsplit('/').next().unwrap_or_default();
                Ok(RawId(raw.to_string()))
            }
        }
    }
}
