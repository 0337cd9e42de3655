use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use tracing::{event, Level};

use crate::{error::Error, extract_header::extract_api_key};

/// Handler argument that holds the key from an `Authorization: ApiKey <key>` header.
///
/// A request without a usable key is rejected with a 401 JSON body. Take an
/// `Option<ApiKeyHeader>` instead to let such requests through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyHeader(pub String);

impl ApiKeyHeader {
    pub fn into_inner(self) -> String {
        self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ApiKeyHeader
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let key = extract_api_key(&parts.headers)?;
        event!(Level::DEBUG, "Got key from auth header");
        Ok(ApiKeyHeader(key))
    }
}
