use std::borrow::Cow;

use axum::http::{
    header::{HeaderName, AUTHORIZATION},
    HeaderMap,
};

use crate::error::{Error, Result};

/// The scheme keyword expected in front of the key: `Authorization: ApiKey <key>`.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Pulls an API key out of a `<scheme> <key>` header value.
///
/// The default looks at `Authorization` with the `ApiKey` scheme. The scheme
/// match is case-sensitive, and anything after the key is ignored.
#[derive(Debug, Clone)]
pub struct HeaderKeyExtractor {
    header: HeaderName,
    scheme: Cow<'static, str>,
}

impl Default for HeaderKeyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderKeyExtractor {
    pub fn new() -> Self {
        HeaderKeyExtractor {
            header: AUTHORIZATION,
            scheme: Cow::Borrowed(API_KEY_SCHEME),
        }
    }

    pub fn with_header(mut self, header: HeaderName) -> Self {
        self.header = header;
        self
    }

    pub fn with_scheme(mut self, scheme: impl Into<Cow<'static, str>>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn header(&self) -> &HeaderName {
        &self.header
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn extract(&self, headers: &HeaderMap) -> Result<String> {
        // `get` only ever looks at the first value of a repeated header.
        let value = match headers.get(&self.header) {
            None => return Err(Error::NoAuthHeader),
            Some(value) if value.is_empty() => return Err(Error::NoAuthHeader),
            Some(value) => {
                std::str::from_utf8(value.as_bytes()).map_err(|_| Error::MalformedHeader)?
            }
        };

        let mut fields = value.split_whitespace();
        let (scheme, key) = match (fields.next(), fields.next()) {
            (Some(scheme), Some(key)) => (scheme, key),
            _ => return Err(Error::MalformedHeader),
        };

        if scheme != self.scheme {
            return Err(Error::MalformedHeader);
        }

        Ok(key.to_string())
    }
}

/// Read the API key from an `Authorization: ApiKey <key>` header.
pub fn extract_api_key(headers: &HeaderMap) -> Result<String> {
    HeaderKeyExtractor::new().extract(headers)
}
