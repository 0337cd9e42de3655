use apikey_http_errors::ErrorResponseData;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The header is absent, or present with an empty value.
    #[error("no authorization header included")]
    NoAuthHeader,

    /// The header does not have the `<scheme> <token>` shape, or uses another scheme.
    #[error("malformed authorization header")]
    MalformedHeader,
}

impl Error {
    pub const fn error_kind(&self) -> &'static str {
        match self {
            Error::NoAuthHeader => "no_auth_header",
            Error::MalformedHeader => "malformed_auth_header",
        }
    }

    pub fn response_tuple(&self) -> (StatusCode, ErrorResponseData) {
        let status = match self {
            Error::NoAuthHeader | Error::MalformedHeader => StatusCode::UNAUTHORIZED,
        };

        (
            status,
            ErrorResponseData::new(self.error_kind(), self.to_string()),
        )
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (code, json) = self.response_tuple();
        (code, Json(json)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::NoAuthHeader.to_string(),
            "no authorization header included"
        );
        assert_eq!(
            Error::MalformedHeader.to_string(),
            "malformed authorization header"
        );
    }

    #[test]
    fn both_kinds_are_unauthorized() {
        for err in [Error::NoAuthHeader, Error::MalformedHeader] {
            let (status, data) = err.response_tuple();
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(data.kind(), err.error_kind());
            assert_eq!(data.message(), err.to_string());
        }
    }
}
