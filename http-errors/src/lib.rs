use serde::Serialize;
use std::borrow::Cow;
use tracing::{event, Level};

/// The JSON body sent back to a client when a request fails.
///
/// Serializes as `{"error": {"kind": "...", "message": "..."}}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponseData {
    error: ErrorDetails,
}

#[derive(Debug, Clone, Serialize)]
struct ErrorDetails {
    kind: Cow<'static, str>,
    message: Cow<'static, str>,
}

impl ErrorResponseData {
    pub fn new(
        kind: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> ErrorResponseData {
        let ret = ErrorResponseData {
            error: ErrorDetails {
                kind: kind.into(),
                message: message.into(),
            },
        };

        event!(Level::WARN, kind=%ret.error.kind, message=%ret.error.message, "request rejected");

        ret
    }

    pub fn kind(&self) -> &str {
        &self.error.kind
    }

    pub fn message(&self) -> &str {
        &self.error.message
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorResponseData;

    #[test]
    fn serializes_nested_error() {
        let data = ErrorResponseData::new("no_auth_header", "no authorization header included");
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "error": {
                    "kind": "no_auth_header",
                    "message": "no authorization header included",
                }
            })
        );
    }

    #[test]
    fn accessors() {
        let kind = String::from("malformed_auth_header");
        let data = ErrorResponseData::new(kind, "malformed authorization header");
        assert_eq!(data.kind(), "malformed_auth_header");
        assert_eq!(data.message(), "malformed authorization header");
    }
}
