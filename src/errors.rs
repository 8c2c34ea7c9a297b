use reqwest::{Method, StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;

/// All errors that can occur when using the Azure Face client.
#[derive(Error, Debug)]
pub enum Error {
    /// A required setting (endpoint or subscription key) is missing or empty.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// The service answered with a non-2xx status.
    ///
    /// `code` and `message` come from the structured
    /// `{"error":{"code","message"}}` body when the service provides one,
    /// or from the status-code family otherwise.
    #[error("API error {http_status} ({code}): {message}")]
    Api {
        code: String,
        message: String,
        http_status: u16,
    },

    /// A transport-level failure below the HTTP layer (DNS, timeout,
    /// connection reset). Kept separate from [`Error::Api`] so callers can
    /// apply their own retry policy.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A response body that was expected to be JSON did not parse.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// An I/O error, typically from reading a local image file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A logical resource name that the dispatcher does not know.
    #[error("unknown resource name: {0:?}")]
    UnknownResource(String),
}

/// A convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Structured error body returned by the Face API.
#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

/// Classify a failed (status >= 400) response into an [`Error::Api`].
///
/// The structured `{"error":{"code","message"}}` body takes precedence.
/// Bodies without that shape fall back to a status-family classification
/// with a message naming the request and response line.
pub(crate) fn classify_failure(method: &Method, url: &Url, status: StatusCode, body: &str) -> Error {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return Error::Api {
            code: parsed.error.code,
            message: parsed.error.message,
            http_status: status.as_u16(),
        };
    }

    let (code, label) = match status.as_u16() / 100 {
        4 => ("ClientError", "Client error"),
        5 => ("ServerError", "Server error"),
        _ => ("UnsuccessfulRequest", "Unsuccessful request"),
    };

    let reason = status.canonical_reason().unwrap_or("");

    Error::Api {
        code: code.to_string(),
        message: format!(
            "{label}: `{method} {url}` resulted in a `{status_code} {reason}` response",
            status_code = status.as_u16(),
        ),
        http_status: status.as_u16(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(status: u16, body: &str) -> Error {
        let url = Url::parse("https://x.example/face/v1.0/detect").unwrap();
        classify_failure(
            &Method::POST,
            &url,
            StatusCode::from_u16(status).unwrap(),
            body,
        )
    }

    #[test]
    fn structured_body_wins() {
        let err = failure(400, r#"{"error":{"code":"InvalidRequest","message":"bad"}}"#);
        match err {
            Error::Api {
                code,
                message,
                http_status,
            } => {
                assert_eq!(code, "InvalidRequest");
                assert_eq!(message, "bad");
                assert_eq!(http_status, 400);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_4xx_falls_back_to_client_error() {
        let err = failure(404, "not json");
        match err {
            Error::Api {
                code,
                message,
                http_status,
            } => {
                assert_eq!(code, "ClientError");
                assert_eq!(http_status, 404);
                assert_eq!(
                    message,
                    "Client error: `POST https://x.example/face/v1.0/detect` \
                     resulted in a `404 Not Found` response"
                );
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_5xx_falls_back_to_server_error() {
        let err = failure(503, "");
        match err {
            Error::Api {
                code, http_status, ..
            } => {
                assert_eq!(code, "ServerError");
                assert_eq!(http_status, 503);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn wrong_shape_json_still_falls_back() {
        // Valid JSON, but not the documented error shape.
        let err = failure(400, r#"{"message":"bad"}"#);
        match err {
            Error::Api { code, .. } => assert_eq!(code, "ClientError"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
