use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Shape of a rejected backend response. Only a string `detail` is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorBody {
    HasDetail(String),
    Unknown,
}

#[derive(Deserialize)]
struct DetailOnly {
    detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn parse(bytes: &[u8]) -> Self {
        let Ok(body) = serde_json::from_slice::<DetailOnly>(bytes) else {
            return ErrorBody::Unknown;
        };
        match body.detail {
            Some(serde_json::Value::String(detail)) if !detail.is_empty() => {
                ErrorBody::HasDetail(detail)
            }
            _ => ErrorBody::Unknown,
        }
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("backend returned {status}")]
    Rejected { status: StatusCode, body: ErrorBody },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("failed to save video: {0}")]
    Save(#[from] std::io::Error),
    #[error("background worker stopped")]
    WorkerStopped,
}

impl ClientError {
    /// Text shown in the error banner: the server's `detail` when it sent one.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Rejected {
                body: ErrorBody::HasDetail(detail),
                ..
            } => detail.clone(),
            ClientError::Save(e) => format!("Failed to save video: {}", e),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_string_is_extracted() {
        assert_eq!(
            ErrorBody::parse(br#"{"detail":"Invalid URL"}"#),
            ErrorBody::HasDetail("Invalid URL".to_string())
        );
    }

    #[test]
    fn other_shapes_are_unknown() {
        assert_eq!(ErrorBody::parse(b"<html>502</html>"), ErrorBody::Unknown);
        assert_eq!(ErrorBody::parse(br#"{"message":"nope"}"#), ErrorBody::Unknown);
        assert_eq!(ErrorBody::parse(br#"{"detail":""}"#), ErrorBody::Unknown);
        // FastAPI validation errors put a list in `detail`
        assert_eq!(
            ErrorBody::parse(br#"{"detail":[{"loc":["body","url"],"msg":"field required"}]}"#),
            ErrorBody::Unknown
        );
        assert_eq!(ErrorBody::parse(b""), ErrorBody::Unknown);
    }

    #[test]
    fn user_message_prefers_detail() {
        let err = ClientError::Rejected {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody::HasDetail("Invalid URL".to_string()),
        };
        assert_eq!(err.user_message("fallback"), "Invalid URL");

        let err = ClientError::Rejected {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorBody::Unknown,
        };
        assert_eq!(err.user_message("fallback"), "fallback");
    }
}
