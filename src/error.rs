//! API Errors
//!
//! Network-layer failures and their user-facing classification.

use thiserror::Error;

/// Failure of a call to the spell API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 401: bad credentials or expired token
    #[error("unauthorized{}", suffix(.detail))]
    Unauthorized { detail: Option<String> },
    /// 403: not allowed for this viewer
    #[error("forbidden{}", suffix(.detail))]
    Forbidden { detail: Option<String> },
    /// Any other non-2xx status
    #[error("server returned {status}{}", suffix(.detail))]
    Status { status: u16, detail: Option<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("could not build request: {0}")]
    Encode(String),
}

fn suffix(detail: &Option<String>) -> String {
    detail.as_ref().map(|d| format!(": {}", d)).unwrap_or_default()
}

/// User-facing error category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Authentication,
    Authorization,
    Generic,
}

impl ApiError {
    /// Build from a non-2xx status and the raw response body
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = extract_detail(body);
        match status {
            401 => ApiError::Unauthorized { detail },
            403 => ApiError::Forbidden { detail },
            _ => ApiError::Status { status, detail },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Unauthorized { .. } => ErrorKind::Authentication,
            ApiError::Forbidden { .. } => ErrorKind::Authorization,
            _ => ErrorKind::Generic,
        }
    }

    /// Server-provided explanation, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { detail }
            | ApiError::Forbidden { detail }
            | ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Pull a string `detail` or `message` out of an error body
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["detail", "message"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(401, ErrorKind::Authentication)]
    #[case(403, ErrorKind::Authorization)]
    #[case(404, ErrorKind::Generic)]
    #[case(422, ErrorKind::Generic)]
    #[case(500, ErrorKind::Generic)]
    fn test_status_classification(#[case] status: u16, #[case] kind: ErrorKind) {
        assert_eq!(ApiError::from_status(status, "").kind(), kind);
    }

    #[test]
    fn test_detail_extraction() {
        let err = ApiError::from_status(403, r#"{"detail":"You cannot vote on your own spell"}"#);
        assert_eq!(err.detail(), Some("You cannot vote on your own spell"));
        assert_eq!(err.to_string(), "forbidden: You cannot vote on your own spell");

        let err = ApiError::from_status(500, r#"{"message":"boom"}"#);
        assert_eq!(err.detail(), Some("boom"));

        // Validation errors carry a list, not a string
        let err = ApiError::from_status(422, r#"{"detail":[{"loc":["body"],"msg":"bad"}]}"#);
        assert_eq!(err.detail(), None);
        assert_eq!(err.to_string(), "server returned 422");

        assert_eq!(ApiError::from_status(502, "<html>gateway</html>").detail(), None);
    }

    #[test]
    fn test_transport_errors_are_generic() {
        assert_eq!(ApiError::Network("offline".into()).kind(), ErrorKind::Generic);
        assert_eq!(ApiError::Decode("eof".into()).detail(), None);
    }
}
