//! # Gateway Error Taxonomy
//!
//! Every backend call resolves to exactly one [`GatewayError`] variant on
//! failure. Raw transport or parse exceptions never cross this boundary;
//! views only ever see one displayable message.

use serde_json::Value;
use thiserror::Error;

/// Normalized failure of a backend request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// No response inside the configured deadline.
    #[error("the server took too long to respond")]
    Timeout,

    /// 4xx response. `message` is the server-supplied detail when the body
    /// carried one, otherwise a fixed message for the status class.
    #[error("{message}")]
    ClientRequest { status: u16, message: String },

    /// 5xx response. Server detail is never surfaced for these.
    #[error("server error, try again later")]
    Server,

    /// No response at all (connection refused, DNS failure, lost link).
    #[error("network error")]
    Network,
}

/// Pull a human-readable message out of a JSON error body.
///
/// Accepts the shapes the backend produces: a `message` field that is a
/// string or a list of strings (joined with ", "), or an `error` field.
pub fn extract_error_message(body: &Value) -> Option<String> {
    match body.get("message") {
        Some(Value::String(s)) => return Some(s.clone()),
        Some(Value::Array(items)) => {
            let parts: Vec<&str> = items.iter().filter_map(|v| v.as_str()).collect();
            if !parts.is_empty() {
                return Some(parts.join(", "));
            }
        }
        _ => {}
    }
    match body.get("error") {
        Some(Value::String(s)) => Some(s.clone()),
        _ => None,
    }
}

/// Fixed message for a status class, used when the body carried nothing
/// usable.
pub fn fallback_message(status: u16) -> &'static str {
    match status {
        400 => "invalid request",
        401 => "bad credentials",
        403 => "forbidden",
        404 => "not found",
        s if s >= 500 => "server error",
        _ => "network error",
    }
}

/// Build the error for a non-success HTTP status. `body` is the parsed
/// JSON error body if parsing succeeded; a failed parse is equivalent to
/// no body and falls back to the status-class message.
pub fn error_for_status(status: u16, body: Option<&Value>) -> GatewayError {
    if status >= 500 {
        return GatewayError::Server;
    }
    let message = body
        .and_then(extract_error_message)
        .unwrap_or_else(|| fallback_message(status).to_string());
    GatewayError::ClientRequest { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_string_extracted() {
        let body = json!({ "message": "email already taken" });
        assert_eq!(
            extract_error_message(&body).as_deref(),
            Some("email already taken")
        );
    }

    #[test]
    fn test_message_list_joined() {
        let body = json!({ "message": ["too short", "needs a digit"] });
        assert_eq!(
            extract_error_message(&body).as_deref(),
            Some("too short, needs a digit")
        );
    }

    #[test]
    fn test_error_field_fallback() {
        let body = json!({ "error": "Unauthorized" });
        assert_eq!(extract_error_message(&body).as_deref(), Some("Unauthorized"));
    }

    #[test]
    fn test_non_string_message_ignored() {
        let body = json!({ "message": 42 });
        assert_eq!(extract_error_message(&body), None);
    }

    #[test]
    fn test_status_fallbacks() {
        assert_eq!(fallback_message(400), "invalid request");
        assert_eq!(fallback_message(401), "bad credentials");
        assert_eq!(fallback_message(403), "forbidden");
        assert_eq!(fallback_message(404), "not found");
        assert_eq!(fallback_message(500), "server error");
        assert_eq!(fallback_message(503), "server error");
        assert_eq!(fallback_message(418), "network error");
    }

    #[test]
    fn test_server_detail_never_surfaced_for_5xx() {
        let body = json!({ "message": "stack trace: secret internals" });
        let err = error_for_status(500, Some(&body));
        assert_eq!(err, GatewayError::Server);
        assert_eq!(err.to_string(), "server error, try again later");
    }

    #[test]
    fn test_4xx_prefers_server_message() {
        let body = json!({ "message": "Code invalide" });
        let err = error_for_status(400, Some(&body));
        assert_eq!(
            err,
            GatewayError::ClientRequest {
                status: 400,
                message: "Code invalide".to_string()
            }
        );
    }

    #[test]
    fn test_4xx_without_body_uses_fallback() {
        let err = error_for_status(401, None);
        assert_eq!(
            err,
            GatewayError::ClientRequest {
                status: 401,
                message: "bad credentials".to_string()
            }
        );
    }
}
