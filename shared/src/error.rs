//! Store failure taxonomy. Errors are classified once at the response
//! boundary and rendered as status text by the views; nothing is retried.

use serde::Deserialize;
use thiserror::Error;

/// Failure classes surfaced by the document store and the transport under it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The requested document does not exist.
    #[error("article not found")]
    NotFound,
    /// The store's security rules rejected the write.
    #[error("{0}")]
    PermissionDenied(String),
    /// The store rejected the request payload.
    #[error("{0}")]
    InvalidArgument(String),
    /// Network failure, decode failure or an unclassified store error.
    #[error("{0}")]
    Transport(String),
}

impl StoreError {
    /// Clarifying hint appended to the generic failure text for the
    /// classified write errors.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            StoreError::PermissionDenied(_) => Some("check the store's security rules"),
            StoreError::InvalidArgument(_) => Some("invalid data format"),
            _ => None,
        }
    }

    /// Status-line text for a failed workflow action, with the hint attached
    /// when one applies.
    pub fn status_line(&self, action: &str) -> String {
        match self.hint() {
            Some(hint) => format!("{action} failed: {self} - {hint}"),
            None => format!("{action} failed: {self}"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

/// Classify a non-2xx store response from its HTTP status and error
/// envelope. Falls back to the HTTP status when the body is not the
/// canonical `{ "error": { "status", "message" } }` shape.
pub fn classify_response(http_status: u16, body: &str) -> StoreError {
    let parsed = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error);
    let message = parsed
        .as_ref()
        .map(|e| e.message.clone())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("request failed with HTTP {http_status}"));
    let status = parsed.as_ref().map(|e| e.status.as_str()).unwrap_or("");

    match status {
        "NOT_FOUND" => StoreError::NotFound,
        "PERMISSION_DENIED" => StoreError::PermissionDenied(message),
        "INVALID_ARGUMENT" => StoreError::InvalidArgument(message),
        _ => match http_status {
            404 => StoreError::NotFound,
            403 => StoreError::PermissionDenied(message),
            400 => StoreError::InvalidArgument(message),
            _ => StoreError::Transport(message),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(status: &str, message: &str) -> String {
        serde_json::json!({ "error": { "code": 0, "status": status, "message": message } })
            .to_string()
    }

    #[test]
    fn classifies_by_status_string() {
        assert_eq!(
            classify_response(403, &envelope("PERMISSION_DENIED", "denied")),
            StoreError::PermissionDenied("denied".to_string())
        );
        assert_eq!(
            classify_response(400, &envelope("INVALID_ARGUMENT", "bad field")),
            StoreError::InvalidArgument("bad field".to_string())
        );
        assert_eq!(
            classify_response(404, &envelope("NOT_FOUND", "missing")),
            StoreError::NotFound
        );
    }

    #[test]
    fn falls_back_to_http_status_on_opaque_bodies() {
        assert_eq!(classify_response(404, "gone"), StoreError::NotFound);
        assert_eq!(
            classify_response(500, "boom"),
            StoreError::Transport("request failed with HTTP 500".to_string())
        );
        assert_eq!(
            classify_response(403, "{}"),
            StoreError::PermissionDenied("request failed with HTTP 403".to_string())
        );
    }

    #[test]
    fn status_line_appends_hints_for_classified_errors() {
        let denied = StoreError::PermissionDenied("denied".to_string());
        assert_eq!(
            denied.status_line("Publishing"),
            "Publishing failed: denied - check the store's security rules"
        );

        let transport = StoreError::Transport("connection reset".to_string());
        assert_eq!(
            transport.status_line("Update"),
            "Update failed: connection reset"
        );
    }
}
