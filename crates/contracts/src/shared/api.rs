use serde::{Deserialize, Serialize};

/// Generic mutation outcome returned by every POST endpoint:
/// `{success: true}` or `{success: false, error: "..."}`.
/// Some endpoints omit `error` on failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiStatus {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiStatus {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    /// Error text for display, empty when the server sent none.
    pub fn error_text(&self) -> &str {
        self.error.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_success() {
        let status: ApiStatus = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(status.success);
        assert_eq!(status.error, None);
    }

    #[test]
    fn parses_failure_with_error() {
        let status: ApiStatus =
            serde_json::from_str(r#"{"success": false, "error": "Cupo inexistente"}"#).unwrap();
        assert!(!status.success);
        assert_eq!(status.error_text(), "Cupo inexistente");
    }

    #[test]
    fn parses_failure_without_error() {
        let status: ApiStatus = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!status.success);
        assert_eq!(status.error_text(), "");
    }
}
