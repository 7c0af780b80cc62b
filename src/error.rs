use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("Browser API unavailable: {0}")]
    Unavailable(&'static str),

    #[error("{op} failed: {message}")]
    Js { op: &'static str, message: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Form relay rejected submission with status {status}")]
    Relay { status: u16 },

    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

impl PortfolioError {
    /// Wrap a thrown JS value, keeping its message when it has one.
    pub fn js(op: &'static str, value: JsValue) -> Self {
        PortfolioError::Js {
            op,
            message: js_message(&value),
        }
    }

    /// A rejected `localStorage` write, usually a full quota.
    pub fn storage(key: &str, value: JsValue) -> Self {
        PortfolioError::Storage(format!("'{}' not written: {}", key, js_message(&value)))
    }

    /// Text shown to visitors. Details stay in the console log.
    pub fn user_message(&self) -> String {
        match self {
            PortfolioError::Network(_) | PortfolioError::Relay { .. } => {
                "Sorry, your message could not be sent. Please try again later.".to_string()
            }
            PortfolioError::InvalidUpload(reason) => reason.clone(),
            PortfolioError::Unavailable(what) => format!("{} is not supported by this browser", what),
            PortfolioError::Storage(_) => {
                "Browser storage is full or disabled, so this change was not saved.".to_string()
            }
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| "Unknown error".to_string())
}

impl From<PortfolioError> for String {
    fn from(err: PortfolioError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_errors_use_generic_message() {
        let msg = PortfolioError::Relay { status: 500 }.user_message();
        assert!(msg.contains("could not be sent"));
        assert!(!msg.contains("500"), "status code should not leak to visitors: {}", msg);
    }

    #[test]
    fn test_network_and_relay_share_message() {
        assert_eq!(
            PortfolioError::Network("timeout".into()).user_message(),
            PortfolioError::Relay { status: 404 }.user_message()
        );
    }

    #[test]
    fn test_upload_reason_is_shown() {
        let err = PortfolioError::InvalidUpload("Image must be smaller than 2 MB".into());
        assert_eq!(err.user_message(), "Image must be smaller than 2 MB");
    }

    #[test]
    fn test_storage_failure_message_hides_details() {
        let msg = PortfolioError::Storage("'portfolio-avatar' not written: QuotaExceededError".into())
            .user_message();
        assert!(msg.contains("not saved"));
        assert!(!msg.contains("portfolio-avatar"));
    }

    #[test]
    fn test_into_string_uses_display() {
        let s: String = PortfolioError::Storage("quota exceeded".into()).into();
        assert_eq!(s, "Storage error: quota exceeded");
    }
}
