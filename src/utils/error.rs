use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("Model list request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Model list request returned HTTP {status}")]
    HttpStatusError { status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FormError {
    pub fn config(message: impl Into<String>) -> Self {
        FormError::ConfigError {
            message: message.into(),
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            FormError::ApiError(_) | FormError::HttpStatusError { .. } => {
                "Could not reach the model list service".to_string()
            }
            FormError::SerializationError(_) => {
                "The model list service returned an unexpected response".to_string()
            }
            FormError::IoError(e) => format!("File access failed: {}", e),
            FormError::UrlError(e) => format!("Endpoint URL is not valid: {}", e),
            FormError::ConfigError { message } => format!("Configuration problem: {}", message),
            FormError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value for '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            FormError::ConfigError { .. }
                | FormError::InvalidConfigValueError { .. }
                | FormError::UrlError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, FormError>;
