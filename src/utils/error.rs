use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Storage error: {0}")]
    StorageError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Product {id} not found")]
    ProductNotFound { id: u64 },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Registration failed: {message}")]
    RegistrationFailed { message: String },

    #[error("Validation error on '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// 錯誤分類，用於日誌與退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Storage,
    Network,
    Auth,
    Input,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl StorefrontError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StorageError(_) | Self::SerializationError(_) => ErrorCategory::Storage,
            Self::ApiError(_) | Self::HttpStatus { .. } | Self::ProductNotFound { .. } => {
                ErrorCategory::Network
            }
            Self::AuthenticationFailed { .. } | Self::RegistrationFailed { .. } => {
                ErrorCategory::Auth
            }
            Self::ValidationError { .. } => ErrorCategory::Input,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ProductNotFound { .. } | Self::ValidationError { .. } => ErrorSeverity::Low,
            Self::ApiError(_) | Self::HttpStatus { .. } => ErrorSeverity::Medium,
            Self::AuthenticationFailed { .. }
            | Self::RegistrationFailed { .. }
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorSeverity::High,
            // 寫入失敗後，本地畫面可能已和持久狀態不一致
            Self::StorageError(_) | Self::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::StorageError(_) | Self::SerializationError(_) => {
                "Could not save your changes on this device".to_string()
            }
            Self::ApiError(_) | Self::HttpStatus { .. } => {
                "The store service is unreachable right now".to_string()
            }
            Self::ProductNotFound { id } => format!("Product {} does not exist", id),
            Self::AuthenticationFailed { .. } => "Invalid username or password".to_string(),
            Self::RegistrationFailed { .. } => "Your account could not be created".to_string(),
            Self::ValidationError { message, .. } => message.clone(),
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Storage => {
                "Check that the data directory is writable, then reload the cart before retrying"
            }
            ErrorCategory::Network => "Check your connection and the --api-base-url setting",
            ErrorCategory::Auth => "Verify your credentials and try again",
            ErrorCategory::Input => "Correct the highlighted field and resubmit",
            ErrorCategory::Configuration => "Review the CLI flags or the TOML configuration file",
        }
    }
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
