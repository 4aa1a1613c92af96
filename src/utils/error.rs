use thiserror::Error;

#[derive(Error, Debug)]
pub enum TxError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unsupported HTTP method: {method}")]
    UnsupportedMethod { method: String },

    #[error("HTTP request returned status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Response body is not valid JSON: {message}")]
    InvalidResponse { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

pub type Result<T> = std::result::Result<T, TxError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Validation,
    Io,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TxError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TxError::ApiError(_) | TxError::HttpStatus { .. } => ErrorCategory::Network,
            TxError::ConfigError { .. }
            | TxError::ConfigValidationError { .. }
            | TxError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            TxError::UnsupportedMethod { .. } | TxError::ValidationError { .. } => {
                ErrorCategory::Validation
            }
            TxError::IoError(_) => ErrorCategory::Io,
            TxError::SerializationError(_) | TxError::InvalidResponse { .. } => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Transient: a retry may succeed.
            TxError::ApiError(_) => ErrorSeverity::Medium,
            TxError::HttpStatus { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            TxError::HttpStatus { .. }
            | TxError::InvalidResponse { .. }
            | TxError::SerializationError(_)
            | TxError::UnsupportedMethod { .. }
            | TxError::ValidationError { .. }
            | TxError::ConfigError { .. }
            | TxError::ConfigValidationError { .. }
            | TxError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            TxError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.severity() == ErrorSeverity::Medium
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            TxError::ApiError(_) => {
                "Check network connectivity and that the endpoint is reachable".to_string()
            }
            TxError::HttpStatus { status, .. } if *status >= 500 => {
                "The server failed to handle the request; try again later".to_string()
            }
            TxError::HttpStatus { status, .. } => {
                format!("The server rejected the request ({status}); check the URL, payload and headers")
            }
            TxError::InvalidResponse { .. } => {
                "The endpoint did not return JSON; verify that it is a JSON API".to_string()
            }
            TxError::SerializationError(_) => "Check that the payload is valid JSON".to_string(),
            TxError::UnsupportedMethod { .. } => "Use one of GET, POST or PUT".to_string(),
            TxError::IoError(_) => "Check file permissions and that the path exists".to_string(),
            TxError::ConfigError { .. } | TxError::ConfigValidationError { .. } => {
                "Check the configuration file syntax".to_string()
            }
            TxError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{field}'")
            }
            TxError::ValidationError { .. } => "Check the command arguments".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Network request failed: {self}"),
            ErrorCategory::Configuration => format!("Invalid configuration: {self}"),
            ErrorCategory::Validation => format!("Invalid input: {self}"),
            ErrorCategory::Io => format!("File system error: {self}"),
            ErrorCategory::Data => format!("Could not process data: {self}"),
        }
    }
}
