use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApodError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Unexpected status code {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Record is missing string field '{field}'")]
    MissingField { field: String },

    #[error("Cannot derive a file name from '{url}': {reason}")]
    InvalidFilename { url: String, reason: String },

    #[error("Failed to launch image viewer '{command}': {source}")]
    ViewerError {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Filesystem,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ApodError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ApodError::ApiError(_) | ApodError::HttpStatus { .. } => ErrorCategory::Network,
            ApodError::SerializationError(_)
            | ApodError::MissingField { .. }
            | ApodError::InvalidFilename { .. } => ErrorCategory::Data,
            ApodError::IoError(_) => ErrorCategory::Filesystem,
            ApodError::ViewerError { .. } => ErrorCategory::System,
            ApodError::ConfigError { .. } | ApodError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 連線問題通常重試即可
            ApodError::ApiError(_) => ErrorSeverity::Medium,
            ApodError::HttpStatus { .. }
            | ApodError::SerializationError(_)
            | ApodError::MissingField { .. }
            | ApodError::InvalidFilename { .. }
            | ApodError::ConfigError { .. }
            | ApodError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            ApodError::IoError(_) | ApodError::ViewerError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ApodError::ApiError(_) => "Check your network connection and try again",
            ApodError::HttpStatus { .. } => {
                "The API may be temporarily unavailable; try again later or pass --endpoint"
            }
            ApodError::SerializationError(_) | ApodError::MissingField { .. } => {
                "The endpoint did not return an astronomy record; verify the --endpoint value"
            }
            ApodError::InvalidFilename { .. } => {
                "The image URL has no usable file name; today's entry may not be an image"
            }
            ApodError::IoError(_) => "Check that the output directory exists and is writable",
            ApodError::ViewerError { .. } => {
                "Install an image viewer or pass --viewer <command> (or --no-display)"
            }
            ApodError::ConfigError { .. } | ApodError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ApodError::HttpStatus { status, .. } => format!("Error: status code {}", status),
            ApodError::ApiError(e) => format!("Error: could not reach the server ({})", e),
            ApodError::ViewerError { command, .. } => {
                format!("Error: image viewer '{}' could not be started", command)
            }
            other => format!("Error: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApodError>;
