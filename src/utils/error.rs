use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Image decoding failed: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Depth model error: {0}")]
    ModelError(String),

    #[error("Model download failed: {0}")]
    DownloadError(#[from] reqwest::Error),

    #[error("Multipart form error: {0}")]
    MultipartError(#[from] axum::extract::multipart::MultipartError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Upload validation failed: {message}")]
    ValidationError { message: String },

    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

// tract reports through anyhow; keep the full chain in the message.
impl From<tract_onnx::prelude::TractError> for AppError {
    fn from(e: tract_onnx::prelude::TractError) -> Self {
        AppError::ModelError(format!("{:#}", e))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Network,
    Model,
    Config,
    Validation,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::IoError(_) => ErrorCategory::Io,
            AppError::DownloadError(_) => ErrorCategory::Network,
            AppError::ModelError(_) => ErrorCategory::Model,
            AppError::ConfigError { .. }
            | AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            AppError::ValidationError { .. } | AppError::MultipartError(_) => {
                ErrorCategory::Validation
            }
            AppError::ImageError(_) | AppError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Malformed client input is expected traffic, not an operator problem
            AppError::ValidationError { .. } | AppError::MultipartError(_) => ErrorSeverity::Low,
            AppError::DownloadError(_) => ErrorSeverity::Medium,
            AppError::IoError(_)
            | AppError::ImageError(_)
            | AppError::ModelError(_)
            | AppError::ProcessingError { .. } => ErrorSeverity::High,
            AppError::ConfigError { .. }
            | AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AppError::IoError(_) => {
                "Check that the media directory exists and is writable".to_string()
            }
            AppError::ImageError(_) => {
                "Verify the input file is a valid jpg or png image".to_string()
            }
            AppError::ModelError(_) => {
                "Verify the ONNX model file is intact and matches the expected input shape"
                    .to_string()
            }
            AppError::DownloadError(_) => {
                "Check network connectivity and retry the model download".to_string()
            }
            AppError::MultipartError(_) => {
                "Resubmit the form with a file in the 'image' field".to_string()
            }
            AppError::ConfigError { .. }
            | AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. } => {
                "Review the configuration values and fix the reported field".to_string()
            }
            AppError::ValidationError { .. } => {
                "Upload a non-empty image file with an allowed extension".to_string()
            }
            AppError::ProcessingError { .. } => {
                "Inspect the server log for the failing step and retry".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("File system problem: {}", self),
            ErrorCategory::Network => format!("Network problem: {}", self),
            ErrorCategory::Model => format!("Depth model problem: {}", self),
            ErrorCategory::Config => format!("Configuration problem: {}", self),
            ErrorCategory::Validation => format!("Invalid upload: {}", self),
            ErrorCategory::Processing => format!("Processing problem: {}", self),
        }
    }
}
