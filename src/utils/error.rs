use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown function '{identifier}' (available: {available})")]
    UnknownFunction {
        identifier: String,
        available: String,
    },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScanError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScanError::ConfigError { .. }
            | ScanError::ConfigValidationError { .. }
            | ScanError::InvalidConfigValueError { .. }
            | ScanError::MissingConfigError { .. }
            | ScanError::UnknownFunction { .. } => ErrorCategory::Config,
            ScanError::InvalidInput { .. } => ErrorCategory::Input,
            ScanError::ZipError(_)
            | ScanError::CsvError(_)
            | ScanError::IoError(_)
            | ScanError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Config | ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Output => match self {
                ScanError::IoError(_) => ErrorSeverity::Critical,
                _ => ErrorSeverity::Medium,
            },
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ScanError::UnknownFunction { available, .. } => {
                format!("Pick one of the built-in functions: {}", available)
            }
            ScanError::ConfigValidationError { field, .. }
            | ScanError::InvalidConfigValueError { field, .. }
            | ScanError::MissingConfigError { field } => {
                format!("Check the '{}' setting and run again", field)
            }
            ScanError::ConfigError { .. } => {
                "Make sure the configuration file exists and is valid TOML".to_string()
            }
            ScanError::InvalidInput { .. } => {
                "Provide equally long x/y samples with x strictly ascending".to_string()
            }
            ScanError::IoError(_) => {
                "Check that the output directory is writable and the disk is not full".to_string()
            }
            ScanError::ZipError(_) | ScanError::CsvError(_) | ScanError::SerializationError(_) => {
                "Retry without compression or with a different output format".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Config => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Sample data rejected: {}", self),
            ErrorCategory::Output => format!("Could not write the scan output: {}", self),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
