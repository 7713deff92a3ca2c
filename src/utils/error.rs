use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Cannot compute statistics over an empty dataset")]
    EmptyDataset,

    #[error("Histogram needs at least one bin, got {bins}")]
    InvalidBinCount { bins: usize },

    #[error("Chart rendering failed: {message}")]
    RenderError { message: String },

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

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Rendering,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl AnalysisError {
    pub fn render(message: impl Into<String>) -> Self {
        AnalysisError::RenderError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AnalysisError::EmptyDataset | AnalysisError::InvalidBinCount { .. } => {
                ErrorCategory::Data
            }
            AnalysisError::RenderError { .. } => ErrorCategory::Rendering,
            AnalysisError::CsvError(_)
            | AnalysisError::IoError(_)
            | AnalysisError::SerializationError(_) => ErrorCategory::Io,
            AnalysisError::ConfigError { .. }
            | AnalysisError::ConfigValidationError { .. }
            | AnalysisError::InvalidConfigValueError { .. }
            | AnalysisError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Rendering => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AnalysisError::EmptyDataset => "Provide at least one score record",
            AnalysisError::InvalidBinCount { .. } => "Use a bin count of 1 or more",
            AnalysisError::RenderError { .. } => {
                "Check that system fonts are installed, or run with --display terminal or --display none"
            }
            AnalysisError::CsvError(_) | AnalysisError::SerializationError(_) => {
                "Check that the output directory is writable and retry"
            }
            AnalysisError::IoError(_) => "Check file permissions and available disk space",
            AnalysisError::ConfigError { .. }
            | AnalysisError::ConfigValidationError { .. }
            | AnalysisError::InvalidConfigValueError { .. }
            | AnalysisError::MissingConfigError { .. } => {
                "Review the command line flags or the TOML configuration file"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Data => format!("Score data problem: {}", self),
            ErrorCategory::Rendering => format!("Could not display the histogram: {}", self),
            ErrorCategory::Io => format!("Could not write output: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
