use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid value for {field}: '{value}' ({reason})")]
    ParseError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input ended before a value for {field} was entered")]
    InputClosed { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 依嚴重程度對應程序退出碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl CalcError {
    pub fn parse(field: &str, value: &str, reason: impl Into<String>) -> Self {
        CalcError::ParseError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::ParseError { .. } | CalcError::InputClosed { .. } => ErrorCategory::Input,
            CalcError::ConfigError { .. }
            | CalcError::ConfigValidationError { .. }
            | CalcError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CalcError::IoError(_) | CalcError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給操作人員看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::ParseError { field, value, .. } if value.trim().is_empty() => {
                format!("No value was entered for the {}", field)
            }
            CalcError::ParseError { field, value, .. } => {
                format!("'{}' is not a number (expected the {})", value.trim(), field)
            }
            CalcError::InputClosed { field } => {
                format!("Input closed while waiting for the {}", field)
            }
            CalcError::IoError(e) => format!("Could not read or write the terminal: {}", e),
            CalcError::SerializationError(e) => format!("Could not render the result: {}", e),
            CalcError::ConfigError { message } => format!("Configuration problem: {}", message),
            CalcError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            CalcError::InvalidConfigValueError { field, value, reason } => {
                format!("Configuration field '{}' has bad value '{}': {}", field, value, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::ParseError { .. } => {
                "Re-run the calculator and enter a plain decimal number such as 9.625"
            }
            CalcError::InputClosed { .. } => {
                "Provide every required value, either interactively or with --height, --hole-diameter and --casing-od"
            }
            CalcError::IoError(_) => "Check that stdin and stdout are attached to a terminal or a readable pipe",
            CalcError::SerializationError(_) => "Retry with --format text",
            CalcError::ConfigError { .. }
            | CalcError::ConfigValidationError { .. }
            | CalcError::InvalidConfigValueError { .. } => {
                "Check the well profile TOML file and the command-line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
