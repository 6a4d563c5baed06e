use thiserror::Error;

#[derive(Error, Debug)]
pub enum RomanError {
    #[error("The input provided <{input}> is not a valid roman numeral.")]
    InvalidNumeralError { input: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 使用者輸入的數字格式錯誤
    Input,
    Config,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl RomanError {
    pub fn invalid_numeral(input: &str) -> Self {
        RomanError::InvalidNumeralError {
            input: input.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            RomanError::InvalidNumeralError { .. } => ErrorCategory::Input,
            RomanError::ConfigValidationError { .. }
            | RomanError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            RomanError::IoError(_)
            | RomanError::SerializationError(_)
            | RomanError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Config => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RomanError::InvalidNumeralError { .. } => {
                "Use only the letters I, V, X, L, C, D, M in standard order (e.g. MCMXCIX)"
                    .to_string()
            }
            RomanError::ConfigValidationError { field, .. } => {
                format!("Check the '{}' section of the configuration file", field)
            }
            RomanError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and try again", field)
            }
            RomanError::IoError(_) => {
                "Make sure the file exists and is readable".to_string()
            }
            RomanError::SerializationError(_) | RomanError::CsvError(_) => {
                "Try a different output format (--format plain)".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => self.to_string(),
            ErrorCategory::Config => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, RomanError>;
