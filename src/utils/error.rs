use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeatError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SeatError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            SeatError::IoError(e) => format!("Could not read input file: {}", e),
            SeatError::SerializationError(e) => format!("Input is not valid JSON: {}", e),
            SeatError::TomlParseError(e) => format!("Configuration file is not valid TOML: {}", e),
            SeatError::ConfigValidationError { field, message } => {
                format!("Configuration problem with {}: {}", field, message)
            }
            SeatError::InvalidConfigValueError { field, value, reason } => {
                format!("{} has an invalid value '{}': {}", field, value, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SeatError::IoError(_) => "Check that the file path exists and is readable",
            SeatError::SerializationError(_) => {
                "Course files must be a JSON object with a 'seats' array; provider files a JSON array"
            }
            SeatError::TomlParseError(_) => "Fix the TOML syntax in the configuration file",
            SeatError::ConfigValidationError { .. }
            | SeatError::InvalidConfigValueError { .. } => {
                "Review the configuration values and try again"
            }
        }
    }

    /// Whether the error comes from configuration rather than input data.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SeatError::TomlParseError(_)
                | SeatError::ConfigValidationError { .. }
                | SeatError::InvalidConfigValueError { .. }
        )
    }

    /// Process exit code: 1 for configuration problems, 2 for input problems.
    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            1
        } else {
            2
        }
    }
}

pub type Result<T> = std::result::Result<T, SeatError>;
