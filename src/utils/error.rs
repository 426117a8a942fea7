use thiserror::Error;

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown lesson: {query}")]
    UnknownLessonError { query: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Usage,
}

impl LessonError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LessonError::IoError(_) | LessonError::SerializationError(_) => ErrorCategory::Io,
            LessonError::ConfigParseError(_) | LessonError::ConfigError { .. } => {
                ErrorCategory::Configuration
            }
            LessonError::InvalidConfigValueError { .. } | LessonError::UnknownLessonError { .. } => {
                ErrorCategory::Usage
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Io => 2,
            ErrorCategory::Configuration | ErrorCategory::Usage => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LessonError::IoError(e) => format!("Console I/O failed: {}", e),
            LessonError::ConfigParseError(e) => format!("Config file is not valid TOML: {}", e),
            LessonError::SerializationError(e) => format!("Could not render JSON output: {}", e),
            LessonError::ConfigError { message } => message.clone(),
            LessonError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' = {:?} is not allowed: {}", field, value, reason),
            LessonError::UnknownLessonError { query } => {
                format!("No lesson matches '{}'", query)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LessonError::IoError(_) => "Check that stdin/stdout are open and not a closed pipe",
            LessonError::ConfigParseError(_) | LessonError::ConfigError { .. } => {
                "Fix the config file or run without --config to use the defaults"
            }
            LessonError::SerializationError(_) => "Retry without --json",
            LessonError::InvalidConfigValueError { .. } => {
                "Correct the value named above and run again"
            }
            LessonError::UnknownLessonError { .. } => {
                "Run `tutorial-log lessons` to see the available ids and slugs"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, LessonError>;

/// Logs `e`, prints the friendly form to stderr and exits with its code.
pub fn exit_with(e: &LessonError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_category() {
        let io = LessonError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(io.category(), ErrorCategory::Io);
        assert_eq!(io.exit_code(), 2);

        let unknown = LessonError::UnknownLessonError {
            query: "42".to_string(),
        };
        assert_eq!(unknown.category(), ErrorCategory::Usage);
        assert_eq!(unknown.exit_code(), 1);
        assert_eq!(unknown.user_friendly_message(), "No lesson matches '42'");
    }
}
