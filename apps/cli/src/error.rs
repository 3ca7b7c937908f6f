use thiserror::Error;

use samurai_types::SamuraiError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid command arguments: {message}")]
    InvalidArgs { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Core library error: {0}")]
    Core(#[from] SamuraiError),
}

impl CliError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn invalid_args<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgs {
            message: message.into(),
        }
    }

    /// Get user-friendly error message for display
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("⚙️ Configuration Error: {}", message)
            }
            Self::InvalidArgs { message } => {
                format!("❌ Invalid Arguments: {}", message)
            }
            Self::Io(e) => {
                format!("💾 Input Error: {}", e)
            }
            Self::Json(e) => {
                format!("📄 Data Format Error: {}", e)
            }
            Self::Core(e) => {
                format!("🔧 Internal Error: {}", e)
            }
        }
    }

    /// Get error code for programmatic handling
    pub fn error_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 10,
            Self::InvalidArgs { .. } => 11,
            Self::Io(_) => 30,
            Self::Json(_) => 31,
            Self::Core(_) => 40,
        }
    }

    /// Get suggestions for resolving the error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Config { .. } => vec![
                "Check your settings file syntax".to_string(),
                "Use 'samurai config show' to see the effective settings".to_string(),
                "Pass '--force' to 'samurai config init' to overwrite settings".to_string(),
            ],
            Self::InvalidArgs { .. } => vec![
                "Check command syntax with 'samurai --help'".to_string(),
                "Verify all required arguments are provided".to_string(),
            ],
            Self::Io(_) => vec![
                "Make sure the input is valid UTF-8".to_string(),
                "Pass the text with '--text' instead of stdin".to_string(),
            ],
            Self::Json(_) => vec![
                "Try '--output pretty' instead".to_string(),
            ],
            Self::Core(_) => vec![
                "Try with '--verbose' for detailed logging".to_string(),
                "Report this issue if it persists".to_string(),
            ],
        }
    }
}

// Helper function to display error with suggestions
pub fn display_error_with_help(error: &CliError) {
    eprintln!("{}", error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        eprintln!("\n💡 Suggestions:");
        for (i, suggestion) in suggestions.iter().enumerate() {
            eprintln!("  {}. {}", i + 1, suggestion);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = CliError::config("Test configuration error");
        assert!(matches!(error, CliError::Config { .. }));
    }

    #[test]
    fn test_user_message() {
        let error = CliError::invalid_args("--find must not be empty");
        let message = error.user_message();
        assert!(message.contains("❌"));
        assert!(message.contains("--find must not be empty"));
    }

    #[test]
    fn test_error_code() {
        assert_eq!(CliError::config("test").error_code(), 10);
        assert_eq!(CliError::invalid_args("test").error_code(), 11);
    }

    #[test]
    fn test_suggestions() {
        let error = CliError::from(SamuraiError::Pattern { message: "bad".to_string() });
        assert!(matches!(error, CliError::Core(_)));
        assert!(error.suggestions().iter().any(|s| s.contains("verbose")));
    }

    #[test]
    fn test_from_conversions() {
        let io_error = std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8");
        let cli_error = CliError::from(io_error);
        assert!(matches!(cli_error, CliError::Io(_)));
        assert_eq!(cli_error.error_code(), 30);
    }
}
