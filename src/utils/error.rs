use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkError {
    #[error("Invalid project ref format: '{value}'. Must be like `abcdefghijklmnopqrst`.")]
    InvalidProjectRef { value: String },

    #[error("Access token not provided. Set the {env_var} environment variable or log in first.")]
    MissingAccessToken { env_var: String },

    #[error("Invalid access token format. Must be like `sbp_0102...1920`.")]
    InvalidAccessToken,

    #[error("Failed to read access token from {path}: {source}")]
    UnreadableAccessToken {
        path: String,
        source: std::io::Error,
    },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Authorization failed for the access token and project ref pair ({status}): {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Project is not linked: no project ref found at {path}")]
    NotLinked { path: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Authentication,
    Network,
    Filesystem,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LinkError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LinkError::InvalidProjectRef { .. } | LinkError::NotLinked { .. } => {
                ErrorCategory::Validation
            }
            LinkError::MissingAccessToken { .. }
            | LinkError::InvalidAccessToken
            | LinkError::UnreadableAccessToken { .. } => ErrorCategory::Authentication,
            LinkError::UnexpectedStatus { status, .. } if *status == 401 || *status == 403 => {
                ErrorCategory::Authentication
            }
            LinkError::ApiError(_) | LinkError::UnexpectedStatus { .. } => ErrorCategory::Network,
            LinkError::IoError(_) => ErrorCategory::Filesystem,
            LinkError::ConfigError { .. } | LinkError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::Configuration => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Authentication => ErrorSeverity::High,
            ErrorCategory::Filesystem => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this failure. Never zero, and never 2, which
    /// clap uses for usage errors.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::Configuration => 1,
            ErrorCategory::Filesystem => 3,
            ErrorCategory::Authentication => 4,
            ErrorCategory::Network => 5,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            LinkError::InvalidProjectRef { .. } => {
                "Copy the 20-letter project ref from your project's dashboard URL".to_string()
            }
            LinkError::MissingAccessToken { env_var } => format!(
                "Generate an access token in your account settings and export it as {}",
                env_var
            ),
            LinkError::InvalidAccessToken => {
                "Check that the token starts with 'sbp_' followed by 40 hex characters".to_string()
            }
            LinkError::UnreadableAccessToken { path, .. } => format!(
                "Make sure {} is a readable text file, or log in again",
                path
            ),
            LinkError::ApiError(_) => {
                "Check your network connection and the configured API URL".to_string()
            }
            LinkError::UnexpectedStatus { status, .. } if *status == 401 || *status == 403 => {
                "Make sure the access token belongs to an account with access to this project"
                    .to_string()
            }
            LinkError::UnexpectedStatus { .. } => {
                "Verify the project ref exists and try again later".to_string()
            }
            LinkError::IoError(_) => {
                "Make sure the working directory exists and is writable".to_string()
            }
            LinkError::NotLinked { .. } => {
                "Run `project-link link <project-ref>` first".to_string()
            }
            LinkError::ConfigError { .. } | LinkError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command line flags".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Validation => format!("Invalid input: {}", self),
            ErrorCategory::Authentication => format!("Authentication failed: {}", self),
            ErrorCategory::Network => format!("Could not reach the project: {}", self),
            ErrorCategory::Filesystem => format!("Could not save the project ref: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, LinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        let err = LinkError::InvalidProjectRef {
            value: "malformed".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.exit_code(), 1);

        let err = LinkError::MissingAccessToken {
            env_var: "SUPABASE_ACCESS_TOKEN".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Authentication);
        assert!(err.recovery_suggestion().contains("SUPABASE_ACCESS_TOKEN"));

        let err = LinkError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        ));
        assert_eq!(err.category(), ErrorCategory::Filesystem);
        assert_eq!(err.severity(), ErrorSeverity::Critical);

        let err = LinkError::UnreadableAccessToken {
            path: "/home/user/.supabase/access-token".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::InvalidData),
        };
        assert_eq!(err.category(), ErrorCategory::Authentication);
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_unexpected_status_classification() {
        let unauthorized = LinkError::UnexpectedStatus {
            status: 401,
            body: "Unauthorized".to_string(),
        };
        assert_eq!(unauthorized.category(), ErrorCategory::Authentication);

        let unavailable = LinkError::UnexpectedStatus {
            status: 500,
            body: "unavailable".to_string(),
        };
        assert_eq!(unavailable.category(), ErrorCategory::Network);
        assert_eq!(unavailable.exit_code(), 5);
        assert!(unavailable.to_string().contains("unavailable"));
    }

    #[test]
    fn test_exit_codes_are_non_zero() {
        let errors = vec![
            LinkError::InvalidAccessToken,
            LinkError::UnreadableAccessToken {
                path: "/home/user/.supabase/access-token".to_string(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            },
            LinkError::UnexpectedStatus {
                status: 503,
                body: String::new(),
            },
            LinkError::IoError(std::io::Error::from(std::io::ErrorKind::NotFound)),
            LinkError::NotLinked {
                path: "supabase/.temp/project-ref".to_string(),
            },
            LinkError::ConfigError {
                message: "bad".to_string(),
            },
        ];
        for err in errors {
            assert_ne!(err.exit_code(), 0, "{}", err);
            // 2 is reserved for clap usage errors
            assert_ne!(err.exit_code(), 2, "{}", err);
            assert!(!err.user_friendly_message().is_empty());
        }
    }
}
