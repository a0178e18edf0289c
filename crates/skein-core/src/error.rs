//! Error types and exit codes for skein
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid graph input)
//! - 3: Data error (unknown vertex, missing file contents)

mod macros;

use thiserror::Error;

/// Exit codes reported by the skein binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args or malformed input (2)
    Usage = 2,
    /// Data error - reference to a vertex that does not exist (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum SkeinError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidArgument { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl SkeinError {
    /// Create an error for malformed input detected at a call boundary
    pub fn invalid_argument(context: &str, value: impl std::fmt::Display) -> Self {
        SkeinError::InvalidArgument {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a reference to something that does not exist
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        SkeinError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        SkeinError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a failed IO operation on a path
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        SkeinError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SkeinError::UsageError(_)
            | SkeinError::InvalidArgument { .. }
            | SkeinError::Unsupported { .. } => ExitCode::Usage,

            SkeinError::NotFound { .. } => ExitCode::Data,

            SkeinError::Json(_)
            | SkeinError::TomlDe(_)
            | SkeinError::TomlSer(_)
            | SkeinError::FailedOperationWithTarget { .. }
            | SkeinError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            SkeinError::UsageError(_) => "usage_error",
            SkeinError::InvalidArgument { .. } => "invalid_argument",
            SkeinError::Unsupported { .. } => "unsupported",
            SkeinError::NotFound { .. } => "not_found",
            SkeinError::Json(_) => "json_error",
            SkeinError::TomlDe(_) | SkeinError::TomlSer(_) => "toml_error",
            SkeinError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            SkeinError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for skein operations
pub type Result<T> = std::result::Result<T, SkeinError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_maps_to_usage() {
        let err = SkeinError::invalid_argument("edge weight", "cat");
        assert_eq!(err.exit_code(), ExitCode::Usage);
        assert_eq!(err.to_string(), "invalid edge weight: cat");
    }

    #[test]
    fn test_not_found_maps_to_data() {
        let err = SkeinError::not_found("vertex", "Z");
        assert_eq!(err.exit_code(), ExitCode::Data);
        assert_eq!(err.to_string(), "vertex not found: Z");
    }

    #[test]
    fn test_io_operation_maps_to_failure() {
        let cause = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = SkeinError::io_operation("read graph", "g.toml", cause);
        assert_eq!(err.exit_code(), ExitCode::Failure);
        assert_eq!(err.error_type(), "failed_operation_with_target");
    }

    #[test]
    fn test_to_json_envelope() {
        let json = SkeinError::not_found("vertex", "Q").to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "not_found");
        assert_eq!(json["error"]["message"], "vertex not found: Q");
    }

    fn lookup(label: &str) -> Result<()> {
        if label.is_empty() {
            crate::bail_usage!("label required");
        }
        crate::bail_not_found!("vertex", label)
    }

    #[test]
    fn test_bail_macros() {
        assert!(matches!(lookup(""), Err(SkeinError::UsageError(_))));
        let err = lookup("Z").unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::Data);
        assert_eq!(err.to_string(), "vertex not found: Z");
    }
}
