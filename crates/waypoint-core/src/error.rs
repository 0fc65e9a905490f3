//! Error types and exit codes for waypoint
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid labels or weights)
//! - 3: Graph data error (unknown vertex)

use thiserror::Error;

/// Exit codes for the waypoint CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Graph data error - unknown vertex (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during waypoint operations
///
/// Unreachable shortest-path queries are not errors; they produce a valid
/// result (infinite distance, empty path).
#[derive(Error, Debug)]
pub enum WaypointError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid vertex label: {label:?} (labels must be non-empty)")]
    InvalidLabel { label: String },

    #[error("invalid edge weight: {value} (weights must be finite and non-negative)")]
    InvalidWeight { value: f64 },

    // Graph data errors (exit code 3)
    #[error("unknown vertex: {label}")]
    UnknownVertex { label: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WaypointError {
    /// Create an error for a vertex label not present in the graph
    pub fn unknown_vertex(label: impl Into<String>) -> Self {
        WaypointError::UnknownVertex {
            label: label.into(),
        }
    }

    /// Create an error for a label that fails the shape constraint
    pub fn invalid_label(label: impl Into<String>) -> Self {
        WaypointError::InvalidLabel {
            label: label.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WaypointError::UnknownFormat(_)
            | WaypointError::UsageError(_)
            | WaypointError::InvalidLabel { .. }
            | WaypointError::InvalidWeight { .. } => ExitCode::Usage,

            WaypointError::UnknownVertex { .. } => ExitCode::Data,

            WaypointError::Io(_) | WaypointError::Json(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            WaypointError::UnknownFormat(_) => "unknown_format",
            WaypointError::UsageError(_) => "usage_error",
            WaypointError::InvalidLabel { .. } => "invalid_label",
            WaypointError::InvalidWeight { .. } => "invalid_weight",
            WaypointError::UnknownVertex { .. } => "unknown_vertex",
            WaypointError::Io(_) => "io_error",
            WaypointError::Json(_) => "json_error",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for waypoint operations
pub type Result<T> = std::result::Result<T, WaypointError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            WaypointError::unknown_vertex("Z").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            WaypointError::InvalidWeight { value: f64::NAN }.exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            WaypointError::invalid_label("").exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            WaypointError::UnknownFormat("yaml".to_string()).exit_code(),
            ExitCode::Usage
        );
    }

    #[test]
    fn test_error_to_json() {
        let err = WaypointError::unknown_vertex("Z");
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "unknown_vertex");
        assert_eq!(json["error"]["message"], "unknown vertex: Z");
    }

    #[test]
    fn test_error_display() {
        let err = WaypointError::InvalidWeight { value: -1.0 };
        assert_eq!(
            err.to_string(),
            "invalid edge weight: -1 (weights must be finite and non-negative)"
        );
    }
}
