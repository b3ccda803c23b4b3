//! # App Error Type
//!
//! Unified error type for terminal commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Kantina                                │
//! │                                                                         │
//! │  Operator                     Rust Backend                              │
//! │  ────────                     ────────────                              │
//! │                                                                         │
//! │  > sell Rice,500,GCash,                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, AppError>                                             │  │
//! │  │         │                                                        │  │
//! │  │  LedgerError::Validation ──────┐                                 │  │
//! │  │  LedgerError::ProductNotFound ─┼──► AppError { code, message } ──┼─►│
//! │  │  LedgerError::InsufficientStock┘                                 │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  error[VALIDATION_ERROR]: reference_number is required                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use kantina_core::LedgerError;

/// Error returned from terminal commands.
///
/// Carries both a machine-readable `code` and a human-readable `message`,
/// so a future non-terminal front end can branch on the code while the
/// REPL just prints the message.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Referenced product does not exist
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Requested quantity exceeds available stock
    InsufficientStock,

    /// The command line itself could not be parsed
    BadCommand,
}

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a bad-command error (unparseable operator input).
    pub fn bad_command(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::BadCommand, message)
    }
}

/// Converts core errors to app errors.
impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        let code = match &err {
            LedgerError::ProductNotFound(_) => ErrorCode::NotFound,
            LedgerError::InsufficientStock { .. } => ErrorCode::InsufficientStock,
            LedgerError::Validation(_) => ErrorCode::ValidationError,
        };
        AppError::new(code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
