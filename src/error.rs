//! Unified error types for kakaolog.
//!
//! Parsing itself never fails: [`ExportParser`](crate::parser::ExportParser)
//! degrades gracefully on any text. Errors come from the edges of the crate:
//! reading files, validating a parsed log, parsing filter dates and writing
//! output.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for kakaolog operations.
///
/// # Example
///
/// ```rust
/// use kakaolog::error::Result;
/// use kakaolog::ChatLog;
///
/// fn load() -> Result<ChatLog> {
///     Ok(kakaolog::parse("민수 님과 카카오톡 대화"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, KakaologError>;

/// The error type for all kakaolog operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KakaologError {
    /// An I/O error occurred while reading an export or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The parsed log fails the minimal validity check.
    ///
    /// Produced by [`ChatLog::validate`](crate::ChatLog::validate) when the
    /// room title is missing or the log holds no messages.
    #[error("Not a valid KakaoTalk export: {reason}")]
    InvalidExport {
        /// What the check found missing
        reason: String,
    },

    /// The output format or path is not usable.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for KakaologError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        KakaologError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl KakaologError {
    /// Creates an invalid export error.
    pub fn invalid_export(reason: impl Into<String>) -> Self {
        KakaologError::InvalidExport {
            reason: reason.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        KakaologError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        KakaologError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, KakaologError::Io(_))
    }

    /// Returns `true` if the parsed log failed validation.
    pub fn is_invalid_export(&self) -> bool {
        matches!(self, KakaologError::InvalidExport { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, KakaologError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, KakaologError::InvalidDate { .. })
    }
}
