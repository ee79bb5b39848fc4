//! Error types for recomendar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for recomendar operations.
///
/// The recommendation core itself only ever produces [`InvalidInput`] and
/// [`TitleNotFound`]; the I/O variants belong to the catalog loading
/// collaborator in [`crate::loading`].
///
/// [`InvalidInput`]: RecomendarError::InvalidInput
/// [`TitleNotFound`]: RecomendarError::TitleNotFound
///
/// # Examples
///
/// ```
/// use recomendar::error::RecomendarError;
///
/// let err = RecomendarError::title_not_found("The Room");
/// assert!(err.to_string().contains("The Room"));
/// ```
#[derive(Debug)]
pub enum RecomendarError {
    /// Input the pipeline cannot work with (empty catalog, no usable
    /// vocabulary, mismatched dimensions).
    InvalidInput {
        /// What was wrong with the input
        message: String,
    },

    /// Query title has no matching row in the catalog. Recoverable at the
    /// caller, which should prompt for another title.
    TitleNotFound {
        /// The title that failed to resolve
        title: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Malformed CSV input.
    CsvParse {
        /// 1-based line number, 0 when unknown
        line: usize,
        /// Error description
        message: String,
    },
}

impl fmt::Display for RecomendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecomendarError::InvalidInput { message } => {
                write!(f, "Invalid input: {message}")
            }
            RecomendarError::TitleNotFound { title } => {
                write!(f, "Title '{title}' not found in catalog")
            }
            RecomendarError::Io(e) => write!(f, "I/O error: {e}"),
            RecomendarError::CsvParse { line, message } => {
                write!(f, "CSV error at line {line}: {message}")
            }
        }
    }
}

impl std::error::Error for RecomendarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecomendarError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RecomendarError {
    fn from(err: std::io::Error) -> Self {
        RecomendarError::Io(err)
    }
}

impl From<csv::Error> for RecomendarError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map_or(0, |p| p.line() as usize);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(e) => RecomendarError::Io(e),
            _ => RecomendarError::CsvParse { line, message },
        }
    }
}

impl RecomendarError {
    /// Create an invalid input error with a descriptive message.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a title resolution error.
    #[must_use]
    pub fn title_not_found(title: impl Into<String>) -> Self {
        Self::TitleNotFound {
            title: title.into(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, RecomendarError>;
