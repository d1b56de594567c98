// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Image(String),
    Config(String),
    Selection(SelectionError),
}

/// Reasons a chosen file (or a submission) is refused.
/// Every variant maps to a user-facing, localized banner message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// File extension is not one of the accepted image types (jpg/jpeg/png).
    UnsupportedType,

    /// File exceeds the maximum accepted byte size.
    Oversized,

    /// The file could not be read or decoded into a preview.
    Unreadable,

    /// Analyze was requested with no validated selection present.
    EmptySubmission,
}

impl SelectionError {
    /// Returns the i18n message key for this rejection.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SelectionError::UnsupportedType => "alert-invalid-type",
            SelectionError::Oversized => "alert-too-large",
            SelectionError::Unreadable => "alert-read-error",
            SelectionError::EmptySubmission => "alert-no-file",
        }
    }
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::UnsupportedType => write!(f, "Unsupported file type"),
            SelectionError::Oversized => write!(f, "File exceeds the size limit"),
            SelectionError::Unreadable => write!(f, "File could not be read"),
            SelectionError::EmptySubmission => write!(f, "No file selected"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Selection(e) => write!(f, "Selection Error: {}", e),
        }
    }
}

impl From<SelectionError> for Error {
    fn from(err: SelectionError) -> Self {
        Error::Selection(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn selection_error_converts_to_error() {
        let err: Error = SelectionError::Oversized.into();
        assert!(matches!(err, Error::Selection(SelectionError::Oversized)));
    }

    #[test]
    fn selection_error_i18n_keys() {
        assert_eq!(
            SelectionError::UnsupportedType.i18n_key(),
            "alert-invalid-type"
        );
        assert_eq!(SelectionError::Oversized.i18n_key(), "alert-too-large");
        assert_eq!(SelectionError::Unreadable.i18n_key(), "alert-read-error");
        assert_eq!(SelectionError::EmptySubmission.i18n_key(), "alert-no-file");
    }

    #[test]
    fn selection_error_display() {
        assert_eq!(
            format!("{}", SelectionError::Oversized),
            "File exceeds the size limit"
        );
    }
}
