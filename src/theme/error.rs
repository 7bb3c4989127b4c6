//! Preference store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing preferences.
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// The preference file could not be read or written.
    #[error("failed to access preference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The preference file does not contain a JSON object of strings.
    #[error("malformed preference file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No configuration directory could be determined for this user.
    #[error("no configuration directory available")]
    NoConfigDir,
}

impl PreferenceError {
    /// Returns true if this error came from the filesystem.
    #[must_use]
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::Io { .. } => "check that the preference directory is writable",
            Self::Malformed { .. } => "delete the preference file to start fresh",
            Self::NoConfigDir => "pass --prefs with an explicit file path",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PreferenceError::Io {
            path: PathBuf::from("/tmp/prefs.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/prefs.json"));
        assert!(err.to_string().contains("denied"));
        assert!(err.is_io_error());

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = PreferenceError::Malformed {
            path: PathBuf::from("prefs.json"),
            source: json_err,
        };
        assert!(err.to_string().contains("malformed"));
        assert!(!err.is_io_error());
    }

    #[test]
    fn test_suggestion() {
        assert!(PreferenceError::NoConfigDir.suggestion().contains("--prefs"));
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = PreferenceError::Malformed {
            path: PathBuf::from("prefs.json"),
            source: json_err,
        };
        assert!(err.suggestion().contains("delete"));
    }
}
