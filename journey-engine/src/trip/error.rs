//! Trip response loading errors.

use std::fmt;
use std::path::PathBuf;

/// Maximum number of body characters echoed back in a JSON error.
const BODY_EXCERPT_CHARS: usize = 200;

/// Errors from reading a trip-planner response.
#[derive(Debug)]
pub enum LoadError {
    /// The response file could not be read
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },
}

impl LoadError {
    /// Build a JSON error, keeping a short excerpt of the offending body.
    pub(crate) fn json(err: &serde_json::Error, body: &str) -> Self {
        let body = body.trim();
        let body = if body.is_empty() {
            None
        } else {
            Some(body.chars().take(BODY_EXCERPT_CHARS).collect())
        };
        LoadError::Json {
            message: err.to_string(),
            body,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            LoadError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Json { .. } => None,
        }
    }
}
