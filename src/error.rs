use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unknown pattern '{query}'{}", suggestion_hint(.suggestion))]
    UnknownPattern {
        query: String,
        suggestion: Option<String>,
    },

    #[error("I/O error at {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(slug) => format!(" (did you mean '{slug}'?)"),
        None => String::new(),
    }
}

impl CatalogError {
    pub fn unknown_pattern(query: impl Into<String>, suggestion: Option<String>) -> Self {
        Self::UnknownPattern {
            query: query.into(),
            suggestion,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_pattern_message_with_suggestion() {
        let err = CatalogError::unknown_pattern("strat", Some("strategy".to_string()));
        assert_eq!(
            err.to_string(),
            "Unknown pattern 'strat' (did you mean 'strategy'?)"
        );
    }

    #[test]
    fn test_unknown_pattern_message_without_suggestion() {
        let err = CatalogError::unknown_pattern("xyz", None);
        assert_eq!(err.to_string(), "Unknown pattern 'xyz'");
    }

    #[test]
    fn test_io_error_names_path() {
        let err = CatalogError::io(
            "docs/README.md",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("docs/README.md"));
    }

    #[test]
    fn test_io_cause_only_in_chain() {
        let err = CatalogError::io(
            "docs",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.to_string(), "I/O error at docs");
        let cause = std::error::Error::source(&err).map(|source| source.to_string());
        assert_eq!(cause.as_deref(), Some("gone"));
    }
}
