//! Error types for the plugin admin library.
//!
//! Source failures, configuration failures and validation problems all
//! funnel into [`PluginAdminError`] so the HTTP layer can map them onto a
//! response status in one place.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the plugin admin library.
#[derive(Debug, Error)]
pub enum PluginAdminError {
    // Data source errors
    #[error("Plugin source error (matching={matching}): {message}")]
    PluginSource {
        matching: bool,
        message: String,
        #[source]
        source: Option<Box<PluginAdminError>>,
    },

    #[error("Trending source error: {message}")]
    TrendingSource {
        message: String,
        #[source]
        source: Option<Box<PluginAdminError>>,
    },

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    // Validation errors
    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },

    // Generic errors
    #[error("{0}")]
    Other(String),
}

/// Result type alias for plugin admin operations.
pub type Result<T> = std::result::Result<T, PluginAdminError>;

impl From<std::io::Error> for PluginAdminError {
    fn from(err: std::io::Error) -> Self {
        PluginAdminError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for PluginAdminError {
    fn from(err: serde_json::Error) -> Self {
        PluginAdminError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl PluginAdminError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        PluginAdminError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Map to the HTTP status the admin route should answer with.
    ///
    /// Source and config failures are generic server errors (500); only a
    /// bare validation error is reported as 422.
    pub fn http_status(&self) -> u16 {
        match self {
            PluginAdminError::Validation { .. } => 422,
            _ => 500,
        }
    }

    /// Render the error and its whole source chain on one line.
    ///
    /// Used when logging recovered failures so the underlying cause is not
    /// lost behind the outer message.
    pub fn chain(&self) -> String {
        let mut out = self.to_string();
        let mut current = std::error::Error::source(self);
        while let Some(cause) = current {
            out.push_str(": ");
            out.push_str(&cause.to_string());
            current = cause.source();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PluginAdminError::Config {
            message: "bad json".into(),
        };
        assert_eq!(err.to_string(), "Configuration error: bad json");
    }

    #[test]
    fn test_http_status() {
        let source = PluginAdminError::TrendingSource {
            message: "offline".into(),
            source: None,
        };
        assert_eq!(source.http_status(), 500);

        let listing = PluginAdminError::PluginSource {
            matching: true,
            message: "offline".into(),
            source: None,
        };
        assert_eq!(listing.http_status(), 500);

        let invalid = PluginAdminError::Validation {
            field: "id".into(),
            message: "empty".into(),
        };
        assert_eq!(invalid.http_status(), 422);

        assert_eq!(PluginAdminError::Other("boom".into()).http_status(), 500);
    }

    #[test]
    fn test_chain_includes_sources() {
        let err = PluginAdminError::PluginSource {
            matching: true,
            message: "listing failed".into(),
            source: Some(Box::new(PluginAdminError::Validation {
                field: "name".into(),
                message: "must not be empty".into(),
            })),
        };
        let chain = err.chain();
        assert!(chain.starts_with("Plugin source error (matching=true): listing failed"));
        assert!(chain.ends_with("Validation error for name: must not be empty"));
    }
}
