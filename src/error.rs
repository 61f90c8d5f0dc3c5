//! Error types for vault block search.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors raised by a Document Store implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading a document from disk failed
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Document is not known to the store
    #[error("Document not found: {0}")]
    NotFound(String),

    /// Path could not be mapped to a document identity
    #[error("Invalid document path: {0}")]
    InvalidPath(String),

    /// Generic store error with context
    #[error("Document store error: {0}")]
    Other(String),
}

/// Errors that abort a query evaluation.
#[derive(Error, Debug)]
pub enum QueryError {
    /// Listing documents or loading their structure failed
    #[error("Document store failed: {0}")]
    ListFailed(#[from] StoreError),

    /// Reading a document failed; the whole evaluation is abandoned
    #[error("Error during search: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: StoreError,
    },

    /// A newer evaluation started before this one completed
    #[error("Query {generation} superseded by query {latest}")]
    Superseded { generation: u64, latest: u64 },
}

impl QueryError {
    /// Whether the error only means the results are stale.
    pub fn is_superseded(&self) -> bool {
        matches!(self, Self::Superseded { .. })
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with QueryError
pub type QueryResult<T> = Result<T, QueryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::NotFound("Inbox.md".to_string());
        assert_eq!(err.to_string(), "Document not found: Inbox.md");

        let err = ConfigError::MissingVar("VAULT_ROOT".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: VAULT_ROOT"
        );

        let err = QueryError::Superseded {
            generation: 3,
            latest: 4,
        };
        assert_eq!(err.to_string(), "Query 3 superseded by query 4");
        assert!(err.is_superseded());
    }

    #[test]
    fn test_read_failure_message_names_document() {
        let err = QueryError::ReadFailed {
            path: "notes/Projects.md".to_string(),
            source: StoreError::Io {
                path: "notes/Projects.md".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            },
        };
        let message = err.to_string();
        assert!(message.starts_with("Error during search"));
        assert_eq!(message.matches("notes/Projects.md").count(), 1);
        assert!(message.contains("denied"));
        assert!(!err.is_superseded());
    }

    #[test]
    fn test_store_error_converts_into_query_error() {
        let err: QueryError = StoreError::Other("offline".to_string()).into();
        assert!(matches!(err, QueryError::ListFailed(_)));
        assert!(err.to_string().contains("offline"));
    }
}
