use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failed_display() {
        let error = StoreError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_query_failed_display() {
        let error = StoreError::QueryFailed("table not found".to_string());
        assert_eq!(error.to_string(), "Query failed: table not found");
    }

    #[test]
    fn test_serialization_display() {
        let error = StoreError::Serialization("missing attribute: title".to_string());
        assert_eq!(
            error.to_string(),
            "Serialization error: missing attribute: title"
        );
    }
}
