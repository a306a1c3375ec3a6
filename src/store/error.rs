use thiserror::Error;

/// Result type for entity store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Error types for entity store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Malformed connection string or settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database unreachable or authentication failure
    #[error("Connection error: {0}")]
    Connection(String),

    /// Connection pool issues
    #[error("Pool error: {0}")]
    Pool(String),

    /// SQL errors, constraint violations
    #[error("Database error: {0}")]
    Database(String),
}

/// Convert tokio-postgres errors to store errors
impl From<tokio_postgres::Error> for StoreError {
    fn from(err: tokio_postgres::Error) -> Self {
        if let Some(db_error) = err.as_db_error() {
            return StoreError::Database(format!(
                "{}: {}",
                db_error.code().code(),
                db_error.message()
            ));
        }

        if err.is_closed() {
            return StoreError::Connection(err.to_string());
        }

        StoreError::Database(format!("{:?}", err))
    }
}

/// Convert deadpool errors to store errors
impl From<deadpool_postgres::PoolError> for StoreError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        StoreError::Pool(err.to_string())
    }
}

/// Convert deadpool build errors to store errors
impl From<deadpool_postgres::BuildError> for StoreError {
    fn from(err: deadpool_postgres::BuildError) -> Self {
        StoreError::Connection(err.to_string())
    }
}
