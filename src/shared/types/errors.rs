use thiserror::Error;

/// Errors raised while building a page.
#[derive(Debug, Error)]
pub enum PaginationError {
    #[error("Invalid pagination parameter: {parameter} must be at least 1, got {value}")]
    InvalidParameter {
        parameter: &'static str,
        value: i64,
    },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl PaginationError {
    /// Whether the failure came from the data source and may succeed if retried.
    pub fn is_transient(&self) -> bool {
        match self {
            PaginationError::Database(err) => is_transient_db_err(err),
            PaginationError::InvalidParameter { .. } => false,
        }
    }
}

/// Connection-level failures are worth another attempt; query and type
/// errors will fail the same way every time.
pub fn is_transient_db_err(err: &sea_orm::DbErr) -> bool {
    matches!(
        err,
        sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_)
    )
}

pub type PaginationResult<T> = Result<T, PaginationError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error(transparent)]
    Pagination(#[from] PaginationError),
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(err: sea_orm::DbErr) -> Self {
        DomainError::Pagination(PaginationError::Database(err))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
