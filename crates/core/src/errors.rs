use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type BookingResult<T> = Result<T, BookingError>;

pub const CONFLICT_MESSAGE: &str = "Stylist already booked at this time";

/// Failures reported by a persistence backend.
///
/// Constraint violations are kept distinct from other failures so the
/// scheduling layer can turn a lost race on the `(stylist, start)` unique key
/// into a deterministic conflict instead of a generic error.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    #[error(transparent)]
    Other(#[from] eyre::Report),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for BookingError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation(_) => {
                BookingError::Conflict(CONFLICT_MESSAGE.to_string())
            }
            StoreError::ForeignKeyViolation(detail) => {
                BookingError::NotFound(format!("Referenced record does not exist ({detail})"))
            }
            StoreError::Other(report) => BookingError::Database(report),
        }
    }
}
