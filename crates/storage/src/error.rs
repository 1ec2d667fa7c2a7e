use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// Maps errors from INSERT/UPDATE statements, surfacing CHECK, NOT NULL
    /// and numeric overflow failures as constraint violations.
    pub fn from_write(error: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &error {
            match db.code().as_deref() {
                Some("23514") => {
                    return StorageError::ConstraintViolation(format!(
                        "Value out of range ({})",
                        db.constraint().unwrap_or("check")
                    ));
                }
                Some("22003") => {
                    return StorageError::ConstraintViolation(
                        "Numeric value is too large".to_string(),
                    );
                }
                Some("23502") => {
                    return StorageError::ConstraintViolation(
                        "A required field is missing".to_string(),
                    );
                }
                _ => {}
            }
        }
        StorageError::Database(error)
    }
}
