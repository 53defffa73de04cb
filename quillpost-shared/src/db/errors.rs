/// Classification of `sqlx` errors
///
/// Handlers need to tell a uniqueness clash or a dangling foreign key apart
/// from an outage without looking at driver internals. PostgreSQL reports
/// these through SQLSTATE codes.

/// SQLSTATE for `unique_violation`
pub const UNIQUE_VIOLATION: &str = "23505";

/// SQLSTATE for `foreign_key_violation`
pub const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Kind of storage failure, independent of the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    /// A UNIQUE constraint rejected the write
    UniqueViolation,

    /// A FOREIGN KEY constraint rejected the write
    ForeignKeyViolation,

    /// A query expecting exactly one row found none
    RowNotFound,

    /// Anything else (connectivity, syntax, pool exhaustion...)
    Other,
}

/// Maps a driver error to a [`StoreErrorKind`]
pub fn classify(err: &sqlx::Error) -> StoreErrorKind {
    match err {
        sqlx::Error::RowNotFound => StoreErrorKind::RowNotFound,
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some(UNIQUE_VIOLATION) => StoreErrorKind::UniqueViolation,
            Some(FOREIGN_KEY_VIOLATION) => StoreErrorKind::ForeignKeyViolation,
            _ => StoreErrorKind::Other,
        },
        _ => StoreErrorKind::Other,
    }
}
