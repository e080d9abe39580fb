//! Error types for sqlq

use thiserror::Error;

/// Validation failure reported by a builder's `to_sql`.
///
/// Each kind is a fixed value: the builder that produced it is known to the
/// caller, so no context is carried.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// No table was given to the builder
    #[error("table name is required; use from(), into() or update() to specify it")]
    MissingTable,

    /// The column list is empty
    #[error("columns are required; use select(), columns() or set() to specify them")]
    MissingColumns,

    /// The value list is empty
    #[error("values are required; use values() or set() to specify them")]
    MissingValues,

    /// Column and value counts differ
    #[error("length of columns and values must be the same")]
    ColumnValueLengthMismatch,

    /// The same column appears more than once
    #[error("the same column appears more than once in the query")]
    DuplicateColumns,

    /// A negative LIMIT was requested
    #[error("limit can't be a negative value")]
    InvalidLimit,
}

/// Convenience Result type for sqlq operations
pub type Result<T> = std::result::Result<T, Error>;
