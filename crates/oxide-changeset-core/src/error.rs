//! Error types for name escaping and upsert generation.

use crate::dialect::{DialectKind, ObjectKind};

/// Errors that can occur while escaping identifiers or generating SQL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An identifier was empty where a name is required.
    #[error("Cannot escape an empty {kind} name")]
    EmptyIdentifier {
        /// The kind of object being escaped.
        kind: ObjectKind,
    },

    /// An identifier contains characters no quoting style can carry.
    #[error("Invalid {kind} name '{name}': {reason}")]
    InvalidIdentifier {
        /// The kind of object being escaped.
        kind: ObjectKind,
        /// The offending name.
        name: String,
        /// Why the name was rejected.
        reason: &'static str,
    },

    /// A qualified name has an unset level within the levels being rendered.
    #[error("Qualified name '{name}' has an unset level")]
    UnsetQualifier {
        /// Display form of the name.
        name: String,
    },

    /// The primary key descriptor names no columns.
    #[error("Primary key of '{table}' names no columns")]
    EmptyPrimaryKey {
        /// Display form of the target table.
        table: String,
    },

    /// A primary key column has no value in the statement.
    #[error("Primary key column '{column}' has no value")]
    MissingKeyValue {
        /// The key column without a value.
        column: String,
    },

    /// A float value is NaN or infinite and has no portable SQL literal.
    #[error("Column '{column}' holds a non-finite float")]
    NonFiniteFloat {
        /// The column holding the value.
        column: String,
    },

    /// An UPDATE was requested but every column is part of the key or
    /// excluded from updates.
    #[error("No fields to update in SET clause of '{table}'")]
    NoUpdateColumns {
        /// Display form of the target table.
        table: String,
    },

    /// No registered generator claims the dialect.
    #[error("No upsert generator supports dialect '{0}'")]
    UnsupportedDialect(DialectKind),

    /// A dialect name could not be recognized.
    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),
}

/// Result type for escaping and generation.
pub type Result<T> = std::result::Result<T, Error>;
