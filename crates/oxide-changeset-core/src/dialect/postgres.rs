//! PostgreSQL dialect implementation.

use super::{Dialect, DialectKind, ObjectQuoting, is_reserved};
use crate::value::SqlValue;

/// Keywords PostgreSQL reserves beyond the common set.
const POSTGRES_RESERVED: &[&str] = &[
    "ANALYSE", "ANALYZE", "ARRAY", "ASYMMETRIC", "LIMIT", "OFFSET", "PLACING", "RETURNING",
    "SYMMETRIC", "VARIADIC",
];

/// PostgreSQL dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresDialect {
    quoting: ObjectQuoting,
}

impl PostgresDialect {
    /// Creates a new PostgreSQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_quoting(ObjectQuoting::Legacy)
    }

    /// Creates a PostgreSQL dialect with the given quoting policy.
    #[must_use]
    pub const fn with_quoting(quoting: ObjectQuoting) -> Self {
        Self { quoting }
    }
}

impl Dialect for PostgresDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::Postgres
    }

    fn quoting(&self) -> ObjectQuoting {
        self.quoting
    }

    fn is_reserved_word(&self, word: &str) -> bool {
        is_reserved(word, POSTGRES_RESERVED)
    }

    fn literal(&self, value: &SqlValue) -> String {
        match value {
            SqlValue::Blob(b) => {
                let hex: String = b.iter().map(|byte| format!("{byte:02x}")).collect();
                format!("'\\x{hex}'::bytea")
            }
            other => other.to_sql_inline(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgres_dialect() {
        let dialect = PostgresDialect::new();
        assert_eq!(dialect.name(), "postgresql");
        assert!(dialect.is_reserved_word("returning"));
        assert_eq!(dialect.literal(&SqlValue::Bool(true)), "TRUE");
    }

    #[test]
    fn test_postgres_blob_literal() {
        let dialect = PostgresDialect::new();
        assert_eq!(
            dialect.literal(&SqlValue::Blob(vec![0xDE, 0xAD])),
            "'\\xdead'::bytea"
        );
    }
}
