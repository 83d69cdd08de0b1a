//! Microsoft SQL Server dialect implementation.

use super::{Dialect, DialectKind, ObjectQuoting, is_reserved};
use crate::value::{SqlValue, hex_upper};

/// Keywords SQL Server reserves beyond the common set.
const MSSQL_RESERVED: &[&str] = &[
    "BEGIN", "CLUSTERED", "IDENTITY", "MERGE", "PERCENT", "PIVOT", "TOP", "TRAN", "TRANSACTION",
];

/// Microsoft SQL Server dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct MssqlDialect {
    quoting: ObjectQuoting,
}

impl MssqlDialect {
    /// Creates a new SQL Server dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_quoting(ObjectQuoting::Legacy)
    }

    /// Creates a SQL Server dialect with the given quoting policy.
    #[must_use]
    pub const fn with_quoting(quoting: ObjectQuoting) -> Self {
        Self { quoting }
    }
}

impl Dialect for MssqlDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::Mssql
    }

    fn quoting(&self) -> ObjectQuoting {
        self.quoting
    }

    fn identifier_quotes(&self) -> (char, char) {
        ('[', ']')
    }

    fn max_qualifier_levels(&self) -> usize {
        3
    }

    fn is_reserved_word(&self, word: &str) -> bool {
        is_reserved(word, MSSQL_RESERVED)
    }

    fn literal(&self, value: &SqlValue) -> String {
        match value {
            SqlValue::Bool(b) => String::from(if *b { "1" } else { "0" }),
            SqlValue::Blob(b) => {
                format!("0x{}", hex_upper(b))
            }
            other => other.to_sql_inline(),
        }
    }
}
