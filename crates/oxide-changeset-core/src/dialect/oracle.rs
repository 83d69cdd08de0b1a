//! Oracle dialect implementation.

use super::{Dialect, DialectKind, ObjectQuoting, is_reserved};
use crate::value::{SqlValue, hex_upper};

/// Keywords Oracle reserves beyond the common set.
const ORACLE_RESERVED: &[&str] = &[
    "ACCESS", "COMMENT", "DATE", "LEVEL", "MINUS", "NUMBER", "ROW", "ROWID", "ROWNUM", "SIZE",
    "SYSDATE",
];

/// Oracle dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct OracleDialect {
    quoting: ObjectQuoting,
}

impl OracleDialect {
    /// Creates a new Oracle dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_quoting(ObjectQuoting::Legacy)
    }

    /// Creates an Oracle dialect with the given quoting policy.
    #[must_use]
    pub const fn with_quoting(quoting: ObjectQuoting) -> Self {
        Self { quoting }
    }
}

impl Dialect for OracleDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::Oracle
    }

    fn quoting(&self) -> ObjectQuoting {
        self.quoting
    }

    fn is_reserved_word(&self, word: &str) -> bool {
        is_reserved(word, ORACLE_RESERVED)
    }

    fn literal(&self, value: &SqlValue) -> String {
        match value {
            SqlValue::Bool(b) => String::from(if *b { "1" } else { "0" }),
            SqlValue::Blob(b) => {
                format!("HEXTORAW('{}')", hex_upper(b))
            }
            other => other.to_sql_inline(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::ObjectKind;

    #[test]
    fn test_oracle_dialect() {
        let dialect = OracleDialect::new();
        assert_eq!(dialect.name(), "oracle");
        assert_eq!(
            dialect.escape_object_name("level", ObjectKind::Column).unwrap(),
            "\"level\""
        );
        assert_eq!(dialect.literal(&SqlValue::Bool(false)), "0");
        assert_eq!(
            dialect.literal(&SqlValue::Blob(vec![0xAB])),
            "HEXTORAW('AB')"
        );
    }
}
