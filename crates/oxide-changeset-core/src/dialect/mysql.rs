//! MySQL dialect implementation.

use super::{Dialect, DialectKind, ObjectQuoting, is_reserved};
use crate::value::SqlValue;

/// Keywords MySQL reserves beyond the common set.
const MYSQL_RESERVED: &[&str] = &["DATABASE", "DUAL", "INTERVAL", "LIMIT", "RANGE", "READ", "RANK"];

/// MySQL (and MariaDB) dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlDialect {
    quoting: ObjectQuoting,
}

impl MySqlDialect {
    /// Creates a new MySQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_quoting(ObjectQuoting::Legacy)
    }

    /// Creates a MySQL dialect with the given quoting policy.
    #[must_use]
    pub const fn with_quoting(quoting: ObjectQuoting) -> Self {
        Self { quoting }
    }
}

impl Dialect for MySqlDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::MySql
    }

    fn quoting(&self) -> ObjectQuoting {
        self.quoting
    }

    fn identifier_quotes(&self) -> (char, char) {
        ('`', '`')
    }

    fn is_reserved_word(&self, word: &str) -> bool {
        is_reserved(word, MYSQL_RESERVED)
    }

    fn literal(&self, value: &SqlValue) -> String {
        match value {
            // Backslash is an escape character in MySQL string literals
            SqlValue::Text(s) => format!("'{}'", s.replace('\\', "\\\\").replace('\'', "''")),
            other => other.to_sql_inline(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::ObjectKind;

    #[test]
    fn test_mysql_dialect() {
        let dialect = MySqlDialect::new();
        assert_eq!(dialect.name(), "mysql");
        assert_eq!(dialect.identifier_quotes(), ('`', '`'));
        assert_eq!(
            dialect.escape_object_name("range", ObjectKind::Column).unwrap(),
            "`range`"
        );
        assert_eq!(
            dialect.escape_object_name("a`b", ObjectKind::Column).unwrap(),
            "`a``b`"
        );
    }

    #[test]
    fn test_mysql_text_literal_escapes_backslash() {
        let dialect = MySqlDialect::new();
        assert_eq!(
            dialect.literal(&SqlValue::Text(String::from(r"C:\tmp's"))),
            r"'C:\\tmp''s'"
        );
    }
}
