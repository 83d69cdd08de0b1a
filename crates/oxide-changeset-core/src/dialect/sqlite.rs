//! SQLite dialect implementation.

use super::{Dialect, DialectKind, ObjectQuoting, is_reserved};

/// Keywords SQLite reserves beyond the common set.
const SQLITE_RESERVED: &[&str] = &["ABORT", "CONFLICT", "GLOB", "PRAGMA", "REPLACE", "ROWID"];

/// SQLite dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteDialect {
    quoting: ObjectQuoting,
}

impl SqliteDialect {
    /// Creates a new SQLite dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_quoting(ObjectQuoting::Legacy)
    }

    /// Creates a SQLite dialect with the given quoting policy.
    #[must_use]
    pub const fn with_quoting(quoting: ObjectQuoting) -> Self {
        Self { quoting }
    }
}

impl Dialect for SqliteDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::Sqlite
    }

    fn quoting(&self) -> ObjectQuoting {
        self.quoting
    }

    fn identifier_quotes(&self) -> (char, char) {
        ('"', '"') // SQLite also accepts backticks, but double quotes are standard
    }

    fn is_reserved_word(&self, word: &str) -> bool {
        is_reserved(word, SQLITE_RESERVED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::ObjectKind;

    #[test]
    fn test_sqlite_dialect() {
        let dialect = SqliteDialect::new();
        assert_eq!(dialect.name(), "sqlite");
        assert_eq!(dialect.identifier_quotes(), ('"', '"'));
        assert!(dialect.is_reserved_word("pragma"));
        assert_eq!(
            dialect.escape_object_name("replace", ObjectKind::Column).unwrap(),
            "\"replace\""
        );
    }
}
