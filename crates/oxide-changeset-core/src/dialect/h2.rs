//! H2 dialect implementation.

use super::{Dialect, DialectKind, ObjectQuoting, is_reserved};

/// Keywords H2 reserves beyond the common set.
const H2_RESERVED: &[&str] = &["LIMIT", "MINUS", "ROW", "ROWNUM", "SYSDATE", "VALUE"];

/// H2 dialect.
///
/// H2 upserts natively with `MERGE INTO ... KEY(...)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct H2Dialect {
    quoting: ObjectQuoting,
}

impl H2Dialect {
    /// Creates a new H2 dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_quoting(ObjectQuoting::Legacy)
    }

    /// Creates an H2 dialect with the given quoting policy.
    #[must_use]
    pub const fn with_quoting(quoting: ObjectQuoting) -> Self {
        Self { quoting }
    }
}

impl Dialect for H2Dialect {
    fn kind(&self) -> DialectKind {
        DialectKind::H2
    }

    fn quoting(&self) -> ObjectQuoting {
        self.quoting
    }

    fn max_qualifier_levels(&self) -> usize {
        3
    }

    fn is_reserved_word(&self, word: &str) -> bool {
        is_reserved(word, H2_RESERVED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::ObjectKind;

    #[test]
    fn test_h2_dialect() {
        let dialect = H2Dialect::new();
        assert_eq!(dialect.name(), "h2");
        assert_eq!(dialect.max_qualifier_levels(), 3);
        assert_eq!(
            dialect.escape_object_name("VALUE", ObjectKind::Column).unwrap(),
            "\"VALUE\""
        );
        assert_eq!(
            dialect.escape_object_name("ID", ObjectKind::Column).unwrap(),
            "ID"
        );
    }
}
