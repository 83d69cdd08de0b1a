//! Generic SQL dialect.

use super::{Dialect, DialectKind, ObjectQuoting};

/// A generic SQL dialect using ANSI SQL standards.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect {
    quoting: ObjectQuoting,
}

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_quoting(ObjectQuoting::Legacy)
    }

    /// Creates a generic dialect with the given quoting policy.
    #[must_use]
    pub const fn with_quoting(quoting: ObjectQuoting) -> Self {
        Self { quoting }
    }
}

impl Dialect for GenericDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::Generic
    }

    fn quoting(&self) -> ObjectQuoting {
        self.quoting
    }

    fn max_qualifier_levels(&self) -> usize {
        3
    }
}
