//! SQL Dialect support.
//!
//! Databases disagree on how identifiers are quoted, which words are
//! reserved, how deeply a table reference may be qualified and how some
//! literals are spelled. This module provides a trait for that behavior and
//! one implementation per supported engine.

mod generic;
mod h2;
mod mssql;
mod mysql;
mod oracle;
mod postgres;
mod sqlite;

use std::fmt;
use std::str::FromStr;

pub use generic::GenericDialect;
pub use h2::H2Dialect;
pub use mssql::MssqlDialect;
pub use mysql::MySqlDialect;
pub use oracle::OracleDialect;
pub use postgres::PostgresDialect;
pub use sqlite::SqliteDialect;

use crate::error::{Error, Result};
use crate::name::QualifiedName;
use crate::value::SqlValue;

/// Identity of a database engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialectKind {
    /// ANSI SQL without engine-specific features.
    Generic,
    /// H2.
    H2,
    /// MySQL and MariaDB.
    MySql,
    /// PostgreSQL.
    Postgres,
    /// SQLite.
    Sqlite,
    /// Microsoft SQL Server.
    Mssql,
    /// Oracle Database.
    Oracle,
}

impl DialectKind {
    /// Every known dialect.
    pub const ALL: [Self; 7] = [
        Self::Generic,
        Self::H2,
        Self::MySql,
        Self::Postgres,
        Self::Sqlite,
        Self::Mssql,
        Self::Oracle,
    ];

    /// Returns the canonical name of the dialect.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::H2 => "h2",
            Self::MySql => "mysql",
            Self::Postgres => "postgresql",
            Self::Sqlite => "sqlite",
            Self::Mssql => "mssql",
            Self::Oracle => "oracle",
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DialectKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generic" | "ansi" => Ok(Self::Generic),
            "h2" => Ok(Self::H2),
            "mysql" | "mariadb" => Ok(Self::MySql),
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            "mssql" | "sqlserver" => Ok(Self::Mssql),
            "oracle" => Ok(Self::Oracle),
            _ => Err(Error::UnknownDialect(String::from(s))),
        }
    }
}

/// The kind of object an identifier names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// A catalog (database).
    Catalog,
    /// A schema.
    Schema,
    /// A table.
    Table,
    /// A column.
    Column,
    /// An index.
    Index,
    /// A sequence.
    Sequence,
    /// A view.
    View,
}

impl ObjectKind {
    /// Returns the kind of the container `levels_up` levels above an object.
    const fn container(levels_up: usize) -> Self {
        match levels_up {
            0 => Self::Table,
            1 => Self::Schema,
            _ => Self::Catalog,
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Catalog => "catalog",
            Self::Schema => "schema",
            Self::Table => "table",
            Self::Column => "column",
            Self::Index => "index",
            Self::Sequence => "sequence",
            Self::View => "view",
        })
    }
}

/// When identifiers get quoted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ObjectQuoting {
    /// Quote only names that would not parse bare: reserved words, names
    /// with characters outside `[A-Za-z0-9_]`, names starting with a digit.
    #[default]
    Legacy,
    /// Quote every name.
    QuoteAll,
}

/// Words reserved by every supported engine.
const RESERVED_WORDS: &[&str] = &[
    "ALL", "AND", "AS", "BETWEEN", "BY", "CASE", "CHECK", "COLUMN", "CONSTRAINT", "CREATE",
    "CROSS", "DEFAULT", "DELETE", "DISTINCT", "DROP", "ELSE", "END", "EXISTS", "FALSE", "FOR",
    "FOREIGN", "FROM", "FULL", "GROUP", "HAVING", "IN", "INDEX", "INNER", "INSERT", "INTO", "IS",
    "JOIN", "KEY", "LEFT", "LIKE", "NOT", "NULL", "ON", "OR", "ORDER", "OUTER", "PRIMARY",
    "REFERENCES", "RIGHT", "SELECT", "SET", "TABLE", "THEN", "TO", "TRUE", "UNION", "UNIQUE",
    "UPDATE", "USER", "USING", "VALUES", "WHEN", "WHERE", "WITH",
];

/// Returns whether `word` is reserved everywhere or listed in `extra`.
fn is_reserved(word: &str, extra: &[&str]) -> bool {
    RESERVED_WORDS
        .iter()
        .chain(extra)
        .any(|reserved| reserved.eq_ignore_ascii_case(word))
}

/// Trait for SQL dialect-specific behavior.
pub trait Dialect: Send + Sync {
    /// Returns the engine this dialect renders for.
    fn kind(&self) -> DialectKind;

    /// Returns the quoting policy.
    fn quoting(&self) -> ObjectQuoting;

    /// Returns the name of the dialect.
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Returns the opening and closing identifier quote characters.
    fn identifier_quotes(&self) -> (char, char) {
        ('"', '"')
    }

    /// Returns how many trailing levels of a qualified table name the engine
    /// accepts.
    fn max_qualifier_levels(&self) -> usize {
        2
    }

    /// Returns whether `word` cannot be used as a bare identifier.
    fn is_reserved_word(&self, word: &str) -> bool {
        is_reserved(word, &[])
    }

    /// Quotes an identifier, doubling any closing quote inside it.
    fn quote_identifier(&self, name: &str) -> String {
        let (open, close) = self.identifier_quotes();
        let escaped = name.replace(close, &format!("{close}{close}"));
        format!("{open}{escaped}{close}")
    }

    /// Returns whether a bare `name` would not parse as an identifier.
    fn needs_quoting(&self, name: &str) -> bool {
        let mut chars = name.chars();
        let starts_ok = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        !starts_ok
            || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            || self.is_reserved_word(name)
    }

    /// Escapes a single identifier according to the quoting policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyIdentifier`] for an empty name and
    /// [`Error::InvalidIdentifier`] for a name containing a NUL character.
    fn escape_object_name(&self, name: &str, kind: ObjectKind) -> Result<String> {
        if name.is_empty() {
            return Err(Error::EmptyIdentifier { kind });
        }
        if name.contains('\0') {
            return Err(Error::InvalidIdentifier {
                kind,
                name: String::from(name),
                reason: "contains a NUL character",
            });
        }
        if self.quoting() == ObjectQuoting::QuoteAll || self.needs_quoting(name) {
            Ok(self.quote_identifier(name))
        } else {
            Ok(String::from(name))
        }
    }

    /// Escapes a qualified name, keeping only the levels the engine accepts.
    ///
    /// Outer qualifiers are dropped first, so `cat.schema.t` becomes
    /// `schema.t` on an engine that takes two levels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsetQualifier`] when a kept level is unset, and
    /// propagates errors from [`escape_object_name`](Self::escape_object_name).
    fn escape_qualified_name(&self, name: &QualifiedName, kind: ObjectKind) -> Result<String> {
        let in_scope = name.truncate(self.max_qualifier_levels());
        let levels = in_scope.as_list();
        if levels.is_empty() {
            return Err(Error::EmptyIdentifier { kind });
        }
        let escaped = levels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let levels_up = levels.len() - 1 - i;
                let level_kind = if levels_up == 0 {
                    kind
                } else {
                    ObjectKind::container(levels_up)
                };
                match label {
                    Some(label) => self.escape_object_name(label, level_kind),
                    None => Err(Error::UnsetQualifier {
                        name: name.to_string(),
                    }),
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(escaped.join("."))
    }

    /// Renders a value as an inline literal.
    fn literal(&self, value: &SqlValue) -> String {
        value.to_sql_inline()
    }
}

/// Returns the dialect implementation for `kind`.
#[must_use]
pub fn dialect_for(kind: DialectKind, quoting: ObjectQuoting) -> Box<dyn Dialect> {
    match kind {
        DialectKind::Generic => Box::new(GenericDialect::with_quoting(quoting)),
        DialectKind::H2 => Box::new(H2Dialect::with_quoting(quoting)),
        DialectKind::MySql => Box::new(MySqlDialect::with_quoting(quoting)),
        DialectKind::Postgres => Box::new(PostgresDialect::with_quoting(quoting)),
        DialectKind::Sqlite => Box::new(SqliteDialect::with_quoting(quoting)),
        DialectKind::Mssql => Box::new(MssqlDialect::with_quoting(quoting)),
        DialectKind::Oracle => Box::new(OracleDialect::with_quoting(quoting)),
    }
}
