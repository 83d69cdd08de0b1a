//! The insert-or-update statement consumed by the upsert generators.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::name::QualifiedName;
use crate::value::{SqlValue, ToSqlValue};

/// A column and the value to write into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnValue {
    /// Column name, unescaped.
    pub name: String,
    /// Value to insert or update.
    #[serde(default = "null_value")]
    pub value: SqlValue,
    /// Whether the column may appear in the UPDATE branch.
    #[serde(default = "allow_update_default")]
    pub allow_update: bool,
}

const fn null_value() -> SqlValue {
    SqlValue::Null
}

const fn allow_update_default() -> bool {
    true
}

/// "Insert the row, or update it if a row with the same primary key exists."
///
/// ```rust
/// use oxide_changeset_core::InsertOrUpdateStatement;
///
/// let statement = InsertOrUpdateStatement::new("public.users", "id")
///     .column("id", 1_i64)
///     .column("name", "Alice");
///
/// assert_eq!(statement.primary_key_columns(), vec!["id"]);
/// assert!(statement.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertOrUpdateStatement {
    /// Target table.
    pub table: QualifiedName,
    /// Columns in insertion order.
    #[serde(default)]
    pub columns: Vec<ColumnValue>,
    /// Comma-separated primary key column names.
    pub primary_key: String,
    /// Skip the insert branch and only update existing rows.
    #[serde(default)]
    pub only_update: bool,
}

impl InsertOrUpdateStatement {
    /// Creates a statement for `table` keyed on `primary_key`.
    #[must_use]
    pub fn new(table: impl Into<QualifiedName>, primary_key: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: vec![],
            primary_key: primary_key.into(),
            only_update: false,
        }
    }

    /// Adds a column value.
    #[must_use]
    pub fn column<T: ToSqlValue>(mut self, name: &str, value: T) -> Self {
        self.columns.push(ColumnValue {
            name: String::from(name),
            value: value.to_sql_value(),
            allow_update: true,
        });
        self
    }

    /// Adds a column value that is inserted but never updated.
    #[must_use]
    pub fn insert_only_column<T: ToSqlValue>(mut self, name: &str, value: T) -> Self {
        self.columns.push(ColumnValue {
            name: String::from(name),
            value: value.to_sql_value(),
            allow_update: false,
        });
        self
    }

    /// Sets update-only mode.
    #[must_use]
    pub const fn only_update(mut self, only_update: bool) -> Self {
        self.only_update = only_update;
        self
    }

    /// Splits the primary key descriptor on `,`.
    ///
    /// Surrounding whitespace is trimmed; empty entries are kept so that
    /// escaping can reject them.
    #[must_use]
    pub fn primary_key_columns(&self) -> Vec<&str> {
        self.primary_key.split(',').map(str::trim).collect()
    }

    /// Returns whether `column` is part of the primary key.
    #[must_use]
    pub fn is_key_column(&self, column: &str) -> bool {
        self.primary_key_columns().contains(&column)
    }

    /// Returns the value assigned to `column`, if any.
    #[must_use]
    pub fn value_of(&self, column: &str) -> Option<&SqlValue> {
        self.columns
            .iter()
            .find(|c| c.name == column)
            .map(|c| &c.value)
    }

    /// Columns that belong in the UPDATE branch: not part of the key and
    /// not marked insert-only.
    pub fn update_columns(&self) -> impl Iterator<Item = &ColumnValue> {
        self.columns
            .iter()
            .filter(|c| c.allow_update && !self.is_key_column(&c.name))
    }

    /// Checks the primary key before any SQL is generated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPrimaryKey`] when the descriptor names no
    /// column, and [`Error::MissingKeyValue`] when a key column has no value.
    pub fn validate(&self) -> Result<()> {
        let key_columns = self.primary_key_columns();
        if key_columns.iter().all(|c| c.is_empty()) {
            return Err(Error::EmptyPrimaryKey {
                table: self.table.to_string(),
            });
        }
        for column in key_columns.into_iter().filter(|c| !c.is_empty()) {
            if self.value_of(column).is_none() {
                return Err(Error::MissingKeyValue {
                    column: String::from(column),
                });
            }
        }
        Ok(())
    }
}
