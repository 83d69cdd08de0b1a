//! Escaped, dialect-rendered pieces of an insert-or-update statement.
//!
//! Every generator assembles its SQL from the same [`UpsertParts`], so a
//! native upsert form (`MERGE`, `ON CONFLICT`, ...) never has to be derived
//! by rewriting the text of a rendered `INSERT`.

use crate::dialect::{Dialect, ObjectKind};
use crate::error::{Error, Result};
use crate::statement::InsertOrUpdateStatement;
use crate::value::SqlValue;

/// A statement with its identifiers escaped and its values rendered for one
/// dialect.
pub struct UpsertParts<'a> {
    /// The statement being rendered.
    pub statement: &'a InsertOrUpdateStatement,
    /// The dialect the pieces were rendered for.
    pub dialect: &'a dyn Dialect,
    /// Escaped target table.
    pub table: String,
    /// Escaped column names, in statement order.
    pub columns: Vec<String>,
    /// Rendered literals, parallel to `columns`.
    pub values: Vec<String>,
    /// Escaped primary key columns.
    pub key_columns: Vec<String>,
    /// Escaped columns of the UPDATE branch.
    pub update_columns: Vec<String>,
    /// `column = literal` assignments of the UPDATE branch.
    pub assignments: Vec<String>,
    /// Condition selecting the row by primary key, without `WHERE`.
    pub where_clause: String,
}

impl<'a> UpsertParts<'a> {
    /// Escapes and renders every piece of `statement` for `dialect`.
    ///
    /// # Errors
    ///
    /// Propagates identifier escaping errors unchanged, returns
    /// [`Error::NonFiniteFloat`] for a NaN or infinite value, and
    /// [`Error::MissingKeyValue`] when a key column has no value.
    pub fn new(statement: &'a InsertOrUpdateStatement, dialect: &'a dyn Dialect) -> Result<Self> {
        let table = dialect.escape_qualified_name(&statement.table, ObjectKind::Table)?;

        let columns = statement
            .columns
            .iter()
            .map(|c| dialect.escape_object_name(&c.name, ObjectKind::Column))
            .collect::<Result<Vec<_>>>()?;
        let values = statement
            .columns
            .iter()
            .map(|c| match &c.value {
                SqlValue::Float(f) if !f.is_finite() => Err(Error::NonFiniteFloat {
                    column: c.name.clone(),
                }),
                value => Ok(dialect.literal(value)),
            })
            .collect::<Result<Vec<_>>>()?;

        let mut key_columns = vec![];
        let mut conditions = vec![];
        for key in statement.primary_key_columns() {
            let escaped = dialect.escape_object_name(key, ObjectKind::Column)?;
            let value = statement.value_of(key).ok_or_else(|| Error::MissingKeyValue {
                column: String::from(key),
            })?;
            if value.is_null() {
                conditions.push(format!("{escaped} IS NULL"));
            } else {
                conditions.push(format!("{escaped} = {}", dialect.literal(value)));
            }
            key_columns.push(escaped);
        }

        let mut update_columns = vec![];
        let mut assignments = vec![];
        for column in statement.update_columns() {
            let escaped = dialect.escape_object_name(&column.name, ObjectKind::Column)?;
            assignments.push(format!("{escaped} = {}", dialect.literal(&column.value)));
            update_columns.push(escaped);
        }

        Ok(Self {
            statement,
            dialect,
            table,
            columns,
            values,
            key_columns,
            update_columns,
            assignments,
            where_clause: conditions.join(" AND "),
        })
    }

    /// Returns whether the insert branch is skipped.
    #[must_use]
    pub const fn only_update(&self) -> bool {
        self.statement.only_update
    }

    /// Returns `(a, b, c)`.
    #[must_use]
    pub fn column_list(&self) -> String {
        format!("({})", self.columns.join(", "))
    }

    /// Returns `(1, 'x', NULL)`.
    #[must_use]
    pub fn value_list(&self) -> String {
        format!("({})", self.values.join(", "))
    }

    /// Returns the escaped key columns joined with `,`.
    #[must_use]
    pub fn key_list(&self) -> String {
        self.key_columns.join(",")
    }

    /// Renders the plain `INSERT` without a terminator.
    #[must_use]
    pub fn insert_sql(&self) -> String {
        format!(
            "INSERT INTO {} {} VALUES {}",
            self.table,
            self.column_list(),
            self.value_list()
        )
    }

    /// Renders the plain `UPDATE` without a terminator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoUpdateColumns`] when every column is part of the
    /// key or excluded from updates.
    pub fn update_sql(&self) -> Result<String> {
        if self.assignments.is_empty() {
            return Err(Error::NoUpdateColumns {
                table: self.statement.table.to_string(),
            });
        }
        Ok(format!(
            "UPDATE {} SET {} WHERE {}",
            self.table,
            self.assignments.join(", "),
            self.where_clause
        ))
    }

    /// Renders `ON CONFLICT (keys) DO UPDATE SET c = <excluded>.c`, or
    /// `DO NOTHING` when there is nothing to update.
    #[must_use]
    pub fn on_conflict_clause(&self, excluded: &str) -> String {
        let mut sql = format!("ON CONFLICT ({})", self.key_columns.join(", "));
        if self.update_columns.is_empty() {
            sql.push_str(" DO NOTHING");
        } else {
            sql.push_str(" DO UPDATE SET ");
            let updates: Vec<String> = self
                .update_columns
                .iter()
                .map(|col| format!("{col} = {excluded}.{col}"))
                .collect();
            sql.push_str(&updates.join(", "));
        }
        sql
    }
}
