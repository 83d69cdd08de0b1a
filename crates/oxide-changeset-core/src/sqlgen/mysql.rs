//! MySQL upserts through `INSERT ... ON DUPLICATE KEY UPDATE`.

use super::{UpsertGenerator, UpsertParts, terminated};
use crate::dialect::{Dialect, DialectKind};
use crate::error::Result;
use crate::statement::InsertOrUpdateStatement;

/// Appends `ON DUPLICATE KEY UPDATE c = VALUES(c), ...` to the insert.
///
/// With nothing to update, the first key column is assigned to itself so a
/// duplicate row is left untouched instead of raising an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlUpsertGenerator;

impl UpsertGenerator for MySqlUpsertGenerator {
    fn name(&self) -> &'static str {
        "mysql-on-duplicate-key"
    }

    fn supports(&self, _statement: &InsertOrUpdateStatement, dialect: &dyn Dialect) -> bool {
        dialect.kind() == DialectKind::MySql
    }

    fn record_check(&self, _parts: &UpsertParts<'_>) -> String {
        String::new()
    }

    fn insert_statement(&self, parts: &UpsertParts<'_>) -> String {
        let updates: Vec<String> = if parts.update_columns.is_empty() {
            parts
                .key_columns
                .iter()
                .take(1)
                .map(|col| format!("{col} = {col}"))
                .collect()
        } else {
            parts
                .update_columns
                .iter()
                .map(|col| format!("{col} = VALUES({col})"))
                .collect()
        };
        terminated(&format!(
            "{} ON DUPLICATE KEY UPDATE {}",
            parts.insert_sql(),
            updates.join(", ")
        ))
    }

    fn update_statement(&self, parts: &UpsertParts<'_>) -> Result<String> {
        if parts.only_update() {
            Ok(terminated(&parts.update_sql()?))
        } else {
            Ok(String::new())
        }
    }

    fn else_clause(&self, _parts: &UpsertParts<'_>) -> String {
        String::new()
    }
}
