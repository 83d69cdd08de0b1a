//! SQLite upserts through `INSERT ... ON CONFLICT` (SQLite 3.24.0+).

use super::{UpsertGenerator, UpsertParts, terminated};
use crate::dialect::{Dialect, DialectKind};
use crate::error::Result;
use crate::statement::InsertOrUpdateStatement;

/// Renders `INSERT ... ON CONFLICT (<keys>) DO UPDATE SET c = excluded.c`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteUpsertGenerator;

impl UpsertGenerator for SqliteUpsertGenerator {
    fn name(&self) -> &'static str {
        "sqlite-on-conflict"
    }

    fn supports(&self, _statement: &InsertOrUpdateStatement, dialect: &dyn Dialect) -> bool {
        dialect.kind() == DialectKind::Sqlite
    }

    fn record_check(&self, _parts: &UpsertParts<'_>) -> String {
        String::new()
    }

    fn insert_statement(&self, parts: &UpsertParts<'_>) -> String {
        terminated(&format!(
            "{} {}",
            parts.insert_sql(),
            parts.on_conflict_clause("excluded")
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
