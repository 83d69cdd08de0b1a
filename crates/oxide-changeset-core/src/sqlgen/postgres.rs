//! PostgreSQL upserts through `INSERT ... ON CONFLICT`.

use super::{UpsertGenerator, UpsertParts, terminated};
use crate::dialect::{Dialect, DialectKind};
use crate::error::Result;
use crate::statement::InsertOrUpdateStatement;

/// Renders `INSERT ... ON CONFLICT (<keys>) DO UPDATE SET c = EXCLUDED.c`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresUpsertGenerator;

impl UpsertGenerator for PostgresUpsertGenerator {
    fn name(&self) -> &'static str {
        "postgres-on-conflict"
    }

    fn supports(&self, _statement: &InsertOrUpdateStatement, dialect: &dyn Dialect) -> bool {
        dialect.kind() == DialectKind::Postgres
    }

    fn record_check(&self, _parts: &UpsertParts<'_>) -> String {
        String::new()
    }

    fn insert_statement(&self, parts: &UpsertParts<'_>) -> String {
        terminated(&format!(
            "{} {}",
            parts.insert_sql(),
            parts.on_conflict_clause("EXCLUDED")
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::PostgresDialect;
    use crate::value::SqlValue;

    #[test]
    fn test_on_conflict_do_update() {
        let stmt = InsertOrUpdateStatement::new("public.users", "id")
            .column("id", 1_i64)
            .column("name", "Alice")
            .column("active", true);
        let sql = PostgresUpsertGenerator
            .generate(&stmt, &PostgresDialect::new())
            .unwrap();
        assert_eq!(
            sql,
            "INSERT INTO public.users (id, name, active) VALUES (1, 'Alice', TRUE) \
             ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name, active = EXCLUDED.active;\n"
        );
    }

    #[test]
    fn test_on_conflict_do_nothing_for_insert_only_columns() {
        let stmt = InsertOrUpdateStatement::new("audit", "id")
            .column("id", 1_i64)
            .insert_only_column("created_at", SqlValue::Computed(String::from("now()")));
        let sql = PostgresUpsertGenerator
            .generate(&stmt, &PostgresDialect::new())
            .unwrap();
        assert_eq!(
            sql,
            "INSERT INTO audit (id, created_at) VALUES (1, now()) ON CONFLICT (id) DO NOTHING;\n"
        );
    }
}
