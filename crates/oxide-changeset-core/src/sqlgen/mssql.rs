//! SQL Server upserts through `IF NOT EXISTS ... ELSE`.

use super::{UpsertGenerator, UpsertParts, terminated};
use crate::dialect::{Dialect, DialectKind};
use crate::error::Result;
use crate::statement::InsertOrUpdateStatement;

/// Renders a T-SQL conditional around a plain `INSERT` and `UPDATE`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MssqlUpsertGenerator;

impl UpsertGenerator for MssqlUpsertGenerator {
    fn name(&self) -> &'static str {
        "mssql-if-not-exists"
    }

    fn supports(&self, _statement: &InsertOrUpdateStatement, dialect: &dyn Dialect) -> bool {
        dialect.kind() == DialectKind::Mssql
    }

    fn record_check(&self, parts: &UpsertParts<'_>) -> String {
        format!(
            "IF NOT EXISTS (SELECT 1 FROM {} WHERE {})\nBEGIN\n",
            parts.table, parts.where_clause
        )
    }

    fn insert_statement(&self, parts: &UpsertParts<'_>) -> String {
        terminated(&parts.insert_sql())
    }

    fn update_statement(&self, parts: &UpsertParts<'_>) -> Result<String> {
        Ok(terminated(&parts.update_sql()?))
    }

    fn else_clause(&self, _parts: &UpsertParts<'_>) -> String {
        String::from("END\nELSE\nBEGIN\n")
    }

    fn post_update(&self, _parts: &UpsertParts<'_>) -> String {
        String::from("END\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::MssqlDialect;

    #[test]
    fn test_if_not_exists_else() {
        let stmt = InsertOrUpdateStatement::new("dbo.users", "id")
            .column("id", 1_i64)
            .column("active", true);
        let sql = MssqlUpsertGenerator
            .generate(&stmt, &MssqlDialect::new())
            .unwrap();
        assert_eq!(
            sql,
            "IF NOT EXISTS (SELECT 1 FROM dbo.users WHERE id = 1)\n\
             BEGIN\n\
             INSERT INTO dbo.users (id, active) VALUES (1, 1);\n\
             END\n\
             ELSE\n\
             BEGIN\n\
             UPDATE dbo.users SET active = 1 WHERE id = 1;\n\
             END\n"
        );
    }

    #[test]
    fn test_insert_only_branch_when_nothing_to_update() {
        let stmt = InsertOrUpdateStatement::new("users", "id").column("id", 1_i64);
        let sql = MssqlUpsertGenerator
            .generate(&stmt, &MssqlDialect::new())
            .unwrap();
        assert_eq!(
            sql,
            "IF NOT EXISTS (SELECT 1 FROM users WHERE id = 1)\n\
             BEGIN\n\
             INSERT INTO users (id) VALUES (1);\n\
             END\n"
        );
    }

    #[test]
    fn test_update_only_skips_conditional() {
        let stmt = InsertOrUpdateStatement::new("users", "id")
            .column("id", 1_i64)
            .column("top", 5_i64)
            .only_update(true);
        let sql = MssqlUpsertGenerator
            .generate(&stmt, &MssqlDialect::new())
            .unwrap();
        assert_eq!(sql, "UPDATE users SET [top] = 5 WHERE id = 1;\n");
    }
}
