//! H2 upserts through `MERGE INTO ... KEY(...)`.

use super::{UpsertGenerator, UpsertParts, terminated};
use crate::dialect::{Dialect, DialectKind};
use crate::error::Result;
use crate::statement::InsertOrUpdateStatement;

/// Renders `MERGE INTO <table> (<columns>) KEY(<keys>) VALUES (...)`.
///
/// `MERGE` is atomic and decides between insert and update by itself, so
/// there is no record check, no else branch, and no separate update unless
/// the statement is update-only.
#[derive(Debug, Default, Clone, Copy)]
pub struct H2UpsertGenerator;

impl UpsertGenerator for H2UpsertGenerator {
    fn name(&self) -> &'static str {
        "h2-merge"
    }

    fn supports(&self, _statement: &InsertOrUpdateStatement, dialect: &dyn Dialect) -> bool {
        dialect.kind() == DialectKind::H2
    }

    fn record_check(&self, _parts: &UpsertParts<'_>) -> String {
        String::new()
    }

    fn insert_statement(&self, parts: &UpsertParts<'_>) -> String {
        terminated(&format!(
            "MERGE INTO {} {} KEY({}) VALUES {}",
            parts.table,
            parts.column_list(),
            parts.key_list(),
            parts.value_list()
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
    use crate::dialect::H2Dialect;

    fn statement() -> InsertOrUpdateStatement {
        InsertOrUpdateStatement::new("T", "ID")
            .column("ID", 1_i64)
            .column("V", "x")
    }

    #[test]
    fn test_merge_pieces() {
        let stmt = statement();
        let dialect = H2Dialect::new();
        let parts = UpsertParts::new(&stmt, &dialect).unwrap();
        let generator = H2UpsertGenerator;

        assert_eq!(
            generator.insert_statement(&parts),
            "MERGE INTO T (ID, V) KEY(ID) VALUES (1, 'x');\n"
        );
        assert_eq!(generator.record_check(&parts), "");
        assert_eq!(generator.else_clause(&parts), "");
        assert_eq!(generator.update_statement(&parts).unwrap(), "");
    }

    #[test]
    fn test_merge_generate() {
        let sql = H2UpsertGenerator
            .generate(&statement(), &H2Dialect::new())
            .unwrap();
        assert_eq!(sql, "MERGE INTO T (ID, V) KEY(ID) VALUES (1, 'x');\n");
    }

    #[test]
    fn test_update_only_renders_plain_update() {
        let stmt = statement().only_update(true);
        let sql = H2UpsertGenerator.generate(&stmt, &H2Dialect::new()).unwrap();
        assert_eq!(sql, "UPDATE T SET V = 'x' WHERE ID = 1;\n");
    }

    #[test]
    fn test_composite_key_is_escaped_per_column() {
        let stmt = InsertOrUpdateStatement::new("PUBLIC.T", "ID, VALUE")
            .column("ID", 1_i64)
            .column("VALUE", 2_i64)
            .column("NAME", "n");
        let sql = H2UpsertGenerator.generate(&stmt, &H2Dialect::new()).unwrap();
        assert_eq!(
            sql,
            "MERGE INTO PUBLIC.T (ID, \"VALUE\", NAME) KEY(ID,\"VALUE\") VALUES (1, 2, 'n');\n"
        );
    }

    #[test]
    fn test_table_name_containing_values() {
        let stmt = InsertOrUpdateStatement::new("my_values", "id")
            .column("id", 1_i64)
            .column("note", "insert into x values (1)");
        let sql = H2UpsertGenerator.generate(&stmt, &H2Dialect::new()).unwrap();
        assert_eq!(
            sql,
            "MERGE INTO my_values (id, note) KEY(id) VALUES (1, 'insert into x values (1)');\n"
        );
    }

    #[test]
    fn test_supports_only_h2() {
        let stmt = statement();
        assert!(H2UpsertGenerator.supports(&stmt, &H2Dialect::new()));
        assert!(!H2UpsertGenerator.supports(&stmt, &crate::dialect::PostgresDialect::new()));
    }
}
