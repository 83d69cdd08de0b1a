//! Oracle upserts through an anonymous PL/SQL block.

use super::{UpsertGenerator, UpsertParts, terminated};
use crate::dialect::{Dialect, DialectKind};
use crate::error::Result;
use crate::statement::InsertOrUpdateStatement;

/// Counts matching rows into `v_reccount`, then inserts when it is `0` and
/// updates when it is `1`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OracleUpsertGenerator;

impl UpsertGenerator for OracleUpsertGenerator {
    fn name(&self) -> &'static str {
        "oracle-plsql"
    }

    fn supports(&self, _statement: &InsertOrUpdateStatement, dialect: &dyn Dialect) -> bool {
        dialect.kind() == DialectKind::Oracle
    }

    fn record_check(&self, parts: &UpsertParts<'_>) -> String {
        format!(
            "DECLARE\n\tv_reccount NUMBER := 0;\nBEGIN\n\
             \tSELECT COUNT(*) INTO v_reccount FROM {} WHERE {};\n\
             \tIF v_reccount = 0 THEN\n",
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
        String::from("\tELSIF v_reccount = 1 THEN\n")
    }

    fn post_update(&self, _parts: &UpsertParts<'_>) -> String {
        String::from("\tEND IF;\nEND;\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::OracleDialect;

    #[test]
    fn test_plsql_block() {
        let stmt = InsertOrUpdateStatement::new("hr.employees", "id")
            .column("id", 10_i64)
            .column("level", 2_i64);
        let sql = OracleUpsertGenerator
            .generate(&stmt, &OracleDialect::new())
            .unwrap();
        assert_eq!(
            sql,
            "DECLARE\n\
             \tv_reccount NUMBER := 0;\n\
             BEGIN\n\
             \tSELECT COUNT(*) INTO v_reccount FROM hr.employees WHERE id = 10;\n\
             \tIF v_reccount = 0 THEN\n\
             INSERT INTO hr.employees (id, \"level\") VALUES (10, 2);\n\
             \tELSIF v_reccount = 1 THEN\n\
             UPDATE hr.employees SET \"level\" = 2 WHERE id = 10;\n\
             \tEND IF;\n\
             END;\n"
        );
    }

    #[test]
    fn test_block_closed_without_update_branch() {
        let stmt = InsertOrUpdateStatement::new("t", "id").column("id", 1_i64);
        let sql = OracleUpsertGenerator
            .generate(&stmt, &OracleDialect::new())
            .unwrap();
        assert!(sql.contains("INSERT INTO t (id) VALUES (1);\n\tEND IF;\nEND;\n"));
        assert!(!sql.contains("ELSIF"));
    }
}
