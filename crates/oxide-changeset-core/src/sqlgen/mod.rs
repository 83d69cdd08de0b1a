//! Upsert ("insert or update") SQL generation.
//!
//! Every engine gets the same logical operation, "update the row with this
//! primary key if it exists, insert it otherwise", but engines differ wildly
//! in how it can be expressed. An [`UpsertGenerator`] fills in four pieces
//! that a fixed skeleton assembles:
//!
//! 1. [`record_check`](UpsertGenerator::record_check): test for an existing
//!    row, or nothing when the insert handles existence itself
//! 2. [`insert_statement`](UpsertGenerator::insert_statement)
//! 3. [`update_statement`](UpsertGenerator::update_statement)
//! 4. [`else_clause`](UpsertGenerator::else_clause): glue between the two
//!    branches for engines that branch explicitly
//!
//! When the statement is update-only, the check and insert are skipped and
//! only the update is rendered.
//!
//! # Example
//!
//! ```rust
//! use oxide_changeset_core::dialect::MssqlDialect;
//! use oxide_changeset_core::sqlgen::{MssqlUpsertGenerator, UpsertGenerator};
//! use oxide_changeset_core::InsertOrUpdateStatement;
//!
//! let statement = InsertOrUpdateStatement::new("users", "id")
//!     .column("id", 1_i64)
//!     .column("name", "Alice");
//!
//! let sql = MssqlUpsertGenerator
//!     .generate(&statement, &MssqlDialect::new())
//!     .unwrap();
//!
//! assert!(sql.starts_with("IF NOT EXISTS (SELECT 1 FROM users WHERE id = 1)"));
//! ```

mod h2;
mod mssql;
mod mysql;
mod oracle;
mod parts;
mod postgres;
mod registry;
mod sqlite;

pub use h2::H2UpsertGenerator;
pub use mssql::MssqlUpsertGenerator;
pub use mysql::MySqlUpsertGenerator;
pub use oracle::OracleUpsertGenerator;
pub use parts::UpsertParts;
pub use postgres::PostgresUpsertGenerator;
pub use registry::GeneratorRegistry;
pub use sqlite::SqliteUpsertGenerator;

use tracing::debug;

use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::statement::InsertOrUpdateStatement;

/// Priority of a generator that works on any engine.
pub const PRIORITY_DEFAULT: i32 = 1;

/// Priority of a generator written for one specific engine.
pub const PRIORITY_DATABASE: i32 = 5;

/// Trait for dialect-specific upsert rendering.
pub trait UpsertGenerator: Send + Sync {
    /// Returns a short name for logs.
    fn name(&self) -> &'static str;

    /// Returns the priority used when several generators support a dialect.
    fn priority(&self) -> i32 {
        PRIORITY_DATABASE
    }

    /// Returns whether this generator can render `statement` for `dialect`.
    fn supports(&self, statement: &InsertOrUpdateStatement, dialect: &dyn Dialect) -> bool;

    /// Renders the existence check that opens the conditional, or nothing.
    fn record_check(&self, parts: &UpsertParts<'_>) -> String;

    /// Renders the insert branch.
    fn insert_statement(&self, parts: &UpsertParts<'_>) -> String;

    /// Renders the update branch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoUpdateColumns`] when there is nothing to update.
    fn update_statement(&self, parts: &UpsertParts<'_>) -> Result<String>;

    /// Renders the glue between the insert and update branches, or nothing.
    fn else_clause(&self, parts: &UpsertParts<'_>) -> String;

    /// Renders whatever closes the conditional opened by the record check.
    fn post_update(&self, _parts: &UpsertParts<'_>) -> String {
        String::new()
    }

    /// Assembles the full statement.
    ///
    /// # Errors
    ///
    /// Propagates escaping errors, and returns [`Error::NoUpdateColumns`]
    /// for an update-only statement with nothing to update.
    fn generate(&self, statement: &InsertOrUpdateStatement, dialect: &dyn Dialect) -> Result<String> {
        let parts = UpsertParts::new(statement, dialect)?;
        let only_update = parts.only_update();
        let mut sql = String::new();

        if !only_update {
            sql.push_str(&self.record_check(&parts));
            sql.push_str(&self.insert_statement(&parts));
        }

        match self.update_statement(&parts) {
            Ok(update) => {
                if !only_update {
                    sql.push_str(&self.else_clause(&parts));
                }
                sql.push_str(&update);
            }
            Err(Error::NoUpdateColumns { table }) if !only_update => {
                debug!(
                    generator = self.name(),
                    %table,
                    "No updatable columns, rendering the insert branch only"
                );
            }
            Err(err) => return Err(err),
        }

        if !only_update {
            sql.push_str(&self.post_update(&parts));
        }
        Ok(sql)
    }
}

/// Renders a statement followed by `;` and a newline.
fn terminated(sql: &str) -> String {
    format!("{sql};\n")
}
