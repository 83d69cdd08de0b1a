//! Selection of the upsert generator for a dialect.

use tracing::{debug, warn};

use super::{
    H2UpsertGenerator, MssqlUpsertGenerator, MySqlUpsertGenerator, OracleUpsertGenerator,
    PostgresUpsertGenerator, SqliteUpsertGenerator, UpsertGenerator,
};
use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::statement::InsertOrUpdateStatement;

/// Holds upsert generators and picks one per statement and dialect.
///
/// Among the generators that support a dialect, the one with the highest
/// [`priority`](UpsertGenerator::priority) wins; on a tie the one registered
/// first wins.
#[derive(Default)]
pub struct GeneratorRegistry {
    generators: Vec<Box<dyn UpsertGenerator>>,
}

impl GeneratorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding one generator per supported engine.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(H2UpsertGenerator));
        registry.register(Box::new(MySqlUpsertGenerator));
        registry.register(Box::new(PostgresUpsertGenerator));
        registry.register(Box::new(SqliteUpsertGenerator));
        registry.register(Box::new(MssqlUpsertGenerator));
        registry.register(Box::new(OracleUpsertGenerator));
        registry
    }

    /// Adds a generator.
    pub fn register(&mut self, generator: Box<dyn UpsertGenerator>) {
        debug!(
            generator = generator.name(),
            priority = generator.priority(),
            "Registered upsert generator"
        );
        self.generators.push(generator);
    }

    /// Returns the number of registered generators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Returns whether no generator is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Returns the generator to use for `statement` on `dialect`.
    #[must_use]
    pub fn select(
        &self,
        statement: &InsertOrUpdateStatement,
        dialect: &dyn Dialect,
    ) -> Option<&dyn UpsertGenerator> {
        let mut selected: Option<&dyn UpsertGenerator> = None;
        for generator in self
            .generators
            .iter()
            .filter(|g| g.supports(statement, dialect))
        {
            let generator: &dyn UpsertGenerator = generator.as_ref();
            match selected {
                Some(current) if generator.priority() > current.priority() => {
                    selected = Some(generator);
                }
                Some(current) if generator.priority() == current.priority() => {
                    warn!(
                        dialect = dialect.name(),
                        kept = current.name(),
                        ignored = generator.name(),
                        "Several upsert generators share the same priority"
                    );
                }
                Some(_) => {}
                None => selected = Some(generator),
            }
        }
        if let Some(generator) = selected {
            debug!(
                dialect = dialect.name(),
                generator = generator.name(),
                "Selected upsert generator"
            );
        }
        selected
    }

    /// Validates `statement` and renders it with the selected generator.
    ///
    /// # Errors
    ///
    /// Returns the validation error of the statement,
    /// [`Error::UnsupportedDialect`] when no generator supports the dialect,
    /// or the error of the generator itself.
    pub fn generate(
        &self,
        statement: &InsertOrUpdateStatement,
        dialect: &dyn Dialect,
    ) -> Result<String> {
        statement.validate()?;
        let generator = self
            .select(statement, dialect)
            .ok_or(Error::UnsupportedDialect(dialect.kind()))?;
        generator.generate(statement, dialect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{DialectKind, GenericDialect, ObjectQuoting, dialect_for};
    use crate::sqlgen::{PRIORITY_DEFAULT, UpsertParts};

    struct FixedGenerator {
        name: &'static str,
        priority: i32,
    }

    impl UpsertGenerator for FixedGenerator {
        fn name(&self) -> &'static str {
            self.name
        }

        fn priority(&self) -> i32 {
            self.priority
        }

        fn supports(&self, _statement: &InsertOrUpdateStatement, _dialect: &dyn Dialect) -> bool {
            true
        }

        fn record_check(&self, _parts: &UpsertParts<'_>) -> String {
            String::new()
        }

        fn insert_statement(&self, _parts: &UpsertParts<'_>) -> String {
            format!("-- {}\n", self.name)
        }

        fn update_statement(&self, _parts: &UpsertParts<'_>) -> Result<String> {
            Ok(String::new())
        }

        fn else_clause(&self, _parts: &UpsertParts<'_>) -> String {
            String::new()
        }
    }

    fn statement() -> InsertOrUpdateStatement {
        InsertOrUpdateStatement::new("t", "id")
            .column("id", 1_i64)
            .column("v", "x")
    }

    #[test]
    fn test_defaults_cover_every_engine_but_generic() {
        let registry = GeneratorRegistry::with_defaults();
        assert_eq!(registry.len(), 6);
        let stmt = statement();
        for kind in DialectKind::ALL {
            let dialect = dialect_for(kind, ObjectQuoting::Legacy);
            let selected = registry.select(&stmt, dialect.as_ref());
            assert_eq!(selected.is_some(), kind != DialectKind::Generic, "{kind}");
        }
    }

    #[test]
    fn test_unsupported_dialect() {
        let registry = GeneratorRegistry::with_defaults();
        assert_eq!(
            registry.generate(&statement(), &GenericDialect::new()),
            Err(Error::UnsupportedDialect(DialectKind::Generic))
        );
    }

    #[test]
    fn test_empty_registry() {
        let registry = GeneratorRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.select(&statement(), &GenericDialect::new()).is_none());
    }

    #[test]
    fn test_highest_priority_wins() {
        let mut registry = GeneratorRegistry::new();
        registry.register(Box::new(FixedGenerator {
            name: "fallback",
            priority: PRIORITY_DEFAULT,
        }));
        registry.register(Box::new(FixedGenerator {
            name: "native",
            priority: PRIORITY_DEFAULT + 10,
        }));
        let sql = registry
            .generate(&statement(), &GenericDialect::new())
            .unwrap();
        assert_eq!(sql, "-- native\n");
    }

    #[test]
    fn test_tie_keeps_first_registered() {
        let mut registry = GeneratorRegistry::new();
        registry.register(Box::new(FixedGenerator {
            name: "first",
            priority: PRIORITY_DEFAULT,
        }));
        registry.register(Box::new(FixedGenerator {
            name: "second",
            priority: PRIORITY_DEFAULT,
        }));
        let stmt = statement();
        let dialect = GenericDialect::new();
        assert_eq!(registry.select(&stmt, &dialect).unwrap().name(), "first");
    }

    #[test]
    fn test_validation_runs_before_selection() {
        let registry = GeneratorRegistry::new();
        let stmt = InsertOrUpdateStatement::new("t", "").column("id", 1_i64);
        assert_eq!(
            registry.generate(&stmt, &GenericDialect::new()),
            Err(Error::EmptyPrimaryKey {
                table: String::from("t")
            })
        );
    }
}
