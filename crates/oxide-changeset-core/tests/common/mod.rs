#![allow(dead_code)]

use oxide_changeset_core::dialect::{DialectKind, ObjectQuoting, dialect_for};
use oxide_changeset_core::{Error, GeneratorRegistry, InsertOrUpdateStatement, QualifiedName};

pub fn name(text: &str) -> QualifiedName {
    QualifiedName::parse(text)
}

/// Renders `statement` through the default registry.
pub fn render(statement: &InsertOrUpdateStatement, kind: DialectKind) -> String {
    try_render(statement, kind, ObjectQuoting::Legacy)
        .unwrap_or_else(|e| panic!("Failed to render for {kind}: {e}\nStatement: {statement:?}"))
}

pub fn render_quoted(statement: &InsertOrUpdateStatement, kind: DialectKind) -> String {
    try_render(statement, kind, ObjectQuoting::QuoteAll)
        .unwrap_or_else(|e| panic!("Failed to render for {kind}: {e}\nStatement: {statement:?}"))
}

pub fn render_err(statement: &InsertOrUpdateStatement, kind: DialectKind) -> Error {
    try_render(statement, kind, ObjectQuoting::Legacy)
        .expect_err(&format!("Expected an error for {kind}: {statement:?}"))
}

pub fn try_render(
    statement: &InsertOrUpdateStatement,
    kind: DialectKind,
    quoting: ObjectQuoting,
) -> Result<String, Error> {
    let dialect = dialect_for(kind, quoting);
    GeneratorRegistry::with_defaults().generate(statement, dialect.as_ref())
}

/// A two-column statement keyed on `id`.
pub fn user_statement() -> InsertOrUpdateStatement {
    InsertOrUpdateStatement::new("app.users", "id")
        .column("id", 1_i64)
        .column("name", "Alice")
}
