//! # oxide-changeset-core
//!
//! Building blocks for applying data changes across database engines.
//!
//! This crate provides:
//! - [`QualifiedName`], a `catalog.schema.table`-style name whose levels may be
//!   unset, with equality and matching that tolerate missing qualifiers but not
//!   conflicting ones
//! - [`Dialect`] implementations that escape identifiers and render literals
//!   for each supported engine
//! - Upsert ("insert or update") generators, selected per dialect by a
//!   [`GeneratorRegistry`]
//!
//! ## Qualified names
//!
//! ```rust
//! use oxide_changeset_core::QualifiedName;
//!
//! let captured = QualifiedName::parse("app.users");
//! let from_changelog = QualifiedName::parse("users");
//!
//! assert!(captured.equals(&from_changelog, true));
//! assert!(captured.matches(&from_changelog));
//! assert!(!captured.matches(&QualifiedName::parse("audit.users")));
//! assert_eq!(captured.depth(), 1);
//! ```
//!
//! ## Upserts
//!
//! ```rust
//! use oxide_changeset_core::dialect::H2Dialect;
//! use oxide_changeset_core::{GeneratorRegistry, InsertOrUpdateStatement};
//!
//! let statement = InsertOrUpdateStatement::new("T", "ID")
//!     .column("ID", 1_i64)
//!     .column("V", "x");
//!
//! let sql = GeneratorRegistry::with_defaults()
//!     .generate(&statement, &H2Dialect::new())
//!     .unwrap();
//!
//! assert_eq!(sql, "MERGE INTO T (ID, V) KEY(ID) VALUES (1, 'x');\n");
//! ```

pub mod dialect;
pub mod error;
pub mod name;
pub mod sqlgen;
pub mod statement;
pub mod value;

pub use dialect::{Dialect, DialectKind, ObjectKind, ObjectQuoting};
pub use error::{Error, Result};
pub use name::QualifiedName;
pub use sqlgen::{GeneratorRegistry, UpsertGenerator};
pub use statement::{ColumnValue, InsertOrUpdateStatement};
pub use value::{SqlValue, ToSqlValue};
