//! Column values carried by data-change statements.
//!
//! Upserts are rendered as literal SQL text, so every value knows how to
//! render itself inline with its quotes escaped. Dialects that disagree with
//! the ANSI rendering override it in [`Dialect::literal`].
//!
//! [`Dialect::literal`]: crate::dialect::Dialect::literal

use serde::{Deserialize, Serialize};

/// A value assigned to a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ValueRepr", into = "ValueRepr")]
pub enum SqlValue {
    /// NULL value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Binary blob value.
    Blob(Vec<u8>),
    /// An SQL expression rendered verbatim, e.g. `CURRENT_TIMESTAMP`.
    Computed(String),
}

impl SqlValue {
    /// Renders the value as an ANSI SQL literal.
    ///
    /// Text is wrapped in single quotes with embedded quotes doubled, blobs
    /// become `X'..'` hex literals and computed expressions pass through
    /// untouched.
    #[must_use]
    pub fn to_sql_inline(&self) -> String {
        match self {
            Self::Null => String::from("NULL"),
            Self::Bool(true) => String::from("TRUE"),
            Self::Bool(false) => String::from("FALSE"),
            Self::Int(n) => n.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Text(s) => format!("'{}'", s.replace('\'', "''")),
            Self::Blob(bytes) => format!("X'{}'", hex_upper(bytes)),
            Self::Computed(expr) => expr.clone(),
        }
    }

    /// Returns whether the value is SQL `NULL`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Uppercase hex digits of `bytes`, two per byte.
pub(crate) fn hex_upper(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02X}")).collect()
}

/// JSON shape of a value: plain scalars, a byte array, or
/// `{"computed": "<expression>"}`.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ValueRepr {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Blob(Vec<u8>),
    Computed { computed: String },
}

impl From<ValueRepr> for SqlValue {
    fn from(repr: ValueRepr) -> Self {
        match repr {
            ValueRepr::Null => Self::Null,
            ValueRepr::Bool(b) => Self::Bool(b),
            ValueRepr::Int(n) => Self::Int(n),
            ValueRepr::Float(f) => Self::Float(f),
            ValueRepr::Text(s) => Self::Text(s),
            ValueRepr::Blob(b) => Self::Blob(b),
            ValueRepr::Computed { computed } => Self::Computed(computed),
        }
    }
}

impl From<SqlValue> for ValueRepr {
    fn from(value: SqlValue) -> Self {
        match value {
            SqlValue::Null => Self::Null,
            SqlValue::Bool(b) => Self::Bool(b),
            SqlValue::Int(n) => Self::Int(n),
            SqlValue::Float(f) => Self::Float(f),
            SqlValue::Text(s) => Self::Text(s),
            SqlValue::Blob(b) => Self::Blob(b),
            SqlValue::Computed(computed) => Self::Computed { computed },
        }
    }
}

/// Conversion into a column value, used by the statement builder methods.
pub trait ToSqlValue {
    /// Converts the value to a `SqlValue`.
    fn to_sql_value(self) -> SqlValue;
}

macro_rules! impl_to_sql_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl ToSqlValue for $ty {
                fn to_sql_value(self) -> SqlValue {
                    SqlValue::$variant(self.into())
                }
            }
        )*
    };
}

impl_to_sql_value! {
    bool => Bool,
    i32 => Int,
    u32 => Int,
    i64 => Int,
    f64 => Float,
    &str => Text,
    String => Text,
    Vec<u8> => Blob,
}

impl ToSqlValue for SqlValue {
    fn to_sql_value(self) -> SqlValue {
        self
    }
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(self) -> SqlValue {
        self.map_or(SqlValue::Null, ToSqlValue::to_sql_value)
    }
}
