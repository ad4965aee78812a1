//! Value, column reference and sub-query types
//!
//! The core never interprets column references or sub-queries; both are
//! opaque handles round-tripped to the external query layer and compared
//! by equality only.

use serde::{Deserialize, Serialize};

/// Scalar condition value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    /// Whether this scalar is a numeric type (int or float)
    pub fn is_numeric(&self) -> bool {
        matches!(self, Scalar::Int(_) | Scalar::Float(_))
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Scalar {
        Scalar::Str(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Scalar {
        Scalar::Str(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Scalar {
        Scalar::Int(v.into())
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Scalar {
        Scalar::Int(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Scalar {
        Scalar::Float(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Scalar {
        Scalar::Bool(v)
    }
}

/// Opaque sub-query reference for IN/EXISTS membership operators
///
/// Holds whatever handle the external query layer understands; the core
/// only stores and serializes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubQuery {
    #[serde(rename = "subquery")]
    raw: String,
}

impl SubQuery {
    pub fn new(raw: impl Into<String>) -> SubQuery {
        SubQuery { raw: raw.into() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// Condition value: null, a scalar, an ordered sequence of scalars
/// (IN/BETWEEN) or an opaque sub-query reference (IN/EXISTS)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Scalar(Scalar),
    Sequence(Vec<Scalar>),
    Subquery(SubQuery),
}

impl Value {
    /// Build a sequence value from anything convertible to scalars
    pub fn sequence<I, T>(items: I) -> Value
    where
        I: IntoIterator<Item = T>,
        T: Into<Scalar>,
    {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<Scalar> for Value {
    fn from(v: Scalar) -> Value {
        Value::Scalar(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Value {
        Value::Scalar(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Value {
        Value::Scalar(v.into())
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Value {
        Value::Scalar(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Value {
        Value::Scalar(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Value {
        Value::Scalar(v.into())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Value {
        Value::Scalar(v.into())
    }
}

impl From<SubQuery> for Value {
    fn from(v: SubQuery) -> Value {
        Value::Subquery(v)
    }
}

/// Reference to a column: a plain name or an opaque computed expression
/// supplied by the external query layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnRef {
    Name(String),
    Expression { name: String, expression: String },
}

impl ColumnRef {
    pub fn name(&self) -> &str {
        match self {
            ColumnRef::Name(name) => name,
            ColumnRef::Expression { name, .. } => name,
        }
    }
}

impl From<&str> for ColumnRef {
    fn from(name: &str) -> ColumnRef {
        ColumnRef::Name(name.to_string())
    }
}

impl From<String> for ColumnRef {
    fn from(name: String) -> ColumnRef {
        ColumnRef::Name(name)
    }
}
