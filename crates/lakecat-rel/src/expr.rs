use crate::{error::CatalogError, types::DataType};
use derive_more::Deref;
use std::fmt;

///
/// FieldPath
///
/// Ordered segments of a (possibly nested) column reference. Always holds at
/// least one segment; the invariant is enforced at construction, never at
/// use sites.
///

#[derive(Clone, Debug, Deref, Eq, PartialEq)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    /// Build a single-segment path referencing a top-level column.
    pub fn field(name: impl Into<String>) -> Self {
        Self(vec![name.into()])
    }

    /// Build a path from explicit segments; empty paths are rejected.
    pub fn new(segments: Vec<String>) -> Result<Self, CatalogError> {
        if segments.is_empty() {
            return Err(CatalogError::validation(
                "field reference must contain at least one segment",
            ));
        }

        Ok(Self(segments))
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Leading segment — the top-level column name.
    #[must_use]
    pub fn first(&self) -> &str {
        &self.0[0]
    }

    #[must_use]
    pub fn is_single(&self) -> bool {
        self.0.len() == 1
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

///
/// Literal
///
/// A typed literal value. `Null` is the distinguished singleton; it is never
/// represented as a typed literal with an empty value, and construction
/// normalizes any null-typed input to it.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Literal {
    Null,
    Typed { value: String, data_type: DataType },
}

impl Literal {
    pub fn new(value: impl Into<String>, data_type: DataType) -> Self {
        if data_type.is_null() {
            return Self::Null;
        }

        Self::Typed {
            value: value.into(),
            data_type,
        }
    }

    /// String-typed literal; the form the metastore hands back for raw
    /// partition values.
    pub fn string(value: impl Into<String>) -> Self {
        Self::new(value, DataType::String)
    }

    pub fn integer(value: i64) -> Self {
        Self::new(value.to_string(), DataType::Integer)
    }

    #[must_use]
    pub const fn data_type(&self) -> DataType {
        match self {
            Self::Null => DataType::Null,
            Self::Typed { data_type, .. } => *data_type,
        }
    }

    /// Literal text, absent only for the null singleton.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Null => None,
            Self::Typed { value, .. } => Some(value),
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Typed { value, .. } => write!(f, "{value}"),
        }
    }
}

///
/// Expression
///
/// Closed algebra of relational expressions. Adding a variant forces every
/// converter and codec match site to be updated.
///

#[derive(Clone, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum Expression {
    /// Reference to a (possibly nested) column.
    Field(FieldPath),
    /// Named function applied to an ordered argument list.
    Function { name: String, args: Vec<Expression> },
    Literal(Literal),
    /// Opaque expression text preserved verbatim for round-tripping syntax
    /// this model does not understand.
    Unparsed(String),
}

impl Expression {
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(FieldPath::field(name))
    }

    pub fn literal(value: impl Into<String>, data_type: DataType) -> Self {
        Self::Literal(Literal::new(value, data_type))
    }

    #[must_use]
    pub const fn null() -> Self {
        Self::Literal(Literal::Null)
    }

    pub fn function(name: impl Into<String>, args: Vec<Self>) -> Self {
        Self::Function {
            name: name.into(),
            args,
        }
    }

    pub fn unparsed(raw: impl Into<String>) -> Self {
        Self::Unparsed(raw.into())
    }
}
