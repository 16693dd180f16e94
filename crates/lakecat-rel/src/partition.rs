use crate::{
    error::CatalogError,
    expr::{FieldPath, Literal},
};
use std::collections::BTreeMap;

/// Free-form partition metadata carried to and from the metastore.
pub type Properties = BTreeMap<String, String>;

///
/// Partition
///
/// One concrete instance of a table's partitioning. Immutable once built; a
/// "modified" partition is always a newly constructed value.
///

#[derive(Clone, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum Partition {
    Identity(IdentityPartition),
    List(ListPartition),
    Range(RangePartition),
}

impl Partition {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Identity(p) => &p.name,
            Self::List(p) => &p.name,
            Self::Range(p) => &p.name,
        }
    }

    #[must_use]
    pub const fn properties(&self) -> &Properties {
        match self {
            Self::Identity(p) => &p.properties,
            Self::List(p) => &p.properties,
            Self::Range(p) => &p.properties,
        }
    }

    /// Lowercase variant label for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Identity(_) => "identity",
            Self::List(_) => "list",
            Self::Range(_) => "range",
        }
    }
}

///
/// IdentityPartition
///
/// Field values correspond 1:1 to raw column values with no transform
/// applied. Field order is significant and preserved everywhere.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IdentityPartition {
    name: String,
    field_names: Vec<FieldPath>,
    values: Vec<Literal>,
    properties: Properties,
}

impl IdentityPartition {
    /// Field and value arity must match; enforced here, not at use sites.
    pub fn new(
        name: impl Into<String>,
        field_names: Vec<FieldPath>,
        values: Vec<Literal>,
        properties: Properties,
    ) -> Result<Self, CatalogError> {
        if field_names.len() != values.len() {
            return Err(CatalogError::validation(format!(
                "identity partition field/value arity mismatch: {} fields, {} values",
                field_names.len(),
                values.len()
            )));
        }

        Ok(Self {
            name: name.into(),
            field_names,
            values,
            properties,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn field_names(&self) -> &[FieldPath] {
        &self.field_names
    }

    #[must_use]
    pub fn values(&self) -> &[Literal] {
        &self.values
    }

    #[must_use]
    pub const fn properties(&self) -> &Properties {
        &self.properties
    }
}

///
/// RangePartition
///
/// Bounded by two literals. The model does not enforce `lower <= upper`;
/// ordering under the declared type is the caller's responsibility.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RangePartition {
    name: String,
    lower: Literal,
    upper: Literal,
    properties: Properties,
}

impl RangePartition {
    pub fn new(
        name: impl Into<String>,
        lower: Literal,
        upper: Literal,
        properties: Properties,
    ) -> Self {
        Self {
            name: name.into(),
            lower,
            upper,
            properties,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn lower(&self) -> &Literal {
        &self.lower
    }

    #[must_use]
    pub const fn upper(&self) -> &Literal {
        &self.upper
    }

    #[must_use]
    pub const fn properties(&self) -> &Properties {
        &self.properties
    }
}

///
/// ListPartition
///
/// Rows of literal tuples. All rows must share one arity; whether that arity
/// matches the table's list-partitioning field count is checked against the
/// table, not here.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListPartition {
    name: String,
    rows: Vec<Vec<Literal>>,
    properties: Properties,
}

impl ListPartition {
    pub fn new(
        name: impl Into<String>,
        rows: Vec<Vec<Literal>>,
        properties: Properties,
    ) -> Result<Self, CatalogError> {
        if let Some(first) = rows.first() {
            let arity = first.len();
            if let Some(bad) = rows.iter().position(|row| row.len() != arity) {
                return Err(CatalogError::validation(format!(
                    "list partition rows must share one arity: row 0 has {arity} values, row {bad} has {}",
                    rows[bad].len()
                )));
            }
        }

        Ok(Self {
            name: name.into(),
            rows,
            properties,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Literal>] {
        &self.rows
    }

    #[must_use]
    pub const fn properties(&self) -> &Properties {
        &self.properties
    }
}
