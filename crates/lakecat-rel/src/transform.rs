use crate::expr::{Expression, FieldPath};

///
/// Transform
///
/// Closed set of partitioning rules a table may declare. The time-granularity
/// and identity transforms carry one field; the rest carry their own shapes.
/// `Apply` is the catch-all for custom or not-yet-modeled transforms.
///

#[derive(Clone, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum Transform {
    Apply {
        name: String,
        args: Vec<Expression>,
    },
    Bucket {
        num_buckets: u32,
        fields: Vec<FieldPath>,
    },
    Day(FieldPath),
    Hour(FieldPath),
    Identity(FieldPath),
    List {
        fields: Vec<FieldPath>,
    },
    Month(FieldPath),
    Range {
        field: FieldPath,
    },
    Truncate {
        width: u32,
        field: FieldPath,
    },
    Year(FieldPath),
}

impl Transform {
    pub fn identity(field: impl Into<String>) -> Self {
        Self::Identity(FieldPath::field(field))
    }

    /// Transform name as it appears in diagnostics and function-style DDL.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Apply { name, .. } => name,
            Self::Bucket { .. } => "bucket",
            Self::Day(_) => "day",
            Self::Hour(_) => "hour",
            Self::Identity(_) => "identity",
            Self::List { .. } => "list",
            Self::Month(_) => "month",
            Self::Range { .. } => "range",
            Self::Truncate { .. } => "truncate",
            Self::Year(_) => "year",
        }
    }

    /// The referenced field for single-field transforms, `None` otherwise.
    #[must_use]
    pub const fn single_field(&self) -> Option<&FieldPath> {
        match self {
            Self::Day(field)
            | Self::Hour(field)
            | Self::Identity(field)
            | Self::Month(field)
            | Self::Year(field) => Some(field),
            _ => None,
        }
    }

    /// Every field path the transform references, in declaration order.
    #[must_use]
    pub fn referenced_fields(&self) -> Vec<&FieldPath> {
        match self {
            Self::Day(field)
            | Self::Hour(field)
            | Self::Identity(field)
            | Self::Month(field)
            | Self::Year(field)
            | Self::Range { field }
            | Self::Truncate { field, .. } => vec![field],
            Self::Bucket { fields, .. } | Self::List { fields } => fields.iter().collect(),
            Self::Apply { args, .. } => args
                .iter()
                .filter_map(|arg| match arg {
                    Expression::Field(path) => Some(path),
                    _ => None,
                })
                .collect(),
        }
    }
}
