use crate::{
    expr::{Expression, Literal},
    types::DataType,
};

///
/// ColumnDefault
///
/// Three states matter and are never collapsed: no declared default
/// (`NotSet`), an explicit NULL default (`Value` carrying the null literal),
/// and a concrete default expression.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum ColumnDefault {
    #[default]
    NotSet,
    Value(Expression),
}

impl ColumnDefault {
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// True only for an explicit NULL default, not for `NotSet`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Value(Expression::Literal(Literal::Null)))
    }
}

///
/// Column
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Column {
    pub name: String,
    pub data_type: DataType,
    pub comment: Option<String>,
    pub nullable: bool,
    pub auto_increment: bool,
    pub default_value: ColumnDefault,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            comment: None,
            nullable: true,
            auto_increment: false,
            default_value: ColumnDefault::NotSet,
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    #[must_use]
    pub const fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    #[must_use]
    pub const fn with_auto_increment(mut self, auto_increment: bool) -> Self {
        self.auto_increment = auto_increment;
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: Expression) -> Self {
        self.default_value = ColumnDefault::Value(default);
        self
    }
}
