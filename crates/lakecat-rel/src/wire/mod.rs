//! Wire (DTO) mirrors of the relational model.
//!
//! These are serde shapes only: dumb, explicitly tagged, and used at the
//! service boundary exclusively. All mapping logic lives in [`convert`];
//! nothing in the crate hands a DTO to the domain layer directly.

mod convert;

#[cfg(test)]
mod tests;

pub use convert::{
    column_from_wire, column_to_wire, expression_from_wire, expression_to_wire,
    literal_from_wire, literal_to_wire, partition_from_wire, partition_to_wire,
    transform_from_wire, transform_to_wire,
};

use crate::types::DataType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// LiteralDto
///
/// Wire literal: stringified value plus its type tag. The null literal is
/// the distinguished `NULL` form, never a literal with an empty value.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiteralDto {
    pub value: Option<String>,
    pub data_type: DataType,
}

impl LiteralDto {
    pub const NULL: Self = Self {
        value: None,
        data_type: DataType::Null,
    };
}

///
/// ExpressionDto
///
/// `argType` is the discriminant: LITERAL | FIELD | FUNCTION | UNPARSED.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "argType", rename_all = "UPPERCASE", rename_all_fields = "camelCase")]
#[remain::sorted]
pub enum ExpressionDto {
    Field {
        field_name: Vec<String>,
    },
    Function {
        function_name: String,
        args: Vec<ExpressionDto>,
    },
    Literal(LiteralDto),
    Unparsed {
        unparsed_expression: String,
    },
}

///
/// PartitioningDto
///
/// `strategy` is the discriminant. Single-field strategies carry
/// `fieldName`; the rest carry their own shapes.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "strategy", rename_all = "UPPERCASE", rename_all_fields = "camelCase")]
#[remain::sorted]
pub enum PartitioningDto {
    Bucket {
        num_buckets: u32,
        field_names: Vec<Vec<String>>,
    },
    Day {
        field_name: Vec<String>,
    },
    Function {
        function_name: String,
        args: Vec<ExpressionDto>,
    },
    Hour {
        field_name: Vec<String>,
    },
    Identity {
        field_name: Vec<String>,
    },
    List {
        field_names: Vec<Vec<String>>,
    },
    Month {
        field_name: Vec<String>,
    },
    Range {
        field_name: Vec<String>,
    },
    Truncate {
        width: u32,
        field_name: Vec<String>,
    },
    Year {
        field_name: Vec<String>,
    },
}

///
/// PartitionDto
///
/// `type` is the discriminant: IDENTITY | RANGE | LIST.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "UPPERCASE", rename_all_fields = "camelCase")]
#[remain::sorted]
pub enum PartitionDto {
    Identity {
        name: String,
        field_names: Vec<Vec<String>>,
        values: Vec<LiteralDto>,
        #[serde(default)]
        properties: BTreeMap<String, String>,
    },
    List {
        name: String,
        lists: Vec<Vec<LiteralDto>>,
        #[serde(default)]
        properties: BTreeMap<String, String>,
    },
    Range {
        name: String,
        upper: LiteralDto,
        lower: LiteralDto,
        #[serde(default)]
        properties: BTreeMap<String, String>,
    },
}

///
/// ColumnDto
///
/// An absent `defaultValue` is the "no default declared" sentinel; an
/// explicit null default travels as the NULL literal DTO.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDto {
    pub name: String,
    pub data_type: DataType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(default = "nullable_default")]
    pub nullable: bool,

    #[serde(default)]
    pub auto_increment: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<ExpressionDto>,
}

const fn nullable_default() -> bool {
    true
}
