//! Pure, stateless mapping between the internal model and its wire DTOs.
//!
//! Outbound conversion is total: the algebras are closed enums, so the
//! compiler forces every new variant through here. Inbound conversion
//! re-checks the construction invariants (non-empty field paths, arity) and
//! fails loudly; unknown discriminants never reach this layer because the
//! serde tags reject them.

use crate::{
    column::{Column, ColumnDefault},
    error::CatalogError,
    expr::{Expression, FieldPath, Literal},
    partition::{IdentityPartition, ListPartition, Partition, RangePartition},
    transform::Transform,
    wire::{ColumnDto, ExpressionDto, LiteralDto, PartitionDto, PartitioningDto},
};

///
/// Literals
///

#[must_use]
pub fn literal_to_wire(literal: &Literal) -> LiteralDto {
    match literal {
        Literal::Null => LiteralDto::NULL,
        Literal::Typed { value, data_type } => LiteralDto {
            value: Some(value.clone()),
            data_type: *data_type,
        },
    }
}

/// An absent value or a null type tag both reconstruct the null singleton.
#[must_use]
pub fn literal_from_wire(dto: &LiteralDto) -> Literal {
    match &dto.value {
        None => Literal::Null,
        Some(value) => Literal::new(value.clone(), dto.data_type),
    }
}

///
/// Expressions
///

#[must_use]
pub fn expression_to_wire(expression: &Expression) -> ExpressionDto {
    match expression {
        Expression::Field(path) => ExpressionDto::Field {
            field_name: path.segments().to_vec(),
        },
        Expression::Function { name, args } => ExpressionDto::Function {
            function_name: name.clone(),
            args: args.iter().map(expression_to_wire).collect(),
        },
        Expression::Literal(literal) => ExpressionDto::Literal(literal_to_wire(literal)),
        Expression::Unparsed(raw) => ExpressionDto::Unparsed {
            unparsed_expression: raw.clone(),
        },
    }
}

pub fn expression_from_wire(dto: &ExpressionDto) -> Result<Expression, CatalogError> {
    let expression = match dto {
        ExpressionDto::Field { field_name } => {
            Expression::Field(FieldPath::new(field_name.clone())?)
        }
        ExpressionDto::Function {
            function_name,
            args,
        } => Expression::Function {
            name: function_name.clone(),
            args: args
                .iter()
                .map(expression_from_wire)
                .collect::<Result<Vec<_>, _>>()?,
        },
        ExpressionDto::Literal(literal) => Expression::Literal(literal_from_wire(literal)),
        ExpressionDto::Unparsed {
            unparsed_expression,
        } => Expression::Unparsed(unparsed_expression.clone()),
    };

    Ok(expression)
}

///
/// Transforms
///

#[must_use]
pub fn transform_to_wire(transform: &Transform) -> PartitioningDto {
    match transform {
        Transform::Apply { name, args } => PartitioningDto::Function {
            function_name: name.clone(),
            args: args.iter().map(expression_to_wire).collect(),
        },
        Transform::Bucket {
            num_buckets,
            fields,
        } => PartitioningDto::Bucket {
            num_buckets: *num_buckets,
            field_names: paths_to_wire(fields),
        },
        Transform::Day(field) => PartitioningDto::Day {
            field_name: field.segments().to_vec(),
        },
        Transform::Hour(field) => PartitioningDto::Hour {
            field_name: field.segments().to_vec(),
        },
        Transform::Identity(field) => PartitioningDto::Identity {
            field_name: field.segments().to_vec(),
        },
        Transform::List { fields } => PartitioningDto::List {
            field_names: paths_to_wire(fields),
        },
        Transform::Month(field) => PartitioningDto::Month {
            field_name: field.segments().to_vec(),
        },
        Transform::Range { field } => PartitioningDto::Range {
            field_name: field.segments().to_vec(),
        },
        Transform::Truncate { width, field } => PartitioningDto::Truncate {
            width: *width,
            field_name: field.segments().to_vec(),
        },
        Transform::Year(field) => PartitioningDto::Year {
            field_name: field.segments().to_vec(),
        },
    }
}

pub fn transform_from_wire(dto: &PartitioningDto) -> Result<Transform, CatalogError> {
    let transform = match dto {
        PartitioningDto::Bucket {
            num_buckets,
            field_names,
        } => Transform::Bucket {
            num_buckets: *num_buckets,
            fields: paths_from_wire(field_names)?,
        },
        PartitioningDto::Day { field_name } => {
            Transform::Day(FieldPath::new(field_name.clone())?)
        }
        PartitioningDto::Function {
            function_name,
            args,
        } => Transform::Apply {
            name: function_name.clone(),
            args: args
                .iter()
                .map(expression_from_wire)
                .collect::<Result<Vec<_>, _>>()?,
        },
        PartitioningDto::Hour { field_name } => {
            Transform::Hour(FieldPath::new(field_name.clone())?)
        }
        PartitioningDto::Identity { field_name } => {
            Transform::Identity(FieldPath::new(field_name.clone())?)
        }
        PartitioningDto::List { field_names } => Transform::List {
            fields: paths_from_wire(field_names)?,
        },
        PartitioningDto::Month { field_name } => {
            Transform::Month(FieldPath::new(field_name.clone())?)
        }
        PartitioningDto::Range { field_name } => Transform::Range {
            field: FieldPath::new(field_name.clone())?,
        },
        PartitioningDto::Truncate { width, field_name } => Transform::Truncate {
            width: *width,
            field: FieldPath::new(field_name.clone())?,
        },
        PartitioningDto::Year { field_name } => {
            Transform::Year(FieldPath::new(field_name.clone())?)
        }
    };

    Ok(transform)
}

///
/// Partitions
///

#[must_use]
pub fn partition_to_wire(partition: &Partition) -> PartitionDto {
    match partition {
        Partition::Identity(p) => PartitionDto::Identity {
            name: p.name().to_string(),
            field_names: paths_to_wire(p.field_names()),
            values: p.values().iter().map(literal_to_wire).collect(),
            properties: p.properties().clone(),
        },
        Partition::List(p) => PartitionDto::List {
            name: p.name().to_string(),
            lists: p
                .rows()
                .iter()
                .map(|row| row.iter().map(literal_to_wire).collect())
                .collect(),
            properties: p.properties().clone(),
        },
        Partition::Range(p) => PartitionDto::Range {
            name: p.name().to_string(),
            upper: literal_to_wire(p.upper()),
            lower: literal_to_wire(p.lower()),
            properties: p.properties().clone(),
        },
    }
}

pub fn partition_from_wire(dto: &PartitionDto) -> Result<Partition, CatalogError> {
    let partition = match dto {
        PartitionDto::Identity {
            name,
            field_names,
            values,
            properties,
        } => Partition::Identity(IdentityPartition::new(
            name.clone(),
            paths_from_wire(field_names)?,
            values.iter().map(literal_from_wire).collect(),
            properties.clone(),
        )?),
        PartitionDto::List {
            name,
            lists,
            properties,
        } => Partition::List(ListPartition::new(
            name.clone(),
            lists
                .iter()
                .map(|row| row.iter().map(literal_from_wire).collect())
                .collect(),
            properties.clone(),
        )?),
        PartitionDto::Range {
            name,
            upper,
            lower,
            properties,
        } => Partition::Range(RangePartition::new(
            name.clone(),
            literal_from_wire(lower),
            literal_from_wire(upper),
            properties.clone(),
        )),
    };

    Ok(partition)
}

///
/// Columns
///

#[must_use]
pub fn column_to_wire(column: &Column) -> ColumnDto {
    ColumnDto {
        name: column.name.clone(),
        data_type: column.data_type,
        comment: column.comment.clone(),
        nullable: column.nullable,
        auto_increment: column.auto_increment,
        default_value: match &column.default_value {
            ColumnDefault::NotSet => None,
            ColumnDefault::Value(expression) => Some(expression_to_wire(expression)),
        },
    }
}

pub fn column_from_wire(dto: &ColumnDto) -> Result<Column, CatalogError> {
    let default_value = match &dto.default_value {
        None => ColumnDefault::NotSet,
        Some(expression) => ColumnDefault::Value(expression_from_wire(expression)?),
    };

    Ok(Column {
        name: dto.name.clone(),
        data_type: dto.data_type,
        comment: dto.comment.clone(),
        nullable: dto.nullable,
        auto_increment: dto.auto_increment,
        default_value,
    })
}

///
/// Helpers
///

fn paths_to_wire(paths: &[FieldPath]) -> Vec<Vec<String>> {
    paths.iter().map(|path| path.segments().to_vec()).collect()
}

fn paths_from_wire(paths: &[Vec<String>]) -> Result<Vec<FieldPath>, CatalogError> {
    paths
        .iter()
        .map(|segments| FieldPath::new(segments.clone()))
        .collect()
}
