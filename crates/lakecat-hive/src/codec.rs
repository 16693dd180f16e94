//! The legacy Hive partition-name codec.
//!
//! A partition name is `field1=value1/field2=value2/...` with `/` and `=` as
//! the sole delimiters, fields in caller-declared order. The format is the
//! on-disk metastore naming convention and must be reproduced bit-exact.

use lakecat_rel::{
    error::CatalogError,
    expr::{FieldPath, Literal},
    partition::{IdentityPartition, Properties},
    transform::Transform,
};
use std::collections::BTreeSet;

pub const NAME_DELIMITER: &str = "/";
pub const VALUE_DELIMITER: &str = "=";

/// Encode an identity partition into its metastore name.
///
/// Field/value pairs are emitted in the partition's declared order; nothing
/// is reordered. Nested field names have no representation in this format
/// and are rejected.
pub fn encode_partition_name(partition: &IdentityPartition) -> Result<String, CatalogError> {
    for field in partition.field_names() {
        if !field.is_single() {
            return Err(CatalogError::validation(format!(
                "nested partition field names are not supported: {field}"
            )));
        }
    }

    let pairs: Vec<String> = partition
        .field_names()
        .iter()
        .zip(partition.values())
        .map(|(field, value)| format!("{}{VALUE_DELIMITER}{value}", field.first()))
        .collect();

    Ok(pairs.join(NAME_DELIMITER))
}

/// Decode a partition name plus the metastore's positional raw values.
///
/// The name contributes field identity only; `raw_values` are authoritative
/// for value content and come back as string literals. Field and value
/// counts must agree or the decode fails; nothing is truncated or padded.
pub fn decode_partition_name(
    name: &str,
    raw_values: &[String],
    properties: Properties,
) -> Result<IdentityPartition, CatalogError> {
    let field_names = parse_field_names(name)?;

    if field_names.len() != raw_values.len() {
        return Err(CatalogError::validation(format!(
            "partition name '{name}' carries {} fields but {} values were supplied",
            field_names.len(),
            raw_values.len()
        )));
    }

    let values: Vec<Literal> = raw_values
        .iter()
        .map(|value| Literal::string(value.as_str()))
        .collect();

    IdentityPartition::new(name, field_names, values, properties)
}

/// Check a candidate identity partition against the table's declared
/// partitioning. Only identity transforms are a valid scheme for this
/// codec; the declared field set and the partition's field set must match
/// exactly (order-insensitive).
pub fn validate_against_partitioning(
    partition: &IdentityPartition,
    partitioning: &[Transform],
) -> Result<(), CatalogError> {
    let mut declared = BTreeSet::new();
    for transform in partitioning {
        match transform {
            Transform::Identity(field) => {
                declared.insert(field.first());
            }
            other => {
                return Err(CatalogError::validation(format!(
                    "hive tables only support identity partitioning, but table declares '{}'",
                    other.name()
                )));
            }
        }
    }

    if declared.len() != partition.field_names().len() {
        return Err(CatalogError::validation(format!(
            "partition field names must match table partitioning field names: {}, but got {}",
            join_names(&declared),
            join_paths(partition.field_names())
        )));
    }

    for field in partition.field_names() {
        if !declared.contains(field.first()) {
            return Err(CatalogError::validation(format!(
                "partition field name must be in table partitioning field names: {}, but got {}",
                join_names(&declared),
                field.first()
            )));
        }
    }

    Ok(())
}

// Field identity is the text before the first `=` in each segment.
fn parse_field_names(name: &str) -> Result<Vec<FieldPath>, CatalogError> {
    if name.is_empty() {
        return Err(CatalogError::validation("partition name cannot be empty"));
    }

    name.split(NAME_DELIMITER)
        .map(|segment| {
            let field = segment
                .split_once(VALUE_DELIMITER)
                .map_or(segment, |(field, _)| field);
            if field.is_empty() {
                return Err(CatalogError::validation(format!(
                    "partition name '{name}' contains an empty field name"
                )));
            }

            Ok(FieldPath::field(field))
        })
        .collect()
}

fn join_names(names: &BTreeSet<&str>) -> String {
    names.iter().copied().collect::<Vec<_>>().join(",")
}

fn join_paths(paths: &[FieldPath]) -> String {
    paths
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
