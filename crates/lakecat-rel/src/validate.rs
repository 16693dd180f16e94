use crate::{column::Column, error::CatalogError, expr::FieldPath};

///
/// Field existence validation
///
/// Checks a proposed partition field against a table's declared columns.
/// Only the leading path segment is validated; nested segments wait on
/// struct-typed column support.
///

/// Check that `field`'s leading segment names exactly one declared column.
///
/// Matching is case-insensitive. Zero matches fail as "not found"; more than
/// one match (columns differing only by case) fails as ambiguous.
pub fn validate_field_existence(columns: &[Column], field: &FieldPath) -> Result<(), CatalogError> {
    if columns.is_empty() {
        return Err(CatalogError::validation("columns cannot be empty"));
    }

    let head = field.first();
    let matched = columns
        .iter()
        .filter(|column| eq_ci(&column.name, head))
        .count();

    match matched {
        1 => Ok(()),
        0 => Err(CatalogError::validation(format!(
            "partition field {head} not found in table"
        ))),
        n => Err(CatalogError::validation(format!(
            "partition field {head} is ambiguous: {n} columns match"
        ))),
    }
}

// ASCII fast path; Unicode fallback folds via to_lowercase.
fn eq_ci(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        a.eq_ignore_ascii_case(b)
    } else {
        a.to_lowercase() == b.to_lowercase()
    }
}
