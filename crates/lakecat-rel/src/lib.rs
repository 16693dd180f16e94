//! Relational metadata model for the LakeCat catalog: expression, transform,
//! and partition algebras, the column model, and their wire (DTO) mirrors.
//!
//! Everything in this crate is an immutable value object. Construction
//! enforces the model invariants; nothing here performs I/O.

pub mod column;
pub mod error;
pub mod expr;
pub mod partition;
pub mod transform;
pub mod types;
pub mod validate;
pub mod wire;

///
/// Prelude
///
/// Domain vocabulary only; converters and error helpers are imported from
/// their own modules.
///

pub mod prelude {
    pub use crate::{
        column::{Column, ColumnDefault},
        expr::{Expression, FieldPath, Literal},
        partition::{IdentityPartition, ListPartition, Partition, RangePartition},
        transform::Transform,
        types::DataType,
    };
}
