use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// DataType
///
/// Closed set of literal type tags understood by the catalog wire format.
/// `Null` is the type of the null literal singleton — a real type, not an
/// absent one.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
#[remain::sorted]
pub enum DataType {
    Boolean,
    Byte,
    Date,
    Decimal,
    Double,
    Float,
    Integer,
    Long,
    Null,
    Short,
    String,
    Timestamp,
}

impl DataType {
    #[must_use]
    pub const fn is_null(self) -> bool {
        matches!(self, Self::Null)
    }

    /// Types whose literal values carry a total ordering usable for range
    /// partition bounds.
    #[must_use]
    pub const fn supports_ordering(self) -> bool {
        !matches!(self, Self::Null | Self::Boolean)
    }
}
