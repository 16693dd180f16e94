use lakecat_rel::{error::CatalogError, partition::Properties};

///
/// PartitionStore
///
/// Seam to the metastore transport. Implementations own pooling, framing,
/// and timeouts; every method is one atomic request/response and failures
/// arrive already translated into the [`CatalogError`] taxonomy:
///
/// - absent table    → `NotFound` ("no such table")
/// - absent partition → `NotFound` ("no such partition")
/// - duplicate create → `AlreadyExists`
/// - anything else    → `Operational`, wrapping the underlying cause
///
/// This layer never retries; retry policy belongs to the caller.
///

pub trait PartitionStore {
    /// List all partition names declared for the table.
    fn list_partition_names(&self) -> Result<Vec<String>, CatalogError>;

    /// Fetch raw partition images for a batch of names, in the same order.
    fn partitions_by_names(&self, names: &[String]) -> Result<Vec<RawPartition>, CatalogError>;

    /// Fetch one partition image by its encoded name.
    fn partition_by_name(&self, name: &str) -> Result<RawPartition, CatalogError>;

    /// Create one partition from its encoded name and image.
    fn create_partition(
        &self,
        name: &str,
        partition: RawPartition,
    ) -> Result<RawPartition, CatalogError>;
}

///
/// RawPartition
///
/// Metastore-native partition image: positional string values (authoritative
/// for value content) plus the free-form parameters map.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RawPartition {
    pub values: Vec<String>,
    pub parameters: Properties,
}

impl RawPartition {
    #[must_use]
    pub fn new(values: Vec<String>, parameters: Properties) -> Self {
        Self { values, parameters }
    }
}
