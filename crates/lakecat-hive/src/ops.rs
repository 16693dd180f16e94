//! Partition operations over a [`PartitionStore`].
//!
//! Orchestration only: validation and naming go through [`crate::codec`],
//! transport errors pass through untouched, and nothing here retries.

use crate::{
    codec::{decode_partition_name, encode_partition_name, validate_against_partitioning},
    store::{PartitionStore, RawPartition},
};
use lakecat_rel::{
    error::CatalogError,
    partition::{IdentityPartition, Partition},
    transform::Transform,
};

///
/// HivePartitionOps
///
/// Partition surface of one table: the store seam plus the table's declared
/// partitioning transforms.
///

pub struct HivePartitionOps<S> {
    store: S,
    partitioning: Vec<Transform>,
}

impl<S: PartitionStore> HivePartitionOps<S> {
    pub const fn new(store: S, partitioning: Vec<Transform>) -> Self {
        Self {
            store,
            partitioning,
        }
    }

    pub fn list_partition_names(&self) -> Result<Vec<String>, CatalogError> {
        self.store.list_partition_names()
    }

    /// List all partitions: one name listing, one batch fetch, zipped
    /// positionally. A count mismatch between the two is a store protocol
    /// violation, not caller error.
    pub fn list_partitions(&self) -> Result<Vec<Partition>, CatalogError> {
        let names = self.store.list_partition_names()?;
        let raws = self.store.partitions_by_names(&names)?;

        if names.len() != raws.len() {
            return Err(CatalogError::operational(format!(
                "store returned {} partitions for {} names",
                raws.len(),
                names.len()
            )));
        }

        names
            .iter()
            .zip(raws)
            .map(|(name, raw)| Self::from_raw(name, raw))
            .collect()
    }

    pub fn get_partition(&self, name: &str) -> Result<Partition, CatalogError> {
        let raw = self.store.partition_by_name(name)?;
        Self::from_raw(name, raw)
    }

    /// Validate, name, and create one identity partition. Returns the
    /// partition as the metastore recorded it.
    pub fn add_partition(&self, partition: &Partition) -> Result<Partition, CatalogError> {
        let Partition::Identity(identity) = partition else {
            return Err(CatalogError::unsupported(format!(
                "unsupported partition type: {} (hive supports identity partitions only)",
                partition.kind()
            )));
        };

        validate_against_partitioning(identity, &self.partitioning)?;
        let name = encode_partition_name(identity)?;

        let created = self.store.create_partition(&name, Self::to_raw(identity))?;
        Self::from_raw(&name, created)
    }

    /// Partition deletion is an external collaborator's responsibility.
    pub fn drop_partition(&self, _name: &str) -> Result<(), CatalogError> {
        Err(CatalogError::unsupported_operation(
            "partition drop is not supported by the hive partition codec",
        ))
    }

    fn from_raw(name: &str, raw: RawPartition) -> Result<Partition, CatalogError> {
        let identity = decode_partition_name(name, &raw.values, raw.parameters)?;
        Ok(Partition::Identity(identity))
    }

    fn to_raw(partition: &IdentityPartition) -> RawPartition {
        RawPartition::new(
            partition.values().iter().map(ToString::to_string).collect(),
            partition.properties().clone(),
        )
    }
}
