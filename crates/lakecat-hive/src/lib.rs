//! Hive metastore partition support for LakeCat: the legacy
//! `field1=value1/field2=value2` partition-name codec and the partition
//! operations facade that speaks it.
//!
//! Transport (connection pooling, Thrift framing, retries) lives behind the
//! [`store::PartitionStore`] trait; everything here is synchronous logic
//! over that seam.

pub mod codec;
pub mod ops;
pub mod store;

pub use ops::HivePartitionOps;
pub use store::{PartitionStore, RawPartition};
