//! Collaborator trait definitions
//!
//! These traits define the contract for reference-table access.
//! Implementations live in the infrastructure and service layers.

use async_trait::async_trait;

use super::{LoaderError, ResolutionError};
use crate::models::{ReferenceEntry, ResolutionResult};

/// Source of cutter table partitions
#[async_trait]
pub trait PartitionLoader: Send + Sync {
    /// Fetch every entry stored under a partition id ("vowels", "b", "c", ...).
    ///
    /// An existing but empty partition is `Ok(vec![])`, never an error.
    async fn load_partition(&self, partition: &str) -> Result<Vec<ReferenceEntry>, LoaderError>;
}

/// Resolves a name against the partition of its own first letter
#[async_trait]
pub trait CutterLookup: Send + Sync {
    async fn lookup(&self, name: &str) -> Result<ResolutionResult, ResolutionError>;
}
