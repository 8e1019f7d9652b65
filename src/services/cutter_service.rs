//! Cutter Service - Cutter lookups and call numbers without the HTTP layer
//!
//! Owns the partition cache and the table loader, and wires the resolver and
//! the literature rules together. Axum handlers are thin wrappers around it.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CutterLookup, PartitionLoader, ResolutionError};
use crate::infrastructure::cache::PartitionCache;
use crate::models::{CallNumber, ClassificationRequest, ItemType, ReferenceEntry, ResolutionResult};
use crate::modules::cataloguing_pro::{classification, cutter, literature};

pub struct CutterService {
    loader: Arc<dyn PartitionLoader>,
    cache: PartitionCache,
}

impl CutterService {
    pub fn new(loader: Arc<dyn PartitionLoader>) -> Self {
        Self {
            loader,
            cache: PartitionCache::new(),
        }
    }

    pub fn cache(&self) -> &PartitionCache {
        &self.cache
    }

    /// Table partition holding entries for `letter`, loaded on first use
    pub async fn partition(&self, letter: char) -> Result<Arc<Vec<ReferenceEntry>>, ResolutionError> {
        let partition = cutter::partition_id(letter);

        if let Some(table) = self.cache.get(&partition) {
            tracing::debug!("Using cached cutter table: {}", partition);
            return Ok(table);
        }

        match self.loader.load_partition(&partition).await {
            Ok(entries) => {
                tracing::info!(
                    "Cutter table loaded successfully: {} ({} entries)",
                    partition,
                    entries.len()
                );
                Ok(self.cache.insert(&partition, entries))
            }
            Err(e) => {
                tracing::error!("Error loading cutter table {}: {}", partition, e);
                Err(ResolutionError::TableUnavailable { partition, source: e })
            }
        }
    }

    /// Resolve a name against the partition of its first letter
    pub async fn find_cutter(&self, name: &str) -> Result<ResolutionResult, ResolutionError> {
        let letter = name
            .trim()
            .chars()
            .next()
            .ok_or(ResolutionError::EmptyInput)?;
        let table = self.partition(letter).await?;
        cutter::resolve(name, &table)
    }

    /// Build the full call number for a catalog item
    pub async fn classify(&self, request: &ClassificationRequest) -> Result<CallNumber, ResolutionError> {
        tracing::info!(
            "Classify - item_type={:?}, author={:?}, category={:?}",
            request.item_type,
            request.author,
            request.category
        );

        if request.item_type == ItemType::MotionPicture {
            return Err(ResolutionError::NotClassifiable(
                "Motion picture DVDs and popular film/TV boxsets are not classified; pass to the CS team"
                    .to_string(),
            ));
        }

        // Checked before any table access so a missing category on a
        // literature item is reported first, as the form does
        let category = if request.item_type.is_literature() {
            Some(request.category.ok_or_else(|| {
                ResolutionError::NotClassifiable(
                    "Please select the type of work for a literature item".to_string(),
                )
            })?)
        } else {
            None
        };

        let base = self.find_cutter(&request.author).await?;

        match category {
            None => Ok(classification::standard_call_number(base, request.edition)),
            Some(category) => {
                let composition = literature::compose(
                    self,
                    category,
                    request.title.as_deref(),
                    request.editor.as_deref(),
                    request.publication_year,
                )
                .await;
                Ok(classification::literature_call_number(base, category, composition))
            }
        }
    }
}

#[async_trait]
impl CutterLookup for CutterService {
    async fn lookup(&self, name: &str) -> Result<ResolutionResult, ResolutionError> {
        self.find_cutter(name).await
    }
}
