//! `PartitionLoader` implementations
//!
//! Partitions are JSON arrays of `{group, name, cutter}` stored as
//! `cutter_table_<id>.json`, either in a local directory or under a base URL.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{LoaderError, PartitionLoader};
use crate::infrastructure::config::Config;
use crate::models::ReferenceEntry;
use crate::modules::cataloguing_pro::cutter::partition_file;

fn parse_partition(name: &str, body: &str) -> Result<Vec<ReferenceEntry>, LoaderError> {
    serde_json::from_str(body).map_err(|e| LoaderError::Malformed(format!("{}: {}", name, e)))
}

/// Reads partitions from a directory on disk
pub struct FsPartitionLoader {
    data_dir: PathBuf,
}

impl FsPartitionLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

#[async_trait]
impl PartitionLoader for FsPartitionLoader {
    async fn load_partition(&self, partition: &str) -> Result<Vec<ReferenceEntry>, LoaderError> {
        let path = self.data_dir.join(partition_file(partition));
        let body = tokio::fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LoaderError::NotFound(path.display().to_string())
            } else {
                LoaderError::Transport(format!("{}: {}", path.display(), e))
            }
        })?;

        parse_partition(&path.display().to_string(), &body)
    }
}

/// Fetches partitions over HTTP
pub struct HttpPartitionLoader {
    base_url: String,
    client: reqwest::Client,
}

impl HttpPartitionLoader {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LoaderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LoaderError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl PartitionLoader for HttpPartitionLoader {
    async fn load_partition(&self, partition: &str) -> Result<Vec<ReferenceEntry>, LoaderError> {
        let url = format!("{}/{}", self.base_url, partition_file(partition));
        tracing::debug!("Fetching cutter table from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LoaderError::Transport(format!("{}: {}", url, e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LoaderError::NotFound(url));
        }
        if !status.is_success() {
            return Err(LoaderError::Transport(format!(
                "HTTP error! status: {} ({})",
                status.as_u16(),
                url
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LoaderError::Transport(format!("{}: {}", url, e)))?;

        parse_partition(&url, &body)
    }
}

/// Pick the loader the configuration asks for
pub fn loader_from_config(config: &Config) -> Result<Arc<dyn PartitionLoader>, LoaderError> {
    match &config.table_url {
        Some(url) => {
            tracing::info!("Loading cutter tables from {}", url);
            let loader = HttpPartitionLoader::new(url, Duration::from_secs(config.http_timeout_secs))?;
            Ok(Arc::new(loader))
        }
        None => {
            tracing::info!("Loading cutter tables from {}", config.data_dir.display());
            Ok(Arc::new(FsPartitionLoader::new(config.data_dir.clone())))
        }
    }
}
