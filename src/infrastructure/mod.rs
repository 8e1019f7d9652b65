//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Configuration loading (config)
//! - Partition cache (cache)
//! - File and HTTP table loaders (table_loader)
//! - HTTP server setup (server)
//! - Application state (state)

pub mod cache;
pub mod config;
pub mod server;
pub mod state;
pub mod table_loader;

pub use cache::PartitionCache;
pub use state::AppState;
pub use table_loader::{FsPartitionLoader, HttpPartitionLoader, loader_from_config};
