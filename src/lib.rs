pub mod api;
pub mod api_docs;
pub mod domain;
pub mod infrastructure;
pub mod models;
pub mod modules;
pub mod services;

pub use infrastructure::config;
pub use infrastructure::server;
pub use modules::cataloguing_pro::cutter::resolve;
pub use modules::cataloguing_pro::literature::{compose, year_code};
