//! Services Layer
//!
//! This module contains the cutter business logic extracted from HTTP handlers.
//! Services can be called directly or through Axum handlers.

pub mod cutter_service;

// Re-export for convenience
pub use cutter_service::CutterService;
