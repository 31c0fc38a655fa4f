//! Bookshelf
//!
//! A small REST JSON service for tracking books and their read status.
//! All state is held in process memory for the lifetime of the server.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repository: repository::Repository,
}

impl AppState {
    /// Build state around a fresh, empty library
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            repository: repository::Repository::new(),
        }
    }
}
