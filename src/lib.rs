//! Hardware Hub
//!
//! A Rust REST API server for tracking a company's hardware assets:
//! registering devices, assigning them to employees and following their
//! lifecycle from purchase to retirement.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
