//! Cascade Core Library
//!
//! This crate provides the foundational utilities shared by the splitter:
//! - Error handling (`AppError`, `AppResult`)
//! - Logging infrastructure
//! - Configuration loading (`AppConfig`, `SplitterSettings`)

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, LengthMetric, SplitterSettings};
pub use error::{AppError, AppResult};
