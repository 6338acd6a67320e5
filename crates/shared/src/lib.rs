//! Shared errors and configuration for Cambio.
//!
//! This crate provides the pieces every other crate leans on:
//! - Application-wide error type
//! - Layered configuration (files + environment)

pub mod config;
pub mod error;

pub use config::{AppConfig, LogConfig, LogFormat};
pub use error::{AppError, AppResult};
