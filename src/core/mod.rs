//! # Core Module
//!
//! Configuration shared by the bot binary and every feature.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial creation with config module

pub mod config;

pub use config::Config;
