//! Configuration for the review state store
//!
//! This crate provides:
//! - Configuration file discovery and loading (TOML)
//! - Store configuration (ReviewConfig)
//! - The frame change policy used by the reducer

pub mod config_file;
pub mod review_config;

pub use config_file::{load_config_file, CONFIG_FILE};
pub use review_config::{FrameChangePolicy, ReviewConfig};
