//! Region configuration loading and management.
//!
//! This module provides functionality to load per-region policy constants
//! from YAML files: the normal-hours threshold, the overtime multiplier,
//! and the billing markup scheme.
//!
//! # Example
//!
//! ```no_run
//! use throughput_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/regions").unwrap();
//! println!("Loaded regions: {:?}", config.regions());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{MarkupPolicy, RegionConfig};
