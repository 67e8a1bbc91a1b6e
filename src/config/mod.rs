//! Configuration loading and management for the quoting engine.
//!
//! This module provides functionality to load the shop configuration and
//! material catalog from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use quotekit_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/shop").unwrap();
//! println!("Materials configured: {}", config.materials().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CapacitySettings, LayoutDefaults, PricingMethod, PricingSettings, ProfitFirstSettings,
    ShopConfiguration, TimeDefaults,
};
