//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the shop
//! configuration and material catalog from YAML files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::MaterialSheet;

use super::types::ShopConfiguration;

/// Loads and provides access to the shop configuration and materials.
///
/// The `ConfigLoader` reads YAML files from a directory and provides lookup
/// of materials by id. It stands in for the persistence layer a deployed
/// quoting service would query.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/shop/
/// ├── shop.yaml            # Capacity, time/layout defaults, pricing
/// └── materials/
///     ├── leatherette.yaml # One material per file
///     └── woven_twill.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use quotekit_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/shop").unwrap();
///
/// let material = loader.get_material("leatherette").unwrap();
/// println!("Sheet cost: ${}", material.sheet_cost);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    shop: ShopConfiguration,
    materials: HashMap<String, MaterialSheet>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/shop")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `shop.yaml` or the `materials` directory is missing
    /// - Any file contains invalid YAML
    ///
    /// # Example
    ///
    /// ```no_run
    /// use quotekit_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/shop")?;
    /// # Ok::<(), quotekit_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load shop.yaml
        let shop_path = path.join("shop.yaml");
        let shop = Self::load_yaml::<ShopConfiguration>(&shop_path)?;

        // Load every material file from the materials directory
        let materials_dir = path.join("materials");
        let materials = Self::load_materials(&materials_dir)?;

        Ok(Self { shop, materials })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all material files from the materials directory.
    fn load_materials(materials_dir: &Path) -> EngineResult<HashMap<String, MaterialSheet>> {
        let materials_dir_str = materials_dir.display().to_string();

        if !materials_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: materials_dir_str,
            });
        }

        let entries = fs::read_dir(materials_dir).map_err(|_| EngineError::ConfigNotFound {
            path: materials_dir_str.clone(),
        })?;

        let mut materials = HashMap::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: materials_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let material = Self::load_yaml::<MaterialSheet>(&path)?;
                materials.insert(material.id.clone(), material);
            }
        }

        if materials.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no material files found)", materials_dir_str),
            });
        }

        Ok(materials)
    }

    /// Returns the shop configuration.
    pub fn shop(&self) -> &ShopConfiguration {
        &self.shop
    }

    /// Returns all configured materials keyed by id.
    pub fn materials(&self) -> &HashMap<String, MaterialSheet> {
        &self.materials
    }

    /// Gets a material by its id.
    ///
    /// # Arguments
    ///
    /// * `id` - The material id (e.g., "leatherette")
    ///
    /// # Returns
    ///
    /// Returns the material if found, or `MaterialNotFound` error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use quotekit_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/shop")?;
    /// let material = loader.get_material("leatherette")?;
    /// println!("Material: {}", material.name);
    /// # Ok::<(), quotekit_engine::error::EngineError>(())
    /// ```
    pub fn get_material(&self, id: &str) -> EngineResult<&MaterialSheet> {
        self.materials
            .get(id)
            .ok_or_else(|| EngineError::MaterialNotFound { id: id.to_string() })
    }
}
