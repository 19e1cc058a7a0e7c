//! Configuration loading from TOML files
//!
//! Config file is selected via:
//! 1. --config <path> command line argument
//! 2. CONFIG_FILE environment variable
//! 3. Default: config/dev.toml

use crate::domain::catalog::{default_events, default_stores};
use crate::domain::types::{Event, Store};
use anyhow::Context;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Simulated per-store search latency in milliseconds
    #[serde(default = "default_store_delay_ms")]
    pub store_delay_ms: u64,
    /// Outfits generated per store
    #[serde(default = "default_outfits_per_store")]
    pub outfits_per_store: usize,
}

fn default_store_delay_ms() -> u64 {
    2000
}

fn default_outfits_per_store() -> usize {
    2
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            store_delay_ms: default_store_delay_ms(),
            outfits_per_store: default_outfits_per_store(),
        }
    }
}

/// Catalog overrides; empty lists fall back to the compiled-in defaults
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub stores: Vec<Store>,
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Main configuration struct used throughout the application
#[derive(Debug, Clone)]
pub struct Config {
    store_delay_ms: u64,
    outfits_per_store: usize,
    stores: Vec<Store>,
    events: Vec<Event>,
    config_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_delay_ms: default_store_delay_ms(),
            outfits_per_store: default_outfits_per_store(),
            stores: default_stores(),
            events: default_events(),
            config_file: "default".to_string(),
        }
    }
}

impl Config {
    /// Determine config file path from args or environment
    pub fn resolve_config_path(args: &[String]) -> String {
        for (i, arg) in args.iter().enumerate() {
            if arg == "--config" {
                if let Some(path) = args.get(i + 1) {
                    return path.clone();
                }
            }
            if let Some(path) = arg.strip_prefix("--config=") {
                return path.to_string();
            }
        }

        if let Ok(path) = env::var("CONFIG_FILE") {
            return path;
        }

        "config/dev.toml".to_string()
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let toml_config: TomlConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        let stores = if toml_config.catalog.stores.is_empty() {
            default_stores()
        } else {
            toml_config.catalog.stores
        };
        let events = if toml_config.catalog.events.is_empty() {
            default_events()
        } else {
            toml_config.catalog.events
        };

        Ok(Self {
            store_delay_ms: toml_config.search.store_delay_ms,
            outfits_per_store: toml_config.search.outfits_per_store,
            stores,
            events,
            config_file: path.display().to_string(),
        })
    }

    /// Load configuration - resolves the path from args/environment, then
    /// tries the TOML file, falling back to defaults
    pub fn load(args: &[String]) -> Self {
        let config_path = Self::resolve_config_path(args);
        Self::load_from_path(&config_path)
    }

    /// Load configuration - tries TOML file first, falls back to defaults
    pub fn load_from_path(path: &str) -> Self {
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    // Getters for all config fields
    pub fn store_delay_ms(&self) -> u64 {
        self.store_delay_ms
    }

    pub fn outfits_per_store(&self) -> usize {
        self.outfits_per_store
    }

    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }
}
