//! Configuration file parsing.
//!
//! Parses `.solrgeo.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before resolving them
//! over the defaults.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs; unset keys fall back
/// to the defaults when resolved. This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// Solr field name section.
    pub fields: Option<RawFields>,
    /// Request shaping section.
    pub request: Option<RawRequest>,
}

/// Raw Solr field names from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFields {
    /// Geometry field used for the spatial clauses.
    pub geometry: Option<String>,
    /// Collection-membership field.
    pub is_part_of: Option<String>,
    /// Record identifier field.
    pub identifier: Option<String>,
    /// Record type field used to sort parents first.
    pub resource_type: Option<String>,
}

/// Raw request shaping settings from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRequest {
    /// Action names treated as single-record detail views.
    pub show_actions: Option<Vec<String>>,
    /// Boost factor for the spatial IsWithin clause.
    pub spatial_boost: Option<f32>,
}

/// Parses a TOML string into a raw configuration.
pub fn parse_config_str(content: &str) -> Result<RawConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Reads and parses a configuration file.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&content).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}
