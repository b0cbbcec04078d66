//! Configuration system for solrgeo.
//!
//! The request-shaping rules are parameterized by a handful of Solr field
//! names and a list of "show" action names. These were mutable class-level
//! settings in older geospatial search UIs; here they are an explicit,
//! immutable [`Config`] value constructed once and passed into the rules,
//! so nothing is shared mutably across requests.
//!
//! Configuration is read from a single `.solrgeo.toml` file; unset keys
//! fall back to the conventional GeoBlacklight-style Solr schema defaults.

#![warn(missing_docs)]

mod error;
mod parse;
mod templates;

use std::path::Path;

pub use error::ConfigError;
pub use parse::{RawConfig, RawFields, RawRequest, parse_config_file, parse_config_str};
use serde::{Deserialize, Serialize};
pub use templates::template;

/// Conventional name for the configuration file.
pub const CONFIG_FILENAME: &str = ".solrgeo.toml";

/// Fully resolved configuration for the request-shaping rules.
///
/// Immutable once constructed; share it freely across request handlers.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Solr field names the rules write clauses against.
    pub fields: Fields,
    /// Action names treated as single-record detail views. The
    /// child-visibility rule does not fire on these.
    pub show_actions: Vec<String>,
    /// Boost factor applied to the spatial `IsWithin` clause.
    pub spatial_boost: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fields: Fields::default(),
            show_actions: vec![String::from("show")],
            spatial_boost: 10.0,
        }
    }
}

/// The externally configured Solr field names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Fields {
    /// Geometry field the spatial clauses query.
    pub geometry: String,
    /// Collection-membership ("is part of") field.
    pub is_part_of: String,
    /// Record identifier field.
    pub identifier: String,
    /// Record type field, used to sort collection parents first.
    pub resource_type: String,
}

impl Default for Fields {
    fn default() -> Self {
        Self {
            geometry: String::from("solr_geom"),
            is_part_of: String::from("dct_isPartOf_sm"),
            identifier: String::from("dc_identifier_s"),
            resource_type: String::from("dc_type_s"),
        }
    }
}

impl Config {
    /// Loads configuration from a file, resolving over the defaults and
    /// validating the result.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = parse_config_file(path)?;
        let config = Self::from_raw(raw);
        config.validate()?;
        Ok(config)
    }

    /// Resolves a raw (all-optional) configuration over the defaults.
    pub fn from_raw(raw: RawConfig) -> Self {
        let defaults = Self::default();
        let raw_fields = raw.fields.unwrap_or_default();
        let raw_request = raw.request.unwrap_or_default();

        Self {
            fields: Fields {
                geometry: raw_fields.geometry.unwrap_or(defaults.fields.geometry),
                is_part_of: raw_fields.is_part_of.unwrap_or(defaults.fields.is_part_of),
                identifier: raw_fields.identifier.unwrap_or(defaults.fields.identifier),
                resource_type: raw_fields
                    .resource_type
                    .unwrap_or(defaults.fields.resource_type),
            },
            show_actions: raw_request.show_actions.unwrap_or(defaults.show_actions),
            spatial_boost: raw_request.spatial_boost.unwrap_or(defaults.spatial_boost),
        }
    }

    /// Checks that the configuration is usable: at least one show action
    /// and no empty field names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.show_actions.is_empty() {
            return Err(ConfigError::EmptyShowActions);
        }

        let named = [
            ("geometry", &self.fields.geometry),
            ("is_part_of", &self.fields.is_part_of),
            ("identifier", &self.fields.identifier),
            ("resource_type", &self.fields.resource_type),
        ];
        for (name, value) in named {
            if value.is_empty() {
                return Err(ConfigError::EmptyFieldName { field: name });
            }
        }

        Ok(())
    }

    /// Whether the given action name is configured as a detail-view action.
    pub fn is_show_action(&self, action: &str) -> bool {
        self.show_actions.iter().any(|a| a == action)
    }

    /// Serializes the effective configuration to TOML format.
    ///
    /// This outputs the resolved configuration in the same shape as a
    /// `.solrgeo.toml` file, making it easy to see what is in effect.
    pub fn to_toml(&self) -> String {
        let serializable = SerializableConfig {
            fields: self.fields.clone(),
            request: SerializableRequest {
                show_actions: self.show_actions.clone(),
                spatial_boost: self.spatial_boost,
            },
        };
        toml::to_string_pretty(&serializable).expect("config serialization should not fail")
    }
}

/// Internal struct for TOML serialization in the config-file shape.
#[derive(Serialize)]
struct SerializableConfig {
    /// Solr field name section.
    fields: Fields,
    /// Request shaping section.
    request: SerializableRequest,
}

/// Request shaping section for serialization.
#[derive(Serialize)]
struct SerializableRequest {
    /// Action names treated as detail views.
    show_actions: Vec<String>,
    /// Boost factor for the spatial clause.
    spatial_boost: f32,
}
