//! Declarative construction of named serializers.
//!
//! A host application embeds [`SerializerConfig`] entries in its own
//! configuration (any serde format) and turns them into a registry:
//!
//! ```
//! use jser_codecs::{Format, SerializerConfig, registry_from_configs};
//! use jser_core::Serializer;
//!
//! let configs: Vec<SerializerConfig> = serde_json::from_str(r#"[
//!     { "format": "json" },
//!     { "format": "xml", "name": "xml", "settings": { "declaration": true } }
//! ]"#).unwrap();
//!
//! let registry = registry_from_configs(configs).unwrap();
//! assert_eq!(registry.default_serializer().unwrap().format(), Format::Json);
//! assert_eq!(registry.get("xml").unwrap().name(), "xml");
//! ```

use crate::{AnySerializer, JsonSerializer, JsonSettings, XmlSerializer, XmlSettings};
use jser_core::{Result, SerializerRegistry};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum SerializerConfig {
    Json {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        settings: Option<JsonSettings>,
    },
    Xml {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        settings: Option<XmlSettings>,
    },
}

impl SerializerConfig {
    pub fn build(self) -> AnySerializer {
        match self {
            SerializerConfig::Json { name, settings } => {
                JsonSerializer::new(name.as_deref(), settings.map(Arc::new)).into()
            }
            SerializerConfig::Xml { name, settings } => {
                XmlSerializer::new(name.as_deref(), settings.map(Arc::new)).into()
            }
        }
    }
}

/// Builds every config and registers it under its name.
///
/// Fails on the first duplicate name.
pub fn registry_from_configs(
    configs: impl IntoIterator<Item = SerializerConfig>,
) -> Result<SerializerRegistry<AnySerializer>> {
    let mut registry = SerializerRegistry::new();
    for config in configs {
        registry.register(config.build())?;
    }
    tracing::debug!(serializers = ?registry.names(), "serializer registry built");
    Ok(registry)
}
