#![warn(missing_debug_implementations)]

pub use serde::{Serialize, de::DeserializeOwned as Deserialize};

mod json;
pub use json::{JsonSerializer, JsonSettings};

mod xml;
pub use xml::{RootMismatch, XmlIndent, XmlSerializer, XmlSettings};

mod any;
pub use any::{AnySerializer, Format};

pub mod config;
pub use config::{SerializerConfig, registry_from_configs};
