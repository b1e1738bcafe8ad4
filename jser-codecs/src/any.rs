use crate::{Deserialize, JsonSerializer, Serialize, XmlSerializer};
use jser_core::{Result, Serializer, TypeContract};
use std::fmt;
use std::io::{Read, Write};

/// Wire format of a serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Json,
    Xml,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => f.write_str("json"),
            Format::Xml => f.write_str("xml"),
        }
    }
}

/// One of the bundled serializers, so they can share a registry.
#[derive(Debug, Clone)]
pub enum AnySerializer {
    Json(JsonSerializer),
    Xml(XmlSerializer),
}

impl AnySerializer {
    pub fn format(&self) -> Format {
        match self {
            AnySerializer::Json(_) => Format::Json,
            AnySerializer::Xml(_) => Format::Xml,
        }
    }
}

impl From<JsonSerializer> for AnySerializer {
    fn from(s: JsonSerializer) -> Self {
        AnySerializer::Json(s)
    }
}

impl From<XmlSerializer> for AnySerializer {
    fn from(s: XmlSerializer) -> Self {
        AnySerializer::Xml(s)
    }
}

impl Serializer for AnySerializer {
    fn name(&self) -> &str {
        match self {
            AnySerializer::Json(s) => s.name(),
            AnySerializer::Xml(s) => s.name(),
        }
    }

    fn serialize_to_stream<T: Serialize>(
        &self,
        stream: Option<&mut dyn Write>,
        item: Option<&T>,
        ty: Option<&TypeContract<T>>,
    ) -> Result<()> {
        match self {
            AnySerializer::Json(s) => s.serialize_to_stream(stream, item, ty),
            AnySerializer::Xml(s) => s.serialize_to_stream(stream, item, ty),
        }
    }

    fn deserialize_from_stream<T: Deserialize>(
        &self,
        stream: Option<&mut dyn Read>,
        ty: Option<&TypeContract<T>>,
    ) -> Result<T> {
        match self {
            AnySerializer::Json(s) => s.deserialize_from_stream(stream, ty),
            AnySerializer::Xml(s) => s.deserialize_from_stream(stream, ty),
        }
    }

    fn serialize_to_string<T: Serialize>(
        &self,
        item: Option<&T>,
        ty: Option<&TypeContract<T>>,
    ) -> Result<String> {
        match self {
            AnySerializer::Json(s) => s.serialize_to_string(item, ty),
            AnySerializer::Xml(s) => s.serialize_to_string(item, ty),
        }
    }

    fn deserialize_from_string<T: Deserialize>(
        &self,
        data: Option<&str>,
        ty: Option<&TypeContract<T>>,
    ) -> Result<T> {
        match self {
            AnySerializer::Json(s) => s.deserialize_from_string(data, ty),
            AnySerializer::Xml(s) => s.deserialize_from_string(data, ty),
        }
    }
}
