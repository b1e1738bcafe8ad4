use crate::{Deserialize, Serialize};
use jser_core::{
    Error, Result, Serializer, TypeContract,
    guard::Required,
    normalize_name,
};
use serde_json::ser::PrettyFormatter;
use std::io::{Cursor, Read, Write};
use std::sync::Arc;

/// Options for [`JsonSerializer`].
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct JsonSettings {
    /// Pretty-print with this indent string. Output is compact when unset.
    pub indent: Option<String>,
}

/// JSON implementation of [`Serializer`] backed by `serde_json`.
#[derive(Debug, Clone)]
pub struct JsonSerializer {
    name: String,
    settings: Option<Arc<JsonSettings>>,
}

impl JsonSerializer {
    pub fn new(name: Option<&str>, settings: Option<Arc<JsonSettings>>) -> Self {
        Self {
            name: normalize_name(name),
            settings,
        }
    }

    pub fn settings(&self) -> Option<&Arc<JsonSettings>> {
        self.settings.as_ref()
    }

    fn codec<'a, T>(&'a self, ty: &'a TypeContract<T>) -> JsonCodec<'a, T> {
        JsonCodec {
            ty,
            settings: self.settings.as_deref(),
        }
    }
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Codec scoped to one target type, built fresh for every call.
struct JsonCodec<'a, T> {
    ty: &'a TypeContract<T>,
    settings: Option<&'a JsonSettings>,
}

impl<T> JsonCodec<'_, T> {
    fn write_object<W: Write>(&self, writer: W, item: &T) -> Result<()>
    where
        T: Serialize,
    {
        let indent = self.settings.and_then(|s| s.indent.as_deref());
        let res = match indent {
            Some(indent) => {
                let formatter = PrettyFormatter::with_indent(indent.as_bytes());
                let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
                item.serialize(&mut ser)
            }
            None => serde_json::to_writer(writer, item),
        };
        res.map_err(|e| {
            tracing::debug!(contract = self.ty.name(), error = %e, "json encode failed");
            Error::encode(e)
        })
    }

    fn read_object<R: Read>(&self, reader: R) -> Result<T>
    where
        T: Deserialize,
    {
        serde_json::from_reader(reader).map_err(|e: serde_json::Error| {
            tracing::debug!(contract = self.ty.name(), error = %e, "json decode failed");
            Error::decode(e)
        })
    }
}

impl Serializer for JsonSerializer {

    fn name(&self) -> &str {
        &self.name
    }

    fn serialize_to_stream<T: Serialize>(
        &self,
        stream: Option<&mut dyn Write>,
        item: Option<&T>,
        ty: Option<&TypeContract<T>>,
    ) -> Result<()> {
        let stream = stream.required("stream")?;
        let item = item.required("item")?;
        let ty = ty.required("type")?;
        tracing::trace!(serializer = %self.name, contract = ty.name(), "json serialize_to_stream");

        self.codec(ty).write_object(stream, item)
    }

    fn deserialize_from_stream<T: Deserialize>(
        &self,
        stream: Option<&mut dyn Read>,
        ty: Option<&TypeContract<T>>,
    ) -> Result<T> {
        let stream = stream.required("stream")?;
        let ty = ty.required("type")?;
        tracing::trace!(serializer = %self.name, contract = ty.name(), "json deserialize_from_stream");

        self.codec(ty).read_object(stream)
    }

    fn serialize_to_string<T: Serialize>(
        &self,
        item: Option<&T>,
        ty: Option<&TypeContract<T>>,
    ) -> Result<String> {
        let item = item.required("item")?;
        let ty = ty.required("type")?;
        tracing::trace!(serializer = %self.name, contract = ty.name(), "json serialize_to_string");

        let mut buffer = Vec::new();
        self.codec(ty).write_object(&mut buffer, item)?;

        String::from_utf8(buffer).map_err(Error::encode)
    }

    fn deserialize_from_string<T: Deserialize>(
        &self,
        data: Option<&str>,
        ty: Option<&TypeContract<T>>,
    ) -> Result<T> {
        let data = data.required("data")?;
        let ty = ty.required("type")?;
        tracing::trace!(serializer = %self.name, contract = ty.name(), "json deserialize_from_string");

        let buffer = Cursor::new(data.as_bytes());
        self.codec(ty).read_object(buffer)
    }

}
