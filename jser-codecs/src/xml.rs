use crate::{Deserialize, Serialize};
use jser_core::{
    Error, Result, Serializer, TypeContract,
    guard::Required,
    normalize_name,
};
use quick_xml::events::{BytesText, Event};
use quick_xml::{Reader, Writer};
use std::fmt;
use std::io::{self, Read, Write};
use std::sync::Arc;

const DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Indentation used when pretty-printing XML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct XmlIndent {
    pub character: char,
    pub size: usize,
}

impl Default for XmlIndent {
    fn default() -> Self {
        Self { character: ' ', size: 2 }
    }
}

/// Options for [`XmlSerializer`].
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct XmlSettings {
    /// Root element name. Defaults to the contract name of the target type.
    pub root_name: Option<String>,
    pub indent: Option<XmlIndent>,
    /// Write an XML declaration before the root element.
    pub declaration: bool,
    /// Write `<a></a>` instead of `<a/>`.
    pub expand_empty_elements: bool,
}

/// The document's root element is not the one the target type expects.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected root element '{expected}', found '{found}'")]
pub struct RootMismatch {
    pub expected: String,
    pub found: String,
}

/// XML implementation of [`Serializer`] backed by `quick-xml`.
#[derive(Debug, Clone)]
pub struct XmlSerializer {
    name: String,
    settings: Option<Arc<XmlSettings>>,
}

impl XmlSerializer {
    pub fn new(name: Option<&str>, settings: Option<Arc<XmlSettings>>) -> Self {
        Self {
            name: normalize_name(name),
            settings,
        }
    }

    pub fn settings(&self) -> Option<&Arc<XmlSettings>> {
        self.settings.as_ref()
    }

    fn codec<'a, T>(&'a self, ty: &'a TypeContract<T>) -> XmlCodec<'a, T> {
        XmlCodec {
            ty,
            settings: self.settings.as_deref(),
        }
    }
}

impl Default for XmlSerializer {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Codec scoped to one target type, built fresh for every call.
struct XmlCodec<'a, T> {
    ty: &'a TypeContract<T>,
    settings: Option<&'a XmlSettings>,
}

impl<T> XmlCodec<'_, T> {
    fn root_name(&self) -> &str {
        self.settings
            .and_then(|s| s.root_name.as_deref())
            .unwrap_or(self.ty.name())
    }

    fn write_object<W: fmt::Write>(&self, mut writer: W, item: &T) -> Result<()>
    where
        T: Serialize,
    {
        let settings = self.settings.cloned().unwrap_or_default();

        let mut body = String::new();
        let mut ser = quick_xml::se::Serializer::with_root(&mut body, Some(self.root_name()))
            .map_err(Error::encode)?;
        if let Some(indent) = settings.indent {
            ser.indent(indent.character, indent.size);
        }
        ser.expand_empty_elements(settings.expand_empty_elements);

        item.serialize(ser).map_err(|e| {
            tracing::debug!(contract = self.ty.name(), error = %e, "xml encode failed");
            Error::encode(e)
        })?;
        let body = protect_text(body)?;

        if settings.declaration {
            writer.write_str(DECLARATION).map_err(Error::encode)?;
        }
        writer.write_str(&body).map_err(Error::encode)?;

        Ok(())
    }

    fn read_object(&self, data: &str) -> Result<T>
    where
        T: Deserialize,
    {
        self.check_root(data)?;
        quick_xml::de::from_str(data).map_err(|e| {
            tracing::debug!(contract = self.ty.name(), error = %e, "xml decode failed");
            Error::decode(e)
        })
    }

    /// Fails when the first element is not named after the contract.
    ///
    /// Documents without a readable root are left to the deserializer to reject.
    fn check_root(&self, data: &str) -> Result<()> {
        let mut reader = Reader::from_str(data);
        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                    let expected = self.root_name();
                    let found = e.local_name();
                    if found.as_ref() == expected.as_bytes() {
                        return Ok(());
                    }

                    let mismatch = RootMismatch {
                        expected: expected.to_owned(),
                        found: String::from_utf8_lossy(found.as_ref()).into_owned(),
                    };
                    tracing::debug!(contract = self.ty.name(), error = %mismatch, "xml decode failed");
                    return Err(Error::decode(mismatch));
                }
                Ok(Event::Eof) | Err(_) => return Ok(()),
                Ok(_) => {}
            }
        }
    }
}

fn is_xml_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Rewrites element text so whitespace trimming on read cannot change it.
///
/// Leading and trailing whitespace of a text-only element, and every carriage
/// return inside it, become character references. Indentation between
/// elements is left alone.
fn protect_text(body: String) -> Result<String> {
    if !body.contains(is_xml_whitespace) {
        return Ok(body);
    }

    let mut reader = Reader::from_str(&body);
    let mut writer = Writer::new(Vec::with_capacity(body.len()));
    let mut after_start = false;
    let mut pending: Option<BytesText<'_>> = None;

    loop {
        let event = reader.read_event().map_err(Error::encode)?;
        if after_start {
            if let Event::Text(text) = event {
                pending = Some(text);
                after_start = false;
                continue;
            }
        }

        if let Some(text) = pending.take() {
            let text = match event {
                Event::End(_) => {
                    let raw = std::str::from_utf8(&text).map_err(Error::encode)?;
                    BytesText::from_escaped(escape_edges(raw))
                }
                _ => text,
            };
            writer.write_event(Event::Text(text)).map_err(Error::encode)?;
        }

        if let Event::Eof = event {
            break;
        }
        after_start = matches!(event, Event::Start(_));
        writer.write_event(event).map_err(Error::encode)?;
    }

    String::from_utf8(writer.into_inner()).map_err(Error::encode)
}

fn escape_edges(raw: &str) -> String {
    let inner = raw.trim_matches(is_xml_whitespace);
    let lead = raw.len() - raw.trim_start_matches(is_xml_whitespace).len();
    let mut out = String::with_capacity(raw.len() + 16);

    if inner.is_empty() {
        raw.chars().for_each(|c| push_char_ref(&mut out, c));
        return out;
    }

    raw[..lead].chars().for_each(|c| push_char_ref(&mut out, c));
    for c in inner.chars() {
        match c {
            '\r' => push_char_ref(&mut out, c),
            _ => out.push(c),
        }
    }
    raw[lead + inner.len()..].chars().for_each(|c| push_char_ref(&mut out, c));

    out
}

fn push_char_ref(out: &mut String, c: char) {
    out.push_str(&format!("&#{};", u32::from(c)));
}

/// Text writer over a byte stream. Keeps the I/O error that `fmt::Write` cannot carry.
struct StreamText<'a> {
    inner: &'a mut dyn Write,
    error: Option<io::Error>,
}

impl fmt::Write for StreamText<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

impl Serializer for XmlSerializer {

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
        tracing::trace!(serializer = %self.name, contract = ty.name(), "xml serialize_to_stream");

        let mut text = StreamText { inner: stream, error: None };
        let res = self.codec(ty).write_object(&mut text, item);
        match text.error {
            Some(e) => Err(Error::Io(e)),
            None => res,
        }
    }

    fn deserialize_from_stream<T: Deserialize>(
        &self,
        stream: Option<&mut dyn Read>,
        ty: Option<&TypeContract<T>>,
    ) -> Result<T> {
        let stream = stream.required("stream")?;
        let ty = ty.required("type")?;
        tracing::trace!(serializer = %self.name, contract = ty.name(), "xml deserialize_from_stream");

        let mut bytes = Vec::new();
        stream.read_to_end(&mut bytes)?;
        let data = String::from_utf8(bytes).map_err(Error::decode)?;

        self.codec(ty).read_object(&data)
    }

    fn serialize_to_string<T: Serialize>(
        &self,
        item: Option<&T>,
        ty: Option<&TypeContract<T>>,
    ) -> Result<String> {
        let item = item.required("item")?;
        let ty = ty.required("type")?;
        tracing::trace!(serializer = %self.name, contract = ty.name(), "xml serialize_to_string");

        let mut text = String::new();
        self.codec(ty).write_object(&mut text, item)?;

        Ok(text)
    }

    fn deserialize_from_string<T: Deserialize>(
        &self,
        data: Option<&str>,
        ty: Option<&TypeContract<T>>,
    ) -> Result<T> {
        let data = data.required("data")?;
        let ty = ty.required("type")?;
        tracing::trace!(serializer = %self.name, contract = ty.name(), "xml deserialize_from_string");

        self.codec(ty).read_object(data)
    }

}
