use std::io::{Read, Write};

use crate::{
    Result, TypeContract,
    serde::{Serialize, de::DeserializeOwned},
};

/// Name given to serializers constructed without one.
pub const DEFAULT_NAME: &str = "default";

/// Resolves an optional serializer name, falling back to [`DEFAULT_NAME`].
pub fn normalize_name(name: Option<&str>) -> String {
    name.unwrap_or(DEFAULT_NAME).to_owned()
}

/// A named strategy converting typed values to and from one wire format.
///
/// Every argument a caller may leave out is an `Option`. Implementations check
/// them in declaration order and fail with
/// [`Error::ArgumentNull`](crate::Error::ArgumentNull) naming the first absent
/// one before touching the codec. Codec failures are returned as
/// [`Error::Encode`](crate::Error::Encode) or
/// [`Error::Decode`](crate::Error::Decode) carrying the codec's own error.
pub trait Serializer: Send + Sync {

    /// Name used to select this serializer.
    fn name(&self) -> &str;

    /// Writes `item`, encoded as `ty`, to `stream` at its current position.
    fn serialize_to_stream<T: Serialize>(
        &self,
        stream: Option<&mut dyn Write>,
        item: Option<&T>,
        ty: Option<&TypeContract<T>>,
    ) -> Result<()>;

    /// Reads `stream` to completion and decodes it as `ty`.
    ///
    /// The stream is neither closed nor rewound.
    fn deserialize_from_stream<T: DeserializeOwned>(
        &self,
        stream: Option<&mut dyn Read>,
        ty: Option<&TypeContract<T>>,
    ) -> Result<T>;

    fn serialize_to_string<T: Serialize>(
        &self,
        item: Option<&T>,
        ty: Option<&TypeContract<T>>,
    ) -> Result<String>;

    /// Decodes `data` as `ty`. An empty string counts as present.
    fn deserialize_from_string<T: DeserializeOwned>(
        &self,
        data: Option<&str>,
        ty: Option<&TypeContract<T>>,
    ) -> Result<T>;

}
