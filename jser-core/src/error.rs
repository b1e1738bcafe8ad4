pub type Result<T> = std::result::Result<T, Error>;

/// Error raised by a codec, kept as-is behind the box.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Value cannot be null. (Parameter '{0}')")]
    ArgumentNull(&'static str),

    #[error("Encode error: {0}")]
    Encode(#[source] BoxError),

    #[error("Decode error: {0}")]
    Decode(#[source] BoxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serializer not found: {0}")]
    SerializerNotFound(String),

    #[error("Serializer already registered: {0}")]
    SerializerRegistered(String),
}

impl Error {
    pub fn encode(err: impl Into<BoxError>) -> Self {
        Error::Encode(err.into())
    }

    pub fn decode(err: impl Into<BoxError>) -> Self {
        Error::Decode(err.into())
    }

    /// Name of the missing parameter, if this is an argument error.
    pub fn param_name(&self) -> Option<&'static str> {
        match self {
            Error::ArgumentNull(param) => Some(*param),
            _ => None,
        }
    }
}
