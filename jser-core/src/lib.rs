pub mod error;
pub use error::{BoxError, Error, Result};

pub mod guard;

pub mod contract;
pub use contract::TypeContract;

pub mod serializer;
pub use serializer::{DEFAULT_NAME, Serializer, normalize_name};

pub mod registry;
pub use registry::SerializerRegistry;

pub use serde;
