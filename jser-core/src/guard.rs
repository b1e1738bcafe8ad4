//! Argument checks run before any codec work.

use crate::{Error, Result};

/// Unwraps a required argument, failing with [`Error::ArgumentNull`] naming `param`.
pub fn not_none<T>(value: Option<T>, param: &'static str) -> Result<T> {
    match value {
        Some(value) => Ok(value),
        None => {
            tracing::debug!(param, "required argument is absent");
            Err(Error::ArgumentNull(param))
        }
    }
}

/// Method form of [`not_none`].
pub trait Required<T> {
    fn required(self, param: &'static str) -> Result<T>;
}

impl<T> Required<T> for Option<T> {
    fn required(self, param: &'static str) -> Result<T> {
        not_none(self, param)
    }
}
