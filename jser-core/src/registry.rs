use crate::serializer::{DEFAULT_NAME, Serializer};
use crate::{Error, Result};

use std::collections::HashMap;

/// Serializers keyed by their name.
#[derive(Debug)]
pub struct SerializerRegistry<S: Serializer> {

    serializers: HashMap<String, S>,

}

impl<S: Serializer> Default for SerializerRegistry<S> {
    fn default() -> Self {
        Self { serializers: HashMap::new() }
    }
}

impl<S: Serializer> SerializerRegistry<S> {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, serializer: S) -> Result<()> {
        let name = serializer.name().to_owned();
        if self.serializers.contains_key(&name) {
            return Err(Error::SerializerRegistered(name));
        }

        tracing::debug!(serializer = %name, "registering serializer");
        self.serializers.insert(name, serializer);

        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&S> {
        self.serializers
            .get(name)
            .ok_or_else(|| Error::SerializerNotFound(name.to_owned()))
    }

    /// The serializer registered under [`DEFAULT_NAME`].
    pub fn default_serializer(&self) -> Result<&S> {
        self.get(DEFAULT_NAME)
    }

    pub fn remove(&mut self, name: &str) -> Option<S> {
        self.serializers.remove(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.serializers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.serializers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.serializers.is_empty()
    }

}
