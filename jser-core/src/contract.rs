use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

/// Describes the shape a codec encodes or decodes against.
///
/// The type parameter fixes the Rust type; the contract name is the name the
/// type is known by on the wire (the XML root element, for instance). By
/// default it is the unqualified Rust type name with generic arguments removed.
pub struct TypeContract<T> {
    name: Cow<'static, str>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> TypeContract<T> {
    /// Contract named after the Rust type.
    ///
    /// Tuples, arrays, slices and references have names such as `(i32, i32)`
    /// or `[u8; 4]` that are not valid XML element names, so XML encoding fails
    /// for them. Give those types a name with [`TypeContract::named`].
    pub fn of() -> Self {
        Self::named(short_type_name(std::any::type_name::<T>()))
    }

    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        TypeContract {
            name: name.into(),
            _marker: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T> Default for TypeContract<T> {
    fn default() -> Self {
        Self::of()
    }
}

impl<T> Clone for TypeContract<T> {
    fn clone(&self) -> Self {
        TypeContract {
            name: self.name.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for TypeContract<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeContract")
            .field("name", &self.name)
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
