//! Dispatch from value types to deserializers

use std::any::Any;

use hashbrown::HashMap;

use super::context::DeserializeContext;
use super::contracts::RawDeserializer;
use crate::error::{Error, Result, not_implemented};
use crate::events::TokenSource;
use crate::format::FormatDescriptor;
use crate::registry::TypeKey;

trait ErasedDeserializer<F: FormatDescriptor> {
    fn execute_erased(
        &self,
        source: &mut dyn TokenSource<F::Token>,
        ctx: &DeserializeContext<'_, F>,
        count: usize,
    ) -> Result<Box<dyn Any>>;
}

impl<F, R> ErasedDeserializer<F> for R
where
    F: FormatDescriptor,
    R: RawDeserializer<F>,
    R::Output: 'static,
{
    fn execute_erased(
        &self,
        source: &mut dyn TokenSource<F::Token>,
        ctx: &DeserializeContext<'_, F>,
        count: usize,
    ) -> Result<Box<dyn Any>> {
        let value = self.execute(source, ctx, count)?;
        Ok(Box::new(value))
    }
}

/// Deserializers keyed by the type they produce.
///
/// Pairs with the [`TypeRegistry`](crate::registry::TypeRegistry): the
/// registry says which type a property holds, the table knows how to build
/// it.
pub struct DeserializerTable<F: FormatDescriptor> {
    entries: HashMap<TypeKey, Box<dyn ErasedDeserializer<F>>>,
}

impl<F: FormatDescriptor> DeserializerTable<F> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registers `deserializer` as the strategy producing `R::Output`.
    ///
    /// Replaces any earlier entry for the same output type.
    pub fn insert<R>(&mut self, deserializer: R)
    where
        R: RawDeserializer<F> + 'static,
        R::Output: 'static,
    {
        let key = TypeKey::of::<R::Output>();
        if self.entries.insert(key, Box::new(deserializer)).is_some() {
            tracing::debug!(value = key.name(), "replacing registered deserializer");
        }
    }

    #[must_use]
    pub fn contains(&self, key: TypeKey) -> bool {
        self.entries.contains_key(&key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Runs the deserializer registered for `key`, boxing its output.
    ///
    /// # Errors
    ///
    /// `NotImplemented` if nothing is registered for `key`.
    pub fn execute_dyn(
        &self,
        key: TypeKey,
        source: &mut dyn TokenSource<F::Token>,
        ctx: &DeserializeContext<'_, F>,
        count: usize,
    ) -> Result<Box<dyn Any>> {
        let entry = self
            .entries
            .get(&key)
            .ok_or_else(|| not_implemented(key.name()))?;
        entry.execute_erased(source, ctx, count)
    }

    /// Runs the deserializer registered for `T`.
    ///
    /// # Errors
    ///
    /// `NotImplemented` if nothing is registered for `T`.
    pub fn execute<T: 'static>(
        &self,
        source: &mut dyn TokenSource<F::Token>,
        ctx: &DeserializeContext<'_, F>,
        count: usize,
    ) -> Result<T> {
        let key = TypeKey::of::<T>();
        let value = self.execute_dyn(key, source, ctx, count)?;
        value
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| Error::TypeMismatch {
                expected: key.name(),
            })
    }
}

impl<F: FormatDescriptor> Default for DeserializerTable<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FormatDescriptor> std::fmt::Debug for DeserializerTable<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}
