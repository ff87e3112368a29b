use std::any::Any;

use super::contracts::RawDeserializer;
use super::table::DeserializerTable;
use crate::config::DeserializeConfig;
use crate::error::Result;
use crate::events::TokenSource;
use crate::format::FormatDescriptor;
use crate::registry::{TypeKey, TypeRegistry};

/// Everything a deserializer needs besides the tokens themselves.
pub struct DeserializeContext<'c, F: FormatDescriptor> {
    format: &'c F,
    registry: &'c TypeRegistry,
    config: DeserializeConfig,
    table: Option<&'c DeserializerTable<F>>,
}

impl<'c, F: FormatDescriptor> DeserializeContext<'c, F> {
    /// Context over `format` using the process-wide registry and defaults.
    pub fn new(format: &'c F) -> Self {
        Self {
            format,
            registry: TypeRegistry::global(),
            config: DeserializeConfig::default(),
            table: None,
        }
    }

    #[must_use]
    pub fn with_registry(mut self, registry: &'c TypeRegistry) -> Self {
        self.registry = registry;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: DeserializeConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_table(mut self, table: &'c DeserializerTable<F>) -> Self {
        self.table = Some(table);
        self
    }

    #[inline]
    pub fn format(&self) -> &'c F {
        self.format
    }

    #[inline]
    pub fn registry(&self) -> &'c TypeRegistry {
        self.registry
    }

    #[inline]
    pub fn config(&self) -> &DeserializeConfig {
        &self.config
    }

    #[inline]
    pub fn table(&self) -> Option<&'c DeserializerTable<F>> {
        self.table
    }

    /// Runs `deserializer` against `source` with this context.
    ///
    /// Nested reconstruction passes the parent's bounded reader as `source`
    /// and the number of object starts it already consumed as `count`.
    ///
    /// # Errors
    ///
    /// Whatever the deserializer returns.
    pub fn execute<D>(
        &self,
        deserializer: &D,
        source: &mut dyn TokenSource<F::Token>,
        count: usize,
    ) -> Result<D::Output>
    where
        D: RawDeserializer<F> + ?Sized,
    {
        deserializer.execute(source, self, count)
    }

    /// Reconstructs the value stored under `property` of `owner`.
    ///
    /// Returns `Ok(None)` when the registry has no type for the property,
    /// leaving `source` untouched so the caller can fall back to the
    /// format's native value. With a registered type, the context's
    /// dispatch table runs the matching deserializer.
    ///
    /// # Errors
    ///
    /// `NotImplemented` if the type is registered but no table is attached
    /// or the table has no entry for it, otherwise whatever the deserializer
    /// returns.
    pub fn execute_property(
        &self,
        owner: TypeKey,
        property: &str,
        source: &mut dyn TokenSource<F::Token>,
        count: usize,
    ) -> Result<Option<Box<dyn Any>>> {
        let Some(value_type) = self.registry.resolve(owner, property) else {
            return Ok(None);
        };
        let table = self
            .table
            .ok_or_else(|| crate::error::not_implemented(value_type.name()))?;
        table.execute_dyn(value_type, source, self, count).map(Some)
    }
}

impl<F: FormatDescriptor> Clone for DeserializeContext<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: FormatDescriptor> Copy for DeserializeContext<'_, F> {}

impl<F: FormatDescriptor> std::fmt::Debug for DeserializeContext<'_, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeserializeContext")
            .field("config", &self.config)
            .field("has_table", &self.table.is_some())
            .finish_non_exhaustive()
    }
}
