//! Core `ObjStreamBuilder` structure and configuration methods

use objstream_core::{
    DeserializeConfig, DeserializeContext, DeserializerTable, FormatDescriptor, Parser,
    TypeRegistry,
};

/// Fluent builder binding a format backend to a registry and settings.
///
/// Defaults to the process-wide [`TypeRegistry::global`], no dispatch table
/// and [`DeserializeConfig::default`].
pub struct ObjStreamBuilder<'r, F: FormatDescriptor> {
    pub(crate) parser: Parser<F>,
    pub(crate) registry: &'r TypeRegistry,
    pub(crate) table: Option<&'r DeserializerTable<F>>,
    pub(crate) config: DeserializeConfig,
}

impl<F: FormatDescriptor> ObjStreamBuilder<'static, F> {
    /// Create a builder over `format`
    pub fn new(format: F) -> Self {
        Self {
            parser: Parser::new(format),
            registry: TypeRegistry::global(),
            table: None,
            config: DeserializeConfig::default(),
        }
    }
}

impl<'r, F: FormatDescriptor> ObjStreamBuilder<'r, F> {
    /// Resolve property types through `registry` instead of the global one
    ///
    /// # Arguments
    /// * `registry` - Registry consulted by reconstruction hooks
    #[must_use]
    pub fn registry<'n>(self, registry: &'n TypeRegistry) -> ObjStreamBuilder<'n, F>
    where
        'r: 'n,
    {
        ObjStreamBuilder {
            parser: self.parser,
            registry,
            table: self.table,
            config: self.config,
        }
    }

    /// Attach a dispatch table for nested reconstruction
    #[must_use]
    pub fn table<'n>(self, table: &'n DeserializerTable<F>) -> ObjStreamBuilder<'n, F>
    where
        'r: 'n,
    {
        ObjStreamBuilder {
            parser: self.parser,
            registry: self.registry,
            table: Some(table),
            config: self.config,
        }
    }

    /// Replace all settings at once
    #[must_use]
    pub fn config(mut self, config: DeserializeConfig) -> Self {
        self.config = config;
        self
    }

    /// Fail when input ends before an object closes (default `true`)
    #[must_use]
    pub fn reject_truncated(mut self, reject: bool) -> Self {
        self.config = self.config.reject_truncated(reject);
        self
    }

    /// Validate token structure while reading (default `false`)
    #[must_use]
    pub fn validate_structure(mut self, validate: bool) -> Self {
        self.config = self.config.validate_structure(validate);
        self
    }

    /// Format backend used for parsing
    pub fn format(&self) -> &F {
        self.parser.format()
    }

    /// Context handed to deserializers
    pub fn context(&self) -> DeserializeContext<'_, F> {
        let ctx = DeserializeContext::new(self.parser.format())
            .with_registry(self.registry)
            .with_config(self.config);
        match self.table {
            Some(table) => ctx.with_table(table),
            None => ctx,
        }
    }
}

impl<F: FormatDescriptor> std::fmt::Debug for ObjStreamBuilder<'_, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjStreamBuilder")
            .field("config", &self.config)
            .field("has_table", &self.table.is_some())
            .finish_non_exhaustive()
    }
}
