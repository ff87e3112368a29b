//! Process-wide property type table

use std::sync::LazyLock;

use dashmap::DashMap;
use hashbrown::HashMap;

use super::type_key::TypeKey;

static GLOBAL_REGISTRY: LazyLock<TypeRegistry> = LazyLock::new(TypeRegistry::new);

/// Table mapping `(owner type, property name)` to a value type.
///
/// Last registration for a key wins. Entries are never removed. The shared
/// instance lives for the whole process ([`TypeRegistry::global`]); tests
/// and embedders that need isolation create their own with
/// [`TypeRegistry::new`].
///
/// Registration is meant to happen during start-up. Concurrent registration
/// and lookup is memory-safe but gives no ordering guarantees.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: DashMap<TypeKey, HashMap<String, TypeKey>>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            types: DashMap::new(),
        }
    }

    /// The process-wide registry.
    #[must_use]
    pub fn global() -> &'static TypeRegistry {
        &GLOBAL_REGISTRY
    }

    /// Records that `property` of `owner` holds values of type `value`.
    pub fn register(&self, owner: TypeKey, property: impl Into<String>, value: TypeKey) {
        let property = property.into();
        let mut properties = self.types.entry(owner).or_default();
        if let Some(previous) = properties.insert(property.clone(), value)
            && previous != value
        {
            tracing::debug!(
                owner = owner.name(),
                property = %property,
                previous = previous.name(),
                value = value.name(),
                "overwriting registered property type"
            );
        }
    }

    /// Registered value type for `property` of `owner`, if any.
    #[must_use]
    pub fn resolve(&self, owner: TypeKey, property: &str) -> Option<TypeKey> {
        self.types
            .get(&owner)
            .and_then(|properties| properties.get(property).copied())
    }

    /// Typed form of [`register`](Self::register).
    pub fn register_for<O: ?Sized + 'static, V: ?Sized + 'static>(&self, property: impl Into<String>) {
        self.register(TypeKey::of::<O>(), property, TypeKey::of::<V>());
    }

    /// Typed form of [`resolve`](Self::resolve).
    #[must_use]
    pub fn resolve_for<O: ?Sized + 'static>(&self, property: &str) -> Option<TypeKey> {
        self.resolve(TypeKey::of::<O>(), property)
    }

    /// Total number of registered `(owner, property)` pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.iter().map(|entry| entry.value().len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
