use super::core::TypeRegistry;
use super::type_key::TypeKey;

/// Self-registration helpers for types that declare nested property types.
///
/// Every method defaults the owning type to `Self`; the `_on` variants take
/// an explicit owner for cross-type registration. Implementing this trait is
/// optional: [`TypeRegistry`] offers the same operations directly.
///
/// ```
/// use objstream_core::registry::{TypeKey, TypeRegistry, Typed};
///
/// struct Address;
/// struct Person;
/// impl Typed for Person {}
///
/// let registry = TypeRegistry::new();
/// Person::register_type::<Address>(&registry, "address");
/// assert_eq!(Person::resolve(&registry, "address"), Some(TypeKey::of::<Address>()));
/// ```
pub trait Typed: 'static {
    fn register_type<V: ?Sized + 'static>(registry: &TypeRegistry, property: &str) {
        registry.register(TypeKey::of::<Self>(), property, TypeKey::of::<V>());
    }

    fn register_type_on(registry: &TypeRegistry, property: &str, value: TypeKey, owner: TypeKey) {
        registry.register(owner, property, value);
    }

    fn resolve(registry: &TypeRegistry, property: &str) -> Option<TypeKey> {
        registry.resolve(TypeKey::of::<Self>(), property)
    }

    fn resolve_on(registry: &TypeRegistry, property: &str, owner: TypeKey) -> Option<TypeKey> {
        registry.resolve(owner, property)
    }
}
