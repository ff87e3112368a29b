//! Type registry tests

use std::sync::Arc;
use std::thread;

use objstream_core::registry::{TypeKey, TypeRegistry, Typed};

struct Person;
struct Address;
struct Company;
struct Employee;

impl Typed for Person {}
impl Typed for Company {}

#[cfg(test)]
mod type_key_tests {
    use super::*;

    #[test]
    fn keys_compare_by_type() {
        assert_eq!(TypeKey::of::<Person>(), TypeKey::of::<Person>());
        assert_ne!(TypeKey::of::<Person>(), TypeKey::of::<Address>());
        assert!(TypeKey::of::<Address>().is::<Address>());
        assert!(!TypeKey::of::<Address>().is::<Person>());
    }

    #[test]
    fn keys_carry_the_type_name() {
        let key = TypeKey::of::<String>();
        assert_eq!(key.name(), "alloc::string::String");
        assert_eq!(key.to_string(), "alloc::string::String");
        assert_eq!(format!("{key:?}"), "TypeKey(alloc::string::String)");
    }
}

#[cfg(test)]
mod registry_tests {
    use super::*;

    #[test]
    fn registered_type_resolves() {
        let registry = TypeRegistry::new();
        registry.register(TypeKey::of::<Person>(), "address", TypeKey::of::<Address>());

        assert_eq!(
            registry.resolve(TypeKey::of::<Person>(), "address"),
            Some(TypeKey::of::<Address>())
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unknown_pairs_resolve_to_nothing() {
        let registry = TypeRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.resolve(TypeKey::of::<Person>(), "address"), None);

        registry.register_for::<Person, Address>("address");
        assert_eq!(registry.resolve_for::<Person>("employer"), None);
        assert_eq!(registry.resolve_for::<Company>("address"), None);
    }

    #[test]
    fn last_registration_wins() {
        let registry = TypeRegistry::new();
        registry.register_for::<Person, Address>("home");
        registry.register_for::<Person, Company>("home");

        assert_eq!(registry.resolve_for::<Person>("home"), Some(TypeKey::of::<Company>()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn properties_are_scoped_by_owner() {
        let registry = TypeRegistry::new();
        registry.register_for::<Person, Address>("location");
        registry.register_for::<Company, Employee>("location");

        assert_eq!(registry.resolve_for::<Person>("location"), Some(TypeKey::of::<Address>()));
        assert_eq!(registry.resolve_for::<Company>("location"), Some(TypeKey::of::<Employee>()));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn global_registry_is_shared() {
        struct GlobalOwner;
        struct GlobalValue;

        TypeRegistry::global().register_for::<GlobalOwner, GlobalValue>("value");
        assert_eq!(
            TypeRegistry::global().resolve_for::<GlobalOwner>("value"),
            Some(TypeKey::of::<GlobalValue>())
        );
        assert!(std::ptr::eq(TypeRegistry::global(), TypeRegistry::global()));
    }

    #[test]
    fn concurrent_registration_is_safe() {
        let registry = Arc::new(TypeRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    registry.register_for::<Person, Address>(format!("field_{i}"));
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("registration thread");
        }

        assert_eq!(registry.len(), 8);
        assert_eq!(registry.resolve_for::<Person>("field_3"), Some(TypeKey::of::<Address>()));
    }
}

#[cfg(test)]
mod typed_tests {
    use super::*;

    #[test]
    fn owner_defaults_to_the_implementing_type() {
        let registry = TypeRegistry::new();
        Person::register_type::<Address>(&registry, "address");

        assert_eq!(Person::resolve(&registry, "address"), Some(TypeKey::of::<Address>()));
        assert_eq!(Company::resolve(&registry, "address"), None);
    }

    #[test]
    fn explicit_owner_variants() {
        let registry = TypeRegistry::new();
        Person::register_type_on(
            &registry,
            "staff",
            TypeKey::of::<Employee>(),
            TypeKey::of::<Company>(),
        );

        assert_eq!(Person::resolve(&registry, "staff"), None);
        assert_eq!(
            Person::resolve_on(&registry, "staff", TypeKey::of::<Company>()),
            Some(TypeKey::of::<Employee>())
        );
        assert_eq!(Company::resolve(&registry, "staff"), Some(TypeKey::of::<Employee>()));
    }
}
