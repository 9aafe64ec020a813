//! Singleton
//!
//! There is no hidden global: the driver builds one `SettingsRegistry` and
//! passes it around. The registry creates `AppSettings` on first request and
//! hands out handles to that same instance for the rest of its lifetime.
//! Single-threaded only (`Rc`/`RefCell`).

use std::cell::{OnceCell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Settings with attributes added at runtime.
#[derive(Debug, Default)]
pub struct AppSettings {
    attributes: RefCell<BTreeMap<String, String>>,
}

impl AppSettings {
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.borrow_mut().insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.attributes.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.attributes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.borrow().is_empty()
    }
}

/// Shared handle to the one `AppSettings`. Equality is identity.
#[derive(Debug, Clone)]
pub struct SettingsHandle(Rc<AppSettings>);

impl SettingsHandle {
    pub fn same_instance(&self, other: &SettingsHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Address of the shared instance, for printing.
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }
}

impl PartialEq for SettingsHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same_instance(other)
    }
}

impl Eq for SettingsHandle {}

impl Deref for SettingsHandle {
    type Target = AppSettings;

    fn deref(&self) -> &AppSettings {
        &self.0
    }
}

impl fmt::Display for SettingsHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AppSettings at {:#x}", self.id())
    }
}

#[derive(Debug, Default)]
pub struct SettingsRegistry {
    instance: OnceCell<Rc<AppSettings>>,
}

impl SettingsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn instance(&self) -> SettingsHandle {
        let shared = self.instance.get_or_init(|| {
            tracing::debug!("creating the AppSettings instance");
            Rc::new(AppSettings::default())
        });
        SettingsHandle(Rc::clone(shared))
    }

    pub fn is_initialized(&self) -> bool {
        self.instance.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_calls_share_identity() {
        let registry = SettingsRegistry::new();
        assert!(!registry.is_initialized());

        let first = registry.instance();
        let second = registry.instance();

        assert!(registry.is_initialized());
        assert_eq!(first, second);
        assert!(first.same_instance(&second));
        assert_eq!(first.id(), second.id());
    }

    #[test]
    fn test_attribute_set_on_one_is_seen_by_other() {
        let registry = SettingsRegistry::new();
        let first = registry.instance();
        let second = registry.instance();

        first.set("name", "Joao");
        assert_eq!(second.get("name").as_deref(), Some("Joao"));
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_separate_registries_are_separate_instances() {
        let a = SettingsRegistry::new().instance();
        let b = SettingsRegistry::new().instance();
        assert_ne!(a, b);
        assert!(b.is_empty());
    }
}
