//! Persistence of the last seen version

#[cfg(test)]
use mockall::automock;

use crate::store::{Defaults, KeyValueStore, StoreError};
use crate::version::Version;

/// Key under which the version is stored in the subsystem's preferences
pub const VERSION_KEY: &str = "version";

/// Trait for loading and saving the last recorded version
#[cfg_attr(test, automock)]
pub trait VersionStore: Send + Sync {
    /// Load the recorded version
    ///
    /// # Returns
    /// * `Ok(Some(version))` - A version was recorded and decodes
    /// * `Ok(None)` - Nothing was recorded, or the record is corrupt
    /// * `Err(StoreError)` - The backend failed
    fn load(&self) -> Result<Option<Version>, StoreError>;

    /// Check whether any version was recorded, decodable or not
    fn is_recorded(&self) -> Result<bool, StoreError>;

    /// Record `version`, replacing the previous record
    fn save(&self, version: &Version) -> Result<(), StoreError>;
}

/// [`VersionStore`] writing the canonical string under [`VERSION_KEY`]
pub struct DefaultsVersionStore<S: KeyValueStore + ?Sized> {
    defaults: Defaults<S>,
}

impl<S: KeyValueStore + ?Sized> DefaultsVersionStore<S> {
    pub fn new(defaults: Defaults<S>) -> Self {
        Self { defaults }
    }
}

impl<S: KeyValueStore + ?Sized> VersionStore for DefaultsVersionStore<S> {
    fn load(&self) -> Result<Option<Version>, StoreError> {
        self.defaults.get_parsed(VERSION_KEY)
    }

    fn is_recorded(&self) -> Result<bool, StoreError> {
        self.defaults.contains(VERSION_KEY)
    }

    fn save(&self, version: &Version) -> Result<(), StoreError> {
        self.defaults.set_display(VERSION_KEY, version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, Namespace};
    use std::sync::Arc;

    fn version_store() -> (Arc<MemoryStore>, DefaultsVersionStore<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let defaults = Defaults::new(store.clone(), Namespace::new("acme", "App"));
        (store, DefaultsVersionStore::new(defaults))
    }

    #[test]
    fn save_writes_canonical_string_under_namespaced_key() {
        let (store, versions) = version_store();
        let version = Version::new(2, 0, 1).with_builds(["314"]);

        versions.save(&version).unwrap();

        assert_eq!(
            store.get("acme-App-version").unwrap(),
            Some("2.0.1+314".to_string())
        );
        assert_eq!(versions.load().unwrap(), Some(version));
    }

    #[test]
    fn load_returns_none_when_nothing_recorded() {
        let (_, versions) = version_store();

        assert_eq!(versions.load().unwrap(), None);
        assert!(!versions.is_recorded().unwrap());
    }

    #[test]
    fn corrupt_record_loads_as_none_but_counts_as_recorded() {
        let (store, versions) = version_store();
        store.set("acme-App-version", "garbage").unwrap();

        assert_eq!(versions.load().unwrap(), None);
        assert!(versions.is_recorded().unwrap());
    }
}
