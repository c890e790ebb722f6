//! Storage backend trait

#[cfg(test)]
use mockall::automock;

use crate::store::error::StoreError;

/// Trait for a flat string-to-string store
///
/// Keys are opaque to the backend; namespacing happens in
/// [`Defaults`](crate::store::Defaults).
#[cfg_attr(test, automock)]
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Check whether `key` has a value
    fn contains(&self, key: &str) -> Result<bool, StoreError>;
}
