//! Typed, namespaced view over a [`KeyValueStore`]

use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::store::backend::KeyValueStore;
use crate::store::error::StoreError;
use crate::store::namespace::Namespace;

/// Preferences of one subsystem
///
/// Values are stored as text. Scalars and [`FromStr`] types use their display
/// form, structured values use JSON. A stored value that no longer decodes is
/// reported with `warn!` and read back as `None`.
pub struct Defaults<S: KeyValueStore + ?Sized> {
    store: Arc<S>,
    namespace: Namespace,
}

impl<S: KeyValueStore + ?Sized> Clone for Defaults<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            namespace: self.namespace.clone(),
        }
    }
}

impl<S: KeyValueStore + ?Sized> Defaults<S> {
    pub fn new(store: Arc<S>, namespace: Namespace) -> Self {
        Self { store, namespace }
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// The fully expanded key as written to the backend
    pub fn raw_key(&self, key: &str) -> String {
        self.namespace.expand(key)
    }

    pub fn get_string(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.store.get(&self.raw_key(key))
    }

    pub fn set_string(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.store.set(&self.raw_key(key), value)
    }

    /// Store `value`, or delete the key when `value` is `None`
    pub fn set_optional_string(&self, key: &str, value: Option<&str>) -> Result<(), StoreError> {
        match value {
            Some(value) => self.set_string(key, value),
            None => self.delete(key),
        }
    }

    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.store.delete(&self.raw_key(key))
    }

    pub fn contains(&self, key: &str) -> Result<bool, StoreError> {
        self.store.contains(&self.raw_key(key))
    }

    /// Read a value stored in its display form
    pub fn get_parsed<V>(&self, key: &str) -> Result<Option<V>, StoreError>
    where
        V: FromStr,
        V::Err: Display,
    {
        let Some(raw) = self.get_string(key)? else {
            return Ok(None);
        };

        Ok(raw
            .parse::<V>()
            .inspect_err(|e| warn!("Failed to decode {}: {}", self.raw_key(key), e))
            .ok())
    }

    pub fn set_display<V: Display + ?Sized>(&self, key: &str, value: &V) -> Result<(), StoreError> {
        self.set_string(key, &value.to_string())
    }

    pub fn set_optional_display<V: Display>(
        &self,
        key: &str,
        value: Option<&V>,
    ) -> Result<(), StoreError> {
        match value {
            Some(value) => self.set_display(key, value),
            None => self.delete(key),
        }
    }

    /// Read a JSON-encoded value
    pub fn get_json<V: DeserializeOwned>(&self, key: &str) -> Result<Option<V>, StoreError> {
        let Some(raw) = self.get_string(key)? else {
            return Ok(None);
        };

        Ok(serde_json::from_str(&raw)
            .inspect_err(|e| warn!("Failed to decode {}: {}", self.raw_key(key), e))
            .ok())
    }

    pub fn set_json<V: Serialize + ?Sized>(&self, key: &str, value: &V) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(value)?;
        self.set_string(key, &encoded)
    }

    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, StoreError> {
        self.get_parsed(key)
    }

    pub fn get_i64(&self, key: &str) -> Result<Option<i64>, StoreError> {
        self.get_parsed(key)
    }

    pub fn get_f64(&self, key: &str) -> Result<Option<f64>, StoreError> {
        self.get_parsed(key)
    }
}
