//! Duplicate subsystem title detection
//!
//! Two subsystems registered under the same title would share preference
//! keys. A [`Registrar`] catches that. It is an explicit value: the
//! application or the test harness owns it, and tests call
//! [`Registrar::reset`] between runs.

use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrarError {
    #[error("Subsystem <{0}> already registered")]
    AlreadyRegistered(String),

    #[error("Registrar lock poisoned")]
    LockPoisoned,
}

#[derive(Debug, Default)]
pub struct Registrar {
    titles: Mutex<BTreeSet<String>>,
}

impl Registrar {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_titles(&self) -> Result<MutexGuard<'_, BTreeSet<String>>, RegistrarError> {
        self.titles.lock().map_err(|_| RegistrarError::LockPoisoned)
    }

    /// Record `title`, failing if it was already recorded
    pub fn register(&self, title: &str) -> Result<(), RegistrarError> {
        if !self.lock_titles()?.insert(title.to_string()) {
            return Err(RegistrarError::AlreadyRegistered(title.to_string()));
        }
        debug!("Registered subsystem <{}>", title);
        Ok(())
    }

    pub fn contains(&self, title: &str) -> Result<bool, RegistrarError> {
        Ok(self.lock_titles()?.contains(title))
    }

    pub fn len(&self) -> Result<usize, RegistrarError> {
        Ok(self.lock_titles()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, RegistrarError> {
        Ok(self.lock_titles()?.is_empty())
    }

    /// Registered titles in sorted order
    pub fn titles(&self) -> Result<Vec<String>, RegistrarError> {
        Ok(self.lock_titles()?.iter().cloned().collect())
    }

    /// Forget every registered title
    pub fn reset(&self) -> Result<(), RegistrarError> {
        self.lock_titles()?.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn register_rejects_duplicate_title() {
        let registrar = Registrar::new();
        registrar.register("Sync").unwrap();

        assert_eq!(
            registrar.register("Sync"),
            Err(RegistrarError::AlreadyRegistered("Sync".to_string()))
        );
        assert_eq!(registrar.len().unwrap(), 1);
    }

    #[test]
    fn reset_allows_registering_again() {
        let registrar = Registrar::new();
        registrar.register("Sync").unwrap();
        registrar.reset().unwrap();

        assert!(registrar.is_empty().unwrap());
        registrar.register("Sync").unwrap();
        assert!(registrar.contains("Sync").unwrap());
    }

    #[test]
    fn titles_are_sorted() {
        let registrar = Registrar::new();
        for title in ["Sync", "App", "Search"] {
            registrar.register(title).unwrap();
        }

        assert_eq!(registrar.titles().unwrap(), vec!["App", "Search", "Sync"]);
    }

    #[test]
    fn concurrent_registration_admits_exactly_one() {
        let registrar = Arc::new(Registrar::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registrar = registrar.clone();
                std::thread::spawn(move || registrar.register("App").is_ok())
            })
            .collect();

        let admitted = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(admitted, 1);
    }
}
