//! Per-subsystem handle bundling preferences, release tracking and logging

use std::sync::Arc;

use tracing::{Span, info_span};

use crate::registrar::{Registrar, RegistrarError};
use crate::release::DefaultsVersionStore;
use crate::store::{Defaults, KeyValueStore, Namespace};

/// Everything one subsystem needs from the host
///
/// ```ignore
/// let assets = Assets::new("Sync", None, store.clone(), &config.prefix);
/// assets.register(&registrar)?;
///
/// assets.defaults().set_display("interval", &30)?;
/// assets.log().in_scope(|| info!("Sync started"));
/// ```
pub struct Assets<S: KeyValueStore + ?Sized> {
    title: String,
    category: Option<String>,
    defaults: Defaults<S>,
    span: Span,
}

impl<S: KeyValueStore + ?Sized> Assets<S> {
    /// Create the handle of subsystem `title`
    ///
    /// # Arguments
    /// * `title` - Unique subsystem name, part of every preference key
    /// * `category` - Log category; defaults to `title`
    /// * `store` - Backend shared by all subsystems
    /// * `prefix` - Application-wide key prefix, may be empty
    pub fn new(
        title: impl Into<String>,
        category: Option<String>,
        store: Arc<S>,
        prefix: &str,
    ) -> Self {
        let title = title.into();
        let defaults = Defaults::new(store, Namespace::new(prefix, title.clone()));
        let category_name = category.as_deref().unwrap_or(title.as_str());
        let span = info_span!("subsystem", subsystem = %title, category = %category_name);

        Self {
            title,
            category,
            defaults,
            span,
        }
    }

    /// Create the handle titled after type `T`, e.g. `SyncEngine` for `my_app::sync::SyncEngine`
    pub fn for_type<T: ?Sized>(store: Arc<S>, prefix: &str) -> Self {
        Self::new(short_type_name::<T>(), None, store, prefix)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(&self.title)
    }

    pub fn defaults(&self) -> &Defaults<S> {
        &self.defaults
    }

    /// Span tagging events with this subsystem's title and category
    pub fn log(&self) -> &Span {
        &self.span
    }

    /// Version store kept in this subsystem's preferences
    pub fn version_store(&self) -> DefaultsVersionStore<S> {
        DefaultsVersionStore::new(self.defaults.clone())
    }

    /// Record this subsystem's title, reporting a duplicate
    pub fn register(&self, registrar: &Registrar) -> Result<(), RegistrarError> {
        registrar.register(&self.title)
    }
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or(path)
}
