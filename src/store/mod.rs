//! Namespaced key-value preferences
//!
//! Subsystems share one underlying store. Each one sees it through a
//! [`Defaults`] view whose keys are expanded with the application prefix and
//! the subsystem title, so `"version"` of subsystem `"App"` under prefix
//! `"acme"` lands at `"acme-App-version"`.
//!
//! # Modules
//!
//! - [`backend`]: The `KeyValueStore` trait implemented by storage backends
//! - [`memory`]: In-memory backend
//! - [`namespace`]: Key expansion rules
//! - [`defaults`]: Typed, namespaced view over a backend
//! - [`error`]: Error type for store operations

pub mod backend;
pub mod defaults;
pub mod error;
pub mod memory;
pub mod namespace;

pub use backend::KeyValueStore;
pub use defaults::Defaults;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use namespace::Namespace;
