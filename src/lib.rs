//! Namespaced preferences, release tracking and semantic versions for
//! independent subsystems of one application.
//!
//! # Modules
//!
//! - [`version`]: Semantic version parsing, rendering and ordering
//! - [`store`]: Key-value backend trait and namespaced, typed preferences
//! - [`release`]: Clean install / update detection and install dates
//! - [`registrar`]: Duplicate subsystem title detection
//! - [`assets`]: Per-subsystem handle tying the above together
//! - [`config`]: Configuration file and data directory resolution
//! - [`logging`]: Tracing subscriber setup
//! - [`commands`]: Implementations of the command line subcommands

pub mod assets;
pub mod commands;
pub mod config;
pub mod logging;
pub mod registrar;
pub mod release;
pub mod store;
pub mod version;

pub use assets::Assets;
pub use version::Version;
