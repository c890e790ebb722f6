//! Release tracking
//!
//! Compares the running version against the one recorded by the previous
//! launch and reports install/update dates.
//!
//! # Modules
//!
//! - [`store`]: `VersionStore` trait and the preferences-backed implementation
//! - [`tracker`]: `Release` detection of clean installs and updates
//! - [`dates`]: Install and update timestamps

pub mod dates;
pub mod store;
pub mod tracker;

pub use dates::InstallDates;
pub use store::{DefaultsVersionStore, VERSION_KEY, VersionStore};
pub use tracker::Release;
