//! Semantic version model
//!
//! This module provides the version value used by release tracking: parsing
//! (strict and loose), canonical and display rendering, and ordering.
//!
//! # Modules
//!
//! - [`semver`]: The `Version` type with its parsers and ordering rules
//! - [`error`]: Error type for malformed version strings

pub mod error;
pub mod semver;

pub use self::error::VersionError;
pub use self::semver::Version;
