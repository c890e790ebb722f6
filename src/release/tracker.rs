//! Clean install and update detection

use tracing::{info, warn};

use crate::release::store::VersionStore;
use crate::store::StoreError;
use crate::version::Version;

/// Running version compared to the one recorded by the previous launch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    /// Version of the running build
    pub current: Version,
    /// Last recorded version, `0.0.0` if none
    pub previous: Version,
    /// A version was recorded and `current` orders after it
    pub updated: bool,
    /// No version was recorded before
    pub clean: bool,
}

impl Release {
    /// Compare `current` against the version recorded in `store`
    ///
    /// A record that exists but no longer decodes is treated as `0.0.0`, so
    /// any real version counts as an update rather than a clean install.
    pub fn detect<V: VersionStore + ?Sized>(current: Version, store: &V) -> Result<Self, StoreError> {
        let clean = !store.is_recorded()?;
        let previous = store.load()?.unwrap_or_default();
        let updated = !clean && current > previous;

        info!(
            "Release {} (previous {}, clean: {}, updated: {})",
            current, previous, clean, updated
        );

        Ok(Self {
            current,
            previous,
            updated,
            clean,
        })
    }

    /// Build the running version from a marketing version and a build number
    ///
    /// `("2.1", "340")` gives `2.1.0+340`. A missing marketing version reads as
    /// `"0.0.0"`, a missing build number as `"0"`. Anything that does not parse
    /// falls back to `0.0.0`.
    pub fn current_from_bundle(short_version: Option<&str>, build: Option<&str>) -> Version {
        let raw = format!(
            "{}+{}",
            short_version.unwrap_or("0.0.0"),
            build.unwrap_or("0")
        );

        Version::parse(&raw).unwrap_or_else(|| {
            warn!("Unparsable bundle version {:?}, using 0.0.0", raw);
            Version::default()
        })
    }

    /// The running version orders before the recorded one
    pub fn downgraded(&self) -> bool {
        !self.clean && self.current < self.previous
    }

    /// Record the running version for the next launch
    pub fn save<V: VersionStore + ?Sized>(&self, store: &V) -> Result<(), StoreError> {
        store.save(&self.current)
    }
}
