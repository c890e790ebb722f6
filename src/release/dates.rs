//! Install and update timestamps

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::debug;

/// When the application was first installed and last updated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallDates {
    pub installed: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl InstallDates {
    /// Read creation times of the user data directory and the executable
    ///
    /// `data_path` is created on first launch and dates the install;
    /// `executable_path` is replaced by every update. A path without
    /// readable timestamps yields [`DateTime::<Utc>::MIN_UTC`].
    pub fn from_paths(data_path: &Path, executable_path: &Path) -> Self {
        Self {
            installed: creation_date(data_path),
            updated: creation_date(executable_path),
        }
    }

    /// Dates derived from the running executable and `data_path`
    pub fn for_current_exe(data_path: &Path) -> Self {
        match std::env::current_exe() {
            Ok(exe) => Self::from_paths(data_path, &exe),
            Err(e) => {
                debug!("Failed to locate executable: {}", e);
                Self {
                    installed: creation_date(data_path),
                    updated: DateTime::<Utc>::MIN_UTC,
                }
            }
        }
    }
}

/// Creation time, or modification time on filesystems that do not record births
fn creation_date(path: &Path) -> DateTime<Utc> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            debug!("Failed to read metadata of {:?}: {}", path, e);
            return DateTime::<Utc>::MIN_UTC;
        }
    };

    metadata
        .created()
        .or_else(|_| metadata.modified())
        .map(DateTime::<Utc>::from)
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
