use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::version::error::VersionError;

/// Semantic version with prerelease and build identifiers
///
/// See <https://semver.org>. Short forms such as "1" or "1.2" are accepted by
/// [`Version::parse`] and padded with zeros.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prereleases: Vec<String>,
    pub builds: Vec<String>,
}

impl Version {
    /// Construct a release version. Identifiers are not validated.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prereleases: Vec::new(),
            builds: Vec::new(),
        }
    }

    pub fn with_prereleases<I, T>(mut self, prereleases: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.prereleases = prereleases.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_builds<I, T>(mut self, builds: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.builds = builds.into_iter().map(Into::into).collect();
        self
    }

    /// Parse a version string, accepting partial versions.
    ///
    /// Grammar: `major[.minor[.patch]][-prerelease][+build]`
    ///
    /// Examples:
    /// - "1" -> Version(1, 0, 0)
    /// - "1.2" -> Version(1, 2, 0)
    /// - "1.2.3-rc.1+42" -> Version(1, 2, 3, ["rc", "1"], ["42"])
    ///
    /// Returns `None` for anything outside the grammar, including a `v` prefix.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    /// Parse a dot-delimited list of integers, ignoring non-digit noise.
    ///
    /// Each segment has its non-digit characters removed before parsing, so
    /// "v1.2 beta" becomes 1.2.0. A segment with no digits left fails the whole
    /// parse. Segments past the third are ignored but still have to be numeric.
    pub fn parse_loose(raw: &str) -> Option<Self> {
        let blocks = raw
            .split('.')
            .map(|segment| {
                let digits: String = segment.chars().filter(char::is_ascii_digit).collect();
                digits.parse::<u64>().ok()
            })
            .collect::<Option<Vec<u64>>>()?;

        let block = |index: usize| blocks.get(index).copied().unwrap_or(0);
        Some(Self::new(block(0), block(1), block(2)))
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prereleases.is_empty()
    }

    /// Human-facing form: build metadata is shown in parentheses.
    ///
    /// `1.2.3-beta+42` is rendered as `1.2.3-beta (42)`. Not accepted by
    /// [`Version::parse`].
    pub fn display_string(&self) -> String {
        let mut string = self.core_string();
        if !self.builds.is_empty() {
            string.push_str(" (");
            string.push_str(&self.builds.join("."));
            string.push(')');
        }
        string
    }

    /// SemVer precedence, ignoring build metadata.
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| compare_prereleases(&self.prereleases, &other.prereleases))
    }

    pub fn precedence_eq(&self, other: &Self) -> bool {
        self.cmp_precedence(other) == Ordering::Equal
    }

    fn core_string(&self) -> String {
        let mut string = format!("{}.{}.{}", self.major, self.minor, self.patch);
        if !self.prereleases.is_empty() {
            string.push('-');
            string.push_str(&self.prereleases.join("."));
        }
        string
    }
}

/// Pad "1" and "1.2" to three components so the strict grammar can take them.
fn pad_short_form(raw: &str) -> String {
    let (core, suffix) = match raw.find(['-', '+']) {
        Some(index) => raw.split_at(index),
        None => (raw, ""),
    };
    match core.split('.').count() {
        1 => format!("{core}.0.0{suffix}"),
        2 => format!("{core}.0{suffix}"),
        _ => raw.to_string(),
    }
}

fn split_identifiers(joined: &str) -> Vec<String> {
    if joined.is_empty() {
        Vec::new()
    } else {
        joined.split('.').map(String::from).collect()
    }
}

fn is_numeric(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}

/// Compare digit strings without overflowing, whatever their length.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let trimmed_a = a.trim_start_matches('0');
    let trimmed_b = b.trim_start_matches('0');
    trimmed_a
        .len()
        .cmp(&trimmed_b.len())
        .then_with(|| trimmed_a.cmp(trimmed_b))
        .then_with(|| a.len().cmp(&b.len()))
}

fn compare_identifier(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        (true, true) => compare_numeric(a, b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

/// Element-wise comparison; a strict prefix sorts first.
fn compare_identifiers(a: &[String], b: &[String]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(a, b)| compare_identifier(a, b))
        .find(|ordering| ordering.is_ne())
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

/// A release sorts after any of its prereleases.
fn compare_prereleases(a: &[String], b: &[String]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => compare_identifiers(a, b),
    }
}

impl Ord for Version {
    /// Precedence first, then build metadata as the final tiebreaker so that
    /// ordering agrees with equality.
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_precedence(other)
            .then_with(|| compare_identifiers(&self.builds, &other.builds))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.core_string())?;
        if !self.builds.is_empty() {
            write!(f, "+{}", self.builds.join("."))?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let malformed = || VersionError::Malformed(raw.to_string());
        let parsed = ::semver::Version::parse(&pad_short_form(raw)).map_err(|_| malformed())?;
        Ok(Self::from(parsed))
    }
}

impl From<::semver::Version> for Version {
    fn from(version: ::semver::Version) -> Self {
        Self {
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            prereleases: split_identifiers(version.pre.as_str()),
            builds: split_identifiers(version.build.as_str()),
        }
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
