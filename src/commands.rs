//! Command implementations behind the `subsystem` binary

use std::cmp::Ordering;

use crate::version::{Version, VersionError};

fn parse_with(raw: &str, loose: bool) -> Result<Version, VersionError> {
    if loose {
        Version::parse_loose(raw).ok_or_else(|| VersionError::Malformed(raw.to_string()))
    } else {
        raw.parse()
    }
}

/// Canonical (or display) form of `raw`
pub fn parse(raw: &str, loose: bool, display: bool) -> Result<String, VersionError> {
    let version = parse_with(raw, loose)?;
    Ok(if display {
        version.display_string()
    } else {
        version.to_string()
    })
}

/// `<`, `=` or `>` for `a` relative to `b`
pub fn compare(a: &str, b: &str, precedence: bool) -> Result<&'static str, VersionError> {
    let a: Version = a.parse()?;
    let b: Version = b.parse()?;
    let ordering = if precedence {
        a.cmp_precedence(&b)
    } else {
        a.cmp(&b)
    };

    Ok(match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    })
}

/// Canonical forms of `raw`, ascending
pub fn sort(raw: &[String]) -> Result<Vec<String>, VersionError> {
    let mut versions = raw
        .iter()
        .map(|v| v.parse::<Version>())
        .collect::<Result<Vec<_>, _>>()?;
    versions.sort();
    Ok(versions.iter().map(Version::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.2", false, false, Ok("1.2.0"))]
    #[case("1.2.3+7", false, true, Ok("1.2.3 (7)"))]
    #[case("v10.4", true, false, Ok("10.4.0"))]
    #[case("v10.4", false, false, Err(VersionError::Malformed("v10.4".to_string())))]
    #[case("x.y", true, false, Err(VersionError::Malformed("x.y".to_string())))]
    fn parse_cases(
        #[case] raw: &str,
        #[case] loose: bool,
        #[case] display: bool,
        #[case] expected: Result<&str, VersionError>,
    ) {
        assert_eq!(
            parse(raw, loose, display),
            expected.map(|s| s.to_string())
        );
    }

    #[rstest]
    #[case("1.0.0", "1.0.1", false, "<")]
    #[case("1.0.0+2", "1.0.0+1", false, ">")]
    #[case("1.0.0+2", "1.0.0+1", true, "=")]
    #[case("1.0.0", "1.0.0-rc.1", false, ">")]
    fn compare_cases(
        #[case] a: &str,
        #[case] b: &str,
        #[case] precedence: bool,
        #[case] expected: &str,
    ) {
        assert_eq!(compare(a, b, precedence).unwrap(), expected);
    }

    #[test]
    fn sort_orders_by_precedence_then_build() {
        let raw = ["1.0.0", "1.0.0-beta", "0.9", "1.0.0-alpha.1", "1.0.0+1"].map(String::from);

        assert_eq!(
            sort(&raw).unwrap(),
            vec!["0.9.0", "1.0.0-alpha.1", "1.0.0-beta", "1.0.0", "1.0.0+1"]
        );
    }

    #[test]
    fn sort_fails_on_first_malformed_version() {
        let raw = ["1.0.0", "latest"].map(String::from);

        assert_eq!(
            sort(&raw),
            Err(VersionError::Malformed("latest".to_string()))
        );
    }
}
