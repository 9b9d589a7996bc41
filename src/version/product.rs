//! Coarse product version classifier
//!
//! Product builds use versions like `3.20.1.redhat-00002` where only the
//! major.minor pair identifies the product stream; everything after the first
//! non-numeric segment is an opaque build qualifier. Neither semver nor the
//! generic token ordering extracts that split reliably (`1.2.3.4` has no
//! semver reading, and `7.8.0.redhat-00001` would lose the `-00001` part), so
//! the classifier parses the string itself.

use std::fmt;

use crate::version::generic::GenericVersion;
use crate::version::range::VersionRange;

/// A version reduced to (major, minor, qualifier).
///
/// Parsing never fails: a string with no leading numeric segments (`1-redhat`,
/// the empty string) degrades to major 0, minor 0 with everything in the
/// qualifier. Numeric segments beyond the second are dropped - range checks
/// only ever look at major.minor, so `1.2.3.4` classifies as (1, 2, "").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductVersion {
    major: u32,
    minor: u32,
    qualifier: String,
}

impl ProductVersion {
    pub fn parse(version: &str) -> Self {
        let mut digits: Vec<u32> = Vec::new();
        let mut qualifier = String::new();
        let mut in_qualifier = false;

        for part in version.split('.').filter(|p| !p.is_empty()) {
            if !in_qualifier && !part.chars().all(|c| c.is_ascii_digit()) {
                // this part and everything after it is the qualifier,
                // there is no way back to numeric segments
                in_qualifier = true;
            }
            if in_qualifier {
                if !qualifier.is_empty() {
                    qualifier.push('.');
                }
                qualifier.push_str(part);
            } else {
                digits.push(part.parse().unwrap_or(u32::MAX));
            }
        }

        ProductVersion {
            major: digits.first().copied().unwrap_or(0),
            minor: digits.get(1).copied().unwrap_or(0),
            qualifier,
        }
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }

    /// The same product stream means the same major.minor pair.
    pub fn same_stream(&self, other: &ProductVersion) -> bool {
        self.major == other.major && self.minor == other.minor
    }

    /// Whether this build falls inside a patch applicability range. Only the
    /// major.minor pair takes part; the qualifier never affects containment.
    pub fn in_range(&self, range: &VersionRange) -> bool {
        range.contains(&GenericVersion::new(&format!("{}.{}", self.major, self.minor)))
    }
}

impl fmt::Display for ProductVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if !self.qualifier.is_empty() {
            write!(f, ".{}", self.qualifier)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", 1, 0, "")]
    #[case("1.2", 1, 2, "")]
    #[case("1.2.3", 1, 2, "")]
    #[case("1.2.3.4", 1, 2, "")] // third/fourth numeric segments are dropped
    #[case("1.redhat", 1, 0, "redhat")]
    #[case("1.1.redhat", 1, 1, "redhat")]
    #[case("1.1.1.1.1.redhat", 1, 1, "redhat")]
    #[case("1-redhat", 0, 0, "1-redhat")] // dash makes the very first part a qualifier
    #[case("1.1-redhat", 1, 0, "1-redhat")]
    #[case("1.1.1.1.1-redhat", 1, 1, "1-redhat")]
    #[case("3.20.1.redhat-00002", 3, 20, "redhat-00002")]
    #[case("7.7.0.fuse-sb2-770010-redhat-00001", 7, 7, "fuse-sb2-770010-redhat-00001")]
    #[case("1.2.redhat-1.3", 1, 2, "redhat-1.3")] // numeric part after the switch stays qualifier
    #[case("", 0, 0, "")]
    fn classification(
        #[case] input: &str,
        #[case] major: u32,
        #[case] minor: u32,
        #[case] qualifier: &str,
    ) {
        let v = ProductVersion::parse(input);
        assert_eq!(v.major(), major);
        assert_eq!(v.minor(), minor);
        assert_eq!(v.qualifier(), qualifier);
    }

    #[test]
    fn major_minor_survive_a_reparse() {
        for input in ["3.20.1.redhat-00002", "1-redhat", "1.2.3.4", "5"] {
            let first = ProductVersion::parse(input);
            let again = ProductVersion::parse(&format!("{}.{}", first.major(), first.minor()));
            assert_eq!(again.major(), first.major());
            assert_eq!(again.minor(), first.minor());
            assert_eq!(again.qualifier(), "");
        }
    }

    #[rstest]
    #[case("3.20.0.redhat-00001", "[3.20,3.21.1)", true)]
    #[case("3.21.0.redhat-00001", "[3.20,3.21.1)", true)]
    #[case("3.21.1.redhat-00001", "[3.20,3.21.1)", true)] // truncated to 3.21
    #[case("3.22.0.redhat-00001", "[3.20,3.21.1)", false)]
    #[case("1-redhat", "[3.20,3.21.1)", false)] // classifies as 0.0
    fn range_membership(#[case] version: &str, #[case] range: &str, #[case] expected: bool) {
        let range = VersionRange::parse(range).unwrap();
        assert_eq!(ProductVersion::parse(version).in_range(&range), expected);
    }
}
