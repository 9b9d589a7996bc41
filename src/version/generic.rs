//! Maven-style comparable version tokens
//!
//! Product builds carry versions like `3.20.0.redhat-00001` or
//! `7.7.0.fuse-sb2-770010-redhat-00001` that semver cannot represent, so range
//! containment works on a dedicated token with the generic Maven ordering:
//! - segments split on `.`, `-`, `_` and digit/letter boundaries
//! - numeric segments compare numerically
//! - string segments compare on the qualifier ladder
//!   `alpha < beta < milestone < rc < snapshot < release < sp < anything else`
//! - missing trailing segments count as release, so `3.21 == 3.21.0` and
//!   `3.21.0.redhat-00001 > 3.21`

use std::cmp::Ordering;
use std::fmt;

use serde::Deserialize;

/// A version string tokenized for ordering. Any input parses; comparison
/// ignores the separators and only looks at the segment sequence.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "String")]
pub struct GenericVersion {
    raw: String,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Number(u64),
    Qualifier(String),
}

impl GenericVersion {
    pub fn new(version: &str) -> Self {
        GenericVersion {
            raw: version.to_string(),
            segments: tokenize(version),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl From<String> for GenericVersion {
    fn from(version: String) -> Self {
        let segments = tokenize(&version);
        GenericVersion {
            raw: version,
            segments,
        }
    }
}

impl fmt::Display for GenericVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Split into numeric and string segments. `1.2-redhat00001` becomes
/// `[1, 2, "redhat", 1]`: separators and digit/letter boundaries both cut,
/// so `redhat-00001` and `redhat00001` tokenize the same way.
fn tokenize(version: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current = String::new();

    let flush = |current: &mut String, segments: &mut Vec<Segment>| {
        if current.is_empty() {
            return;
        }
        let segment = match current.parse::<u64>() {
            Ok(n) => Segment::Number(n),
            Err(_) => Segment::Qualifier(current.to_lowercase()),
        };
        segments.push(segment);
        current.clear();
    };

    for c in version.chars() {
        if c == '.' || c == '-' || c == '_' {
            flush(&mut current, &mut segments);
        } else {
            let boundary = match current.chars().last() {
                Some(prev) => prev.is_ascii_digit() != c.is_ascii_digit(),
                None => false,
            };
            if boundary {
                flush(&mut current, &mut segments);
            }
            current.push(c);
        }
    }
    flush(&mut current, &mut segments);

    segments
}

/// Rank on the qualifier ladder. Unknown qualifiers rank above `sp` and
/// compare lexically among themselves.
fn qualifier_rank(q: &str) -> u8 {
    match q {
        "alpha" => 0,
        "beta" => 1,
        "milestone" => 2,
        "rc" | "cr" => 3,
        "snapshot" => 4,
        "" | "ga" | "final" | "release" => 5,
        "sp" => 6,
        _ => 7,
    }
}

const RELEASE_RANK: u8 = 5;

fn compare_segments(a: Option<&Segment>, b: Option<&Segment>) -> Ordering {
    match (a, b) {
        (Some(Segment::Number(x)), Some(Segment::Number(y))) => x.cmp(y),
        // a number always outranks a present qualifier
        (Some(Segment::Number(_)), Some(Segment::Qualifier(_))) => Ordering::Greater,
        (Some(Segment::Qualifier(_)), Some(Segment::Number(_))) => Ordering::Less,
        (Some(Segment::Qualifier(x)), Some(Segment::Qualifier(y))) => {
            match qualifier_rank(x).cmp(&qualifier_rank(y)) {
                Ordering::Equal if qualifier_rank(x) == 7 => x.cmp(y),
                other => other,
            }
        }
        // padding: absent segments count as 0 / release
        (Some(Segment::Number(x)), None) => x.cmp(&0),
        (None, Some(Segment::Number(y))) => 0.cmp(y),
        (Some(Segment::Qualifier(x)), None) => qualifier_rank(x).cmp(&RELEASE_RANK),
        (None, Some(Segment::Qualifier(y))) => RELEASE_RANK.cmp(&qualifier_rank(y)),
        (None, None) => Ordering::Equal,
    }
}

impl Ord for GenericVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        for i in 0..len {
            let ordering = compare_segments(self.segments.get(i), other.segments.get(i));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for GenericVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for GenericVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GenericVersion {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("3.21", "3.21.0", Ordering::Equal)]
    #[case("3.21", "3.21.0.0", Ordering::Equal)]
    #[case("3.21.0.1", "3.21.1", Ordering::Less)]
    #[case("3.21.0.redhat-00001", "3.21", Ordering::Greater)]
    #[case("3.21.0.redhat-00001", "3.21.1", Ordering::Less)]
    #[case("3.21.redhat-00001", "3.21.1", Ordering::Less)]
    #[case("2.9.10.4-redhat-00001", "10.0.0.1-redhat-00001", Ordering::Less)]
    #[case("3.20.0.redhat-00001", "3.20.0.redhat-00005", Ordering::Less)]
    #[case("1.0-alpha", "1.0", Ordering::Less)]
    #[case("1.0-rc", "1.0-snapshot", Ordering::Less)]
    #[case("1.0-sp", "1.0", Ordering::Greater)]
    #[case("1.0.ga", "1.0", Ordering::Equal)]
    #[case("1.0-fuse", "1.0-redhat", Ordering::Less)] // unknown qualifiers are lexical
    fn ordering(#[case] left: &str, #[case] right: &str, #[case] expected: Ordering) {
        assert_eq!(GenericVersion::new(left).cmp(&GenericVersion::new(right)), expected);
    }

    #[test]
    fn digit_letter_boundary_splits_segments() {
        // redhat00001 splits the same way as redhat-00001
        assert_eq!(
            GenericVersion::new("1.0.redhat00001"),
            GenericVersion::new("1.0.redhat-00001")
        );
    }

    #[test]
    fn display_keeps_the_original_text() {
        assert_eq!(GenericVersion::new("3.20.0.redhat-00001").to_string(), "3.20.0.redhat-00001");
    }

    #[test]
    fn deserializes_from_a_plain_string() {
        let v: GenericVersion = serde_json::from_str("\"3.21.0\"").unwrap();
        assert_eq!(v, GenericVersion::new("3.21"));
    }
}
