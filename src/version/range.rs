//! Version range expressions
//!
//! Supports the mathematical interval notation used by patch descriptors:
//! - `[3.20,3.21.1)` - inclusive lower, exclusive upper
//! - `(1.0,2.0)` - both exclusive
//! - `[1.0,)` / `(,2.0]` - unbounded on one side
//! - `[1.0]` - exactly one version
//!
//! Whitespace around endpoints is tolerated. Endpoints are compared as
//! [`GenericVersion`] tokens, so `[3.20,3.21.1)` contains `3.21.0.redhat-00001`.

use std::fmt;

use serde::Deserialize;

use crate::version::error::VersionError;
use crate::version::generic::GenericVersion;

#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "String")]
pub struct VersionRange {
    raw: String,
    lower: Option<Bound>,
    upper: Option<Bound>,
}

#[derive(Debug, Clone)]
struct Bound {
    version: GenericVersion,
    inclusive: bool,
}

impl VersionRange {
    pub fn parse(expr: &str) -> Result<Self, VersionError> {
        let trimmed = expr.trim();

        let lower_inclusive = match trimmed.chars().next() {
            Some('[') => true,
            Some('(') => false,
            _ => return Err(VersionError::invalid_range(expr, "must start with '[' or '('")),
        };
        let upper_inclusive = match trimmed.chars().last() {
            Some(']') => true,
            Some(')') => false,
            _ => return Err(VersionError::invalid_range(expr, "must end with ']' or ')'")),
        };

        let inner = &trimmed[1..trimmed.len() - 1];
        let parts: Vec<&str> = inner.split(',').collect();

        match parts.as_slice() {
            [single] => {
                // exact-version form, only valid with inclusive brackets
                if !lower_inclusive || !upper_inclusive {
                    return Err(VersionError::invalid_range(
                        expr,
                        "single-version range must use '[' and ']'",
                    ));
                }
                let version = single.trim();
                if version.is_empty() {
                    return Err(VersionError::invalid_range(expr, "empty version"));
                }
                let bound = Bound {
                    version: GenericVersion::new(version),
                    inclusive: true,
                };
                Ok(VersionRange {
                    raw: trimmed.to_string(),
                    lower: Some(bound.clone()),
                    upper: Some(bound),
                })
            }
            [low, high] => {
                let lower = bound_of(low, lower_inclusive);
                let upper = bound_of(high, upper_inclusive);
                if lower.is_none() && upper.is_none() {
                    return Err(VersionError::invalid_range(expr, "both endpoints are empty"));
                }
                Ok(VersionRange {
                    raw: trimmed.to_string(),
                    lower,
                    upper,
                })
            }
            _ => Err(VersionError::invalid_range(expr, "expected one ',' separator")),
        }
    }

    pub fn contains(&self, version: &GenericVersion) -> bool {
        if let Some(lower) = &self.lower {
            let ok = if lower.inclusive {
                *version >= lower.version
            } else {
                *version > lower.version
            };
            if !ok {
                return false;
            }
        }
        if let Some(upper) = &self.upper {
            let ok = if upper.inclusive {
                *version <= upper.version
            } else {
                *version < upper.version
            };
            if !ok {
                return false;
            }
        }
        true
    }
}

fn bound_of(endpoint: &str, inclusive: bool) -> Option<Bound> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return None;
    }
    Some(Bound {
        version: GenericVersion::new(endpoint),
        inclusive,
    })
}

impl TryFrom<String> for VersionRange {
    type Error = VersionError;

    fn try_from(expr: String) -> Result<Self, Self::Error> {
        VersionRange::parse(&expr)
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("[3.20,3.21.1)", "3.20.0", true)]
    #[case("[3.20,3.21.1)", "3.20.0.redhat-00001", true)]
    #[case("[3.20,3.21.1)", "3.20.1.redhat-00001", true)]
    #[case("[3.20,3.21.1)", "3.21", true)]
    #[case("[3.20,3.21.1)", "3.21.0", true)]
    #[case("[3.20,3.21.1)", "3.21.0.1", true)]
    #[case("[3.20,3.21.1)", "3.21.1", false)]
    #[case("[3.20,3.21.1)", "3.21.redhat-00001", true)]
    #[case("[3.20,3.21.1)", "3.21.0.redhat-00001", true)]
    #[case("[3.20,3.21.1)", "3.21.1.redhat-00001", false)]
    #[case("[3.20, 3.21.1)", "3.20", true)] // whitespace after the comma
    #[case("(3.20,3.21]", "3.20", false)]
    #[case("(3.20,3.21]", "3.21", true)]
    #[case("[1.0,)", "999.0", true)]
    #[case("(,2.0]", "1.9.9", true)]
    #[case("(,2.0]", "2.0.1", false)]
    #[case("[1.0]", "1.0.0", true)]
    #[case("[1.0]", "1.0.1", false)]
    fn containment(#[case] range: &str, #[case] version: &str, #[case] expected: bool) {
        let range = VersionRange::parse(range).unwrap();
        assert_eq!(range.contains(&GenericVersion::new(version)), expected);
    }

    #[rstest]
    #[case("3.20,3.21")]
    #[case("[3.20,3.21")]
    #[case("3.20,3.21)")]
    #[case("[1.0,2.0,3.0]")]
    #[case("(1.0)")]
    #[case("[,]")]
    #[case("")]
    fn malformed_ranges_are_rejected(#[case] expr: &str) {
        assert!(VersionRange::parse(expr).is_err());
    }

    #[test]
    fn deserializes_from_a_plain_string() {
        let range: VersionRange = serde_json::from_str("\"[3.20,3.21.1)\"").unwrap();
        assert!(range.contains(&GenericVersion::new("3.20.5")));
    }

    #[test]
    fn deserialization_rejects_malformed_expressions() {
        assert!(serde_json::from_str::<VersionRange>("\"3.20\"").is_err());
    }
}
