//! Patch descriptor model
//!
//! A patch descriptor names the product BOM it was built for, the version
//! range of product builds it applies to, and the CVE / fix entries it ships.
//! Each entry lists the artifacts it affects together with the version the
//! patch pins them to.
//!
//! Version ranges and fix versions are validated while the descriptor is
//! deserialized; a descriptor with a malformed range never loads, so the
//! caller can't accidentally treat it as applicable.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::patch::error::PatchError;
use crate::version::generic::GenericVersion;
use crate::version::product::ProductVersion;
use crate::version::range::VersionRange;

/// A dependency coordinate as the build sees it.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.group_id, self.artifact_id, self.version)
    }
}

/// One artifact affected by a CVE or fix entry: which coordinates it matches,
/// which versions are vulnerable, and the version that resolves it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffectedArtifactSpec {
    pub group_id: String,
    pub artifact_id: String,
    pub versions: VersionRange,
    pub fix_version: GenericVersion,
}

impl AffectedArtifactSpec {
    /// Whether an artifact is hit by this spec: group and artifact match
    /// exactly or by a trailing `*` glob, and the artifact's version falls in
    /// the affected range.
    pub fn matches(&self, artifact: &Artifact) -> bool {
        glob_matches(&self.group_id, &artifact.group_id)
            && glob_matches(&self.artifact_id, &artifact.artifact_id)
            && self.versions.contains(&GenericVersion::new(&artifact.version))
    }
}

fn glob_matches(pattern: &str, value: &str) -> bool {
    match pattern.strip_suffix('*') {
        Some(prefix) => value.starts_with(prefix),
        None => pattern == value,
    }
}

impl fmt::Display for AffectedArtifactSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{} -> {}",
            self.group_id, self.artifact_id, self.versions, self.fix_version
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cve {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cve_link: String,
    #[serde(default)]
    pub bz_link: String,
    #[serde(default)]
    pub affected: Vec<AffectedArtifactSpec>,
}

impl fmt::Display for Cve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;
        if !self.description.is_empty() {
            write!(f, ": {}", self.description)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fix {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub affected: Vec<AffectedArtifactSpec>,
}

impl fmt::Display for Fix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;
        if !self.description.is_empty() {
            write!(f, ": {}", self.description)?;
        }
        Ok(())
    }
}

/// A complete patch descriptor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchMetadata {
    pub product_group_id: String,
    pub product_artifact_id: String,
    pub product_version_range: VersionRange,
    #[serde(default)]
    pub cves: Vec<Cve>,
    #[serde(default)]
    pub fixes: Vec<Fix>,
}

impl PatchMetadata {
    pub fn from_json(descriptor: &str) -> Result<Self, PatchError> {
        Ok(serde_json::from_str(descriptor)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, PatchError> {
        let descriptor = fs::read_to_string(path)?;
        Self::from_json(&descriptor)
    }

    /// Sanity check before anything in the descriptor is acted on: the patch
    /// declares a product version range and the current build must fall in it.
    pub fn applies_to(&self, build: &ProductVersion) -> bool {
        build.in_range(&self.product_version_range)
    }

    /// Whether the descriptor targets the given product BOM coordinates.
    pub fn targets(&self, group_id: &str, artifact_id: &str) -> bool {
        self.product_group_id == group_id && self.product_artifact_id == artifact_id
    }
}
