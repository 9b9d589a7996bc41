//! Override planning
//!
//! Turns an applicable patch descriptor plus the build's dependency list into
//! the set of version overrides the patch mandates. The caller owns actually
//! rewriting its dependency graph; this stays a pure computation.

use serde::Serialize;
use tracing::info;

use crate::patch::metadata::{AffectedArtifactSpec, Artifact, PatchMetadata};

/// A single dependency version replacement.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VersionOverride {
    pub group_id: String,
    pub artifact_id: String,
    pub from: String,
    pub to: String,
}

/// Collect every override the descriptor's CVE and fix entries require for
/// the given artifacts. Artifacts matched by several specs get one override
/// per matching spec, in descriptor order, mirroring how the entries would be
/// applied one by one.
pub fn plan_overrides(patch: &PatchMetadata, artifacts: &[Artifact]) -> Vec<VersionOverride> {
    let mut overrides = Vec::new();

    for cve in &patch.cves {
        info!("processing {}", cve);
        for spec in &cve.affected {
            collect(spec, artifacts, &mut overrides);
        }
    }
    for fix in &patch.fixes {
        info!("processing {}", fix);
        for spec in &fix.affected {
            collect(spec, artifacts, &mut overrides);
        }
    }

    overrides
}

fn collect(spec: &AffectedArtifactSpec, artifacts: &[Artifact], overrides: &mut Vec<VersionOverride>) {
    for artifact in artifacts {
        if spec.matches(artifact) {
            info!("  - {} -> {}", artifact, spec.fix_version);
            overrides.push(VersionOverride {
                group_id: artifact.group_id.clone(),
                artifact_id: artifact.artifact_id.clone(),
                from: artifact.version.clone(),
                to: spec.fix_version.to_string(),
            });
        }
    }
}
