//! Patch metadata version selection
//!
//! A single metadata coordinate serves every product stream, so the version
//! list fetched for it mixes descriptors for different major.minor streams
//! (`3.21.0.redhat-00001` next to `3.20.0.redhat-00005`). The selector keeps
//! only the candidates from the build's own stream and picks the newest.

use tracing::debug;

use crate::version::generic::GenericVersion;
use crate::version::product::ProductVersion;

/// Pick the newest candidate whose major.minor matches the build's, or `None`
/// when no candidate is from the build's stream. Candidate order does not
/// matter; newest is decided by the generic version ordering.
pub fn select_latest(build: &ProductVersion, candidates: &[String]) -> Option<String> {
    candidates
        .iter()
        .filter(|candidate| {
            let stream_matches = ProductVersion::parse(candidate).same_stream(build);
            if !stream_matches {
                debug!("skipping metadata {}", candidate);
            }
            stream_matches
        })
        .max_by_key(|candidate| GenericVersion::new(candidate))
        .cloned()
}
