use thiserror::Error;

use crate::version::error::VersionError;

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("can't read patch descriptor: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed patch descriptor: {0}")]
    Descriptor(#[from] serde_json::Error),

    #[error(transparent)]
    Version(#[from] VersionError),
}
