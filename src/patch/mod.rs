//! Patch descriptor handling
//!
//! A product patch ships as a descriptor listing CVE and fix entries together
//! with the product version range they apply to. This module models the
//! descriptor and answers the two questions an orchestrator has: does this
//! patch apply to the current build, and which dependency versions does it
//! change. Fetching descriptors from a repository is the orchestrator's job.
//!
//! # Modules
//!
//! - [`metadata`]: descriptor model and artifact spec matching
//! - [`overrides`]: planning dependency version overrides
//! - [`selector`]: choosing the newest metadata version for a product stream
//! - [`error`]: descriptor loading errors

pub mod error;
pub mod metadata;
pub mod overrides;
pub mod selector;
