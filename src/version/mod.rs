//! Version classification and range matching
//!
//! Product builds are versioned with loosely-structured dotted strings that
//! neither semver nor plain lexicographic comparison handle. This module
//! provides the pieces the patch layer needs:
//!
//! - [`product`]: classifier reducing a build version to (major, minor, qualifier)
//! - [`generic`]: Maven-style comparable version token
//! - [`range`]: interval notation parsing and containment
//! - [`error`]: error types for version expressions

pub mod error;
pub mod generic;
pub mod product;
pub mod range;
