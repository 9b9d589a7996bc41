//! Applicability checking for product patch metadata.
//!
//! A product build is identified by a BOM coordinate whose version looks like
//! `3.20.1.redhat-00002`. Patches for the product ship as descriptors that
//! declare which version range of the product they apply to and which
//! dependency versions they override. This crate answers, without touching
//! any repository, whether a given descriptor applies to a given build and
//! what it would change.

pub mod config;
pub mod patch;
pub mod version;
