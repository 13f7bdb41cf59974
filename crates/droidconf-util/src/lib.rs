//! Shared utilities for droidconf.
//!
//! This crate provides the cross-cutting concerns used by the other droidconf
//! crates: the configuration error taxonomy, filesystem helpers, and
//! Cargo-style status output.

pub mod errors;
pub mod fs;
pub mod progress;
