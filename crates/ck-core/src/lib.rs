//! Core types for the create-kit scaffolder.
//!
//! This crate provides the validated inputs that the materialization
//! engine consumes:
//!
//! - [`ProjectName`]: a validated project identifier (`[a-z0-9-]+`)
//! - [`PackageManager`] and [`SetupOptions`]: the explicit, immutable
//!   answer set built once per run
//! - [`ValidationError`]: user-input failures, surfaced before any
//!   filesystem write happens
//!
//! All validation is front-loaded: once a [`ProjectName`] or
//! [`SetupOptions`] value exists, downstream code can rely on its
//! invariants without re-checking.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod error;
pub mod name;
pub mod options;

pub use error::ValidationError;
pub use name::ProjectName;
pub use options::{PackageManager, SetupOptions};
