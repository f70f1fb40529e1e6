//! Template materialization engine for create-kit.
//!
//! This crate turns a read-only template tree plus a validated project
//! name into a new, customized project directory. It is the only part
//! of the tool with real invariants:
//!
//! - [`TemplateSource`]: read-only enumeration of the shipped template
//! - [`TokenMap`] / [`substitute`]: flat, literal placeholder
//!   substitution over a fixed allow-list of files
//! - [`Materializer`]: stage → copy → substitute → finalize, with a
//!   cleanup guard that removes the destination on every failure path
//!
//! # Example
//!
//! ```ignore
//! use ck_core::ProjectName;
//! use ck_scaffold::{Materializer, TemplateSource};
//! use camino::Utf8Path;
//!
//! let cwd = Utf8Path::new(".");
//! let name = ProjectName::validate("my-app", cwd)?;
//! let template = TemplateSource::discover(None)?;
//!
//! let destination = Materializer::new(cwd).materialize(&name, &template)?;
//! println!("Created {destination}");
//! ```
//!
//! # Guarantees
//!
//! - All writes stay inside the destination subtree.
//! - On any failure after the destination directory is created, the
//!   whole destination is removed before the error propagates; the
//!   working directory is left exactly as it was.
//! - Files outside the substitution allow-list are copied byte-for-byte
//!   and never text-processed.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod error;
pub mod materialize;
pub mod placeholder;
pub mod template;

pub use error::ScaffoldError;
pub use materialize::Materializer;
pub use placeholder::{
    is_substitution_target, substitute, TokenMap, SUBSTITUTION_TARGETS, TOKEN_PROJECT_NAME,
    TOKEN_PROJECT_NAME_CAMEL,
};
pub use template::TemplateSource;
