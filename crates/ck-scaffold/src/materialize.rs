//! Project materialization.
//!
//! This module provides [`Materializer`], which owns the destination
//! directory for the duration of a run: create it, copy the template
//! tree into it, apply placeholder substitution to the allow-listed
//! files, and either hand the finalized tree to the caller or remove
//! everything on failure.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use ck_core::ProjectName;
use tracing::{debug, info, warn};

use crate::error::ScaffoldError;
use crate::placeholder::{substitute, TokenMap, SUBSTITUTION_TARGETS};
use crate::template::TemplateSource;

/// Removes the destination tree on drop unless disarmed.
///
/// Armed at destination creation and disarmed only once the whole
/// materialization has succeeded, so every error (and panic) path after
/// directory creation removes the partial output before control returns
/// to the caller.
#[derive(Debug)]
struct CleanupGuard {
    path: Utf8PathBuf,
    armed: bool,
}

impl CleanupGuard {
    fn new(path: &Utf8Path) -> Self {
        Self {
            path: path.to_owned(),
            armed: true,
        }
    }

    /// Marks the destination as finalized; ownership passes to the user.
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        debug!(path = %self.path, "Removing partial project output");
        if let Err(e) = fs::remove_dir_all(self.path.as_std_path()) {
            // Best-effort: the error that armed the guard is the one
            // that reaches the user.
            warn!(path = %self.path, error = %e, "Failed to remove partial output");
        }
    }
}

/// Materializes a template tree into a new project directory.
///
/// # Examples
///
/// ```ignore
/// use ck_core::ProjectName;
/// use ck_scaffold::{Materializer, TemplateSource};
/// use camino::Utf8Path;
///
/// let cwd = Utf8Path::new(".");
/// let name = ProjectName::validate("demo", cwd)?;
/// let template = TemplateSource::discover(None)?;
///
/// let destination = Materializer::new(cwd).materialize(&name, &template)?;
/// ```
#[derive(Debug)]
pub struct Materializer {
    /// Directory the new project is created under.
    cwd: Utf8PathBuf,
}

impl Materializer {
    /// Creates a materializer rooted at the given working directory.
    #[must_use]
    pub fn new(cwd: impl Into<Utf8PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    /// Materializes the template into `cwd/<name>`.
    ///
    /// Steps run strictly in order: create the destination, copy every
    /// template entry, substitute placeholders in the allow-listed
    /// files. On success the destination path is returned and the
    /// directory belongs to the user. On any failure after directory
    /// creation, the destination tree is removed in full before the
    /// error propagates.
    ///
    /// # Errors
    ///
    /// - [`ScaffoldError::DirectoryCreateFailed`] if the destination
    ///   cannot be created (nothing to clean up)
    /// - [`ScaffoldError::Walk`] / [`ScaffoldError::CopyFailed`] if
    ///   template enumeration or copying fails
    /// - [`ScaffoldError::SubstitutionFailed`] if rewriting a target
    ///   file fails
    pub fn materialize(
        &self,
        name: &ProjectName,
        template: &TemplateSource,
    ) -> Result<Utf8PathBuf, ScaffoldError> {
        let destination = name.destination(&self.cwd);

        fs::create_dir(destination.as_std_path())
            .map_err(|e| ScaffoldError::directory_create(&destination, e))?;
        let guard = CleanupGuard::new(&destination);

        self.copy_tree(template, &destination)?;
        self.apply_substitutions(name, &destination)?;

        guard.disarm();
        info!(project = %name, path = %destination, "Project materialized");
        Ok(destination)
    }

    /// Copies every template entry into the destination, preserving
    /// relative structure.
    fn copy_tree(
        &self,
        template: &TemplateSource,
        destination: &Utf8Path,
    ) -> Result<(), ScaffoldError> {
        let files = template.files()?;
        debug!(count = files.len(), "Copying template files");

        for relative in &files {
            let source = template.root().join(relative);
            let target = destination.join(relative);

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent.as_std_path())
                    .map_err(|e| ScaffoldError::copy(parent.to_owned(), e))?;
            }

            // Byte-for-byte copy; substitution is a separate, later step
            // and only ever touches allow-listed files.
            fs::copy(source.as_std_path(), target.as_std_path())
                .map_err(|e| ScaffoldError::copy(target.clone(), e))?;
        }

        Ok(())
    }

    /// Rewrites each allow-listed file that exists in the destination.
    fn apply_substitutions(
        &self,
        name: &ProjectName,
        destination: &Utf8Path,
    ) -> Result<(), ScaffoldError> {
        let tokens = TokenMap::new(name);

        for target in SUBSTITUTION_TARGETS {
            let path = destination.join(target);
            if !path.is_file() {
                // The allow-list covers more files than every template
                // necessarily ships; absent targets are skipped.
                continue;
            }

            let content = fs::read_to_string(path.as_std_path())
                .map_err(|e| ScaffoldError::substitution(&path, e))?;
            let rewritten = substitute(&content, &tokens);
            if rewritten != content {
                debug!(file = %target, "Substituted placeholders");
                fs::write(path.as_std_path(), rewritten)
                    .map_err(|e| ScaffoldError::substitution(&path, e))?;
            }
        }

        Ok(())
    }
}
