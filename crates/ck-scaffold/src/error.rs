//! Error types for the ck-scaffold crate.
//!
//! This module provides the [`ScaffoldError`] type for failures during
//! template enumeration and project materialization.

use camino::Utf8PathBuf;

/// Errors that can occur while materializing a project.
///
/// All variants are fatal: the run aborts with a non-zero exit code.
/// Any variant raised after the destination directory was created also
/// triggers cleanup, so no partial project is left behind.
///
/// [`ScaffoldError::TemplateNotFound`] is a configuration error (the
/// tool is installed incorrectly or pointed at the wrong directory),
/// distinct from the user-input errors in
/// [`ValidationError`](ck_core::ValidationError).
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    /// The template root is absent or not a directory.
    #[error(
        "template directory not found: {0} (reinstall the tool or set CREATE_KIT_TEMPLATE_DIR)"
    )]
    TemplateNotFound(Utf8PathBuf),

    /// Failed to walk the template tree.
    #[error("failed to walk template directory: {0}")]
    Walk(#[from] ignore::Error),

    /// Failed to create the destination directory.
    ///
    /// Raised before anything was written, so there is nothing to clean up.
    #[error("failed to create project directory {path}: {source}")]
    DirectoryCreateFailed {
        /// The destination directory that could not be created.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to copy a template entry into the destination.
    #[error("failed to copy {path}: {source}")]
    CopyFailed {
        /// The path that could not be copied.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to rewrite a substitution target in place.
    #[error("failed to configure {path}: {source}")]
    SubstitutionFailed {
        /// The destination file that could not be rewritten.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A path inside the template tree is not valid UTF-8.
    #[error("template path is not valid UTF-8: {}", _0.display())]
    NonUtf8Path(std::path::PathBuf),
}

impl ScaffoldError {
    /// Creates a new [`ScaffoldError::DirectoryCreateFailed`] error.
    #[inline]
    pub fn directory_create(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryCreateFailed {
            path: path.into(),
            source,
        }
    }

    /// Creates a new [`ScaffoldError::CopyFailed`] error.
    #[inline]
    pub fn copy(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::CopyFailed {
            path: path.into(),
            source,
        }
    }

    /// Creates a new [`ScaffoldError::SubstitutionFailed`] error.
    #[inline]
    pub fn substitution(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::SubstitutionFailed {
            path: path.into(),
            source,
        }
    }

    /// Returns the file path associated with this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8PathBuf> {
        match self {
            Self::TemplateNotFound(path)
            | Self::DirectoryCreateFailed { path, .. }
            | Self::CopyFailed { path, .. }
            | Self::SubstitutionFailed { path, .. } => Some(path),
            Self::Walk(_) | Self::NonUtf8Path(_) => None,
        }
    }
}
