//! Error types for the ck-core crate.
//!
//! This module provides the [`ValidationError`] type for user-input
//! failures detected before any filesystem write takes place.

use camino::Utf8PathBuf;

/// Errors that can occur while validating user-supplied parameters.
///
/// Every variant is a user error: the run aborts with a non-zero exit
/// code, but nothing has been written to disk yet, so there is nothing
/// to clean up.
///
/// # Examples
///
/// ```
/// use ck_core::ValidationError;
/// use camino::Utf8PathBuf;
///
/// let error = ValidationError::destination_exists(Utf8PathBuf::from("./my-app"));
/// assert!(error.to_string().contains("my-app"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The project name was empty after trimming whitespace.
    #[error("project name is required")]
    EmptyName,

    /// The project name contains characters outside `[a-z0-9-]`.
    #[error(
        "invalid project name '{name}': use lowercase letters, numbers, and hyphens only"
    )]
    InvalidCharacters {
        /// The rejected input, trimmed.
        name: String,
    },

    /// A file or directory already exists at the resolved destination.
    #[error("a directory or file already exists at {path}")]
    DestinationExists {
        /// The destination path that is already occupied.
        path: Utf8PathBuf,
    },

    /// The package manager is not one of `npm`, `yarn`, or `pnpm`.
    #[error("unsupported package manager '{value}': expected npm, yarn, or pnpm")]
    UnsupportedPackageManager {
        /// The rejected package manager name.
        value: String,
    },
}

impl ValidationError {
    /// Creates a new [`ValidationError::InvalidCharacters`] error.
    #[inline]
    pub fn invalid_characters(name: impl Into<String>) -> Self {
        Self::InvalidCharacters { name: name.into() }
    }

    /// Creates a new [`ValidationError::DestinationExists`] error.
    #[inline]
    pub fn destination_exists(path: impl Into<Utf8PathBuf>) -> Self {
        Self::DestinationExists { path: path.into() }
    }

    /// Creates a new [`ValidationError::UnsupportedPackageManager`] error.
    #[inline]
    pub fn unsupported_package_manager(value: impl Into<String>) -> Self {
        Self::UnsupportedPackageManager {
            value: value.into(),
        }
    }

    /// Returns the destination path associated with this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8PathBuf> {
        match self {
            Self::DestinationExists { path } => Some(path),
            Self::EmptyName
            | Self::InvalidCharacters { .. }
            | Self::UnsupportedPackageManager { .. } => None,
        }
    }
}
