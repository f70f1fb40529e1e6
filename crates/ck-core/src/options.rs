//! Setup options chosen at the start of a run.
//!
//! This module provides [`PackageManager`] and [`SetupOptions`]. The
//! options struct is built exactly once per invocation, either from
//! interactive answers or from the `--yes` defaults, and is immutable
//! afterwards.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The package manager used for dependency installation.
///
/// # Examples
///
/// ```
/// use ck_core::PackageManager;
///
/// let pm: PackageManager = "yarn".parse()?;
/// assert_eq!(pm.label(), "yarn");
/// # Ok::<(), ck_core::ValidationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum PackageManager {
    /// npm, the Node.js default.
    #[default]
    Npm,
    /// Yarn classic.
    Yarn,
    /// pnpm.
    Pnpm,
}

impl PackageManager {
    /// All supported package managers, in prompt display order.
    pub const ALL: [Self; 3] = [Self::Npm, Self::Yarn, Self::Pnpm];

    /// Returns the command-line name of this package manager.
    ///
    /// This is both the display label and the program to execute.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
        }
    }

    /// Returns the arguments for a dependency install invocation.
    #[inline]
    #[must_use]
    pub const fn install_args(self) -> &'static [&'static str] {
        &["install"]
    }

    /// Formats the command a user runs to execute a package.json script.
    ///
    /// npm requires the `run` subcommand; yarn and pnpm invoke scripts
    /// directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use ck_core::PackageManager;
    ///
    /// assert_eq!(PackageManager::Npm.run_script("dev"), "npm run dev");
    /// assert_eq!(PackageManager::Pnpm.run_script("dev"), "pnpm dev");
    /// ```
    #[must_use]
    pub fn run_script(self, script: &str) -> String {
        match self {
            Self::Npm => format!("npm run {script}"),
            Self::Yarn | Self::Pnpm => format!("{} {script}", self.label()),
        }
    }
}

impl FromStr for PackageManager {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "npm" => Ok(Self::Npm),
            "yarn" => Ok(Self::Yarn),
            "pnpm" => Ok(Self::Pnpm),
            other => Err(ValidationError::unsupported_package_manager(other)),
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The answer set for one scaffolding run.
///
/// Constructed once, from either interactive prompts or the `--yes`
/// defaults, then passed by value. Never assembled incrementally.
///
/// # Examples
///
/// ```
/// use ck_core::{PackageManager, SetupOptions};
///
/// let options = SetupOptions::default();
/// assert_eq!(options.package_manager, PackageManager::Npm);
/// assert!(options.git_init);
/// assert!(options.install_deps);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupOptions {
    /// Package manager for dependency installation.
    pub package_manager: PackageManager,

    /// Whether to initialize a git repository after materialization.
    pub git_init: bool,

    /// Whether to install dependencies after materialization.
    pub install_deps: bool,
}

impl Default for SetupOptions {
    fn default() -> Self {
        Self {
            package_manager: PackageManager::Npm,
            git_init: true,
            install_deps: true,
        }
    }
}
