//! Post-materialization actions: git init and dependency install.
//!
//! These run only after the project directory is finalized, and their
//! failures are warnings, never fatal: the user keeps the materialized
//! project and can rerun the step manually. Every command is rooted to
//! the project directory with an explicit working directory; the tool
//! never changes its own process state.

use std::process::{Command, Stdio};

use camino::Utf8Path;
use ck_core::PackageManager;
use color_eyre::eyre::{ensure, WrapErr};
use color_eyre::Result;
use tracing::debug;

/// Commit message for the scaffold's initial commit.
const INITIAL_COMMIT_MESSAGE: &str = "Initial commit: Next.js starter kit setup";

/// Initializes a git repository in the project directory and creates
/// the initial commit.
///
/// # Errors
///
/// Returns an error if `git` cannot be spawned or any step exits
/// non-zero. The caller reports this as a non-fatal warning.
pub fn git_init(project: &Utf8Path) -> Result<()> {
    run("git", &["init"], project, true)?;
    run("git", &["add", "."], project, true)?;
    run("git", &["commit", "-m", INITIAL_COMMIT_MESSAGE], project, true)
}

/// Installs dependencies with the chosen package manager.
///
/// Output is passed through so the user sees installer progress.
///
/// # Errors
///
/// Returns an error if the package manager cannot be spawned or exits
/// non-zero. The caller reports this as a non-fatal warning.
pub fn install_deps(project: &Utf8Path, package_manager: PackageManager) -> Result<()> {
    run(
        package_manager.label(),
        package_manager.install_args(),
        project,
        false,
    )
}

/// Runs a command rooted to an explicit working directory.
fn run(program: &str, args: &[&str], working_dir: &Utf8Path, quiet: bool) -> Result<()> {
    debug!(program, ?args, dir = %working_dir, "Running post-setup command");

    let mut command = Command::new(program);
    command.args(args).current_dir(working_dir.as_std_path());
    if quiet {
        command.stdout(Stdio::null()).stderr(Stdio::null());
    }

    let status = command
        .status()
        .wrap_err_with(|| format!("failed to run {program}"))?;
    ensure!(status.success(), "{program} exited with status {status}");
    Ok(())
}
