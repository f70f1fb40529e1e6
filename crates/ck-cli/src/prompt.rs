//! Interactive prompts for project setup.
//!
//! The prompts collect a raw name string and a [`SetupOptions`]-shaped
//! answer set; all real validation lives in `ck-core` and runs both
//! inline (while typing) and once more on the final answer.

use camino::Utf8Path;
use ck_core::{PackageManager, ProjectName, SetupOptions};
use color_eyre::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

/// Shared prompt theme.
fn theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

/// Prompts for the project name, validating inline.
///
/// # Errors
///
/// Returns an error if prompt I/O fails or the final answer does not
/// validate (e.g. the destination appeared between keystrokes and
/// submission).
pub fn project_name(cwd: &Utf8Path) -> Result<ProjectName> {
    let probe_cwd = cwd.to_owned();
    let raw: String = Input::with_theme(&theme())
        .with_prompt("What is your project named?")
        .default("my-app".to_owned())
        .validate_with(move |input: &String| -> Result<(), String> {
            ProjectName::validate(input, &probe_cwd)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?;

    Ok(ProjectName::validate(&raw, cwd)?)
}

/// Prompts for the package manager (default: npm).
///
/// # Errors
///
/// Returns an error if prompt I/O fails.
pub fn package_manager() -> Result<PackageManager> {
    let labels: Vec<&str> = PackageManager::ALL.iter().map(|pm| pm.label()).collect();
    let index = Select::with_theme(&theme())
        .with_prompt("Which package manager would you like to use?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(PackageManager::ALL.get(index).copied().unwrap_or_default())
}

/// Asks a yes/no question with a default answer.
///
/// # Errors
///
/// Returns an error if prompt I/O fails.
pub fn confirm(question: &str, default: bool) -> Result<bool> {
    Ok(Confirm::with_theme(&theme())
        .with_prompt(question)
        .default(default)
        .interact()?)
}

/// Collects the full interactive answer set.
///
/// CLI flags take precedence: an explicit `--package-manager`,
/// `--no-git`, or `--no-install` suppresses the corresponding question.
///
/// # Errors
///
/// Returns an error if prompt I/O fails.
pub fn setup_options(
    package_manager_flag: Option<PackageManager>,
    no_git: bool,
    no_install: bool,
) -> Result<SetupOptions> {
    let package_manager = match package_manager_flag {
        Some(pm) => pm,
        None => package_manager()?,
    };
    let git_init = if no_git {
        false
    } else {
        confirm("Initialize a new git repository?", true)?
    };
    let install_deps = if no_install {
        false
    } else {
        confirm("Install dependencies after setup?", true)?
    };

    Ok(SetupOptions {
        package_manager,
        git_init,
        install_deps,
    })
}
