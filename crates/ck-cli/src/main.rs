//! CLI entry point for the create-kit scaffolder.
//!
//! This binary creates a new Next.js/TypeScript/Tailwind/Supabase
//! project from the template tree shipped with the tool.
//!
//! # Usage
//!
//! ```bash
//! create-kit [PROJECT_NAME] [OPTIONS]
//!
//! # Fully interactive
//! create-kit
//!
//! # Skip all prompts and accept defaults (npm, git init, install)
//! create-kit my-app --yes
//!
//! # Scaffold only, no git and no install
//! create-kit my-app --yes --no-git --no-install
//! ```
//!
//! Exit code is 0 only on full materialization success; validation and
//! materialization failures exit non-zero. Post-setup failures (git,
//! dependency install) are reported as warnings and do not change the
//! exit code.

#![deny(clippy::all)]
#![warn(missing_docs)]

mod postsetup;
mod progress;
mod prompt;

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use ck_core::{PackageManager, ProjectName, SetupOptions};
use ck_scaffold::{Materializer, TemplateSource};
use clap::Parser;
use console::style;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Banner shown before any prompting.
const BANNER: &str = r"
╔══════════════════════════════════════════════════════════════╗
║                        create-kit                            ║
║                                                              ║
║   Next.js + TypeScript + Tailwind + Supabase starter,        ║
║   scaffolded in one command.                                 ║
╚══════════════════════════════════════════════════════════════╝
";

/// Create a modern Next.js application with TypeScript, Tailwind CSS,
/// Shadcn/ui, and Supabase.
#[derive(Parser)]
#[command(name = "create-kit", version, about, long_about = None)]
struct Cli {
    /// Name of the project (prompted for when omitted).
    #[arg(value_name = "PROJECT_NAME")]
    project_name: Option<String>,

    /// Skip prompts and use defaults (npm, git init, install deps).
    #[arg(short = 'y', long)]
    yes: bool,

    /// Package manager to use (npm, yarn, pnpm).
    #[arg(long, value_name = "NAME")]
    package_manager: Option<PackageManager>,

    /// Skip git repository initialization.
    #[arg(long)]
    no_git: bool,

    /// Skip dependency installation.
    #[arg(long)]
    no_install: bool,

    /// Template directory to materialize.
    ///
    /// Defaults to the `templates/default` tree shipped with the tool.
    #[arg(long, value_name = "DIR", env = "CREATE_KIT_TEMPLATE_DIR")]
    template_dir: Option<Utf8PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `warn` by default so logs do
/// not interleave with the interactive output.
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "warn" };
        EnvFilter::new(level.to_owned())
    });

    // Check if colors should be disabled (flag or NO_COLOR env var)
    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_ansi(use_ansi))
        .with(filter)
        .init();
}

/// Resolves the current working directory as a UTF-8 path.
fn current_dir() -> color_eyre::Result<Utf8PathBuf> {
    let cwd = std::env::current_dir()?;
    Utf8PathBuf::from_path_buf(cwd)
        .map_err(|p| color_eyre::eyre::eyre!("current directory is not valid UTF-8: {}", p.display()))
}

/// Resolves the project name and setup options from flags and prompts.
///
/// With `--yes`, unanswered choices take their defaults; otherwise the
/// missing pieces are prompted for. Explicit flags always win.
fn resolve_inputs(cli: &Cli, cwd: &Utf8Path) -> color_eyre::Result<(ProjectName, SetupOptions)> {
    let name = match &cli.project_name {
        Some(raw) => ProjectName::validate(raw, cwd)?,
        None => prompt::project_name(cwd)?,
    };

    let options = if cli.yes {
        SetupOptions {
            package_manager: cli.package_manager.unwrap_or_default(),
            git_init: !cli.no_git,
            install_deps: !cli.no_install,
        }
    } else {
        prompt::setup_options(cli.package_manager, cli.no_git, cli.no_install)?
    };

    Ok((name, options))
}

// =============================================================================
// COMMAND IMPLEMENTATION
// =============================================================================

/// Runs the full scaffolding flow: materialize, then post-setup.
fn run(cli: &Cli) -> color_eyre::Result<()> {
    let cwd = current_dir()?;
    let (name, options) = resolve_inputs(cli, &cwd)?;
    let template = TemplateSource::discover(cli.template_dir.as_deref())?;

    info!(project = %name, template = %template.root(), "Creating project");

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    let _ = writeln!(
        handle,
        "\n📁 Creating project: {}",
        style(name.as_str()).bold()
    );
    drop(handle);

    let spinner = progress::spinner("Copying template files...");
    let destination = match Materializer::new(cwd).materialize(&name, &template) {
        Ok(destination) => {
            progress::succeed(&spinner, "Project files created and configured");
            destination
        }
        Err(e) => {
            progress::warn(&spinner, "Project creation failed");
            return Err(e.into());
        }
    };

    // Post-setup steps are fire-and-forget: the project already exists,
    // so a failure here is a warning, not an error exit.
    if options.git_init {
        let spinner = progress::spinner("Initializing git repository...");
        match postsetup::git_init(&destination) {
            Ok(()) => progress::succeed(&spinner, "Git repository initialized"),
            Err(e) => {
                progress::warn(&spinner, "Git initialization failed");
                warn!(error = %e, "You can run `git init` manually");
            }
        }
    }

    if options.install_deps {
        let spinner = progress::spinner("Installing dependencies...");
        match postsetup::install_deps(&destination, options.package_manager) {
            Ok(()) => progress::succeed(&spinner, "Dependencies installed"),
            Err(e) => {
                progress::warn(&spinner, "Dependency installation failed");
                warn!(
                    error = %e,
                    "You can run `{} install` manually",
                    options.package_manager
                );
            }
        }
    }

    print_success_message(&name, options.package_manager);
    Ok(())
}

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

/// Prints the next-steps block after a successful run.
fn print_success_message(name: &ProjectName, package_manager: PackageManager) {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let _ = writeln!(handle);
    let _ = writeln!(handle, "{}", style("🎉 Project created successfully!").green());
    let _ = writeln!(handle);
    let _ = writeln!(handle, "{}", style("Next steps:").blue());
    let _ = writeln!(handle, "  cd {name}");
    let _ = writeln!(
        handle,
        "  {:<28}# Start local Supabase",
        package_manager.run_script("supabase:start")
    );
    let _ = writeln!(
        handle,
        "  {:<28}# Start development server",
        package_manager.run_script("dev")
    );
    let _ = writeln!(handle);
    let _ = writeln!(handle, "{}", style("Documentation:").blue());
    let _ = writeln!(handle, "  Read README.md for detailed setup instructions");
    let _ = writeln!(handle, "  https://nextjs.org/docs for Next.js docs");
    let _ = writeln!(handle, "  https://supabase.com/docs for Supabase docs");
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.no_color);
    if cli.no_color || std::env::var("NO_COLOR").is_ok() {
        console::set_colors_enabled(false);
    }

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    let _ = writeln!(handle, "{}", style(BANNER).cyan());
    drop(handle);

    run(&cli)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["create-kit"]);
        assert!(cli.project_name.is_none());
        assert!(!cli.yes);
        assert!(cli.package_manager.is_none());
        assert!(!cli.no_git);
        assert!(!cli.no_install);
    }

    #[test]
    fn test_cli_yes_mode_flags() {
        let cli = Cli::parse_from([
            "create-kit",
            "my-app",
            "--yes",
            "--package-manager",
            "pnpm",
            "--no-install",
        ]);
        assert_eq!(cli.project_name.as_deref(), Some("my-app"));
        assert!(cli.yes);
        assert_eq!(cli.package_manager, Some(PackageManager::Pnpm));
        assert!(cli.no_install);
    }

    #[test]
    fn test_cli_rejects_unknown_package_manager() {
        let result = Cli::try_parse_from(["create-kit", "--package-manager", "bun"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_inputs_yes_mode() {
        let temp = tempfile::tempdir().expect("Failed to create temp directory");
        let cwd = Utf8Path::from_path(temp.path()).expect("Invalid path");

        let cli = Cli::parse_from(["create-kit", "demo", "--yes", "--no-git"]);
        let (name, options) = resolve_inputs(&cli, cwd).expect("Inputs should resolve");

        assert_eq!(name.as_str(), "demo");
        assert_eq!(options.package_manager, PackageManager::Npm);
        assert!(!options.git_init);
        assert!(options.install_deps);
    }

    #[test]
    fn test_resolve_inputs_rejects_invalid_name() {
        let temp = tempfile::tempdir().expect("Failed to create temp directory");
        let cwd = Utf8Path::from_path(temp.path()).expect("Invalid path");

        let cli = Cli::parse_from(["create-kit", "Bad Name", "--yes"]);
        assert!(resolve_inputs(&cli, cwd).is_err());
    }
}
