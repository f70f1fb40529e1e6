//! Read-only access to the shipped template tree.
//!
//! This module provides [`TemplateSource`], which enumerates and reads
//! the static scaffold directory that ships with the tool. The source
//! is never mutated; repeated reads return identical bytes as long as
//! nothing modifies the directory between calls.

use camino::{Utf8Path, Utf8PathBuf};
use ignore::WalkBuilder;
use tracing::debug;

use crate::error::ScaffoldError;

/// Relative location of the default template next to the installed binary.
const DEFAULT_TEMPLATE_SUBDIR: &str = "templates/default";

/// A read-only view of the template directory tree.
///
/// # Examples
///
/// ```ignore
/// use ck_scaffold::TemplateSource;
/// use camino::Utf8Path;
///
/// let template = TemplateSource::new(Utf8Path::new("./templates/default"))?;
/// for rel in template.files()? {
///     println!("template ships {rel}");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TemplateSource {
    /// Absolute or cwd-relative root of the template tree.
    root: Utf8PathBuf,
}

impl TemplateSource {
    /// Creates a template source rooted at the given directory.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::TemplateNotFound`] if the root does not
    /// exist or is not a directory. This is a fatal configuration error,
    /// not a user-input error.
    pub fn new(root: &Utf8Path) -> Result<Self, ScaffoldError> {
        if !root.is_dir() {
            return Err(ScaffoldError::TemplateNotFound(root.to_owned()));
        }

        Ok(Self {
            root: root.to_owned(),
        })
    }

    /// Locates the template directory shipped with the tool.
    ///
    /// Resolution order:
    ///
    /// 1. `explicit`, when given (the `--template-dir` flag, which also
    ///    picks up the `CREATE_KIT_TEMPLATE_DIR` environment variable)
    /// 2. `templates/default` next to the executable
    /// 3. `templates/default` two levels above the executable (covers
    ///    `target/debug` and `target/release` during development)
    /// 4. `templates/default` relative to the current directory
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::TemplateNotFound`] naming the last
    /// candidate when no location holds a template directory.
    pub fn discover(explicit: Option<&Utf8Path>) -> Result<Self, ScaffoldError> {
        if let Some(root) = explicit {
            return Self::new(root);
        }

        let mut candidates: Vec<Utf8PathBuf> = Vec::new();
        if let Ok(exe) = std::env::current_exe() {
            if let Some(exe) = Utf8Path::from_path(&exe) {
                if let Some(dir) = exe.parent() {
                    candidates.push(dir.join(DEFAULT_TEMPLATE_SUBDIR));
                    candidates.push(dir.join("../..").join(DEFAULT_TEMPLATE_SUBDIR));
                }
            }
        }
        candidates.push(Utf8PathBuf::from(DEFAULT_TEMPLATE_SUBDIR));

        for candidate in &candidates {
            if candidate.is_dir() {
                debug!(root = %candidate, "Template directory located");
                return Self::new(candidate);
            }
        }

        Err(ScaffoldError::TemplateNotFound(Utf8PathBuf::from(
            DEFAULT_TEMPLATE_SUBDIR,
        )))
    }

    /// Returns the template root directory.
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Enumerates every file in the template tree.
    ///
    /// Returns paths relative to the root, in sorted order so a run is
    /// deterministic. Directories are implied by the file paths and not
    /// listed separately.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Walk`] if traversal fails and
    /// [`ScaffoldError::NonUtf8Path`] for non-UTF-8 entries.
    pub fn files(&self) -> Result<Vec<Utf8PathBuf>, ScaffoldError> {
        let mut paths = Vec::new();

        // Templates legitimately ship dotfiles (.eslintrc.json, .env.example),
        // so the gitignore/hidden standard filters must stay off.
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .build();

        for result in walker {
            let entry = result?;

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.path();
            let utf8_path = Utf8Path::from_path(path)
                .ok_or_else(|| ScaffoldError::NonUtf8Path(path.to_owned()))?;

            // Walker yields absolute-ish paths rooted at `root`; store relative.
            let relative = utf8_path.strip_prefix(&self.root).unwrap_or(utf8_path);
            paths.push(relative.to_owned());
        }

        paths.sort_unstable();
        Ok(paths)
    }

    /// Reads the raw bytes of a template entry.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::CopyFailed`] naming the entry if the
    /// read fails.
    pub fn read(&self, relative: &Utf8Path) -> Result<Vec<u8>, ScaffoldError> {
        let path = self.root.join(relative);
        std::fs::read(path.as_std_path()).map_err(|e| ScaffoldError::copy(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(root: &Utf8Path, rel: &str, content: &[u8]) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent.as_std_path()).expect("Failed to create parent");
        }
        std::fs::write(path.as_std_path(), content).expect("Failed to write file");
    }

    fn temp_root(temp: &tempfile::TempDir) -> &Utf8Path {
        Utf8Path::from_path(temp.path()).expect("Invalid path")
    }

    #[test]
    fn test_new_rejects_missing_root() {
        let err = TemplateSource::new(Utf8Path::new("/nonexistent/template"));
        assert!(matches!(err, Err(ScaffoldError::TemplateNotFound(_))));
    }

    #[test]
    fn test_new_rejects_file_root() {
        let temp = tempfile::tempdir().expect("Failed to create temp directory");
        let root = temp_root(&temp);
        write_file(root, "not-a-dir", b"x");

        let err = TemplateSource::new(&root.join("not-a-dir"));
        assert!(matches!(err, Err(ScaffoldError::TemplateNotFound(_))));
    }

    #[test]
    fn test_files_are_relative_sorted_and_include_dotfiles() {
        let temp = tempfile::tempdir().expect("Failed to create temp directory");
        let root = temp_root(&temp);
        write_file(root, "package.json", b"{}");
        write_file(root, ".eslintrc.json", b"{}");
        write_file(root, "app/layout.tsx", b"export {}");
        write_file(root, "app/page.tsx", b"export {}");

        let template = TemplateSource::new(root).expect("Template should open");
        let files = template.files().expect("Walk should succeed");

        assert_eq!(
            files,
            vec![
                Utf8PathBuf::from(".eslintrc.json"),
                Utf8PathBuf::from("app/layout.tsx"),
                Utf8PathBuf::from("app/page.tsx"),
                Utf8PathBuf::from("package.json"),
            ]
        );
    }

    #[test]
    fn test_read_returns_identical_bytes_across_calls() {
        let temp = tempfile::tempdir().expect("Failed to create temp directory");
        let root = temp_root(&temp);
        write_file(root, "lib/supabase.ts", b"export const x = 1;");

        let template = TemplateSource::new(root).expect("Template should open");
        let first = template.read(Utf8Path::new("lib/supabase.ts")).expect("Read failed");
        let second = template.read(Utf8Path::new("lib/supabase.ts")).expect("Read failed");
        assert_eq!(first, second);
        assert_eq!(first, b"export const x = 1;");
    }

    #[test]
    fn test_read_missing_entry_fails_as_copy_error() {
        let temp = tempfile::tempdir().expect("Failed to create temp directory");
        let root = temp_root(&temp);

        let template = TemplateSource::new(root).expect("Template should open");
        let err = template.read(Utf8Path::new("missing.txt"));
        assert!(matches!(err, Err(ScaffoldError::CopyFailed { .. })));
    }

    #[test]
    fn test_discover_explicit_root() {
        let temp = tempfile::tempdir().expect("Failed to create temp directory");
        let root = temp_root(&temp);

        let template = TemplateSource::discover(Some(root)).expect("Discover should succeed");
        assert_eq!(template.root(), root);
    }
}
