//! Validated project names.
//!
//! This module provides [`ProjectName`], the validated identifier used
//! both as the destination directory name and as the replacement value
//! for placeholder tokens. Validation happens exactly once, up front;
//! the type is immutable afterwards.

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::ValidationError;

/// A validated project name.
///
/// Invariants, established by [`ProjectName::validate`]:
///
/// - non-empty after trimming whitespace
/// - contains only lowercase ASCII letters, digits, and hyphens
/// - no filesystem entry existed at `cwd/<name>` at validation time
///
/// # Examples
///
/// ```
/// use ck_core::ProjectName;
/// use camino::Utf8Path;
///
/// let name = ProjectName::validate("my-cool-app", Utf8Path::new("/nonexistent-cwd"))?;
/// assert_eq!(name.as_str(), "my-cool-app");
/// assert_eq!(name.camel(), "myCoolApp");
/// # Ok::<(), ck_core::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validates a raw name against the working directory it will be
    /// created in.
    ///
    /// The input is trimmed before any check. The existence probe is the
    /// only filesystem access; nothing is created or modified.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyName`] if the trimmed input is empty
    /// - [`ValidationError::InvalidCharacters`] if any character falls
    ///   outside `[a-z0-9-]`
    /// - [`ValidationError::DestinationExists`] if `cwd/<name>` already
    ///   exists as a file or directory
    pub fn validate(raw: &str, cwd: &Utf8Path) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        if !trimmed.chars().all(is_name_char) {
            return Err(ValidationError::invalid_characters(trimmed));
        }

        let destination = cwd.join(trimmed);
        if destination.as_std_path().exists() {
            return Err(ValidationError::destination_exists(destination));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the camelCase derivation of this name.
    ///
    /// The name is split on hyphens; the first segment is kept as-is
    /// and every later segment gets an uppercased first letter. Empty
    /// segments contribute nothing, so a leading hyphen uppercases the
    /// segment that follows it (`-app` becomes `App`).
    ///
    /// # Examples
    ///
    /// ```
    /// use ck_core::ProjectName;
    /// use camino::Utf8Path;
    ///
    /// let name = ProjectName::validate("my-cool-app", Utf8Path::new("/nonexistent-cwd"))?;
    /// assert_eq!(name.camel(), "myCoolApp");
    /// # Ok::<(), ck_core::ValidationError>(())
    /// ```
    #[must_use]
    pub fn camel(&self) -> String {
        let mut segments = self.0.split('-');
        let mut camel = String::with_capacity(self.0.len());
        if let Some(first) = segments.next() {
            camel.push_str(first);
        }
        for segment in segments {
            let mut chars = segment.chars();
            if let Some(head) = chars.next() {
                camel.push(head.to_ascii_uppercase());
                camel.push_str(chars.as_str());
            }
        }
        camel
    }

    /// Resolves the destination directory for this name under `cwd`.
    #[must_use]
    pub fn destination(&self, cwd: &Utf8Path) -> Utf8PathBuf {
        cwd.join(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ProjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Checks whether a character is allowed in a project name.
const fn is_name_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cwd() -> &'static Utf8Path {
        // A path that never exists, so the destination probe always passes.
        Utf8Path::new("/nonexistent/create-kit-test-cwd")
    }

    #[test]
    fn test_valid_names_pass_unchanged() {
        for raw in ["demo", "my-app", "app2", "a-b-c", "x-1-y-2"] {
            let name = ProjectName::validate(raw, cwd()).unwrap();
            assert_eq!(name.as_str(), raw);
        }
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let name = ProjectName::validate("  demo \n", cwd()).unwrap();
        assert_eq!(name.as_str(), "demo");
    }

    #[test]
    fn test_empty_name_rejected() {
        for raw in ["", "   ", "\t\n"] {
            assert!(matches!(
                ProjectName::validate(raw, cwd()),
                Err(ValidationError::EmptyName)
            ));
        }
    }

    #[test]
    fn test_invalid_characters_rejected() {
        for raw in ["My-App", "my app", "my_app", "app!", "café", "a.b", "Demo1"] {
            assert!(
                matches!(
                    ProjectName::validate(raw, cwd()),
                    Err(ValidationError::InvalidCharacters { .. })
                ),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_existing_destination_rejected() {
        let temp = tempfile::tempdir().expect("Failed to create temp directory");
        let cwd = Utf8Path::from_path(temp.path()).expect("Invalid path");

        std::fs::create_dir(cwd.join("taken").as_std_path()).expect("Failed to create dir");
        assert!(matches!(
            ProjectName::validate("taken", cwd),
            Err(ValidationError::DestinationExists { .. })
        ));

        // A plain file also blocks the destination.
        std::fs::write(cwd.join("occupied").as_std_path(), b"x").expect("Failed to write file");
        assert!(matches!(
            ProjectName::validate("occupied", cwd),
            Err(ValidationError::DestinationExists { .. })
        ));
    }

    #[test]
    fn test_camel_derivation() {
        let cases = [
            ("my-cool-app", "myCoolApp"),
            ("app", "app"),
            ("a-b-c", "aBC"),
            ("demo2", "demo2"),
            // Leading hyphen: the first segment is empty, so the
            // following segment still gets its uppercase letter.
            ("-app", "App"),
            ("a--b", "aB"),
        ];
        for (raw, expected) in cases {
            let name = ProjectName::validate(raw, cwd()).unwrap();
            assert_eq!(name.camel(), expected, "camel({raw})");
        }
    }

    #[test]
    fn test_destination_resolution() {
        let name = ProjectName::validate("demo", cwd()).unwrap();
        assert_eq!(
            name.destination(Utf8Path::new("/work")),
            Utf8PathBuf::from("/work/demo")
        );
    }
}
