//! Placeholder token substitution.
//!
//! Substitution here is deliberately not a templating language: there
//! are no conditionals, no loops, no escaping. A fixed set of literal
//! tokens is replaced with run-specific values in a single
//! left-to-right scan, and only files on the [`SUBSTITUTION_TARGETS`]
//! allow-list are ever text-processed. Everything else is copied
//! byte-for-byte, which keeps binary assets and token-shaped text in
//! unlisted files intact.

use camino::Utf8Path;
use ck_core::ProjectName;

/// Token replaced with the raw project name.
pub const TOKEN_PROJECT_NAME: &str = "{{PROJECT_NAME}}";

/// Token replaced with the camelCase project name.
pub const TOKEN_PROJECT_NAME_CAMEL: &str = "{{PROJECT_NAME_CAMEL}}";

/// Files eligible for placeholder substitution, relative to the
/// materialized project root.
///
/// This is a fixed allow-list rather than a whole-tree scan: scanning
/// every file would risk corrupting binary assets and files whose
/// content coincidentally contains token-shaped text.
pub const SUBSTITUTION_TARGETS: &[&str] = &[
    "package.json",
    "README.md",
    "next.config.js",
    "tailwind.config.ts",
    "tsconfig.json",
    ".eslintrc.json",
    "app/layout.tsx",
    "app/page.tsx",
];

/// The token → replacement mapping for one run.
///
/// Computed once from the validated [`ProjectName`]. Replacement values
/// are derived from a `[a-z0-9-]+` name, so by construction they can
/// never contain a token.
///
/// # Examples
///
/// ```
/// use ck_core::ProjectName;
/// use ck_scaffold::{substitute, TokenMap};
/// use camino::Utf8Path;
///
/// let name = ProjectName::validate("demo", Utf8Path::new("/nonexistent-cwd"))?;
/// let tokens = TokenMap::new(&name);
/// assert_eq!(substitute("name: {{PROJECT_NAME}}", &tokens), "name: demo");
/// # Ok::<(), ck_core::ValidationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TokenMap {
    /// (token, replacement) pairs in match-priority order.
    entries: Vec<(&'static str, String)>,
}

impl TokenMap {
    /// Builds the token map for a project name.
    #[must_use]
    pub fn new(name: &ProjectName) -> Self {
        Self {
            entries: vec![
                // Longer token first so {{PROJECT_NAME_CAMEL}} is never
                // half-matched as {{PROJECT_NAME}} followed by `_CAMEL}}`.
                (TOKEN_PROJECT_NAME_CAMEL, name.camel()),
                (TOKEN_PROJECT_NAME, name.as_str().to_owned()),
            ],
        }
    }

    /// Returns the (token, replacement) pairs in match-priority order.
    #[must_use]
    pub fn entries(&self) -> &[(&'static str, String)] {
        &self.entries
    }
}

/// Replaces every token occurrence in `content`.
///
/// The content is scanned once, left to right. At each position the
/// earliest-matching token wins (ties broken by token-map order), its
/// replacement is emitted, and scanning resumes after the matched
/// token. Replacement output is never rescanned: if a replacement
/// happened to contain another token's literal text, it would not be
/// substituted again. There is no fixpoint iteration.
///
/// Because substituted output contains no source tokens, running
/// substitution a second time is a no-op.
#[must_use]
pub fn substitute(content: &str, tokens: &TokenMap) -> String {
    let mut output = String::with_capacity(content.len());
    let mut rest = content;

    loop {
        let mut earliest: Option<(usize, &str, &str)> = None;
        for (token, replacement) in tokens.entries() {
            if let Some(pos) = rest.find(token) {
                let is_better = earliest.is_none_or(|(best, _, _)| pos < best);
                if is_better {
                    earliest = Some((pos, *token, replacement.as_str()));
                }
            }
        }

        let Some((pos, token, replacement)) = earliest else {
            output.push_str(rest);
            return output;
        };

        output.push_str(&rest[..pos]);
        output.push_str(replacement);
        rest = &rest[pos + token.len()..];
    }
}

/// Checks whether a project-relative path is eligible for substitution.
#[must_use]
pub fn is_substitution_target(relative: &Utf8Path) -> bool {
    SUBSTITUTION_TARGETS
        .iter()
        .any(|target| relative.as_str() == *target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens_for(raw: &str) -> TokenMap {
        let name = ProjectName::validate(raw, Utf8Path::new("/nonexistent/ck-test-cwd"))
            .expect("Test name should validate");
        TokenMap::new(&name)
    }

    #[test]
    fn test_round_trip_single_token() {
        let tokens = tokens_for("demo");
        assert_eq!(substitute("name: {{PROJECT_NAME}}", &tokens), "name: demo");
    }

    #[test]
    fn test_both_tokens_and_all_occurrences() {
        let tokens = tokens_for("my-cool-app");
        let input = "{{PROJECT_NAME}} / {{PROJECT_NAME_CAMEL}} / {{PROJECT_NAME}}";
        assert_eq!(
            substitute(input, &tokens),
            "my-cool-app / myCoolApp / my-cool-app"
        );
    }

    #[test]
    fn test_idempotent_on_substituted_output() {
        let tokens = tokens_for("demo");
        let once = substitute("{\"name\": \"{{PROJECT_NAME}}\"}", &tokens);
        let twice = substitute(&once, &tokens);
        assert_eq!(once, twice);
        assert_eq!(once, "{\"name\": \"demo\"}");
    }

    #[test]
    fn test_camel_token_not_half_matched_as_raw_token() {
        let tokens = tokens_for("my-app");
        assert_eq!(substitute("{{PROJECT_NAME_CAMEL}}", &tokens), "myApp");
    }

    #[test]
    fn test_replacement_output_is_never_rescanned() {
        // Hand-built map where one replacement contains the other token's
        // literal text. The inserted text must survive unsubstituted.
        let tokens = TokenMap {
            entries: vec![
                (TOKEN_PROJECT_NAME_CAMEL, "camel".to_owned()),
                (TOKEN_PROJECT_NAME, "x{{PROJECT_NAME_CAMEL}}x".to_owned()),
            ],
        };
        assert_eq!(
            substitute("{{PROJECT_NAME}}", &tokens),
            "x{{PROJECT_NAME_CAMEL}}x"
        );
    }

    #[test]
    fn test_content_without_tokens_unchanged() {
        let tokens = tokens_for("demo");
        let input = "plain text {PROJECT_NAME} {{project_name}}";
        assert_eq!(substitute(input, &tokens), input);
    }

    #[test]
    fn test_substitution_target_allow_list() {
        assert!(is_substitution_target(Utf8Path::new("package.json")));
        assert!(is_substitution_target(Utf8Path::new("app/layout.tsx")));
        assert!(is_substitution_target(Utf8Path::new(".eslintrc.json")));

        assert!(!is_substitution_target(Utf8Path::new("lib/supabase.ts")));
        assert!(!is_substitution_target(Utf8Path::new("public/logo.png")));
        // Same file name, different directory: not a target.
        assert!(!is_substitution_target(Utf8Path::new("app/package.json")));
    }
}
