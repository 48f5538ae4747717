//! Command path helpers.
//!
//! Utilities for turning a line of frontend input into the token sequence
//! the trie consumes, and back into text for diagnostics.

/// The reserved segment that matches any remaining path suffix.
pub const WILDCARD: &str = "*";

/// Returns true if `segment` is the wildcard token.
pub fn is_wildcard(segment: &str) -> bool {
    segment == WILDCARD
}

/// Joins a command path with single spaces.
///
/// For example, `["auth", "user"]` becomes `"auth user"`.
pub fn path_to_string<S: AsRef<str>>(path: &[S]) -> String {
    path.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits a line of input on whitespace into a command path.
///
/// Runs of whitespace collapse, so `"  auth   user "` becomes
/// `["auth", "user"]`. An empty or blank line yields an empty path.
pub fn string_to_path(s: &str) -> Vec<String> {
    s.split_whitespace().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_wildcard() {
        assert!(is_wildcard("*"));
        assert!(!is_wildcard("**"));
        assert!(!is_wildcard("a*"));
    }

    #[test]
    fn test_path_to_string() {
        assert_eq!(path_to_string(&["auth", "user"]), "auth user");
        assert_eq!(path_to_string(&["list"]), "list");
        assert_eq!(path_to_string::<&str>(&[]), "");
    }

    #[test]
    fn test_string_to_path() {
        assert_eq!(string_to_path("auth user create"), vec!["auth", "user", "create"]);
        assert_eq!(string_to_path("  auth \t user  "), vec!["auth", "user"]);
        assert_eq!(string_to_path(""), Vec::<String>::new());
        assert_eq!(string_to_path("   "), Vec::<String>::new());
    }
}
