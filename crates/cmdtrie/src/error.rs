//! Error types for command routing and dispatch.

use thiserror::Error;

/// Errors produced while inserting, removing, or resolving command paths.
///
/// Positions are zero-based indexes into the supplied path. Where a `last`
/// field is present it holds the index of the final segment, so a failure on
/// the first token of `["a", "b", "c"]` reads "position 0 of 2".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrieError {
    /// Insertion and removal need at least one segment.
    #[error("command path is empty")]
    EmptyPath,

    /// A non-final segment of an insertion path has not been registered yet.
    #[error("does not contain node '{segment}' in path at position {position} of {last}")]
    MissingAncestor {
        segment: String,
        position: usize,
        last: usize,
    },

    /// The wildcard token appeared somewhere other than the end of the path.
    #[error("wildcard cannot have children: '*' at position {position} of {last}")]
    WildcardMustBeTerminal { position: usize, last: usize },

    /// A non-final segment did not match any child during lookup.
    #[error("does not contain node '{segment}' at position {position}")]
    MissingSegment { segment: String, position: usize },

    /// The final segment did not match any child during lookup.
    #[error("command '{path}' does not exist")]
    NotFound { path: String },

    /// The path is already registered and the trie rejects duplicates.
    #[error("command '{path}' is already registered")]
    AlreadyExists { path: String },

    /// Lookup ran past the end of the path without resolving.
    ///
    /// This indicates a bug in the traversal, not bad input.
    #[error("internal error: traversal exhausted the path without resolving")]
    TraversalExhausted,
}

impl TrieError {
    /// Returns true for errors caused by the caller's input.
    ///
    /// Only [`TrieError::TraversalExhausted`] is an internal fault.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, TrieError::TraversalExhausted)
    }

    /// Returns the offending segment, if the error names one.
    pub fn segment(&self) -> Option<&str> {
        match self {
            TrieError::MissingAncestor { segment, .. }
            | TrieError::MissingSegment { segment, .. } => Some(segment),
            TrieError::WildcardMustBeTerminal { .. } => Some(crate::path::WILDCARD),
            _ => None,
        }
    }

    /// Returns the zero-based position of the offending segment, if known.
    pub fn position(&self) -> Option<usize> {
        match self {
            TrieError::MissingAncestor { position, .. }
            | TrieError::WildcardMustBeTerminal { position, .. }
            | TrieError::MissingSegment { position, .. } => Some(*position),
            _ => None,
        }
    }
}

/// Errors from resolving a path and running its handler in one step.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The path could not be resolved to a handler.
    #[error(transparent)]
    Route(#[from] TrieError),

    /// The handler ran and failed.
    #[error("handler failed: {0}")]
    Handler(#[source] anyhow::Error),
}

impl DispatchError {
    /// Returns the routing error, if this was one.
    pub fn as_route(&self) -> Option<&TrieError> {
        match self {
            DispatchError::Route(e) => Some(e),
            DispatchError::Handler(_) => None,
        }
    }
}

/// Result type for trie operations.
pub type Result<T> = std::result::Result<T, TrieError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_ancestor_message() {
        let err = TrieError::MissingAncestor {
            segment: "a".into(),
            position: 0,
            last: 2,
        };
        assert_eq!(
            err.to_string(),
            "does not contain node 'a' in path at position 0 of 2"
        );
        assert_eq!(err.segment(), Some("a"));
        assert_eq!(err.position(), Some(0));
    }

    #[test]
    fn test_wildcard_error_names_wildcard() {
        let err = TrieError::WildcardMustBeTerminal {
            position: 1,
            last: 2,
        };
        assert_eq!(err.segment(), Some("*"));
        assert_eq!(err.position(), Some(1));
    }

    #[test]
    fn test_user_error_classification() {
        assert!(TrieError::EmptyPath.is_user_error());
        assert!(TrieError::NotFound { path: "x".into() }.is_user_error());
        assert!(!TrieError::TraversalExhausted.is_user_error());
    }

    #[test]
    fn test_dispatch_error_from_route() {
        let err: DispatchError = TrieError::NotFound { path: "x".into() }.into();
        assert!(matches!(
            err.as_route(),
            Some(TrieError::NotFound { .. })
        ));
        assert_eq!(err.to_string(), "command 'x' does not exist");
    }

    #[test]
    fn test_dispatch_error_handler() {
        let err = DispatchError::Handler(anyhow::anyhow!("boom"));
        assert!(err.as_route().is_none());
        assert_eq!(err.to_string(), "handler failed: boom");
    }
}
