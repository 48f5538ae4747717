//! Trie configuration and builder.
//!
//! The defaults favor catch-all semantics for wildcards and keep the first
//! handler registered for a path. Both can be changed at build time:
//!
//! ```rust
//! use cmdtrie::{CommandTrie, DuplicatePolicy, WildcardPrecedence};
//!
//! let trie = CommandTrie::builder(|| println!("help"))
//!     .wildcard_precedence(WildcardPrecedence::WildcardFirst)
//!     .on_duplicate(DuplicatePolicy::Reject)
//!     .indent(4)
//!     .build();
//! assert_eq!(trie.config().indent, 4);
//! ```

use crate::handler::{Handler, IntoBoxedHandler};
use crate::trie::CommandTrie;

/// Decides whether a wildcard child or an exact child wins during lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WildcardPrecedence {
    /// An exact child for the current segment wins; the wildcard catches
    /// segments that have no exact child at that level.
    #[default]
    ExactFirst,
    /// A wildcard child short-circuits lookup before the current segment is
    /// consulted, shadowing every exact sibling.
    WildcardFirst,
}

/// What happens when a command is added at an already registered path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Keep the existing handler and report success.
    #[default]
    Ignore,
    /// Swap in the new handler, keeping the node's children.
    Replace,
    /// Fail with [`TrieError::AlreadyExists`](crate::TrieError::AlreadyExists).
    Reject,
}

/// Settings fixed for the lifetime of a [`CommandTrie`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrieConfig {
    /// Lookup order between wildcard and exact children.
    pub wildcard_precedence: WildcardPrecedence,
    /// Behavior when re-registering a path.
    pub duplicate_policy: DuplicatePolicy,
    /// Columns of indentation per depth level in text rendering.
    pub indent: usize,
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            wildcard_precedence: WildcardPrecedence::default(),
            duplicate_policy: DuplicatePolicy::default(),
            indent: 2,
        }
    }
}

/// Builder for a [`CommandTrie`] with non-default settings.
pub struct TrieBuilder {
    default_handler: Box<dyn Handler>,
    config: TrieConfig,
}

impl TrieBuilder {
    /// Creates a builder whose trie will resolve the empty path to `handler`.
    pub fn new<M>(handler: impl IntoBoxedHandler<M>) -> Self {
        Self {
            default_handler: handler.into_boxed_handler(),
            config: TrieConfig::default(),
        }
    }

    /// Sets the lookup order between wildcard and exact children.
    pub fn wildcard_precedence(mut self, precedence: WildcardPrecedence) -> Self {
        self.config.wildcard_precedence = precedence;
        self
    }

    /// Sets the behavior for re-registering an existing path.
    pub fn on_duplicate(mut self, policy: DuplicatePolicy) -> Self {
        self.config.duplicate_policy = policy;
        self
    }

    /// Sets the indentation width used by text rendering.
    pub fn indent(mut self, columns: usize) -> Self {
        self.config.indent = columns;
        self
    }

    /// Replaces all settings at once.
    pub fn config(mut self, config: TrieConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the trie.
    pub fn build(self) -> CommandTrie {
        CommandTrie::with_config(self.default_handler, self.config)
    }
}
