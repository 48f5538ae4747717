//! Path-keyed command dispatch for hierarchical CLIs.
//!
//! `cmdtrie` maps ordered command paths such as `["auth", "user", "create"]`
//! to zero-argument handlers, much like a URL router maps path segments to
//! handlers. The frontend tokenizes input, asks the trie for a handler, and
//! runs it.
//!
//! # Features
//!
//! - **Exact routing**: every segment of a path names a registered child
//! - **Wildcard terminals**: a `*` child absorbs any remaining segments
//! - **All-or-nothing insertion**: intermediate nodes are never auto-created
//! - **Rendering**: indented text, or JSON/YAML outlines via [`OutputMode`]
//!
//! # Usage
//!
//! ```rust
//! use cmdtrie::{CommandTrie, TrieError};
//!
//! let mut trie = CommandTrie::new(|| println!("usage: app <command>"));
//! trie.add_command(|| println!("auth"), &["auth"])?;
//! trie.add_command(|| println!("new user"), &["auth", "user"])?;
//! trie.simple_message("app 1.0", &["version"])?;
//!
//! // Every non-final segment must already exist.
//! assert!(matches!(
//!     trie.add_command(|| {}, &["db", "migrate"]),
//!     Err(TrieError::MissingAncestor { .. })
//! ));
//!
//! // The frontend invokes whatever the trie resolves.
//! let handler = trie.parse(&["auth", "user"])?;
//! handler.handle().unwrap();
//! # Ok::<(), TrieError>(())
//! ```
//!
//! # Wildcards
//!
//! A wildcard child catches everything below its parent:
//!
//! ```rust
//! use cmdtrie::CommandTrie;
//!
//! let mut trie = CommandTrie::new(|| {});
//! trie.add_command(|| {}, &["run"])?;
//! trie.add_command(|| println!("running script"), &["run", "*"])?;
//!
//! assert!(trie.parse(&["run", "build", "--release"]).is_ok());
//! # Ok::<(), cmdtrie::TrieError>(())
//! ```
//!
//! Whether an exact sibling or the wildcard wins is set with
//! [`WildcardPrecedence`]; see [`TrieBuilder`].
//!
//! # Concurrency
//!
//! The trie is single-threaded. Callers that need shared access must
//! serialize every operation behind one lock around the whole structure.

// Core modules
mod config;
mod error;
mod handler;
mod path;
mod render;
mod trie;

// Re-export core types
pub use config::{DuplicatePolicy, TrieBuilder, TrieConfig, WildcardPrecedence};

pub use error::{DispatchError, Result, TrieError};

pub use handler::{
    FnHandler, Handler, HandlerResult, IntoBoxedHandler, IntoHandlerResult, MessageHandler,
};

pub use path::{is_wildcard, path_to_string, string_to_path, WILDCARD};

pub use render::{CommandOutline, OutputMode, SerializeError};

pub use trie::CommandTrie;
