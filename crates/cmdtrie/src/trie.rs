//! The command trie.
//!
//! [`CommandTrie`] maps command paths to handlers. Each node owns its
//! children in a sorted map, keyed by segment. A node may also have a single
//! wildcard child (`*`) which matches any remaining suffix of a lookup path
//! and never has children of its own.
//!
//! # Lookup
//!
//! ```text
//! root (default handler)
//!  └─ test            parse(["test"])            → test
//!      ├─ 2           parse(["test", "2"])       → 2      (ExactFirst)
//!      └─ *           parse(["test", "x", "y"])  → *
//! ```
//!
//! With [`WildcardPrecedence::WildcardFirst`] the wildcard also shadows `2`.
//! Descending into an exact child never backtracks: once `test 2` is taken,
//! `test 2 x` fails even though `test *` exists.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

use tracing::{debug, trace};

use crate::config::{DuplicatePolicy, TrieBuilder, TrieConfig, WildcardPrecedence};
use crate::error::{DispatchError, Result, TrieError};
use crate::handler::{Handler, IntoBoxedHandler, MessageHandler};
use crate::path::{is_wildcard, path_to_string, WILDCARD};

/// A vertex of the trie: a handler and the children reachable from it.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) handler: Box<dyn Handler>,
    pub(crate) children: BTreeMap<String, Node>,
}

impl Node {
    fn new(handler: Box<dyn Handler>) -> Self {
        Self {
            handler,
            children: BTreeMap::new(),
        }
    }

    /// Follows `path` through exact children only.
    fn descend<S: AsRef<str>>(&self, path: &[S]) -> Option<&Node> {
        path.iter()
            .try_fold(self, |node, segment| node.children.get(segment.as_ref()))
    }

    fn descend_mut<S: AsRef<str>>(&mut self, path: &[S]) -> Option<&mut Node> {
        path.iter()
            .try_fold(self, |node, segment| node.children.get_mut(segment.as_ref()))
    }

    fn count(&self) -> usize {
        self.children.values().map(|child| 1 + child.count()).sum()
    }

    fn collect_paths(&self, prefix: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
        for (key, child) in &self.children {
            prefix.push(key.clone());
            out.push(prefix.clone());
            child.collect_paths(prefix, out);
            prefix.pop();
        }
    }
}

/// Where a lookup path resolved: the parent reached by following the first
/// `depth` segments exactly, and the key of the resolved child under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Located<'p> {
    depth: usize,
    key: &'p str,
}

/// A path-keyed command dispatch trie.
///
/// # Example
///
/// ```rust
/// use cmdtrie::CommandTrie;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let log = Rc::new(RefCell::new(Vec::new()));
///
/// let mut trie = CommandTrie::new(|| println!("usage: app <command>"));
/// let sink = log.clone();
/// trie.add_command(move || sink.borrow_mut().push("auth"), &["auth"])?;
/// let sink = log.clone();
/// trie.add_command(move || sink.borrow_mut().push("user"), &["auth", "user"])?;
///
/// trie.parse(&["auth", "user"])?.handle().unwrap();
/// assert_eq!(*log.borrow(), vec!["user"]);
/// # Ok::<(), cmdtrie::TrieError>(())
/// ```
#[derive(Debug)]
pub struct CommandTrie {
    pub(crate) root: Node,
    config: TrieConfig,
}

impl CommandTrie {
    /// Creates a trie with default settings whose empty path resolves to
    /// `default_handler`.
    pub fn new<M>(default_handler: impl IntoBoxedHandler<M>) -> Self {
        Self::with_config(default_handler.into_boxed_handler(), TrieConfig::default())
    }

    /// Creates a builder for a trie with custom settings.
    pub fn builder<M>(default_handler: impl IntoBoxedHandler<M>) -> TrieBuilder {
        TrieBuilder::new(default_handler)
    }

    pub(crate) fn with_config(default_handler: Box<dyn Handler>, config: TrieConfig) -> Self {
        Self {
            root: Node::new(default_handler),
            config,
        }
    }

    /// Returns the settings this trie was built with.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Registers `handler` at `path`.
    ///
    /// Every segment except the last must already be registered; only the
    /// final segment is created. The wildcard `*` is only allowed as the
    /// final segment. On failure the trie is left unchanged.
    ///
    /// Re-registering an existing path follows the configured
    /// [`DuplicatePolicy`].
    pub fn add_command<M, S: AsRef<str>>(
        &mut self,
        handler: impl IntoBoxedHandler<M>,
        path: &[S],
    ) -> Result<()> {
        self.insert(handler.into_boxed_handler(), path)
    }

    /// Registers a command that prints `message` to stdout.
    ///
    /// Same contract and failure modes as [`add_command`](Self::add_command).
    pub fn simple_message<S: AsRef<str>>(
        &mut self,
        message: impl Into<String>,
        path: &[S],
    ) -> Result<()> {
        self.insert(Box::new(MessageHandler::new(message)), path)
    }

    fn insert<S: AsRef<str>>(&mut self, handler: Box<dyn Handler>, path: &[S]) -> Result<()> {
        let Some((leaf, ancestors)) = path.split_last() else {
            return Err(TrieError::EmptyPath);
        };
        let last = path.len() - 1;

        if let Some(position) = ancestors.iter().position(|s| is_wildcard(s.as_ref())) {
            return Err(TrieError::WildcardMustBeTerminal { position, last });
        }

        let mut current = &mut self.root;
        for (position, segment) in ancestors.iter().enumerate() {
            let segment = segment.as_ref();
            current = current
                .children
                .get_mut(segment)
                .ok_or_else(|| TrieError::MissingAncestor {
                    segment: segment.to_string(),
                    position,
                    last,
                })?;
        }

        match current.children.entry(leaf.as_ref().to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(Node::new(handler));
                debug!(path = %path_to_string(path), "registered command");
                Ok(())
            }
            Entry::Occupied(mut slot) => match self.config.duplicate_policy {
                DuplicatePolicy::Ignore => {
                    debug!(path = %path_to_string(path), "command already registered, keeping existing handler");
                    Ok(())
                }
                DuplicatePolicy::Replace => {
                    slot.get_mut().handler = handler;
                    debug!(path = %path_to_string(path), "replaced command handler");
                    Ok(())
                }
                DuplicatePolicy::Reject => Err(TrieError::AlreadyExists {
                    path: path_to_string(path),
                }),
            },
        }
    }

    /// Detaches the command at `path`, dropping it and everything below it.
    ///
    /// The path is resolved like [`parse`](Self::parse), so a wildcard that
    /// absorbs the remaining segments is the node removed.
    pub fn remove_command<S: AsRef<str>>(&mut self, path: &[S]) -> Result<()> {
        if path.is_empty() {
            return Err(TrieError::EmptyPath);
        }

        let located = self.locate(path)?;
        let parent = self
            .root
            .descend_mut(&path[..located.depth])
            .ok_or(TrieError::TraversalExhausted)?;
        parent
            .children
            .remove(located.key)
            .ok_or(TrieError::TraversalExhausted)?;

        debug!(path = %path_to_string(path), key = located.key, "removed command");
        Ok(())
    }

    /// Resolves `path` to its handler.
    ///
    /// The empty path always resolves to the default handler.
    pub fn parse<S: AsRef<str>>(&self, path: &[S]) -> Result<&dyn Handler> {
        if path.is_empty() {
            trace!("empty path, using default handler");
            return Ok(self.root.handler.as_ref());
        }

        let located = self.locate(path)?;
        let node = self
            .root
            .descend(&path[..located.depth])
            .and_then(|parent| parent.children.get(located.key))
            .ok_or(TrieError::TraversalExhausted)?;

        trace!(path = %path_to_string(path), key = located.key, "resolved command");
        Ok(node.handler.as_ref())
    }

    /// Resolves `path` and runs its handler.
    pub fn dispatch<S: AsRef<str>>(
        &self,
        path: &[S],
    ) -> std::result::Result<(), DispatchError> {
        let handler = self.parse(path)?;
        handler.handle().map_err(DispatchError::Handler)
    }

    fn locate<'p, S: AsRef<str>>(&self, path: &'p [S]) -> Result<Located<'p>> {
        let last = path.len().saturating_sub(1);
        let mut current = &self.root;

        for (position, segment) in path.iter().enumerate() {
            let segment = segment.as_ref();
            let has_wildcard = current.children.contains_key(WILDCARD);
            let absorbed = Located {
                depth: position,
                key: WILDCARD,
            };

            if has_wildcard && self.config.wildcard_precedence == WildcardPrecedence::WildcardFirst
            {
                return Ok(absorbed);
            }

            match current.children.get(segment) {
                Some(_) if is_wildcard(segment) => return Ok(absorbed),
                Some(_) if position == last => {
                    return Ok(Located {
                        depth: position,
                        key: segment,
                    })
                }
                Some(child) => current = child,
                None if has_wildcard => return Ok(absorbed),
                None if position == last => {
                    return Err(TrieError::NotFound {
                        path: path_to_string(path),
                    })
                }
                None => {
                    return Err(TrieError::MissingSegment {
                        segment: segment.to_string(),
                        position,
                    })
                }
            }
        }

        Err(TrieError::TraversalExhausted)
    }

    /// Returns true if `path` is registered exactly, without wildcard
    /// absorption. The empty path is never a registered command.
    pub fn contains<S: AsRef<str>>(&self, path: &[S]) -> bool {
        !path.is_empty() && self.root.descend(path).is_some()
    }

    /// Returns the number of registered commands, not counting the root.
    pub fn len(&self) -> usize {
        self.root.count()
    }

    /// Returns true if no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Returns every registered path, depth-first in key order.
    pub fn paths(&self) -> Vec<Vec<String>> {
        let mut out = Vec::new();
        self.root.collect_paths(&mut Vec::new(), &mut out);
        out
    }

    /// Writes the text rendering of the tree to stdout.
    pub fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        out.write_all(self.render().as_bytes())?;
        out.flush()
    }
}

impl fmt::Display for CommandTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
