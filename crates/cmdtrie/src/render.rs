//! Tree rendering.
//!
//! [`CommandTrie::render`] produces the indented text outline used for
//! debugging and help screens. [`CommandTrie::outline`] produces the same
//! shape as serializable data, and [`CommandTrie::render_as`] picks between
//! the two according to an [`OutputMode`].

use serde::Serialize;
use thiserror::Error;

use crate::trie::{CommandTrie, Node};

/// Controls how the tree is rendered.
///
/// This is the user-facing enum for an `--output` CLI flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputMode {
    /// Indented plain text, one segment per line
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

/// Errors that can occur during structured rendering.
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Serializable snapshot of one command and the commands below it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOutline {
    /// The segment naming this command.
    pub name: String,
    /// Child commands, in key order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CommandOutline>,
}

impl CommandOutline {
    fn from_node(name: &str, node: &Node) -> Self {
        Self {
            name: name.to_string(),
            children: node
                .children
                .iter()
                .map(|(key, child)| Self::from_node(key, child))
                .collect(),
        }
    }
}

impl CommandTrie {
    /// Renders the tree as indented text.
    ///
    /// Each registered segment gets its own line, indented by the configured
    /// width per level of depth. The root is not printed. Siblings appear in
    /// key order.
    ///
    /// ```rust
    /// use cmdtrie::CommandTrie;
    ///
    /// let mut trie = CommandTrie::new(|| {});
    /// trie.add_command(|| {}, &["auth"])?;
    /// trie.add_command(|| {}, &["auth", "user"])?;
    /// trie.add_command(|| {}, &["list"])?;
    ///
    /// assert_eq!(trie.render(), "auth\n  user\nlist\n");
    /// # Ok::<(), cmdtrie::TrieError>(())
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        render_children(&self.root, 0, self.config().indent, &mut out);
        out
    }

    /// Returns the top-level commands as serializable outlines.
    pub fn outline(&self) -> Vec<CommandOutline> {
        self.root
            .children
            .iter()
            .map(|(key, child)| CommandOutline::from_node(key, child))
            .collect()
    }

    /// Renders the tree in the given output mode.
    pub fn render_as(&self, mode: OutputMode) -> Result<String, SerializeError> {
        match mode {
            OutputMode::Text => Ok(self.render()),
            OutputMode::Json => Ok(serde_json::to_string_pretty(&self.outline())?),
            OutputMode::Yaml => Ok(serde_yaml::to_string(&self.outline())?),
        }
    }
}

fn render_children(node: &Node, depth: usize, indent: usize, out: &mut String) {
    for (key, child) in &node.children {
        out.push_str(&" ".repeat(depth * indent));
        out.push_str(key);
        out.push('\n');
        render_children(child, depth + 1, indent, out);
    }
}
