use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::parser::{SEGMENT_SEPARATOR, WILDCARD};

/// One level of the permission trie.
///
/// Serializes as a plain nested map (`{"store":{"view":{"*":{}}}}`), the
/// shape used by `dump`/`load`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Node {
    pub(crate) children: BTreeMap<String, Node>,
}

impl Node {
    /// Create an empty node
    pub fn new() -> Self {
        Self::default()
    }

    /// Node holding a single empty `*` child, the terminal marker of a claim
    pub fn wildcard() -> Self {
        Self::new().with_child(WILDCARD, Self::new())
    }

    /// Add a child, replacing any existing child with the same key
    pub fn with_child(mut self, segment: impl Into<String>, child: Node) -> Self {
        self.children.insert(segment.into(), child);
        self
    }

    /// Whether the node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Child reached through `segment`
    pub fn get(&self, segment: &str) -> Option<&Node> {
        self.children.get(segment)
    }

    /// The `*` child, if any
    pub fn wildcard_child(&self) -> Option<&Node> {
        self.children.get(WILDCARD)
    }

    /// Direct children in key order
    pub fn children(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every root-to-leaf path, depth first in key order.
    pub fn paths(&self) -> Vec<Vec<&str>> {
        let mut paths = Vec::new();
        let mut path = Vec::new();
        for (segment, child) in &self.children {
            collect_paths(child, segment, &mut path, &mut paths);
        }
        paths
    }

    /// Every claim stored in the trie, segments joined with `:`.
    pub fn claims(&self) -> Vec<String> {
        let separator = SEGMENT_SEPARATOR.to_string();
        self.paths()
            .into_iter()
            .map(|path| path.join(separator.as_str()))
            .collect()
    }
}

fn collect_paths<'a>(
    node: &'a Node,
    segment: &'a str,
    path: &mut Vec<&'a str>,
    paths: &mut Vec<Vec<&'a str>>,
) {
    path.push(segment);
    if node.is_leaf() {
        paths.push(path.clone());
    } else {
        for (next, child) in &node.children {
            collect_paths(child, next, path, paths);
        }
    }
    path.pop();
}
