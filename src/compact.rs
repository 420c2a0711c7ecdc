//! Compact claim listing.
//!
//! Claims sharing a suffix are folded into one comma joined segment, so
//! `store:view:*` and `store:edit:*` print as `store:edit,view:*`. The claims
//! are reversed into a suffix trie, identical siblings are merged bottom-up,
//! and the result is flattened and reversed back.

use std::collections::BTreeMap;

use crate::parser::{SEGMENT_SEPARATOR, TERM_SEPARATOR};
use crate::trie::Node;

/// Trie over reversed claims. Unlike [`Node`], a claim may end at an inner
/// node, so termination is tracked explicitly.
#[derive(Debug, Default, PartialEq, Eq)]
struct SuffixTrie {
    terminal: bool,
    children: BTreeMap<String, SuffixTrie>,
}

impl SuffixTrie {
    fn from_paths<'a>(paths: impl IntoIterator<Item = Vec<&'a str>>) -> Self {
        let mut root = Self::default();
        for path in paths {
            let mut node = &mut root;
            for segment in path.into_iter().rev() {
                node = node.children.entry(segment.to_string()).or_default();
            }
            node.terminal = true;
        }
        root
    }

    /// Merge structurally identical siblings, children first.
    fn merge_siblings(&mut self) {
        for child in self.children.values_mut() {
            child.merge_siblings();
        }

        let mut groups: Vec<(Vec<String>, SuffixTrie)> = Vec::with_capacity(self.children.len());
        for (key, child) in std::mem::take(&mut self.children) {
            match groups.iter_mut().find(|(_, node)| *node == child) {
                Some((keys, _)) => keys.push(key),
                None => groups.push((vec![key], child)),
            }
        }

        let separator = TERM_SEPARATOR.to_string();
        self.children = groups
            .into_iter()
            .map(|(keys, node)| (keys.join(separator.as_str()), node))
            .collect();
    }

    /// Flatten back into forward claims.
    fn collect<'a>(&'a self, path: &mut Vec<&'a str>, claims: &mut Vec<String>) {
        if self.terminal && !path.is_empty() {
            let forward: Vec<&str> = path.iter().rev().copied().collect();
            claims.push(forward.join(SEGMENT_SEPARATOR.to_string().as_str()));
        }
        for (segment, child) in &self.children {
            path.push(segment);
            child.collect(path, claims);
            path.pop();
        }
    }
}

/// Claims of `trie` with shared suffixes folded into multi-term segments.
///
/// The output is accepted back by claim insertion.
pub fn compact_claims(trie: &Node) -> Vec<String> {
    let mut suffixes = SuffixTrie::from_paths(trie.paths());
    suffixes.merge_siblings();

    let mut claims = Vec::new();
    suffixes.collect(&mut Vec::new(), &mut claims);
    claims
}
