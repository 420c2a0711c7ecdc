use super::Node;
use crate::parser::WILDCARD;

impl Node {
    /// Check a parsed permission against the claims below this node.
    ///
    /// An empty trie grants nothing.
    pub fn matches(&self, segments: &[&str]) -> bool {
        !self.is_leaf() && match_node(Some(self), segments)
    }
}

/// Recursive matcher with backtracking.
///
/// A literal child is tried before the `*` child. A literal claim ending here
/// implies a trailing `*`, and a node without children means the claim path
/// was exhausted before the permission, which counts as granted.
fn match_node(node: Option<&Node>, segments: &[&str]) -> bool {
    let Some(node) = node else {
        return false;
    };
    let Some((&segment, rest)) = segments.split_first() else {
        return node.is_leaf() || node.wildcard_child().is_some();
    };

    let literal = node.get(segment);
    let wildcard = node.wildcard_child();
    if literal.is_none() && wildcard.is_none() {
        return node.is_leaf();
    }

    let explicit = segment == WILDCARD;
    if !rest.is_empty() {
        return match_node(literal, rest) || (!explicit && match_node(wildcard, rest));
    }

    // Last segment: `store:view` asks for `store:view:*`
    if !explicit && wildcard.is_none() {
        return match_node(literal, &[WILDCARD]);
    }
    true
}
