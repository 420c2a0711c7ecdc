use tracing::trace;

use super::Node;
use crate::parser::{TERM_SEPARATOR, WILDCARD};

impl Node {
    /// Insert one parsed claim below this node.
    ///
    /// Segments may hold comma joined terms; each term is inserted as a
    /// sibling sharing the remaining segments. Insertion keeps the trie
    /// minimal:
    /// - a term already covered by a `*` sibling is discarded
    /// - a trailing `*` replaces this whole node with `{"*": {}}`
    /// - a trailing literal replaces its child with `{"*": {}}`
    /// - a `*` in the middle prunes sibling branches it now covers
    pub fn insert(&mut self, segments: &[&str]) {
        let Some((&segment, rest)) = segments.split_first() else {
            return;
        };
        let next = rest.first().copied();

        for term in segment.split(TERM_SEPARATOR) {
            if self.covers(next) {
                trace!(term, "discarding term covered by wildcard");
                continue;
            }

            match (term == WILDCARD, rest.is_empty()) {
                (true, true) => *self = Node::wildcard(),
                (false, true) => {
                    self.children.insert(term.to_string(), Node::wildcard());
                }
                (true, false) => {
                    if let Some(next) = next {
                        self.prune_covered(next);
                    }
                    self.children
                        .entry(WILDCARD.to_string())
                        .or_default()
                        .insert(rest);
                }
                (false, false) => {
                    self.children
                        .entry(term.to_string())
                        .or_default()
                        .insert(rest);
                }
            }
        }
    }

    /// Whether the `*` child already grants whatever would be inserted here,
    /// given the segment that follows.
    fn covers(&self, next: Option<&str>) -> bool {
        self.wildcard_child().is_some_and(|wildcard| {
            wildcard.is_leaf() || next.is_some_and(|next| wildcard.children.contains_key(next))
        })
    }

    /// Drop `next` from every literal child before a `*` is walked through.
    /// Children left without any branch are removed.
    fn prune_covered(&mut self, next: &str) {
        self.children.retain(|key, child| {
            if key == WILDCARD {
                return true;
            }
            !(child.children.remove(next).is_some() && child.is_leaf())
        });
    }
}
