//! Permission trie.
//!
//! Claims are stored one segment per level. A `*` key is the wildcard and a
//! node without children closes a claim:
//!
//! ```
//! use shiro_perms::trie::Node;
//!
//! let mut trie = Node::new();
//! trie.insert(&["store", "view"]);
//! trie.insert(&["user", "*"]);
//!
//! assert_eq!(trie.claims(), vec!["store:view:*", "user:*"]);
//! assert!(trie.matches(&["store", "view", "1234"]));
//! assert!(!trie.matches(&["store", "edit"]));
//! ```

mod insert;
mod node;
mod search;

pub use node::Node;
