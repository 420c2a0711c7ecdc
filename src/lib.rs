//! shiro-perms - Apache Shiro style permission checks backed by a prefix trie
//!
//! Claims are colon separated segments stored one level per segment, so a
//! check walks at most one branch per segment instead of scanning every
//! claim. Supported syntax:
//! - `store:view:1234` - literal segments
//! - `store:*:1234` - `*` matches any single segment
//! - `store:view` - a claim grants everything below it (`store:view:1234`)
//! - `store:view,edit` - several sibling terms at once (claims only)
//!
//! Claims are limited to [`MAX_SEGMENTS`] segments; deeper claims are skipped.
//!
//! # Example
//!
//! ```rust
//! use shiro_perms::ShiroPerms;
//!
//! let mut perms = ShiroPerms::from_claims("user:* store:view store:*:1234");
//!
//! assert!(perms.check("user:edit:1111"));
//! assert!(perms.check("store:view:4321"));
//! assert!(perms.check("store:admin:1234"));
//! assert!(!perms.check("store:admin:4321"));
//!
//! // Several permissions: all must be granted, or any with `check_any`
//! assert!(!perms.check("store:view other:view"));
//! assert!(perms.check_any("store:view other:view"));
//!
//! // Wider claims replace narrower ones
//! perms.add("store:*");
//! assert_eq!(perms.claims(), vec!["store:*", "user:*"]);
//!
//! // Dumps round-trip
//! let json = perms.dump().unwrap();
//! assert_eq!(ShiroPerms::from_json(&json).claims(), perms.claims());
//! ```
//!
//! # Separators
//!
//! | Separator | Meaning |
//! |-----------|---------|
//! | `:` | Between segments of a claim |
//! | `' '` | Between claims in a single string |
//! | `,` | Between sibling terms of a claim segment |
//!
//! # Features
//!
//! - `msgpack` (default) - MessagePack and base64 dumps (`dump_bin`, `load_bin`)

pub mod codec;
pub mod compact;
pub mod error;
pub mod parser;
pub mod perms;
pub mod trie;
pub mod types;

// Re-export commonly used items
pub use compact::compact_claims;
pub use error::{Format, PermsError, Result};
pub use parser::{
    parse_claim, parse_permission, CLAIM_SEPARATOR, MAX_SEGMENTS, SEGMENT_SEPARATOR, TERM_SEPARATOR,
    WILDCARD,
};
pub use perms::{PermsOptions, ShiroPerms};
pub use trie::Node;
pub use types::{CheckMode, IntoClaims};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_workflow() {
        let mut perms = ShiroPerms::with_options(PermsOptions::new().with_cache_size(64));
        perms.add([
            "user:*",
            "store:view",
            "store:*:1234",
            "store:admin:4321",
            "place:*:11123",
        ]);

        // Explicit claims
        assert!(perms.check("user:*"));
        assert!(perms.check("store:view"));
        assert!(perms.check("store:admin:4321"));
        assert!(!perms.check("store:admin:1122"));
        assert!(!perms.check("other:*"));

        // Wildcards and implicit wildcards
        assert!(perms.check("user:edit:1111"));
        assert!(perms.check("store:edit:1234"));
        assert!(perms.check("store:view:1122"));
        assert!(!perms.check("store:admin:*"));
        assert!(perms.check("store:admin"));

        // Combinators
        assert!(perms.check(["user:edit", "store:view"]));
        assert!(!perms.check(["user:edit", "other:view"]));
        assert!(perms.check_any(["other:view", "user:edit"]));

        // Compact listing reads back into the same trie
        let compact = perms.to_string();
        assert_eq!(ShiroPerms::from_claims(compact.as_str()).trie(), perms.trie());

        // Removal
        perms.remove("store:view");
        assert!(!perms.check("store:view:4321"));
        assert!(perms.check("store:view:1234"));

        // Collapse everything
        perms.add("*");
        assert_eq!(perms.claims(), vec!["*"]);
        assert!(perms.check("other:view"));
    }
}
