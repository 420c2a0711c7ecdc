use std::fmt;
use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::codec;
use crate::compact::compact_claims;
use crate::error::Result;
use crate::parser::{parse_claim, parse_permission, CLAIM_SEPARATOR, SEGMENT_SEPARATOR, WILDCARD};
use crate::trie::Node;
use crate::types::{CheckMode, IntoClaims};

/// Engine options.
#[derive(Debug, Clone, Default)]
pub struct PermsOptions {
    /// LRU cache size for check results, 0 disables caching
    pub cache_size: usize,
}

impl PermsOptions {
    /// Create default options (no cache)
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache up to `cache_size` check results
    pub fn with_cache_size(mut self, cache_size: usize) -> Self {
        self.cache_size = cache_size;
        self
    }
}

/// Permission set holding Apache Shiro style claims in a trie.
///
/// Claims are colon separated (`store:view:1234`), `*` matches any single
/// segment, and a claim also grants everything below it.
pub struct ShiroPerms {
    trie: Node,
    cache: Option<Mutex<LruCache<String, bool>>>,
}

impl ShiroPerms {
    /// Create an empty permission set
    pub fn new() -> Self {
        Self::with_options(PermsOptions::default())
    }

    /// Create an empty permission set with explicit options
    pub fn with_options(options: PermsOptions) -> Self {
        Self {
            trie: Node::new(),
            cache: NonZeroUsize::new(options.cache_size).map(|cap| Mutex::new(LruCache::new(cap))),
        }
    }

    /// Create a permission set from claims
    pub fn from_claims(claims: impl IntoClaims) -> Self {
        let mut perms = Self::new();
        perms.add(claims);
        perms
    }

    /// Create a permission set from an existing trie
    pub fn from_trie(trie: Node) -> Self {
        let mut perms = Self::new();
        perms.load(trie);
        perms
    }

    /// Create a permission set from a JSON dump; invalid input yields an empty set
    pub fn from_json(text: &str) -> Self {
        let mut perms = Self::new();
        perms.load_json(text);
        perms
    }

    /// Create a permission set from a MessagePack dump; invalid input yields an empty set
    #[cfg(feature = "msgpack")]
    pub fn from_bin(bytes: &[u8]) -> Self {
        let mut perms = Self::new();
        perms.load_bin(bytes);
        perms
    }

    /// Current trie
    pub fn trie(&self) -> &Node {
        &self.trie
    }

    /// Whether no claim is stored
    pub fn is_empty(&self) -> bool {
        self.trie.is_leaf()
    }

    /// Every stored claim, e.g. `store:view:*`
    pub fn claims(&self) -> Vec<String> {
        self.trie.claims()
    }

    /// Add claims.
    ///
    /// ```
    /// use shiro_perms::ShiroPerms;
    ///
    /// let mut perms = ShiroPerms::new();
    /// perms
    ///     .add("store:view")
    ///     .add(["store:edit:1234", "user:*"])
    ///     .add("place:view,edit:1 place:admin");
    ///
    /// assert!(perms.check("store:edit:1234"));
    /// assert!(perms.check("place:edit:1"));
    /// ```
    ///
    /// Malformed claims (empty, or with an empty segment) are skipped.
    pub fn add(&mut self, claims: impl IntoClaims) -> &mut Self {
        for claim in claims.into_claims() {
            match parse_claim(&claim) {
                Ok(segments) => self.trie.insert(&segments),
                Err(e) => debug!(error = %e, "skipping malformed claim"),
            }
        }
        self.invalidate();
        self
    }

    /// Remove claims.
    ///
    /// A claim is removed when it is listed verbatim, or listed without its
    /// trailing `*` (`store:view` removes `store:view:*`). The multi-term
    /// shorthand is not expanded here.
    pub fn remove(&mut self, claims: impl IntoClaims) -> &mut Self {
        let removed = claims.into_claims();
        let suffix = format!("{}{}", SEGMENT_SEPARATOR, WILDCARD);
        let kept: Vec<String> = self
            .claims()
            .into_iter()
            .filter(|claim| {
                !removed.iter().any(|r| {
                    r == claim || claim.strip_suffix(suffix.as_str()) == Some(r.as_str())
                })
            })
            .collect();

        self.reset();
        self.add(kept)
    }

    /// Remove every claim
    pub fn reset(&mut self) -> &mut Self {
        self.trie = Node::new();
        self.invalidate();
        self
    }

    /// Check that every permission is granted.
    ///
    /// An empty permission set, an empty permission list, or a malformed
    /// permission all deny.
    pub fn check(&self, permissions: impl IntoClaims) -> bool {
        self.check_with(permissions, CheckMode::All)
    }

    /// Check that at least one permission is granted
    pub fn check_any(&self, permissions: impl IntoClaims) -> bool {
        self.check_with(permissions, CheckMode::Any)
    }

    /// Check permissions, combining the results as `mode` says
    pub fn check_with(&self, permissions: impl IntoClaims, mode: CheckMode) -> bool {
        if self.is_empty() {
            return false;
        }
        let permissions = permissions.into_claims();
        if permissions.is_empty() {
            return false;
        }

        match mode {
            CheckMode::All => permissions.iter().all(|p| self.verify(p)),
            CheckMode::Any => permissions.iter().any(|p| self.verify(p)),
        }
    }

    /// Check one permission, going through the cache when enabled
    fn verify(&self, permission: &str) -> bool {
        let Some(cache) = &self.cache else {
            return self.evaluate(permission);
        };

        let mut cache = cache.lock();
        if let Some(&allowed) = cache.get(permission) {
            return allowed;
        }

        let allowed = self.evaluate(permission);
        cache.put(permission.to_string(), allowed);
        allowed
    }

    fn evaluate(&self, permission: &str) -> bool {
        match parse_permission(permission) {
            Ok(segments) => self.trie.matches(&segments),
            Err(e) => {
                debug!(error = %e, "denying malformed permission");
                false
            }
        }
    }

    /// Replace the trie
    pub fn load(&mut self, trie: Node) -> &mut Self {
        self.trie = trie;
        self.invalidate();
        self
    }

    /// Replace the trie from a JSON dump. Invalid input leaves an empty trie.
    pub fn load_json(&mut self, text: &str) -> &mut Self {
        let trie = codec::from_json(text).unwrap_or_else(|e| {
            warn!(error = %e, "failed to load trie, falling back to empty");
            Node::new()
        });
        self.load(trie)
    }

    /// Replace the trie from a JSON dump, leaving it untouched on error
    pub fn try_load_json(&mut self, text: &str) -> Result<&mut Self> {
        let trie = codec::from_json(text)?;
        Ok(self.load(trie))
    }

    /// Dump the trie as JSON
    pub fn dump(&self) -> Result<String> {
        codec::to_json(&self.trie)
    }

    /// Replace the trie from a MessagePack dump. Invalid input leaves an empty trie.
    #[cfg(feature = "msgpack")]
    pub fn load_bin(&mut self, bytes: &[u8]) -> &mut Self {
        let trie = codec::from_msgpack(bytes).unwrap_or_else(|e| {
            warn!(error = %e, "failed to load binary trie, falling back to empty");
            Node::new()
        });
        self.load(trie)
    }

    /// Replace the trie from a MessagePack dump, leaving it untouched on error
    #[cfg(feature = "msgpack")]
    pub fn try_load_bin(&mut self, bytes: &[u8]) -> Result<&mut Self> {
        let trie = codec::from_msgpack(bytes)?;
        Ok(self.load(trie))
    }

    /// Dump the trie as MessagePack
    #[cfg(feature = "msgpack")]
    pub fn dump_bin(&self) -> Result<Vec<u8>> {
        codec::to_msgpack(&self.trie)
    }

    /// Replace the trie from base64 encoded MessagePack. Invalid input leaves an empty trie.
    #[cfg(feature = "msgpack")]
    pub fn load_base64(&mut self, text: &str) -> &mut Self {
        let trie = codec::from_base64(text).unwrap_or_else(|e| {
            warn!(error = %e, "failed to load base64 trie, falling back to empty");
            Node::new()
        });
        self.load(trie)
    }

    /// Replace the trie from base64 encoded MessagePack, leaving it untouched on error
    #[cfg(feature = "msgpack")]
    pub fn try_load_base64(&mut self, text: &str) -> Result<&mut Self> {
        let trie = codec::from_base64(text)?;
        Ok(self.load(trie))
    }

    /// Dump the trie as base64 encoded MessagePack
    #[cfg(feature = "msgpack")]
    pub fn dump_base64(&self) -> Result<String> {
        codec::to_base64(&self.trie)
    }

    /// Number of cached check results
    pub fn cached_len(&self) -> usize {
        self.cache.as_ref().map_or(0, |cache| cache.lock().len())
    }

    /// Clear the check cache
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.lock().clear();
        }
    }

    fn invalidate(&mut self) {
        if let Some(cache) = self.cache.as_mut() {
            cache.get_mut().clear();
        }
    }
}

impl Default for ShiroPerms {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ShiroPerms {
    /// Clones the claims; the clone starts with an empty cache of the same size.
    fn clone(&self) -> Self {
        Self {
            trie: self.trie.clone(),
            cache: self
                .cache
                .as_ref()
                .map(|cache| Mutex::new(LruCache::new(cache.lock().cap()))),
        }
    }
}

impl fmt::Debug for ShiroPerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShiroPerms")
            .field("claims", &self.claims())
            .field("cached", &self.cached_len())
            .finish()
    }
}

impl fmt::Display for ShiroPerms {
    /// Compact claim list, space separated (`store:edit,view:* user:*`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = CLAIM_SEPARATOR.to_string();
        f.write_str(&compact_claims(&self.trie).join(separator.as_str()))
    }
}
