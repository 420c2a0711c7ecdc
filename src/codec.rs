//! Trie dump formats.
//!
//! The trie crosses this boundary as a plain nested map; JSON is always
//! available, MessagePack and its base64 text form need the `msgpack` feature.

use crate::error::{Format, PermsError, Result};
use crate::trie::Node;

/// Encode a trie as JSON text
pub fn to_json(trie: &Node) -> Result<String> {
    serde_json::to_string(trie).map_err(|e| PermsError::Encode {
        kind: Format::Json,
        message: e.to_string(),
    })
}

/// Decode a trie from JSON text.
///
/// Input nested deeper than serde_json's limit of 128 is rejected; tries
/// built from claims stay well below it (see [`crate::parser::MAX_SEGMENTS`]).
pub fn from_json(text: &str) -> Result<Node> {
    serde_json::from_str(text).map_err(|e| PermsError::Decode {
        kind: Format::Json,
        message: e.to_string(),
    })
}

/// Encode a trie as MessagePack bytes
#[cfg(feature = "msgpack")]
pub fn to_msgpack(trie: &Node) -> Result<Vec<u8>> {
    rmp_serde::to_vec(trie).map_err(|e| PermsError::Encode {
        kind: Format::MsgPack,
        message: e.to_string(),
    })
}

/// Decode a trie from MessagePack bytes
#[cfg(feature = "msgpack")]
pub fn from_msgpack(bytes: &[u8]) -> Result<Node> {
    rmp_serde::from_slice(bytes).map_err(|e| PermsError::Decode {
        kind: Format::MsgPack,
        message: e.to_string(),
    })
}

/// Encode a trie as base64 text of its MessagePack bytes
#[cfg(feature = "msgpack")]
pub fn to_base64(trie: &Node) -> Result<String> {
    use base64::{engine::general_purpose::STANDARD, Engine as _};

    Ok(STANDARD.encode(to_msgpack(trie)?))
}

/// Decode a trie from base64 text of its MessagePack bytes
#[cfg(feature = "msgpack")]
pub fn from_base64(text: &str) -> Result<Node> {
    use base64::{engine::general_purpose::STANDARD, Engine as _};

    let bytes = STANDARD.decode(text.trim()).map_err(|e| PermsError::Decode {
        kind: Format::Base64,
        message: e.to_string(),
    })?;
    from_msgpack(&bytes)
}
