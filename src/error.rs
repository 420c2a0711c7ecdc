use std::fmt;

use thiserror::Error;

/// Serialized form a trie was being encoded to or decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON text (`dump` / `load_json`)
    Json,
    /// MessagePack bytes (`dump_bin` / `load_bin`)
    MsgPack,
    /// Base64 text wrapping MessagePack bytes
    Base64,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => f.write_str("JSON"),
            Format::MsgPack => f.write_str("MessagePack"),
            Format::Base64 => f.write_str("base64"),
        }
    }
}

/// Permission engine error types
#[derive(Error, Debug)]
pub enum PermsError {
    #[error("Invalid claim '{claim}': {message}")]
    InvalidClaim { claim: String, message: String },

    #[error("Invalid permission '{permission}': {message}")]
    InvalidPermission { permission: String, message: String },

    #[error("{kind} encode error: {message}")]
    Encode { kind: Format, message: String },

    #[error("{kind} decode error: {message}")]
    Decode { kind: Format, message: String },
}

pub type Result<T> = std::result::Result<T, PermsError>;
