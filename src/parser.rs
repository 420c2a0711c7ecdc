use crate::error::{PermsError, Result};

/// Separator between the segments of one claim (`store:view:1234`)
pub const SEGMENT_SEPARATOR: char = ':';

/// Separator between claims in a single string (`store:view user:*`)
pub const CLAIM_SEPARATOR: char = ' ';

/// Separator between sibling terms of one segment (`store:view,edit`)
pub const TERM_SEPARATOR: char = ',';

/// Segment matching any single segment and everything below it
pub const WILDCARD: &str = "*";

/// Deepest claim accepted, not counting a trailing `*`.
///
/// Keeps every trie built by `add` within the nesting limits of the JSON and
/// MessagePack decoders, and bounds the recursion of insertion and matching.
pub const MAX_SEGMENTS: usize = 64;

/// Split a claim into its segments.
///
/// Segments may carry comma joined terms (`store:view,edit`); every term must
/// be non-empty. At most [`MAX_SEGMENTS`] segments are allowed before an
/// optional trailing `*`.
pub fn parse_claim(claim: &str) -> Result<Vec<&str>> {
    let invalid = |message: String| PermsError::InvalidClaim {
        claim: claim.to_string(),
        message,
    };

    if claim.is_empty() {
        return Err(invalid("empty claim".to_string()));
    }

    let segments: Vec<&str> = claim.split(SEGMENT_SEPARATOR).collect();
    let depth = segments.len() - usize::from(segments.last() == Some(&WILDCARD));
    if depth > MAX_SEGMENTS {
        return Err(invalid(format!("{} segments, at most {} allowed", depth, MAX_SEGMENTS)));
    }
    for (pos, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            return Err(invalid(format!("empty segment at position {}", pos + 1)));
        }
        if segment.contains(CLAIM_SEPARATOR) {
            return Err(invalid(format!("segment '{}' contains a space", segment)));
        }
        if segment.split(TERM_SEPARATOR).any(str::is_empty) {
            return Err(invalid(format!("empty term in segment '{}'", segment)));
        }
    }

    Ok(segments)
}

/// Split a permission into its segments.
///
/// Unlike claims, permissions never use the multi-term shorthand.
pub fn parse_permission(permission: &str) -> Result<Vec<&str>> {
    let invalid = |message: String| PermsError::InvalidPermission {
        permission: permission.to_string(),
        message,
    };

    if permission.is_empty() {
        return Err(invalid("empty permission".to_string()));
    }

    let segments: Vec<&str> = permission.split(SEGMENT_SEPARATOR).collect();
    for (pos, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            return Err(invalid(format!("empty segment at position {}", pos + 1)));
        }
        if segment.contains(TERM_SEPARATOR) || segment.contains(CLAIM_SEPARATOR) {
            return Err(invalid(format!(
                "segment '{}' uses a reserved separator",
                segment
            )));
        }
    }

    Ok(segments)
}
