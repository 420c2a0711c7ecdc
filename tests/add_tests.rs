//! Claim insertion: overwrites, discards and compact listing

use shiro_perms::ShiroPerms;

fn sorted(mut claims: Vec<String>) -> Vec<String> {
    claims.sort();
    claims
}

fn mixed_claims() -> ShiroPerms {
    ShiroPerms::from_claims(vec![
        "sto:viw",
        "sto:adm:1234",
        "sto:adm:4231",
        "sto:viw:4231",
        "sto:edt:4231",
    ])
}

#[test]
fn test_overwrite_all() {
    let mut perms = mixed_claims();
    perms.add("*");
    assert_eq!(perms.claims(), vec!["*"]);
}

#[test]
fn test_overwrite_with_wildcard() {
    let mut perms =
        ShiroPerms::from_claims(vec!["sto:viw", "sto:edt", "sto:*:1234", "sto:adm:4231"]);
    perms.add("sto:*");
    assert_eq!(perms.claims(), vec!["sto:*"]);
}

#[test]
fn test_overwrite_without_wildcard() {
    let mut perms =
        ShiroPerms::from_claims(vec!["sto:viw", "sto:edt", "sto:*:1234", "sto:adm:4231"]);
    perms.add("sto");
    assert_eq!(perms.claims(), vec!["sto:*"]);
}

#[test]
fn test_overwrite_longer_claims_below_wildcard() {
    let mut perms = ShiroPerms::from_claims(vec!["a:x", "a:y:1"]);
    perms.add("a:*");
    assert_eq!(perms.claims(), vec!["a:*"]);
}

#[test]
fn test_overwrite_with_wildcard_in_the_middle() {
    let mut perms = mixed_claims();
    perms.add("sto:*:4231");
    assert_eq!(
        sorted(perms.claims()),
        vec!["sto:*:4231:*", "sto:adm:1234:*", "sto:viw:*"]
    );
}

#[test]
fn test_literal_equals_trailing_wildcard() {
    let with = ShiroPerms::from_claims("a:*");
    let without = ShiroPerms::from_claims("a");
    assert_eq!(with.trie(), without.trie());
    assert_eq!(without.claims(), vec!["a:*"]);
}

#[test]
fn test_discard_with_wildcard_at_the_end() {
    let mut perms = ShiroPerms::from_claims("sto");
    perms.add(vec!["sto:viw", "sto:edt", "sto:adm:1234"]);
    assert_eq!(perms.claims(), vec!["sto:*"]);
}

#[test]
fn test_discard_with_wildcard_in_the_middle() {
    let mut perms = ShiroPerms::from_claims("sto:*:1234");
    perms.add(vec!["sto:viw:1234", "sto:edt:1234", "sto:adm:1234"]);
    assert_eq!(perms.claims(), vec!["sto:*:1234:*"]);
}

#[test]
fn test_no_discard_for_other_resource() {
    let mut perms = ShiroPerms::from_claims("sto:*:1234");
    perms.add("sto:viw:4321");
    assert_eq!(
        sorted(perms.claims()),
        vec!["sto:*:1234:*", "sto:viw:4321:*"]
    );
}

#[test]
fn test_multi_term_claims() {
    let perms = ShiroPerms::from_claims("store:view,edit:1234 user:read,write");
    assert_eq!(
        sorted(perms.claims()),
        vec![
            "store:edit:1234:*",
            "store:view:1234:*",
            "user:read:*",
            "user:write:*"
        ]
    );
    assert!(perms.check("store:edit:1234"));
    assert!(perms.check("user:write"));
    assert!(!perms.check("user:delete"));
}

#[test]
fn test_insertion_order_does_not_change_result() {
    let forward = ShiroPerms::from_claims("sto:*:1234 sto:viw:1234 sto:viw:4321");
    let backward = ShiroPerms::from_claims("sto:viw:4321 sto:viw:1234 sto:*:1234");
    assert_eq!(forward.trie(), backward.trie());
}

#[test]
fn test_compact_string() {
    let perms = ShiroPerms::from_claims("store:view store:edit place:view place:edit user:*");
    assert_eq!(perms.to_string(), "place,store:edit,view:* user:*");
}

#[test]
fn test_compact_string_reads_back() {
    let perms = mixed_claims();
    let copy = ShiroPerms::from_claims(perms.to_string());
    assert_eq!(sorted(copy.claims()), sorted(perms.claims()));
}

#[test]
fn test_too_deep_claim_is_skipped() {
    let deep = (0..200)
        .map(|i| format!("s{}", i))
        .collect::<Vec<_>>()
        .join(":");
    let mut perms = ShiroPerms::from_claims("user:*");
    perms.add(deep.as_str());
    assert_eq!(perms.claims(), vec!["user:*"]);
    assert!(!perms.check(deep.as_str()));
}
