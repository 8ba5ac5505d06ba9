//! Integration property tests for portcullis.
//!
//! These tests validate cross-module invariants and end-to-end flows
//! using property-based testing.

use portcullis::{
    canonicalize, key_for, sign, AccessGate, Claims, Field, HasPermission, HasRole, Metadata,
    SigningKey, Verifier,
};
use proptest::prelude::*;

// Strategy: Generate a namespaced key the signer covers (never the signature key)
fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(key_for(Field::Organisation)),
        Just(key_for(Field::UserId)),
        Just(key_for(Field::Username)),
        Just(key_for(Field::AppId)),
        Just(key_for(Field::AppVendor)),
        Just(key_for(Field::Roles)),
        Just(key_for(Field::Permissions)),
        "[a-z]{1,6}".prop_map(|s| format!("portc-x-{s}")),
    ]
}

// Strategy: Generate one to twelve namespaced entries
fn arb_entries() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((arb_key(), "[a-z0-9.-]{0,10}"), 1..12)
}

// Strategy: Generate a role or permission name
fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,6}(\\.[a-z]{1,6})?").unwrap()
}

proptest! {
    /// Property: Any signed mapping authenticates, regardless of insertion order
    #[test]
    fn proptest_signed_metadata_authenticates(
        entries in arb_entries(),
        secret in "[ -~]{0,24}"
    ) {
        let key = SigningKey::new(secret.clone());
        let mut md: Metadata = entries.iter().cloned().collect();
        md.insert(key_for(Field::Signature), sign(Some(&md), &key));

        let mut shuffled: Metadata = entries.iter().rev().cloned().collect();
        shuffled.insert(key_for(Field::Signature), sign(Some(&md), &key));

        let verifier = Verifier::new(secret);
        prop_assert!(verifier.authenticate(Some(&md)).is_ok());
        prop_assert_eq!(canonicalize(Some(&md)), canonicalize(Some(&shuffled)));
        prop_assert!(verifier.authenticate(Some(&shuffled)).is_ok());
    }

    /// Property: Extraction never panics and defaults absent fields to empty
    #[test]
    fn proptest_extraction_is_total(entries in arb_entries()) {
        let md: Metadata = entries.iter().cloned().collect();
        let claims = Claims::extract(Some(&md));

        let has = |field: Field| entries.iter().any(|(k, _)| *k == key_for(field));
        if !has(Field::UserId) {
            prop_assert_eq!(claims.user_id.as_str(), "");
        }
        if !has(Field::Roles) {
            prop_assert!(claims.roles.is_empty());
        }
        prop_assert_eq!(claims.signature(), "");
    }

    /// Property: An injected namespaced entry always breaks the signature
    #[test]
    fn proptest_injected_entry_fails(
        entries in arb_entries(),
        label in "[a-z]{1,6}",
        value in "[a-z0-9]{1,6}"
    ) {
        let key = SigningKey::new("k");
        let mut md: Metadata = entries.into_iter().collect();
        md.insert(key_for(Field::Signature), sign(Some(&md), &key));

        md.append(format!("portc-injected-{label}"), value);
        prop_assert!(!Claims::extract(Some(&md)).verify(&key));
    }

    /// Property: The gate admits exactly the roles and permissions the caller holds
    #[test]
    fn proptest_gate_matches_membership(
        roles in prop::collection::vec(arb_name(), 0..4),
        permissions in prop::collection::vec(arb_name(), 0..4),
        wanted_role in arb_name(),
        wanted_permission in arb_name()
    ) {
        let key = SigningKey::new("k");
        let mut md = Metadata::new();
        for r in &roles {
            md.append(key_for(Field::Roles), r.clone());
        }
        for p in &permissions {
            md.append(key_for(Field::Permissions), p.clone());
        }
        md.insert(key_for(Field::Signature), sign(Some(&md), &key));

        let verified = Verifier::new(key).authenticate(Some(&md)).unwrap();
        let result = AccessGate::new(verified)
            .require(HasRole::named(wanted_role.clone()))
            .require(HasPermission::named(wanted_permission.clone()))
            .check();

        let expected = roles.contains(&wanted_role) && permissions.contains(&wanted_permission);
        prop_assert_eq!(result.is_ok(), expected);
    }
}
