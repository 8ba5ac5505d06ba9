//! Shared fixtures and proptest strategies for unit tests.

use proptest::prelude::*;

use crate::keys::{key_for, Field};
use crate::metadata::Metadata;

pub const SCENARIO_SECRET: &str = "topsecret";

/// HMAC-SHA256 of [`scenario_metadata`] under [`SCENARIO_SECRET`], as a
/// deployed signer computes it.
pub const SCENARIO_SIGNATURE: &str =
    "b48e14193e7729340f8f51b59c9feec2d3bb6c38ac0abc195804045c9a0b0f01";

/// The five identity fields of a typical app-on-behalf-of-user call, unsigned.
pub fn scenario_metadata() -> Metadata {
    [
        (key_for(Field::Organisation), "org-1"),
        (key_for(Field::UserId), "u-1"),
        (key_for(Field::Username), "alice"),
        (key_for(Field::AppId), "app-1"),
        (key_for(Field::AppVendor), "vendor-1"),
    ]
    .into_iter()
    .collect()
}

/// [`scenario_metadata`] with its signature attached.
pub fn signed_scenario_metadata() -> Metadata {
    let mut md = scenario_metadata();
    md.insert(key_for(Field::Signature), SCENARIO_SIGNATURE);
    md
}

/// Namespaced keys a signer may cover: well-known fields (minus the
/// signature) and ad-hoc `portc-ext-*` keys.
pub fn arb_signed_key() -> impl Strategy<Value = String> {
    let known: Vec<String> = Field::ALL
        .iter()
        .filter(|f| **f != Field::Signature)
        .map(|f| f.key())
        .collect();
    prop_oneof![
        prop::sample::select(known),
        "[a-z]{1,8}".prop_map(|label| format!("portc-ext-{label}")),
    ]
}

/// Between one and `max` namespaced `(key, value)` pairs; keys may repeat.
pub fn arb_namespaced_entries(max: usize) -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((arb_signed_key(), "[a-zA-Z0-9_-]{0,12}"), 1..=max)
}
