//! Canonical signing input and HMAC-SHA256 verification.
//!
//! The canonical buffer is built from every namespaced key except the
//! signature key itself:
//!
//! 1. keys starting with [`PREFIX`] are sorted byte-wise, ascending
//! 2. for each key, the key is appended, then its values sorted ascending
//! 3. nothing separates keys from values or values from each other
//!
//! The buffer is MAC'd with HMAC-SHA256 and hex-encoded in lowercase. Signers
//! already deployed produce exactly these bytes, so the layout must not change
//! (no delimiters, no escaping). Two mappings whose entries concatenate to the
//! same bytes share a signature.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::keys::{key_for, Field, PREFIX};
use crate::metadata::Metadata;
use crate::secret::SigningKey;

type HmacSha256 = Hmac<Sha256>;

/// Builds the canonical signing input for `metadata`.
///
/// An absent mapping canonicalizes to the empty string.
///
/// # Examples
///
/// ```
/// use portcullis::{canonicalize, Metadata};
///
/// let md: Metadata = [
///     ("portc-userid", "u-1"),
///     ("portc-roles", "b"),
///     ("portc-roles", "a"),
///     ("x-request-id", "ignored"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(canonicalize(Some(&md)), "portc-rolesabportc-useridu-1");
/// ```
pub fn canonicalize(metadata: Option<&Metadata>) -> String {
    let Some(md) = metadata else {
        return String::new();
    };

    let signature_key = key_for(Field::Signature);
    let mut keys: Vec<&str> = md
        .keys()
        .filter(|k| k.starts_with(PREFIX) && *k != signature_key)
        .collect();
    keys.sort_unstable();

    let mut buf = String::new();
    for key in keys {
        buf.push_str(key);

        let mut values: Vec<&str> = md.get_all(key).iter().map(String::as_str).collect();
        values.sort_unstable();
        for value in values {
            buf.push_str(value);
        }
    }
    buf
}

/// Computes the lowercase hex HMAC-SHA256 of the canonical buffer.
///
/// This is what a signer attaches under the signature key.
pub fn sign(metadata: Option<&Metadata>, key: &SigningKey) -> String {
    hex::encode(mac(metadata, key))
}

/// Checks `signature` against the expected MAC of `metadata`.
///
/// The comparison runs in constant time over the hex text. Signatures of the
/// wrong length, non-hex signatures and empty signatures all return `false`.
///
/// # Examples
///
/// ```
/// use portcullis::{sign, verify, Metadata, SigningKey};
///
/// let key = SigningKey::new("topsecret");
/// let md: Metadata = [("portc-userid", "u-1")].into_iter().collect();
///
/// let signature = sign(Some(&md), &key);
/// assert!(verify(Some(&md), &key, &signature));
/// assert!(!verify(Some(&md), &key, ""));
/// ```
pub fn verify(metadata: Option<&Metadata>, key: &SigningKey, signature: &str) -> bool {
    let expected = sign(metadata, key);
    expected.as_bytes().ct_eq(signature.as_bytes()).into()
}

fn mac(metadata: Option<&Metadata>, key: &SigningKey) -> Vec<u8> {
    let mut mac =
        HmacSha256::new_from_slice(key.expose_secret()).expect("HMAC accepts keys of any length");
    mac.update(canonicalize(metadata).as_bytes());
    mac.finalize().into_bytes().to_vec()
}
