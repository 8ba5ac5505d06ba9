//! Per-call authentication with a configured signing key.

use tracing::{debug, warn};

use crate::claims::Claims;
use crate::error::{Error, Violation, ViolationKind};
use crate::keys::PREFIX;
use crate::metadata::Metadata;
use crate::secret::SigningKey;
use crate::verified::Verified;

/// Checks signed claims on inbound calls.
///
/// A `Verifier` owns the shared [`SigningKey`] so request handlers only deal
/// with metadata. It holds no other state and can be shared across threads.
///
/// # Examples
///
/// ```
/// use portcullis::{sign, Field, Metadata, SigningKey, Verifier, key_for};
///
/// let mut md: Metadata = [(key_for(Field::UserId), "u-1")].into_iter().collect();
/// let sig = sign(Some(&md), &SigningKey::new("topsecret"));
/// md.insert(key_for(Field::Signature), sig);
///
/// let verifier = Verifier::new(SigningKey::new("topsecret"));
/// let claims = verifier.authenticate(Some(&md)).expect("signature matches");
/// assert_eq!(claims.as_ref().user_id, "u-1");
///
/// md.insert(key_for(Field::UserId), "u-2");
/// assert!(verifier.authenticate(Some(&md)).is_err());
/// ```
#[derive(Debug)]
pub struct Verifier {
    key: SigningKey,
}

impl Verifier {
    /// Creates a verifier keyed with `key`.
    pub fn new(key: impl Into<SigningKey>) -> Self {
        Self { key: key.into() }
    }

    /// Creates a verifier keyed from the default environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SigningKeyUnset`] if the variable is not set.
    pub fn from_env() -> Result<Self, Error> {
        SigningKey::from_default_env().map(Self::new)
    }

    /// Whether the signature carried by `claims` matches their metadata.
    pub fn verify(&self, claims: &Claims<'_>) -> bool {
        claims.verify(&self.key)
    }

    /// Extracts claims from `metadata` and checks their signature.
    ///
    /// # Errors
    ///
    /// Returns a [`ViolationKind::InvalidSignature`] violation when the
    /// signature is missing or does not match. Callers should reject the
    /// call; the outcome will not change on retry.
    pub fn authenticate<'md>(
        &self,
        metadata: Option<&'md Metadata>,
    ) -> Result<Verified<Claims<'md>>, Error> {
        let claims = Claims::extract(metadata);

        if !self.verify(&claims) {
            warn!(
                user_id = %claims.user_id,
                global_app_id = %claims.global_app_id(),
                namespaced_keys = namespaced_key_count(metadata),
                "rejecting call with invalid claims signature"
            );
            return Err(Violation::new(
                ViolationKind::InvalidSignature,
                "claims signature does not match call metadata",
            )
            .into());
        }

        debug!(
            user_id = %claims.user_id,
            global_app_id = %claims.global_app_id(),
            "claims signature verified"
        );
        Ok(Verified::new_unchecked(claims))
    }
}

fn namespaced_key_count(metadata: Option<&Metadata>) -> usize {
    metadata.map_or(0, |md| md.keys().filter(|k| k.starts_with(PREFIX)).count())
}
