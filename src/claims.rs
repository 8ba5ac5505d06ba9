//! Identity claims projected from call metadata.

use crate::keys::{key_for, Field};
use crate::metadata::Metadata;
use crate::secret::SigningKey;
use crate::signature;

/// Identity and authorization claims carried by an inbound call.
///
/// Each scalar field is the first value under that field's key, or the empty
/// string when the key is absent or has no values. List fields take every
/// value under their key. Extraction never fails.
///
/// The record borrows the metadata it was extracted from so that
/// [`verify`](Self::verify) can re-scan it. It never owns or mutates it.
///
/// # Examples
///
/// ```
/// use portcullis::{Claims, Field, Metadata, key_for};
///
/// let md: Metadata = [
///     (key_for(Field::UserId), "u-1"),
///     (key_for(Field::AppId), "app-1"),
///     (key_for(Field::AppVendor), "vendor-1"),
///     (key_for(Field::Roles), "admin"),
///     (key_for(Field::Roles), "billing"),
/// ]
/// .into_iter()
/// .collect();
///
/// let claims = Claims::extract(Some(&md));
/// assert_eq!(claims.user_id, "u-1");
/// assert_eq!(claims.global_app_id(), "vendor-1/app-1");
/// assert!(claims.has_role("billing"));
/// assert_eq!(claims.username, "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Claims<'md> {
    /// Organisation (or project) the caller acts for
    pub organisation_id: String,
    /// Stable identifier of the calling user
    pub user_id: String,
    /// Login name of the calling user
    pub username: String,
    /// Given name of the calling user
    pub first_name: String,
    /// Family name of the calling user
    pub last_name: String,
    /// Identifier of the calling app
    pub app_id: String,
    /// Identifier of the vendor publishing the calling app
    pub vendor_id: String,
    /// Roles granted to the caller, in the order they were sent
    pub roles: Vec<String>,
    /// Permissions granted to the caller, in the order they were sent
    pub permissions: Vec<String>,
    signature: String,
    metadata: Option<&'md Metadata>,
}

impl<'md> Claims<'md> {
    /// Projects `metadata` into a claims record.
    ///
    /// `None` behaves exactly like an empty mapping: every field resolves to
    /// its empty default.
    pub fn extract(metadata: Option<&'md Metadata>) -> Self {
        let scalar = |field: Field| first_value(metadata, field);
        let list = |field: Field| all_values(metadata, field);

        Self {
            organisation_id: scalar(Field::Organisation),
            user_id: scalar(Field::UserId),
            username: scalar(Field::Username),
            first_name: scalar(Field::FirstName),
            last_name: scalar(Field::LastName),
            app_id: scalar(Field::AppId),
            vendor_id: scalar(Field::AppVendor),
            roles: list(Field::Roles),
            permissions: list(Field::Permissions),
            signature: scalar(Field::Signature),
            metadata,
        }
    }

    /// Returns `<vendor_id>/<app_id>`, computed on each call.
    ///
    /// Both parts may be empty, in which case the result is `"/"`.
    pub fn global_app_id(&self) -> String {
        format!("{}/{}", self.vendor_id, self.app_id)
    }

    /// Whether `role` is among the caller's roles (exact, case-sensitive).
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Whether `permission` is among the caller's permissions (exact, case-sensitive).
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    /// The signature the caller presented, as received.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// The metadata these claims were extracted from.
    pub fn metadata(&self) -> Option<&'md Metadata> {
        self.metadata
    }

    /// Checks the presented signature against the originating metadata.
    ///
    /// Returns `false` for any mismatch, including a missing signature.
    pub fn verify(&self, key: &SigningKey) -> bool {
        signature::verify(self.metadata, key, &self.signature)
    }
}

fn first_value(metadata: Option<&Metadata>, field: Field) -> String {
    metadata
        .and_then(|md| md.get(&key_for(field)))
        .unwrap_or_default()
        .to_string()
}

fn all_values(metadata: Option<&Metadata>, field: Field) -> Vec<String> {
    metadata
        .map(|md| md.get_all(&key_for(field)).to_vec())
        .unwrap_or_default()
}
