//! Namespaced metadata keys.
//!
//! Every key this crate reads from call metadata starts with [`PREFIX`], so the
//! identity fields never collide with unrelated metadata carried on the same
//! call. The prefix also decides which entries take part in signing: see
//! [`canonicalize`](crate::canonicalize).

use std::fmt;

/// Namespace tag shared by every key in this crate's vocabulary.
pub const PREFIX: &str = "portc-";

/// Returns the namespace tag.
pub fn prefix() -> &'static str {
    PREFIX
}

/// A well-known identity field carried in call metadata.
///
/// The set is closed. Anything else a signer wants to attach goes through
/// [`generic_key`] and is still covered by the signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Organisation (or project) the caller acts for
    Organisation,
    /// Login name of the calling user
    Username,
    /// Stable identifier of the calling user
    UserId,
    /// Identifier of the calling app
    AppId,
    /// Identifier of the vendor publishing the calling app
    AppVendor,
    /// Hex-encoded MAC over the namespaced metadata
    Signature,
    /// Given name of the calling user
    FirstName,
    /// Family name of the calling user
    LastName,
    /// Roles granted to the caller (multi-valued)
    Roles,
    /// Permissions granted to the caller (multi-valued)
    Permissions,
}

impl Field {
    /// Every well-known field, in declaration order.
    pub const ALL: [Field; 10] = [
        Field::Organisation,
        Field::Username,
        Field::UserId,
        Field::AppId,
        Field::AppVendor,
        Field::Signature,
        Field::FirstName,
        Field::LastName,
        Field::Roles,
        Field::Permissions,
    ];

    /// Returns the un-prefixed tag for this field.
    pub const fn tag(self) -> &'static str {
        match self {
            Field::Organisation => "organisation",
            Field::Username => "username",
            Field::UserId => "userid",
            Field::AppId => "appid",
            Field::AppVendor => "appvendor",
            Field::Signature => "signature",
            Field::FirstName => "first-name",
            Field::LastName => "last-name",
            Field::Roles => "roles",
            Field::Permissions => "permissions",
        }
    }

    /// Returns the namespaced metadata key for this field.
    pub fn key(self) -> String {
        key_for(self)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Returns the namespaced key for a well-known field.
///
/// # Examples
///
/// ```
/// use portcullis::{key_for, Field};
///
/// assert_eq!(key_for(Field::UserId), "portc-userid");
/// assert_eq!(key_for(Field::FirstName), "portc-first-name");
/// ```
pub fn key_for(field: Field) -> String {
    format!("{PREFIX}{}", field.tag())
}

/// Key carrying the organisation identifier.
pub fn organisation_key() -> String {
    key_for(Field::Organisation)
}

/// Key carrying the username.
pub fn username_key() -> String {
    key_for(Field::Username)
}

/// Key carrying the user identifier.
pub fn user_id_key() -> String {
    key_for(Field::UserId)
}

/// Key carrying the app identifier.
pub fn app_id_key() -> String {
    key_for(Field::AppId)
}

/// Key carrying the app vendor identifier.
pub fn app_vendor_key() -> String {
    key_for(Field::AppVendor)
}

/// Key carrying the request signature.
pub fn signature_key() -> String {
    key_for(Field::Signature)
}

/// Key carrying the user's first name.
pub fn first_name_key() -> String {
    key_for(Field::FirstName)
}

/// Key carrying the user's last name.
pub fn last_name_key() -> String {
    key_for(Field::LastName)
}

/// Key carrying the caller's roles.
pub fn roles_key() -> String {
    key_for(Field::Roles)
}

/// Key carrying the caller's permissions.
pub fn permissions_key() -> String {
    key_for(Field::Permissions)
}

/// Builds a namespaced key from an arbitrary human-readable label.
///
/// Spaces become hyphens and the result is lower-cased before the prefix is
/// applied. Pass raw labels only: feeding an already-namespaced key back in
/// prefixes it twice.
///
/// # Examples
///
/// ```
/// use portcullis::generic_key;
///
/// assert_eq!(generic_key("Billing Account"), "portc-billing-account");
/// assert_eq!(generic_key(""), "portc-");
/// ```
pub fn generic_key(label: &str) -> String {
    let key = label.replace(' ', "-").to_lowercase();
    format!("{PREFIX}{key}")
}
