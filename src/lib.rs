//! Signed identity claims carried in RPC call metadata.
//!
//! A signing service attaches the caller's identity (organisation, user, app,
//! vendor, roles, permissions) to each call as namespaced metadata entries,
//! together with an HMAC over those entries. This crate turns that metadata
//! back into typed claims and checks that nothing was altered in transit:
//!
//! - **Keys**: the fixed `portc-` vocabulary ([`key_for`], [`generic_key`])
//! - **Extraction**: [`Claims::extract`] never fails; missing fields are empty
//! - **Verification**: [`canonicalize`] + HMAC-SHA256 + constant-time compare
//! - **Explicit context**: metadata is always passed in, never looked up
//!
//! # Core Types
//!
//! - [`Metadata`]: The per-call key → values mapping
//! - [`Claims`]: Identity record projected from metadata
//! - [`SigningKey`]: Shared secret, redacted in logs/output
//! - [`Verifier`]: Authenticates calls, yielding [`Verified<Claims>`]
//! - [`AccessGate`]: Role/permission requirements over verified claims
//!
//! # Examples
//!
//! ```
//! use portcullis::{sign, Claims, Field, Metadata, SigningKey, key_for};
//!
//! let key = SigningKey::new("topsecret");
//!
//! // What the signing service attaches to a call
//! let mut md: Metadata = [
//!     (key_for(Field::Organisation), "org-1"),
//!     (key_for(Field::UserId), "u-1"),
//!     (key_for(Field::AppVendor), "vendor-1"),
//!     (key_for(Field::AppId), "app-1"),
//! ]
//! .into_iter()
//! .collect();
//! md.insert(key_for(Field::Signature), sign(Some(&md), &key));
//!
//! // What a server does with it
//! let claims = Claims::extract(Some(&md));
//! assert!(claims.verify(&key));
//! assert_eq!(claims.global_app_id(), "vendor-1/app-1");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod claims;
mod error;
mod gate;
pub mod keys;
mod metadata;
mod policy;
mod secret;
mod signature;
mod verified;
mod verifier;

#[cfg(test)]
mod test_utils;

pub use claims::Claims;
pub use error::{Error, Violation, ViolationKind};
pub use gate::AccessGate;
pub use keys::{generic_key, key_for, prefix, Field, PREFIX};
pub use metadata::{ExtractMetadata, Metadata};
pub use policy::{HasPermission, HasRole, Requirement};
pub use secret::{SigningKey, DEFAULT_SIGNING_KEY_VAR};
pub use signature::{canonicalize, sign, verify};
pub use verified::Verified;
pub use verifier::Verifier;
