//! Per-call metadata handed over by the transport.

use std::collections::HashMap;

/// Call metadata: case-sensitive string keys mapped to ordered value lists.
///
/// This mirrors what RPC frameworks attach to an inbound call. Key order
/// carries no meaning; the order of values under a single key does, since
/// scalar claims take the first value.
///
/// # Examples
///
/// ```
/// use portcullis::Metadata;
///
/// let mut md = Metadata::new();
/// md.insert("portc-userid", "u-1");
/// md.append("portc-roles", "admin");
/// md.append("portc-roles", "billing");
///
/// assert_eq!(md.get("portc-userid"), Some("u-1"));
/// assert_eq!(md.get_all("portc-roles"), ["admin", "billing"]);
/// assert!(md.get_all("portc-missing").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: HashMap<String, Vec<String>>,
}

impl Metadata {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to the single value `value`, replacing anything already there.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), vec![value.into()]);
    }

    /// Adds `value` to the end of the sequence stored under `key`.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(key.into()).or_default().push(value.into());
    }

    /// Returns the first value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_all(key).first().map(String::as_str)
    }

    /// Returns every value stored under `key`; empty when the key is absent.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `key` is present, even with zero values.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over the keys in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over `(key, values)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collects pairs, appending repeated keys in iteration order.
impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut md = Metadata::new();
        for (k, v) in iter {
            md.append(k, v);
        }
        md
    }
}

impl From<HashMap<String, String>> for Metadata {
    fn from(map: HashMap<String, String>) -> Self {
        Self {
            entries: map.into_iter().map(|(k, v)| (k, vec![v])).collect(),
        }
    }
}

impl From<HashMap<String, Vec<String>>> for Metadata {
    fn from(entries: HashMap<String, Vec<String>>) -> Self {
        Self { entries }
    }
}

/// Hands call metadata over from a transport-specific request type.
///
/// This is the boundary between an RPC framework and this crate. Implement it
/// for the framework's request (or its metadata container converted into a
/// [`Metadata`]) and pass the result explicitly to
/// [`Claims::extract`](crate::Claims::extract) or
/// [`Verifier::authenticate`](crate::Verifier::authenticate). There is no
/// ambient "current call" lookup.
///
/// Returning `None` is treated exactly like returning an empty mapping.
///
/// # Examples
///
/// ```
/// use portcullis::{Claims, ExtractMetadata, Metadata};
///
/// struct InboundCall {
///     metadata: Option<Metadata>,
/// }
///
/// impl ExtractMetadata for InboundCall {
///     fn metadata(&self) -> Option<&Metadata> {
///         self.metadata.as_ref()
///     }
/// }
///
/// let call = InboundCall { metadata: None };
/// let claims = Claims::extract(call.metadata());
/// assert_eq!(claims.user_id, "");
/// ```
pub trait ExtractMetadata {
    /// Returns the metadata attached to this call, if the transport supplied any.
    fn metadata(&self) -> Option<&Metadata>;
}

impl ExtractMetadata for Metadata {
    fn metadata(&self) -> Option<&Metadata> {
        Some(self)
    }
}

impl<T: ExtractMetadata> ExtractMetadata for Option<T> {
    fn metadata(&self) -> Option<&Metadata> {
        self.as_ref().and_then(ExtractMetadata::metadata)
    }
}
