/// A value whose origin has been checked and can be trusted.
///
/// `Verified<Claims>` is what [`Verifier::authenticate`](crate::Verifier::authenticate)
/// returns once the carried signature matches the call metadata. Holding one
/// is proof that the check happened: handlers and the
/// [`AccessGate`](crate::AccessGate) take `Verified<Claims>` rather than raw
/// [`Claims`](crate::Claims) so unsigned claims cannot reach them.
///
/// # Construction Invariants
///
/// **IMPORTANT:** `Verified<T>` cannot be constructed directly by external code.
/// There are no public constructors, and no `From<T>` or `Into<Verified<T>>`
/// implementations that would allow arbitrary values to be wrapped.
///
/// # Access
///
/// - [`AsRef::as_ref`]: Borrow the verified value
/// - [`into_inner`](Self::into_inner): Consume and extract the value
///
/// Does NOT implement `Deref` or `Default`.
///
/// # Examples
///
/// External callers cannot create `Verified<T>` directly:
///
/// ```compile_fail,E0599
/// use portcullis::{Claims, Verified};
///
/// // E0599: there is no `new`, and `new_unchecked` is crate-private
/// let verified = Verified::new(Claims::default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verified<T> {
    inner: T,
}

impl<T> Verified<T> {
    /// Wraps a value without checking it.
    ///
    /// Callers must have performed the check the wrapper vouches for.
    pub(crate) fn new_unchecked(value: T) -> Self {
        Self { inner: value }
    }

    /// Consumes the `Verified<T>` and returns the inner value.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> AsRef<T> for Verified<T> {
    fn as_ref(&self) -> &T {
        &self.inner
    }
}
