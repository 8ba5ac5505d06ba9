/// A requirement a verified caller must meet.
///
/// Requirements are evaluated during [`AccessGate::check`](crate::AccessGate::check).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// The caller must hold the named role
    Role(String),
    /// The caller must hold the named permission
    Permission(String),
}

/// Requirement that the caller holds a role.
pub struct HasRole(String);

impl HasRole {
    /// Requires the role `name`, matched exactly.
    pub fn named(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// Requirement that the caller holds a permission.
pub struct HasPermission(String);

impl HasPermission {
    /// Requires the permission `name`, matched exactly.
    pub fn named(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl From<HasRole> for Requirement {
    fn from(req: HasRole) -> Self {
        Requirement::Role(req.0)
    }
}

impl From<HasPermission> for Requirement {
    fn from(req: HasPermission) -> Self {
        Requirement::Permission(req.0)
    }
}
