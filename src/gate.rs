use tracing::debug;

use crate::{
    claims::Claims,
    error::{Violation, ViolationKind},
    policy::Requirement,
    verified::Verified,
};

/// Role and permission checks over verified claims.
///
/// `AccessGate` accepts only [`Verified`] claims, so a call whose signature
/// did not check out can never be authorized. Requirements are plain
/// membership tests against the claims' role and permission lists: exact,
/// case-sensitive, no wildcards or hierarchy.
///
/// # Examples
///
/// ```
/// use portcullis::{
///     sign, AccessGate, Field, HasPermission, HasRole, Metadata, SigningKey, Verifier, key_for,
/// };
///
/// let key = SigningKey::new("topsecret");
/// let mut md: Metadata = [
///     (key_for(Field::UserId), "u-1"),
///     (key_for(Field::Roles), "editor"),
///     (key_for(Field::Permissions), "docs.write"),
/// ]
/// .into_iter()
/// .collect();
/// md.insert(key_for(Field::Signature), sign(Some(&md), &key));
///
/// let claims = Verifier::new(key).authenticate(Some(&md)).expect("signed");
///
/// let claims = AccessGate::new(claims)
///     .require(HasRole::named("editor"))
///     .require(HasPermission::named("docs.write"))
///     .check()
///     .expect("requirements met");
///
/// assert!(AccessGate::new(claims).require(HasRole::named("admin")).check().is_err());
/// ```
pub struct AccessGate<'md> {
    claims: Verified<Claims<'md>>,
    requirements: Vec<Requirement>,
}

impl<'md> AccessGate<'md> {
    /// Creates a gate over `claims` with no requirements.
    pub fn new(claims: Verified<Claims<'md>>) -> Self {
        Self {
            claims,
            requirements: Vec::new(),
        }
    }

    /// Adds a requirement, deduplicating identical requirements.
    ///
    /// Returns the updated gate to allow method chaining.
    pub fn require(mut self, requirement: impl Into<Requirement>) -> Self {
        let req = requirement.into();

        if !self.requirements.contains(&req) {
            self.requirements.push(req);
        }

        self
    }

    /// Checks every requirement in the order they were added.
    ///
    /// # Errors
    ///
    /// Returns a `Violation` for the first requirement the claims do not meet.
    pub fn check(self) -> Result<Verified<Claims<'md>>, Violation> {
        for req in &self.requirements {
            self.check_one(req)?;
        }
        Ok(self.claims)
    }

    fn check_one(&self, req: &Requirement) -> Result<(), Violation> {
        let claims = self.claims.as_ref();
        match req {
            Requirement::Role(role) if !claims.has_role(role) => {
                debug!(user_id = %claims.user_id, role = %role, "caller lacks required role");
                Err(Violation::new(
                    ViolationKind::MissingRole { role: role.clone() },
                    "caller does not hold the required role",
                ))
            }
            Requirement::Permission(permission) if !claims.has_permission(permission) => {
                debug!(
                    user_id = %claims.user_id,
                    permission = %permission,
                    "caller lacks required permission"
                );
                Err(Violation::new(
                    ViolationKind::MissingPermission {
                        permission: permission.clone(),
                    },
                    "caller does not hold the required permission",
                ))
            }
            _ => Ok(()),
        }
    }
}
