//! Authenticated principals and their granted authorities
//!
//! Authentication produces a principal with an ordered set of granted
//! authorities. Two variants exist in practice: policy-bearing authorities
//! built from role definitions, and plain marker authorities (raw role
//! codes from an external identity provider). Only the former answer
//! policy queries; the latter are silently skipped by the store.

mod role;

use std::sync::Arc;

pub use role::RoleAuthority;

/// One authority granted to a principal
///
/// The capability check is [`GrantedAuthority::as_role`]: `None` means the
/// authority carries no indexed policies and contributes nothing to any
/// policy query.
#[derive(Debug, Clone)]
pub enum GrantedAuthority {
    /// Policy-bearing authority originating from one assigned role
    Role(Arc<RoleAuthority>),
    /// Opaque marker authority without indexed policies
    Plain(String),
}

impl GrantedAuthority {
    /// The policy-lookup capability check
    pub fn as_role(&self) -> Option<&RoleAuthority> {
        match self {
            GrantedAuthority::Role(role) => Some(role),
            GrantedAuthority::Plain(_) => None,
        }
    }

    /// Authority name: the role name or the plain marker code
    pub fn name(&self) -> &str {
        match self {
            GrantedAuthority::Role(role) => role.role_name(),
            GrantedAuthority::Plain(code) => code,
        }
    }
}

/// The resolved principal: who is acting and which authorities they hold
///
/// Authority order is attachment order and becomes the outer order of
/// every merged query result. Immutable once built, so an instance may be
/// shared across concurrent request threads.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use policy_store::{Authentication, GrantedAuthority, RoleAuthority, RoleDefinition};
///
/// let role = Arc::new(RoleAuthority::from_role(&RoleDefinition::new("orders-manager")));
/// let auth = Authentication::new("alice")
///     .with_authority(GrantedAuthority::Role(role))
///     .with_authority(GrantedAuthority::Plain("LDAP_USERS".to_string()));
/// assert_eq!(auth.authorities().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Authentication {
    principal: String,
    authorities: Vec<GrantedAuthority>,
}

impl Authentication {
    pub fn new(principal: impl Into<String>) -> Self {
        Self {
            principal: principal.into(),
            authorities: Vec::new(),
        }
    }

    /// Attaches the next authority; attachment order is merge order
    pub fn with_authority(mut self, authority: GrantedAuthority) -> Self {
        self.authorities.push(authority);
        self
    }

    /// Convenience for attaching a policy-bearing authority
    pub fn with_role(self, role: Arc<RoleAuthority>) -> Self {
        self.with_authority(GrantedAuthority::Role(role))
    }

    pub fn principal(&self) -> &str {
        &self.principal
    }

    pub fn authorities(&self) -> &[GrantedAuthority] {
        &self.authorities
    }
}
