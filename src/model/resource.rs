//! Resource policy value types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of resource a [`ResourcePolicy`] speaks about
///
/// Fixed at creation and never mutated; each kind is indexed separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourcePolicyType {
    /// Policy over a whole entity (resource is the entity name)
    Entity,
    /// Policy over a single entity attribute (resource is `"entity.attribute"`)
    EntityAttribute,
    /// Policy over a named operation (resource is an opaque permission name)
    Specific,
}

impl ResourcePolicyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourcePolicyType::Entity => "entity",
            ResourcePolicyType::EntityAttribute => "entity_attribute",
            ResourcePolicyType::Specific => "specific",
        }
    }
}

/// Whether a policy grants or withholds its action
///
/// Carried through the index layer untouched; conflict resolution between
/// overlapping allow/deny policies belongs to the enforcement layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyEffect {
    Allow,
    Deny,
}

impl fmt::Display for PolicyEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyEffect::Allow => write!(f, "allow"),
            PolicyEffect::Deny => write!(f, "deny"),
        }
    }
}

/// A permission statement about an entity, entity attribute, or named operation
///
/// Immutable after construction. The `action`, `effect`, and `policy_group`
/// fields are opaque payload for the enforcement layer; only `policy_type`
/// and `resource` drive indexing.
///
/// # Examples
///
/// ```
/// use policy_store::{PolicyEffect, ResourcePolicy, ResourcePolicyType};
///
/// let policy = ResourcePolicy::for_entity_attribute("sales_Order", "amount", "view", PolicyEffect::Allow);
/// assert_eq!(policy.policy_type(), ResourcePolicyType::EntityAttribute);
/// assert_eq!(policy.resource(), "sales_Order.amount");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePolicy {
    policy_type: ResourcePolicyType,
    resource: String,
    action: String,
    effect: PolicyEffect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    policy_group: Option<String>,
}

impl ResourcePolicy {
    /// Creates a policy over a whole entity
    pub fn for_entity(
        entity_name: impl Into<String>,
        action: impl Into<String>,
        effect: PolicyEffect,
    ) -> Self {
        Self {
            policy_type: ResourcePolicyType::Entity,
            resource: entity_name.into(),
            action: action.into(),
            effect,
            policy_group: None,
        }
    }

    /// Creates a policy over a single entity attribute
    ///
    /// The resource is stored as the `"entity.attribute"` composite key,
    /// which is also the key the attribute index groups by.
    pub fn for_entity_attribute(
        entity_name: impl Into<String>,
        attribute: impl AsRef<str>,
        action: impl Into<String>,
        effect: PolicyEffect,
    ) -> Self {
        let mut resource = entity_name.into();
        resource.push('.');
        resource.push_str(attribute.as_ref());
        Self {
            policy_type: ResourcePolicyType::EntityAttribute,
            resource,
            action: action.into(),
            effect,
            policy_group: None,
        }
    }

    /// Creates a policy over a named operation
    pub fn for_specific(
        name: impl Into<String>,
        action: impl Into<String>,
        effect: PolicyEffect,
    ) -> Self {
        Self {
            policy_type: ResourcePolicyType::Specific,
            resource: name.into(),
            action: action.into(),
            effect,
            policy_group: None,
        }
    }

    /// Attaches the authoring policy group tag
    pub fn with_policy_group(mut self, group: impl Into<String>) -> Self {
        self.policy_group = Some(group.into());
        self
    }

    pub fn policy_type(&self) -> ResourcePolicyType {
        self.policy_type
    }

    /// The indexed resource identifier
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Operation kind, carried through uninterpreted
    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn effect(&self) -> PolicyEffect {
        self.effect
    }

    pub fn policy_group(&self) -> Option<&str> {
        self.policy_group.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_policy() {
        let policy = ResourcePolicy::for_entity("sales_Order", "read", PolicyEffect::Allow);
        assert_eq!(policy.policy_type(), ResourcePolicyType::Entity);
        assert_eq!(policy.resource(), "sales_Order");
        assert_eq!(policy.action(), "read");
        assert_eq!(policy.effect(), PolicyEffect::Allow);
        assert!(policy.policy_group().is_none());
    }

    #[test]
    fn test_attribute_policy_composite_key() {
        let policy =
            ResourcePolicy::for_entity_attribute("sales_Order", "amount", "view", PolicyEffect::Deny);
        assert_eq!(policy.policy_type(), ResourcePolicyType::EntityAttribute);
        assert_eq!(policy.resource(), "sales_Order.amount");
    }

    #[test]
    fn test_specific_policy() {
        let policy = ResourcePolicy::for_specific("orders.export", "access", PolicyEffect::Allow);
        assert_eq!(policy.policy_type(), ResourcePolicyType::Specific);
        assert_eq!(policy.resource(), "orders.export");
    }

    #[test]
    fn test_policy_group() {
        let policy = ResourcePolicy::for_entity("sales_Order", "read", PolicyEffect::Allow)
            .with_policy_group("orders-readonly");
        assert_eq!(policy.policy_group(), Some("orders-readonly"));
    }

    #[test]
    fn test_serde_round_trip() {
        let policy =
            ResourcePolicy::for_entity_attribute("sales_Order", "status", "edit", PolicyEffect::Allow);
        let json = serde_json::to_string(&policy).unwrap();
        let parsed: ResourcePolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, policy);
    }

    #[test]
    fn test_effect_display() {
        assert_eq!(PolicyEffect::Allow.to_string(), "allow");
        assert_eq!(PolicyEffect::Deny.to_string(), "deny");
    }
}
