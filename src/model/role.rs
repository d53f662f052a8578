//! Role definitions, the source of an authority's policy collections

use serde::{Deserialize, Serialize};

use super::{ResourcePolicy, RowLevelPolicy};

/// One assigned role: a name plus the flat policy collections it grants
///
/// A role definition is authored (or loaded from a JSON document) once,
/// handed to an authority at construction time, and never re-queried.
/// The relative order of policies within each collection is preserved all
/// the way into query results.
///
/// # Examples
///
/// ```
/// use policy_store::{PolicyEffect, ResourcePolicy, RoleDefinition};
///
/// let role = RoleDefinition::new("orders-manager")
///     .with_resource_policy(ResourcePolicy::for_entity("sales_Order", "read", PolicyEffect::Allow));
/// assert_eq!(role.name(), "orders-manager");
/// assert_eq!(role.resource_policies().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleDefinition {
    name: String,
    #[serde(default)]
    resource_policies: Vec<ResourcePolicy>,
    #[serde(default)]
    row_level_policies: Vec<RowLevelPolicy>,
}

impl RoleDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource_policies: Vec::new(),
            row_level_policies: Vec::new(),
        }
    }

    pub fn with_resource_policy(mut self, policy: ResourcePolicy) -> Self {
        self.resource_policies.push(policy);
        self
    }

    pub fn with_row_level_policy(mut self, policy: RowLevelPolicy) -> Self {
        self.row_level_policies.push(policy);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resource_policies(&self) -> &[ResourcePolicy] {
        &self.resource_policies
    }

    pub fn row_level_policies(&self) -> &[RowLevelPolicy] {
        &self.row_level_policies
    }
}
