//! Policy-bearing authority with lazily built index cache

use std::sync::{Arc, OnceLock};

use crate::index::{
    AttributePolicyIndex, EntityPolicyIndex, PolicyIndex, RowLevelPolicyIndex, SpecificPolicyIndex,
};
use crate::model::{ResourcePolicy, RoleDefinition, RowLevelPolicy};

/// Authority granted by one assigned role
///
/// Owns the role's flat policy collections, which never change after
/// construction, and builds each lookup index on first use. One `OnceLock`
/// slot per index kind gives the required guarantee under concurrent first
/// access: at most one build completes per (authority, index kind), every
/// caller observes either "not yet built" or the fully built index, and
/// reads after initialization need no synchronization.
///
/// An instance is typically shared via `Arc` between a cached role
/// definition and every principal it is granted to.
#[derive(Debug)]
pub struct RoleAuthority {
    role_name: String,
    resource_policies: Vec<Arc<ResourcePolicy>>,
    row_level_policies: Vec<Arc<RowLevelPolicy>>,
    entity_index: OnceLock<EntityPolicyIndex>,
    attribute_index: OnceLock<AttributePolicyIndex>,
    specific_index: OnceLock<SpecificPolicyIndex>,
    row_level_index: OnceLock<RowLevelPolicyIndex>,
}

impl RoleAuthority {
    /// Builds an authority from flat policy collections
    pub fn new(
        role_name: impl Into<String>,
        resource_policies: Vec<ResourcePolicy>,
        row_level_policies: Vec<RowLevelPolicy>,
    ) -> Self {
        Self {
            role_name: role_name.into(),
            resource_policies: resource_policies.into_iter().map(Arc::new).collect(),
            row_level_policies: row_level_policies.into_iter().map(Arc::new).collect(),
            entity_index: OnceLock::new(),
            attribute_index: OnceLock::new(),
            specific_index: OnceLock::new(),
            row_level_index: OnceLock::new(),
        }
    }

    /// Builds an authority from a role definition
    ///
    /// The definition's policy collections are copied once here and never
    /// re-queried afterwards.
    pub fn from_role(role: &RoleDefinition) -> Self {
        Self::new(
            role.name(),
            role.resource_policies().to_vec(),
            role.row_level_policies().to_vec(),
        )
    }

    pub fn role_name(&self) -> &str {
        &self.role_name
    }

    /// The flat resource policy collection this authority was granted
    pub fn granted_resource_policies(&self) -> &[Arc<ResourcePolicy>] {
        &self.resource_policies
    }

    /// The flat row-level policy collection this authority was granted
    pub fn granted_row_level_policies(&self) -> &[Arc<RowLevelPolicy>] {
        &self.row_level_policies
    }

    /// Entity resource policies for an entity name
    pub fn entity_policies(&self, entity_name: &str) -> &[Arc<ResourcePolicy>] {
        self.entity_index
            .get_or_init(|| {
                tracing::debug!(role = %self.role_name, "building entity policy index");
                EntityPolicyIndex::index_all(&self.resource_policies)
            })
            .policies(entity_name)
    }

    /// Attribute resource policies for one attribute of an entity
    pub fn attribute_policies(&self, entity_name: &str, attribute: &str) -> &[Arc<ResourcePolicy>] {
        self.attribute_index
            .get_or_init(|| {
                tracing::debug!(role = %self.role_name, "building attribute policy index");
                AttributePolicyIndex::index_all(&self.resource_policies)
            })
            .policies(entity_name, attribute)
    }

    /// Specific resource policies for a named operation
    pub fn specific_policies(&self, name: &str) -> &[Arc<ResourcePolicy>] {
        self.specific_index
            .get_or_init(|| {
                tracing::debug!(role = %self.role_name, "building specific policy index");
                SpecificPolicyIndex::index_all(&self.resource_policies)
            })
            .policies(name)
    }

    /// Row-level policies constraining an entity
    pub fn row_level_policies(&self, entity_name: &str) -> &[Arc<RowLevelPolicy>] {
        self.row_level_index
            .get_or_init(|| {
                tracing::debug!(role = %self.role_name, "building row level policy index");
                RowLevelPolicyIndex::index_all(&self.row_level_policies)
            })
            .policies(entity_name)
    }
}
