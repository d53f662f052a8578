//! Resource policy indexes, one per query shape

use indexmap::IndexMap;
use std::sync::Arc;

use super::{group_by, PolicyIndex};
use crate::model::{ResourcePolicy, ResourcePolicyType};

/// Entity resource policies keyed by entity name
///
/// Only policies of type [`ResourcePolicyType::Entity`] are indexed; the
/// rest of the source collection is ignored.
#[derive(Debug)]
pub struct EntityPolicyIndex {
    by_entity: IndexMap<String, Vec<Arc<ResourcePolicy>>>,
}

impl PolicyIndex for EntityPolicyIndex {
    type Policy = ResourcePolicy;

    fn index_all(policies: &[Arc<ResourcePolicy>]) -> Self {
        let by_entity = group_by(policies, |p| {
            (p.policy_type() == ResourcePolicyType::Entity).then_some(p.resource())
        });
        tracing::debug!(
            entities = by_entity.len(),
            "indexed entity resource policies"
        );
        Self { by_entity }
    }
}

impl EntityPolicyIndex {
    /// Policies for an entity name, empty for any unknown key
    pub fn policies(&self, entity_name: &str) -> &[Arc<ResourcePolicy>] {
        self.by_entity.get(entity_name).map_or(&[], Vec::as_slice)
    }
}

/// Attribute resource policies keyed by the `"entity.attribute"` composite
///
/// The composite key is stored on the policy itself; lookups concatenate
/// the entity name and attribute at query time to match it.
#[derive(Debug)]
pub struct AttributePolicyIndex {
    by_attribute: IndexMap<String, Vec<Arc<ResourcePolicy>>>,
}

impl PolicyIndex for AttributePolicyIndex {
    type Policy = ResourcePolicy;

    fn index_all(policies: &[Arc<ResourcePolicy>]) -> Self {
        let by_attribute = group_by(policies, |p| {
            (p.policy_type() == ResourcePolicyType::EntityAttribute).then_some(p.resource())
        });
        tracing::debug!(
            attributes = by_attribute.len(),
            "indexed entity attribute resource policies"
        );
        Self { by_attribute }
    }
}

impl AttributePolicyIndex {
    /// Policies for one attribute of an entity, empty for any unknown key
    pub fn policies(&self, entity_name: &str, attribute: &str) -> &[Arc<ResourcePolicy>] {
        let key = format!("{entity_name}.{attribute}");
        self.by_attribute.get(&key).map_or(&[], Vec::as_slice)
    }
}

/// Specific (named operation) policies keyed by resource name
#[derive(Debug)]
pub struct SpecificPolicyIndex {
    by_name: IndexMap<String, Vec<Arc<ResourcePolicy>>>,
}

impl PolicyIndex for SpecificPolicyIndex {
    type Policy = ResourcePolicy;

    fn index_all(policies: &[Arc<ResourcePolicy>]) -> Self {
        let by_name = group_by(policies, |p| {
            (p.policy_type() == ResourcePolicyType::Specific).then_some(p.resource())
        });
        tracing::debug!(names = by_name.len(), "indexed specific resource policies");
        Self { by_name }
    }
}

impl SpecificPolicyIndex {
    /// Policies for a named operation, empty for any unknown key
    pub fn policies(&self, name: &str) -> &[Arc<ResourcePolicy>] {
        self.by_name.get(name).map_or(&[], Vec::as_slice)
    }
}
