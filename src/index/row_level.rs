//! Row-level policy index

use indexmap::IndexMap;
use std::sync::Arc;

use super::{group_by, PolicyIndex};
use crate::model::RowLevelPolicy;

/// Row-level policies keyed by the entity name they constrain
#[derive(Debug)]
pub struct RowLevelPolicyIndex {
    by_entity: IndexMap<String, Vec<Arc<RowLevelPolicy>>>,
}

impl PolicyIndex for RowLevelPolicyIndex {
    type Policy = RowLevelPolicy;

    fn index_all(policies: &[Arc<RowLevelPolicy>]) -> Self {
        let by_entity = group_by(policies, |p| Some(p.entity_name()));
        tracing::debug!(entities = by_entity.len(), "indexed row level policies");
        Self { by_entity }
    }
}

impl RowLevelPolicyIndex {
    /// Policies constraining an entity, empty for any unknown key
    pub fn policies(&self, entity_name: &str) -> &[Arc<RowLevelPolicy>] {
        self.by_entity.get(entity_name).map_or(&[], Vec::as_slice)
    }
}
