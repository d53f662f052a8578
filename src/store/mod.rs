//! Policy store query facade
//!
//! The store answers the enforcement layer's six query shapes by iterating
//! a principal's granted authorities in attachment order, extracting from
//! each policy-bearing authority's relevant index, and concatenating the
//! results. Nothing is deduplicated and no allow/deny conflict is resolved
//! here; the store supplies facts, the enforcement layer rules on them.

use std::sync::Arc;

use crate::authority::{Authentication, RoleAuthority};
use crate::error::Result;
use crate::metadata::{EntityMetadata, MetaClass};
use crate::model::{ResourcePolicy, RowLevelPolicy};


/// Query facade over a principal's granted policies
///
/// The resolved principal is passed explicitly into every operation;
/// `None` means "no current authentication" and yields an empty result.
/// Result order is always authority attachment order (outer) by
/// within-authority source order (inner).
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use policy_store::{
///     Authentication, EntityMetadata, MetaClass, MetadataRegistry, PolicyEffect,
///     PolicyStore, ResourcePolicy, RoleAuthority, RoleDefinition,
/// };
///
/// let registry = Arc::new(MetadataRegistry::new());
/// registry.register(MetaClass::new("sales_Order"));
/// let store = PolicyStore::new(registry.clone());
///
/// let role = RoleDefinition::new("orders-reader")
///     .with_resource_policy(ResourcePolicy::for_entity("sales_Order", "read", PolicyEffect::Allow));
/// let auth = Authentication::new("alice").with_role(Arc::new(RoleAuthority::from_role(&role)));
///
/// let order = registry.meta_class("sales_Order").unwrap();
/// let policies = store.entity_policies(Some(&auth), &order).unwrap();
/// assert_eq!(policies.len(), 1);
/// ```
pub struct PolicyStore {
    metadata: Arc<dyn EntityMetadata>,
}

impl PolicyStore {
    pub fn new(metadata: Arc<dyn EntityMetadata>) -> Self {
        Self { metadata }
    }

    /// Row-level policies applying to an entity class
    ///
    /// Includes policies declared for the class itself and for every
    /// ancestor of its original class: a policy declared on a base entity
    /// also constrains its extensions. Per authority, the class's own
    /// matches come first, then the ancestors in hierarchy order.
    ///
    /// # Errors
    ///
    /// Propagates metadata resolution failures unchanged.
    pub fn row_level_policies(
        &self,
        authentication: Option<&Authentication>,
        meta_class: &MetaClass,
    ) -> Result<Vec<Arc<RowLevelPolicy>>> {
        let original = self.metadata.original_or_this(meta_class)?;
        tracing::trace!(entity = meta_class.name(), "row level policy query");

        Ok(extract_from_authentication(
            authentication,
            |authority, out| {
                out.extend_from_slice(authority.row_level_policies(meta_class.name()));
                for ancestor in original.ancestors() {
                    out.extend_from_slice(authority.row_level_policies(ancestor.name()));
                }
            },
        ))
    }

    /// Entity resource policies for an entity class
    ///
    /// The class is resolved to its original class first; only that one
    /// name is queried — there is no ancestor walk for resource policies.
    ///
    /// # Errors
    ///
    /// Propagates metadata resolution failures unchanged.
    pub fn entity_policies(
        &self,
        authentication: Option<&Authentication>,
        meta_class: &MetaClass,
    ) -> Result<Vec<Arc<ResourcePolicy>>> {
        let original = self.metadata.original_or_this(meta_class)?;
        tracing::trace!(entity = original.name(), "entity policy query");

        Ok(extract_from_authentication(
            authentication,
            |authority, out| {
                out.extend_from_slice(authority.entity_policies(original.name()));
            },
        ))
    }

    /// Entity resource policies for a caller-resolved wildcard key
    ///
    /// The pattern is looked up as an exact index key; callers resolve
    /// wildcard semantics into concrete keys before reaching the store.
    pub fn entity_policies_by_wildcard(
        &self,
        authentication: Option<&Authentication>,
        wildcard: &str,
    ) -> Vec<Arc<ResourcePolicy>> {
        extract_from_authentication(authentication, |authority, out| {
            out.extend_from_slice(authority.entity_policies(wildcard));
        })
    }

    /// Attribute resource policies for one attribute of an entity class
    ///
    /// Queries the exact `"entity.attribute"` composite key built from the
    /// given class's name; no extension resolution is applied.
    pub fn attribute_policies(
        &self,
        authentication: Option<&Authentication>,
        meta_class: &MetaClass,
        attribute: &str,
    ) -> Vec<Arc<ResourcePolicy>> {
        extract_from_authentication(authentication, |authority, out| {
            out.extend_from_slice(authority.attribute_policies(meta_class.name(), attribute));
        })
    }

    /// Attribute resource policies for caller-resolved wildcard key parts
    pub fn attribute_policies_by_wildcard(
        &self,
        authentication: Option<&Authentication>,
        entity_wildcard: &str,
        attribute_wildcard: &str,
    ) -> Vec<Arc<ResourcePolicy>> {
        extract_from_authentication(authentication, |authority, out| {
            out.extend_from_slice(authority.attribute_policies(entity_wildcard, attribute_wildcard));
        })
    }

    /// Specific resource policies for a named operation
    pub fn specific_policies(
        &self,
        authentication: Option<&Authentication>,
        name: &str,
    ) -> Vec<Arc<ResourcePolicy>> {
        extract_from_authentication(authentication, |authority, out| {
            out.extend_from_slice(authority.specific_policies(name));
        })
    }
}

/// Merge loop shared by every query operation
///
/// Iterates authorities in attachment order, skips those without the
/// policy-lookup capability, and lets the extractor append each matching
/// authority's contribution. Absent authentication contributes nothing.
fn extract_from_authentication<T>(
    authentication: Option<&Authentication>,
    mut extract: impl FnMut(&RoleAuthority, &mut Vec<T>),
) -> Vec<T> {
    let mut merged = Vec::new();

    if let Some(authentication) = authentication {
        for authority in authentication.authorities() {
            if let Some(role) = authority.as_role() {
                extract(role, &mut merged);
            }
        }
    }

    merged
}
