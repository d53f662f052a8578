//! # Policy Store
//!
//! Role-based policy indexing and lookup engine for entity-level access
//! control:
//! - Immutable resource and row-level policy value types
//! - Build-once, read-many policy indexes per query shape
//! - Lazy per-authority index caching, safe under concurrent first access
//! - Entity-extension-aware metamodel resolution with ancestor walks
//! - Deterministic merge semantics across overlapping roles
//!
//! The store answers "which policies apply" for an authenticated
//! principal; interpreting the answers (allow/deny resolution, row filter
//! evaluation) belongs to the enforcement layer consuming it.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use policy_store::{
//!     Authentication, EntityMetadata, MetaClass, MetadataRegistry, PolicyEffect,
//!     PolicyStore, ResourcePolicy, RoleAuthority, RoleDefinition,
//! };
//!
//! let registry = Arc::new(MetadataRegistry::new());
//! registry.register(MetaClass::new("sales_Order"));
//!
//! let role = RoleDefinition::new("orders-manager")
//!     .with_resource_policy(ResourcePolicy::for_entity("sales_Order", "read", PolicyEffect::Allow))
//!     .with_resource_policy(ResourcePolicy::for_entity_attribute(
//!         "sales_Order", "amount", "view", PolicyEffect::Allow,
//!     ));
//!
//! let auth = Authentication::new("alice")
//!     .with_role(Arc::new(RoleAuthority::from_role(&role)));
//!
//! let store = PolicyStore::new(registry.clone());
//! let order = registry.meta_class("sales_Order").unwrap();
//!
//! let policies = store.entity_policies(Some(&auth), &order).unwrap();
//! assert_eq!(policies.len(), 1);
//! ```

pub mod authority;
pub mod error;
pub mod index;
pub mod metadata;
pub mod model;
pub mod store;

pub use authority::{Authentication, GrantedAuthority, RoleAuthority};
pub use error::{PolicyStoreError, Result};
pub use index::{
    AttributePolicyIndex, EntityPolicyIndex, PolicyIndex, RowLevelPolicyIndex, SpecificPolicyIndex,
};
pub use metadata::{EntityMetadata, MetaClass, MetadataRegistry};
pub use model::{
    PolicyEffect, ResourcePolicy, ResourcePolicyType, RoleDefinition, RowFilter, RowLevelAction,
    RowLevelPolicy,
};
pub use store::PolicyStore;
