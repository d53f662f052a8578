//! Build-once policy indexes
//!
//! Each index maps one kind of lookup key to the ordered list of policies
//! matching it. Building is construction: an index is created in one shot
//! from a consistent snapshot of an authority's policy collection, is never
//! observable half-built, and accepts no retroactive inserts. After
//! construction it is immutable and safe to read concurrently.
//!
//! Within a key, policies keep the relative order they had in the source
//! collection; downstream first-match-wins enforcement depends on it.

mod resource;
mod row_level;

use indexmap::IndexMap;
use std::sync::Arc;

pub use resource::{AttributePolicyIndex, EntityPolicyIndex, SpecificPolicyIndex};
pub use row_level::RowLevelPolicyIndex;

/// Contract shared by all index variants
///
/// `index_all` consumes a snapshot of a policy collection and returns the
/// fully built index. Lookups are exposed as inherent methods on each
/// variant since their key shapes differ.
pub trait PolicyIndex: Sized + Send + Sync {
    type Policy;

    /// Builds the index from a flat policy collection, in one shot
    fn index_all(policies: &[Arc<Self::Policy>]) -> Self;
}

/// Groups policies by key, preserving first-appearance key order and
/// source order within each key
fn group_by<P, F>(policies: &[Arc<P>], key_of: F) -> IndexMap<String, Vec<Arc<P>>>
where
    F: Fn(&P) -> Option<&str>,
{
    let mut grouped: IndexMap<String, Vec<Arc<P>>> = IndexMap::new();
    for policy in policies {
        if let Some(key) = key_of(policy) {
            grouped
                .entry(key.to_string())
                .or_default()
                .push(Arc::clone(policy));
        }
    }
    grouped
}
