//! Policy value types and role definitions
//!
//! Everything in this module is an immutable value: a policy is constructed
//! when its role definition is loaded, shared by reference afterwards, and
//! discarded together with the authority that declared it.

mod resource;
mod role;
mod row_level;

pub use resource::{PolicyEffect, ResourcePolicy, ResourcePolicyType};
pub use role::RoleDefinition;
pub use row_level::{RowFilter, RowLevelAction, RowLevelPolicy};
