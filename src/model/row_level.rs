//! Row-level policy value types

use serde::{Deserialize, Serialize};

/// Data operation a row-level policy constrains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowLevelAction {
    Read,
    Create,
    Update,
    Delete,
}

impl RowLevelAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowLevelAction::Read => "read",
            RowLevelAction::Create => "create",
            RowLevelAction::Update => "update",
            RowLevelAction::Delete => "delete",
        }
    }
}

/// Row filter descriptor, opaque to the index layer
///
/// The enforcement layer interprets the descriptor when it applies the
/// policy to a query or a candidate row; this crate only carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowFilter {
    /// Declarative where clause, optionally with a join clause
    Clause {
        where_clause: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        join_clause: Option<String>,
    },
    /// Reference to a registered predicate script
    Script { name: String },
}

/// A data-row visibility/filter constraint scoped to one entity type
///
/// # Examples
///
/// ```
/// use policy_store::{RowFilter, RowLevelAction, RowLevelPolicy};
///
/// let policy = RowLevelPolicy::new(
///     "sales_Order",
///     RowLevelAction::Read,
///     RowFilter::Clause {
///         where_clause: "{E}.owner = :current_user".to_string(),
///         join_clause: None,
///     },
/// );
/// assert_eq!(policy.entity_name(), "sales_Order");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowLevelPolicy {
    entity_name: String,
    action: RowLevelAction,
    filter: RowFilter,
}

impl RowLevelPolicy {
    pub fn new(entity_name: impl Into<String>, action: RowLevelAction, filter: RowFilter) -> Self {
        Self {
            entity_name: entity_name.into(),
            action,
            filter,
        }
    }

    /// The entity class this policy constrains, and its index key
    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    pub fn action(&self) -> RowLevelAction {
        self.action
    }

    pub fn filter(&self) -> &RowFilter {
        &self.filter
    }
}
