//! Entity metamodel collaborators
//!
//! The store consumes the metamodel through the [`EntityMetadata`] trait:
//! resolving an entity class to its original (extension-aware) class and
//! walking its ancestor hierarchy. [`MetadataRegistry`] is the in-memory,
//! thread-safe implementation used in tests and simple deployments; a
//! platform integration can provide its own.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::error::{PolicyStoreError, Result};

/// Runtime type descriptor for a business entity
///
/// Carries the entity name and the generalization hierarchy above it,
/// ordered nearest-first. The order is preserved into query results.
///
/// # Examples
///
/// ```
/// use policy_store::MetaClass;
///
/// let base = MetaClass::new("sales_Document");
/// let order = MetaClass::new("sales_Order").with_ancestor(base);
/// assert_eq!(order.ancestors()[0].name(), "sales_Document");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaClass {
    name: String,
    #[serde(default)]
    ancestors: Vec<MetaClass>,
}

impl MetaClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ancestors: Vec::new(),
        }
    }

    /// Appends the next ancestor, nearest-first
    pub fn with_ancestor(mut self, ancestor: MetaClass) -> Self {
        self.ancestors.push(ancestor);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Generalization hierarchy above this class, nearest-first
    pub fn ancestors(&self) -> &[MetaClass] {
        &self.ancestors
    }
}

/// Entity metamodel resolver consumed by the store
///
/// Failures (unknown entity) propagate unchanged through store operations.
pub trait EntityMetadata: Send + Sync {
    /// Looks a class up by entity name
    fn meta_class(&self, name: &str) -> Result<MetaClass>;

    /// Resolves a class to its original class
    ///
    /// If the given class is a replacement registered via entity extension,
    /// the original class it replaces is returned; otherwise the class
    /// itself is. Unknown classes are an error.
    fn original_or_this(&self, meta_class: &MetaClass) -> Result<MetaClass>;
}

/// In-memory metamodel registry
///
/// Thread-safe; classes and extension mappings may be registered from any
/// thread before or between queries.
///
/// # Examples
///
/// ```
/// use policy_store::{EntityMetadata, MetaClass, MetadataRegistry};
///
/// let registry = MetadataRegistry::new();
/// registry.register(MetaClass::new("sales_Order"));
/// registry.register(MetaClass::new("ext_Order"));
/// registry.register_extension("sales_Order", "ext_Order");
///
/// let ext = registry.meta_class("ext_Order").unwrap();
/// assert_eq!(registry.original_or_this(&ext).unwrap().name(), "sales_Order");
/// ```
#[derive(Debug, Default)]
pub struct MetadataRegistry {
    classes: DashMap<String, MetaClass>,
    // replacement entity name -> original entity name
    originals: DashMap<String, String>,
}

impl MetadataRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a class, replacing any earlier registration of the name
    pub fn register(&self, meta_class: MetaClass) {
        self.classes.insert(meta_class.name().to_string(), meta_class);
    }

    /// Registers `replacement` as the extension of `original`
    pub fn register_extension(&self, original: impl Into<String>, replacement: impl Into<String>) {
        self.originals.insert(replacement.into(), original.into());
    }
}

impl EntityMetadata for MetadataRegistry {
    fn meta_class(&self, name: &str) -> Result<MetaClass> {
        self.classes
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| PolicyStoreError::UnknownEntity {
                name: name.to_string(),
            })
    }

    fn original_or_this(&self, meta_class: &MetaClass) -> Result<MetaClass> {
        match self.originals.get(meta_class.name()) {
            Some(original) => self.meta_class(original.value()),
            None => self.meta_class(meta_class.name()),
        }
    }
}
