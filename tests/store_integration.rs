//! Integration tests for the policy store with realistic principal setups

#[cfg(test)]
mod integration_tests {
    use std::sync::Arc;

    use policy_store::{
        Authentication, EntityMetadata, GrantedAuthority, MetaClass, MetadataRegistry,
        PolicyEffect, PolicyStore, ResourcePolicy, RoleAuthority, RoleDefinition, RowFilter,
        RowLevelAction, RowLevelPolicy,
    };
    use tokio::task::JoinSet;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }

    fn sales_metadata() -> Arc<MetadataRegistry> {
        let registry = Arc::new(MetadataRegistry::new());
        let document = MetaClass::new("sales_Document");
        registry.register(document.clone());
        registry.register(MetaClass::new("sales_Order").with_ancestor(document));
        registry.register(MetaClass::new("sales_Customer"));
        registry
    }

    fn manager_role() -> RoleDefinition {
        RoleDefinition::new("orders-manager")
            .with_resource_policy(ResourcePolicy::for_entity(
                "sales_Order",
                "read",
                PolicyEffect::Allow,
            ))
            .with_resource_policy(ResourcePolicy::for_entity_attribute(
                "sales_Order",
                "amount",
                "view",
                PolicyEffect::Allow,
            ))
            .with_resource_policy(ResourcePolicy::for_specific(
                "orders.export",
                "access",
                PolicyEffect::Allow,
            ))
    }

    fn auditor_role() -> RoleDefinition {
        RoleDefinition::new("auditor")
            .with_resource_policy(ResourcePolicy::for_specific(
                "orders.export",
                "access",
                PolicyEffect::Allow,
            ))
            .with_row_level_policy(RowLevelPolicy::new(
                "sales_Document",
                RowLevelAction::Read,
                RowFilter::Clause {
                    where_clause: "{E}.region = :session_region".to_string(),
                    join_clause: None,
                },
            ))
    }

    #[test]
    fn test_full_principal_scenario() {
        init_tracing();

        let registry = sales_metadata();
        let store = PolicyStore::new(registry.clone());

        let auth = Authentication::new("alice")
            .with_role(Arc::new(RoleAuthority::from_role(&manager_role())))
            .with_authority(GrantedAuthority::Plain("LDAP_USERS".to_string()))
            .with_role(Arc::new(RoleAuthority::from_role(&auditor_role())));

        let order = registry.meta_class("sales_Order").unwrap();

        // Entity query: only the manager role contributes
        let entity = store.entity_policies(Some(&auth), &order).unwrap();
        assert_eq!(entity.len(), 1);
        assert_eq!(entity[0].action(), "read");

        // Attribute query: the declared attribute matches, others do not
        assert_eq!(store.attribute_policies(Some(&auth), &order, "amount").len(), 1);
        assert!(store.attribute_policies(Some(&auth), &order, "status").is_empty());

        // Specific query: both roles contribute, concatenated without dedup
        let export = store.specific_policies(Some(&auth), "orders.export");
        assert_eq!(export.len(), 2);

        // Row-level query: the auditor's base-document policy applies to
        // sales_Order through the ancestor walk
        let row_level = store.row_level_policies(Some(&auth), &order).unwrap();
        assert_eq!(row_level.len(), 1);
        assert_eq!(row_level[0].entity_name(), "sales_Document");
    }

    #[test]
    fn test_shared_authority_across_principals_builds_indexes_once() {
        let registry = sales_metadata();
        let store = PolicyStore::new(registry.clone());

        // One cached role definition shared by two principals
        let shared = Arc::new(RoleAuthority::from_role(&manager_role()));
        let alice = Authentication::new("alice").with_role(Arc::clone(&shared));
        let bob = Authentication::new("bob").with_role(Arc::clone(&shared));

        let order = registry.meta_class("sales_Order").unwrap();
        let from_alice = store.entity_policies(Some(&alice), &order).unwrap();
        let from_bob = store.entity_policies(Some(&bob), &order).unwrap();

        // Both principals observe the very same indexed policy allocation
        assert!(Arc::ptr_eq(&from_alice[0], &from_bob[0]));
    }

    #[test]
    fn test_concurrent_first_access_from_threads() {
        let registry = sales_metadata();
        let store = Arc::new(PolicyStore::new(registry.clone()));
        let shared = Arc::new(RoleAuthority::from_role(&manager_role()));
        let order = registry.meta_class("sales_Order").unwrap();

        let mut handles = Vec::new();
        for i in 0..16 {
            let store = Arc::clone(&store);
            let shared = Arc::clone(&shared);
            let order = order.clone();
            handles.push(std::thread::spawn(move || {
                let auth = Authentication::new(format!("user{i}")).with_role(shared);
                store.entity_policies(Some(&auth), &order).unwrap()
            }));
        }

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for result in &results {
            assert_eq!(result.len(), 1);
            assert!(Arc::ptr_eq(&result[0], &results[0][0]));
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_queries_across_index_kinds() {
        let registry = sales_metadata();
        let store = Arc::new(PolicyStore::new(registry.clone()));
        let shared = Arc::new(
            RoleAuthority::from_role(
                &manager_role().with_row_level_policy(RowLevelPolicy::new(
                    "sales_Order",
                    RowLevelAction::Read,
                    RowFilter::Script {
                        name: "own_orders_only".to_string(),
                    },
                )),
            ),
        );
        let order = registry.meta_class("sales_Order").unwrap();

        let mut set = JoinSet::new();
        for i in 0..64 {
            let store = Arc::clone(&store);
            let shared = Arc::clone(&shared);
            let order = order.clone();
            set.spawn(async move {
                let auth = Authentication::new(format!("user{i}")).with_role(shared);
                match i % 4 {
                    0 => store.entity_policies(Some(&auth), &order).unwrap().len(),
                    1 => store.attribute_policies(Some(&auth), &order, "amount").len(),
                    2 => store.specific_policies(Some(&auth), "orders.export").len(),
                    _ => store.row_level_policies(Some(&auth), &order).unwrap().len(),
                }
            });
        }

        let mut completed = 0;
        while let Some(result) = set.join_next().await {
            assert_eq!(result.unwrap(), 1);
            completed += 1;
        }
        assert_eq!(completed, 64);
    }

    #[test]
    fn test_role_definitions_loaded_from_json() {
        let registry = sales_metadata();
        let store = PolicyStore::new(registry.clone());

        let json = r#"{
            "name": "orders-readonly",
            "resource_policies": [
                { "policy_type": "entity", "resource": "sales_Order", "action": "read", "effect": "allow" },
                { "policy_type": "entity", "resource": "sales_Customer", "action": "read", "effect": "allow" }
            ]
        }"#;
        let role: RoleDefinition = serde_json::from_str(json).unwrap();
        let auth = Authentication::new("carol").with_role(Arc::new(RoleAuthority::from_role(&role)));

        let customer = registry.meta_class("sales_Customer").unwrap();
        assert_eq!(store.entity_policies(Some(&auth), &customer).unwrap().len(), 1);
    }
}
