//! Property-based tests for descriptor traversal.
//!
//! These tests drive the accessors with randomly generated descriptors via
//! the in-memory `StaticEnv` source, so no process environment is touched
//! and the cases run in parallel.
//!
//! Test coverage:
//! - Attribute round-trip: encode, store, decode yields the stored value.
//! - Absent attributes always fail with the not-found family.
//! - First-occurrence-wins under duplicate instance names.
//! - Credential sub-value extraction matches the stored credentials.

use proptest::prelude::*;
use serde_json::{Map, Value, json};

use vcap_env::{StaticEnv, VcapEnv, constants};

/// Strategy for generating attribute/credential key names.
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,15}"
}

/// Strategy for generating heterogeneous JSON leaf values.
///
/// Covers the shapes the application descriptor actually uses: null for the
/// deprecated user list, booleans, integers for indices and ports, strings
/// for identifiers, and string lists for URIs.
fn leaf_value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-zA-Z0-9 ._:/-]{0,24}".prop_map(Value::String),
        prop::collection::vec("[a-z0-9.-]{1,16}".prop_map(Value::String), 0..4)
            .prop_map(Value::Array),
    ]
}

/// Strategy for generating an application descriptor attribute map.
fn attributes_strategy() -> impl Strategy<Value = std::collections::HashMap<String, Value>> {
    prop::collection::hash_map(key_strategy(), leaf_value_strategy(), 1..8)
}

proptest! {
    #[test]
    fn stored_attributes_round_trip(attrs in attributes_strategy()) {
        let descriptor: Map<String, Value> = attrs.clone().into_iter().collect();
        let env = VcapEnv::with_source(
            StaticEnv::new().set(constants::VCAP_APPLICATION, Value::Object(descriptor).to_string()),
        );

        for (key, stored) in &attrs {
            let fetched = env.application_attribute(key).unwrap();
            prop_assert_eq!(&fetched, stored);
        }
    }

    #[test]
    fn absent_attributes_are_not_found(attrs in attributes_strategy(), probe in key_strategy()) {
        prop_assume!(!attrs.contains_key(&probe));

        let descriptor: Map<String, Value> = attrs.into_iter().collect();
        let env = VcapEnv::with_source(
            StaticEnv::new().set(constants::VCAP_APPLICATION, Value::Object(descriptor).to_string()),
        );

        let err = env.application_attribute(&probe).unwrap_err();
        prop_assert!(err.is_not_found());
    }

    #[test]
    fn first_occurrence_wins_among_duplicate_names(
        instance_name in key_strategy(),
        duplicates in 1usize..5,
        decoys in 0usize..3,
    ) {
        // Decoy descriptors precede the duplicates but carry other names,
        // including unnamed ones that must be skipped.
        let mut list = Vec::new();
        for i in 0..decoys {
            list.push(json!({"name": format!("decoy-{i}"), "credentials": {"position": "decoy"}}));
        }
        list.push(json!({"credentials": {"position": "unnamed"}}));
        for i in 0..duplicates {
            list.push(json!({"name": instance_name.clone(), "credentials": {"position": i}}));
        }

        let registry = json!({ "mydb": list }).to_string();
        let env = VcapEnv::with_source(StaticEnv::new().set(constants::VCAP_SERVICES, registry));

        let service = env.service("mydb", &instance_name).unwrap();
        let credentials = service.credentials.unwrap();
        prop_assert_eq!(credentials.get("position"), Some(&json!(0)));
    }

    #[test]
    fn credential_extraction_matches_stored_object(
        credentials in prop::collection::hash_map(key_strategy(), leaf_value_strategy(), 1..6),
    ) {
        let registry = json!({
            "broker": [{"name": "instance", "credentials": credentials.clone()}]
        })
        .to_string();
        let env = VcapEnv::with_source(StaticEnv::new().set(constants::VCAP_SERVICES, registry));

        let fetched = env.credentials("broker", "instance").unwrap();
        for (key, stored) in &credentials {
            prop_assert_eq!(fetched.get(key), Some(stored));
            let single = env.credential("broker", "instance", key).unwrap();
            prop_assert_eq!(&single, stored);
        }
    }
}
