/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Cross-shape behavioral laws: builder round trips, list presence,
//! enum forward compatibility, redaction, and dynamic field lookup.

use codecatalyst::types::{
    ComparisonOperator, DevEnvironmentStatus, DevEnvironmentSummary, Filter, InstanceType,
    UserIdentity, UserType,
};
use smithy_shape::{hash_by_fields, DateTime, Shape, REDACTED};

fn example_filter() -> Filter {
    Filter::builder()
        .key("status")
        .values("RUNNING")
        .values("STOPPED")
        .comparison_operator(ComparisonOperator::Equals)
        .build()
}

#[test]
fn to_builder_round_trips() {
    let filter = example_filter();
    assert_eq!(filter.to_builder().build(), filter);

    let identity = UserIdentity::builder()
        .user_type(UserType::User)
        .principal_id("p-1")
        .user_name("mountain-goat")
        .email("goat@example.com")
        .build();
    assert_eq!(identity.to_builder().build(), identity);
}

#[test]
fn rebuilding_with_one_change_differs_only_there() {
    let original = example_filter();
    let changed = original.to_builder().key("instanceType").build();
    assert_ne!(original, changed);
    assert_eq!(changed.key(), Some("instanceType"));
    assert_eq!(changed.values(), original.values());
    assert_eq!(
        changed.comparison_operator(),
        original.comparison_operator()
    );
}

#[test]
fn list_presence_is_tracked_separately_from_content() {
    let unset = Filter::builder().key("status").build();
    assert!(!unset.has_values());
    assert!(unset.values().is_empty());

    let empty = Filter::builder().key("status").set_values(Some(vec![])).build();
    assert!(empty.has_values());
    assert!(empty.values().is_empty());

    // effective-value equality: the two are indistinguishable to Eq/Hash
    assert_eq!(unset, empty);
    assert_eq!(hash_by_fields(&unset), hash_by_fields(&empty));
}

#[test]
fn unknown_enum_values_survive() {
    let status = DevEnvironmentStatus::from("HIBERNATING");
    assert!(matches!(status, DevEnvironmentStatus::Unknown { .. }));
    assert!(!DevEnvironmentStatus::values().contains(&status.as_str()));
    assert_eq!(status.as_str(), "HIBERNATING");

    let summary = DevEnvironmentSummary::builder().status(status).build();
    assert_eq!(summary.status().unwrap().as_str(), "HIBERNATING");
}

#[test]
fn sensitive_fields_never_reach_debug_output() {
    let identity = UserIdentity::builder()
        .user_name("mountain-goat")
        .email("goat@example.com")
        .build();
    let rendered = format!("{:?}", identity);
    assert!(rendered.contains("UserIdentity"));
    assert!(rendered.contains("mountain-goat"));
    assert!(rendered.contains(REDACTED));
    assert!(!rendered.contains("goat@example.com"));
    assert_eq!(identity.email(), Some("goat@example.com"));
}

#[test]
fn dynamic_lookup_covers_exactly_the_described_fields() {
    let summary = DevEnvironmentSummary::builder()
        .id("de-12345")
        .last_updated_time(DateTime::from_secs(1_690_891_200))
        .instance_type(InstanceType::DevStandard1Small)
        .inactivity_timeout_minutes(15)
        .build();

    assert_eq!(
        summary.field_names(),
        vec![
            "spaceName",
            "projectName",
            "id",
            "lastUpdatedTime",
            "creatorId",
            "status",
            "statusReason",
            "repositories",
            "alias",
            "ides",
            "instanceType",
            "inactivityTimeoutMinutes",
            "persistentStorage",
        ]
    );
    assert_eq!(summary.field("id").unwrap().expect_str(), "de-12345");
    assert_eq!(
        summary
            .field("inactivityTimeoutMinutes")
            .unwrap()
            .expect_integer(),
        15
    );
    // enums surface their raw wire string
    assert_eq!(
        summary.field("instanceType").unwrap().expect_str(),
        "dev.standard1.small"
    );
    // described but unset, and entirely undescribed, both resolve to None
    assert!(summary.field("creatorId").is_none());
    assert!(summary.field("noSuchField").is_none());
}

proptest::proptest! {
    #[test]
    fn equal_filters_hash_equal(
        key in proptest::option::of("[a-zA-Z]{0,10}"),
        values in proptest::option::of(proptest::collection::vec("[A-Z]{0,8}", 0..4)),
        equals in proptest::bool::ANY,
    ) {
        let operator = equals.then_some(ComparisonOperator::Equals);
        let a = Filter::builder()
            .set_key(key.clone())
            .set_values(values.clone())
            .set_comparison_operator(operator.clone())
            .build();
        let b = Filter::builder()
            .set_key(key)
            .set_values(values)
            .set_comparison_operator(operator)
            .build();
        proptest::prop_assert!(a == b);
        proptest::prop_assert_eq!(hash_by_fields(&a), hash_by_fields(&b));
    }
}
