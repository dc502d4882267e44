/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! End-to-end marshalling through the wire document representation.

use codecatalyst::operation::list_dev_environments::{
    ListDevEnvironmentsRequest, ListDevEnvironmentsResponse,
};
use codecatalyst::types::{ComparisonOperator, DevEnvironmentStatus, Filter, InstanceType};
use http::Method;
use smithy_shape::{marshall_request, marshall_shape, unmarshall_shape, DateTime, Document};

#[test]
fn filter_survives_a_wire_round_trip() {
    let filter = Filter::builder()
        .key("status")
        .values("RUNNING")
        .values("STOPPED")
        .comparison_operator(ComparisonOperator::Equals)
        .build();
    assert!(filter.has_values());

    let doc = marshall_shape(&filter).unwrap();
    let members = doc.as_object().unwrap();
    assert_eq!(members.get("key").unwrap().as_string(), Some("status"));
    assert_eq!(
        members.get("comparisonOperator").unwrap().as_string(),
        Some("EQUALS")
    );
    let values = members.get("values").unwrap().as_array().unwrap();
    assert_eq!(values.len(), 2);

    let parsed: Filter = unmarshall_shape(&doc).unwrap();
    assert_eq!(parsed, filter);
    assert_eq!(parsed.values(), &["RUNNING".to_string(), "STOPPED".to_string()]);
}

#[test]
fn list_request_marshals_to_its_declared_locations() {
    let request = ListDevEnvironmentsRequest::builder()
        .space_name("birds")
        .project_name("crows")
        .filters_with(|f| {
            f.key("status")
                .values("RUNNING")
                .comparison_operator(ComparisonOperator::Equals)
        })
        .next_token("page-2")
        .max_results(50)
        .build();

    let marshalled = marshall_request(&request).unwrap();
    assert_eq!(marshalled.method(), &Method::POST);
    assert_eq!(
        marshalled.path(),
        "/v1/spaces/birds/projects/crows/devEnvironments"
    );

    let payload = marshalled.payload().unwrap().as_object().unwrap();
    assert_eq!(payload.get("nextToken").unwrap().as_string(), Some("page-2"));
    assert_eq!(
        payload
            .get("maxResults")
            .unwrap()
            .as_number()
            .and_then(|n| n.to_i32()),
        Some(50)
    );
    let filters = payload.get("filters").unwrap().as_array().unwrap();
    let filter = filters[0].as_object().unwrap();
    assert_eq!(filter.get("key").unwrap().as_string(), Some("status"));
    // labels never leak into the body
    assert!(!payload.contains_key("spaceName"));
    assert!(!payload.contains_key("projectName"));
}

#[test]
fn list_response_unmarshals_a_full_service_page() {
    let page = ListDevEnvironmentsResponse::builder()
        .items(
            codecatalyst::types::DevEnvironmentSummary::builder()
                .space_name("birds")
                .project_name("crows")
                .id("de-1")
                .status(DevEnvironmentStatus::Running)
                .instance_type(InstanceType::DevStandard1Small)
                .last_updated_time(DateTime::from_secs(1_690_891_200))
                .repositories_with(|r| r.repository_name("crow-counter").branch_name("main"))
                .persistent_storage_with(|s| s.size_in_gib(16))
                .build(),
        )
        .next_token("page-2")
        .build();

    let doc = marshall_shape(&page).unwrap();
    let parsed: ListDevEnvironmentsResponse = unmarshall_shape(&doc).unwrap();
    assert_eq!(parsed, page);

    let item = &parsed.items()[0];
    assert_eq!(item.id(), Some("de-1"));
    assert_eq!(item.status(), Some(&DevEnvironmentStatus::Running));
    assert_eq!(item.repositories()[0].branch_name(), Some("main"));
    assert_eq!(item.persistent_storage().unwrap().size_in_gib(), Some(16));
}

#[test]
fn unknown_members_from_a_newer_service_are_tolerated() {
    let mut members = std::collections::HashMap::new();
    members.insert("key".to_string(), Document::from("status"));
    members.insert("futureMember".to_string(), Document::from("surprise"));
    let parsed: Filter = unmarshall_shape(&Document::Object(members)).unwrap();
    assert_eq!(parsed.key(), Some("status"));
    assert!(!parsed.has_values());
}
