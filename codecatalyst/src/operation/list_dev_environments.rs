/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Lists the Dev Environments in a project.

use crate::types::{DevEnvironmentSummary, Filter};
use http::Method;
use smithy_shape::{
    configured, member_i32, member_shape_list, member_string, DescribedShape, Document,
    FieldDescriptor, FieldTraits, FieldValue, OperationMeta, OperationRequest,
    RequestOverrideConfig, ResponseMetadata, Shape, ShapeBuilder, ShapeType, UnmarshallError,
    WireLocation,
};

static META: OperationMeta = OperationMeta {
    name: "ListDevEnvironments",
    method: Method::POST,
    uri_template: "/v1/spaces/{spaceName}/projects/{projectName}/devEnvironments",
};

/// Input for `ListDevEnvironments`.
#[derive(Clone)]
#[non_exhaustive]
pub struct ListDevEnvironmentsRequest {
    pub(crate) space_name: Option<String>,
    pub(crate) project_name: Option<String>,
    pub(crate) filters: Option<Vec<Filter>>,
    pub(crate) next_token: Option<String>,
    pub(crate) max_results: Option<i32>,
    pub(crate) override_config: Option<RequestOverrideConfig>,
}

impl ListDevEnvironmentsRequest {
    /// The space to list in.
    pub fn space_name(&self) -> Option<&str> {
        self.space_name.as_deref()
    }

    /// The project to list in.
    pub fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }

    /// Filters narrowing the result set. Returns an empty slice when the field
    /// was never set.
    pub fn filters(&self) -> &[Filter] {
        self.filters.as_deref().unwrap_or_default()
    }

    /// Whether `filters` was explicitly provided, even as an empty list.
    pub fn has_filters(&self) -> bool {
        self.filters.is_some()
    }

    /// Continuation token from a previous page.
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    /// Maximum number of results per page.
    pub fn max_results(&self) -> Option<i32> {
        self.max_results
    }

    /// Per-call configuration overrides.
    pub fn override_config(&self) -> Option<&RequestOverrideConfig> {
        self.override_config.as_ref()
    }

    /// Creates a new builder.
    pub fn builder() -> ListDevEnvironmentsRequestBuilder {
        ListDevEnvironmentsRequestBuilder::default()
    }

    /// Creates a builder populated from this value.
    pub fn to_builder(&self) -> ListDevEnvironmentsRequestBuilder {
        ListDevEnvironmentsRequestBuilder {
            space_name: self.space_name.clone(),
            project_name: self.project_name.clone(),
            filters: self.filters.clone(),
            next_token: self.next_token.clone(),
            max_results: self.max_results,
            override_config: self.override_config.clone(),
        }
    }
}

smithy_shape::shape_impls!(ListDevEnvironmentsRequest);

impl DescribedShape for ListDevEnvironmentsRequest {
    type Builder = ListDevEnvironmentsRequestBuilder;

    fn shape_name() -> &'static str {
        "ListDevEnvironmentsRequest"
    }

    fn descriptors() -> &'static [FieldDescriptor<Self, ListDevEnvironmentsRequestBuilder>] {
        &REQUEST_FIELDS
    }
}

impl OperationRequest for ListDevEnvironmentsRequest {
    fn operation() -> &'static OperationMeta {
        &META
    }
}

static REQUEST_FIELDS: [FieldDescriptor<
    ListDevEnvironmentsRequest,
    ListDevEnvironmentsRequestBuilder,
>; 5] = [
    FieldDescriptor {
        name: "spaceName",
        shape_type: ShapeType::String,
        location: WireLocation::Label,
        traits: FieldTraits::NONE,
        get: get_space_name,
        set: set_space_name,
    },
    FieldDescriptor {
        name: "projectName",
        shape_type: ShapeType::String,
        location: WireLocation::Label,
        traits: FieldTraits::NONE,
        get: get_project_name,
        set: set_project_name,
    },
    FieldDescriptor {
        name: "filters",
        shape_type: ShapeType::List,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_filters,
        set: set_filters,
    },
    FieldDescriptor {
        name: "nextToken",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_next_token,
        set: set_next_token,
    },
    FieldDescriptor {
        name: "maxResults",
        shape_type: ShapeType::Integer,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_max_results,
        set: set_max_results,
    },
];

fn get_space_name(shape: &ListDevEnvironmentsRequest) -> Option<FieldValue<'_>> {
    shape.space_name.as_deref().map(FieldValue::String)
}

fn set_space_name(
    builder: &mut ListDevEnvironmentsRequestBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.space_name = Some(member_string("spaceName", doc)?);
    Ok(())
}

fn get_project_name(shape: &ListDevEnvironmentsRequest) -> Option<FieldValue<'_>> {
    shape.project_name.as_deref().map(FieldValue::String)
}

fn set_project_name(
    builder: &mut ListDevEnvironmentsRequestBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.project_name = Some(member_string("projectName", doc)?);
    Ok(())
}

fn get_filters(shape: &ListDevEnvironmentsRequest) -> Option<FieldValue<'_>> {
    shape
        .filters
        .as_deref()
        .map(|filters| FieldValue::ShapeList(filters.iter().map(|f| f as &dyn Shape).collect()))
}

fn set_filters(
    builder: &mut ListDevEnvironmentsRequestBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.filters = Some(member_shape_list("filters", doc)?);
    Ok(())
}

fn get_next_token(shape: &ListDevEnvironmentsRequest) -> Option<FieldValue<'_>> {
    shape.next_token.as_deref().map(FieldValue::String)
}

fn set_next_token(
    builder: &mut ListDevEnvironmentsRequestBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.next_token = Some(member_string("nextToken", doc)?);
    Ok(())
}

fn get_max_results(shape: &ListDevEnvironmentsRequest) -> Option<FieldValue<'_>> {
    shape.max_results.map(FieldValue::Integer)
}

fn set_max_results(
    builder: &mut ListDevEnvironmentsRequestBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.max_results = Some(member_i32("maxResults", doc)?);
    Ok(())
}

/// Builder for [`ListDevEnvironmentsRequest`].
#[derive(Clone, Debug, Default)]
pub struct ListDevEnvironmentsRequestBuilder {
    pub(crate) space_name: Option<String>,
    pub(crate) project_name: Option<String>,
    pub(crate) filters: Option<Vec<Filter>>,
    pub(crate) next_token: Option<String>,
    pub(crate) max_results: Option<i32>,
    pub(crate) override_config: Option<RequestOverrideConfig>,
}

impl ListDevEnvironmentsRequestBuilder {
    /// The space to list in.
    pub fn space_name(mut self, input: impl Into<String>) -> Self {
        self.space_name = Some(input.into());
        self
    }

    /// The space to list in.
    pub fn set_space_name(mut self, input: Option<String>) -> Self {
        self.space_name = input;
        self
    }

    /// The project to list in.
    pub fn project_name(mut self, input: impl Into<String>) -> Self {
        self.project_name = Some(input.into());
        self
    }

    /// The project to list in.
    pub fn set_project_name(mut self, input: Option<String>) -> Self {
        self.project_name = input;
        self
    }

    /// Appends an item to `filters`.
    pub fn filters(mut self, input: Filter) -> Self {
        self.filters.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Filters narrowing the result set.
    pub fn set_filters(mut self, input: Option<Vec<Filter>>) -> Self {
        self.filters = input;
        self
    }

    /// Appends a filter built with the given configurator.
    pub fn filters_with(
        self,
        config: impl FnOnce(crate::types::FilterBuilder) -> crate::types::FilterBuilder,
    ) -> Self {
        self.filters(configured(config))
    }

    /// Continuation token from a previous page.
    pub fn next_token(mut self, input: impl Into<String>) -> Self {
        self.next_token = Some(input.into());
        self
    }

    /// Continuation token from a previous page.
    pub fn set_next_token(mut self, input: Option<String>) -> Self {
        self.next_token = input;
        self
    }

    /// Maximum number of results per page.
    pub fn max_results(mut self, input: i32) -> Self {
        self.max_results = Some(input);
        self
    }

    /// Maximum number of results per page.
    pub fn set_max_results(mut self, input: Option<i32>) -> Self {
        self.max_results = input;
        self
    }

    /// Per-call configuration overrides.
    pub fn override_config(mut self, input: RequestOverrideConfig) -> Self {
        self.override_config = Some(input);
        self
    }

    /// Per-call configuration overrides.
    pub fn set_override_config(mut self, input: Option<RequestOverrideConfig>) -> Self {
        self.override_config = input;
        self
    }

    /// Builds the [`ListDevEnvironmentsRequest`].
    pub fn build(self) -> ListDevEnvironmentsRequest {
        ListDevEnvironmentsRequest {
            space_name: self.space_name,
            project_name: self.project_name,
            filters: self.filters,
            next_token: self.next_token,
            max_results: self.max_results,
            override_config: self.override_config,
        }
    }
}

impl ShapeBuilder for ListDevEnvironmentsRequestBuilder {
    type Output = ListDevEnvironmentsRequest;

    fn build(self) -> ListDevEnvironmentsRequest {
        self.build()
    }
}

/// Output of `ListDevEnvironments`.
#[derive(Clone)]
#[non_exhaustive]
pub struct ListDevEnvironmentsResponse {
    pub(crate) items: Option<Vec<DevEnvironmentSummary>>,
    pub(crate) next_token: Option<String>,
    pub(crate) response_metadata: Option<ResponseMetadata>,
}

impl ListDevEnvironmentsResponse {
    /// One page of Dev Environments. Returns an empty slice when the field was
    /// never set.
    pub fn items(&self) -> &[DevEnvironmentSummary] {
        self.items.as_deref().unwrap_or_default()
    }

    /// Whether `items` was explicitly provided, even as an empty list.
    pub fn has_items(&self) -> bool {
        self.items.is_some()
    }

    /// Continuation token for the next page, absent on the last one.
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    /// Metadata the runtime attached to this response.
    pub fn response_metadata(&self) -> Option<&ResponseMetadata> {
        self.response_metadata.as_ref()
    }

    /// Creates a new builder.
    pub fn builder() -> ListDevEnvironmentsResponseBuilder {
        ListDevEnvironmentsResponseBuilder::default()
    }

    /// Creates a builder populated from this value.
    pub fn to_builder(&self) -> ListDevEnvironmentsResponseBuilder {
        ListDevEnvironmentsResponseBuilder {
            items: self.items.clone(),
            next_token: self.next_token.clone(),
            response_metadata: self.response_metadata.clone(),
        }
    }
}

smithy_shape::shape_impls!(ListDevEnvironmentsResponse);

impl DescribedShape for ListDevEnvironmentsResponse {
    type Builder = ListDevEnvironmentsResponseBuilder;

    fn shape_name() -> &'static str {
        "ListDevEnvironmentsResponse"
    }

    fn descriptors() -> &'static [FieldDescriptor<Self, ListDevEnvironmentsResponseBuilder>] {
        &RESPONSE_FIELDS
    }
}

static RESPONSE_FIELDS: [FieldDescriptor<
    ListDevEnvironmentsResponse,
    ListDevEnvironmentsResponseBuilder,
>; 2] = [
    FieldDescriptor {
        name: "items",
        shape_type: ShapeType::List,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_items,
        set: set_items,
    },
    FieldDescriptor {
        name: "nextToken",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_response_next_token,
        set: set_response_next_token,
    },
];

fn get_items(shape: &ListDevEnvironmentsResponse) -> Option<FieldValue<'_>> {
    shape
        .items
        .as_deref()
        .map(|items| FieldValue::ShapeList(items.iter().map(|i| i as &dyn Shape).collect()))
}

fn set_items(
    builder: &mut ListDevEnvironmentsResponseBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.items = Some(member_shape_list("items", doc)?);
    Ok(())
}

fn get_response_next_token(shape: &ListDevEnvironmentsResponse) -> Option<FieldValue<'_>> {
    shape.next_token.as_deref().map(FieldValue::String)
}

fn set_response_next_token(
    builder: &mut ListDevEnvironmentsResponseBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.next_token = Some(member_string("nextToken", doc)?);
    Ok(())
}

/// Builder for [`ListDevEnvironmentsResponse`].
#[derive(Clone, Debug, Default)]
pub struct ListDevEnvironmentsResponseBuilder {
    pub(crate) items: Option<Vec<DevEnvironmentSummary>>,
    pub(crate) next_token: Option<String>,
    pub(crate) response_metadata: Option<ResponseMetadata>,
}

impl ListDevEnvironmentsResponseBuilder {
    /// Appends an item to `items`.
    pub fn items(mut self, input: DevEnvironmentSummary) -> Self {
        self.items.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// One page of Dev Environments.
    pub fn set_items(mut self, input: Option<Vec<DevEnvironmentSummary>>) -> Self {
        self.items = input;
        self
    }

    /// Continuation token for the next page.
    pub fn next_token(mut self, input: impl Into<String>) -> Self {
        self.next_token = Some(input.into());
        self
    }

    /// Continuation token for the next page.
    pub fn set_next_token(mut self, input: Option<String>) -> Self {
        self.next_token = input;
        self
    }

    /// Metadata the runtime attached to this response.
    pub fn response_metadata(mut self, input: ResponseMetadata) -> Self {
        self.response_metadata = Some(input);
        self
    }

    /// Metadata the runtime attached to this response.
    pub fn set_response_metadata(mut self, input: Option<ResponseMetadata>) -> Self {
        self.response_metadata = input;
        self
    }

    /// Builds the [`ListDevEnvironmentsResponse`].
    pub fn build(self) -> ListDevEnvironmentsResponse {
        ListDevEnvironmentsResponse {
            items: self.items,
            next_token: self.next_token,
            response_metadata: self.response_metadata,
        }
    }
}

impl ShapeBuilder for ListDevEnvironmentsResponseBuilder {
    type Output = ListDevEnvironmentsResponse;

    fn build(self) -> ListDevEnvironmentsResponse {
        self.build()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::ComparisonOperator;
    use smithy_shape::marshall_request;

    #[test]
    fn labels_fill_the_path_and_filters_land_in_the_payload() {
        let request = ListDevEnvironmentsRequest::builder()
            .space_name("birds")
            .project_name("crows")
            .filters_with(|f| {
                f.key("status")
                    .values("RUNNING")
                    .comparison_operator(ComparisonOperator::Equals)
            })
            .max_results(25)
            .build();

        let marshalled = marshall_request(&request).unwrap();
        assert_eq!(marshalled.method(), &Method::POST);
        assert_eq!(
            marshalled.path(),
            "/v1/spaces/birds/projects/crows/devEnvironments"
        );
        assert!(marshalled.query().is_empty());

        let payload = marshalled.payload().unwrap().as_object().unwrap();
        assert!(payload.contains_key("filters"));
        assert!(payload.contains_key("maxResults"));
        assert!(!payload.contains_key("nextToken"));
        assert!(!payload.contains_key("spaceName"));
    }

    #[test]
    fn missing_label_is_an_error() {
        let request = ListDevEnvironmentsRequest::builder()
            .space_name("birds")
            .build();
        let err = marshall_request(&request).unwrap_err();
        assert!(matches!(
            err,
            smithy_shape::MarshallError::MissingLabel {
                label: "projectName"
            }
        ));
    }

    #[test]
    fn override_config_stays_out_of_equality_and_the_wire() {
        let bare = ListDevEnvironmentsRequest::builder()
            .space_name("birds")
            .project_name("crows")
            .build();
        let with_override = bare
            .to_builder()
            .override_config(
                RequestOverrideConfig::builder()
                    .user_agent_suffix("nightly-sweep")
                    .build(),
            )
            .build();

        assert_eq!(bare, with_override);
        let payload = marshall_request(&with_override).unwrap();
        let members = payload.payload().unwrap().as_object().unwrap().clone();
        assert!(members.is_empty());
    }
}
