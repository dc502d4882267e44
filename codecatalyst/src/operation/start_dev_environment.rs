/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Starts a stopped Dev Environment.

use crate::types::{DevEnvironmentStatus, IdeConfiguration, InstanceType};
use http::Method;
use smithy_shape::{
    configured, member_i32, member_shape_list, member_string, DescribedShape, Document,
    FieldDescriptor, FieldTraits, FieldValue, OperationMeta, OperationRequest,
    RequestOverrideConfig, ResponseMetadata, Shape, ShapeBuilder, ShapeType, UnmarshallError,
    WireLocation,
};

static META: OperationMeta = OperationMeta {
    name: "StartDevEnvironment",
    method: Method::PUT,
    uri_template: "/v1/spaces/{spaceName}/projects/{projectName}/devEnvironments/{id}/start",
};

/// Input for `StartDevEnvironment`.
#[derive(Clone)]
#[non_exhaustive]
pub struct StartDevEnvironmentRequest {
    pub(crate) space_name: Option<String>,
    pub(crate) project_name: Option<String>,
    pub(crate) id: Option<String>,
    pub(crate) ides: Option<Vec<IdeConfiguration>>,
    pub(crate) instance_type: Option<InstanceType>,
    pub(crate) inactivity_timeout_minutes: Option<i32>,
    pub(crate) override_config: Option<RequestOverrideConfig>,
}

impl StartDevEnvironmentRequest {
    /// The space the Dev Environment belongs to.
    pub fn space_name(&self) -> Option<&str> {
        self.space_name.as_deref()
    }

    /// The project the Dev Environment belongs to.
    pub fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }

    /// The system-generated Dev Environment ID.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// IDEs to run after the start. Returns an empty slice when the field was
    /// never set.
    pub fn ides(&self) -> &[IdeConfiguration] {
        self.ides.as_deref().unwrap_or_default()
    }

    /// Whether `ides` was explicitly provided, even as an empty list.
    pub fn has_ides(&self) -> bool {
        self.ides.is_some()
    }

    /// Compute instance size to start with.
    pub fn instance_type(&self) -> Option<&InstanceType> {
        self.instance_type.as_ref()
    }

    /// Minutes of inactivity before the Dev Environment stops itself.
    pub fn inactivity_timeout_minutes(&self) -> Option<i32> {
        self.inactivity_timeout_minutes
    }

    /// Per-call configuration overrides.
    pub fn override_config(&self) -> Option<&RequestOverrideConfig> {
        self.override_config.as_ref()
    }

    /// Creates a new builder.
    pub fn builder() -> StartDevEnvironmentRequestBuilder {
        StartDevEnvironmentRequestBuilder::default()
    }

    /// Creates a builder populated from this value.
    pub fn to_builder(&self) -> StartDevEnvironmentRequestBuilder {
        StartDevEnvironmentRequestBuilder {
            space_name: self.space_name.clone(),
            project_name: self.project_name.clone(),
            id: self.id.clone(),
            ides: self.ides.clone(),
            instance_type: self.instance_type.clone(),
            inactivity_timeout_minutes: self.inactivity_timeout_minutes,
            override_config: self.override_config.clone(),
        }
    }
}

smithy_shape::shape_impls!(StartDevEnvironmentRequest);

impl DescribedShape for StartDevEnvironmentRequest {
    type Builder = StartDevEnvironmentRequestBuilder;

    fn shape_name() -> &'static str {
        "StartDevEnvironmentRequest"
    }

    fn descriptors() -> &'static [FieldDescriptor<Self, StartDevEnvironmentRequestBuilder>] {
        &REQUEST_FIELDS
    }
}

impl OperationRequest for StartDevEnvironmentRequest {
    fn operation() -> &'static OperationMeta {
        &META
    }
}

static REQUEST_FIELDS: [FieldDescriptor<
    StartDevEnvironmentRequest,
    StartDevEnvironmentRequestBuilder,
>; 6] = [
    FieldDescriptor {
        name: "spaceName",
        shape_type: ShapeType::String,
        location: WireLocation::Label,
        traits: FieldTraits::NONE,
        get: get_request_space_name,
        set: set_request_space_name,
    },
    FieldDescriptor {
        name: "projectName",
        shape_type: ShapeType::String,
        location: WireLocation::Label,
        traits: FieldTraits::NONE,
        get: get_request_project_name,
        set: set_request_project_name,
    },
    FieldDescriptor {
        name: "id",
        shape_type: ShapeType::String,
        location: WireLocation::Label,
        traits: FieldTraits::NONE,
        get: get_request_id,
        set: set_request_id,
    },
    FieldDescriptor {
        name: "ides",
        shape_type: ShapeType::List,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_request_ides,
        set: set_request_ides,
    },
    FieldDescriptor {
        name: "instanceType",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_request_instance_type,
        set: set_request_instance_type,
    },
    FieldDescriptor {
        name: "inactivityTimeoutMinutes",
        shape_type: ShapeType::Integer,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_request_inactivity_timeout_minutes,
        set: set_request_inactivity_timeout_minutes,
    },
];

fn get_request_space_name(shape: &StartDevEnvironmentRequest) -> Option<FieldValue<'_>> {
    shape.space_name.as_deref().map(FieldValue::String)
}

fn set_request_space_name(
    builder: &mut StartDevEnvironmentRequestBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.space_name = Some(member_string("spaceName", doc)?);
    Ok(())
}

fn get_request_project_name(shape: &StartDevEnvironmentRequest) -> Option<FieldValue<'_>> {
    shape.project_name.as_deref().map(FieldValue::String)
}

fn set_request_project_name(
    builder: &mut StartDevEnvironmentRequestBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.project_name = Some(member_string("projectName", doc)?);
    Ok(())
}

fn get_request_id(shape: &StartDevEnvironmentRequest) -> Option<FieldValue<'_>> {
    shape.id.as_deref().map(FieldValue::String)
}

fn set_request_id(
    builder: &mut StartDevEnvironmentRequestBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.id = Some(member_string("id", doc)?);
    Ok(())
}

fn get_request_ides(shape: &StartDevEnvironmentRequest) -> Option<FieldValue<'_>> {
    shape
        .ides
        .as_deref()
        .map(|ides| FieldValue::ShapeList(ides.iter().map(|i| i as &dyn Shape).collect()))
}

fn set_request_ides(
    builder: &mut StartDevEnvironmentRequestBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.ides = Some(member_shape_list("ides", doc)?);
    Ok(())
}

fn get_request_instance_type(shape: &StartDevEnvironmentRequest) -> Option<FieldValue<'_>> {
    shape
        .instance_type
        .as_ref()
        .map(|instance_type| FieldValue::String(instance_type.as_str()))
}

fn set_request_instance_type(
    builder: &mut StartDevEnvironmentRequestBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.instance_type = Some(InstanceType::from(
        member_string("instanceType", doc)?.as_str(),
    ));
    Ok(())
}

fn get_request_inactivity_timeout_minutes(
    shape: &StartDevEnvironmentRequest,
) -> Option<FieldValue<'_>> {
    shape.inactivity_timeout_minutes.map(FieldValue::Integer)
}

fn set_request_inactivity_timeout_minutes(
    builder: &mut StartDevEnvironmentRequestBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.inactivity_timeout_minutes = Some(member_i32("inactivityTimeoutMinutes", doc)?);
    Ok(())
}

/// Builder for [`StartDevEnvironmentRequest`].
#[derive(Clone, Debug, Default)]
pub struct StartDevEnvironmentRequestBuilder {
    pub(crate) space_name: Option<String>,
    pub(crate) project_name: Option<String>,
    pub(crate) id: Option<String>,
    pub(crate) ides: Option<Vec<IdeConfiguration>>,
    pub(crate) instance_type: Option<InstanceType>,
    pub(crate) inactivity_timeout_minutes: Option<i32>,
    pub(crate) override_config: Option<RequestOverrideConfig>,
}

impl StartDevEnvironmentRequestBuilder {
    /// The space the Dev Environment belongs to.
    pub fn space_name(mut self, input: impl Into<String>) -> Self {
        self.space_name = Some(input.into());
        self
    }

    /// The space the Dev Environment belongs to.
    pub fn set_space_name(mut self, input: Option<String>) -> Self {
        self.space_name = input;
        self
    }

    /// The project the Dev Environment belongs to.
    pub fn project_name(mut self, input: impl Into<String>) -> Self {
        self.project_name = Some(input.into());
        self
    }

    /// The project the Dev Environment belongs to.
    pub fn set_project_name(mut self, input: Option<String>) -> Self {
        self.project_name = input;
        self
    }

    /// The system-generated Dev Environment ID.
    pub fn id(mut self, input: impl Into<String>) -> Self {
        self.id = Some(input.into());
        self
    }

    /// The system-generated Dev Environment ID.
    pub fn set_id(mut self, input: Option<String>) -> Self {
        self.id = input;
        self
    }

    /// Appends an item to `ides`.
    pub fn ides(mut self, input: IdeConfiguration) -> Self {
        self.ides.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// IDEs to run after the start.
    pub fn set_ides(mut self, input: Option<Vec<IdeConfiguration>>) -> Self {
        self.ides = input;
        self
    }

    /// Appends an IDE built with the given configurator.
    pub fn ides_with(
        self,
        config: impl FnOnce(crate::types::IdeConfigurationBuilder) -> crate::types::IdeConfigurationBuilder,
    ) -> Self {
        self.ides(configured(config))
    }

    /// Compute instance size to start with.
    pub fn instance_type(mut self, input: InstanceType) -> Self {
        self.instance_type = Some(input);
        self
    }

    /// Compute instance size to start with.
    pub fn set_instance_type(mut self, input: Option<InstanceType>) -> Self {
        self.instance_type = input;
        self
    }

    /// Minutes of inactivity before the Dev Environment stops itself.
    pub fn inactivity_timeout_minutes(mut self, input: i32) -> Self {
        self.inactivity_timeout_minutes = Some(input);
        self
    }

    /// Minutes of inactivity before the Dev Environment stops itself.
    pub fn set_inactivity_timeout_minutes(mut self, input: Option<i32>) -> Self {
        self.inactivity_timeout_minutes = input;
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

    /// Builds the [`StartDevEnvironmentRequest`].
    pub fn build(self) -> StartDevEnvironmentRequest {
        StartDevEnvironmentRequest {
            space_name: self.space_name,
            project_name: self.project_name,
            id: self.id,
            ides: self.ides,
            instance_type: self.instance_type,
            inactivity_timeout_minutes: self.inactivity_timeout_minutes,
            override_config: self.override_config,
        }
    }
}

impl ShapeBuilder for StartDevEnvironmentRequestBuilder {
    type Output = StartDevEnvironmentRequest;

    fn build(self) -> StartDevEnvironmentRequest {
        self.build()
    }
}

/// Output of `StartDevEnvironment`.
#[derive(Clone)]
#[non_exhaustive]
pub struct StartDevEnvironmentResponse {
    pub(crate) space_name: Option<String>,
    pub(crate) project_name: Option<String>,
    pub(crate) id: Option<String>,
    pub(crate) status: Option<DevEnvironmentStatus>,
    pub(crate) response_metadata: Option<ResponseMetadata>,
}

impl StartDevEnvironmentResponse {
    /// The space the Dev Environment belongs to.
    pub fn space_name(&self) -> Option<&str> {
        self.space_name.as_deref()
    }

    /// The project the Dev Environment belongs to.
    pub fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }

    /// The system-generated Dev Environment ID.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Status after the start was requested.
    pub fn status(&self) -> Option<&DevEnvironmentStatus> {
        self.status.as_ref()
    }

    /// Metadata the runtime attached to this response.
    pub fn response_metadata(&self) -> Option<&ResponseMetadata> {
        self.response_metadata.as_ref()
    }

    /// Creates a new builder.
    pub fn builder() -> StartDevEnvironmentResponseBuilder {
        StartDevEnvironmentResponseBuilder::default()
    }

    /// Creates a builder populated from this value.
    pub fn to_builder(&self) -> StartDevEnvironmentResponseBuilder {
        StartDevEnvironmentResponseBuilder {
            space_name: self.space_name.clone(),
            project_name: self.project_name.clone(),
            id: self.id.clone(),
            status: self.status.clone(),
            response_metadata: self.response_metadata.clone(),
        }
    }
}

smithy_shape::shape_impls!(StartDevEnvironmentResponse);

impl DescribedShape for StartDevEnvironmentResponse {
    type Builder = StartDevEnvironmentResponseBuilder;

    fn shape_name() -> &'static str {
        "StartDevEnvironmentResponse"
    }

    fn descriptors() -> &'static [FieldDescriptor<Self, StartDevEnvironmentResponseBuilder>] {
        &RESPONSE_FIELDS
    }
}

static RESPONSE_FIELDS: [FieldDescriptor<
    StartDevEnvironmentResponse,
    StartDevEnvironmentResponseBuilder,
>; 4] = [
    FieldDescriptor {
        name: "spaceName",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_response_space_name,
        set: set_response_space_name,
    },
    FieldDescriptor {
        name: "projectName",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_response_project_name,
        set: set_response_project_name,
    },
    FieldDescriptor {
        name: "id",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_response_id,
        set: set_response_id,
    },
    FieldDescriptor {
        name: "status",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_response_status,
        set: set_response_status,
    },
];

fn get_response_space_name(shape: &StartDevEnvironmentResponse) -> Option<FieldValue<'_>> {
    shape.space_name.as_deref().map(FieldValue::String)
}

fn set_response_space_name(
    builder: &mut StartDevEnvironmentResponseBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.space_name = Some(member_string("spaceName", doc)?);
    Ok(())
}

fn get_response_project_name(shape: &StartDevEnvironmentResponse) -> Option<FieldValue<'_>> {
    shape.project_name.as_deref().map(FieldValue::String)
}

fn set_response_project_name(
    builder: &mut StartDevEnvironmentResponseBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.project_name = Some(member_string("projectName", doc)?);
    Ok(())
}

fn get_response_id(shape: &StartDevEnvironmentResponse) -> Option<FieldValue<'_>> {
    shape.id.as_deref().map(FieldValue::String)
}

fn set_response_id(
    builder: &mut StartDevEnvironmentResponseBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.id = Some(member_string("id", doc)?);
    Ok(())
}

fn get_response_status(shape: &StartDevEnvironmentResponse) -> Option<FieldValue<'_>> {
    shape
        .status
        .as_ref()
        .map(|status| FieldValue::String(status.as_str()))
}

fn set_response_status(
    builder: &mut StartDevEnvironmentResponseBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.status = Some(DevEnvironmentStatus::from(
        member_string("status", doc)?.as_str(),
    ));
    Ok(())
}

/// Builder for [`StartDevEnvironmentResponse`].
#[derive(Clone, Debug, Default)]
pub struct StartDevEnvironmentResponseBuilder {
    pub(crate) space_name: Option<String>,
    pub(crate) project_name: Option<String>,
    pub(crate) id: Option<String>,
    pub(crate) status: Option<DevEnvironmentStatus>,
    pub(crate) response_metadata: Option<ResponseMetadata>,
}

impl StartDevEnvironmentResponseBuilder {
    /// The space the Dev Environment belongs to.
    pub fn space_name(mut self, input: impl Into<String>) -> Self {
        self.space_name = Some(input.into());
        self
    }

    /// The space the Dev Environment belongs to.
    pub fn set_space_name(mut self, input: Option<String>) -> Self {
        self.space_name = input;
        self
    }

    /// The project the Dev Environment belongs to.
    pub fn project_name(mut self, input: impl Into<String>) -> Self {
        self.project_name = Some(input.into());
        self
    }

    /// The project the Dev Environment belongs to.
    pub fn set_project_name(mut self, input: Option<String>) -> Self {
        self.project_name = input;
        self
    }

    /// The system-generated Dev Environment ID.
    pub fn id(mut self, input: impl Into<String>) -> Self {
        self.id = Some(input.into());
        self
    }

    /// The system-generated Dev Environment ID.
    pub fn set_id(mut self, input: Option<String>) -> Self {
        self.id = input;
        self
    }

    /// Status after the start was requested.
    pub fn status(mut self, input: DevEnvironmentStatus) -> Self {
        self.status = Some(input);
        self
    }

    /// Status after the start was requested.
    pub fn set_status(mut self, input: Option<DevEnvironmentStatus>) -> Self {
        self.status = input;
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

    /// Builds the [`StartDevEnvironmentResponse`].
    pub fn build(self) -> StartDevEnvironmentResponse {
        StartDevEnvironmentResponse {
            space_name: self.space_name,
            project_name: self.project_name,
            id: self.id,
            status: self.status,
            response_metadata: self.response_metadata,
        }
    }
}

impl ShapeBuilder for StartDevEnvironmentResponseBuilder {
    type Output = StartDevEnvironmentResponse;

    fn build(self) -> StartDevEnvironmentResponse {
        self.build()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use smithy_shape::marshall_request;

    #[test]
    fn labels_and_payload_split_as_declared() {
        let request = StartDevEnvironmentRequest::builder()
            .space_name("birds")
            .project_name("crows")
            .id("de-12345")
            .ides_with(|i| i.name("VSCode"))
            .instance_type(InstanceType::DevStandard1Large)
            .build();

        let marshalled = marshall_request(&request).unwrap();
        assert_eq!(marshalled.method(), &Method::PUT);
        assert_eq!(
            marshalled.path(),
            "/v1/spaces/birds/projects/crows/devEnvironments/de-12345/start"
        );

        let payload = marshalled.payload().unwrap().as_object().unwrap();
        assert_eq!(
            payload.get("instanceType").unwrap().as_string(),
            Some("dev.standard1.large")
        );
        assert!(payload.contains_key("ides"));
        assert!(!payload.contains_key("id"));
    }

    #[test]
    fn response_round_trips_through_a_document() {
        let original = StartDevEnvironmentResponse::builder()
            .space_name("birds")
            .project_name("crows")
            .id("de-12345")
            .status(DevEnvironmentStatus::Starting)
            .build();
        let doc = smithy_shape::marshall_shape(&original).unwrap();
        let parsed: StartDevEnvironmentResponse = smithy_shape::unmarshall_shape(&doc).unwrap();
        assert_eq!(parsed, original);
    }
}
