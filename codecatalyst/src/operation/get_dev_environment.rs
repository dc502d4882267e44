/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Describes one Dev Environment.

use crate::types::{DevEnvironmentStatus, Ide, InstanceType, PersistentStorage, RepositorySummary};
use http::Method;
use smithy_shape::date_time::Format;
use smithy_shape::{
    member_i32, member_shape_list, member_string, member_timestamp, unmarshall_shape, DateTime,
    DescribedShape, Document, FieldDescriptor, FieldTraits, FieldValue, OperationMeta,
    OperationRequest, RequestOverrideConfig, ResponseMetadata, Shape, ShapeBuilder, ShapeType,
    UnmarshallError, WireLocation,
};

static META: OperationMeta = OperationMeta {
    name: "GetDevEnvironment",
    method: Method::GET,
    uri_template: "/v1/spaces/{spaceName}/projects/{projectName}/devEnvironments/{id}",
};

/// Input for `GetDevEnvironment`.
#[derive(Clone)]
#[non_exhaustive]
pub struct GetDevEnvironmentRequest {
    pub(crate) space_name: Option<String>,
    pub(crate) project_name: Option<String>,
    pub(crate) id: Option<String>,
    pub(crate) override_config: Option<RequestOverrideConfig>,
}

impl GetDevEnvironmentRequest {
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

    /// Per-call configuration overrides.
    pub fn override_config(&self) -> Option<&RequestOverrideConfig> {
        self.override_config.as_ref()
    }

    /// Creates a new builder.
    pub fn builder() -> GetDevEnvironmentRequestBuilder {
        GetDevEnvironmentRequestBuilder::default()
    }

    /// Creates a builder populated from this value.
    pub fn to_builder(&self) -> GetDevEnvironmentRequestBuilder {
        GetDevEnvironmentRequestBuilder {
            space_name: self.space_name.clone(),
            project_name: self.project_name.clone(),
            id: self.id.clone(),
            override_config: self.override_config.clone(),
        }
    }
}

smithy_shape::shape_impls!(GetDevEnvironmentRequest);

impl DescribedShape for GetDevEnvironmentRequest {
    type Builder = GetDevEnvironmentRequestBuilder;

    fn shape_name() -> &'static str {
        "GetDevEnvironmentRequest"
    }

    fn descriptors() -> &'static [FieldDescriptor<Self, GetDevEnvironmentRequestBuilder>] {
        &REQUEST_FIELDS
    }
}

impl OperationRequest for GetDevEnvironmentRequest {
    fn operation() -> &'static OperationMeta {
        &META
    }
}

static REQUEST_FIELDS: [FieldDescriptor<GetDevEnvironmentRequest, GetDevEnvironmentRequestBuilder>;
    3] = [
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
];

fn get_request_space_name(shape: &GetDevEnvironmentRequest) -> Option<FieldValue<'_>> {
    shape.space_name.as_deref().map(FieldValue::String)
}

fn set_request_space_name(
    builder: &mut GetDevEnvironmentRequestBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.space_name = Some(member_string("spaceName", doc)?);
    Ok(())
}

fn get_request_project_name(shape: &GetDevEnvironmentRequest) -> Option<FieldValue<'_>> {
    shape.project_name.as_deref().map(FieldValue::String)
}

fn set_request_project_name(
    builder: &mut GetDevEnvironmentRequestBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.project_name = Some(member_string("projectName", doc)?);
    Ok(())
}

fn get_request_id(shape: &GetDevEnvironmentRequest) -> Option<FieldValue<'_>> {
    shape.id.as_deref().map(FieldValue::String)
}

fn set_request_id(
    builder: &mut GetDevEnvironmentRequestBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.id = Some(member_string("id", doc)?);
    Ok(())
}

/// Builder for [`GetDevEnvironmentRequest`].
#[derive(Clone, Debug, Default)]
pub struct GetDevEnvironmentRequestBuilder {
    pub(crate) space_name: Option<String>,
    pub(crate) project_name: Option<String>,
    pub(crate) id: Option<String>,
    pub(crate) override_config: Option<RequestOverrideConfig>,
}

impl GetDevEnvironmentRequestBuilder {
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

    /// Builds the [`GetDevEnvironmentRequest`].
    pub fn build(self) -> GetDevEnvironmentRequest {
        GetDevEnvironmentRequest {
            space_name: self.space_name,
            project_name: self.project_name,
            id: self.id,
            override_config: self.override_config,
        }
    }
}

impl ShapeBuilder for GetDevEnvironmentRequestBuilder {
    type Output = GetDevEnvironmentRequest;

    fn build(self) -> GetDevEnvironmentRequest {
        self.build()
    }
}

/// Output of `GetDevEnvironment`.
#[derive(Clone)]
#[non_exhaustive]
pub struct GetDevEnvironmentResponse {
    pub(crate) space_name: Option<String>,
    pub(crate) project_name: Option<String>,
    pub(crate) id: Option<String>,
    pub(crate) last_updated_time: Option<DateTime>,
    pub(crate) creator_id: Option<String>,
    pub(crate) status: Option<DevEnvironmentStatus>,
    pub(crate) status_reason: Option<String>,
    pub(crate) repositories: Option<Vec<RepositorySummary>>,
    pub(crate) alias: Option<String>,
    pub(crate) ides: Option<Vec<Ide>>,
    pub(crate) instance_type: Option<InstanceType>,
    pub(crate) inactivity_timeout_minutes: Option<i32>,
    pub(crate) persistent_storage: Option<PersistentStorage>,
    pub(crate) response_metadata: Option<ResponseMetadata>,
}

impl GetDevEnvironmentResponse {
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

    /// When the Dev Environment last changed.
    pub fn last_updated_time(&self) -> Option<&DateTime> {
        self.last_updated_time.as_ref()
    }

    /// The ID of the user who created the Dev Environment.
    pub fn creator_id(&self) -> Option<&str> {
        self.creator_id.as_deref()
    }

    /// Current lifecycle status.
    pub fn status(&self) -> Option<&DevEnvironmentStatus> {
        self.status.as_ref()
    }

    /// Why the Dev Environment is in its current status.
    pub fn status_reason(&self) -> Option<&str> {
        self.status_reason.as_deref()
    }

    /// Source repositories cloned into the Dev Environment. Returns an empty
    /// slice when the field was never set.
    pub fn repositories(&self) -> &[RepositorySummary] {
        self.repositories.as_deref().unwrap_or_default()
    }

    /// Whether `repositories` was explicitly provided, even as an empty list.
    pub fn has_repositories(&self) -> bool {
        self.repositories.is_some()
    }

    /// User-specified alias.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// IDEs running in the Dev Environment. Returns an empty slice when the
    /// field was never set.
    pub fn ides(&self) -> &[Ide] {
        self.ides.as_deref().unwrap_or_default()
    }

    /// Whether `ides` was explicitly provided, even as an empty list.
    pub fn has_ides(&self) -> bool {
        self.ides.is_some()
    }

    /// Compute instance size.
    pub fn instance_type(&self) -> Option<&InstanceType> {
        self.instance_type.as_ref()
    }

    /// Minutes of inactivity before the Dev Environment stops itself.
    pub fn inactivity_timeout_minutes(&self) -> Option<i32> {
        self.inactivity_timeout_minutes
    }

    /// Attached root-volume storage.
    pub fn persistent_storage(&self) -> Option<&PersistentStorage> {
        self.persistent_storage.as_ref()
    }

    /// Metadata the runtime attached to this response.
    pub fn response_metadata(&self) -> Option<&ResponseMetadata> {
        self.response_metadata.as_ref()
    }

    /// Creates a new builder.
    pub fn builder() -> GetDevEnvironmentResponseBuilder {
        GetDevEnvironmentResponseBuilder::default()
    }

    /// Creates a builder populated from this value.
    pub fn to_builder(&self) -> GetDevEnvironmentResponseBuilder {
        GetDevEnvironmentResponseBuilder {
            space_name: self.space_name.clone(),
            project_name: self.project_name.clone(),
            id: self.id.clone(),
            last_updated_time: self.last_updated_time,
            creator_id: self.creator_id.clone(),
            status: self.status.clone(),
            status_reason: self.status_reason.clone(),
            repositories: self.repositories.clone(),
            alias: self.alias.clone(),
            ides: self.ides.clone(),
            instance_type: self.instance_type.clone(),
            inactivity_timeout_minutes: self.inactivity_timeout_minutes,
            persistent_storage: self.persistent_storage.clone(),
            response_metadata: self.response_metadata.clone(),
        }
    }
}

smithy_shape::shape_impls!(GetDevEnvironmentResponse);

impl DescribedShape for GetDevEnvironmentResponse {
    type Builder = GetDevEnvironmentResponseBuilder;

    fn shape_name() -> &'static str {
        "GetDevEnvironmentResponse"
    }

    fn descriptors() -> &'static [FieldDescriptor<Self, GetDevEnvironmentResponseBuilder>] {
        &RESPONSE_FIELDS
    }
}

static RESPONSE_FIELDS: [FieldDescriptor<
    GetDevEnvironmentResponse,
    GetDevEnvironmentResponseBuilder,
>; 13] = [
    FieldDescriptor {
        name: "spaceName",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_space_name,
        set: set_space_name,
    },
    FieldDescriptor {
        name: "projectName",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_project_name,
        set: set_project_name,
    },
    FieldDescriptor {
        name: "id",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_id,
        set: set_id,
    },
    FieldDescriptor {
        name: "lastUpdatedTime",
        shape_type: ShapeType::Timestamp,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE.timestamp_format(Format::DateTime),
        get: get_last_updated_time,
        set: set_last_updated_time,
    },
    FieldDescriptor {
        name: "creatorId",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_creator_id,
        set: set_creator_id,
    },
    FieldDescriptor {
        name: "status",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_status,
        set: set_status,
    },
    FieldDescriptor {
        name: "statusReason",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_status_reason,
        set: set_status_reason,
    },
    FieldDescriptor {
        name: "repositories",
        shape_type: ShapeType::List,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_repositories,
        set: set_repositories,
    },
    FieldDescriptor {
        name: "alias",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_alias,
        set: set_alias,
    },
    FieldDescriptor {
        name: "ides",
        shape_type: ShapeType::List,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_ides,
        set: set_ides,
    },
    FieldDescriptor {
        name: "instanceType",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_instance_type,
        set: set_instance_type,
    },
    FieldDescriptor {
        name: "inactivityTimeoutMinutes",
        shape_type: ShapeType::Integer,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_inactivity_timeout_minutes,
        set: set_inactivity_timeout_minutes,
    },
    FieldDescriptor {
        name: "persistentStorage",
        shape_type: ShapeType::Structure,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_persistent_storage,
        set: set_persistent_storage,
    },
];

fn get_space_name(shape: &GetDevEnvironmentResponse) -> Option<FieldValue<'_>> {
    shape.space_name.as_deref().map(FieldValue::String)
}

fn set_space_name(
    builder: &mut GetDevEnvironmentResponseBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.space_name = Some(member_string("spaceName", doc)?);
    Ok(())
}

fn get_project_name(shape: &GetDevEnvironmentResponse) -> Option<FieldValue<'_>> {
    shape.project_name.as_deref().map(FieldValue::String)
}

fn set_project_name(
    builder: &mut GetDevEnvironmentResponseBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.project_name = Some(member_string("projectName", doc)?);
    Ok(())
}

fn get_id(shape: &GetDevEnvironmentResponse) -> Option<FieldValue<'_>> {
    shape.id.as_deref().map(FieldValue::String)
}

fn set_id(
    builder: &mut GetDevEnvironmentResponseBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.id = Some(member_string("id", doc)?);
    Ok(())
}

fn get_last_updated_time(shape: &GetDevEnvironmentResponse) -> Option<FieldValue<'_>> {
    shape.last_updated_time.as_ref().map(FieldValue::Timestamp)
}

fn set_last_updated_time(
    builder: &mut GetDevEnvironmentResponseBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.last_updated_time = Some(member_timestamp("lastUpdatedTime", doc)?);
    Ok(())
}

fn get_creator_id(shape: &GetDevEnvironmentResponse) -> Option<FieldValue<'_>> {
    shape.creator_id.as_deref().map(FieldValue::String)
}

fn set_creator_id(
    builder: &mut GetDevEnvironmentResponseBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.creator_id = Some(member_string("creatorId", doc)?);
    Ok(())
}

fn get_status(shape: &GetDevEnvironmentResponse) -> Option<FieldValue<'_>> {
    shape
        .status
        .as_ref()
        .map(|status| FieldValue::String(status.as_str()))
}

fn set_status(
    builder: &mut GetDevEnvironmentResponseBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.status = Some(DevEnvironmentStatus::from(
        member_string("status", doc)?.as_str(),
    ));
    Ok(())
}

fn get_status_reason(shape: &GetDevEnvironmentResponse) -> Option<FieldValue<'_>> {
    shape.status_reason.as_deref().map(FieldValue::String)
}

fn set_status_reason(
    builder: &mut GetDevEnvironmentResponseBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.status_reason = Some(member_string("statusReason", doc)?);
    Ok(())
}

fn get_repositories(shape: &GetDevEnvironmentResponse) -> Option<FieldValue<'_>> {
    shape.repositories.as_deref().map(|repositories| {
        FieldValue::ShapeList(repositories.iter().map(|r| r as &dyn Shape).collect())
    })
}

fn set_repositories(
    builder: &mut GetDevEnvironmentResponseBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.repositories = Some(member_shape_list("repositories", doc)?);
    Ok(())
}

fn get_alias(shape: &GetDevEnvironmentResponse) -> Option<FieldValue<'_>> {
    shape.alias.as_deref().map(FieldValue::String)
}

fn set_alias(
    builder: &mut GetDevEnvironmentResponseBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.alias = Some(member_string("alias", doc)?);
    Ok(())
}

fn get_ides(shape: &GetDevEnvironmentResponse) -> Option<FieldValue<'_>> {
    shape
        .ides
        .as_deref()
        .map(|ides| FieldValue::ShapeList(ides.iter().map(|i| i as &dyn Shape).collect()))
}

fn set_ides(
    builder: &mut GetDevEnvironmentResponseBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.ides = Some(member_shape_list("ides", doc)?);
    Ok(())
}

fn get_instance_type(shape: &GetDevEnvironmentResponse) -> Option<FieldValue<'_>> {
    shape
        .instance_type
        .as_ref()
        .map(|instance_type| FieldValue::String(instance_type.as_str()))
}

fn set_instance_type(
    builder: &mut GetDevEnvironmentResponseBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.instance_type = Some(InstanceType::from(
        member_string("instanceType", doc)?.as_str(),
    ));
    Ok(())
}

fn get_inactivity_timeout_minutes(shape: &GetDevEnvironmentResponse) -> Option<FieldValue<'_>> {
    shape.inactivity_timeout_minutes.map(FieldValue::Integer)
}

fn set_inactivity_timeout_minutes(
    builder: &mut GetDevEnvironmentResponseBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.inactivity_timeout_minutes = Some(member_i32("inactivityTimeoutMinutes", doc)?);
    Ok(())
}

fn get_persistent_storage(shape: &GetDevEnvironmentResponse) -> Option<FieldValue<'_>> {
    shape
        .persistent_storage
        .as_ref()
        .map(|storage| FieldValue::Shape(storage as &dyn Shape))
}

fn set_persistent_storage(
    builder: &mut GetDevEnvironmentResponseBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.persistent_storage = Some(unmarshall_shape(doc)?);
    Ok(())
}

/// Builder for [`GetDevEnvironmentResponse`].
#[derive(Clone, Debug, Default)]
pub struct GetDevEnvironmentResponseBuilder {
    pub(crate) space_name: Option<String>,
    pub(crate) project_name: Option<String>,
    pub(crate) id: Option<String>,
    pub(crate) last_updated_time: Option<DateTime>,
    pub(crate) creator_id: Option<String>,
    pub(crate) status: Option<DevEnvironmentStatus>,
    pub(crate) status_reason: Option<String>,
    pub(crate) repositories: Option<Vec<RepositorySummary>>,
    pub(crate) alias: Option<String>,
    pub(crate) ides: Option<Vec<Ide>>,
    pub(crate) instance_type: Option<InstanceType>,
    pub(crate) inactivity_timeout_minutes: Option<i32>,
    pub(crate) persistent_storage: Option<PersistentStorage>,
    pub(crate) response_metadata: Option<ResponseMetadata>,
}

impl GetDevEnvironmentResponseBuilder {
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

    /// When the Dev Environment last changed.
    pub fn last_updated_time(mut self, input: DateTime) -> Self {
        self.last_updated_time = Some(input);
        self
    }

    /// When the Dev Environment last changed.
    pub fn set_last_updated_time(mut self, input: Option<DateTime>) -> Self {
        self.last_updated_time = input;
        self
    }

    /// The ID of the user who created the Dev Environment.
    pub fn creator_id(mut self, input: impl Into<String>) -> Self {
        self.creator_id = Some(input.into());
        self
    }

    /// The ID of the user who created the Dev Environment.
    pub fn set_creator_id(mut self, input: Option<String>) -> Self {
        self.creator_id = input;
        self
    }

    /// Current lifecycle status.
    pub fn status(mut self, input: DevEnvironmentStatus) -> Self {
        self.status = Some(input);
        self
    }

    /// Current lifecycle status.
    pub fn set_status(mut self, input: Option<DevEnvironmentStatus>) -> Self {
        self.status = input;
        self
    }

    /// Why the Dev Environment is in its current status.
    pub fn status_reason(mut self, input: impl Into<String>) -> Self {
        self.status_reason = Some(input.into());
        self
    }

    /// Why the Dev Environment is in its current status.
    pub fn set_status_reason(mut self, input: Option<String>) -> Self {
        self.status_reason = input;
        self
    }

    /// Appends an item to `repositories`.
    pub fn repositories(mut self, input: RepositorySummary) -> Self {
        self.repositories.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Source repositories cloned into the Dev Environment.
    pub fn set_repositories(mut self, input: Option<Vec<RepositorySummary>>) -> Self {
        self.repositories = input;
        self
    }

    /// User-specified alias.
    pub fn alias(mut self, input: impl Into<String>) -> Self {
        self.alias = Some(input.into());
        self
    }

    /// User-specified alias.
    pub fn set_alias(mut self, input: Option<String>) -> Self {
        self.alias = input;
        self
    }

    /// Appends an item to `ides`.
    pub fn ides(mut self, input: Ide) -> Self {
        self.ides.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// IDEs running in the Dev Environment.
    pub fn set_ides(mut self, input: Option<Vec<Ide>>) -> Self {
        self.ides = input;
        self
    }

    /// Compute instance size.
    pub fn instance_type(mut self, input: InstanceType) -> Self {
        self.instance_type = Some(input);
        self
    }

    /// Compute instance size.
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

    /// Attached root-volume storage.
    pub fn persistent_storage(mut self, input: PersistentStorage) -> Self {
        self.persistent_storage = Some(input);
        self
    }

    /// Attached root-volume storage.
    pub fn set_persistent_storage(mut self, input: Option<PersistentStorage>) -> Self {
        self.persistent_storage = input;
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

    /// Builds the [`GetDevEnvironmentResponse`].
    pub fn build(self) -> GetDevEnvironmentResponse {
        GetDevEnvironmentResponse {
            space_name: self.space_name,
            project_name: self.project_name,
            id: self.id,
            last_updated_time: self.last_updated_time,
            creator_id: self.creator_id,
            status: self.status,
            status_reason: self.status_reason,
            repositories: self.repositories,
            alias: self.alias,
            ides: self.ides,
            instance_type: self.instance_type,
            inactivity_timeout_minutes: self.inactivity_timeout_minutes,
            persistent_storage: self.persistent_storage,
            response_metadata: self.response_metadata,
        }
    }
}

impl ShapeBuilder for GetDevEnvironmentResponseBuilder {
    type Output = GetDevEnvironmentResponse;

    fn build(self) -> GetDevEnvironmentResponse {
        self.build()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use smithy_shape::marshall_request;

    #[test]
    fn every_field_is_a_label() {
        let request = GetDevEnvironmentRequest::builder()
            .space_name("birds")
            .project_name("crows")
            .id("de-12345")
            .build();
        let marshalled = marshall_request(&request).unwrap();
        assert_eq!(marshalled.method(), &Method::GET);
        assert_eq!(
            marshalled.path(),
            "/v1/spaces/birds/projects/crows/devEnvironments/de-12345"
        );
        assert!(marshalled.query().is_empty());
        assert!(marshalled.payload().is_none());
    }

    #[test]
    fn reserved_characters_in_labels_cannot_change_the_path() {
        let request = GetDevEnvironmentRequest::builder()
            .space_name("a/b c")
            .project_name("crows")
            .id("de-12345")
            .build();
        let marshalled = marshall_request(&request).unwrap();
        assert_eq!(
            marshalled.path(),
            "/v1/spaces/a%2Fb%20c/projects/crows/devEnvironments/de-12345"
        );
    }

    #[test]
    fn response_unmarshals_from_a_service_document() {
        let original = GetDevEnvironmentResponse::builder()
            .space_name("birds")
            .project_name("crows")
            .id("de-12345")
            .status(DevEnvironmentStatus::Running)
            .instance_type(InstanceType::DevStandard1Medium)
            .persistent_storage(PersistentStorage::builder().size_in_gib(16).build())
            .build();
        let doc = smithy_shape::marshall_shape(&original).unwrap();
        let parsed: GetDevEnvironmentResponse = smithy_shape::unmarshall_shape(&doc).unwrap();
        assert_eq!(parsed, original);
        assert_eq!(parsed.persistent_storage().unwrap().size_in_gib(), Some(16));
    }
}
