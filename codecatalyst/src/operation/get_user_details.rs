/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Describes a user by ID or user name.

use crate::types::EmailAddress;
use http::Method;
use smithy_shape::{
    configured, member_string, unmarshall_shape, DescribedShape, Document, FieldDescriptor,
    FieldTraits, FieldValue, OperationMeta, OperationRequest, RequestOverrideConfig,
    ResponseMetadata, Shape, ShapeBuilder, ShapeType, UnmarshallError, WireLocation,
};

static META: OperationMeta = OperationMeta {
    name: "GetUserDetails",
    method: Method::GET,
    uri_template: "/userDetails",
};

/// Input for `GetUserDetails`.
#[derive(Clone)]
#[non_exhaustive]
pub struct GetUserDetailsRequest {
    pub(crate) id: Option<String>,
    pub(crate) user_name: Option<String>,
    pub(crate) override_config: Option<RequestOverrideConfig>,
}

impl GetUserDetailsRequest {
    /// The ID of the user to look up.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The name of the user to look up.
    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    /// Per-call configuration overrides.
    pub fn override_config(&self) -> Option<&RequestOverrideConfig> {
        self.override_config.as_ref()
    }

    /// Creates a new builder.
    pub fn builder() -> GetUserDetailsRequestBuilder {
        GetUserDetailsRequestBuilder::default()
    }

    /// Creates a builder populated from this value.
    pub fn to_builder(&self) -> GetUserDetailsRequestBuilder {
        GetUserDetailsRequestBuilder {
            id: self.id.clone(),
            user_name: self.user_name.clone(),
            override_config: self.override_config.clone(),
        }
    }
}

smithy_shape::shape_impls!(GetUserDetailsRequest);

impl DescribedShape for GetUserDetailsRequest {
    type Builder = GetUserDetailsRequestBuilder;

    fn shape_name() -> &'static str {
        "GetUserDetailsRequest"
    }

    fn descriptors() -> &'static [FieldDescriptor<Self, GetUserDetailsRequestBuilder>] {
        &REQUEST_FIELDS
    }
}

impl OperationRequest for GetUserDetailsRequest {
    fn operation() -> &'static OperationMeta {
        &META
    }
}

static REQUEST_FIELDS: [FieldDescriptor<GetUserDetailsRequest, GetUserDetailsRequestBuilder>; 2] = [
    FieldDescriptor {
        name: "id",
        shape_type: ShapeType::String,
        location: WireLocation::Query("id"),
        traits: FieldTraits::NONE,
        get: get_request_id,
        set: set_request_id,
    },
    FieldDescriptor {
        name: "userName",
        shape_type: ShapeType::String,
        location: WireLocation::Query("userName"),
        traits: FieldTraits::NONE,
        get: get_request_user_name,
        set: set_request_user_name,
    },
];

fn get_request_id(shape: &GetUserDetailsRequest) -> Option<FieldValue<'_>> {
    shape.id.as_deref().map(FieldValue::String)
}

fn set_request_id(
    builder: &mut GetUserDetailsRequestBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.id = Some(member_string("id", doc)?);
    Ok(())
}

fn get_request_user_name(shape: &GetUserDetailsRequest) -> Option<FieldValue<'_>> {
    shape.user_name.as_deref().map(FieldValue::String)
}

fn set_request_user_name(
    builder: &mut GetUserDetailsRequestBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.user_name = Some(member_string("userName", doc)?);
    Ok(())
}

/// Builder for [`GetUserDetailsRequest`].
#[derive(Clone, Debug, Default)]
pub struct GetUserDetailsRequestBuilder {
    pub(crate) id: Option<String>,
    pub(crate) user_name: Option<String>,
    pub(crate) override_config: Option<RequestOverrideConfig>,
}

impl GetUserDetailsRequestBuilder {
    /// The ID of the user to look up.
    pub fn id(mut self, input: impl Into<String>) -> Self {
        self.id = Some(input.into());
        self
    }

    /// The ID of the user to look up.
    pub fn set_id(mut self, input: Option<String>) -> Self {
        self.id = input;
        self
    }

    /// The name of the user to look up.
    pub fn user_name(mut self, input: impl Into<String>) -> Self {
        self.user_name = Some(input.into());
        self
    }

    /// The name of the user to look up.
    pub fn set_user_name(mut self, input: Option<String>) -> Self {
        self.user_name = input;
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

    /// Builds the [`GetUserDetailsRequest`].
    pub fn build(self) -> GetUserDetailsRequest {
        GetUserDetailsRequest {
            id: self.id,
            user_name: self.user_name,
            override_config: self.override_config,
        }
    }
}

impl ShapeBuilder for GetUserDetailsRequestBuilder {
    type Output = GetUserDetailsRequest;

    fn build(self) -> GetUserDetailsRequest {
        self.build()
    }
}

/// Output of `GetUserDetails`.
#[derive(Clone)]
#[non_exhaustive]
pub struct GetUserDetailsResponse {
    pub(crate) user_id: Option<String>,
    pub(crate) user_name: Option<String>,
    pub(crate) display_name: Option<String>,
    pub(crate) primary_email: Option<EmailAddress>,
    pub(crate) version: Option<String>,
    pub(crate) response_metadata: Option<ResponseMetadata>,
}

impl GetUserDetailsResponse {
    /// The user's system-generated ID.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// The user's name.
    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    /// The user's display name.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// The user's primary email address.
    pub fn primary_email(&self) -> Option<&EmailAddress> {
        self.primary_email.as_ref()
    }

    /// Version tag of the user profile.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Metadata the runtime attached to this response.
    pub fn response_metadata(&self) -> Option<&ResponseMetadata> {
        self.response_metadata.as_ref()
    }

    /// Creates a new builder.
    pub fn builder() -> GetUserDetailsResponseBuilder {
        GetUserDetailsResponseBuilder::default()
    }

    /// Creates a builder populated from this value.
    pub fn to_builder(&self) -> GetUserDetailsResponseBuilder {
        GetUserDetailsResponseBuilder {
            user_id: self.user_id.clone(),
            user_name: self.user_name.clone(),
            display_name: self.display_name.clone(),
            primary_email: self.primary_email.clone(),
            version: self.version.clone(),
            response_metadata: self.response_metadata.clone(),
        }
    }
}

smithy_shape::shape_impls!(GetUserDetailsResponse);

impl DescribedShape for GetUserDetailsResponse {
    type Builder = GetUserDetailsResponseBuilder;

    fn shape_name() -> &'static str {
        "GetUserDetailsResponse"
    }

    fn descriptors() -> &'static [FieldDescriptor<Self, GetUserDetailsResponseBuilder>] {
        &RESPONSE_FIELDS
    }
}

static RESPONSE_FIELDS: [FieldDescriptor<GetUserDetailsResponse, GetUserDetailsResponseBuilder>; 5] = [
    FieldDescriptor {
        name: "userId",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_response_user_id,
        set: set_response_user_id,
    },
    FieldDescriptor {
        name: "userName",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_response_user_name,
        set: set_response_user_name,
    },
    FieldDescriptor {
        name: "displayName",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_response_display_name,
        set: set_response_display_name,
    },
    FieldDescriptor {
        name: "primaryEmail",
        shape_type: ShapeType::Structure,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_response_primary_email,
        set: set_response_primary_email,
    },
    FieldDescriptor {
        name: "version",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_response_version,
        set: set_response_version,
    },
];

fn get_response_user_id(shape: &GetUserDetailsResponse) -> Option<FieldValue<'_>> {
    shape.user_id.as_deref().map(FieldValue::String)
}

fn set_response_user_id(
    builder: &mut GetUserDetailsResponseBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.user_id = Some(member_string("userId", doc)?);
    Ok(())
}

fn get_response_user_name(shape: &GetUserDetailsResponse) -> Option<FieldValue<'_>> {
    shape.user_name.as_deref().map(FieldValue::String)
}

fn set_response_user_name(
    builder: &mut GetUserDetailsResponseBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.user_name = Some(member_string("userName", doc)?);
    Ok(())
}

fn get_response_display_name(shape: &GetUserDetailsResponse) -> Option<FieldValue<'_>> {
    shape.display_name.as_deref().map(FieldValue::String)
}

fn set_response_display_name(
    builder: &mut GetUserDetailsResponseBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.display_name = Some(member_string("displayName", doc)?);
    Ok(())
}

fn get_response_primary_email(shape: &GetUserDetailsResponse) -> Option<FieldValue<'_>> {
    shape
        .primary_email
        .as_ref()
        .map(|email| FieldValue::Shape(email as &dyn Shape))
}

fn set_response_primary_email(
    builder: &mut GetUserDetailsResponseBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.primary_email = Some(unmarshall_shape(doc)?);
    Ok(())
}

fn get_response_version(shape: &GetUserDetailsResponse) -> Option<FieldValue<'_>> {
    shape.version.as_deref().map(FieldValue::String)
}

fn set_response_version(
    builder: &mut GetUserDetailsResponseBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.version = Some(member_string("version", doc)?);
    Ok(())
}

/// Builder for [`GetUserDetailsResponse`].
#[derive(Clone, Debug, Default)]
pub struct GetUserDetailsResponseBuilder {
    pub(crate) user_id: Option<String>,
    pub(crate) user_name: Option<String>,
    pub(crate) display_name: Option<String>,
    pub(crate) primary_email: Option<EmailAddress>,
    pub(crate) version: Option<String>,
    pub(crate) response_metadata: Option<ResponseMetadata>,
}

impl GetUserDetailsResponseBuilder {
    /// The user's system-generated ID.
    pub fn user_id(mut self, input: impl Into<String>) -> Self {
        self.user_id = Some(input.into());
        self
    }

    /// The user's system-generated ID.
    pub fn set_user_id(mut self, input: Option<String>) -> Self {
        self.user_id = input;
        self
    }

    /// The user's name.
    pub fn user_name(mut self, input: impl Into<String>) -> Self {
        self.user_name = Some(input.into());
        self
    }

    /// The user's name.
    pub fn set_user_name(mut self, input: Option<String>) -> Self {
        self.user_name = input;
        self
    }

    /// The user's display name.
    pub fn display_name(mut self, input: impl Into<String>) -> Self {
        self.display_name = Some(input.into());
        self
    }

    /// The user's display name.
    pub fn set_display_name(mut self, input: Option<String>) -> Self {
        self.display_name = input;
        self
    }

    /// The user's primary email address.
    pub fn primary_email(mut self, input: EmailAddress) -> Self {
        self.primary_email = Some(input);
        self
    }

    /// The user's primary email address.
    pub fn set_primary_email(mut self, input: Option<EmailAddress>) -> Self {
        self.primary_email = input;
        self
    }

    /// Sets the primary email from the given configurator.
    pub fn primary_email_with(
        self,
        config: impl FnOnce(crate::types::EmailAddressBuilder) -> crate::types::EmailAddressBuilder,
    ) -> Self {
        self.primary_email(configured(config))
    }

    /// Version tag of the user profile.
    pub fn version(mut self, input: impl Into<String>) -> Self {
        self.version = Some(input.into());
        self
    }

    /// Version tag of the user profile.
    pub fn set_version(mut self, input: Option<String>) -> Self {
        self.version = input;
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

    /// Builds the [`GetUserDetailsResponse`].
    pub fn build(self) -> GetUserDetailsResponse {
        GetUserDetailsResponse {
            user_id: self.user_id,
            user_name: self.user_name,
            display_name: self.display_name,
            primary_email: self.primary_email,
            version: self.version,
            response_metadata: self.response_metadata,
        }
    }
}

impl ShapeBuilder for GetUserDetailsResponseBuilder {
    type Output = GetUserDetailsResponse;

    fn build(self) -> GetUserDetailsResponse {
        self.build()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use smithy_shape::marshall_request;

    #[test]
    fn set_fields_become_query_parameters() {
        let request = GetUserDetailsRequest::builder()
            .user_name("mountain-goat")
            .build();
        let marshalled = marshall_request(&request).unwrap();
        assert_eq!(marshalled.method(), &Method::GET);
        assert_eq!(marshalled.path(), "/userDetails");
        assert_eq!(
            marshalled.query(),
            &[("userName", "mountain-goat".to_string())]
        );
        assert!(marshalled.payload().is_none());
    }

    #[test]
    fn reserved_characters_in_query_values_are_percent_encoded() {
        let request = GetUserDetailsRequest::builder()
            .user_name("goat&verified=1")
            .build();
        let marshalled = marshall_request(&request).unwrap();
        assert_eq!(
            marshalled.query(),
            &[("userName", "goat%26verified%3D1".to_string())]
        );
    }

    #[test]
    fn primary_email_is_redacted_through_the_nested_shape() {
        let response = GetUserDetailsResponse::builder()
            .user_id("u-1")
            .primary_email_with(|e| e.email("goat@example.com").verified(true))
            .build();
        let rendered = format!("{:?}", response);
        assert!(!rendered.contains("goat@example.com"));
        assert_eq!(
            response.primary_email().unwrap().email(),
            Some("goat@example.com")
        );
    }

    #[test]
    fn response_round_trips_through_a_document() {
        let original = GetUserDetailsResponse::builder()
            .user_id("u-1")
            .user_name("mountain-goat")
            .display_name("Mountain Goat")
            .primary_email_with(|e| e.email("goat@example.com").verified(true))
            .version("2")
            .build();
        let doc = smithy_shape::marshall_shape(&original).unwrap();
        let parsed: GetUserDetailsResponse = smithy_shape::unmarshall_shape(&doc).unwrap();
        assert_eq!(parsed, original);
    }
}
