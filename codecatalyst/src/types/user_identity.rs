/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::UserType;
use smithy_shape::{
    member_string, DescribedShape, Document, FieldDescriptor, FieldTraits, FieldValue,
    ShapeBuilder, ShapeType, UnmarshallError, WireLocation, REDACTED,
};
use std::fmt;

/// The principal that performed an action.
#[derive(Clone)]
#[non_exhaustive]
pub struct UserIdentity {
    pub(crate) user_type: Option<UserType>,
    pub(crate) principal_id: Option<String>,
    pub(crate) user_name: Option<String>,
    pub(crate) email: Option<String>,
}

impl UserIdentity {
    /// The kind of principal.
    pub fn user_type(&self) -> Option<&UserType> {
        self.user_type.as_ref()
    }

    /// The principal's unique identifier.
    pub fn principal_id(&self) -> Option<&str> {
        self.principal_id.as_deref()
    }

    /// The principal's display name.
    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    /// The principal's email address. Redacted in `Debug` output.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Creates a new builder.
    pub fn builder() -> UserIdentityBuilder {
        UserIdentityBuilder::default()
    }

    /// Creates a builder populated from this value.
    pub fn to_builder(&self) -> UserIdentityBuilder {
        UserIdentityBuilder {
            user_type: self.user_type.clone(),
            principal_id: self.principal_id.clone(),
            user_name: self.user_name.clone(),
            email: self.email.clone(),
        }
    }
}

smithy_shape::shape_impls!(UserIdentity);

impl DescribedShape for UserIdentity {
    type Builder = UserIdentityBuilder;

    fn shape_name() -> &'static str {
        "UserIdentity"
    }

    fn descriptors() -> &'static [FieldDescriptor<Self, UserIdentityBuilder>] {
        &FIELDS
    }
}

static FIELDS: [FieldDescriptor<UserIdentity, UserIdentityBuilder>; 4] = [
    FieldDescriptor {
        name: "userType",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_user_type,
        set: set_user_type,
    },
    FieldDescriptor {
        name: "principalId",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_principal_id,
        set: set_principal_id,
    },
    FieldDescriptor {
        name: "userName",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_user_name,
        set: set_user_name,
    },
    FieldDescriptor {
        name: "email",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE.sensitive(),
        get: get_email,
        set: set_email,
    },
];

fn get_user_type(shape: &UserIdentity) -> Option<FieldValue<'_>> {
    shape
        .user_type
        .as_ref()
        .map(|user_type| FieldValue::String(user_type.as_str()))
}

fn set_user_type(builder: &mut UserIdentityBuilder, doc: &Document) -> Result<(), UnmarshallError> {
    builder.user_type = Some(UserType::from(member_string("userType", doc)?.as_str()));
    Ok(())
}

fn get_principal_id(shape: &UserIdentity) -> Option<FieldValue<'_>> {
    shape.principal_id.as_deref().map(FieldValue::String)
}

fn set_principal_id(
    builder: &mut UserIdentityBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.principal_id = Some(member_string("principalId", doc)?);
    Ok(())
}

fn get_user_name(shape: &UserIdentity) -> Option<FieldValue<'_>> {
    shape.user_name.as_deref().map(FieldValue::String)
}

fn set_user_name(builder: &mut UserIdentityBuilder, doc: &Document) -> Result<(), UnmarshallError> {
    builder.user_name = Some(member_string("userName", doc)?);
    Ok(())
}

fn get_email(shape: &UserIdentity) -> Option<FieldValue<'_>> {
    shape.email.as_deref().map(FieldValue::String)
}

fn set_email(builder: &mut UserIdentityBuilder, doc: &Document) -> Result<(), UnmarshallError> {
    builder.email = Some(member_string("email", doc)?);
    Ok(())
}

/// Builder for [`UserIdentity`].
#[derive(Clone, Default)]
pub struct UserIdentityBuilder {
    pub(crate) user_type: Option<UserType>,
    pub(crate) principal_id: Option<String>,
    pub(crate) user_name: Option<String>,
    pub(crate) email: Option<String>,
}

impl UserIdentityBuilder {
    /// The kind of principal.
    pub fn user_type(mut self, input: UserType) -> Self {
        self.user_type = Some(input);
        self
    }

    /// The kind of principal.
    pub fn set_user_type(mut self, input: Option<UserType>) -> Self {
        self.user_type = input;
        self
    }

    /// The principal's unique identifier.
    pub fn principal_id(mut self, input: impl Into<String>) -> Self {
        self.principal_id = Some(input.into());
        self
    }

    /// The principal's unique identifier.
    pub fn set_principal_id(mut self, input: Option<String>) -> Self {
        self.principal_id = input;
        self
    }

    /// The principal's display name.
    pub fn user_name(mut self, input: impl Into<String>) -> Self {
        self.user_name = Some(input.into());
        self
    }

    /// The principal's display name.
    pub fn set_user_name(mut self, input: Option<String>) -> Self {
        self.user_name = input;
        self
    }

    /// The principal's email address.
    pub fn email(mut self, input: impl Into<String>) -> Self {
        self.email = Some(input.into());
        self
    }

    /// The principal's email address.
    pub fn set_email(mut self, input: Option<String>) -> Self {
        self.email = input;
        self
    }

    /// Builds the [`UserIdentity`].
    pub fn build(self) -> UserIdentity {
        UserIdentity {
            user_type: self.user_type,
            principal_id: self.principal_id,
            user_name: self.user_name,
            email: self.email,
        }
    }
}

impl ShapeBuilder for UserIdentityBuilder {
    type Output = UserIdentity;

    fn build(self) -> UserIdentity {
        self.build()
    }
}

// The staged email is just as sensitive as the built one.
impl fmt::Debug for UserIdentityBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserIdentityBuilder")
            .field("user_type", &self.user_type)
            .field("principal_id", &self.principal_id)
            .field("user_name", &self.user_name)
            .field("email", &REDACTED)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn email_is_redacted_in_debug() {
        let identity = UserIdentity::builder()
            .user_type(UserType::User)
            .user_name("mountain-goat")
            .email("goat@example.com")
            .build();
        let rendered = format!("{:?}", identity);
        assert!(rendered.contains(REDACTED));
        assert!(!rendered.contains("goat@example.com"));
        assert_eq!(identity.email(), Some("goat@example.com"));

        let staged = format!("{:?}", identity.to_builder());
        assert!(!staged.contains("goat@example.com"));
    }
}
