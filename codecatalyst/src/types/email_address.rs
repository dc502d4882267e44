/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use smithy_shape::{
    member_bool, member_string, DescribedShape, Document, FieldDescriptor, FieldTraits,
    FieldValue, ShapeBuilder, ShapeType, UnmarshallError, WireLocation, REDACTED,
};
use std::fmt;

/// An email address attached to a user profile.
#[derive(Clone)]
#[non_exhaustive]
pub struct EmailAddress {
    pub(crate) email: Option<String>,
    pub(crate) verified: Option<bool>,
}

impl EmailAddress {
    /// The address itself. Redacted in `Debug` output.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Whether the address has been verified.
    pub fn verified(&self) -> Option<bool> {
        self.verified
    }

    /// Creates a new builder.
    pub fn builder() -> EmailAddressBuilder {
        EmailAddressBuilder::default()
    }

    /// Creates a builder populated from this value.
    pub fn to_builder(&self) -> EmailAddressBuilder {
        EmailAddressBuilder {
            email: self.email.clone(),
            verified: self.verified,
        }
    }
}

smithy_shape::shape_impls!(EmailAddress);

impl DescribedShape for EmailAddress {
    type Builder = EmailAddressBuilder;

    fn shape_name() -> &'static str {
        "EmailAddress"
    }

    fn descriptors() -> &'static [FieldDescriptor<Self, EmailAddressBuilder>] {
        &FIELDS
    }
}

static FIELDS: [FieldDescriptor<EmailAddress, EmailAddressBuilder>; 2] = [
    FieldDescriptor {
        name: "email",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE.sensitive(),
        get: get_email,
        set: set_email,
    },
    FieldDescriptor {
        name: "verified",
        shape_type: ShapeType::Boolean,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_verified,
        set: set_verified,
    },
];

fn get_email(shape: &EmailAddress) -> Option<FieldValue<'_>> {
    shape.email.as_deref().map(FieldValue::String)
}

fn set_email(builder: &mut EmailAddressBuilder, doc: &Document) -> Result<(), UnmarshallError> {
    builder.email = Some(member_string("email", doc)?);
    Ok(())
}

fn get_verified(shape: &EmailAddress) -> Option<FieldValue<'_>> {
    shape.verified.map(FieldValue::Boolean)
}

fn set_verified(builder: &mut EmailAddressBuilder, doc: &Document) -> Result<(), UnmarshallError> {
    builder.verified = Some(member_bool("verified", doc)?);
    Ok(())
}

/// Builder for [`EmailAddress`].
#[derive(Clone, Default)]
pub struct EmailAddressBuilder {
    pub(crate) email: Option<String>,
    pub(crate) verified: Option<bool>,
}

impl EmailAddressBuilder {
    /// The address itself.
    pub fn email(mut self, input: impl Into<String>) -> Self {
        self.email = Some(input.into());
        self
    }

    /// The address itself.
    pub fn set_email(mut self, input: Option<String>) -> Self {
        self.email = input;
        self
    }

    /// Whether the address has been verified.
    pub fn verified(mut self, input: bool) -> Self {
        self.verified = Some(input);
        self
    }

    /// Whether the address has been verified.
    pub fn set_verified(mut self, input: Option<bool>) -> Self {
        self.verified = input;
        self
    }

    /// Builds the [`EmailAddress`].
    pub fn build(self) -> EmailAddress {
        EmailAddress {
            email: self.email,
            verified: self.verified,
        }
    }
}

impl ShapeBuilder for EmailAddressBuilder {
    type Output = EmailAddress;

    fn build(self) -> EmailAddress {
        self.build()
    }
}

// The staged email is just as sensitive as the built one.
impl fmt::Debug for EmailAddressBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailAddressBuilder")
            .field("email", &REDACTED)
            .field("verified", &self.verified)
            .finish()
    }
}
