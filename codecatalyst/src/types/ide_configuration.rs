/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use smithy_shape::{
    member_string, DescribedShape, Document, FieldDescriptor, FieldTraits, FieldValue,
    ShapeBuilder, ShapeType, UnmarshallError, WireLocation,
};

/// The IDE requested when starting a Dev Environment.
#[derive(Clone)]
#[non_exhaustive]
pub struct IdeConfiguration {
    pub(crate) runtime: Option<String>,
    pub(crate) name: Option<String>,
}

impl IdeConfiguration {
    /// A link to the IDE runtime image.
    pub fn runtime(&self) -> Option<&str> {
        self.runtime.as_deref()
    }

    /// The IDE name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Creates a new builder.
    pub fn builder() -> IdeConfigurationBuilder {
        IdeConfigurationBuilder::default()
    }

    /// Creates a builder populated from this value.
    pub fn to_builder(&self) -> IdeConfigurationBuilder {
        IdeConfigurationBuilder {
            runtime: self.runtime.clone(),
            name: self.name.clone(),
        }
    }
}

smithy_shape::shape_impls!(IdeConfiguration);

impl DescribedShape for IdeConfiguration {
    type Builder = IdeConfigurationBuilder;

    fn shape_name() -> &'static str {
        "IdeConfiguration"
    }

    fn descriptors() -> &'static [FieldDescriptor<Self, IdeConfigurationBuilder>] {
        &FIELDS
    }
}

static FIELDS: [FieldDescriptor<IdeConfiguration, IdeConfigurationBuilder>; 2] = [
    FieldDescriptor {
        name: "runtime",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_runtime,
        set: set_runtime,
    },
    FieldDescriptor {
        name: "name",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_name,
        set: set_name,
    },
];

fn get_runtime(shape: &IdeConfiguration) -> Option<FieldValue<'_>> {
    shape.runtime.as_deref().map(FieldValue::String)
}

fn set_runtime(
    builder: &mut IdeConfigurationBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.runtime = Some(member_string("runtime", doc)?);
    Ok(())
}

fn get_name(shape: &IdeConfiguration) -> Option<FieldValue<'_>> {
    shape.name.as_deref().map(FieldValue::String)
}

fn set_name(builder: &mut IdeConfigurationBuilder, doc: &Document) -> Result<(), UnmarshallError> {
    builder.name = Some(member_string("name", doc)?);
    Ok(())
}

/// Builder for [`IdeConfiguration`].
#[derive(Clone, Debug, Default)]
pub struct IdeConfigurationBuilder {
    pub(crate) runtime: Option<String>,
    pub(crate) name: Option<String>,
}

impl IdeConfigurationBuilder {
    /// A link to the IDE runtime image.
    pub fn runtime(mut self, input: impl Into<String>) -> Self {
        self.runtime = Some(input.into());
        self
    }

    /// A link to the IDE runtime image.
    pub fn set_runtime(mut self, input: Option<String>) -> Self {
        self.runtime = input;
        self
    }

    /// The IDE name.
    pub fn name(mut self, input: impl Into<String>) -> Self {
        self.name = Some(input.into());
        self
    }

    /// The IDE name.
    pub fn set_name(mut self, input: Option<String>) -> Self {
        self.name = input;
        self
    }

    /// Builds the [`IdeConfiguration`].
    pub fn build(self) -> IdeConfiguration {
        IdeConfiguration {
            runtime: self.runtime,
            name: self.name,
        }
    }
}

impl ShapeBuilder for IdeConfigurationBuilder {
    type Output = IdeConfiguration;

    fn build(self) -> IdeConfiguration {
        self.build()
    }
}
