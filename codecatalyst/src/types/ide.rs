/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use smithy_shape::{
    member_string, DescribedShape, Document, FieldDescriptor, FieldTraits, FieldValue,
    ShapeBuilder, ShapeType, UnmarshallError, WireLocation,
};

/// An integrated development environment running in a Dev Environment.
#[derive(Clone)]
#[non_exhaustive]
pub struct Ide {
    pub(crate) runtime: Option<String>,
    pub(crate) name: Option<String>,
}

impl Ide {
    /// A link to the IDE runtime image.
    pub fn runtime(&self) -> Option<&str> {
        self.runtime.as_deref()
    }

    /// The IDE name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Creates a new builder.
    pub fn builder() -> IdeBuilder {
        IdeBuilder::default()
    }

    /// Creates a builder populated from this value.
    pub fn to_builder(&self) -> IdeBuilder {
        IdeBuilder {
            runtime: self.runtime.clone(),
            name: self.name.clone(),
        }
    }
}

smithy_shape::shape_impls!(Ide);

impl DescribedShape for Ide {
    type Builder = IdeBuilder;

    fn shape_name() -> &'static str {
        "Ide"
    }

    fn descriptors() -> &'static [FieldDescriptor<Self, IdeBuilder>] {
        &FIELDS
    }
}

static FIELDS: [FieldDescriptor<Ide, IdeBuilder>; 2] = [
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

fn get_runtime(shape: &Ide) -> Option<FieldValue<'_>> {
    shape.runtime.as_deref().map(FieldValue::String)
}

fn set_runtime(builder: &mut IdeBuilder, doc: &Document) -> Result<(), UnmarshallError> {
    builder.runtime = Some(member_string("runtime", doc)?);
    Ok(())
}

fn get_name(shape: &Ide) -> Option<FieldValue<'_>> {
    shape.name.as_deref().map(FieldValue::String)
}

fn set_name(builder: &mut IdeBuilder, doc: &Document) -> Result<(), UnmarshallError> {
    builder.name = Some(member_string("name", doc)?);
    Ok(())
}

/// Builder for [`Ide`].
#[derive(Clone, Debug, Default)]
pub struct IdeBuilder {
    pub(crate) runtime: Option<String>,
    pub(crate) name: Option<String>,
}

impl IdeBuilder {
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

    /// Builds the [`Ide`].
    pub fn build(self) -> Ide {
        Ide {
            runtime: self.runtime,
            name: self.name,
        }
    }
}

impl ShapeBuilder for IdeBuilder {
    type Output = Ide;

    fn build(self) -> Ide {
        self.build()
    }
}
