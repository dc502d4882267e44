/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use smithy_shape::{
    member_i32, DescribedShape, Document, FieldDescriptor, FieldTraits, FieldValue, ShapeBuilder,
    ShapeType, UnmarshallError, WireLocation,
};

/// The root-volume storage attached to a Dev Environment.
#[derive(Clone)]
#[non_exhaustive]
pub struct PersistentStorage {
    pub(crate) size_in_gib: Option<i32>,
}

impl PersistentStorage {
    /// Storage size in gibibytes.
    pub fn size_in_gib(&self) -> Option<i32> {
        self.size_in_gib
    }

    /// Creates a new builder.
    pub fn builder() -> PersistentStorageBuilder {
        PersistentStorageBuilder::default()
    }

    /// Creates a builder populated from this value.
    pub fn to_builder(&self) -> PersistentStorageBuilder {
        PersistentStorageBuilder {
            size_in_gib: self.size_in_gib,
        }
    }
}

smithy_shape::shape_impls!(PersistentStorage);

impl DescribedShape for PersistentStorage {
    type Builder = PersistentStorageBuilder;

    fn shape_name() -> &'static str {
        "PersistentStorage"
    }

    fn descriptors() -> &'static [FieldDescriptor<Self, PersistentStorageBuilder>] {
        &FIELDS
    }
}

static FIELDS: [FieldDescriptor<PersistentStorage, PersistentStorageBuilder>; 1] =
    [FieldDescriptor {
        name: "sizeInGiB",
        shape_type: ShapeType::Integer,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_size_in_gib,
        set: set_size_in_gib,
    }];

fn get_size_in_gib(shape: &PersistentStorage) -> Option<FieldValue<'_>> {
    shape.size_in_gib.map(FieldValue::Integer)
}

fn set_size_in_gib(
    builder: &mut PersistentStorageBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.size_in_gib = Some(member_i32("sizeInGiB", doc)?);
    Ok(())
}

/// Builder for [`PersistentStorage`].
#[derive(Clone, Debug, Default)]
pub struct PersistentStorageBuilder {
    pub(crate) size_in_gib: Option<i32>,
}

impl PersistentStorageBuilder {
    /// Storage size in gibibytes.
    pub fn size_in_gib(mut self, input: i32) -> Self {
        self.size_in_gib = Some(input);
        self
    }

    /// Storage size in gibibytes.
    pub fn set_size_in_gib(mut self, input: Option<i32>) -> Self {
        self.size_in_gib = input;
        self
    }

    /// Builds the [`PersistentStorage`].
    pub fn build(self) -> PersistentStorage {
        PersistentStorage {
            size_in_gib: self.size_in_gib,
        }
    }
}

impl ShapeBuilder for PersistentStorageBuilder {
    type Output = PersistentStorage;

    fn build(self) -> PersistentStorage {
        self.build()
    }
}
