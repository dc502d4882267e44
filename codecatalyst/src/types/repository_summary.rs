/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use smithy_shape::{
    member_string, DescribedShape, Document, FieldDescriptor, FieldTraits, FieldValue,
    ShapeBuilder, ShapeType, UnmarshallError, WireLocation,
};

/// A source repository cloned into a Dev Environment.
#[derive(Clone)]
#[non_exhaustive]
pub struct RepositorySummary {
    pub(crate) repository_name: Option<String>,
    pub(crate) branch_name: Option<String>,
}

impl RepositorySummary {
    /// The name of the source repository.
    pub fn repository_name(&self) -> Option<&str> {
        self.repository_name.as_deref()
    }

    /// The checked-out branch.
    pub fn branch_name(&self) -> Option<&str> {
        self.branch_name.as_deref()
    }

    /// Creates a new builder.
    pub fn builder() -> RepositorySummaryBuilder {
        RepositorySummaryBuilder::default()
    }

    /// Creates a builder populated from this value.
    pub fn to_builder(&self) -> RepositorySummaryBuilder {
        RepositorySummaryBuilder {
            repository_name: self.repository_name.clone(),
            branch_name: self.branch_name.clone(),
        }
    }
}

smithy_shape::shape_impls!(RepositorySummary);

impl DescribedShape for RepositorySummary {
    type Builder = RepositorySummaryBuilder;

    fn shape_name() -> &'static str {
        "RepositorySummary"
    }

    fn descriptors() -> &'static [FieldDescriptor<Self, RepositorySummaryBuilder>] {
        &FIELDS
    }
}

static FIELDS: [FieldDescriptor<RepositorySummary, RepositorySummaryBuilder>; 2] = [
    FieldDescriptor {
        name: "repositoryName",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_repository_name,
        set: set_repository_name,
    },
    FieldDescriptor {
        name: "branchName",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_branch_name,
        set: set_branch_name,
    },
];

fn get_repository_name(shape: &RepositorySummary) -> Option<FieldValue<'_>> {
    shape.repository_name.as_deref().map(FieldValue::String)
}

fn set_repository_name(
    builder: &mut RepositorySummaryBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.repository_name = Some(member_string("repositoryName", doc)?);
    Ok(())
}

fn get_branch_name(shape: &RepositorySummary) -> Option<FieldValue<'_>> {
    shape.branch_name.as_deref().map(FieldValue::String)
}

fn set_branch_name(
    builder: &mut RepositorySummaryBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.branch_name = Some(member_string("branchName", doc)?);
    Ok(())
}

/// Builder for [`RepositorySummary`].
#[derive(Clone, Debug, Default)]
pub struct RepositorySummaryBuilder {
    pub(crate) repository_name: Option<String>,
    pub(crate) branch_name: Option<String>,
}

impl RepositorySummaryBuilder {
    /// The name of the source repository.
    pub fn repository_name(mut self, input: impl Into<String>) -> Self {
        self.repository_name = Some(input.into());
        self
    }

    /// The name of the source repository.
    pub fn set_repository_name(mut self, input: Option<String>) -> Self {
        self.repository_name = input;
        self
    }

    /// The checked-out branch.
    pub fn branch_name(mut self, input: impl Into<String>) -> Self {
        self.branch_name = Some(input.into());
        self
    }

    /// The checked-out branch.
    pub fn set_branch_name(mut self, input: Option<String>) -> Self {
        self.branch_name = input;
        self
    }

    /// Builds the [`RepositorySummary`].
    pub fn build(self) -> RepositorySummary {
        RepositorySummary {
            repository_name: self.repository_name,
            branch_name: self.branch_name,
        }
    }
}

impl ShapeBuilder for RepositorySummaryBuilder {
    type Output = RepositorySummary;

    fn build(self) -> RepositorySummary {
        self.build()
    }
}
