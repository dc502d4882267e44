/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::ComparisonOperator;
use smithy_shape::{
    member_string, member_string_list, DescribedShape, Document, FieldDescriptor, FieldTraits,
    FieldValue, ShapeBuilder, ShapeType, UnmarshallError, WireLocation,
};

/// A key/values comparison used to narrow the results of a list operation.
#[derive(Clone)]
#[non_exhaustive]
pub struct Filter {
    pub(crate) key: Option<String>,
    pub(crate) values: Option<Vec<String>>,
    pub(crate) comparison_operator: Option<ComparisonOperator>,
}

impl Filter {
    /// The attribute the filter applies to.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The values to match. Returns an empty slice when the field was never set.
    pub fn values(&self) -> &[String] {
        self.values.as_deref().unwrap_or_default()
    }

    /// Whether `values` was explicitly provided, even as an empty list.
    pub fn has_values(&self) -> bool {
        self.values.is_some()
    }

    /// The comparison applied between the key and the values.
    pub fn comparison_operator(&self) -> Option<&ComparisonOperator> {
        self.comparison_operator.as_ref()
    }

    /// Creates a new builder.
    pub fn builder() -> FilterBuilder {
        FilterBuilder::default()
    }

    /// Creates a builder populated from this value.
    pub fn to_builder(&self) -> FilterBuilder {
        FilterBuilder {
            key: self.key.clone(),
            values: self.values.clone(),
            comparison_operator: self.comparison_operator.clone(),
        }
    }
}

smithy_shape::shape_impls!(Filter);

impl DescribedShape for Filter {
    type Builder = FilterBuilder;

    fn shape_name() -> &'static str {
        "Filter"
    }

    fn descriptors() -> &'static [FieldDescriptor<Self, FilterBuilder>] {
        &FIELDS
    }
}

static FIELDS: [FieldDescriptor<Filter, FilterBuilder>; 3] = [
    FieldDescriptor {
        name: "key",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_key,
        set: set_key,
    },
    FieldDescriptor {
        name: "values",
        shape_type: ShapeType::List,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_values,
        set: set_values,
    },
    FieldDescriptor {
        name: "comparisonOperator",
        shape_type: ShapeType::String,
        location: WireLocation::Payload,
        traits: FieldTraits::NONE,
        get: get_comparison_operator,
        set: set_comparison_operator,
    },
];

fn get_key(shape: &Filter) -> Option<FieldValue<'_>> {
    shape.key.as_deref().map(FieldValue::String)
}

fn set_key(builder: &mut FilterBuilder, doc: &Document) -> Result<(), UnmarshallError> {
    builder.key = Some(member_string("key", doc)?);
    Ok(())
}

fn get_values(shape: &Filter) -> Option<FieldValue<'_>> {
    shape.values.as_deref().map(FieldValue::StringList)
}

fn set_values(builder: &mut FilterBuilder, doc: &Document) -> Result<(), UnmarshallError> {
    builder.values = Some(member_string_list("values", doc)?);
    Ok(())
}

fn get_comparison_operator(shape: &Filter) -> Option<FieldValue<'_>> {
    shape
        .comparison_operator
        .as_ref()
        .map(|operator| FieldValue::String(operator.as_str()))
}

fn set_comparison_operator(
    builder: &mut FilterBuilder,
    doc: &Document,
) -> Result<(), UnmarshallError> {
    builder.comparison_operator = Some(ComparisonOperator::from(
        member_string("comparisonOperator", doc)?.as_str(),
    ));
    Ok(())
}

/// Builder for [`Filter`].
#[derive(Clone, Debug, Default)]
pub struct FilterBuilder {
    pub(crate) key: Option<String>,
    pub(crate) values: Option<Vec<String>>,
    pub(crate) comparison_operator: Option<ComparisonOperator>,
}

impl FilterBuilder {
    /// The attribute the filter applies to.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// The attribute the filter applies to.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Appends an item to `values`.
    pub fn values(mut self, input: impl Into<String>) -> Self {
        self.values.get_or_insert_with(Vec::new).push(input.into());
        self
    }

    /// The values to match.
    pub fn set_values(mut self, input: Option<Vec<String>>) -> Self {
        self.values = input;
        self
    }

    /// The comparison applied between the key and the values.
    pub fn comparison_operator(mut self, input: ComparisonOperator) -> Self {
        self.comparison_operator = Some(input);
        self
    }

    /// The comparison applied between the key and the values.
    pub fn set_comparison_operator(mut self, input: Option<ComparisonOperator>) -> Self {
        self.comparison_operator = input;
        self
    }

    /// Builds the [`Filter`].
    pub fn build(self) -> Filter {
        Filter {
            key: self.key,
            values: self.values,
            comparison_operator: self.comparison_operator,
        }
    }
}

impl ShapeBuilder for FilterBuilder {
    type Output = Filter;

    fn build(self) -> Filter {
        self.build()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builder_round_trip() {
        let filter = Filter::builder()
            .key("status")
            .values("RUNNING")
            .comparison_operator(ComparisonOperator::Equals)
            .build();
        assert_eq!(filter.to_builder().build(), filter);
    }

    #[test]
    fn unset_values_reads_as_empty() {
        let filter = Filter::builder().key("status").build();
        assert!(!filter.has_values());
        assert!(filter.values().is_empty());

        let explicit = Filter::builder().key("status").set_values(Some(vec![])).build();
        assert!(explicit.has_values());
        assert!(explicit.values().is_empty());
    }
}
