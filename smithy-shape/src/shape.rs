/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Field-descriptor metadata for model shapes.
//!
//! Every generated shape declares one static [`FieldDescriptor`] per field, in
//! declaration order. That table is the single source of truth for equality,
//! hashing, `Debug` rendering, dynamic field lookup, and marshalling: no field
//! participates in any of those facilities without appearing in it.

use crate::date_time::Format;
use crate::error::MarshallError;
use crate::{DateTime, Document, ShapeBuilder};
use std::fmt;

/// Placeholder rendered in place of any field marked sensitive.
pub const REDACTED: &str = "*** Sensitive Data Redacted ***";

/// Semantic type of a shape field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ShapeType {
    /// Boolean type
    Boolean,
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    Long,
    /// UTF-8 string (including string-backed enums)
    String,
    /// Timestamp
    Timestamp,
    /// Nested structure
    Structure,
    /// List type
    List,
}

impl ShapeType {
    /// Returns true if this is a simple (scalar) type.
    #[inline]
    pub fn is_simple(&self) -> bool {
        matches!(
            self,
            Self::Boolean | Self::Integer | Self::Long | Self::String | Self::Timestamp
        )
    }

    /// Returns true if this is an aggregate type.
    #[inline]
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Self::Structure | Self::List)
    }
}

/// Where a field's value is placed in an HTTP-style call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum WireLocation {
    /// A `{name}` segment of the request path. Label fields are required.
    Label,
    /// A query parameter with the given wire name.
    Query(&'static str),
    /// A member of the request or response body.
    Payload,
}

/// Optional traits attached to a field descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTraits {
    /// Redact this field in `Debug` output.
    pub sensitive: bool,
    /// Wire encoding for timestamp fields. `None` uses the protocol default.
    pub timestamp_format: Option<Format>,
    /// Wire name for list members in member-named protocols. The document
    /// marshaller ignores this; it exists for transports that need it.
    pub list_member_name: Option<&'static str>,
}

impl FieldTraits {
    /// No traits.
    pub const NONE: FieldTraits = FieldTraits {
        sensitive: false,
        timestamp_format: None,
        list_member_name: None,
    };

    /// Marks the field sensitive.
    pub const fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// Declares the wire encoding for a timestamp field.
    pub const fn timestamp_format(mut self, format: Format) -> Self {
        self.timestamp_format = Some(format);
        self
    }

    /// Declares the member wire name for a list field.
    pub const fn list_member_name(mut self, name: &'static str) -> Self {
        self.list_member_name = Some(name);
        self
    }
}

/// Metadata describing one field of a shape.
///
/// `S` is the shape type and `B` its builder. The accessor and mutator are
/// plain function pointers so descriptor tables can live in statics.
#[derive(Debug)]
pub struct FieldDescriptor<S, B> {
    /// Wire name of the field.
    pub name: &'static str,
    /// Semantic type tag.
    pub shape_type: ShapeType,
    /// Wire location.
    pub location: WireLocation,
    /// Optional traits.
    pub traits: FieldTraits,
    /// Reads the field's current value, `None` when unset.
    pub get: for<'a> fn(&'a S) -> Option<FieldValue<'a>>,
    /// Stores a wire document member into the builder.
    pub set: fn(&mut B, &Document) -> Result<(), crate::UnmarshallError>,
}

/// A borrowed, type-tagged view of one field's value.
pub enum FieldValue<'a> {
    /// Boolean value
    Boolean(bool),
    /// 32-bit integer value
    Integer(i32),
    /// 64-bit integer value
    Long(i64),
    /// String value (enums surface their raw wire string here)
    String(&'a str),
    /// Timestamp value
    Timestamp(&'a DateTime),
    /// List of strings
    StringList(&'a [String]),
    /// List of nested shapes
    ShapeList(Vec<&'a dyn Shape>),
    /// Nested shape
    Shape(&'a dyn Shape),
}

impl<'a> FieldValue<'a> {
    /// Returns the string value, if this is a string.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            FieldValue::String(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the string value.
    ///
    /// # Panics
    /// Panics if this is not a string. Requesting a known field under the
    /// wrong type is a programmer error, not a recoverable condition.
    pub fn expect_str(&self) -> &'a str {
        match self {
            FieldValue::String(v) => v,
            other => panic!("expected a string field value, got {:?}", other),
        }
    }

    /// Returns the integer value, if this is a 32-bit integer.
    pub fn as_integer(&self) -> Option<i32> {
        match self {
            FieldValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the integer value, panicking on a type mismatch.
    pub fn expect_integer(&self) -> i32 {
        match self {
            FieldValue::Integer(v) => *v,
            other => panic!("expected an integer field value, got {:?}", other),
        }
    }

    /// Returns the long value, if this is a 64-bit integer.
    pub fn as_long(&self) -> Option<i64> {
        match self {
            FieldValue::Long(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a boolean.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the timestamp value, if this is a timestamp.
    pub fn as_timestamp(&self) -> Option<&'a DateTime> {
        match self {
            FieldValue::Timestamp(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the string list, if this is one.
    pub fn as_string_list(&self) -> Option<&'a [String]> {
        match self {
            FieldValue::StringList(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the string list, panicking on a type mismatch.
    pub fn expect_string_list(&self) -> &'a [String] {
        match self {
            FieldValue::StringList(v) => v,
            other => panic!("expected a string list field value, got {:?}", other),
        }
    }

    /// Returns the nested shape, if this is one.
    pub fn as_shape(&self) -> Option<&'a dyn Shape> {
        match self {
            FieldValue::Shape(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the nested shape list, if this is one.
    pub fn as_shape_list(&self) -> Option<&[&'a dyn Shape]> {
        match self {
            FieldValue::ShapeList(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Compares two possibly-absent values, treating an absent list and a
    /// present-but-empty list as equal. Presence itself is observable only
    /// through a shape's `has_*` predicates.
    pub fn eq_effective(a: Option<&FieldValue<'_>>, b: Option<&FieldValue<'_>>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => a == b,
            (None, Some(present)) | (Some(present), None) => present.is_empty_list(),
        }
    }

    fn is_empty_list(&self) -> bool {
        match self {
            FieldValue::StringList(items) => items.is_empty(),
            FieldValue::ShapeList(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Deterministic 32-bit hash of this value, consistent with `eq_effective`
    /// (an empty list hashes to 0, the same as an absent value).
    pub fn value_hash(&self) -> i32 {
        fn fold(h: i32, v: i32) -> i32 {
            h.wrapping_mul(31).wrapping_add(v)
        }
        fn str_hash(s: &str) -> i32 {
            s.bytes().fold(0i32, |h, b| fold(h, b as i32))
        }
        fn long_hash(v: i64) -> i32 {
            (v ^ ((v as u64) >> 32) as i64) as i32
        }
        match self {
            FieldValue::Boolean(v) => *v as i32,
            FieldValue::Integer(v) => *v,
            FieldValue::Long(v) => long_hash(*v),
            FieldValue::String(v) => str_hash(v),
            FieldValue::Timestamp(t) => fold(long_hash(t.secs()), t.subsec_nanos() as i32),
            FieldValue::StringList(items) => {
                items.iter().fold(0i32, |h, s| fold(h, str_hash(s)))
            }
            FieldValue::ShapeList(items) => {
                items.iter().fold(0i32, |h, s| fold(h, s.shape_hash()))
            }
            FieldValue::Shape(s) => s.shape_hash(),
        }
    }
}

impl PartialEq for FieldValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldValue::Boolean(a), FieldValue::Boolean(b)) => a == b,
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a == b,
            (FieldValue::Long(a), FieldValue::Long(b)) => a == b,
            (FieldValue::String(a), FieldValue::String(b)) => a == b,
            (FieldValue::Timestamp(a), FieldValue::Timestamp(b)) => a == b,
            (FieldValue::StringList(a), FieldValue::StringList(b)) => a == b,
            (FieldValue::ShapeList(a), FieldValue::ShapeList(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.dyn_eq(*y))
            }
            (FieldValue::Shape(a), FieldValue::Shape(b)) => a.dyn_eq(*b),
            _ => false,
        }
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Boolean(v) => fmt::Debug::fmt(v, f),
            FieldValue::Integer(v) => fmt::Debug::fmt(v, f),
            FieldValue::Long(v) => fmt::Debug::fmt(v, f),
            FieldValue::String(v) => fmt::Debug::fmt(v, f),
            FieldValue::Timestamp(v) => fmt::Debug::fmt(v, f),
            FieldValue::StringList(v) => f.debug_list().entries(v.iter()).finish(),
            FieldValue::ShapeList(v) => f.debug_list().entries(v.iter()).finish(),
            FieldValue::Shape(v) => fmt::Debug::fmt(v, f),
        }
    }
}

/// A shape with a static field-descriptor table.
///
/// Implemented by every generated model type. The descriptor slice is ordered
/// by declaration and must exactly match the shape's public accessors.
pub trait DescribedShape: Sized + fmt::Debug + 'static {
    /// The builder that stages this shape's fields.
    type Builder: ShapeBuilder<Output = Self> + 'static;

    /// The shape's model name.
    fn shape_name() -> &'static str;

    /// The shape's field descriptors, in declaration order.
    fn descriptors() -> &'static [FieldDescriptor<Self, Self::Builder>];
}

/// Object-safe view of a described shape.
///
/// This is what nested-shape field values and external marshallers work
/// against; it is blanket-implemented for every [`DescribedShape`].
pub trait Shape: fmt::Debug {
    /// The shape's model name.
    fn shape_name(&self) -> &'static str;

    /// The wire names of every described field, in declaration order.
    fn field_names(&self) -> Vec<&'static str>;

    /// Looks up a field's value by wire name.
    ///
    /// Returns `None` both for names outside the descriptor table and for
    /// described fields that are unset — an unknown name is never an error.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    /// Field-by-field equality against another shape of the same model type.
    fn dyn_eq(&self, other: &dyn Shape) -> bool;

    /// 31-multiplicative rolling hash over the descriptor table, consistent
    /// with [`dyn_eq`](Shape::dyn_eq).
    fn shape_hash(&self) -> i32;

    /// Marshals every described field into a wire document object.
    fn marshall(&self) -> Result<Document, MarshallError>;
}

impl<S: DescribedShape> Shape for S {
    fn shape_name(&self) -> &'static str {
        S::shape_name()
    }

    fn field_names(&self) -> Vec<&'static str> {
        S::descriptors().iter().map(|d| d.name).collect()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        S::descriptors()
            .iter()
            .find(|d| d.name == name)
            .and_then(|d| (d.get)(self))
    }

    fn dyn_eq(&self, other: &dyn Shape) -> bool {
        self.shape_name() == other.shape_name()
            && S::descriptors()
                .iter()
                .all(|d| FieldValue::eq_effective((d.get)(self).as_ref(), other.field(d.name).as_ref()))
    }

    fn shape_hash(&self) -> i32 {
        hash_by_fields(self)
    }

    fn marshall(&self) -> Result<Document, MarshallError> {
        crate::marshall::marshall_shape(self)
    }
}

/// Generic field-based equality for two shapes of the same type.
pub fn eq_by_fields<S: DescribedShape>(a: &S, b: &S) -> bool {
    S::descriptors()
        .iter()
        .all(|d| FieldValue::eq_effective((d.get)(a).as_ref(), (d.get)(b).as_ref()))
}

/// Generic 31-multiplicative rolling hash over a shape's descriptor table.
///
/// Consistent with [`eq_by_fields`]: absent values and empty lists both fold
/// in as 0.
pub fn hash_by_fields<S: DescribedShape>(shape: &S) -> i32 {
    S::descriptors().iter().fold(0i32, |h, d| {
        h.wrapping_mul(31)
            .wrapping_add((d.get)(shape).map_or(0, |v| v.value_hash()))
    })
}

/// Generic `Debug` rendering through a shape's descriptor table.
///
/// Fields with the sensitive trait render [`REDACTED`] regardless of their
/// value, including when unset.
pub fn fmt_by_fields<S: DescribedShape>(shape: &S, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut formatter = f.debug_struct(S::shape_name());
    for descriptor in S::descriptors() {
        if descriptor.traits.sensitive {
            formatter.field(descriptor.name, &REDACTED);
        } else {
            formatter.field(descriptor.name, &(descriptor.get)(shape));
        }
    }
    formatter.finish()
}

/// Wires a shape's `PartialEq`, `Hash`, and `Debug` implementations to the
/// generic descriptor-driven facilities.
#[macro_export]
macro_rules! shape_impls {
    ($ty:ty) => {
        impl ::std::cmp::PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $crate::eq_by_fields(self, other)
            }
        }

        impl ::std::hash::Hash for $ty {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                state.write_i32($crate::hash_by_fields(self));
            }
        }

        impl ::std::fmt::Debug for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::fmt_by_fields(self, f)
            }
        }
    };
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::UnmarshallError;

    #[derive(Clone)]
    struct Widget {
        id: Option<String>,
        count: Option<i32>,
        tags: Option<Vec<String>>,
        token: Option<String>,
    }

    #[derive(Clone, Debug, Default)]
    struct WidgetBuilder {
        id: Option<String>,
        count: Option<i32>,
        tags: Option<Vec<String>>,
        token: Option<String>,
    }

    impl ShapeBuilder for WidgetBuilder {
        type Output = Widget;

        fn build(self) -> Widget {
            Widget {
                id: self.id,
                count: self.count,
                tags: self.tags,
                token: self.token,
            }
        }
    }

    crate::shape_impls!(Widget);

    impl DescribedShape for Widget {
        type Builder = WidgetBuilder;

        fn shape_name() -> &'static str {
            "Widget"
        }

        fn descriptors() -> &'static [FieldDescriptor<Self, WidgetBuilder>] {
            &FIELDS
        }
    }

    static FIELDS: [FieldDescriptor<Widget, WidgetBuilder>; 4] = [
        FieldDescriptor {
            name: "id",
            shape_type: ShapeType::String,
            location: WireLocation::Payload,
            traits: FieldTraits::NONE,
            get: get_id,
            set: set_id,
        },
        FieldDescriptor {
            name: "count",
            shape_type: ShapeType::Integer,
            location: WireLocation::Payload,
            traits: FieldTraits::NONE,
            get: get_count,
            set: set_count,
        },
        FieldDescriptor {
            name: "tags",
            shape_type: ShapeType::List,
            location: WireLocation::Payload,
            traits: FieldTraits::NONE,
            get: get_tags,
            set: set_tags,
        },
        FieldDescriptor {
            name: "token",
            shape_type: ShapeType::String,
            location: WireLocation::Payload,
            traits: FieldTraits::NONE.sensitive(),
            get: get_token,
            set: set_token,
        },
    ];

    fn get_id(shape: &Widget) -> Option<FieldValue<'_>> {
        shape.id.as_deref().map(FieldValue::String)
    }

    fn set_id(builder: &mut WidgetBuilder, doc: &Document) -> Result<(), UnmarshallError> {
        builder.id = Some(
            doc.as_string()
                .ok_or(UnmarshallError::unexpected_type("id", "a string"))?
                .to_string(),
        );
        Ok(())
    }

    fn get_count(shape: &Widget) -> Option<FieldValue<'_>> {
        shape.count.map(FieldValue::Integer)
    }

    fn set_count(builder: &mut WidgetBuilder, doc: &Document) -> Result<(), UnmarshallError> {
        builder.count = Some(
            doc.as_number()
                .and_then(|n| n.to_i32())
                .ok_or(UnmarshallError::unexpected_type("count", "an integer"))?,
        );
        Ok(())
    }

    fn get_tags(shape: &Widget) -> Option<FieldValue<'_>> {
        shape.tags.as_deref().map(FieldValue::StringList)
    }

    fn set_tags(builder: &mut WidgetBuilder, doc: &Document) -> Result<(), UnmarshallError> {
        let items = doc
            .as_array()
            .ok_or(UnmarshallError::unexpected_type("tags", "an array"))?;
        let mut tags = Vec::with_capacity(items.len());
        for item in items {
            tags.push(
                item.as_string()
                    .ok_or(UnmarshallError::unexpected_type("tags", "a string"))?
                    .to_string(),
            );
        }
        builder.tags = Some(tags);
        Ok(())
    }

    fn get_token(shape: &Widget) -> Option<FieldValue<'_>> {
        shape.token.as_deref().map(FieldValue::String)
    }

    fn set_token(builder: &mut WidgetBuilder, doc: &Document) -> Result<(), UnmarshallError> {
        builder.token = Some(
            doc.as_string()
                .ok_or(UnmarshallError::unexpected_type("token", "a string"))?
                .to_string(),
        );
        Ok(())
    }

    fn widget(id: &str, count: i32, tags: Option<Vec<&str>>) -> Widget {
        Widget {
            id: Some(id.to_string()),
            count: Some(count),
            tags: tags.map(|t| t.into_iter().map(str::to_string).collect()),
            token: None,
        }
    }

    #[test]
    fn equality_is_field_by_field() {
        let a = widget("w-1", 3, Some(vec!["red", "blue"]));
        let b = widget("w-1", 3, Some(vec!["red", "blue"]));
        let c = widget("w-1", 4, Some(vec!["red", "blue"]));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn absent_list_equals_empty_list() {
        let absent = widget("w-1", 3, None);
        let empty = widget("w-1", 3, Some(vec![]));
        assert_eq!(absent, empty);
        assert_eq!(hash_by_fields(&absent), hash_by_fields(&empty));
    }

    #[test]
    fn dynamic_lookup_by_wire_name() {
        let shape = widget("w-1", 3, Some(vec!["red"]));
        assert_eq!(shape.field("id").unwrap().expect_str(), "w-1");
        assert_eq!(shape.field("count").unwrap().expect_integer(), 3);
        assert_eq!(
            shape.field("tags").unwrap().expect_string_list(),
            &["red".to_string()]
        );
        // unknown names are "not present", never an error
        assert!(shape.field("noSuchField").is_none());
    }

    #[test]
    #[should_panic(expected = "expected an integer field value")]
    fn typed_lookup_mismatch_is_a_programmer_error() {
        let shape = widget("w-1", 3, None);
        shape.field("id").unwrap().expect_integer();
    }

    #[test]
    fn descriptor_names_are_exactly_the_resolvable_set() {
        let mut shape = widget("w-1", 3, Some(vec!["red"]));
        shape.token = Some("shh".to_string());
        assert_eq!(shape.field_names(), vec!["id", "count", "tags", "token"]);
        for name in shape.field_names() {
            assert!(shape.field(name).is_some());
        }
    }

    #[test]
    fn unset_described_fields_resolve_to_none() {
        let shape = widget("w-1", 3, None);
        assert!(shape.field("tags").is_none());
        assert!(shape.field("token").is_none());
    }

    #[test]
    fn sensitive_fields_are_redacted_in_debug() {
        let mut shape = widget("w-1", 3, None);
        shape.token = Some("shh".to_string());
        let rendered = format!("{:?}", shape);
        assert!(rendered.contains(REDACTED));
        assert!(!rendered.contains("shh"));
        // the ordinary accessor is unaffected
        assert_eq!(shape.token.as_deref(), Some("shh"));

        // redacted even when unset
        shape.token = None;
        assert!(format!("{:?}", shape).contains(REDACTED));
    }

    #[test]
    fn hash_folds_in_declaration_order() {
        let a = widget("ab", 0, None);
        let b = widget("ba", 0, None);
        assert_ne!(hash_by_fields(&a), hash_by_fields(&b));
    }

    proptest::proptest! {
        #[test]
        fn equal_widgets_hash_equal(
            id in proptest::option::of("[a-z0-9-]{0,12}"),
            count in proptest::option::of(proptest::num::i32::ANY),
            tags in proptest::option::of(proptest::collection::vec("[a-z]{0,6}", 0..4)),
        ) {
            let a = Widget { id: id.clone(), count, tags: tags.clone(), token: None };
            let b = Widget { id, count, tags, token: None };
            proptest::prop_assert!(a == b);
            proptest::prop_assert_eq!(hash_by_fields(&a), hash_by_fields(&b));
        }
    }
}
