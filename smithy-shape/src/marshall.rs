/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Descriptor-driven marshalling.
//!
//! The marshaller walks a shape's field descriptors and routes each value to
//! its declared wire location: URI labels into the operation's path template,
//! query fields into name/value pairs, and payload fields into a wire
//! [`Document`]. The transport runtime takes the resulting
//! [`MarshalledRequest`] from there; deserialization runs the same table in
//! reverse through each descriptor's mutator.

use crate::date_time::Format;
use crate::error::{MarshallError, UnmarshallError};
use crate::shape::{DescribedShape, FieldTraits, FieldValue, WireLocation};
use crate::{DateTime, Document, Number, ShapeBuilder};
use http::Method;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::collections::HashMap;

/// Characters that must not reach a path segment or query value unescaped.
/// RFC-3986 §3.3 would allow some of these in a path, but services expect
/// them percent-encoded and signing fails when they are not.
const URI_ESCAPE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'/')
    .add(b':')
    .add(b',')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'@')
    .add(b'!')
    .add(b'$')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b';')
    .add(b'=')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'"')
    .add(b'^')
    .add(b'`')
    .add(b'\\');

fn uri_encode(value: &str) -> String {
    utf8_percent_encode(value, URI_ESCAPE_SET).to_string()
}

/// Static description of one service operation.
#[derive(Debug)]
pub struct OperationMeta {
    /// Operation name, e.g. `ListDevEnvironments`.
    pub name: &'static str,
    /// HTTP method.
    pub method: Method,
    /// Path template with `{label}` segments, e.g.
    /// `/v1/spaces/{spaceName}/projects/{projectName}/devEnvironments`.
    pub uri_template: &'static str,
}

/// A request shape that knows which operation it belongs to.
pub trait OperationRequest: DescribedShape {
    /// The operation's static metadata.
    fn operation() -> &'static OperationMeta;
}

/// A request after marshalling, ready for a transport to encode and send.
#[derive(Debug, Clone, PartialEq)]
pub struct MarshalledRequest {
    method: Method,
    path: String,
    query: Vec<(&'static str, String)>,
    payload: Option<Document>,
}

impl MarshalledRequest {
    /// HTTP method of the call.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Request path with every label substituted. Label values arrive
    /// percent-encoded; the template's own `/` separators are untouched.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters in descriptor order, values percent-encoded.
    pub fn query(&self) -> &[(&'static str, String)] {
        &self.query
    }

    /// Request body document, `None` for operations without payload fields.
    pub fn payload(&self) -> Option<&Document> {
        self.payload.as_ref()
    }
}

/// Marshals a request shape into its wire form.
///
/// Label fields are required: a request with an unset label cannot produce a
/// path and fails with [`MarshallError::MissingLabel`]. Absent query and
/// payload fields are skipped.
pub fn marshall_request<S: OperationRequest>(request: &S) -> Result<MarshalledRequest, MarshallError> {
    let operation = S::operation();
    let mut path = operation.uri_template.to_string();
    let mut query = Vec::new();
    let mut members = HashMap::new();
    let mut has_payload_fields = false;

    for descriptor in S::descriptors() {
        let value = (descriptor.get)(request);
        match descriptor.location {
            WireLocation::Label => {
                let value = value.ok_or(MarshallError::MissingLabel {
                    label: descriptor.name,
                })?;
                let rendered = wire_string(&value, descriptor.name, &descriptor.traits)?;
                path = path.replace(&format!("{{{}}}", descriptor.name), &uri_encode(&rendered));
            }
            WireLocation::Query(name) => {
                if let Some(value) = value {
                    match &value {
                        FieldValue::StringList(items) => {
                            for item in items.iter() {
                                query.push((name, uri_encode(item)));
                            }
                        }
                        other => {
                            let rendered = wire_string(other, descriptor.name, &descriptor.traits)?;
                            query.push((name, uri_encode(&rendered)));
                        }
                    }
                }
            }
            WireLocation::Payload => {
                has_payload_fields = true;
                if let Some(value) = value {
                    members.insert(
                        descriptor.name.to_string(),
                        to_document(&value, descriptor.name, &descriptor.traits)?,
                    );
                }
            }
        }
    }

    tracing::trace!(operation = operation.name, path = %path, "marshalled request");
    Ok(MarshalledRequest {
        method: operation.method.clone(),
        path,
        query,
        payload: has_payload_fields.then(|| Document::Object(members)),
    })
}

/// Marshals every field of a shape into a wire document object.
///
/// Absent fields are omitted rather than serialized as null.
pub fn marshall_shape<S: DescribedShape>(shape: &S) -> Result<Document, MarshallError> {
    let mut members = HashMap::new();
    for descriptor in S::descriptors() {
        if let Some(value) = (descriptor.get)(shape) {
            members.insert(
                descriptor.name.to_string(),
                to_document(&value, descriptor.name, &descriptor.traits)?,
            );
        }
    }
    Ok(Document::Object(members))
}

/// Reconstructs a shape from a wire document object.
///
/// Unrecognized members are skipped (a newer service may send fields this
/// model version does not know), as are explicit nulls.
pub fn unmarshall_shape<S: DescribedShape>(doc: &Document) -> Result<S, UnmarshallError> {
    let members = doc.as_object().ok_or(UnmarshallError::NotAnObject {
        shape: S::shape_name(),
    })?;
    let mut builder = S::Builder::default();
    for (name, member) in members {
        if member.is_null() {
            continue;
        }
        match S::descriptors().iter().find(|d| d.name == name) {
            Some(descriptor) => (descriptor.set)(&mut builder, member)?,
            None => {
                tracing::debug!(shape = S::shape_name(), member = %name, "skipping unrecognized member");
            }
        }
    }
    Ok(builder.build())
}

fn wire_string(
    value: &FieldValue<'_>,
    field: &'static str,
    traits: &FieldTraits,
) -> Result<String, MarshallError> {
    match value {
        FieldValue::String(v) => Ok((*v).to_string()),
        FieldValue::Integer(v) => Ok(itoa::Buffer::new().format(*v).to_string()),
        FieldValue::Long(v) => Ok(itoa::Buffer::new().format(*v).to_string()),
        FieldValue::Boolean(v) => Ok(if *v { "true" } else { "false" }.to_string()),
        FieldValue::Timestamp(t) => t
            // labels and query values default to the ISO 8601 encoding
            .fmt(traits.timestamp_format.unwrap_or(Format::DateTime))
            .map_err(|source| MarshallError::TimestampFormat { field, source }),
        _ => Err(MarshallError::UnsupportedValue { field }),
    }
}

fn to_document(
    value: &FieldValue<'_>,
    field: &'static str,
    traits: &FieldTraits,
) -> Result<Document, MarshallError> {
    Ok(match value {
        FieldValue::Boolean(v) => Document::Bool(*v),
        FieldValue::Integer(v) => Document::from(*v),
        FieldValue::Long(v) => Document::from(*v),
        FieldValue::String(v) => Document::String((*v).to_string()),
        FieldValue::Timestamp(t) => {
            // payload members default to fractional epoch seconds
            match traits.timestamp_format.unwrap_or(Format::EpochSeconds) {
                Format::EpochSeconds => Document::Number(Number::Float(t.as_secs_f64())),
                Format::DateTime => Document::String(
                    t.fmt(Format::DateTime)
                        .map_err(|source| MarshallError::TimestampFormat { field, source })?,
                ),
            }
        }
        FieldValue::StringList(items) => Document::Array(
            items
                .iter()
                .map(|item| Document::String(item.clone()))
                .collect(),
        ),
        FieldValue::ShapeList(items) => {
            let mut elements = Vec::with_capacity(items.len());
            for item in items {
                elements.push(item.marshall()?);
            }
            Document::Array(elements)
        }
        FieldValue::Shape(shape) => shape.marshall()?,
    })
}

/// Reads a required string member.
pub fn member_string(member: &'static str, doc: &Document) -> Result<String, UnmarshallError> {
    Ok(doc
        .as_string()
        .ok_or(UnmarshallError::unexpected_type(member, "a string"))?
        .to_string())
}

/// Reads a required 32-bit integer member.
pub fn member_i32(member: &'static str, doc: &Document) -> Result<i32, UnmarshallError> {
    doc.as_number()
        .and_then(|n| n.to_i32())
        .ok_or(UnmarshallError::unexpected_type(member, "an integer"))
}

/// Reads a required 64-bit integer member.
pub fn member_i64(member: &'static str, doc: &Document) -> Result<i64, UnmarshallError> {
    doc.as_number()
        .and_then(|n| n.to_i64())
        .ok_or(UnmarshallError::unexpected_type(member, "an integer"))
}

/// Reads a required boolean member.
pub fn member_bool(member: &'static str, doc: &Document) -> Result<bool, UnmarshallError> {
    doc.as_bool()
        .ok_or(UnmarshallError::unexpected_type(member, "a boolean"))
}

/// Reads a timestamp member in either supported encoding.
pub fn member_timestamp(member: &'static str, doc: &Document) -> Result<DateTime, UnmarshallError> {
    match doc {
        Document::String(value) => DateTime::from_str(value, Format::DateTime)
            .map_err(|source| UnmarshallError::InvalidTimestamp { member, source }),
        Document::Number(value) => Ok(DateTime::from_secs_f64(value.to_f64_lossy())),
        _ => Err(UnmarshallError::unexpected_type(member, "a timestamp")),
    }
}

/// Reads a list-of-strings member.
pub fn member_string_list(
    member: &'static str,
    doc: &Document,
) -> Result<Vec<String>, UnmarshallError> {
    let items = doc
        .as_array()
        .ok_or(UnmarshallError::unexpected_type(member, "an array"))?;
    let mut values = Vec::with_capacity(items.len());
    for item in items {
        values.push(member_string(member, item)?);
    }
    Ok(values)
}

/// Reads a list-of-shapes member.
pub fn member_shape_list<S: DescribedShape>(
    member: &'static str,
    doc: &Document,
) -> Result<Vec<S>, UnmarshallError> {
    let items = doc
        .as_array()
        .ok_or(UnmarshallError::unexpected_type(member, "an array"))?;
    let mut shapes = Vec::with_capacity(items.len());
    for item in items {
        shapes.push(unmarshall_shape(item)?);
    }
    Ok(shapes)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shape::{FieldDescriptor, ShapeType};
    use crate::FieldTraits;

    #[derive(Clone)]
    struct Tag {
        name: Option<String>,
        count: Option<i32>,
        created: Option<DateTime>,
    }

    #[derive(Clone, Debug, Default)]
    struct TagBuilder {
        name: Option<String>,
        count: Option<i32>,
        created: Option<DateTime>,
    }

    impl ShapeBuilder for TagBuilder {
        type Output = Tag;

        fn build(self) -> Tag {
            Tag {
                name: self.name,
                count: self.count,
                created: self.created,
            }
        }
    }

    crate::shape_impls!(Tag);

    impl DescribedShape for Tag {
        type Builder = TagBuilder;

        fn shape_name() -> &'static str {
            "Tag"
        }

        fn descriptors() -> &'static [FieldDescriptor<Self, TagBuilder>] {
            &TAG_FIELDS
        }
    }

    static TAG_FIELDS: [FieldDescriptor<Tag, TagBuilder>; 3] = [
        FieldDescriptor {
            name: "name",
            shape_type: ShapeType::String,
            location: WireLocation::Payload,
            traits: FieldTraits::NONE,
            get: get_name,
            set: set_name,
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
            name: "created",
            shape_type: ShapeType::Timestamp,
            location: WireLocation::Payload,
            traits: FieldTraits::NONE.timestamp_format(Format::DateTime),
            get: get_created,
            set: set_created,
        },
    ];

    fn get_name(shape: &Tag) -> Option<FieldValue<'_>> {
        shape.name.as_deref().map(FieldValue::String)
    }

    fn set_name(builder: &mut TagBuilder, doc: &Document) -> Result<(), UnmarshallError> {
        builder.name = Some(member_string("name", doc)?);
        Ok(())
    }

    fn get_count(shape: &Tag) -> Option<FieldValue<'_>> {
        shape.count.map(FieldValue::Integer)
    }

    fn set_count(builder: &mut TagBuilder, doc: &Document) -> Result<(), UnmarshallError> {
        builder.count = Some(member_i32("count", doc)?);
        Ok(())
    }

    fn get_created(shape: &Tag) -> Option<FieldValue<'_>> {
        shape.created.as_ref().map(FieldValue::Timestamp)
    }

    fn set_created(builder: &mut TagBuilder, doc: &Document) -> Result<(), UnmarshallError> {
        builder.created = Some(member_timestamp("created", doc)?);
        Ok(())
    }

    #[test]
    fn shape_document_round_trip() {
        let tag = Tag {
            name: Some("release".to_string()),
            count: Some(7),
            created: Some(DateTime::from_secs(1_690_891_200)),
        };
        let doc = marshall_shape(&tag).unwrap();
        let parsed: Tag = unmarshall_shape(&doc).unwrap();
        assert_eq!(parsed, tag);
    }

    #[test]
    fn absent_fields_are_omitted() {
        let tag = Tag {
            name: Some("release".to_string()),
            count: None,
            created: None,
        };
        let doc = marshall_shape(&tag).unwrap();
        let members = doc.as_object().unwrap();
        assert!(members.contains_key("name"));
        assert!(!members.contains_key("count"));
    }

    #[test]
    fn declared_timestamp_format_is_honored() {
        let tag = Tag {
            name: None,
            count: None,
            created: Some(DateTime::from_secs(1_690_891_200)),
        };
        let doc = marshall_shape(&tag).unwrap();
        assert_eq!(
            doc.as_object().unwrap().get("created").unwrap().as_string(),
            Some("2023-08-01T12:00:00Z")
        );
    }

    #[test]
    fn unrecognized_members_are_skipped() {
        let mut members = HashMap::new();
        members.insert("name".to_string(), Document::from("release"));
        members.insert("futureField".to_string(), Document::from("whatever"));
        members.insert("count".to_string(), Document::Null);
        let parsed: Tag = unmarshall_shape(&Document::Object(members)).unwrap();
        assert_eq!(parsed.name.as_deref(), Some("release"));
        assert_eq!(parsed.count, None);
    }

    #[test]
    fn mistyped_member_is_an_error() {
        let mut members = HashMap::new();
        members.insert("count".to_string(), Document::from("three"));
        let result: Result<Tag, _> = unmarshall_shape(&Document::Object(members));
        assert!(matches!(
            result,
            Err(UnmarshallError::UnexpectedType { member: "count", .. })
        ));
    }

    #[test]
    fn reserved_characters_are_percent_encoded() {
        assert_eq!(uri_encode("a/b c"), "a%2Fb%20c");
        assert_eq!(uri_encode("key=value&next"), "key%3Dvalue%26next");
        assert_eq!(uri_encode("plain-value_1.2~3"), "plain-value_1.2~3");
    }

    #[test]
    fn non_object_document_is_an_error() {
        let result: Result<Tag, _> = unmarshall_shape(&Document::from("nope"));
        assert!(matches!(
            result,
            Err(UnmarshallError::NotAnObject { shape: "Tag" })
        ));
    }
}
