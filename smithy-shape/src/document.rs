/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::Number;
use std::collections::HashMap;

/// Protocol-agnostic wire value.
///
/// A `Document` is the in-process form of a request or response body. The
/// transport encodes it into the protocol's actual byte format (JSON for the
/// services modeled on top of this crate); the marshaller in this crate only
/// ever builds and walks `Document` trees.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// Object
    Object(HashMap<String, Document>),
    /// Array
    Array(Vec<Document>),
    /// Number
    Number(Number),
    /// String
    String(String),
    /// Boolean
    Bool(bool),
    /// Null
    Null,
}

impl Document {
    /// Returns the inner map if this is an `Object`.
    pub fn as_object(&self) -> Option<&HashMap<String, Document>> {
        match self {
            Document::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the inner elements if this is an `Array`.
    pub fn as_array(&self) -> Option<&[Document]> {
        match self {
            Document::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Returns the inner string if this is a `String`.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Document::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the inner number if this is a `Number`.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Document::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the inner boolean if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Document::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if this is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Document::Null)
    }
}

impl From<bool> for Document {
    fn from(value: bool) -> Self {
        Document::Bool(value)
    }
}

impl From<&str> for Document {
    fn from(value: &str) -> Self {
        Document::String(value.to_string())
    }
}

impl From<String> for Document {
    fn from(value: String) -> Self {
        Document::String(value)
    }
}

impl From<Vec<Document>> for Document {
    fn from(values: Vec<Document>) -> Self {
        Document::Array(values)
    }
}

impl From<HashMap<String, Document>> for Document {
    fn from(values: HashMap<String, Document>) -> Self {
        Document::Object(values)
    }
}

impl From<u64> for Document {
    fn from(value: u64) -> Self {
        Document::Number(Number::PosInt(value))
    }
}

impl From<i64> for Document {
    fn from(value: i64) -> Self {
        Document::Number(Number::NegInt(value))
    }
}

impl From<i32> for Document {
    fn from(value: i32) -> Self {
        Document::Number(Number::NegInt(value as i64))
    }
}

#[cfg(test)]
mod test {
    use super::Document;
    use std::collections::HashMap;

    #[test]
    fn accessors_narrow_by_variant() {
        let mut map = HashMap::new();
        map.insert("name".to_string(), Document::from("value"));
        let doc = Document::Object(map);
        assert_eq!(
            doc.as_object().unwrap().get("name").unwrap().as_string(),
            Some("value")
        );
        assert!(doc.as_array().is_none());
        assert!(doc.as_number().is_none());
        assert!(!doc.is_null());
        assert!(Document::Null.is_null());
    }

    #[test]
    fn numeric_conversions() {
        assert_eq!(Document::from(5i32).as_number().unwrap().to_i32(), Some(5));
        assert_eq!(Document::from(5u64).as_number().unwrap().to_i64(), Some(5));
    }
}
