/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Runtime support for descriptor-described service model types.
//!
//! Generated service clients describe each field of a model shape exactly once,
//! in a static [`FieldDescriptor`] table. Everything cross-cutting is driven
//! from that table instead of being re-implemented per type: equality, hashing,
//! `Debug` rendering (with sensitive-field redaction), dynamic field lookup by
//! wire name, and marshalling to and from the wire [`Document`] representation.
//!
//! The HTTP transport, signing, retries, and endpoint resolution all live in a
//! separate runtime; this crate's boundary is the [`MarshalledRequest`] it
//! hands that runtime and the [`Document`] it receives back.

#![allow(clippy::derive_partial_eq_without_eq)]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod config;
pub mod date_time;
pub mod error;
pub mod marshall;

mod builder;
mod document;
mod number;
mod shape;
mod unknown;

pub use builder::{configured, ShapeBuilder};
pub use config::{RequestOverrideConfig, RequestOverrideConfigBuilder, ResponseMetadata};
pub use date_time::{DateTime, Format};
pub use document::Document;
pub use error::{MarshallError, UnmarshallError};
pub use marshall::{
    marshall_request, marshall_shape, member_bool, member_i32, member_i64, member_shape_list,
    member_string, member_string_list, member_timestamp, unmarshall_shape, MarshalledRequest,
    OperationMeta, OperationRequest,
};
pub use number::Number;
pub use shape::{
    eq_by_fields, fmt_by_fields, hash_by_fields, DescribedShape, FieldDescriptor, FieldTraits,
    FieldValue, Shape, ShapeType, WireLocation, REDACTED,
};
pub use unknown::UnknownVariantValue;
