/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Errors produced while moving shapes to and from their wire form.
//!
//! Everything here is local and non-recoverable by this layer: the model layer
//! reports, it never retries. Service-side failures are the transport's
//! concern and never surface as these types.

use crate::date_time::{DateTimeFormatError, DateTimeParseError};
use thiserror::Error;

/// Failure to marshall a shape into its wire form.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MarshallError {
    /// A URI label had no value. Labels are required: there is no way to
    /// render the request path without them.
    #[error("no value provided for URI label `{label}`")]
    MissingLabel {
        /// Wire name of the label field.
        label: &'static str,
    },

    /// A field's value cannot be rendered at its declared wire location,
    /// e.g. a structure bound to a query parameter.
    #[error("field `{field}` cannot be rendered at its wire location")]
    UnsupportedValue {
        /// Wire name of the offending field.
        field: &'static str,
    },

    /// A timestamp field could not be rendered in its declared encoding.
    #[error("failed to format timestamp field `{field}`")]
    TimestampFormat {
        /// Wire name of the timestamp field.
        field: &'static str,
        /// Underlying formatting failure.
        #[source]
        source: DateTimeFormatError,
    },
}

/// Failure to reconstruct a shape from a wire document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UnmarshallError {
    /// The document for a shape was not an object.
    #[error("expected an object document for shape `{shape}`")]
    NotAnObject {
        /// Name of the shape being unmarshalled.
        shape: &'static str,
    },

    /// A member held a different document variant than the descriptor declares.
    #[error("expected {expected} for member `{member}`")]
    UnexpectedType {
        /// Wire name of the member.
        member: &'static str,
        /// Human-readable expected variant, e.g. `"a string"`.
        expected: &'static str,
    },

    /// A timestamp member could not be parsed in any supported encoding.
    #[error("invalid timestamp in member `{member}`")]
    InvalidTimestamp {
        /// Wire name of the member.
        member: &'static str,
        /// Underlying parse failure.
        #[source]
        source: DateTimeParseError,
    },
}

impl UnmarshallError {
    /// Convenience constructor for [`UnmarshallError::UnexpectedType`].
    pub fn unexpected_type(member: &'static str, expected: &'static str) -> Self {
        UnmarshallError::UnexpectedType { member, expected }
    }
}
