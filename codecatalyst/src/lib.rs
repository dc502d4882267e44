/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Client model types for Amazon CodeCatalyst.
//!
//! This crate contains the request, response, and data shapes for a subset of
//! the CodeCatalyst API, described field by field through `smithy-shape`
//! descriptors. Shapes are immutable; all construction goes through builders:
//!
//! ```
//! use codecatalyst::types::{ComparisonOperator, Filter};
//!
//! let filter = Filter::builder()
//!     .key("status")
//!     .values("RUNNING")
//!     .values("STOPPED")
//!     .comparison_operator(ComparisonOperator::Equals)
//!     .build();
//! assert_eq!(filter.key(), Some("status"));
//! ```
//!
//! The HTTP transport, signing, and retry machinery live in the runtime this
//! crate marshals requests for; nothing here performs I/O.

#![allow(clippy::derive_partial_eq_without_eq)]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod operation;
pub mod types;

pub mod config {
    //! Per-call configuration carried by every request and response.
    pub use smithy_shape::{RequestOverrideConfig, RequestOverrideConfigBuilder, ResponseMetadata};
}
