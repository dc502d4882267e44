/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Cross-cutting request and response bases.
//!
//! Every request shape carries an optional [`RequestOverrideConfig`] and every
//! response shape carries an optional [`ResponseMetadata`]. Both belong to the
//! runtime, not the service model: they never appear in a shape's descriptor
//! table and therefore never participate in wire marshalling or generic
//! equality.

use std::time::Duration;

/// Per-call overrides applied on top of the client-level configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOverrideConfig {
    operation_timeout: Option<Duration>,
    user_agent_suffix: Option<String>,
}

impl RequestOverrideConfig {
    /// Creates a new builder.
    pub fn builder() -> RequestOverrideConfigBuilder {
        RequestOverrideConfigBuilder::default()
    }

    /// Overall timeout for this single call, if overridden.
    pub fn operation_timeout(&self) -> Option<Duration> {
        self.operation_timeout
    }

    /// Extra token appended to the user agent for this single call.
    pub fn user_agent_suffix(&self) -> Option<&str> {
        self.user_agent_suffix.as_deref()
    }
}

/// Builder for [`RequestOverrideConfig`].
#[derive(Debug, Clone, Default)]
pub struct RequestOverrideConfigBuilder {
    operation_timeout: Option<Duration>,
    user_agent_suffix: Option<String>,
}

impl RequestOverrideConfigBuilder {
    /// Sets the overall timeout for this single call.
    pub fn operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = Some(timeout);
        self
    }

    /// Sets the overall timeout for this single call.
    pub fn set_operation_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.operation_timeout = timeout;
        self
    }

    /// Appends a token to the user agent for this single call.
    pub fn user_agent_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.user_agent_suffix = Some(suffix.into());
        self
    }

    /// Appends a token to the user agent for this single call.
    pub fn set_user_agent_suffix(mut self, suffix: Option<String>) -> Self {
        self.user_agent_suffix = suffix;
        self
    }

    /// Builds the override configuration.
    pub fn build(self) -> RequestOverrideConfig {
        RequestOverrideConfig {
            operation_timeout: self.operation_timeout,
            user_agent_suffix: self.user_agent_suffix,
        }
    }
}

/// Metadata the runtime attaches to every deserialized response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseMetadata {
    request_id: Option<String>,
}

impl ResponseMetadata {
    /// Creates response metadata with the service-assigned request ID.
    pub fn new(request_id: Option<String>) -> Self {
        Self { request_id }
    }

    /// The service-assigned request ID, when the service returned one.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn override_config_builder() {
        let config = RequestOverrideConfig::builder()
            .operation_timeout(Duration::from_secs(5))
            .user_agent_suffix("batch-import")
            .build();
        assert_eq!(config.operation_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.user_agent_suffix(), Some("batch-import"));
        assert_eq!(RequestOverrideConfig::default().operation_timeout(), None);
    }

    #[test]
    fn response_metadata_request_id() {
        let metadata = ResponseMetadata::new(Some("req-123".to_string()));
        assert_eq!(metadata.request_id(), Some("req-123"));
        assert_eq!(ResponseMetadata::default().request_id(), None);
    }
}
