/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! String-backed enumerations.
//!
//! The service adds enum values over time, so every enum here carries an
//! `Unknown` variant holding the raw wire string. The typed accessor of a
//! field maps unrecognized values to that sentinel instead of failing, and
//! `as_str` always returns the original wire value.

use smithy_shape::UnknownVariantValue;
use std::fmt;
use std::str::FromStr;

/// How a [`Filter`](crate::types::Filter) compares its key against its values.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ComparisonOperator {
    /// `EQUALS`
    Equals,
    /// An unrecognized wire value.
    #[non_exhaustive]
    Unknown(UnknownVariantValue),
}

impl ComparisonOperator {
    /// The wire representation of this value.
    pub fn as_str(&self) -> &str {
        match self {
            ComparisonOperator::Equals => "EQUALS",
            ComparisonOperator::Unknown(value) => value.as_str(),
        }
    }

    /// All wire values known to this version of the model.
    pub const fn values() -> &'static [&'static str] {
        &["EQUALS"]
    }
}

impl From<&str> for ComparisonOperator {
    fn from(s: &str) -> Self {
        match s {
            "EQUALS" => ComparisonOperator::Equals,
            other => ComparisonOperator::Unknown(UnknownVariantValue::new(other)),
        }
    }
}

impl FromStr for ComparisonOperator {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ComparisonOperator::from(s))
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of principal behind a [`UserIdentity`](crate::types::UserIdentity).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum UserType {
    /// `AWS_ACCOUNT`
    AwsAccount,
    /// `USER`
    User,
    /// The service's literal `UNKNOWN` value. Distinct from [`UserType::Unknown`],
    /// which this client produces for wire values it does not model.
    UnknownValue,
    /// An unrecognized wire value.
    #[non_exhaustive]
    Unknown(UnknownVariantValue),
}

impl UserType {
    /// The wire representation of this value.
    pub fn as_str(&self) -> &str {
        match self {
            UserType::AwsAccount => "AWS_ACCOUNT",
            UserType::User => "USER",
            UserType::UnknownValue => "UNKNOWN",
            UserType::Unknown(value) => value.as_str(),
        }
    }

    /// All wire values known to this version of the model.
    pub const fn values() -> &'static [&'static str] {
        &["AWS_ACCOUNT", "UNKNOWN", "USER"]
    }
}

impl From<&str> for UserType {
    fn from(s: &str) -> Self {
        match s {
            "AWS_ACCOUNT" => UserType::AwsAccount,
            "USER" => UserType::User,
            "UNKNOWN" => UserType::UnknownValue,
            other => UserType::Unknown(UnknownVariantValue::new(other)),
        }
    }
}

impl FromStr for UserType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(UserType::from(s))
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of a Dev Environment.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum DevEnvironmentStatus {
    /// `DELETED`
    Deleted,
    /// `DELETING`
    Deleting,
    /// `FAILED`
    Failed,
    /// `PENDING`
    Pending,
    /// `RUNNING`
    Running,
    /// `STARTING`
    Starting,
    /// `STOPPED`
    Stopped,
    /// `STOPPING`
    Stopping,
    /// An unrecognized wire value.
    #[non_exhaustive]
    Unknown(UnknownVariantValue),
}

impl DevEnvironmentStatus {
    /// The wire representation of this value.
    pub fn as_str(&self) -> &str {
        match self {
            DevEnvironmentStatus::Deleted => "DELETED",
            DevEnvironmentStatus::Deleting => "DELETING",
            DevEnvironmentStatus::Failed => "FAILED",
            DevEnvironmentStatus::Pending => "PENDING",
            DevEnvironmentStatus::Running => "RUNNING",
            DevEnvironmentStatus::Starting => "STARTING",
            DevEnvironmentStatus::Stopped => "STOPPED",
            DevEnvironmentStatus::Stopping => "STOPPING",
            DevEnvironmentStatus::Unknown(value) => value.as_str(),
        }
    }

    /// All wire values known to this version of the model.
    pub const fn values() -> &'static [&'static str] {
        &[
            "DELETED", "DELETING", "FAILED", "PENDING", "RUNNING", "STARTING", "STOPPED",
            "STOPPING",
        ]
    }
}

impl From<&str> for DevEnvironmentStatus {
    fn from(s: &str) -> Self {
        match s {
            "DELETED" => DevEnvironmentStatus::Deleted,
            "DELETING" => DevEnvironmentStatus::Deleting,
            "FAILED" => DevEnvironmentStatus::Failed,
            "PENDING" => DevEnvironmentStatus::Pending,
            "RUNNING" => DevEnvironmentStatus::Running,
            "STARTING" => DevEnvironmentStatus::Starting,
            "STOPPED" => DevEnvironmentStatus::Stopped,
            "STOPPING" => DevEnvironmentStatus::Stopping,
            other => DevEnvironmentStatus::Unknown(UnknownVariantValue::new(other)),
        }
    }
}

impl FromStr for DevEnvironmentStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DevEnvironmentStatus::from(s))
    }
}

impl fmt::Display for DevEnvironmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compute instance size of a Dev Environment.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum InstanceType {
    /// `dev.standard1.large`
    DevStandard1Large,
    /// `dev.standard1.medium`
    DevStandard1Medium,
    /// `dev.standard1.small`
    DevStandard1Small,
    /// `dev.standard1.xlarge`
    DevStandard1Xlarge,
    /// An unrecognized wire value.
    #[non_exhaustive]
    Unknown(UnknownVariantValue),
}

impl InstanceType {
    /// The wire representation of this value.
    pub fn as_str(&self) -> &str {
        match self {
            InstanceType::DevStandard1Large => "dev.standard1.large",
            InstanceType::DevStandard1Medium => "dev.standard1.medium",
            InstanceType::DevStandard1Small => "dev.standard1.small",
            InstanceType::DevStandard1Xlarge => "dev.standard1.xlarge",
            InstanceType::Unknown(value) => value.as_str(),
        }
    }

    /// All wire values known to this version of the model.
    pub const fn values() -> &'static [&'static str] {
        &[
            "dev.standard1.large",
            "dev.standard1.medium",
            "dev.standard1.small",
            "dev.standard1.xlarge",
        ]
    }
}

impl From<&str> for InstanceType {
    fn from(s: &str) -> Self {
        match s {
            "dev.standard1.large" => InstanceType::DevStandard1Large,
            "dev.standard1.medium" => InstanceType::DevStandard1Medium,
            "dev.standard1.small" => InstanceType::DevStandard1Small,
            "dev.standard1.xlarge" => InstanceType::DevStandard1Xlarge,
            other => InstanceType::Unknown(UnknownVariantValue::new(other)),
        }
    }
}

impl FromStr for InstanceType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(InstanceType::from(s))
    }
}

impl fmt::Display for InstanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn known_values_round_trip() {
        for value in DevEnvironmentStatus::values() {
            assert_eq!(DevEnvironmentStatus::from(*value).as_str(), *value);
        }
        for value in InstanceType::values() {
            assert_eq!(InstanceType::from(*value).as_str(), *value);
        }
    }

    #[test]
    fn unrecognized_values_are_preserved() {
        let status = DevEnvironmentStatus::from("HIBERNATING");
        assert!(matches!(status, DevEnvironmentStatus::Unknown(_)));
        assert_eq!(status.as_str(), "HIBERNATING");
        assert_eq!(status, DevEnvironmentStatus::from("HIBERNATING"));
    }

    #[test]
    fn literal_unknown_is_a_known_value() {
        assert_eq!(UserType::from("UNKNOWN"), UserType::UnknownValue);
        assert_eq!(UserType::UnknownValue.as_str(), "UNKNOWN");
        assert!(matches!(UserType::from("ROBOT"), UserType::Unknown(_)));
    }
}
