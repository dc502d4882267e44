/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Data shapes used by the CodeCatalyst API.

mod dev_environment_summary;
mod email_address;
mod enums;
mod filter;
mod ide;
mod ide_configuration;
mod persistent_storage;
mod repository_summary;
mod user_identity;

pub use dev_environment_summary::{DevEnvironmentSummary, DevEnvironmentSummaryBuilder};
pub use email_address::{EmailAddress, EmailAddressBuilder};
pub use enums::{ComparisonOperator, DevEnvironmentStatus, InstanceType, UserType};
pub use filter::{Filter, FilterBuilder};
pub use ide::{Ide, IdeBuilder};
pub use ide_configuration::{IdeConfiguration, IdeConfigurationBuilder};
pub use persistent_storage::{PersistentStorage, PersistentStorageBuilder};
pub use repository_summary::{RepositorySummary, RepositorySummaryBuilder};
pub use user_identity::{UserIdentity, UserIdentityBuilder};
