/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Request and response shapes, one module per service operation.

pub mod get_dev_environment;
pub mod get_user_details;
pub mod list_dev_environments;
pub mod start_dev_environment;
