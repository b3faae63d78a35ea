// Copyright 2025 Oracle and/or its affiliates.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Oracle Cloud Infrastructure SDK for Rust - Operations Insights API
//!
//! Operations Insights collects the resource usage and SQL statistics of
//! databases and hosts. Several of its resources are polymorphic: a
//! [DatabaseInsight][model::DatabaseInsight] is one variant per
//! `entitySource`, a [ColumnUnit][model::ColumnUnit] one variant per
//! `unitCategory`. Responses with an unrecognized discriminator bind to the
//! `Base` variant, which keeps the common fields.
//!
//! ```no_run
//! # tokio_test::block_on(async {
//! use oci_sdk_opsi::client::OperationsInsights;
//! use oci_sdk_opsi::model::DatabaseInsight;
//! let client = OperationsInsights::builder()
//!     .with_region("us-phoenix-1")
//!     .with_signer(gax::signer::anonymous())
//!     .build()
//!     .await?;
//! let insight = client
//!     .get_database_insight()
//!     .set_database_insight_id("ocid1.opsidatabaseinsight.oc1..example")
//!     .send()
//!     .await?;
//! match insight {
//!     DatabaseInsight::AutonomousDatabase(adb) => println!("{:?}", adb.database_name),
//!     other => println!("{:?}", other.entity_source()),
//! }
//! # anyhow::Result::<()>::Ok(()) });
//! ```

pub use gax::Result;
pub use gax::error::Error;

pub mod builder;
pub mod client;
pub mod model;
pub mod stub;

#[doc(hidden)]
pub(crate) mod tracing;
#[doc(hidden)]
pub(crate) mod transport;

/// The service endpoint, before the region is applied.
pub(crate) const ENDPOINT_TEMPLATE: &str =
    "https://operationsinsights.{region}.oci.{secondLevelDomain}";
