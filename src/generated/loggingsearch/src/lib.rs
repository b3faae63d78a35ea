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

//! Oracle Cloud Infrastructure SDK for Rust - Logging Search API
//!
//! Searches the logs collected by the Logging service. The results are
//! paginated, [by_item()][builder::log_search::SearchLogs::by_item] streams
//! them across pages.
//!
//! ```no_run
//! # tokio_test::block_on(async {
//! use oci_sdk_loggingsearch::client::LogSearch;
//! use oci_sdk_loggingsearch::model::SearchLogsDetails;
//! let client = LogSearch::builder()
//!     .with_region("eu-frankfurt-1")
//!     .with_signer(gax::signer::anonymous())
//!     .build()
//!     .await?;
//! let end = time::OffsetDateTime::now_utc();
//! let details = SearchLogsDetails::new()
//!     .set_time_start(end - time::Duration::hours(1))
//!     .set_time_end(end)
//!     .set_search_query(r#"search "ocid1.compartment.oc1..example" | sort by datetime desc"#);
//! let mut results = client
//!     .search_logs()
//!     .set_search_logs_details(details)
//!     .by_item();
//! while let Some(result) = results.next().await {
//!     println!("{:?}", result?.data);
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
pub(crate) const ENDPOINT_TEMPLATE: &str = "https://logging.{region}.oci.{secondLevelDomain}";
