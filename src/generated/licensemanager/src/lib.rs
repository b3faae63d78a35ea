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

//! Oracle Cloud Infrastructure SDK for Rust - License Manager API
//!
//! License Manager tracks the product licenses owned by a tenancy and the
//! license records purchased for each of them.
//!
//! Start with [client::LicenseManager]. Each method on the client returns a
//! request builder, set the request fields and call `send()`:
//!
//! ```no_run
//! # tokio_test::block_on(async {
//! use oci_sdk_licensemanager::client::LicenseManager;
//! use oci_sdk_licensemanager::model::SortOrder;
//! let client = LicenseManager::builder()
//!     .with_region("us-ashburn-1")
//!     .with_signer(gax::signer::anonymous())
//!     .build()
//!     .await?;
//! let mut items = client
//!     .list_product_licenses()
//!     .set_compartment_id("ocid1.compartment.oc1..example")
//!     .set_sort_order(SortOrder::Desc)
//!     .by_item();
//! while let Some(license) = items.next().await {
//!     println!("{:?}", license?.display_name);
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
    "https://licensemanager.{region}.oci.{secondLevelDomain}";
