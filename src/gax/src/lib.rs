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

//! OCI API helpers.
//!
//! This crate contains a number of types and functions used in the
//! implementation of the OCI SDK for Rust clients: the error type returned by
//! all clients, request options, the OCI retry condition and backoff, pagination
//! helpers, region resolution, and the request signing abstraction.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping service requests.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The header carrying the unique request identifier.
pub const OPC_REQUEST_ID: &str = "opc-request-id";

/// The header carrying the idempotency token on create operations.
pub const OPC_RETRY_TOKEN: &str = "opc-retry-token";

/// The response header carrying the next page token.
pub const OPC_NEXT_PAGE: &str = "opc-next-page";

/// The conditional request header used by update and delete operations.
pub const IF_MATCH: &str = "if-match";

/// The response header carrying the resource entity tag.
pub const ETAG: &str = "etag";

/// The core error types used by generated clients.
pub mod error;

/// Defines some types and traits to convert and use list operations as a
/// Stream.
pub mod paginator;

pub mod backoff_policy;
pub mod client_builder;
pub mod options;
pub mod region;
pub mod response;
pub mod retry_policy;
pub mod signer;

#[doc(hidden)]
pub mod retry_loop_internal;
