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

//! Binds loosely typed JSON objects to the OCI SDK data models.
//!
//! Every model in the service crates is created by the binder in this crate,
//! whether the input comes from a response body or from application code.
//! The binder:
//!
//! * accepts each field under its wire name (`compartmentId`) or its
//!   canonical alias (`compartment_id`), and rejects inputs that use both,
//! * applies declared defaults for absent fields,
//! * maps enum values it does not recognize to an explicit sentinel,
//! * tolerates malformed optional data by leaving the field unset,
//! * resolves polymorphic families to their concrete subtype using a
//!   discriminator field.
//!
//! ```
//! # use oci_sdk_binding as binding;
//! # use binding::{Fields, Model};
//! #[derive(Debug, Default, PartialEq)]
//! struct Tag {
//!     key: Option<String>,
//!     value_count: Option<i64>,
//! }
//!
//! impl Model for Tag {
//!     const NAME: &'static str = "Tag";
//!     fn bind(fields: &mut Fields<'_>) -> binding::Result<Self> {
//!         Ok(Self {
//!             key: fields.take("key", "key")?,
//!             value_count: fields.take("valueCount", "value_count")?,
//!         })
//!     }
//! }
//!
//! let wire: Tag = binding::from_value(serde_json::json!({"key": "k", "valueCount": 3}))?;
//! let alias: Tag = binding::from_value(serde_json::json!({"key": "k", "value_count": 3}))?;
//! assert_eq!(wire, alias);
//!
//! let conflict = binding::from_value::<Tag>(serde_json::json!({"valueCount": 3, "value_count": 4}));
//! assert!(conflict.is_err());
//! # Ok::<(), binding::BindError>(())
//! ```

/// An alias of [std::result::Result] where the error is always [BindError].
pub type Result<T> = std::result::Result<T, BindError>;

pub mod datetime;
pub mod diagnostics;
pub mod enumerations;
pub mod polymorphic;

mod error;
pub use error::BindError;

mod fields;
pub use fields::{Bindable, Fields, Slot};

mod message;
pub use message::{Model, deserialize, from_value, from_value_with, wire_hash};

pub use polymorphic::Polymorphic;
