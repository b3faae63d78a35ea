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

use gax::error::{Error, binding::BindingError};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// The unreserved characters in RFC 3986 are sent as-is, everything else is
// escaped. OCIDs only use unreserved characters.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Creates the error returned when a required parameter is not set.
pub fn missing(name: &'static str) -> Error {
    Error::binding(BindingError::MissingRequiredParameter(name))
}

/// Returns the value of a required parameter.
///
/// Unset and empty values are both rejected.
pub fn required<'a>(value: Option<&'a str>, name: &'static str) -> gax::Result<&'a str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(missing(name)),
    }
}

/// Percent-encodes a value for use as a single path segment.
pub fn encode(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}
