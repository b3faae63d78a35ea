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

//! Response types.
//!
//! This module contains types related to OCI service responses. Notably it
//! contains the `Response` type itself.
//!
//! # Example
//!
//! Creating a response for mocks
//!
//! ```
//! # use oci_sdk_gax::Result;
//! # use oci_sdk_gax::response::Response;
//! // A type representing an OCI resource, for example, a product license.
//! struct Resource {
//!   // ...
//! }
//!
//! fn make_mock_response(body: Resource) -> Result<Response<Resource>> {
//!     Ok(Response::from(body))
//! }
//! ```

/// Represents an OCI service response.
///
/// A response consists of a body (potentially the unit type), and some
/// metadata, currently just headers. The OCI services return important
/// information in the headers, such as the `opc-request-id`, the `etag` of
/// the resource, and the `opc-next-page` token in list operations.
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from the body.
    ///
    /// # Example
    /// ```
    /// # use oci_sdk_gax::response::Response;
    /// let response = Response::from("test".to_string());
    /// assert!(response.headers().is_empty());
    /// ```
    pub fn from(body: T) -> Self {
        Self {
            body,
            parts: Parts::default(),
        }
    }

    /// Creates a response from the given parts.
    ///
    /// # Example
    /// ```
    /// # use oci_sdk_gax::response::{Parts, Response};
    /// let mut headers = http::HeaderMap::new();
    /// headers.insert("opc-request-id", http::HeaderValue::from_static("abc"));
    /// let response = Response::from_parts(Parts::new().set_headers(headers), ());
    /// assert_eq!(response.opc_request_id(), Some("abc"));
    /// ```
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// Returns the headers associated with this response.
    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    /// Returns the body associated with this response.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// The `opc-request-id` header, if present and valid.
    pub fn opc_request_id(&self) -> Option<&str> {
        self.header_str(crate::OPC_REQUEST_ID)
    }

    /// The `opc-next-page` header, if present and valid.
    pub fn opc_next_page(&self) -> Option<&str> {
        self.header_str(crate::OPC_NEXT_PAGE)
    }

    /// The `etag` header, if present and valid.
    pub fn etag(&self) -> Option<&str> {
        self.header_str(crate::ETAG)
    }

    fn header_str(&self, name: &str) -> Option<&str> {
        self.parts.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Consumes the response returning the metadata, and body.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    /// Consumes the response returning only its body.
    ///
    /// # Example
    /// ```
    /// # use oci_sdk_gax::response::Response;
    /// let response = Response::from("test".to_string());
    /// let body = response.into_body();
    /// assert_eq!(body.as_str(), "test");
    /// ```
    pub fn into_body(self) -> T {
        self.body
    }
}

/// Component parts of a response.
///
/// The response parts, other than the body, consist of just headers.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Parts {
    /// The HTTP headers.
    pub headers: http::HeaderMap<http::HeaderValue>,
}

impl Parts {
    /// Create a new instance.
    pub fn new() -> Self {
        Parts::default()
    }

    /// Set the headers.
    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderMap, HeaderValue};

    #[test]
    fn response_from() {
        let response = Response::from("abc123".to_string());
        assert!(response.headers().is_empty());
        assert_eq!(response.body().as_str(), "abc123");
        assert!(response.opc_request_id().is_none(), "{response:?}");
        assert!(response.opc_next_page().is_none(), "{response:?}");

        let body = response.into_body();
        assert_eq!(body.as_str(), "abc123");
    }

    #[test]
    fn response_from_parts() {
        let mut headers = HeaderMap::new();
        headers.insert(crate::OPC_REQUEST_ID, HeaderValue::from_static("req-1"));
        headers.insert(crate::OPC_NEXT_PAGE, HeaderValue::from_static("page-2"));
        headers.insert(crate::ETAG, HeaderValue::from_static("etag-3"));
        let parts = Parts::new().set_headers(headers.clone());

        let response = Response::from_parts(parts, "abc123".to_string());
        assert_eq!(response.body().as_str(), "abc123");
        assert_eq!(response.headers(), &headers);
        assert_eq!(response.opc_request_id(), Some("req-1"));
        assert_eq!(response.opc_next_page(), Some("page-2"));
        assert_eq!(response.etag(), Some("etag-3"));

        let (parts, body) = response.into_parts();
        assert_eq!(body.as_str(), "abc123");
        assert_eq!(parts.headers, headers);
    }

    #[test]
    fn invalid_header_value() -> anyhow::Result<()> {
        let mut headers = HeaderMap::new();
        headers.insert(
            crate::OPC_REQUEST_ID,
            HeaderValue::from_bytes(b"\xfa\xfb")?,
        );
        let response = Response::from_parts(Parts::new().set_headers(headers), ());
        assert!(response.opc_request_id().is_none(), "{response:?}");
        Ok(())
    }
}
