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

use super::ServiceError;
use super::binding::BindingError;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. The service may
/// return an error, the transport may be unable to connect, the request may
/// timeout, the retry policy may be exhausted, or the library may reject the
/// request because required parameters are missing.
///
/// Most applications just return the error or log it. Applications that
/// need more details can use the predicates and accessors in this type, or
/// query the error [source][std::error::Error::source].
///
/// # Example
/// ```
/// use oci_sdk_gax::error::{Error, ServiceError};
/// match example_function() {
///     Err(e) if e.http_status_code() == Some(404) => {
///         println!("not found {e}, request id {:?}", e.opc_request_id());
///     },
///     Err(e) if e.is_timeout() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # Err(Error::service(ServiceError::new().set_code("NotAuthorizedOrNotFound").set_status_code(404_u16)))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by the service.
    ///
    /// # Example
    /// ```
    /// use oci_sdk_gax::error::{Error, ServiceError};
    /// let svc = ServiceError::new().set_code("InvalidParameter").set_message("bad limit");
    /// let error = Error::service(svc.clone());
    /// assert_eq!(error.status(), Some(&svc));
    /// ```
    pub fn service(error: ServiceError) -> Self {
        Self {
            kind: ErrorKind::Service(Box::new(ServiceDetails {
                error,
                headers: None,
            })),
            source: None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates service errors including the response headers.
    #[doc(hidden)]
    pub fn service_with_http_metadata(error: ServiceError, headers: Option<HeaderMap>) -> Self {
        Self {
            kind: ErrorKind::Service(Box::new(ServiceDetails { error, headers })),
            source: None,
        }
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use oci_sdk_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. The request may or may
    /// not have started, and it may or may not complete in the service.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// The request could not complete before the retry policy expired.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use oci_sdk_gax::error::Error;
    /// let error = Error::exhausted("too many attempts");
    /// assert!(error.is_exhausted());
    /// assert!(error.source().is_some());
    /// ```
    pub fn exhausted<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Exhausted,
            source: Some(source.into()),
        }
    }

    /// The retry policy stopped the retry loop.
    ///
    /// The source is the last error received, or a description of the policy
    /// that stopped the loop.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, ErrorKind::Exhausted)
    }

    /// The response could not be deserialized.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use oci_sdk_gax::error::Error;
    /// let error = Error::deser("simulated problem");
    /// assert!(error.is_deserialization());
    /// assert!(error.source().is_some());
    /// ```
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// This is most likely a bug in the client library, or a service that
    /// returns a body with both the wire name and the alias of one field.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// The request could not be serialized.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use oci_sdk_gax::error::Error;
    /// let error = Error::ser("simulated problem");
    /// assert!(error.is_serialization());
    /// assert!(error.source().is_some());
    /// ```
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// Typically a header value (e.g. `if-match`) with characters that are
    /// not valid in HTTP headers.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// The request failed local validation.
    ///
    /// # Example
    /// ```
    /// use oci_sdk_gax::error::{Error, binding::BindingError};
    /// let error = Error::binding(BindingError::MissingRequiredParameter("compartmentId"));
    /// assert!(error.is_binding());
    /// assert_eq!(error.as_binding().map(|e| e.parameter()), Some("compartmentId"));
    /// ```
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: Some(source.into()),
        }
    }

    /// A required parameter is missing, or a parameter is invalid.
    pub fn is_binding(&self) -> bool {
        matches!(&self.kind, ErrorKind::Binding)
    }

    /// The validation details, if this is a binding error created from a
    /// [BindingError].
    pub fn as_binding(&self) -> Option<&BindingError> {
        match &self.kind {
            ErrorKind::Binding => self
                .source
                .as_ref()
                .and_then(|e| e.downcast_ref::<BindingError>()),
            _ => None,
        }
    }

    /// Creates an error representing a failure to sign the request.
    pub fn authentication<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// The request could not be signed.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// A HTTP error response without a recognizable OCI error body.
    ///
    /// Load balancers and proxies may return these.
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: None,
        }
    }

    /// A problem reported by the transport layer, e.g. a broken connection.
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Io,
            source: Some(source.into()),
        }
    }

    /// The transport could not send the request or receive the response.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io)
    }

    /// A HTTP error response without a service error body.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport(_))
    }

    /// The error details returned by the service, if any.
    pub fn status(&self) -> Option<&ServiceError> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.error),
            _ => None,
        }
    }

    /// The HTTP status code, if any, associated with this error.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => d.status_code,
            ErrorKind::Service(d) => d.error.status_code,
            _ => None,
        }
    }

    /// The response headers, if any, associated with this error.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.headers.as_ref(),
            ErrorKind::Service(d) => d.headers.as_ref(),
            _ => None,
        }
    }

    /// The response payload, if any, for errors without a service error body.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => d.payload.as_ref(),
            _ => None,
        }
    }

    /// The `opc-request-id` of the failed request, if known.
    ///
    /// Include this value when contacting support.
    pub fn opc_request_id(&self) -> Option<&str> {
        if let Some(id) = self.status().and_then(|s| s.opc_request_id.as_deref()) {
            return Some(id);
        }
        self.http_headers()
            .and_then(|h| h.get(crate::OPC_REQUEST_ID))
            .and_then(|v| v.to_str().ok())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Binding, Some(e)) => {
                write!(f, "cannot send the request, it failed validation: {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot sign the request {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the request deadline {e}")
            }
            (ErrorKind::Exhausted, Some(e)) => write!(f, "{e}"),
            (ErrorKind::Io, Some(e)) => write!(f, "the transport reports an error: {e}"),
            (ErrorKind::Transport(d), _) => d.fmt(f),
            (ErrorKind::Service(d), _) => {
                write!(
                    f,
                    "the service reports an error with code {} described as: {}",
                    d.error.code, d.error.message
                )?;
                if let Some(id) = &d.error.opc_request_id {
                    write!(f, " (opc-request-id: {id})")?;
                }
                Ok(())
            }
            (_, None) => f.write_str("unknown error"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Binding,
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Exhausted,
    Io,
    Transport(Box<TransportDetails>),
    Service(Box<ServiceDetails>),
}

#[derive(Debug)]
struct TransportDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

impl TransportDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = self.status_code.unwrap_or_default();
        match self.payload.as_ref().map(|p| std::str::from_utf8(p)) {
            Some(Ok(message)) => {
                write!(f, "the HTTP transport reports a [{code}] error: {message}")
            }
            Some(Err(_)) | None => write!(f, "the HTTP transport reports a [{code}] error"),
        }
    }
}

#[derive(Debug)]
struct ServiceDetails {
    error: ServiceError,
    headers: Option<HeaderMap>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn service() {
        let svc = ServiceError::new()
            .set_code("NotAuthorizedOrNotFound")
            .set_message("not found")
            .set_status_code(404_u16)
            .set_opc_request_id("req-1");
        let error = Error::service(svc.clone());
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.status(), Some(&svc));
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.opc_request_id(), Some("req-1"));
        let got = error.to_string();
        assert!(got.contains("NotAuthorizedOrNotFound"), "{got}");
        assert!(got.contains("not found"), "{got}");
        assert!(got.contains("req-1"), "{got}");
    }

    #[test]
    fn service_with_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(crate::OPC_REQUEST_ID, HeaderValue::from_static("req-2"));
        let svc = ServiceError::new().set_code("Conflict");
        let error = Error::service_with_http_metadata(svc, Some(headers.clone()));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(error.opc_request_id(), Some("req-2"));
    }

    #[test]
    fn timeout() {
        let error = Error::timeout("simulated");
        assert!(error.is_timeout(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.to_string().contains("simulated"), "{error}");
        assert!(error.status().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.http_headers().is_none(), "{error:?}");
        assert!(error.http_payload().is_none(), "{error:?}");
    }

    #[test]
    fn exhausted() {
        let error = Error::exhausted(Error::timeout("inner"));
        assert!(error.is_exhausted(), "{error:?}");
        let inner = error.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(inner.is_some_and(Error::is_timeout), "{error:?}");
    }

    #[test]
    fn serialization() {
        let error = Error::ser("bad header");
        assert!(error.is_serialization(), "{error:?}");
        assert!(!error.is_deserialization(), "{error:?}");
        let error = Error::deser("bad body");
        assert!(error.is_deserialization(), "{error:?}");
        assert!(error.to_string().contains("bad body"), "{error}");
    }

    #[test]
    fn binding() {
        let error = Error::binding(BindingError::InvalidEnumValue {
            parameter: "sortOrder",
            value: "SIDEWAYS".into(),
            allowed: "ASC, DESC".into(),
        });
        assert!(error.is_binding(), "{error:?}");
        assert_eq!(error.as_binding().map(|e| e.parameter()), Some("sortOrder"));
        let got = error.to_string();
        assert!(got.contains("SIDEWAYS"), "{got}");
        assert!(got.contains("ASC, DESC"), "{got}");

        let error = Error::binding("other");
        assert!(error.is_binding(), "{error:?}");
        assert!(error.as_binding().is_none(), "{error:?}");
    }

    #[test]
    fn http() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("text/html"));
        let error = Error::http(
            502,
            headers.clone(),
            bytes::Bytes::from_static(b"Bad Gateway"),
        );
        assert!(error.is_transport(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(502));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(
            error.http_payload(),
            Some(&bytes::Bytes::from_static(b"Bad Gateway"))
        );
        assert!(error.to_string().contains("[502]"), "{error}");
        assert!(error.to_string().contains("Bad Gateway"), "{error}");
        assert!(error.opc_request_id().is_none(), "{error:?}");
    }

    #[test]
    fn io_and_authentication() {
        let error = Error::io("connection reset");
        assert!(error.is_io(), "{error:?}");
        assert!(error.to_string().contains("connection reset"), "{error}");
        let error = Error::authentication("no key");
        assert!(error.is_authentication(), "{error:?}");
        assert!(error.to_string().contains("no key"), "{error}");
    }

    static_assertions::assert_impl_all!(Error: Send, Sync, StdError);
}
