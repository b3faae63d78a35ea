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

/// An error returned by an OCI service.
///
/// The services return a JSON body with a machine readable `code` (e.g.
/// `NotAuthorizedOrNotFound`) and a human readable `message`. The client
/// library adds the HTTP status code and the `opc-request-id` header, which
/// the service support teams need to troubleshoot problems.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ServiceError {
    /// A short error code, e.g. `NotAuthorizedOrNotFound`.
    pub code: String,

    /// A human readable description of the error.
    pub message: String,

    /// The HTTP status code of the response.
    #[serde(skip)]
    pub status_code: Option<u16>,

    /// The value of the `opc-request-id` response header.
    #[serde(skip)]
    pub opc_request_id: Option<String>,
}

impl ServiceError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [code][ServiceError::code].
    pub fn set_code<T: Into<String>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value of [message][ServiceError::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value of [status_code][ServiceError::status_code].
    pub fn set_status_code<T: Into<u16>>(mut self, v: T) -> Self {
        self.status_code = Some(v.into());
        self
    }

    /// Sets the value of [opc_request_id][ServiceError::opc_request_id].
    pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.opc_request_id = Some(v.into());
        self
    }
}

impl TryFrom<&bytes::Bytes> for ServiceError {
    type Error = serde_json::Error;

    /// Parses the error body, it must contain at least a `code` or a
    /// `message`.
    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        use serde::de::Error;
        let e = serde_json::from_slice::<ServiceError>(value)?;
        if e.code.is_empty() && e.message.is_empty() {
            return Err(serde_json::Error::custom(
                "the payload is not an OCI error body",
            ));
        }
        Ok(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn setters() {
        let e = ServiceError::new()
            .set_code("NotAuthorizedOrNotFound")
            .set_message("not found")
            .set_status_code(404_u16)
            .set_opc_request_id("req-123");
        assert_eq!(e.code, "NotAuthorizedOrNotFound");
        assert_eq!(e.message, "not found");
        assert_eq!(e.status_code, Some(404));
        assert_eq!(e.opc_request_id.as_deref(), Some("req-123"));
    }

    #[test]
    fn parse() -> anyhow::Result<()> {
        let body = bytes::Bytes::from_static(
            br#"{"code": "InvalidParameter", "message": "bad limit", "extra": 1}"#,
        );
        let got = ServiceError::try_from(&body)?;
        assert_eq!(
            got,
            ServiceError::new()
                .set_code("InvalidParameter")
                .set_message("bad limit")
        );
        Ok(())
    }

    #[test_case(b""; "empty")]
    #[test_case(b"{}"; "empty object")]
    #[test_case(b"<html>Bad Gateway</html>"; "not json")]
    #[test_case(br#"{"error": "other"}"#; "other shape")]
    fn parse_error(input: &'static [u8]) {
        let body = bytes::Bytes::from_static(input);
        let got = ServiceError::try_from(&body);
        assert!(got.is_err(), "{got:?}");
    }
}
