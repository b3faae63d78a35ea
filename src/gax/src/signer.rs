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

//! Request signing.
//!
//! The OCI services authenticate each request using a signature computed
//! over some of the request headers and, for most operations, the request
//! body. The client libraries delegate this computation to a [Signer], which
//! returns the headers to add to the request.
//!
//! Applications provide the signer when constructing a client. This crate
//! ships two simple implementations, [anonymous()] for emulators and tests,
//! and [StaticHeaders] for environments where a proxy or a delegation token
//! authenticates the request.
//!
//! # Example
//! ```
//! # use oci_sdk_gax::signer::*;
//! # tokio_test::block_on(async {
//! let signer = StaticHeaders::new([("opc-obo-token", "token-value")])?;
//! let signer = Signer::from(signer);
//! let request = SigningRequest::new(http::Method::GET, "https://example.com/20220430/configuration");
//! let headers = signer.headers(&request).await?;
//! assert!(headers.contains_key("opc-obo-token"));
//! # oci_sdk_gax::Result::<()>::Ok(()) });
//! ```

use crate::Result;
use crate::error::Error;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use std::sync::Arc;

/// Controls which parts of the request are included in the signature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum SigningStrategy {
    /// Sign the request line, the host and date headers, and for requests
    /// with a body the body digest, length, and content type.
    #[default]
    Standard,
    /// Sign the request line, the host and date headers, but not the body.
    ///
    /// Used by operations that upload opaque content.
    ExcludeBody,
}

/// The request details available to a [SignerProvider].
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct SigningRequest<'a> {
    /// The HTTP method.
    pub method: Method,
    /// The full request URL, including any query parameters.
    pub url: String,
    /// The headers set by the client library.
    pub headers: HeaderMap,
    /// The serialized body, if any.
    pub body: Option<&'a [u8]>,
    /// The parts of the request to include in the signature.
    pub strategy: SigningStrategy,
}

impl<'a> SigningRequest<'a> {
    pub fn new<U: Into<String>>(method: Method, url: U) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
            strategy: SigningStrategy::default(),
        }
    }

    /// Sets the value of [headers][SigningRequest::headers].
    pub fn set_headers(mut self, v: HeaderMap) -> Self {
        self.headers = v;
        self
    }

    /// Sets the value of [body][SigningRequest::body].
    pub fn set_body(mut self, v: Option<&'a [u8]>) -> Self {
        self.body = v;
        self
    }

    /// Sets the value of [strategy][SigningRequest::strategy].
    pub fn set_strategy(mut self, v: SigningStrategy) -> Self {
        self.strategy = v;
        self
    }

    /// The body bytes covered by the signature.
    ///
    /// This is `None` when the strategy excludes the body.
    pub fn signed_body(&self) -> Option<&'a [u8]> {
        match self.strategy {
            SigningStrategy::Standard => self.body,
            SigningStrategy::ExcludeBody => None,
        }
    }
}

/// Computes the authentication headers for a request.
///
/// Implement this trait to integrate custom signing mechanisms, such as API
/// keys, instance principals, or resource principals.
pub trait SignerProvider: std::fmt::Debug {
    /// Returns the headers to add to the request.
    fn headers(
        &self,
        request: &SigningRequest<'_>,
    ) -> impl Future<Output = Result<HeaderMap>> + Send;
}

/// A cloneable handle to a [SignerProvider].
#[derive(Clone, Debug)]
pub struct Signer {
    inner: Arc<dyn dynamic::SignerProvider>,
}

impl<T> std::convert::From<T> for Signer
where
    T: SignerProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Signer {
    pub async fn headers(&self, request: &SigningRequest<'_>) -> Result<HeaderMap> {
        self.inner.headers(request).await
    }
}

pub(crate) mod dynamic {
    use super::{HeaderMap, Result, SigningRequest};

    /// A dyn-compatible, crate-private version of `SignerProvider`.
    #[async_trait::async_trait]
    pub trait SignerProvider: Send + Sync + std::fmt::Debug {
        async fn headers(&self, request: &SigningRequest<'_>) -> Result<HeaderMap>;
    }

    /// The public SignerProvider implements the dyn-compatible SignerProvider.
    #[async_trait::async_trait]
    impl<T> SignerProvider for T
    where
        T: super::SignerProvider + Send + Sync,
    {
        async fn headers(&self, request: &SigningRequest<'_>) -> Result<HeaderMap> {
            T::headers(self, request).await
        }
    }
}

/// Creates a signer that adds no headers.
///
/// Useful to send requests to emulators, or in tests.
pub fn anonymous() -> Signer {
    Signer::from(Anonymous)
}

#[derive(Debug)]
struct Anonymous;

impl SignerProvider for Anonymous {
    async fn headers(&self, _request: &SigningRequest<'_>) -> Result<HeaderMap> {
        Ok(HeaderMap::new())
    }
}

/// A signer that adds a fixed set of headers to every request.
#[derive(Clone)]
pub struct StaticHeaders {
    headers: HeaderMap,
}

impl StaticHeaders {
    /// Creates a new instance from name/value pairs.
    ///
    /// Fails with an authentication error if any name or value is not a
    /// valid HTTP header.
    pub fn new<I, K, V>(headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let headers = headers
            .into_iter()
            .map(|(k, v)| {
                let name = HeaderName::from_bytes(k.as_ref().as_bytes())
                    .map_err(Error::authentication)?;
                let mut value =
                    HeaderValue::from_str(v.as_ref()).map_err(Error::authentication)?;
                value.set_sensitive(true);
                Ok((name, value))
            })
            .collect::<Result<HeaderMap>>()?;
        Ok(Self { headers })
    }
}

impl std::fmt::Debug for StaticHeaders {
    // The header values are secrets.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticHeaders")
            .field("names", &self.headers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl SignerProvider for StaticHeaders {
    async fn headers(&self, _request: &SigningRequest<'_>) -> Result<HeaderMap> {
        Ok(self.headers.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn anonymous_is_empty() -> anyhow::Result<()> {
        let signer = anonymous();
        let request = SigningRequest::new(Method::GET, "https://example.com/");
        let headers = signer.headers(&request).await?;
        assert!(headers.is_empty(), "{headers:?}");
        Ok(())
    }

    #[tokio::test]
    async fn static_headers() -> anyhow::Result<()> {
        let signer = Signer::from(StaticHeaders::new([
            ("authorization", "Signature abc"),
            ("opc-obo-token", "token"),
        ])?);
        let request = SigningRequest::new(Method::POST, "https://example.com/search")
            .set_body(Some(b"{}"));
        let headers = signer.headers(&request).await?;
        assert_eq!(
            headers.get("authorization"),
            Some(&HeaderValue::from_static("Signature abc"))
        );
        assert_eq!(
            headers.get("opc-obo-token"),
            Some(&HeaderValue::from_static("token"))
        );
        let fmt = format!("{signer:?}");
        assert!(!fmt.contains("Signature abc"), "{fmt}");
        Ok(())
    }

    #[test]
    fn static_headers_invalid() {
        let got = StaticHeaders::new([("bad header", "v")]);
        assert!(got.as_ref().is_err_and(|e| e.is_authentication()), "{:?}", got.err());
        let got = StaticHeaders::new([("good", "bad\nvalue")]);
        assert!(got.as_ref().is_err_and(|e| e.is_authentication()), "{:?}", got.err());
    }

    #[test]
    fn signing_request() {
        let request = SigningRequest::new(Method::PUT, "https://example.com/x")
            .set_body(Some(b"payload"));
        assert_eq!(request.strategy, SigningStrategy::Standard);
        assert_eq!(request.signed_body(), Some(&b"payload"[..]));

        let request = request.set_strategy(SigningStrategy::ExcludeBody);
        assert_eq!(request.signed_body(), None);
        assert_eq!(request.body, Some(&b"payload"[..]));
    }

    static_assertions::assert_impl_all!(Signer: Clone, Send, Sync, std::fmt::Debug);
}
