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

//! The HTTP transport shared by all the service crates.

use crate::options::ClientConfig;
use gax::Result;
use gax::backoff_policy::{BackoffPolicy, ExponentialBackoff};
use gax::client_builder::Error as BuilderError;
use gax::error::{Error, ServiceError};
use gax::options::RequestOptions;
use gax::region::Region;
use gax::response::{Parts, Response};
use gax::retry_policy::RetryPolicy;
use gax::signer::{Signer, SigningRequest};
use reqwest::header::{CONTENT_TYPE, HeaderValue, USER_AGENT};
use std::sync::Arc;

const DEFAULT_USER_AGENT: &str = concat!("oci-sdk-rust/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    signer: Signer,
    endpoint: String,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    tracing: bool,
}

impl ReqwestClient {
    /// Creates a client for a service.
    ///
    /// `endpoint_template` is the service endpoint with `{region}` and
    /// `{secondLevelDomain}` placeholders. It is only used when the
    /// configuration does not override the endpoint.
    pub async fn new(
        config: ClientConfig,
        endpoint_template: &str,
    ) -> gax::client_builder::Result<Self> {
        let tracing = crate::options::tracing_enabled(&config);
        let endpoint = Self::resolve_endpoint(&config, endpoint_template)?;
        let signer = config.cred.ok_or(BuilderError::MissingSigner)?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        Ok(Self {
            inner,
            signer,
            endpoint,
            retry_policy: config.retry_policy,
            backoff_policy: config.backoff_policy,
            tracing,
        })
    }

    fn resolve_endpoint(
        config: &ClientConfig,
        endpoint_template: &str,
    ) -> gax::client_builder::Result<String> {
        if let Some(endpoint) = &config.endpoint {
            return Ok(endpoint.trim_end_matches('/').to_string());
        }
        let region = Region::resolve(config.region.as_deref())?;
        Ok(region.endpoint(endpoint_template))
    }

    /// The resolved endpoint, e.g. `https://logging.us-ashburn-1.oci.oraclecloud.com`.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner
            .request(method, format!("{}{path}", &self.endpoint))
    }

    pub async fn execute<I: serde::ser::Serialize, O: serde::de::DeserializeOwned + Default>(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<Response<O>> {
        let user_agent = match options.user_agent() {
            Some(prefix) => format!("{prefix} {DEFAULT_USER_AGENT}"),
            None => DEFAULT_USER_AGENT.to_string(),
        };
        builder = builder.header(
            USER_AGENT,
            HeaderValue::from_str(&user_agent).map_err(Error::ser)?,
        );
        if let Some(id) = options.opc_request_id() {
            builder = builder.header(
                gax::OPC_REQUEST_ID,
                HeaderValue::from_str(id).map_err(Error::ser)?,
            );
        }
        let body = match body {
            None => None,
            Some(b) => {
                builder = builder.header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                Some(bytes::Bytes::from(serde_json::to_vec(&b).map_err(Error::ser)?))
            }
        };
        match self.get_retry_policy(&options) {
            None => self.request_attempt::<O>(builder, body, &options, None, 1).await,
            Some(policy) => self.retry_loop::<O>(builder, body, options, policy).await,
        }
    }

    async fn retry_loop<O: serde::de::DeserializeOwned + Default>(
        &self,
        builder: reqwest::RequestBuilder,
        body: Option<bytes::Bytes>,
        options: RequestOptions,
        retry_policy: Arc<dyn RetryPolicy>,
    ) -> Result<Response<O>> {
        let idempotent = options.idempotent().unwrap_or(false);
        let backoff = self.get_backoff_policy(&options);
        let this = self.clone();
        let mut attempt = 0_u32;
        let inner = async move |d| {
            attempt += 1;
            let builder = builder
                .try_clone()
                .ok_or_else(|| Error::io("the request cannot be retried, its body is a stream"))?;
            this.request_attempt(builder, body.clone(), &options, d, attempt)
                .await
        };
        let sleep = async |d| tokio::time::sleep(d).await;
        gax::retry_loop_internal::retry_loop(inner, sleep, idempotent, retry_policy, backoff).await
    }

    async fn request_attempt<O: serde::de::DeserializeOwned + Default>(
        &self,
        builder: reqwest::RequestBuilder,
        body: Option<bytes::Bytes>,
        options: &RequestOptions,
        remaining_time: Option<std::time::Duration>,
        attempt: u32,
    ) -> Result<Response<O>> {
        let builder = gax::retry_loop_internal::attempt_timeout(options, remaining_time)
            .into_iter()
            .fold(builder, |b, t| b.timeout(t));
        let builder = match &body {
            Some(b) => builder.body(b.clone()),
            None => builder,
        };
        let mut request = builder.build().map_err(Error::ser)?;

        let signing = SigningRequest::new(request.method().clone(), request.url().as_str())
            .set_headers(request.headers().clone())
            .set_body(body.as_deref())
            .set_strategy(options.signing_strategy());
        let signed = self.signer.headers(&signing).await?;
        request.headers_mut().extend(signed);

        if self.tracing {
            tracing::debug!(
                method = %request.method(),
                path = request.url().path(),
                attempt,
                "sending request"
            );
        }
        let response = self
            .inner
            .execute(request)
            .await
            .map_err(Self::map_send_error)?;
        if !response.status().is_success() {
            return self::to_http_error(response).await;
        }

        self::to_http_response(response).await
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }

    fn get_retry_policy(&self, options: &RequestOptions) -> Option<Arc<dyn RetryPolicy>> {
        options
            .retry_policy()
            .cloned()
            .or_else(|| self.retry_policy.clone())
    }

    pub(crate) fn get_backoff_policy(&self, options: &RequestOptions) -> Arc<dyn BackoffPolicy> {
        options
            .backoff_policy()
            .cloned()
            .or_else(|| self.backoff_policy.clone())
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()))
    }
}

/// Use as the body type for requests without a payload.
#[derive(serde::Serialize)]
pub struct NoBody;

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    let error = match ServiceError::try_from(&body) {
        Ok(service) => {
            let service = service.set_status_code(status_code);
            let service = match parts
                .headers
                .get(gax::OPC_REQUEST_ID)
                .and_then(|v| v.to_str().ok())
            {
                Some(id) => service.set_opc_request_id(id),
                None => service,
            };
            Error::service_with_http_metadata(service, Some(parts.headers))
        }
        Err(_) => Error::http(status_code, parts.headers, body),
    };
    Err(error)
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<Response<O>> {
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    // Delete operations and some updates return no content.
    let response = match body {
        content if content.is_empty() => O::default(),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser)?,
    };

    Ok(Response::from_parts(
        Parts::new().set_headers(parts.headers),
        response,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::ServiceError;
    use http::{HeaderMap, HeaderValue};
    use scoped_env::ScopedEnv;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    const TEMPLATE: &str = "https://logging.{region}.oci.{secondLevelDomain}";

    fn test_config() -> ClientConfig {
        let mut config = ClientConfig::default();
        config.cred = Some(gax::signer::anonymous());
        config
    }

    #[tokio::test]
    async fn new_with_endpoint() -> TestResult {
        let mut config = test_config();
        config.endpoint = Some("http://localhost:8080/".into());
        let client = ReqwestClient::new(config, TEMPLATE).await?;
        assert_eq!(client.endpoint(), "http://localhost:8080");
        Ok(())
    }

    #[test_case("us-ashburn-1", "https://logging.us-ashburn-1.oci.oraclecloud.com")]
    #[test_case("iad", "https://logging.us-ashburn-1.oci.oraclecloud.com")]
    #[test_case("uk-gov-london-1", "https://logging.uk-gov-london-1.oci.oraclegovcloud.uk")]
    #[tokio::test]
    async fn new_with_region(region: &str, want: &str) -> TestResult {
        let mut config = test_config();
        config.region = Some(region.into());
        let client = ReqwestClient::new(config, TEMPLATE).await?;
        assert_eq!(client.endpoint(), want);
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn new_with_region_from_env() -> TestResult {
        let _e = ScopedEnv::set(gax::region::REGION_ENV, "eu-frankfurt-1");
        let client = ReqwestClient::new(test_config(), TEMPLATE).await?;
        assert_eq!(
            client.endpoint(),
            "https://logging.eu-frankfurt-1.oci.oraclecloud.com"
        );
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn new_without_region() -> TestResult {
        let _e = ScopedEnv::remove(gax::region::REGION_ENV);
        let err = ReqwestClient::new(test_config(), TEMPLATE)
            .await
            .expect_err("no region or endpoint configured");
        assert!(matches!(err, BuilderError::Endpoint(_)), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn new_with_bad_region() -> TestResult {
        let mut config = test_config();
        config.region = Some("not a region".into());
        let err = ReqwestClient::new(config, TEMPLATE)
            .await
            .expect_err("invalid region");
        assert!(matches!(err, BuilderError::Endpoint(_)), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn new_without_signer() -> TestResult {
        let mut config = ClientConfig::default();
        config.endpoint = Some("http://localhost:8080".into());
        let err = ReqwestClient::new(config, TEMPLATE)
            .await
            .expect_err("no signer configured");
        assert!(matches!(err, BuilderError::MissingSigner), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn client_http_error_bytes() -> TestResult {
        let http_resp = http::Response::builder()
            .header("Content-Type", "text/html")
            .status(502)
            .body("<html>Bad Gateway</html>")?;
        let response: reqwest::Response = http_resp.into();
        let err = super::to_http_error::<()>(response)
            .await
            .expect_err("502 is an error");
        assert_eq!(err.http_status_code(), Some(502));
        assert!(err.status().is_none(), "{err:?}");
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("text/html"));
        assert_eq!(err.http_headers(), Some(&want));
        assert_eq!(
            err.http_payload(),
            Some(bytes::Bytes::from("<html>Bad Gateway</html>")).as_ref()
        );
        Ok(())
    }

    #[tokio::test]
    async fn client_error_with_service_error() -> TestResult {
        let body = serde_json::json!({
            "code": "NotAuthorizedOrNotFound",
            "message": "Authorization failed or requested resource not found.",
        });
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .header("opc-request-id", "req-123")
            .status(404)
            .body(body.to_string())?;
        let response: reqwest::Response = http_resp.into();
        let err = super::to_http_error::<()>(response)
            .await
            .expect_err("404 is an error");
        let want = ServiceError::new()
            .set_code("NotAuthorizedOrNotFound")
            .set_message("Authorization failed or requested resource not found.")
            .set_status_code(404_u16)
            .set_opc_request_id("req-123");
        assert_eq!(err.status(), Some(&want));
        assert_eq!(err.http_status_code(), Some(404_u16));
        assert_eq!(err.opc_request_id(), Some("req-123"));
        assert!(err.http_headers().is_some(), "{err:?}");
        Ok(())
    }

    #[test_case(reqwest::StatusCode::OK, "{}"; "200 with empty object")]
    #[test_case(reqwest::StatusCode::NO_CONTENT, "{}"; "204 with empty object")]
    #[test_case(reqwest::StatusCode::NO_CONTENT, ""; "204 with empty content")]
    #[test_case(reqwest::StatusCode::OK, ""; "200 with empty content")]
    #[tokio::test]
    async fn client_empty_content(code: reqwest::StatusCode, content: &str) -> TestResult {
        let response = resp_from_code_content(code, content)?;
        let response = super::to_http_response::<serde_json::Value>(response).await?;
        let body = response.into_body();
        assert!(
            body.is_null() || body == serde_json::json!({}),
            "{body:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn client_bad_content() -> TestResult {
        let response = resp_from_code_content(reqwest::StatusCode::OK, "{not json")?;
        let err = super::to_http_response::<serde_json::Value>(response)
            .await
            .expect_err("malformed JSON");
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn client_response_headers() -> TestResult {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .header("opc-request-id", "req-456")
            .header("opc-next-page", "page-2")
            .status(200)
            .body(r#"{"items": []}"#.to_string())?;
        let response = super::to_http_response::<serde_json::Value>(http_resp.into()).await?;
        assert_eq!(response.opc_request_id(), Some("req-456"));
        assert_eq!(response.opc_next_page(), Some("page-2"));
        assert_eq!(response.body(), &serde_json::json!({"items": []}));
        Ok(())
    }

    fn resp_from_code_content(
        code: reqwest::StatusCode,
        content: &str,
    ) -> http::Result<reqwest::Response> {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(code)
            .body(content.to_string())?;

        let response: reqwest::Response = http_resp.into();
        Ok(response)
    }
}
