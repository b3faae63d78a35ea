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

//! Verify the HTTP client signs each request and sends the common headers.

#[cfg(all(test, feature = "_internal-http-client"))]
mod tests {
    use gax::options::RequestOptions;
    use gax::options::internal::set_signing_strategy;
    use gax::signer::{SignerProvider, SigningRequest, SigningStrategy, StaticHeaders};
    use http::{HeaderMap, HeaderValue};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use oci_sdk_gax_internal::http::{NoBody, ReqwestClient};
    use oci_sdk_gax_internal::options::ClientConfig;
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    /// Reports what it was asked to sign in the headers it returns.
    #[derive(Debug)]
    struct EchoSigner;

    impl SignerProvider for EchoSigner {
        async fn headers(&self, request: &SigningRequest<'_>) -> gax::Result<HeaderMap> {
            let path = request
                .url
                .split_once("://")
                .and_then(|(_, rest)| rest.find('/').map(|i| rest[i..].to_string()))
                .unwrap_or_default();
            let body = request
                .signed_body()
                .map(|b| b.len().to_string())
                .unwrap_or_else(|| "none".to_string());
            let mut headers = HeaderMap::new();
            headers.insert(
                "authorization",
                HeaderValue::from_str(&format!(
                    "Signature method={} target={path}",
                    request.method.as_str().to_lowercase()
                ))
                .map_err(gax::error::Error::authentication)?,
            );
            headers.insert(
                "x-signed-body",
                HeaderValue::from_str(&body).map_err(gax::error::Error::authentication)?,
            );
            Ok(headers)
        }
    }

    #[derive(Debug)]
    struct FailingSigner;

    impl SignerProvider for FailingSigner {
        async fn headers(&self, _request: &SigningRequest<'_>) -> gax::Result<HeaderMap> {
            Err(gax::error::Error::authentication("the key file is missing"))
        }
    }

    fn test_config(server: &Server, signer: gax::signer::Signer) -> ClientConfig {
        let mut config = ClientConfig::default();
        config.endpoint = Some(format!("http://{}", server.addr()));
        config.cred = Some(signer);
        config
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn signs_request_with_body() -> Result<()> {
        let body = json!({"searchQuery": "search \"ocid1.log\""});
        let len = serde_json::to_vec(&body)?.len().to_string();
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/20190909/search"),
                request::query(url_decoded(contains(("limit", "10")))),
                request::headers(contains((
                    "authorization",
                    "Signature method=post target=/20190909/search?limit=10"
                ))),
                request::headers(contains(("x-signed-body", eq(len)))),
                request::headers(contains(("content-type", "application/json"))),
            ])
            .respond_with(json_encoded(json!({"summary": {"resultCount": 0}}))),
        );

        let client = ReqwestClient::new(test_config(&server, EchoSigner.into()), "unused").await?;
        let builder = client
            .builder(reqwest::Method::POST, "/20190909/search".into())
            .query(&[("limit", 10)]);
        let response = client
            .execute::<serde_json::Value, serde_json::Value>(
                builder,
                Some(body),
                RequestOptions::default(),
            )
            .await?;
        assert_eq!(response.body(), &json!({"summary": {"resultCount": 0}}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn signs_request_excluding_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/object"),
                request::headers(contains(("x-signed-body", "none"))),
            ])
            .respond_with(status_code(200)),
        );

        let client = ReqwestClient::new(test_config(&server, EchoSigner.into()), "unused").await?;
        let builder = client.builder(reqwest::Method::PUT, "/object".into());
        let options = set_signing_strategy(RequestOptions::default(), SigningStrategy::ExcludeBody);
        let response = client
            .execute::<serde_json::Value, serde_json::Value>(builder, Some(json!({"a": 1})), options)
            .await?;
        assert!(response.body().is_null(), "{response:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn static_headers_and_common_headers() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/20220430/configuration"),
                request::headers(contains(("opc-obo-token", "delegated"))),
                request::headers(contains(("opc-request-id", "req-123"))),
                request::headers(contains((
                    "user-agent",
                    matches("^my-app/1.0 oci-sdk-rust/")
                ))),
            ])
            .respond_with(
                status_code(200)
                    .insert_header("opc-request-id", "req-123")
                    .insert_header("etag", "etag-1")
                    .body(r#"{"compartmentId": "ocid1.tenancy"}"#),
            ),
        );

        let signer = StaticHeaders::new([("opc-obo-token", "delegated")])?;
        let client = ReqwestClient::new(test_config(&server, signer.into()), "unused").await?;
        let builder = client.builder(reqwest::Method::GET, "/20220430/configuration".into());
        let mut options = RequestOptions::default();
        options.set_user_agent("my-app/1.0");
        options.set_opc_request_id("req-123");
        let response = client
            .execute::<NoBody, serde_json::Value>(builder, None, options)
            .await?;
        assert_eq!(response.opc_request_id(), Some("req-123"));
        assert_eq!(response.etag(), Some("etag-1"));
        assert_eq!(response.body(), &json!({"compartmentId": "ocid1.tenancy"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn signer_failure_sends_nothing() -> Result<()> {
        let server = Server::run();
        server.expect(Expectation::matching(any()).times(0).respond_with(status_code(200)));

        let client = ReqwestClient::new(test_config(&server, FailingSigner.into()), "unused").await?;
        let builder = client.builder(reqwest::Method::GET, "/unused".into());
        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None, RequestOptions::default())
            .await
            .expect_err("the signer fails");
        assert!(err.is_authentication(), "{err:?}");
        Ok(())
    }
}
