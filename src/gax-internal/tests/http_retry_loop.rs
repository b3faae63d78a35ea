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

//! The transport's retry loop against a server that replays a fixed list of
//! responses, one per attempt.

#[cfg(all(test, feature = "_internal-http-client"))]
mod tests {
    use gax::backoff_policy::{ExponentialBackoff, Jitter};
    use gax::options::*;
    use gax::retry_policy::{INCORRECT_STATE, NeverRetry, RetryConfiguration};
    use http::StatusCode;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use oci_sdk_gax_internal::http::{NoBody, ReqwestClient};
    use oci_sdk_gax_internal::options::ClientConfig;
    use serde_json::json;
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_no_retry_immediate_success() -> Result<()> {
        let server = start(vec![success()]);
        let client = ReqwestClient::new(test_config(&server), "unused").await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());

        let response = client
            .execute::<NoBody, serde_json::Value>(builder, None, idempotent_options())
            .await?;
        assert_eq!(response.into_body(), json!({"status": "done"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_no_retry_immediate_failure() -> Result<()> {
        let server = start(vec![permanent()]);
        let client = ReqwestClient::new(test_config(&server), "unused").await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());

        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None, idempotent_options())
            .await
            .expect_err("permanent errors are not retried");
        assert_eq!(err.http_status_code(), Some(permanent().0.as_u16()));
        assert_eq!(
            err.status().map(|s| s.code.as_str()),
            Some("InvalidParameter")
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_retry_success() -> Result<()> {
        // Two transient errors and then success.
        let server = start(vec![transient(), transient(), success()]);
        let client = ReqwestClient::new(test_config(&server), "unused").await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());

        let response = client
            .execute::<NoBody, serde_json::Value>(builder, None, idempotent_options())
            .await?;
        assert_eq!(response.into_body(), json!({"status": "done"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_retry_with_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/retry"),
                request::body(json_decoded(eq(json!({"searchQuery": "search \"ocid1.log\""})))),
            ])
            .times(2)
            .respond_with(cycle(vec![
                to_responder(transient().0, transient().1),
                to_responder(success().0, success().1),
            ])),
        );
        let client = ReqwestClient::new(test_config(&server), "unused").await?;
        let builder = client.builder(reqwest::Method::POST, "/retry".into());

        let body = json!({"searchQuery": "search \"ocid1.log\""});
        let response = client
            .execute::<serde_json::Value, serde_json::Value>(
                builder,
                Some(body),
                idempotent_options(),
            )
            .await?;
        assert_eq!(response.into_body(), json!({"status": "done"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_not_idempotent() -> Result<()> {
        let server = start(vec![transient()]);
        let client = ReqwestClient::new(test_config(&server), "unused").await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());

        let options = {
            let mut options = idempotent_options();
            options.set_idempotency(false);
            options
        };
        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None, options)
            .await
            .expect_err("non-idempotent requests are not retried");
        assert_eq!(err.http_status_code(), Some(transient().0.as_u16()));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_too_many_transients() -> Result<()> {
        let server = start(vec![transient(), transient(), transient()]);
        let client = ReqwestClient::new(test_config(&server), "unused").await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());

        let options = {
            let mut options = idempotent_options();
            options.set_retry_policy(RetryConfiguration::new().with_max_attempts(3));
            options
        };
        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None, options)
            .await
            .expect_err("the retry policy is exhausted");
        assert!(err.is_exhausted(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_from_client_config() -> Result<()> {
        let server = start(vec![transient(), success()]);
        let mut config = test_config(&server);
        config.retry_policy = Some(std::sync::Arc::new(
            RetryConfiguration::new().with_max_attempts(2),
        ));
        config.backoff_policy = Some(std::sync::Arc::new(test_backoff()));
        let client = ReqwestClient::new(config, "unused").await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());

        let options = {
            let mut options = RequestOptions::default();
            options.set_idempotency(true);
            options
        };
        let response = client
            .execute::<NoBody, serde_json::Value>(builder, None, options)
            .await?;
        assert_eq!(response.into_body(), json!({"status": "done"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_not_idempotent_throttled() -> Result<()> {
        // Throttled requests never took effect, they are retried even if the
        // operation is not idempotent.
        let server = start(vec![throttled(), success()]);
        let client = ReqwestClient::new(test_config(&server), "unused").await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());

        let mut options = idempotent_options();
        options.set_idempotency(false);
        let response = client
            .execute::<NoBody, serde_json::Value>(builder, None, options)
            .await?;
        assert_eq!(response.into_body(), json!({"status": "done"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_incorrect_state() -> Result<()> {
        let server = start(vec![incorrect_state(), incorrect_state(), success()]);
        let client = ReqwestClient::new(test_config(&server), "unused").await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());

        let response = client
            .execute::<NoBody, serde_json::Value>(builder, None, idempotent_options())
            .await?;
        assert_eq!(response.into_body(), json!({"status": "done"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_request_overrides_client() -> Result<()> {
        let server = start(vec![transient()]);
        let mut config = test_config(&server);
        config.retry_policy = Some(std::sync::Arc::new(RetryConfiguration::new()));
        config.backoff_policy = Some(std::sync::Arc::new(test_backoff()));
        let client = ReqwestClient::new(config, "unused").await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());

        let mut options = RequestOptions::default();
        options.set_idempotency(true);
        options.set_retry_policy(NeverRetry);
        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None, options)
            .await
            .expect_err("the request disables retries");
        assert_eq!(err.http_status_code(), Some(503));
        assert!(!err.is_exhausted(), "{err:?}");
        Ok(())
    }

    fn success() -> (StatusCode, String) {
        let response = json!({"status": "done"});
        (StatusCode::OK, response.to_string())
    }

    fn transient() -> (StatusCode, String) {
        let response = json!({
            "code": "ServiceUnavailable",
            "message": "try-again",
        });
        (StatusCode::SERVICE_UNAVAILABLE, response.to_string())
    }

    fn throttled() -> (StatusCode, String) {
        let response = json!({
            "code": "TooManyRequests",
            "message": "slow down",
        });
        (StatusCode::TOO_MANY_REQUESTS, response.to_string())
    }

    fn incorrect_state() -> (StatusCode, String) {
        let response = json!({
            "code": INCORRECT_STATE,
            "message": "the resource is updating",
        });
        (StatusCode::CONFLICT, response.to_string())
    }

    fn permanent() -> (StatusCode, String) {
        let response = json!({
            "code": "InvalidParameter",
            "message": "uh-oh",
        });
        (StatusCode::BAD_REQUEST, response.to_string())
    }

    fn idempotent_options() -> RequestOptions {
        let mut options = RequestOptions::default();
        options.set_retry_policy(RetryConfiguration::new().with_max_attempts(5));
        options.set_backoff_policy(test_backoff());
        options.set_idempotency(true);
        options
    }

    fn test_config(server: &Server) -> ClientConfig {
        let mut config = ClientConfig::default();
        config.endpoint = Some(format!("http://{}", server.addr()));
        config.cred = Some(gax::signer::anonymous());
        config
    }

    fn test_backoff() -> ExponentialBackoff {
        ExponentialBackoff::new(Duration::from_millis(1), Duration::from_millis(1))
            .expect("hard-coded policy succeeds")
            .with_jitter(Jitter::None)
    }

    fn start(responses: Vec<(StatusCode, String)>) -> Server {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/retry"))
                .times(responses.len())
                .respond_with(cycle(
                    responses
                        .into_iter()
                        .map(|(status, body)| to_responder(status, body))
                        .collect(),
                )),
        );
        server
    }

    fn to_responder(status: StatusCode, response: String) -> Box<dyn Responder> {
        Box::new(
            status_code(status.as_u16())
                .insert_header("Content-Type", "application/json")
                .body(response.to_string()),
        )
    }
}
