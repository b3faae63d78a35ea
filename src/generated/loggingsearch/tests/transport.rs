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

#[cfg(test)]
mod tests {
    use gax::error::binding::BindingError;
    use gax::options::RequestOptionsBuilder;
    use httptest::{Expectation, Server, all_of, matchers::*, responders::*};
    use oci_sdk_loggingsearch::client::LogSearch;
    use oci_sdk_loggingsearch::model;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    const QUERY: &str = r#"search "ocid1.compartment.oc1..abc" | sort by datetime desc"#;

    async fn test_client(server: &Server) -> Result<LogSearch> {
        let client = LogSearch::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_signer(gax::signer::anonymous())
            .build()
            .await?;
        Ok(client)
    }

    fn details() -> Result<model::SearchLogsDetails> {
        let start = time::OffsetDateTime::from_unix_timestamp(1735689600)?;
        let end = time::OffsetDateTime::from_unix_timestamp(1735693200)?;
        Ok(model::SearchLogsDetails::new()
            .set_time_start(start)
            .set_time_end(end)
            .set_search_query(QUERY))
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn search_logs() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/20190909/search"),
                request::query(url_decoded(contains(("limit", "2")))),
                request::headers(contains(("opc-request-id", "caller-req-1"))),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({
                    "timeStart": "2025-01-01T00:00:00Z",
                    "timeEnd": "2025-01-01T01:00:00Z",
                    "searchQuery": QUERY,
                    "isReturnFieldInfo": true,
                })))),
            ])
            .respond_with(json_encoded(json!({
                "results": [
                    {"data": {"logContent": {"data": {"message": "started"}}}},
                    {"data": {"logContent": {"data": {"message": "stopped"}}}},
                ],
                "fields": [
                    {"fieldName": "data.message", "fieldType": "STRING"},
                    {"fieldName": "data.latency", "fieldType": "DURATION"},
                ],
                "summary": {"resultCount": 2, "fieldCount": 2},
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .search_logs()
            .set_search_logs_details(details()?.set_is_return_field_info(true))
            .set_limit(2)
            .with_opc_request_id("caller-req-1")
            .send()
            .await?;
        assert_eq!(got.opc_next_page, None);
        let response = got.search_response;
        assert_eq!(response.results.len(), 2);
        assert_eq!(
            response.results[0]
                .data
                .as_ref()
                .and_then(|d| d.pointer("/logContent/data/message")),
            Some(&json!("started"))
        );
        assert_eq!(response.fields[0].field_type, Some(model::FieldType::String));
        let unknown = response.fields[1].field_type.clone().expect("the type is set");
        assert!(unknown.is_unknown(), "{unknown:?}");
        assert_eq!(response.summary.and_then(|s| s.result_count), Some(2));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn search_logs_by_item() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/20190909/search"),
                request::query(url_decoded(not(contains(key("page"))))),
            ])
            .respond_with(
                status_code(200)
                    .append_header("opc-next-page", "page-2")
                    .body(json!({"results": [{"data": 1}, {"data": 2}]}).to_string()),
            ),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/20190909/search"),
                request::query(url_decoded(contains(("page", "page-2")))),
                request::body(json_decoded(eq(json!({
                    "timeStart": "2025-01-01T00:00:00Z",
                    "timeEnd": "2025-01-01T01:00:00Z",
                    "searchQuery": QUERY,
                })))),
            ])
            .respond_with(json_encoded(json!({"results": [{"data": 3}]}))),
        );

        let client = test_client(&server).await?;
        let mut results = client
            .search_logs()
            .set_search_logs_details(details()?)
            .by_item();
        let mut got = Vec::new();
        while let Some(result) = results.next().await {
            got.push(result?.data.unwrap_or_default());
        }
        assert_eq!(got, vec![json!(1), json!(2), json!(3)]);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn search_logs_missing_fields() -> Result<()> {
        // No expectations, the requests must fail before reaching the server.
        let server = Server::run();
        let client = test_client(&server).await?;

        let err = client
            .search_logs()
            .send()
            .await
            .expect_err("the details are required");
        assert_eq!(
            err.as_binding(),
            Some(&BindingError::MissingRequiredParameter("searchLogsDetails"))
        );

        let err = client
            .search_logs()
            .set_search_logs_details(model::SearchLogsDetails::new().set_search_query(QUERY))
            .send()
            .await
            .expect_err("the time range is required");
        assert_eq!(
            err.as_binding(),
            Some(&BindingError::MissingRequiredParameter("timeStart"))
        );

        let start = time::OffsetDateTime::from_unix_timestamp(1735689600)?;
        let err = client
            .search_logs()
            .set_search_logs_details(
                model::SearchLogsDetails::new()
                    .set_time_start(start)
                    .set_time_end(start)
                    .set_search_query(""),
            )
            .send()
            .await
            .expect_err("the query cannot be empty");
        assert_eq!(
            err.as_binding(),
            Some(&BindingError::MissingRequiredParameter("searchQuery"))
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn search_logs_bad_request() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/20190909/search")).respond_with(
                status_code(400)
                    .append_header("opc-request-id", "req-400")
                    .body(
                        json!({"code": "InvalidParameter", "message": "invalid search query"})
                            .to_string(),
                    ),
            ),
        );

        let client = test_client(&server).await?;
        let err = client
            .search_logs()
            .set_search_logs_details(details()?)
            .send()
            .await
            .expect_err("the service rejects the query");
        assert_eq!(err.http_status_code(), Some(400));
        let status = err.status().expect("the error has service details");
        assert_eq!(status.code, "InvalidParameter");
        assert_eq!(status.opc_request_id.as_deref(), Some("req-400"));
        Ok(())
    }

    #[test]
    fn details_default_and_aliases() -> Result<()> {
        let wire = binding::from_value::<model::SearchLogsDetails>(json!({
            "timeStart": "2025-01-01T00:00:00Z",
            "timeEnd": "2025-01-01T01:00:00Z",
            "searchQuery": QUERY,
        }))?;
        assert_eq!(wire.is_return_field_info, Some(false));
        let alias = binding::from_value::<model::SearchLogsDetails>(json!({
            "time_start": "2025-01-01T00:00:00Z",
            "time_end": "2025-01-01T01:00:00Z",
            "search_query": QUERY,
            "is_return_field_info": false,
        }))?;
        assert_eq!(wire, alias);
        assert_eq!(wire, details()?.set_is_return_field_info(false));

        let err = binding::from_value::<model::SearchLogsDetails>(json!({
            "searchQuery": QUERY,
            "search_query": QUERY,
        }))
        .expect_err("both names for the same field");
        assert!(err.is_conflict(), "{err:?}");
        Ok(())
    }
}
