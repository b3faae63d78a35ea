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
mod mocking {
    use gax::options::RequestOptions;
    use gax::response::{Parts, Response};
    use oci_sdk_loggingsearch::client::LogSearch;
    use oci_sdk_loggingsearch::model;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    mockall::mock! {
        #[derive(Debug)]
        LogSearch {}
        impl oci_sdk_loggingsearch::stub::LogSearch for LogSearch {
            async fn search_logs(&self, req: model::SearchLogsRequest, _options: RequestOptions) -> gax::Result<Response<model::SearchResponse>>;
        }
    }

    fn page(data: &[i64], next: Option<&str>) -> Response<model::SearchResponse> {
        let mut headers = http::HeaderMap::new();
        if let Some(next) = next {
            headers.insert(
                gax::OPC_NEXT_PAGE,
                http::HeaderValue::from_str(next).expect("test tokens are valid headers"),
            );
        }
        let results = data.iter().map(|d| model::SearchResult::new().set_data(json!(d)));
        let body = model::SearchResponse::new().set_results(results);
        Response::from_parts(Parts::new().set_headers(headers), body)
    }

    fn details() -> Result<model::SearchLogsDetails> {
        let end = time::OffsetDateTime::from_unix_timestamp(1735693200)?;
        Ok(model::SearchLogsDetails::new()
            .set_time_start(end - time::Duration::hours(1))
            .set_time_end(end)
            .set_search_query("search \"ocid1.compartment.oc1..abc\""))
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn search_logs_by_page() -> Result<()> {
        let mut mock = MockLogSearch::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_search_logs()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.page.is_none() && r.limit == Some(2))
            .return_once(|_, _| Ok(page(&[1, 2], Some("p2"))));
        mock.expect_search_logs()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.page.as_deref() == Some("p2") && r.limit == Some(2))
            .return_once(|_, _| Ok(page(&[3], None)));

        let client = LogSearch::from_stub(mock);
        let mut pages = client
            .search_logs()
            .set_search_logs_details(details()?)
            .set_limit(2)
            .by_page();
        let mut tokens = Vec::new();
        let mut count = 0;
        while let Some(response) = pages.next().await {
            let response = response?;
            count += response.search_response.results.len();
            tokens.push(response.opc_next_page);
        }
        assert_eq!(count, 3);
        assert_eq!(tokens, vec![Some("p2".to_string()), None]);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn search_logs_keeps_details() -> Result<()> {
        let want = details()?;
        let mut mock = MockLogSearch::new();
        let expected = want.clone();
        mock.expect_search_logs()
            .withf(move |r, _| r.search_logs_details.as_ref() == Some(&expected))
            .return_once(|_, _| Ok(page(&[], None)));

        let client = LogSearch::from_stub(mock);
        let got = client
            .search_logs()
            .set_search_logs_details(want)
            .send()
            .await?;
        assert!(got.search_response.results.is_empty(), "{got:?}");
        assert_eq!(got.opc_next_page, None);
        Ok(())
    }

    static_assertions::assert_impl_all!(LogSearch: Clone, Send, Sync, std::fmt::Debug);
}
