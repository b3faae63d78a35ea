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

use crate::Result;
use gaxi::query_parameter::QueryParameter;

/// Implements [LogSearch](super::stub::LogSearch) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct LogSearch {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for LogSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("LogSearch")
            .field("inner", &self.inner)
            .finish()
    }
}

impl LogSearch {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::ENDPOINT_TEMPLATE).await?;
        Ok(Self { inner })
    }
}

impl super::stub::LogSearch for LogSearch {
    async fn search_logs(
        &self,
        req: crate::model::SearchLogsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SearchResponse>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = "/20190909/search".to_string();
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let body = req
            .search_logs_details
            .ok_or_else(|| gaxi::path_parameter::missing("searchLogsDetails"))?;
        self.inner.execute(builder, Some(body), options).await
    }
}
