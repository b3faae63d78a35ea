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

/// Implements a [LogSearch](super::stub::LogSearch) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct LogSearch<T>
where
    T: super::stub::LogSearch + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> LogSearch<T>
where
    T: super::stub::LogSearch + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::LogSearch for LogSearch<T>
where
    T: super::stub::LogSearch + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn search_logs(
        &self,
        req: crate::model::SearchLogsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SearchResponse>> {
        self.inner.search_logs(req, options).await
    }
}
