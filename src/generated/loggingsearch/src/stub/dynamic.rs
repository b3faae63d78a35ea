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

/// A dyn-compatible, crate-private version of [super::LogSearch].
#[async_trait::async_trait]
pub trait LogSearch: std::fmt::Debug + Send + Sync {
    async fn search_logs(
        &self,
        req: crate::model::SearchLogsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SearchResponse>>;
}

/// All implementations of [super::LogSearch] also implement [LogSearch].
#[async_trait::async_trait]
impl<T: super::LogSearch> LogSearch for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn search_logs(
        &self,
        req: crate::model::SearchLogsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SearchResponse>> {
        T::search_logs(self, req, options).await
    }
}
