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

/// Implements a [OperationsInsights](super::stub::OperationsInsights) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct OperationsInsights<T>
where
    T: super::stub::OperationsInsights + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> OperationsInsights<T>
where
    T: super::stub::OperationsInsights + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::OperationsInsights for OperationsInsights<T>
where
    T: super::stub::OperationsInsights + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn get_database_insight(
        &self,
        req: crate::model::GetDatabaseInsightRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DatabaseInsight>> {
        self.inner.get_database_insight(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_database_insights(
        &self,
        req: crate::model::ListDatabaseInsightsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DatabaseInsightsCollection>> {
        self.inner.list_database_insights(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_host_configurations(
        &self,
        req: crate::model::ListHostConfigurationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::HostConfigurationCollection>> {
        self.inner.list_host_configurations(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn query_opsi_data_object_data(
        &self,
        req: crate::model::QueryOpsiDataObjectDataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::QueryDataObjectResultSetRowsCollection>> {
        self.inner.query_opsi_data_object_data(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn summarize_sql_insights(
        &self,
        req: crate::model::SummarizeSqlInsightsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SqlInsightAggregationCollection>> {
        self.inner.summarize_sql_insights(req, options).await
    }
}
