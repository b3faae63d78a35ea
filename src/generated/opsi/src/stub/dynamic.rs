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

/// A dyn-compatible, crate-private version of [super::OperationsInsights].
#[async_trait::async_trait]
pub trait OperationsInsights: std::fmt::Debug + Send + Sync {
    async fn get_database_insight(
        &self,
        req: crate::model::GetDatabaseInsightRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DatabaseInsight>>;

    async fn list_database_insights(
        &self,
        req: crate::model::ListDatabaseInsightsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DatabaseInsightsCollection>>;

    async fn list_host_configurations(
        &self,
        req: crate::model::ListHostConfigurationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::HostConfigurationCollection>>;

    async fn query_opsi_data_object_data(
        &self,
        req: crate::model::QueryOpsiDataObjectDataRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<crate::model::QueryDataObjectResultSetRowsCollection>,
    >;

    async fn summarize_sql_insights(
        &self,
        req: crate::model::SummarizeSqlInsightsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SqlInsightAggregationCollection>>;
}

/// All implementations of [super::OperationsInsights] also implement [OperationsInsights].
#[async_trait::async_trait]
impl<T: super::OperationsInsights> OperationsInsights for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn get_database_insight(
        &self,
        req: crate::model::GetDatabaseInsightRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DatabaseInsight>> {
        T::get_database_insight(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_database_insights(
        &self,
        req: crate::model::ListDatabaseInsightsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DatabaseInsightsCollection>> {
        T::list_database_insights(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_host_configurations(
        &self,
        req: crate::model::ListHostConfigurationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::HostConfigurationCollection>> {
        T::list_host_configurations(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn query_opsi_data_object_data(
        &self,
        req: crate::model::QueryOpsiDataObjectDataRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<crate::model::QueryDataObjectResultSetRowsCollection>,
    > {
        T::query_opsi_data_object_data(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn summarize_sql_insights(
        &self,
        req: crate::model::SummarizeSqlInsightsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SqlInsightAggregationCollection>> {
        T::summarize_sql_insights(self, req, options).await
    }
}
