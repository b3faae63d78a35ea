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
use gax::error::Error;
use gaxi::query_parameter::QueryParameter;

/// Implements [OperationsInsights](super::stub::OperationsInsights) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct OperationsInsights {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for OperationsInsights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("OperationsInsights")
            .field("inner", &self.inner)
            .finish()
    }
}

impl OperationsInsights {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::ENDPOINT_TEMPLATE).await?;
        Ok(Self { inner })
    }
}

impl super::stub::OperationsInsights for OperationsInsights {
    async fn get_database_insight(
        &self,
        req: crate::model::GetDatabaseInsightRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DatabaseInsight>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let database_insight_id = gaxi::path_parameter::required(
            req.database_insight_id.as_deref(),
            "databaseInsightId",
        )?;
        let path = format!(
            "/20200630/databaseInsights/{}",
            gaxi::path_parameter::encode(database_insight_id),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        self.inner.execute(builder, None::<gaxi::http::NoBody>, options).await
    }

    async fn list_database_insights(
        &self,
        req: crate::model::ListDatabaseInsightsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DatabaseInsightsCollection>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = "/20200630/databaseInsights".to_string();
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.compartment_id.add(builder, "compartmentId");
        let builder = req.enterprise_manager_bridge_id.add(builder, "enterpriseManagerBridgeId");
        let builder = req.id.add(builder, "id");
        let builder = req.status.add(builder, "status");
        let builder = req.lifecycle_state.add(builder, "lifecycleState");
        let builder = req.database_type.add(builder, "databaseType");
        let builder = req.database_id.add(builder, "databaseId");
        let builder = req.exadata_insight_id.add(builder, "exadataInsightId");
        let builder = req.opsi_private_endpoint_id.add(builder, "opsiPrivateEndpointId");
        let builder = req.compartment_id_in_subtree.add(builder, "compartmentIdInSubtree");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.add(builder, "sortOrder");
        let builder = req.sort_by.add(builder, "sortBy");
        self.inner.execute(builder, None::<gaxi::http::NoBody>, options).await
    }

    async fn list_host_configurations(
        &self,
        req: crate::model::ListHostConfigurationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::HostConfigurationCollection>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = "/20200630/hostInsights/hostConfigurations".to_string();
        gaxi::path_parameter::required(req.compartment_id.as_deref(), "compartmentId")?;
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.compartment_id.add(builder, "compartmentId");
        let builder = req.enterprise_manager_bridge_id.add(builder, "enterpriseManagerBridgeId");
        let builder = req.id.add(builder, "id");
        let builder = req.exadata_insight_id.add(builder, "exadataInsightId");
        let builder = req.platform_type.add(builder, "platformType");
        let builder = req.host_type.add(builder, "hostType");
        let builder = req.host_id.add(builder, "hostId");
        let builder = req.compartment_id_in_subtree.add(builder, "compartmentIdInSubtree");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.add(builder, "sortOrder");
        let builder = req.sort_by.add(builder, "sortBy");
        self.inner.execute(builder, None::<gaxi::http::NoBody>, options).await
    }

    async fn query_opsi_data_object_data(
        &self,
        req: crate::model::QueryOpsiDataObjectDataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::QueryDataObjectResultSetRowsCollection>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = "/20200630/opsiDataObjects/actions/queryData".to_string();
        gaxi::path_parameter::required(req.compartment_id.as_deref(), "compartmentId")?;
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = req.compartment_id.add(builder, "compartmentId");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let body = req
            .query_opsi_data_object_data_details
            .ok_or_else(|| gaxi::path_parameter::missing("queryOpsiDataObjectDataDetails"))?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn summarize_sql_insights(
        &self,
        req: crate::model::SummarizeSqlInsightsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SqlInsightAggregationCollection>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = "/20200630/databaseInsights/sqlInsights".to_string();
        gaxi::path_parameter::required(req.compartment_id.as_deref(), "compartmentId")?;
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.compartment_id.add(builder, "compartmentId");
        let builder = req.database_type.add(builder, "databaseType");
        let builder = req.database_id.add(builder, "databaseId");
        let builder = req.id.add(builder, "id");
        let builder = req.exadata_insight_id.add(builder, "exadataInsightId");
        let builder = req.cdb_name.add(builder, "cdbName");
        let builder = req.host_name.add(builder, "hostName");
        let builder = req.database_time_pct_greater_than.add(builder, "databaseTimePctGreaterThan");
        let builder = req.analysis_time_interval.add(builder, "analysisTimeInterval");
        let builder = req
            .time_interval_start
            .as_ref()
            .map(binding::datetime::format)
            .transpose()
            .map_err(Error::ser)?
            .add(builder, "timeIntervalStart");
        let builder = req
            .time_interval_end
            .as_ref()
            .map(binding::datetime::format)
            .transpose()
            .map_err(Error::ser)?
            .add(builder, "timeIntervalEnd");
        let builder = req.page.add(builder, "page");
        let builder = req.compartment_id_in_subtree.add(builder, "compartmentIdInSubtree");
        self.inner.execute(builder, None::<gaxi::http::NoBody>, options).await
    }
}
