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

pub mod operations_insights {
    use crate::Result;

    /// A builder for [OperationsInsights][crate::client::OperationsInsights].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use oci_sdk_opsi::*;
    /// # use builder::operations_insights::ClientBuilder;
    /// # use client::OperationsInsights;
    /// let builder: ClientBuilder = OperationsInsights::builder();
    /// let client = builder
    ///     .with_endpoint("https://operationsinsights.us-ashburn-1.oci.oraclecloud.com")
    ///     .with_signer(gax::signer::anonymous())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Signer>;

    pub(crate) mod client {
        use super::super::super::client::OperationsInsights;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = OperationsInsights;
            type Credentials = gaxi::options::Signer;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::OperationsInsights] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::OperationsInsights>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::OperationsInsights>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [OperationsInsights::get_database_insight][crate::client::OperationsInsights::get_database_insight] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use oci_sdk_opsi::builder;
    /// use builder::operations_insights::GetDatabaseInsight;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetDatabaseInsight {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetDatabaseInsight(RequestBuilder<crate::model::GetDatabaseInsightRequest>);

    impl GetDatabaseInsight {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::OperationsInsights>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetDatabaseInsightRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DatabaseInsight> {
            self.0.request.validate()?;
            (*self.0.stub)
                .get_database_insight(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [database_insight_id][crate::model::GetDatabaseInsightRequest::database_insight_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_database_insight_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.database_insight_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetDatabaseInsight {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [OperationsInsights::list_database_insights][crate::client::OperationsInsights::list_database_insights] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use oci_sdk_opsi::builder;
    /// use builder::operations_insights::ListDatabaseInsights;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListDatabaseInsights {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListDatabaseInsights(RequestBuilder<crate::model::ListDatabaseInsightsRequest>);

    impl ListDatabaseInsights {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::OperationsInsights>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListDatabaseInsightsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListDatabaseInsightsResponse> {
            self.0.request.validate()?;
            (*self.0.stub)
                .list_database_insights(self.0.request, self.0.options)
                .await
                .map(crate::model::ListDatabaseInsightsResponse::from)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::ListDatabaseInsightsResponse,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = (!token.is_empty()).then_some(token);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::DatabaseInsightSummary,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [compartment_id][crate::model::ListDatabaseInsightsRequest::compartment_id].
        pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [enterprise_manager_bridge_id][crate::model::ListDatabaseInsightsRequest::enterprise_manager_bridge_id].
        pub fn set_enterprise_manager_bridge_id<T: std::convert::Into<String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.enterprise_manager_bridge_id = Some(v.into());
            self
        }

        /// Sets the value of [id][crate::model::ListDatabaseInsightsRequest::id].
        pub fn set_id<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<String>,
        {
            use std::iter::Iterator;
            self.0.request.id = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [status][crate::model::ListDatabaseInsightsRequest::status].
        pub fn set_status<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::ResourceStatus>,
        {
            use std::iter::Iterator;
            self.0.request.status = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [lifecycle_state][crate::model::ListDatabaseInsightsRequest::lifecycle_state].
        pub fn set_lifecycle_state<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::LifecycleState>,
        {
            use std::iter::Iterator;
            self.0.request.lifecycle_state = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [database_type][crate::model::ListDatabaseInsightsRequest::database_type].
        pub fn set_database_type<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<String>,
        {
            use std::iter::Iterator;
            self.0.request.database_type = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [database_id][crate::model::ListDatabaseInsightsRequest::database_id].
        pub fn set_database_id<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<String>,
        {
            use std::iter::Iterator;
            self.0.request.database_id = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [exadata_insight_id][crate::model::ListDatabaseInsightsRequest::exadata_insight_id].
        pub fn set_exadata_insight_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.exadata_insight_id = Some(v.into());
            self
        }

        /// Sets the value of [opsi_private_endpoint_id][crate::model::ListDatabaseInsightsRequest::opsi_private_endpoint_id].
        pub fn set_opsi_private_endpoint_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.opsi_private_endpoint_id = Some(v.into());
            self
        }

        /// Sets the value of [compartment_id_in_subtree][crate::model::ListDatabaseInsightsRequest::compartment_id_in_subtree].
        pub fn set_compartment_id_in_subtree<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.compartment_id_in_subtree = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListDatabaseInsightsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListDatabaseInsightsRequest::page].
        pub fn set_page<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListDatabaseInsightsRequest::sort_order].
        pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListDatabaseInsightsRequest::sort_by].
        pub fn set_sort_by<T: std::convert::Into<crate::model::DatabaseInsightSortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListDatabaseInsights {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [OperationsInsights::list_host_configurations][crate::client::OperationsInsights::list_host_configurations] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use oci_sdk_opsi::builder;
    /// use builder::operations_insights::ListHostConfigurations;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListHostConfigurations {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListHostConfigurations(RequestBuilder<crate::model::ListHostConfigurationsRequest>);

    impl ListHostConfigurations {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::OperationsInsights>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListHostConfigurationsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListHostConfigurationsResponse> {
            self.0.request.validate()?;
            (*self.0.stub)
                .list_host_configurations(self.0.request, self.0.options)
                .await
                .map(crate::model::ListHostConfigurationsResponse::from)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::ListHostConfigurationsResponse,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = (!token.is_empty()).then_some(token);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::HostConfigurationSummary,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [compartment_id][crate::model::ListHostConfigurationsRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [enterprise_manager_bridge_id][crate::model::ListHostConfigurationsRequest::enterprise_manager_bridge_id].
        pub fn set_enterprise_manager_bridge_id<T: std::convert::Into<String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.enterprise_manager_bridge_id = Some(v.into());
            self
        }

        /// Sets the value of [id][crate::model::ListHostConfigurationsRequest::id].
        pub fn set_id<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<String>,
        {
            use std::iter::Iterator;
            self.0.request.id = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [exadata_insight_id][crate::model::ListHostConfigurationsRequest::exadata_insight_id].
        pub fn set_exadata_insight_id<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<String>,
        {
            use std::iter::Iterator;
            self.0.request.exadata_insight_id = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [platform_type][crate::model::ListHostConfigurationsRequest::platform_type].
        pub fn set_platform_type<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::PlatformType>,
        {
            use std::iter::Iterator;
            self.0.request.platform_type = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [host_type][crate::model::ListHostConfigurationsRequest::host_type].
        pub fn set_host_type<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<String>,
        {
            use std::iter::Iterator;
            self.0.request.host_type = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [host_id][crate::model::ListHostConfigurationsRequest::host_id].
        pub fn set_host_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.host_id = Some(v.into());
            self
        }

        /// Sets the value of [compartment_id_in_subtree][crate::model::ListHostConfigurationsRequest::compartment_id_in_subtree].
        pub fn set_compartment_id_in_subtree<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.compartment_id_in_subtree = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListHostConfigurationsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListHostConfigurationsRequest::page].
        pub fn set_page<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListHostConfigurationsRequest::sort_order].
        pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListHostConfigurationsRequest::sort_by].
        pub fn set_sort_by<T: std::convert::Into<crate::model::HostConfigurationSortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListHostConfigurations {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [OperationsInsights::query_opsi_data_object_data][crate::client::OperationsInsights::query_opsi_data_object_data] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use oci_sdk_opsi::builder;
    /// use builder::operations_insights::QueryOpsiDataObjectData;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> QueryOpsiDataObjectData {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct QueryOpsiDataObjectData(
        RequestBuilder<crate::model::QueryOpsiDataObjectDataRequest>,
    );

    impl QueryOpsiDataObjectData {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::OperationsInsights>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::QueryOpsiDataObjectDataRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::QueryOpsiDataObjectDataResponse> {
            self.0.request.validate()?;
            (*self.0.stub)
                .query_opsi_data_object_data(self.0.request, self.0.options)
                .await
                .map(crate::model::QueryOpsiDataObjectDataResponse::from)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::QueryOpsiDataObjectDataResponse,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = (!token.is_empty()).then_some(token);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<Vec<serde_json::Value>, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [compartment_id][crate::model::QueryOpsiDataObjectDataRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [query_opsi_data_object_data_details][crate::model::QueryOpsiDataObjectDataRequest::query_opsi_data_object_data_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_query_opsi_data_object_data_details<
            T: std::convert::Into<crate::model::QueryOpsiDataObjectDataDetails>,
        >(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.query_opsi_data_object_data_details = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::QueryOpsiDataObjectDataRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::QueryOpsiDataObjectDataRequest::page].
        pub fn set_page<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for QueryOpsiDataObjectData {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [OperationsInsights::summarize_sql_insights][crate::client::OperationsInsights::summarize_sql_insights] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use oci_sdk_opsi::builder;
    /// use builder::operations_insights::SummarizeSqlInsights;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> SummarizeSqlInsights {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct SummarizeSqlInsights(RequestBuilder<crate::model::SummarizeSqlInsightsRequest>);

    impl SummarizeSqlInsights {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::OperationsInsights>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::SummarizeSqlInsightsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::SqlInsightAggregationCollection> {
            self.0.request.validate()?;
            (*self.0.stub)
                .summarize_sql_insights(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [compartment_id][crate::model::SummarizeSqlInsightsRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [database_type][crate::model::SummarizeSqlInsightsRequest::database_type].
        pub fn set_database_type<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<String>,
        {
            use std::iter::Iterator;
            self.0.request.database_type = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [database_id][crate::model::SummarizeSqlInsightsRequest::database_id].
        pub fn set_database_id<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<String>,
        {
            use std::iter::Iterator;
            self.0.request.database_id = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [id][crate::model::SummarizeSqlInsightsRequest::id].
        pub fn set_id<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<String>,
        {
            use std::iter::Iterator;
            self.0.request.id = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [exadata_insight_id][crate::model::SummarizeSqlInsightsRequest::exadata_insight_id].
        pub fn set_exadata_insight_id<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<String>,
        {
            use std::iter::Iterator;
            self.0.request.exadata_insight_id = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [cdb_name][crate::model::SummarizeSqlInsightsRequest::cdb_name].
        pub fn set_cdb_name<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<String>,
        {
            use std::iter::Iterator;
            self.0.request.cdb_name = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [host_name][crate::model::SummarizeSqlInsightsRequest::host_name].
        pub fn set_host_name<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<String>,
        {
            use std::iter::Iterator;
            self.0.request.host_name = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [database_time_pct_greater_than][crate::model::SummarizeSqlInsightsRequest::database_time_pct_greater_than].
        pub fn set_database_time_pct_greater_than<T: std::convert::Into<f64>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.database_time_pct_greater_than = Some(v.into());
            self
        }

        /// Sets the value of [analysis_time_interval][crate::model::SummarizeSqlInsightsRequest::analysis_time_interval].
        pub fn set_analysis_time_interval<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.analysis_time_interval = Some(v.into());
            self
        }

        /// Sets the value of [time_interval_start][crate::model::SummarizeSqlInsightsRequest::time_interval_start].
        pub fn set_time_interval_start<T: std::convert::Into<time::OffsetDateTime>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.time_interval_start = Some(v.into());
            self
        }

        /// Sets the value of [time_interval_end][crate::model::SummarizeSqlInsightsRequest::time_interval_end].
        pub fn set_time_interval_end<T: std::convert::Into<time::OffsetDateTime>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.time_interval_end = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::SummarizeSqlInsightsRequest::page].
        pub fn set_page<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [compartment_id_in_subtree][crate::model::SummarizeSqlInsightsRequest::compartment_id_in_subtree].
        pub fn set_compartment_id_in_subtree<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.compartment_id_in_subtree = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for SummarizeSqlInsights {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
