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

//! Contains the OperationsInsights client and related types.

#![allow(rustdoc::broken_intra_doc_links)]

/// Implements a client for the Operations Insights API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use oci_sdk_opsi::client::OperationsInsights;
/// let client = OperationsInsights::builder()
///     .with_region("us-phoenix-1")
///     .with_signer(gax::signer::anonymous())
///     .build()
///     .await?;
/// // use `client` to make requests to the Operations Insights API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Operations Insights analyzes the resource usage and SQL performance of
/// databases and hosts, and exposes the collected data as queryable data
/// objects.
///
/// # Configuration
///
/// To configure `OperationsInsights` use the `with_*` methods in the type
/// returned by [builder()][OperationsInsights::builder]. Every client needs a
/// request signer, set with `with_signer()`.
///
/// # Pooling and Cloning
///
/// `OperationsInsights` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `OperationsInsights` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct OperationsInsights {
    inner: std::sync::Arc<dyn super::stub::dynamic::OperationsInsights>,
}

impl OperationsInsights {
    /// Returns a builder for [OperationsInsights].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use oci_sdk_opsi::client::OperationsInsights;
    /// let client = OperationsInsights::builder()
    ///     .with_region("us-ashburn-1")
    ///     .with_signer(gax::signer::anonymous())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::operations_insights::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::operations_insights::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::OperationsInsights + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::OperationsInsights>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::OperationsInsights> {
        super::transport::OperationsInsights::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::OperationsInsights> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::OperationsInsights::new)
    }

    /// Gets a database insight.
    pub fn get_database_insight(&self) -> super::builder::operations_insights::GetDatabaseInsight {
        super::builder::operations_insights::GetDatabaseInsight::new(self.inner.clone())
    }

    /// Lists the database insights in a compartment.
    pub fn list_database_insights(
        &self,
    ) -> super::builder::operations_insights::ListDatabaseInsights {
        super::builder::operations_insights::ListDatabaseInsights::new(self.inner.clone())
    }

    /// Lists the configuration of the hosts monitored in a compartment.
    pub fn list_host_configurations(
        &self,
    ) -> super::builder::operations_insights::ListHostConfigurations {
        super::builder::operations_insights::ListHostConfigurations::new(self.inner.clone())
    }

    /// Runs a query against an OPSI data object.
    pub fn query_opsi_data_object_data(
        &self,
    ) -> super::builder::operations_insights::QueryOpsiDataObjectData {
        super::builder::operations_insights::QueryOpsiDataObjectData::new(self.inner.clone())
    }

    /// Summarizes the SQL insights of the databases in a compartment.
    pub fn summarize_sql_insights(
        &self,
    ) -> super::builder::operations_insights::SummarizeSqlInsights {
        super::builder::operations_insights::SummarizeSqlInsights::new(self.inner.clone())
    }
}
