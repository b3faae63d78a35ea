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

//! Contains the LogSearch client and related types.

#![allow(rustdoc::broken_intra_doc_links)]

/// Implements a client for the Logging Search API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use oci_sdk_loggingsearch::client::LogSearch;
/// let client = LogSearch::builder()
///     .with_region("eu-frankfurt-1")
///     .with_signer(gax::signer::anonymous())
///     .build()
///     .await?;
/// // use `client` to make requests to the Logging Search API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Logging Search runs queries over the logs collected by the Logging
/// service, across log groups and compartments.
///
/// # Configuration
///
/// To configure `LogSearch` use the `with_*` methods in the type returned by
/// [builder()][LogSearch::builder]. Every client needs a request signer, set
/// with `with_signer()`.
///
/// # Pooling and Cloning
///
/// `LogSearch` holds a connection pool internally, it is advised to create one
/// and reuse it. You do not need to wrap `LogSearch` in an [Rc](std::rc::Rc)
/// or [Arc](std::sync::Arc) to reuse it, because it already uses an `Arc`
/// internally.
#[derive(Clone, Debug)]
pub struct LogSearch {
    inner: std::sync::Arc<dyn super::stub::dynamic::LogSearch>,
}

impl LogSearch {
    /// Returns a builder for [LogSearch].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use oci_sdk_loggingsearch::client::LogSearch;
    /// let client = LogSearch::builder()
    ///     .with_region("us-ashburn-1")
    ///     .with_signer(gax::signer::anonymous())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::log_search::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::log_search::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::LogSearch + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::LogSearch>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::LogSearch> {
        super::transport::LogSearch::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::LogSearch> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::LogSearch::new)
    }

    /// Searches the logs in a time range.
    pub fn search_logs(&self) -> super::builder::log_search::SearchLogs {
        super::builder::log_search::SearchLogs::new(self.inner.clone())
    }
}
