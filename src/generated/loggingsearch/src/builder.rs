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

pub mod log_search {
    use crate::Result;

    /// A builder for [LogSearch][crate::client::LogSearch].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use oci_sdk_loggingsearch::*;
    /// # use builder::log_search::ClientBuilder;
    /// # use client::LogSearch;
    /// let builder: ClientBuilder = LogSearch::builder();
    /// let client = builder
    ///     .with_endpoint("https://logging.us-ashburn-1.oci.oraclecloud.com")
    ///     .with_signer(gax::signer::anonymous())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Signer>;

    pub(crate) mod client {
        use super::super::super::client::LogSearch;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = LogSearch;
            type Credentials = gaxi::options::Signer;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::LogSearch] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::LogSearch>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogSearch>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [LogSearch::search_logs][crate::client::LogSearch::search_logs] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use oci_sdk_loggingsearch::builder;
    /// use builder::log_search::SearchLogs;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> SearchLogs {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct SearchLogs(RequestBuilder<crate::model::SearchLogsRequest>);

    impl SearchLogs {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogSearch>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::SearchLogsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::SearchLogsResponse> {
            self.0.request.validate()?;
            (*self.0.stub)
                .search_logs(self.0.request, self.0.options)
                .await
                .map(crate::model::SearchLogsResponse::from)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::SearchLogsResponse, gax::error::Error> {
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
        ) -> gax::paginator::ItemPaginator<crate::model::SearchResult, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [search_logs_details][crate::model::SearchLogsRequest::search_logs_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_search_logs_details<T: std::convert::Into<crate::model::SearchLogsDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.search_logs_details = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::SearchLogsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::SearchLogsRequest::page].
        pub fn set_page<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for SearchLogs {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
