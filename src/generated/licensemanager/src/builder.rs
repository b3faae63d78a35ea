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

pub mod license_manager {
    use crate::Result;

    /// A builder for [LicenseManager][crate::client::LicenseManager].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use oci_sdk_licensemanager::*;
    /// # use builder::license_manager::ClientBuilder;
    /// # use client::LicenseManager;
    /// let builder: ClientBuilder = LicenseManager::builder();
    /// let client = builder
    ///     .with_endpoint("https://licensemanager.us-ashburn-1.oci.oraclecloud.com")
    ///     .with_signer(gax::signer::anonymous())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Signer>;

    pub(crate) mod client {
        use super::super::super::client::LicenseManager;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = LicenseManager;
            type Credentials = gaxi::options::Signer;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::LicenseManager] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::LicenseManager>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LicenseManager>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [LicenseManager::create_product_license][crate::client::LicenseManager::create_product_license] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use oci_sdk_licensemanager::builder;
    /// use builder::license_manager::CreateProductLicense;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateProductLicense {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateProductLicense(RequestBuilder<crate::model::CreateProductLicenseRequest>);

    impl CreateProductLicense {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LicenseManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateProductLicenseRequest>>(
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
        pub async fn send(self) -> Result<crate::model::ProductLicense> {
            self.0.request.validate()?;
            (*self.0.stub)
                .create_product_license(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [create_product_license_details][crate::model::CreateProductLicenseRequest::create_product_license_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_create_product_license_details<
            T: std::convert::Into<crate::model::CreateProductLicenseDetails>,
        >(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.create_product_license_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::CreateProductLicenseRequest::opc_retry_token].
        pub fn set_opc_retry_token<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateProductLicense {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LicenseManager::get_product_license][crate::client::LicenseManager::get_product_license] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use oci_sdk_licensemanager::builder;
    /// use builder::license_manager::GetProductLicense;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetProductLicense {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetProductLicense(RequestBuilder<crate::model::GetProductLicenseRequest>);

    impl GetProductLicense {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LicenseManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetProductLicenseRequest>>(
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
        pub async fn send(self) -> Result<crate::model::ProductLicense> {
            self.0.request.validate()?;
            (*self.0.stub)
                .get_product_license(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [product_license_id][crate::model::GetProductLicenseRequest::product_license_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_product_license_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.product_license_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetProductLicense {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LicenseManager::list_product_licenses][crate::client::LicenseManager::list_product_licenses] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use oci_sdk_licensemanager::builder;
    /// use builder::license_manager::ListProductLicenses;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListProductLicenses {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListProductLicenses(RequestBuilder<crate::model::ListProductLicensesRequest>);

    impl ListProductLicenses {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LicenseManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListProductLicensesRequest>>(
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
        pub async fn send(self) -> Result<crate::model::ListProductLicensesResponse> {
            self.0.request.validate()?;
            (*self.0.stub)
                .list_product_licenses(self.0.request, self.0.options)
                .await
                .map(crate::model::ListProductLicensesResponse::from)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::ListProductLicensesResponse,
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
        ) -> gax::paginator::ItemPaginator<crate::model::ProductLicenseSummary, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [compartment_id][crate::model::ListProductLicensesRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [is_compartment_id_in_subtree][crate::model::ListProductLicensesRequest::is_compartment_id_in_subtree].
        pub fn set_is_compartment_id_in_subtree<T: std::convert::Into<bool>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.is_compartment_id_in_subtree = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListProductLicensesRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListProductLicensesRequest::page].
        pub fn set_page<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListProductLicensesRequest::sort_order].
        pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListProductLicensesRequest::sort_by].
        pub fn set_sort_by<T: std::convert::Into<crate::model::SortBy>>(mut self, v: T) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListProductLicenses {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LicenseManager::update_product_license][crate::client::LicenseManager::update_product_license] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use oci_sdk_licensemanager::builder;
    /// use builder::license_manager::UpdateProductLicense;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateProductLicense {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateProductLicense(RequestBuilder<crate::model::UpdateProductLicenseRequest>);

    impl UpdateProductLicense {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LicenseManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateProductLicenseRequest>>(
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
        pub async fn send(self) -> Result<crate::model::ProductLicense> {
            self.0.request.validate()?;
            (*self.0.stub)
                .update_product_license(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [product_license_id][crate::model::UpdateProductLicenseRequest::product_license_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_product_license_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.product_license_id = Some(v.into());
            self
        }

        /// Sets the value of [update_product_license_details][crate::model::UpdateProductLicenseRequest::update_product_license_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_update_product_license_details<
            T: std::convert::Into<crate::model::UpdateProductLicenseDetails>,
        >(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.update_product_license_details = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateProductLicenseRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateProductLicense {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LicenseManager::delete_product_license][crate::client::LicenseManager::delete_product_license] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use oci_sdk_licensemanager::builder;
    /// use builder::license_manager::DeleteProductLicense;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteProductLicense {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteProductLicense(RequestBuilder<crate::model::DeleteProductLicenseRequest>);

    impl DeleteProductLicense {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LicenseManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteProductLicenseRequest>>(
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
        pub async fn send(self) -> Result<()> {
            self.0.request.validate()?;
            (*self.0.stub)
                .delete_product_license(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [product_license_id][crate::model::DeleteProductLicenseRequest::product_license_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_product_license_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.product_license_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteProductLicenseRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteProductLicense {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LicenseManager::create_license_record][crate::client::LicenseManager::create_license_record] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use oci_sdk_licensemanager::builder;
    /// use builder::license_manager::CreateLicenseRecord;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateLicenseRecord {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateLicenseRecord(RequestBuilder<crate::model::CreateLicenseRecordRequest>);

    impl CreateLicenseRecord {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LicenseManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateLicenseRecordRequest>>(
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
        pub async fn send(self) -> Result<crate::model::LicenseRecord> {
            self.0.request.validate()?;
            (*self.0.stub)
                .create_license_record(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [product_license_id][crate::model::CreateLicenseRecordRequest::product_license_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_product_license_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.product_license_id = Some(v.into());
            self
        }

        /// Sets the value of [create_license_record_details][crate::model::CreateLicenseRecordRequest::create_license_record_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_create_license_record_details<
            T: std::convert::Into<crate::model::CreateLicenseRecordDetails>,
        >(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.create_license_record_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::CreateLicenseRecordRequest::opc_retry_token].
        pub fn set_opc_retry_token<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateLicenseRecord {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LicenseManager::get_license_record][crate::client::LicenseManager::get_license_record] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use oci_sdk_licensemanager::builder;
    /// use builder::license_manager::GetLicenseRecord;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetLicenseRecord {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetLicenseRecord(RequestBuilder<crate::model::GetLicenseRecordRequest>);

    impl GetLicenseRecord {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LicenseManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLicenseRecordRequest>>(
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
        pub async fn send(self) -> Result<crate::model::LicenseRecord> {
            self.0.request.validate()?;
            (*self.0.stub)
                .get_license_record(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [license_record_id][crate::model::GetLicenseRecordRequest::license_record_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_license_record_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.license_record_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLicenseRecord {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LicenseManager::list_license_records][crate::client::LicenseManager::list_license_records] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use oci_sdk_licensemanager::builder;
    /// use builder::license_manager::ListLicenseRecords;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListLicenseRecords {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListLicenseRecords(RequestBuilder<crate::model::ListLicenseRecordsRequest>);

    impl ListLicenseRecords {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LicenseManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLicenseRecordsRequest>>(
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
        pub async fn send(self) -> Result<crate::model::ListLicenseRecordsResponse> {
            self.0.request.validate()?;
            (*self.0.stub)
                .list_license_records(self.0.request, self.0.options)
                .await
                .map(crate::model::ListLicenseRecordsResponse::from)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::ListLicenseRecordsResponse,
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
        ) -> gax::paginator::ItemPaginator<crate::model::LicenseRecordSummary, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [product_license_id][crate::model::ListLicenseRecordsRequest::product_license_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_product_license_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.product_license_id = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListLicenseRecordsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListLicenseRecordsRequest::page].
        pub fn set_page<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListLicenseRecordsRequest::sort_order].
        pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListLicenseRecordsRequest::sort_by].
        pub fn set_sort_by<T: std::convert::Into<crate::model::SortBy>>(mut self, v: T) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLicenseRecords {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LicenseManager::update_license_record][crate::client::LicenseManager::update_license_record] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use oci_sdk_licensemanager::builder;
    /// use builder::license_manager::UpdateLicenseRecord;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateLicenseRecord {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateLicenseRecord(RequestBuilder<crate::model::UpdateLicenseRecordRequest>);

    impl UpdateLicenseRecord {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LicenseManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateLicenseRecordRequest>>(
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
        pub async fn send(self) -> Result<crate::model::LicenseRecord> {
            self.0.request.validate()?;
            (*self.0.stub)
                .update_license_record(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [license_record_id][crate::model::UpdateLicenseRecordRequest::license_record_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_license_record_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.license_record_id = Some(v.into());
            self
        }

        /// Sets the value of [update_license_record_details][crate::model::UpdateLicenseRecordRequest::update_license_record_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_update_license_record_details<
            T: std::convert::Into<crate::model::UpdateLicenseRecordDetails>,
        >(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.update_license_record_details = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateLicenseRecordRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateLicenseRecord {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LicenseManager::delete_license_record][crate::client::LicenseManager::delete_license_record] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use oci_sdk_licensemanager::builder;
    /// use builder::license_manager::DeleteLicenseRecord;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteLicenseRecord {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteLicenseRecord(RequestBuilder<crate::model::DeleteLicenseRecordRequest>);

    impl DeleteLicenseRecord {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LicenseManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteLicenseRecordRequest>>(
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
        pub async fn send(self) -> Result<()> {
            self.0.request.validate()?;
            (*self.0.stub)
                .delete_license_record(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [license_record_id][crate::model::DeleteLicenseRecordRequest::license_record_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_license_record_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.license_record_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteLicenseRecordRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteLicenseRecord {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LicenseManager::get_configuration][crate::client::LicenseManager::get_configuration] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use oci_sdk_licensemanager::builder;
    /// use builder::license_manager::GetConfiguration;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetConfiguration {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetConfiguration(RequestBuilder<crate::model::GetConfigurationRequest>);

    impl GetConfiguration {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LicenseManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetConfigurationRequest>>(
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
        pub async fn send(self) -> Result<crate::model::Configuration> {
            self.0.request.validate()?;
            (*self.0.stub)
                .get_configuration(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [compartment_id][crate::model::GetConfigurationRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetConfiguration {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LicenseManager::update_configuration][crate::client::LicenseManager::update_configuration] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use oci_sdk_licensemanager::builder;
    /// use builder::license_manager::UpdateConfiguration;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateConfiguration {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateConfiguration(RequestBuilder<crate::model::UpdateConfigurationRequest>);

    impl UpdateConfiguration {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LicenseManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateConfigurationRequest>>(
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
        pub async fn send(self) -> Result<crate::model::Configuration> {
            self.0.request.validate()?;
            (*self.0.stub)
                .update_configuration(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [compartment_id][crate::model::UpdateConfigurationRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [update_configuration_details][crate::model::UpdateConfigurationRequest::update_configuration_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_update_configuration_details<
            T: std::convert::Into<crate::model::UpdateConfigurationDetails>,
        >(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.update_configuration_details = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateConfigurationRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateConfiguration {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LicenseManager::get_license_metric][crate::client::LicenseManager::get_license_metric] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use oci_sdk_licensemanager::builder;
    /// use builder::license_manager::GetLicenseMetric;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetLicenseMetric {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetLicenseMetric(RequestBuilder<crate::model::GetLicenseMetricRequest>);

    impl GetLicenseMetric {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LicenseManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLicenseMetricRequest>>(
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
        pub async fn send(self) -> Result<crate::model::LicenseMetric> {
            self.0.request.validate()?;
            (*self.0.stub)
                .get_license_metric(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [compartment_id][crate::model::GetLicenseMetricRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [is_compartment_id_in_subtree][crate::model::GetLicenseMetricRequest::is_compartment_id_in_subtree].
        pub fn set_is_compartment_id_in_subtree<T: std::convert::Into<bool>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.is_compartment_id_in_subtree = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLicenseMetric {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
