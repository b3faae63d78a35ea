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

/// Implements a [LicenseManager](super::stub::LicenseManager) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct LicenseManager<T>
where
    T: super::stub::LicenseManager + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> LicenseManager<T>
where
    T: super::stub::LicenseManager + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::LicenseManager for LicenseManager<T>
where
    T: super::stub::LicenseManager + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn create_product_license(
        &self,
        req: crate::model::CreateProductLicenseRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ProductLicense>> {
        self.inner.create_product_license(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_product_license(
        &self,
        req: crate::model::GetProductLicenseRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ProductLicense>> {
        self.inner.get_product_license(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_product_licenses(
        &self,
        req: crate::model::ListProductLicensesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ProductLicenseCollection>> {
        self.inner.list_product_licenses(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_product_license(
        &self,
        req: crate::model::UpdateProductLicenseRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ProductLicense>> {
        self.inner.update_product_license(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_product_license(
        &self,
        req: crate::model::DeleteProductLicenseRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_product_license(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_license_record(
        &self,
        req: crate::model::CreateLicenseRecordRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LicenseRecord>> {
        self.inner.create_license_record(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_license_record(
        &self,
        req: crate::model::GetLicenseRecordRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LicenseRecord>> {
        self.inner.get_license_record(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_license_records(
        &self,
        req: crate::model::ListLicenseRecordsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LicenseRecordCollection>> {
        self.inner.list_license_records(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_license_record(
        &self,
        req: crate::model::UpdateLicenseRecordRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LicenseRecord>> {
        self.inner.update_license_record(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_license_record(
        &self,
        req: crate::model::DeleteLicenseRecordRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_license_record(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_configuration(
        &self,
        req: crate::model::GetConfigurationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Configuration>> {
        self.inner.get_configuration(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_configuration(
        &self,
        req: crate::model::UpdateConfigurationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Configuration>> {
        self.inner.update_configuration(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_license_metric(
        &self,
        req: crate::model::GetLicenseMetricRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LicenseMetric>> {
        self.inner.get_license_metric(req, options).await
    }
}
