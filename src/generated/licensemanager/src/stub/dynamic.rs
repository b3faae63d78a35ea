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

/// A dyn-compatible, crate-private version of [super::LicenseManager].
#[async_trait::async_trait]
pub trait LicenseManager: std::fmt::Debug + Send + Sync {
    async fn create_product_license(
        &self,
        req: crate::model::CreateProductLicenseRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ProductLicense>>;

    async fn get_product_license(
        &self,
        req: crate::model::GetProductLicenseRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ProductLicense>>;

    async fn list_product_licenses(
        &self,
        req: crate::model::ListProductLicensesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ProductLicenseCollection>>;

    async fn update_product_license(
        &self,
        req: crate::model::UpdateProductLicenseRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ProductLicense>>;

    async fn delete_product_license(
        &self,
        req: crate::model::DeleteProductLicenseRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn create_license_record(
        &self,
        req: crate::model::CreateLicenseRecordRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LicenseRecord>>;

    async fn get_license_record(
        &self,
        req: crate::model::GetLicenseRecordRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LicenseRecord>>;

    async fn list_license_records(
        &self,
        req: crate::model::ListLicenseRecordsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LicenseRecordCollection>>;

    async fn update_license_record(
        &self,
        req: crate::model::UpdateLicenseRecordRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LicenseRecord>>;

    async fn delete_license_record(
        &self,
        req: crate::model::DeleteLicenseRecordRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn get_configuration(
        &self,
        req: crate::model::GetConfigurationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Configuration>>;

    async fn update_configuration(
        &self,
        req: crate::model::UpdateConfigurationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Configuration>>;

    async fn get_license_metric(
        &self,
        req: crate::model::GetLicenseMetricRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LicenseMetric>>;
}

/// All implementations of [super::LicenseManager] also implement [LicenseManager].
#[async_trait::async_trait]
impl<T: super::LicenseManager> LicenseManager for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn create_product_license(
        &self,
        req: crate::model::CreateProductLicenseRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ProductLicense>> {
        T::create_product_license(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_product_license(
        &self,
        req: crate::model::GetProductLicenseRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ProductLicense>> {
        T::get_product_license(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_product_licenses(
        &self,
        req: crate::model::ListProductLicensesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ProductLicenseCollection>> {
        T::list_product_licenses(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_product_license(
        &self,
        req: crate::model::UpdateProductLicenseRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ProductLicense>> {
        T::update_product_license(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_product_license(
        &self,
        req: crate::model::DeleteProductLicenseRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_product_license(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_license_record(
        &self,
        req: crate::model::CreateLicenseRecordRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LicenseRecord>> {
        T::create_license_record(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_license_record(
        &self,
        req: crate::model::GetLicenseRecordRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LicenseRecord>> {
        T::get_license_record(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_license_records(
        &self,
        req: crate::model::ListLicenseRecordsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LicenseRecordCollection>> {
        T::list_license_records(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_license_record(
        &self,
        req: crate::model::UpdateLicenseRecordRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LicenseRecord>> {
        T::update_license_record(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_license_record(
        &self,
        req: crate::model::DeleteLicenseRecordRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_license_record(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_configuration(
        &self,
        req: crate::model::GetConfigurationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Configuration>> {
        T::get_configuration(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_configuration(
        &self,
        req: crate::model::UpdateConfigurationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Configuration>> {
        T::update_configuration(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_license_metric(
        &self,
        req: crate::model::GetLicenseMetricRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LicenseMetric>> {
        T::get_license_metric(self, req, options).await
    }
}
