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
use gaxi::query_parameter::QueryParameter;

/// Implements [LicenseManager](super::stub::LicenseManager) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct LicenseManager {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for LicenseManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("LicenseManager")
            .field("inner", &self.inner)
            .finish()
    }
}

impl LicenseManager {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::ENDPOINT_TEMPLATE).await?;
        Ok(Self { inner })
    }
}

impl super::stub::LicenseManager for LicenseManager {
    async fn create_product_license(
        &self,
        req: crate::model::CreateProductLicenseRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ProductLicense>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = "/20220430/productLicenses".to_string();
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let retry_token = req
            .opc_retry_token
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let builder = builder.header(gax::OPC_RETRY_TOKEN, retry_token);
        let body = req
            .create_product_license_details
            .ok_or_else(|| gaxi::path_parameter::missing("createProductLicenseDetails"))?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn get_product_license(
        &self,
        req: crate::model::GetProductLicenseRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ProductLicense>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let product_license_id = gaxi::path_parameter::required(
            req.product_license_id.as_deref(),
            "productLicenseId",
        )?;
        let path = format!(
            "/20220430/productLicenses/{}",
            gaxi::path_parameter::encode(product_license_id),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        self.inner.execute(builder, None::<gaxi::http::NoBody>, options).await
    }

    async fn list_product_licenses(
        &self,
        req: crate::model::ListProductLicensesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ProductLicenseCollection>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = "/20220430/productLicenses".to_string();
        gaxi::path_parameter::required(req.compartment_id.as_deref(), "compartmentId")?;
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.compartment_id.add(builder, "compartmentId");
        let builder = req.is_compartment_id_in_subtree.add(builder, "isCompartmentIdInSubtree");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.add(builder, "sortOrder");
        let builder = req.sort_by.add(builder, "sortBy");
        self.inner.execute(builder, None::<gaxi::http::NoBody>, options).await
    }

    async fn update_product_license(
        &self,
        req: crate::model::UpdateProductLicenseRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ProductLicense>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let product_license_id = gaxi::path_parameter::required(
            req.product_license_id.as_deref(),
            "productLicenseId",
        )?;
        let path = format!(
            "/20220430/productLicenses/{}",
            gaxi::path_parameter::encode(product_license_id),
        );
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder = match &req.if_match {
            Some(v) => builder.header(gax::IF_MATCH, v),
            None => builder,
        };
        let body = req
            .update_product_license_details
            .ok_or_else(|| gaxi::path_parameter::missing("updateProductLicenseDetails"))?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn delete_product_license(
        &self,
        req: crate::model::DeleteProductLicenseRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let product_license_id = gaxi::path_parameter::required(
            req.product_license_id.as_deref(),
            "productLicenseId",
        )?;
        let path = format!(
            "/20220430/productLicenses/{}",
            gaxi::path_parameter::encode(product_license_id),
        );
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder = match &req.if_match {
            Some(v) => builder.header(gax::IF_MATCH, v),
            None => builder,
        };
        self.inner
            .execute::<_, serde_json::Value>(builder, None::<gaxi::http::NoBody>, options)
            .await
            .map(|r| {
                let (parts, _) = r.into_parts();
                gax::response::Response::from_parts(parts, ())
            })
    }

    async fn create_license_record(
        &self,
        req: crate::model::CreateLicenseRecordRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LicenseRecord>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = "/20220430/licenseRecords".to_string();
        gaxi::path_parameter::required(req.product_license_id.as_deref(), "productLicenseId")?;
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = req.product_license_id.add(builder, "productLicenseId");
        let retry_token = req
            .opc_retry_token
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let builder = builder.header(gax::OPC_RETRY_TOKEN, retry_token);
        let body = req
            .create_license_record_details
            .ok_or_else(|| gaxi::path_parameter::missing("createLicenseRecordDetails"))?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn get_license_record(
        &self,
        req: crate::model::GetLicenseRecordRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LicenseRecord>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let license_record_id = gaxi::path_parameter::required(
            req.license_record_id.as_deref(),
            "licenseRecordId",
        )?;
        let path = format!(
            "/20220430/licenseRecords/{}",
            gaxi::path_parameter::encode(license_record_id),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        self.inner.execute(builder, None::<gaxi::http::NoBody>, options).await
    }

    async fn list_license_records(
        &self,
        req: crate::model::ListLicenseRecordsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LicenseRecordCollection>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = "/20220430/licenseRecords".to_string();
        gaxi::path_parameter::required(req.product_license_id.as_deref(), "productLicenseId")?;
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.product_license_id.add(builder, "productLicenseId");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.add(builder, "sortOrder");
        let builder = req.sort_by.add(builder, "sortBy");
        self.inner.execute(builder, None::<gaxi::http::NoBody>, options).await
    }

    async fn update_license_record(
        &self,
        req: crate::model::UpdateLicenseRecordRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LicenseRecord>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let license_record_id = gaxi::path_parameter::required(
            req.license_record_id.as_deref(),
            "licenseRecordId",
        )?;
        let path = format!(
            "/20220430/licenseRecords/{}",
            gaxi::path_parameter::encode(license_record_id),
        );
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder = match &req.if_match {
            Some(v) => builder.header(gax::IF_MATCH, v),
            None => builder,
        };
        let body = req
            .update_license_record_details
            .ok_or_else(|| gaxi::path_parameter::missing("updateLicenseRecordDetails"))?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn delete_license_record(
        &self,
        req: crate::model::DeleteLicenseRecordRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let license_record_id = gaxi::path_parameter::required(
            req.license_record_id.as_deref(),
            "licenseRecordId",
        )?;
        let path = format!(
            "/20220430/licenseRecords/{}",
            gaxi::path_parameter::encode(license_record_id),
        );
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder = match &req.if_match {
            Some(v) => builder.header(gax::IF_MATCH, v),
            None => builder,
        };
        self.inner
            .execute::<_, serde_json::Value>(builder, None::<gaxi::http::NoBody>, options)
            .await
            .map(|r| {
                let (parts, _) = r.into_parts();
                gax::response::Response::from_parts(parts, ())
            })
    }

    async fn get_configuration(
        &self,
        req: crate::model::GetConfigurationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Configuration>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = "/20220430/configuration".to_string();
        gaxi::path_parameter::required(req.compartment_id.as_deref(), "compartmentId")?;
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.compartment_id.add(builder, "compartmentId");
        self.inner.execute(builder, None::<gaxi::http::NoBody>, options).await
    }

    async fn update_configuration(
        &self,
        req: crate::model::UpdateConfigurationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Configuration>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = "/20220430/configuration".to_string();
        gaxi::path_parameter::required(req.compartment_id.as_deref(), "compartmentId")?;
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder = req.compartment_id.add(builder, "compartmentId");
        let builder = match &req.if_match {
            Some(v) => builder.header(gax::IF_MATCH, v),
            None => builder,
        };
        let body = req
            .update_configuration_details
            .ok_or_else(|| gaxi::path_parameter::missing("updateConfigurationDetails"))?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn get_license_metric(
        &self,
        req: crate::model::GetLicenseMetricRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LicenseMetric>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = "/20220430/licenseMetrics".to_string();
        gaxi::path_parameter::required(req.compartment_id.as_deref(), "compartmentId")?;
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.compartment_id.add(builder, "compartmentId");
        let builder = req.is_compartment_id_in_subtree.add(builder, "isCompartmentIdInSubtree");
        self.inner.execute(builder, None::<gaxi::http::NoBody>, options).await
    }
}
