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

//! Contains the LicenseManager client and related types.

#![allow(rustdoc::broken_intra_doc_links)]

/// Implements a client for the License Manager API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use oci_sdk_licensemanager::client::LicenseManager;
/// let client = LicenseManager::builder()
///     .with_region("us-ashburn-1")
///     .with_signer(gax::signer::anonymous())
///     .build()
///     .await?;
/// // use `client` to make requests to the License Manager API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// License Manager tracks the product licenses owned by a tenancy, the license
/// records purchased for each product license, and how many license units the
/// running instances consume.
///
/// # Configuration
///
/// To configure `LicenseManager` use the `with_*` methods in the type returned
/// by [builder()][LicenseManager::builder]. Every client needs a request
/// signer, set with `with_signer()`. The endpoint is derived from the region,
/// applications running in restricted networks may override it with
/// `with_endpoint()`.
///
/// # Pooling and Cloning
///
/// `LicenseManager` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `LicenseManager` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct LicenseManager {
    inner: std::sync::Arc<dyn super::stub::dynamic::LicenseManager>,
}

impl LicenseManager {
    /// Returns a builder for [LicenseManager].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use oci_sdk_licensemanager::client::LicenseManager;
    /// let client = LicenseManager::builder()
    ///     .with_region("us-ashburn-1")
    ///     .with_signer(gax::signer::anonymous())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::license_manager::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::license_manager::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::LicenseManager + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::LicenseManager>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::LicenseManager> {
        super::transport::LicenseManager::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::LicenseManager> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::LicenseManager::new)
    }

    /// Creates a product license.
    pub fn create_product_license(&self) -> super::builder::license_manager::CreateProductLicense {
        super::builder::license_manager::CreateProductLicense::new(self.inner.clone())
    }

    /// Gets a product license.
    pub fn get_product_license(&self) -> super::builder::license_manager::GetProductLicense {
        super::builder::license_manager::GetProductLicense::new(self.inner.clone())
    }

    /// Lists the product licenses in a compartment.
    pub fn list_product_licenses(&self) -> super::builder::license_manager::ListProductLicenses {
        super::builder::license_manager::ListProductLicenses::new(self.inner.clone())
    }

    /// Updates the images of a product license.
    pub fn update_product_license(&self) -> super::builder::license_manager::UpdateProductLicense {
        super::builder::license_manager::UpdateProductLicense::new(self.inner.clone())
    }

    /// Deletes a product license.
    pub fn delete_product_license(&self) -> super::builder::license_manager::DeleteProductLicense {
        super::builder::license_manager::DeleteProductLicense::new(self.inner.clone())
    }

    /// Creates a license record for a product license.
    pub fn create_license_record(&self) -> super::builder::license_manager::CreateLicenseRecord {
        super::builder::license_manager::CreateLicenseRecord::new(self.inner.clone())
    }

    /// Gets a license record.
    pub fn get_license_record(&self) -> super::builder::license_manager::GetLicenseRecord {
        super::builder::license_manager::GetLicenseRecord::new(self.inner.clone())
    }

    /// Lists the license records of a product license.
    pub fn list_license_records(&self) -> super::builder::license_manager::ListLicenseRecords {
        super::builder::license_manager::ListLicenseRecords::new(self.inner.clone())
    }

    /// Updates a license record.
    pub fn update_license_record(&self) -> super::builder::license_manager::UpdateLicenseRecord {
        super::builder::license_manager::UpdateLicenseRecord::new(self.inner.clone())
    }

    /// Deletes a license record.
    pub fn delete_license_record(&self) -> super::builder::license_manager::DeleteLicenseRecord {
        super::builder::license_manager::DeleteLicenseRecord::new(self.inner.clone())
    }

    /// Gets the configuration of a compartment.
    pub fn get_configuration(&self) -> super::builder::license_manager::GetConfiguration {
        super::builder::license_manager::GetConfiguration::new(self.inner.clone())
    }

    /// Updates the configuration of a compartment.
    pub fn update_configuration(&self) -> super::builder::license_manager::UpdateConfiguration {
        super::builder::license_manager::UpdateConfiguration::new(self.inner.clone())
    }

    /// Gets the license counts of a compartment.
    pub fn get_license_metric(&self) -> super::builder::license_manager::GetLicenseMetric {
        super::builder::license_manager::GetLicenseMetric::new(self.inner.clone())
    }
}
