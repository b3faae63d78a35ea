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

#[cfg(test)]
mod mocking {
    use gax::error::Error;
    use gax::error::ServiceError;
    use gax::error::binding::BindingError;
    use gax::options::RequestOptions;
    use gax::response::{Parts, Response};
    use oci_sdk_licensemanager::client::LicenseManager;
    use oci_sdk_licensemanager::model;
    use pretty_assertions::assert_eq;

    type Result<T> = anyhow::Result<T>;

    mockall::mock! {
        #[derive(Debug)]
        LicenseManager {}
        impl oci_sdk_licensemanager::stub::LicenseManager for LicenseManager {
            async fn create_product_license(&self, req: model::CreateProductLicenseRequest, _options: RequestOptions) -> gax::Result<Response<model::ProductLicense>>;
            async fn get_product_license(&self, req: model::GetProductLicenseRequest, _options: RequestOptions) -> gax::Result<Response<model::ProductLicense>>;
            async fn list_product_licenses(&self, req: model::ListProductLicensesRequest, _options: RequestOptions) -> gax::Result<Response<model::ProductLicenseCollection>>;
            async fn delete_product_license(&self, req: model::DeleteProductLicenseRequest, _options: RequestOptions) -> gax::Result<Response<()>>;
            async fn list_license_records(&self, req: model::ListLicenseRecordsRequest, _options: RequestOptions) -> gax::Result<Response<model::LicenseRecordCollection>>;
            async fn update_configuration(&self, req: model::UpdateConfigurationRequest, _options: RequestOptions) -> gax::Result<Response<model::Configuration>>;
        }
    }

    fn page(ids: &[&str], next: Option<&str>) -> Response<model::ProductLicenseCollection> {
        let items = ids
            .iter()
            .map(|id| model::ProductLicenseSummary::new().set_id(*id));
        let body = model::ProductLicenseCollection::new().set_items(items);
        let mut headers = http::HeaderMap::new();
        if let Some(next) = next {
            headers.insert(
                gax::OPC_NEXT_PAGE,
                http::HeaderValue::from_str(next).expect("test tokens are valid headers"),
            );
        }
        Response::from_parts(Parts::new().set_headers(headers), body)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn create_product_license() -> Result<()> {
        let mut mock = MockLicenseManager::new();
        mock.expect_create_product_license()
            .withf(|r, _| {
                let details = r.create_product_license_details.as_ref();
                details.and_then(|d| d.display_name.as_deref()) == Some("db-licenses")
                    && details.and_then(|d| d.license_unit.clone())
                        == Some(model::LicenseUnit::Ocpu)
                    && r.opc_retry_token.as_deref() == Some("token-123")
            })
            .return_once(|_, _| {
                Ok(Response::from(
                    model::ProductLicense::new()
                        .set_id("ocid1.productlicense.oc1..abc")
                        .set_lifecycle_state(model::LifeCycleState::Creating),
                ))
            });

        let client = LicenseManager::from_stub(mock);
        let got = client
            .create_product_license()
            .set_create_product_license_details(
                model::CreateProductLicenseDetails::new()
                    .set_compartment_id("ocid1.compartment.oc1..abc")
                    .set_display_name("db-licenses")
                    .set_is_vendor_oracle(true)
                    .set_license_unit(model::LicenseUnit::Ocpu),
            )
            .set_opc_retry_token("token-123")
            .send()
            .await?;
        assert_eq!(got.id.as_deref(), Some("ocid1.productlicense.oc1..abc"));
        assert_eq!(got.lifecycle_state, Some(model::LifeCycleState::Creating));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn missing_required_details() -> Result<()> {
        // No expectations, the stub must not be called.
        let client = LicenseManager::from_stub(MockLicenseManager::new());

        let err = client
            .create_product_license()
            .send()
            .await
            .expect_err("the details are required");
        assert!(err.is_binding(), "{err:?}");
        assert_eq!(
            err.as_binding(),
            Some(&BindingError::MissingRequiredParameter(
                "createProductLicenseDetails"
            ))
        );

        let err = client
            .create_product_license()
            .set_create_product_license_details(
                model::CreateProductLicenseDetails::new()
                    .set_compartment_id("ocid1.compartment.oc1..abc")
                    .set_is_vendor_oracle(true)
                    .set_license_unit("OCPU"),
            )
            .send()
            .await
            .expect_err("the display name is required");
        assert_eq!(
            err.as_binding(),
            Some(&BindingError::MissingRequiredParameter("displayName"))
        );

        let err = client
            .get_product_license()
            .set_product_license_id("")
            .send()
            .await
            .expect_err("empty path parameters are rejected");
        assert_eq!(
            err.as_binding(),
            Some(&BindingError::MissingRequiredParameter("productLicenseId"))
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn invalid_sort_order() -> Result<()> {
        let client = LicenseManager::from_stub(MockLicenseManager::new());

        let err = client
            .list_product_licenses()
            .set_compartment_id("ocid1.compartment.oc1..abc")
            .set_sort_order("SIDEWAYS")
            .send()
            .await
            .expect_err("SIDEWAYS is not a sort order");
        assert_eq!(
            err.as_binding(),
            Some(&BindingError::InvalidEnumValue {
                parameter: "sortOrder",
                value: "SIDEWAYS".to_string(),
                allowed: "ASC, DESC".to_string(),
            })
        );
        let message = err.to_string();
        assert!(message.starts_with("cannot send the request"), "{message}");
        assert!(
            message.ends_with("invalid value SIDEWAYS for sortOrder, expected one of: ASC, DESC"),
            "{message}"
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn get_product_license_error() -> Result<()> {
        let mut mock = MockLicenseManager::new();
        mock.expect_get_product_license()
            .withf(|r, _| r.product_license_id.as_deref() == Some("ocid1.productlicense.oc1..abc"))
            .return_once(|_, _| {
                Err(Error::service(
                    ServiceError::new()
                        .set_code("NotAuthorizedOrNotFound")
                        .set_message("not found")
                        .set_status_code(404_u16),
                ))
            });

        let client = LicenseManager::from_stub(mock);
        let err = client
            .get_product_license()
            .set_product_license_id("ocid1.productlicense.oc1..abc")
            .send()
            .await
            .expect_err("the mock returns an error");
        let status = err.status().expect("the error is a service error");
        assert_eq!(status.code, "NotAuthorizedOrNotFound");
        assert_eq!(status.status_code, Some(404));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn list_pages() -> Result<()> {
        let mut mock = MockLicenseManager::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_list_product_licenses()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| {
                r.compartment_id.as_deref() == Some("ocid1.compartment.oc1..abc")
                    && r.page.is_none()
            })
            .return_once(|_, _| Ok(page(&["pl-1", "pl-2"], Some("page-002"))));
        mock.expect_list_product_licenses()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.page.as_deref() == Some("page-002"))
            .return_once(|_, _| Ok(page(&["pl-3"], None)));

        let client = LicenseManager::from_stub(mock);
        let mut paginator = client
            .list_product_licenses()
            .set_compartment_id("ocid1.compartment.oc1..abc")
            .by_page();
        let mut pages = Vec::new();
        while let Some(response) = paginator.next().await {
            pages.push(response?);
        }
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].opc_next_page.as_deref(), Some("page-002"));
        assert_eq!(pages[0].product_license_collection.items.len(), 2);
        assert_eq!(pages[1].opc_next_page, None);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn list_items() -> Result<()> {
        let mut mock = MockLicenseManager::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_list_product_licenses()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.page.as_deref() == Some("start-here"))
            .return_once(|_, _| Ok(page(&["pl-1"], Some("p2"))));
        mock.expect_list_product_licenses()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.page.as_deref() == Some("p2"))
            .return_once(|_, _| Ok(page(&[], Some("p3"))));
        mock.expect_list_product_licenses()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.page.as_deref() == Some("p3"))
            .return_once(|_, _| Ok(page(&["pl-2", "pl-3"], None)));

        let client = LicenseManager::from_stub(mock);
        let mut items = client
            .list_product_licenses()
            .set_compartment_id("ocid1.compartment.oc1..abc")
            .set_page("start-here")
            .by_item();
        let mut ids = Vec::new();
        while let Some(item) = items.next().await {
            ids.push(item?.id.unwrap_or_default());
        }
        assert_eq!(ids, vec!["pl-1", "pl-2", "pl-3"]);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn list_records_stops_on_error() -> Result<()> {
        let mut mock = MockLicenseManager::new();
        mock.expect_list_license_records()
            .once()
            .return_once(|_, _| Err(Error::io("connection reset")));

        let client = LicenseManager::from_stub(mock);
        let mut items = client
            .list_license_records()
            .set_product_license_id("ocid1.productlicense.oc1..abc")
            .by_item();
        let err = items
            .next()
            .await
            .expect("the stream reports the error")
            .expect_err("the mock returns an error");
        assert!(err.is_io(), "{err:?}");
        assert!(items.next().await.is_none());
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn delete_and_update_with_etag() -> Result<()> {
        let mut mock = MockLicenseManager::new();
        mock.expect_delete_product_license()
            .withf(|r, _| r.if_match.as_deref() == Some("etag-1"))
            .return_once(|_, _| Ok(Response::from(())));
        mock.expect_update_configuration()
            .withf(|r, o| {
                r.compartment_id.as_deref() == Some("ocid1.tenancy.oc1..abc")
                    && r.if_match.as_deref() == Some("etag-2")
                    && o.opc_request_id() == Some("req-1")
            })
            .return_once(|req, _| {
                let emails = req
                    .update_configuration_details
                    .map(|d| d.email_ids)
                    .unwrap_or_default();
                Ok(Response::from(
                    model::Configuration::new().set_email_ids(emails),
                ))
            });

        let client = LicenseManager::from_stub(mock);
        client
            .delete_product_license()
            .set_product_license_id("ocid1.productlicense.oc1..abc")
            .set_if_match("etag-1")
            .send()
            .await?;

        use gax::options::RequestOptionsBuilder;
        let got = client
            .update_configuration()
            .set_compartment_id("ocid1.tenancy.oc1..abc")
            .set_if_match("etag-2")
            .set_update_configuration_details(
                model::UpdateConfigurationDetails::new().set_email_ids(["ops@example.com"]),
            )
            .with_opc_request_id("req-1")
            .send()
            .await?;
        assert_eq!(got.email_ids, vec!["ops@example.com"]);
        Ok(())
    }

    static_assertions::assert_impl_all!(LicenseManager: Clone, Send, Sync, std::fmt::Debug);
}
