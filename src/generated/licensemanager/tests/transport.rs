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

//! Verify the requests sent by the License Manager client, and how it decodes
//! the responses.

#[cfg(test)]
mod tests {
    use httptest::{Expectation, Server, all_of, matchers::*, responders::*};
    use oci_sdk_licensemanager::client::LicenseManager;
    use oci_sdk_licensemanager::model;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    async fn test_client(server: &Server) -> Result<LicenseManager> {
        let client = LicenseManager::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_signer(gax::signer::anonymous())
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_product_license() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/20220430/productLicenses/ocid1.productlicense.oc1..abc"),
                request::headers(contains(key("user-agent"))),
            ])
            .respond_with(
                status_code(200)
                    .append_header("opc-request-id", "req-123")
                    .append_header("etag", "etag-1")
                    .body(
                        json!({
                            "id": "ocid1.productlicense.oc1..abc",
                            "displayName": "db-licenses",
                            "licenseUnit": "OCPU",
                            "status": "SOMETHING_NEW",
                            "totalLicenseUnitsConsumed": 12.5,
                            "timeCreated": "2025-01-02T03:04:05.678Z",
                            "images": [{"listingId": "listing-1", "packageVersion": "1.0"}],
                            "freeformTags": {"team": "dba"},
                            "definedTags": {"Operations": {"CostCenter": "42"}},
                        })
                        .to_string(),
                    ),
            ),
        );

        let client = test_client(&server).await?;
        let got = client
            .get_product_license()
            .set_product_license_id("ocid1.productlicense.oc1..abc")
            .send()
            .await?;
        assert_eq!(got.id.as_deref(), Some("ocid1.productlicense.oc1..abc"));
        assert_eq!(got.license_unit, Some(model::LicenseUnit::Ocpu));
        let status = got.status.expect("status is set");
        assert!(status.is_unknown(), "{status:?}");
        assert_eq!(status.name(), "SOMETHING_NEW");
        assert_eq!(got.total_license_units_consumed, Some(12.5));
        let created = got.time_created.expect("timeCreated is set");
        assert_eq!(created.year(), 2025);
        assert_eq!(created.millisecond(), 678);
        assert_eq!(got.images.len(), 1);
        assert_eq!(got.images[0].listing_id.as_deref(), Some("listing-1"));
        assert_eq!(got.freeform_tags.get("team").map(String::as_str), Some("dba"));
        assert_eq!(
            got.defined_tags.get("Operations").and_then(|t| t.get("CostCenter")),
            Some(&json!("42"))
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn path_parameters_are_encoded() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/20220430/licenseRecords/a%2Fb%20c",
            ))
            .respond_with(json_encoded(json!({"id": "a/b c"}))),
        );

        let client = test_client(&server).await?;
        let got = client
            .get_license_record()
            .set_license_record_id("a/b c")
            .send()
            .await?;
        assert_eq!(got.id.as_deref(), Some("a/b c"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn create_generates_retry_token() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/20220430/productLicenses"),
                request::headers(contains((
                    "opc-retry-token",
                    matches("^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[0-9a-f]{4}-[0-9a-f]{12}$")
                ))),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({
                    "compartmentId": "ocid1.compartment.oc1..abc",
                    "displayName": "db-licenses",
                    "isVendorOracle": true,
                    "licenseUnit": "NAMED_USER_PLUS",
                    "images": [{"listingId": "listing-1", "packageVersion": "1.0"}],
                })))),
            ])
            .respond_with(json_encoded(json!({
                "id": "ocid1.productlicense.oc1..new",
                "lifecycleState": "CREATING",
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .create_product_license()
            .set_create_product_license_details(
                model::CreateProductLicenseDetails::new()
                    .set_compartment_id("ocid1.compartment.oc1..abc")
                    .set_display_name("db-licenses")
                    .set_is_vendor_oracle(true)
                    .set_license_unit(model::LicenseUnit::NamedUserPlus)
                    .set_images([model::ImageDetails::new()
                        .set_listing_id("listing-1")
                        .set_package_version("1.0")]),
            )
            .send()
            .await?;
        assert_eq!(got.id.as_deref(), Some("ocid1.productlicense.oc1..new"));
        assert_eq!(got.lifecycle_state, Some(model::LifeCycleState::Creating));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn create_record_uses_caller_token() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/20220430/licenseRecords"),
                request::query(url_decoded(contains((
                    "productLicenseId",
                    "ocid1.productlicense.oc1..abc"
                )))),
                request::headers(contains(("opc-retry-token", "my-token"))),
                request::body(json_decoded(eq(json!({
                    "displayName": "2025 renewal",
                    "isPerpetual": false,
                    "isUnlimited": false,
                    "licenseCount": 16,
                    "expirationDate": "2026-01-01T00:00:00Z",
                })))),
            ])
            .respond_with(json_encoded(json!({"id": "ocid1.licenserecord.oc1..new"}))),
        );

        let client = test_client(&server).await?;
        let expiration = time::OffsetDateTime::from_unix_timestamp(1767225600)?;
        let got = client
            .create_license_record()
            .set_product_license_id("ocid1.productlicense.oc1..abc")
            .set_opc_retry_token("my-token")
            .set_create_license_record_details(
                model::CreateLicenseRecordDetails::new()
                    .set_display_name("2025 renewal")
                    .set_is_perpetual(false)
                    .set_is_unlimited(false)
                    .set_license_count(16)
                    .set_expiration_date(expiration),
            )
            .send()
            .await?;
        assert_eq!(got.id.as_deref(), Some("ocid1.licenserecord.oc1..new"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn update_sends_if_match() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/20220430/licenseRecords/ocid1.licenserecord.oc1..abc"),
                request::headers(contains(("if-match", "etag-7"))),
                request::body(json_decoded(eq(json!({
                    "displayName": "renamed",
                    "isPerpetual": true,
                    "isUnlimited": true,
                })))),
            ])
            .respond_with(json_encoded(json!({
                "id": "ocid1.licenserecord.oc1..abc",
                "displayName": "renamed",
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .update_license_record()
            .set_license_record_id("ocid1.licenserecord.oc1..abc")
            .set_if_match("etag-7")
            .set_update_license_record_details(
                model::UpdateLicenseRecordDetails::new()
                    .set_display_name("renamed")
                    .set_is_perpetual(true)
                    .set_is_unlimited(true),
            )
            .send()
            .await?;
        assert_eq!(got.display_name.as_deref(), Some("renamed"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_empty_response() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/20220430/productLicenses/ocid1.productlicense.oc1..abc"),
                request::headers(not(contains(key("if-match")))),
            ])
            .respond_with(status_code(204)),
        );

        let client = test_client(&server).await?;
        client
            .delete_product_license()
            .set_product_license_id("ocid1.productlicense.oc1..abc")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_query_and_pagination() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/20220430/productLicenses"),
                request::query(url_decoded(contains(("compartmentId", "ocid1.tenancy.oc1..abc")))),
                request::query(url_decoded(contains(("isCompartmentIdInSubtree", "true")))),
                request::query(url_decoded(contains(("limit", "2")))),
                request::query(url_decoded(contains(("sortOrder", "DESC")))),
                request::query(url_decoded(contains(("sortBy", "timeCreated")))),
                request::query(url_decoded(not(contains(key("page"))))),
            ])
            .respond_with(
                status_code(200)
                    .append_header("opc-next-page", "page-2")
                    .body(json!({"items": [{"id": "pl-1"}, {"id": "pl-2"}]}).to_string()),
            ),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/20220430/productLicenses"),
                request::query(url_decoded(contains(("page", "page-2")))),
            ])
            .respond_with(json_encoded(json!({"items": [{"id": "pl-3"}]}))),
        );

        let client = test_client(&server).await?;
        let mut items = client
            .list_product_licenses()
            .set_compartment_id("ocid1.tenancy.oc1..abc")
            .set_is_compartment_id_in_subtree(true)
            .set_limit(2)
            .set_sort_order(model::SortOrder::Desc)
            .set_sort_by(model::SortBy::TimeCreated)
            .by_item();
        let mut ids = Vec::new();
        while let Some(item) = items.next().await {
            ids.push(item?.id.unwrap_or_default());
        }
        assert_eq!(ids, vec!["pl-1", "pl-2", "pl-3"]);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn configuration_and_metrics() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/20220430/configuration"),
                request::query(url_decoded(contains(("compartmentId", "ocid1.tenancy.oc1..abc")))),
            ])
            .respond_with(json_encoded(json!({
                "compartmentId": "ocid1.tenancy.oc1..abc",
                "emailIds": ["ops@example.com", "dba@example.com"],
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/20220430/licenseMetrics"),
                request::query(url_decoded(contains(("compartmentId", "ocid1.tenancy.oc1..abc")))),
            ])
            .respond_with(json_encoded(json!({
                "totalProductLicenseCount": 3,
                "totalByolInstanceCount": "not-a-number",
                "licenseRecordExpiringSoonCount": 1,
            }))),
        );

        let client = test_client(&server).await?;
        let config = client
            .get_configuration()
            .set_compartment_id("ocid1.tenancy.oc1..abc")
            .send()
            .await?;
        assert_eq!(config.email_ids, vec!["ops@example.com", "dba@example.com"]);

        let metric = client
            .get_license_metric()
            .set_compartment_id("ocid1.tenancy.oc1..abc")
            .send()
            .await?;
        assert_eq!(metric.total_product_license_count, Some(3));
        // Malformed values are left unset.
        assert_eq!(metric.total_byol_instance_count, None);
        assert_eq!(metric.license_record_expiring_soon_count, Some(1));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn service_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/20220430/productLicenses/ocid1.productlicense.oc1..missing",
            ))
            .respond_with(
                status_code(404)
                    .append_header("opc-request-id", "req-404")
                    .body(
                        json!({
                            "code": "NotAuthorizedOrNotFound",
                            "message": "Authorization failed or requested resource not found.",
                        })
                        .to_string(),
                    ),
            ),
        );

        let client = test_client(&server).await?;
        let err = client
            .get_product_license()
            .set_product_license_id("ocid1.productlicense.oc1..missing")
            .send()
            .await
            .expect_err("the service returns 404");
        let status = err.status().expect("the error has service details");
        assert_eq!(status.code, "NotAuthorizedOrNotFound");
        assert_eq!(err.http_status_code(), Some(404));
        assert_eq!(err.opc_request_id(), Some("req-404"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn conflicting_keys_in_response() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/20220430/licenseRecords/dup"))
                .respond_with(json_encoded(json!({
                    "displayName": "by-wire",
                    "display_name": "by-alias",
                }))),
        );

        let client = test_client(&server).await?;
        let err = client
            .get_license_record()
            .set_license_record_id("dup")
            .send()
            .await
            .expect_err("the response uses both keys");
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }
}
