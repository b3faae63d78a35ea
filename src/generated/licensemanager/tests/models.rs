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
mod models {
    use binding::diagnostics::NoDiagnostics;
    use gax::error::binding::BindingError;
    use oci_sdk_licensemanager::model;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use std::hash::{BuildHasher, RandomState};
    use test_case::test_case;

    type Result<T> = anyhow::Result<T>;

    fn product_license() -> Value {
        json!({
            "id": "ocid1.productlicense.oc1..abc",
            "compartmentId": "ocid1.compartment.oc1..abc",
            "displayName": "db-licenses",
            "status": "OK",
            "isVendorOracle": true,
            "licenseUnit": "PROCESSORS",
            "lifecycleState": "ACTIVE",
            "totalActiveLicenseUnitCount": 8,
            "totalLicenseUnitsConsumed": 2.5,
            "timeCreated": "2025-01-02T03:04:05.678Z",
            "images": [{"id": "img-1", "listingId": "listing-1", "publisher": "Oracle"}],
            "freeformTags": {"team": "dba"},
            "systemTags": {"orcl-cloud": {"free-tier-retained": "true"}},
        })
    }

    #[test_case(json!({"compartmentId": "c1", "displayName": "n"}); "wire names")]
    #[test_case(json!({"compartment_id": "c1", "display_name": "n"}); "aliases")]
    #[test_case(json!({"compartment_id": "c1", "displayName": "n"}); "mixed")]
    fn wire_and_alias_bind_equal(input: Value) -> Result<()> {
        let got = binding::from_value::<model::CreateProductLicenseDetails>(input)?;
        let want = model::CreateProductLicenseDetails::new()
            .set_compartment_id("c1")
            .set_display_name("n");
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case(json!({"compartmentId": "c1", "compartment_id": "c1"}), "compartmentId"; "same value")]
    #[test_case(json!({"isVendorOracle": true, "is_vendor_oracle": false}), "isVendorOracle"; "different value")]
    #[test_case(json!({"images": [{"listingId": "a", "listing_id": "b"}]}), "listingId"; "nested")]
    fn wire_and_alias_conflict(input: Value, wire: &str) {
        let err = binding::from_value::<model::CreateProductLicenseDetails>(input)
            .expect_err("both names for the same field");
        assert!(err.is_conflict(), "{err:?}");
        assert!(err.to_string().contains(wire), "{err}");
    }

    #[test]
    fn known_enums() -> Result<()> {
        let got = binding::from_value::<model::ProductLicense>(product_license())?;
        assert_eq!(got.status, Some(model::Status::Ok));
        assert_eq!(got.license_unit, Some(model::LicenseUnit::Processors));
        assert_eq!(got.lifecycle_state, Some(model::LifeCycleState::Active));
        Ok(())
    }

    #[test]
    fn unknown_enum_is_kept() -> Result<()> {
        let input = json!({"licenseUnit": "GIGAWATTS", "lifecycleState": "ACTIVE"});
        let got = binding::from_value_with::<model::LicenseRecord>(input, &NoDiagnostics)?;
        let unit = got.license_unit.clone().expect("the field is set");
        assert!(unit.is_unknown(), "{unit:?}");
        assert_eq!(unit.name(), "GIGAWATTS");
        assert_eq!(got.lifecycle_state, Some(model::LifeCycleState::Active));

        let round_trip = serde_json::to_value(&got)?;
        assert_eq!(
            round_trip,
            json!({"licenseUnit": "GIGAWATTS", "lifecycleState": "ACTIVE"})
        );
        Ok(())
    }

    #[test]
    fn malformed_values_are_unset() -> Result<()> {
        let input = json!({
            "displayName": 42,
            "licenseCount": "many",
            "isPerpetual": true,
            "expirationDate": "next tuesday",
        });
        let got = binding::from_value_with::<model::LicenseRecord>(input, &NoDiagnostics)?;
        assert_eq!(got.display_name, None);
        assert_eq!(got.license_count, None);
        assert_eq!(got.is_perpetual, Some(true));
        assert_eq!(got.expiration_date, None);
        Ok(())
    }

    #[test]
    fn serialize_then_bind() -> Result<()> {
        let first = binding::from_value::<model::ProductLicense>(product_license())?;
        let wire = serde_json::to_value(&first)?;
        assert_eq!(wire.get("timeCreated"), Some(&json!("2025-01-02T03:04:05.678Z")));
        assert_eq!(wire.get("licenseUnit"), Some(&json!("PROCESSORS")));
        let second = binding::from_value::<model::ProductLicense>(wire)?;
        assert_eq!(first, second);

        let hasher = RandomState::new();
        assert_eq!(hasher.hash_one(&first), hasher.hash_one(&second));
        Ok(())
    }

    #[test]
    fn equal_inputs_hash_equal() -> Result<()> {
        let wire = binding::from_value::<model::LicenseRecordSummary>(json!({
            "id": "r1",
            "licenseCount": 3,
            "freeformTags": {"a": "1", "b": "2"},
        }))?;
        let alias = binding::from_value::<model::LicenseRecordSummary>(json!({
            "license_count": 3,
            "freeform_tags": {"b": "2", "a": "1"},
            "id": "r1",
        }))?;
        assert_eq!(wire, alias);
        let hasher = RandomState::new();
        assert_eq!(hasher.hash_one(&wire), hasher.hash_one(&alias));

        let other = wire.clone().set_license_count(4);
        assert_ne!(hasher.hash_one(&wire), hasher.hash_one(&other));
        Ok(())
    }

    #[test]
    fn request_with_invalid_sort_order() -> Result<()> {
        let request =
            binding::from_value::<model::ListProductLicensesRequest>(json!({"sortOrder": "SIDEWAYS"}))?;
        let err = request.validate().expect_err("SIDEWAYS is not declared");
        assert_eq!(
            err.as_binding(),
            Some(&BindingError::InvalidEnumValue {
                parameter: "sortOrder",
                value: "SIDEWAYS".to_string(),
                allowed: "ASC, DESC".to_string(),
            })
        );
        assert!(err.to_string().contains("ASC, DESC"), "{err}");
        Ok(())
    }

    #[test_case(json!({"compartmentId": "c1", "sortOrder": "ASC", "sortBy": "displayName"}); "all set")]
    #[test_case(json!({"compartment_id": "c1"}); "only required")]
    fn request_validates(input: Value) -> Result<()> {
        let request = binding::from_value::<model::ListProductLicensesRequest>(input)?;
        request.validate()?;
        Ok(())
    }

    #[test]
    fn request_missing_compartment() -> Result<()> {
        let request = binding::from_value::<model::ListProductLicensesRequest>(json!({"limit": 10}))?;
        assert_eq!(request.limit, Some(10));
        let err = request.validate().expect_err("compartmentId is required");
        assert_eq!(
            err.as_binding(),
            Some(&BindingError::MissingRequiredParameter("compartmentId"))
        );
        Ok(())
    }

    #[test]
    fn nested_details_are_validated() -> Result<()> {
        let details = binding::from_value::<model::CreateProductLicenseDetails>(json!({
            "compartmentId": "c1",
            "displayName": "n",
            "isVendorOracle": false,
            "vendorName": "Acme",
            "licenseUnit": "OCPU",
            "images": [{"packageVersion": "1.0"}],
        }))?;
        let err = details.validate().expect_err("the image listing id is required");
        assert_eq!(
            err.as_binding(),
            Some(&BindingError::MissingRequiredParameter("listingId"))
        );
        Ok(())
    }

    #[test]
    fn not_an_object() {
        let err = binding::from_value::<model::Configuration>(json!(["ops@example.com"]))
            .expect_err("arrays are not models");
        assert!(!err.is_conflict(), "{err:?}");
        assert!(err.to_string().contains("Configuration"), "{err}");
    }
}
