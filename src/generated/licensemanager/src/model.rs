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

//! The data models and request types of the License Manager service.

use std::collections::HashMap;

binding::open_enum! {
    /// The unit used to count licenses.
    pub enum LicenseUnit {
        Ocpu = "OCPU",
        NamedUserPlus = "NAMED_USER_PLUS",
        Processors = "PROCESSORS",
    }
}

binding::open_enum! {
    /// The lifecycle state of a product license or license record.
    pub enum LifeCycleState {
        Active = "ACTIVE",
        Creating = "CREATING",
        Deleting = "DELETING",
        Deleted = "DELETED",
        Failed = "FAILED",
        Updating = "UPDATING",
    }
}

binding::open_enum! {
    /// The compliance status of a product license.
    pub enum Status {
        Incomplete = "INCOMPLETE",
        IssuesFound = "ISSUES_FOUND",
        Warning = "WARNING",
        Ok = "OK",
    }
}

binding::open_enum! {
    /// The sort order for list operations.
    pub enum SortOrder {
        Asc = "ASC",
        Desc = "DESC",
    }
}

binding::open_enum! {
    /// The field used to sort list results.
    pub enum SortBy {
        TotalLicenseUnitsConsumed = "totalLicenseUnitsConsumed",
        DisplayName = "displayName",
        TimeCreated = "timeCreated",
    }
}

/// The marketplace image associated with a product license.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImageResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_name: Option<String>,
}

impl ImageResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::ImageResponse::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [listing_id][crate::model::ImageResponse::listing_id].
    pub fn set_listing_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.listing_id = Some(v.into());
        self
    }

    /// Sets the value of [package_version][crate::model::ImageResponse::package_version].
    pub fn set_package_version<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.package_version = Some(v.into());
        self
    }

    /// Sets the value of [publisher][crate::model::ImageResponse::publisher].
    pub fn set_publisher<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.publisher = Some(v.into());
        self
    }

    /// Sets the value of [listing_name][crate::model::ImageResponse::listing_name].
    pub fn set_listing_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.listing_name = Some(v.into());
        self
    }
}

impl binding::Model for ImageResponse {
    const NAME: &'static str = "ImageResponse";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            id: fields.take("id", "id")?,
            listing_id: fields.take("listingId", "listing_id")?,
            package_version: fields.take("packageVersion", "package_version")?,
            publisher: fields.take("publisher", "publisher")?,
            listing_name: fields.take("listingName", "listing_name")?,
        })
    }
}

/// Identifies a marketplace image for a product license.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImageDetails {
    /// The marketplace listing OCID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_id: Option<String>,

    /// The image package version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_version: Option<String>,
}

impl ImageDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [listing_id][crate::model::ImageDetails::listing_id].
    pub fn set_listing_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.listing_id = Some(v.into());
        self
    }

    /// Sets the value of [package_version][crate::model::ImageDetails::package_version].
    pub fn set_package_version<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.package_version = Some(v.into());
        self
    }

    /// Fails with a binding error if a required field is missing or an
    /// enum field holds an undeclared value.
    pub fn validate(&self) -> gax::Result<()> {
        gaxi::path_parameter::required(self.listing_id.as_deref(), "listingId")?;
        gaxi::path_parameter::required(self.package_version.as_deref(), "packageVersion")?;
        Ok(())
    }
}

impl binding::Model for ImageDetails {
    const NAME: &'static str = "ImageDetails";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            listing_id: fields.take("listingId", "listing_id")?,
            package_version: fields.take("packageVersion", "package_version")?,
        })
    }
}

/// A product license, the entitlement to run a product.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ProductLicense {
    /// The product license OCID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The compartment containing the product license.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_description: Option<String>,

    /// Whether the vendor is Oracle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_vendor_oracle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_unit: Option<LicenseUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<LifeCycleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_active_license_unit_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_license_record_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_license_units_consumed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_license_record_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_over_subscribed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_unlimited: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// When the product license was created, an RFC 3339 timestamp.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "binding::datetime::serialize"
    )]
    pub time_created: Option<time::OffsetDateTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "binding::datetime::serialize"
    )]
    pub time_updated: Option<time::OffsetDateTime>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ImageResponse>,

    /// Simple key-value pairs without predefined names or scope.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub freeform_tags: HashMap<String, String>,

    /// Tags scoped to a namespace, `{"Operations": {"CostCenter": "42"}}`.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub defined_tags: HashMap<String, HashMap<String, serde_json::Value>>,

    /// Tags set by the service.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub system_tags: HashMap<String, HashMap<String, serde_json::Value>>,
}

impl ProductLicense {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::ProductLicense::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::ProductLicense::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [status][crate::model::ProductLicense::status].
    pub fn set_status<T: std::convert::Into<Status>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [status_description][crate::model::ProductLicense::status_description].
    pub fn set_status_description<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.status_description = Some(v.into());
        self
    }

    /// Sets the value of [is_vendor_oracle][crate::model::ProductLicense::is_vendor_oracle].
    pub fn set_is_vendor_oracle<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_vendor_oracle = Some(v.into());
        self
    }

    /// Sets the value of [license_unit][crate::model::ProductLicense::license_unit].
    pub fn set_license_unit<T: std::convert::Into<LicenseUnit>>(mut self, v: T) -> Self {
        self.license_unit = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::ProductLicense::lifecycle_state].
    pub fn set_lifecycle_state<T: std::convert::Into<LifeCycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = Some(v.into());
        self
    }

    /// Sets the value of [total_active_license_unit_count][crate::model::ProductLicense::total_active_license_unit_count].
    pub fn set_total_active_license_unit_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.total_active_license_unit_count = Some(v.into());
        self
    }

    /// Sets the value of [active_license_record_count][crate::model::ProductLicense::active_license_record_count].
    pub fn set_active_license_record_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.active_license_record_count = Some(v.into());
        self
    }

    /// Sets the value of [total_license_units_consumed][crate::model::ProductLicense::total_license_units_consumed].
    pub fn set_total_license_units_consumed<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.total_license_units_consumed = Some(v.into());
        self
    }

    /// Sets the value of [total_license_record_count][crate::model::ProductLicense::total_license_record_count].
    pub fn set_total_license_record_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.total_license_record_count = Some(v.into());
        self
    }

    /// Sets the value of [is_over_subscribed][crate::model::ProductLicense::is_over_subscribed].
    pub fn set_is_over_subscribed<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_over_subscribed = Some(v.into());
        self
    }

    /// Sets the value of [is_unlimited][crate::model::ProductLicense::is_unlimited].
    pub fn set_is_unlimited<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_unlimited = Some(v.into());
        self
    }

    /// Sets the value of [vendor_name][crate::model::ProductLicense::vendor_name].
    pub fn set_vendor_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.vendor_name = Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::ProductLicense::display_name].
    pub fn set_display_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::ProductLicense::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::ProductLicense::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = Some(v.into());
        self
    }

    /// Sets the value of [images][crate::model::ProductLicense::images].
    pub fn set_images<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<ImageResponse>,
    {
        use std::iter::Iterator;
        self.images = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [freeform_tags][crate::model::ProductLicense::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<String>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::ProductLicense::defined_tags].
    pub fn set_defined_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<String>,
        V: std::convert::Into<HashMap<String, serde_json::Value>>,
    {
        use std::iter::Iterator;
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [system_tags][crate::model::ProductLicense::system_tags].
    pub fn set_system_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<String>,
        V: std::convert::Into<HashMap<String, serde_json::Value>>,
    {
        use std::iter::Iterator;
        self.system_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

impl binding::Model for ProductLicense {
    const NAME: &'static str = "ProductLicense";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            id: fields.take("id", "id")?,
            compartment_id: fields.take("compartmentId", "compartment_id")?,
            status: fields.take("status", "status")?,
            status_description: fields.take("statusDescription", "status_description")?,
            is_vendor_oracle: fields.take("isVendorOracle", "is_vendor_oracle")?,
            license_unit: fields.take("licenseUnit", "license_unit")?,
            lifecycle_state: fields.take("lifecycleState", "lifecycle_state")?,
            total_active_license_unit_count: fields
                .take("totalActiveLicenseUnitCount", "total_active_license_unit_count")?,
            active_license_record_count: fields
                .take("activeLicenseRecordCount", "active_license_record_count")?,
            total_license_units_consumed: fields
                .take("totalLicenseUnitsConsumed", "total_license_units_consumed")?,
            total_license_record_count: fields
                .take("totalLicenseRecordCount", "total_license_record_count")?,
            is_over_subscribed: fields.take("isOverSubscribed", "is_over_subscribed")?,
            is_unlimited: fields.take("isUnlimited", "is_unlimited")?,
            vendor_name: fields.take("vendorName", "vendor_name")?,
            display_name: fields.take("displayName", "display_name")?,
            time_created: fields.take("timeCreated", "time_created")?,
            time_updated: fields.take("timeUpdated", "time_updated")?,
            images: fields.take_list("images", "images")?,
            freeform_tags: fields.take_map("freeformTags", "freeform_tags")?,
            defined_tags: fields.take_map("definedTags", "defined_tags")?,
            system_tags: fields.take_map("systemTags", "system_tags")?,
        })
    }
}

/// A summary of a [ProductLicense], returned by list operations.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ProductLicenseSummary {
    /// The product license OCID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The compartment containing the product license.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_description: Option<String>,

    /// Whether the vendor is Oracle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_vendor_oracle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_unit: Option<LicenseUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<LifeCycleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_active_license_unit_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_license_record_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_license_units_consumed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_license_record_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_over_subscribed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_unlimited: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// When the product license was created, an RFC 3339 timestamp.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "binding::datetime::serialize"
    )]
    pub time_created: Option<time::OffsetDateTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "binding::datetime::serialize"
    )]
    pub time_updated: Option<time::OffsetDateTime>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ImageResponse>,

    /// Simple key-value pairs without predefined names or scope.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub freeform_tags: HashMap<String, String>,

    /// Tags scoped to a namespace, `{"Operations": {"CostCenter": "42"}}`.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub defined_tags: HashMap<String, HashMap<String, serde_json::Value>>,

    /// Tags set by the service.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub system_tags: HashMap<String, HashMap<String, serde_json::Value>>,
}

impl ProductLicenseSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::ProductLicenseSummary::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::ProductLicenseSummary::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [status][crate::model::ProductLicenseSummary::status].
    pub fn set_status<T: std::convert::Into<Status>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [status_description][crate::model::ProductLicenseSummary::status_description].
    pub fn set_status_description<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.status_description = Some(v.into());
        self
    }

    /// Sets the value of [is_vendor_oracle][crate::model::ProductLicenseSummary::is_vendor_oracle].
    pub fn set_is_vendor_oracle<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_vendor_oracle = Some(v.into());
        self
    }

    /// Sets the value of [license_unit][crate::model::ProductLicenseSummary::license_unit].
    pub fn set_license_unit<T: std::convert::Into<LicenseUnit>>(mut self, v: T) -> Self {
        self.license_unit = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::ProductLicenseSummary::lifecycle_state].
    pub fn set_lifecycle_state<T: std::convert::Into<LifeCycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = Some(v.into());
        self
    }

    /// Sets the value of [total_active_license_unit_count][crate::model::ProductLicenseSummary::total_active_license_unit_count].
    pub fn set_total_active_license_unit_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.total_active_license_unit_count = Some(v.into());
        self
    }

    /// Sets the value of [active_license_record_count][crate::model::ProductLicenseSummary::active_license_record_count].
    pub fn set_active_license_record_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.active_license_record_count = Some(v.into());
        self
    }

    /// Sets the value of [total_license_units_consumed][crate::model::ProductLicenseSummary::total_license_units_consumed].
    pub fn set_total_license_units_consumed<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.total_license_units_consumed = Some(v.into());
        self
    }

    /// Sets the value of [total_license_record_count][crate::model::ProductLicenseSummary::total_license_record_count].
    pub fn set_total_license_record_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.total_license_record_count = Some(v.into());
        self
    }

    /// Sets the value of [is_over_subscribed][crate::model::ProductLicenseSummary::is_over_subscribed].
    pub fn set_is_over_subscribed<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_over_subscribed = Some(v.into());
        self
    }

    /// Sets the value of [is_unlimited][crate::model::ProductLicenseSummary::is_unlimited].
    pub fn set_is_unlimited<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_unlimited = Some(v.into());
        self
    }

    /// Sets the value of [vendor_name][crate::model::ProductLicenseSummary::vendor_name].
    pub fn set_vendor_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.vendor_name = Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::ProductLicenseSummary::display_name].
    pub fn set_display_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::ProductLicenseSummary::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::ProductLicenseSummary::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = Some(v.into());
        self
    }

    /// Sets the value of [images][crate::model::ProductLicenseSummary::images].
    pub fn set_images<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<ImageResponse>,
    {
        use std::iter::Iterator;
        self.images = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [freeform_tags][crate::model::ProductLicenseSummary::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<String>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::ProductLicenseSummary::defined_tags].
    pub fn set_defined_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<String>,
        V: std::convert::Into<HashMap<String, serde_json::Value>>,
    {
        use std::iter::Iterator;
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [system_tags][crate::model::ProductLicenseSummary::system_tags].
    pub fn set_system_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<String>,
        V: std::convert::Into<HashMap<String, serde_json::Value>>,
    {
        use std::iter::Iterator;
        self.system_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

impl binding::Model for ProductLicenseSummary {
    const NAME: &'static str = "ProductLicenseSummary";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            id: fields.take("id", "id")?,
            compartment_id: fields.take("compartmentId", "compartment_id")?,
            status: fields.take("status", "status")?,
            status_description: fields.take("statusDescription", "status_description")?,
            is_vendor_oracle: fields.take("isVendorOracle", "is_vendor_oracle")?,
            license_unit: fields.take("licenseUnit", "license_unit")?,
            lifecycle_state: fields.take("lifecycleState", "lifecycle_state")?,
            total_active_license_unit_count: fields
                .take("totalActiveLicenseUnitCount", "total_active_license_unit_count")?,
            active_license_record_count: fields
                .take("activeLicenseRecordCount", "active_license_record_count")?,
            total_license_units_consumed: fields
                .take("totalLicenseUnitsConsumed", "total_license_units_consumed")?,
            total_license_record_count: fields
                .take("totalLicenseRecordCount", "total_license_record_count")?,
            is_over_subscribed: fields.take("isOverSubscribed", "is_over_subscribed")?,
            is_unlimited: fields.take("isUnlimited", "is_unlimited")?,
            vendor_name: fields.take("vendorName", "vendor_name")?,
            display_name: fields.take("displayName", "display_name")?,
            time_created: fields.take("timeCreated", "time_created")?,
            time_updated: fields.take("timeUpdated", "time_updated")?,
            images: fields.take_list("images", "images")?,
            freeform_tags: fields.take_map("freeformTags", "freeform_tags")?,
            defined_tags: fields.take_map("definedTags", "defined_tags")?,
            system_tags: fields.take_map("systemTags", "system_tags")?,
        })
    }
}

/// A page of product licenses.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ProductLicenseCollection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ProductLicenseSummary>,
}

impl ProductLicenseCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::ProductLicenseCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<ProductLicenseSummary>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl binding::Model for ProductLicenseCollection {
    const NAME: &'static str = "ProductLicenseCollection";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            items: fields.take_list("items", "items")?,
        })
    }
}

/// A license record, a purchase of license units for a product license.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct LicenseRecord {
    /// The license record OCID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// The product license this record belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_license_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_perpetual: Option<bool>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "binding::datetime::serialize"
    )]
    pub expiration_date: Option<time::OffsetDateTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "binding::datetime::serialize"
    )]
    pub support_end_date: Option<time::OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_unlimited: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<LifeCycleState>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "binding::datetime::serialize"
    )]
    pub time_created: Option<time::OffsetDateTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "binding::datetime::serialize"
    )]
    pub time_updated: Option<time::OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_unit: Option<LicenseUnit>,

    /// The product license name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_license: Option<String>,

    /// Simple key-value pairs without predefined names or scope.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub freeform_tags: HashMap<String, String>,

    /// Tags scoped to a namespace, `{"Operations": {"CostCenter": "42"}}`.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub defined_tags: HashMap<String, HashMap<String, serde_json::Value>>,

    /// Tags set by the service.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub system_tags: HashMap<String, HashMap<String, serde_json::Value>>,
}

impl LicenseRecord {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::LicenseRecord::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::LicenseRecord::display_name].
    pub fn set_display_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [product_license_id][crate::model::LicenseRecord::product_license_id].
    pub fn set_product_license_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.product_license_id = Some(v.into());
        self
    }

    /// Sets the value of [is_perpetual][crate::model::LicenseRecord::is_perpetual].
    pub fn set_is_perpetual<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_perpetual = Some(v.into());
        self
    }

    /// Sets the value of [expiration_date][crate::model::LicenseRecord::expiration_date].
    pub fn set_expiration_date<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.expiration_date = Some(v.into());
        self
    }

    /// Sets the value of [support_end_date][crate::model::LicenseRecord::support_end_date].
    pub fn set_support_end_date<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.support_end_date = Some(v.into());
        self
    }

    /// Sets the value of [is_unlimited][crate::model::LicenseRecord::is_unlimited].
    pub fn set_is_unlimited<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_unlimited = Some(v.into());
        self
    }

    /// Sets the value of [license_count][crate::model::LicenseRecord::license_count].
    pub fn set_license_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.license_count = Some(v.into());
        self
    }

    /// Sets the value of [product_id][crate::model::LicenseRecord::product_id].
    pub fn set_product_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.product_id = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::LicenseRecord::lifecycle_state].
    pub fn set_lifecycle_state<T: std::convert::Into<LifeCycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::LicenseRecord::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::LicenseRecord::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = Some(v.into());
        self
    }

    /// Sets the value of [license_unit][crate::model::LicenseRecord::license_unit].
    pub fn set_license_unit<T: std::convert::Into<LicenseUnit>>(mut self, v: T) -> Self {
        self.license_unit = Some(v.into());
        self
    }

    /// Sets the value of [product_license][crate::model::LicenseRecord::product_license].
    pub fn set_product_license<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.product_license = Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::LicenseRecord::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<String>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::LicenseRecord::defined_tags].
    pub fn set_defined_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<String>,
        V: std::convert::Into<HashMap<String, serde_json::Value>>,
    {
        use std::iter::Iterator;
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [system_tags][crate::model::LicenseRecord::system_tags].
    pub fn set_system_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<String>,
        V: std::convert::Into<HashMap<String, serde_json::Value>>,
    {
        use std::iter::Iterator;
        self.system_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

impl binding::Model for LicenseRecord {
    const NAME: &'static str = "LicenseRecord";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            id: fields.take("id", "id")?,
            display_name: fields.take("displayName", "display_name")?,
            product_license_id: fields.take("productLicenseId", "product_license_id")?,
            is_perpetual: fields.take("isPerpetual", "is_perpetual")?,
            expiration_date: fields.take("expirationDate", "expiration_date")?,
            support_end_date: fields.take("supportEndDate", "support_end_date")?,
            is_unlimited: fields.take("isUnlimited", "is_unlimited")?,
            license_count: fields.take("licenseCount", "license_count")?,
            product_id: fields.take("productId", "product_id")?,
            lifecycle_state: fields.take("lifecycleState", "lifecycle_state")?,
            time_created: fields.take("timeCreated", "time_created")?,
            time_updated: fields.take("timeUpdated", "time_updated")?,
            license_unit: fields.take("licenseUnit", "license_unit")?,
            product_license: fields.take("productLicense", "product_license")?,
            freeform_tags: fields.take_map("freeformTags", "freeform_tags")?,
            defined_tags: fields.take_map("definedTags", "defined_tags")?,
            system_tags: fields.take_map("systemTags", "system_tags")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct LicenseRecordSummary {
    /// The license record OCID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// The product license this record belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_license_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_perpetual: Option<bool>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "binding::datetime::serialize"
    )]
    pub expiration_date: Option<time::OffsetDateTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "binding::datetime::serialize"
    )]
    pub support_end_date: Option<time::OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_unlimited: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<LifeCycleState>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "binding::datetime::serialize"
    )]
    pub time_created: Option<time::OffsetDateTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "binding::datetime::serialize"
    )]
    pub time_updated: Option<time::OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_unit: Option<LicenseUnit>,

    /// The product license name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_license: Option<String>,

    /// Simple key-value pairs without predefined names or scope.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub freeform_tags: HashMap<String, String>,

    /// Tags scoped to a namespace, `{"Operations": {"CostCenter": "42"}}`.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub defined_tags: HashMap<String, HashMap<String, serde_json::Value>>,

    /// Tags set by the service.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub system_tags: HashMap<String, HashMap<String, serde_json::Value>>,
}

impl LicenseRecordSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::LicenseRecordSummary::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::LicenseRecordSummary::display_name].
    pub fn set_display_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [product_license_id][crate::model::LicenseRecordSummary::product_license_id].
    pub fn set_product_license_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.product_license_id = Some(v.into());
        self
    }

    /// Sets the value of [is_perpetual][crate::model::LicenseRecordSummary::is_perpetual].
    pub fn set_is_perpetual<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_perpetual = Some(v.into());
        self
    }

    /// Sets the value of [expiration_date][crate::model::LicenseRecordSummary::expiration_date].
    pub fn set_expiration_date<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.expiration_date = Some(v.into());
        self
    }

    /// Sets the value of [support_end_date][crate::model::LicenseRecordSummary::support_end_date].
    pub fn set_support_end_date<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.support_end_date = Some(v.into());
        self
    }

    /// Sets the value of [is_unlimited][crate::model::LicenseRecordSummary::is_unlimited].
    pub fn set_is_unlimited<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_unlimited = Some(v.into());
        self
    }

    /// Sets the value of [license_count][crate::model::LicenseRecordSummary::license_count].
    pub fn set_license_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.license_count = Some(v.into());
        self
    }

    /// Sets the value of [product_id][crate::model::LicenseRecordSummary::product_id].
    pub fn set_product_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.product_id = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::LicenseRecordSummary::lifecycle_state].
    pub fn set_lifecycle_state<T: std::convert::Into<LifeCycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::LicenseRecordSummary::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::LicenseRecordSummary::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = Some(v.into());
        self
    }

    /// Sets the value of [license_unit][crate::model::LicenseRecordSummary::license_unit].
    pub fn set_license_unit<T: std::convert::Into<LicenseUnit>>(mut self, v: T) -> Self {
        self.license_unit = Some(v.into());
        self
    }

    /// Sets the value of [product_license][crate::model::LicenseRecordSummary::product_license].
    pub fn set_product_license<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.product_license = Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::LicenseRecordSummary::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<String>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::LicenseRecordSummary::defined_tags].
    pub fn set_defined_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<String>,
        V: std::convert::Into<HashMap<String, serde_json::Value>>,
    {
        use std::iter::Iterator;
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [system_tags][crate::model::LicenseRecordSummary::system_tags].
    pub fn set_system_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<String>,
        V: std::convert::Into<HashMap<String, serde_json::Value>>,
    {
        use std::iter::Iterator;
        self.system_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

impl binding::Model for LicenseRecordSummary {
    const NAME: &'static str = "LicenseRecordSummary";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            id: fields.take("id", "id")?,
            display_name: fields.take("displayName", "display_name")?,
            product_license_id: fields.take("productLicenseId", "product_license_id")?,
            is_perpetual: fields.take("isPerpetual", "is_perpetual")?,
            expiration_date: fields.take("expirationDate", "expiration_date")?,
            support_end_date: fields.take("supportEndDate", "support_end_date")?,
            is_unlimited: fields.take("isUnlimited", "is_unlimited")?,
            license_count: fields.take("licenseCount", "license_count")?,
            product_id: fields.take("productId", "product_id")?,
            lifecycle_state: fields.take("lifecycleState", "lifecycle_state")?,
            time_created: fields.take("timeCreated", "time_created")?,
            time_updated: fields.take("timeUpdated", "time_updated")?,
            license_unit: fields.take("licenseUnit", "license_unit")?,
            product_license: fields.take("productLicense", "product_license")?,
            freeform_tags: fields.take_map("freeformTags", "freeform_tags")?,
            defined_tags: fields.take_map("definedTags", "defined_tags")?,
            system_tags: fields.take_map("systemTags", "system_tags")?,
        })
    }
}

/// A page of license records.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct LicenseRecordCollection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<LicenseRecordSummary>,
}

impl LicenseRecordCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LicenseRecordCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LicenseRecordSummary>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl binding::Model for LicenseRecordCollection {
    const NAME: &'static str = "LicenseRecordCollection";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            items: fields.take_list("items", "items")?,
        })
    }
}

/// The License Manager configuration of a compartment.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Configuration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,

    /// The addresses notified about compliance issues.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub email_ids: Vec<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "binding::datetime::serialize"
    )]
    pub time_created: Option<time::OffsetDateTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "binding::datetime::serialize"
    )]
    pub time_updated: Option<time::OffsetDateTime>,
}

impl Configuration {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::Configuration::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [email_ids][crate::model::Configuration::email_ids].
    pub fn set_email_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.email_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [time_created][crate::model::Configuration::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::Configuration::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = Some(v.into());
        self
    }
}

impl binding::Model for Configuration {
    const NAME: &'static str = "Configuration";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            compartment_id: fields.take("compartmentId", "compartment_id")?,
            email_ids: fields.take_list("emailIds", "email_ids")?,
            time_created: fields.take("timeCreated", "time_created")?,
            time_updated: fields.take("timeUpdated", "time_updated")?,
        })
    }
}

/// Aggregated license counts for a compartment.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct LicenseMetric {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_product_license_count: Option<i32>,

    /// Instances using bring-your-own-license images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_byol_instance_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_license_included_instance_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_record_expiring_soon_count: Option<i32>,
}

impl LicenseMetric {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [total_product_license_count][crate::model::LicenseMetric::total_product_license_count].
    pub fn set_total_product_license_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.total_product_license_count = Some(v.into());
        self
    }

    /// Sets the value of [total_byol_instance_count][crate::model::LicenseMetric::total_byol_instance_count].
    pub fn set_total_byol_instance_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.total_byol_instance_count = Some(v.into());
        self
    }

    /// Sets the value of [total_license_included_instance_count][crate::model::LicenseMetric::total_license_included_instance_count].
    pub fn set_total_license_included_instance_count<T: std::convert::Into<i32>>(
        mut self,
        v: T,
    ) -> Self {
        self.total_license_included_instance_count = Some(v.into());
        self
    }

    /// Sets the value of [license_record_expiring_soon_count][crate::model::LicenseMetric::license_record_expiring_soon_count].
    pub fn set_license_record_expiring_soon_count<T: std::convert::Into<i32>>(
        mut self,
        v: T,
    ) -> Self {
        self.license_record_expiring_soon_count = Some(v.into());
        self
    }
}

impl binding::Model for LicenseMetric {
    const NAME: &'static str = "LicenseMetric";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            total_product_license_count: fields
                .take("totalProductLicenseCount", "total_product_license_count")?,
            total_byol_instance_count: fields
                .take("totalByolInstanceCount", "total_byol_instance_count")?,
            total_license_included_instance_count: fields.take(
                "totalLicenseIncludedInstanceCount",
                "total_license_included_instance_count",
            )?,
            license_record_expiring_soon_count: fields
                .take("licenseRecordExpiringSoonCount", "license_record_expiring_soon_count")?,
        })
    }
}

/// The details to create a product license.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateProductLicenseDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_vendor_oracle: Option<bool>,

    /// Required when `isVendorOracle` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_unit: Option<LicenseUnit>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ImageDetails>,

    /// Simple key-value pairs without predefined names or scope.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub freeform_tags: HashMap<String, String>,

    /// Tags scoped to a namespace, `{"Operations": {"CostCenter": "42"}}`.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub defined_tags: HashMap<String, HashMap<String, serde_json::Value>>,
}

impl CreateProductLicenseDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::CreateProductLicenseDetails::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::CreateProductLicenseDetails::display_name].
    pub fn set_display_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [is_vendor_oracle][crate::model::CreateProductLicenseDetails::is_vendor_oracle].
    pub fn set_is_vendor_oracle<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_vendor_oracle = Some(v.into());
        self
    }

    /// Sets the value of [vendor_name][crate::model::CreateProductLicenseDetails::vendor_name].
    pub fn set_vendor_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.vendor_name = Some(v.into());
        self
    }

    /// Sets the value of [license_unit][crate::model::CreateProductLicenseDetails::license_unit].
    pub fn set_license_unit<T: std::convert::Into<LicenseUnit>>(mut self, v: T) -> Self {
        self.license_unit = Some(v.into());
        self
    }

    /// Sets the value of [images][crate::model::CreateProductLicenseDetails::images].
    pub fn set_images<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<ImageDetails>,
    {
        use std::iter::Iterator;
        self.images = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [freeform_tags][crate::model::CreateProductLicenseDetails::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<String>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::CreateProductLicenseDetails::defined_tags].
    pub fn set_defined_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<String>,
        V: std::convert::Into<HashMap<String, serde_json::Value>>,
    {
        use std::iter::Iterator;
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Fails with a binding error if a required field is missing or an
    /// enum field holds an undeclared value.
    pub fn validate(&self) -> gax::Result<()> {
        gaxi::query_parameter::check_enum(self.license_unit.as_ref(), "licenseUnit")?;
        gaxi::path_parameter::required(self.compartment_id.as_deref(), "compartmentId")?;
        gaxi::path_parameter::required(self.display_name.as_deref(), "displayName")?;
        if self.is_vendor_oracle.is_none() {
            return Err(gaxi::path_parameter::missing("isVendorOracle"));
        }
        if self.license_unit.is_none() {
            return Err(gaxi::path_parameter::missing("licenseUnit"));
        }
        for v in &self.images {
            v.validate()?;
        }
        Ok(())
    }
}

impl binding::Model for CreateProductLicenseDetails {
    const NAME: &'static str = "CreateProductLicenseDetails";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            compartment_id: fields.take("compartmentId", "compartment_id")?,
            display_name: fields.take("displayName", "display_name")?,
            is_vendor_oracle: fields.take("isVendorOracle", "is_vendor_oracle")?,
            vendor_name: fields.take("vendorName", "vendor_name")?,
            license_unit: fields.take("licenseUnit", "license_unit")?,
            images: fields.take_list("images", "images")?,
            freeform_tags: fields.take_map("freeformTags", "freeform_tags")?,
            defined_tags: fields.take_map("definedTags", "defined_tags")?,
        })
    }
}

/// The details to update a product license.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateProductLicenseDetails {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ImageDetails>,

    /// Simple key-value pairs without predefined names or scope.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub freeform_tags: HashMap<String, String>,

    /// Tags scoped to a namespace, `{"Operations": {"CostCenter": "42"}}`.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub defined_tags: HashMap<String, HashMap<String, serde_json::Value>>,
}

impl UpdateProductLicenseDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [images][crate::model::UpdateProductLicenseDetails::images].
    pub fn set_images<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<ImageDetails>,
    {
        use std::iter::Iterator;
        self.images = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [freeform_tags][crate::model::UpdateProductLicenseDetails::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<String>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::UpdateProductLicenseDetails::defined_tags].
    pub fn set_defined_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<String>,
        V: std::convert::Into<HashMap<String, serde_json::Value>>,
    {
        use std::iter::Iterator;
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Fails with a binding error if a required field is missing or an
    /// enum field holds an undeclared value.
    pub fn validate(&self) -> gax::Result<()> {
        for v in &self.images {
            v.validate()?;
        }
        Ok(())
    }
}

impl binding::Model for UpdateProductLicenseDetails {
    const NAME: &'static str = "UpdateProductLicenseDetails";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            images: fields.take_list("images", "images")?,
            freeform_tags: fields.take_map("freeformTags", "freeform_tags")?,
            defined_tags: fields.take_map("definedTags", "defined_tags")?,
        })
    }
}

/// The details to create a license record.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateLicenseRecordDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Licenses without an expiration date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_perpetual: Option<bool>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "binding::datetime::serialize"
    )]
    pub expiration_date: Option<time::OffsetDateTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "binding::datetime::serialize"
    )]
    pub support_end_date: Option<time::OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_unlimited: Option<bool>,

    /// The number of license units. Ignored for unlimited licenses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,

    /// Simple key-value pairs without predefined names or scope.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub freeform_tags: HashMap<String, String>,

    /// Tags scoped to a namespace, `{"Operations": {"CostCenter": "42"}}`.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub defined_tags: HashMap<String, HashMap<String, serde_json::Value>>,
}

impl CreateLicenseRecordDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [display_name][crate::model::CreateLicenseRecordDetails::display_name].
    pub fn set_display_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [is_perpetual][crate::model::CreateLicenseRecordDetails::is_perpetual].
    pub fn set_is_perpetual<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_perpetual = Some(v.into());
        self
    }

    /// Sets the value of [expiration_date][crate::model::CreateLicenseRecordDetails::expiration_date].
    pub fn set_expiration_date<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.expiration_date = Some(v.into());
        self
    }

    /// Sets the value of [support_end_date][crate::model::CreateLicenseRecordDetails::support_end_date].
    pub fn set_support_end_date<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.support_end_date = Some(v.into());
        self
    }

    /// Sets the value of [is_unlimited][crate::model::CreateLicenseRecordDetails::is_unlimited].
    pub fn set_is_unlimited<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_unlimited = Some(v.into());
        self
    }

    /// Sets the value of [license_count][crate::model::CreateLicenseRecordDetails::license_count].
    pub fn set_license_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.license_count = Some(v.into());
        self
    }

    /// Sets the value of [product_id][crate::model::CreateLicenseRecordDetails::product_id].
    pub fn set_product_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.product_id = Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::CreateLicenseRecordDetails::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<String>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::CreateLicenseRecordDetails::defined_tags].
    pub fn set_defined_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<String>,
        V: std::convert::Into<HashMap<String, serde_json::Value>>,
    {
        use std::iter::Iterator;
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Fails with a binding error if a required field is missing or an
    /// enum field holds an undeclared value.
    pub fn validate(&self) -> gax::Result<()> {
        gaxi::path_parameter::required(self.display_name.as_deref(), "displayName")?;
        if self.is_perpetual.is_none() {
            return Err(gaxi::path_parameter::missing("isPerpetual"));
        }
        if self.is_unlimited.is_none() {
            return Err(gaxi::path_parameter::missing("isUnlimited"));
        }
        Ok(())
    }
}

impl binding::Model for CreateLicenseRecordDetails {
    const NAME: &'static str = "CreateLicenseRecordDetails";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            display_name: fields.take("displayName", "display_name")?,
            is_perpetual: fields.take("isPerpetual", "is_perpetual")?,
            expiration_date: fields.take("expirationDate", "expiration_date")?,
            support_end_date: fields.take("supportEndDate", "support_end_date")?,
            is_unlimited: fields.take("isUnlimited", "is_unlimited")?,
            license_count: fields.take("licenseCount", "license_count")?,
            product_id: fields.take("productId", "product_id")?,
            freeform_tags: fields.take_map("freeformTags", "freeform_tags")?,
            defined_tags: fields.take_map("definedTags", "defined_tags")?,
        })
    }
}

/// The details to update a license record.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateLicenseRecordDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Licenses without an expiration date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_perpetual: Option<bool>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "binding::datetime::serialize"
    )]
    pub expiration_date: Option<time::OffsetDateTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "binding::datetime::serialize"
    )]
    pub support_end_date: Option<time::OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_unlimited: Option<bool>,

    /// The number of license units. Ignored for unlimited licenses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,

    /// Simple key-value pairs without predefined names or scope.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub freeform_tags: HashMap<String, String>,

    /// Tags scoped to a namespace, `{"Operations": {"CostCenter": "42"}}`.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub defined_tags: HashMap<String, HashMap<String, serde_json::Value>>,
}

impl UpdateLicenseRecordDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [display_name][crate::model::UpdateLicenseRecordDetails::display_name].
    pub fn set_display_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [is_perpetual][crate::model::UpdateLicenseRecordDetails::is_perpetual].
    pub fn set_is_perpetual<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_perpetual = Some(v.into());
        self
    }

    /// Sets the value of [expiration_date][crate::model::UpdateLicenseRecordDetails::expiration_date].
    pub fn set_expiration_date<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.expiration_date = Some(v.into());
        self
    }

    /// Sets the value of [support_end_date][crate::model::UpdateLicenseRecordDetails::support_end_date].
    pub fn set_support_end_date<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.support_end_date = Some(v.into());
        self
    }

    /// Sets the value of [is_unlimited][crate::model::UpdateLicenseRecordDetails::is_unlimited].
    pub fn set_is_unlimited<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_unlimited = Some(v.into());
        self
    }

    /// Sets the value of [license_count][crate::model::UpdateLicenseRecordDetails::license_count].
    pub fn set_license_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.license_count = Some(v.into());
        self
    }

    /// Sets the value of [product_id][crate::model::UpdateLicenseRecordDetails::product_id].
    pub fn set_product_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.product_id = Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::UpdateLicenseRecordDetails::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<String>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::UpdateLicenseRecordDetails::defined_tags].
    pub fn set_defined_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<String>,
        V: std::convert::Into<HashMap<String, serde_json::Value>>,
    {
        use std::iter::Iterator;
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Fails with a binding error if a required field is missing or an
    /// enum field holds an undeclared value.
    pub fn validate(&self) -> gax::Result<()> {
        gaxi::path_parameter::required(self.display_name.as_deref(), "displayName")?;
        if self.is_perpetual.is_none() {
            return Err(gaxi::path_parameter::missing("isPerpetual"));
        }
        if self.is_unlimited.is_none() {
            return Err(gaxi::path_parameter::missing("isUnlimited"));
        }
        Ok(())
    }
}

impl binding::Model for UpdateLicenseRecordDetails {
    const NAME: &'static str = "UpdateLicenseRecordDetails";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            display_name: fields.take("displayName", "display_name")?,
            is_perpetual: fields.take("isPerpetual", "is_perpetual")?,
            expiration_date: fields.take("expirationDate", "expiration_date")?,
            support_end_date: fields.take("supportEndDate", "support_end_date")?,
            is_unlimited: fields.take("isUnlimited", "is_unlimited")?,
            license_count: fields.take("licenseCount", "license_count")?,
            product_id: fields.take("productId", "product_id")?,
            freeform_tags: fields.take_map("freeformTags", "freeform_tags")?,
            defined_tags: fields.take_map("definedTags", "defined_tags")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateConfigurationDetails {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub email_ids: Vec<String>,
}

impl UpdateConfigurationDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [email_ids][crate::model::UpdateConfigurationDetails::email_ids].
    pub fn set_email_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.email_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Fails with a binding error if a required field is missing or an
    /// enum field holds an undeclared value.
    pub fn validate(&self) -> gax::Result<()> {
        Ok(())
    }
}

impl binding::Model for UpdateConfigurationDetails {
    const NAME: &'static str = "UpdateConfigurationDetails";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            email_ids: fields.take_list("emailIds", "email_ids")?,
        })
    }
}

/// The request message for [create_product_license][crate::client::LicenseManager::create_product_license].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateProductLicenseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_product_license_details: Option<CreateProductLicenseDetails>,

    /// Makes retries of the request safe. Generated when not set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opc_retry_token: Option<String>,
}

impl CreateProductLicenseRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [create_product_license_details][crate::model::CreateProductLicenseRequest::create_product_license_details].
    pub fn set_create_product_license_details<T: std::convert::Into<CreateProductLicenseDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.create_product_license_details = Some(v.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::CreateProductLicenseRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.opc_retry_token = Some(v.into());
        self
    }

    /// Fails with a binding error if a required field is missing or an
    /// enum field holds an undeclared value.
    pub fn validate(&self) -> gax::Result<()> {
        match &self.create_product_license_details {
            Some(v) => v.validate()?,
            None => return Err(gaxi::path_parameter::missing("createProductLicenseDetails")),
        }
        Ok(())
    }
}

impl binding::Model for CreateProductLicenseRequest {
    const NAME: &'static str = "CreateProductLicenseRequest";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            create_product_license_details: fields
                .take("createProductLicenseDetails", "create_product_license_details")?,
            opc_retry_token: fields.take("opcRetryToken", "opc_retry_token")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetProductLicenseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_license_id: Option<String>,
}

impl GetProductLicenseRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [product_license_id][crate::model::GetProductLicenseRequest::product_license_id].
    pub fn set_product_license_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.product_license_id = Some(v.into());
        self
    }

    /// Fails with a binding error if a required field is missing or an
    /// enum field holds an undeclared value.
    pub fn validate(&self) -> gax::Result<()> {
        gaxi::path_parameter::required(self.product_license_id.as_deref(), "productLicenseId")?;
        Ok(())
    }
}

impl binding::Model for GetProductLicenseRequest {
    const NAME: &'static str = "GetProductLicenseRequest";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            product_license_id: fields.take("productLicenseId", "product_license_id")?,
        })
    }
}

/// The request message for [list_product_licenses][crate::client::LicenseManager::list_product_licenses].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListProductLicensesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,

    /// Include the product licenses of all the subcompartments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_compartment_id_in_subtree: Option<bool>,

    /// The maximum number of items per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    /// The `opc-next-page` value of the previous response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
}

impl ListProductLicensesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::ListProductLicensesRequest::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [is_compartment_id_in_subtree][crate::model::ListProductLicensesRequest::is_compartment_id_in_subtree].
    pub fn set_is_compartment_id_in_subtree<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_compartment_id_in_subtree = Some(v.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListProductLicensesRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }

    /// Sets the value of [page][crate::model::ListProductLicensesRequest::page].
    pub fn set_page<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.page = Some(v.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListProductLicensesRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = Some(v.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListProductLicensesRequest::sort_by].
    pub fn set_sort_by<T: std::convert::Into<SortBy>>(mut self, v: T) -> Self {
        self.sort_by = Some(v.into());
        self
    }

    /// Fails with a binding error if a required field is missing or an
    /// enum field holds an undeclared value.
    pub fn validate(&self) -> gax::Result<()> {
        gaxi::query_parameter::check_enum(self.sort_order.as_ref(), "sortOrder")?;
        gaxi::query_parameter::check_enum(self.sort_by.as_ref(), "sortBy")?;
        gaxi::path_parameter::required(self.compartment_id.as_deref(), "compartmentId")?;
        Ok(())
    }
}

impl binding::Model for ListProductLicensesRequest {
    const NAME: &'static str = "ListProductLicensesRequest";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            compartment_id: fields.take("compartmentId", "compartment_id")?,
            is_compartment_id_in_subtree: fields
                .take("isCompartmentIdInSubtree", "is_compartment_id_in_subtree")?,
            limit: fields.take("limit", "limit")?,
            page: fields.take("page", "page")?,
            sort_order: fields.take("sortOrder", "sort_order")?,
            sort_by: fields.take("sortBy", "sort_by")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateProductLicenseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_license_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_product_license_details: Option<UpdateProductLicenseDetails>,

    /// Applies the change only if the resource `etag` matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_match: Option<String>,
}

impl UpdateProductLicenseRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [product_license_id][crate::model::UpdateProductLicenseRequest::product_license_id].
    pub fn set_product_license_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.product_license_id = Some(v.into());
        self
    }

    /// Sets the value of [update_product_license_details][crate::model::UpdateProductLicenseRequest::update_product_license_details].
    pub fn set_update_product_license_details<T: std::convert::Into<UpdateProductLicenseDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.update_product_license_details = Some(v.into());
        self
    }

    /// Sets the value of [if_match][crate::model::UpdateProductLicenseRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.if_match = Some(v.into());
        self
    }

    /// Fails with a binding error if a required field is missing or an
    /// enum field holds an undeclared value.
    pub fn validate(&self) -> gax::Result<()> {
        gaxi::path_parameter::required(self.product_license_id.as_deref(), "productLicenseId")?;
        match &self.update_product_license_details {
            Some(v) => v.validate()?,
            None => return Err(gaxi::path_parameter::missing("updateProductLicenseDetails")),
        }
        Ok(())
    }
}

impl binding::Model for UpdateProductLicenseRequest {
    const NAME: &'static str = "UpdateProductLicenseRequest";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            product_license_id: fields.take("productLicenseId", "product_license_id")?,
            update_product_license_details: fields
                .take("updateProductLicenseDetails", "update_product_license_details")?,
            if_match: fields.take("ifMatch", "if_match")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteProductLicenseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_license_id: Option<String>,

    /// Applies the change only if the resource `etag` matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_match: Option<String>,
}

impl DeleteProductLicenseRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [product_license_id][crate::model::DeleteProductLicenseRequest::product_license_id].
    pub fn set_product_license_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.product_license_id = Some(v.into());
        self
    }

    /// Sets the value of [if_match][crate::model::DeleteProductLicenseRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.if_match = Some(v.into());
        self
    }

    /// Fails with a binding error if a required field is missing or an
    /// enum field holds an undeclared value.
    pub fn validate(&self) -> gax::Result<()> {
        gaxi::path_parameter::required(self.product_license_id.as_deref(), "productLicenseId")?;
        Ok(())
    }
}

impl binding::Model for DeleteProductLicenseRequest {
    const NAME: &'static str = "DeleteProductLicenseRequest";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            product_license_id: fields.take("productLicenseId", "product_license_id")?,
            if_match: fields.take("ifMatch", "if_match")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateLicenseRecordRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_license_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_license_record_details: Option<CreateLicenseRecordDetails>,

    /// Makes retries of the request safe. Generated when not set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opc_retry_token: Option<String>,
}

impl CreateLicenseRecordRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [product_license_id][crate::model::CreateLicenseRecordRequest::product_license_id].
    pub fn set_product_license_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.product_license_id = Some(v.into());
        self
    }

    /// Sets the value of [create_license_record_details][crate::model::CreateLicenseRecordRequest::create_license_record_details].
    pub fn set_create_license_record_details<T: std::convert::Into<CreateLicenseRecordDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.create_license_record_details = Some(v.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::CreateLicenseRecordRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.opc_retry_token = Some(v.into());
        self
    }

    /// Fails with a binding error if a required field is missing or an
    /// enum field holds an undeclared value.
    pub fn validate(&self) -> gax::Result<()> {
        gaxi::path_parameter::required(self.product_license_id.as_deref(), "productLicenseId")?;
        match &self.create_license_record_details {
            Some(v) => v.validate()?,
            None => return Err(gaxi::path_parameter::missing("createLicenseRecordDetails")),
        }
        Ok(())
    }
}

impl binding::Model for CreateLicenseRecordRequest {
    const NAME: &'static str = "CreateLicenseRecordRequest";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            product_license_id: fields.take("productLicenseId", "product_license_id")?,
            create_license_record_details: fields
                .take("createLicenseRecordDetails", "create_license_record_details")?,
            opc_retry_token: fields.take("opcRetryToken", "opc_retry_token")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetLicenseRecordRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_record_id: Option<String>,
}

impl GetLicenseRecordRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [license_record_id][crate::model::GetLicenseRecordRequest::license_record_id].
    pub fn set_license_record_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.license_record_id = Some(v.into());
        self
    }

    /// Fails with a binding error if a required field is missing or an
    /// enum field holds an undeclared value.
    pub fn validate(&self) -> gax::Result<()> {
        gaxi::path_parameter::required(self.license_record_id.as_deref(), "licenseRecordId")?;
        Ok(())
    }
}

impl binding::Model for GetLicenseRecordRequest {
    const NAME: &'static str = "GetLicenseRecordRequest";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            license_record_id: fields.take("licenseRecordId", "license_record_id")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListLicenseRecordsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_license_id: Option<String>,

    /// The maximum number of items per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    /// The `opc-next-page` value of the previous response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
}

impl ListLicenseRecordsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [product_license_id][crate::model::ListLicenseRecordsRequest::product_license_id].
    pub fn set_product_license_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.product_license_id = Some(v.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListLicenseRecordsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }

    /// Sets the value of [page][crate::model::ListLicenseRecordsRequest::page].
    pub fn set_page<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.page = Some(v.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListLicenseRecordsRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = Some(v.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListLicenseRecordsRequest::sort_by].
    pub fn set_sort_by<T: std::convert::Into<SortBy>>(mut self, v: T) -> Self {
        self.sort_by = Some(v.into());
        self
    }

    /// Fails with a binding error if a required field is missing or an
    /// enum field holds an undeclared value.
    pub fn validate(&self) -> gax::Result<()> {
        gaxi::query_parameter::check_enum(self.sort_order.as_ref(), "sortOrder")?;
        gaxi::query_parameter::check_enum(self.sort_by.as_ref(), "sortBy")?;
        gaxi::path_parameter::required(self.product_license_id.as_deref(), "productLicenseId")?;
        Ok(())
    }
}

impl binding::Model for ListLicenseRecordsRequest {
    const NAME: &'static str = "ListLicenseRecordsRequest";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            product_license_id: fields.take("productLicenseId", "product_license_id")?,
            limit: fields.take("limit", "limit")?,
            page: fields.take("page", "page")?,
            sort_order: fields.take("sortOrder", "sort_order")?,
            sort_by: fields.take("sortBy", "sort_by")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateLicenseRecordRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_record_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_license_record_details: Option<UpdateLicenseRecordDetails>,

    /// Applies the change only if the resource `etag` matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_match: Option<String>,
}

impl UpdateLicenseRecordRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [license_record_id][crate::model::UpdateLicenseRecordRequest::license_record_id].
    pub fn set_license_record_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.license_record_id = Some(v.into());
        self
    }

    /// Sets the value of [update_license_record_details][crate::model::UpdateLicenseRecordRequest::update_license_record_details].
    pub fn set_update_license_record_details<T: std::convert::Into<UpdateLicenseRecordDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.update_license_record_details = Some(v.into());
        self
    }

    /// Sets the value of [if_match][crate::model::UpdateLicenseRecordRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.if_match = Some(v.into());
        self
    }

    /// Fails with a binding error if a required field is missing or an
    /// enum field holds an undeclared value.
    pub fn validate(&self) -> gax::Result<()> {
        gaxi::path_parameter::required(self.license_record_id.as_deref(), "licenseRecordId")?;
        match &self.update_license_record_details {
            Some(v) => v.validate()?,
            None => return Err(gaxi::path_parameter::missing("updateLicenseRecordDetails")),
        }
        Ok(())
    }
}

impl binding::Model for UpdateLicenseRecordRequest {
    const NAME: &'static str = "UpdateLicenseRecordRequest";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            license_record_id: fields.take("licenseRecordId", "license_record_id")?,
            update_license_record_details: fields
                .take("updateLicenseRecordDetails", "update_license_record_details")?,
            if_match: fields.take("ifMatch", "if_match")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteLicenseRecordRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_record_id: Option<String>,

    /// Applies the change only if the resource `etag` matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_match: Option<String>,
}

impl DeleteLicenseRecordRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [license_record_id][crate::model::DeleteLicenseRecordRequest::license_record_id].
    pub fn set_license_record_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.license_record_id = Some(v.into());
        self
    }

    /// Sets the value of [if_match][crate::model::DeleteLicenseRecordRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.if_match = Some(v.into());
        self
    }

    /// Fails with a binding error if a required field is missing or an
    /// enum field holds an undeclared value.
    pub fn validate(&self) -> gax::Result<()> {
        gaxi::path_parameter::required(self.license_record_id.as_deref(), "licenseRecordId")?;
        Ok(())
    }
}

impl binding::Model for DeleteLicenseRecordRequest {
    const NAME: &'static str = "DeleteLicenseRecordRequest";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            license_record_id: fields.take("licenseRecordId", "license_record_id")?,
            if_match: fields.take("ifMatch", "if_match")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetConfigurationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
}

impl GetConfigurationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::GetConfigurationRequest::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Fails with a binding error if a required field is missing or an
    /// enum field holds an undeclared value.
    pub fn validate(&self) -> gax::Result<()> {
        gaxi::path_parameter::required(self.compartment_id.as_deref(), "compartmentId")?;
        Ok(())
    }
}

impl binding::Model for GetConfigurationRequest {
    const NAME: &'static str = "GetConfigurationRequest";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            compartment_id: fields.take("compartmentId", "compartment_id")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateConfigurationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_configuration_details: Option<UpdateConfigurationDetails>,

    /// Applies the change only if the resource `etag` matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_match: Option<String>,
}

impl UpdateConfigurationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::UpdateConfigurationRequest::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [update_configuration_details][crate::model::UpdateConfigurationRequest::update_configuration_details].
    pub fn set_update_configuration_details<T: std::convert::Into<UpdateConfigurationDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.update_configuration_details = Some(v.into());
        self
    }

    /// Sets the value of [if_match][crate::model::UpdateConfigurationRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.if_match = Some(v.into());
        self
    }

    /// Fails with a binding error if a required field is missing or an
    /// enum field holds an undeclared value.
    pub fn validate(&self) -> gax::Result<()> {
        gaxi::path_parameter::required(self.compartment_id.as_deref(), "compartmentId")?;
        match &self.update_configuration_details {
            Some(v) => v.validate()?,
            None => return Err(gaxi::path_parameter::missing("updateConfigurationDetails")),
        }
        Ok(())
    }
}

impl binding::Model for UpdateConfigurationRequest {
    const NAME: &'static str = "UpdateConfigurationRequest";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            compartment_id: fields.take("compartmentId", "compartment_id")?,
            update_configuration_details: fields
                .take("updateConfigurationDetails", "update_configuration_details")?,
            if_match: fields.take("ifMatch", "if_match")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetLicenseMetricRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_compartment_id_in_subtree: Option<bool>,
}

impl GetLicenseMetricRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::GetLicenseMetricRequest::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [is_compartment_id_in_subtree][crate::model::GetLicenseMetricRequest::is_compartment_id_in_subtree].
    pub fn set_is_compartment_id_in_subtree<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_compartment_id_in_subtree = Some(v.into());
        self
    }

    /// Fails with a binding error if a required field is missing or an
    /// enum field holds an undeclared value.
    pub fn validate(&self) -> gax::Result<()> {
        gaxi::path_parameter::required(self.compartment_id.as_deref(), "compartmentId")?;
        Ok(())
    }
}

impl binding::Model for GetLicenseMetricRequest {
    const NAME: &'static str = "GetLicenseMetricRequest";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            compartment_id: fields.take("compartmentId", "compartment_id")?,
            is_compartment_id_in_subtree: fields
                .take("isCompartmentIdInSubtree", "is_compartment_id_in_subtree")?,
        })
    }
}

/// The response of [list_product_licenses][crate::client::LicenseManager::list_product_licenses].
///
/// Wraps the page of results with the token for the next page.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListProductLicensesResponse {
    pub product_license_collection: ProductLicenseCollection,

    /// The `opc-next-page` header. Absent on the last page.
    pub opc_next_page: Option<String>,

    pub opc_request_id: Option<String>,
}

impl std::convert::From<gax::response::Response<ProductLicenseCollection>>
    for ListProductLicensesResponse
{
    fn from(response: gax::response::Response<ProductLicenseCollection>) -> Self {
        let opc_next_page = response.opc_next_page().map(str::to_string);
        let opc_request_id = response.opc_request_id().map(str::to_string);
        Self {
            product_license_collection: response.into_body(),
            opc_next_page,
            opc_request_id,
        }
    }
}

impl gax::paginator::PageableResponse for ListProductLicensesResponse {
    type PageItem = ProductLicenseSummary;

    fn items(self) -> Vec<Self::PageItem> {
        self.product_license_collection.items
    }

    fn next_page_token(&self) -> String {
        self.opc_next_page.clone().unwrap_or_default()
    }
}

/// The response of [list_license_records][crate::client::LicenseManager::list_license_records].
///
/// Wraps the page of results with the token for the next page.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListLicenseRecordsResponse {
    pub license_record_collection: LicenseRecordCollection,

    /// The `opc-next-page` header. Absent on the last page.
    pub opc_next_page: Option<String>,

    pub opc_request_id: Option<String>,
}

impl std::convert::From<gax::response::Response<LicenseRecordCollection>>
    for ListLicenseRecordsResponse
{
    fn from(response: gax::response::Response<LicenseRecordCollection>) -> Self {
        let opc_next_page = response.opc_next_page().map(str::to_string);
        let opc_request_id = response.opc_request_id().map(str::to_string);
        Self {
            license_record_collection: response.into_body(),
            opc_next_page,
            opc_request_id,
        }
    }
}

impl gax::paginator::PageableResponse for ListLicenseRecordsResponse {
    type PageItem = LicenseRecordSummary;

    fn items(self) -> Vec<Self::PageItem> {
        self.license_record_collection.items
    }

    fn next_page_token(&self) -> String {
        self.opc_next_page.clone().unwrap_or_default()
    }
}

binding::model_traits!(
    ImageResponse,
    ImageDetails,
    ProductLicense,
    ProductLicenseSummary,
    ProductLicenseCollection,
    LicenseRecord,
    LicenseRecordSummary,
    LicenseRecordCollection,
    Configuration,
    LicenseMetric,
    CreateProductLicenseDetails,
    UpdateProductLicenseDetails,
    CreateLicenseRecordDetails,
    UpdateLicenseRecordDetails,
    UpdateConfigurationDetails,
    CreateProductLicenseRequest,
    GetProductLicenseRequest,
    ListProductLicensesRequest,
    UpdateProductLicenseRequest,
    DeleteProductLicenseRequest,
    CreateLicenseRecordRequest,
    GetLicenseRecordRequest,
    ListLicenseRecordsRequest,
    UpdateLicenseRecordRequest,
    DeleteLicenseRecordRequest,
    GetConfigurationRequest,
    UpdateConfigurationRequest,
    GetLicenseMetricRequest,
);
