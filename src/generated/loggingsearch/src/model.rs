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

//! The data models and request types of the Logging Search service.

binding::open_enum! {
    /// The type of a field in the search results.
    pub enum FieldType {
        String = "STRING",
        Number = "NUMBER",
        Boolean = "BOOLEAN",
        Array = "ARRAY",
    }
}

/// The search query and the time range to search.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchLogsDetails {
    /// The start of the time range, inclusive.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "binding::datetime::serialize"
    )]
    pub time_start: Option<time::OffsetDateTime>,

    /// The end of the time range, exclusive.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "binding::datetime::serialize"
    )]
    pub time_end: Option<time::OffsetDateTime>,

    /// The query, `search "ocid1.compartment.oc1..example" | sort by datetime desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,

    /// Include the [FieldInfo] of each field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_return_field_info: Option<bool>,
}

impl SearchLogsDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [time_start][crate::model::SearchLogsDetails::time_start].
    pub fn set_time_start<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_start = Some(v.into());
        self
    }

    /// Sets the value of [time_end][crate::model::SearchLogsDetails::time_end].
    pub fn set_time_end<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_end = Some(v.into());
        self
    }

    /// Sets the value of [search_query][crate::model::SearchLogsDetails::search_query].
    pub fn set_search_query<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.search_query = Some(v.into());
        self
    }

    /// Sets the value of [is_return_field_info][crate::model::SearchLogsDetails::is_return_field_info].
    pub fn set_is_return_field_info<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_return_field_info = Some(v.into());
        self
    }

    /// Fails with a binding error if a required field is missing or an
    /// enum field holds an undeclared value.
    pub fn validate(&self) -> gax::Result<()> {
        if self.time_start.is_none() {
            return Err(gaxi::path_parameter::missing("timeStart"));
        }
        if self.time_end.is_none() {
            return Err(gaxi::path_parameter::missing("timeEnd"));
        }
        gaxi::path_parameter::required(self.search_query.as_deref(), "searchQuery")?;
        Ok(())
    }
}

impl binding::Model for SearchLogsDetails {
    const NAME: &'static str = "SearchLogsDetails";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            time_start: fields.take("timeStart", "time_start")?,
            time_end: fields.take("timeEnd", "time_end")?,
            search_query: fields.take("searchQuery", "search_query")?,
            is_return_field_info: fields
                .take_or("isReturnFieldInfo", "is_return_field_info", false)?,
        })
    }
}

/// Describes a field of the search results.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct FieldInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
}

impl FieldInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [field_name][crate::model::FieldInfo::field_name].
    pub fn set_field_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.field_name = Some(v.into());
        self
    }

    /// Sets the value of [field_type][crate::model::FieldInfo::field_type].
    pub fn set_field_type<T: std::convert::Into<FieldType>>(mut self, v: T) -> Self {
        self.field_type = Some(v.into());
        self
    }
}

impl binding::Model for FieldInfo {
    const NAME: &'static str = "FieldInfo";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            field_name: fields.take("fieldName", "field_name")?,
            field_type: fields.take("fieldType", "field_type")?,
        })
    }
}

/// A single log entry or aggregation row.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchResult {
    /// The content of the result, its shape depends on the query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl SearchResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [data][crate::model::SearchResult::data].
    pub fn set_data<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.data = Some(v.into());
        self
    }
}

impl binding::Model for SearchResult {
    const NAME: &'static str = "SearchResult";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            data: fields.take("data", "data")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchResultSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_count: Option<i32>,
}

impl SearchResultSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [result_count][crate::model::SearchResultSummary::result_count].
    pub fn set_result_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.result_count = Some(v.into());
        self
    }

    /// Sets the value of [field_count][crate::model::SearchResultSummary::field_count].
    pub fn set_field_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.field_count = Some(v.into());
        self
    }
}

impl binding::Model for SearchResultSummary {
    const NAME: &'static str = "SearchResultSummary";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            result_count: fields.take("resultCount", "result_count")?,
            field_count: fields.take("fieldCount", "field_count")?,
        })
    }
}

/// A page of search results.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchResponse {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<SearchResult>,

    /// Present when `isReturnFieldInfo` is set.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SearchResultSummary>,
}

impl SearchResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [results][crate::model::SearchResponse::results].
    pub fn set_results<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<SearchResult>,
    {
        use std::iter::Iterator;
        self.results = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [fields][crate::model::SearchResponse::fields].
    pub fn set_fields<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<FieldInfo>,
    {
        use std::iter::Iterator;
        self.fields = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [summary][crate::model::SearchResponse::summary].
    pub fn set_summary<T: std::convert::Into<SearchResultSummary>>(mut self, v: T) -> Self {
        self.summary = Some(v.into());
        self
    }
}

impl binding::Model for SearchResponse {
    const NAME: &'static str = "SearchResponse";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            results: fields.take_list("results", "results")?,
            fields: fields.take_list("fields", "fields")?,
            summary: fields.take("summary", "summary")?,
        })
    }
}

/// The request message for [search_logs][crate::client::LogSearch::search_logs].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchLogsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_logs_details: Option<SearchLogsDetails>,

    /// The maximum number of results per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    /// The `opc-next-page` value of the previous response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

impl SearchLogsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [search_logs_details][crate::model::SearchLogsRequest::search_logs_details].
    pub fn set_search_logs_details<T: std::convert::Into<SearchLogsDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.search_logs_details = Some(v.into());
        self
    }

    /// Sets the value of [limit][crate::model::SearchLogsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }

    /// Sets the value of [page][crate::model::SearchLogsRequest::page].
    pub fn set_page<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.page = Some(v.into());
        self
    }

    /// Fails with a binding error if a required field is missing or an
    /// enum field holds an undeclared value.
    pub fn validate(&self) -> gax::Result<()> {
        match &self.search_logs_details {
            Some(v) => v.validate()?,
            None => return Err(gaxi::path_parameter::missing("searchLogsDetails")),
        }
        Ok(())
    }
}

impl binding::Model for SearchLogsRequest {
    const NAME: &'static str = "SearchLogsRequest";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            search_logs_details: fields.take("searchLogsDetails", "search_logs_details")?,
            limit: fields.take("limit", "limit")?,
            page: fields.take("page", "page")?,
        })
    }
}

/// The response of [search_logs][crate::client::LogSearch::search_logs].
///
/// Wraps the page of results with the token for the next page.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct SearchLogsResponse {
    pub search_response: SearchResponse,

    /// The `opc-next-page` header. Absent on the last page.
    pub opc_next_page: Option<String>,

    pub opc_request_id: Option<String>,
}

impl std::convert::From<gax::response::Response<SearchResponse>> for SearchLogsResponse {
    fn from(response: gax::response::Response<SearchResponse>) -> Self {
        let opc_next_page = response.opc_next_page().map(str::to_string);
        let opc_request_id = response.opc_request_id().map(str::to_string);
        Self {
            search_response: response.into_body(),
            opc_next_page,
            opc_request_id,
        }
    }
}

impl gax::paginator::PageableResponse for SearchLogsResponse {
    type PageItem = SearchResult;

    fn items(self) -> Vec<Self::PageItem> {
        self.search_response.results
    }

    fn next_page_token(&self) -> String {
        self.opc_next_page.clone().unwrap_or_default()
    }
}

binding::model_traits!(
    SearchLogsDetails,
    FieldInfo,
    SearchResult,
    SearchResultSummary,
    SearchResponse,
    SearchLogsRequest,
);
