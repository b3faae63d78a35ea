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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such tests can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

#![allow(rustdoc::broken_intra_doc_links)]

pub(crate) mod dynamic;

/// Defines the trait used to implement [super::client::OperationsInsights].
///
/// Application developers may need to implement this trait to mock
/// `client::OperationsInsights`. In other use-cases, application developers only
/// use `client::OperationsInsights` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new operations routinely. Consequently, this trait gains new
/// methods too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait OperationsInsights: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::OperationsInsights::get_database_insight].
    fn get_database_insight(
        &self,
        _req: crate::model::GetDatabaseInsightRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DatabaseInsight>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::OperationsInsights::list_database_insights].
    fn list_database_insights(
        &self,
        _req: crate::model::ListDatabaseInsightsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DatabaseInsightsCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::OperationsInsights::list_host_configurations].
    fn list_host_configurations(
        &self,
        _req: crate::model::ListHostConfigurationsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::HostConfigurationCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::OperationsInsights::query_opsi_data_object_data].
    fn query_opsi_data_object_data(
        &self,
        _req: crate::model::QueryOpsiDataObjectDataRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::QueryDataObjectResultSetRowsCollection>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::OperationsInsights::summarize_sql_insights].
    fn summarize_sql_insights(
        &self,
        _req: crate::model::SummarizeSqlInsightsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::SqlInsightAggregationCollection>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }
}
