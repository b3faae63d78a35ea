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
    use gax::error::binding::BindingError;
    use gax::options::RequestOptions;
    use gax::response::{Parts, Response};
    use oci_sdk_opsi::client::OperationsInsights;
    use oci_sdk_opsi::model;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    mockall::mock! {
        #[derive(Debug)]
        OperationsInsights {}
        impl oci_sdk_opsi::stub::OperationsInsights for OperationsInsights {
            async fn get_database_insight(&self, req: model::GetDatabaseInsightRequest, _options: RequestOptions) -> gax::Result<Response<model::DatabaseInsight>>;
            async fn list_database_insights(&self, req: model::ListDatabaseInsightsRequest, _options: RequestOptions) -> gax::Result<Response<model::DatabaseInsightsCollection>>;
            async fn query_opsi_data_object_data(&self, req: model::QueryOpsiDataObjectDataRequest, _options: RequestOptions) -> gax::Result<Response<model::QueryDataObjectResultSetRowsCollection>>;
            async fn summarize_sql_insights(&self, req: model::SummarizeSqlInsightsRequest, _options: RequestOptions) -> gax::Result<Response<model::SqlInsightAggregationCollection>>;
        }
    }

    fn with_next_page<T>(body: T, next: Option<&str>) -> Response<T> {
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
    async fn get_database_insight() -> Result<()> {
        let mut mock = MockOperationsInsights::new();
        mock.expect_get_database_insight()
            .withf(|r, _| r.database_insight_id.as_deref() == Some("ocid1.opsidatabaseinsight.oc1..abc"))
            .return_once(|_, _| {
                Ok(Response::from(model::DatabaseInsight::from(
                    model::AutonomousDatabaseInsight::new()
                        .set_id("ocid1.opsidatabaseinsight.oc1..abc")
                        .set_database_name("sales")
                        .set_credential_details(
                            model::CredentialsBySource::new().set_credential_source_name("adb"),
                        ),
                )))
            });

        let client = OperationsInsights::from_stub(mock);
        let got = client
            .get_database_insight()
            .set_database_insight_id("ocid1.opsidatabaseinsight.oc1..abc")
            .send()
            .await?;
        assert_eq!(
            got.entity_source(),
            Some(model::DatabaseEntitySource::AutonomousDatabase)
        );
        let model::DatabaseInsight::AutonomousDatabase(adb) = got else {
            panic!("expected the autonomous database variant");
        };
        assert_eq!(adb.database_name.as_deref(), Some("sales"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn list_database_insights_items() -> Result<()> {
        let mut mock = MockOperationsInsights::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_list_database_insights()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| {
                r.compartment_id.as_deref() == Some("ocid1.compartment.oc1..abc")
                    && r.sort_by == Some(model::DatabaseInsightSortBy::DatabaseName)
                    && r.page.is_none()
            })
            .return_once(|_, _| {
                let items = vec![
                    model::DatabaseInsightSummary::from(
                        model::AutonomousDatabaseInsightSummary::new().set_database_name("a"),
                    ),
                    model::DatabaseInsightSummary::from(
                        model::MacsManagedExternalDatabaseInsightSummary::new()
                            .set_database_name("b"),
                    ),
                ];
                let body = model::DatabaseInsightsCollection::new().set_items(items);
                Ok(with_next_page(body, Some("p2")))
            });
        mock.expect_list_database_insights()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.page.as_deref() == Some("p2"))
            .return_once(|_, _| {
                let items = [model::DatabaseInsightSummary::from(
                    model::DatabaseInsightSummaryBase::new()
                        .set_entity_source("SOMETHING_NEW")
                        .set_database_name("c"),
                )];
                let body = model::DatabaseInsightsCollection::new().set_items(items);
                Ok(with_next_page(body, None))
            });

        let client = OperationsInsights::from_stub(mock);
        let mut items = client
            .list_database_insights()
            .set_compartment_id("ocid1.compartment.oc1..abc")
            .set_sort_by(model::DatabaseInsightSortBy::DatabaseName)
            .by_item();
        let mut names = Vec::new();
        while let Some(item) = items.next().await {
            let item = item?;
            names.push(item.database_name().unwrap_or_default().to_string());
        }
        assert_eq!(names, vec!["a", "b", "c"]);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn list_database_insights_invalid_sort_by() -> Result<()> {
        let client = OperationsInsights::from_stub(MockOperationsInsights::new());
        let err = client
            .list_database_insights()
            .set_sort_by("hostName")
            .send()
            .await
            .expect_err("hostName does not sort database insights");
        assert_eq!(
            err.as_binding(),
            Some(&BindingError::InvalidEnumValue {
                parameter: "sortBy",
                value: "hostName".to_string(),
                allowed: "timeCreated, databaseName, databaseType".to_string(),
            })
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn query_rows() -> Result<()> {
        let mut mock = MockOperationsInsights::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_query_opsi_data_object_data()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| {
                let query = r
                    .query_opsi_data_object_data_details
                    .as_ref()
                    .and_then(|d| d.query.as_ref());
                matches!(query, Some(model::DataObjectQuery::TemplatizedQuery(_)))
                    && r.page.is_none()
            })
            .return_once(|_, _| {
                let body = model::QueryDataObjectResultSetRowsCollection::new()
                    .set_columns_metadata([model::QueryDataObjectResultSetColumnMetadata::new()
                        .set_name("SNAP_ID")
                        .set_data_type_name(model::ColumnDataType::Number)])
                    .set_rows([vec![json!(1)], vec![json!(2)]]);
                Ok(with_next_page(body, Some("rows-2")))
            });
        mock.expect_query_opsi_data_object_data()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.page.as_deref() == Some("rows-2"))
            .return_once(|_, _| {
                let body = model::QueryDataObjectResultSetRowsCollection::new()
                    .set_rows([vec![json!(3)]]);
                Ok(with_next_page(body, None))
            });

        let client = OperationsInsights::from_stub(mock);
        let query = model::DataObjectTemplatizedQuery::new()
            .set_select_list(["SNAP_ID"])
            .set_from_clause("SYS.DBA_HIST_SNAPSHOT");
        let mut rows = client
            .query_opsi_data_object_data()
            .set_compartment_id("ocid1.compartment.oc1..abc")
            .set_query_opsi_data_object_data_details(
                model::QueryOpsiDataObjectDataDetails::new()
                    .set_data_object_identifier("SYS.DBA_HIST_SNAPSHOT")
                    .set_query(query),
            )
            .by_item();
        let mut got = Vec::new();
        while let Some(row) = rows.next().await {
            got.push(row?);
        }
        assert_eq!(got, vec![vec![json!(1)], vec![json!(2)], vec![json!(3)]]);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn query_requires_details() -> Result<()> {
        let client = OperationsInsights::from_stub(MockOperationsInsights::new());
        let err = client
            .query_opsi_data_object_data()
            .set_compartment_id("ocid1.compartment.oc1..abc")
            .send()
            .await
            .expect_err("the details are required");
        assert_eq!(
            err.as_binding(),
            Some(&BindingError::MissingRequiredParameter(
                "queryOpsiDataObjectDataDetails"
            ))
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn summarize_sql_insights() -> Result<()> {
        let body = binding::from_value::<model::SqlInsightAggregationCollection>(json!({
            "inventory": {"totalDatabases": 2, "totalSqls": 120, "totalSqlsAnalyzed": 80},
            "thresholds": {"degradationInPct": 30},
            "items": [{"insightCategory": ["DEGRADING", "VARIANT"], "count": 4}],
        }))?;
        let mut mock = MockOperationsInsights::new();
        mock.expect_summarize_sql_insights()
            .withf(|r, _| {
                r.compartment_id.as_deref() == Some("ocid1.compartment.oc1..abc")
                    && r.database_time_pct_greater_than == Some(5.0)
                    && r.host_name == vec!["db-host-1", "db-host-2"]
            })
            .return_once(move |_, _| Ok(Response::from(body)));

        let client = OperationsInsights::from_stub(mock);
        let got = client
            .summarize_sql_insights()
            .set_compartment_id("ocid1.compartment.oc1..abc")
            .set_database_time_pct_greater_than(5.0)
            .set_host_name(["db-host-1", "db-host-2"])
            .send()
            .await?;
        let thresholds = got.thresholds.expect("thresholds are set");
        assert_eq!(thresholds.degradation_in_pct, Some(30));
        assert_eq!(thresholds.variability, Some(1.66));
        assert_eq!(got.items[0].count, Some(4));
        assert_eq!(
            got.items[0].insight_category,
            vec![
                model::SqlInsightCategory::Degrading,
                model::SqlInsightCategory::Variant
            ]
        );
        Ok(())
    }

    static_assertions::assert_impl_all!(OperationsInsights: Clone, Send, Sync, std::fmt::Debug);
}
