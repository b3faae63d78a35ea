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
mod tests {
    use httptest::{Expectation, Server, all_of, matchers::*, responders::*};
    use oci_sdk_opsi::client::OperationsInsights;
    use oci_sdk_opsi::model;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    async fn test_client(server: &Server) -> Result<OperationsInsights> {
        let client = OperationsInsights::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_signer(gax::signer::anonymous())
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_database_insight_variants() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/20200630/databaseInsights/ocid1.opsidatabaseinsight.oc1..em",
            ))
            .respond_with(json_encoded(json!({
                "entitySource": "EM_MANAGED_EXTERNAL_DATABASE",
                "id": "ocid1.opsidatabaseinsight.oc1..em",
                "enterpriseManagerIdentifier": "em-1",
                "status": "ENABLED",
            }))),
        );
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/20200630/databaseInsights/ocid1.opsidatabaseinsight.oc1..new",
            ))
            .respond_with(json_encoded(json!({
                "entitySource": "NOT_A_REAL_TYPE",
                "id": "ocid1.opsidatabaseinsight.oc1..new",
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .get_database_insight()
            .set_database_insight_id("ocid1.opsidatabaseinsight.oc1..em")
            .send()
            .await?;
        let model::DatabaseInsight::EmManagedExternalDatabase(em) = &got else {
            panic!("expected the EM managed variant, got {got:?}");
        };
        assert_eq!(em.enterprise_manager_identifier.as_deref(), Some("em-1"));
        assert_eq!(em.status, Some(model::ResourceStatus::Enabled));

        let got = client
            .get_database_insight()
            .set_database_insight_id("ocid1.opsidatabaseinsight.oc1..new")
            .send()
            .await?;
        assert!(matches!(got, model::DatabaseInsight::Base(_)), "{got:?}");
        assert_eq!(got.id(), Some("ocid1.opsidatabaseinsight.oc1..new"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_database_insights_query() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/20200630/databaseInsights"),
                request::query(url_decoded(contains(("compartmentId", "ocid1.compartment.oc1..abc")))),
                request::query(url_decoded(contains(("status", "ENABLED")))),
                request::query(url_decoded(contains(("status", "DISABLED")))),
                request::query(url_decoded(contains(("databaseType", "ADW-S")))),
                request::query(url_decoded(contains(("compartmentIdInSubtree", "true")))),
                request::query(url_decoded(contains(("sortBy", "databaseName")))),
                request::query(url_decoded(contains(("sortOrder", "ASC")))),
                request::query(url_decoded(not(contains(key("page"))))),
            ])
            .respond_with(
                status_code(200)
                    .append_header("opc-next-page", "next-1")
                    .append_header("opc-request-id", "req-1")
                    .body(
                        json!({"items": [
                            {"entitySource": "AUTONOMOUS_DATABASE", "databaseName": "sales"},
                            {"entitySource": "PE_COMANAGED_DATABASE", "databaseName": "hr", "parentId": "vmc-1"},
                        ]})
                        .to_string(),
                    ),
            ),
        );

        let client = test_client(&server).await?;
        let got = client
            .list_database_insights()
            .set_compartment_id("ocid1.compartment.oc1..abc")
            .set_status([model::ResourceStatus::Enabled, model::ResourceStatus::Disabled])
            .set_database_type(["ADW-S"])
            .set_compartment_id_in_subtree(true)
            .set_sort_by(model::DatabaseInsightSortBy::DatabaseName)
            .set_sort_order(model::SortOrder::Asc)
            .send()
            .await?;
        assert_eq!(got.opc_next_page.as_deref(), Some("next-1"));
        assert_eq!(got.opc_request_id.as_deref(), Some("req-1"));
        let items = &got.database_insights_collection.items;
        assert_eq!(items.len(), 2);
        assert!(
            matches!(items[0], model::DatabaseInsightSummary::AutonomousDatabase(_)),
            "{items:?}"
        );
        let model::DatabaseInsightSummary::PeComanagedDatabase(pe) = &items[1] else {
            panic!("expected the private endpoint variant, got {:?}", items[1]);
        };
        assert_eq!(pe.parent_id.as_deref(), Some("vmc-1"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_host_configurations_pages() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/20200630/hostInsights/hostConfigurations"),
                request::query(url_decoded(contains(("platformType", "LINUX")))),
                request::query(url_decoded(not(contains(key("page"))))),
            ])
            .respond_with(
                status_code(200)
                    .append_header("opc-next-page", "hosts-2")
                    .body(
                        json!({"items": [{
                            "entitySource": "MACS_MANAGED_EXTERNAL_HOST",
                            "hostName": "db-host-1",
                            "totalMemoryInGBs": 256,
                            "platformType": "LINUX",
                        }]})
                        .to_string(),
                    ),
            ),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/20200630/hostInsights/hostConfigurations"),
                request::query(url_decoded(contains(("page", "hosts-2")))),
            ])
            .respond_with(json_encoded(json!({"items": [{
                "entitySource": "EM_MANAGED_EXTERNAL_HOST",
                "hostName": "db-host-2",
                "enterpriseManagerEntityName": "host2",
            }]}))),
        );

        let client = test_client(&server).await?;
        let mut pages = client
            .list_host_configurations()
            .set_compartment_id("ocid1.compartment.oc1..abc")
            .set_platform_type([model::PlatformType::Linux])
            .by_page();
        let mut hosts = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page?;
            for item in page.host_configuration_collection.items {
                hosts.push((
                    item.host_name().unwrap_or_default().to_string(),
                    item.entity_source(),
                ));
            }
        }
        assert_eq!(
            hosts,
            vec![
                (
                    "db-host-1".to_string(),
                    Some(model::HostEntitySource::MacsManagedExternalHost)
                ),
                (
                    "db-host-2".to_string(),
                    Some(model::HostEntitySource::EmManagedExternalHost)
                ),
            ]
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn query_data_object() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/20200630/opsiDataObjects/actions/queryData"),
                request::query(url_decoded(contains(("compartmentId", "ocid1.compartment.oc1..abc")))),
                request::query(url_decoded(contains(("limit", "100")))),
                request::headers(not(contains(key("opc-retry-token")))),
                request::body(json_decoded(eq(json!({
                    "dataObjectIdentifier": "SYS.DBA_HIST_SNAPSHOT",
                    "query": {
                        "queryType": "TEMPLATIZED_QUERY",
                        "selectList": ["SNAP_ID", "BEGIN_INTERVAL_TIME"],
                        "fromClause": "SYS.DBA_HIST_SNAPSHOT",
                        "whereConditionsList": ["SNAP_ID > :snap"],
                        "bindParams": [{"name": "snap", "value": 100}],
                        "timeFilters": {"timePeriod": "P7D"},
                    },
                })))),
            ])
            .respond_with(json_encoded(json!({
                "columnsMetadata": [
                    {
                        "name": "SNAP_ID",
                        "dataTypeName": "NUMBER",
                        "unitDetails": {"unitCategory": "OTHER_STANDARD", "unit": "COUNT"},
                    },
                    {
                        "name": "BEGIN_INTERVAL_TIME",
                        "dataTypeName": "TIMESTAMP",
                    },
                ],
                "rows": [[101, "2025-03-01T00:00:00Z"], [102, "2025-03-01T01:00:00Z"]],
            }))),
        );

        let client = test_client(&server).await?;
        let query = model::DataObjectTemplatizedQuery::new()
            .set_select_list(["SNAP_ID", "BEGIN_INTERVAL_TIME"])
            .set_from_clause("SYS.DBA_HIST_SNAPSHOT")
            .set_where_conditions_list(["SNAP_ID > :snap"])
            .set_bind_params([model::DataObjectBindParameter::new()
                .set_name("snap")
                .set_value(json!(100))])
            .set_time_filters(model::DataObjectQueryTimeFilters::new().set_time_period("P7D"));
        let got = client
            .query_opsi_data_object_data()
            .set_compartment_id("ocid1.compartment.oc1..abc")
            .set_limit(100)
            .set_query_opsi_data_object_data_details(
                model::QueryOpsiDataObjectDataDetails::new()
                    .set_data_object_identifier("SYS.DBA_HIST_SNAPSHOT")
                    .set_query(query),
            )
            .send()
            .await?;
        let result = got.query_data_object_result_set_rows_collection;
        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.rows[0][0], json!(101));
        let unit = result.columns_metadata[0]
            .unit_details
            .as_ref()
            .expect("the first column has a unit");
        let model::ColumnUnit::OtherStandard(unit) = unit else {
            panic!("expected an OTHER_STANDARD unit, got {unit:?}");
        };
        assert_eq!(unit.unit, Some(model::OtherStandardUnit::Count));
        assert_eq!(
            result.columns_metadata[1].data_type_name,
            Some(model::ColumnDataType::Timestamp)
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn summarize_sql_insights_time_range() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/20200630/databaseInsights/sqlInsights"),
                request::query(url_decoded(contains(("timeIntervalStart", "2025-03-01T00:00:00Z")))),
                request::query(url_decoded(contains(("timeIntervalEnd", "2025-03-08T00:00:00Z")))),
                request::query(url_decoded(contains(("databaseId", "db-1")))),
                request::query(url_decoded(contains(("databaseId", "db-2")))),
                request::query(url_decoded(contains(("databaseTimePctGreaterThan", "2.5")))),
            ])
            .respond_with(json_encoded(json!({
                "timeIntervalStart": "2025-03-01T00:00:00Z",
                "timeIntervalEnd": "2025-03-08T00:00:00Z",
                "thresholds": {},
                "inventory": {"totalDatabases": 2},
                "items": [{"insightCategory": ["IMPROVING"], "count": 7}],
            }))),
        );

        let client = test_client(&server).await?;
        let start = time::OffsetDateTime::from_unix_timestamp(1740787200)?;
        let end = time::OffsetDateTime::from_unix_timestamp(1741392000)?;
        let got = client
            .summarize_sql_insights()
            .set_compartment_id("ocid1.compartment.oc1..abc")
            .set_database_id(["db-1", "db-2"])
            .set_database_time_pct_greater_than(2.5)
            .set_time_interval_start(start)
            .set_time_interval_end(end)
            .send()
            .await?;
        assert_eq!(got.time_interval_start, Some(start));
        let thresholds = got.thresholds.expect("thresholds are set");
        assert_eq!(thresholds.increase_in_io_in_pct, Some(50));
        assert_eq!(
            got.inventory.and_then(|i| i.total_databases),
            Some(2)
        );
        assert_eq!(
            got.items[0].insight_category,
            vec![model::SqlInsightCategory::Improving]
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn service_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/20200630/databaseInsights/ocid1.opsidatabaseinsight.oc1..missing",
            ))
            .respond_with(
                status_code(404)
                    .append_header("opc-request-id", "req-404")
                    .body(json!({"code": "NotFound", "message": "no such insight"}).to_string()),
            ),
        );

        let client = test_client(&server).await?;
        let err = client
            .get_database_insight()
            .set_database_insight_id("ocid1.opsidatabaseinsight.oc1..missing")
            .send()
            .await
            .expect_err("the service returns 404");
        assert_eq!(err.http_status_code(), Some(404));
        let status = err.status().expect("the error has service details");
        assert_eq!(status.code, "NotFound");
        assert_eq!(status.message, "no such insight");
        assert_eq!(err.opc_request_id(), Some("req-404"));
        Ok(())
    }
}
