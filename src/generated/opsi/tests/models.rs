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
    use oci_sdk_opsi::model::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use std::hash::{BuildHasher, RandomState};
    use test_case::test_case;

    type Result<T> = anyhow::Result<T>;

    #[test]
    fn database_insight_em_managed() -> Result<()> {
        let input = json!({"entitySource": "EM_MANAGED_EXTERNAL_DATABASE", "id": "ocid1.x"});
        let got = binding::from_value::<DatabaseInsight>(input)?;
        let DatabaseInsight::EmManagedExternalDatabase(v) = &got else {
            panic!("expected the EM managed variant, got {got:?}");
        };
        assert_eq!(v.id.as_deref(), Some("ocid1.x"));
        assert_eq!(
            got.entity_source(),
            Some(DatabaseEntitySource::EmManagedExternalDatabase)
        );
        assert_eq!(got.id(), Some("ocid1.x"));
        Ok(())
    }

    #[test]
    fn database_insight_unknown_source() -> Result<()> {
        let input = json!({"entitySource": "NOT_A_REAL_TYPE", "id": "ocid1.x"});
        let got = binding::from_value_with::<DatabaseInsight>(input, &NoDiagnostics)?;
        let DatabaseInsight::Base(v) = &got else {
            panic!("expected the base variant, got {got:?}");
        };
        assert_eq!(v.id.as_deref(), Some("ocid1.x"));
        let source = got.entity_source().expect("the base keeps the discriminator");
        assert!(source.is_unknown(), "{source:?}");
        assert_eq!(source.name(), "NOT_A_REAL_TYPE");
        Ok(())
    }

    #[test_case(json!({"id": "ocid1.x"}); "missing")]
    #[test_case(json!({"entitySource": 42, "id": "ocid1.x"}); "not a string")]
    #[test_case(json!({"entitySource": "autonomous_database", "id": "ocid1.x"}); "case sensitive")]
    fn database_insight_falls_back(input: Value) -> Result<()> {
        let got = binding::from_value_with::<DatabaseInsight>(input, &NoDiagnostics)?;
        assert!(matches!(got, DatabaseInsight::Base(_)), "{got:?}");
        assert_eq!(got.id(), Some("ocid1.x"));
        Ok(())
    }

    #[test]
    fn discriminator_by_alias() -> Result<()> {
        let input = json!({
            "entity_source": "AUTONOMOUS_DATABASE",
            "database_name": "sales",
            "isAdvancedFeaturesEnabled": true,
        });
        let got = binding::from_value::<DatabaseInsight>(input)?;
        let DatabaseInsight::AutonomousDatabase(v) = &got else {
            panic!("expected the autonomous database variant, got {got:?}");
        };
        assert_eq!(v.database_name.as_deref(), Some("sales"));
        assert_eq!(v.is_advanced_features_enabled, Some(true));
        Ok(())
    }

    #[test]
    fn discriminator_conflict() {
        let input = json!({
            "entitySource": "AUTONOMOUS_DATABASE",
            "entity_source": "PE_COMANAGED_DATABASE",
        });
        let err =
            binding::from_value::<DatabaseInsight>(input).expect_err("both discriminator keys");
        assert!(err.is_conflict(), "{err:?}");
    }

    #[test]
    fn nested_credentials() -> Result<()> {
        let input = json!({
            "entitySource": "PE_COMANAGED_DATABASE",
            "id": "ocid1.opsidatabaseinsight.oc1..abc",
            "credentialDetails": {
                "credentialType": "CREDENTIALS_BY_VAULT",
                "credentialSourceName": "opsi-creds",
                "userName": "dbsnmp",
                "passwordSecretId": "ocid1.vaultsecret.oc1..abc",
                "role": "NORMAL",
            },
            "connectionDetails": {
                "protocol": "TCPS",
                "serviceName": "sales.example.com",
                "hosts": [{"hostIp": "10.0.0.2", "port": 2484}],
            },
        });
        let got = binding::from_value::<DatabaseInsight>(input)?;
        let DatabaseInsight::PeComanagedDatabase(v) = got else {
            panic!("expected the private endpoint variant");
        };
        let Some(CredentialDetails::CredentialsByVault(creds)) = &v.credential_details else {
            panic!("expected vault credentials, got {:?}", v.credential_details);
        };
        assert_eq!(creds.credential_source_name.as_deref(), Some("opsi-creds"));
        assert_eq!(creds.role, Some(CredentialRole::Normal));
        let connection = v.connection_details.as_ref().expect("connection details are set");
        assert_eq!(connection.protocol, Some(ConnectionProtocol::Tcps));
        assert_eq!(connection.hosts[0].port, Some(2484));
        Ok(())
    }

    #[test]
    fn nested_conflict_propagates() {
        let input = json!({
            "entitySource": "AUTONOMOUS_DATABASE",
            "credentialDetails": {
                "credentialType": "CREDENTIALS_BY_IAM",
                "credentialSourceName": "a",
                "credential_source_name": "b",
            },
        });
        let err = binding::from_value::<DatabaseInsight>(input).expect_err("nested conflict");
        assert!(err.is_conflict(), "{err:?}");
        assert!(err.to_string().contains("credentialSourceName"), "{err}");
    }

    #[test]
    fn column_unit_core() -> Result<()> {
        let input = json!({"unitCategory": "CORE", "displayName": "Cores"});
        let got = binding::from_value::<ColumnUnit>(input)?;
        let ColumnUnit::Core(v) = &got else {
            panic!("expected the CORE variant, got {got:?}");
        };
        assert_eq!(v.display_name.as_deref(), Some("Cores"));
        assert_eq!(got.unit_category(), Some(UnitCategory::Core));
        Ok(())
    }

    #[test]
    fn column_unit_rate() -> Result<()> {
        let input = json!({
            "unitCategory": "RATE",
            "displayName": "MB/s",
            "numerator": {"unitCategory": "DATA_SIZE", "unit": "MEGABYTE", "displayName": "MB"},
            "denominator": {"unitCategory": "TIME", "unit": "SECOND"},
        });
        let got = binding::from_value::<ColumnUnit>(input.clone())?;
        let want = ColumnUnit::from(
            RateColumnUnit::new()
                .set_display_name("MB/s")
                .set_numerator(
                    DataSizeColumnUnit::new()
                        .set_unit(DataSizeUnit::Megabyte)
                        .set_display_name("MB"),
                )
                .set_denominator(TimeColumnUnit::new().set_unit(TimeUnit::Second)),
        );
        assert_eq!(got, want);
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn column_unit_custom_and_unknown_unit() -> Result<()> {
        let custom = binding::from_value::<ColumnUnit>(
            json!({"unitCategory": "CUSTOM", "unit": "widgets"}),
        )?;
        let ColumnUnit::Custom(v) = &custom else {
            panic!("expected the CUSTOM variant, got {custom:?}");
        };
        assert_eq!(v.unit.as_deref(), Some("widgets"));

        let power = binding::from_value_with::<ColumnUnit>(
            json!({"unitCategory": "POWER", "unit": "HORSEPOWER"}),
            &NoDiagnostics,
        )?;
        let ColumnUnit::Power(v) = &power else {
            panic!("expected the POWER variant, got {power:?}");
        };
        let unit = v.unit.clone().expect("the unit is set");
        assert!(unit.is_unknown(), "{unit:?}");
        Ok(())
    }

    #[test]
    fn sql_insight_thresholds_defaults() -> Result<()> {
        let got = binding::from_value::<SqlInsightThresholds>(json!({}))?;
        assert_eq!(got.degradation_in_pct, Some(20));
        assert_eq!(got.variability, Some(1.66));
        assert_eq!(got.inefficiency_in_pct, Some(20));
        assert_eq!(got.increase_in_io_in_pct, Some(50));
        assert_eq!(got.increase_in_cpu_in_pct, Some(50));
        assert_eq!(got.increase_in_inefficient_wait_in_pct, Some(50));
        assert_eq!(got.improved_in_pct, Some(20));
        Ok(())
    }

    #[test]
    fn sql_insight_thresholds_overrides() -> Result<()> {
        let got = binding::from_value_with::<SqlInsightThresholds>(
            json!({
                "degradationInPct": 35,
                "increaseInIOInPct": 75,
                "increase_in_cpu_in_pct": 60,
                "variability": "high",
            }),
            &NoDiagnostics,
        )?;
        assert_eq!(got.degradation_in_pct, Some(35));
        assert_eq!(got.increase_in_io_in_pct, Some(75));
        assert_eq!(got.increase_in_cpu_in_pct, Some(60));
        // A present value with the wrong type does not fall back to the default.
        assert_eq!(got.variability, None);
        assert_eq!(got.improved_in_pct, Some(20));

        let wire = serde_json::to_value(&got)?;
        assert_eq!(wire.get("increaseInIOInPct"), Some(&json!(75)));
        assert_eq!(wire.get("increaseInCPUInPct"), Some(&json!(60)));
        Ok(())
    }

    #[derive(Debug, Default)]
    struct Malformed(std::sync::Mutex<Vec<(String, String)>>);

    impl binding::diagnostics::DiagnosticSink for Malformed {
        fn unknown_enum_value(&self, _model: &str, _field: &str, _value: &str) {}
        fn malformed_value(&self, model: &str, field: &str, expected: &str) {
            if let Ok(mut v) = self.0.lock() {
                v.push((format!("{model}.{field}"), expected.to_string()));
            }
        }
    }

    #[test]
    fn sql_insight_thresholds_out_of_range() -> Result<()> {
        let sink = Malformed::default();
        let got = binding::from_value_with::<SqlInsightThresholds>(
            json!({"degradationInPct": 5_000_000_000_i64}),
            &sink,
        )?;
        // Out of range is a wrong-shaped value: no default, one diagnostic.
        assert_eq!(got.degradation_in_pct, None);
        assert_eq!(got.improved_in_pct, Some(20));
        let reported = sink.0.lock().map(|v| v.clone()).unwrap_or_default();
        assert_eq!(
            reported,
            vec![(
                "SqlInsightThresholds.degradation_in_pct".to_string(),
                "a 32-bit integer".to_string()
            )]
        );
        Ok(())
    }

    #[test]
    fn odd_wire_names() -> Result<()> {
        let wire = binding::from_value::<HostConfigurationSummary>(json!({
            "entitySource": "MACS_MANAGED_EXTERNAL_HOST",
            "totalMemoryInGBs": 512.0,
            "cpuCacheInMBs": 32,
        }))?;
        let alias = binding::from_value::<HostConfigurationSummary>(json!({
            "entitySource": "MACS_MANAGED_EXTERNAL_HOST",
            "total_memory_in_gbs": 512,
            "cpu_cache_in_mbs": 32.0,
        }))?;
        assert_eq!(wire, alias);
        assert_eq!(wire.total_memory_in_gbs(), Some(512.0));
        assert_eq!(wire.cpu_cache_in_mbs(), Some(32.0));
        Ok(())
    }

    #[test]
    fn serialize_then_bind() -> Result<()> {
        let input = json!({
            "entitySource": "MACS_MANAGED_EXTERNAL_DATABASE",
            "id": "ocid1.opsidatabaseinsight.oc1..abc",
            "status": "ENABLED",
            "lifecycleState": "ACTIVE",
            "timeCreated": "2025-03-04T05:06:07Z",
            "managementAgentId": "ocid1.managementagent.oc1..abc",
            "connectionCredentialDetails": {
                "credentialType": "CREDENTIALS_BY_SOURCE",
                "credentialSourceName": "agent-creds",
            },
            "freeformTags": {"env": "prod"},
        });
        let first = binding::from_value::<DatabaseInsight>(input.clone())?;
        let wire = serde_json::to_value(&first)?;
        assert_eq!(wire, input);
        let second = binding::from_value::<DatabaseInsight>(wire)?;
        assert_eq!(first, second);
        let hasher = RandomState::new();
        assert_eq!(hasher.hash_one(&first), hasher.hash_one(&second));
        Ok(())
    }

    #[test]
    fn base_variant_round_trip() -> Result<()> {
        let input = json!({"entitySource": "SOMETHING_NEW", "databaseName": "sales"});
        let first =
            binding::from_value_with::<DatabaseInsightSummary>(input.clone(), &NoDiagnostics)?;
        assert!(matches!(first, DatabaseInsightSummary::Base(_)), "{first:?}");
        assert_eq!(serde_json::to_value(&first)?, input);
        Ok(())
    }

    #[test]
    fn base_with_known_discriminator() -> Result<()> {
        let unit = ColumnUnit::from(
            ColumnUnitBase::new()
                .set_unit_category(UnitCategory::Core)
                .set_display_name("Cores"),
        );
        assert_eq!(
            unit,
            ColumnUnit::from(CoreColumnUnit::new().set_display_name("Cores"))
        );
        let rebound = binding::from_value::<ColumnUnit>(serde_json::to_value(&unit)?)?;
        assert_eq!(rebound, unit);

        let insight = DatabaseInsight::from(
            DatabaseInsightBase::new()
                .set_entity_source(DatabaseEntitySource::AutonomousDatabase)
                .set_id("ocid1.x"),
        );
        let DatabaseInsight::AutonomousDatabase(adb) = &insight else {
            panic!("expected the autonomous database variant, got {insight:?}");
        };
        assert_eq!(adb.id.as_deref(), Some("ocid1.x"));
        let rebound = binding::from_value::<DatabaseInsight>(serde_json::to_value(&insight)?)?;
        assert_eq!(rebound, insight);
        Ok(())
    }

    #[test]
    fn list_request_invalid_sort_order() -> Result<()> {
        let request =
            binding::from_value::<ListDatabaseInsightsRequest>(json!({"sortOrder": "SIDEWAYS"}))?;
        let err = request.validate().expect_err("SIDEWAYS is not a sort order");
        assert_eq!(
            err.as_binding(),
            Some(&BindingError::InvalidEnumValue {
                parameter: "sortOrder",
                value: "SIDEWAYS".to_string(),
                allowed: "ASC, DESC".to_string(),
            })
        );
        Ok(())
    }

    #[test]
    fn list_request_invalid_status() -> Result<()> {
        let request = binding::from_value_with::<ListDatabaseInsightsRequest>(
            json!({"status": ["ENABLED", "SLEEPING"]}),
            &NoDiagnostics,
        )?;
        let err = request.validate().expect_err("SLEEPING is not a status");
        assert!(
            err.to_string()
                .contains("invalid value SLEEPING for status, expected one of: DISABLED, ENABLED, TERMINATED"),
            "{err}"
        );
        Ok(())
    }

    #[test]
    fn query_details_validation() -> Result<()> {
        let details = binding::from_value::<QueryOpsiDataObjectDataDetails>(json!({
            "dataObjectIdentifier": "SYS.DBA_HIST_SNAPSHOT",
        }))?;
        let err = details.validate().expect_err("the query is required");
        assert_eq!(
            err.as_binding(),
            Some(&BindingError::MissingRequiredParameter("query"))
        );

        let details = binding::from_value::<QueryOpsiDataObjectDataDetails>(json!({
            "dataObjectIdentifier": "SYS.DBA_HIST_SNAPSHOT",
            "query": {"queryType": "STANDARD_QUERY", "statement": "SELECT * FROM SYS.DBA_HIST_SNAPSHOT"},
        }))?;
        details.validate()?;
        assert!(
            matches!(details.query, Some(DataObjectQuery::StandardQuery(_))),
            "{details:?}"
        );
        Ok(())
    }
}
