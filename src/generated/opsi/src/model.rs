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

//! The data models and request types of the Operations Insights service.

use std::collections::HashMap;

binding::open_enum! {
    /// The source of a database insight.
    pub enum DatabaseEntitySource {
        AutonomousDatabase = "AUTONOMOUS_DATABASE",
        EmManagedExternalDatabase = "EM_MANAGED_EXTERNAL_DATABASE",
        MacsManagedExternalDatabase = "MACS_MANAGED_EXTERNAL_DATABASE",
        PeComanagedDatabase = "PE_COMANAGED_DATABASE",
    }
}

binding::open_enum! {
    /// The source of a host insight.
    pub enum HostEntitySource {
        MacsManagedExternalHost = "MACS_MANAGED_EXTERNAL_HOST",
        EmManagedExternalHost = "EM_MANAGED_EXTERNAL_HOST",
    }
}

binding::open_enum! {
    /// How the service obtains the credentials to connect to a database.
    pub enum CredentialType {
        CredentialsBySource = "CREDENTIALS_BY_SOURCE",
        CredentialsByVault = "CREDENTIALS_BY_VAULT",
        CredentialsByIam = "CREDENTIALS_BY_IAM",
    }
}

binding::open_enum! {
    /// The database role of the credentials.
    pub enum CredentialRole {
        Normal = "NORMAL",
    }
}

binding::open_enum! {
    /// The kind of query run against a data object.
    pub enum DataObjectQueryType {
        TemplatizedQuery = "TEMPLATIZED_QUERY",
        StandardQuery = "STANDARD_QUERY",
    }
}

binding::open_enum! {
    /// The category of a data object column unit.
    pub enum UnitCategory {
        DataSize = "DATA_SIZE",
        Time = "TIME",
        Power = "POWER",
        Temperature = "TEMPERATURE",
        Core = "CORE",
        Rate = "RATE",
        Frequency = "FREQUENCY",
        OtherStandard = "OTHER_STANDARD",
        Custom = "CUSTOM",
    }
}

binding::open_enum! {
    pub enum DataSizeUnit {
        Bit = "BIT",
        Byte = "BYTE",
        Kilobyte = "KILOBYTE",
        Megabyte = "MEGABYTE",
        Gigabyte = "GIGABYTE",
        Terabyte = "TERABYTE",
        Petabyte = "PETABYTE",
        Exabyte = "EXABYTE",
    }
}

binding::open_enum! {
    pub enum TimeUnit {
        Nanosecond = "NANOSECOND",
        Microsecond = "MICROSECOND",
        Millisecond = "MILLISECOND",
        Centisecond = "CENTISECOND",
        Second = "SECOND",
        Minute = "MINUTE",
        Hour = "HOUR",
        Day = "DAY",
        Week = "WEEK",
        Month = "MONTH",
        Year = "YEAR",
    }
}

binding::open_enum! {
    pub enum PowerUnit {
        Milliwatt = "MILLIWATT",
        Watt = "WATT",
        Kilowatt = "KILOWATT",
        Megawatt = "MEGAWATT",
        Gigawatt = "GIGAWATT",
    }
}

binding::open_enum! {
    pub enum TemperatureUnit {
        Celsius = "CELSIUS",
        Fahrenheit = "FAHRENHEIT",
    }
}

binding::open_enum! {
    pub enum CoreUnit {
        Core = "CORE",
        Millicore = "MILLICORE",
    }
}

binding::open_enum! {
    pub enum FrequencyUnit {
        Hertz = "HERTZ",
        KiloHertz = "KILO_HERTZ",
        MegaHertz = "MEGA_HERTZ",
        GigaHertz = "GIGA_HERTZ",
        TeraHertz = "TERA_HERTZ",
    }
}

binding::open_enum! {
    pub enum OtherStandardUnit {
        Percentage = "PERCENTAGE",
        Count = "COUNT",
        Io = "IO",
        Event = "EVENT",
    }
}

binding::open_enum! {
    /// The data type of a result set column.
    pub enum ColumnDataType {
        Number = "NUMBER",
        Timestamp = "TIMESTAMP",
        Varchar2 = "VARCHAR2",
        Other = "OTHER",
    }
}

binding::open_enum! {
    /// Whether a resource is collecting data.
    pub enum ResourceStatus {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
        Terminated = "TERMINATED",
    }
}

binding::open_enum! {
    /// The lifecycle state of a resource.
    pub enum LifecycleState {
        Creating = "CREATING",
        Updating = "UPDATING",
        Active = "ACTIVE",
        Deleting = "DELETING",
        Deleted = "DELETED",
        Failed = "FAILED",
        NeedsAttention = "NEEDS_ATTENTION",
    }
}

binding::open_enum! {
    /// The operating system of a host.
    pub enum PlatformType {
        Linux = "LINUX",
        Solaris = "SOLARIS",
        Sunos = "SUNOS",
        Zlinux = "ZLINUX",
        Windows = "WINDOWS",
        Aix = "AIX",
    }
}

binding::open_enum! {
    pub enum ConnectionProtocol {
        Tcp = "TCP",
        Tcps = "TCPS",
    }
}

binding::open_enum! {
    /// The categories assigned to SQL statements by the analysis.
    pub enum SqlInsightCategory {
        Degrading = "DEGRADING",
        Variant = "VARIANT",
        Inefficient = "INEFFICIENT",
        ChangingPlans = "CHANGING_PLANS",
        Improving = "IMPROVING",
        DegradingVariant = "DEGRADING_VARIANT",
        DegradingInefficient = "DEGRADING_INEFFICIENT",
        DegradingChangingPlans = "DEGRADING_CHANGING_PLANS",
        DegradingIncreasingIo = "DEGRADING_INCREASING_IO",
        DegradingIncreasingCpu = "DEGRADING_INCREASING_CPU",
        DegradingIncreasingInefficientWait = "DEGRADING_INCREASING_INEFFICIENT_WAIT",
        DegradingChangingPlansAndIncreasingIo = "DEGRADING_CHANGING_PLANS_AND_INCREASING_IO",
        DegradingChangingPlansAndIncreasingCpu = "DEGRADING_CHANGING_PLANS_AND_INCREASING_CPU",
        DegradingChangingPlansAndIncreasingInefficientWait = "DEGRADING_CHANGING_PLANS_AND_INCREASING_INEFFICIENT_WAIT",
        VariantInefficient = "VARIANT_INEFFICIENT",
        VariantChangingPlans = "VARIANT_CHANGING_PLANS",
        VariantIncreasingIo = "VARIANT_INCREASING_IO",
        VariantIncreasingCpu = "VARIANT_INCREASING_CPU",
        VariantIncreasingInefficientWait = "VARIANT_INCREASING_INEFFICIENT_WAIT",
        VariantChangingPlansAndIncreasingIo = "VARIANT_CHANGING_PLANS_AND_INCREASING_IO",
        VariantChangingPlansAndIncreasingCpu = "VARIANT_CHANGING_PLANS_AND_INCREASING_CPU",
        VariantChangingPlansAndIncreasingInefficientWait = "VARIANT_CHANGING_PLANS_AND_INCREASING_INEFFICIENT_WAIT",
        InefficientChangingPlans = "INEFFICIENT_CHANGING_PLANS",
        InefficientIncreasingInefficientWait = "INEFFICIENT_INCREASING_INEFFICIENT_WAIT",
        InefficientChangingPlansAndIncreasingInefficientWait = "INEFFICIENT_CHANGING_PLANS_AND_INCREASING_INEFFICIENT_WAIT",
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
    /// The field used to sort database insights.
    pub enum DatabaseInsightSortBy {
        TimeCreated = "timeCreated",
        DatabaseName = "databaseName",
        DatabaseType = "databaseType",
    }
}

binding::open_enum! {
    /// The field used to sort host configurations.
    pub enum HostConfigurationSortBy {
        HostName = "hostName",
        PlatformType = "platformType",
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct PeComanagedDatabaseHostDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
}

impl PeComanagedDatabaseHostDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [host_ip][crate::model::PeComanagedDatabaseHostDetails::host_ip].
    pub fn set_host_ip<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.host_ip = Some(v.into());
        self
    }

    /// Sets the value of [port][crate::model::PeComanagedDatabaseHostDetails::port].
    pub fn set_port<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.port = Some(v.into());
        self
    }
}

impl binding::Model for PeComanagedDatabaseHostDetails {
    const NAME: &'static str = "PeComanagedDatabaseHostDetails";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            host_ip: fields.take("hostIp", "host_ip")?,
            port: fields.take("port", "port")?,
        })
    }
}

/// How the private endpoint connects to the database.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct PeComanagedDatabaseConnectionDetails {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hosts: Vec<PeComanagedDatabaseHostDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<ConnectionProtocol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
}

impl PeComanagedDatabaseConnectionDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [hosts][crate::model::PeComanagedDatabaseConnectionDetails::hosts].
    pub fn set_hosts<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<PeComanagedDatabaseHostDetails>,
    {
        use std::iter::Iterator;
        self.hosts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [protocol][crate::model::PeComanagedDatabaseConnectionDetails::protocol].
    pub fn set_protocol<T: std::convert::Into<ConnectionProtocol>>(mut self, v: T) -> Self {
        self.protocol = Some(v.into());
        self
    }

    /// Sets the value of [service_name][crate::model::PeComanagedDatabaseConnectionDetails::service_name].
    pub fn set_service_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.service_name = Some(v.into());
        self
    }
}

impl binding::Model for PeComanagedDatabaseConnectionDetails {
    const NAME: &'static str = "PeComanagedDatabaseConnectionDetails";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            hosts: fields.take_list("hosts", "hosts")?,
            protocol: fields.take("protocol", "protocol")?,
            service_name: fields.take("serviceName", "service_name")?,
        })
    }
}

/// A page of database insights.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct DatabaseInsightsCollection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<DatabaseInsightSummary>,
}

impl DatabaseInsightsCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::DatabaseInsightsCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<DatabaseInsightSummary>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl binding::Model for DatabaseInsightsCollection {
    const NAME: &'static str = "DatabaseInsightsCollection";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            items: fields.take_list("items", "items")?,
        })
    }
}

/// A page of host configurations.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct HostConfigurationCollection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<HostConfigurationSummary>,
}

impl HostConfigurationCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::HostConfigurationCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<HostConfigurationSummary>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl binding::Model for HostConfigurationCollection {
    const NAME: &'static str = "HostConfigurationCollection";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            items: fields.take_list("items", "items")?,
        })
    }
}

/// A value bound to a query placeholder.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct DataObjectBindParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl DataObjectBindParameter {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DataObjectBindParameter::name].
    pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [value][crate::model::DataObjectBindParameter::value].
    pub fn set_value<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }
}

impl binding::Model for DataObjectBindParameter {
    const NAME: &'static str = "DataObjectBindParameter";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            name: fields.take("name", "name")?,
            value: fields.take("value", "value")?,
        })
    }
}

/// Restricts a query to a time range.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct DataObjectQueryTimeFilters {
    /// An ISO 8601 period ending now, `P30D` for the last 30 days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "binding::datetime::serialize"
    )]
    pub time_start: Option<time::OffsetDateTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "binding::datetime::serialize"
    )]
    pub time_end: Option<time::OffsetDateTime>,
}

impl DataObjectQueryTimeFilters {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [time_period][crate::model::DataObjectQueryTimeFilters::time_period].
    pub fn set_time_period<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.time_period = Some(v.into());
        self
    }

    /// Sets the value of [time_start][crate::model::DataObjectQueryTimeFilters::time_start].
    pub fn set_time_start<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_start = Some(v.into());
        self
    }

    /// Sets the value of [time_end][crate::model::DataObjectQueryTimeFilters::time_end].
    pub fn set_time_end<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_end = Some(v.into());
        self
    }
}

impl binding::Model for DataObjectQueryTimeFilters {
    const NAME: &'static str = "DataObjectQueryTimeFilters";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            time_period: fields.take("timePeriod", "time_period")?,
            time_start: fields.take("timeStart", "time_start")?,
            time_end: fields.take("timeEnd", "time_end")?,
        })
    }
}

/// The details to query an OPSI data object.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct QueryOpsiDataObjectDataDetails {
    /// The data object, `SYS.DBA_HIST_SNAPSHOT`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_object_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<DataObjectQuery>,
}

impl QueryOpsiDataObjectDataDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [data_object_identifier][crate::model::QueryOpsiDataObjectDataDetails::data_object_identifier].
    pub fn set_data_object_identifier<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.data_object_identifier = Some(v.into());
        self
    }

    /// Sets the value of [query][crate::model::QueryOpsiDataObjectDataDetails::query].
    pub fn set_query<T: std::convert::Into<DataObjectQuery>>(mut self, v: T) -> Self {
        self.query = Some(v.into());
        self
    }

    /// Fails with a binding error if a required field is missing or an
    /// enum field holds an undeclared value.
    pub fn validate(&self) -> gax::Result<()> {
        gaxi::path_parameter::required(
            self.data_object_identifier.as_deref(),
            "dataObjectIdentifier",
        )?;
        if self.query.is_none() {
            return Err(gaxi::path_parameter::missing("query"));
        }
        Ok(())
    }
}

impl binding::Model for QueryOpsiDataObjectDataDetails {
    const NAME: &'static str = "QueryOpsiDataObjectDataDetails";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            data_object_identifier: fields.take("dataObjectIdentifier", "data_object_identifier")?,
            query: fields.take("query", "query")?,
        })
    }
}

/// Describes a result set column.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct QueryDataObjectResultSetColumnMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type_name: Option<ColumnDataType>,

    /// The type as reported by the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_details: Option<ColumnUnit>,
}

impl QueryDataObjectResultSetColumnMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::QueryDataObjectResultSetColumnMetadata::name].
    pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [data_type_name][crate::model::QueryDataObjectResultSetColumnMetadata::data_type_name].
    pub fn set_data_type_name<T: std::convert::Into<ColumnDataType>>(mut self, v: T) -> Self {
        self.data_type_name = Some(v.into());
        self
    }

    /// Sets the value of [data_type][crate::model::QueryDataObjectResultSetColumnMetadata::data_type].
    pub fn set_data_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.data_type = Some(v.into());
        self
    }

    /// Sets the value of [unit_details][crate::model::QueryDataObjectResultSetColumnMetadata::unit_details].
    pub fn set_unit_details<T: std::convert::Into<ColumnUnit>>(mut self, v: T) -> Self {
        self.unit_details = Some(v.into());
        self
    }
}

impl binding::Model for QueryDataObjectResultSetColumnMetadata {
    const NAME: &'static str = "QueryDataObjectResultSetColumnMetadata";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            name: fields.take("name", "name")?,
            data_type_name: fields.take("dataTypeName", "data_type_name")?,
            data_type: fields.take("dataType", "data_type")?,
            unit_details: fields.take("unitDetails", "unit_details")?,
        })
    }
}

/// A page of query results.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct QueryDataObjectResultSetRowsCollection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub columns_metadata: Vec<QueryDataObjectResultSetColumnMetadata>,

    /// One value per column, in `columnsMetadata` order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<Vec<serde_json::Value>>,
}

impl QueryDataObjectResultSetRowsCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [columns_metadata][crate::model::QueryDataObjectResultSetRowsCollection::columns_metadata].
    pub fn set_columns_metadata<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<QueryDataObjectResultSetColumnMetadata>,
    {
        use std::iter::Iterator;
        self.columns_metadata = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [rows][crate::model::QueryDataObjectResultSetRowsCollection::rows].
    pub fn set_rows<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<Vec<serde_json::Value>>,
    {
        use std::iter::Iterator;
        self.rows = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl binding::Model for QueryDataObjectResultSetRowsCollection {
    const NAME: &'static str = "QueryDataObjectResultSetRowsCollection";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            columns_metadata: fields.take_list("columnsMetadata", "columns_metadata")?,
            rows: fields.take_list("rows", "rows")?,
        })
    }
}

/// The thresholds used to categorize SQL statements.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct SqlInsightThresholds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degradation_in_pct: Option<i32>,

    /// The coefficient of variation of response times.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inefficiency_in_pct: Option<i32>,
    #[serde(rename = "increaseInIOInPct", skip_serializing_if = "Option::is_none")]
    pub increase_in_io_in_pct: Option<i32>,
    #[serde(rename = "increaseInCPUInPct", skip_serializing_if = "Option::is_none")]
    pub increase_in_cpu_in_pct: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub increase_in_inefficient_wait_in_pct: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improved_in_pct: Option<i32>,
}

impl SqlInsightThresholds {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [degradation_in_pct][crate::model::SqlInsightThresholds::degradation_in_pct].
    pub fn set_degradation_in_pct<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.degradation_in_pct = Some(v.into());
        self
    }

    /// Sets the value of [variability][crate::model::SqlInsightThresholds::variability].
    pub fn set_variability<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.variability = Some(v.into());
        self
    }

    /// Sets the value of [inefficiency_in_pct][crate::model::SqlInsightThresholds::inefficiency_in_pct].
    pub fn set_inefficiency_in_pct<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.inefficiency_in_pct = Some(v.into());
        self
    }

    /// Sets the value of [increase_in_io_in_pct][crate::model::SqlInsightThresholds::increase_in_io_in_pct].
    pub fn set_increase_in_io_in_pct<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.increase_in_io_in_pct = Some(v.into());
        self
    }

    /// Sets the value of [increase_in_cpu_in_pct][crate::model::SqlInsightThresholds::increase_in_cpu_in_pct].
    pub fn set_increase_in_cpu_in_pct<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.increase_in_cpu_in_pct = Some(v.into());
        self
    }

    /// Sets the value of [increase_in_inefficient_wait_in_pct][crate::model::SqlInsightThresholds::increase_in_inefficient_wait_in_pct].
    pub fn set_increase_in_inefficient_wait_in_pct<T: std::convert::Into<i32>>(
        mut self,
        v: T,
    ) -> Self {
        self.increase_in_inefficient_wait_in_pct = Some(v.into());
        self
    }

    /// Sets the value of [improved_in_pct][crate::model::SqlInsightThresholds::improved_in_pct].
    pub fn set_improved_in_pct<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.improved_in_pct = Some(v.into());
        self
    }
}

impl binding::Model for SqlInsightThresholds {
    const NAME: &'static str = "SqlInsightThresholds";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            degradation_in_pct: fields.take_or("degradationInPct", "degradation_in_pct", 20)?,
            variability: fields.take_or("variability", "variability", 1.66)?,
            inefficiency_in_pct: fields.take_or("inefficiencyInPct", "inefficiency_in_pct", 20)?,
            increase_in_io_in_pct: fields
                .take_or("increaseInIOInPct", "increase_in_io_in_pct", 50)?,
            increase_in_cpu_in_pct: fields
                .take_or("increaseInCPUInPct", "increase_in_cpu_in_pct", 50)?,
            increase_in_inefficient_wait_in_pct: fields.take_or(
                "increaseInInefficientWaitInPct",
                "increase_in_inefficient_wait_in_pct",
                50,
            )?,
            improved_in_pct: fields.take_or("improvedInPct", "improved_in_pct", 20)?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct SqlInsightAggregationInventory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_databases: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_sqls: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_sqls_analyzed: Option<i32>,
}

impl SqlInsightAggregationInventory {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [total_databases][crate::model::SqlInsightAggregationInventory::total_databases].
    pub fn set_total_databases<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.total_databases = Some(v.into());
        self
    }

    /// Sets the value of [total_sqls][crate::model::SqlInsightAggregationInventory::total_sqls].
    pub fn set_total_sqls<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.total_sqls = Some(v.into());
        self
    }

    /// Sets the value of [total_sqls_analyzed][crate::model::SqlInsightAggregationInventory::total_sqls_analyzed].
    pub fn set_total_sqls_analyzed<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.total_sqls_analyzed = Some(v.into());
        self
    }
}

impl binding::Model for SqlInsightAggregationInventory {
    const NAME: &'static str = "SqlInsightAggregationInventory";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            total_databases: fields.take("totalDatabases", "total_databases")?,
            total_sqls: fields.take("totalSqls", "total_sqls")?,
            total_sqls_analyzed: fields.take("totalSqlsAnalyzed", "total_sqls_analyzed")?,
        })
    }
}

/// The number of SQL statements in a combination of categories.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct SqlInsightAggregation {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub insight_category: Vec<SqlInsightCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
}

impl SqlInsightAggregation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [insight_category][crate::model::SqlInsightAggregation::insight_category].
    pub fn set_insight_category<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<SqlInsightCategory>,
    {
        use std::iter::Iterator;
        self.insight_category = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [count][crate::model::SqlInsightAggregation::count].
    pub fn set_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.count = Some(v.into());
        self
    }
}

impl binding::Model for SqlInsightAggregation {
    const NAME: &'static str = "SqlInsightAggregation";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            insight_category: fields.take_list("insightCategory", "insight_category")?,
            count: fields.take("count", "count")?,
        })
    }
}

/// The SQL insights of a compartment.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct SqlInsightAggregationCollection {
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "binding::datetime::serialize"
    )]
    pub time_interval_start: Option<time::OffsetDateTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "binding::datetime::serialize"
    )]
    pub time_interval_end: Option<time::OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<SqlInsightAggregationInventory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<SqlInsightThresholds>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<SqlInsightAggregation>,
}

impl SqlInsightAggregationCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [time_interval_start][crate::model::SqlInsightAggregationCollection::time_interval_start].
    pub fn set_time_interval_start<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_interval_start = Some(v.into());
        self
    }

    /// Sets the value of [time_interval_end][crate::model::SqlInsightAggregationCollection::time_interval_end].
    pub fn set_time_interval_end<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_interval_end = Some(v.into());
        self
    }

    /// Sets the value of [inventory][crate::model::SqlInsightAggregationCollection::inventory].
    pub fn set_inventory<T: std::convert::Into<SqlInsightAggregationInventory>>(
        mut self,
        v: T,
    ) -> Self {
        self.inventory = Some(v.into());
        self
    }

    /// Sets the value of [thresholds][crate::model::SqlInsightAggregationCollection::thresholds].
    pub fn set_thresholds<T: std::convert::Into<SqlInsightThresholds>>(mut self, v: T) -> Self {
        self.thresholds = Some(v.into());
        self
    }

    /// Sets the value of [items][crate::model::SqlInsightAggregationCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<SqlInsightAggregation>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl binding::Model for SqlInsightAggregationCollection {
    const NAME: &'static str = "SqlInsightAggregationCollection";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            time_interval_start: fields.take("timeIntervalStart", "time_interval_start")?,
            time_interval_end: fields.take("timeIntervalEnd", "time_interval_end")?,
            inventory: fields.take("inventory", "inventory")?,
            thresholds: fields.take("thresholds", "thresholds")?,
            items: fields.take_list("items", "items")?,
        })
    }
}

/// The credentials the service uses to connect to a database.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum CredentialDetails {
    /// `credentialType = "CREDENTIALS_BY_SOURCE"`.
    CredentialsBySource(Box<CredentialsBySource>),
    /// `credentialType = "CREDENTIALS_BY_VAULT"`.
    CredentialsByVault(Box<CredentialByVault>),
    /// `credentialType = "CREDENTIALS_BY_IAM"`.
    CredentialsByIam(Box<CredentialByIam>),
    /// A missing or unrecognized `credentialType`.
    Base(Box<CredentialDetailsBase>),
}

impl CredentialDetails {
    /// The discriminator. Subtypes always report their own literal.
    pub fn credential_type(&self) -> Option<CredentialType> {
        match self {
            Self::CredentialsBySource(_) => Some(CredentialType::CredentialsBySource),
            Self::CredentialsByVault(_) => Some(CredentialType::CredentialsByVault),
            Self::CredentialsByIam(_) => Some(CredentialType::CredentialsByIam),
            Self::Base(v) => v.credential_type.clone(),
        }
    }

    /// The value of `credentialSourceName`, shared by all the variants.
    pub fn credential_source_name(&self) -> Option<&str> {
        match self {
            Self::CredentialsBySource(v) => v.credential_source_name.as_deref(),
            Self::CredentialsByVault(v) => v.credential_source_name.as_deref(),
            Self::CredentialsByIam(v) => v.credential_source_name.as_deref(),
            Self::Base(v) => v.credential_source_name.as_deref(),
        }
    }
}

impl std::default::Default for CredentialDetails {
    fn default() -> Self {
        Self::Base(Box::default())
    }
}

impl binding::Polymorphic for CredentialDetails {
    const DISCRIMINATOR: (&'static str, &'static str) = ("credentialType", "credential_type");
    const SUBTYPES: &'static [(&'static str, binding::polymorphic::Binder<Self>)] = &[
        ("CREDENTIALS_BY_SOURCE", binding::polymorphic::subtype::<CredentialsBySource, Self>),
        ("CREDENTIALS_BY_VAULT", binding::polymorphic::subtype::<CredentialByVault, Self>),
        ("CREDENTIALS_BY_IAM", binding::polymorphic::subtype::<CredentialByIam, Self>),
    ];
    const BASE: binding::polymorphic::Binder<Self> =
        binding::polymorphic::subtype::<CredentialDetailsBase, Self>;
}

impl binding::Model for CredentialDetails {
    const NAME: &'static str = "CredentialDetails";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        binding::polymorphic::resolve(fields)
    }
}

impl serde::ser::Serialize for CredentialDetails {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use binding::polymorphic::serialize_tagged;
        match self {
            Self::CredentialsBySource(v) => {
                serialize_tagged(serializer, "credentialType", "CREDENTIALS_BY_SOURCE", v)
            }
            Self::CredentialsByVault(v) => {
                serialize_tagged(serializer, "credentialType", "CREDENTIALS_BY_VAULT", v)
            }
            Self::CredentialsByIam(v) => {
                serialize_tagged(serializer, "credentialType", "CREDENTIALS_BY_IAM", v)
            }
            Self::Base(v) => v.serialize(serializer),
        }
    }
}

impl std::convert::From<CredentialsBySource> for CredentialDetails {
    fn from(value: CredentialsBySource) -> Self {
        Self::CredentialsBySource(Box::new(value))
    }
}

impl std::convert::From<CredentialByVault> for CredentialDetails {
    fn from(value: CredentialByVault) -> Self {
        Self::CredentialsByVault(Box::new(value))
    }
}

impl std::convert::From<CredentialByIam> for CredentialDetails {
    fn from(value: CredentialByIam) -> Self {
        Self::CredentialsByIam(Box::new(value))
    }
}

/// A base value naming a known `credentialType` converts to that subtype.
impl std::convert::From<CredentialDetailsBase> for CredentialDetails {
    fn from(value: CredentialDetailsBase) -> Self {
        binding::polymorphic::from_base(value, |v| Self::Base(Box::new(v)))
    }
}

/// The base variant of [CredentialDetails].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CredentialDetailsBase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_type: Option<CredentialType>,

    /// The credential set name, as registered with the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_source_name: Option<String>,
}

impl CredentialDetailsBase {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [credential_type][crate::model::CredentialDetailsBase::credential_type].
    pub fn set_credential_type<T: std::convert::Into<CredentialType>>(mut self, v: T) -> Self {
        self.credential_type = Some(v.into());
        self
    }

    /// Sets the value of [credential_source_name][crate::model::CredentialDetailsBase::credential_source_name].
    pub fn set_credential_source_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.credential_source_name = Some(v.into());
        self
    }
}

impl binding::Model for CredentialDetailsBase {
    const NAME: &'static str = "CredentialDetailsBase";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            credential_type: fields.take("credentialType", "credential_type")?,
            credential_source_name: fields.take("credentialSourceName", "credential_source_name")?,
        })
    }
}

/// Credentials stored with the management agent or the private endpoint.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CredentialsBySource {
    /// The credential set name, as registered with the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_source_name: Option<String>,
}

impl CredentialsBySource {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [credential_source_name][crate::model::CredentialsBySource::credential_source_name].
    pub fn set_credential_source_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.credential_source_name = Some(v.into());
        self
    }
}

impl binding::Model for CredentialsBySource {
    const NAME: &'static str = "CredentialsBySource";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        fields.skip("credentialType", "credential_type")?;
        Ok(Self {
            credential_source_name: fields.take("credentialSourceName", "credential_source_name")?,
        })
    }
}

/// Credentials stored in a Vault secret.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CredentialByVault {
    /// The credential set name, as registered with the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_source_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    /// The OCID of the secret holding the password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_secret_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_secret_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<CredentialRole>,
}

impl CredentialByVault {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [credential_source_name][crate::model::CredentialByVault::credential_source_name].
    pub fn set_credential_source_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.credential_source_name = Some(v.into());
        self
    }

    /// Sets the value of [user_name][crate::model::CredentialByVault::user_name].
    pub fn set_user_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.user_name = Some(v.into());
        self
    }

    /// Sets the value of [password_secret_id][crate::model::CredentialByVault::password_secret_id].
    pub fn set_password_secret_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.password_secret_id = Some(v.into());
        self
    }

    /// Sets the value of [wallet_secret_id][crate::model::CredentialByVault::wallet_secret_id].
    pub fn set_wallet_secret_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.wallet_secret_id = Some(v.into());
        self
    }

    /// Sets the value of [role][crate::model::CredentialByVault::role].
    pub fn set_role<T: std::convert::Into<CredentialRole>>(mut self, v: T) -> Self {
        self.role = Some(v.into());
        self
    }
}

impl binding::Model for CredentialByVault {
    const NAME: &'static str = "CredentialByVault";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        fields.skip("credentialType", "credential_type")?;
        Ok(Self {
            credential_source_name: fields.take("credentialSourceName", "credential_source_name")?,
            user_name: fields.take("userName", "user_name")?,
            password_secret_id: fields.take("passwordSecretId", "password_secret_id")?,
            wallet_secret_id: fields.take("walletSecretId", "wallet_secret_id")?,
            role: fields.take("role", "role")?,
        })
    }
}

/// Credentials from an IAM database token.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CredentialByIam {
    /// The credential set name, as registered with the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_source_name: Option<String>,
}

impl CredentialByIam {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [credential_source_name][crate::model::CredentialByIam::credential_source_name].
    pub fn set_credential_source_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.credential_source_name = Some(v.into());
        self
    }
}

impl binding::Model for CredentialByIam {
    const NAME: &'static str = "CredentialByIam";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        fields.skip("credentialType", "credential_type")?;
        Ok(Self {
            credential_source_name: fields.take("credentialSourceName", "credential_source_name")?,
        })
    }
}

/// A database insight, the enablement of Operations Insights for a database.
///
/// The `entitySource` field selects the variant.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum DatabaseInsight {
    /// `entitySource = "AUTONOMOUS_DATABASE"`.
    AutonomousDatabase(Box<AutonomousDatabaseInsight>),
    /// `entitySource = "EM_MANAGED_EXTERNAL_DATABASE"`.
    EmManagedExternalDatabase(Box<EmManagedExternalDatabaseInsight>),
    /// `entitySource = "MACS_MANAGED_EXTERNAL_DATABASE"`.
    MacsManagedExternalDatabase(Box<MacsManagedExternalDatabaseInsight>),
    /// `entitySource = "PE_COMANAGED_DATABASE"`.
    PeComanagedDatabase(Box<PeComanagedDatabaseInsight>),
    /// A missing or unrecognized `entitySource`.
    Base(Box<DatabaseInsightBase>),
}

impl DatabaseInsight {
    /// The discriminator. Subtypes always report their own literal.
    pub fn entity_source(&self) -> Option<DatabaseEntitySource> {
        match self {
            Self::AutonomousDatabase(_) => Some(DatabaseEntitySource::AutonomousDatabase),
            Self::EmManagedExternalDatabase(_) => {
                Some(DatabaseEntitySource::EmManagedExternalDatabase)
            }
            Self::MacsManagedExternalDatabase(_) => {
                Some(DatabaseEntitySource::MacsManagedExternalDatabase)
            }
            Self::PeComanagedDatabase(_) => Some(DatabaseEntitySource::PeComanagedDatabase),
            Self::Base(v) => v.entity_source.clone(),
        }
    }

    /// The value of `id`, shared by all the variants.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::AutonomousDatabase(v) => v.id.as_deref(),
            Self::EmManagedExternalDatabase(v) => v.id.as_deref(),
            Self::MacsManagedExternalDatabase(v) => v.id.as_deref(),
            Self::PeComanagedDatabase(v) => v.id.as_deref(),
            Self::Base(v) => v.id.as_deref(),
        }
    }

    /// The value of `compartmentId`, shared by all the variants.
    pub fn compartment_id(&self) -> Option<&str> {
        match self {
            Self::AutonomousDatabase(v) => v.compartment_id.as_deref(),
            Self::EmManagedExternalDatabase(v) => v.compartment_id.as_deref(),
            Self::MacsManagedExternalDatabase(v) => v.compartment_id.as_deref(),
            Self::PeComanagedDatabase(v) => v.compartment_id.as_deref(),
            Self::Base(v) => v.compartment_id.as_deref(),
        }
    }

    /// The value of `status`, shared by all the variants.
    pub fn status(&self) -> Option<&ResourceStatus> {
        match self {
            Self::AutonomousDatabase(v) => v.status.as_ref(),
            Self::EmManagedExternalDatabase(v) => v.status.as_ref(),
            Self::MacsManagedExternalDatabase(v) => v.status.as_ref(),
            Self::PeComanagedDatabase(v) => v.status.as_ref(),
            Self::Base(v) => v.status.as_ref(),
        }
    }

    /// The value of `databaseType`, shared by all the variants.
    pub fn database_type(&self) -> Option<&str> {
        match self {
            Self::AutonomousDatabase(v) => v.database_type.as_deref(),
            Self::EmManagedExternalDatabase(v) => v.database_type.as_deref(),
            Self::MacsManagedExternalDatabase(v) => v.database_type.as_deref(),
            Self::PeComanagedDatabase(v) => v.database_type.as_deref(),
            Self::Base(v) => v.database_type.as_deref(),
        }
    }

    /// The value of `databaseVersion`, shared by all the variants.
    pub fn database_version(&self) -> Option<&str> {
        match self {
            Self::AutonomousDatabase(v) => v.database_version.as_deref(),
            Self::EmManagedExternalDatabase(v) => v.database_version.as_deref(),
            Self::MacsManagedExternalDatabase(v) => v.database_version.as_deref(),
            Self::PeComanagedDatabase(v) => v.database_version.as_deref(),
            Self::Base(v) => v.database_version.as_deref(),
        }
    }

    /// The value of `processorCount`, shared by all the variants.
    pub fn processor_count(&self) -> Option<i32> {
        match self {
            Self::AutonomousDatabase(v) => v.processor_count,
            Self::EmManagedExternalDatabase(v) => v.processor_count,
            Self::MacsManagedExternalDatabase(v) => v.processor_count,
            Self::PeComanagedDatabase(v) => v.processor_count,
            Self::Base(v) => v.processor_count,
        }
    }

    /// The value of `timeCreated`, shared by all the variants.
    pub fn time_created(&self) -> Option<time::OffsetDateTime> {
        match self {
            Self::AutonomousDatabase(v) => v.time_created,
            Self::EmManagedExternalDatabase(v) => v.time_created,
            Self::MacsManagedExternalDatabase(v) => v.time_created,
            Self::PeComanagedDatabase(v) => v.time_created,
            Self::Base(v) => v.time_created,
        }
    }

    /// The value of `timeUpdated`, shared by all the variants.
    pub fn time_updated(&self) -> Option<time::OffsetDateTime> {
        match self {
            Self::AutonomousDatabase(v) => v.time_updated,
            Self::EmManagedExternalDatabase(v) => v.time_updated,
            Self::MacsManagedExternalDatabase(v) => v.time_updated,
            Self::PeComanagedDatabase(v) => v.time_updated,
            Self::Base(v) => v.time_updated,
        }
    }

    /// The value of `lifecycleState`, shared by all the variants.
    pub fn lifecycle_state(&self) -> Option<&LifecycleState> {
        match self {
            Self::AutonomousDatabase(v) => v.lifecycle_state.as_ref(),
            Self::EmManagedExternalDatabase(v) => v.lifecycle_state.as_ref(),
            Self::MacsManagedExternalDatabase(v) => v.lifecycle_state.as_ref(),
            Self::PeComanagedDatabase(v) => v.lifecycle_state.as_ref(),
            Self::Base(v) => v.lifecycle_state.as_ref(),
        }
    }

    /// The value of `lifecycleDetails`, shared by all the variants.
    pub fn lifecycle_details(&self) -> Option<&str> {
        match self {
            Self::AutonomousDatabase(v) => v.lifecycle_details.as_deref(),
            Self::EmManagedExternalDatabase(v) => v.lifecycle_details.as_deref(),
            Self::MacsManagedExternalDatabase(v) => v.lifecycle_details.as_deref(),
            Self::PeComanagedDatabase(v) => v.lifecycle_details.as_deref(),
            Self::Base(v) => v.lifecycle_details.as_deref(),
        }
    }

    /// The value of `databaseConnectionStatusDetails`, shared by all the variants.
    pub fn database_connection_status_details(&self) -> Option<&str> {
        match self {
            Self::AutonomousDatabase(v) => v.database_connection_status_details.as_deref(),
            Self::EmManagedExternalDatabase(v) => v.database_connection_status_details.as_deref(),
            Self::MacsManagedExternalDatabase(v) => v.database_connection_status_details.as_deref(),
            Self::PeComanagedDatabase(v) => v.database_connection_status_details.as_deref(),
            Self::Base(v) => v.database_connection_status_details.as_deref(),
        }
    }

    /// The value of `freeformTags`, shared by all the variants.
    pub fn freeform_tags(&self) -> &HashMap<String, String> {
        match self {
            Self::AutonomousDatabase(v) => &v.freeform_tags,
            Self::EmManagedExternalDatabase(v) => &v.freeform_tags,
            Self::MacsManagedExternalDatabase(v) => &v.freeform_tags,
            Self::PeComanagedDatabase(v) => &v.freeform_tags,
            Self::Base(v) => &v.freeform_tags,
        }
    }

    /// The value of `definedTags`, shared by all the variants.
    pub fn defined_tags(&self) -> &HashMap<String, HashMap<String, serde_json::Value>> {
        match self {
            Self::AutonomousDatabase(v) => &v.defined_tags,
            Self::EmManagedExternalDatabase(v) => &v.defined_tags,
            Self::MacsManagedExternalDatabase(v) => &v.defined_tags,
            Self::PeComanagedDatabase(v) => &v.defined_tags,
            Self::Base(v) => &v.defined_tags,
        }
    }

    /// The value of `systemTags`, shared by all the variants.
    pub fn system_tags(&self) -> &HashMap<String, HashMap<String, serde_json::Value>> {
        match self {
            Self::AutonomousDatabase(v) => &v.system_tags,
            Self::EmManagedExternalDatabase(v) => &v.system_tags,
            Self::MacsManagedExternalDatabase(v) => &v.system_tags,
            Self::PeComanagedDatabase(v) => &v.system_tags,
            Self::Base(v) => &v.system_tags,
        }
    }
}

impl std::default::Default for DatabaseInsight {
    fn default() -> Self {
        Self::Base(Box::default())
    }
}

impl binding::Polymorphic for DatabaseInsight {
    const DISCRIMINATOR: (&'static str, &'static str) = ("entitySource", "entity_source");
    const SUBTYPES: &'static [(&'static str, binding::polymorphic::Binder<Self>)] = &[
        ("AUTONOMOUS_DATABASE", binding::polymorphic::subtype::<AutonomousDatabaseInsight, Self>),
        (
            "EM_MANAGED_EXTERNAL_DATABASE",
            binding::polymorphic::subtype::<EmManagedExternalDatabaseInsight, Self>,
        ),
        (
            "MACS_MANAGED_EXTERNAL_DATABASE",
            binding::polymorphic::subtype::<MacsManagedExternalDatabaseInsight, Self>,
        ),
        (
            "PE_COMANAGED_DATABASE",
            binding::polymorphic::subtype::<PeComanagedDatabaseInsight, Self>,
        ),
    ];
    const BASE: binding::polymorphic::Binder<Self> =
        binding::polymorphic::subtype::<DatabaseInsightBase, Self>;
}

impl binding::Model for DatabaseInsight {
    const NAME: &'static str = "DatabaseInsight";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        binding::polymorphic::resolve(fields)
    }
}

impl serde::ser::Serialize for DatabaseInsight {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use binding::polymorphic::serialize_tagged;
        match self {
            Self::AutonomousDatabase(v) => {
                serialize_tagged(serializer, "entitySource", "AUTONOMOUS_DATABASE", v)
            }
            Self::EmManagedExternalDatabase(v) => {
                serialize_tagged(serializer, "entitySource", "EM_MANAGED_EXTERNAL_DATABASE", v)
            }
            Self::MacsManagedExternalDatabase(v) => {
                serialize_tagged(serializer, "entitySource", "MACS_MANAGED_EXTERNAL_DATABASE", v)
            }
            Self::PeComanagedDatabase(v) => {
                serialize_tagged(serializer, "entitySource", "PE_COMANAGED_DATABASE", v)
            }
            Self::Base(v) => v.serialize(serializer),
        }
    }
}

impl std::convert::From<AutonomousDatabaseInsight> for DatabaseInsight {
    fn from(value: AutonomousDatabaseInsight) -> Self {
        Self::AutonomousDatabase(Box::new(value))
    }
}

impl std::convert::From<EmManagedExternalDatabaseInsight> for DatabaseInsight {
    fn from(value: EmManagedExternalDatabaseInsight) -> Self {
        Self::EmManagedExternalDatabase(Box::new(value))
    }
}

impl std::convert::From<MacsManagedExternalDatabaseInsight> for DatabaseInsight {
    fn from(value: MacsManagedExternalDatabaseInsight) -> Self {
        Self::MacsManagedExternalDatabase(Box::new(value))
    }
}

impl std::convert::From<PeComanagedDatabaseInsight> for DatabaseInsight {
    fn from(value: PeComanagedDatabaseInsight) -> Self {
        Self::PeComanagedDatabase(Box::new(value))
    }
}

/// A base value naming a known `entitySource` converts to that subtype.
impl std::convert::From<DatabaseInsightBase> for DatabaseInsight {
    fn from(value: DatabaseInsightBase) -> Self {
        binding::polymorphic::from_base(value, |v| Self::Base(Box::new(v)))
    }
}

/// The base variant of [DatabaseInsight].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct DatabaseInsightBase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_source: Option<DatabaseEntitySource>,

    /// The database insight OCID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,

    /// The database type, `ADW-S`, `ATP-D`, `EXTERNAL-NONCDB`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_count: Option<i32>,
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
    pub lifecycle_state: Option<LifecycleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_connection_status_details: Option<String>,

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

impl DatabaseInsightBase {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [entity_source][crate::model::DatabaseInsightBase::entity_source].
    pub fn set_entity_source<T: std::convert::Into<DatabaseEntitySource>>(mut self, v: T) -> Self {
        self.entity_source = Some(v.into());
        self
    }

    /// Sets the value of [id][crate::model::DatabaseInsightBase::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::DatabaseInsightBase::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [status][crate::model::DatabaseInsightBase::status].
    pub fn set_status<T: std::convert::Into<ResourceStatus>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [database_type][crate::model::DatabaseInsightBase::database_type].
    pub fn set_database_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_type = Some(v.into());
        self
    }

    /// Sets the value of [database_version][crate::model::DatabaseInsightBase::database_version].
    pub fn set_database_version<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_version = Some(v.into());
        self
    }

    /// Sets the value of [processor_count][crate::model::DatabaseInsightBase::processor_count].
    pub fn set_processor_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.processor_count = Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::DatabaseInsightBase::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::DatabaseInsightBase::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::DatabaseInsightBase::lifecycle_state].
    pub fn set_lifecycle_state<T: std::convert::Into<LifecycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_details][crate::model::DatabaseInsightBase::lifecycle_details].
    pub fn set_lifecycle_details<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.lifecycle_details = Some(v.into());
        self
    }

    /// Sets the value of [database_connection_status_details][crate::model::DatabaseInsightBase::database_connection_status_details].
    pub fn set_database_connection_status_details<T: std::convert::Into<String>>(
        mut self,
        v: T,
    ) -> Self {
        self.database_connection_status_details = Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::DatabaseInsightBase::freeform_tags].
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

    /// Sets the value of [defined_tags][crate::model::DatabaseInsightBase::defined_tags].
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

    /// Sets the value of [system_tags][crate::model::DatabaseInsightBase::system_tags].
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

impl binding::Model for DatabaseInsightBase {
    const NAME: &'static str = "DatabaseInsightBase";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            entity_source: fields.take("entitySource", "entity_source")?,
            id: fields.take("id", "id")?,
            compartment_id: fields.take("compartmentId", "compartment_id")?,
            status: fields.take("status", "status")?,
            database_type: fields.take("databaseType", "database_type")?,
            database_version: fields.take("databaseVersion", "database_version")?,
            processor_count: fields.take("processorCount", "processor_count")?,
            time_created: fields.take("timeCreated", "time_created")?,
            time_updated: fields.take("timeUpdated", "time_updated")?,
            lifecycle_state: fields.take("lifecycleState", "lifecycle_state")?,
            lifecycle_details: fields.take("lifecycleDetails", "lifecycle_details")?,
            database_connection_status_details: fields
                .take("databaseConnectionStatusDetails", "database_connection_status_details")?,
            freeform_tags: fields.take_map("freeformTags", "freeform_tags")?,
            defined_tags: fields.take_map("definedTags", "defined_tags")?,
            system_tags: fields.take_map("systemTags", "system_tags")?,
        })
    }
}

/// An insight for an Autonomous Database.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct AutonomousDatabaseInsight {
    /// The database insight OCID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,

    /// The database type, `ADW-S`, `ATP-D`, `EXTERNAL-NONCDB`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_count: Option<i32>,
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
    pub lifecycle_state: Option<LifecycleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_connection_status_details: Option<String>,

    /// Simple key-value pairs without predefined names or scope.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub freeform_tags: HashMap<String, String>,

    /// Tags scoped to a namespace, `{"Operations": {"CostCenter": "42"}}`.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub defined_tags: HashMap<String, HashMap<String, serde_json::Value>>,

    /// Tags set by the service.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub system_tags: HashMap<String, HashMap<String, serde_json::Value>>,

    /// The OCID of the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_resource_type: Option<String>,

    /// Full features are enabled for the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_advanced_features_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opsi_private_endpoint_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_details: Option<CredentialDetails>,
}

impl AutonomousDatabaseInsight {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::AutonomousDatabaseInsight::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::AutonomousDatabaseInsight::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [status][crate::model::AutonomousDatabaseInsight::status].
    pub fn set_status<T: std::convert::Into<ResourceStatus>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [database_type][crate::model::AutonomousDatabaseInsight::database_type].
    pub fn set_database_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_type = Some(v.into());
        self
    }

    /// Sets the value of [database_version][crate::model::AutonomousDatabaseInsight::database_version].
    pub fn set_database_version<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_version = Some(v.into());
        self
    }

    /// Sets the value of [processor_count][crate::model::AutonomousDatabaseInsight::processor_count].
    pub fn set_processor_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.processor_count = Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::AutonomousDatabaseInsight::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::AutonomousDatabaseInsight::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::AutonomousDatabaseInsight::lifecycle_state].
    pub fn set_lifecycle_state<T: std::convert::Into<LifecycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_details][crate::model::AutonomousDatabaseInsight::lifecycle_details].
    pub fn set_lifecycle_details<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.lifecycle_details = Some(v.into());
        self
    }

    /// Sets the value of [database_connection_status_details][crate::model::AutonomousDatabaseInsight::database_connection_status_details].
    pub fn set_database_connection_status_details<T: std::convert::Into<String>>(
        mut self,
        v: T,
    ) -> Self {
        self.database_connection_status_details = Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::AutonomousDatabaseInsight::freeform_tags].
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

    /// Sets the value of [defined_tags][crate::model::AutonomousDatabaseInsight::defined_tags].
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

    /// Sets the value of [system_tags][crate::model::AutonomousDatabaseInsight::system_tags].
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

    /// Sets the value of [database_id][crate::model::AutonomousDatabaseInsight::database_id].
    pub fn set_database_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][crate::model::AutonomousDatabaseInsight::database_name].
    pub fn set_database_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [database_display_name][crate::model::AutonomousDatabaseInsight::database_display_name].
    pub fn set_database_display_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_display_name = Some(v.into());
        self
    }

    /// Sets the value of [database_resource_type][crate::model::AutonomousDatabaseInsight::database_resource_type].
    pub fn set_database_resource_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_resource_type = Some(v.into());
        self
    }

    /// Sets the value of [is_advanced_features_enabled][crate::model::AutonomousDatabaseInsight::is_advanced_features_enabled].
    pub fn set_is_advanced_features_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_advanced_features_enabled = Some(v.into());
        self
    }

    /// Sets the value of [opsi_private_endpoint_id][crate::model::AutonomousDatabaseInsight::opsi_private_endpoint_id].
    pub fn set_opsi_private_endpoint_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.opsi_private_endpoint_id = Some(v.into());
        self
    }

    /// Sets the value of [credential_details][crate::model::AutonomousDatabaseInsight::credential_details].
    pub fn set_credential_details<T: std::convert::Into<CredentialDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.credential_details = Some(v.into());
        self
    }
}

impl binding::Model for AutonomousDatabaseInsight {
    const NAME: &'static str = "AutonomousDatabaseInsight";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        fields.skip("entitySource", "entity_source")?;
        Ok(Self {
            id: fields.take("id", "id")?,
            compartment_id: fields.take("compartmentId", "compartment_id")?,
            status: fields.take("status", "status")?,
            database_type: fields.take("databaseType", "database_type")?,
            database_version: fields.take("databaseVersion", "database_version")?,
            processor_count: fields.take("processorCount", "processor_count")?,
            time_created: fields.take("timeCreated", "time_created")?,
            time_updated: fields.take("timeUpdated", "time_updated")?,
            lifecycle_state: fields.take("lifecycleState", "lifecycle_state")?,
            lifecycle_details: fields.take("lifecycleDetails", "lifecycle_details")?,
            database_connection_status_details: fields
                .take("databaseConnectionStatusDetails", "database_connection_status_details")?,
            freeform_tags: fields.take_map("freeformTags", "freeform_tags")?,
            defined_tags: fields.take_map("definedTags", "defined_tags")?,
            system_tags: fields.take_map("systemTags", "system_tags")?,
            database_id: fields.take("databaseId", "database_id")?,
            database_name: fields.take("databaseName", "database_name")?,
            database_display_name: fields.take("databaseDisplayName", "database_display_name")?,
            database_resource_type: fields.take("databaseResourceType", "database_resource_type")?,
            is_advanced_features_enabled: fields
                .take("isAdvancedFeaturesEnabled", "is_advanced_features_enabled")?,
            opsi_private_endpoint_id: fields
                .take("opsiPrivateEndpointId", "opsi_private_endpoint_id")?,
            credential_details: fields.take("credentialDetails", "credential_details")?,
        })
    }
}

/// An insight for an external database managed by Enterprise Manager.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct EmManagedExternalDatabaseInsight {
    /// The database insight OCID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,

    /// The database type, `ADW-S`, `ATP-D`, `EXTERNAL-NONCDB`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_count: Option<i32>,
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
    pub lifecycle_state: Option<LifecycleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_connection_status_details: Option<String>,

    /// Simple key-value pairs without predefined names or scope.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub freeform_tags: HashMap<String, String>,

    /// Tags scoped to a namespace, `{"Operations": {"CostCenter": "42"}}`.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub defined_tags: HashMap<String, HashMap<String, serde_json::Value>>,

    /// Tags set by the service.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub system_tags: HashMap<String, HashMap<String, serde_json::Value>>,

    /// The Enterprise Manager unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_manager_identifier: Option<String>,

    /// The OPSI Enterprise Manager bridge OCID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_manager_bridge_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_manager_entity_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_manager_entity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_manager_entity_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_manager_entity_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exadata_insight_id: Option<String>,
}

impl EmManagedExternalDatabaseInsight {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::EmManagedExternalDatabaseInsight::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::EmManagedExternalDatabaseInsight::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [status][crate::model::EmManagedExternalDatabaseInsight::status].
    pub fn set_status<T: std::convert::Into<ResourceStatus>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [database_type][crate::model::EmManagedExternalDatabaseInsight::database_type].
    pub fn set_database_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_type = Some(v.into());
        self
    }

    /// Sets the value of [database_version][crate::model::EmManagedExternalDatabaseInsight::database_version].
    pub fn set_database_version<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_version = Some(v.into());
        self
    }

    /// Sets the value of [processor_count][crate::model::EmManagedExternalDatabaseInsight::processor_count].
    pub fn set_processor_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.processor_count = Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::EmManagedExternalDatabaseInsight::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::EmManagedExternalDatabaseInsight::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::EmManagedExternalDatabaseInsight::lifecycle_state].
    pub fn set_lifecycle_state<T: std::convert::Into<LifecycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_details][crate::model::EmManagedExternalDatabaseInsight::lifecycle_details].
    pub fn set_lifecycle_details<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.lifecycle_details = Some(v.into());
        self
    }

    /// Sets the value of [database_connection_status_details][crate::model::EmManagedExternalDatabaseInsight::database_connection_status_details].
    pub fn set_database_connection_status_details<T: std::convert::Into<String>>(
        mut self,
        v: T,
    ) -> Self {
        self.database_connection_status_details = Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::EmManagedExternalDatabaseInsight::freeform_tags].
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

    /// Sets the value of [defined_tags][crate::model::EmManagedExternalDatabaseInsight::defined_tags].
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

    /// Sets the value of [system_tags][crate::model::EmManagedExternalDatabaseInsight::system_tags].
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

    /// Sets the value of [enterprise_manager_identifier][crate::model::EmManagedExternalDatabaseInsight::enterprise_manager_identifier].
    pub fn set_enterprise_manager_identifier<T: std::convert::Into<String>>(
        mut self,
        v: T,
    ) -> Self {
        self.enterprise_manager_identifier = Some(v.into());
        self
    }

    /// Sets the value of [enterprise_manager_bridge_id][crate::model::EmManagedExternalDatabaseInsight::enterprise_manager_bridge_id].
    pub fn set_enterprise_manager_bridge_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.enterprise_manager_bridge_id = Some(v.into());
        self
    }

    /// Sets the value of [enterprise_manager_entity_name][crate::model::EmManagedExternalDatabaseInsight::enterprise_manager_entity_name].
    pub fn set_enterprise_manager_entity_name<T: std::convert::Into<String>>(
        mut self,
        v: T,
    ) -> Self {
        self.enterprise_manager_entity_name = Some(v.into());
        self
    }

    /// Sets the value of [enterprise_manager_entity_type][crate::model::EmManagedExternalDatabaseInsight::enterprise_manager_entity_type].
    pub fn set_enterprise_manager_entity_type<T: std::convert::Into<String>>(
        mut self,
        v: T,
    ) -> Self {
        self.enterprise_manager_entity_type = Some(v.into());
        self
    }

    /// Sets the value of [enterprise_manager_entity_identifier][crate::model::EmManagedExternalDatabaseInsight::enterprise_manager_entity_identifier].
    pub fn set_enterprise_manager_entity_identifier<T: std::convert::Into<String>>(
        mut self,
        v: T,
    ) -> Self {
        self.enterprise_manager_entity_identifier = Some(v.into());
        self
    }

    /// Sets the value of [enterprise_manager_entity_display_name][crate::model::EmManagedExternalDatabaseInsight::enterprise_manager_entity_display_name].
    pub fn set_enterprise_manager_entity_display_name<T: std::convert::Into<String>>(
        mut self,
        v: T,
    ) -> Self {
        self.enterprise_manager_entity_display_name = Some(v.into());
        self
    }

    /// Sets the value of [exadata_insight_id][crate::model::EmManagedExternalDatabaseInsight::exadata_insight_id].
    pub fn set_exadata_insight_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.exadata_insight_id = Some(v.into());
        self
    }
}

impl binding::Model for EmManagedExternalDatabaseInsight {
    const NAME: &'static str = "EmManagedExternalDatabaseInsight";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        fields.skip("entitySource", "entity_source")?;
        Ok(Self {
            id: fields.take("id", "id")?,
            compartment_id: fields.take("compartmentId", "compartment_id")?,
            status: fields.take("status", "status")?,
            database_type: fields.take("databaseType", "database_type")?,
            database_version: fields.take("databaseVersion", "database_version")?,
            processor_count: fields.take("processorCount", "processor_count")?,
            time_created: fields.take("timeCreated", "time_created")?,
            time_updated: fields.take("timeUpdated", "time_updated")?,
            lifecycle_state: fields.take("lifecycleState", "lifecycle_state")?,
            lifecycle_details: fields.take("lifecycleDetails", "lifecycle_details")?,
            database_connection_status_details: fields
                .take("databaseConnectionStatusDetails", "database_connection_status_details")?,
            freeform_tags: fields.take_map("freeformTags", "freeform_tags")?,
            defined_tags: fields.take_map("definedTags", "defined_tags")?,
            system_tags: fields.take_map("systemTags", "system_tags")?,
            enterprise_manager_identifier: fields
                .take("enterpriseManagerIdentifier", "enterprise_manager_identifier")?,
            enterprise_manager_bridge_id: fields
                .take("enterpriseManagerBridgeId", "enterprise_manager_bridge_id")?,
            enterprise_manager_entity_name: fields
                .take("enterpriseManagerEntityName", "enterprise_manager_entity_name")?,
            enterprise_manager_entity_type: fields
                .take("enterpriseManagerEntityType", "enterprise_manager_entity_type")?,
            enterprise_manager_entity_identifier: fields
                .take("enterpriseManagerEntityIdentifier", "enterprise_manager_entity_identifier")?,
            enterprise_manager_entity_display_name: fields.take(
                "enterpriseManagerEntityDisplayName",
                "enterprise_manager_entity_display_name",
            )?,
            exadata_insight_id: fields.take("exadataInsightId", "exadata_insight_id")?,
        })
    }
}

/// An insight for an external database monitored by a management agent.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct MacsManagedExternalDatabaseInsight {
    /// The database insight OCID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,

    /// The database type, `ADW-S`, `ATP-D`, `EXTERNAL-NONCDB`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_count: Option<i32>,
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
    pub lifecycle_state: Option<LifecycleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_connection_status_details: Option<String>,

    /// Simple key-value pairs without predefined names or scope.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub freeform_tags: HashMap<String, String>,

    /// Tags scoped to a namespace, `{"Operations": {"CostCenter": "42"}}`.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub defined_tags: HashMap<String, HashMap<String, serde_json::Value>>,

    /// Tags set by the service.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub system_tags: HashMap<String, HashMap<String, serde_json::Value>>,

    /// The OCID of the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_agent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_credential_details: Option<CredentialDetails>,
}

impl MacsManagedExternalDatabaseInsight {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::MacsManagedExternalDatabaseInsight::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::MacsManagedExternalDatabaseInsight::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [status][crate::model::MacsManagedExternalDatabaseInsight::status].
    pub fn set_status<T: std::convert::Into<ResourceStatus>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [database_type][crate::model::MacsManagedExternalDatabaseInsight::database_type].
    pub fn set_database_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_type = Some(v.into());
        self
    }

    /// Sets the value of [database_version][crate::model::MacsManagedExternalDatabaseInsight::database_version].
    pub fn set_database_version<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_version = Some(v.into());
        self
    }

    /// Sets the value of [processor_count][crate::model::MacsManagedExternalDatabaseInsight::processor_count].
    pub fn set_processor_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.processor_count = Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::MacsManagedExternalDatabaseInsight::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::MacsManagedExternalDatabaseInsight::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::MacsManagedExternalDatabaseInsight::lifecycle_state].
    pub fn set_lifecycle_state<T: std::convert::Into<LifecycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_details][crate::model::MacsManagedExternalDatabaseInsight::lifecycle_details].
    pub fn set_lifecycle_details<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.lifecycle_details = Some(v.into());
        self
    }

    /// Sets the value of [database_connection_status_details][crate::model::MacsManagedExternalDatabaseInsight::database_connection_status_details].
    pub fn set_database_connection_status_details<T: std::convert::Into<String>>(
        mut self,
        v: T,
    ) -> Self {
        self.database_connection_status_details = Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::MacsManagedExternalDatabaseInsight::freeform_tags].
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

    /// Sets the value of [defined_tags][crate::model::MacsManagedExternalDatabaseInsight::defined_tags].
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

    /// Sets the value of [system_tags][crate::model::MacsManagedExternalDatabaseInsight::system_tags].
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

    /// Sets the value of [database_id][crate::model::MacsManagedExternalDatabaseInsight::database_id].
    pub fn set_database_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][crate::model::MacsManagedExternalDatabaseInsight::database_name].
    pub fn set_database_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [database_display_name][crate::model::MacsManagedExternalDatabaseInsight::database_display_name].
    pub fn set_database_display_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_display_name = Some(v.into());
        self
    }

    /// Sets the value of [database_resource_type][crate::model::MacsManagedExternalDatabaseInsight::database_resource_type].
    pub fn set_database_resource_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_resource_type = Some(v.into());
        self
    }

    /// Sets the value of [management_agent_id][crate::model::MacsManagedExternalDatabaseInsight::management_agent_id].
    pub fn set_management_agent_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.management_agent_id = Some(v.into());
        self
    }

    /// Sets the value of [connector_id][crate::model::MacsManagedExternalDatabaseInsight::connector_id].
    pub fn set_connector_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.connector_id = Some(v.into());
        self
    }

    /// Sets the value of [connection_credential_details][crate::model::MacsManagedExternalDatabaseInsight::connection_credential_details].
    pub fn set_connection_credential_details<T: std::convert::Into<CredentialDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.connection_credential_details = Some(v.into());
        self
    }
}

impl binding::Model for MacsManagedExternalDatabaseInsight {
    const NAME: &'static str = "MacsManagedExternalDatabaseInsight";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        fields.skip("entitySource", "entity_source")?;
        Ok(Self {
            id: fields.take("id", "id")?,
            compartment_id: fields.take("compartmentId", "compartment_id")?,
            status: fields.take("status", "status")?,
            database_type: fields.take("databaseType", "database_type")?,
            database_version: fields.take("databaseVersion", "database_version")?,
            processor_count: fields.take("processorCount", "processor_count")?,
            time_created: fields.take("timeCreated", "time_created")?,
            time_updated: fields.take("timeUpdated", "time_updated")?,
            lifecycle_state: fields.take("lifecycleState", "lifecycle_state")?,
            lifecycle_details: fields.take("lifecycleDetails", "lifecycle_details")?,
            database_connection_status_details: fields
                .take("databaseConnectionStatusDetails", "database_connection_status_details")?,
            freeform_tags: fields.take_map("freeformTags", "freeform_tags")?,
            defined_tags: fields.take_map("definedTags", "defined_tags")?,
            system_tags: fields.take_map("systemTags", "system_tags")?,
            database_id: fields.take("databaseId", "database_id")?,
            database_name: fields.take("databaseName", "database_name")?,
            database_display_name: fields.take("databaseDisplayName", "database_display_name")?,
            database_resource_type: fields.take("databaseResourceType", "database_resource_type")?,
            management_agent_id: fields.take("managementAgentId", "management_agent_id")?,
            connector_id: fields.take("connectorId", "connector_id")?,
            connection_credential_details: fields
                .take("connectionCredentialDetails", "connection_credential_details")?,
        })
    }
}

/// An insight for a database reached through a private endpoint.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct PeComanagedDatabaseInsight {
    /// The database insight OCID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,

    /// The database type, `ADW-S`, `ATP-D`, `EXTERNAL-NONCDB`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_count: Option<i32>,
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
    pub lifecycle_state: Option<LifecycleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_connection_status_details: Option<String>,

    /// Simple key-value pairs without predefined names or scope.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub freeform_tags: HashMap<String, String>,

    /// Tags scoped to a namespace, `{"Operations": {"CostCenter": "42"}}`.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub defined_tags: HashMap<String, HashMap<String, serde_json::Value>>,

    /// Tags set by the service.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub system_tags: HashMap<String, HashMap<String, serde_json::Value>>,

    /// The OCID of the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opsi_private_endpoint_id: Option<String>,

    /// The OCID of the VM cluster or DB system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_details: Option<CredentialDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_details: Option<PeComanagedDatabaseConnectionDetails>,
}

impl PeComanagedDatabaseInsight {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::PeComanagedDatabaseInsight::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::PeComanagedDatabaseInsight::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [status][crate::model::PeComanagedDatabaseInsight::status].
    pub fn set_status<T: std::convert::Into<ResourceStatus>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [database_type][crate::model::PeComanagedDatabaseInsight::database_type].
    pub fn set_database_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_type = Some(v.into());
        self
    }

    /// Sets the value of [database_version][crate::model::PeComanagedDatabaseInsight::database_version].
    pub fn set_database_version<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_version = Some(v.into());
        self
    }

    /// Sets the value of [processor_count][crate::model::PeComanagedDatabaseInsight::processor_count].
    pub fn set_processor_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.processor_count = Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::PeComanagedDatabaseInsight::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::PeComanagedDatabaseInsight::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::PeComanagedDatabaseInsight::lifecycle_state].
    pub fn set_lifecycle_state<T: std::convert::Into<LifecycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_details][crate::model::PeComanagedDatabaseInsight::lifecycle_details].
    pub fn set_lifecycle_details<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.lifecycle_details = Some(v.into());
        self
    }

    /// Sets the value of [database_connection_status_details][crate::model::PeComanagedDatabaseInsight::database_connection_status_details].
    pub fn set_database_connection_status_details<T: std::convert::Into<String>>(
        mut self,
        v: T,
    ) -> Self {
        self.database_connection_status_details = Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::PeComanagedDatabaseInsight::freeform_tags].
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

    /// Sets the value of [defined_tags][crate::model::PeComanagedDatabaseInsight::defined_tags].
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

    /// Sets the value of [system_tags][crate::model::PeComanagedDatabaseInsight::system_tags].
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

    /// Sets the value of [database_id][crate::model::PeComanagedDatabaseInsight::database_id].
    pub fn set_database_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][crate::model::PeComanagedDatabaseInsight::database_name].
    pub fn set_database_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [database_display_name][crate::model::PeComanagedDatabaseInsight::database_display_name].
    pub fn set_database_display_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_display_name = Some(v.into());
        self
    }

    /// Sets the value of [database_resource_type][crate::model::PeComanagedDatabaseInsight::database_resource_type].
    pub fn set_database_resource_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_resource_type = Some(v.into());
        self
    }

    /// Sets the value of [opsi_private_endpoint_id][crate::model::PeComanagedDatabaseInsight::opsi_private_endpoint_id].
    pub fn set_opsi_private_endpoint_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.opsi_private_endpoint_id = Some(v.into());
        self
    }

    /// Sets the value of [parent_id][crate::model::PeComanagedDatabaseInsight::parent_id].
    pub fn set_parent_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.parent_id = Some(v.into());
        self
    }

    /// Sets the value of [root_id][crate::model::PeComanagedDatabaseInsight::root_id].
    pub fn set_root_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.root_id = Some(v.into());
        self
    }

    /// Sets the value of [credential_details][crate::model::PeComanagedDatabaseInsight::credential_details].
    pub fn set_credential_details<T: std::convert::Into<CredentialDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.credential_details = Some(v.into());
        self
    }

    /// Sets the value of [connection_details][crate::model::PeComanagedDatabaseInsight::connection_details].
    pub fn set_connection_details<T: std::convert::Into<PeComanagedDatabaseConnectionDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.connection_details = Some(v.into());
        self
    }
}

impl binding::Model for PeComanagedDatabaseInsight {
    const NAME: &'static str = "PeComanagedDatabaseInsight";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        fields.skip("entitySource", "entity_source")?;
        Ok(Self {
            id: fields.take("id", "id")?,
            compartment_id: fields.take("compartmentId", "compartment_id")?,
            status: fields.take("status", "status")?,
            database_type: fields.take("databaseType", "database_type")?,
            database_version: fields.take("databaseVersion", "database_version")?,
            processor_count: fields.take("processorCount", "processor_count")?,
            time_created: fields.take("timeCreated", "time_created")?,
            time_updated: fields.take("timeUpdated", "time_updated")?,
            lifecycle_state: fields.take("lifecycleState", "lifecycle_state")?,
            lifecycle_details: fields.take("lifecycleDetails", "lifecycle_details")?,
            database_connection_status_details: fields
                .take("databaseConnectionStatusDetails", "database_connection_status_details")?,
            freeform_tags: fields.take_map("freeformTags", "freeform_tags")?,
            defined_tags: fields.take_map("definedTags", "defined_tags")?,
            system_tags: fields.take_map("systemTags", "system_tags")?,
            database_id: fields.take("databaseId", "database_id")?,
            database_name: fields.take("databaseName", "database_name")?,
            database_display_name: fields.take("databaseDisplayName", "database_display_name")?,
            database_resource_type: fields.take("databaseResourceType", "database_resource_type")?,
            opsi_private_endpoint_id: fields
                .take("opsiPrivateEndpointId", "opsi_private_endpoint_id")?,
            parent_id: fields.take("parentId", "parent_id")?,
            root_id: fields.take("rootId", "root_id")?,
            credential_details: fields.take("credentialDetails", "credential_details")?,
            connection_details: fields.take("connectionDetails", "connection_details")?,
        })
    }
}

/// A summary of a [DatabaseInsight], returned by list operations.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum DatabaseInsightSummary {
    /// `entitySource = "AUTONOMOUS_DATABASE"`.
    AutonomousDatabase(Box<AutonomousDatabaseInsightSummary>),
    /// `entitySource = "EM_MANAGED_EXTERNAL_DATABASE"`.
    EmManagedExternalDatabase(Box<EmManagedExternalDatabaseInsightSummary>),
    /// `entitySource = "MACS_MANAGED_EXTERNAL_DATABASE"`.
    MacsManagedExternalDatabase(Box<MacsManagedExternalDatabaseInsightSummary>),
    /// `entitySource = "PE_COMANAGED_DATABASE"`.
    PeComanagedDatabase(Box<PeComanagedDatabaseInsightSummary>),
    /// A missing or unrecognized `entitySource`.
    Base(Box<DatabaseInsightSummaryBase>),
}

impl DatabaseInsightSummary {
    /// The discriminator. Subtypes always report their own literal.
    pub fn entity_source(&self) -> Option<DatabaseEntitySource> {
        match self {
            Self::AutonomousDatabase(_) => Some(DatabaseEntitySource::AutonomousDatabase),
            Self::EmManagedExternalDatabase(_) => {
                Some(DatabaseEntitySource::EmManagedExternalDatabase)
            }
            Self::MacsManagedExternalDatabase(_) => {
                Some(DatabaseEntitySource::MacsManagedExternalDatabase)
            }
            Self::PeComanagedDatabase(_) => Some(DatabaseEntitySource::PeComanagedDatabase),
            Self::Base(v) => v.entity_source.clone(),
        }
    }

    /// The value of `id`, shared by all the variants.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::AutonomousDatabase(v) => v.id.as_deref(),
            Self::EmManagedExternalDatabase(v) => v.id.as_deref(),
            Self::MacsManagedExternalDatabase(v) => v.id.as_deref(),
            Self::PeComanagedDatabase(v) => v.id.as_deref(),
            Self::Base(v) => v.id.as_deref(),
        }
    }

    /// The value of `databaseId`, shared by all the variants.
    pub fn database_id(&self) -> Option<&str> {
        match self {
            Self::AutonomousDatabase(v) => v.database_id.as_deref(),
            Self::EmManagedExternalDatabase(v) => v.database_id.as_deref(),
            Self::MacsManagedExternalDatabase(v) => v.database_id.as_deref(),
            Self::PeComanagedDatabase(v) => v.database_id.as_deref(),
            Self::Base(v) => v.database_id.as_deref(),
        }
    }

    /// The value of `compartmentId`, shared by all the variants.
    pub fn compartment_id(&self) -> Option<&str> {
        match self {
            Self::AutonomousDatabase(v) => v.compartment_id.as_deref(),
            Self::EmManagedExternalDatabase(v) => v.compartment_id.as_deref(),
            Self::MacsManagedExternalDatabase(v) => v.compartment_id.as_deref(),
            Self::PeComanagedDatabase(v) => v.compartment_id.as_deref(),
            Self::Base(v) => v.compartment_id.as_deref(),
        }
    }

    /// The value of `databaseName`, shared by all the variants.
    pub fn database_name(&self) -> Option<&str> {
        match self {
            Self::AutonomousDatabase(v) => v.database_name.as_deref(),
            Self::EmManagedExternalDatabase(v) => v.database_name.as_deref(),
            Self::MacsManagedExternalDatabase(v) => v.database_name.as_deref(),
            Self::PeComanagedDatabase(v) => v.database_name.as_deref(),
            Self::Base(v) => v.database_name.as_deref(),
        }
    }

    /// The value of `databaseDisplayName`, shared by all the variants.
    pub fn database_display_name(&self) -> Option<&str> {
        match self {
            Self::AutonomousDatabase(v) => v.database_display_name.as_deref(),
            Self::EmManagedExternalDatabase(v) => v.database_display_name.as_deref(),
            Self::MacsManagedExternalDatabase(v) => v.database_display_name.as_deref(),
            Self::PeComanagedDatabase(v) => v.database_display_name.as_deref(),
            Self::Base(v) => v.database_display_name.as_deref(),
        }
    }

    /// The value of `databaseType`, shared by all the variants.
    pub fn database_type(&self) -> Option<&str> {
        match self {
            Self::AutonomousDatabase(v) => v.database_type.as_deref(),
            Self::EmManagedExternalDatabase(v) => v.database_type.as_deref(),
            Self::MacsManagedExternalDatabase(v) => v.database_type.as_deref(),
            Self::PeComanagedDatabase(v) => v.database_type.as_deref(),
            Self::Base(v) => v.database_type.as_deref(),
        }
    }

    /// The value of `databaseVersion`, shared by all the variants.
    pub fn database_version(&self) -> Option<&str> {
        match self {
            Self::AutonomousDatabase(v) => v.database_version.as_deref(),
            Self::EmManagedExternalDatabase(v) => v.database_version.as_deref(),
            Self::MacsManagedExternalDatabase(v) => v.database_version.as_deref(),
            Self::PeComanagedDatabase(v) => v.database_version.as_deref(),
            Self::Base(v) => v.database_version.as_deref(),
        }
    }

    /// The value of `databaseHostNames`, shared by all the variants.
    pub fn database_host_names(&self) -> &[String] {
        match self {
            Self::AutonomousDatabase(v) => &v.database_host_names,
            Self::EmManagedExternalDatabase(v) => &v.database_host_names,
            Self::MacsManagedExternalDatabase(v) => &v.database_host_names,
            Self::PeComanagedDatabase(v) => &v.database_host_names,
            Self::Base(v) => &v.database_host_names,
        }
    }

    /// The value of `processorCount`, shared by all the variants.
    pub fn processor_count(&self) -> Option<i32> {
        match self {
            Self::AutonomousDatabase(v) => v.processor_count,
            Self::EmManagedExternalDatabase(v) => v.processor_count,
            Self::MacsManagedExternalDatabase(v) => v.processor_count,
            Self::PeComanagedDatabase(v) => v.processor_count,
            Self::Base(v) => v.processor_count,
        }
    }

    /// The value of `status`, shared by all the variants.
    pub fn status(&self) -> Option<&ResourceStatus> {
        match self {
            Self::AutonomousDatabase(v) => v.status.as_ref(),
            Self::EmManagedExternalDatabase(v) => v.status.as_ref(),
            Self::MacsManagedExternalDatabase(v) => v.status.as_ref(),
            Self::PeComanagedDatabase(v) => v.status.as_ref(),
            Self::Base(v) => v.status.as_ref(),
        }
    }

    /// The value of `timeCreated`, shared by all the variants.
    pub fn time_created(&self) -> Option<time::OffsetDateTime> {
        match self {
            Self::AutonomousDatabase(v) => v.time_created,
            Self::EmManagedExternalDatabase(v) => v.time_created,
            Self::MacsManagedExternalDatabase(v) => v.time_created,
            Self::PeComanagedDatabase(v) => v.time_created,
            Self::Base(v) => v.time_created,
        }
    }

    /// The value of `timeUpdated`, shared by all the variants.
    pub fn time_updated(&self) -> Option<time::OffsetDateTime> {
        match self {
            Self::AutonomousDatabase(v) => v.time_updated,
            Self::EmManagedExternalDatabase(v) => v.time_updated,
            Self::MacsManagedExternalDatabase(v) => v.time_updated,
            Self::PeComanagedDatabase(v) => v.time_updated,
            Self::Base(v) => v.time_updated,
        }
    }

    /// The value of `lifecycleState`, shared by all the variants.
    pub fn lifecycle_state(&self) -> Option<&LifecycleState> {
        match self {
            Self::AutonomousDatabase(v) => v.lifecycle_state.as_ref(),
            Self::EmManagedExternalDatabase(v) => v.lifecycle_state.as_ref(),
            Self::MacsManagedExternalDatabase(v) => v.lifecycle_state.as_ref(),
            Self::PeComanagedDatabase(v) => v.lifecycle_state.as_ref(),
            Self::Base(v) => v.lifecycle_state.as_ref(),
        }
    }

    /// The value of `lifecycleDetails`, shared by all the variants.
    pub fn lifecycle_details(&self) -> Option<&str> {
        match self {
            Self::AutonomousDatabase(v) => v.lifecycle_details.as_deref(),
            Self::EmManagedExternalDatabase(v) => v.lifecycle_details.as_deref(),
            Self::MacsManagedExternalDatabase(v) => v.lifecycle_details.as_deref(),
            Self::PeComanagedDatabase(v) => v.lifecycle_details.as_deref(),
            Self::Base(v) => v.lifecycle_details.as_deref(),
        }
    }

    /// The value of `freeformTags`, shared by all the variants.
    pub fn freeform_tags(&self) -> &HashMap<String, String> {
        match self {
            Self::AutonomousDatabase(v) => &v.freeform_tags,
            Self::EmManagedExternalDatabase(v) => &v.freeform_tags,
            Self::MacsManagedExternalDatabase(v) => &v.freeform_tags,
            Self::PeComanagedDatabase(v) => &v.freeform_tags,
            Self::Base(v) => &v.freeform_tags,
        }
    }

    /// The value of `definedTags`, shared by all the variants.
    pub fn defined_tags(&self) -> &HashMap<String, HashMap<String, serde_json::Value>> {
        match self {
            Self::AutonomousDatabase(v) => &v.defined_tags,
            Self::EmManagedExternalDatabase(v) => &v.defined_tags,
            Self::MacsManagedExternalDatabase(v) => &v.defined_tags,
            Self::PeComanagedDatabase(v) => &v.defined_tags,
            Self::Base(v) => &v.defined_tags,
        }
    }

    /// The value of `systemTags`, shared by all the variants.
    pub fn system_tags(&self) -> &HashMap<String, HashMap<String, serde_json::Value>> {
        match self {
            Self::AutonomousDatabase(v) => &v.system_tags,
            Self::EmManagedExternalDatabase(v) => &v.system_tags,
            Self::MacsManagedExternalDatabase(v) => &v.system_tags,
            Self::PeComanagedDatabase(v) => &v.system_tags,
            Self::Base(v) => &v.system_tags,
        }
    }
}

impl std::default::Default for DatabaseInsightSummary {
    fn default() -> Self {
        Self::Base(Box::default())
    }
}

impl binding::Polymorphic for DatabaseInsightSummary {
    const DISCRIMINATOR: (&'static str, &'static str) = ("entitySource", "entity_source");
    const SUBTYPES: &'static [(&'static str, binding::polymorphic::Binder<Self>)] = &[
        (
            "AUTONOMOUS_DATABASE",
            binding::polymorphic::subtype::<AutonomousDatabaseInsightSummary, Self>,
        ),
        (
            "EM_MANAGED_EXTERNAL_DATABASE",
            binding::polymorphic::subtype::<EmManagedExternalDatabaseInsightSummary, Self>,
        ),
        (
            "MACS_MANAGED_EXTERNAL_DATABASE",
            binding::polymorphic::subtype::<MacsManagedExternalDatabaseInsightSummary, Self>,
        ),
        (
            "PE_COMANAGED_DATABASE",
            binding::polymorphic::subtype::<PeComanagedDatabaseInsightSummary, Self>,
        ),
    ];
    const BASE: binding::polymorphic::Binder<Self> =
        binding::polymorphic::subtype::<DatabaseInsightSummaryBase, Self>;
}

impl binding::Model for DatabaseInsightSummary {
    const NAME: &'static str = "DatabaseInsightSummary";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        binding::polymorphic::resolve(fields)
    }
}

impl serde::ser::Serialize for DatabaseInsightSummary {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use binding::polymorphic::serialize_tagged;
        match self {
            Self::AutonomousDatabase(v) => {
                serialize_tagged(serializer, "entitySource", "AUTONOMOUS_DATABASE", v)
            }
            Self::EmManagedExternalDatabase(v) => {
                serialize_tagged(serializer, "entitySource", "EM_MANAGED_EXTERNAL_DATABASE", v)
            }
            Self::MacsManagedExternalDatabase(v) => {
                serialize_tagged(serializer, "entitySource", "MACS_MANAGED_EXTERNAL_DATABASE", v)
            }
            Self::PeComanagedDatabase(v) => {
                serialize_tagged(serializer, "entitySource", "PE_COMANAGED_DATABASE", v)
            }
            Self::Base(v) => v.serialize(serializer),
        }
    }
}

impl std::convert::From<AutonomousDatabaseInsightSummary> for DatabaseInsightSummary {
    fn from(value: AutonomousDatabaseInsightSummary) -> Self {
        Self::AutonomousDatabase(Box::new(value))
    }
}

impl std::convert::From<EmManagedExternalDatabaseInsightSummary> for DatabaseInsightSummary {
    fn from(value: EmManagedExternalDatabaseInsightSummary) -> Self {
        Self::EmManagedExternalDatabase(Box::new(value))
    }
}

impl std::convert::From<MacsManagedExternalDatabaseInsightSummary> for DatabaseInsightSummary {
    fn from(value: MacsManagedExternalDatabaseInsightSummary) -> Self {
        Self::MacsManagedExternalDatabase(Box::new(value))
    }
}

impl std::convert::From<PeComanagedDatabaseInsightSummary> for DatabaseInsightSummary {
    fn from(value: PeComanagedDatabaseInsightSummary) -> Self {
        Self::PeComanagedDatabase(Box::new(value))
    }
}

/// A base value naming a known `entitySource` converts to that subtype.
impl std::convert::From<DatabaseInsightSummaryBase> for DatabaseInsightSummary {
    fn from(value: DatabaseInsightSummaryBase) -> Self {
        binding::polymorphic::from_base(value, |v| Self::Base(Box::new(v)))
    }
}

/// The base variant of [DatabaseInsightSummary].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct DatabaseInsightSummaryBase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_source: Option<DatabaseEntitySource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_version: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub database_host_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
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
    pub lifecycle_state: Option<LifecycleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<String>,

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

impl DatabaseInsightSummaryBase {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [entity_source][crate::model::DatabaseInsightSummaryBase::entity_source].
    pub fn set_entity_source<T: std::convert::Into<DatabaseEntitySource>>(mut self, v: T) -> Self {
        self.entity_source = Some(v.into());
        self
    }

    /// Sets the value of [id][crate::model::DatabaseInsightSummaryBase::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [database_id][crate::model::DatabaseInsightSummaryBase::database_id].
    pub fn set_database_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_id = Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::DatabaseInsightSummaryBase::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][crate::model::DatabaseInsightSummaryBase::database_name].
    pub fn set_database_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [database_display_name][crate::model::DatabaseInsightSummaryBase::database_display_name].
    pub fn set_database_display_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_display_name = Some(v.into());
        self
    }

    /// Sets the value of [database_type][crate::model::DatabaseInsightSummaryBase::database_type].
    pub fn set_database_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_type = Some(v.into());
        self
    }

    /// Sets the value of [database_version][crate::model::DatabaseInsightSummaryBase::database_version].
    pub fn set_database_version<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_version = Some(v.into());
        self
    }

    /// Sets the value of [database_host_names][crate::model::DatabaseInsightSummaryBase::database_host_names].
    pub fn set_database_host_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.database_host_names = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [processor_count][crate::model::DatabaseInsightSummaryBase::processor_count].
    pub fn set_processor_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.processor_count = Some(v.into());
        self
    }

    /// Sets the value of [status][crate::model::DatabaseInsightSummaryBase::status].
    pub fn set_status<T: std::convert::Into<ResourceStatus>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::DatabaseInsightSummaryBase::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::DatabaseInsightSummaryBase::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::DatabaseInsightSummaryBase::lifecycle_state].
    pub fn set_lifecycle_state<T: std::convert::Into<LifecycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_details][crate::model::DatabaseInsightSummaryBase::lifecycle_details].
    pub fn set_lifecycle_details<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.lifecycle_details = Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::DatabaseInsightSummaryBase::freeform_tags].
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

    /// Sets the value of [defined_tags][crate::model::DatabaseInsightSummaryBase::defined_tags].
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

    /// Sets the value of [system_tags][crate::model::DatabaseInsightSummaryBase::system_tags].
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

impl binding::Model for DatabaseInsightSummaryBase {
    const NAME: &'static str = "DatabaseInsightSummaryBase";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            entity_source: fields.take("entitySource", "entity_source")?,
            id: fields.take("id", "id")?,
            database_id: fields.take("databaseId", "database_id")?,
            compartment_id: fields.take("compartmentId", "compartment_id")?,
            database_name: fields.take("databaseName", "database_name")?,
            database_display_name: fields.take("databaseDisplayName", "database_display_name")?,
            database_type: fields.take("databaseType", "database_type")?,
            database_version: fields.take("databaseVersion", "database_version")?,
            database_host_names: fields.take_list("databaseHostNames", "database_host_names")?,
            processor_count: fields.take("processorCount", "processor_count")?,
            status: fields.take("status", "status")?,
            time_created: fields.take("timeCreated", "time_created")?,
            time_updated: fields.take("timeUpdated", "time_updated")?,
            lifecycle_state: fields.take("lifecycleState", "lifecycle_state")?,
            lifecycle_details: fields.take("lifecycleDetails", "lifecycle_details")?,
            freeform_tags: fields.take_map("freeformTags", "freeform_tags")?,
            defined_tags: fields.take_map("definedTags", "defined_tags")?,
            system_tags: fields.take_map("systemTags", "system_tags")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct AutonomousDatabaseInsightSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_version: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub database_host_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
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
    pub lifecycle_state: Option<LifecycleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<String>,

    /// Simple key-value pairs without predefined names or scope.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub freeform_tags: HashMap<String, String>,

    /// Tags scoped to a namespace, `{"Operations": {"CostCenter": "42"}}`.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub defined_tags: HashMap<String, HashMap<String, serde_json::Value>>,

    /// Tags set by the service.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub system_tags: HashMap<String, HashMap<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_advanced_features_enabled: Option<bool>,
}

impl AutonomousDatabaseInsightSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::AutonomousDatabaseInsightSummary::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [database_id][crate::model::AutonomousDatabaseInsightSummary::database_id].
    pub fn set_database_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_id = Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::AutonomousDatabaseInsightSummary::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][crate::model::AutonomousDatabaseInsightSummary::database_name].
    pub fn set_database_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [database_display_name][crate::model::AutonomousDatabaseInsightSummary::database_display_name].
    pub fn set_database_display_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_display_name = Some(v.into());
        self
    }

    /// Sets the value of [database_type][crate::model::AutonomousDatabaseInsightSummary::database_type].
    pub fn set_database_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_type = Some(v.into());
        self
    }

    /// Sets the value of [database_version][crate::model::AutonomousDatabaseInsightSummary::database_version].
    pub fn set_database_version<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_version = Some(v.into());
        self
    }

    /// Sets the value of [database_host_names][crate::model::AutonomousDatabaseInsightSummary::database_host_names].
    pub fn set_database_host_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.database_host_names = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [processor_count][crate::model::AutonomousDatabaseInsightSummary::processor_count].
    pub fn set_processor_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.processor_count = Some(v.into());
        self
    }

    /// Sets the value of [status][crate::model::AutonomousDatabaseInsightSummary::status].
    pub fn set_status<T: std::convert::Into<ResourceStatus>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::AutonomousDatabaseInsightSummary::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::AutonomousDatabaseInsightSummary::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::AutonomousDatabaseInsightSummary::lifecycle_state].
    pub fn set_lifecycle_state<T: std::convert::Into<LifecycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_details][crate::model::AutonomousDatabaseInsightSummary::lifecycle_details].
    pub fn set_lifecycle_details<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.lifecycle_details = Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::AutonomousDatabaseInsightSummary::freeform_tags].
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

    /// Sets the value of [defined_tags][crate::model::AutonomousDatabaseInsightSummary::defined_tags].
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

    /// Sets the value of [system_tags][crate::model::AutonomousDatabaseInsightSummary::system_tags].
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

    /// Sets the value of [is_advanced_features_enabled][crate::model::AutonomousDatabaseInsightSummary::is_advanced_features_enabled].
    pub fn set_is_advanced_features_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_advanced_features_enabled = Some(v.into());
        self
    }
}

impl binding::Model for AutonomousDatabaseInsightSummary {
    const NAME: &'static str = "AutonomousDatabaseInsightSummary";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        fields.skip("entitySource", "entity_source")?;
        Ok(Self {
            id: fields.take("id", "id")?,
            database_id: fields.take("databaseId", "database_id")?,
            compartment_id: fields.take("compartmentId", "compartment_id")?,
            database_name: fields.take("databaseName", "database_name")?,
            database_display_name: fields.take("databaseDisplayName", "database_display_name")?,
            database_type: fields.take("databaseType", "database_type")?,
            database_version: fields.take("databaseVersion", "database_version")?,
            database_host_names: fields.take_list("databaseHostNames", "database_host_names")?,
            processor_count: fields.take("processorCount", "processor_count")?,
            status: fields.take("status", "status")?,
            time_created: fields.take("timeCreated", "time_created")?,
            time_updated: fields.take("timeUpdated", "time_updated")?,
            lifecycle_state: fields.take("lifecycleState", "lifecycle_state")?,
            lifecycle_details: fields.take("lifecycleDetails", "lifecycle_details")?,
            freeform_tags: fields.take_map("freeformTags", "freeform_tags")?,
            defined_tags: fields.take_map("definedTags", "defined_tags")?,
            system_tags: fields.take_map("systemTags", "system_tags")?,
            is_advanced_features_enabled: fields
                .take("isAdvancedFeaturesEnabled", "is_advanced_features_enabled")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct EmManagedExternalDatabaseInsightSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_version: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub database_host_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
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
    pub lifecycle_state: Option<LifecycleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<String>,

    /// Simple key-value pairs without predefined names or scope.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub freeform_tags: HashMap<String, String>,

    /// Tags scoped to a namespace, `{"Operations": {"CostCenter": "42"}}`.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub defined_tags: HashMap<String, HashMap<String, serde_json::Value>>,

    /// Tags set by the service.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub system_tags: HashMap<String, HashMap<String, serde_json::Value>>,

    /// The Enterprise Manager unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_manager_identifier: Option<String>,

    /// The OPSI Enterprise Manager bridge OCID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_manager_bridge_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_manager_entity_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_manager_entity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_manager_entity_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_manager_entity_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exadata_insight_id: Option<String>,
}

impl EmManagedExternalDatabaseInsightSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::EmManagedExternalDatabaseInsightSummary::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [database_id][crate::model::EmManagedExternalDatabaseInsightSummary::database_id].
    pub fn set_database_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_id = Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::EmManagedExternalDatabaseInsightSummary::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][crate::model::EmManagedExternalDatabaseInsightSummary::database_name].
    pub fn set_database_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [database_display_name][crate::model::EmManagedExternalDatabaseInsightSummary::database_display_name].
    pub fn set_database_display_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_display_name = Some(v.into());
        self
    }

    /// Sets the value of [database_type][crate::model::EmManagedExternalDatabaseInsightSummary::database_type].
    pub fn set_database_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_type = Some(v.into());
        self
    }

    /// Sets the value of [database_version][crate::model::EmManagedExternalDatabaseInsightSummary::database_version].
    pub fn set_database_version<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_version = Some(v.into());
        self
    }

    /// Sets the value of [database_host_names][crate::model::EmManagedExternalDatabaseInsightSummary::database_host_names].
    pub fn set_database_host_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.database_host_names = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [processor_count][crate::model::EmManagedExternalDatabaseInsightSummary::processor_count].
    pub fn set_processor_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.processor_count = Some(v.into());
        self
    }

    /// Sets the value of [status][crate::model::EmManagedExternalDatabaseInsightSummary::status].
    pub fn set_status<T: std::convert::Into<ResourceStatus>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::EmManagedExternalDatabaseInsightSummary::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::EmManagedExternalDatabaseInsightSummary::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::EmManagedExternalDatabaseInsightSummary::lifecycle_state].
    pub fn set_lifecycle_state<T: std::convert::Into<LifecycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_details][crate::model::EmManagedExternalDatabaseInsightSummary::lifecycle_details].
    pub fn set_lifecycle_details<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.lifecycle_details = Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::EmManagedExternalDatabaseInsightSummary::freeform_tags].
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

    /// Sets the value of [defined_tags][crate::model::EmManagedExternalDatabaseInsightSummary::defined_tags].
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

    /// Sets the value of [system_tags][crate::model::EmManagedExternalDatabaseInsightSummary::system_tags].
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

    /// Sets the value of [enterprise_manager_identifier][crate::model::EmManagedExternalDatabaseInsightSummary::enterprise_manager_identifier].
    pub fn set_enterprise_manager_identifier<T: std::convert::Into<String>>(
        mut self,
        v: T,
    ) -> Self {
        self.enterprise_manager_identifier = Some(v.into());
        self
    }

    /// Sets the value of [enterprise_manager_bridge_id][crate::model::EmManagedExternalDatabaseInsightSummary::enterprise_manager_bridge_id].
    pub fn set_enterprise_manager_bridge_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.enterprise_manager_bridge_id = Some(v.into());
        self
    }

    /// Sets the value of [enterprise_manager_entity_name][crate::model::EmManagedExternalDatabaseInsightSummary::enterprise_manager_entity_name].
    pub fn set_enterprise_manager_entity_name<T: std::convert::Into<String>>(
        mut self,
        v: T,
    ) -> Self {
        self.enterprise_manager_entity_name = Some(v.into());
        self
    }

    /// Sets the value of [enterprise_manager_entity_type][crate::model::EmManagedExternalDatabaseInsightSummary::enterprise_manager_entity_type].
    pub fn set_enterprise_manager_entity_type<T: std::convert::Into<String>>(
        mut self,
        v: T,
    ) -> Self {
        self.enterprise_manager_entity_type = Some(v.into());
        self
    }

    /// Sets the value of [enterprise_manager_entity_identifier][crate::model::EmManagedExternalDatabaseInsightSummary::enterprise_manager_entity_identifier].
    pub fn set_enterprise_manager_entity_identifier<T: std::convert::Into<String>>(
        mut self,
        v: T,
    ) -> Self {
        self.enterprise_manager_entity_identifier = Some(v.into());
        self
    }

    /// Sets the value of [enterprise_manager_entity_display_name][crate::model::EmManagedExternalDatabaseInsightSummary::enterprise_manager_entity_display_name].
    pub fn set_enterprise_manager_entity_display_name<T: std::convert::Into<String>>(
        mut self,
        v: T,
    ) -> Self {
        self.enterprise_manager_entity_display_name = Some(v.into());
        self
    }

    /// Sets the value of [exadata_insight_id][crate::model::EmManagedExternalDatabaseInsightSummary::exadata_insight_id].
    pub fn set_exadata_insight_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.exadata_insight_id = Some(v.into());
        self
    }
}

impl binding::Model for EmManagedExternalDatabaseInsightSummary {
    const NAME: &'static str = "EmManagedExternalDatabaseInsightSummary";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        fields.skip("entitySource", "entity_source")?;
        Ok(Self {
            id: fields.take("id", "id")?,
            database_id: fields.take("databaseId", "database_id")?,
            compartment_id: fields.take("compartmentId", "compartment_id")?,
            database_name: fields.take("databaseName", "database_name")?,
            database_display_name: fields.take("databaseDisplayName", "database_display_name")?,
            database_type: fields.take("databaseType", "database_type")?,
            database_version: fields.take("databaseVersion", "database_version")?,
            database_host_names: fields.take_list("databaseHostNames", "database_host_names")?,
            processor_count: fields.take("processorCount", "processor_count")?,
            status: fields.take("status", "status")?,
            time_created: fields.take("timeCreated", "time_created")?,
            time_updated: fields.take("timeUpdated", "time_updated")?,
            lifecycle_state: fields.take("lifecycleState", "lifecycle_state")?,
            lifecycle_details: fields.take("lifecycleDetails", "lifecycle_details")?,
            freeform_tags: fields.take_map("freeformTags", "freeform_tags")?,
            defined_tags: fields.take_map("definedTags", "defined_tags")?,
            system_tags: fields.take_map("systemTags", "system_tags")?,
            enterprise_manager_identifier: fields
                .take("enterpriseManagerIdentifier", "enterprise_manager_identifier")?,
            enterprise_manager_bridge_id: fields
                .take("enterpriseManagerBridgeId", "enterprise_manager_bridge_id")?,
            enterprise_manager_entity_name: fields
                .take("enterpriseManagerEntityName", "enterprise_manager_entity_name")?,
            enterprise_manager_entity_type: fields
                .take("enterpriseManagerEntityType", "enterprise_manager_entity_type")?,
            enterprise_manager_entity_identifier: fields
                .take("enterpriseManagerEntityIdentifier", "enterprise_manager_entity_identifier")?,
            enterprise_manager_entity_display_name: fields.take(
                "enterpriseManagerEntityDisplayName",
                "enterprise_manager_entity_display_name",
            )?,
            exadata_insight_id: fields.take("exadataInsightId", "exadata_insight_id")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct MacsManagedExternalDatabaseInsightSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_version: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub database_host_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
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
    pub lifecycle_state: Option<LifecycleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<String>,

    /// Simple key-value pairs without predefined names or scope.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub freeform_tags: HashMap<String, String>,

    /// Tags scoped to a namespace, `{"Operations": {"CostCenter": "42"}}`.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub defined_tags: HashMap<String, HashMap<String, serde_json::Value>>,

    /// Tags set by the service.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub system_tags: HashMap<String, HashMap<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_agent_id: Option<String>,
}

impl MacsManagedExternalDatabaseInsightSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::MacsManagedExternalDatabaseInsightSummary::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [database_id][crate::model::MacsManagedExternalDatabaseInsightSummary::database_id].
    pub fn set_database_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_id = Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::MacsManagedExternalDatabaseInsightSummary::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][crate::model::MacsManagedExternalDatabaseInsightSummary::database_name].
    pub fn set_database_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [database_display_name][crate::model::MacsManagedExternalDatabaseInsightSummary::database_display_name].
    pub fn set_database_display_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_display_name = Some(v.into());
        self
    }

    /// Sets the value of [database_type][crate::model::MacsManagedExternalDatabaseInsightSummary::database_type].
    pub fn set_database_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_type = Some(v.into());
        self
    }

    /// Sets the value of [database_version][crate::model::MacsManagedExternalDatabaseInsightSummary::database_version].
    pub fn set_database_version<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_version = Some(v.into());
        self
    }

    /// Sets the value of [database_host_names][crate::model::MacsManagedExternalDatabaseInsightSummary::database_host_names].
    pub fn set_database_host_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.database_host_names = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [processor_count][crate::model::MacsManagedExternalDatabaseInsightSummary::processor_count].
    pub fn set_processor_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.processor_count = Some(v.into());
        self
    }

    /// Sets the value of [status][crate::model::MacsManagedExternalDatabaseInsightSummary::status].
    pub fn set_status<T: std::convert::Into<ResourceStatus>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::MacsManagedExternalDatabaseInsightSummary::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::MacsManagedExternalDatabaseInsightSummary::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::MacsManagedExternalDatabaseInsightSummary::lifecycle_state].
    pub fn set_lifecycle_state<T: std::convert::Into<LifecycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_details][crate::model::MacsManagedExternalDatabaseInsightSummary::lifecycle_details].
    pub fn set_lifecycle_details<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.lifecycle_details = Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::MacsManagedExternalDatabaseInsightSummary::freeform_tags].
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

    /// Sets the value of [defined_tags][crate::model::MacsManagedExternalDatabaseInsightSummary::defined_tags].
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

    /// Sets the value of [system_tags][crate::model::MacsManagedExternalDatabaseInsightSummary::system_tags].
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

    /// Sets the value of [management_agent_id][crate::model::MacsManagedExternalDatabaseInsightSummary::management_agent_id].
    pub fn set_management_agent_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.management_agent_id = Some(v.into());
        self
    }
}

impl binding::Model for MacsManagedExternalDatabaseInsightSummary {
    const NAME: &'static str = "MacsManagedExternalDatabaseInsightSummary";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        fields.skip("entitySource", "entity_source")?;
        Ok(Self {
            id: fields.take("id", "id")?,
            database_id: fields.take("databaseId", "database_id")?,
            compartment_id: fields.take("compartmentId", "compartment_id")?,
            database_name: fields.take("databaseName", "database_name")?,
            database_display_name: fields.take("databaseDisplayName", "database_display_name")?,
            database_type: fields.take("databaseType", "database_type")?,
            database_version: fields.take("databaseVersion", "database_version")?,
            database_host_names: fields.take_list("databaseHostNames", "database_host_names")?,
            processor_count: fields.take("processorCount", "processor_count")?,
            status: fields.take("status", "status")?,
            time_created: fields.take("timeCreated", "time_created")?,
            time_updated: fields.take("timeUpdated", "time_updated")?,
            lifecycle_state: fields.take("lifecycleState", "lifecycle_state")?,
            lifecycle_details: fields.take("lifecycleDetails", "lifecycle_details")?,
            freeform_tags: fields.take_map("freeformTags", "freeform_tags")?,
            defined_tags: fields.take_map("definedTags", "defined_tags")?,
            system_tags: fields.take_map("systemTags", "system_tags")?,
            management_agent_id: fields.take("managementAgentId", "management_agent_id")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct PeComanagedDatabaseInsightSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_version: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub database_host_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
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
    pub lifecycle_state: Option<LifecycleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<String>,

    /// Simple key-value pairs without predefined names or scope.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub freeform_tags: HashMap<String, String>,

    /// Tags scoped to a namespace, `{"Operations": {"CostCenter": "42"}}`.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub defined_tags: HashMap<String, HashMap<String, serde_json::Value>>,

    /// Tags set by the service.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub system_tags: HashMap<String, HashMap<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opsi_private_endpoint_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_id: Option<String>,
}

impl PeComanagedDatabaseInsightSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::PeComanagedDatabaseInsightSummary::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [database_id][crate::model::PeComanagedDatabaseInsightSummary::database_id].
    pub fn set_database_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_id = Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::PeComanagedDatabaseInsightSummary::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [database_name][crate::model::PeComanagedDatabaseInsightSummary::database_name].
    pub fn set_database_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_name = Some(v.into());
        self
    }

    /// Sets the value of [database_display_name][crate::model::PeComanagedDatabaseInsightSummary::database_display_name].
    pub fn set_database_display_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_display_name = Some(v.into());
        self
    }

    /// Sets the value of [database_type][crate::model::PeComanagedDatabaseInsightSummary::database_type].
    pub fn set_database_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_type = Some(v.into());
        self
    }

    /// Sets the value of [database_version][crate::model::PeComanagedDatabaseInsightSummary::database_version].
    pub fn set_database_version<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_version = Some(v.into());
        self
    }

    /// Sets the value of [database_host_names][crate::model::PeComanagedDatabaseInsightSummary::database_host_names].
    pub fn set_database_host_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.database_host_names = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [processor_count][crate::model::PeComanagedDatabaseInsightSummary::processor_count].
    pub fn set_processor_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.processor_count = Some(v.into());
        self
    }

    /// Sets the value of [status][crate::model::PeComanagedDatabaseInsightSummary::status].
    pub fn set_status<T: std::convert::Into<ResourceStatus>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::PeComanagedDatabaseInsightSummary::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::PeComanagedDatabaseInsightSummary::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::PeComanagedDatabaseInsightSummary::lifecycle_state].
    pub fn set_lifecycle_state<T: std::convert::Into<LifecycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_details][crate::model::PeComanagedDatabaseInsightSummary::lifecycle_details].
    pub fn set_lifecycle_details<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.lifecycle_details = Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::PeComanagedDatabaseInsightSummary::freeform_tags].
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

    /// Sets the value of [defined_tags][crate::model::PeComanagedDatabaseInsightSummary::defined_tags].
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

    /// Sets the value of [system_tags][crate::model::PeComanagedDatabaseInsightSummary::system_tags].
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

    /// Sets the value of [opsi_private_endpoint_id][crate::model::PeComanagedDatabaseInsightSummary::opsi_private_endpoint_id].
    pub fn set_opsi_private_endpoint_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.opsi_private_endpoint_id = Some(v.into());
        self
    }

    /// Sets the value of [parent_id][crate::model::PeComanagedDatabaseInsightSummary::parent_id].
    pub fn set_parent_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.parent_id = Some(v.into());
        self
    }

    /// Sets the value of [root_id][crate::model::PeComanagedDatabaseInsightSummary::root_id].
    pub fn set_root_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.root_id = Some(v.into());
        self
    }
}

impl binding::Model for PeComanagedDatabaseInsightSummary {
    const NAME: &'static str = "PeComanagedDatabaseInsightSummary";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        fields.skip("entitySource", "entity_source")?;
        Ok(Self {
            id: fields.take("id", "id")?,
            database_id: fields.take("databaseId", "database_id")?,
            compartment_id: fields.take("compartmentId", "compartment_id")?,
            database_name: fields.take("databaseName", "database_name")?,
            database_display_name: fields.take("databaseDisplayName", "database_display_name")?,
            database_type: fields.take("databaseType", "database_type")?,
            database_version: fields.take("databaseVersion", "database_version")?,
            database_host_names: fields.take_list("databaseHostNames", "database_host_names")?,
            processor_count: fields.take("processorCount", "processor_count")?,
            status: fields.take("status", "status")?,
            time_created: fields.take("timeCreated", "time_created")?,
            time_updated: fields.take("timeUpdated", "time_updated")?,
            lifecycle_state: fields.take("lifecycleState", "lifecycle_state")?,
            lifecycle_details: fields.take("lifecycleDetails", "lifecycle_details")?,
            freeform_tags: fields.take_map("freeformTags", "freeform_tags")?,
            defined_tags: fields.take_map("definedTags", "defined_tags")?,
            system_tags: fields.take_map("systemTags", "system_tags")?,
            opsi_private_endpoint_id: fields
                .take("opsiPrivateEndpointId", "opsi_private_endpoint_id")?,
            parent_id: fields.take("parentId", "parent_id")?,
            root_id: fields.take("rootId", "root_id")?,
        })
    }
}

/// The hardware and operating system configuration of a host.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum HostConfigurationSummary {
    /// `entitySource = "MACS_MANAGED_EXTERNAL_HOST"`.
    MacsManagedExternalHost(Box<MacsManagedExternalHostConfigurationSummary>),
    /// `entitySource = "EM_MANAGED_EXTERNAL_HOST"`.
    EmManagedExternalHost(Box<EmManagedExternalHostConfigurationSummary>),
    /// A missing or unrecognized `entitySource`.
    Base(Box<HostConfigurationSummaryBase>),
}

impl HostConfigurationSummary {
    /// The discriminator. Subtypes always report their own literal.
    pub fn entity_source(&self) -> Option<HostEntitySource> {
        match self {
            Self::MacsManagedExternalHost(_) => Some(HostEntitySource::MacsManagedExternalHost),
            Self::EmManagedExternalHost(_) => Some(HostEntitySource::EmManagedExternalHost),
            Self::Base(v) => v.entity_source.clone(),
        }
    }

    /// The value of `hostInsightId`, shared by all the variants.
    pub fn host_insight_id(&self) -> Option<&str> {
        match self {
            Self::MacsManagedExternalHost(v) => v.host_insight_id.as_deref(),
            Self::EmManagedExternalHost(v) => v.host_insight_id.as_deref(),
            Self::Base(v) => v.host_insight_id.as_deref(),
        }
    }

    /// The value of `compartmentId`, shared by all the variants.
    pub fn compartment_id(&self) -> Option<&str> {
        match self {
            Self::MacsManagedExternalHost(v) => v.compartment_id.as_deref(),
            Self::EmManagedExternalHost(v) => v.compartment_id.as_deref(),
            Self::Base(v) => v.compartment_id.as_deref(),
        }
    }

    /// The value of `hostName`, shared by all the variants.
    pub fn host_name(&self) -> Option<&str> {
        match self {
            Self::MacsManagedExternalHost(v) => v.host_name.as_deref(),
            Self::EmManagedExternalHost(v) => v.host_name.as_deref(),
            Self::Base(v) => v.host_name.as_deref(),
        }
    }

    /// The value of `platformType`, shared by all the variants.
    pub fn platform_type(&self) -> Option<&PlatformType> {
        match self {
            Self::MacsManagedExternalHost(v) => v.platform_type.as_ref(),
            Self::EmManagedExternalHost(v) => v.platform_type.as_ref(),
            Self::Base(v) => v.platform_type.as_ref(),
        }
    }

    /// The value of `platformVersion`, shared by all the variants.
    pub fn platform_version(&self) -> Option<&str> {
        match self {
            Self::MacsManagedExternalHost(v) => v.platform_version.as_deref(),
            Self::EmManagedExternalHost(v) => v.platform_version.as_deref(),
            Self::Base(v) => v.platform_version.as_deref(),
        }
    }

    /// The value of `platformVendor`, shared by all the variants.
    pub fn platform_vendor(&self) -> Option<&str> {
        match self {
            Self::MacsManagedExternalHost(v) => v.platform_vendor.as_deref(),
            Self::EmManagedExternalHost(v) => v.platform_vendor.as_deref(),
            Self::Base(v) => v.platform_vendor.as_deref(),
        }
    }

    /// The value of `totalCpus`, shared by all the variants.
    pub fn total_cpus(&self) -> Option<i32> {
        match self {
            Self::MacsManagedExternalHost(v) => v.total_cpus,
            Self::EmManagedExternalHost(v) => v.total_cpus,
            Self::Base(v) => v.total_cpus,
        }
    }

    /// The value of `totalMemoryInGBs`, shared by all the variants.
    pub fn total_memory_in_gbs(&self) -> Option<f64> {
        match self {
            Self::MacsManagedExternalHost(v) => v.total_memory_in_gbs,
            Self::EmManagedExternalHost(v) => v.total_memory_in_gbs,
            Self::Base(v) => v.total_memory_in_gbs,
        }
    }

    /// The value of `cpuArchitecture`, shared by all the variants.
    pub fn cpu_architecture(&self) -> Option<&str> {
        match self {
            Self::MacsManagedExternalHost(v) => v.cpu_architecture.as_deref(),
            Self::EmManagedExternalHost(v) => v.cpu_architecture.as_deref(),
            Self::Base(v) => v.cpu_architecture.as_deref(),
        }
    }

    /// The value of `cpuCacheInMBs`, shared by all the variants.
    pub fn cpu_cache_in_mbs(&self) -> Option<f64> {
        match self {
            Self::MacsManagedExternalHost(v) => v.cpu_cache_in_mbs,
            Self::EmManagedExternalHost(v) => v.cpu_cache_in_mbs,
            Self::Base(v) => v.cpu_cache_in_mbs,
        }
    }

    /// The value of `cpuVendor`, shared by all the variants.
    pub fn cpu_vendor(&self) -> Option<&str> {
        match self {
            Self::MacsManagedExternalHost(v) => v.cpu_vendor.as_deref(),
            Self::EmManagedExternalHost(v) => v.cpu_vendor.as_deref(),
            Self::Base(v) => v.cpu_vendor.as_deref(),
        }
    }

    /// The value of `cpuFrequencyInMhz`, shared by all the variants.
    pub fn cpu_frequency_in_mhz(&self) -> Option<f64> {
        match self {
            Self::MacsManagedExternalHost(v) => v.cpu_frequency_in_mhz,
            Self::EmManagedExternalHost(v) => v.cpu_frequency_in_mhz,
            Self::Base(v) => v.cpu_frequency_in_mhz,
        }
    }

    /// The value of `cpuImplementation`, shared by all the variants.
    pub fn cpu_implementation(&self) -> Option<&str> {
        match self {
            Self::MacsManagedExternalHost(v) => v.cpu_implementation.as_deref(),
            Self::EmManagedExternalHost(v) => v.cpu_implementation.as_deref(),
            Self::Base(v) => v.cpu_implementation.as_deref(),
        }
    }

    /// The value of `coresPerSocket`, shared by all the variants.
    pub fn cores_per_socket(&self) -> Option<i32> {
        match self {
            Self::MacsManagedExternalHost(v) => v.cores_per_socket,
            Self::EmManagedExternalHost(v) => v.cores_per_socket,
            Self::Base(v) => v.cores_per_socket,
        }
    }

    /// The value of `totalSockets`, shared by all the variants.
    pub fn total_sockets(&self) -> Option<i32> {
        match self {
            Self::MacsManagedExternalHost(v) => v.total_sockets,
            Self::EmManagedExternalHost(v) => v.total_sockets,
            Self::Base(v) => v.total_sockets,
        }
    }

    /// The value of `threadsPerSocket`, shared by all the variants.
    pub fn threads_per_socket(&self) -> Option<i32> {
        match self {
            Self::MacsManagedExternalHost(v) => v.threads_per_socket,
            Self::EmManagedExternalHost(v) => v.threads_per_socket,
            Self::Base(v) => v.threads_per_socket,
        }
    }

    /// The value of `isHyperThreadingEnabled`, shared by all the variants.
    pub fn is_hyper_threading_enabled(&self) -> Option<bool> {
        match self {
            Self::MacsManagedExternalHost(v) => v.is_hyper_threading_enabled,
            Self::EmManagedExternalHost(v) => v.is_hyper_threading_enabled,
            Self::Base(v) => v.is_hyper_threading_enabled,
        }
    }

    /// The value of `freeformTags`, shared by all the variants.
    pub fn freeform_tags(&self) -> &HashMap<String, String> {
        match self {
            Self::MacsManagedExternalHost(v) => &v.freeform_tags,
            Self::EmManagedExternalHost(v) => &v.freeform_tags,
            Self::Base(v) => &v.freeform_tags,
        }
    }

    /// The value of `definedTags`, shared by all the variants.
    pub fn defined_tags(&self) -> &HashMap<String, HashMap<String, serde_json::Value>> {
        match self {
            Self::MacsManagedExternalHost(v) => &v.defined_tags,
            Self::EmManagedExternalHost(v) => &v.defined_tags,
            Self::Base(v) => &v.defined_tags,
        }
    }
}

impl std::default::Default for HostConfigurationSummary {
    fn default() -> Self {
        Self::Base(Box::default())
    }
}

impl binding::Polymorphic for HostConfigurationSummary {
    const DISCRIMINATOR: (&'static str, &'static str) = ("entitySource", "entity_source");
    const SUBTYPES: &'static [(&'static str, binding::polymorphic::Binder<Self>)] = &[
        (
            "MACS_MANAGED_EXTERNAL_HOST",
            binding::polymorphic::subtype::<MacsManagedExternalHostConfigurationSummary, Self>,
        ),
        (
            "EM_MANAGED_EXTERNAL_HOST",
            binding::polymorphic::subtype::<EmManagedExternalHostConfigurationSummary, Self>,
        ),
    ];
    const BASE: binding::polymorphic::Binder<Self> =
        binding::polymorphic::subtype::<HostConfigurationSummaryBase, Self>;
}

impl binding::Model for HostConfigurationSummary {
    const NAME: &'static str = "HostConfigurationSummary";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        binding::polymorphic::resolve(fields)
    }
}

impl serde::ser::Serialize for HostConfigurationSummary {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use binding::polymorphic::serialize_tagged;
        match self {
            Self::MacsManagedExternalHost(v) => {
                serialize_tagged(serializer, "entitySource", "MACS_MANAGED_EXTERNAL_HOST", v)
            }
            Self::EmManagedExternalHost(v) => {
                serialize_tagged(serializer, "entitySource", "EM_MANAGED_EXTERNAL_HOST", v)
            }
            Self::Base(v) => v.serialize(serializer),
        }
    }
}

impl std::convert::From<MacsManagedExternalHostConfigurationSummary> for HostConfigurationSummary {
    fn from(value: MacsManagedExternalHostConfigurationSummary) -> Self {
        Self::MacsManagedExternalHost(Box::new(value))
    }
}

impl std::convert::From<EmManagedExternalHostConfigurationSummary> for HostConfigurationSummary {
    fn from(value: EmManagedExternalHostConfigurationSummary) -> Self {
        Self::EmManagedExternalHost(Box::new(value))
    }
}

/// A base value naming a known `entitySource` converts to that subtype.
impl std::convert::From<HostConfigurationSummaryBase> for HostConfigurationSummary {
    fn from(value: HostConfigurationSummaryBase) -> Self {
        binding::polymorphic::from_base(value, |v| Self::Base(Box::new(v)))
    }
}

/// The base variant of [HostConfigurationSummary].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct HostConfigurationSummaryBase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_source: Option<HostEntitySource>,

    /// The host insight OCID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_insight_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_type: Option<PlatformType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cpus: Option<i32>,
    #[serde(rename = "totalMemoryInGBs", skip_serializing_if = "Option::is_none")]
    pub total_memory_in_gbs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_architecture: Option<String>,
    #[serde(rename = "cpuCacheInMBs", skip_serializing_if = "Option::is_none")]
    pub cpu_cache_in_mbs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_frequency_in_mhz: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_implementation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cores_per_socket: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_sockets: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads_per_socket: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hyper_threading_enabled: Option<bool>,

    /// Simple key-value pairs without predefined names or scope.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub freeform_tags: HashMap<String, String>,

    /// Tags scoped to a namespace, `{"Operations": {"CostCenter": "42"}}`.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub defined_tags: HashMap<String, HashMap<String, serde_json::Value>>,
}

impl HostConfigurationSummaryBase {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [entity_source][crate::model::HostConfigurationSummaryBase::entity_source].
    pub fn set_entity_source<T: std::convert::Into<HostEntitySource>>(mut self, v: T) -> Self {
        self.entity_source = Some(v.into());
        self
    }

    /// Sets the value of [host_insight_id][crate::model::HostConfigurationSummaryBase::host_insight_id].
    pub fn set_host_insight_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.host_insight_id = Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::HostConfigurationSummaryBase::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [host_name][crate::model::HostConfigurationSummaryBase::host_name].
    pub fn set_host_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.host_name = Some(v.into());
        self
    }

    /// Sets the value of [platform_type][crate::model::HostConfigurationSummaryBase::platform_type].
    pub fn set_platform_type<T: std::convert::Into<PlatformType>>(mut self, v: T) -> Self {
        self.platform_type = Some(v.into());
        self
    }

    /// Sets the value of [platform_version][crate::model::HostConfigurationSummaryBase::platform_version].
    pub fn set_platform_version<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.platform_version = Some(v.into());
        self
    }

    /// Sets the value of [platform_vendor][crate::model::HostConfigurationSummaryBase::platform_vendor].
    pub fn set_platform_vendor<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.platform_vendor = Some(v.into());
        self
    }

    /// Sets the value of [total_cpus][crate::model::HostConfigurationSummaryBase::total_cpus].
    pub fn set_total_cpus<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.total_cpus = Some(v.into());
        self
    }

    /// Sets the value of [total_memory_in_gbs][crate::model::HostConfigurationSummaryBase::total_memory_in_gbs].
    pub fn set_total_memory_in_gbs<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.total_memory_in_gbs = Some(v.into());
        self
    }

    /// Sets the value of [cpu_architecture][crate::model::HostConfigurationSummaryBase::cpu_architecture].
    pub fn set_cpu_architecture<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.cpu_architecture = Some(v.into());
        self
    }

    /// Sets the value of [cpu_cache_in_mbs][crate::model::HostConfigurationSummaryBase::cpu_cache_in_mbs].
    pub fn set_cpu_cache_in_mbs<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.cpu_cache_in_mbs = Some(v.into());
        self
    }

    /// Sets the value of [cpu_vendor][crate::model::HostConfigurationSummaryBase::cpu_vendor].
    pub fn set_cpu_vendor<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.cpu_vendor = Some(v.into());
        self
    }

    /// Sets the value of [cpu_frequency_in_mhz][crate::model::HostConfigurationSummaryBase::cpu_frequency_in_mhz].
    pub fn set_cpu_frequency_in_mhz<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.cpu_frequency_in_mhz = Some(v.into());
        self
    }

    /// Sets the value of [cpu_implementation][crate::model::HostConfigurationSummaryBase::cpu_implementation].
    pub fn set_cpu_implementation<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.cpu_implementation = Some(v.into());
        self
    }

    /// Sets the value of [cores_per_socket][crate::model::HostConfigurationSummaryBase::cores_per_socket].
    pub fn set_cores_per_socket<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.cores_per_socket = Some(v.into());
        self
    }

    /// Sets the value of [total_sockets][crate::model::HostConfigurationSummaryBase::total_sockets].
    pub fn set_total_sockets<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.total_sockets = Some(v.into());
        self
    }

    /// Sets the value of [threads_per_socket][crate::model::HostConfigurationSummaryBase::threads_per_socket].
    pub fn set_threads_per_socket<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.threads_per_socket = Some(v.into());
        self
    }

    /// Sets the value of [is_hyper_threading_enabled][crate::model::HostConfigurationSummaryBase::is_hyper_threading_enabled].
    pub fn set_is_hyper_threading_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_hyper_threading_enabled = Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::HostConfigurationSummaryBase::freeform_tags].
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

    /// Sets the value of [defined_tags][crate::model::HostConfigurationSummaryBase::defined_tags].
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
}

impl binding::Model for HostConfigurationSummaryBase {
    const NAME: &'static str = "HostConfigurationSummaryBase";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            entity_source: fields.take("entitySource", "entity_source")?,
            host_insight_id: fields.take("hostInsightId", "host_insight_id")?,
            compartment_id: fields.take("compartmentId", "compartment_id")?,
            host_name: fields.take("hostName", "host_name")?,
            platform_type: fields.take("platformType", "platform_type")?,
            platform_version: fields.take("platformVersion", "platform_version")?,
            platform_vendor: fields.take("platformVendor", "platform_vendor")?,
            total_cpus: fields.take("totalCpus", "total_cpus")?,
            total_memory_in_gbs: fields.take("totalMemoryInGBs", "total_memory_in_gbs")?,
            cpu_architecture: fields.take("cpuArchitecture", "cpu_architecture")?,
            cpu_cache_in_mbs: fields.take("cpuCacheInMBs", "cpu_cache_in_mbs")?,
            cpu_vendor: fields.take("cpuVendor", "cpu_vendor")?,
            cpu_frequency_in_mhz: fields.take("cpuFrequencyInMhz", "cpu_frequency_in_mhz")?,
            cpu_implementation: fields.take("cpuImplementation", "cpu_implementation")?,
            cores_per_socket: fields.take("coresPerSocket", "cores_per_socket")?,
            total_sockets: fields.take("totalSockets", "total_sockets")?,
            threads_per_socket: fields.take("threadsPerSocket", "threads_per_socket")?,
            is_hyper_threading_enabled: fields
                .take("isHyperThreadingEnabled", "is_hyper_threading_enabled")?,
            freeform_tags: fields.take_map("freeformTags", "freeform_tags")?,
            defined_tags: fields.take_map("definedTags", "defined_tags")?,
        })
    }
}

/// A host monitored by a management agent.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct MacsManagedExternalHostConfigurationSummary {
    /// The host insight OCID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_insight_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_type: Option<PlatformType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cpus: Option<i32>,
    #[serde(rename = "totalMemoryInGBs", skip_serializing_if = "Option::is_none")]
    pub total_memory_in_gbs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_architecture: Option<String>,
    #[serde(rename = "cpuCacheInMBs", skip_serializing_if = "Option::is_none")]
    pub cpu_cache_in_mbs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_frequency_in_mhz: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_implementation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cores_per_socket: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_sockets: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads_per_socket: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hyper_threading_enabled: Option<bool>,

    /// Simple key-value pairs without predefined names or scope.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub freeform_tags: HashMap<String, String>,

    /// Tags scoped to a namespace, `{"Operations": {"CostCenter": "42"}}`.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub defined_tags: HashMap<String, HashMap<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_agent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector_id: Option<String>,
}

impl MacsManagedExternalHostConfigurationSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [host_insight_id][crate::model::MacsManagedExternalHostConfigurationSummary::host_insight_id].
    pub fn set_host_insight_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.host_insight_id = Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::MacsManagedExternalHostConfigurationSummary::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [host_name][crate::model::MacsManagedExternalHostConfigurationSummary::host_name].
    pub fn set_host_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.host_name = Some(v.into());
        self
    }

    /// Sets the value of [platform_type][crate::model::MacsManagedExternalHostConfigurationSummary::platform_type].
    pub fn set_platform_type<T: std::convert::Into<PlatformType>>(mut self, v: T) -> Self {
        self.platform_type = Some(v.into());
        self
    }

    /// Sets the value of [platform_version][crate::model::MacsManagedExternalHostConfigurationSummary::platform_version].
    pub fn set_platform_version<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.platform_version = Some(v.into());
        self
    }

    /// Sets the value of [platform_vendor][crate::model::MacsManagedExternalHostConfigurationSummary::platform_vendor].
    pub fn set_platform_vendor<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.platform_vendor = Some(v.into());
        self
    }

    /// Sets the value of [total_cpus][crate::model::MacsManagedExternalHostConfigurationSummary::total_cpus].
    pub fn set_total_cpus<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.total_cpus = Some(v.into());
        self
    }

    /// Sets the value of [total_memory_in_gbs][crate::model::MacsManagedExternalHostConfigurationSummary::total_memory_in_gbs].
    pub fn set_total_memory_in_gbs<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.total_memory_in_gbs = Some(v.into());
        self
    }

    /// Sets the value of [cpu_architecture][crate::model::MacsManagedExternalHostConfigurationSummary::cpu_architecture].
    pub fn set_cpu_architecture<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.cpu_architecture = Some(v.into());
        self
    }

    /// Sets the value of [cpu_cache_in_mbs][crate::model::MacsManagedExternalHostConfigurationSummary::cpu_cache_in_mbs].
    pub fn set_cpu_cache_in_mbs<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.cpu_cache_in_mbs = Some(v.into());
        self
    }

    /// Sets the value of [cpu_vendor][crate::model::MacsManagedExternalHostConfigurationSummary::cpu_vendor].
    pub fn set_cpu_vendor<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.cpu_vendor = Some(v.into());
        self
    }

    /// Sets the value of [cpu_frequency_in_mhz][crate::model::MacsManagedExternalHostConfigurationSummary::cpu_frequency_in_mhz].
    pub fn set_cpu_frequency_in_mhz<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.cpu_frequency_in_mhz = Some(v.into());
        self
    }

    /// Sets the value of [cpu_implementation][crate::model::MacsManagedExternalHostConfigurationSummary::cpu_implementation].
    pub fn set_cpu_implementation<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.cpu_implementation = Some(v.into());
        self
    }

    /// Sets the value of [cores_per_socket][crate::model::MacsManagedExternalHostConfigurationSummary::cores_per_socket].
    pub fn set_cores_per_socket<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.cores_per_socket = Some(v.into());
        self
    }

    /// Sets the value of [total_sockets][crate::model::MacsManagedExternalHostConfigurationSummary::total_sockets].
    pub fn set_total_sockets<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.total_sockets = Some(v.into());
        self
    }

    /// Sets the value of [threads_per_socket][crate::model::MacsManagedExternalHostConfigurationSummary::threads_per_socket].
    pub fn set_threads_per_socket<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.threads_per_socket = Some(v.into());
        self
    }

    /// Sets the value of [is_hyper_threading_enabled][crate::model::MacsManagedExternalHostConfigurationSummary::is_hyper_threading_enabled].
    pub fn set_is_hyper_threading_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_hyper_threading_enabled = Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::MacsManagedExternalHostConfigurationSummary::freeform_tags].
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

    /// Sets the value of [defined_tags][crate::model::MacsManagedExternalHostConfigurationSummary::defined_tags].
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

    /// Sets the value of [management_agent_id][crate::model::MacsManagedExternalHostConfigurationSummary::management_agent_id].
    pub fn set_management_agent_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.management_agent_id = Some(v.into());
        self
    }

    /// Sets the value of [connector_id][crate::model::MacsManagedExternalHostConfigurationSummary::connector_id].
    pub fn set_connector_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.connector_id = Some(v.into());
        self
    }
}

impl binding::Model for MacsManagedExternalHostConfigurationSummary {
    const NAME: &'static str = "MacsManagedExternalHostConfigurationSummary";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        fields.skip("entitySource", "entity_source")?;
        Ok(Self {
            host_insight_id: fields.take("hostInsightId", "host_insight_id")?,
            compartment_id: fields.take("compartmentId", "compartment_id")?,
            host_name: fields.take("hostName", "host_name")?,
            platform_type: fields.take("platformType", "platform_type")?,
            platform_version: fields.take("platformVersion", "platform_version")?,
            platform_vendor: fields.take("platformVendor", "platform_vendor")?,
            total_cpus: fields.take("totalCpus", "total_cpus")?,
            total_memory_in_gbs: fields.take("totalMemoryInGBs", "total_memory_in_gbs")?,
            cpu_architecture: fields.take("cpuArchitecture", "cpu_architecture")?,
            cpu_cache_in_mbs: fields.take("cpuCacheInMBs", "cpu_cache_in_mbs")?,
            cpu_vendor: fields.take("cpuVendor", "cpu_vendor")?,
            cpu_frequency_in_mhz: fields.take("cpuFrequencyInMhz", "cpu_frequency_in_mhz")?,
            cpu_implementation: fields.take("cpuImplementation", "cpu_implementation")?,
            cores_per_socket: fields.take("coresPerSocket", "cores_per_socket")?,
            total_sockets: fields.take("totalSockets", "total_sockets")?,
            threads_per_socket: fields.take("threadsPerSocket", "threads_per_socket")?,
            is_hyper_threading_enabled: fields
                .take("isHyperThreadingEnabled", "is_hyper_threading_enabled")?,
            freeform_tags: fields.take_map("freeformTags", "freeform_tags")?,
            defined_tags: fields.take_map("definedTags", "defined_tags")?,
            management_agent_id: fields.take("managementAgentId", "management_agent_id")?,
            connector_id: fields.take("connectorId", "connector_id")?,
        })
    }
}

/// A host managed by Enterprise Manager.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct EmManagedExternalHostConfigurationSummary {
    /// The host insight OCID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_insight_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_type: Option<PlatformType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cpus: Option<i32>,
    #[serde(rename = "totalMemoryInGBs", skip_serializing_if = "Option::is_none")]
    pub total_memory_in_gbs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_architecture: Option<String>,
    #[serde(rename = "cpuCacheInMBs", skip_serializing_if = "Option::is_none")]
    pub cpu_cache_in_mbs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_frequency_in_mhz: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_implementation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cores_per_socket: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_sockets: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads_per_socket: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hyper_threading_enabled: Option<bool>,

    /// Simple key-value pairs without predefined names or scope.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub freeform_tags: HashMap<String, String>,

    /// Tags scoped to a namespace, `{"Operations": {"CostCenter": "42"}}`.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub defined_tags: HashMap<String, HashMap<String, serde_json::Value>>,

    /// The Enterprise Manager unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_manager_identifier: Option<String>,

    /// The OPSI Enterprise Manager bridge OCID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_manager_bridge_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_manager_entity_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_manager_entity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_manager_entity_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_manager_entity_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exadata_insight_id: Option<String>,
}

impl EmManagedExternalHostConfigurationSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [host_insight_id][crate::model::EmManagedExternalHostConfigurationSummary::host_insight_id].
    pub fn set_host_insight_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.host_insight_id = Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::EmManagedExternalHostConfigurationSummary::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [host_name][crate::model::EmManagedExternalHostConfigurationSummary::host_name].
    pub fn set_host_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.host_name = Some(v.into());
        self
    }

    /// Sets the value of [platform_type][crate::model::EmManagedExternalHostConfigurationSummary::platform_type].
    pub fn set_platform_type<T: std::convert::Into<PlatformType>>(mut self, v: T) -> Self {
        self.platform_type = Some(v.into());
        self
    }

    /// Sets the value of [platform_version][crate::model::EmManagedExternalHostConfigurationSummary::platform_version].
    pub fn set_platform_version<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.platform_version = Some(v.into());
        self
    }

    /// Sets the value of [platform_vendor][crate::model::EmManagedExternalHostConfigurationSummary::platform_vendor].
    pub fn set_platform_vendor<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.platform_vendor = Some(v.into());
        self
    }

    /// Sets the value of [total_cpus][crate::model::EmManagedExternalHostConfigurationSummary::total_cpus].
    pub fn set_total_cpus<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.total_cpus = Some(v.into());
        self
    }

    /// Sets the value of [total_memory_in_gbs][crate::model::EmManagedExternalHostConfigurationSummary::total_memory_in_gbs].
    pub fn set_total_memory_in_gbs<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.total_memory_in_gbs = Some(v.into());
        self
    }

    /// Sets the value of [cpu_architecture][crate::model::EmManagedExternalHostConfigurationSummary::cpu_architecture].
    pub fn set_cpu_architecture<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.cpu_architecture = Some(v.into());
        self
    }

    /// Sets the value of [cpu_cache_in_mbs][crate::model::EmManagedExternalHostConfigurationSummary::cpu_cache_in_mbs].
    pub fn set_cpu_cache_in_mbs<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.cpu_cache_in_mbs = Some(v.into());
        self
    }

    /// Sets the value of [cpu_vendor][crate::model::EmManagedExternalHostConfigurationSummary::cpu_vendor].
    pub fn set_cpu_vendor<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.cpu_vendor = Some(v.into());
        self
    }

    /// Sets the value of [cpu_frequency_in_mhz][crate::model::EmManagedExternalHostConfigurationSummary::cpu_frequency_in_mhz].
    pub fn set_cpu_frequency_in_mhz<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.cpu_frequency_in_mhz = Some(v.into());
        self
    }

    /// Sets the value of [cpu_implementation][crate::model::EmManagedExternalHostConfigurationSummary::cpu_implementation].
    pub fn set_cpu_implementation<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.cpu_implementation = Some(v.into());
        self
    }

    /// Sets the value of [cores_per_socket][crate::model::EmManagedExternalHostConfigurationSummary::cores_per_socket].
    pub fn set_cores_per_socket<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.cores_per_socket = Some(v.into());
        self
    }

    /// Sets the value of [total_sockets][crate::model::EmManagedExternalHostConfigurationSummary::total_sockets].
    pub fn set_total_sockets<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.total_sockets = Some(v.into());
        self
    }

    /// Sets the value of [threads_per_socket][crate::model::EmManagedExternalHostConfigurationSummary::threads_per_socket].
    pub fn set_threads_per_socket<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.threads_per_socket = Some(v.into());
        self
    }

    /// Sets the value of [is_hyper_threading_enabled][crate::model::EmManagedExternalHostConfigurationSummary::is_hyper_threading_enabled].
    pub fn set_is_hyper_threading_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_hyper_threading_enabled = Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::EmManagedExternalHostConfigurationSummary::freeform_tags].
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

    /// Sets the value of [defined_tags][crate::model::EmManagedExternalHostConfigurationSummary::defined_tags].
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

    /// Sets the value of [enterprise_manager_identifier][crate::model::EmManagedExternalHostConfigurationSummary::enterprise_manager_identifier].
    pub fn set_enterprise_manager_identifier<T: std::convert::Into<String>>(
        mut self,
        v: T,
    ) -> Self {
        self.enterprise_manager_identifier = Some(v.into());
        self
    }

    /// Sets the value of [enterprise_manager_bridge_id][crate::model::EmManagedExternalHostConfigurationSummary::enterprise_manager_bridge_id].
    pub fn set_enterprise_manager_bridge_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.enterprise_manager_bridge_id = Some(v.into());
        self
    }

    /// Sets the value of [enterprise_manager_entity_name][crate::model::EmManagedExternalHostConfigurationSummary::enterprise_manager_entity_name].
    pub fn set_enterprise_manager_entity_name<T: std::convert::Into<String>>(
        mut self,
        v: T,
    ) -> Self {
        self.enterprise_manager_entity_name = Some(v.into());
        self
    }

    /// Sets the value of [enterprise_manager_entity_type][crate::model::EmManagedExternalHostConfigurationSummary::enterprise_manager_entity_type].
    pub fn set_enterprise_manager_entity_type<T: std::convert::Into<String>>(
        mut self,
        v: T,
    ) -> Self {
        self.enterprise_manager_entity_type = Some(v.into());
        self
    }

    /// Sets the value of [enterprise_manager_entity_identifier][crate::model::EmManagedExternalHostConfigurationSummary::enterprise_manager_entity_identifier].
    pub fn set_enterprise_manager_entity_identifier<T: std::convert::Into<String>>(
        mut self,
        v: T,
    ) -> Self {
        self.enterprise_manager_entity_identifier = Some(v.into());
        self
    }

    /// Sets the value of [enterprise_manager_entity_display_name][crate::model::EmManagedExternalHostConfigurationSummary::enterprise_manager_entity_display_name].
    pub fn set_enterprise_manager_entity_display_name<T: std::convert::Into<String>>(
        mut self,
        v: T,
    ) -> Self {
        self.enterprise_manager_entity_display_name = Some(v.into());
        self
    }

    /// Sets the value of [exadata_insight_id][crate::model::EmManagedExternalHostConfigurationSummary::exadata_insight_id].
    pub fn set_exadata_insight_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.exadata_insight_id = Some(v.into());
        self
    }
}

impl binding::Model for EmManagedExternalHostConfigurationSummary {
    const NAME: &'static str = "EmManagedExternalHostConfigurationSummary";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        fields.skip("entitySource", "entity_source")?;
        Ok(Self {
            host_insight_id: fields.take("hostInsightId", "host_insight_id")?,
            compartment_id: fields.take("compartmentId", "compartment_id")?,
            host_name: fields.take("hostName", "host_name")?,
            platform_type: fields.take("platformType", "platform_type")?,
            platform_version: fields.take("platformVersion", "platform_version")?,
            platform_vendor: fields.take("platformVendor", "platform_vendor")?,
            total_cpus: fields.take("totalCpus", "total_cpus")?,
            total_memory_in_gbs: fields.take("totalMemoryInGBs", "total_memory_in_gbs")?,
            cpu_architecture: fields.take("cpuArchitecture", "cpu_architecture")?,
            cpu_cache_in_mbs: fields.take("cpuCacheInMBs", "cpu_cache_in_mbs")?,
            cpu_vendor: fields.take("cpuVendor", "cpu_vendor")?,
            cpu_frequency_in_mhz: fields.take("cpuFrequencyInMhz", "cpu_frequency_in_mhz")?,
            cpu_implementation: fields.take("cpuImplementation", "cpu_implementation")?,
            cores_per_socket: fields.take("coresPerSocket", "cores_per_socket")?,
            total_sockets: fields.take("totalSockets", "total_sockets")?,
            threads_per_socket: fields.take("threadsPerSocket", "threads_per_socket")?,
            is_hyper_threading_enabled: fields
                .take("isHyperThreadingEnabled", "is_hyper_threading_enabled")?,
            freeform_tags: fields.take_map("freeformTags", "freeform_tags")?,
            defined_tags: fields.take_map("definedTags", "defined_tags")?,
            enterprise_manager_identifier: fields
                .take("enterpriseManagerIdentifier", "enterprise_manager_identifier")?,
            enterprise_manager_bridge_id: fields
                .take("enterpriseManagerBridgeId", "enterprise_manager_bridge_id")?,
            enterprise_manager_entity_name: fields
                .take("enterpriseManagerEntityName", "enterprise_manager_entity_name")?,
            enterprise_manager_entity_type: fields
                .take("enterpriseManagerEntityType", "enterprise_manager_entity_type")?,
            enterprise_manager_entity_identifier: fields
                .take("enterpriseManagerEntityIdentifier", "enterprise_manager_entity_identifier")?,
            enterprise_manager_entity_display_name: fields.take(
                "enterpriseManagerEntityDisplayName",
                "enterprise_manager_entity_display_name",
            )?,
            exadata_insight_id: fields.take("exadataInsightId", "exadata_insight_id")?,
        })
    }
}

/// A query against an OPSI data object.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum DataObjectQuery {
    /// `queryType = "TEMPLATIZED_QUERY"`.
    TemplatizedQuery(Box<DataObjectTemplatizedQuery>),
    /// `queryType = "STANDARD_QUERY"`.
    StandardQuery(Box<DataObjectStandardQuery>),
    /// A missing or unrecognized `queryType`.
    Base(Box<DataObjectQueryBase>),
}

impl DataObjectQuery {
    /// The discriminator. Subtypes always report their own literal.
    pub fn query_type(&self) -> Option<DataObjectQueryType> {
        match self {
            Self::TemplatizedQuery(_) => Some(DataObjectQueryType::TemplatizedQuery),
            Self::StandardQuery(_) => Some(DataObjectQueryType::StandardQuery),
            Self::Base(v) => v.query_type.clone(),
        }
    }

    /// The value of `bindParams`, shared by all the variants.
    pub fn bind_params(&self) -> &[DataObjectBindParameter] {
        match self {
            Self::TemplatizedQuery(v) => &v.bind_params,
            Self::StandardQuery(v) => &v.bind_params,
            Self::Base(v) => &v.bind_params,
        }
    }

    /// The value of `queryExecutionTimeoutInSeconds`, shared by all the variants.
    pub fn query_execution_timeout_in_seconds(&self) -> Option<f64> {
        match self {
            Self::TemplatizedQuery(v) => v.query_execution_timeout_in_seconds,
            Self::StandardQuery(v) => v.query_execution_timeout_in_seconds,
            Self::Base(v) => v.query_execution_timeout_in_seconds,
        }
    }
}

impl std::default::Default for DataObjectQuery {
    fn default() -> Self {
        Self::Base(Box::default())
    }
}

impl binding::Polymorphic for DataObjectQuery {
    const DISCRIMINATOR: (&'static str, &'static str) = ("queryType", "query_type");
    const SUBTYPES: &'static [(&'static str, binding::polymorphic::Binder<Self>)] = &[
        ("TEMPLATIZED_QUERY", binding::polymorphic::subtype::<DataObjectTemplatizedQuery, Self>),
        ("STANDARD_QUERY", binding::polymorphic::subtype::<DataObjectStandardQuery, Self>),
    ];
    const BASE: binding::polymorphic::Binder<Self> =
        binding::polymorphic::subtype::<DataObjectQueryBase, Self>;
}

impl binding::Model for DataObjectQuery {
    const NAME: &'static str = "DataObjectQuery";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        binding::polymorphic::resolve(fields)
    }
}

impl serde::ser::Serialize for DataObjectQuery {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use binding::polymorphic::serialize_tagged;
        match self {
            Self::TemplatizedQuery(v) => {
                serialize_tagged(serializer, "queryType", "TEMPLATIZED_QUERY", v)
            }
            Self::StandardQuery(v) => {
                serialize_tagged(serializer, "queryType", "STANDARD_QUERY", v)
            }
            Self::Base(v) => v.serialize(serializer),
        }
    }
}

impl std::convert::From<DataObjectTemplatizedQuery> for DataObjectQuery {
    fn from(value: DataObjectTemplatizedQuery) -> Self {
        Self::TemplatizedQuery(Box::new(value))
    }
}

impl std::convert::From<DataObjectStandardQuery> for DataObjectQuery {
    fn from(value: DataObjectStandardQuery) -> Self {
        Self::StandardQuery(Box::new(value))
    }
}

/// A base value naming a known `queryType` converts to that subtype.
impl std::convert::From<DataObjectQueryBase> for DataObjectQuery {
    fn from(value: DataObjectQueryBase) -> Self {
        binding::polymorphic::from_base(value, |v| Self::Base(Box::new(v)))
    }
}

/// The base variant of [DataObjectQuery].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct DataObjectQueryBase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_type: Option<DataObjectQueryType>,

    /// The values bound to the `:name` placeholders of the query.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bind_params: Vec<DataObjectBindParameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_execution_timeout_in_seconds: Option<f64>,
}

impl DataObjectQueryBase {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [query_type][crate::model::DataObjectQueryBase::query_type].
    pub fn set_query_type<T: std::convert::Into<DataObjectQueryType>>(mut self, v: T) -> Self {
        self.query_type = Some(v.into());
        self
    }

    /// Sets the value of [bind_params][crate::model::DataObjectQueryBase::bind_params].
    pub fn set_bind_params<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<DataObjectBindParameter>,
    {
        use std::iter::Iterator;
        self.bind_params = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [query_execution_timeout_in_seconds][crate::model::DataObjectQueryBase::query_execution_timeout_in_seconds].
    pub fn set_query_execution_timeout_in_seconds<T: std::convert::Into<f64>>(
        mut self,
        v: T,
    ) -> Self {
        self.query_execution_timeout_in_seconds = Some(v.into());
        self
    }
}

impl binding::Model for DataObjectQueryBase {
    const NAME: &'static str = "DataObjectQueryBase";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            query_type: fields.take("queryType", "query_type")?,
            bind_params: fields.take_list("bindParams", "bind_params")?,
            query_execution_timeout_in_seconds: fields
                .take("queryExecutionTimeoutInSeconds", "query_execution_timeout_in_seconds")?,
        })
    }
}

/// A query assembled from its clauses. The service builds the statement.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct DataObjectTemplatizedQuery {
    /// The values bound to the `:name` placeholders of the query.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bind_params: Vec<DataObjectBindParameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_execution_timeout_in_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub select_list: Vec<String>,

    /// Only the data object itself is supported, `FROM <data object>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_clause: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub where_conditions_list: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group_by_list: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub having_conditions_list: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub order_by_list: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_filters: Option<DataObjectQueryTimeFilters>,
}

impl DataObjectTemplatizedQuery {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bind_params][crate::model::DataObjectTemplatizedQuery::bind_params].
    pub fn set_bind_params<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<DataObjectBindParameter>,
    {
        use std::iter::Iterator;
        self.bind_params = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [query_execution_timeout_in_seconds][crate::model::DataObjectTemplatizedQuery::query_execution_timeout_in_seconds].
    pub fn set_query_execution_timeout_in_seconds<T: std::convert::Into<f64>>(
        mut self,
        v: T,
    ) -> Self {
        self.query_execution_timeout_in_seconds = Some(v.into());
        self
    }

    /// Sets the value of [select_list][crate::model::DataObjectTemplatizedQuery::select_list].
    pub fn set_select_list<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.select_list = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [from_clause][crate::model::DataObjectTemplatizedQuery::from_clause].
    pub fn set_from_clause<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.from_clause = Some(v.into());
        self
    }

    /// Sets the value of [where_conditions_list][crate::model::DataObjectTemplatizedQuery::where_conditions_list].
    pub fn set_where_conditions_list<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.where_conditions_list = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [group_by_list][crate::model::DataObjectTemplatizedQuery::group_by_list].
    pub fn set_group_by_list<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.group_by_list = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [having_conditions_list][crate::model::DataObjectTemplatizedQuery::having_conditions_list].
    pub fn set_having_conditions_list<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.having_conditions_list = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [order_by_list][crate::model::DataObjectTemplatizedQuery::order_by_list].
    pub fn set_order_by_list<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.order_by_list = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [time_filters][crate::model::DataObjectTemplatizedQuery::time_filters].
    pub fn set_time_filters<T: std::convert::Into<DataObjectQueryTimeFilters>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_filters = Some(v.into());
        self
    }
}

impl binding::Model for DataObjectTemplatizedQuery {
    const NAME: &'static str = "DataObjectTemplatizedQuery";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        fields.skip("queryType", "query_type")?;
        Ok(Self {
            bind_params: fields.take_list("bindParams", "bind_params")?,
            query_execution_timeout_in_seconds: fields
                .take("queryExecutionTimeoutInSeconds", "query_execution_timeout_in_seconds")?,
            select_list: fields.take_list("selectList", "select_list")?,
            from_clause: fields.take("fromClause", "from_clause")?,
            where_conditions_list: fields
                .take_list("whereConditionsList", "where_conditions_list")?,
            group_by_list: fields.take_list("groupByList", "group_by_list")?,
            having_conditions_list: fields
                .take_list("havingConditionsList", "having_conditions_list")?,
            order_by_list: fields.take_list("orderByList", "order_by_list")?,
            time_filters: fields.take("timeFilters", "time_filters")?,
        })
    }
}

/// A complete SQL statement.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct DataObjectStandardQuery {
    /// The values bound to the `:name` placeholders of the query.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bind_params: Vec<DataObjectBindParameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_execution_timeout_in_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_filters: Option<DataObjectQueryTimeFilters>,
}

impl DataObjectStandardQuery {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bind_params][crate::model::DataObjectStandardQuery::bind_params].
    pub fn set_bind_params<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<DataObjectBindParameter>,
    {
        use std::iter::Iterator;
        self.bind_params = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [query_execution_timeout_in_seconds][crate::model::DataObjectStandardQuery::query_execution_timeout_in_seconds].
    pub fn set_query_execution_timeout_in_seconds<T: std::convert::Into<f64>>(
        mut self,
        v: T,
    ) -> Self {
        self.query_execution_timeout_in_seconds = Some(v.into());
        self
    }

    /// Sets the value of [statement][crate::model::DataObjectStandardQuery::statement].
    pub fn set_statement<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.statement = Some(v.into());
        self
    }

    /// Sets the value of [time_filters][crate::model::DataObjectStandardQuery::time_filters].
    pub fn set_time_filters<T: std::convert::Into<DataObjectQueryTimeFilters>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_filters = Some(v.into());
        self
    }
}

impl binding::Model for DataObjectStandardQuery {
    const NAME: &'static str = "DataObjectStandardQuery";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        fields.skip("queryType", "query_type")?;
        Ok(Self {
            bind_params: fields.take_list("bindParams", "bind_params")?,
            query_execution_timeout_in_seconds: fields
                .take("queryExecutionTimeoutInSeconds", "query_execution_timeout_in_seconds")?,
            statement: fields.take("statement", "statement")?,
            time_filters: fields.take("timeFilters", "time_filters")?,
        })
    }
}

/// The unit of a data object column.
///
/// The `unitCategory` field selects the variant. Rates nest two units.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ColumnUnit {
    /// `unitCategory = "DATA_SIZE"`.
    DataSize(Box<DataSizeColumnUnit>),
    /// `unitCategory = "TIME"`.
    Time(Box<TimeColumnUnit>),
    /// `unitCategory = "POWER"`.
    Power(Box<PowerColumnUnit>),
    /// `unitCategory = "TEMPERATURE"`.
    Temperature(Box<TemperatureColumnUnit>),
    /// `unitCategory = "CORE"`.
    Core(Box<CoreColumnUnit>),
    /// `unitCategory = "RATE"`.
    Rate(Box<RateColumnUnit>),
    /// `unitCategory = "FREQUENCY"`.
    Frequency(Box<FrequencyColumnUnit>),
    /// `unitCategory = "OTHER_STANDARD"`.
    OtherStandard(Box<OtherStandardColumnUnit>),
    /// `unitCategory = "CUSTOM"`.
    Custom(Box<CustomColumnUnit>),
    /// A missing or unrecognized `unitCategory`.
    Base(Box<ColumnUnitBase>),
}

impl ColumnUnit {
    /// The discriminator. Subtypes always report their own literal.
    pub fn unit_category(&self) -> Option<UnitCategory> {
        match self {
            Self::DataSize(_) => Some(UnitCategory::DataSize),
            Self::Time(_) => Some(UnitCategory::Time),
            Self::Power(_) => Some(UnitCategory::Power),
            Self::Temperature(_) => Some(UnitCategory::Temperature),
            Self::Core(_) => Some(UnitCategory::Core),
            Self::Rate(_) => Some(UnitCategory::Rate),
            Self::Frequency(_) => Some(UnitCategory::Frequency),
            Self::OtherStandard(_) => Some(UnitCategory::OtherStandard),
            Self::Custom(_) => Some(UnitCategory::Custom),
            Self::Base(v) => v.unit_category.clone(),
        }
    }

    /// The value of `displayName`, shared by all the variants.
    pub fn display_name(&self) -> Option<&str> {
        match self {
            Self::DataSize(v) => v.display_name.as_deref(),
            Self::Time(v) => v.display_name.as_deref(),
            Self::Power(v) => v.display_name.as_deref(),
            Self::Temperature(v) => v.display_name.as_deref(),
            Self::Core(v) => v.display_name.as_deref(),
            Self::Rate(v) => v.display_name.as_deref(),
            Self::Frequency(v) => v.display_name.as_deref(),
            Self::OtherStandard(v) => v.display_name.as_deref(),
            Self::Custom(v) => v.display_name.as_deref(),
            Self::Base(v) => v.display_name.as_deref(),
        }
    }
}

impl std::default::Default for ColumnUnit {
    fn default() -> Self {
        Self::Base(Box::default())
    }
}

impl binding::Polymorphic for ColumnUnit {
    const DISCRIMINATOR: (&'static str, &'static str) = ("unitCategory", "unit_category");
    const SUBTYPES: &'static [(&'static str, binding::polymorphic::Binder<Self>)] = &[
        ("DATA_SIZE", binding::polymorphic::subtype::<DataSizeColumnUnit, Self>),
        ("TIME", binding::polymorphic::subtype::<TimeColumnUnit, Self>),
        ("POWER", binding::polymorphic::subtype::<PowerColumnUnit, Self>),
        ("TEMPERATURE", binding::polymorphic::subtype::<TemperatureColumnUnit, Self>),
        ("CORE", binding::polymorphic::subtype::<CoreColumnUnit, Self>),
        ("RATE", binding::polymorphic::subtype::<RateColumnUnit, Self>),
        ("FREQUENCY", binding::polymorphic::subtype::<FrequencyColumnUnit, Self>),
        ("OTHER_STANDARD", binding::polymorphic::subtype::<OtherStandardColumnUnit, Self>),
        ("CUSTOM", binding::polymorphic::subtype::<CustomColumnUnit, Self>),
    ];
    const BASE: binding::polymorphic::Binder<Self> =
        binding::polymorphic::subtype::<ColumnUnitBase, Self>;
}

impl binding::Model for ColumnUnit {
    const NAME: &'static str = "ColumnUnit";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        binding::polymorphic::resolve(fields)
    }
}

impl serde::ser::Serialize for ColumnUnit {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use binding::polymorphic::serialize_tagged;
        match self {
            Self::DataSize(v) => serialize_tagged(serializer, "unitCategory", "DATA_SIZE", v),
            Self::Time(v) => serialize_tagged(serializer, "unitCategory", "TIME", v),
            Self::Power(v) => serialize_tagged(serializer, "unitCategory", "POWER", v),
            Self::Temperature(v) => serialize_tagged(serializer, "unitCategory", "TEMPERATURE", v),
            Self::Core(v) => serialize_tagged(serializer, "unitCategory", "CORE", v),
            Self::Rate(v) => serialize_tagged(serializer, "unitCategory", "RATE", v),
            Self::Frequency(v) => serialize_tagged(serializer, "unitCategory", "FREQUENCY", v),
            Self::OtherStandard(v) => {
                serialize_tagged(serializer, "unitCategory", "OTHER_STANDARD", v)
            }
            Self::Custom(v) => serialize_tagged(serializer, "unitCategory", "CUSTOM", v),
            Self::Base(v) => v.serialize(serializer),
        }
    }
}

impl std::convert::From<DataSizeColumnUnit> for ColumnUnit {
    fn from(value: DataSizeColumnUnit) -> Self {
        Self::DataSize(Box::new(value))
    }
}

impl std::convert::From<TimeColumnUnit> for ColumnUnit {
    fn from(value: TimeColumnUnit) -> Self {
        Self::Time(Box::new(value))
    }
}

impl std::convert::From<PowerColumnUnit> for ColumnUnit {
    fn from(value: PowerColumnUnit) -> Self {
        Self::Power(Box::new(value))
    }
}

impl std::convert::From<TemperatureColumnUnit> for ColumnUnit {
    fn from(value: TemperatureColumnUnit) -> Self {
        Self::Temperature(Box::new(value))
    }
}

impl std::convert::From<CoreColumnUnit> for ColumnUnit {
    fn from(value: CoreColumnUnit) -> Self {
        Self::Core(Box::new(value))
    }
}

impl std::convert::From<RateColumnUnit> for ColumnUnit {
    fn from(value: RateColumnUnit) -> Self {
        Self::Rate(Box::new(value))
    }
}

impl std::convert::From<FrequencyColumnUnit> for ColumnUnit {
    fn from(value: FrequencyColumnUnit) -> Self {
        Self::Frequency(Box::new(value))
    }
}

impl std::convert::From<OtherStandardColumnUnit> for ColumnUnit {
    fn from(value: OtherStandardColumnUnit) -> Self {
        Self::OtherStandard(Box::new(value))
    }
}

impl std::convert::From<CustomColumnUnit> for ColumnUnit {
    fn from(value: CustomColumnUnit) -> Self {
        Self::Custom(Box::new(value))
    }
}

/// A base value naming a known `unitCategory` converts to that subtype.
impl std::convert::From<ColumnUnitBase> for ColumnUnit {
    fn from(value: ColumnUnitBase) -> Self {
        binding::polymorphic::from_base(value, |v| Self::Base(Box::new(v)))
    }
}

/// The base variant of [ColumnUnit].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ColumnUnitBase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_category: Option<UnitCategory>,

    /// The unit name as displayed, `GB`, `ms/s`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl ColumnUnitBase {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [unit_category][crate::model::ColumnUnitBase::unit_category].
    pub fn set_unit_category<T: std::convert::Into<UnitCategory>>(mut self, v: T) -> Self {
        self.unit_category = Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::ColumnUnitBase::display_name].
    pub fn set_display_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }
}

impl binding::Model for ColumnUnitBase {
    const NAME: &'static str = "ColumnUnitBase";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            unit_category: fields.take("unitCategory", "unit_category")?,
            display_name: fields.take("displayName", "display_name")?,
        })
    }
}

/// A column unit measuring data sizes.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct DataSizeColumnUnit {
    /// The unit name as displayed, `GB`, `ms/s`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<DataSizeUnit>,
}

impl DataSizeColumnUnit {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [display_name][crate::model::DataSizeColumnUnit::display_name].
    pub fn set_display_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [unit][crate::model::DataSizeColumnUnit::unit].
    pub fn set_unit<T: std::convert::Into<DataSizeUnit>>(mut self, v: T) -> Self {
        self.unit = Some(v.into());
        self
    }
}

impl binding::Model for DataSizeColumnUnit {
    const NAME: &'static str = "DataSizeColumnUnit";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        fields.skip("unitCategory", "unit_category")?;
        Ok(Self {
            display_name: fields.take("displayName", "display_name")?,
            unit: fields.take("unit", "unit")?,
        })
    }
}

/// A column unit measuring durations.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct TimeColumnUnit {
    /// The unit name as displayed, `GB`, `ms/s`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<TimeUnit>,
}

impl TimeColumnUnit {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [display_name][crate::model::TimeColumnUnit::display_name].
    pub fn set_display_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [unit][crate::model::TimeColumnUnit::unit].
    pub fn set_unit<T: std::convert::Into<TimeUnit>>(mut self, v: T) -> Self {
        self.unit = Some(v.into());
        self
    }
}

impl binding::Model for TimeColumnUnit {
    const NAME: &'static str = "TimeColumnUnit";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        fields.skip("unitCategory", "unit_category")?;
        Ok(Self {
            display_name: fields.take("displayName", "display_name")?,
            unit: fields.take("unit", "unit")?,
        })
    }
}

/// A column unit measuring power.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct PowerColumnUnit {
    /// The unit name as displayed, `GB`, `ms/s`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<PowerUnit>,
}

impl PowerColumnUnit {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [display_name][crate::model::PowerColumnUnit::display_name].
    pub fn set_display_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [unit][crate::model::PowerColumnUnit::unit].
    pub fn set_unit<T: std::convert::Into<PowerUnit>>(mut self, v: T) -> Self {
        self.unit = Some(v.into());
        self
    }
}

impl binding::Model for PowerColumnUnit {
    const NAME: &'static str = "PowerColumnUnit";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        fields.skip("unitCategory", "unit_category")?;
        Ok(Self {
            display_name: fields.take("displayName", "display_name")?,
            unit: fields.take("unit", "unit")?,
        })
    }
}

/// A column unit measuring temperatures.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct TemperatureColumnUnit {
    /// The unit name as displayed, `GB`, `ms/s`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<TemperatureUnit>,
}

impl TemperatureColumnUnit {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [display_name][crate::model::TemperatureColumnUnit::display_name].
    pub fn set_display_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [unit][crate::model::TemperatureColumnUnit::unit].
    pub fn set_unit<T: std::convert::Into<TemperatureUnit>>(mut self, v: T) -> Self {
        self.unit = Some(v.into());
        self
    }
}

impl binding::Model for TemperatureColumnUnit {
    const NAME: &'static str = "TemperatureColumnUnit";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        fields.skip("unitCategory", "unit_category")?;
        Ok(Self {
            display_name: fields.take("displayName", "display_name")?,
            unit: fields.take("unit", "unit")?,
        })
    }
}

/// A column unit measuring processor cores.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CoreColumnUnit {
    /// The unit name as displayed, `GB`, `ms/s`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<CoreUnit>,
}

impl CoreColumnUnit {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [display_name][crate::model::CoreColumnUnit::display_name].
    pub fn set_display_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [unit][crate::model::CoreColumnUnit::unit].
    pub fn set_unit<T: std::convert::Into<CoreUnit>>(mut self, v: T) -> Self {
        self.unit = Some(v.into());
        self
    }
}

impl binding::Model for CoreColumnUnit {
    const NAME: &'static str = "CoreColumnUnit";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        fields.skip("unitCategory", "unit_category")?;
        Ok(Self {
            display_name: fields.take("displayName", "display_name")?,
            unit: fields.take("unit", "unit")?,
        })
    }
}

/// A column unit defined as the ratio of two units.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct RateColumnUnit {
    /// The unit name as displayed, `GB`, `ms/s`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numerator: Option<Box<ColumnUnit>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denominator: Option<Box<ColumnUnit>>,
}

impl RateColumnUnit {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [display_name][crate::model::RateColumnUnit::display_name].
    pub fn set_display_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [numerator][crate::model::RateColumnUnit::numerator].
    pub fn set_numerator<T: std::convert::Into<ColumnUnit>>(mut self, v: T) -> Self {
        self.numerator = Some(Box::new(v.into()));
        self
    }

    /// Sets the value of [denominator][crate::model::RateColumnUnit::denominator].
    pub fn set_denominator<T: std::convert::Into<ColumnUnit>>(mut self, v: T) -> Self {
        self.denominator = Some(Box::new(v.into()));
        self
    }
}

impl binding::Model for RateColumnUnit {
    const NAME: &'static str = "RateColumnUnit";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        fields.skip("unitCategory", "unit_category")?;
        Ok(Self {
            display_name: fields.take("displayName", "display_name")?,
            numerator: fields.take::<ColumnUnit>("numerator", "numerator")?.map(Box::new),
            denominator: fields.take::<ColumnUnit>("denominator", "denominator")?.map(Box::new),
        })
    }
}

/// A column unit measuring frequencies.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct FrequencyColumnUnit {
    /// The unit name as displayed, `GB`, `ms/s`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<FrequencyUnit>,
}

impl FrequencyColumnUnit {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [display_name][crate::model::FrequencyColumnUnit::display_name].
    pub fn set_display_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [unit][crate::model::FrequencyColumnUnit::unit].
    pub fn set_unit<T: std::convert::Into<FrequencyUnit>>(mut self, v: T) -> Self {
        self.unit = Some(v.into());
        self
    }
}

impl binding::Model for FrequencyColumnUnit {
    const NAME: &'static str = "FrequencyColumnUnit";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        fields.skip("unitCategory", "unit_category")?;
        Ok(Self {
            display_name: fields.take("displayName", "display_name")?,
            unit: fields.take("unit", "unit")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct OtherStandardColumnUnit {
    /// The unit name as displayed, `GB`, `ms/s`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<OtherStandardUnit>,
}

impl OtherStandardColumnUnit {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [display_name][crate::model::OtherStandardColumnUnit::display_name].
    pub fn set_display_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [unit][crate::model::OtherStandardColumnUnit::unit].
    pub fn set_unit<T: std::convert::Into<OtherStandardUnit>>(mut self, v: T) -> Self {
        self.unit = Some(v.into());
        self
    }
}

impl binding::Model for OtherStandardColumnUnit {
    const NAME: &'static str = "OtherStandardColumnUnit";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        fields.skip("unitCategory", "unit_category")?;
        Ok(Self {
            display_name: fields.take("displayName", "display_name")?,
            unit: fields.take("unit", "unit")?,
        })
    }
}

/// A column unit with an arbitrary name.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CustomColumnUnit {
    /// The unit name as displayed, `GB`, `ms/s`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl CustomColumnUnit {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [display_name][crate::model::CustomColumnUnit::display_name].
    pub fn set_display_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [unit][crate::model::CustomColumnUnit::unit].
    pub fn set_unit<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.unit = Some(v.into());
        self
    }
}

impl binding::Model for CustomColumnUnit {
    const NAME: &'static str = "CustomColumnUnit";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        fields.skip("unitCategory", "unit_category")?;
        Ok(Self {
            display_name: fields.take("displayName", "display_name")?,
            unit: fields.take("unit", "unit")?,
        })
    }
}

/// The request message for [get_database_insight][crate::client::OperationsInsights::get_database_insight].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetDatabaseInsightRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_insight_id: Option<String>,
}

impl GetDatabaseInsightRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [database_insight_id][crate::model::GetDatabaseInsightRequest::database_insight_id].
    pub fn set_database_insight_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.database_insight_id = Some(v.into());
        self
    }

    /// Fails with a binding error if a required field is missing or an
    /// enum field holds an undeclared value.
    pub fn validate(&self) -> gax::Result<()> {
        gaxi::path_parameter::required(self.database_insight_id.as_deref(), "databaseInsightId")?;
        Ok(())
    }
}

impl binding::Model for GetDatabaseInsightRequest {
    const NAME: &'static str = "GetDatabaseInsightRequest";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            database_insight_id: fields.take("databaseInsightId", "database_insight_id")?,
        })
    }
}

/// The request message for [list_database_insights][crate::client::OperationsInsights::list_database_insights].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListDatabaseInsightsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_manager_bridge_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub id: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<ResourceStatus>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lifecycle_state: Vec<LifecycleState>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub database_type: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub database_id: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exadata_insight_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opsi_private_endpoint_id: Option<String>,

    /// Include the resources of all the subcompartments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id_in_subtree: Option<bool>,

    /// The maximum number of items per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    /// The `opc-next-page` value of the previous response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<DatabaseInsightSortBy>,
}

impl ListDatabaseInsightsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::ListDatabaseInsightsRequest::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [enterprise_manager_bridge_id][crate::model::ListDatabaseInsightsRequest::enterprise_manager_bridge_id].
    pub fn set_enterprise_manager_bridge_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.enterprise_manager_bridge_id = Some(v.into());
        self
    }

    /// Sets the value of [id][crate::model::ListDatabaseInsightsRequest::id].
    pub fn set_id<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.id = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [status][crate::model::ListDatabaseInsightsRequest::status].
    pub fn set_status<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<ResourceStatus>,
    {
        use std::iter::Iterator;
        self.status = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::ListDatabaseInsightsRequest::lifecycle_state].
    pub fn set_lifecycle_state<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LifecycleState>,
    {
        use std::iter::Iterator;
        self.lifecycle_state = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [database_type][crate::model::ListDatabaseInsightsRequest::database_type].
    pub fn set_database_type<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.database_type = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [database_id][crate::model::ListDatabaseInsightsRequest::database_id].
    pub fn set_database_id<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.database_id = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [exadata_insight_id][crate::model::ListDatabaseInsightsRequest::exadata_insight_id].
    pub fn set_exadata_insight_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.exadata_insight_id = Some(v.into());
        self
    }

    /// Sets the value of [opsi_private_endpoint_id][crate::model::ListDatabaseInsightsRequest::opsi_private_endpoint_id].
    pub fn set_opsi_private_endpoint_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.opsi_private_endpoint_id = Some(v.into());
        self
    }

    /// Sets the value of [compartment_id_in_subtree][crate::model::ListDatabaseInsightsRequest::compartment_id_in_subtree].
    pub fn set_compartment_id_in_subtree<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.compartment_id_in_subtree = Some(v.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListDatabaseInsightsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }

    /// Sets the value of [page][crate::model::ListDatabaseInsightsRequest::page].
    pub fn set_page<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.page = Some(v.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListDatabaseInsightsRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = Some(v.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListDatabaseInsightsRequest::sort_by].
    pub fn set_sort_by<T: std::convert::Into<DatabaseInsightSortBy>>(mut self, v: T) -> Self {
        self.sort_by = Some(v.into());
        self
    }

    /// Fails with a binding error if a required field is missing or an
    /// enum field holds an undeclared value.
    pub fn validate(&self) -> gax::Result<()> {
        for v in &self.status {
            gaxi::query_parameter::check_enum(Some(v), "status")?;
        }
        for v in &self.lifecycle_state {
            gaxi::query_parameter::check_enum(Some(v), "lifecycleState")?;
        }
        gaxi::query_parameter::check_enum(self.sort_order.as_ref(), "sortOrder")?;
        gaxi::query_parameter::check_enum(self.sort_by.as_ref(), "sortBy")?;
        Ok(())
    }
}

impl binding::Model for ListDatabaseInsightsRequest {
    const NAME: &'static str = "ListDatabaseInsightsRequest";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            compartment_id: fields.take("compartmentId", "compartment_id")?,
            enterprise_manager_bridge_id: fields
                .take("enterpriseManagerBridgeId", "enterprise_manager_bridge_id")?,
            id: fields.take_list("id", "id")?,
            status: fields.take_list("status", "status")?,
            lifecycle_state: fields.take_list("lifecycleState", "lifecycle_state")?,
            database_type: fields.take_list("databaseType", "database_type")?,
            database_id: fields.take_list("databaseId", "database_id")?,
            exadata_insight_id: fields.take("exadataInsightId", "exadata_insight_id")?,
            opsi_private_endpoint_id: fields
                .take("opsiPrivateEndpointId", "opsi_private_endpoint_id")?,
            compartment_id_in_subtree: fields
                .take("compartmentIdInSubtree", "compartment_id_in_subtree")?,
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
pub struct ListHostConfigurationsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_manager_bridge_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub id: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exadata_insight_id: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub platform_type: Vec<PlatformType>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub host_type: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_id: Option<String>,

    /// Include the resources of all the subcompartments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id_in_subtree: Option<bool>,

    /// The maximum number of items per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    /// The `opc-next-page` value of the previous response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<HostConfigurationSortBy>,
}

impl ListHostConfigurationsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::ListHostConfigurationsRequest::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [enterprise_manager_bridge_id][crate::model::ListHostConfigurationsRequest::enterprise_manager_bridge_id].
    pub fn set_enterprise_manager_bridge_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.enterprise_manager_bridge_id = Some(v.into());
        self
    }

    /// Sets the value of [id][crate::model::ListHostConfigurationsRequest::id].
    pub fn set_id<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.id = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [exadata_insight_id][crate::model::ListHostConfigurationsRequest::exadata_insight_id].
    pub fn set_exadata_insight_id<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.exadata_insight_id = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [platform_type][crate::model::ListHostConfigurationsRequest::platform_type].
    pub fn set_platform_type<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<PlatformType>,
    {
        use std::iter::Iterator;
        self.platform_type = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [host_type][crate::model::ListHostConfigurationsRequest::host_type].
    pub fn set_host_type<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.host_type = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [host_id][crate::model::ListHostConfigurationsRequest::host_id].
    pub fn set_host_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.host_id = Some(v.into());
        self
    }

    /// Sets the value of [compartment_id_in_subtree][crate::model::ListHostConfigurationsRequest::compartment_id_in_subtree].
    pub fn set_compartment_id_in_subtree<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.compartment_id_in_subtree = Some(v.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListHostConfigurationsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }

    /// Sets the value of [page][crate::model::ListHostConfigurationsRequest::page].
    pub fn set_page<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.page = Some(v.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListHostConfigurationsRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = Some(v.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListHostConfigurationsRequest::sort_by].
    pub fn set_sort_by<T: std::convert::Into<HostConfigurationSortBy>>(mut self, v: T) -> Self {
        self.sort_by = Some(v.into());
        self
    }

    /// Fails with a binding error if a required field is missing or an
    /// enum field holds an undeclared value.
    pub fn validate(&self) -> gax::Result<()> {
        for v in &self.platform_type {
            gaxi::query_parameter::check_enum(Some(v), "platformType")?;
        }
        gaxi::query_parameter::check_enum(self.sort_order.as_ref(), "sortOrder")?;
        gaxi::query_parameter::check_enum(self.sort_by.as_ref(), "sortBy")?;
        gaxi::path_parameter::required(self.compartment_id.as_deref(), "compartmentId")?;
        Ok(())
    }
}

impl binding::Model for ListHostConfigurationsRequest {
    const NAME: &'static str = "ListHostConfigurationsRequest";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            compartment_id: fields.take("compartmentId", "compartment_id")?,
            enterprise_manager_bridge_id: fields
                .take("enterpriseManagerBridgeId", "enterprise_manager_bridge_id")?,
            id: fields.take_list("id", "id")?,
            exadata_insight_id: fields.take_list("exadataInsightId", "exadata_insight_id")?,
            platform_type: fields.take_list("platformType", "platform_type")?,
            host_type: fields.take_list("hostType", "host_type")?,
            host_id: fields.take("hostId", "host_id")?,
            compartment_id_in_subtree: fields
                .take("compartmentIdInSubtree", "compartment_id_in_subtree")?,
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
pub struct QueryOpsiDataObjectDataRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_opsi_data_object_data_details: Option<QueryOpsiDataObjectDataDetails>,

    /// The maximum number of items per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    /// The `opc-next-page` value of the previous response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

impl QueryOpsiDataObjectDataRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::QueryOpsiDataObjectDataRequest::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [query_opsi_data_object_data_details][crate::model::QueryOpsiDataObjectDataRequest::query_opsi_data_object_data_details].
    pub fn set_query_opsi_data_object_data_details<
        T: std::convert::Into<QueryOpsiDataObjectDataDetails>,
    >(
        mut self,
        v: T,
    ) -> Self {
        self.query_opsi_data_object_data_details = Some(v.into());
        self
    }

    /// Sets the value of [limit][crate::model::QueryOpsiDataObjectDataRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }

    /// Sets the value of [page][crate::model::QueryOpsiDataObjectDataRequest::page].
    pub fn set_page<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.page = Some(v.into());
        self
    }

    /// Fails with a binding error if a required field is missing or an
    /// enum field holds an undeclared value.
    pub fn validate(&self) -> gax::Result<()> {
        gaxi::path_parameter::required(self.compartment_id.as_deref(), "compartmentId")?;
        match &self.query_opsi_data_object_data_details {
            Some(v) => v.validate()?,
            None => return Err(gaxi::path_parameter::missing("queryOpsiDataObjectDataDetails")),
        }
        Ok(())
    }
}

impl binding::Model for QueryOpsiDataObjectDataRequest {
    const NAME: &'static str = "QueryOpsiDataObjectDataRequest";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            compartment_id: fields.take("compartmentId", "compartment_id")?,
            query_opsi_data_object_data_details: fields
                .take("queryOpsiDataObjectDataDetails", "query_opsi_data_object_data_details")?,
            limit: fields.take("limit", "limit")?,
            page: fields.take("page", "page")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct SummarizeSqlInsightsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub database_type: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub database_id: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub id: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exadata_insight_id: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cdb_name: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub host_name: Vec<String>,

    /// Only SQL statements above this share of the database time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_time_pct_greater_than: Option<f64>,

    /// An ISO 8601 period ending now, ignored when `timeIntervalStart` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_time_interval: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "binding::datetime::serialize"
    )]
    pub time_interval_start: Option<time::OffsetDateTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "binding::datetime::serialize"
    )]
    pub time_interval_end: Option<time::OffsetDateTime>,

    /// The `opc-next-page` value of the previous response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,

    /// Include the resources of all the subcompartments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id_in_subtree: Option<bool>,
}

impl SummarizeSqlInsightsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::SummarizeSqlInsightsRequest::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [database_type][crate::model::SummarizeSqlInsightsRequest::database_type].
    pub fn set_database_type<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.database_type = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [database_id][crate::model::SummarizeSqlInsightsRequest::database_id].
    pub fn set_database_id<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.database_id = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [id][crate::model::SummarizeSqlInsightsRequest::id].
    pub fn set_id<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.id = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [exadata_insight_id][crate::model::SummarizeSqlInsightsRequest::exadata_insight_id].
    pub fn set_exadata_insight_id<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.exadata_insight_id = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [cdb_name][crate::model::SummarizeSqlInsightsRequest::cdb_name].
    pub fn set_cdb_name<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.cdb_name = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [host_name][crate::model::SummarizeSqlInsightsRequest::host_name].
    pub fn set_host_name<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.host_name = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [database_time_pct_greater_than][crate::model::SummarizeSqlInsightsRequest::database_time_pct_greater_than].
    pub fn set_database_time_pct_greater_than<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.database_time_pct_greater_than = Some(v.into());
        self
    }

    /// Sets the value of [analysis_time_interval][crate::model::SummarizeSqlInsightsRequest::analysis_time_interval].
    pub fn set_analysis_time_interval<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.analysis_time_interval = Some(v.into());
        self
    }

    /// Sets the value of [time_interval_start][crate::model::SummarizeSqlInsightsRequest::time_interval_start].
    pub fn set_time_interval_start<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_interval_start = Some(v.into());
        self
    }

    /// Sets the value of [time_interval_end][crate::model::SummarizeSqlInsightsRequest::time_interval_end].
    pub fn set_time_interval_end<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_interval_end = Some(v.into());
        self
    }

    /// Sets the value of [page][crate::model::SummarizeSqlInsightsRequest::page].
    pub fn set_page<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.page = Some(v.into());
        self
    }

    /// Sets the value of [compartment_id_in_subtree][crate::model::SummarizeSqlInsightsRequest::compartment_id_in_subtree].
    pub fn set_compartment_id_in_subtree<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.compartment_id_in_subtree = Some(v.into());
        self
    }

    /// Fails with a binding error if a required field is missing or an
    /// enum field holds an undeclared value.
    pub fn validate(&self) -> gax::Result<()> {
        gaxi::path_parameter::required(self.compartment_id.as_deref(), "compartmentId")?;
        Ok(())
    }
}

impl binding::Model for SummarizeSqlInsightsRequest {
    const NAME: &'static str = "SummarizeSqlInsightsRequest";

    fn bind(fields: &mut binding::Fields<'_>) -> binding::Result<Self> {
        Ok(Self {
            compartment_id: fields.take("compartmentId", "compartment_id")?,
            database_type: fields.take_list("databaseType", "database_type")?,
            database_id: fields.take_list("databaseId", "database_id")?,
            id: fields.take_list("id", "id")?,
            exadata_insight_id: fields.take_list("exadataInsightId", "exadata_insight_id")?,
            cdb_name: fields.take_list("cdbName", "cdb_name")?,
            host_name: fields.take_list("hostName", "host_name")?,
            database_time_pct_greater_than: fields
                .take("databaseTimePctGreaterThan", "database_time_pct_greater_than")?,
            analysis_time_interval: fields.take("analysisTimeInterval", "analysis_time_interval")?,
            time_interval_start: fields.take("timeIntervalStart", "time_interval_start")?,
            time_interval_end: fields.take("timeIntervalEnd", "time_interval_end")?,
            page: fields.take("page", "page")?,
            compartment_id_in_subtree: fields
                .take("compartmentIdInSubtree", "compartment_id_in_subtree")?,
        })
    }
}

/// The response of [list_database_insights][crate::client::OperationsInsights::list_database_insights].
///
/// Wraps the page of results with the token for the next page.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListDatabaseInsightsResponse {
    pub database_insights_collection: DatabaseInsightsCollection,

    /// The `opc-next-page` header. Absent on the last page.
    pub opc_next_page: Option<String>,

    pub opc_request_id: Option<String>,
}

impl std::convert::From<gax::response::Response<DatabaseInsightsCollection>>
    for ListDatabaseInsightsResponse
{
    fn from(response: gax::response::Response<DatabaseInsightsCollection>) -> Self {
        let opc_next_page = response.opc_next_page().map(str::to_string);
        let opc_request_id = response.opc_request_id().map(str::to_string);
        Self {
            database_insights_collection: response.into_body(),
            opc_next_page,
            opc_request_id,
        }
    }
}

impl gax::paginator::PageableResponse for ListDatabaseInsightsResponse {
    type PageItem = DatabaseInsightSummary;

    fn items(self) -> Vec<Self::PageItem> {
        self.database_insights_collection.items
    }

    fn next_page_token(&self) -> String {
        self.opc_next_page.clone().unwrap_or_default()
    }
}

/// The response of [list_host_configurations][crate::client::OperationsInsights::list_host_configurations].
///
/// Wraps the page of results with the token for the next page.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListHostConfigurationsResponse {
    pub host_configuration_collection: HostConfigurationCollection,

    /// The `opc-next-page` header. Absent on the last page.
    pub opc_next_page: Option<String>,

    pub opc_request_id: Option<String>,
}

impl std::convert::From<gax::response::Response<HostConfigurationCollection>>
    for ListHostConfigurationsResponse
{
    fn from(response: gax::response::Response<HostConfigurationCollection>) -> Self {
        let opc_next_page = response.opc_next_page().map(str::to_string);
        let opc_request_id = response.opc_request_id().map(str::to_string);
        Self {
            host_configuration_collection: response.into_body(),
            opc_next_page,
            opc_request_id,
        }
    }
}

impl gax::paginator::PageableResponse for ListHostConfigurationsResponse {
    type PageItem = HostConfigurationSummary;

    fn items(self) -> Vec<Self::PageItem> {
        self.host_configuration_collection.items
    }

    fn next_page_token(&self) -> String {
        self.opc_next_page.clone().unwrap_or_default()
    }
}

/// The response of [query_opsi_data_object_data][crate::client::OperationsInsights::query_opsi_data_object_data].
///
/// Wraps the page of results with the token for the next page.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct QueryOpsiDataObjectDataResponse {
    pub query_data_object_result_set_rows_collection: QueryDataObjectResultSetRowsCollection,

    /// The `opc-next-page` header. Absent on the last page.
    pub opc_next_page: Option<String>,

    pub opc_request_id: Option<String>,
}

impl std::convert::From<gax::response::Response<QueryDataObjectResultSetRowsCollection>>
    for QueryOpsiDataObjectDataResponse
{
    fn from(response: gax::response::Response<QueryDataObjectResultSetRowsCollection>) -> Self {
        let opc_next_page = response.opc_next_page().map(str::to_string);
        let opc_request_id = response.opc_request_id().map(str::to_string);
        Self {
            query_data_object_result_set_rows_collection: response.into_body(),
            opc_next_page,
            opc_request_id,
        }
    }
}

impl gax::paginator::PageableResponse for QueryOpsiDataObjectDataResponse {
    type PageItem = Vec<serde_json::Value>;

    fn items(self) -> Vec<Self::PageItem> {
        self.query_data_object_result_set_rows_collection.rows
    }

    fn next_page_token(&self) -> String {
        self.opc_next_page.clone().unwrap_or_default()
    }
}

binding::model_traits!(
    PeComanagedDatabaseHostDetails,
    PeComanagedDatabaseConnectionDetails,
    DatabaseInsightsCollection,
    HostConfigurationCollection,
    DataObjectBindParameter,
    DataObjectQueryTimeFilters,
    QueryOpsiDataObjectDataDetails,
    QueryDataObjectResultSetColumnMetadata,
    QueryDataObjectResultSetRowsCollection,
    SqlInsightThresholds,
    SqlInsightAggregationInventory,
    SqlInsightAggregation,
    SqlInsightAggregationCollection,
    CredentialDetails,
    CredentialDetailsBase,
    CredentialsBySource,
    CredentialByVault,
    CredentialByIam,
    DatabaseInsight,
    DatabaseInsightBase,
    AutonomousDatabaseInsight,
    EmManagedExternalDatabaseInsight,
    MacsManagedExternalDatabaseInsight,
    PeComanagedDatabaseInsight,
    DatabaseInsightSummary,
    DatabaseInsightSummaryBase,
    AutonomousDatabaseInsightSummary,
    EmManagedExternalDatabaseInsightSummary,
    MacsManagedExternalDatabaseInsightSummary,
    PeComanagedDatabaseInsightSummary,
    HostConfigurationSummary,
    HostConfigurationSummaryBase,
    MacsManagedExternalHostConfigurationSummary,
    EmManagedExternalHostConfigurationSummary,
    DataObjectQuery,
    DataObjectQueryBase,
    DataObjectTemplatizedQuery,
    DataObjectStandardQuery,
    ColumnUnit,
    ColumnUnitBase,
    DataSizeColumnUnit,
    TimeColumnUnit,
    PowerColumnUnit,
    TemperatureColumnUnit,
    CoreColumnUnit,
    RateColumnUnit,
    FrequencyColumnUnit,
    OtherStandardColumnUnit,
    CustomColumnUnit,
    GetDatabaseInsightRequest,
    ListDatabaseInsightsRequest,
    ListHostConfigurationsRequest,
    QueryOpsiDataObjectDataRequest,
    SummarizeSqlInsightsRequest,
);
