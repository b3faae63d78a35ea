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

//! Date-time fields use RFC 3339 on the wire.

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Parses an RFC 3339 timestamp, returns `None` if it is malformed.
pub fn parse(value: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(value, &Rfc3339).ok()
}

/// Formats a timestamp in RFC 3339 format.
pub fn format(value: &OffsetDateTime) -> Result<String, time::error::Format> {
    value.format(&Rfc3339)
}

/// Serializes optional timestamp fields, use with
/// `#[serde(serialize_with = "binding::datetime::serialize")]`.
pub fn serialize<S>(value: &Option<OffsetDateTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::Error;
    match value {
        None => serializer.serialize_none(),
        Some(v) => serializer.serialize_str(&format(v).map_err(S::Error::custom)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("2025-01-02T03:04:05Z", 1735787045)]
    #[test_case("2025-01-02T03:04:05.250Z", 1735787045)]
    #[test_case("2025-01-02T05:04:05+02:00", 1735787045)]
    fn parse_valid(input: &str, want: i64) {
        let got = parse(input).map(|t| t.unix_timestamp());
        assert_eq!(got, Some(want));
    }

    #[test_case("")]
    #[test_case("2025-01-02")]
    #[test_case("yesterday")]
    fn parse_invalid(input: &str) {
        assert_eq!(parse(input), None);
    }

    #[test]
    fn format_round_trip() -> anyhow::Result<()> {
        let input = "2025-01-02T03:04:05.25Z";
        let ts = parse(input).ok_or_else(|| anyhow::anyhow!("cannot parse {input}"))?;
        assert_eq!(format(&ts)?, input);
        Ok(())
    }

    #[test]
    fn serialize_option() -> anyhow::Result<()> {
        #[derive(serde::Serialize)]
        struct Holder {
            #[serde(serialize_with = "super::serialize")]
            ts: Option<OffsetDateTime>,
        }
        let ts = parse("2025-01-02T03:04:05Z");
        let got = serde_json::to_value(Holder { ts })?;
        assert_eq!(got, serde_json::json!({"ts": "2025-01-02T03:04:05Z"}));
        let got = serde_json::to_value(Holder { ts: None })?;
        assert_eq!(got, serde_json::json!({"ts": null}));
        Ok(())
    }
}
