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

use crate::diagnostics::DiagnosticSink;
use crate::error::BindError;
use crate::{Model, Result};
use serde_json::{Map, Value};
use std::collections::HashMap;
use time::OffsetDateTime;

/// The input of a [Model::bind] call.
///
/// Wraps the JSON object being bound. Each `take*` function removes one
/// field from the object, looking it up by its wire name and by its
/// canonical alias, so every field is consumed exactly once.
#[derive(Debug)]
pub struct Fields<'a> {
    model: &'static str,
    map: Map<String, Value>,
    sink: &'a dyn DiagnosticSink,
}

/// Identifies the field being bound, used to report diagnostics.
#[derive(Clone, Copy, Debug)]
pub struct Slot<'a> {
    pub model: &'static str,
    pub field: &'static str,
    pub sink: &'a dyn DiagnosticSink,
}

impl Slot<'_> {
    pub(crate) fn malformed(&self, expected: &str) {
        self.sink.malformed_value(self.model, self.field, expected);
    }
}

impl<'a> Fields<'a> {
    pub fn new(model: &'static str, map: Map<String, Value>, sink: &'a dyn DiagnosticSink) -> Self {
        Self { model, map, sink }
    }

    /// The name of the model being bound.
    pub fn model(&self) -> &'static str {
        self.model
    }

    /// The diagnostic sink for this binding.
    pub fn sink(&self) -> &'a dyn DiagnosticSink {
        self.sink
    }

    /// Removes the raw value of a field.
    ///
    /// Fails if the input has both `wire` and `alias` keys. A JSON `null` is
    /// treated as absent.
    pub fn raw(&mut self, wire: &'static str, alias: &'static str) -> Result<Option<Value>> {
        let by_wire = self.map.remove(wire);
        let by_alias = if alias == wire {
            None
        } else {
            self.map.remove(alias)
        };
        match (by_wire, by_alias) {
            (Some(_), Some(_)) => Err(BindError::Conflict {
                model: self.model,
                wire,
                alias,
            }),
            (Some(Value::Null), None) | (None, Some(Value::Null)) | (None, None) => Ok(None),
            (Some(v), None) | (None, Some(v)) => Ok(Some(v)),
        }
    }

    /// Returns the string value of a field without consuming it.
    ///
    /// Used to read discriminators. Fails on conflicts like [Fields::raw].
    pub fn peek_str(&self, wire: &'static str, alias: &'static str) -> Result<Option<&str>> {
        let by_wire = self.map.get(wire);
        let by_alias = if alias == wire {
            None
        } else {
            self.map.get(alias)
        };
        match (by_wire, by_alias) {
            (Some(_), Some(_)) => Err(BindError::Conflict {
                model: self.model,
                wire,
                alias,
            }),
            (Some(v), None) | (None, Some(v)) => Ok(v.as_str()),
            (None, None) => Ok(None),
        }
    }

    /// Consumes a field and ignores its value.
    ///
    /// Subtypes use this for their discriminator, which they always set to
    /// their own literal.
    pub fn skip(&mut self, wire: &'static str, alias: &'static str) -> Result<()> {
        self.raw(wire, alias).map(|_| ())
    }

    /// Binds a scalar, enum, or nested model field.
    ///
    /// Returns `None` if the field is absent or has the wrong shape.
    pub fn take<T: Bindable>(
        &mut self,
        wire: &'static str,
        alias: &'static str,
    ) -> Result<Option<T>> {
        match self.raw(wire, alias)? {
            None => Ok(None),
            Some(v) => T::bind_value(v, &self.slot(alias)),
        }
    }

    /// Binds a field with a declared default.
    ///
    /// The default applies only when neither key is present. A present value
    /// with the wrong shape leaves the field unset.
    pub fn take_or<T: Bindable>(
        &mut self,
        wire: &'static str,
        alias: &'static str,
        default: T,
    ) -> Result<Option<T>> {
        match self.raw(wire, alias)? {
            None => Ok(Some(default)),
            Some(v) => T::bind_value(v, &self.slot(alias)),
        }
    }

    /// Binds a collection field.
    ///
    /// A present value that is not an array leaves the field empty. Array
    /// elements with the wrong shape are skipped.
    pub fn take_list<T: Bindable>(
        &mut self,
        wire: &'static str,
        alias: &'static str,
    ) -> Result<Vec<T>> {
        let slot = self.slot(alias);
        match self.raw(wire, alias)? {
            Some(Value::Array(items)) => {
                let mut list = Vec::with_capacity(items.len());
                for item in items {
                    if let Some(v) = T::bind_value(item, &slot)? {
                        list.push(v);
                    }
                }
                Ok(list)
            }
            Some(_) => {
                slot.malformed("an array");
                Ok(Vec::new())
            }
            None => Ok(Vec::new()),
        }
    }

    /// Binds a map field, such as free-form tags.
    ///
    /// A present value that is not an object leaves the field empty. Entries
    /// with the wrong shape are skipped.
    pub fn take_map<T: Bindable>(
        &mut self,
        wire: &'static str,
        alias: &'static str,
    ) -> Result<HashMap<String, T>> {
        let slot = self.slot(alias);
        match self.raw(wire, alias)? {
            Some(Value::Object(entries)) => {
                let mut map = HashMap::with_capacity(entries.len());
                for (k, item) in entries {
                    if let Some(v) = T::bind_value(item, &slot)? {
                        map.insert(k, v);
                    }
                }
                Ok(map)
            }
            Some(_) => {
                slot.malformed("an object");
                Ok(HashMap::new())
            }
            None => Ok(HashMap::new()),
        }
    }

    fn slot(&self, field: &'static str) -> Slot<'a> {
        Slot {
            model: self.model,
            field,
            sink: self.sink,
        }
    }
}

/// A type that can be bound from a single JSON value.
///
/// Implemented for the primitive types used by the models, for every
/// [Model], and for open enums declared with [open_enum][crate::open_enum].
pub trait Bindable: Sized {
    /// Binds `value`, returns `Ok(None)` if it has the wrong shape.
    ///
    /// Only conflicts inside nested models produce errors.
    fn bind_value(value: Value, slot: &Slot<'_>) -> Result<Option<Self>>;
}

impl<T: Model> Bindable for T {
    fn bind_value(value: Value, slot: &Slot<'_>) -> Result<Option<Self>> {
        match value {
            Value::Object(map) => {
                let mut fields = Fields::new(T::NAME, map, slot.sink);
                T::bind(&mut fields).map(Some)
            }
            _ => {
                slot.malformed("an object");
                Ok(None)
            }
        }
    }
}

impl Bindable for String {
    fn bind_value(value: Value, slot: &Slot<'_>) -> Result<Option<Self>> {
        match value {
            Value::String(s) => Ok(Some(s)),
            _ => {
                slot.malformed("a string");
                Ok(None)
            }
        }
    }
}

impl Bindable for bool {
    fn bind_value(value: Value, slot: &Slot<'_>) -> Result<Option<Self>> {
        match value {
            Value::Bool(b) => Ok(Some(b)),
            _ => {
                slot.malformed("a boolean");
                Ok(None)
            }
        }
    }
}

impl Bindable for i64 {
    fn bind_value(value: Value, slot: &Slot<'_>) -> Result<Option<Self>> {
        let v = value.as_i64().or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        });
        if v.is_none() {
            slot.malformed("an integer");
        }
        Ok(v)
    }
}

impl Bindable for i32 {
    fn bind_value(value: Value, slot: &Slot<'_>) -> Result<Option<Self>> {
        let Some(v) = i64::bind_value(value, slot)? else {
            return Ok(None);
        };
        match i32::try_from(v) {
            Ok(v) => Ok(Some(v)),
            Err(_) => {
                slot.malformed("a 32-bit integer");
                Ok(None)
            }
        }
    }
}

impl Bindable for f64 {
    fn bind_value(value: Value, slot: &Slot<'_>) -> Result<Option<Self>> {
        let v = value.as_f64();
        if v.is_none() {
            slot.malformed("a number");
        }
        Ok(v)
    }
}

impl Bindable for f32 {
    fn bind_value(value: Value, slot: &Slot<'_>) -> Result<Option<Self>> {
        Ok(f64::bind_value(value, slot)?.map(|v| v as f32))
    }
}

impl Bindable for OffsetDateTime {
    fn bind_value(value: Value, slot: &Slot<'_>) -> Result<Option<Self>> {
        let v = value.as_str().and_then(crate::datetime::parse);
        if v.is_none() {
            slot.malformed("an RFC 3339 timestamp");
        }
        Ok(v)
    }
}

/// Free-form values are kept as-is.
impl Bindable for Value {
    fn bind_value(value: Value, _slot: &Slot<'_>) -> Result<Option<Self>> {
        Ok(Some(value))
    }
}

impl<T: Bindable> Bindable for Vec<T> {
    fn bind_value(value: Value, slot: &Slot<'_>) -> Result<Option<Self>> {
        match value {
            Value::Array(items) => {
                let mut list = Vec::with_capacity(items.len());
                for item in items {
                    if let Some(v) = T::bind_value(item, slot)? {
                        list.push(v);
                    }
                }
                Ok(Some(list))
            }
            _ => {
                slot.malformed("an array");
                Ok(None)
            }
        }
    }
}

impl<T: Bindable> Bindable for HashMap<String, T> {
    fn bind_value(value: Value, slot: &Slot<'_>) -> Result<Option<Self>> {
        match value {
            Value::Object(entries) => {
                let mut map = HashMap::with_capacity(entries.len());
                for (k, item) in entries {
                    if let Some(v) = T::bind_value(item, slot)? {
                        map.insert(k, v);
                    }
                }
                Ok(Some(map))
            }
            _ => {
                slot.malformed("an object");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NoDiagnostics;
    use crate::diagnostics::tests::Recorder;
    use serde_json::json;
    use test_case::test_case;

    fn fields<'a>(input: Value, sink: &'a dyn DiagnosticSink) -> Fields<'a> {
        match input {
            Value::Object(map) => Fields::new("Test", map, sink),
            _ => Fields::new("Test", Map::new(), sink),
        }
    }

    #[test_case(json!({"compartmentId": "c"}); "wire")]
    #[test_case(json!({"compartment_id": "c"}); "alias")]
    fn take_either_name(input: Value) -> anyhow::Result<()> {
        let mut f = fields(input, &NoDiagnostics);
        let got = f.take::<String>("compartmentId", "compartment_id")?;
        assert_eq!(got.as_deref(), Some("c"));
        Ok(())
    }

    #[test_case(json!({"compartmentId": "c", "compartment_id": "c"}); "same values")]
    #[test_case(json!({"compartmentId": "c", "compartment_id": "d"}); "different values")]
    #[test_case(json!({"compartmentId": null, "compartment_id": 1}); "mixed types")]
    fn take_conflict(input: Value) {
        let mut f = fields(input, &NoDiagnostics);
        let got = f.take::<String>("compartmentId", "compartment_id");
        assert!(
            matches!(
                got,
                Err(BindError::Conflict {
                    model: "Test",
                    wire: "compartmentId",
                    alias: "compartment_id"
                })
            ),
            "{got:?}"
        );
    }

    #[test]
    fn take_same_wire_and_alias() -> anyhow::Result<()> {
        let mut f = fields(json!({"id": "ocid1.x"}), &NoDiagnostics);
        assert_eq!(f.take::<String>("id", "id")?.as_deref(), Some("ocid1.x"));
        Ok(())
    }

    #[test]
    fn take_absent_and_null() -> anyhow::Result<()> {
        let mut f = fields(json!({"displayName": null}), &NoDiagnostics);
        assert_eq!(f.take::<String>("displayName", "display_name")?, None);
        assert_eq!(f.take::<String>("id", "id")?, None);
        Ok(())
    }

    #[test]
    fn take_consumes() -> anyhow::Result<()> {
        let mut f = fields(json!({"id": "a"}), &NoDiagnostics);
        assert!(f.take::<String>("id", "id")?.is_some());
        assert!(f.take::<String>("id", "id")?.is_none());
        Ok(())
    }

    #[test]
    fn take_or_default() -> anyhow::Result<()> {
        let mut f = fields(json!({"variability": 2.5}), &NoDiagnostics);
        assert_eq!(f.take_or("variability", "variability", 1.66)?, Some(2.5));
        assert_eq!(f.take_or("improvedInPct", "improved_in_pct", 20_i64)?, Some(20));
        Ok(())
    }

    #[test]
    fn take_or_malformed() -> anyhow::Result<()> {
        let sink = Recorder::default();
        let mut f = fields(json!({"improvedInPct": "lots"}), &sink);
        assert_eq!(f.take_or("improvedInPct", "improved_in_pct", 20_i64)?, None);
        let malformed = sink.malformed.lock().map(|v| v.len()).unwrap_or_default();
        assert_eq!(malformed, 1);
        Ok(())
    }

    #[test]
    fn take_primitives() -> anyhow::Result<()> {
        let mut f = fields(
            json!({
                "count": 3,
                "integralFloat": 4.0,
                "ratio": 1,
                "enabled": true,
                "timeCreated": "2025-01-02T03:04:05Z",
                "small": 7,
                "free": {"a": [1, 2]},
            }),
            &NoDiagnostics,
        );
        assert_eq!(f.take::<i64>("count", "count")?, Some(3));
        assert_eq!(f.take::<i64>("integralFloat", "integral_float")?, Some(4));
        assert_eq!(f.take::<f64>("ratio", "ratio")?, Some(1.0));
        assert_eq!(f.take::<bool>("enabled", "enabled")?, Some(true));
        let ts = f.take::<OffsetDateTime>("timeCreated", "time_created")?;
        assert_eq!(ts.map(|t| t.unix_timestamp()), Some(1735787045));
        assert_eq!(f.take::<i32>("small", "small")?, Some(7));
        assert_eq!(f.take::<Value>("free", "free")?, Some(json!({"a": [1, 2]})));
        Ok(())
    }

    #[test_case(json!({"v": 1}); "number for string")]
    #[test_case(json!({"v": ["a"]}); "array for string")]
    #[test_case(json!({"v": {"a": 1}}); "object for string")]
    fn take_string_malformed(input: Value) -> anyhow::Result<()> {
        let sink = Recorder::default();
        let mut f = fields(input, &sink);
        assert_eq!(f.take::<String>("v", "v")?, None);
        let malformed = sink.malformed.lock().map(|v| v.clone()).unwrap_or_default();
        assert_eq!(
            malformed,
            vec![("Test".to_string(), "v".to_string(), "a string".to_string())]
        );
        Ok(())
    }

    #[test_case(json!({"v": 1.5}))]
    #[test_case(json!({"v": "1"}))]
    #[test_case(json!({"v": true}))]
    fn take_integer_malformed(input: Value) -> anyhow::Result<()> {
        let mut f = fields(input, &NoDiagnostics);
        assert_eq!(f.take::<i64>("v", "v")?, None);
        Ok(())
    }

    #[test_case(json!({"v": 5_000_000_000_i64}); "above")]
    #[test_case(json!({"v": -3_000_000_000_i64}); "below")]
    #[test_case(json!({"v": 3e9}); "integral float")]
    fn take_i32_out_of_range(input: Value) -> anyhow::Result<()> {
        let sink = Recorder::default();
        let mut f = fields(input, &sink);
        assert_eq!(f.take::<i32>("v", "v")?, None);
        let malformed = sink.malformed.lock().map(|v| v.clone()).unwrap_or_default();
        assert_eq!(
            malformed,
            vec![("Test".to_string(), "v".to_string(), "a 32-bit integer".to_string())]
        );
        Ok(())
    }

    #[test]
    fn take_i32_limits() -> anyhow::Result<()> {
        let sink = Recorder::default();
        let mut f = fields(json!({"max": i32::MAX, "min": i32::MIN, "text": "1"}), &sink);
        assert_eq!(f.take::<i32>("max", "max")?, Some(i32::MAX));
        assert_eq!(f.take::<i32>("min", "min")?, Some(i32::MIN));
        assert_eq!(f.take::<i32>("text", "text")?, None);
        // Only the wrong shape is reported, once.
        let malformed = sink.malformed.lock().map(|v| v.clone()).unwrap_or_default();
        assert_eq!(
            malformed,
            vec![("Test".to_string(), "text".to_string(), "an integer".to_string())]
        );
        Ok(())
    }

    #[test]
    fn take_bad_timestamp() -> anyhow::Result<()> {
        let mut f = fields(json!({"timeCreated": "yesterday"}), &NoDiagnostics);
        assert_eq!(f.take::<OffsetDateTime>("timeCreated", "time_created")?, None);
        Ok(())
    }

    #[test]
    fn take_list() -> anyhow::Result<()> {
        let mut f = fields(
            json!({"items": ["a", 1, "b"], "notAList": "a", "nested": [["x"], "y"]}),
            &NoDiagnostics,
        );
        assert_eq!(f.take_list::<String>("items", "items")?, vec!["a", "b"]);
        assert!(f.take_list::<String>("notAList", "not_a_list")?.is_empty());
        assert!(f.take_list::<String>("absent", "absent")?.is_empty());
        let nested = f.take_list::<Vec<String>>("nested", "nested")?;
        assert_eq!(nested, vec![vec!["x".to_string()]]);
        Ok(())
    }

    #[test]
    fn take_nested_list_malformed() -> anyhow::Result<()> {
        let sink = Recorder::default();
        let mut f = fields(json!({"matrix": [["x"], "y", {"z": 1}]}), &sink);
        let got = f.take_list::<Vec<String>>("matrix", "matrix")?;
        assert_eq!(got, vec![vec!["x".to_string()]]);
        let malformed = sink.malformed.lock().map(|v| v.clone()).unwrap_or_default();
        let want = ("Test".to_string(), "matrix".to_string(), "an array".to_string());
        assert_eq!(malformed, vec![want.clone(), want]);
        Ok(())
    }

    #[test]
    fn take_list_conflict() {
        let mut f = fields(json!({"items": [], "my_items": []}), &NoDiagnostics);
        assert!(f.take_list::<String>("items", "my_items").is_err());
    }

    #[test]
    fn take_map() -> anyhow::Result<()> {
        let mut f = fields(
            json!({"freeformTags": {"a": "1", "b": 2}, "definedTags": "bad"}),
            &NoDiagnostics,
        );
        let tags = f.take_map::<String>("freeformTags", "freeform_tags")?;
        assert_eq!(tags.len(), 1);
        assert_eq!(tags.get("a").map(String::as_str), Some("1"));
        let defined = f.take_map::<HashMap<String, Value>>("definedTags", "defined_tags")?;
        assert!(defined.is_empty());
        Ok(())
    }

    #[test]
    fn peek_and_skip() -> anyhow::Result<()> {
        let mut f = fields(json!({"unitCategory": "CORE"}), &NoDiagnostics);
        assert_eq!(f.peek_str("unitCategory", "unit_category")?, Some("CORE"));
        // Peeking does not consume.
        assert_eq!(f.peek_str("unitCategory", "unit_category")?, Some("CORE"));
        f.skip("unitCategory", "unit_category")?;
        assert_eq!(f.peek_str("unitCategory", "unit_category")?, None);

        let f = fields(
            json!({"unitCategory": "CORE", "unit_category": "CORE"}),
            &NoDiagnostics,
        );
        assert!(f.peek_str("unitCategory", "unit_category").is_err());
        Ok(())
    }

    #[test]
    fn peek_not_a_string() -> anyhow::Result<()> {
        let f = fields(json!({"unitCategory": 7}), &NoDiagnostics);
        assert_eq!(f.peek_str("unitCategory", "unit_category")?, None);
        Ok(())
    }
}
