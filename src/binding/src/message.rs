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

use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::kind_of;
use crate::{BindError, Fields, Result};
use serde_json::Value;

/// A data model that can be bound from a JSON object.
///
/// The implementation calls one `take*` function per field, passing the
/// field's wire name and its canonical alias.
pub trait Model: Sized {
    /// The model name, used in errors and diagnostics.
    const NAME: &'static str;

    fn bind(fields: &mut Fields<'_>) -> Result<Self>;
}

/// Binds `value` to a model, reporting diagnostics via [TracingSink].
pub fn from_value<T: Model>(value: Value) -> Result<T> {
    from_value_with(value, &TracingSink)
}

/// Binds `value` to a model, reporting diagnostics to `sink`.
pub fn from_value_with<T: Model>(value: Value, sink: &dyn DiagnosticSink) -> Result<T> {
    match value {
        Value::Object(map) => T::bind(&mut Fields::new(T::NAME, map, sink)),
        other => Err(BindError::NotAnObject {
            model: T::NAME,
            found: kind_of(&other),
        }),
    }
}

/// Implements [serde::Deserialize] for models using the binder.
///
/// The transport decodes response bodies with serde, this makes them follow
/// the same rules as [from_value].
pub fn deserialize<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Model,
{
    use serde::de::{Deserialize, Error};
    let value = Value::deserialize(deserializer)?;
    from_value(value).map_err(D::Error::custom)
}

/// Hashes the wire representation of `value`.
///
/// The models contain floating point fields, so they cannot derive `Hash`.
/// Values that compare equal have the same wire representation once
/// converted to a [Value], whose objects keep their keys sorted. The one
/// exception is signed zero: `-0.0 == 0.0`, so both hash as zero.
pub fn wire_hash<T, H>(value: &T, state: &mut H)
where
    T: serde::Serialize,
    H: std::hash::Hasher,
{
    if let Ok(v) = serde_json::to_value(value) {
        hash_value(&v, state);
    }
}

fn hash_value<H: std::hash::Hasher>(value: &Value, state: &mut H) {
    use std::hash::Hash;
    std::mem::discriminant(value).hash(state);
    match value {
        Value::Null => {}
        Value::Bool(b) => b.hash(state),
        Value::Number(n) if n.as_f64() == Some(0.0) => 0_u8.hash(state),
        Value::Number(n) => n.to_string().hash(state),
        Value::String(s) => s.hash(state),
        Value::Array(items) => {
            items.len().hash(state);
            items.iter().for_each(|v| hash_value(v, state));
        }
        Value::Object(map) => {
            map.len().hash(state);
            for (k, v) in map {
                k.hash(state);
                hash_value(v, state);
            }
        }
    }
}

/// Implements `serde::Deserialize` (via the binder) and `std::hash::Hash`
/// (via [wire_hash]) for a list of models.
#[macro_export]
macro_rules! model_traits {
    ($($name:ty),+ $(,)?) => {
        $(
            impl<'de> ::serde::de::Deserialize<'de> for $name {
                fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
                where
                    D: ::serde::Deserializer<'de>,
                {
                    $crate::deserialize(deserializer)
                }
            }

            impl ::std::hash::Hash for $name {
                fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                    $crate::wire_hash(self, state)
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::tests::Recorder;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::HashMap;
    use std::hash::{BuildHasher, RandomState};
    use test_case::test_case;
    use time::OffsetDateTime;

    crate::open_enum! {
        pub enum State {
            Active = "ACTIVE",
            Deleted = "DELETED",
        }
    }

    #[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Limits {
        #[serde(skip_serializing_if = "Option::is_none")]
        max_count: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        ratio: Option<f64>,
    }

    impl Model for Limits {
        const NAME: &'static str = "Limits";
        fn bind(fields: &mut Fields<'_>) -> Result<Self> {
            Ok(Self {
                max_count: fields.take("maxCount", "max_count")?,
                ratio: fields.take_or("ratio", "ratio", 0.5)?,
            })
        }
    }

    #[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Resource {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        display_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        lifecycle_state: Option<State>,
        #[serde(
            skip_serializing_if = "Option::is_none",
            serialize_with = "crate::datetime::serialize"
        )]
        time_created: Option<OffsetDateTime>,
        #[serde(skip_serializing_if = "Option::is_none")]
        limits: Option<Limits>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        history: Vec<Limits>,
        #[serde(skip_serializing_if = "HashMap::is_empty")]
        freeform_tags: HashMap<String, String>,
    }

    impl Model for Resource {
        const NAME: &'static str = "Resource";
        fn bind(fields: &mut Fields<'_>) -> Result<Self> {
            Ok(Self {
                id: fields.take("id", "id")?,
                display_name: fields.take("displayName", "display_name")?,
                lifecycle_state: fields.take("lifecycleState", "lifecycle_state")?,
                time_created: fields.take("timeCreated", "time_created")?,
                limits: fields.take("limits", "limits")?,
                history: fields.take_list("history", "history")?,
                freeform_tags: fields.take_map("freeformTags", "freeform_tags")?,
            })
        }
    }

    crate::model_traits!(Limits, Resource);

    fn full() -> Value {
        json!({
            "id": "ocid1.resource",
            "displayName": "name",
            "lifecycleState": "ACTIVE",
            "timeCreated": "2025-01-02T03:04:05Z",
            "limits": {"maxCount": 7, "ratio": 0.25},
            "history": [{"maxCount": 1, "ratio": 0.5}],
            "freeformTags": {"team": "sdk"},
        })
    }

    #[test]
    fn bind_full() -> anyhow::Result<()> {
        let got = from_value::<Resource>(full())?;
        assert_eq!(got.id.as_deref(), Some("ocid1.resource"));
        assert_eq!(got.lifecycle_state, Some(State::Active));
        assert_eq!(
            got.limits,
            Some(Limits {
                max_count: Some(7),
                ratio: Some(0.25)
            })
        );
        assert_eq!(got.history.len(), 1);
        assert_eq!(
            got.freeform_tags.get("team").map(String::as_str),
            Some("sdk")
        );
        Ok(())
    }

    #[test_case("id", "id", json!("a"))]
    #[test_case("displayName", "display_name", json!("n"))]
    #[test_case("lifecycleState", "lifecycle_state", json!("DELETED"))]
    #[test_case("timeCreated", "time_created", json!("2025-01-02T03:04:05Z"))]
    #[test_case("limits", "limits", json!({"maxCount": 2}))]
    #[test_case("history", "history", json!([{"ratio": 0.1}]))]
    #[test_case("freeformTags", "freeform_tags", json!({"a": "b"}))]
    fn wire_and_alias_are_equivalent(
        wire: &str,
        alias: &str,
        value: Value,
    ) -> anyhow::Result<()> {
        let by_wire = from_value::<Resource>(json!({ wire: value.clone() }))?;
        let by_alias = from_value::<Resource>(json!({ alias: value.clone() }))?;
        assert_eq!(by_wire, by_alias);
        if wire != alias {
            let both = from_value::<Resource>(json!({ wire: value.clone(), alias: value }));
            assert!(
                matches!(both, Err(BindError::Conflict { .. })),
                "{both:?}"
            );
        }
        Ok(())
    }

    #[test]
    fn nested_conflict_fails() {
        let input = json!({"history": [{"maxCount": 1, "max_count": 1}]});
        let got = from_value::<Resource>(input);
        assert!(
            matches!(got, Err(BindError::Conflict { model: "Limits", .. })),
            "{got:?}"
        );
    }

    #[test]
    fn defaults_in_nested() -> anyhow::Result<()> {
        let got = from_value::<Resource>(json!({"limits": {}}))?;
        assert_eq!(got.limits.and_then(|l| l.ratio), Some(0.5));
        Ok(())
    }

    #[test]
    fn permissive() -> anyhow::Result<()> {
        let sink = Recorder::default();
        let input = json!({
            "id": "a",
            "lifecycleState": "ARCHIVED",
            "limits": "not an object",
            "history": {"not": "a list"},
            "unknownField": 42,
        });
        let got = from_value_with::<Resource>(input, &sink)?;
        assert_eq!(got.id.as_deref(), Some("a"));
        assert_eq!(got.lifecycle_state, Some(State::from("ARCHIVED")));
        assert_eq!(got.limits, None);
        assert!(got.history.is_empty());
        let unknown = sink.unknown.lock().map(|v| v.len()).unwrap_or_default();
        assert_eq!(unknown, 1);
        let malformed = sink.malformed.lock().map(|v| v.len()).unwrap_or_default();
        assert_eq!(malformed, 2);
        Ok(())
    }

    #[test_case(json!(null))]
    #[test_case(json!([{"id": "a"}]))]
    #[test_case(json!("a"))]
    fn not_an_object(input: Value) {
        let got = from_value::<Resource>(input);
        assert!(
            matches!(got, Err(BindError::NotAnObject { model: "Resource", .. })),
            "{got:?}"
        );
    }

    #[test]
    fn round_trip() -> anyhow::Result<()> {
        let got = from_value::<Resource>(full())?;
        let wire = serde_json::to_value(&got)?;
        assert_eq!(wire, full());
        let again = from_value::<Resource>(wire)?;
        assert_eq!(again, got);
        Ok(())
    }

    #[test]
    fn serde_uses_binder() -> anyhow::Result<()> {
        let got = serde_json::from_value::<Resource>(json!({"display_name": "n"}))?;
        assert_eq!(got.display_name.as_deref(), Some("n"));
        let got =
            serde_json::from_value::<Resource>(json!({"displayName": "n", "display_name": "n"}));
        assert!(got.is_err(), "{got:?}");
        let got = serde_json::from_str::<Resource>(r#"{"limits": {}}"#)?;
        assert_eq!(got.limits.and_then(|l| l.ratio), Some(0.5));
        Ok(())
    }

    #[test]
    fn equal_inputs_equal_hashes() -> anyhow::Result<()> {
        let a = from_value::<Resource>(full())?;
        let b = from_value::<Resource>(full())?;
        assert_eq!(a, b);
        let state = RandomState::new();
        assert_eq!(state.hash_one(&a), state.hash_one(&b));

        let c = from_value::<Resource>(json!({"id": "other"}))?;
        assert_ne!(a, c);
        assert_ne!(state.hash_one(&a), state.hash_one(&c));
        Ok(())
    }

    #[test]
    fn signed_zero_hashes_equal() {
        let positive = Limits {
            max_count: None,
            ratio: Some(0.0),
        };
        let negative = Limits {
            max_count: None,
            ratio: Some(-0.0),
        };
        assert_eq!(positive, negative);
        let state = RandomState::new();
        assert_eq!(state.hash_one(&positive), state.hash_one(&negative));

        let nested = |ratio| Resource {
            history: vec![Limits {
                max_count: Some(1),
                ratio: Some(ratio),
            }],
            ..Default::default()
        };
        assert_eq!(nested(0.0), nested(-0.0));
        assert_eq!(state.hash_one(nested(0.0)), state.hash_one(nested(-0.0)));
        assert_ne!(state.hash_one(nested(0.0)), state.hash_one(nested(0.5)));
    }

    #[test_case(json!([1, 2]), json!([[1, 2]]); "nesting")]
    #[test_case(json!({"a": "b"}), json!(["a", "b"]); "object and array")]
    #[test_case(json!("1"), json!(1); "string and number")]
    fn different_shapes_hash_differently(a: Value, b: Value) {
        let state = RandomState::new();
        let hash = |v: &Value| {
            let mut h = state.build_hasher();
            hash_value(v, &mut h);
            std::hash::Hasher::finish(&h)
        };
        assert_ne!(hash(&a), hash(&b));
    }
}
