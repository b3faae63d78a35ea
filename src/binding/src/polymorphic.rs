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

//! Resolves polymorphic families to their concrete subtype.
//!
//! A family is a Rust enum with one variant per concrete subtype, and a
//! base variant used when the discriminator is missing or not recognized.
//! The family implements [Polymorphic], listing its subtypes, and implements
//! [Model] by calling [resolve]:
//!
//! ```
//! # use oci_sdk_binding as binding;
//! # use binding::{Fields, Model, Polymorphic};
//! # use binding::polymorphic::{Binder, subtype};
//! #[derive(Debug, PartialEq)]
//! struct Circle { radius: Option<f64> }
//! impl Model for Circle {
//!     const NAME: &'static str = "Circle";
//!     fn bind(fields: &mut Fields<'_>) -> binding::Result<Self> {
//!         fields.skip("kind", "kind")?;
//!         Ok(Self { radius: fields.take("radius", "radius")? })
//!     }
//! }
//!
//! #[derive(Debug, PartialEq)]
//! struct AnyShape { kind: Option<String> }
//! impl Model for AnyShape {
//!     const NAME: &'static str = "Shape";
//!     fn bind(fields: &mut Fields<'_>) -> binding::Result<Self> {
//!         Ok(Self { kind: fields.take("kind", "kind")? })
//!     }
//! }
//!
//! #[derive(Debug, PartialEq)]
//! enum Shape { Circle(Circle), Base(AnyShape) }
//! impl From<Circle> for Shape { fn from(v: Circle) -> Self { Self::Circle(v) } }
//! impl From<AnyShape> for Shape { fn from(v: AnyShape) -> Self { Self::Base(v) } }
//!
//! impl Polymorphic for Shape {
//!     const DISCRIMINATOR: (&'static str, &'static str) = ("kind", "kind");
//!     const SUBTYPES: &'static [(&'static str, Binder<Self>)] =
//!         &[("CIRCLE", subtype::<Circle, Self>)];
//!     const BASE: Binder<Self> = subtype::<AnyShape, Self>;
//! }
//! impl Model for Shape {
//!     const NAME: &'static str = "Shape";
//!     fn bind(fields: &mut Fields<'_>) -> binding::Result<Self> {
//!         binding::polymorphic::resolve(fields)
//!     }
//! }
//!
//! let got: Shape = binding::from_value(serde_json::json!({"kind": "CIRCLE", "radius": 2.0}))?;
//! assert_eq!(got, Shape::Circle(Circle { radius: Some(2.0) }));
//! let got: Shape = binding::from_value(serde_json::json!({"kind": "SQUARE"}))?;
//! assert_eq!(got, Shape::Base(AnyShape { kind: Some("SQUARE".into()) }));
//! # Ok::<(), binding::BindError>(())
//! ```

use crate::diagnostics::NoDiagnostics;
use crate::{Fields, Model, Result};

/// Binds one variant of a family from the shared input.
pub type Binder<T> = fn(&mut Fields<'_>) -> Result<T>;

/// Describes a polymorphic family.
pub trait Polymorphic: Sized + 'static {
    /// The wire name and canonical alias of the discriminator field.
    const DISCRIMINATOR: (&'static str, &'static str);

    /// Maps each discriminator literal to the binder of its subtype.
    const SUBTYPES: &'static [(&'static str, Binder<Self>)];

    /// Binds the base variant, used for missing or unknown discriminators.
    const BASE: Binder<Self>;
}

/// A [Binder] for the variant wrapping `S`.
pub fn subtype<S, T>(fields: &mut Fields<'_>) -> Result<T>
where
    S: Model + Into<T>,
{
    S::bind(fields).map(Into::into)
}

/// Returns the binder for a discriminator value.
///
/// Matches literals exactly, without case folding or trimming.
pub fn lookup<T: Polymorphic>(tag: Option<&str>) -> Binder<T> {
    tag.and_then(|tag| {
        T::SUBTYPES
            .iter()
            .find(|(literal, _)| *literal == tag)
            .map(|(_, binder)| *binder)
    })
    .unwrap_or(T::BASE)
}

/// Selects the variant using the discriminator, then binds it from the full
/// input.
///
/// Subtype binders must consume the discriminator with [Fields::skip]: the
/// variant determines its value, the input cannot override it.
pub fn resolve<T: Polymorphic>(fields: &mut Fields<'_>) -> Result<T> {
    let (wire, alias) = T::DISCRIMINATOR;
    let binder = lookup::<T>(fields.peek_str(wire, alias)?);
    binder(fields)
}

/// Converts a base value to the family.
///
/// A base value naming a known discriminator would serialize as that subtype
/// and bind back as it, so it is rebound here to the subtype. Values with a
/// missing or unknown discriminator are wrapped by `wrap`.
pub fn from_base<T, B>(base: B, wrap: fn(B) -> T) -> T
where
    T: Polymorphic + Model,
    B: serde::Serialize,
{
    let (wire, _) = T::DISCRIMINATOR;
    let map = match serde_json::to_value(&base) {
        Ok(serde_json::Value::Object(map)) => map,
        _ => return wrap(base),
    };
    let binder = map
        .get(wire)
        .and_then(serde_json::Value::as_str)
        .and_then(|tag| T::SUBTYPES.iter().find(|(literal, _)| *literal == tag))
        .map(|(_, binder)| *binder);
    let Some(binder) = binder else {
        return wrap(base);
    };
    binder(&mut Fields::new(T::NAME, map, &NoDiagnostics)).unwrap_or_else(|_| wrap(base))
}

/// Serializes a subtype adding its discriminator.
///
/// Subtypes do not store their discriminator, the family's `Serialize`
/// implementation uses this function to add it.
pub fn serialize_tagged<S, V>(
    serializer: S,
    wire: &'static str,
    literal: &'static str,
    value: &V,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
    V: serde::Serialize,
{
    use serde::Serialize;
    use serde::ser::Error;
    let mut map = match serde_json::to_value(value).map_err(S::Error::custom)? {
        serde_json::Value::Object(map) => map,
        _ => return Err(S::Error::custom(format!("subtype {literal} is not an object"))),
    };
    map.insert(wire.to_string(), serde_json::Value::from(literal));
    map.serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BindError;
    use serde_json::json;
    use test_case::test_case;

    crate::open_enum! {
        pub enum Category {
            Size = "SIZE",
            Rate = "RATE",
        }
    }

    #[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Common {
        #[serde(skip_serializing_if = "Option::is_none")]
        display_name: Option<String>,
    }
    impl Model for Common {
        const NAME: &'static str = "Unit";
        fn bind(fields: &mut Fields<'_>) -> Result<Self> {
            Ok(Self {
                display_name: fields.take("displayName", "display_name")?,
            })
        }
    }

    #[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct SizeUnit {
        #[serde(flatten)]
        common: Common,
        #[serde(skip_serializing_if = "Option::is_none")]
        bytes: Option<i64>,
    }
    impl Model for SizeUnit {
        const NAME: &'static str = "SizeUnit";
        fn bind(fields: &mut Fields<'_>) -> Result<Self> {
            fields.skip("unitCategory", "unit_category")?;
            Ok(Self {
                common: Common::bind(fields)?,
                bytes: fields.take("bytes", "bytes")?,
            })
        }
    }

    #[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct RateUnit {
        #[serde(flatten)]
        common: Common,
        #[serde(skip_serializing_if = "Option::is_none")]
        numerator: Option<Box<Unit>>,
    }
    impl Model for RateUnit {
        const NAME: &'static str = "RateUnit";
        fn bind(fields: &mut Fields<'_>) -> Result<Self> {
            fields.skip("unitCategory", "unit_category")?;
            Ok(Self {
                common: Common::bind(fields)?,
                numerator: fields.take::<Unit>("numerator", "numerator")?.map(Box::new),
            })
        }
    }

    #[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct BaseUnit {
        #[serde(skip_serializing_if = "Option::is_none")]
        unit_category: Option<Category>,
        #[serde(flatten)]
        common: Common,
    }
    impl Model for BaseUnit {
        const NAME: &'static str = "Unit";
        fn bind(fields: &mut Fields<'_>) -> Result<Self> {
            Ok(Self {
                unit_category: fields.take("unitCategory", "unit_category")?,
                common: Common::bind(fields)?,
            })
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    enum Unit {
        Size(SizeUnit),
        Rate(RateUnit),
        Base(BaseUnit),
    }
    impl From<SizeUnit> for Unit {
        fn from(v: SizeUnit) -> Self {
            Self::Size(v)
        }
    }
    impl From<RateUnit> for Unit {
        fn from(v: RateUnit) -> Self {
            Self::Rate(v)
        }
    }
    impl From<BaseUnit> for Unit {
        fn from(v: BaseUnit) -> Self {
            from_base(v, Self::Base)
        }
    }
    impl Polymorphic for Unit {
        const DISCRIMINATOR: (&'static str, &'static str) = ("unitCategory", "unit_category");
        const SUBTYPES: &'static [(&'static str, Binder<Self>)] = &[
            ("SIZE", subtype::<SizeUnit, Self>),
            ("RATE", subtype::<RateUnit, Self>),
        ];
        const BASE: Binder<Self> = subtype::<BaseUnit, Self>;
    }
    impl Model for Unit {
        const NAME: &'static str = "Unit";
        fn bind(fields: &mut Fields<'_>) -> Result<Self> {
            resolve(fields)
        }
    }
    impl serde::Serialize for Unit {
        fn serialize<S: serde::Serializer>(
            &self,
            serializer: S,
        ) -> std::result::Result<S::Ok, S::Error> {
            match self {
                Self::Size(v) => serialize_tagged(serializer, "unitCategory", "SIZE", v),
                Self::Rate(v) => serialize_tagged(serializer, "unitCategory", "RATE", v),
                Self::Base(v) => v.serialize(serializer),
            }
        }
    }

    #[test_case(json!({"unitCategory": "SIZE", "displayName": "Bytes", "bytes": 8}))]
    #[test_case(json!({"unit_category": "SIZE", "display_name": "Bytes", "bytes": 8}))]
    fn known_subtype(input: serde_json::Value) -> anyhow::Result<()> {
        let got = crate::from_value::<Unit>(input)?;
        let want = Unit::Size(SizeUnit {
            common: Common {
                display_name: Some("Bytes".into()),
            },
            bytes: Some(8),
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case(json!({"displayName": "x"}), None; "missing")]
    #[test_case(json!({"unitCategory": "size", "displayName": "x"}), Some(Category::from("size")); "case mismatch")]
    #[test_case(json!({"unitCategory": "VOLUME", "displayName": "x"}), Some(Category::from("VOLUME")); "unknown")]
    #[test_case(json!({"unitCategory": 7, "displayName": "x"}), None; "not a string")]
    fn base_fallback(input: serde_json::Value, category: Option<Category>) -> anyhow::Result<()> {
        let got = crate::from_value::<Unit>(input)?;
        let want = Unit::Base(BaseUnit {
            unit_category: category,
            common: Common {
                display_name: Some("x".into()),
            },
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn base_ignores_subtype_fields() -> anyhow::Result<()> {
        let got = crate::from_value::<Unit>(json!({"unitCategory": "AREA", "bytes": 8}))?;
        let Unit::Base(base) = got else {
            anyhow::bail!("expected the base variant, got {got:?}");
        };
        assert_eq!(base.common, Common::default());
        Ok(())
    }

    #[test]
    fn discriminator_conflict() {
        let got = crate::from_value::<Unit>(json!({"unitCategory": "SIZE", "unit_category": "RATE"}));
        assert!(
            matches!(got, Err(BindError::Conflict { wire: "unitCategory", .. })),
            "{got:?}"
        );
    }

    #[test]
    fn nested_polymorphic() -> anyhow::Result<()> {
        let input = json!({
            "unitCategory": "RATE",
            "numerator": {"unitCategory": "SIZE", "bytes": 1},
        });
        let got = crate::from_value::<Unit>(input.clone())?;
        let Unit::Rate(rate) = &got else {
            anyhow::bail!("expected the rate variant, got {got:?}");
        };
        assert!(matches!(rate.numerator.as_deref(), Some(Unit::Size(_))));
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn lookup_matches_exactly() -> anyhow::Result<()> {
        let mut fields = crate::Fields::new(
            "Unit",
            serde_json::Map::from_iter([("bytes".to_string(), json!(3))]),
            &crate::diagnostics::NoDiagnostics,
        );
        let got = lookup::<Unit>(Some("SIZE"))(&mut fields)?;
        assert!(matches!(got, Unit::Size(SizeUnit { bytes: Some(3), .. })), "{got:?}");
        let got = lookup::<Unit>(Some("Size"))(&mut fields)?;
        assert!(matches!(got, Unit::Base(_)), "{got:?}");
        Ok(())
    }

    #[test]
    fn serialize_adds_discriminator() -> anyhow::Result<()> {
        let v = Unit::Size(SizeUnit {
            common: Common {
                display_name: Some("Bytes".into()),
            },
            bytes: None,
        });
        let got = serde_json::to_value(&v)?;
        assert_eq!(got, json!({"unitCategory": "SIZE", "displayName": "Bytes"}));
        assert_eq!(crate::from_value::<Unit>(got)?, v);
        Ok(())
    }

    #[test]
    fn base_with_known_category_converts_to_subtype() -> anyhow::Result<()> {
        let base = BaseUnit {
            unit_category: Some(Category::Size),
            common: Common {
                display_name: Some("Bytes".into()),
            },
        };
        let got = Unit::from(base);
        let want = Unit::Size(SizeUnit {
            common: Common {
                display_name: Some("Bytes".into()),
            },
            bytes: None,
        });
        assert_eq!(got, want);
        let rebound: Unit = crate::from_value(serde_json::to_value(&got)?)?;
        assert_eq!(rebound, got);
        Ok(())
    }

    #[test_case(None)]
    #[test_case(Some(Category::from("VOLUME")))]
    fn base_without_known_category_stays(category: Option<Category>) -> anyhow::Result<()> {
        let base = BaseUnit {
            unit_category: category,
            common: Common {
                display_name: Some("Liters".into()),
            },
        };
        let got = Unit::from(base.clone());
        assert_eq!(got, Unit::Base(base));
        let rebound: Unit = crate::from_value(serde_json::to_value(&got)?)?;
        assert_eq!(rebound, got);
        Ok(())
    }
}
