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

//! Implements common code for string enumerations.
//!
//! The services add enum values over time. An older SDK receiving a newer
//! value must keep working, so every enum in the models is *open*: it has a
//! variant per declared value plus `UnknownValue(UnknownEnumValue)`, which
//! keeps the text received from the service.
//!
//! ```
//! # use oci_sdk_binding as binding;
//! binding::open_enum! {
//!     /// The sort order to use.
//!     pub enum SortOrder {
//!         Asc = "ASC",
//!         Desc = "DESC",
//!     }
//! }
//! assert_eq!(SortOrder::from("ASC"), SortOrder::Asc);
//! let unknown = SortOrder::from("SIDEWAYS");
//! assert!(unknown.is_unknown());
//! assert_eq!(unknown.name(), "SIDEWAYS");
//! assert_eq!(binding::enumerations::allowed::<SortOrder>(), "ASC, DESC");
//! ```

use crate::Result;
use crate::fields::Slot;
use serde_json::Value;

/// The value of an open enum when the service sent an undeclared value.
///
/// Keeps the original text, so the value round-trips unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnknownEnumValue(String);

impl UnknownEnumValue {
    /// The reserved literal used to display unrecognized values.
    pub const SENTINEL: &'static str = "UNKNOWN_ENUM_VALUE";

    pub fn new<T: Into<String>>(value: T) -> Self {
        Self(value.into())
    }

    /// The text received from the service.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl serde::ser::Serialize for UnknownEnumValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl std::fmt::Display for UnknownEnumValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", Self::SENTINEL, self.0)
    }
}

/// Implemented by all the open enums.
pub trait OpenEnum: Sized {
    /// The name of the enum type, used in error messages.
    const NAME: &'static str;

    /// The declared values, in declaration order.
    const VALUES: &'static [&'static str];

    /// The value of a declared variant, or the received text for
    /// `UnknownValue`.
    fn name(&self) -> &str;

    /// Returns true for the `UnknownValue` variant.
    fn is_unknown(&self) -> bool;
}

/// Formats the declared values of an enum, as used in error messages.
pub fn allowed<E: OpenEnum>() -> String {
    E::VALUES.join(", ")
}

/// Binds an open enum field.
///
/// Strings outside the declared set become the sentinel and are reported to
/// the diagnostic sink. Empty strings are treated as absent.
pub fn bind_value<E>(value: Value, slot: &Slot<'_>) -> Result<Option<E>>
where
    E: OpenEnum + for<'a> From<&'a str>,
{
    match value {
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => {
            let v = E::from(s.as_str());
            if v.is_unknown() {
                slot.sink.unknown_enum_value(slot.model, slot.field, &s);
            }
            Ok(Some(v))
        }
        _ => {
            slot.malformed("a string");
            Ok(None)
        }
    }
}

/// A [serde::de::Visitor] for open enums.
///
/// Used when an open enum is deserialized directly, without the binder.
#[derive(Clone, Debug, Default)]
pub struct EnumVisitor<T> {
    _unused: std::marker::PhantomData<T>,
}

impl<T> EnumVisitor<T> {
    pub fn new() -> Self {
        Self {
            _unused: std::marker::PhantomData,
        }
    }
}

impl<T> serde::de::Visitor<'_> for EnumVisitor<T>
where
    T: OpenEnum + for<'a> From<&'a str>,
{
    type Value = T;

    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(T::from(value))
    }

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "a {} enum value", T::NAME)
    }
}

/// Declares an open enum.
///
/// Generates the enum with an `UnknownValue` variant, the conversions from
/// strings, [OpenEnum], [Bindable][crate::Bindable], `Display`, and the serde
/// traits.
#[macro_export]
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// The service sent a value this version of the SDK does not
            /// know about.
            UnknownValue($crate::enumerations::UnknownEnumValue),
        }

        impl $name {
            /// Gets the string representation of the enum.
            pub fn name(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )+
                    Self::UnknownValue(u) => u.name(),
                }
            }

            /// Returns true if the value is not one of the declared values.
            pub fn is_unknown(&self) -> bool {
                matches!(self, Self::UnknownValue(_))
            }
        }

        impl $crate::enumerations::OpenEnum for $name {
            const NAME: &'static str = stringify!($name);
            const VALUES: &'static [&'static str] = &[$( $value, )+];

            fn name(&self) -> &str {
                $name::name(self)
            }

            fn is_unknown(&self) -> bool {
                $name::is_unknown(self)
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $value => Self::$variant, )+
                    _ => Self::UnknownValue($crate::enumerations::UnknownEnumValue::new(value)),
                }
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(value: ::std::string::String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    Self::UnknownValue(u) => ::std::fmt::Display::fmt(u, f),
                    _ => f.write_str(self.name()),
                }
            }
        }

        impl $crate::Bindable for $name {
            fn bind_value(
                value: ::serde_json::Value,
                slot: &$crate::Slot<'_>,
            ) -> $crate::Result<::std::option::Option<Self>> {
                $crate::enumerations::bind_value(value, slot)
            }
        }

        impl ::serde::ser::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> ::serde::de::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                deserializer.deserialize_str($crate::enumerations::EnumVisitor::<$name>::new())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NoDiagnostics;
    use crate::diagnostics::tests::Recorder;
    use serde_json::json;
    use test_case::test_case;

    crate::open_enum! {
        /// Used to drive the tests.
        pub enum FakeEnum {
            /// Red.
            Red = "RED",
            Green = "GREEN",
            DarkBlue = "DARK_BLUE",
        }
    }

    #[test]
    fn unknown_enum_value() -> anyhow::Result<()> {
        let u = UnknownEnumValue::new("PURPLE");
        assert_eq!(u.name(), "PURPLE");
        assert_eq!(u.to_string(), "UNKNOWN_ENUM_VALUE(PURPLE)");
        assert_eq!(serde_json::to_value(&u)?, json!("PURPLE"));
        Ok(())
    }

    #[test_case("RED", FakeEnum::Red)]
    #[test_case("GREEN", FakeEnum::Green)]
    #[test_case("DARK_BLUE", FakeEnum::DarkBlue)]
    fn known(input: &str, want: FakeEnum) -> anyhow::Result<()> {
        let got = FakeEnum::from(input);
        assert_eq!(got, want);
        assert!(!got.is_unknown());
        assert_eq!(got.name(), input);
        assert_eq!(got.to_string(), input);
        assert_eq!(serde_json::to_value(&got)?, json!(input));
        assert_eq!(serde_json::from_value::<FakeEnum>(json!(input))?, want);
        Ok(())
    }

    #[test_case("red"; "case matters")]
    #[test_case(" RED"; "no trimming")]
    #[test_case("PURPLE"; "undeclared")]
    fn unknown(input: &str) -> anyhow::Result<()> {
        let got = FakeEnum::from(input);
        assert!(got.is_unknown(), "{got:?}");
        assert_eq!(got, FakeEnum::UnknownValue(UnknownEnumValue::new(input)));
        assert_eq!(got.name(), input);
        // Unknown values round trip.
        assert_eq!(serde_json::to_value(&got)?, json!(input));
        assert_eq!(serde_json::from_value::<FakeEnum>(json!(input))?, got);
        Ok(())
    }

    #[test]
    fn metadata() {
        assert_eq!(<FakeEnum as OpenEnum>::NAME, "FakeEnum");
        assert_eq!(FakeEnum::VALUES, &["RED", "GREEN", "DARK_BLUE"]);
        assert_eq!(allowed::<FakeEnum>(), "RED, GREEN, DARK_BLUE");
        assert_eq!(FakeEnum::from(String::from("GREEN")), FakeEnum::Green);
    }

    #[test]
    fn bind_known_and_unknown() -> anyhow::Result<()> {
        let sink = Recorder::default();
        let slot = Slot {
            model: "Model",
            field: "color",
            sink: &sink,
        };
        let got = bind_value::<FakeEnum>(json!("RED"), &slot)?;
        assert_eq!(got, Some(FakeEnum::Red));
        let got = bind_value::<FakeEnum>(json!("PURPLE"), &slot)?;
        assert_eq!(
            got,
            Some(FakeEnum::UnknownValue(UnknownEnumValue::new("PURPLE")))
        );
        let unknown = sink.unknown.lock().map(|v| v.clone()).unwrap_or_default();
        assert_eq!(
            unknown,
            vec![(
                "Model".to_string(),
                "color".to_string(),
                "PURPLE".to_string()
            )]
        );
        Ok(())
    }

    #[test_case(json!(""); "empty string")]
    #[test_case(json!(1); "number")]
    #[test_case(json!({"a": "RED"}); "object")]
    fn bind_absent_or_malformed(input: Value) -> anyhow::Result<()> {
        let slot = Slot {
            model: "Model",
            field: "color",
            sink: &NoDiagnostics,
        };
        assert_eq!(bind_value::<FakeEnum>(input, &slot)?, None);
        Ok(())
    }

    #[test]
    fn deserialize_rejects_non_strings() {
        let got = serde_json::from_value::<FakeEnum>(json!(7));
        assert!(got.is_err(), "{got:?}");
    }
}
