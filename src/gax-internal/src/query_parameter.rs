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

use binding::enumerations::{OpenEnum, allowed};
use gax::error::{Error, binding::BindingError};

/// Rejects enumerated parameters set to undeclared values.
///
/// Requests are models, so their enum fields may hold the `UnknownValue`
/// variant. The service would reject those values, the client library
/// rejects them before making the request.
pub fn check_enum<E: OpenEnum>(value: Option<&E>, name: &'static str) -> gax::Result<()> {
    match value {
        Some(v) if v.is_unknown() => Err(Error::binding(BindingError::InvalidEnumValue {
            parameter: name,
            value: v.name().to_string(),
            allowed: allowed::<E>(),
        })),
        _ => Ok(()),
    }
}

/// Adds the value of a request field to the query string.
#[cfg(feature = "_internal-http-client")]
pub trait QueryParameter {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder;
}

#[cfg(feature = "_internal-http-client")]
impl<T: serde::Serialize> QueryParameter for Option<T> {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        match self {
            None => builder,
            Some(v) => builder.query(&[(name, v)]),
        }
    }
}

/// Repeated parameters use one `name=value` pair per element.
#[cfg(feature = "_internal-http-client")]
impl<T: serde::Serialize> QueryParameter for Vec<T> {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        self.into_iter()
            .fold(builder, |builder, v| builder.query(&[(name, v)]))
    }
}
