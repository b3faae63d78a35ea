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

/// A request parameter failed local validation.
///
/// The client library checks required parameters and enumerated parameters
/// before making any request. These are programming errors, the requests are
/// never retried.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BindingError {
    /// A required parameter was not set, or set to an empty value.
    #[error("missing required parameter `{0}`")]
    MissingRequiredParameter(&'static str),

    /// An enumerated parameter was set to a value outside its declared set.
    #[error("invalid value {value} for {parameter}, expected one of: {allowed}")]
    InvalidEnumValue {
        parameter: &'static str,
        value: String,
        allowed: String,
    },
}

impl BindingError {
    /// The name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::MissingRequiredParameter(p) => p,
            Self::InvalidEnumValue { parameter, .. } => parameter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing() {
        let e = BindingError::MissingRequiredParameter("productLicenseId");
        assert_eq!(e.parameter(), "productLicenseId");
        assert_eq!(
            e.to_string(),
            "missing required parameter `productLicenseId`"
        );
    }

    #[test]
    fn invalid_enum() {
        let e = BindingError::InvalidEnumValue {
            parameter: "sortOrder",
            value: "SIDEWAYS".into(),
            allowed: "ASC, DESC".into(),
        };
        assert_eq!(e.parameter(), "sortOrder");
        assert_eq!(
            e.to_string(),
            "invalid value SIDEWAYS for sortOrder, expected one of: ASC, DESC"
        );
    }
}
