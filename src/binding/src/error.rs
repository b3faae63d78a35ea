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

/// The errors returned while binding a JSON value to a model.
///
/// Binding is permissive: unknown enum values, malformed optional data, and
/// missing fields never fail. Only ambiguous inputs do.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BindError {
    /// The input names the same field twice, once with its wire name and
    /// once with its canonical alias.
    #[error("cannot specify both `{wire}` and `{alias}` for {model}")]
    Conflict {
        model: &'static str,
        wire: &'static str,
        alias: &'static str,
    },

    /// The value to bind must be a JSON object.
    #[error("expected a JSON object for {model}, got {found}")]
    NotAnObject {
        model: &'static str,
        found: &'static str,
    },
}

impl BindError {
    /// Returns true if the input used both the wire name and the alias of a
    /// field.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
