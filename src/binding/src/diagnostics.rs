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

//! Receives the non-fatal findings of the binder.
//!
//! The binder never fails on data it can degrade. It reports what it
//! degraded to a [DiagnosticSink] passed to
//! [from_value_with][crate::from_value_with]. Applications that do not care
//! can use [NoDiagnostics], the default is [TracingSink].

/// A sink for the non-fatal findings of the binder.
///
/// Implementations must not assume they are called at most once per field,
/// collections report each element.
pub trait DiagnosticSink: std::fmt::Debug + Send + Sync {
    /// A string enum field had a value outside its declared set.
    ///
    /// The field was bound to the `UnknownValue` sentinel.
    fn unknown_enum_value(&self, model: &str, field: &str, value: &str);

    /// A field had a JSON value of the wrong type and was left unset.
    fn malformed_value(&self, model: &str, field: &str, expected: &str) {
        let _ = (model, field, expected);
    }
}

/// Forwards diagnostics to [tracing].
///
/// Unknown enum values are logged at `WARN` level, malformed values at
/// `DEBUG` level. Nothing is logged if there is no subscriber.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn unknown_enum_value(&self, model: &str, field: &str, value: &str) {
        tracing::warn!(
            model,
            field,
            value,
            "unknown enum value, the field is set to the UnknownValue sentinel"
        );
    }

    fn malformed_value(&self, model: &str, field: &str, expected: &str) {
        tracing::debug!(model, field, expected, "malformed value, the field is unset");
    }
}

/// Discards all diagnostics.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDiagnostics;

impl DiagnosticSink for NoDiagnostics {
    fn unknown_enum_value(&self, _model: &str, _field: &str, _value: &str) {}
}
