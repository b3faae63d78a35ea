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

//! Decide which failed requests are sent again.
//!
//! Retries are opt-in: a client without a retry policy sends each request
//! once. Applications enable them with [RetryConfiguration], on the client
//! builder or per request:
//!
//! ```
//! # use oci_sdk_gax::retry_policy::*;
//! use std::time::Duration;
//! let policy = RetryConfiguration::new()
//!     .with_max_attempts(4)
//!     .with_max_elapsed(Duration::from_secs(60));
//! assert_eq!(policy.time_budget(), Some(Duration::from_secs(60)));
//! ```
//!
//! The default condition follows the other OCI SDKs. Throttled requests
//! (`429`) and requests rejected with `409 IncorrectState` never took effect,
//! so they are retried for every operation. Timeouts, broken connections, and
//! `5xx` responses other than `501` are retried only for idempotent requests.

use crate::error::Error;
use std::time::Duration;

/// The service error code for a resource in the wrong lifecycle state.
pub const INCORRECT_STATE: &str = "IncorrectState";

/// The state of a retry loop when a request attempt fails.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct RetryState {
    /// The number of attempts so far, including the one that just failed.
    pub attempt_count: u32,
    /// The time since the first attempt started.
    pub elapsed: Duration,
    /// Whether the request is safe to send more than once.
    pub idempotent: bool,
}

impl RetryState {
    pub fn new(attempt_count: u32, elapsed: Duration, idempotent: bool) -> Self {
        Self {
            attempt_count,
            elapsed,
            idempotent,
        }
    }
}

/// The decision of a [RetryPolicy] about a failed attempt.
#[derive(Debug)]
pub enum RetryResult {
    /// The error cannot be retried. Return it to the caller.
    Permanent(Error),
    /// The error could be retried, but the policy limits are reached.
    Exhausted(Error),
    /// Send the request again, after the backoff delay.
    Continue(Error),
}

/// Implementations decide if a failed request is retried.
///
/// # Example
/// ```
/// # use oci_sdk_gax::error::Error;
/// # use oci_sdk_gax::retry_policy::*;
/// /// Retries throttled requests, up to ten attempts.
/// #[derive(Debug)]
/// struct Throttled;
/// impl RetryPolicy for Throttled {
///     fn on_error(&self, state: &RetryState, error: Error) -> RetryResult {
///         match error.http_status_code() {
///             Some(429) if state.attempt_count < 10 => RetryResult::Continue(error),
///             Some(429) => RetryResult::Exhausted(error),
///             _ => RetryResult::Permanent(error),
///         }
///     }
/// }
/// ```
pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// Called after each failed attempt.
    fn on_error(&self, state: &RetryState, error: Error) -> RetryResult;

    /// The longest the retry loop may run, measured from the first attempt.
    ///
    /// The retry loop bounds each attempt's timeout by the time left, and
    /// stops before a backoff delay that would end past the budget.
    fn time_budget(&self) -> Option<Duration> {
        None
    }
}

/// Returns true if the default OCI condition retries `error`.
pub fn is_retryable(error: &Error, idempotent: bool) -> bool {
    never_processed(error) || (idempotent && transient(error))
}

fn never_processed(error: &Error) -> bool {
    match error.http_status_code() {
        Some(429) => true,
        Some(409) => error.status().is_some_and(|s| s.code == INCORRECT_STATE),
        _ => false,
    }
}

fn transient(error: &Error) -> bool {
    if error.is_io() || error.is_timeout() {
        return true;
    }
    error
        .http_status_code()
        .is_some_and(|code| code >= 500 && code != 501)
}

/// Retries on the default OCI condition, within an attempt and a time limit.
///
/// The defaults (8 attempts, 600 seconds) match the default retry
/// configuration of the other OCI SDKs.
#[derive(Clone, Debug, PartialEq)]
pub struct RetryConfiguration {
    max_attempts: u32,
    max_elapsed: Option<Duration>,
}

impl RetryConfiguration {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 8;
    pub const DEFAULT_MAX_ELAPSED: Duration = Duration::from_secs(600);

    pub fn new() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            max_elapsed: Some(Self::DEFAULT_MAX_ELAPSED),
        }
    }

    /// Sets the total number of attempts, including the first one.
    ///
    /// Values below 1 are treated as 1, that is, no retries.
    pub fn with_max_attempts(mut self, v: u32) -> Self {
        self.max_attempts = v.max(1);
        self
    }

    /// Sets the time budget of the retry loop.
    pub fn with_max_elapsed(mut self, v: Duration) -> Self {
        self.max_elapsed = Some(v);
        self
    }

    /// Removes the time budget, only the attempt limit applies.
    pub fn without_time_limit(mut self) -> Self {
        self.max_elapsed = None;
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

impl Default for RetryConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryPolicy for RetryConfiguration {
    fn on_error(&self, state: &RetryState, error: Error) -> RetryResult {
        if !is_retryable(&error, state.idempotent) {
            return RetryResult::Permanent(error);
        }
        let out_of_time = self.max_elapsed.is_some_and(|limit| state.elapsed >= limit);
        if state.attempt_count >= self.max_attempts || out_of_time {
            return RetryResult::Exhausted(Error::exhausted(error));
        }
        RetryResult::Continue(error)
    }

    fn time_budget(&self) -> Option<Duration> {
        self.max_elapsed
    }
}

/// Never retries.
///
/// Use it on a single request to override a client-wide retry policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverRetry;

impl RetryPolicy for NeverRetry {
    fn on_error(&self, _state: &RetryState, error: Error) -> RetryResult {
        RetryResult::Permanent(error)
    }
}
