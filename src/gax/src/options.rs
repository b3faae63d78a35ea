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

//! Per-request options.
//!
//! Every operation builder implements [RequestOptionsBuilder]. Applications
//! use it to tag a call with an `opc-request-id`, the identifier OCI support
//! asks for when troubleshooting, to bound each attempt with a timeout, or to
//! override the client's retry settings for one call.
//!
//! ```
//! # use oci_sdk_gax::options::RequestOptions;
//! # use oci_sdk_gax::retry_policy::NeverRetry;
//! let mut options = RequestOptions::default();
//! options.set_opc_request_id("inventory-sync-0042");
//! options.set_retry_policy(NeverRetry);
//! assert_eq!(options.opc_request_id(), Some("inventory-sync-0042"));
//! assert!(options.retry_policy().is_some());
//! ```

use crate::backoff_policy::BackoffPolicy;
use crate::retry_policy::RetryPolicy;
use crate::signer::SigningStrategy;
use std::sync::Arc;
use std::time::Duration;

/// The options of a single request.
///
/// Most code sets these through the operation builders. Mocks receive them
/// as the last argument of each stub method.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    idempotent: Option<bool>,
    user_agent: Option<String>,
    attempt_timeout: Option<Duration>,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    opc_request_id: Option<String>,
    signing_strategy: SigningStrategy,
}

impl RequestOptions {
    /// Whether the request is safe to send more than once, if known.
    ///
    /// The generated clients default this to `true`: reads are naturally
    /// idempotent, updates and deletes carry `if-match` when the caller sets
    /// it, and creates always carry an `opc-retry-token`.
    pub fn idempotent(&self) -> Option<bool> {
        self.idempotent
    }

    pub fn set_idempotency(&mut self, value: bool) {
        self.idempotent = Some(value);
    }

    /// The prefix added to the `user-agent` header.
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// The timeout of each attempt.
    ///
    /// With a retry policy, the retry loop may shorten it so the attempt ends
    /// within the policy's time budget.
    pub fn attempt_timeout(&self) -> Option<Duration> {
        self.attempt_timeout
    }

    pub fn set_attempt_timeout(&mut self, v: Duration) {
        self.attempt_timeout = Some(v);
    }

    /// The retry policy for this request, overriding the client's.
    pub fn retry_policy(&self) -> Option<&Arc<dyn RetryPolicy>> {
        self.retry_policy.as_ref()
    }

    pub fn set_retry_policy<P: RetryPolicy + 'static>(&mut self, v: P) {
        self.retry_policy = Some(Arc::new(v));
    }

    /// The backoff policy for this request, overriding the client's.
    pub fn backoff_policy(&self) -> Option<&Arc<dyn BackoffPolicy>> {
        self.backoff_policy.as_ref()
    }

    pub fn set_backoff_policy<P: BackoffPolicy + 'static>(&mut self, v: P) {
        self.backoff_policy = Some(Arc::new(v));
    }

    /// The `opc-request-id` header. The service generates one when unset.
    pub fn opc_request_id(&self) -> Option<&str> {
        self.opc_request_id.as_deref()
    }

    pub fn set_opc_request_id<T: Into<String>>(&mut self, v: T) {
        self.opc_request_id = Some(v.into());
    }

    /// Which parts of the request the signer covers.
    pub fn signing_strategy(&self) -> SigningStrategy {
        self.signing_strategy
    }
}

/// Request option setters for the operation builders.
///
/// ```
/// # use oci_sdk_gax::options::{RequestOptions, RequestOptionsBuilder, internal};
/// # #[derive(Default)]
/// # struct GetProductLicense(RequestOptions);
/// # impl internal::RequestBuilder for GetProductLicense {
/// #     fn request_options(&mut self) -> &mut RequestOptions { &mut self.0 }
/// # }
/// use std::time::Duration;
/// let builder = GetProductLicense::default()
///     .with_opc_request_id("inventory-sync-0042")
///     .with_attempt_timeout(Duration::from_secs(20));
/// ```
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    fn with_idempotency(self, v: bool) -> Self;

    /// Prefixes the `user-agent` header, e.g. with the application name.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    fn with_attempt_timeout(self, v: Duration) -> Self;

    fn with_retry_policy<P: RetryPolicy + 'static>(self, v: P) -> Self;

    fn with_backoff_policy<P: BackoffPolicy + 'static>(self, v: P) -> Self;

    fn with_opc_request_id<V: Into<String>>(self, v: V) -> Self;
}

impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_idempotency(mut self, v: bool) -> Self {
        self.request_options().set_idempotency(v);
        self
    }

    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout(mut self, v: Duration) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_retry_policy<P: RetryPolicy + 'static>(mut self, v: P) -> Self {
        self.request_options().set_retry_policy(v);
        self
    }

    fn with_backoff_policy<P: BackoffPolicy + 'static>(mut self, v: P) -> Self {
        self.request_options().set_backoff_policy(v);
        self
    }

    fn with_opc_request_id<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_opc_request_id(v);
        self
    }
}

#[doc(hidden)]
pub mod internal {
    //! Used by the generated clients. Not part of the public API.
    use super::RequestOptions;
    use crate::signer::SigningStrategy;

    /// Gives [super::RequestOptionsBuilder] access to a builder's options.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }

    /// Sets the idempotency unless the caller already did.
    pub fn set_default_idempotency(mut options: RequestOptions, default: bool) -> RequestOptions {
        options.idempotent.get_or_insert(default);
        options
    }

    pub fn set_signing_strategy(
        mut options: RequestOptions,
        strategy: SigningStrategy,
    ) -> RequestOptions {
        options.signing_strategy = strategy;
        options
    }
}

#[cfg(test)]
mod tests {
    use super::internal::RequestBuilder as _;
    use super::*;
    use crate::backoff_policy::ExponentialBackoff;
    use crate::retry_policy::{NeverRetry, RetryConfiguration};
    use test_case::test_case;

    #[derive(Debug, Default)]
    struct GetThing {
        options: RequestOptions,
    }

    impl internal::RequestBuilder for GetThing {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    #[test]
    fn defaults() {
        let options = RequestOptions::default();
        assert_eq!(options.idempotent(), None);
        assert_eq!(options.user_agent(), None);
        assert_eq!(options.attempt_timeout(), None);
        assert!(options.retry_policy().is_none(), "{options:?}");
        assert!(options.backoff_policy().is_none(), "{options:?}");
        assert_eq!(options.opc_request_id(), None);
        assert_eq!(options.signing_strategy(), SigningStrategy::Standard);
    }

    #[test]
    fn setters() {
        let mut options = RequestOptions::default();
        options.set_idempotency(false);
        options.set_user_agent("inventory-sync/2.1");
        options.set_attempt_timeout(Duration::from_secs(20));
        options.set_retry_policy(RetryConfiguration::new().with_max_attempts(3));
        options.set_backoff_policy(ExponentialBackoff::default());
        options.set_opc_request_id("req-1");

        assert_eq!(options.idempotent(), Some(false));
        assert_eq!(options.user_agent(), Some("inventory-sync/2.1"));
        assert_eq!(options.attempt_timeout(), Some(Duration::from_secs(20)));
        assert!(options.retry_policy().is_some(), "{options:?}");
        assert!(options.backoff_policy().is_some(), "{options:?}");
        assert_eq!(options.opc_request_id(), Some("req-1"));
    }

    #[test_case(None, true, Some(true))]
    #[test_case(None, false, Some(false))]
    #[test_case(Some(false), true, Some(false); "caller choice wins")]
    #[test_case(Some(true), false, Some(true))]
    fn default_idempotency(caller: Option<bool>, default: bool, want: Option<bool>) {
        let mut options = RequestOptions::default();
        if let Some(v) = caller {
            options.set_idempotency(v);
        }
        let options = internal::set_default_idempotency(options, default);
        assert_eq!(options.idempotent(), want);
    }

    #[test]
    fn signing_strategy() {
        let options =
            internal::set_signing_strategy(RequestOptions::default(), SigningStrategy::ExcludeBody);
        assert_eq!(options.signing_strategy(), SigningStrategy::ExcludeBody);
    }

    #[test]
    fn builder() {
        let mut builder = GetThing::default()
            .with_idempotency(true)
            .with_user_agent("inventory-sync/2.1")
            .with_attempt_timeout(Duration::from_secs(5))
            .with_retry_policy(NeverRetry)
            .with_backoff_policy(ExponentialBackoff::default())
            .with_opc_request_id("req-2");
        let options = builder.request_options();
        assert_eq!(options.idempotent(), Some(true));
        assert_eq!(options.user_agent(), Some("inventory-sync/2.1"));
        assert_eq!(options.attempt_timeout(), Some(Duration::from_secs(5)));
        assert!(options.retry_policy().is_some(), "{options:?}");
        assert!(options.backoff_policy().is_some(), "{options:?}");
        assert_eq!(options.opc_request_id(), Some("req-2"));
    }

    #[test]
    fn builder_keeps_last_value() {
        let mut builder = GetThing::default()
            .with_opc_request_id("first")
            .with_opc_request_id("second");
        assert_eq!(builder.request_options().opc_request_id(), Some("second"));
    }
}
