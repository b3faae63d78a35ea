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

use crate::Result;
use crate::backoff_policy::BackoffPolicy;
use crate::error::Error;
use crate::options::RequestOptions;
use crate::retry_policy::{RetryPolicy, RetryResult, RetryState};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Sends a request until it succeeds or the retry policy gives up.
///
/// `attempt` receives the time left in the policy's budget, if any. Between
/// attempts the loop waits the backoff delay using `sleep`.
pub async fn retry_loop<F, S, T>(
    mut attempt: F,
    sleep: S,
    idempotent: bool,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
) -> Result<T>
where
    F: AsyncFnMut(Option<Duration>) -> Result<T> + Send,
    S: AsyncFn(Duration) -> () + Send,
{
    let start = Instant::now();
    let deadline = retry_policy
        .time_budget()
        .and_then(|budget| start.checked_add(budget));
    let mut attempt_count = 0_u32;
    loop {
        attempt_count += 1;
        let remaining = deadline.map(|d| d.saturating_duration_since(Instant::now()));
        let error = match attempt(remaining).await {
            Ok(response) => return Ok(response),
            Err(e) => e,
        };
        let state = RetryState::new(attempt_count, start.elapsed(), idempotent);
        let error = match retry_policy.on_error(&state, error) {
            RetryResult::Continue(e) => e,
            RetryResult::Permanent(e) | RetryResult::Exhausted(e) => return Err(e),
        };
        let delay = backoff_policy.delay(attempt_count);
        let wake = Instant::now().checked_add(delay);
        if deadline.is_some_and(|d| wake.is_none_or(|w| w >= d)) {
            return Err(Error::exhausted(error));
        }
        tracing::debug!(
            attempt_count,
            ?delay,
            opc_request_id = error.opc_request_id(),
            status = error.http_status_code(),
            "retrying request"
        );
        sleep(delay).await;
    }
}

/// The timeout for one attempt: the request's attempt timeout, bounded by the
/// time left in the retry loop.
pub fn attempt_timeout(options: &RequestOptions, remaining: Option<Duration>) -> Option<Duration> {
    match (options.attempt_timeout(), remaining) {
        (Some(a), Some(r)) => Some(a.min(r)),
        (a, r) => a.or(r),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use test_case::test_case;

    const SECOND: Duration = Duration::from_secs(1);

    #[test_case(None, None, None)]
    #[test_case(Some(4), None, Some(4))]
    #[test_case(None, Some(4), Some(4))]
    #[test_case(Some(2), Some(4), Some(2))]
    #[test_case(Some(4), Some(2), Some(2))]
    fn attempt_timeouts(request: Option<u64>, remaining: Option<u64>, want: Option<u64>) {
        let mut options = RequestOptions::default();
        if let Some(t) = request {
            options.set_attempt_timeout(Duration::from_secs(t));
        }
        let got = attempt_timeout(&options, remaining.map(Duration::from_secs));
        assert_eq!(got, want.map(Duration::from_secs));
    }

    #[tokio::test]
    async fn first_attempt_succeeds() -> anyhow::Result<()> {
        let mut call = MockCall::new();
        call.expect_call()
            .once()
            .withf(|d| d.is_none())
            .returning(|_| Ok("success".into()));
        let mut retry = MockRetryPolicy::new();
        retry.expect_time_budget().return_const(None);
        let sleep = MockSleep::new();

        let got = retry_loop(
            async move |d| call.call(d),
            async move |d| sleep.sleep(d).await,
            true,
            Arc::new(retry),
            Arc::new(MockBackoffPolicy::new()),
        )
        .await?;
        assert_eq!(got, "success");
        Ok(())
    }

    #[tokio::test]
    async fn permanent_error() {
        let mut call = MockCall::new();
        call.expect_call().once().returning(|_| Err(not_found()));
        let mut retry = MockRetryPolicy::new();
        retry.expect_time_budget().return_const(None);
        retry
            .expect_on_error()
            .once()
            .withf(|state, _| state.attempt_count == 1 && !state.idempotent)
            .returning(|_, e| RetryResult::Permanent(e));
        let sleep = MockSleep::new();

        let got = retry_loop(
            async move |d| call.call(d),
            async move |d| sleep.sleep(d).await,
            false,
            Arc::new(retry),
            Arc::new(MockBackoffPolicy::new()),
        )
        .await;
        let err = got.expect_err("permanent errors stop the loop");
        assert_eq!(err.http_status_code(), Some(404), "{err:?}");
        assert!(!err.is_exhausted(), "{err:?}");
    }

    #[tokio::test]
    async fn retry_until_success() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut call = MockCall::new();
        for _ in 0..2 {
            call.expect_call()
                .once()
                .in_sequence(&mut seq)
                .returning(|_| Err(throttled()));
        }
        call.expect_call()
            .once()
            .in_sequence(&mut seq)
            .returning(|_| Ok("success".into()));

        let mut retry = MockRetryPolicy::new();
        retry.expect_time_budget().return_const(None);
        retry
            .expect_on_error()
            .times(2)
            .withf(|state, e| state.idempotent && e.http_status_code() == Some(429))
            .returning(|_, e| RetryResult::Continue(e));

        let mut backoff = MockBackoffPolicy::new();
        let mut sleep = MockSleep::new();
        for n in 1..=2_u32 {
            backoff
                .expect_delay()
                .once()
                .withf(move |count| *count == n)
                .return_const(Duration::from_millis(n as u64));
            sleep
                .expect_sleep()
                .once()
                .withf(move |d| *d == Duration::from_millis(n as u64))
                .returning(|_| Box::pin(async {}));
        }

        let got = retry_loop(
            async move |d| call.call(d),
            async move |d| sleep.sleep(d).await,
            true,
            Arc::new(retry),
            Arc::new(backoff),
        )
        .await?;
        assert_eq!(got, "success");
        Ok(())
    }

    #[tokio::test]
    async fn policy_exhausted() {
        const ATTEMPTS: u32 = 3;
        let mut call = MockCall::new();
        call.expect_call()
            .times(ATTEMPTS as usize)
            .returning(|_| Err(throttled()));
        let mut retry = MockRetryPolicy::new();
        retry.expect_time_budget().return_const(None);
        retry
            .expect_on_error()
            .times(ATTEMPTS as usize)
            .returning(|state, e| {
                if state.attempt_count < ATTEMPTS {
                    RetryResult::Continue(e)
                } else {
                    RetryResult::Exhausted(Error::exhausted(e))
                }
            });
        let mut backoff = MockBackoffPolicy::new();
        backoff
            .expect_delay()
            .times(ATTEMPTS as usize - 1)
            .return_const(Duration::ZERO);
        let mut sleep = MockSleep::new();
        sleep
            .expect_sleep()
            .times(ATTEMPTS as usize - 1)
            .returning(|_| Box::pin(async {}));

        let got = retry_loop(
            async move |d| call.call(d),
            async move |d| sleep.sleep(d).await,
            true,
            Arc::new(retry),
            Arc::new(backoff),
        )
        .await;
        let err = got.expect_err("the policy stops the loop");
        assert!(err.is_exhausted(), "{err:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn backoff_past_time_budget() {
        let mut call = MockCall::new();
        call.expect_call()
            .once()
            .withf(|d| d.is_some_and(|d| d <= 5 * SECOND))
            .returning(|_| Err(throttled()));
        let mut retry = MockRetryPolicy::new();
        retry.expect_time_budget().return_const(Some(5 * SECOND));
        retry
            .expect_on_error()
            .once()
            .returning(|_, e| RetryResult::Continue(e));
        let mut backoff = MockBackoffPolicy::new();
        backoff.expect_delay().once().return_const(10 * SECOND);
        let sleep = MockSleep::new();

        let got = retry_loop(
            async move |d| call.call(d),
            async move |d| sleep.sleep(d).await,
            true,
            Arc::new(retry),
            Arc::new(backoff),
        )
        .await;
        let err = got.expect_err("the delay ends past the budget");
        assert!(err.is_exhausted(), "{err:?}");
        use std::error::Error as _;
        let last = err
            .source()
            .and_then(|e| e.downcast_ref::<Error>())
            .and_then(|e| e.opc_request_id());
        assert_eq!(last, Some("req-429"), "{err:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn remaining_time_shrinks() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut call = MockCall::new();
        call.expect_call()
            .once()
            .in_sequence(&mut seq)
            .withf(|d| *d == Some(10 * SECOND))
            .returning(|_| Err(throttled()));
        call.expect_call()
            .once()
            .in_sequence(&mut seq)
            .withf(|d| *d == Some(8 * SECOND))
            .returning(|_| Ok("success".into()));
        let mut retry = MockRetryPolicy::new();
        retry.expect_time_budget().return_const(Some(10 * SECOND));
        retry
            .expect_on_error()
            .once()
            .returning(|_, e| RetryResult::Continue(e));
        let mut backoff = MockBackoffPolicy::new();
        backoff.expect_delay().once().return_const(2 * SECOND);

        let got = retry_loop(
            async move |d| call.call(d),
            async |d| tokio::time::sleep(d).await,
            true,
            Arc::new(retry),
            Arc::new(backoff),
        )
        .await?;
        assert_eq!(got, "success");
        Ok(())
    }

    fn not_found() -> Error {
        Error::service(
            ServiceError::new()
                .set_code("NotAuthorizedOrNotFound")
                .set_status_code(404_u16),
        )
    }

    fn throttled() -> Error {
        Error::service(
            ServiceError::new()
                .set_code("TooManyRequests")
                .set_status_code(429_u16)
                .set_opc_request_id("req-429"),
        )
    }

    trait Call {
        fn call(&self, d: Option<Duration>) -> Result<String>;
    }

    mockall::mock! {
        Call {}
        impl Call for Call {
            fn call(&self, d: Option<Duration>) -> Result<String>;
        }
    }

    trait Sleep {
        fn sleep(&self, d: Duration) -> impl Future<Output = ()>;
    }

    mockall::mock! {
        Sleep {}
        impl Sleep for Sleep {
            fn sleep(&self, d: Duration) -> impl Future<Output = ()> + Send;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        RetryPolicy {}
        impl RetryPolicy for RetryPolicy {
            fn on_error(&self, state: &RetryState, error: Error) -> RetryResult;
            fn time_budget(&self) -> Option<Duration>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        BackoffPolicy {}
        impl BackoffPolicy for BackoffPolicy {
            fn delay(&self, attempt_count: u32) -> Duration;
        }
    }
}
