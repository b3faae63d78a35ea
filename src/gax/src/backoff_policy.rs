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

//! Delays between retry attempts.
//!
//! OCI services ask clients to back off exponentially between attempts, with
//! a random jitter so many clients failing at once do not retry in lockstep.
//! [ExponentialBackoff] implements the two jitter variants used by the other
//! OCI SDKs: full jitter (the default) and equal jitter.
//!
//! # Example
//! ```
//! # use oci_sdk_gax::backoff_policy::*;
//! use std::time::Duration;
//! let backoff = ExponentialBackoff::new(Duration::from_millis(500), Duration::from_secs(10))?
//!     .with_jitter(Jitter::Equal);
//! assert!(backoff.delay(1) <= Duration::from_millis(500));
//! # Ok::<(), Error>(())
//! ```

use std::time::Duration;

/// Computes the delay before the next attempt of a request.
pub trait BackoffPolicy: Send + Sync + std::fmt::Debug {
    /// The delay after the `attempt_count`-th failed attempt. Always >= 1.
    fn delay(&self, attempt_count: u32) -> Duration;
}

/// Invalid [ExponentialBackoff] parameters.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("the base delay must be greater than zero")]
    ZeroBaseDelay,
    #[error("the maximum delay ({maximum:?}) is smaller than the base delay ({base:?})")]
    MaximumBelowBase { base: Duration, maximum: Duration },
}

/// How the random component of the delay is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Jitter {
    /// Wait exactly the exponential ceiling.
    None,
    /// Wait a uniformly random time between zero and the ceiling.
    #[default]
    Full,
    /// Wait half the ceiling plus a uniformly random time up to the other half.
    Equal,
}

/// Exponential backoff: the ceiling doubles on each attempt, starting at the
/// base delay and capped at the maximum delay.
#[derive(Clone, Debug, PartialEq)]
pub struct ExponentialBackoff {
    base: Duration,
    maximum: Duration,
    jitter: Jitter,
}

impl ExponentialBackoff {
    pub fn new(base: Duration, maximum: Duration) -> Result<Self, Error> {
        if base.is_zero() {
            return Err(Error::ZeroBaseDelay);
        }
        if maximum < base {
            return Err(Error::MaximumBelowBase { base, maximum });
        }
        Ok(Self {
            base,
            maximum,
            jitter: Jitter::default(),
        })
    }

    pub fn with_jitter(mut self, jitter: Jitter) -> Self {
        self.jitter = jitter;
        self
    }

    /// The largest delay after the `attempt_count`-th failed attempt.
    pub fn ceiling(&self, attempt_count: u32) -> Duration {
        let exponent = attempt_count.saturating_sub(1);
        1_u32
            .checked_shl(exponent)
            .and_then(|factor| self.base.checked_mul(factor))
            .map_or(self.maximum, |d| d.min(self.maximum))
    }

    fn delay_with(&self, attempt_count: u32, rng: &mut impl rand::Rng) -> Duration {
        let ceiling = self.ceiling(attempt_count);
        match self.jitter {
            Jitter::None => ceiling,
            Jitter::Full => rng.random_range(Duration::ZERO..=ceiling),
            Jitter::Equal => {
                let half = ceiling / 2;
                half + rng.random_range(Duration::ZERO..=(ceiling - half))
            }
        }
    }
}

/// A one second base delay capped at 30 seconds, with full jitter.
impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self {
            base: Duration::from_secs(1),
            maximum: Duration::from_secs(30),
            jitter: Jitter::Full,
        }
    }
}

impl BackoffPolicy for ExponentialBackoff {
    fn delay(&self, attempt_count: u32) -> Duration {
        self.delay_with(attempt_count, &mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use test_case::test_case;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn validation() {
        assert_eq!(
            ExponentialBackoff::new(Duration::ZERO, SECOND),
            Err(Error::ZeroBaseDelay)
        );
        let err = ExponentialBackoff::new(2 * SECOND, SECOND).expect_err("maximum below base");
        assert_eq!(
            err,
            Error::MaximumBelowBase {
                base: 2 * SECOND,
                maximum: SECOND
            }
        );
        assert!(err.to_string().contains("smaller than the base"), "{err}");
        assert!(ExponentialBackoff::new(SECOND, SECOND).is_ok());
    }

    #[test_case(0, 1)]
    #[test_case(1, 1)]
    #[test_case(2, 2)]
    #[test_case(4, 8)]
    #[test_case(5, 10)]
    #[test_case(40, 10; "shift overflow")]
    #[test_case(u32::MAX, 10)]
    fn ceiling(attempt_count: u32, want_secs: u64) -> anyhow::Result<()> {
        let backoff = ExponentialBackoff::new(SECOND, 10 * SECOND)?;
        assert_eq!(backoff.ceiling(attempt_count), Duration::from_secs(want_secs));
        Ok(())
    }

    #[test]
    fn ceiling_multiplication_overflow() -> anyhow::Result<()> {
        let backoff = ExponentialBackoff::new(Duration::from_secs(u64::MAX / 2), Duration::MAX)?;
        assert_eq!(backoff.ceiling(8), Duration::MAX);
        Ok(())
    }

    #[test]
    fn no_jitter() -> anyhow::Result<()> {
        let backoff = ExponentialBackoff::new(SECOND, 10 * SECOND)?.with_jitter(Jitter::None);
        let got: Vec<_> = (1..=5).map(|n| backoff.delay(n)).collect();
        let want: Vec<_> = [1, 2, 4, 8, 10].map(Duration::from_secs).to_vec();
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn full_jitter_bounds() -> anyhow::Result<()> {
        let backoff = ExponentialBackoff::new(SECOND, 10 * SECOND)?;
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for attempt_count in 1..=8 {
            let ceiling = backoff.ceiling(attempt_count);
            for _ in 0..100 {
                let d = backoff.delay_with(attempt_count, &mut rng);
                assert!(d <= ceiling, "{d:?} > {ceiling:?}");
            }
        }
        Ok(())
    }

    #[test]
    fn equal_jitter_bounds() -> anyhow::Result<()> {
        let backoff = ExponentialBackoff::new(SECOND, 10 * SECOND)?.with_jitter(Jitter::Equal);
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for attempt_count in 1..=8 {
            let ceiling = backoff.ceiling(attempt_count);
            for _ in 0..100 {
                let d = backoff.delay_with(attempt_count, &mut rng);
                assert!(d >= ceiling / 2, "{d:?} < half of {ceiling:?}");
                assert!(d <= ceiling, "{d:?} > {ceiling:?}");
            }
        }
        Ok(())
    }

    #[test]
    fn default() {
        let backoff = ExponentialBackoff::default();
        assert_eq!(backoff.ceiling(1), SECOND);
        assert_eq!(backoff.ceiling(10), 30 * SECOND);
        assert_eq!(backoff.jitter, Jitter::Full);
        let policy: std::sync::Arc<dyn BackoffPolicy> = std::sync::Arc::new(backoff);
        assert!(policy.delay(3) <= 4 * SECOND);
    }
}
