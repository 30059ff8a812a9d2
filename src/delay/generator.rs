//! Piecewise probability distribution for train delays, in seconds.
//!
//! A generator is a list of buckets. Each bucket is a `[lower, upper, percent]`
//! triple: `percent` is the chance that a drawn delay falls in `[lower, upper]`.
//!
//! | JSON                             | Meaning                                  |
//! |----------------------------------|------------------------------------------|
//! | `[[0, 100, 80], [100, 500, 20]]` | 80% in 0..=100 s, 20% in 100..=500 s     |
//! | `30`                             | always 30 s (same as `[[30, 30, 100]]`)  |
//!
//! Sampling is done in two stages: a percentage point selects a bucket, then a
//! value is drawn uniformly inside it.

use std::time::Duration;

use log::{debug, warn};
use rand::distributions::Distribution;
use rand::Rng;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ParseError;

/// One piece of the distribution. Bounds are inclusive.
///
/// Buckets are kept exactly as configured: inverted bounds or negative
/// weights are not rejected, sampling tolerates them instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(i64, i64, i64)", into = "(i64, i64, i64)")]
pub struct Bucket {
    pub lower: i64,
    pub upper: i64,
    /// Probability in percent
    pub weight: i64,
}

impl Bucket {
    pub fn new(lower: i64, upper: i64, weight: i64) -> Self {
        Self {
            lower,
            upper,
            weight,
        }
    }

    /// Draws uniformly in `[lower, upper]`. Inverted bounds are swapped.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        let (lo, hi) = if self.lower <= self.upper {
            (self.lower, self.upper)
        } else {
            (self.upper, self.lower)
        };
        if lo == hi {
            return lo;
        }
        rng.gen_range(lo..=hi)
    }
}

impl From<(i64, i64, i64)> for Bucket {
    fn from((lower, upper, weight): (i64, i64, i64)) -> Self {
        Self::new(lower, upper, weight)
    }
}

impl From<Bucket> for (i64, i64, i64) {
    fn from(bucket: Bucket) -> Self {
        (bucket.lower, bucket.upper, bucket.weight)
    }
}

/// Random delay generator built from weighted buckets.
///
/// The default generator has no buckets and always yields 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DelayGenerator {
    buckets: Vec<Bucket>,
}

impl DelayGenerator {
    /// Generator that always yields `delay`.
    pub fn constant(delay: i64) -> Self {
        Self {
            buckets: vec![Bucket::new(delay, delay, 100)],
        }
    }

    pub fn from_buckets(buckets: Vec<Bucket>) -> Self {
        let total = buckets
            .iter()
            .fold(0i64, |acc, b| acc.saturating_add(b.weight));
        if total != 100 {
            warn!(
                "Delay generator weights sum to {}%, expected 100%: {:?}",
                total, buckets
            );
        }
        Self { buckets }
    }

    /// Decodes either a bucket list or a single integer.
    ///
    /// The bucket list form is tried first. An empty list (and `null`) is
    /// rejected rather than decoded to an empty generator, so a parsed
    /// generator always has at least one bucket. Older scenery files that
    /// relied on `[]` meaning "no delay" must use `0` instead.
    pub fn from_value(value: &Value) -> Result<Self, ParseError> {
        match Vec::<Bucket>::deserialize(value) {
            Ok(buckets) if !buckets.is_empty() => return Ok(Self::from_buckets(buckets)),
            Ok(_) => {
                return Err(ParseError::DelayGenerator {
                    raw: value.to_string(),
                })
            }
            Err(_) => {}
        }
        match i64::deserialize(value) {
            Ok(delay) => {
                debug!("Delay generator set to constant {}s", delay);
                Ok(Self::constant(delay))
            }
            Err(_) => Err(ParseError::DelayGenerator {
                raw: value.to_string(),
            }),
        }
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Returns the bucket selected by a percentage point in `[0, 100)`.
    ///
    /// Weights are accumulated in declared order and the first bucket whose
    /// cumulative weight exceeds `percent` wins. Negative weights count as 0.
    /// When the weights fall short of `percent` the last bucket is returned.
    /// `None` only for an empty generator.
    pub fn bucket_for(&self, percent: i64) -> Option<&Bucket> {
        let mut cumulative: i64 = 0;
        for bucket in &self.buckets {
            cumulative = cumulative.saturating_add(bucket.weight.max(0));
            if cumulative > percent {
                return Some(bucket);
            }
        }
        self.buckets.last()
    }

    /// Draws a delay in seconds using the thread-local RNG.
    pub fn yield_delay(&self) -> i64 {
        self.sample(&mut rand::thread_rng())
    }

    /// Draws a delay as a `Duration`. Negative draws become zero.
    pub fn sample_duration<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let secs = self.sample(rng);
        Duration::from_secs(u64::try_from(secs).unwrap_or(0))
    }
}

impl Distribution<i64> for DelayGenerator {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        let percent = rng.gen_range(0..100);
        match self.bucket_for(percent) {
            Some(bucket) => bucket.sample(rng),
            None => 0,
        }
    }
}

impl<'de> Deserialize<'de> for DelayGenerator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(de::Error::custom)
    }
}
