//! Random subscription generation.
//!
//! Each record gets a fresh v4 identifier and a random subset of the
//! preference domain. The subset size is drawn from `[0, ALL.len())`, so a
//! record never deterministically subscribes to every category, and members
//! are picked by rejection sampling until the set reaches that size.
//! The set is ordered so that a seeded generator emits identical bytes.

use std::collections::BTreeSet;
use std::collections::TryReserveError;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use tracing::debug;
use uuid::Uuid;

use crate::preferences::Preference;
use crate::subscription::Subscription;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("cannot hold {count} subscriptions in memory: {source}")]
    TooMany {
        count: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Produces subscription records from an owned random number source.
pub struct Generator<R> {
    rng: R,
}

impl Generator<ThreadRng> {
    /// Generator backed by the thread-local, OS-seeded RNG.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng())
    }
}

impl Generator<StdRng> {
    /// Reproducible generator: the same seed yields the same records.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Generator<R> {
    /// Generator drawing every random choice from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// A random version-4 UUID drawn from this generator's RNG.
    pub fn identifier(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill(&mut bytes);
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }

    /// A random, duplicate-free subset of the preference domain with
    /// between zero and `ALL.len() - 1` members.
    pub fn preferences(&mut self) -> Vec<Preference> {
        let domain = &Preference::ALL;
        let wanted = self.rng.random_range(0..domain.len());
        if wanted == 0 {
            return Vec::new();
        }

        let mut picked = BTreeSet::new();
        while picked.len() < wanted {
            picked.insert(domain[self.rng.random_range(0..domain.len())]);
        }
        picked.into_iter().collect()
    }

    pub fn subscription(&mut self) -> Subscription {
        let id = self.identifier();
        let preferences = self.preferences();
        Subscription::from_id(id, preferences)
    }

    /// Generate exactly `count` records.
    ///
    /// Fails without generating anything if room for `count` records cannot
    /// be reserved up front.
    pub fn generate(&mut self, count: usize) -> Result<Vec<Subscription>, GenerateError> {
        let mut out = Vec::new();
        out.try_reserve_exact(count)
            .map_err(|source| GenerateError::TooMany { count, source })?;
        for _ in 0..count {
            out.push(self.subscription());
        }
        debug!(count, "generated subscriptions");
        Ok(out)
    }
}
