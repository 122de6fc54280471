//! Random number generation by rejection sampling.
//!
//! A candidate is four distinct digits drawn without replacement from
//! `0..=9`, so a leading zero yields a value below 1000. Candidates are
//! redrawn until one is valid, not blacklisted and not used yet. The valid
//! space holds 9 * 9 * 8 * 7 = 4536 numbers; every recorded number shrinks
//! it by one. Random draws are capped by [`NumzConfig::max_attempts`]; past
//! the cap the remaining free numbers are enumerated and one is picked
//! uniformly, so generation only fails once nothing is left.

use crate::config::NumzConfig;
use crate::error::{NumzError, Result};
use crate::validate::{all_valid_numbers, is_valid_number};
use rand::rngs::StdRng;
use rand::seq::{index, IteratorRandom};
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

const DIGITS: usize = 10;
const NUMBER_LEN: usize = 4;

pub struct Generator<R: Rng> {
    rng: R,
}

impl Generator<StdRng> {
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Generator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Four distinct digits in random order, read as a base-10 integer.
    pub fn generate_candidate(&mut self) -> u32 {
        index::sample(&mut self.rng, DIGITS, NUMBER_LEN)
            .iter()
            .fold(0, |acc, digit| acc * 10 + digit as u32)
    }

    /// Draws until a candidate is valid, not blacklisted and not in `used`.
    ///
    /// Fails with [`NumzError::Exhausted`] only when no such number exists.
    pub fn generate_unique_number(
        &mut self,
        config: &NumzConfig,
        used: &BTreeSet<u32>,
    ) -> Result<u32> {
        let remaining = available_count(config, used);
        if remaining == 0 {
            return Err(NumzError::Exhausted);
        }
        log::debug!("{} candidates available", remaining);

        for attempt in 1..=config.max_attempts {
            let candidate = self.generate_candidate();
            if is_free(candidate, config, used) {
                log::debug!("accepted {} after {} draws", candidate, attempt);
                return Ok(candidate);
            }
        }

        log::debug!(
            "no hit in {} draws, picking from the free numbers",
            config.max_attempts
        );
        all_valid_numbers()
            .filter(|n| is_free(*n, config, used))
            .choose(&mut self.rng)
            .ok_or(NumzError::Exhausted)
    }
}

fn is_free(number: u32, config: &NumzConfig, used: &BTreeSet<u32>) -> bool {
    is_valid_number(i64::from(number))
        && !config.is_blacklisted(number)
        && !used.contains(&number)
}

/// How many valid numbers are neither blacklisted nor in `used`.
pub fn available_count(config: &NumzConfig, used: &BTreeSet<u32>) -> usize {
    all_valid_numbers()
        .filter(|n| is_free(*n, config, used))
        .count()
}
