//! Token-purchase progress simulator.

use chrono::{DateTime, TimeZone, Utc};

use super::save;
use crate::rng::RandomSource;
use crate::storage::KeyValueStore;

pub const TARGET_COINS: u64 = 150_000_000;
/// Progress never passes 94% of the target.
pub const CAP_COINS: u64 = TARGET_COINS / 100 * 94;
pub const BASE_TOKENS_PER_MINUTE: f64 = 10_000.0;
/// Per-minute rate scaled to one 15-second tick.
pub const BASE_TOKENS_PER_TICK: f64 = BASE_TOKENS_PER_MINUTE / 4.0;

pub const BULK_MIN: f64 = 2_000.0;
pub const BULK_MAX: f64 = 7_000.0;
pub const BULK_CHANCE: f64 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressState {
    pub coins: u64,
    pub percentage: f64,
}

impl ProgressState {
    /// Cap `coins` and derive the percentage from it.
    pub fn from_coins(coins: u64) -> Self {
        let coins = coins.min(CAP_COINS);
        Self {
            coins,
            percentage: coins as f64 / TARGET_COINS as f64 * 100.0,
        }
    }
}

/// Baseline progress from time alone: 10,000 coins per elapsed minute.
pub fn initial_progress(start: DateTime<Utc>, now: DateTime<Utc>) -> ProgressState {
    let elapsed_ms = (now - start).num_milliseconds();
    if elapsed_ms <= 0 {
        return ProgressState::from_coins(0);
    }
    let minutes = elapsed_ms as f64 / 60_000.0;
    ProgressState::from_coins((minutes * BASE_TOKENS_PER_MINUTE).floor() as u64)
}

/// Coins added by one tick: the base rate ±30%, plus an occasional bulk buy.
pub fn tick_increment(rng: &mut dyn RandomSource) -> u64 {
    let factor = 0.7 + rng.next_f64() * 0.6;
    let mut increment = (BASE_TOKENS_PER_TICK * factor).floor() as u64;
    if rng.next_f64() < BULK_CHANCE {
        increment += (BULK_MIN + rng.next_f64() * (BULK_MAX - BULK_MIN)).floor() as u64;
    }
    increment
}

pub struct ProgressSimulator {
    state: ProgressState,
}

impl ProgressSimulator {
    /// Seed from the persisted start date (created today if absent).
    /// The running count itself is never stored.
    pub fn load<Tz: TimeZone>(store: &mut dyn KeyValueStore, now: &DateTime<Tz>) -> Self {
        let start = save::load_or_create_start_date(store, now);
        Self {
            state: initial_progress(start, now.with_timezone(&Utc)),
        }
    }

    pub fn state(&self) -> ProgressState {
        self.state
    }

    /// Advance one tick. Returns the coins actually added after capping.
    pub fn tick(&mut self, rng: &mut dyn RandomSource) -> u64 {
        let before = self.state.coins;
        let next = before.saturating_add(tick_increment(rng));
        self.state = ProgressState::from_coins(next);
        self.state.coins - before
    }
}
