//! Vote simulator: per-option counts that drift toward a hidden target total.

use chrono::{DateTime, Utc};

use super::save;
use crate::console;
use crate::rng::RandomSource;
use crate::storage::KeyValueStore;

pub const MIN_TARGET_VOTES: u64 = 27_000;
pub const MAX_TARGET_VOTES: u64 = 32_000;
pub const MAX_VOTES_PER_MINUTE: f64 = 300.0;
/// Floor for the shared per-tick increment.
pub const MIN_VOTES_PER_TICK: u64 = 5;
/// Floor for each option's per-tick increment (headroom permitting).
pub const MIN_VOTES_PER_OPTION: u64 = 2;
/// Options may overshoot their weighted share of the target by 10%.
pub const CEILING_FACTOR: f64 = 1.1;

/// The three events visitors can vote for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VoteOption {
    TouchdownTeaser,
    BikiniCup,
    Courtside,
}

impl VoteOption {
    /// All options in display order.
    pub fn all() -> &'static [VoteOption] {
        &[
            VoteOption::TouchdownTeaser,
            VoteOption::BikiniCup,
            VoteOption::Courtside,
        ]
    }

    /// Stable identifier, also the storage key.
    pub fn id(self) -> u8 {
        match self {
            VoteOption::TouchdownTeaser => 1,
            VoteOption::BikiniCup => 2,
            VoteOption::Courtside => 3,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::all().iter().copied().find(|o| o.id() == id)
    }

    pub fn index(self) -> usize {
        self.id() as usize - 1
    }

    pub fn name(self) -> &'static str {
        match self {
            VoteOption::TouchdownTeaser => "Touchdown Teaser Tailgate",
            VoteOption::BikiniCup => "Bikini Cup Goalzone Party",
            VoteOption::Courtside => "Championship Courtside Smackdown",
        }
    }

    pub fn image(self) -> &'static str {
        match self {
            VoteOption::TouchdownTeaser => "superbowl_2025.png",
            VoteOption::BikiniCup => "bikini_cup_2025.png",
            VoteOption::Courtside => "nba.jpg",
        }
    }

    /// Share of the shared increment (weights sum to 1.0).
    pub fn weight(self) -> f64 {
        match self {
            VoteOption::TouchdownTeaser => 0.45,
            VoteOption::BikiniCup => 0.25,
            VoteOption::Courtside => 0.3,
        }
    }

    pub fn spike_chance(self) -> f64 {
        match self {
            VoteOption::TouchdownTeaser => 0.35,
            VoteOption::BikiniCup => 0.2,
            VoteOption::Courtside => 0.25,
        }
    }

    /// `[min, max)` multiplier applied on a spike.
    pub fn spike_range(self) -> (f64, f64) {
        match self {
            VoteOption::TouchdownTeaser => (2.0, 4.0),
            VoteOption::BikiniCup => (1.5, 3.0),
            VoteOption::Courtside => (1.8, 3.5),
        }
    }

    /// Count used when nothing valid is stored.
    pub fn default_votes(self) -> u64 {
        match self {
            VoteOption::TouchdownTeaser => 245,
            VoteOption::BikiniCup => 178,
            VoteOption::Courtside => 198,
        }
    }

    /// Hard cap on this option's running total.
    pub fn ceiling(self, target_votes: u64) -> u64 {
        (target_votes as f64 * self.weight() * CEILING_FACTOR).floor() as u64
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VoteState {
    /// Indexed by `VoteOption::index()`.
    pub counts: [u64; 3],
    /// Epoch milliseconds of the last tick or vote.
    pub last_update: i64,
    pub target_votes: u64,
}

impl VoteState {
    pub fn fresh(rng: &mut dyn RandomSource, now_ms: i64) -> Self {
        Self {
            counts: default_counts(),
            last_update: now_ms,
            target_votes: random_target(rng),
        }
    }

    pub fn votes(&self, option: VoteOption) -> u64 {
        self.counts[option.index()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().fold(0, |acc, &c| acc.saturating_add(c))
    }

    /// Option(s) with the highest count.
    pub fn is_leader(&self, option: VoteOption) -> bool {
        let max = self.counts.iter().copied().max().unwrap_or(0);
        self.votes(option) == max
    }

    /// Percentage of all votes held by `option` (0 when nobody has voted).
    pub fn share(&self, option: VoteOption) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.votes(option) as f64 / total as f64 * 100.0
    }
}

pub fn default_counts() -> [u64; 3] {
    let mut counts = [0; 3];
    for o in VoteOption::all() {
        counts[o.index()] = o.default_votes();
    }
    counts
}

/// Uniform integer in `[MIN_TARGET_VOTES, MAX_TARGET_VOTES)`.
pub fn random_target(rng: &mut dyn RandomSource) -> u64 {
    let span = (MAX_TARGET_VOTES - MIN_TARGET_VOTES) as f64;
    (MIN_TARGET_VOTES as f64 + rng.next_f64() * span).floor() as u64
}

/// Shared increment for one tick, before per-option weighting.
///
/// Spreads the votes still missing from the target over the ticks left until
/// the end, never below `MIN_VOTES_PER_TICK` and never above the per-minute
/// throughput scaled to the tick length.
pub fn base_increment(total: u64, target: u64, ms_until_end: i64, tick_ms: f64) -> u64 {
    if ms_until_end <= 0 || total >= target {
        return 0;
    }
    let remaining = (target - total) as f64;
    let ticks_left = ((ms_until_end as f64 / tick_ms).floor()).max(1.0);
    let max_per_tick = (MAX_VOTES_PER_MINUTE * (tick_ms / 60_000.0)).floor() as u64;
    let wanted = (remaining / ticks_left).ceil() as u64;
    wanted.max(MIN_VOTES_PER_TICK).min(max_per_tick)
}

/// Votes added to one option this tick.
///
/// Draws one variation value and one spike roll, plus a spike multiplier
/// when the roll hits. The result is at least `MIN_VOTES_PER_OPTION` unless
/// that would push the option over its ceiling.
pub fn option_increment(
    option: VoteOption,
    base: u64,
    current: u64,
    target_votes: u64,
    rng: &mut dyn RandomSource,
) -> u64 {
    let weighted = ((base as f64 * option.weight()).floor() as u64).max(MIN_VOTES_PER_OPTION);

    // ±20%
    let variation = 0.8 + rng.next_f64() * 0.4;
    let mut votes = (weighted as f64 * variation).floor() as u64;

    if rng.next_f64() < option.spike_chance() {
        let (min, max) = option.spike_range();
        let multiplier = min + rng.next_f64() * (max - min);
        votes = (votes as f64 * multiplier).floor() as u64;
    }

    let headroom = option.ceiling(target_votes).saturating_sub(current);
    votes.max(MIN_VOTES_PER_OPTION).min(headroom)
}

/// Result of one vote tick.
#[derive(Clone, Debug, PartialEq)]
pub enum TickOutcome {
    /// The campaign is over; nothing changed.
    Expired,
    Advanced {
        /// Votes added per option, indexed by `VoteOption::index()`.
        increments: [u64; 3],
        /// Whether the new state reached storage.
        saved: bool,
    },
}

/// One row of the voting / results views.
#[derive(Clone, Debug, PartialEq)]
pub struct OptionView {
    pub option: VoteOption,
    pub display_name: &'static str,
    pub image: &'static str,
    pub votes: u64,
}

/// Persisted vote counters plus the logic that advances them.
pub struct VoteSimulator {
    state: VoteState,
}

impl VoteSimulator {
    /// Resume from storage, or start fresh on missing / malformed data.
    pub fn load(store: &dyn KeyValueStore, rng: &mut dyn RandomSource, now_ms: i64) -> Self {
        let state = match save::read_vote_state(store) {
            Some(stored) => stored.into_state(now_ms, || random_target(rng)),
            None => {
                console::log("Vote simulator: no stored state, starting fresh");
                VoteState::fresh(rng, now_ms)
            }
        };
        Self { state }
    }

    pub fn state(&self) -> &VoteState {
        &self.state
    }

    pub fn options(&self) -> Vec<OptionView> {
        VoteOption::all()
            .iter()
            .map(|&option| OptionView {
                option,
                display_name: option.name(),
                image: option.image(),
                votes: self.state.votes(option),
            })
            .collect()
    }

    /// Advance every option by one tick and persist the result.
    pub fn tick(
        &mut self,
        store: &mut dyn KeyValueStore,
        rng: &mut dyn RandomSource,
        now: DateTime<Utc>,
        end: DateTime<Utc>,
        tick_ms: f64,
    ) -> TickOutcome {
        let ms_until_end = end.timestamp_millis() - now.timestamp_millis();
        if ms_until_end <= 0 {
            return TickOutcome::Expired;
        }

        let target = self.state.target_votes;
        let base = base_increment(self.state.total(), target, ms_until_end, tick_ms);

        let mut increments = [0; 3];
        for &option in VoteOption::all() {
            let i = option.index();
            increments[i] = option_increment(option, base, self.state.counts[i], target, rng);
        }
        for (count, inc) in self.state.counts.iter_mut().zip(increments) {
            *count = count.saturating_add(inc);
        }
        self.state.last_update = now.timestamp_millis();

        let saved = self.save(store);
        TickOutcome::Advanced { increments, saved }
    }

    /// Add the visitor's own vote.
    ///
    /// Works on whatever is currently persisted (falling back to defaults),
    /// adds exactly one vote, and writes it back. The in-memory counters then
    /// absorb the vote so the next tick cannot overwrite it.
    pub fn record_vote(
        &mut self,
        store: &mut dyn KeyValueStore,
        option: VoteOption,
        now_ms: i64,
    ) -> bool {
        let target = self.state.target_votes;
        let mut stored = match save::read_vote_state(store) {
            Some(stored) => stored.into_state(now_ms, || target),
            None => VoteState {
                counts: default_counts(),
                last_update: now_ms,
                target_votes: target,
            },
        };
        let i = option.index();
        stored.counts[i] = stored.counts[i].saturating_add(1);
        stored.last_update = now_ms;
        let saved = save::write_vote_state(store, &stored);

        for (j, (mine, theirs)) in self.state.counts.iter_mut().zip(stored.counts).enumerate() {
            *mine = if j == i {
                mine.saturating_add(1).max(theirs)
            } else {
                (*mine).max(theirs)
            };
        }
        self.state.last_update = now_ms;
        saved
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> bool {
        save::write_vote_state(store, &self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::save;
    use crate::rng::SequenceRng;
    use crate::storage::MemoryStore;
    use chrono::{Duration, TimeZone};

    const TICK_MS: f64 = 15_000.0;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 1, 12, 0, 0).unwrap()
    }

    fn sim(counts: [u64; 3], target_votes: u64) -> VoteSimulator {
        VoteSimulator {
            state: VoteState {
                counts,
                last_update: 0,
                target_votes,
            },
        }
    }

    #[test]
    fn option_ids_roundtrip() {
        for &o in VoteOption::all() {
            assert_eq!(VoteOption::from_id(o.id()), Some(o));
        }
        assert_eq!(VoteOption::from_id(0), None);
        assert_eq!(VoteOption::from_id(4), None);
    }

    #[test]
    fn weights_sum_to_one() {
        let sum: f64 = VoteOption::all().iter().map(|o| o.weight()).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ceiling_values() {
        assert_eq!(VoteOption::TouchdownTeaser.ceiling(30_000), 14_850);
        assert_eq!(VoteOption::BikiniCup.ceiling(30_000), 8_250);
        assert_eq!(VoteOption::Courtside.ceiling(30_000), 9_900);
    }

    #[test]
    fn random_target_bounds() {
        let mut low = SequenceRng::new(&[0.0]);
        assert_eq!(random_target(&mut low), 27_000);
        let mut mid = SequenceRng::new(&[0.5]);
        assert_eq!(random_target(&mut mid), 29_500);
        let mut high = SequenceRng::new(&[0.999_999]);
        assert_eq!(random_target(&mut high), 31_999);
    }

    #[test]
    fn base_increment_floor_when_far_from_end() {
        // 10 days left → tens of thousands of ticks, tiny need per tick.
        let ms = 10 * 24 * 60 * 60 * 1000;
        assert_eq!(base_increment(621, 30_000, ms, TICK_MS), MIN_VOTES_PER_TICK);
    }

    #[test]
    fn base_increment_capped_by_throughput() {
        // 60 ticks left, 29,379 votes missing → wants 490, capped at 75.
        assert_eq!(base_increment(621, 30_000, 60 * 15_000, TICK_MS), 75);
    }

    #[test]
    fn base_increment_spreads_remaining() {
        // 100 missing over 10 ticks → 10 per tick.
        assert_eq!(base_increment(29_900, 30_000, 10 * 15_000, TICK_MS), 10);
    }

    #[test]
    fn base_increment_zero_at_target_or_after_end() {
        assert_eq!(base_increment(30_000, 30_000, 1_000_000, TICK_MS), 0);
        assert_eq!(base_increment(0, 30_000, 0, TICK_MS), 0);
        assert_eq!(base_increment(0, 30_000, -5, TICK_MS), 0);
    }

    #[test]
    fn base_increment_last_partial_tick_counts_as_one() {
        // Less than one tick left → whole remainder, still capped.
        assert_eq!(base_increment(29_990, 30_000, 1_000, TICK_MS), 10);
    }

    #[test]
    fn tick_exact_increments_with_scripted_draws() {
        let mut s = sim(default_counts(), 30_000);
        let mut store = MemoryStore::new();
        // Option 1: variation 0.625 → ×1.05, spike roll 0.1 hits, multiplier 0.5 → ×3.0
        // Option 2: variation 0.75 → ×1.1, spike roll 0.5 misses
        // Option 3: variation 0.25 → ×0.9, spike roll 0.2 hits, multiplier 0.5 → ×2.65
        let mut rng = SequenceRng::new(&[0.625, 0.1, 0.5, 0.75, 0.5, 0.25, 0.2, 0.5]);
        let end = now() + Duration::milliseconds(60 * 15_000);

        let outcome = s.tick(&mut store, &mut rng, now(), end, TICK_MS);

        // base = 75: option 1 floor(33.75)=33 → 34 → 102
        //            option 2 floor(18.75)=18 → 19
        //            option 3 floor(22.5)=22 → 19 → 50
        assert_eq!(
            outcome,
            TickOutcome::Advanced {
                increments: [102, 19, 50],
                saved: true
            }
        );
        assert_eq!(s.state().counts, [347, 197, 248]);
        assert_eq!(s.state().last_update, now().timestamp_millis());
        assert_eq!(rng.draws(), 8);
    }

    #[test]
    fn tick_persists_state() {
        let mut s = sim(default_counts(), 30_000);
        let mut store = MemoryStore::new();
        let mut rng = SequenceRng::new(&[0.9]);
        let end = now() + Duration::days(1);
        s.tick(&mut store, &mut rng, now(), end, TICK_MS);

        let reloaded = VoteSimulator::load(&store, &mut rng, 0);
        assert_eq!(reloaded.state().counts, s.state().counts);
        assert_eq!(reloaded.state().target_votes, 30_000);
    }

    #[test]
    fn oversized_stored_counts_fall_back_to_defaults() {
        let mut store = MemoryStore::new().with_item(
            save::VOTE_STATE_KEY,
            r#"{"1":1e19,"2":1e19,"3":198,"targetVotes":30000}"#,
        );
        let mut rng = SequenceRng::new(&[0.5]);
        let mut s = VoteSimulator::load(&store, &mut rng, 0);
        assert_eq!(s.state().counts, [245, 178, 198]);
        assert_eq!(s.state().target_votes, 30_000);

        let end = now() + Duration::days(1);
        let outcome = s.tick(&mut store, &mut rng, now(), end, TICK_MS);
        assert!(matches!(outcome, TickOutcome::Advanced { saved: true, .. }));
        assert!(s.state().total() > 621);
    }

    #[test]
    fn vote_over_oversized_record_uses_default() {
        let mut store =
            MemoryStore::new().with_item(save::VOTE_STATE_KEY, r#"{"1":1e30,"targetVotes":30000}"#);
        let mut rng = SequenceRng::new(&[0.5]);
        let mut s = VoteSimulator::load(&store, &mut rng, 0);
        assert_eq!(s.state().counts, [245, 178, 198]);

        assert!(s.record_vote(&mut store, VoteOption::TouchdownTeaser, 1));
        assert_eq!(s.state().counts, [246, 178, 198]);
        let reloaded = VoteSimulator::load(&store, &mut rng, 2);
        assert_eq!(reloaded.state().counts, [246, 178, 198]);
    }

    #[test]
    fn counts_saturate_instead_of_overflowing() {
        let mut s = sim([u64::MAX, 1, 1], 30_000);
        assert_eq!(s.state().total(), u64::MAX);

        let mut store = MemoryStore::new();
        let mut rng = SequenceRng::new(&[0.5]);
        let end = now() + Duration::days(1);
        s.tick(&mut store, &mut rng, now(), end, TICK_MS);
        assert_eq!(s.state().votes(VoteOption::TouchdownTeaser), u64::MAX);

        s.record_vote(&mut store, VoteOption::TouchdownTeaser, 1);
        assert_eq!(s.state().votes(VoteOption::TouchdownTeaser), u64::MAX);
    }

    #[test]
    fn unreadable_store_starts_fresh() {
        let store = MemoryStore::rejecting_reads()
            .with_item(save::VOTE_STATE_KEY, r#"{"1":900,"2":900,"3":900}"#);
        let mut rng = SequenceRng::new(&[0.5]);
        let s = VoteSimulator::load(&store, &mut rng, 0);
        assert_eq!(s.state().counts, [245, 178, 198]);
        assert_eq!(s.state().target_votes, 29_500);
    }

    #[test]
    fn tick_after_end_changes_nothing() {
        let mut s = sim(default_counts(), 30_000);
        let mut store = MemoryStore::new();
        let mut rng = SequenceRng::new(&[0.5]);
        let end = now() - Duration::seconds(1);

        let outcome = s.tick(&mut store, &mut rng, now(), end, TICK_MS);

        assert_eq!(outcome, TickOutcome::Expired);
        assert_eq!(s.state().counts, default_counts());
        assert_eq!(rng.draws(), 0);
        assert_eq!(store.get_item(save::VOTE_STATE_KEY), Ok(None));
    }

    #[test]
    fn tick_clamps_to_ceiling() {
        // Option 1 is 10 short of its 14,850 ceiling; a 102-vote spike is clamped.
        let mut s = sim([14_840, 178, 198], 30_000);
        let mut store = MemoryStore::new();
        let mut rng = SequenceRng::new(&[0.625, 0.1, 0.5, 0.75, 0.5, 0.25, 0.2, 0.5]);
        let end = now() + Duration::milliseconds(60 * 15_000);

        s.tick(&mut store, &mut rng, now(), end, TICK_MS);

        assert_eq!(s.state().votes(VoteOption::TouchdownTeaser), 14_850);
    }

    #[test]
    fn tick_at_ceiling_adds_nothing_to_that_option() {
        let mut s = sim([14_850, 178, 198], 30_000);
        let mut store = MemoryStore::new();
        let mut rng = SequenceRng::new(&[0.9]);
        let end = now() + Duration::days(1);

        s.tick(&mut store, &mut rng, now(), end, TICK_MS);

        assert_eq!(s.state().votes(VoteOption::TouchdownTeaser), 14_850);
        assert!(s.state().votes(VoteOption::BikiniCup) >= 178 + MIN_VOTES_PER_OPTION);
    }

    #[test]
    fn tick_minimum_per_option_when_target_reached() {
        // Total above target → base 0, but each option still gets the floor.
        let mut s = sim([13_000, 7_500, 9_600], 30_000);
        let mut store = MemoryStore::new();
        let mut rng = SequenceRng::new(&[0.0, 0.99]);
        let end = now() + Duration::days(1);

        let outcome = s.tick(&mut store, &mut rng, now(), end, TICK_MS);

        assert_eq!(
            outcome,
            TickOutcome::Advanced {
                increments: [2, 2, 2],
                saved: true
            }
        );
    }

    #[test]
    fn tick_survives_storage_failure() {
        let mut s = sim(default_counts(), 30_000);
        let mut store = MemoryStore::rejecting_writes();
        let mut rng = SequenceRng::new(&[0.9]);
        let end = now() + Duration::days(1);

        let outcome = s.tick(&mut store, &mut rng, now(), end, TICK_MS);

        match outcome {
            TickOutcome::Advanced { saved, .. } => assert!(!saved),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(s.state().total() > default_counts().iter().sum::<u64>());
    }

    #[test]
    fn load_malformed_falls_back_to_defaults() {
        let store = MemoryStore::new().with_item(save::VOTE_STATE_KEY, "not json");
        let mut rng = SequenceRng::new(&[0.5]);
        let s = VoteSimulator::load(&store, &mut rng, 1_000);
        assert_eq!(s.state().counts, [245, 178, 198]);
        assert!((27_000..=32_000).contains(&s.state().target_votes));
        assert_eq!(s.state().target_votes, 29_500);
        assert_eq!(s.state().last_update, 1_000);
    }

    #[test]
    fn load_reuses_stored_target() {
        let store = MemoryStore::new().with_item(
            save::VOTE_STATE_KEY,
            r#"{"1":300,"2":"200","3":250,"lastUpdate":5,"targetVotes":28000}"#,
        );
        let mut rng = SequenceRng::new(&[0.5]);
        let s = VoteSimulator::load(&store, &mut rng, 9);
        assert_eq!(s.state().counts, [300, 200, 250]);
        assert_eq!(s.state().target_votes, 28_000);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn load_generates_missing_target() {
        let store = MemoryStore::new().with_item(save::VOTE_STATE_KEY, r#"{"1":300}"#);
        let mut rng = SequenceRng::new(&[0.0]);
        let s = VoteSimulator::load(&store, &mut rng, 0);
        assert_eq!(s.state().counts, [300, 178, 198]);
        assert_eq!(s.state().target_votes, 27_000);
    }

    #[test]
    fn record_vote_without_prior_state() {
        let mut store = MemoryStore::new();
        let mut rng = SequenceRng::new(&[0.5]);
        let mut s = VoteSimulator::load(&store, &mut rng, 0);

        assert!(s.record_vote(&mut store, VoteOption::BikiniCup, 42));

        let json = store.get_item(save::VOTE_STATE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["1"], 245);
        assert_eq!(value["2"], 179);
        assert_eq!(value["3"], 198);
        assert_eq!(value["lastUpdate"], 42);
        assert_eq!(value["targetVotes"], 29_500);
        assert_eq!(s.state().counts, [245, 179, 198]);
    }

    #[test]
    fn record_vote_adds_to_persisted_counts() {
        let mut store = MemoryStore::new().with_item(
            save::VOTE_STATE_KEY,
            r#"{"1":1000,"2":900,"3":800,"lastUpdate":1,"targetVotes":30000}"#,
        );
        let mut rng = SequenceRng::new(&[0.5]);
        let mut s = VoteSimulator::load(&store, &mut rng, 0);

        s.record_vote(&mut store, VoteOption::TouchdownTeaser, 7);

        let reloaded = VoteSimulator::load(&store, &mut rng, 0);
        assert_eq!(reloaded.state().counts, [1001, 900, 800]);
        assert_eq!(s.state().counts, [1001, 900, 800]);
    }

    #[test]
    fn record_vote_is_not_lost_when_storage_lags_behind() {
        // Writes failing: storage stays at defaults while memory has moved on.
        let mut store = MemoryStore::rejecting_writes();
        let mut s = sim([500, 400, 300], 30_000);

        assert!(!s.record_vote(&mut store, VoteOption::Courtside, 7));

        assert_eq!(s.state().counts, [500, 400, 301]);
    }

    #[test]
    fn share_and_leader() {
        let s = sim([500, 300, 200], 30_000);
        assert!((s.state().share(VoteOption::TouchdownTeaser) - 50.0).abs() < 1e-9);
        assert!(s.state().is_leader(VoteOption::TouchdownTeaser));
        assert!(!s.state().is_leader(VoteOption::Courtside));
        let empty = sim([0, 0, 0], 30_000);
        assert_eq!(empty.state().share(VoteOption::BikiniCup), 0.0);
    }

    #[test]
    fn options_view_matches_state() {
        let s = sim([1, 2, 3], 30_000);
        let views = s.options();
        assert_eq!(views.len(), 3);
        assert_eq!(views[1].display_name, "Bikini Cup Goalzone Party");
        assert_eq!(views[2].votes, 3);
    }
}
