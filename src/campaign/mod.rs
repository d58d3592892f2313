//! The $TREAK voting campaign: two simulated counters, a one-shot vote, and
//! the screens that show them.

pub mod countdown;
pub mod progress;
pub mod render;
pub mod save;
pub mod votes;

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Local, TimeZone, Utc};
use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::config::CampaignConfig;
use crate::console;
use crate::input::{ClickState, InputEvent};
use crate::rng::RandomSource;
use crate::storage::KeyValueStore;
use crate::time::PeriodicTask;

use countdown::TimeLeft;
use progress::ProgressSimulator;
use votes::{TickOutcome, VoteOption, VoteSimulator};

// Click action IDs.
pub const SELECT_OPTION_BASE: u16 = 10;
pub const CAST_VOTE: u16 = 20;

/// How long a "+N" marker stays next to an option after it grows.
pub const INCREMENT_FLASH_MS: f64 = 1_000.0;

/// Lifecycle of the simulators. A `Campaign` only exists once both have been
/// seeded, so there is no separate uninitialized state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Seeded from storage (or defaults), timers idle.
    Initialized,
    /// Timers armed.
    Ticking,
    /// Timers cancelled.
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Voting,
    Results,
}

/// The visitor's own choice for this page load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserVoteChoice {
    pub selected: Option<VoteOption>,
    pub has_voted: bool,
}

impl UserVoteChoice {
    /// Change the selection. Ignored once the vote is cast.
    pub fn select(&mut self, option: VoteOption) -> bool {
        if self.has_voted {
            return false;
        }
        self.selected = Some(option);
        true
    }

    /// Lock in the selection. Returns it the first time only.
    pub fn confirm(&mut self) -> Option<VoteOption> {
        if self.has_voted {
            return None;
        }
        let option = self.selected?;
        self.has_voted = true;
        Some(option)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecentIncrement {
    pub amount: u64,
    pub until_ms: f64,
}

pub struct Campaign {
    pub config: CampaignConfig,
    store: Box<dyn KeyValueStore>,
    rng: Box<dyn RandomSource>,
    pub progress: ProgressSimulator,
    pub votes: VoteSimulator,
    progress_timer: PeriodicTask,
    vote_timer: PeriodicTask,
    countdown_timer: PeriodicTask,
    pub phase: Phase,
    pub screen: Screen,
    pub choice: UserVoteChoice,
    pub time_left: TimeLeft,
    pub recent: [Option<RecentIncrement>; 3],
    now_ms: f64,
}

/// Wall-clock milliseconds to a UTC instant.
pub fn instant(now_ms: f64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(now_ms as i64)
        .single()
        .unwrap_or_default()
}

impl Campaign {
    /// Seed both simulators from `store`.
    pub fn load(
        config: CampaignConfig,
        mut store: Box<dyn KeyValueStore>,
        mut rng: Box<dyn RandomSource>,
        now_ms: f64,
    ) -> Self {
        let now = instant(now_ms);
        let progress = ProgressSimulator::load(store.as_mut(), &now.with_timezone(&Local));
        let votes = VoteSimulator::load(store.as_ref(), rng.as_mut(), now.timestamp_millis());
        let time_left = TimeLeft::until(config.end, now);
        Self {
            progress_timer: PeriodicTask::new(config.tick_interval_ms),
            vote_timer: PeriodicTask::new(config.tick_interval_ms),
            countdown_timer: PeriodicTask::new(config.countdown_refresh_ms),
            config,
            store,
            rng,
            progress,
            votes,
            phase: Phase::Initialized,
            screen: Screen::Voting,
            choice: UserVoteChoice::default(),
            time_left,
            recent: [None; 3],
            now_ms,
        }
    }

    /// Arm the timers and run the first vote tick right away.
    pub fn start(&mut self, now_ms: f64) {
        if self.phase == Phase::Ticking {
            return;
        }
        self.now_ms = now_ms;
        self.progress_timer.start(now_ms);
        self.vote_timer.start(now_ms);
        self.countdown_timer.start(now_ms);
        self.phase = Phase::Ticking;
        console::log("Campaign: timers started");
        self.tick_votes();
    }

    /// Cancel the timers (view teardown).
    pub fn stop(&mut self) {
        self.progress_timer.stop();
        self.vote_timer.stop();
        self.countdown_timer.stop();
        if self.phase == Phase::Ticking {
            console::log("Campaign: timers stopped");
        }
        self.phase = Phase::Stopped;
    }

    /// Called once per frame with the current wall-clock time.
    pub fn update(&mut self, now_ms: f64) {
        if self.phase != Phase::Ticking {
            return;
        }
        self.now_ms = now_ms;
        if self.progress_timer.poll(now_ms) {
            self.progress.tick(self.rng.as_mut());
        }
        if self.vote_timer.poll(now_ms) {
            self.tick_votes();
        }
        if self.countdown_timer.poll(now_ms) {
            self.time_left = TimeLeft::until(self.config.end, instant(now_ms));
        }
        for slot in self.recent.iter_mut() {
            if matches!(slot, Some(r) if now_ms >= r.until_ms) {
                *slot = None;
            }
        }
    }

    fn tick_votes(&mut self) {
        let outcome = self.votes.tick(
            self.store.as_mut(),
            self.rng.as_mut(),
            instant(self.now_ms),
            self.config.end,
            self.config.tick_interval_ms,
        );
        if let TickOutcome::Advanced { increments, .. } = outcome {
            for (slot, amount) in self.recent.iter_mut().zip(increments) {
                if amount > 0 {
                    *slot = Some(RecentIncrement {
                        amount,
                        until_ms: self.now_ms + INCREMENT_FLASH_MS,
                    });
                }
            }
        }
    }

    pub fn select(&mut self, option: VoteOption) -> bool {
        self.choice.select(option)
    }

    /// Record the selected option's vote and switch to results.
    /// Does nothing without a selection or after the first vote.
    pub fn cast_vote(&mut self) -> bool {
        let option = match self.choice.confirm() {
            Some(o) => o,
            None => return false,
        };
        let now_ms = instant(self.now_ms).timestamp_millis();
        self.votes.record_vote(self.store.as_mut(), option, now_ms);
        self.time_left = TimeLeft::until(self.config.end, instant(self.now_ms));
        self.screen = Screen::Results;
        console::log(&format!("Campaign: vote cast for option {}", option.id()));
        true
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(c) => match c {
                '1' | '2' | '3' if self.screen == Screen::Voting => {
                    let id = *c as u8 - b'0';
                    VoteOption::from_id(id).is_some_and(|o| self.select(o))
                }
                'v' | 'V' | '\n' if self.screen == Screen::Voting => self.cast_vote(),
                _ => false,
            },
            InputEvent::Click(id) => match *id {
                CAST_VOTE => self.cast_vote(),
                id if id > SELECT_OPTION_BASE && id <= SELECT_OPTION_BASE + 3 => {
                    VoteOption::from_id((id - SELECT_OPTION_BASE) as u8)
                        .is_some_and(|o| self.select(o))
                }
                _ => false,
            },
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(self, f, area, click_state);
    }
}
