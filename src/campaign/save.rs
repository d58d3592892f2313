//! localStorage への読み書き。
//!
//! ## キー
//!
//! - `streak-start-date`: ISO-8601 (`2025-01-31T00:00:00.000Z`)。初回アクセス時に一度だけ書き込む。
//! - `streak-vote-state`: `{"1":245,"2":178,"3":198,"lastUpdate":<epoch ms>,"targetVotes":29500}`
//!
//! 読み込みは寛容に行う。各オプションの値は数値でも数値文字列でもよく、
//! 欠落・不正・0 以下・上限超過の値はオプションごとのデフォルト値で補完する。
//! JSON として壊れている場合はデータ全体をデフォルトにフォールバックする。

use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};
use serde::Serialize;
use serde_json::Value;

use super::votes::{VoteOption, VoteState};
use crate::console;
use crate::storage::KeyValueStore;

pub const START_DATE_KEY: &str = "streak-start-date";
pub const VOTE_STATE_KEY: &str = "streak-vote-state";

/// 保存値の上限。これを超える値は壊れたデータとみなしデフォルトで補完する。
pub const MAX_STORED_COUNT: u64 = u32::MAX as u64;

/// 書き込み用のレコード。フィールド名は既存データとの互換のため固定。
#[derive(Serialize)]
struct VoteRecord {
    #[serde(rename = "1")]
    touchdown_teaser: u64,
    #[serde(rename = "2")]
    bikini_cup: u64,
    #[serde(rename = "3")]
    courtside: u64,
    #[serde(rename = "lastUpdate")]
    last_update: i64,
    #[serde(rename = "targetVotes")]
    target_votes: u64,
}

impl VoteRecord {
    fn from_state(state: &VoteState) -> Self {
        Self {
            touchdown_teaser: state.votes(VoteOption::TouchdownTeaser),
            bikini_cup: state.votes(VoteOption::BikiniCup),
            courtside: state.votes(VoteOption::Courtside),
            last_update: state.last_update,
            target_votes: state.target_votes,
        }
    }
}

/// ストレージから読み出した、まだデフォルト補完していない値。
#[derive(Clone, Debug, PartialEq)]
pub struct StoredVotes {
    counts: [Option<u64>; 3],
    target_votes: Option<u64>,
}

impl StoredVotes {
    /// 欠落値を補完して `VoteState` にする。
    /// `target` は `targetVotes` が無い場合にのみ呼ばれる。
    pub fn into_state(self, now_ms: i64, target: impl FnOnce() -> u64) -> VoteState {
        let mut counts = [0; 3];
        for &o in VoteOption::all() {
            counts[o.index()] = self.counts[o.index()].unwrap_or_else(|| o.default_votes());
        }
        VoteState {
            counts,
            last_update: now_ms,
            target_votes: self.target_votes.unwrap_or_else(target),
        }
    }
}

/// Coerce a JSON value the way JavaScript's `Number(x) || fallback` would,
/// restricted to positive whole counts no larger than [`MAX_STORED_COUNT`].
/// `None` means "use the fallback".
fn coerce_count(value: Option<&Value>) -> Option<u64> {
    let n = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<f64>().ok()?
        }
        Value::Bool(true) => 1.0,
        _ => return None,
    };
    if n.is_finite() && (1.0..=MAX_STORED_COUNT as f64).contains(&n) {
        Some(n.floor() as u64)
    } else {
        None
    }
}

/// Parse a stored vote record. Returns `None` when the key is missing or the
/// value is not a JSON object.
pub fn decode_vote_state(json: &str) -> Option<StoredVotes> {
    let value: Value = match serde_json::from_str(json) {
        Ok(v) => v,
        Err(e) => {
            console::warn(&format!("Vote simulator: stored state unreadable, using defaults: {e}"));
            return None;
        }
    };
    let obj = match value.as_object() {
        Some(obj) => obj,
        None => {
            console::warn("Vote simulator: stored state is not an object, using defaults");
            return None;
        }
    };

    let mut counts = [None; 3];
    for &o in VoteOption::all() {
        counts[o.index()] = coerce_count(obj.get(&o.id().to_string()));
    }
    Some(StoredVotes {
        counts,
        target_votes: coerce_count(obj.get("targetVotes")),
    })
}

pub fn read_vote_state(store: &dyn KeyValueStore) -> Option<StoredVotes> {
    match store.get_item(VOTE_STATE_KEY) {
        Ok(Some(json)) => decode_vote_state(&json),
        Ok(None) => None,
        Err(e) => {
            console::warn(&format!("Vote simulator: failed to read stored state: {e}"));
            None
        }
    }
}

/// 保存に失敗してもエラーにはしない（コンソールに警告を出すのみ）。
pub fn write_vote_state(store: &mut dyn KeyValueStore, state: &VoteState) -> bool {
    let json = match serde_json::to_string(&VoteRecord::from_state(state)) {
        Ok(j) => j,
        Err(e) => {
            console::warn(&format!("Vote simulator: failed to serialize state: {e}"));
            return false;
        }
    };
    match store.set_item(VOTE_STATE_KEY, &json) {
        Ok(()) => true,
        Err(e) => {
            console::warn(&format!("Vote simulator: failed to save state: {e}"));
            false
        }
    }
}

// ── Start date ───────────────────────────────────────────────

/// Midnight at the start of `now`'s calendar day, in `now`'s time zone.
pub fn start_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    let midnight = now.date_naive().and_hms_opt(0, 0, 0).unwrap_or_default();
    match now.timezone().from_local_datetime(&midnight).earliest() {
        Some(local) => local.with_timezone(&Utc),
        // Midnight skipped by a DST jump.
        None => now.with_timezone(&Utc),
    }
}

/// Same shape as JavaScript's `Date.prototype.toISOString()`.
pub fn format_start_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Accepts RFC 3339 or a bare `YYYY-MM-DD` (read as UTC midnight).
pub fn parse_start_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

/// Read the campaign start date, creating it (today's midnight) on first use.
/// An unparseable value is replaced the same way.
pub fn load_or_create_start_date<Tz: TimeZone>(
    store: &mut dyn KeyValueStore,
    now: &DateTime<Tz>,
) -> DateTime<Utc> {
    match store.get_item(START_DATE_KEY) {
        Ok(Some(stored)) => {
            if let Some(date) = parse_start_date(&stored) {
                return date;
            }
            console::warn(&format!(
                "Progress simulator: stored start date {stored:?} unreadable, resetting"
            ));
        }
        Ok(None) => {}
        Err(e) => {
            console::warn(&format!("Progress simulator: failed to read start date: {e}"));
        }
    }

    let start = start_of_day(now);
    if let Err(e) = store.set_item(START_DATE_KEY, &format_start_date(&start)) {
        console::warn(&format!("Progress simulator: failed to save start date: {e}"));
    }
    start
}
