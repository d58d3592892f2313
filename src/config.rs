//! Campaign-wide settings.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

/// Simulation tick period: 15 seconds.
pub const TICK_INTERVAL_MS: f64 = 15_000.0;

/// Countdown refresh period on the results screen.
pub const COUNTDOWN_REFRESH_MS: f64 = 1_000.0;

#[derive(Clone, Debug, PartialEq)]
pub struct CampaignConfig {
    /// Voting closes (and the countdown reaches zero) at this instant.
    pub end: DateTime<Utc>,
    pub tick_interval_ms: f64,
    pub countdown_refresh_ms: f64,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            end: campaign_end(),
            tick_interval_ms: TICK_INTERVAL_MS,
            countdown_refresh_ms: COUNTDOWN_REFRESH_MS,
        }
    }
}

/// 2025-02-07 23:59:59 in the visitor's local time zone.
fn campaign_end() -> DateTime<Utc> {
    let naive = NaiveDate::from_ymd_opt(2025, 2, 7)
        .and_then(|d| d.and_hms_opt(23, 59, 59))
        .unwrap_or_default();
    match Local.from_local_datetime(&naive).earliest() {
        Some(local) => local.with_timezone(&Utc),
        None => Utc.from_utc_datetime(&naive),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn default_end_is_feb_7_2025() {
        let cfg = CampaignConfig::default();
        let local = cfg.end.with_timezone(&Local);
        assert_eq!((local.year(), local.month(), local.day()), (2025, 2, 7));
        assert_eq!(cfg.tick_interval_ms, 15_000.0);
    }
}
