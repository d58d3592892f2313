//! Countdown to the end of voting.

use chrono::{DateTime, Utc};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    /// Time remaining until `end`, clamped at zero once it has passed.
    pub fn until(end: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let secs = (end - now).num_seconds();
        if secs <= 0 {
            return Self::default();
        }
        Self {
            days: secs / 86_400,
            hours: secs / 3_600 % 24,
            minutes: secs / 60 % 60,
            seconds: secs % 60,
        }
    }

    pub fn is_over(&self) -> bool {
        *self == Self::default()
    }

    /// (value, label) pairs in display order.
    pub fn units(&self) -> [(i64, &'static str); 4] {
        [
            (self.days, "Days"),
            (self.hours, "Hours"),
            (self.minutes, "Min"),
            (self.seconds, "Sec"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn end() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 7, 23, 59, 59).unwrap()
    }

    #[test]
    fn splits_into_units() {
        let now = end() - (Duration::days(2) + Duration::hours(3) + Duration::minutes(4) + Duration::seconds(5));
        assert_eq!(
            TimeLeft::until(end(), now),
            TimeLeft {
                days: 2,
                hours: 3,
                minutes: 4,
                seconds: 5
            }
        );
    }

    #[test]
    fn sub_second_remainder_truncates() {
        let now = end() - Duration::milliseconds(1_999);
        assert_eq!(TimeLeft::until(end(), now).seconds, 1);
    }

    #[test]
    fn zero_after_end() {
        let left = TimeLeft::until(end(), end() + Duration::hours(1));
        assert!(left.is_over());
        assert!(TimeLeft::until(end(), end()).is_over());
    }

    #[test]
    fn units_order() {
        let left = TimeLeft {
            days: 1,
            hours: 2,
            minutes: 3,
            seconds: 4,
        };
        let labels: Vec<_> = left.units().iter().map(|(_, l)| *l).collect();
        assert_eq!(labels, ["Days", "Hours", "Min", "Sec"]);
    }
}
