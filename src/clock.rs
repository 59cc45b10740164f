// SPDX-License-Identifier: MPL-2.0
//! Date/time text for the header and the year for the footer.

use crate::config::{ClockConfig, YearTargets};
use chrono::{DateTime, Datelike, FixedOffset, Local, TimeZone};

/// Where a year label is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearSlot {
    Footer,
    Header,
}

#[derive(Debug, Clone)]
pub struct Clock {
    now: DateTime<FixedOffset>,
    year_targets: YearTargets,
    show_date_time: bool,
}

impl Clock {
    #[must_use]
    pub fn new(config: &ClockConfig) -> Self {
        Self::at(Local::now(), config)
    }

    #[must_use]
    pub fn at<Tz: TimeZone>(now: DateTime<Tz>, config: &ClockConfig) -> Self {
        Self {
            now: now.fixed_offset(),
            year_targets: config.year_targets,
            show_date_time: config.show_date_time,
        }
    }

    /// Refreshes the displayed time.
    pub fn tick<Tz: TimeZone>(&mut self, now: DateTime<Tz>) {
        self.now = now.fixed_offset();
    }

    /// `None` when the date/time display is disabled.
    #[must_use]
    pub fn date_time_text(&self) -> Option<String> {
        self.show_date_time.then(|| format_date_time(&self.now))
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.now.year()
    }

    /// Year label for `slot`, if that slot receives one.
    #[must_use]
    pub fn year_text(&self, slot: YearSlot) -> Option<String> {
        let shown = match (self.year_targets, slot) {
            (_, YearSlot::Footer) => true,
            (YearTargets::All, YearSlot::Header) => true,
            (YearTargets::First, YearSlot::Header) => false,
        };
        shown.then(|| self.year().to_string())
    }
}

/// Formats like `16 October 2026, 14:03:05 +02:00`.
#[must_use]
pub fn format_date_time<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%-d %B %Y, %H:%M:%S %:z").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DateTime<FixedOffset> {
        let offset = FixedOffset::east_opt(2 * 3600).expect("valid offset");
        offset
            .with_ymd_and_hms(2026, 10, 6, 14, 3, 5)
            .single()
            .expect("valid date")
    }

    #[test]
    fn formats_south_african_style() {
        assert_eq!(format_date_time(&sample()), "6 October 2026, 14:03:05 +02:00");
    }

    #[test]
    fn tick_refreshes_text() {
        let mut clock = Clock::at(sample(), &ClockConfig::default());
        clock.tick(sample() + chrono::Duration::seconds(1));
        assert_eq!(
            clock.date_time_text().as_deref(),
            Some("6 October 2026, 14:03:06 +02:00")
        );
    }

    #[test]
    fn year_targets_control_header_year() {
        let all = Clock::at(sample(), &ClockConfig::default());
        assert_eq!(all.year_text(YearSlot::Header).as_deref(), Some("2026"));
        assert_eq!(all.year_text(YearSlot::Footer).as_deref(), Some("2026"));

        let config = ClockConfig {
            year_targets: YearTargets::First,
            ..ClockConfig::default()
        };
        let first = Clock::at(sample(), &config);
        assert_eq!(first.year_text(YearSlot::Header), None);
        assert_eq!(first.year_text(YearSlot::Footer).as_deref(), Some("2026"));
    }

    #[test]
    fn date_time_can_be_hidden() {
        let config = ClockConfig {
            show_date_time: false,
            ..ClockConfig::default()
        };
        assert_eq!(Clock::at(sample(), &config).date_time_text(), None);
    }
}
