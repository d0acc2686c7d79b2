// src/domain/date.rs
use crate::domain::{Locale, Timestamp};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use tracing::warn;

const NAIVE_PATTERNS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

enum Instant {
    Missing,
    Invalid,
    At(DateTime<Utc>),
}

/// Turns server timestamps into display strings for one locale and UTC offset
#[derive(Debug, Clone, Copy)]
pub struct DateFormatter {
    locale: Locale,
    offset: FixedOffset,
}

impl DateFormatter {
    pub fn new(locale: Locale, offset: FixedOffset) -> Self {
        Self { locale, offset }
    }

    /// Formatter using the machine's current UTC offset
    pub fn local(locale: Locale) -> Self {
        Self::new(locale, *Local::now().offset())
    }

    /// Never fails: missing values give an empty string, garbage gives the
    /// locale's invalid-date sentinel.
    pub fn format_date(&self, timestamp: Option<&Timestamp>) -> String {
        let Some(timestamp) = timestamp else {
            return String::new();
        };

        match self.resolve(timestamp) {
            Instant::Missing => String::new(),
            Instant::Invalid => {
                warn!(?timestamp, "Error formatting date");
                self.locale.messages().invalid_date.to_string()
            }
            Instant::At(instant) => instant
                .with_timezone(&self.offset)
                .format(self.locale.date_pattern())
                .to_string(),
        }
    }

    fn resolve(&self, timestamp: &Timestamp) -> Instant {
        match timestamp {
            Timestamp::Millis(0) => Instant::Missing,
            Timestamp::Millis(ms) => from_millis(*ms),
            Timestamp::Fractional(ms) if *ms == 0.0 => Instant::Missing,
            Timestamp::Fractional(ms) if !ms.is_finite() => Instant::Invalid,
            Timestamp::Fractional(ms) => from_millis(ms.trunc() as i64),
            Timestamp::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    Instant::Missing
                } else {
                    self.parse_text(text)
                }
            }
            Timestamp::Other(_) => Instant::Invalid,
        }
    }

    fn parse_text(&self, text: &str) -> Instant {
        if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
            return Instant::At(instant.with_timezone(&Utc));
        }

        // Without a zone the value is wall-clock time in the display offset
        for pattern in NAIVE_PATTERNS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(text, pattern) {
                return match self.offset.from_local_datetime(&naive).single() {
                    Some(instant) => Instant::At(instant.with_timezone(&Utc)),
                    None => Instant::Invalid,
                };
            }
        }

        // Bare dates are midnight UTC
        match NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
        {
            Some(midnight) => Instant::At(midnight.and_utc()),
            None => Instant::Invalid,
        }
    }
}

fn from_millis(ms: i64) -> Instant {
    match DateTime::from_timestamp_millis(ms) {
        Some(instant) => Instant::At(instant),
        None => Instant::Invalid,
    }
}
