//! # Calendar
//!
//! Date rules behind the calendar-driven discounts, and the [`Clock`]
//! abstraction that supplies "today".
//!
//! ```text
//! ┌──────────────┐  today()   ┌──────────────────────┐
//! │ SystemClock  │──────────► │ is_special_sale_day  │  Dec 25, Aug 15
//! │ (UTC+offset) │            │ is_anniversary       │  Dec 1
//! ├──────────────┤            │ BirthMonth::contains │  month match
//! │ FixedClock   │──────────► └──────────────────────┘
//! │ (tests)      │
//! └──────────────┘
//! ```
//!
//! Rules never look at the year.

use std::fmt;

use chrono::{Datelike, FixedOffset, NaiveDate, Offset, Utc};

// =============================================================================
// Clock
// =============================================================================

/// Source of the current calendar date.
pub trait Clock: Send + Sync + fmt::Debug {
    fn today(&self) -> NaiveDate;
}

/// Wall clock shifted by a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(offset: FixedOffset) -> Self {
        SystemClock { offset }
    }

    /// Clock reading UTC dates.
    pub fn utc() -> Self {
        SystemClock { offset: Utc.fix() }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }
}

/// Clock frozen on one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

// =============================================================================
// Date Rules
// =============================================================================

/// Dec 25 or Aug 15.
pub fn is_special_sale_day(date: NaiveDate) -> bool {
    matches!((date.month(), date.day()), (12, 25) | (8, 15))
}

/// Dec 1.
pub fn is_anniversary(date: NaiveDate) -> bool {
    date.month() == 12 && date.day() == 1
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_special_sale_days() {
        assert!(is_special_sale_day(date(2024, 12, 25)));
        assert!(is_special_sale_day(date(1990, 8, 15)));
        assert!(!is_special_sale_day(date(2024, 12, 24)));
        assert!(!is_special_sale_day(date(2024, 8, 16)));
    }

    #[test]
    fn test_anniversary() {
        assert!(is_anniversary(date(2030, 12, 1)));
        assert!(!is_anniversary(date(2030, 11, 1)));
        assert!(!is_anniversary(date(2030, 12, 2)));
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(date(2024, 8, 15));
        assert_eq!(clock.today(), date(2024, 8, 15));
    }

    #[test]
    fn test_system_clock_offset_shifts_date() {
        let east = SystemClock::new(FixedOffset::east_opt(14 * 3600).unwrap());
        let west = SystemClock::new(FixedOffset::west_opt(12 * 3600).unwrap());
        let gap = east.today().signed_duration_since(west.today()).num_days();
        assert!((1..=2).contains(&gap));
    }
}
