//! Gregorian month arithmetic for the layout engine and the controller.

use chrono::{Datelike, NaiveDate};

/// Lowest selectable year.
pub const MIN_YEAR: i32 = 1;
/// Highest selectable year.
pub const MAX_YEAR: i32 = 9999;

/// The date rendered by default: today, in the local timezone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// A (year, month) pair with both components kept in range. Day-of-month
/// and weekday are derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year: year.clamp(MIN_YEAR, MAX_YEAR),
            month: month.clamp(1, 12),
        }
    }

    pub fn today() -> Self {
        let now = today();
        Self::new(now.year(), now.month())
    }

    /// Same year, different month.
    pub fn with_month(self, month: u32) -> Self {
        Self::new(self.year, month)
    }

    /// Previous month, clamped at January. No rollover to the prior year.
    pub fn prev_month(self) -> Self {
        self.with_month(self.month.saturating_sub(1).max(1))
    }

    /// Next month, clamped at December. No rollover to the next year.
    pub fn next_month(self) -> Self {
        self.with_month((self.month + 1).min(12))
    }

    pub fn prev_year(self) -> Self {
        Self::new(self.year - 1, self.month)
    }

    pub fn next_year(self) -> Self {
        Self::new(self.year + 1, self.month)
    }

    /// Weekday of the 1st of this month, 0 = Monday .. 6 = Sunday.
    pub fn first_weekday(self) -> u32 {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.weekday().num_days_from_monday())
            .unwrap_or(0)
    }

    pub fn days_in_month(self) -> u32 {
        days_in_month(self.year, self.month)
    }
}

/// Number of days in the given month of the proleptic Gregorian calendar.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_lengths() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
    }

    #[test]
    fn test_new_clamps_out_of_range_input() {
        let date = CalendarDate::new(20000, 15);
        assert_eq!(date.year, MAX_YEAR);
        assert_eq!(date.month, 12);

        let date = CalendarDate::new(-5, 0);
        assert_eq!(date.year, MIN_YEAR);
        assert_eq!(date.month, 1);
    }

    #[test]
    fn test_first_weekday_counts_from_monday() {
        // 2024-01-01 was a Monday, 2025-06-01 a Sunday
        assert_eq!(CalendarDate::new(2024, 1).first_weekday(), 0);
        assert_eq!(CalendarDate::new(2025, 6).first_weekday(), 6);
    }

    #[test]
    fn test_month_steps_clamp_at_year_edges() {
        let january = CalendarDate::new(2025, 1);
        assert_eq!(january.prev_month(), january);

        let december = CalendarDate::new(2025, 12);
        assert_eq!(december.next_month(), december);
    }

    #[test]
    fn test_year_steps_clamp_at_bounds() {
        let first = CalendarDate::new(MIN_YEAR, 6);
        assert_eq!(first.prev_year(), first);

        let last = CalendarDate::new(MAX_YEAR, 6);
        assert_eq!(last.next_year(), last);
    }
}
