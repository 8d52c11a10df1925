//! Christmas and New Year week postponements.

use chrono::{NaiveDate, Weekday};

use crate::model::{HolidayShift, HolidayWindow};

/// Days collections move in the week of New Year's Day.
pub const NEW_YEAR_SHIFT_DAYS: u8 = 1;
/// Days collections move in the week of Christmas Day.
pub const CHRISTMAS_SHIFT_DAYS: u8 = 2;

/// Monday to Sunday week containing `date`, or `None` when that week runs
/// past chrono's date range.
#[must_use]
pub fn week_range_containing(date: NaiveDate) -> Option<HolidayWindow> {
    let week = date.week(Weekday::Mon);
    Some(HolidayWindow {
        start: week.checked_first_day()?,
        end: week.checked_last_day()?,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Holiday dates and their affected weeks for one year.
pub struct HolidayCalendar {
    new_years_day: NaiveDate,
    new_year_week: HolidayWindow,
    christmas_day: NaiveDate,
    christmas_week: HolidayWindow,
}

impl HolidayCalendar {
    /// Resolve the holidays of `year`, or `None` when either holiday week falls
    /// outside chrono's date range.
    #[must_use]
    pub fn for_year(year: i32) -> Option<Self> {
        let new_years_day = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let christmas_day = NaiveDate::from_ymd_opt(year, 12, 25)?;
        Some(Self {
            new_years_day,
            new_year_week: week_range_containing(new_years_day)?,
            christmas_day,
            christmas_week: week_range_containing(christmas_day)?,
        })
    }

    /// Week containing New Year's Day.
    #[must_use]
    pub fn new_year_week(&self) -> HolidayWindow {
        self.new_year_week
    }

    /// Week containing Christmas Day.
    #[must_use]
    pub fn christmas_week(&self) -> HolidayWindow {
        self.christmas_week
    }

    /// Postponement for a collection normally due on `date`.
    ///
    /// Days of the holiday week before the holiday itself keep their slot.
    #[must_use]
    pub fn shift_for(&self, date: NaiveDate) -> HolidayShift {
        if self.new_year_week.contains(date) && date >= self.new_years_day {
            HolidayShift {
                days: NEW_YEAR_SHIFT_DAYS,
            }
        } else if self.christmas_week.contains(date) && date >= self.christmas_day {
            HolidayShift {
                days: CHRISTMAS_SHIFT_DAYS,
            }
        } else {
            HolidayShift::NONE
        }
    }
}

/// Postponement for `date` under the holidays of `year`.
#[must_use]
pub fn shift_for(date: NaiveDate, year: i32) -> HolidayShift {
    HolidayCalendar::for_year(year).map_or(HolidayShift::NONE, |calendar| calendar.shift_for(date))
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn week_starts_monday_ends_sunday() {
        let window = week_range_containing(date(2025, 1, 1)).expect("week in range");
        assert_eq!(window.start, date(2024, 12, 30), "Monday before New Year");
        assert_eq!(window.end, date(2025, 1, 5), "following Sunday");

        let sunday = week_range_containing(date(2025, 1, 5));
        assert_eq!(sunday, Some(window), "Sunday is the last day of its week");
    }

    #[test]
    fn weeks_cut_by_the_date_range_are_none() {
        // The first representable day is not a Monday.
        assert_ne!(NaiveDate::MIN.weekday(), Weekday::Mon, "MIN is mid-week");
        assert_eq!(week_range_containing(NaiveDate::MIN), None, "Monday before MIN");

        assert_ne!(NaiveDate::MAX.weekday(), Weekday::Sun, "MAX is mid-week");
        assert_eq!(week_range_containing(NaiveDate::MAX), None, "Sunday after MAX");
    }

    #[test]
    fn calendars_at_the_range_edges_do_not_panic() {
        assert!(
            HolidayCalendar::for_year(NaiveDate::MIN.year()).is_none(),
            "New Year's week of the first year starts before MIN"
        );

        let last = HolidayCalendar::for_year(NaiveDate::MAX.year()).expect("last year resolves");
        assert!(
            last.christmas_week().end <= NaiveDate::MAX,
            "Christmas week ends by Dec 31"
        );
        assert!(!shift_for(NaiveDate::MIN, NaiveDate::MIN.year()).applies(), "no shift");
    }

    #[test]
    fn new_year_week_shifts_one_day_from_the_holiday() {
        assert_eq!(shift_for(date(2025, 1, 2), 2025).days, 1, "Thursday after New Year");
        assert_eq!(shift_for(date(2025, 1, 5), 2025).days, 1, "end of the week");
        assert!(!shift_for(date(2025, 1, 6), 2025).applies(), "next week is normal");
    }

    #[test]
    fn days_before_the_holiday_keep_their_slot() {
        assert!(
            !shift_for(date(2024, 12, 31), 2025).applies(),
            "New Year's Eve precedes the holiday"
        );
        assert!(
            !shift_for(date(2025, 12, 23), 2025).applies(),
            "Tuesday before Christmas"
        );
    }

    #[test]
    fn christmas_week_shifts_two_days() {
        assert_eq!(shift_for(date(2025, 12, 25), 2025).days, 2, "Christmas Day");
        assert_eq!(shift_for(date(2025, 12, 28), 2025).days, 2, "Sunday after");
        assert!(!shift_for(date(2025, 12, 29), 2025).applies(), "next Monday");
    }

    #[test]
    fn windows_never_overlap_within_a_year() {
        for year in 1990..2100 {
            let calendar = HolidayCalendar::for_year(year).expect("representable year");
            assert!(
                calendar.new_year_week().end < calendar.christmas_week().start,
                "windows of {year} overlap"
            );
        }
    }
}
