//! Year schedule generation.

use chrono::{Datelike, Days, NaiveDate};
use tracing::{debug, warn};

use crate::holiday::HolidayCalendar;
use crate::model::YearTable;
use crate::rules::CollectionRules;

/// Generate the holiday-aware collection table for every day of `year`.
///
/// Collections are placed on their postponed date, so a table may hold entries
/// for the first two days of `year + 1`. Where two source days land on the same
/// date their kinds are merged.
#[must_use]
pub fn build_year_schedule(rules: &CollectionRules, year: i32) -> YearTable {
    let mut table = YearTable::new();

    let (Some(first_day), Some(holidays)) = (
        NaiveDate::from_ymd_opt(year, 1, 1),
        HolidayCalendar::for_year(year),
    ) else {
        warn!(year, "year outside the supported date range, schedule left empty");
        return table;
    };

    for date in first_day.iter_days().take_while(|day| day.year() == year) {
        let kinds = rules.normal_collections_for(date);
        if kinds.is_empty() {
            continue;
        }

        let shift = holidays.shift_for(date);
        let Some(target) = date.checked_add_days(Days::new(u64::from(shift.days))) else {
            warn!(%date, days = shift.days, "shifted collection date out of range, dropped");
            continue;
        };

        table.record(target, &kinds, shift.applies());
    }

    debug!(year, entries = table.len(), "built collection schedule");
    table
}
