use chrono::{Datelike, Months, NaiveDate};

/// Days of one month laid out in Monday-first weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MonthGrid {
    pub(crate) first_day: NaiveDate,
    /// Seven cells per week, `None` for padding outside the month.
    pub(crate) weeks: Vec<Vec<Option<NaiveDate>>>,
}

impl MonthGrid {
    pub(crate) fn new(first_day: NaiveDate) -> Self {
        let month = first_day.month();
        let lead = first_day.weekday().num_days_from_monday();

        let mut cells: Vec<Option<NaiveDate>> = (0..lead).map(|_| None).collect();
        cells.extend(
            first_day
                .iter_days()
                .take_while(|day| day.month() == month)
                .map(Some),
        );
        while cells.len() % 7 != 0 {
            cells.push(None);
        }

        Self {
            first_day,
            weeks: cells.chunks(7).map(<[_]>::to_vec).collect(),
        }
    }

    /// Month name, with the year appended when it is not `current_year`.
    pub(crate) fn title(&self, current_year: i32) -> String {
        if self.first_day.year() == current_year {
            self.first_day.format("%B").to_string()
        } else {
            self.first_day.format("%B %Y").to_string()
        }
    }

    pub(crate) fn is_holiday_month(&self) -> bool {
        matches!(self.first_day.month(), 1 | 12)
    }
}

/// `count` consecutive months starting with the month of `today`.
pub(crate) fn months_from(today: NaiveDate, count: u32) -> Vec<MonthGrid> {
    let Some(first) = today.with_day(1) else {
        return Vec::new();
    };
    (0..count)
        .map_while(|offset| first.checked_add_months(Months::new(offset)))
        .map(MonthGrid::new)
        .collect()
}
