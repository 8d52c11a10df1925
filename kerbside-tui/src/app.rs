use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use kerbside_core::{
    config::DisplayConfig,
    model::Overview,
    service::{ScheduleLookup, ScheduleService},
};
use tracing::debug;

use crate::calendar::{MonthGrid, months_from};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum View {
    /// Today, tomorrow, and the next date of everything else.
    Upcoming,
    /// Month grids starting with the current month.
    Calendar,
}

pub(crate) struct App {
    pub(crate) service: Arc<ScheduleService>,

    pub(crate) view: View,
    pub(crate) today: NaiveDate,
    /// Set when today was given on the command line and must not follow the clock.
    pub(crate) pinned: bool,

    pub(crate) location: String,
    pub(crate) calendar_months: u32,

    pub(crate) overview: Overview,
    pub(crate) lookup: ScheduleLookup,
}

impl App {
    pub(crate) fn new(
        service: Arc<ScheduleService>,
        view: View,
        today: NaiveDate,
        pinned: bool,
        display: &DisplayConfig,
    ) -> Self {
        let overview = service.overview(today);
        let lookup = service.lookup_for_year(today.year());
        Self {
            service,
            view,
            today,
            pinned,
            location: display.location.clone(),
            calendar_months: display.calendar_months,
            overview,
            lookup,
        }
    }

    /// Follow the wall clock; recomputes only when the date changed.
    pub(crate) fn tick(&mut self, now: NaiveDate) {
        if self.pinned || now == self.today {
            return;
        }
        debug!(from = %self.today, to = %now, "date changed");
        self.today = now;
        self.overview = self.service.overview(now);
        self.lookup = self.service.lookup_for_year(now.year());
    }

    pub(crate) fn toggle_view(&mut self) {
        self.view = match self.view {
            View::Upcoming => View::Calendar,
            View::Calendar => View::Upcoming,
        };
    }

    pub(crate) fn months(&self) -> Vec<MonthGrid> {
        months_from(self.today, self.calendar_months)
    }

    pub(crate) fn show_holiday_note(&self) -> bool {
        match self.view {
            View::Upcoming => self.overview.holiday_note,
            View::Calendar => self.months().iter().any(MonthGrid::is_holiday_month),
        }
    }
}
