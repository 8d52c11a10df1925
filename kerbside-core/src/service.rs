//! High-level query facade used by clients.

use std::sync::Arc;

use chrono::{Datelike, Days, NaiveDate};

use crate::cache::UnboundedYearCache;
use crate::model::{CollectionKind, DaySchedule, Overview, UpcomingGroup, YearTable};
use crate::ports::YearTableCache;
use crate::rules::CollectionRules;
use crate::schedule::build_year_schedule;

/// Days searched ahead for the next collection of each kind.
pub const LOOKAHEAD_DAYS: usize = 365;

/// Snapshot of several year tables answering date queries.
///
/// Earlier tables win; later tables only fill dates the earlier ones lack.
#[derive(Debug, Clone)]
pub struct ScheduleLookup {
    tables: Vec<Arc<YearTable>>,
}

impl ScheduleLookup {
    /// Overlay `tables` in priority order.
    #[must_use]
    pub fn new(tables: Vec<Arc<YearTable>>) -> Self {
        Self { tables }
    }

    /// Schedule for `date` from the first table holding it.
    #[must_use]
    pub fn entry(&self, date: NaiveDate) -> Option<&DaySchedule> {
        self.tables.iter().find_map(|table| table.get(date))
    }

    /// Kinds collected on `date`, empty when nothing is due.
    #[must_use]
    pub fn collections_on(&self, date: NaiveDate) -> Vec<CollectionKind> {
        self.entry(date)
            .map(|day| day.collections.clone())
            .unwrap_or_default()
    }

    /// Whether the collections on `date` were moved there by a holiday.
    #[must_use]
    pub fn is_holiday_shifted(&self, date: NaiveDate) -> bool {
        self.entry(date).is_some_and(|day| day.is_holiday_shift)
    }

    /// First date in the `LOOKAHEAD_DAYS` days from `start` on which `kind` is collected.
    #[must_use]
    pub fn next_collection_of(&self, kind: CollectionKind, start: NaiveDate) -> Option<NaiveDate> {
        start
            .iter_days()
            .take(LOOKAHEAD_DAYS)
            .find(|date| self.entry(*date).is_some_and(|day| day.contains(kind)))
    }
}

/// Public entry point for collection queries.
pub struct ScheduleService {
    rules: CollectionRules,
    cache: Arc<dyn YearTableCache>,
}

impl Default for ScheduleService {
    fn default() -> Self {
        Self::new(
            CollectionRules::default(),
            Arc::new(UnboundedYearCache::new()),
        )
    }
}

impl ScheduleService {
    /// Create a service over `rules`, memoizing tables in `cache`.
    #[must_use]
    pub fn new(rules: CollectionRules, cache: Arc<dyn YearTableCache>) -> Self {
        Self { rules, cache }
    }

    /// Cached table for `year`, generated on first use.
    #[must_use]
    pub fn year_table(&self, year: i32) -> Arc<YearTable> {
        let rules = self.rules;
        self.cache
            .get_or_build(year, &move |source_year| build_year_schedule(&rules, source_year))
    }

    /// Lookup over `year`, then `year + 1`, then the December spill of `year - 1`.
    #[must_use]
    pub fn lookup_for_year(&self, year: i32) -> ScheduleLookup {
        ScheduleLookup::new(vec![
            self.year_table(year),
            self.year_table(year.saturating_add(1)),
            self.year_table(year.saturating_sub(1)),
        ])
    }

    /// Kinds collected on `date`.
    #[must_use]
    pub fn collections_on(&self, date: NaiveDate) -> Vec<CollectionKind> {
        self.lookup_for_year(date.year()).collections_on(date)
    }

    /// Whether the collections on `date` were moved there by a holiday.
    #[must_use]
    pub fn is_holiday_shifted(&self, date: NaiveDate) -> bool {
        self.lookup_for_year(date.year()).is_holiday_shifted(date)
    }

    /// Next date of every kind not in `exclude`, searched from the day after tomorrow.
    ///
    /// Groups are ordered by date, kinds within a group by display name. Kinds
    /// with no collection in the next [`LOOKAHEAD_DAYS`] days are left out.
    #[must_use]
    pub fn upcoming_grouped_by_date(
        &self,
        today: NaiveDate,
        exclude: &[CollectionKind],
    ) -> Vec<UpcomingGroup> {
        let Some(start) = today.checked_add_days(Days::new(2)) else {
            return Vec::new();
        };
        upcoming_groups(&self.lookup_for_year(today.year()), start, exclude)
    }

    /// Today, tomorrow, and the next date of everything else.
    #[must_use]
    pub fn overview(&self, today: NaiveDate) -> Overview {
        let lookup = self.lookup_for_year(today.year());
        let tomorrow = today.succ_opt();

        let today_collections = lookup.collections_on(today);
        let tomorrow_collections = tomorrow
            .map(|date| lookup.collections_on(date))
            .unwrap_or_default();

        let soon: Vec<CollectionKind> = today_collections
            .iter()
            .chain(&tomorrow_collections)
            .copied()
            .collect();
        let later = tomorrow
            .and_then(|date| date.succ_opt())
            .map(|start| upcoming_groups(&lookup, start, &soon))
            .unwrap_or_default();

        let holiday_note = lookup.is_holiday_shifted(today)
            || tomorrow.is_some_and(|date| lookup.is_holiday_shifted(date))
            || later
                .iter()
                .any(|group| lookup.is_holiday_shifted(group.date));

        Overview {
            today,
            today_collections,
            tomorrow_collections,
            later,
            holiday_note,
        }
    }
}

fn upcoming_groups(
    lookup: &ScheduleLookup,
    start: NaiveDate,
    exclude: &[CollectionKind],
) -> Vec<UpcomingGroup> {
    let mut found: Vec<(NaiveDate, CollectionKind)> = CollectionKind::ALL
        .into_iter()
        .filter(|kind| !exclude.contains(kind))
        .filter_map(|kind| {
            lookup
                .next_collection_of(kind, start)
                .map(|date| (date, kind))
        })
        .collect();

    found.sort_by(|(left_date, left_kind), (right_date, right_kind)| {
        left_date
            .cmp(right_date)
            .then_with(|| left_kind.display_name().cmp(right_kind.display_name()))
    });

    let mut groups: Vec<UpcomingGroup> = Vec::new();
    for (date, kind) in found {
        match groups.last_mut() {
            Some(group) if group.date == date => group.kinds.push(kind),
            _ => groups.push(UpcomingGroup {
                date,
                kinds: vec![kind],
            }),
        }
    }
    groups
}
