//! Domain data structures for collection kinds, day schedules, and year tables.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
/// Kinds of waste picked up at the kerbside.
pub enum CollectionKind {
    /// Paper and cardboard (red bags).
    PaperCardboard,
    /// Metal tins and plastic packaging (purple bags).
    MetalPlastic,
    /// General rubbish (black bags).
    GeneralWaste,
    /// Glass bottles and jars (glass box).
    Glass,
    /// Food waste (food caddies).
    FoodWaste,
}

impl CollectionKind {
    /// Every kind, in registry order.
    pub const ALL: [Self; 5] = [
        Self::PaperCardboard,
        Self::MetalPlastic,
        Self::GeneralWaste,
        Self::Glass,
        Self::FoodWaste,
    ];

    /// Canonical display name, also used to order kinds sharing a date.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::PaperCardboard => "Red Bags",
            Self::MetalPlastic => "Purple Bags",
            Self::GeneralWaste => "Black Bags",
            Self::Glass => "Glass Box",
            Self::FoodWaste => "Food Caddies",
        }
    }

    /// Whether the kind is only collected on alternate Thursdays.
    #[must_use]
    pub const fn is_fortnightly(self) -> bool {
        matches!(self, Self::GeneralWaste | Self::Glass)
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Resolved collections for one calendar date.
pub struct DaySchedule {
    /// Kinds collected, in rule evaluation order and without duplicates.
    pub collections: Vec<CollectionKind>,
    /// Set when at least one contributing day was moved by a holiday.
    pub is_holiday_shift: bool,
}

impl DaySchedule {
    /// Fold the collections of another source day into this one.
    pub fn merge(&mut self, kinds: &[CollectionKind], shifted: bool) {
        for kind in kinds {
            if !self.collections.contains(kind) {
                self.collections.push(*kind);
            }
        }
        self.is_holiday_shift |= shifted;
    }

    /// Check whether `kind` is collected on this day.
    #[must_use]
    pub fn contains(&self, kind: CollectionKind) -> bool {
        self.collections.contains(&kind)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// All day schedules generated from the source days of one calendar year.
///
/// Keys are dates of `year`, plus at most two days of the following year when a
/// late December collection is pushed past New Year's Eve.
pub struct YearTable {
    days: BTreeMap<NaiveDate, DaySchedule>,
}

impl YearTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            days: BTreeMap::new(),
        }
    }

    /// Schedule stored for `date`, if any collection lands on it.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&DaySchedule> {
        self.days.get(&date)
    }

    /// Merge `kinds` into the entry at `date`, creating it when absent.
    pub fn record(&mut self, date: NaiveDate, kinds: &[CollectionKind], shifted: bool) {
        self.days.entry(date).or_default().merge(kinds, shifted);
    }

    /// Entries in ascending date order.
    pub fn iter(&self) -> btree_map::Iter<'_, NaiveDate, DaySchedule> {
        self.days.iter()
    }

    /// Number of dates with at least one collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// True when no collection was generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl<'table> IntoIterator for &'table YearTable {
    type Item = (&'table NaiveDate, &'table DaySchedule);
    type IntoIter = btree_map::Iter<'table, NaiveDate, DaySchedule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Inclusive Monday to Sunday week around a holiday.
pub struct HolidayWindow {
    /// Monday starting the week.
    pub start: NaiveDate,
    /// Sunday ending the week.
    pub end: NaiveDate,
}

impl HolidayWindow {
    /// Check whether `date` lies inside the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Postponement applied to a collection day.
pub struct HolidayShift {
    /// Days the collection moves forward: 0, 1 or 2.
    pub days: u8,
}

impl HolidayShift {
    /// No postponement.
    pub const NONE: Self = Self { days: 0 };

    /// Whether the collection moves at all.
    #[must_use]
    pub const fn applies(self) -> bool {
        self.days > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Kinds whose next collection falls on the same date.
pub struct UpcomingGroup {
    /// Collection date.
    pub date: NaiveDate,
    /// Kinds collected on that date, ordered by display name.
    pub kinds: Vec<CollectionKind>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Everything the "next collections" screen shows for one day.
pub struct Overview {
    /// Date the overview was computed for.
    pub today: NaiveDate,
    /// Kinds collected today.
    pub today_collections: Vec<CollectionKind>,
    /// Kinds collected tomorrow.
    pub tomorrow_collections: Vec<CollectionKind>,
    /// Next dates of every other kind.
    pub later: Vec<UpcomingGroup>,
    /// Set when any of the shown dates is moved by a holiday.
    pub holiday_note: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn merge_keeps_first_occurrence_order() {
        let mut day = DaySchedule::default();
        day.merge(
            &[CollectionKind::FoodWaste, CollectionKind::PaperCardboard],
            false,
        );
        day.merge(
            &[CollectionKind::PaperCardboard, CollectionKind::Glass],
            true,
        );

        assert_eq!(
            day.collections,
            vec![
                CollectionKind::FoodWaste,
                CollectionKind::PaperCardboard,
                CollectionKind::Glass
            ],
            "duplicates must be dropped without reordering"
        );
        assert!(day.is_holiday_shift, "shift flag must be sticky");
    }

    #[test]
    fn unshifted_merge_does_not_clear_flag() {
        let mut day = DaySchedule::default();
        day.merge(&[CollectionKind::FoodWaste], true);
        day.merge(&[CollectionKind::FoodWaste], false);

        assert!(day.is_holiday_shift, "flag is an OR over sources");
        assert_eq!(day.collections.len(), 1, "food waste appears once");
    }

    #[test]
    fn record_creates_and_merges_entries() {
        let mut table = YearTable::new();
        let target = date(2025, 12, 27);
        table.record(target, &[CollectionKind::FoodWaste], true);
        table.record(
            target,
            &[CollectionKind::PaperCardboard, CollectionKind::FoodWaste],
            false,
        );

        let entry = table.get(target).expect("entry recorded");
        assert_eq!(
            entry.collections,
            vec![CollectionKind::FoodWaste, CollectionKind::PaperCardboard],
            "union by kind"
        );
        assert!(entry.is_holiday_shift, "one source was shifted");
        assert_eq!(table.len(), 1, "one date in table");
    }

    #[test]
    fn window_is_inclusive() {
        let window = HolidayWindow {
            start: date(2024, 12, 30),
            end: date(2025, 1, 5),
        };
        assert!(window.contains(date(2024, 12, 30)), "start is inside");
        assert!(window.contains(date(2025, 1, 5)), "end is inside");
        assert!(!window.contains(date(2025, 1, 6)), "next Monday is outside");
    }

    #[test]
    fn display_uses_canonical_name() {
        assert_eq!(CollectionKind::Glass.to_string(), "Glass Box", "glass name");
        assert!(
            CollectionKind::ALL
                .iter()
                .filter(|kind| kind.is_fortnightly())
                .eq([CollectionKind::GeneralWaste, CollectionKind::Glass].iter()),
            "only black bags and glass are fortnightly"
        );
    }
}
