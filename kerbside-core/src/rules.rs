//! Weekly and fortnightly collection rules, ignoring holidays.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::model::CollectionKind;

/// First fortnightly Thursday of the 2025 round.
///
/// Every 14th day from here is a black bag and glass day. Change this (or the
/// `fortnightly_reference_date` config key) when the council moves the cycle.
pub const FORTNIGHTLY_REFERENCE_DATE: NaiveDate = NaiveDate::from_ymd_opt(2025, 1, 9)
    .expect("2025-01-09 is a valid date");

const FORTNIGHT_DAYS: i64 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Collection rules anchored on a fortnightly reference Thursday.
pub struct CollectionRules {
    reference_date: NaiveDate,
}

impl Default for CollectionRules {
    fn default() -> Self {
        Self::new(FORTNIGHTLY_REFERENCE_DATE)
    }
}

impl CollectionRules {
    /// Rules whose fortnightly cycle starts on `reference_date`.
    #[must_use]
    pub const fn new(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }

    /// Anchor of the fortnightly cycle.
    #[must_use]
    pub const fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Whether `date` is a whole number of fortnights on or after the anchor.
    #[must_use]
    pub fn is_fortnightly_thursday(&self, date: NaiveDate) -> bool {
        if date < self.reference_date {
            return false;
        }
        (date - self.reference_date)
            .num_days()
            .rem_euclid(FORTNIGHT_DAYS)
            == 0
    }

    /// Kinds collected on `date` when no holiday interferes.
    #[must_use]
    pub fn normal_collections_for(&self, date: NaiveDate) -> Vec<CollectionKind> {
        match date.weekday() {
            Weekday::Tue => vec![CollectionKind::FoodWaste],
            Weekday::Thu => {
                let mut kinds = vec![CollectionKind::PaperCardboard, CollectionKind::MetalPlastic];
                if self.is_fortnightly_thursday(date) {
                    kinds.extend([CollectionKind::GeneralWaste, CollectionKind::Glass]);
                }
                kinds
            }
            _ => Vec::new(),
        }
    }
}

/// [`CollectionRules::is_fortnightly_thursday`] against [`FORTNIGHTLY_REFERENCE_DATE`].
#[must_use]
pub fn is_fortnightly_thursday(date: NaiveDate) -> bool {
    CollectionRules::default().is_fortnightly_thursday(date)
}

/// [`CollectionRules::normal_collections_for`] against [`FORTNIGHTLY_REFERENCE_DATE`].
#[must_use]
pub fn normal_collections_for(date: NaiveDate) -> Vec<CollectionKind> {
    CollectionRules::default().normal_collections_for(date)
}
