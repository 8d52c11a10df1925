//! Property tests over arbitrary dates and years.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use kerbside_core::{
    CollectionKind, CollectionRules, FORTNIGHTLY_REFERENCE_DATE, YearTable, build_year_schedule,
    week_range_containing,
};
use proptest::prelude::*;

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    // 2000-01-01 through roughly 2060.
    (0_u64..22_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid base date") + Days::new(offset)
    })
}

fn kinds_strategy() -> impl Strategy<Value = Vec<CollectionKind>> {
    prop::collection::vec(prop::sample::select(CollectionKind::ALL.to_vec()), 0..6)
}

proptest! {
    #[test]
    fn fortnightly_thursdays_alternate(weeks in 0_u64..2_000) {
        let rules = CollectionRules::default();
        let first = FORTNIGHTLY_REFERENCE_DATE + Days::new(weeks * 7);
        let second = first + Days::new(7);

        prop_assert_ne!(
            rules.is_fortnightly_thursday(first),
            rules.is_fortnightly_thursday(second),
            "{} and {} must alternate", first, second
        );
    }

    #[test]
    fn fortnightly_pair_only_on_thursdays(date in date_strategy()) {
        let kinds = CollectionRules::default().normal_collections_for(date);
        if kinds.contains(&CollectionKind::GeneralWaste) || kinds.contains(&CollectionKind::Glass) {
            prop_assert_eq!(date.weekday(), Weekday::Thu);
            prop_assert!(date >= FORTNIGHTLY_REFERENCE_DATE);
        }
    }

    #[test]
    fn week_range_is_monday_to_sunday(date in date_strategy()) {
        let window = week_range_containing(date).expect("week within range");

        prop_assert_eq!(window.start.weekday(), Weekday::Mon);
        prop_assert_eq!(window.end.weekday(), Weekday::Sun);
        prop_assert!(window.contains(date));
        prop_assert_eq!((window.end - window.start).num_days(), 6);
    }

    #[test]
    fn merged_entries_hold_the_union(first in kinds_strategy(), second in kinds_strategy(), shifted in any::<bool>()) {
        let target = NaiveDate::from_ymd_opt(2025, 12, 27).expect("valid date");
        let mut table = YearTable::new();
        table.record(target, &first, false);
        table.record(target, &second, shifted);

        let entry = table.get(target).expect("entry recorded");
        for kind in first.iter().chain(&second) {
            prop_assert!(entry.contains(*kind), "{} missing", kind);
        }
        for kind in &entry.collections {
            prop_assert_eq!(entry.collections.iter().filter(|other| *other == kind).count(), 1);
        }
        prop_assert_eq!(entry.is_holiday_shift, shifted);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn year_tables_are_deterministic(year in 2000_i32..2060) {
        let rules = CollectionRules::default();
        prop_assert_eq!(build_year_schedule(&rules, year), build_year_schedule(&rules, year));
    }

    #[test]
    fn every_normal_collection_is_scheduled(year in 2000_i32..2060) {
        let rules = CollectionRules::default();
        let table = build_year_schedule(&rules, year);
        let first_day = NaiveDate::from_ymd_opt(year, 1, 1).expect("valid year");

        for date in first_day.iter_days().take_while(|day| day.year() == year) {
            let kinds = rules.normal_collections_for(date);
            if kinds.is_empty() {
                continue;
            }
            let landed = [0_u64, 1, 2]
                .into_iter()
                .filter_map(|offset| table.get(date + Days::new(offset)))
                .any(|day| kinds.iter().all(|kind| day.contains(*kind)));
            prop_assert!(landed, "collections of {} went missing", date);
        }
    }
}
