//! Traits describing pluggable collaborators of the schedule service.

use std::sync::Arc;

use crate::model::YearTable;

/// Storage for generated year tables.
///
/// Tables are pure functions of the year and the collection rules, so an
/// implementation may drop entries at any time and racing builds of the same
/// year are interchangeable. A cache instance belongs to a single rule set.
pub trait YearTableCache: Send + Sync {
    /// Return the cached table for `year`, building and storing it on a miss.
    fn get_or_build(&self, year: i32, build: &dyn Fn(i32) -> YearTable) -> Arc<YearTable>;

    /// Drop every cached table.
    fn clear(&self);

    /// Number of years currently held.
    fn len(&self) -> usize;

    /// True when nothing is cached.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
