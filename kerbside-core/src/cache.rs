//! In-memory [`YearTableCache`] implementations.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::{debug, trace};

use crate::model::YearTable;
use crate::ports::YearTableCache;

/// Keeps every table ever built for the lifetime of the cache.
#[derive(Debug, Default)]
pub struct UnboundedYearCache {
    tables: RwLock<HashMap<i32, Arc<YearTable>>>,
}

impl UnboundedYearCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl YearTableCache for UnboundedYearCache {
    fn get_or_build(&self, year: i32, build: &dyn Fn(i32) -> YearTable) -> Arc<YearTable> {
        if let Some(table) = self
            .tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&year)
        {
            trace!(year, "year table cache hit");
            return Arc::clone(table);
        }

        // Built outside the lock; a concurrent builder of the same year loses to the first insert.
        let built = Arc::new(build(year));
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(tables.entry(year).or_insert(built))
    }

    fn clear(&self) {
        self.tables
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn len(&self) -> usize {
        self.tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Keeps at most `capacity` years, evicting the least recently used one.
#[derive(Debug)]
pub struct BoundedYearCache {
    capacity: usize,
    // Most recently used at the back.
    tables: Mutex<VecDeque<(i32, Arc<YearTable>)>>,
}

impl BoundedYearCache {
    /// Create a cache holding up to `capacity` years (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            tables: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Maximum number of years held.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl YearTableCache for BoundedYearCache {
    fn get_or_build(&self, year: i32, build: &dyn Fn(i32) -> YearTable) -> Arc<YearTable> {
        let mut tables = self.tables.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(position) = tables.iter().position(|(cached, _)| *cached == year)
            && let Some(entry) = tables.remove(position)
        {
            trace!(year, "year table cache hit");
            let table = Arc::clone(&entry.1);
            tables.push_back(entry);
            return table;
        }

        let table = Arc::new(build(year));
        if tables.len() >= self.capacity
            && let Some((evicted, _)) = tables.pop_front()
        {
            debug!(evicted, "evicted year table");
        }
        tables.push_back((year, Arc::clone(&table)));
        table
    }

    fn clear(&self) {
        self.tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn len(&self) -> usize {
        self.tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
