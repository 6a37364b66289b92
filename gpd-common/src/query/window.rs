//! Interval-overlap filter
//!
//! A term `[term_start, term_end]` overlaps the query window
//! `[year_start, year_end]` when `term_start <= year_end` and
//! `term_end >= year_start`. Both ends are inclusive, so a term that ends in
//! exactly `year_start` still overlaps.

use serde::Serialize;

use crate::model::LeaderTerm;

/// Optional `[year_start, year_end]` query window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct YearWindow {
    pub year_start: Option<i32>,
    pub year_end: Option<i32>,
}

impl YearWindow {
    pub fn new(year_start: Option<i32>, year_end: Option<i32>) -> Self {
        Self {
            year_start,
            year_end,
        }
    }

    /// Window with both bounds set
    pub fn between(year_start: i32, year_end: i32) -> Self {
        Self::new(Some(year_start), Some(year_end))
    }

    /// Window that admits every row
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Both bounds, when both are supplied
    pub fn bounds(&self) -> Option<(i32, i32)> {
        self.year_start.zip(self.year_end)
    }

    /// Does the term interval intersect this window?
    ///
    /// Rows missing a year needed by the comparison never match.
    pub fn overlaps(&self, term: &LeaderTerm) -> bool {
        let starts_in_time = match self.year_end {
            Some(end) => term.term_start.is_some_and(|start| start <= end),
            None => true,
        };
        let ends_in_time = match self.year_start {
            Some(start) => term.term_end_numeric().is_some_and(|end| end >= start),
            None => true,
        };
        starts_in_time && ends_in_time
    }

    /// Rows overlapping this window, in source order
    pub fn filter<'a, I>(&self, rows: I) -> impl Iterator<Item = &'a LeaderTerm>
    where
        I: IntoIterator<Item = &'a LeaderTerm>,
    {
        let window = *self;
        rows.into_iter().filter(move |term| window.overlaps(term))
    }

    /// Inclusive count of years the term shares with this window
    ///
    /// `None` unless both bounds are set and the term has numeric years.
    /// The raw span can be zero or negative for malformed rows (start after
    /// end); it is floored at 0.
    pub fn overlap_years(&self, term: &LeaderTerm) -> Option<i64> {
        let (year_start, year_end) = self.bounds()?;
        let term_start = term.term_start?;
        let term_end = term.term_end_numeric()?;

        let overlap_start = term_start.max(year_start) as i64;
        let overlap_end = term_end.min(year_end) as i64;
        Some((overlap_end - overlap_start + 1).max(0))
    }
}
