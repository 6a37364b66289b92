//! Per-country aggregation of populism scores
//!
//! Two weightings are supported:
//!
//! - **Simple**: arithmetic mean of the selected score over the country's
//!   terms; ideology is the most frequent `lr` value.
//! - **Time-weighted**: each term contributes in proportion to the number of
//!   years it shares with the query window; ideology is the `lr` value with the
//!   most overlap-years.
//!
//! Ideology ties go to the lowest code (Left before Center before Right).
//! A country whose mean is undefined (no scored terms, or zero total overlap)
//! reports an average of 0.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::model::{Ideology, LeaderTerm, ScoreColumn};
use crate::query::window::YearWindow;

/// Region reported when a country has none
pub const UNKNOWN_REGION: &str = "Unknown";

/// How term scores are weighted within a country
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weighting {
    /// Every term counts once
    Simple,
    /// Terms weighted by inclusive overlap-years with `[year_start, year_end]`
    TimeWeighted { year_start: i32, year_end: i32 },
}

impl Weighting {
    /// Time weighting only applies when both window bounds are present
    pub fn for_window(window: &YearWindow, time_weighted: bool) -> Self {
        match (time_weighted, window.bounds()) {
            (true, Some((year_start, year_end))) => Weighting::TimeWeighted {
                year_start,
                year_end,
            },
            _ => Weighting::Simple,
        }
    }

    /// Weight of one term under this weighting
    fn weight_of(&self, term: &LeaderTerm) -> f64 {
        match *self {
            Weighting::Simple => 1.0,
            Weighting::TimeWeighted {
                year_start,
                year_end,
            } => YearWindow::between(year_start, year_end)
                .overlap_years(term)
                .unwrap_or(0) as f64,
        }
    }
}

/// Aggregated figures for one country
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryAggregate {
    pub country: String,
    pub avg_populism: f64,
    pub region: String,
    pub wb_region: String,
    pub ideology: Option<Ideology>,
    pub num_terms: usize,
}

#[derive(Default)]
struct Accumulator<'a> {
    region: Option<&'a str>,
    wb_region: Option<&'a str>,
    weighted_score: f64,
    total_weight: f64,
    ideology_weight: [f64; 3],
    ideology_seen: [bool; 3],
    num_terms: usize,
}

impl<'a> Accumulator<'a> {
    fn add(&mut self, term: &'a LeaderTerm, column: ScoreColumn, weighting: &Weighting) {
        self.num_terms += 1;
        if self.region.is_none() {
            self.region = term.region.as_deref();
        }
        if self.wb_region.is_none() {
            self.wb_region = term.wb_region.as_deref();
        }

        let weight = weighting.weight_of(term);
        if let Some(score) = term.score(column) {
            self.weighted_score += score * weight;
            self.total_weight += weight;
        }
        if let Some(ideology) = term.ideology {
            self.ideology_seen[ideology.index()] = true;
            self.ideology_weight[ideology.index()] += weight;
        }
    }

    fn average(&self) -> f64 {
        if self.total_weight > 0.0 {
            self.weighted_score / self.total_weight
        } else {
            0.0
        }
    }

    /// Heaviest ideology; strict `>` keeps the lowest code on ties
    fn plurality_ideology(&self) -> Option<Ideology> {
        let mut best: Option<(Ideology, f64)> = None;
        for ideology in Ideology::ALL {
            if !self.ideology_seen[ideology.index()] {
                continue;
            }
            let weight = self.ideology_weight[ideology.index()];
            match best {
                Some((_, best_weight)) if weight <= best_weight => {}
                _ => best = Some((ideology, weight)),
            }
        }
        best.map(|(ideology, _)| ideology)
    }

    fn finish(self, country: &str) -> CountryAggregate {
        CountryAggregate {
            country: country.to_string(),
            avg_populism: self.average(),
            region: self.region.unwrap_or(UNKNOWN_REGION).to_string(),
            wb_region: self.wb_region.unwrap_or(UNKNOWN_REGION).to_string(),
            ideology: self.plurality_ideology(),
            num_terms: self.num_terms,
        }
    }
}

/// Group rows by country and aggregate the selected score
///
/// Countries are returned in ascending name order. Every input row is counted
/// in its country's `num_terms`, whether or not it has a score.
pub fn aggregate_by_country<'a, I>(
    rows: I,
    column: ScoreColumn,
    weighting: Weighting,
) -> Vec<CountryAggregate>
where
    I: IntoIterator<Item = &'a LeaderTerm>,
{
    let mut groups: BTreeMap<&'a str, Accumulator<'a>> = BTreeMap::new();
    for term in rows {
        groups
            .entry(term.country.as_str())
            .or_default()
            .add(term, column, &weighting);
    }

    groups
        .into_iter()
        .map(|(country, acc)| acc.finish(country))
        .collect()
}
