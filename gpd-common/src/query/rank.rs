//! Leader-term rankings by score

use serde::Serialize;
use std::collections::BTreeSet;

use crate::model::{ideology_label, Ideology, LeaderTerm, ScoreColumn, TermEnd};

/// Ranking options
#[derive(Debug, Clone, Default)]
pub struct RankOptions {
    /// Keep at most this many entries
    pub limit: Option<usize>,
    /// Keep only terms whose ideology is in this set
    pub ideologies: Option<BTreeSet<Ideology>>,
}

/// One ranked leader-term
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTerm {
    pub rank: usize,
    pub country: String,
    pub leader: String,
    pub party: Option<String>,
    pub ideology: Option<Ideology>,
    pub ideology_label: &'static str,
    pub year_start: Option<i32>,
    pub year_end: TermEnd,
    pub term: Option<i32>,
    pub score: f64,
}

/// Rank terms by the selected score, highest first
///
/// Terms without a score are left out entirely, so ranks are always the
/// contiguous sequence `1..=n`. Equal scores keep source order.
pub fn rank_terms<'a, I>(rows: I, column: ScoreColumn, options: &RankOptions) -> Vec<RankedTerm>
where
    I: IntoIterator<Item = &'a LeaderTerm>,
{
    let mut scored: Vec<(&LeaderTerm, f64)> = rows
        .into_iter()
        .filter(|term| match &options.ideologies {
            Some(allowed) => term.ideology.is_some_and(|i| allowed.contains(&i)),
            None => true,
        })
        .filter_map(|term| term.score(column).map(|score| (term, score)))
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    if let Some(limit) = options.limit {
        scored.truncate(limit);
    }

    scored
        .into_iter()
        .enumerate()
        .map(|(position, (term, score))| RankedTerm {
            rank: position + 1,
            country: term.country.clone(),
            leader: term.leader.clone(),
            party: term.party.clone(),
            ideology: term.ideology,
            ideology_label: ideology_label(term.ideology),
            year_start: term.term_start,
            year_end: term.term_end.resolved(),
            term: term.term_number,
            score,
        })
        .collect()
}
