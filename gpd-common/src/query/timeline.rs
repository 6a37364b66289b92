//! Chronological term list for one country

use serde::Serialize;

use crate::model::{LeaderTerm, ScoreColumn, TermEnd};
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub leader: String,
    pub party: Option<String>,
    pub year_start: Option<i32>,
    pub year_end: TermEnd,
    pub term: Option<i32>,
    /// Absent total average reported as 0
    pub total_populism: f64,
    pub campaign: Option<f64>,
    pub famous: Option<f64>,
    pub international: Option<f64>,
    pub ribbon: Option<f64>,
}

/// Terms of `country` sorted by start year
///
/// Returns [`Error::NotFound`] when the dataset has no row for the country.
pub fn country_timeline(rows: &[LeaderTerm], country: &str) -> Result<Vec<TimelineEntry>> {
    let mut terms: Vec<&LeaderTerm> = rows.iter().filter(|t| t.country == country).collect();
    if terms.is_empty() {
        return Err(Error::NotFound(format!("Country '{}' not found", country)));
    }

    // Stable sort; rows without a start year go last
    terms.sort_by_key(|t| (t.term_start.is_none(), t.term_start));

    Ok(terms
        .into_iter()
        .map(|t| TimelineEntry {
            leader: t.leader.clone(),
            party: t.party.clone(),
            year_start: t.term_start,
            year_end: t.term_end.resolved(),
            term: t.term_number,
            total_populism: t.total_average.unwrap_or(0.0),
            campaign: t.score(ScoreColumn::Campaign),
            famous: t.score(ScoreColumn::Famous),
            international: t.score(ScoreColumn::International),
            ribbon: t.score(ScoreColumn::Ribbon),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_sorted_by_start_year() {
        let rows = vec![
            LeaderTerm::new("Venezuela", "Maduro", 2013, TermEnd::Current),
            LeaderTerm::new("Venezuela", "Chávez", 1999, TermEnd::Year(2013))
                .with_score(ScoreColumn::Total, 1.9)
                .with_score(ScoreColumn::Campaign, 1.7),
            LeaderTerm::new("Colombia", "Uribe", 2002, TermEnd::Year(2010)),
        ];
        let timeline = country_timeline(&rows, "Venezuela").unwrap();
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].leader, "Chávez");
        assert_eq!(timeline[0].campaign, Some(1.7));
        assert_eq!(timeline[0].famous, None);
        assert_eq!(timeline[1].leader, "Maduro");
        assert_eq!(timeline[1].year_end, TermEnd::Year(2026));
        assert_eq!(timeline[1].total_populism, 0.0);
    }

    #[test]
    fn test_unknown_country_is_not_found() {
        let rows = vec![LeaderTerm::new("Peru", "Humala", 2011, TermEnd::Year(2016))];
        let err = country_timeline(&rows, "Atlantis").unwrap_err();
        assert!(matches!(err, Error::NotFound(msg) if msg.contains("Atlantis")));
    }
}
