//! Record-level filtering (country, leader, year window, minimum score)

use crate::model::LeaderTerm;
use crate::query::window::YearWindow;

/// Filters applied to full records
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub country: Option<String>,
    pub leader: Option<String>,
    pub window: YearWindow,
    /// Minimum total average; rows without one are dropped when set
    pub min_populism: Option<f64>,
}

impl RecordFilter {
    pub fn matches(&self, term: &LeaderTerm) -> bool {
        if let Some(country) = &self.country {
            if &term.country != country {
                return false;
            }
        }
        if let Some(leader) = &self.leader {
            if &term.leader != leader {
                return false;
            }
        }
        if !self.window.overlaps(term) {
            return false;
        }
        match self.min_populism {
            Some(min) => term.total_average.is_some_and(|score| score >= min),
            None => true,
        }
    }

    /// Matching rows in source order
    pub fn apply<'a, I>(&self, rows: I) -> Vec<&'a LeaderTerm>
    where
        I: IntoIterator<Item = &'a LeaderTerm>,
    {
        rows.into_iter().filter(|term| self.matches(term)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ScoreColumn, TermEnd};

    fn rows() -> Vec<LeaderTerm> {
        vec![
            LeaderTerm::new("Peru", "Fujimori", 1990, TermEnd::Year(2000))
                .with_score(ScoreColumn::Total, 1.1),
            LeaderTerm::new("Peru", "Toledo", 2001, TermEnd::Year(2006))
                .with_score(ScoreColumn::Total, 0.3),
            LeaderTerm::new("Peru", "García", 2006, TermEnd::Year(2011)),
            LeaderTerm::new("Chile", "Lagos", 2000, TermEnd::Year(2006))
                .with_score(ScoreColumn::Total, 0.1),
        ]
    }

    #[test]
    fn test_default_filter_keeps_everything() {
        let rows = rows();
        assert_eq!(RecordFilter::default().apply(&rows).len(), 4);
    }

    #[test]
    fn test_country_and_leader_are_exact_matches() {
        let rows = rows();
        let filter = RecordFilter {
            country: Some("Peru".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&rows).len(), 3);

        let filter = RecordFilter {
            leader: Some("toledo".to_string()),
            ..Default::default()
        };
        assert!(filter.apply(&rows).is_empty());
    }

    #[test]
    fn test_min_populism_drops_absent_scores() {
        let rows = rows();
        let filter = RecordFilter {
            min_populism: Some(0.0),
            ..Default::default()
        };
        let kept = filter.apply(&rows);
        assert_eq!(kept.len(), 3);
        assert!(kept.iter().all(|t| t.leader != "García"));
    }

    #[test]
    fn test_window_combines_with_other_filters() {
        let rows = rows();
        let filter = RecordFilter {
            country: Some("Peru".to_string()),
            window: YearWindow::between(2000, 2001),
            ..Default::default()
        };
        let leaders: Vec<_> = filter.apply(&rows).iter().map(|t| t.leader.as_str()).collect();
        assert_eq!(leaders, vec!["Fujimori", "Toledo"]);
    }
}
