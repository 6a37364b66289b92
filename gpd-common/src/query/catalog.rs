//! Distinct countries, regions and leaders

use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

use crate::model::LeaderTerm;

/// Distinct `region` and `wb_region` values, each sorted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionCatalog {
    pub regions: Vec<String>,
    pub wb_regions: Vec<String>,
}

/// One distinct (leader, country, party) combination
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LeaderEntry {
    pub leader: String,
    pub country: String,
    pub party: Option<String>,
}

/// Distinct country names in ascending order
pub fn countries<'a, I>(rows: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a LeaderTerm>,
{
    rows.into_iter()
        .map(|term| term.country.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn regions<'a, I>(rows: I) -> RegionCatalog
where
    I: IntoIterator<Item = &'a LeaderTerm>,
{
    let mut regions = BTreeSet::new();
    let mut wb_regions = BTreeSet::new();
    for term in rows {
        if let Some(region) = term.region.as_deref() {
            regions.insert(region);
        }
        if let Some(wb_region) = term.wb_region.as_deref() {
            wb_regions.insert(wb_region);
        }
    }
    RegionCatalog {
        regions: regions.into_iter().map(str::to_string).collect(),
        wb_regions: wb_regions.into_iter().map(str::to_string).collect(),
    }
}

/// Distinct leaders in first-seen order, optionally for one country
pub fn leaders<'a, I>(rows: I, country: Option<&str>) -> Vec<LeaderEntry>
where
    I: IntoIterator<Item = &'a LeaderTerm>,
{
    let mut seen = HashSet::new();
    rows.into_iter()
        .filter(|term| country.map_or(true, |c| term.country == c))
        .map(|term| LeaderEntry {
            leader: term.leader.clone(),
            country: term.country.clone(),
            party: term.party.clone(),
        })
        .filter(|entry| seen.insert(entry.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TermEnd;

    fn rows() -> Vec<LeaderTerm> {
        vec![
            LeaderTerm::new("Turkey", "Erdoğan", 2003, TermEnd::Year(2014))
                .with_party("AKP")
                .with_regions("Europe", "ECA"),
            LeaderTerm::new("Turkey", "Erdoğan", 2014, TermEnd::Current)
                .with_party("AKP")
                .with_term_number(2),
            LeaderTerm::new("Argentina", "Kirchner", 2007, TermEnd::Year(2015))
                .with_regions("Latin America", "LAC"),
        ]
    }

    #[test]
    fn test_countries_sorted_and_distinct() {
        assert_eq!(countries(&rows()), vec!["Argentina", "Turkey"]);
    }

    #[test]
    fn test_regions_skip_absent_values() {
        let catalog = regions(&rows());
        assert_eq!(catalog.regions, vec!["Europe", "Latin America"]);
        assert_eq!(catalog.wb_regions, vec!["ECA", "LAC"]);
    }

    #[test]
    fn test_leaders_deduplicated_in_first_seen_order() {
        let rows = rows();
        let all = leaders(&rows, None);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].leader, "Erdoğan");
        assert_eq!(all[1].leader, "Kirchner");

        let turkey = leaders(&rows, Some("Turkey"));
        assert_eq!(turkey.len(), 1);
        assert_eq!(turkey[0].party.as_deref(), Some("AKP"));

        assert!(leaders(&rows, Some("Atlantis")).is_empty());
    }
}
