//! Speech catalog: one entry per (term, speech type) with a speech file

use serde::Serialize;

use crate::model::{ideology_label, Ideology, LeaderTerm, ScoreColumn, TermEnd};

#[derive(Debug, Clone, Default)]
pub struct SpeechFilter {
    pub country: Option<String>,
    pub ideology: Option<Ideology>,
    /// `Total` lists every speech type
    pub speech_type: ScoreColumn,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeechEntry {
    pub filename: String,
    pub country: String,
    pub leader: String,
    pub party: Option<String>,
    pub ideology: Option<Ideology>,
    pub ideology_label: &'static str,
    pub speech_type: ScoreColumn,
    /// Average for this speech type; absent reported as 0
    pub populism_score: f64,
    pub year_start: Option<i32>,
    pub year_end: TermEnd,
    pub term: Option<i32>,
}

pub fn list_speeches<'a, I>(rows: I, filter: &SpeechFilter) -> Vec<SpeechEntry>
where
    I: IntoIterator<Item = &'a LeaderTerm>,
{
    let types: &[ScoreColumn] = match filter.speech_type {
        ScoreColumn::Total => &ScoreColumn::SPEECH_TYPES,
        ref single => std::slice::from_ref(single),
    };

    let mut entries = Vec::new();
    for term in rows {
        if filter.country.as_ref().is_some_and(|c| &term.country != c) {
            continue;
        }
        if filter.ideology.is_some() && term.ideology != filter.ideology {
            continue;
        }
        for &speech_type in types {
            let Some(filename) = term.speech_file(speech_type) else {
                continue;
            };
            entries.push(SpeechEntry {
                filename: filename.to_string(),
                country: term.country.clone(),
                leader: term.leader.clone(),
                party: term.party.clone(),
                ideology: term.ideology,
                ideology_label: ideology_label(term.ideology),
                speech_type,
                populism_score: term.score(speech_type).unwrap_or(0.0),
                year_start: term.term_start,
                year_end: term.term_end.resolved(),
                term: term.term_number,
            });
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<LeaderTerm> {
        vec![
            LeaderTerm::new("Bolivia", "Morales", 2006, TermEnd::Year(2019))
                .with_ideology(Ideology::Left)
                .with_speech_file(ScoreColumn::Campaign, "bolivia_morales_c.txt")
                .with_score(ScoreColumn::Campaign, 1.6)
                .with_speech_file(ScoreColumn::Famous, "bolivia_morales_f.txt"),
            LeaderTerm::new("Poland", "Duda", 2015, TermEnd::Current)
                .with_ideology(Ideology::Right)
                .with_speech_file(ScoreColumn::Ribbon, "poland_duda_r.txt")
                .with_score(ScoreColumn::Ribbon, 0.4),
            LeaderTerm::new("Poland", "Komorowski", 2010, TermEnd::Year(2015)),
        ]
    }

    #[test]
    fn test_lists_every_present_speech_file() {
        let speeches = list_speeches(&rows(), &SpeechFilter::default());
        let files: Vec<_> = speeches.iter().map(|s| s.filename.as_str()).collect();
        assert_eq!(
            files,
            vec!["bolivia_morales_c.txt", "bolivia_morales_f.txt", "poland_duda_r.txt"]
        );
        assert_eq!(speeches[0].populism_score, 1.6);
        assert_eq!(speeches[1].populism_score, 0.0, "Absent average reported as 0");
        assert_eq!(speeches[2].year_end, TermEnd::Year(2026));
        assert_eq!(speeches[2].ideology_label, "Right");
    }

    #[test]
    fn test_filters_by_type_country_and_ideology() {
        let rows = rows();
        let famous = list_speeches(
            &rows,
            &SpeechFilter {
                speech_type: ScoreColumn::Famous,
                ..Default::default()
            },
        );
        assert_eq!(famous.len(), 1);
        assert_eq!(famous[0].speech_type, ScoreColumn::Famous);

        let poland = list_speeches(
            &rows,
            &SpeechFilter {
                country: Some("Poland".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(poland.len(), 1);

        let left = list_speeches(
            &rows,
            &SpeechFilter {
                ideology: Some(Ideology::Left),
                ..Default::default()
            },
        );
        assert_eq!(left.len(), 2);
        assert!(left.iter().all(|s| s.leader == "Morales"));
    }
}
