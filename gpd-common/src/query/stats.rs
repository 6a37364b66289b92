//! Dataset-wide summary statistics

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::model::{LeaderTerm, ScoreColumn};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearRange {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

/// Statistics over the defined total averages; all `None` when there are none
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopulismStats {
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Rows carrying a speech file, per speech type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeechTypeCounts {
    pub campaign: usize,
    pub famous: usize,
    pub international: usize,
    pub ribbon: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub total_records: usize,
    pub total_countries: usize,
    pub total_leaders: usize,
    pub year_range: YearRange,
    pub populism_stats: PopulismStats,
    pub regions: BTreeMap<String, usize>,
    pub speech_types: SpeechTypeCounts,
}

pub fn summarize_dataset(rows: &[LeaderTerm]) -> DatasetSummary {
    let countries: HashSet<&str> = rows.iter().map(|t| t.country.as_str()).collect();
    let leaders: HashSet<&str> = rows.iter().map(|t| t.leader.as_str()).collect();

    let mut regions = BTreeMap::new();
    for region in rows.iter().filter_map(|t| t.region.as_deref()) {
        *regions.entry(region.to_string()).or_insert(0) += 1;
    }

    let with_file = |column: ScoreColumn| rows.iter().filter(|t| t.speech_file(column).is_some()).count();

    DatasetSummary {
        total_records: rows.len(),
        total_countries: countries.len(),
        total_leaders: leaders.len(),
        year_range: YearRange {
            min: rows.iter().filter_map(|t| t.term_start).min(),
            max: rows.iter().filter_map(|t| t.term_end_numeric()).max(),
        },
        populism_stats: populism_stats(rows.iter().filter_map(|t| t.total_average).collect()),
        regions,
        speech_types: SpeechTypeCounts {
            campaign: with_file(ScoreColumn::Campaign),
            famous: with_file(ScoreColumn::Famous),
            international: with_file(ScoreColumn::International),
            ribbon: with_file(ScoreColumn::Ribbon),
        },
    }
}

fn populism_stats(mut values: Vec<f64>) -> PopulismStats {
    if values.is_empty() {
        return PopulismStats {
            mean: None,
            median: None,
            min: None,
            max: None,
        };
    }
    values.sort_by(|a, b| a.total_cmp(b));

    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;
    let median = if n % 2 == 1 {
        values[n / 2]
    } else {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    };

    PopulismStats {
        mean: Some(mean),
        median: Some(median),
        min: values.first().copied(),
        max: values.last().copied(),
    }
}
