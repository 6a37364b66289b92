//! Immutable leader-term dataset
//!
//! The dataset is read once at startup from the wide-format CSV export and then
//! shared read-only by every request. There is no mutation API: callers only
//! ever see `&[LeaderTerm]`.

use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::model::{is_missing_token, parse_float, parse_int, Ideology, LeaderTerm, TermEnd};
use crate::{Error, Result};

/// Process-wide read-only snapshot of the leader-term table
///
/// Cloning is cheap: clones share the same rows.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Arc<[LeaderTerm]>,
    source: Option<PathBuf>,
}

impl Dataset {
    /// Build a dataset from already-coerced rows
    pub fn from_rows(rows: Vec<LeaderTerm>) -> Self {
        Self {
            rows: rows.into(),
            source: None,
        }
    }

    /// Load the dataset from a CSV file
    pub fn load_csv(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound(format!(
                "Dataset file not found: {}",
                path.display()
            )));
        }
        let file = std::fs::File::open(path)?;
        let mut dataset = Self::from_reader(file)?;
        dataset.source = Some(path.to_path_buf());

        info!(
            "Loaded {} records from {}",
            dataset.len(),
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        );
        Ok(dataset)
    }

    /// Parse CSV content with a header row
    ///
    /// Columns are matched by name and extra columns are ignored. Cells that
    /// cannot be coerced to their expected type are treated as absent.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        let mut skipped = 0usize;
        for (index, record) in csv_reader.deserialize::<RawRecord>().enumerate() {
            let raw = record?;
            match raw.into_term() {
                Some(term) => rows.push(term),
                None => {
                    skipped += 1;
                    // Header is line 1
                    debug!("Skipping row at line {}: missing country or leader", index + 2);
                }
            }
        }

        if skipped > 0 {
            warn!("Skipped {} rows without country or leader", skipped);
        }

        Ok(Self::from_rows(rows))
    }

    /// All rows in source order
    pub fn rows(&self) -> &[LeaderTerm] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LeaderTerm> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// File the dataset was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// One CSV row before type coercion
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRecord {
    country: Option<String>,
    leader: Option<String>,
    party: Option<String>,
    lr: Option<String>,
    president: Option<String>,
    term: Option<String>,
    startofterm: Option<String>,
    yearbegin: Option<String>,
    endofterm: Option<String>,
    yearend: Option<String>,
    wb_region: Option<String>,
    region: Option<String>,
    totalaverage: Option<String>,
    campaign_file: Option<String>,
    campaign_1: Option<String>,
    campaign_2: Option<String>,
    campaign_3: Option<String>,
    campaign_4: Option<String>,
    campaign_average: Option<String>,
    famous_file: Option<String>,
    famous_1: Option<String>,
    famous_2: Option<String>,
    famous_3: Option<String>,
    famous_4: Option<String>,
    famous_average: Option<String>,
    international_file: Option<String>,
    international_1: Option<String>,
    international_2: Option<String>,
    international_3: Option<String>,
    international_4: Option<String>,
    international_average: Option<String>,
    ribbon_file: Option<String>,
    ribbon_1: Option<String>,
    ribbon_2: Option<String>,
    ribbon_3: Option<String>,
    ribbon_4: Option<String>,
    ribbon_average: Option<String>,
}

impl RawRecord {
    fn into_term(self) -> Option<LeaderTerm> {
        let country = text(self.country)?;
        let leader = text(self.leader)?;

        Some(LeaderTerm {
            country,
            leader,
            party: text(self.party),
            ideology: int(&self.lr).and_then(|code| Ideology::from_code(code as i64)),
            president: int(&self.president),
            term_number: int(&self.term),
            startofterm: text(self.startofterm),
            term_start: int(&self.yearbegin),
            endofterm: text(self.endofterm),
            term_end: TermEnd::parse(self.yearend.as_deref()),
            wb_region: text(self.wb_region),
            region: text(self.region),
            total_average: float(&self.totalaverage),
            campaign_file: text(self.campaign_file),
            campaign_1: float(&self.campaign_1),
            campaign_2: float(&self.campaign_2),
            campaign_3: float(&self.campaign_3),
            campaign_4: float(&self.campaign_4),
            campaign_average: float(&self.campaign_average),
            famous_file: text(self.famous_file),
            famous_1: float(&self.famous_1),
            famous_2: float(&self.famous_2),
            famous_3: float(&self.famous_3),
            famous_4: float(&self.famous_4),
            famous_average: float(&self.famous_average),
            international_file: text(self.international_file),
            international_1: float(&self.international_1),
            international_2: float(&self.international_2),
            international_3: float(&self.international_3),
            international_4: float(&self.international_4),
            international_average: float(&self.international_average),
            ribbon_file: text(self.ribbon_file),
            ribbon_1: float(&self.ribbon_1),
            ribbon_2: float(&self.ribbon_2),
            ribbon_3: float(&self.ribbon_3),
            ribbon_4: float(&self.ribbon_4),
            ribbon_average: float(&self.ribbon_average),
        })
    }
}

fn text(cell: Option<String>) -> Option<String> {
    cell.map(|s| s.trim().to_string())
        .filter(|s| !is_missing_token(s))
}

fn int(cell: &Option<String>) -> Option<i32> {
    cell.as_deref().and_then(parse_int)
}

fn float(cell: &Option<String>) -> Option<f64> {
    cell.as_deref().and_then(parse_float)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScoreColumn;

    const SAMPLE: &str = "\
country,leader,party,lr,president,term,startofterm,yearbegin,endofterm,yearend,wb_region,region,totalaverage,campaign_file,campaign_average,famous_file,famous_average,extra_column
Brazil,Lula,PT,-1,1,1,2003-01-01,2003,2006-12-31,2006,LAC,Latin America,0.6,brazil_lula_c.txt,0.7,,,ignored
Brazil,Bolsonaro,PSL,1,1,1,2019-01-01,2019,2022-12-31,2022,LAC,Latin America,1.1,,,,0.9,ignored
Hungary,Orbán,Fidesz,1,0,3,2014-05-10,2014,current,current,ECA,Europe,1.2,,NA,,,
Nowhere,,,,,,,,,,,,,,,,,
";

    #[test]
    fn test_from_reader_coerces_columns() {
        let dataset = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 3, "Row without leader is skipped");

        let lula = &dataset.rows()[0];
        assert_eq!(lula.country, "Brazil");
        assert_eq!(lula.party.as_deref(), Some("PT"));
        assert_eq!(lula.ideology, Some(Ideology::Left));
        assert_eq!(lula.term_start, Some(2003));
        assert_eq!(lula.term_end, TermEnd::Year(2006));
        assert_eq!(lula.score(ScoreColumn::Campaign), Some(0.7));
        assert_eq!(lula.speech_file(ScoreColumn::Campaign), Some("brazil_lula_c.txt"));
        assert_eq!(lula.speech_file(ScoreColumn::Famous), None);
    }

    #[test]
    fn test_from_reader_maps_current_and_missing_values() {
        let dataset = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();
        let orban = &dataset.rows()[2];
        assert_eq!(orban.term_end, TermEnd::Current);
        assert_eq!(orban.term_end_numeric(), Some(2026));
        assert_eq!(orban.score(ScoreColumn::Campaign), None, "NA is absent");
        assert_eq!(orban.term_number, Some(3));
        // Columns missing from the header stay absent
        assert_eq!(orban.ribbon_average, None);
    }

    #[test]
    fn test_from_reader_keeps_item_scores() {
        let csv = "\
country,leader,yearbegin,yearend,campaign_file,campaign_1,campaign_2,campaign_average,famous_4
Ecuador,Correa,2007,2017,ecu_correa_c.txt,1.5,nan,1.2,0.3
";
        let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();
        let correa = &dataset.rows()[0];
        assert_eq!(correa.campaign_1, Some(1.5));
        assert_eq!(correa.campaign_2, None, "nan is absent");
        assert_eq!(correa.item_score(ScoreColumn::Famous, 4), Some(0.3));
        assert_eq!(correa.ribbon_1, None);
    }

    #[test]
    fn test_load_csv_missing_file_is_not_found() {
        let err = Dataset::load_csv(Path::new("/nonexistent/gpd.csv")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_load_csv_records_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gpd.csv");
        std::fs::write(&path, SAMPLE).unwrap();

        let dataset = Dataset::load_csv(&path).unwrap();
        assert_eq!(dataset.source(), Some(path.as_path()));
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn test_clones_share_rows() {
        let dataset = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();
        let clone = dataset.clone();
        assert!(std::ptr::eq(dataset.rows().as_ptr(), clone.rows().as_ptr()));
    }
}
