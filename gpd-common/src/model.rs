//! Leader-term records and the selectors used to query them
//!
//! One [`LeaderTerm`] is one contiguous period a leader held office, with the
//! populism scores coded from that term's speeches.

use serde::{Serialize, Serializer};
use std::fmt;

/// Numeric year substituted for the `current` term-end sentinel
pub const CURRENT_TERM_YEAR: i32 = 2026;

/// Term end as it appears in the source table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermEnd {
    /// A concrete end year
    Year(i32),
    /// Leader still in office (`current` in the source table)
    Current,
    /// Neither an integer nor `current`; kept verbatim, has no numeric value
    Unparsed(String),
    /// Cell was empty
    Missing,
}

impl TermEnd {
    /// Parse a raw `yearend` cell
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !is_missing_token(s)) else {
            return TermEnd::Missing;
        };
        if raw.eq_ignore_ascii_case("current") {
            return TermEnd::Current;
        }
        match parse_int(raw) {
            Some(year) => TermEnd::Year(year),
            None => TermEnd::Unparsed(raw.to_string()),
        }
    }

    /// Numeric end year used for interval comparisons
    pub fn numeric(&self) -> Option<i32> {
        match self {
            TermEnd::Year(year) => Some(*year),
            TermEnd::Current => Some(CURRENT_TERM_YEAR),
            TermEnd::Unparsed(_) | TermEnd::Missing => None,
        }
    }

    /// Same term end with `current` replaced by [`CURRENT_TERM_YEAR`]
    pub fn resolved(&self) -> TermEnd {
        match self {
            TermEnd::Current => TermEnd::Year(CURRENT_TERM_YEAR),
            other => other.clone(),
        }
    }
}

impl Serialize for TermEnd {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TermEnd::Year(year) => serializer.serialize_i32(*year),
            TermEnd::Current => serializer.serialize_str("current"),
            TermEnd::Unparsed(raw) => serializer.serialize_str(raw),
            TermEnd::Missing => serializer.serialize_none(),
        }
    }
}

/// Left-right ideology code (`lr` column)
///
/// Variants are declared in code order so the derived `Ord` matches the
/// numeric codes (-1 < 0 < 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Ideology {
    Left,
    Center,
    Right,
}

impl Ideology {
    pub const ALL: [Ideology; 3] = [Ideology::Left, Ideology::Center, Ideology::Right];

    pub fn code(self) -> i8 {
        match self {
            Ideology::Left => -1,
            Ideology::Center => 0,
            Ideology::Right => 1,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            -1 => Some(Ideology::Left),
            0 => Some(Ideology::Center),
            1 => Some(Ideology::Right),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Ideology::Left => "Left",
            Ideology::Center => "Center",
            Ideology::Right => "Right",
        }
    }

    /// Position in [`Ideology::ALL`]
    pub(crate) fn index(self) -> usize {
        (self.code() + 1) as usize
    }
}

impl Serialize for Ideology {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.code())
    }
}

/// Label for an optional ideology ("Unknown" when absent)
pub fn ideology_label(ideology: Option<Ideology>) -> &'static str {
    ideology.map(Ideology::label).unwrap_or("Unknown")
}

/// Score column selector (the `speech_type` query parameter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScoreColumn {
    #[default]
    Total,
    Campaign,
    Famous,
    International,
    Ribbon,
}

impl ScoreColumn {
    /// Speech types that carry their own speech file
    pub const SPEECH_TYPES: [ScoreColumn; 4] = [
        ScoreColumn::Campaign,
        ScoreColumn::Famous,
        ScoreColumn::International,
        ScoreColumn::Ribbon,
    ];

    /// Parse a selector; unknown names select the total average
    pub fn from_param(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "campaign" => ScoreColumn::Campaign,
            "famous" => ScoreColumn::Famous,
            "international" => ScoreColumn::International,
            "ribbon" => ScoreColumn::Ribbon,
            _ => ScoreColumn::Total,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreColumn::Total => "total",
            ScoreColumn::Campaign => "campaign",
            ScoreColumn::Famous => "famous",
            ScoreColumn::International => "international",
            ScoreColumn::Ribbon => "ribbon",
        }
    }

    /// Name of the score column in the source table
    pub fn column_name(self) -> &'static str {
        match self {
            ScoreColumn::Total => "totalaverage",
            ScoreColumn::Campaign => "campaign_average",
            ScoreColumn::Famous => "famous_average",
            ScoreColumn::International => "international_average",
            ScoreColumn::Ribbon => "ribbon_average",
        }
    }
}

impl fmt::Display for ScoreColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ScoreColumn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One leader-term record
///
/// Serializes with the source table's column names; absent values become null.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderTerm {
    pub country: String,
    pub leader: String,
    pub party: Option<String>,
    #[serde(rename = "lr")]
    pub ideology: Option<Ideology>,
    pub president: Option<i32>,
    #[serde(rename = "term")]
    pub term_number: Option<i32>,
    pub startofterm: Option<String>,
    #[serde(rename = "yearbegin")]
    pub term_start: Option<i32>,
    pub endofterm: Option<String>,
    #[serde(rename = "yearend")]
    pub term_end: TermEnd,
    pub wb_region: Option<String>,
    pub region: Option<String>,
    #[serde(rename = "totalaverage")]
    pub total_average: Option<f64>,
    pub campaign_file: Option<String>,
    pub campaign_1: Option<f64>,
    pub campaign_2: Option<f64>,
    pub campaign_3: Option<f64>,
    pub campaign_4: Option<f64>,
    pub campaign_average: Option<f64>,
    pub famous_file: Option<String>,
    pub famous_1: Option<f64>,
    pub famous_2: Option<f64>,
    pub famous_3: Option<f64>,
    pub famous_4: Option<f64>,
    pub famous_average: Option<f64>,
    pub international_file: Option<String>,
    pub international_1: Option<f64>,
    pub international_2: Option<f64>,
    pub international_3: Option<f64>,
    pub international_4: Option<f64>,
    pub international_average: Option<f64>,
    pub ribbon_file: Option<String>,
    pub ribbon_1: Option<f64>,
    pub ribbon_2: Option<f64>,
    pub ribbon_3: Option<f64>,
    pub ribbon_4: Option<f64>,
    pub ribbon_average: Option<f64>,
}

impl LeaderTerm {
    /// Minimal record; every optional column starts absent
    pub fn new(
        country: impl Into<String>,
        leader: impl Into<String>,
        term_start: i32,
        term_end: TermEnd,
    ) -> Self {
        Self {
            country: country.into(),
            leader: leader.into(),
            party: None,
            ideology: None,
            president: None,
            term_number: Some(1),
            startofterm: None,
            term_start: Some(term_start),
            endofterm: None,
            term_end,
            wb_region: None,
            region: None,
            total_average: None,
            campaign_file: None,
            campaign_1: None,
            campaign_2: None,
            campaign_3: None,
            campaign_4: None,
            campaign_average: None,
            famous_file: None,
            famous_1: None,
            famous_2: None,
            famous_3: None,
            famous_4: None,
            famous_average: None,
            international_file: None,
            international_1: None,
            international_2: None,
            international_3: None,
            international_4: None,
            international_average: None,
            ribbon_file: None,
            ribbon_1: None,
            ribbon_2: None,
            ribbon_3: None,
            ribbon_4: None,
            ribbon_average: None,
        }
    }

    pub fn with_party(mut self, party: impl Into<String>) -> Self {
        self.party = Some(party.into());
        self
    }

    pub fn with_ideology(mut self, ideology: Ideology) -> Self {
        self.ideology = Some(ideology);
        self
    }

    pub fn with_term_number(mut self, term: i32) -> Self {
        self.term_number = Some(term);
        self
    }

    pub fn with_regions(mut self, region: impl Into<String>, wb_region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self.wb_region = Some(wb_region.into());
        self
    }

    pub fn with_score(mut self, column: ScoreColumn, score: f64) -> Self {
        *self.score_slot_mut(column) = Some(score);
        self
    }

    /// Set item `item` (1-4) of a speech's coded scores; ignored for `Total`
    pub fn with_item_score(mut self, column: ScoreColumn, item: usize, score: f64) -> Self {
        if let Some(slot) = self.item_slot_mut(column, item) {
            *slot = Some(score);
        }
        self
    }

    pub fn with_speech_file(mut self, column: ScoreColumn, file: impl Into<String>) -> Self {
        if let Some(slot) = self.file_slot_mut(column) {
            *slot = Some(file.into());
        }
        self
    }

    /// Numeric term end (`current` maps to [`CURRENT_TERM_YEAR`])
    pub fn term_end_numeric(&self) -> Option<i32> {
        self.term_end.numeric()
    }

    /// Score for the selected column
    pub fn score(&self, column: ScoreColumn) -> Option<f64> {
        match column {
            ScoreColumn::Total => self.total_average,
            ScoreColumn::Campaign => self.campaign_average,
            ScoreColumn::Famous => self.famous_average,
            ScoreColumn::International => self.international_average,
            ScoreColumn::Ribbon => self.ribbon_average,
        }
    }

    /// Score of one coded item (1-4) of a speech; `Total` has no items
    pub fn item_score(&self, column: ScoreColumn, item: usize) -> Option<f64> {
        let items = match column {
            ScoreColumn::Total => return None,
            ScoreColumn::Campaign => [self.campaign_1, self.campaign_2, self.campaign_3, self.campaign_4],
            ScoreColumn::Famous => [self.famous_1, self.famous_2, self.famous_3, self.famous_4],
            ScoreColumn::International => [
                self.international_1,
                self.international_2,
                self.international_3,
                self.international_4,
            ],
            ScoreColumn::Ribbon => [self.ribbon_1, self.ribbon_2, self.ribbon_3, self.ribbon_4],
        };
        item.checked_sub(1).and_then(|i| items.get(i).copied().flatten())
    }

    /// Speech file for a speech type (`Total` has no file)
    pub fn speech_file(&self, column: ScoreColumn) -> Option<&str> {
        match column {
            ScoreColumn::Total => None,
            ScoreColumn::Campaign => self.campaign_file.as_deref(),
            ScoreColumn::Famous => self.famous_file.as_deref(),
            ScoreColumn::International => self.international_file.as_deref(),
            ScoreColumn::Ribbon => self.ribbon_file.as_deref(),
        }
    }

    fn score_slot_mut(&mut self, column: ScoreColumn) -> &mut Option<f64> {
        match column {
            ScoreColumn::Total => &mut self.total_average,
            ScoreColumn::Campaign => &mut self.campaign_average,
            ScoreColumn::Famous => &mut self.famous_average,
            ScoreColumn::International => &mut self.international_average,
            ScoreColumn::Ribbon => &mut self.ribbon_average,
        }
    }

    fn item_slot_mut(&mut self, column: ScoreColumn, item: usize) -> Option<&mut Option<f64>> {
        let slot = match (column, item) {
            (ScoreColumn::Campaign, 1) => &mut self.campaign_1,
            (ScoreColumn::Campaign, 2) => &mut self.campaign_2,
            (ScoreColumn::Campaign, 3) => &mut self.campaign_3,
            (ScoreColumn::Campaign, 4) => &mut self.campaign_4,
            (ScoreColumn::Famous, 1) => &mut self.famous_1,
            (ScoreColumn::Famous, 2) => &mut self.famous_2,
            (ScoreColumn::Famous, 3) => &mut self.famous_3,
            (ScoreColumn::Famous, 4) => &mut self.famous_4,
            (ScoreColumn::International, 1) => &mut self.international_1,
            (ScoreColumn::International, 2) => &mut self.international_2,
            (ScoreColumn::International, 3) => &mut self.international_3,
            (ScoreColumn::International, 4) => &mut self.international_4,
            (ScoreColumn::Ribbon, 1) => &mut self.ribbon_1,
            (ScoreColumn::Ribbon, 2) => &mut self.ribbon_2,
            (ScoreColumn::Ribbon, 3) => &mut self.ribbon_3,
            (ScoreColumn::Ribbon, 4) => &mut self.ribbon_4,
            _ => return None,
        };
        Some(slot)
    }

    fn file_slot_mut(&mut self, column: ScoreColumn) -> Option<&mut Option<String>> {
        match column {
            ScoreColumn::Total => None,
            ScoreColumn::Campaign => Some(&mut self.campaign_file),
            ScoreColumn::Famous => Some(&mut self.famous_file),
            ScoreColumn::International => Some(&mut self.international_file),
            ScoreColumn::Ribbon => Some(&mut self.ribbon_file),
        }
    }
}

/// Cell values treated as absent (pandas reads these as NaN)
pub(crate) fn is_missing_token(s: &str) -> bool {
    matches!(
        s,
        "" | "NA" | "N/A" | "NaN" | "nan" | "NULL" | "null" | "None"
    )
}

/// Lenient integer coercion: accepts `"1998"` and `"1998.0"`
pub(crate) fn parse_int(s: &str) -> Option<i32> {
    let s = s.trim();
    if let Ok(v) = s.parse::<i32>() {
        return Some(v);
    }
    let v = s.parse::<f64>().ok()?;
    if v.is_finite() && v.fract() == 0.0 && v.abs() <= i32::MAX as f64 {
        Some(v as i32)
    } else {
        None
    }
}

/// Float coercion; NaN and infinities count as absent
pub(crate) fn parse_float(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
