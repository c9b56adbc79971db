// Core data structures shared by the strategies, the pipeline and the API.

use serde::Serialize;
use std::collections::BTreeMap;

pub const UNKNOWN_SUBJECT: &str = "Unknown Subject";
pub const UNKNOWN_TEACHER: &str = "Unknown Teacher";
pub const DEFAULT_ROOM: &str = "TBA";

/// Canonical weekday names, Monday first. The index is the sort key.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Position of a canonical weekday name in the week (Monday = 0). Unknown names sort last.
pub fn weekday_index(day: &str) -> usize {
    WEEKDAYS.iter().position(|d| *d == day).unwrap_or(WEEKDAYS.len())
}

/// One scheduled class occurrence for one section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LectureEntry {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    /// Display label, "start - end".
    pub time: String,
    pub subject: String,
    pub teacher: String,
    pub room: String,
    pub section: String,
    pub confidence: f64,
}

impl LectureEntry {
    /// Builds an entry, deriving the display label and clamping confidence to [0, 1].
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        day: &str,
        start_time: &str,
        end_time: &str,
        subject: &str,
        teacher: &str,
        room: &str,
        section: &str,
        confidence: f64,
    ) -> Self {
        LectureEntry {
            day: day.to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            time: time_label(start_time, end_time),
            subject: subject.to_string(),
            teacher: teacher.to_string(),
            room: room.to_string(),
            section: section.to_string(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    pub fn set_end_time(&mut self, end_time: &str) {
        self.end_time = end_time.to_string();
        self.time = time_label(&self.start_time, &self.end_time);
    }
}

pub fn time_label(start: &str, end: &str) -> String {
    format!("{} - {}", start, end)
}

/// A time-slot header discovered in a row: column plus normalized bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSlot {
    pub col: usize,
    pub raw: String,
    pub start: String,
    pub end: String,
}

/// Identifies the layout assumption that produced a candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StrategyKind {
    RoomRows,
    ColumnDays,
    SheetSections,
    Proximity,
}

impl StrategyKind {
    /// Evaluation order; also the tie-break order when counts and confidence are equal.
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::RoomRows,
        StrategyKind::ColumnDays,
        StrategyKind::SheetSections,
        StrategyKind::Proximity,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::RoomRows => "room-rows",
            StrategyKind::ColumnDays => "column-days",
            StrategyKind::SheetSections => "sheet-sections",
            StrategyKind::Proximity => "proximity",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Candidate output of one strategy over one sheet.
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub strategy: StrategyKind,
    pub sheet: String,
    pub entries: Vec<LectureEntry>,
    pub avg_confidence: f64,
}

impl ParseResult {
    pub fn new(strategy: StrategyKind, sheet: &str, entries: Vec<LectureEntry>) -> Self {
        let avg_confidence = if entries.is_empty() {
            0.0
        } else {
            entries.iter().map(|e| e.confidence).sum::<f64>() / entries.len() as f64
        };
        ParseResult {
            strategy,
            sheet: sheet.to_string(),
            entries,
            avg_confidence,
        }
    }

    pub fn summary(&self) -> CandidateSummary {
        CandidateSummary {
            strategy: self.strategy,
            sheet: self.sheet.clone(),
            entries: self.entries.len(),
            avg_confidence: self.avg_confidence,
        }
    }
}

/// Counts of one candidate, kept after the candidate itself is discarded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSummary {
    pub strategy: StrategyKind,
    pub sheet: String,
    pub entries: usize,
    pub avg_confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridCell {
    pub subject: String,
    pub teacher: String,
    pub room: String,
    pub confidence: f64,
}

/// time label -> day name -> cell
pub type SectionGrid = BTreeMap<String, BTreeMap<String, GridCell>>;

/// Final per-section view: merged entries plus the day x time grid.
#[derive(Debug, Clone, Serialize)]
pub struct SectionInfo {
    pub entries: Vec<LectureEntry>,
    pub grid: SectionGrid,
    pub days: Vec<String>,
    pub times: Vec<String>,
}

/// Everything one extraction run produces.
#[derive(Debug, Clone, Default)]
pub struct ExtractionOutput {
    pub section_data: BTreeMap<String, SectionInfo>,
    pub available_sections: Vec<String>,
    pub total_entries: usize,
    pub best_strategy: Option<StrategyKind>,
    pub avg_confidence: f64,
    pub candidates: Vec<CandidateSummary>,
}
