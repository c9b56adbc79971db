// JSON API payloads and HTTP handlers.

pub mod handlers;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{ExtractionOutput, SectionInfo, StrategyKind};

/// Response body of `POST /api/parse`.
///
/// ```json
/// {
///   "sectionData": {
///     "BSSE-4C": {
///       "entries": [{"day": "Monday", "startTime": "8:00 AM", "endTime": "9:30 AM", "time": "8:00 AM - 9:30 AM",
///                    "subject": "Data Structures", "teacher": "Mr. Ahmed Khan", "room": "Room #05",
///                    "section": "BSSE-4C", "confidence": 1.0}],
///       "grid": {"8:00 AM - 9:30 AM": {"Monday": {"subject": "Data Structures", "teacher": "Mr. Ahmed Khan",
///                                                "room": "Room #05", "confidence": 1.0}}},
///       "days": ["Monday"],
///       "times": ["8:00 AM - 9:30 AM"]
///     }
///   },
///   "availableSections": ["BSSE-4C"],
///   "totalEntries": 1,
///   "bestStrategy": "roomRows",
///   "avgConfidence": 1.0,
///   "sheetCount": 1,
///   "diagnostic": null,
///   "processedAt": "2026-01-01T00:00:00+00:00"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResponse {
    pub section_data: BTreeMap<String, SectionInfo>,
    pub available_sections: Vec<String>,
    pub total_entries: usize,
    pub best_strategy: Option<StrategyKind>,
    pub avg_confidence: f64,
    pub sheet_count: usize,
    pub diagnostic: Option<String>,
    pub processed_at: String,
}

impl ParseResponse {
    pub fn from_output(output: ExtractionOutput, sheet_count: usize, diagnostic: Option<String>) -> Self {
        ParseResponse {
            section_data: output.section_data,
            available_sections: output.available_sections,
            total_entries: output.total_entries,
            best_strategy: output.best_strategy,
            avg_confidence: output.avg_confidence,
            sheet_count,
            diagnostic,
            processed_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
