// Top-level engine: orchestrates timetable extraction.
//
// sheets -> (sheet x strategy) candidates -> winner -> dedup/sort/filter -> per-section views

pub mod arbiter;
pub mod classify;
pub mod disambiguate;
pub mod postprocess;
pub mod strategies;

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::excel::{CellResolver, Sheet};
use crate::models::{ExtractionOutput, ParseResult};

pub use arbiter::pick_best;
pub use disambiguate::{parse_cell, ParsedCell};

/// Trims and upper-cases a requested section; blank means no filter.
pub fn normalize_section_filter(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_uppercase)
}

/// Every (sheet x strategy) candidate, ordered by sheet index then strategy order.
pub fn collect_candidates(sheets: &[Sheet]) -> Vec<ParseResult> {
    let per_sheet: Vec<Vec<ParseResult>> = sheets
        .par_iter()
        .map(|sheet| {
            let resolver = CellResolver::new(sheet);
            strategies::run_all(&resolver)
        })
        .collect();
    per_sheet.into_iter().flatten().collect()
}

/// Runs the whole engine over one workbook.
///
/// `availableSections` is gathered from every candidate before arbitration and
/// before the filter, so a section that only one tab mentions is still listed.
pub fn extract_timetable(sheets: &[Sheet], section_filter: Option<&str>) -> ExtractionOutput {
    let started = Instant::now();
    let filter = normalize_section_filter(section_filter);

    let candidates = collect_candidates(sheets);
    for c in &candidates {
        debug!(
            "candidate {} on '{}': {} entries, avg confidence {:.3}",
            c.strategy,
            c.sheet,
            c.entries.len(),
            c.avg_confidence
        );
    }
    let summaries = candidates.iter().map(ParseResult::summary).collect();
    let available_sections =
        postprocess::available_sections(candidates.iter().flat_map(|c| c.entries.iter()));

    let Some(best) = pick_best(&candidates) else {
        info!("no sheets to extract from");
        return ExtractionOutput {
            available_sections,
            candidates: summaries,
            ..Default::default()
        };
    };

    let entries = postprocess::dedup(best.entries.clone());
    let mut entries = postprocess::filter_section(entries, filter.as_deref());
    postprocess::sort_entries(&mut entries);
    let total_entries = entries.len();
    let section_data = postprocess::build_sections(entries);

    info!(
        "extraction: winner {} on '{}', {} entries ({} sections available) in {} ms",
        best.strategy,
        best.sheet,
        total_entries,
        available_sections.len(),
        started.elapsed().as_millis()
    );

    ExtractionOutput {
        section_data,
        available_sections,
        total_entries,
        best_strategy: Some(best.strategy),
        avg_confidence: best.avg_confidence,
        candidates: summaries,
    }
}
