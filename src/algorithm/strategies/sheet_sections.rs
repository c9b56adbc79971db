// One sheet per section: the tab name carries the codes, rows are time slots
// and columns are days.

use crate::algorithm::classify::{
    detect_day, extract_sections, is_skippable, is_time_slot, normalize_time_slot,
};
use crate::algorithm::disambiguate::parse_cell;
use crate::algorithm::strategies::explode;
use crate::excel::{CellLookup, CellResolver};
use crate::models::{ParseResult, StrategyKind, DEFAULT_ROOM};

const MIN_DAY_HEADERS: usize = 3;
const MIN_TIME_MATCHES: usize = 2;
const ROOM_FROM_CELL: f64 = 1.0;
const ROOM_MISSING: f64 = 0.5;

#[derive(Debug)]
struct DayHeader {
    day_cols: Vec<(usize, &'static str)>,
    time_col: usize,
}

fn day_columns(texts: &[&str]) -> Vec<(usize, &'static str)> {
    texts
        .iter()
        .enumerate()
        .filter_map(|(c, t)| detect_day(t).map(|d| (c, d)))
        .collect()
}

/// Column (outside the day columns) with the most time slots below the header; leftmost on ties.
fn find_time_column(
    resolver: &CellResolver,
    header_row: usize,
    day_cols: &[(usize, &'static str)],
) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for col in 0..resolver.cols() {
        if day_cols.iter().any(|(c, _)| *c == col) {
            continue;
        }
        let hits = (header_row + 1..resolver.rows())
            .filter(|&r| is_time_slot(resolver.resolve(r, col)))
            .count();
        if hits >= MIN_TIME_MATCHES && best.is_none_or(|(_, h)| hits > h) {
            best = Some((col, hits));
        }
    }
    best.map(|(col, _)| col)
}

pub fn parse(resolver: &CellResolver) -> ParseResult {
    let sheet = resolver.sheet();
    let sheet_codes = extract_sections(&sheet.name);
    let mut header: Option<DayHeader> = None;
    let mut entries = Vec::new();

    for row in 0..resolver.rows() {
        let texts = resolver.row_texts(row);

        let day_cols = day_columns(&texts);
        if day_cols.len() >= MIN_DAY_HEADERS {
            header = find_time_column(resolver, row, &day_cols)
                .map(|time_col| DayHeader { day_cols, time_col });
            continue;
        }

        let Some(h) = &header else {
            continue;
        };
        let Some((start, end)) = normalize_time_slot(texts[h.time_col]) else {
            continue;
        };

        for &(col, day) in &h.day_cols {
            let text = texts[col];
            if is_skippable(text) || is_time_slot(text) {
                continue;
            }
            let parsed = parse_cell(text, resolver, row, col);
            let codes = if parsed.sections.is_empty() {
                &sheet_codes
            } else {
                &parsed.sections
            };
            if codes.is_empty() {
                continue;
            }
            let (room, factor) = match &parsed.room {
                Some(r) => (r.clone(), ROOM_FROM_CELL),
                None => (DEFAULT_ROOM.to_string(), ROOM_MISSING),
            };
            entries.extend(explode(
                &parsed,
                codes,
                day,
                (&start, &end),
                &room,
                parsed.confidence * factor,
            ));
        }
    }

    ParseResult::new(StrategyKind::SheetSections, &sheet.name, entries)
}
