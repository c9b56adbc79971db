//! Layout strategies.
//!
//! Each strategy is a pure function over one sheet (seen through a shared
//! `CellResolver`) that assumes one layout and returns the entries it finds.
//! Strategies never see each other's output; the arbiter picks the winner.

pub mod column_days;
pub mod proximity;
pub mod room_rows;
pub mod sheet_sections;

use crate::algorithm::classify::normalize_time_slot;
use crate::algorithm::disambiguate::ParsedCell;
use crate::excel::CellResolver;
use crate::models::{LectureEntry, ParseResult, StrategyKind, TimeSlot};

/// Runs one strategy over a sheet.
pub fn run_strategy(kind: StrategyKind, resolver: &CellResolver) -> ParseResult {
    match kind {
        StrategyKind::RoomRows => room_rows::parse(resolver),
        StrategyKind::ColumnDays => column_days::parse(resolver),
        StrategyKind::SheetSections => sheet_sections::parse(resolver),
        StrategyKind::Proximity => proximity::parse(resolver),
    }
}

/// Runs every strategy over one sheet, in `StrategyKind::ALL` order.
pub fn run_all(resolver: &CellResolver) -> Vec<ParseResult> {
    StrategyKind::ALL
        .iter()
        .map(|&kind| run_strategy(kind, resolver))
        .collect()
}

/// Normalized time slots found in one row of resolved texts.
pub(crate) fn time_slots_in_row(texts: &[&str]) -> Vec<TimeSlot> {
    texts
        .iter()
        .enumerate()
        .filter_map(|(col, text)| {
            normalize_time_slot(text).map(|(start, end)| TimeSlot {
                col,
                raw: text.to_string(),
                start,
                end,
            })
        })
        .collect()
}

/// One entry per section code; a cell naming two sections yields two entries.
pub(crate) fn explode(
    parsed: &ParsedCell,
    sections: &[String],
    day: &str,
    slot: (&str, &str),
    room: &str,
    confidence: f64,
) -> Vec<LectureEntry> {
    sections
        .iter()
        .map(|section| {
            LectureEntry::new(
                day,
                slot.0,
                slot.1,
                &parsed.subject,
                &parsed.teacher,
                room,
                section,
                confidence,
            )
        })
        .collect()
}
