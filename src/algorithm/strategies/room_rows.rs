//! Room-row layout: a row of time-slot headers, then one row per room under
//! a day marker; each data cell sits at (room row, slot column).
//!
//! ```text
//!          |         | 08:00-09:30 | 09:30-11:00
//! Monday   | Room 5  | Calculus... |
//!          | Lab 10  |             | Physics...
//! Tuesday  | Room 5  | ...
//! ```

use crate::algorithm::classify::{
    detect_day, has_section, is_room, is_skippable, is_time_slot, normalize_room,
};
use crate::algorithm::disambiguate::parse_cell;
use crate::algorithm::strategies::{explode, time_slots_in_row};
use crate::excel::CellResolver;
use crate::models::{ParseResult, StrategyKind, TimeSlot};

/// Day markers and room labels live in the first columns.
const EARLY_COLUMNS: usize = 3;
const MIN_HEADER_SLOTS: usize = 2;
const MAX_ROOM_TEXT: usize = 40;

/// Scan state of the current day block.
#[derive(Debug, Default)]
struct DayBlock {
    day: Option<&'static str>,
    slots: Vec<TimeSlot>,
}

fn looks_like_room_cell(text: &str) -> bool {
    text.len() <= MAX_ROOM_TEXT
        && is_room(text)
        && !has_section(text)
        && !is_time_slot(text)
        && detect_day(text).is_none()
}

pub fn parse(resolver: &CellResolver) -> ParseResult {
    let sheet = resolver.sheet();
    let mut block = DayBlock::default();
    let mut entries = Vec::new();

    for row in 0..resolver.rows() {
        let texts = resolver.row_texts(row);
        let early = EARLY_COLUMNS.min(texts.len());

        if let Some(day) = texts[..early].iter().find_map(|t| detect_day(t)) {
            block.day = Some(day);
        }

        let slots = time_slots_in_row(&texts);
        if slots.len() >= MIN_HEADER_SLOTS {
            block.slots = slots;
            continue;
        }

        let Some(room_col) = (0..early).find(|&c| looks_like_room_cell(texts[c])) else {
            continue;
        };
        let Some(day) = block.day else {
            continue;
        };
        let room = normalize_room(texts[room_col]);

        for slot in block.slots.iter().filter(|s| s.col > room_col) {
            let text = texts.get(slot.col).copied().unwrap_or("");
            if is_skippable(text) || is_time_slot(text) || detect_day(text).is_some() {
                continue;
            }
            let parsed = parse_cell(text, resolver, row, slot.col);
            if parsed.sections.is_empty() {
                continue;
            }
            entries.extend(explode(
                &parsed,
                &parsed.sections,
                day,
                (&slot.start, &slot.end),
                &room,
                parsed.confidence,
            ));
        }
    }

    ParseResult::new(StrategyKind::RoomRows, &sheet.name, entries)
}
