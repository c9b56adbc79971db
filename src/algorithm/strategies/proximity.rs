//! Layout-free fallback: classify every cell, then attach each data cell to
//! the nearest day, time and room markers.

use crate::algorithm::classify::{
    detect_day, has_section, is_room, is_skippable, normalize_room, normalize_time_slot,
};
use crate::algorithm::disambiguate::parse_cell;
use crate::algorithm::strategies::explode;
use crate::excel::CellResolver;
use crate::models::{ParseResult, StrategyKind, DEFAULT_ROOM};

const ROOM_MISSING_FACTOR: f64 = 0.5;

#[derive(Debug, Clone)]
struct Marker<T> {
    row: usize,
    col: usize,
    value: T,
}

#[derive(Debug, Default)]
struct Markers<'a> {
    days: Vec<Marker<&'static str>>,
    times: Vec<Marker<(String, String)>>,
    rooms: Vec<Marker<String>>,
    data: Vec<Marker<&'a str>>,
}

/// Day, then time, then data (section code), then room; first match wins.
fn classify_cells<'a>(resolver: &CellResolver<'a>) -> Markers<'a> {
    let mut m = Markers::default();
    for (row, col, text) in resolver.sheet().cells() {
        if is_skippable(text) {
            continue;
        }
        if let Some(day) = detect_day(text) {
            m.days.push(Marker { row, col, value: day });
        } else if let Some(slot) = normalize_time_slot(text) {
            m.times.push(Marker { row, col, value: slot });
        } else if has_section(text) {
            m.data.push(Marker { row, col, value: text });
        } else if is_room(text) {
            m.rooms.push(Marker { row, col, value: normalize_room(text) });
        }
    }
    m
}

fn nearest<T>(markers: &[Marker<T>], cost: impl Fn(&Marker<T>) -> usize) -> Option<&Marker<T>> {
    markers.iter().min_by_key(|&m| cost(m))
}

pub fn parse(resolver: &CellResolver) -> ParseResult {
    let sheet = resolver.sheet();
    let markers = classify_cells(resolver);
    let mut entries = Vec::new();

    for cell in &markers.data {
        let (r, c) = (cell.row, cell.col);
        let day = markers
            .days
            .iter()
            .filter(|d| d.row <= r)
            .min_by_key(|d| 10 * (r - d.row) + c.abs_diff(d.col));
        let time = nearest(&markers.times, |t| 5 * r.abs_diff(t.row) + c.abs_diff(t.col));
        let (Some(day), Some(time)) = (day, time) else {
            continue;
        };

        let parsed = parse_cell(cell.value, resolver, r, c);
        let nearest_room = nearest(&markers.rooms, |m| 10 * r.abs_diff(m.row) + c.abs_diff(m.col));
        let (room, factor) = match (&parsed.room, nearest_room) {
            (Some(own), _) => (own.clone(), 1.0),
            (None, Some(m)) => (m.value.clone(), 1.0),
            (None, None) => (DEFAULT_ROOM.to_string(), ROOM_MISSING_FACTOR),
        };

        entries.extend(explode(
            &parsed,
            &parsed.sections,
            day.value,
            (&time.value.0, &time.value.1),
            &room,
            parsed.confidence * factor,
        ));
    }

    ParseResult::new(StrategyKind::Proximity, &sheet.name, entries)
}
