//! Splits one lecture cell into subject, teacher and section codes.
//!
//! Fields missing from the cell are looked up in neighbouring cells through
//! the `CellLookup` capability; every fallback costs confidence.

use crate::algorithm::classify::{
    detect_day, extract_sections, has_section, is_room, is_room_label, is_skippable, is_teacher_line,
    is_time_slot, normalize_room, strip_sections,
};
use crate::excel::CellLookup;
use crate::models::{UNKNOWN_SUBJECT, UNKNOWN_TEACHER};

pub const SUBJECT_FALLBACK_PENALTY: f64 = 0.25;
pub const SUBJECT_MISSING_PENALTY: f64 = 0.5;
pub const TEACHER_FALLBACK_PENALTY: f64 = 0.2;
pub const TEACHER_MISSING_PENALTY: f64 = 0.5;

const MIN_SUBJECT_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCell {
    pub subject: String,
    pub teacher: String,
    pub sections: Vec<String>,
    /// Canonical room when the cell itself carries a room line.
    pub room: Option<String>,
    pub confidence: f64,
}

fn cell_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\n', '\r']).map(str::trim).filter(|l| !l.is_empty())
}

/// Subject candidate of one line, or `None` when the line is not lecture text.
fn subject_candidate(line: &str) -> Option<String> {
    if is_skippable(line) || is_time_slot(line) || is_room_label(line) || detect_day(line).is_some() {
        return None;
    }
    let stripped = strip_sections(line);
    if stripped.chars().count() < MIN_SUBJECT_LEN {
        return None;
    }
    Some(stripped)
}

pub fn parse_cell(text: &str, lookup: &dyn CellLookup, row: usize, col: usize) -> ParsedCell {
    let sections = extract_sections(text);
    let mut subject: Option<String> = None;
    let mut teacher: Option<String> = None;
    let mut room: Option<String> = None;

    for line in cell_lines(text) {
        if is_skippable(line) || is_time_slot(line) {
            continue;
        }
        if is_room_label(line) {
            if room.is_none() {
                room = Some(normalize_room(line));
            }
            continue;
        }
        if strip_sections(line).is_empty() {
            // a line made only of section codes
            continue;
        }
        if is_teacher_line(line) {
            if teacher.is_none() {
                teacher = Some(strip_sections(line));
            }
            continue;
        }
        if subject.is_none() {
            subject = subject_candidate(line);
        }
    }

    let mut confidence = 1.0;

    let subject = match subject {
        Some(s) => s,
        None => match subject_from_neighbours(lookup, row, col) {
            Some(s) => {
                confidence -= SUBJECT_FALLBACK_PENALTY;
                s
            }
            None => {
                confidence -= SUBJECT_MISSING_PENALTY;
                UNKNOWN_SUBJECT.to_string()
            }
        },
    };

    let teacher = match teacher {
        Some(t) => t,
        None => match teacher_from_neighbours(lookup, row, col) {
            Some(t) => {
                confidence -= TEACHER_FALLBACK_PENALTY;
                t
            }
            None => {
                confidence -= TEACHER_MISSING_PENALTY;
                UNKNOWN_TEACHER.to_string()
            }
        },
    };

    ParsedCell {
        subject,
        teacher,
        sections,
        room,
        confidence: f64::max(confidence, 0.0),
    }
}

/// Left neighbour first, then the cell above.
fn subject_from_neighbours(lookup: &dyn CellLookup, row: usize, col: usize) -> Option<String> {
    let left = col.checked_sub(1).map(|c| (row, c));
    let above = row.checked_sub(1).map(|r| (r, col));
    [left, above]
        .into_iter()
        .flatten()
        .find_map(|(r, c)| neighbour_subject(lookup.resolve(r, c)))
}

fn neighbour_subject(text: &str) -> Option<String> {
    if text.trim().is_empty() || is_room(text) || is_time_slot(text) || is_skippable(text) {
        return None;
    }
    cell_lines(text)
        .filter(|l| !is_teacher_line(l))
        .find_map(subject_candidate)
}

/// Right neighbour first, then the cell below; the neighbour must be a bare teacher cell.
fn teacher_from_neighbours(lookup: &dyn CellLookup, row: usize, col: usize) -> Option<String> {
    [(row, col + 1), (row + 1, col)]
        .into_iter()
        .find_map(|(r, c)| neighbour_teacher(lookup.resolve(r, c)))
}

/// A neighbouring full lecture cell ("Physics\nDr. Noor\nBSAI-7A") is not a teacher cell.
fn neighbour_teacher(text: &str) -> Option<String> {
    if has_section(text) {
        return None;
    }
    let mut lines = cell_lines(text);
    let first = lines.next().filter(|l| is_teacher_line(l))?;
    if lines.any(|l| !is_teacher_line(l) && subject_candidate(l).is_some()) {
        return None;
    }
    Some(first.to_string())
}
