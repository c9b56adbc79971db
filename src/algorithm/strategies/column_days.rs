// Flat table: one header row naming the columns, one lecture per data row.
//
// | Section | Course | Teacher | Day | Time | Floor | Room |

use crate::algorithm::classify::{
    detect_day, extract_sections, normalize_room, normalize_time_slot, strip_sections,
};
use crate::excel::io::normalize_header;
use crate::excel::{CellLookup, CellResolver};
use crate::models::{LectureEntry, ParseResult, StrategyKind, DEFAULT_ROOM};

const HEADER_SCAN_ROWS: usize = 15;
const MIN_HEADER_KEYWORDS: usize = 4;
const MISSING_ROOM_PENALTY: f64 = 0.3;

/// Column index of each recognised header keyword.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HeaderColumns {
    pub section: Option<usize>,
    pub subject: Option<usize>,
    pub teacher: Option<usize>,
    pub day: Option<usize>,
    pub time: Option<usize>,
    pub floor: Option<usize>,
    pub room: Option<usize>,
}

impl HeaderColumns {
    fn found(&self) -> usize {
        [
            self.section,
            self.subject,
            self.teacher,
            self.day,
            self.time,
            self.floor,
            self.room,
        ]
        .iter()
        .filter(|c| c.is_some())
        .count()
    }

    /// Assigns one header text to the first still-free field it names.
    fn assign(&mut self, col: usize, text: &str) {
        let h = normalize_header(text);
        if h.is_empty() {
            return;
        }
        // "Course Instructor" names the teacher, not the course
        let slot = if h.contains("teacher") || h.contains("instructor") || h.contains("faculty") {
            &mut self.teacher
        } else if h.contains("section") {
            &mut self.section
        } else if h.contains("course") || h.contains("subject") {
            &mut self.subject
        } else if h.contains("time") || h.contains("slot") {
            &mut self.time
        } else if h.contains("day") {
            &mut self.day
        } else if h.contains("floor") {
            &mut self.floor
        } else if h.contains("room") || h.contains("venue") {
            &mut self.room
        } else {
            return;
        };
        if slot.is_none() {
            *slot = Some(col);
        }
    }
}

/// First header row within the scan window with at least four keyword columns.
pub fn find_header(resolver: &CellResolver) -> Option<(usize, HeaderColumns)> {
    (0..resolver.rows().min(HEADER_SCAN_ROWS)).find_map(|row| {
        let mut cols = HeaderColumns::default();
        for (col, text) in resolver.row_texts(row).into_iter().enumerate() {
            cols.assign(col, text);
        }
        (cols.found() >= MIN_HEADER_KEYWORDS).then_some((row, cols))
    })
}

fn field<'a>(resolver: &'a CellResolver, row: usize, col: Option<usize>) -> &'a str {
    col.map(|c| resolver.resolve(row, c).trim()).unwrap_or("")
}

/// Cell text collapsed onto one line.
fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn parse(resolver: &CellResolver) -> ParseResult {
    let sheet = resolver.sheet();
    let Some((header_row, cols)) = find_header(resolver) else {
        return ParseResult::new(StrategyKind::ColumnDays, &sheet.name, Vec::new());
    };

    let mut entries = Vec::new();
    for row in header_row + 1..resolver.rows() {
        let sections = extract_sections(field(resolver, row, cols.section));
        if sections.is_empty() {
            continue;
        }
        let subject = one_line(&strip_sections(field(resolver, row, cols.subject)));
        let teacher = one_line(&strip_sections(field(resolver, row, cols.teacher)));
        if subject.chars().count() < 2 || teacher.is_empty() || detect_day(&subject).is_some() {
            continue;
        }
        let Some(day) = detect_day(field(resolver, row, cols.day)) else {
            continue;
        };
        let Some((start, end)) = normalize_time_slot(field(resolver, row, cols.time)) else {
            continue;
        };

        let room_text = field(resolver, row, cols.room);
        let (room, confidence) = if room_text.is_empty() {
            (DEFAULT_ROOM.to_string(), 1.0 - MISSING_ROOM_PENALTY)
        } else {
            (normalize_room(room_text), 1.0)
        };
        for section in &sections {
            entries.push(LectureEntry::new(
                day, &start, &end, &subject, &teacher, &room, section, confidence,
            ));
        }
    }

    ParseResult::new(StrategyKind::ColumnDays, &sheet.name, entries)
}
