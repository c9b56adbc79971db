// Token classifiers for days, time slots, rooms, sections, noise and teachers.
//
// All predicates are pure functions over one cell's text.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::WEEKDAYS;

const DAY_ABBREVIATIONS: [(&str, usize); 10] = [
    ("mon", 0),
    ("tue", 1),
    ("tues", 1),
    ("wed", 2),
    ("thu", 3),
    ("thur", 3),
    ("thurs", 3),
    ("fri", 4),
    ("sat", 5),
    ("sun", 6),
];

/// Up to this many letters a day name may appear anywhere in the text.
const MAX_DAY_TEXT_LETTERS: usize = 24;
const FUZZY_DAY_THRESHOLD: f64 = 0.93;

fn re(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("static regex"))
}

fn time_range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    re(
        &RE,
        r"^(\d{1,2})[:.](\d{2})(am|pm)?(?:-|–|—|to)(\d{1,2})[:.](\d{2})(am|pm)?$",
    )
}

fn bare_time_range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    re(&RE, r"^(\d{3,4})(am|pm)?(?:-|–|—|to)(\d{3,4})(am|pm)?$")
}

fn clock_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    re(&RE, r"(?i)^(\d{1,2}):(\d{2})\s*(am|pm)?$")
}

fn section_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    re(&RE, r"(?i)\bBS[A-Z]{2,4}\s*-\s*\d{1,2}[A-Z]?\b")
}

fn short_room_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    re(&RE, r"(?i)^[a-z]{1,3}\s*-?\s*\d{1,4}[a-z]?$")
}

fn room_label_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    re(
        &RE,
        r"(?i)^(?:room|rm|class\s*room|cr|lr|lab|laboratory|computer\s+lab|hall|main\s+hall|seminar\s+hall|auditorium)\s*(?:no\.?)?\s*[-:#.]?\s*\d{0,4}[a-z]?$",
    )
}

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    re(&RE, r"\d{1,4}")
}

fn empty_group_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    re(&RE, r"[(\[][\s,;/&+|-]*[)\]]")
}

fn teacher_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    re(&RE, r"(?i)^(?:mrs|mr|ms|dr|prof|engr|sir|madam)\b\.?")
}

fn noise_res() -> &'static [Regex] {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    RES.get_or_init(|| {
        [
            r"(?i)\b(?:prayer|namaz|break|lunch|recess|jumm?a)\b",
            r"(?i)time\s*-?\s*table",
            r"(?i)\bsemester\b",
            r"(?i)\bpage\s*(?:no\.?\s*)?\d+",
            r"(?i)^\s*(?:s|sr)\s*\.?\s*(?:no\b|#)",
            r"(?i)\b(?:w\.e\.f|effective\s+from|department\s+of|university)\b",
            r"(?i)^(?:day|days|time|timing|timings|slot|room|rooms|venue|section|sections)\s*:?$",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("static regex"))
        .collect()
    })
}

fn floor_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    re(&RE, r"(?i)\bfloor\b")
}

// ---------------------------------------------------------------------------
// Days
// ---------------------------------------------------------------------------

/// Recognizes a weekday in a cell and returns its canonical name.
///
/// Short texts match when they contain a day name anywhere. Longer texts
/// only count when their first word is a day name or abbreviation and they
/// carry no section code, so lecture content never reads as a day marker.
pub fn detect_day(text: &str) -> Option<&'static str> {
    let words: Vec<String> = text
        .split(|c: char| !c.is_alphabetic())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect();
    let cleaned = words.concat();
    if cleaned.is_empty() {
        return None;
    }

    if cleaned.chars().count() <= MAX_DAY_TEXT_LETTERS {
        if let Some(day) = WEEKDAYS.iter().find(|d| cleaned.contains(&d.to_lowercase())) {
            return Some(*day);
        }
        if let Some(day) = abbreviation_day(&cleaned) {
            return Some(day);
        }
    }

    if let Some(first) = words.first().filter(|_| !has_section(text)) {
        if let Some(day) = WEEKDAYS.iter().find(|d| first.starts_with(&d.to_lowercase())) {
            return Some(*day);
        }
        if let Some(day) = abbreviation_day(first) {
            return Some(day);
        }
    }

    let len = cleaned.chars().count();
    if (5..=10).contains(&len) {
        let mut best: Option<(f64, &'static str)> = None;
        for day in WEEKDAYS.iter() {
            let score = strsim::jaro_winkler(&cleaned, &day.to_lowercase());
            if score >= FUZZY_DAY_THRESHOLD && best.map(|(s, _)| score > s).unwrap_or(true) {
                best = Some((score, *day));
            }
        }
        return best.map(|(_, d)| d);
    }

    None
}

fn abbreviation_day(word: &str) -> Option<&'static str> {
    DAY_ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| *abbr == word)
        .map(|(_, idx)| WEEKDAYS[*idx])
}

// ---------------------------------------------------------------------------
// Time slots
// ---------------------------------------------------------------------------

fn compact_time_text(text: &str) -> String {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
        .replace("a.m.", "am")
        .replace("p.m.", "pm")
        .replace("a.m", "am")
        .replace("p.m", "pm");
    compact
        .trim_matches(|c: char| matches!(c, '(' | ')' | '[' | ']' | ',' | ';' | '|' | '.' | ':'))
        .to_string()
}

/// True when the cell is an `H:MM - H:MM` or bare `HHMM-HHMM` range.
pub fn is_time_slot(text: &str) -> bool {
    let compact = compact_time_text(text);
    !compact.is_empty() && (time_range_re().is_match(&compact) || bare_time_range_re().is_match(&compact))
}

/// Parses a time range into canonical 12-hour `(start, end)` labels.
///
/// An explicit AM/PM marker wins for the token it follows. Without one, raw
/// hours 1-7 are read as afternoon (university timetables start at 8 AM and
/// omit the marker). Results past 23:59 are rejected.
pub fn normalize_time_slot(text: &str) -> Option<(String, String)> {
    let compact = compact_time_text(text);

    let (start, end) = if let Some(caps) = time_range_re().captures(&compact) {
        let sh: u32 = caps.get(1)?.as_str().parse().ok()?;
        let sm: u32 = caps.get(2)?.as_str().parse().ok()?;
        let eh: u32 = caps.get(4)?.as_str().parse().ok()?;
        let em: u32 = caps.get(5)?.as_str().parse().ok()?;
        (
            (sh, sm, caps.get(3).map(|m| m.as_str())),
            (eh, em, caps.get(6).map(|m| m.as_str())),
        )
    } else if let Some(caps) = bare_time_range_re().captures(&compact) {
        let (sh, sm) = split_bare_clock(caps.get(1)?.as_str())?;
        let (eh, em) = split_bare_clock(caps.get(3)?.as_str())?;
        (
            (sh, sm, caps.get(2).map(|m| m.as_str())),
            (eh, em, caps.get(4).map(|m| m.as_str())),
        )
    } else {
        return None;
    };

    let start = to_24h(start.0, start.1, start.2)?;
    let end = to_24h(end.0, end.1, end.2)?;
    Some((format_12h(start.0, start.1), format_12h(end.0, end.1)))
}

fn split_bare_clock(digits: &str) -> Option<(u32, u32)> {
    let value: u32 = digits.parse().ok()?;
    Some((value / 100, value % 100))
}

fn to_24h(hour: u32, minute: u32, marker: Option<&str>) -> Option<(u32, u32)> {
    let hour = match marker {
        Some("pm") if hour < 12 => hour + 12,
        Some("am") if hour == 12 => 0,
        Some(_) => hour,
        None if (1..=7).contains(&hour) => hour + 12,
        None => hour,
    };
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// 24h clock -> "H:MM AM/PM".
pub fn format_12h(hour: u32, minute: u32) -> String {
    let period = if hour < 12 { "AM" } else { "PM" };
    let h12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", h12, minute, period)
}

/// Minutes since midnight of a "H:MM AM/PM" label (24h labels without a marker also parse).
pub fn time_to_minutes(label: &str) -> Option<u32> {
    let caps = clock_re().captures(label.trim())?;
    let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minute: u32 = caps.get(2)?.as_str().parse().ok()?;
    let hour = match caps.get(3).map(|m| m.as_str().to_ascii_lowercase()) {
        Some(p) if p == "pm" && hour < 12 => hour + 12,
        Some(p) if p == "am" && hour == 12 => 0,
        _ => hour,
    };
    if hour > 23 || minute > 59 {
        return None;
    }
    Some(hour * 60 + minute)
}

// ---------------------------------------------------------------------------
// Rooms
// ---------------------------------------------------------------------------

/// Broad room recognizer used for layout markers.
pub fn is_room(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    let lower = trimmed.to_lowercase();
    ["room", "lab", "auditorium", "hall"].iter().any(|k| lower.contains(k))
        || short_room_re().is_match(trimmed)
}

/// Strict variant: the whole line is a room label ("Room 5", "Lab-10", "LR-101").
/// Keeps subjects such as "Software Engineering Lab" out of the room slot.
pub fn is_room_label(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && (room_label_re().is_match(trimmed) || short_room_re().is_match(trimmed))
}

/// Canonical room label: "Room #05", "Lab-10", "Auditorium", "Main Hall"; otherwise the trimmed input.
pub fn normalize_room(text: &str) -> String {
    let trimmed = text.trim();
    let lower = trimmed.to_lowercase();
    let number: Option<u32> = number_re()
        .find(&lower)
        .and_then(|m| m.as_str().parse().ok());

    if lower.contains("auditorium") {
        return "Auditorium".to_string();
    }
    if lower.contains("hall") {
        return "Main Hall".to_string();
    }
    if lower.contains("lab") {
        return match number {
            Some(n) => format!("Lab-{:02}", n),
            None => trimmed.to_string(),
        };
    }
    let room_word = lower.contains("room") || lower.starts_with("rm") || lower.starts_with("cr");
    if let Some(n) = number {
        if room_word || lower.chars().all(|c| c.is_ascii_digit()) {
            return format!("Room #{:02}", n);
        }
    }
    trimmed.to_string()
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// All section codes in the text, upper-cased, whitespace removed, de-duplicated in order.
pub fn extract_sections(text: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for m in section_re().find_iter(text) {
        let code: String = m
            .as_str()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();
        if !out.contains(&code) {
            out.push(code);
        }
    }
    out
}

pub fn has_section(text: &str) -> bool {
    section_re().is_match(text)
}

/// Removes section codes and the separators they leave behind.
pub fn strip_sections(text: &str) -> String {
    let replaced = section_re().replace_all(text, " ");
    let replaced = empty_group_re().replace_all(&replaced, " ");
    let collapsed = replaced.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | '/' | '|' | '-' | '&' | '+' | ':'))
        .to_string()
}

// ---------------------------------------------------------------------------
// Noise & people
// ---------------------------------------------------------------------------

/// Non-lecture boilerplate: blanks, floor labels, breaks, page headers and footers.
pub fn is_skippable(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return true;
    }
    if trimmed.chars().all(|c| !c.is_alphanumeric()) {
        return true;
    }
    if trimmed.len() <= 25 && floor_re().is_match(trimmed) {
        return true;
    }
    noise_res().iter().any(|r| r.is_match(trimmed))
}

/// Line starts with a teacher title (Mr./Ms./Mrs./Dr./Prof./Engr./Sir/Madam).
pub fn is_teacher_line(text: &str) -> bool {
    teacher_re().is_match(text.trim())
}
