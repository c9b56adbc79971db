// Post-processing of the winning candidate: dedup, sort, filter, merge and grid.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::algorithm::classify::time_to_minutes;
use crate::models::{weekday_index, GridCell, LectureEntry, SectionGrid, SectionInfo};

fn dedup_key(e: &LectureEntry) -> String {
    format!(
        "{}|{}|{}|{}|{}|{}",
        e.section, e.day, e.start_time, e.subject, e.teacher, e.room
    )
}

/// Removes repeated entries; the first occurrence wins.
pub fn dedup(entries: Vec<LectureEntry>) -> Vec<LectureEntry> {
    let mut seen: HashSet<String> = HashSet::new();
    entries
        .into_iter()
        .filter(|e| seen.insert(dedup_key(e)))
        .collect()
}

fn sort_key(e: &LectureEntry) -> (usize, u32) {
    (
        weekday_index(&e.day),
        time_to_minutes(&e.start_time).unwrap_or(u32::MAX),
    )
}

/// Stable sort by weekday, then start time in minutes.
pub fn sort_entries(entries: &mut [LectureEntry]) {
    entries.sort_by_key(sort_key);
}

/// Exact section match; `None` keeps everything.
pub fn filter_section(entries: Vec<LectureEntry>, section: Option<&str>) -> Vec<LectureEntry> {
    match section {
        Some(code) => entries.into_iter().filter(|e| e.section == code).collect(),
        None => entries,
    }
}

fn same_lecture(a: &LectureEntry, b: &LectureEntry) -> bool {
    a.section == b.section
        && a.day == b.day
        && a.subject == b.subject
        && a.teacher == b.teacher
        && a.room == b.room
}

/// Joins back-to-back blocks of the same lecture; expects sorted input.
pub fn merge_consecutive(entries: Vec<LectureEntry>) -> Vec<LectureEntry> {
    let mut merged: Vec<LectureEntry> = Vec::with_capacity(entries.len());
    for entry in entries {
        if let Some(running) = merged.last_mut() {
            if same_lecture(running, &entry) && running.end_time == entry.start_time {
                running.set_end_time(&entry.end_time);
                running.confidence = running.confidence.min(entry.confidence);
                continue;
            }
        }
        merged.push(entry);
    }
    merged
}

pub fn build_grid(entries: &[LectureEntry]) -> SectionGrid {
    let mut grid = SectionGrid::new();
    for e in entries {
        grid.entry(e.time.clone())
            .or_default()
            .entry(e.day.clone())
            .or_insert_with(|| GridCell {
                subject: e.subject.clone(),
                teacher: e.teacher.clone(),
                room: e.room.clone(),
                confidence: e.confidence,
            });
    }
    grid
}

/// Merged entries of one section plus its grid, days (week order) and times (clock order).
pub fn build_section_info(entries: Vec<LectureEntry>) -> SectionInfo {
    let entries = merge_consecutive(entries);
    let grid = build_grid(&entries);

    let mut days: Vec<String> = entries
        .iter()
        .map(|e| e.day.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    days.sort_by_key(|d| weekday_index(d));

    let times: Vec<(u32, String)> = entries
        .iter()
        .map(|e| (time_to_minutes(&e.start_time).unwrap_or(u32::MAX), e.time.clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    SectionInfo {
        entries,
        grid,
        days,
        times: times.into_iter().map(|(_, t)| t).collect(),
    }
}

/// Partitions sorted entries by section and builds each section's view.
pub fn build_sections(entries: Vec<LectureEntry>) -> BTreeMap<String, SectionInfo> {
    let mut by_section: BTreeMap<String, Vec<LectureEntry>> = BTreeMap::new();
    for e in entries {
        by_section.entry(e.section.clone()).or_default().push(e);
    }
    by_section
        .into_iter()
        .map(|(section, list)| (section, build_section_info(list)))
        .collect()
}

/// Every section code in the entries, sorted and unique.
pub fn available_sections<'a>(entries: impl IntoIterator<Item = &'a LectureEntry>) -> Vec<String> {
    entries
        .into_iter()
        .map(|e| e.section.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
