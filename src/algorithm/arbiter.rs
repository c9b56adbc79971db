//! Picks the winning candidate: most entries, then higher mean confidence.
//! Full ties keep the earliest candidate (sheet index, then strategy order).

use crate::models::ParseResult;

fn beats(challenger: &ParseResult, current: &ParseResult) -> bool {
    let (a, b) = (challenger.entries.len(), current.entries.len());
    a > b || (a == b && challenger.avg_confidence > current.avg_confidence)
}

pub fn pick_best(candidates: &[ParseResult]) -> Option<&ParseResult> {
    let mut best: Option<&ParseResult> = None;
    for candidate in candidates {
        match best {
            Some(current) if !beats(candidate, current) => {}
            _ => best = Some(candidate),
        }
    }
    best
}
