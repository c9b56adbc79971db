use schedsift::algorithm::classify::*;

#[test]
fn test_detect_day_exact_and_contains() {
    assert_eq!(detect_day("Monday"), Some("Monday"));
    assert_eq!(detect_day("  MONDAY: "), Some("Monday"));
    assert_eq!(detect_day("(Friday)"), Some("Friday"));
    assert_eq!(detect_day("Data Structures"), None);
    assert_eq!(detect_day(""), None);
}

#[test]
fn test_detect_day_abbreviations() {
    assert_eq!(detect_day("Tue"), Some("Tuesday"));
    assert_eq!(detect_day("thurs."), Some("Thursday"));
    assert_eq!(detect_day("SAT"), Some("Saturday"));
    // two-letter forms are too ambiguous
    assert_eq!(detect_day("Mo"), None);
}

#[test]
fn test_detect_day_typos() {
    assert_eq!(detect_day("Wedensday"), Some("Wednesday"));
    assert_eq!(detect_day("Thrusday"), Some("Thursday"));
}

#[test]
fn test_detect_day_abbreviation_with_trailing_marks() {
    assert_eq!(detect_day("Mon (A)"), Some("Monday"));
    assert_eq!(detect_day("MON-1st"), Some("Monday"));
    assert_eq!(detect_day("Tue/Wed"), Some("Tuesday"));
    // abbreviations only count as whole leading words
    assert_eq!(detect_day("Harmonics"), None);
    assert_eq!(detect_day("Satellite Comm"), None);
}

#[test]
fn test_detect_day_long_label_leading_day() {
    assert_eq!(detect_day("Monday (Morning Session Block A)"), Some("Monday"));
    assert_eq!(detect_day("Fri - Evening Program Weekend Batch"), Some("Friday"));
}

#[test]
fn test_detect_day_ignores_long_lecture_text() {
    assert_eq!(detect_day("Monday Lab BSSE-4C long subject text here"), None);
    assert_eq!(detect_day("Seminar on scheduling held every Monday"), None);
}

#[test]
fn test_is_time_slot() {
    assert!(is_time_slot("08:00-09:30"));
    assert!(is_time_slot("8.00 - 9.30"));
    assert!(is_time_slot("0800-0930"));
    assert!(is_time_slot("8:00 to 9:30"));
    assert!(is_time_slot("8:00 – 9:30"));
    assert!(is_time_slot("08:00-09:30."));
    assert!(!is_time_slot("08:00"));
    assert!(!is_time_slot("Room 5"));
}

#[test]
fn test_normalize_time_slot_morning_and_afternoon() {
    assert_eq!(
        normalize_time_slot("08:00-09:30"),
        Some(("8:00 AM".to_string(), "9:30 AM".to_string()))
    );
    assert_eq!(
        normalize_time_slot("1:00-2:30"),
        Some(("1:00 PM".to_string(), "2:30 PM".to_string()))
    );
    assert_eq!(
        normalize_time_slot("11:30-1:00"),
        Some(("11:30 AM".to_string(), "1:00 PM".to_string()))
    );
    assert_eq!(
        normalize_time_slot("(08:00 - 09:30.)"),
        Some(("8:00 AM".to_string(), "9:30 AM".to_string()))
    );
    assert_eq!(
        normalize_time_slot("0800-0930"),
        Some(("8:00 AM".to_string(), "9:30 AM".to_string()))
    );
}

#[test]
fn test_normalize_time_slot_explicit_marker_wins() {
    assert_eq!(
        normalize_time_slot("7:00 am - 8:00 am"),
        Some(("7:00 AM".to_string(), "8:00 AM".to_string()))
    );
    assert_eq!(
        normalize_time_slot("12:00 PM - 1:30 PM"),
        Some(("12:00 PM".to_string(), "1:30 PM".to_string()))
    );
    // marker only binds to the token it follows
    assert_eq!(
        normalize_time_slot("11:00 a.m. - 1:00"),
        Some(("11:00 AM".to_string(), "1:00 PM".to_string()))
    );
}

#[test]
fn test_normalize_time_slot_rejects_out_of_range() {
    assert_eq!(normalize_time_slot("25:00-26:00"), None);
    assert_eq!(normalize_time_slot("8:75-9:30"), None);
    assert_eq!(normalize_time_slot("Monday"), None);
}

#[test]
fn test_time_to_minutes() {
    assert_eq!(time_to_minutes("8:00 AM"), Some(480));
    assert_eq!(time_to_minutes("12:30 PM"), Some(750));
    assert_eq!(time_to_minutes("12:00 AM"), Some(0));
    assert_eq!(time_to_minutes("1:00 PM"), Some(780));
    assert_eq!(time_to_minutes("13:15"), Some(795));
    assert_eq!(time_to_minutes("nonsense"), None);
}

#[test]
fn test_room_recognizers() {
    for r in ["Room 5", "Lab-10", "LR-101", "Auditorium", "Main Hall"] {
        assert!(is_room(r), "{} should be a room", r);
        assert!(is_room_label(r), "{} should be a room label", r);
    }
    assert!(!is_room("Calculus"));
    // broad recognizer accepts it, strict label test does not
    assert!(is_room("Software Engineering Lab"));
    assert!(!is_room_label("Software Engineering Lab"));
}

#[test]
fn test_normalize_room() {
    assert_eq!(normalize_room("Room 5"), "Room #05");
    assert_eq!(normalize_room("room no. 12"), "Room #12");
    assert_eq!(normalize_room("12"), "Room #12");
    assert_eq!(normalize_room("Lab 3"), "Lab-03");
    assert_eq!(normalize_room("Computer Lab-10"), "Lab-10");
    assert_eq!(normalize_room("auditorium"), "Auditorium");
    assert_eq!(normalize_room("Seminar Hall"), "Main Hall");
    assert_eq!(normalize_room(" LR-101 "), "LR-101");
}

#[test]
fn test_extract_sections() {
    assert_eq!(
        extract_sections("Calculus (BSSE-4C, bsai - 7a)"),
        vec!["BSSE-4C".to_string(), "BSAI-7A".to_string()]
    );
    assert_eq!(extract_sections("BSSE-4C BSSE-4C"), vec!["BSSE-4C".to_string()]);
    assert!(extract_sections("Data Structures").is_empty());
    assert!(has_section("x BSCS-2 y"));
}

#[test]
fn test_strip_sections() {
    assert_eq!(strip_sections("Calculus (BSSE-4C, BSAI-7A)"), "Calculus");
    assert_eq!(strip_sections("Calculus BSSE-4C"), "Calculus");
    assert_eq!(strip_sections("BSSE-4C, BSAI-7A"), "");
}

#[test]
fn test_is_skippable() {
    for s in ["", "   ", "---", "Lunch Break", "Prayer", "Ground Floor", "Time Table Fall 2024", "Page 2", "S.No", "Semester Spring"] {
        assert!(is_skippable(s), "{:?} should be skippable", s);
    }
    for s in ["Data Structures", "Monday", "08:00-09:30", "Room 5"] {
        assert!(!is_skippable(s), "{:?} should not be skippable", s);
    }
}

#[test]
fn test_is_teacher_line() {
    assert!(is_teacher_line("Mr. Ahmed Khan"));
    assert!(is_teacher_line("Dr Ali"));
    assert!(is_teacher_line("Prof. Sara"));
    assert!(is_teacher_line("Engr. Bilal"));
    assert!(is_teacher_line("Sir Usman"));
    assert!(!is_teacher_line("Data Structures"));
    assert!(!is_teacher_line("Drawing"));
}
