// Helpers compartidos: hojas sintéticas y un generador mínimo de .xlsx con `zip`.
#![allow(dead_code)]

use std::io::{Cursor, Write};

use schedsift::excel::Sheet;

pub const ROUND_TRIP_CELL: &str = "Data Structures\nMr. Ahmed Khan\nBSSE-4C";

/// Two days, two slots, one merged 2x1 room cell (B2:B3).
pub fn round_trip_rows() -> Vec<Vec<&'static str>> {
    vec![
        vec!["", "", "08:00-09:30", "09:30-11:00"],
        vec!["Monday", "Room 5", ROUND_TRIP_CELL, ""],
        vec!["", "", "", ""],
        vec!["Tuesday", "Lab 10", "", ""],
    ]
}

pub fn round_trip_sheet() -> Sheet {
    Sheet::from_rows("Timetable", round_trip_rows()).with_merge((1, 1), (2, 1))
}

pub struct SheetSpec<'a> {
    pub name: &'a str,
    pub rows: Vec<Vec<&'a str>>,
    /// A1-style ranges, e.g. "B2:B3"
    pub merges: Vec<&'a str>,
}

pub fn col_letters(col: usize) -> String {
    let mut n = col + 1;
    let mut out = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        out.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    out.iter().rev().collect()
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\n', "&#10;")
}

fn sheet_xml(spec: &SheetSpec) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheetData>"#,
    );
    for (r, row) in spec.rows.iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .filter(|(_, text)| !text.is_empty())
            .map(|(c, text)| {
                format!(
                    r#"<c r="{}{}" t="inlineStr"><is><t xml:space="preserve">{}</t></is></c>"#,
                    col_letters(c),
                    r + 1,
                    xml_escape(text)
                )
            })
            .collect();
        if !cells.is_empty() {
            xml.push_str(&format!(r#"<row r="{}">{}</row>"#, r + 1, cells.concat()));
        }
    }
    xml.push_str("</sheetData>");
    if !spec.merges.is_empty() {
        xml.push_str(&format!(r#"<mergeCells count="{}">"#, spec.merges.len()));
        for m in &spec.merges {
            xml.push_str(&format!(r#"<mergeCell ref="{}"/>"#, m));
        }
        xml.push_str("</mergeCells>");
    }
    xml.push_str("</worksheet>");
    xml
}

/// Minimal OOXML workbook: content types, relationships, workbook and one part per sheet.
pub fn build_xlsx(sheets: &[SheetSpec]) -> Vec<u8> {
    let mut content_types = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
    );
    let mut workbook = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets>"#,
    );
    let mut rels = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    for (i, spec) in sheets.iter().enumerate() {
        let n = i + 1;
        content_types.push_str(&format!(
            r#"<Override PartName="/xl/worksheets/sheet{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
            n
        ));
        workbook.push_str(&format!(
            r#"<sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
            xml_escape(spec.name),
            n,
            n
        ));
        rels.push_str(&format!(
            r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
            n, n
        ));
    }
    content_types.push_str("</Types>");
    workbook.push_str("</sheets></workbook>");
    rels.push_str("</Relationships>");

    let root_rels = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

    let mut parts: Vec<(String, String)> = vec![
        ("[Content_Types].xml".to_string(), content_types),
        ("_rels/.rels".to_string(), root_rels.to_string()),
        ("xl/workbook.xml".to_string(), workbook),
        ("xl/_rels/workbook.xml.rels".to_string(), rels),
    ];
    for (i, spec) in sheets.iter().enumerate() {
        parts.push((format!("xl/worksheets/sheet{}.xml", i + 1), sheet_xml(spec)));
    }

    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        zip::write::FileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for (name, body) in parts {
        zip.start_file(name, options).unwrap();
        zip.write_all(body.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

pub fn round_trip_xlsx() -> Vec<u8> {
    build_xlsx(&[SheetSpec {
        name: "Timetable",
        rows: round_trip_rows(),
        merges: vec!["B2:B3"],
    }])
}
