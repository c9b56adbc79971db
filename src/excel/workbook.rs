//! In-memory sheet model and the calamine-backed workbook loader.

use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;

use calamine::{open_workbook_auto_from_rs, Dimensions, Reader, Sheets};
use tracing::{debug, warn};

use crate::error::{ExtractError, Result};
use crate::excel::io::cell_to_string;

/// Inclusive rectangle of merged cells; `start` is the origin holding the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergedRegion {
    pub start: (usize, usize),
    pub end: (usize, usize),
}

impl MergedRegion {
    pub fn new(start: (usize, usize), end: (usize, usize)) -> Self {
        MergedRegion {
            start: (start.0.min(end.0), start.1.min(end.1)),
            end: (start.0.max(end.0), start.1.max(end.1)),
        }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.start.0 && row <= self.end.0 && col >= self.start.1 && col <= self.end.1
    }
}

impl From<&Dimensions> for MergedRegion {
    fn from(d: &Dimensions) -> Self {
        MergedRegion::new(
            (d.start.0 as usize, d.start.1 as usize),
            (d.end.0 as usize, d.end.1 as usize),
        )
    }
}

/// One worksheet as sparse text cells (absolute 0-based coordinates) plus its merged regions.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub name: String,
    cells: HashMap<(usize, usize), String>,
    merged: Vec<MergedRegion>,
    rows: usize,
    cols: usize,
}

impl Sheet {
    pub fn new(name: &str) -> Self {
        Sheet {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Builds a sheet from row-major text; empty strings leave the cell unset.
    pub fn from_rows<R, S>(name: &str, rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sheet = Sheet::new(name);
        for (r, row) in rows.into_iter().enumerate() {
            for (c, text) in row.into_iter().enumerate() {
                sheet.set(r, c, text.as_ref());
            }
        }
        sheet
    }

    pub fn with_merge(mut self, start: (usize, usize), end: (usize, usize)) -> Self {
        self.add_merge(MergedRegion::new(start, end));
        self
    }

    pub fn add_merge(&mut self, region: MergedRegion) {
        self.merged.push(region);
    }

    pub fn set(&mut self, row: usize, col: usize, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            self.cells.remove(&(row, col));
            return;
        }
        self.cells.insert((row, col), text.to_string());
        self.rows = self.rows.max(row + 1);
        self.cols = self.cols.max(col + 1);
    }

    /// Raw value of a cell, ignoring merges.
    pub fn raw(&self, row: usize, col: usize) -> &str {
        self.cells.get(&(row, col)).map(String::as_str).unwrap_or("")
    }

    /// Number of rows spanned by valued cells.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn merged_regions(&self) -> &[MergedRegion] {
        &self.merged
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Valued cells in row-major order.
    pub fn cells(&self) -> Vec<(usize, usize, &str)> {
        let mut out: Vec<(usize, usize, &str)> = self
            .cells
            .iter()
            .map(|(&(r, c), v)| (r, c, v.as_str()))
            .collect();
        out.sort_by_key(|&(r, c, _)| (r, c));
        out
    }
}

/// Decodes an uploaded workbook (xlsx, xlsm, xlsb, xls, ods) into sheets.
pub fn load_workbook_bytes(bytes: &[u8]) -> Result<Vec<Sheet>> {
    if bytes.is_empty() {
        return Err(ExtractError::MalformedWorkbook("empty file".to_string()));
    }

    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;

    if let Sheets::Xlsx(xlsx) = &mut workbook {
        if let Err(e) = xlsx.load_merged_regions() {
            warn!("could not load merged regions: {}", e);
        }
    }

    let names = workbook.sheet_names().to_owned();
    if names.is_empty() {
        return Err(ExtractError::EmptyWorkbook);
    }

    let mut sheets: Vec<Sheet> = Vec::new();
    let mut last_error: Option<String> = None;

    for name in names.iter() {
        let range = match workbook.worksheet_range(name) {
            Ok(r) => r,
            Err(e) => {
                warn!("skipping sheet '{}': {}", name, e);
                last_error = Some(e.to_string());
                continue;
            }
        };

        let mut sheet = Sheet::new(name);
        let (start_row, start_col) = range
            .start()
            .map(|(r, c)| (r as usize, c as usize))
            .unwrap_or((0, 0));
        for (r, c, value) in range.used_cells() {
            let text = cell_to_string(value);
            if !text.is_empty() {
                sheet.set(start_row + r, start_col + c, &text);
            }
        }

        for region in merge_regions_for(&mut workbook, name) {
            sheet.add_merge(region);
        }

        debug!(
            "sheet '{}': {} rows x {} cols, {} merged regions",
            name,
            sheet.rows(),
            sheet.cols(),
            sheet.merged_regions().len()
        );
        sheets.push(sheet);
    }

    if sheets.is_empty() {
        return Err(match last_error {
            Some(e) => ExtractError::MalformedWorkbook(e),
            None => ExtractError::EmptyWorkbook,
        });
    }

    Ok(sheets)
}

/// Reads a workbook from disk (used by the offline CLI).
pub fn load_workbook_path<P: AsRef<Path>>(path: P) -> Result<Vec<Sheet>> {
    let bytes = std::fs::read(path.as_ref())
        .map_err(|e| ExtractError::MalformedWorkbook(format!("{}: {}", path.as_ref().display(), e)))?;
    load_workbook_bytes(&bytes)
}

fn merge_regions_for<RS>(workbook: &mut Sheets<RS>, name: &str) -> Vec<MergedRegion>
where
    RS: std::io::Read + std::io::Seek,
{
    let dims: Vec<Dimensions> = match workbook {
        Sheets::Xlsx(xlsx) => match xlsx.worksheet_merge_cells(name) {
            Some(Ok(d)) => d,
            Some(Err(e)) => {
                warn!("merged cells of '{}' unreadable: {}", name, e);
                Vec::new()
            }
            None => Vec::new(),
        },
        Sheets::Xls(xls) => xls.worksheet_merge_cells(name).unwrap_or_default(),
        _ => Vec::new(),
    };
    dims.iter().map(MergedRegion::from).collect()
}
