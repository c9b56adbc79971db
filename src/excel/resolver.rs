//! Merge-aware cell lookup.
//!
//! Every member of a merged region reads as the region's origin cell. The
//! merge map is built once per sheet and shared by every strategy.

use std::collections::HashMap;

use crate::excel::workbook::Sheet;

/// Narrow read capability over a sheet: text at (row, col), "" when absent.
pub trait CellLookup {
    fn resolve(&self, row: usize, col: usize) -> &str;
}

pub struct CellResolver<'a> {
    sheet: &'a Sheet,
    merge_map: HashMap<(usize, usize), (usize, usize)>,
}

impl<'a> CellResolver<'a> {
    pub fn new(sheet: &'a Sheet) -> Self {
        let mut merge_map = HashMap::new();
        // Regions are clamped to the valued extent so a sheet-wide merge stays cheap.
        let max_row = sheet.rows().saturating_sub(1);
        let max_col = sheet.cols().saturating_sub(1);
        for region in sheet.merged_regions() {
            if sheet.is_empty() || region.start.0 > max_row || region.start.1 > max_col {
                continue;
            }
            let end_row = region.end.0.min(max_row);
            let end_col = region.end.1.min(max_col);
            for r in region.start.0..=end_row {
                for c in region.start.1..=end_col {
                    if (r, c) != region.start {
                        merge_map.entry((r, c)).or_insert(region.start);
                    }
                }
            }
        }
        CellResolver { sheet, merge_map }
    }

    /// Origin address of a cell: itself unless it sits inside a merged region.
    pub fn origin(&self, row: usize, col: usize) -> (usize, usize) {
        self.merge_map.get(&(row, col)).copied().unwrap_or((row, col))
    }

    pub fn sheet(&self) -> &'a Sheet {
        self.sheet
    }

    pub fn rows(&self) -> usize {
        self.sheet.rows()
    }

    pub fn cols(&self) -> usize {
        self.sheet.cols()
    }

    /// Resolved texts of one row, `cols()` wide.
    pub fn row_texts(&self, row: usize) -> Vec<&'a str> {
        (0..self.cols()).map(|c| self.text_at(row, c)).collect()
    }

    fn text_at(&self, row: usize, col: usize) -> &'a str {
        let (r, c) = self.origin(row, col);
        self.sheet.raw(r, c)
    }
}

impl CellLookup for CellResolver<'_> {
    fn resolve(&self, row: usize, col: usize) -> &str {
        self.text_at(row, col)
    }
}
