//! Módulo `excel`: lectura del workbook subido y acceso a celdas.
//!
//! Submódulos:
//! - `io`: conversión de valores de celda a texto
//! - `workbook`: modelo `Sheet` y carga vía calamine (incluye celdas combinadas)
//! - `resolver`: `CellResolver`, resuelve celdas combinadas a su origen

pub mod io;
pub mod resolver;
pub mod workbook;

pub use resolver::{CellLookup, CellResolver};
pub use workbook::{load_workbook_bytes, load_workbook_path, MergedRegion, Sheet};

/// Hasta `limit` textos no vacíos del workbook, en orden fila-columna, truncados a `max_chars`.
pub fn sample_cell_texts(sheets: &[Sheet], limit: usize, max_chars: usize) -> Vec<String> {
    let mut out = Vec::new();
    for sheet in sheets {
        for (_, _, text) in sheet.cells() {
            if out.len() >= limit {
                return out;
            }
            out.push(text.chars().take(max_chars).collect());
        }
    }
    out
}
