use std::time::Instant;

use actix_multipart::{Field, Multipart};
use actix_web::{web, HttpResponse};
use futures_util::stream::StreamExt;
use tracing::info;

use crate::algorithm::{extract_timetable, normalize_section_filter};
use crate::api_json::ParseResponse;
use crate::diagnostic::{diagnose, SAMPLE_CELLS, SAMPLE_CHARS};
use crate::error::{ExtractError, Result};
use crate::excel::{load_workbook_bytes, sample_cell_texts};
use crate::server::AppState;

const MAX_TEXT_FIELD_BYTES: usize = 256;

/// Multipart fields the parse endpoint understands.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub file: Option<Vec<u8>>,
    pub filename: Option<String>,
    pub section: Option<String>,
}

async fn read_field(field: &mut Field, limit: usize, what: &str) -> Result<Vec<u8>> {
    let mut buf: Vec<u8> = Vec::new();
    while let Some(chunk) = field.next().await {
        let bytes = chunk.map_err(|e| ExtractError::Upload(e.to_string()))?;
        if buf.len() + bytes.len() > limit {
            return Err(ExtractError::Upload(format!(
                "{} exceeds the {} byte limit",
                what, limit
            )));
        }
        buf.extend_from_slice(&bytes);
    }
    Ok(buf)
}

/// Reads `file` and `section`; other fields are drained and ignored.
pub async fn read_upload(payload: &mut Multipart, max_file_bytes: usize) -> Result<UploadForm> {
    let mut form = UploadForm::default();
    while let Some(field) = payload.next().await {
        let mut field = field.map_err(|e| ExtractError::Upload(e.to_string()))?;
        let name = field
            .content_disposition()
            .get_name()
            .unwrap_or("")
            .to_string();
        match name.as_str() {
            "file" => {
                form.filename = field.content_disposition().get_filename().map(str::to_string);
                form.file = Some(read_field(&mut field, max_file_bytes, "file").await?);
            }
            "section" => {
                let raw = read_field(&mut field, MAX_TEXT_FIELD_BYTES, "section").await?;
                form.section = Some(String::from_utf8_lossy(&raw).into_owned());
            }
            _ => {
                while let Some(chunk) = field.next().await {
                    chunk.map_err(|e| ExtractError::Upload(e.to_string()))?;
                }
            }
        }
    }
    Ok(form)
}

/// POST /api/parse
/// Multipart `file` (workbook) + optional `section`; returns the timetable per section.
pub async fn parse_handler(state: web::Data<AppState>, mut payload: Multipart) -> Result<HttpResponse> {
    let started = Instant::now();
    let form = read_upload(&mut payload, state.max_upload_bytes).await?;
    let bytes = form.file.ok_or(ExtractError::MissingFile)?;
    let filter = normalize_section_filter(form.section.as_deref());
    let filename = form.filename.unwrap_or_else(|| "<unnamed>".to_string());
    let want_samples = state.diagnostic.is_some();

    let permit = state
        .semaphore
        .clone()
        .acquire_owned()
        .await
        .map_err(|_| ExtractError::Internal("failed to acquire semaphore".to_string()))?;

    let job = tokio::task::spawn_blocking(move || -> Result<_> {
        let _permit = permit;
        let sheets = load_workbook_bytes(&bytes)?;
        let output = extract_timetable(&sheets, filter.as_deref());
        let samples = if want_samples {
            sample_cell_texts(&sheets, SAMPLE_CELLS, SAMPLE_CHARS)
        } else {
            Vec::new()
        };
        Ok((output, sheets.len(), samples))
    });
    let (output, sheet_count, samples) = job
        .await
        .map_err(|e| ExtractError::Internal(format!("task join error: {}", e)))??;

    let diagnostic = diagnose(
        state.diagnostic.clone(),
        samples,
        output.total_entries,
        output.available_sections.clone(),
    )
    .await;

    info!(
        "parse '{}': {} sheets, winner {}, {} entries in {} ms",
        filename,
        sheet_count,
        output
            .best_strategy
            .map(|s| s.name())
            .unwrap_or("none"),
        output.total_entries,
        started.elapsed().as_millis()
    );

    Ok(HttpResponse::Ok().json(ParseResponse::from_output(output, sheet_count, diagnostic)))
}
