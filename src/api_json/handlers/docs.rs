use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::models::StrategyKind;

pub async fn health_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({"status": "ok"}))
}

/// GET /help
pub async fn help_handler() -> impl Responder {
    let strategies: Vec<&str> = StrategyKind::ALL.iter().map(|s| s.name()).collect();
    let help = json!({
        "description": "Extracts per-section class schedules from an uploaded timetable workbook (xlsx, xls, xlsb, ods).",
        "endpoints": {
            "POST /api/parse": "multipart form: 'file' (required workbook), 'section' (optional code such as BSSE-4C, case-insensitive)",
            "GET /api/health": "liveness probe",
            "GET /help": "this document"
        },
        "strategies": strategies,
        "errors": {
            "400": "missing 'file' field or broken/oversized upload",
            "422": "the file is not a readable workbook",
            "500": "internal failure"
        },
        "example_response": {
            "sectionData": {
                "BSSE-4C": {
                    "entries": [{
                        "day": "Monday",
                        "startTime": "8:00 AM",
                        "endTime": "9:30 AM",
                        "time": "8:00 AM - 9:30 AM",
                        "subject": "Data Structures",
                        "teacher": "Mr. Ahmed Khan",
                        "room": "Room #05",
                        "section": "BSSE-4C",
                        "confidence": 1.0
                    }],
                    "grid": {
                        "8:00 AM - 9:30 AM": {
                            "Monday": {"subject": "Data Structures", "teacher": "Mr. Ahmed Khan", "room": "Room #05", "confidence": 1.0}
                        }
                    },
                    "days": ["Monday"],
                    "times": ["8:00 AM - 9:30 AM"]
                }
            },
            "availableSections": ["BSSE-4C"],
            "totalEntries": 1,
            "bestStrategy": "roomRows",
            "avgConfidence": 1.0,
            "sheetCount": 1,
            "diagnostic": null,
            "processedAt": "2026-01-01T00:00:00+00:00"
        }
    });
    HttpResponse::Ok().json(help)
}
