//! Error taxonomy for the upload/extraction flow.
//!
//! Only structural failures are errors. An extraction that finds nothing is a
//! valid empty result, and diagnostic failures never reach this type.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractError>;

#[derive(Error, Debug)]
pub enum ExtractError {
    /// The multipart request carried no `file` field
    #[error("missing required multipart field 'file'")]
    MissingFile,

    /// The uploaded bytes could not be decoded as a workbook
    #[error("could not read workbook: {0}")]
    MalformedWorkbook(String),

    /// The workbook decoded but contains no readable sheet
    #[error("workbook contains no readable sheets")]
    EmptyWorkbook,

    /// The multipart stream failed or exceeded the size limit
    #[error("upload failed: {0}")]
    Upload(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ResponseError for ExtractError {
    fn status_code(&self) -> StatusCode {
        match self {
            ExtractError::MissingFile | ExtractError::Upload(_) => StatusCode::BAD_REQUEST,
            ExtractError::MalformedWorkbook(_) | ExtractError::EmptyWorkbook => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ExtractError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({"error": self.to_string()}))
    }
}

impl From<calamine::Error> for ExtractError {
    fn from(e: calamine::Error) -> Self {
        ExtractError::MalformedWorkbook(e.to_string())
    }
}
